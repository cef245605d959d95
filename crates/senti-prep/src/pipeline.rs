use std::fs;
use std::path::PathBuf;

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::input::read_messages;
use crate::lexicon::load_phrases;
use crate::normalize::{normalize_to_file, Normalizer};
use crate::scorer::{ScorerCommand, ScorerOutcome};
use crate::segment::{Segmenter, VibratoSegmenter};

/// What a run produced.
#[derive(Debug)]
pub struct RunReport {
    pub lines_written: usize,
    pub messages_file: PathBuf,
    pub command_line: String,
    /// Process id of the launched scorer.
    pub pid: u32,
    /// Where SentiStrength is expected to write its scores.
    pub output_path: PathBuf,
    /// Present only when the run waited for the scorer and it succeeded.
    pub outcome: Option<ScorerOutcome>,
}

/// Runs the pipeline with the vibrato dictionary named in the config.
pub fn run(config: &PipelineConfig) -> Result<RunReport> {
    let segmenter = VibratoSegmenter::from_zstd_path(&config.segmenter_dict)?;
    run_with_segmenter(config, &segmenter)
}

pub fn run_with_segmenter<S>(config: &PipelineConfig, segmenter: &S) -> Result<RunReport>
where
    S: Segmenter + ?Sized,
{
    let paths = config.scorer_paths();

    // Nothing is written until the scorer install and the lexicons are known good.
    paths.check_installation()?;
    let phrases = load_phrases(config.lexicon_dir())?;
    let messages = read_messages(&config.input)?;

    if !config.output_dir.exists() {
        fs::create_dir_all(&config.output_dir)?;
    }

    let normalizer = Normalizer::new(segmenter, phrases, config.rewrite)?;
    let lines_written = normalize_to_file(&messages, &normalizer, &paths.messages_file, config.write_mode)?;

    paths.validate()?;

    let command = ScorerCommand::new(&config.java, paths, config.scorer.clone());
    log::info!("Running SentiStrength on file {:?}", command.paths.messages_file);
    let run = command.launch()?;
    let pid = run.id();
    log::debug!("SentiStrength started with pid {}", pid);
    let command_line = run.command_line().to_string();
    let messages_file = command.paths.messages_file.clone();

    let (output_path, outcome) = if config.wait {
        let output_path = run.output_path().to_path_buf();
        match run.wait() {
            Ok(outcome) => {
                log::info!("SentiStrength exited with {}", outcome.status);
                (output_path, Some(outcome))
            }
            Err(e) if !e.is_fatal() => {
                log::warn!("{}", e);
                (output_path, None)
            }
            Err(e) => return Err(e),
        }
    } else {
        (run.detach(), None)
    };

    Ok(RunReport {
        lines_written,
        messages_file,
        command_line,
        pid,
        output_path,
        outcome,
    })
}
