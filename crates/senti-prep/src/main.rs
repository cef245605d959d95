use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use senti_prep::config::{DEFAULT_JAVA, DEFAULT_SEGMENTER_DICT};
use senti_prep::{PipelineConfig, RewriteStrategy, ScorerOptions, WriteMode};

#[derive(Parser, Debug)]
#[command(name = "senti-prep", about = "Normalizes Japanese messages and runs SentiStrength on them")]
struct Args {
    /// CSV file with a "message" column.
    input: PathBuf,

    /// Folder that receives output_messages.txt.
    output_dir: PathBuf,

    /// SentiStrength jar.
    sentistrength: PathBuf,

    /// SentiStrength language files folder (with segmented/ lexicons).
    sentidata: PathBuf,

    /// System dictionary for segmentation (in zstd).
    #[arg(long, env = "SENTI_PREP_DICT", default_value = DEFAULT_SEGMENTER_DICT)]
    segmenter_dict: PathBuf,

    /// Java launcher used to run the jar.
    #[arg(long, default_value = DEFAULT_JAVA)]
    java: PathBuf,

    /// How lexicon phrases are matched.
    #[arg(long, value_enum, default_value_t = RewriteStrategy::Merged)]
    rewrite: RewriteStrategy,

    /// Start a fresh output_messages.txt instead of appending to it.
    #[arg(long)]
    truncate: bool,

    /// Wait for SentiStrength to finish and report its exit status.
    #[arg(long)]
    wait: bool,

    /// Negating words never follow the sentiment word.
    #[arg(long)]
    no_negate_after_sentiment: bool,

    /// Words after a sentiment word searched for a negator.
    #[arg(long, default_value_t = 1)]
    max_words_after_sentiment_to_negate: u32,

    /// Negating words may precede the sentiment word.
    #[arg(long)]
    negate_before_sentiment: bool,

    /// Words after a booster that it affects.
    #[arg(long, default_value_t = 1)]
    max_words_after_boosters: u32,
}

impl Args {
    fn into_config(self) -> PipelineConfig {
        let mut config = PipelineConfig::new(self.input, self.output_dir, self.sentistrength, self.sentidata);
        config.segmenter_dict = self.segmenter_dict;
        config.java = self.java;
        config.rewrite = self.rewrite;
        config.write_mode = if self.truncate { WriteMode::Truncate } else { WriteMode::Append };
        config.wait = self.wait;
        config.scorer = ScorerOptions {
            negate_after_sentiment: !self.no_negate_after_sentiment,
            max_words_after_sentiment_to_negate: self.max_words_after_sentiment_to_negate,
            negate_before_sentiment: self.negate_before_sentiment,
            max_words_after_boosters: self.max_words_after_boosters,
        };
        config
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Args::parse().into_config();
    let report = senti_prep::run(&config)
        .with_context(|| format!("failed to prepare {:?}", config.input))?;

    println!("Started SentiStrength on file {} with command:", report.messages_file.display());
    println!("{}", report.command_line);
    println!("Wrote {} lines. SentiStrength pid: {}", report.lines_written, report.pid);
    match &report.outcome {
        Some(outcome) => println!("Finished ({})! The results are in:\n{}", outcome.status, report.output_path.display()),
        None => println!("Finished! The results will be in:\n{}", report.output_path.display()),
    }

    Ok(())
}
