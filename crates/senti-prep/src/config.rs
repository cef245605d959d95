use std::path::{Path, PathBuf};

use crate::normalize::{WriteMode, MESSAGES_FILE};
use crate::phrase::RewriteStrategy;
use crate::scorer::{ScorerOptions, ScorerPaths};

pub const DEFAULT_SEGMENTER_DICT: &str = "output/system.dic.zst";
pub const DEFAULT_JAVA: &str = "java";

/// Everything one preparation run needs.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// CSV file with a `message` column.
    pub input: PathBuf,
    /// Folder that receives `output_messages.txt`.
    pub output_dir: PathBuf,
    /// SentiStrength jar.
    pub program: PathBuf,
    /// SentiStrength language files, with the `segmented/` lexicons inside.
    pub resource_dir: PathBuf,
    /// zstd-compressed vibrato system dictionary used for segmentation.
    pub segmenter_dict: PathBuf,
    pub java: PathBuf,
    pub rewrite: RewriteStrategy,
    pub write_mode: WriteMode,
    /// Block until the scorer exits instead of leaving it running.
    pub wait: bool,
    pub scorer: ScorerOptions,
}

impl PipelineConfig {
    pub fn new(
        input: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        program: impl Into<PathBuf>,
        resource_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            program: program.into(),
            resource_dir: resource_dir.into(),
            segmenter_dict: PathBuf::from(DEFAULT_SEGMENTER_DICT),
            java: PathBuf::from(DEFAULT_JAVA),
            rewrite: RewriteStrategy::default(),
            write_mode: WriteMode::default(),
            wait: false,
            scorer: ScorerOptions::default(),
        }
    }

    pub fn messages_file(&self) -> PathBuf {
        self.output_dir.join(MESSAGES_FILE)
    }

    pub fn lexicon_dir(&self) -> &Path {
        &self.resource_dir
    }

    pub fn scorer_paths(&self) -> ScorerPaths {
        ScorerPaths {
            program: self.program.clone(),
            resource_dir: self.resource_dir.clone(),
            messages_file: self.messages_file(),
        }
    }
}
