use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PrepError>;

/// What the pipeline does when an error of a given kind surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Stop the run immediately.
    Abort,
    /// Report and keep going.
    Warn,
}

/// Every failure the preparation pipeline can report.
#[derive(Debug, Error)]
pub enum PrepError {
    #[error("lexicon file not found at {0:?}")]
    LexiconNotFound(PathBuf),
    #[error("lexicon file {path:?} is not valid UTF-8: {source}")]
    LexiconDecode {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("input file not found at {0:?}")]
    InputNotFound(PathBuf),
    #[error("input file {0:?} must be a .csv file")]
    UnsupportedInput(PathBuf),
    #[error("input file {path:?} has no '{column}' column")]
    MissingColumn { path: PathBuf, column: String },
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("SentiStrength not found at {0:?}")]
    ProgramNotFound(PathBuf),
    #[error("SentiStrength language files folder not found at {0:?}")]
    ResourceDirNotFound(PathBuf),
    #[error("file to classify not found at {0:?}")]
    MessagesFileNotFound(PathBuf),
    #[error("failed to load segmenter dictionary {path:?}: {reason}")]
    SegmenterDictionary { path: PathBuf, reason: String },
    #[error("failed to index lexicon phrases: {0}")]
    PhraseIndex(#[from] fst::Error),
    #[error("segmentation failed: {0}")]
    Segmentation(String),
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("SentiStrength exited with {status}: {stderr}")]
    ScorerExit { status: String, stderr: String },
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl PrepError {
    /// Policy table: which kinds abort the run and which are only reported.
    pub fn severity(&self) -> Severity {
        match self {
            PrepError::ScorerExit { .. } => Severity::Warn,
            PrepError::LexiconNotFound(_)
            | PrepError::LexiconDecode { .. }
            | PrepError::InputNotFound(_)
            | PrepError::UnsupportedInput(_)
            | PrepError::MissingColumn { .. }
            | PrepError::Csv(_)
            | PrepError::ProgramNotFound(_)
            | PrepError::ResourceDirNotFound(_)
            | PrepError::MessagesFileNotFound(_)
            | PrepError::SegmenterDictionary { .. }
            | PrepError::PhraseIndex(_)
            | PrepError::Segmentation(_)
            | PrepError::Launch { .. }
            | PrepError::Io(_) => Severity::Abort,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Abort
    }
}
