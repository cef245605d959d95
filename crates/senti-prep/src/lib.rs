//! Prepares Japanese text for Japanese SentiStrength.
//!
//! Messages are stripped of whitespace, re-segmented, and every segmented
//! lexicon phrase is written without its inner spaces so that SentiStrength
//! sees it as one token. The normalized lines are appended to
//! `output_messages.txt` and SentiStrength is launched on that file.

pub mod config;
pub mod error;
pub mod input;
pub mod lexicon;
pub mod normalize;
pub mod phrase;
pub mod pipeline;
pub mod scorer;
pub mod segment;

pub use config::PipelineConfig;
pub use error::{PrepError, Result, Severity};
pub use normalize::{Normalizer, WriteMode};
pub use phrase::{PhraseSet, RewriteStrategy};
pub use pipeline::{run, run_with_segmenter, RunReport};
pub use scorer::{ScorerCommand, ScorerOptions, ScorerPaths};
pub use segment::{Segmenter, VibratoSegmenter};
