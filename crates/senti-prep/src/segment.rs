use std::fs::File;
use std::io::Read;
use std::path::Path;

use vibrato::{Dictionary, Tokenizer};
use zstd::Decoder;

use crate::error::{PrepError, Result};

/// Splits unspaced text into an ordered sequence of word-like tokens.
pub trait Segmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>>;
}

impl<F> Segmenter for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn segment(&self, text: &str) -> Result<Vec<String>> {
        Ok(self(text))
    }
}

/// Segmenter backed by a vibrato system dictionary.
pub struct VibratoSegmenter {
    tokenizer: Tokenizer,
}

impl VibratoSegmenter {
    pub fn new(dict: Dictionary) -> Self {
        Self {
            tokenizer: Tokenizer::new(dict),
        }
    }

    /// Loads a zstd-compressed system dictionary such as `system.dic.zst`.
    pub fn from_zstd_path(dict_path: &Path) -> Result<Self> {
        log::info!("Loading dictionary from {:?}", dict_path);

        let file = File::open(dict_path).map_err(|e| PrepError::SegmenterDictionary {
            path: dict_path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let mut decoder = Decoder::new(file)?;
        let mut dict_data = Vec::new();
        decoder.read_to_end(&mut dict_data)?;

        let dict = Dictionary::read(&dict_data[..]).map_err(|e| PrepError::SegmenterDictionary {
            path: dict_path.to_path_buf(),
            reason: e.to_string(),
        })?;

        log::info!("Dictionary loaded successfully");
        Ok(Self::new(dict))
    }
}

impl Segmenter for VibratoSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>> {
        let mut worker = self.tokenizer.new_worker();
        worker.reset_sentence(text);
        worker.tokenize();

        let mut tokens = Vec::with_capacity(worker.num_tokens());
        for i in 0..worker.num_tokens() {
            tokens.push(worker.token(i).surface().to_string());
        }
        Ok(tokens)
    }
}
