use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};

use crate::error::Result;
use crate::phrase::{rewrite_sequential, PhraseSet, RewriteStrategy};
use crate::segment::Segmenter;

/// Name of the intermediate file handed to the scorer.
pub const MESSAGES_FILE: &str = "output_messages.txt";

/// How the intermediate file is opened for a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Keep earlier runs and add this batch after them.
    #[default]
    Append,
    /// Start from an empty file.
    Truncate,
}

/// Removes every whitespace character, including the ideographic space U+3000.
///
/// The segmenter has to see one unbroken run of text, otherwise the spaces
/// users type between words would produce tokens of their own.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Collapses every run of ASCII spaces into a single space.
pub fn collapse_spaces(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_space = false;
    for ch in text.chars() {
        if ch == ' ' {
            if prev_space {
                continue;
            }
            prev_space = true;
        } else {
            prev_space = false;
        }
        out.push(ch);
    }
    out
}

/// Turns raw messages into scorer-ready lines.
pub struct Normalizer<'s, S: Segmenter + ?Sized> {
    segmenter: &'s S,
    phrases: Vec<String>,
    index: PhraseSet,
    strategy: RewriteStrategy,
}

impl<'s, S: Segmenter + ?Sized> Normalizer<'s, S> {
    pub fn new(segmenter: &'s S, phrases: Vec<String>, strategy: RewriteStrategy) -> Result<Self> {
        let index = PhraseSet::new(&phrases)?;
        Ok(Self {
            segmenter,
            phrases,
            index,
            strategy,
        })
    }

    pub fn strategy(&self) -> RewriteStrategy {
        self.strategy
    }

    /// Normalizes one record. The returned line carries no terminator.
    pub fn normalize_record(&self, raw: &str) -> Result<String> {
        let compact = strip_whitespace(raw);
        let segmented = self.segmenter.segment(&compact)?.join(" ");

        let rewritten = match self.strategy {
            RewriteStrategy::Merged => self.index.rewrite(&segmented),
            RewriteStrategy::Sequential => rewrite_sequential(&segmented, &self.phrases),
        };
        Ok(collapse_spaces(&rewritten))
    }
}

/// The intermediate file, held open for the whole batch.
pub struct MessageWriter {
    path: PathBuf,
    writer: BufWriter<File>,
    lines: usize,
}

impl MessageWriter {
    pub fn open(path: &Path, mode: WriteMode) -> Result<Self> {
        let mut options = OpenOptions::new();
        options.create(true);
        match mode {
            WriteMode::Append => options.append(true),
            WriteMode::Truncate => options.write(true).truncate(true),
        };
        let file = options.open(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
            lines: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_line(&mut self, line: &str) -> Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.lines += 1;
        Ok(())
    }

    /// Flushes and closes the file, returning the number of lines written.
    pub fn finish(mut self) -> Result<usize> {
        self.writer.flush()?;
        Ok(self.lines)
    }
}

/// Normalizes `records` in order and appends one line per record to `path`.
pub fn normalize_to_file<S, R>(
    records: &[R],
    normalizer: &Normalizer<'_, S>,
    path: &Path,
    mode: WriteMode,
) -> Result<usize>
where
    S: Segmenter + ?Sized,
    R: AsRef<str>,
{
    let mut writer = MessageWriter::open(path, mode)?;
    log::info!("Writing {} records to {:?}", records.len(), writer.path());

    let pb = ProgressBar::new(records.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} messages")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    for record in records {
        let line = normalizer.normalize_record(record.as_ref())?;
        writer.write_line(&line)?;
        pb.inc(1);
    }

    let written = writer.finish()?;
    pb.finish_and_clear();
    log::info!("Normalized {} records", written);

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrepError;

    struct FailOn(&'static str);

    impl Segmenter for FailOn {
        fn segment(&self, text: &str) -> Result<Vec<String>> {
            if text.contains(self.0) {
                return Err(PrepError::Segmentation(format!("cannot segment {text:?}")));
            }
            Ok(vec![text.to_string()])
        }
    }

    fn by_char(text: &str) -> Vec<String> {
        text.chars().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_strip_whitespace() {
        assert_eq!(strip_whitespace("今日は　とても\tいい 天気\nです "), "今日はとてもいい天気です");
        assert_eq!(strip_whitespace(" \u{3000}\t"), "");
    }

    #[test]
    fn test_collapse_spaces_is_idempotent() {
        let once = collapse_spaces("a  b   c d    ");
        assert_eq!(once, "a b c d ");
        assert_eq!(collapse_spaces(&once), once);
    }

    #[test]
    fn test_empty_record() {
        let seg = |text: &str| by_char(text);
        let normalizer = Normalizer::new(&seg, vec!["い い".to_string()], RewriteStrategy::Merged).unwrap();
        assert_eq!(normalizer.normalize_record("").unwrap(), "");
        assert_eq!(normalizer.normalize_record(" 　 ").unwrap(), "");
    }

    #[test]
    fn test_both_strategies_despace_phrase() {
        let seg = |text: &str| by_char(text);
        let phrases = vec!["天 気".to_string()];
        for strategy in [RewriteStrategy::Merged, RewriteStrategy::Sequential] {
            let normalizer = Normalizer::new(&seg, phrases.clone(), strategy).unwrap();
            assert_eq!(normalizer.strategy(), strategy);
            assert_eq!(normalizer.normalize_record("いい 天気").unwrap(), "い い 天気");
        }
    }

    #[test]
    fn test_no_spaced_phrase_survives() {
        let seg = |text: &str| -> Vec<String> {
            match text {
                "とてもいい天気" => vec!["とても".into(), "いい".into(), "天気".into()],
                _ => by_char(text),
            }
        };
        let phrases = vec!["いい 天気".to_string(), "とても いい".to_string()];
        let normalizer = Normalizer::new(&seg, phrases.clone(), RewriteStrategy::default()).unwrap();

        for raw in ["とてもいい天気", "とても　いい 天気"] {
            let line = normalizer.normalize_record(raw).unwrap();
            assert_eq!(line, "とてもいい天気");
            for phrase in phrases.iter().filter(|p| p.contains(' ')) {
                assert!(!line.contains(phrase.as_str()), "{:?} still contains {:?}", line, phrase);
            }
        }
    }

    #[test]
    fn test_segmenter_failure_aborts_batch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MESSAGES_FILE);
        let segmenter = FailOn("壊");
        let normalizer = Normalizer::new(&segmenter, Vec::new(), RewriteStrategy::Merged).unwrap();

        let err = normalize_to_file(&["一", "壊れた", "三"], &normalizer, &path, WriteMode::Append).unwrap_err();
        assert!(matches!(err, PrepError::Segmentation(_)));
        // Lines before the failure are still flushed when the writer drops.
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "一\n");
    }

    #[test]
    fn test_writer_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MESSAGES_FILE);
        std::fs::write(&path, "old\n").unwrap();

        let mut writer = MessageWriter::open(&path, WriteMode::Append).unwrap();
        writer.write_line("").unwrap();
        writer.write_line("new").unwrap();
        assert_eq!(writer.finish().unwrap(), 2);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "old\n\nnew\n");
    }
}
