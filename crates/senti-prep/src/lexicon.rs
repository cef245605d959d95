use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{PrepError, Result};
use crate::segment::Segmenter;

/// SentiStrength word lists whose phrases must reach the scorer as single tokens.
pub const LEXICON_BASES: [&str; 5] = [
    "NegatingWordList",
    "QuestionWords",
    "BoosterWordList",
    "SentimentLookupTable",
    "NegationExceptionList",
];

/// Segmented lexicon files, in load order.
pub const LEXICON_FILES: [&str; 5] = [
    "NegatingWordListSeg.txt",
    "QuestionWordsSeg.txt",
    "BoosterWordListSeg.txt",
    "SentimentLookupTableSeg.txt",
    "NegationExceptionListSeg.txt",
];

pub const SEGMENTED_DIR: &str = "segmented";

pub fn segmented_dir(dict_dir: &Path) -> PathBuf {
    dict_dir.join(SEGMENTED_DIR)
}

/// Loads every phrase from `<dict_dir>/segmented/`, keeping file and line order.
pub fn load_phrases(dict_dir: &Path) -> Result<Vec<String>> {
    let seg_dir = segmented_dir(dict_dir);

    // No partial loads: every file must be present before anything is read.
    let paths: Vec<PathBuf> = LEXICON_FILES.iter().map(|name| seg_dir.join(name)).collect();
    if let Some(missing) = paths.iter().find(|p| !p.is_file()) {
        return Err(PrepError::LexiconNotFound(missing.clone()));
    }

    let mut phrases = Vec::new();
    for path in &paths {
        let before = phrases.len();
        read_phrases(path, &mut phrases)?;
        log::debug!("Loaded {} phrases from {:?}", phrases.len() - before, path);
    }

    log::info!("Loaded {} lexicon phrases", phrases.len());
    Ok(phrases)
}

fn read_phrases(path: &Path, phrases: &mut Vec<String>) -> Result<()> {
    let reader = BufReader::new(File::open(path)?);

    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| decode_error(path, e))?;
        let line = if i == 0 { line.trim_start_matches('\u{feff}') } else { &line[..] };

        let phrase = phrase_field(line).trim_end_matches(['\r', '\n']);
        if !phrase.is_empty() {
            phrases.push(phrase.to_string());
        }
    }
    Ok(())
}

fn decode_error(path: &Path, e: io::Error) -> PrepError {
    if e.kind() == io::ErrorKind::InvalidData {
        PrepError::LexiconDecode {
            path: path.to_path_buf(),
            source: e,
        }
    } else {
        PrepError::Io(e)
    }
}

/// The part of a lexicon line before its first tab, or the whole line.
pub fn phrase_field(line: &str) -> &str {
    match line.split_once('\t') {
        Some((phrase, _)) => phrase,
        None => line,
    }
}

/// Re-segments the phrase field of one raw lexicon line, keeping the other fields.
///
/// A trailing `*` wildcard stays attached to the last token.
pub fn segment_lexicon_line<S>(line: &str, segmenter: &S) -> Result<String>
where
    S: Segmenter + ?Sized,
{
    let (phrase, rest) = match line.split_once('\t') {
        Some((phrase, rest)) => (phrase, Some(rest)),
        None => (line, None),
    };

    let compact: String = phrase.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Ok(line.to_string());
    }

    let (stem, wildcard) = match compact.strip_suffix('*') {
        Some(stem) if !stem.is_empty() => (stem, "*"),
        _ => (compact.as_str(), ""),
    };

    let mut out = segmenter.segment(stem)?.join(" ");
    out.push_str(wildcard);
    if let Some(rest) = rest {
        out.push('\t');
        out.push_str(rest);
    }
    Ok(out)
}

/// Writes `<dict_dir>/segmented/<Base>Seg.txt` for each raw `<dict_dir>/<Base>.txt`.
pub fn segment_lexicon_dir<S>(dict_dir: &Path, segmenter: &S) -> Result<Vec<PathBuf>>
where
    S: Segmenter + ?Sized,
{
    let sources: Vec<PathBuf> = LEXICON_BASES
        .iter()
        .map(|base| dict_dir.join(format!("{base}.txt")))
        .collect();
    if let Some(missing) = sources.iter().find(|p| !p.is_file()) {
        return Err(PrepError::LexiconNotFound(missing.clone()));
    }

    let seg_dir = segmented_dir(dict_dir);
    fs::create_dir_all(&seg_dir)?;

    let mut written = Vec::new();
    for (base, source) in LEXICON_BASES.iter().zip(&sources) {
        let target = seg_dir.join(format!("{base}Seg.txt"));
        log::info!("Segmenting {:?} -> {:?}", source, target);

        let reader = BufReader::new(File::open(source)?);
        let mut writer = BufWriter::new(File::create(&target)?);
        let mut count = 0usize;
        for line in reader.lines() {
            let line = line.map_err(|e| decode_error(source, e))?;
            let line = line.trim_start_matches('\u{feff}').trim_end_matches('\r');
            writeln!(writer, "{}", segment_lexicon_line(line, segmenter)?)?;
            count += 1;
        }
        writer.flush()?;

        log::debug!("Wrote {} lines to {:?}", count, target);
        written.push(target);
    }
    Ok(written)
}
