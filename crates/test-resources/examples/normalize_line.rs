use std::path::{Path, PathBuf};

use senti_prep::config::DEFAULT_SEGMENTER_DICT;
use senti_prep::lexicon::load_phrases;
use senti_prep::normalize::strip_whitespace;
use senti_prep::{Normalizer, RewriteStrategy, Segmenter, VibratoSegmenter};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo run -p test-resources --example normalize_line -- <sentidata dir> [text]");
        return Ok(());
    }

    let text = args.get(2).map(String::as_str).unwrap_or("今日は　とても　いい天気です");
    // Same lookup as the senti-prep binary: the env override, then the default location.
    let dict = std::env::var_os("SENTI_PREP_DICT")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SEGMENTER_DICT));
    let segmenter = VibratoSegmenter::from_zstd_path(&dict)?;
    let phrases = load_phrases(Path::new(&args[1]))?;

    println!("Input:     {}", text);
    println!("Segmented: {}", segmenter.segment(&strip_whitespace(text))?.join(" "));
    for strategy in [RewriteStrategy::Merged, RewriteStrategy::Sequential] {
        let normalizer = Normalizer::new(&segmenter, phrases.clone(), strategy)?;
        println!("{:<10} {}", format!("{:?}:", strategy), normalizer.normalize_record(text)?);
    }

    Ok(())
}
