use anyhow::{Context, Result};
use clap::Parser;
use senti_prep::config::DEFAULT_SEGMENTER_DICT;
use senti_prep::lexicon::segment_lexicon_dir;
use senti_prep::VibratoSegmenter;
use std::path::PathBuf;

/// Regenerates the segmented/ lexicons with the same segmenter senti-prep uses.
#[derive(Parser, Debug)]
#[command(name = "lexicon-seg", about = "Segments SentiStrength word lists")]
struct Args {
    /// SentiStrength language files folder holding the raw word lists.
    sentidata: PathBuf,

    /// System dictionary for segmentation (in zstd).
    #[arg(long, env = "SENTI_PREP_DICT", default_value = DEFAULT_SEGMENTER_DICT)]
    segmenter_dict: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let segmenter = VibratoSegmenter::from_zstd_path(&args.segmenter_dict)
        .with_context(|| format!("failed to load {:?}", args.segmenter_dict))?;

    println!("Segmenting word lists in {}...", args.sentidata.display());
    let written = segment_lexicon_dir(&args.sentidata, &segmenter)
        .with_context(|| format!("failed to segment lexicons in {:?}", args.sentidata))?;

    for path in &written {
        println!("Generated {}", path.display());
    }
    println!("Done. {} segmented lexicons written.", written.len());
    Ok(())
}
