use anyhow::Result;
use senti_prep::lexicon::load_phrases;
use senti_prep::PhraseSet;
use std::env;
use std::path::Path;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: cargo run -p test-resources --example query_phrases -- <sentidata dir> <segmented text>");
        return Ok(());
    }

    let dict_dir = Path::new(&args[1]);
    let text = &args[2];

    let phrases = load_phrases(dict_dir)?;
    let set = PhraseSet::new(&phrases)?;
    println!("{} phrases loaded, {} unique", phrases.len(), set.len());

    let mut hits: Vec<&String> = phrases
        .iter()
        .filter(|p| p.contains(' ') && text.contains(p.as_str()))
        .collect();
    hits.sort();
    hits.dedup();

    println!("Found {} multi-token phrases in '{}'", hits.len(), text);
    for phrase in &hits {
        println!("  {:<20} -> {}", phrase, phrase.replace(' ', ""));
    }
    println!("Rewritten: {}", set.rewrite(text));

    Ok(())
}
