use test_resources as common;

use std::fs;

use senti_prep::lexicon::{load_phrases, segment_lexicon_dir, segmented_dir, LEXICON_BASES, LEXICON_FILES};
use senti_prep::PrepError;

#[test]
fn test_load_phrases_in_file_order() {
    let dir = tempfile::tempdir().unwrap();
    common::write_lexicons(
        dir.path(),
        [
            "ない\t1\n",
            "なぜ\n",
            "とても\t2\r\nすごく\t1\r\n",
            "いい 天気\t3\n悪い 天気\t-3\nいい 天気\t3\n",
            "ない わけ\t\n",
        ],
    );

    let phrases = load_phrases(dir.path()).unwrap();
    assert_eq!(
        phrases,
        vec!["ない", "なぜ", "とても", "すごく", "いい 天気", "悪い 天気", "いい 天気", "ない わけ"]
    );
}

#[test]
fn test_blank_lines_and_bom_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    common::write_lexicons(dir.path(), ["\u{feff}ない\t1\n\n", "\t-1\n", "", "", ""]);

    assert_eq!(load_phrases(dir.path()).unwrap(), vec!["ない"]);
}

#[test]
fn test_missing_lexicon_file() {
    let dir = tempfile::tempdir().unwrap();
    common::write_lexicons(dir.path(), ["", "", "", "", ""]);
    fs::remove_file(segmented_dir(dir.path()).join(LEXICON_FILES[3])).unwrap();

    match load_phrases(dir.path()) {
        Err(PrepError::LexiconNotFound(path)) => assert!(path.ends_with(LEXICON_FILES[3])),
        other => panic!("expected LexiconNotFound, got {:?}", other),
    }
}

#[test]
fn test_invalid_utf8_lexicon() {
    let dir = tempfile::tempdir().unwrap();
    common::write_lexicons(dir.path(), ["", "", "", "", ""]);
    fs::write(segmented_dir(dir.path()).join(LEXICON_FILES[0]), [0x82, 0xa0, b'\t', b'1', b'\n']).unwrap();

    let err = load_phrases(dir.path()).unwrap_err();
    assert!(matches!(err, PrepError::LexiconDecode { .. }), "got {:?}", err);
}

#[test]
fn test_segment_lexicon_dir_feeds_loader() {
    let dir = tempfile::tempdir().unwrap();
    let segmenter = common::test_segmenter(dir.path());

    let raw = [
        "ない\t-1\n",
        "なぜ\n",
        "とても\t2\n",
        "いい天気\t3\r\n今日*\t1\n",
        "\n",
    ];
    for (base, content) in LEXICON_BASES.iter().zip(raw) {
        fs::write(dir.path().join(format!("{base}.txt")), content).unwrap();
    }

    let written = segment_lexicon_dir(dir.path(), &segmenter).unwrap();
    assert_eq!(written.len(), 5);

    let lookup = fs::read_to_string(segmented_dir(dir.path()).join("SentimentLookupTableSeg.txt")).unwrap();
    assert_eq!(lookup, "いい 天気\t3\n今日*\t1\n");

    let phrases = load_phrases(dir.path()).unwrap();
    assert!(phrases.contains(&"いい 天気".to_string()));
    assert!(phrases.contains(&"とても".to_string()));
}

#[test]
fn test_segment_lexicon_dir_needs_every_source() {
    let dir = tempfile::tempdir().unwrap();
    let by_char = |text: &str| text.chars().map(|c| c.to_string()).collect::<Vec<_>>();

    let err = segment_lexicon_dir(dir.path(), &by_char).unwrap_err();
    assert!(matches!(err, PrepError::LexiconNotFound(_)));
    assert!(!segmented_dir(dir.path()).exists());
}
