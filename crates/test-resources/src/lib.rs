//! Fixtures shared by the integration tests and demos: a tiny vibrato
//! dictionary, lexicon folders, CSV input and a stand-in SentiStrength install.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use senti_prep::lexicon::{segmented_dir, LEXICON_FILES};
use senti_prep::VibratoSegmenter;
use vibrato::SystemDictionaryBuilder;

// Just enough vocabulary to segment "今日はとてもいい天気です".
const LEX_CSV: &str = "今日,0,0,1,kyou
は,0,0,1,wa
とても,0,0,1,totemo
いい,0,0,1,ii
天気,0,0,1,tenki
です,0,0,1,desu";
const MATRIX_DEF: &str = "1 1\n0 0 0";
const CHAR_DEF: &str = "DEFAULT 0 1 0";
const UNK_DEF: &str = "DEFAULT,0,0,100,*";

pub const SAMPLE_MESSAGE: &str = "今日は　とても　いい天気です";

/// Writes the tiny test dictionary as `system.dic.zst` under `dir`.
pub fn write_test_dictionary(dir: &Path) -> PathBuf {
    let dict = SystemDictionaryBuilder::from_readers(
        LEX_CSV.as_bytes(),
        MATRIX_DEF.as_bytes(),
        CHAR_DEF.as_bytes(),
        UNK_DEF.as_bytes(),
    )
    .expect("Failed to build test dictionary");

    let path = dir.join("system.dic.zst");
    let file = File::create(&path).expect("Failed to create dictionary file");
    let mut encoder = zstd::Encoder::new(file, 3).expect("Failed to create zstd encoder");
    dict.write(&mut encoder).expect("Failed to write dictionary");
    encoder.finish().expect("Failed to finish zstd stream");
    path
}

pub fn test_segmenter(dir: &Path) -> VibratoSegmenter {
    let path = write_test_dictionary(dir);
    VibratoSegmenter::from_zstd_path(&path).expect("Failed to load test dictionary")
}

/// Creates `<dict_dir>/segmented/` with the five lexicon files.
/// `contents[i]` goes into `LEXICON_FILES[i]`.
pub fn write_lexicons(dict_dir: &Path, contents: [&str; 5]) {
    let seg_dir = segmented_dir(dict_dir);
    fs::create_dir_all(&seg_dir).unwrap();
    for (name, content) in LEXICON_FILES.iter().zip(contents) {
        fs::write(seg_dir.join(name), content).unwrap();
    }
}

pub fn write_csv(path: &Path, messages: &[&str]) {
    let mut body = String::from("id,message\n");
    for (i, message) in messages.iter().enumerate() {
        body.push_str(&format!("{},\"{}\"\n", i, message.replace('"', "\"\"")));
    }
    fs::write(path, body).unwrap();
}

/// A stand-in SentiStrength install: an empty jar and its data folder.
pub fn write_fake_sentistrength(root: &Path) -> (PathBuf, PathBuf) {
    let jar = root.join("SentiStrengthJapanese.jar");
    fs::write(&jar, b"").unwrap();
    let data = root.join("JapaneseSentiData");
    fs::create_dir_all(&data).unwrap();
    (jar, data)
}
