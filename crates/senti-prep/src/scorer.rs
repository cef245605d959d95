use std::ffi::OsString;
use std::path::{Path, PathBuf, MAIN_SEPARATOR, MAIN_SEPARATOR_STR};
use std::process::{Child, Command, ExitStatus, Stdio};

use crate::error::{PrepError, Result};

/// SentiStrength command-line options that shape negation and booster handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorerOptions {
    /// Negating words may follow the sentiment word they negate.
    pub negate_after_sentiment: bool,
    /// How many words after a sentiment word are searched for a negator.
    pub max_words_after_sentiment_to_negate: u32,
    /// Negating words may precede the sentiment word they negate.
    pub negate_before_sentiment: bool,
    /// How many following words a booster word can affect.
    pub max_words_after_boosters: u32,
}

impl Default for ScorerOptions {
    fn default() -> Self {
        Self {
            negate_after_sentiment: true,
            max_words_after_sentiment_to_negate: 1,
            negate_before_sentiment: false,
            max_words_after_boosters: 1,
        }
    }
}

impl ScorerOptions {
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if self.negate_after_sentiment {
            args.push("negatingWordsOccurAfterSentiment".to_string());
        }
        args.push("maxWordsAfterSentimentToNegate".to_string());
        args.push(self.max_words_after_sentiment_to_negate.to_string());
        if !self.negate_before_sentiment {
            args.push("negatingWordsDontOccurBeforeSentiment".to_string());
        }
        args.push("maxWordsAfterBoosters".to_string());
        args.push(self.max_words_after_boosters.to_string());
        args
    }
}

/// Locations the scorer needs: its jar, its language files and the text to classify.
#[derive(Debug, Clone)]
pub struct ScorerPaths {
    pub program: PathBuf,
    pub resource_dir: PathBuf,
    pub messages_file: PathBuf,
}

impl ScorerPaths {
    /// Checks the scorer's own files. Safe to call before any output exists.
    pub fn check_installation(&self) -> Result<()> {
        if !self.program.is_file() {
            return Err(PrepError::ProgramNotFound(self.program.clone()));
        }
        if !self.resource_dir.is_dir() {
            return Err(PrepError::ResourceDirNotFound(self.resource_dir.clone()));
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.check_installation()?;
        if !self.messages_file.is_file() {
            return Err(PrepError::MessagesFileNotFound(self.messages_file.clone()));
        }
        Ok(())
    }
}

/// Where SentiStrength writes its results: `<stem>_out.txt` beside the input.
pub fn predicted_output_path(messages_file: &Path) -> PathBuf {
    let mut name = messages_file.file_stem().unwrap_or_default().to_os_string();
    name.push("_out.txt");
    messages_file.with_file_name(name)
}

/// SentiStrength concatenates file names onto `sentidata`, so it must end in a separator.
fn sentidata_arg(dir: &Path) -> OsString {
    let mut arg = dir.as_os_str().to_os_string();
    let text = dir.to_string_lossy();
    if !text.ends_with('/') && !text.ends_with(MAIN_SEPARATOR) {
        arg.push(MAIN_SEPARATOR_STR);
    }
    arg
}

#[derive(Debug, Clone)]
pub struct ScorerCommand {
    pub java: PathBuf,
    pub paths: ScorerPaths,
    pub options: ScorerOptions,
}

impl ScorerCommand {
    pub fn new(java: impl Into<PathBuf>, paths: ScorerPaths, options: ScorerOptions) -> Self {
        Self {
            java: java.into(),
            paths,
            options,
        }
    }

    /// Arguments passed to the Java launcher.
    pub fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-jar".into(),
            self.paths.program.clone().into_os_string(),
            "sentidata".into(),
            sentidata_arg(&self.paths.resource_dir),
            "input".into(),
            self.paths.messages_file.clone().into_os_string(),
        ];
        args.extend(self.options.to_args().into_iter().map(OsString::from));
        args
    }

    /// Shell-style rendering for the log, paths quoted.
    pub fn command_line(&self) -> String {
        format!(
            "{} -jar \"{}\" sentidata \"{}\" input \"{}\" {}",
            self.java.display(),
            self.paths.program.display(),
            sentidata_arg(&self.paths.resource_dir).to_string_lossy(),
            self.paths.messages_file.display(),
            self.options.to_args().join(" ")
        )
    }

    pub fn output_path(&self) -> PathBuf {
        predicted_output_path(&self.paths.messages_file)
    }

    /// Starts the scorer with piped standard streams and returns without waiting.
    pub fn launch(&self) -> Result<ScorerRun> {
        let child = Command::new(&self.java)
            .args(self.args())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| PrepError::Launch {
                program: self.java.display().to_string(),
                source,
            })?;

        Ok(ScorerRun {
            child,
            command_line: self.command_line(),
            output_path: self.output_path(),
        })
    }
}

/// A running scorer process.
pub struct ScorerRun {
    child: Child,
    command_line: String,
    output_path: PathBuf,
}

#[derive(Debug)]
pub struct ScorerOutcome {
    pub status: ExitStatus,
    pub output_path: PathBuf,
    pub output_exists: bool,
}

impl ScorerRun {
    pub fn id(&self) -> u32 {
        self.child.id()
    }

    pub fn command_line(&self) -> &str {
        &self.command_line
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Leaves the process running on its own.
    pub fn detach(self) -> PathBuf {
        self.output_path
    }

    /// Blocks until the scorer exits and reports how it went.
    pub fn wait(self) -> Result<ScorerOutcome> {
        let output = self.child.wait_with_output()?;
        if !output.status.success() {
            return Err(PrepError::ScorerExit {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let output_exists = self.output_path.is_file();
        if !output_exists {
            log::warn!("SentiStrength finished but {:?} does not exist", self.output_path);
        }
        Ok(ScorerOutcome {
            status: output.status,
            output_path: self.output_path,
            output_exists,
        })
    }
}
