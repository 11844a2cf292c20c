use colored::Colorize;
use std::{fmt::Display, path::PathBuf};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("no simulator toolchain is available{0}")]
    ToolchainMissing(Hint),
    #[error("no component is loaded")]
    NoComponentLoaded,
    #[error("file {0:?} does not exist")]
    FileMissing(PathBuf),
    #[error("failed to load component {0:?}: {1}")]
    ComponentNotLoaded(PathBuf, LastError),
    #[error("component {0:?} has no parent directory to write the testbench into")]
    NoTestbenchPath(PathBuf),
    #[error("failed to write testbench {0:?}: {1}")]
    TestbenchNotWritten(PathBuf, LastError),
    #[error("failed to {0} {1:?}: {2}")]
    ExternalProcess(String, PathBuf, LastError),
    #[error("exited with error code: {0}")]
    ChildProcErrorCode(i32),
    #[error("terminated by signal")]
    ChildProcTerminated,
    #[error("failed to parse timeline file {0:?}: {1}")]
    TimelineFileInvalid(PathBuf, LastError),
    #[error("invalid timing: {0}{1}")]
    InvalidTiming(LastError, Hint),
    #[error("failed to parse configuration file {0:?}: {1}")]
    ConfigInvalid(PathBuf, LastError),
    #[error("unknown help topic {0:?}{1}")]
    UnknownTopic(String, Hint),
}

#[derive(Debug, PartialEq)]
pub struct LastError(pub String);

impl Display for LastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Error::lowerize(self.0.to_string()))
    }
}

impl Error {
    pub fn lowerize(s: String) -> String {
        // get the first word
        let first_word = match s.split_whitespace().next() {
            Some(w) => w,
            None => return s,
        };
        // retain punctuation if the first word is all-caps and longer than 1 character
        if first_word.len() > 1
            && first_word
                .chars()
                .find(|c| c.is_ascii_lowercase() == true)
                .is_none()
        {
            s.to_string()
        } else {
            s.char_indices()
                .map(|(i, c)| if i == 0 { c.to_ascii_lowercase() } else { c })
                .collect()
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Hint {
    InstallGhdl,
    TimingValues,
    TopicsList,
}

impl Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::InstallGhdl => {
                "install ghdl on the PATH or point to it with \"--ghdl\" or the WAVEBENCH_GHDL environment variable"
            }
            Self::TimingValues => {
                "timing values are whole positive nanoseconds spanning at most 10000 segments"
            }
            Self::TopicsList => "use `wavebench help` to see the list of topics",
        };
        write!(
            f,
            "\n\n{}: {}",
            "hint".green(),
            Error::lowerize(message.to_string())
        )
    }
}
