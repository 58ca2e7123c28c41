//! Command verbs and parsed invocations

use crate::error::{Result, SwwError};
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::str::FromStr;

/// External programs sww is allowed to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Git,
    Gh,
}

impl Verb {
    /// Program name passed to the OS when spawning
    pub fn program(&self) -> &'static str {
        match self {
            Verb::Git => "git",
            Verb::Gh => "gh",
        }
    }
}

impl FromStr for Verb {
    type Err = SwwError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "git" => Ok(Verb::Git),
            "gh" => Ok(Verb::Gh),
            other => Err(SwwError::UnsupportedCommand(other.to_string())),
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// A `git`/`gh` command to replay across repositories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub all: bool,
    pub verb: Verb,
    pub args: Vec<OsString>,
}

/// What a single run of sww was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Batch(Invocation),
    ChangeDirectory { key: Option<String> },
}

impl Action {
    /// Build an action from the positional words following the flags.
    ///
    /// The first word is the command; the rest are passed through untouched.
    /// Only the command and the `cd` key have to be valid UTF-8.
    pub fn parse(all: bool, words: &[OsString]) -> Result<Self> {
        let (command, rest) = words.split_first().ok_or(SwwError::NoCommand)?;
        let command = command.to_str().ok_or_else(|| {
            SwwError::UnsupportedCommand(command.to_string_lossy().into_owned())
        })?;

        if command == "cd" {
            let key = rest.first().map(|key| utf8_key(key)).transpose()?;
            return Ok(Action::ChangeDirectory { key });
        }

        let verb = Verb::from_str(command)?;
        Ok(Action::Batch(Invocation {
            all,
            verb,
            args: rest.to_vec(),
        }))
    }
}

fn utf8_key(key: &OsStr) -> Result<String> {
    key.to_str()
        .map(str::to_string)
        .ok_or_else(|| SwwError::InvalidArgument(key.to_string_lossy().into_owned()))
}
