use std::{
    fmt,
    io::{self, ErrorKind},
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};

use thiserror::Error;

/// A check could not be evaluated.
#[derive(Debug, Error)]
pub enum WaitError {
    #[error("cannot stat {}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A single check against the state of one filesystem path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Wait {
    /// Satisfied once `path` exists.
    Exists { path: PathBuf },

    /// Satisfied once `path` no longer exists.
    NotExists { path: PathBuf },

    /// Satisfied once `path` hasn't been modified for longer than `age`.
    ///
    /// Unlike the other two checks, a missing `path` is an error here: there
    /// is no modified time to compare against.
    Freshness { path: PathBuf, age: Duration },
}

impl Wait {
    /// Creates a new `Wait` that completes when the specified file exists.
    pub fn new_file_exists<T>(path: T) -> Self
    where
        T: Into<PathBuf>,
    {
        Self::Exists { path: path.into() }
    }

    /// Creates a new `Wait` that completes when the specified file doesn't
    /// exist.
    pub fn new_file_not_exists<T>(path: T) -> Self
    where
        T: Into<PathBuf>,
    {
        Self::NotExists { path: path.into() }
    }

    /// Creates a new `Wait` that completes when the specified file has not
    /// been updated (according to its [metadata](std::fs::Metadata)'s
    /// modified time) in more than `age`.
    pub fn new_file_freshness<T>(path: T, age: Duration) -> Self
    where
        T: Into<PathBuf>,
    {
        Self::Freshness {
            path: path.into(),
            age,
        }
    }

    /// The path this check looks at.
    pub fn path(&self) -> &Path {
        match self {
            Wait::Exists { path } | Wait::NotExists { path } | Wait::Freshness { path, .. } => {
                path
            }
        }
    }

    /// Swaps an existence check for its opposite. A freshness check has no
    /// negated form.
    pub fn negate(self) -> Option<Self> {
        match self {
            Wait::Exists { path } => Some(Wait::NotExists { path }),
            Wait::NotExists { path } => Some(Wait::Exists { path }),
            Wait::Freshness { .. } => None,
        }
    }

    /// Checks whether this condition is met right now.
    ///
    /// For the existence checks, "not found" is an ordinary answer; any other
    /// failure to stat the path (permissions, I/O, a file used as a directory)
    /// is returned as an error. The freshness check returns every stat
    /// failure, including "not found".
    pub fn satisfied(&self) -> Result<bool, WaitError> {
        match self {
            Wait::Exists { path } => exists(path),
            Wait::NotExists { path } => exists(path).map(|found| !found),
            Wait::Freshness { path, age } => {
                let modified = path
                    .metadata()
                    .and_then(|meta| meta.modified())
                    .map_err(|source| stat_error(path, source))?;

                // A modified time in the future counts as not yet stale.
                Ok(match SystemTime::now().duration_since(modified) {
                    Ok(elapsed) => elapsed > *age,
                    Err(_) => false,
                })
            }
        }
    }
}

impl fmt::Display for Wait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Wait::Exists { path } => write!(f, "{} exists", path.display()),
            Wait::NotExists { path } => write!(f, "{} does not exist", path.display()),
            Wait::Freshness { path, age } => write!(
                f,
                "{} not modified within {:?}",
                path.display(),
                age
            ),
        }
    }
}

fn exists(path: &Path) -> Result<bool, WaitError> {
    match path.metadata() {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(stat_error(path, e)),
    }
}

fn stat_error(path: &Path, source: io::Error) -> WaitError {
    WaitError::Stat {
        path: path.to_path_buf(),
        source,
    }
}
