//! Command-line configuration, captured once into a [PollConfig].

use crate::duration::parse_duration;
use crate::poll::PollConfig;
use crate::wait::Wait;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no file check specified")]
    NoCheck,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "waitforfile", version)]
#[command(
    about = "Check if a file exists (or meets other criteria) in a loop, blocking until it does"
)]
pub struct Args {
    /// File to check
    pub path: PathBuf,

    /// How long between file checks, as a duration (example '1s', '30s', '1m', etc.)
    #[arg(long, value_name = "DURATION", default_value = "1s", value_parser = parse_duration)]
    pub interval: Duration,

    /// Check if the file exists. This is the default behavior
    #[arg(
        long,
        value_name = "BOOL",
        default_value_t = true,
        default_missing_value = "true",
        num_args = 0..=1,
        require_equals = true,
        action = ArgAction::Set
    )]
    pub exists: bool,

    /// Check if the file does *not* exist
    #[arg(long)]
    pub notexists: bool,

    /// Check if the file has *not* been modified within the specified amount
    /// of time, as a duration (example '1s', '30s', '1m', etc.)
    #[arg(long, value_name = "DURATION", default_value = "0", value_parser = parse_duration)]
    pub fresh: Duration,

    /// Log each check to standard error
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Picks the one active check. A freshness age wins over `--notexists`,
    /// which wins over `--exists`.
    pub fn into_config(self) -> Result<PollConfig, ConfigError> {
        let wait = if !self.fresh.is_zero() {
            Wait::new_file_freshness(self.path, self.fresh)
        } else if self.notexists {
            Wait::new_file_not_exists(self.path)
        } else if self.exists {
            Wait::new_file_exists(self.path)
        } else {
            return Err(ConfigError::NoCheck);
        };

        Ok(PollConfig::new(wait, self.interval))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("waitforfile").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_to_exists_every_second() {
        let config = parse(&["foo.txt"]).into_config().unwrap();
        assert_eq!(config.wait(), &Wait::new_file_exists("foo.txt"));
        assert_eq!(config.interval(), Duration::from_secs(1));
    }

    #[test]
    fn interval_is_parsed() {
        let config = parse(&["--interval", "50ms", "foo.txt"]).into_config().unwrap();
        assert_eq!(config.interval(), Duration::from_millis(50));
    }

    #[test]
    fn notexists_beats_exists() {
        let config = parse(&["--notexists", "--exists", "foo.txt"])
            .into_config()
            .unwrap();
        assert_eq!(config.wait(), &Wait::new_file_not_exists("foo.txt"));
    }

    #[test]
    fn fresh_beats_notexists() {
        let config = parse(&["--fresh", "5s", "--notexists", "foo.txt"])
            .into_config()
            .unwrap();
        assert_eq!(
            config.wait(),
            &Wait::new_file_freshness("foo.txt", Duration::from_secs(5))
        );
    }

    #[test]
    fn sub_nanosecond_fresh_stays_active() {
        let config = parse(&["--fresh", "0.4ns", "foo.txt"]).into_config().unwrap();
        assert_eq!(
            config.wait(),
            &Wait::new_file_freshness("foo.txt", Duration::from_nanos(1))
        );
    }

    #[test]
    fn zero_fresh_is_inactive() {
        let config = parse(&["--fresh", "0s", "foo.txt"]).into_config().unwrap();
        assert_eq!(config.wait(), &Wait::new_file_exists("foo.txt"));
    }

    #[test]
    fn disabling_exists_leaves_no_check() {
        let err = parse(&["--exists=false", "foo.txt"]).into_config().unwrap_err();
        assert_eq!(err, ConfigError::NoCheck);
    }

    #[test]
    fn path_is_required() {
        assert!(Args::try_parse_from(["waitforfile"]).is_err());
        assert!(Args::try_parse_from(["waitforfile", "--notexists"]).is_err());
    }

    #[test]
    fn bad_durations_are_rejected() {
        assert!(Args::try_parse_from(["waitforfile", "--interval", "soon", "foo.txt"]).is_err());
        assert!(Args::try_parse_from(["waitforfile", "--fresh", "5w", "foo.txt"]).is_err());
    }
}
