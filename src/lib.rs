//! Block until a file exists, stops existing, or goes stale.
//!
//! ```no_run
//! use std::time::Duration;
//! use waitforfile::{PollConfig, Wait};
//!
//! // Wait for foo.txt to stop being updated for at least 10 seconds,
//! // checking once a second.
//! let wait = Wait::new_file_freshness("foo.txt", Duration::from_secs(10));
//! PollConfig::new(wait, Duration::from_secs(1)).run()?;
//! # Ok::<(), waitforfile::WaitError>(())
//! ```

pub mod config;
pub mod duration;
pub mod poll;
pub mod wait;

pub use config::{Args, ConfigError};
pub use duration::{parse_duration, ParseDurationError};
pub use poll::{PollConfig, Polled, DEFAULT_INTERVAL};
pub use wait::{Wait, WaitError};
