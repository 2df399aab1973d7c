use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseDurationError {
    #[error("empty duration")]
    Empty,
    #[error("invalid duration {0:?}: expected a number before the unit")]
    MissingNumber(String),
    #[error("invalid duration {input:?}: unknown unit {unit:?}")]
    UnknownUnit { input: String, unit: String },
    #[error("invalid duration {0:?}: out of range")]
    Overflow(String),
}

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Parses a simple human-readable duration, returning a `Duration`
///
/// "3h10m" -> 11400 seconds, "50ms" -> 50 milliseconds, "1.5s" -> 1500
/// milliseconds. A trailing number without a unit is taken as seconds.
/// Fractions finer than a nanosecond round up, so only an all-zero input
/// yields `Duration::ZERO`.
pub fn parse_duration(duration: &str) -> Result<Duration, ParseDurationError> {
    let input = duration.trim();
    if input.is_empty() {
        return Err(ParseDurationError::Empty);
    }

    let missing_number = || ParseDurationError::MissingNumber(input.to_string());
    let overflow = || ParseDurationError::Overflow(input.to_string());

    let mut total_nanos: u128 = 0;
    let mut rest = input;

    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let (number, tail) = rest.split_at(number_len);

        let unit_len = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_len);

        let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
        if (whole.is_empty() && fraction.is_empty()) || fraction.contains('.') {
            return Err(missing_number());
        }

        let scale: u128 = match unit {
            "ns" => 1,
            "us" | "µs" => 1_000,
            "ms" => 1_000_000,
            "" | "s" => NANOS_PER_SEC,
            "m" => 60 * NANOS_PER_SEC,
            "h" => 3600 * NANOS_PER_SEC,
            "d" => 86400 * NANOS_PER_SEC,
            _ => {
                return Err(ParseDurationError::UnknownUnit {
                    input: input.to_string(),
                    unit: unit.to_string(),
                })
            }
        };

        let whole_nanos = digits(whole)
            .ok_or_else(overflow)?
            .checked_mul(scale)
            .ok_or_else(overflow)?;

        // ceil(fraction * scale / 10^len)
        let fraction_nanos = if fraction.is_empty() {
            0
        } else {
            let denominator = u32::try_from(fraction.len())
                .ok()
                .and_then(|len| 10u128.checked_pow(len))
                .ok_or_else(overflow)?;
            let numerator = digits(fraction)
                .ok_or_else(overflow)?
                .checked_mul(scale)
                .ok_or_else(overflow)?;
            numerator.div_ceil(denominator)
        };

        total_nanos = total_nanos
            .checked_add(whole_nanos)
            .and_then(|t| t.checked_add(fraction_nanos))
            .ok_or_else(overflow)?;
        rest = tail;
    }

    let secs = u64::try_from(total_nanos / NANOS_PER_SEC).map_err(|_| overflow())?;
    // Always below one billion, so it fits.
    let nanos = (total_nanos % NANOS_PER_SEC) as u32;

    Ok(Duration::new(secs, nanos))
}

/// Parses a run of ASCII digits; `None` if it doesn't fit a `u128`.
fn digits(s: &str) -> Option<u128> {
    if s.is_empty() {
        return Some(0);
    }
    s.parse().ok()
}
