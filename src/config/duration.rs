//! Duration parsing for configuration values
//!
//! Timeout and expiration keys accept either a bare number of seconds
//! (`30`) or a suffixed form (`500ms`, `30s`, `5m`, `2h`).

use std::time::Duration;

/// Parse a configuration duration string
///
/// A bare number is interpreted as seconds. Recognized suffixes are
/// `ns`, `us`, `ms`, `s`, `m`, and `h`. Fractional numbers are allowed
/// (`1.5s`, `0.5h`).
pub fn parse_duration(value: &str) -> Result<Duration, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("duration is empty".to_string());
    }

    let split_at = value
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(value.len());
    let (number, suffix) = value.split_at(split_at);

    let number: f64 = number
        .parse()
        .map_err(|_| format!("invalid number in duration '{}'", value))?;

    let seconds = match suffix {
        "ns" => number / 1_000_000_000.0,
        "us" => number / 1_000_000.0,
        "ms" => number / 1_000.0,
        "" | "s" => number,
        "m" => number * 60.0,
        "h" => number * 3600.0,
        _ => {
            return Err(format!(
                "unknown duration suffix '{}' in '{}'; expected ns, us, ms, s, m, or h",
                suffix, value
            ));
        }
    };

    Duration::try_from_secs_f64(seconds)
        .map_err(|_| format!("duration '{}' is out of range", value))
}

/// Render a duration in the shortest form `parse_duration` accepts
pub fn format_duration(value: Duration) -> String {
    let nanos = value.subsec_nanos();
    if nanos == 0 {
        format!("{}s", value.as_secs())
    } else if nanos % 1_000_000 == 0 {
        format!("{}ms", value.as_millis())
    } else if nanos % 1_000 == 0 {
        format!("{}us", value.as_micros())
    } else {
        format!("{}ns", value.as_nanos())
    }
}

/// Serde adapter storing durations as strings like `"30s"`
///
/// Deserialization also accepts plain integers (seconds), so TOML files
/// may write `read_timeout = 30` or `read_timeout = "500ms"`.
pub(crate) mod serde_duration {
    use std::fmt;
    use std::time::Duration;

    use serde::de::{Error, Visitor};
    use serde::{Deserializer, Serializer};

    use super::{format_duration, parse_duration};

    pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_duration(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DurationVisitor)
    }

    struct DurationVisitor;

    impl Visitor<'_> for DurationVisitor {
        type Value = Duration;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("seconds as an integer or a string like \"30s\"")
        }

        fn visit_u64<E: Error>(self, value: u64) -> Result<Duration, E> {
            Ok(Duration::from_secs(value))
        }

        fn visit_i64<E: Error>(self, value: i64) -> Result<Duration, E> {
            u64::try_from(value)
                .map(Duration::from_secs)
                .map_err(|_| E::custom("duration cannot be negative"))
        }

        fn visit_str<E: Error>(self, value: &str) -> Result<Duration, E> {
            parse_duration(value).map_err(E::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_parse_bare_seconds() {
        assert_eq!(parse_duration("30").unwrap(), Duration::from_secs(30));
        assert_eq!(parse_duration("0").unwrap(), Duration::from_secs(0));
    }

    #[test]
    fn test_parse_suffixed() {
        assert_eq!(parse_duration("500ms").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_duration("30s").unwrap(), Duration::from_secs(30));
        assert_eq!(parse_duration("5m").unwrap(), Duration::from_secs(300));
        assert_eq!(parse_duration("2h").unwrap(), Duration::from_secs(7200));
        assert_eq!(parse_duration("750us").unwrap(), Duration::from_micros(750));
    }

    #[test]
    fn test_parse_fractional() {
        assert_eq!(parse_duration("1.5s").unwrap(), Duration::from_millis(1500));
        assert_eq!(parse_duration("0.5h").unwrap(), Duration::from_secs(1800));
    }

    #[test]
    fn test_parse_whitespace_trimmed() {
        assert_eq!(parse_duration(" 30s ").unwrap(), Duration::from_secs(30));
    }

    #[test]
    fn test_parse_rejects_junk() {
        for input in ["", "   ", "abc", "10x", "-5", "5 m", "s", "1.2.3s"] {
            assert!(parse_duration(input).is_err(), "'{}' should be rejected", input);
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        // Larger than Duration can hold.
        for input in [
            "99999999999999999999h",
            "35000000000000000000m",
            "1000000000000000000000",
        ] {
            assert!(parse_duration(input).is_err(), "'{}' should be rejected", input);
        }
    }

    #[test]
    fn test_format_whole_seconds() {
        assert_eq!(format_duration(Duration::from_secs(30)), "30s");
        assert_eq!(format_duration(Duration::from_secs(0)), "0s");
    }

    #[test]
    fn test_format_subsecond() {
        assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1500ms");
        assert_eq!(format_duration(Duration::from_micros(750)), "750us");
        assert_eq!(format_duration(Duration::from_nanos(123)), "123ns");
    }

    proptest! {
        #[test]
        fn prop_seconds_round_trip(secs in 0u64..=86_400) {
            let duration = Duration::from_secs(secs);
            let parsed = parse_duration(&format_duration(duration)).unwrap();
            prop_assert_eq!(parsed, duration);
        }

        #[test]
        fn prop_millis_round_trip(millis in 1u64..=10_000_000) {
            let duration = Duration::from_millis(millis);
            let parsed = parse_duration(&format_duration(duration)).unwrap();
            prop_assert_eq!(parsed, duration);
        }

        #[test]
        fn prop_micros_round_trip(micros in 1u64..=10_000_000) {
            let duration = Duration::from_micros(micros);
            let parsed = parse_duration(&format_duration(duration)).unwrap();
            prop_assert_eq!(parsed, duration);
        }
    }
}
