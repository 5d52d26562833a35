// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Well-known duration representation for Google APIs.
///
/// # Examples
/// ```
/// # use gapic_wkt::{Duration, DurationError};
/// let d = Duration::try_from("12.34s")?;
/// assert_eq!(d.seconds(), 12);
/// assert_eq!(d.nanos(), 340_000_000);
/// assert_eq!(d, Duration::new(12, 340_000_000)?);
/// # Ok::<(), DurationError>(())
/// ```
///
/// A Duration represents a signed, fixed-length span of time represented as a
/// count of seconds and fractions of seconds at nanosecond resolution. Range is
/// approximately +-10,000 years.
///
/// # JSON Mapping
///
/// In JSON format, the Duration type is encoded as a string rather than an
/// object, where the string ends in the suffix "s" (indicating seconds) and is
/// preceded by the number of seconds, with nanoseconds expressed as fractional
/// seconds. For example, 3 seconds with 1 microsecond is encoded as
/// "3.000001s".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
#[non_exhaustive]
pub struct Duration {
    seconds: i64,
    nanos: i32,
}

/// Represent failures in converting or creating [Duration] instances.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum DurationError {
    /// One of the components (seconds and/or nanoseconds) was out of range.
    #[error("seconds and/or nanoseconds out of range")]
    OutOfRange,

    /// The sign of the seconds component does not match the sign of the nanoseconds component.
    #[error("if seconds and nanoseconds are not zero, they must have the same sign")]
    MismatchedSigns,

    /// Cannot deserialize the duration.
    #[error("cannot deserialize the duration: {0}")]
    Deserialize(#[source] BoxedError),
}

type BoxedError = Box<dyn std::error::Error + Send + Sync>;
type Error = DurationError;

impl Duration {
    const NS: i32 = 1_000_000_000;

    /// The maximum value for the `seconds` component, approximately 10,000 years.
    pub const MAX_SECONDS: i64 = 315_576_000_000;

    /// The minimum value for the `seconds` component, approximately -10,000 years.
    pub const MIN_SECONDS: i64 = -Self::MAX_SECONDS;

    /// The maximum value for the `nanos` component.
    pub const MAX_NANOS: i32 = Self::NS - 1;

    /// The minimum value for the `nanos` component.
    pub const MIN_NANOS: i32 = -Self::MAX_NANOS;

    /// Creates a [Duration] from the seconds and nanoseconds component.
    ///
    /// Returns an error if either component is out of range or their signs do
    /// not match. Consider using [clamp()][Duration::clamp] to add nanoseconds
    /// to seconds with carry.
    pub fn new(seconds: i64, nanos: i32) -> Result<Self, Error> {
        if !(Self::MIN_SECONDS..=Self::MAX_SECONDS).contains(&seconds) {
            return Err(Error::OutOfRange);
        }
        if !(Self::MIN_NANOS..=Self::MAX_NANOS).contains(&nanos) {
            return Err(Error::OutOfRange);
        }
        if (seconds != 0 && nanos != 0) && ((seconds < 0) != (nanos < 0)) {
            return Err(Error::MismatchedSigns);
        }
        Ok(Self { seconds, nanos })
    }

    /// Create a normalized, clamped [Duration].
    ///
    /// # Examples
    /// ```
    /// # use gapic_wkt::Duration;
    /// let d = Duration::clamp(10, 2_000_000_000);
    /// assert_eq!(String::from(d), "12s");
    /// ```
    ///
    /// The function effectively adds the nanoseconds part (with carry) to the
    /// seconds part, with saturation.
    pub fn clamp(seconds: i64, nanos: i32) -> Self {
        let mut seconds = seconds.saturating_add((nanos / Self::NS) as i64);
        let mut nanos = nanos % Self::NS;
        if seconds > 0 && nanos < 0 {
            seconds = seconds.saturating_sub(1);
            nanos += Self::NS;
        } else if seconds < 0 && nanos > 0 {
            seconds = seconds.saturating_add(1);
            nanos = -(Self::NS - nanos);
        }
        if seconds > Self::MAX_SECONDS {
            return Self {
                seconds: Self::MAX_SECONDS,
                nanos: 0,
            };
        }
        if seconds < Self::MIN_SECONDS {
            return Self {
                seconds: Self::MIN_SECONDS,
                nanos: 0,
            };
        }
        Self { seconds, nanos }
    }

    /// Returns the seconds part of the duration.
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Returns the sub-second part of the duration.
    pub fn nanos(&self) -> i32 {
        self.nanos
    }
}

impl crate::message::Message for Duration {
    fn typename() -> &'static str {
        "type.googleapis.com/google.protobuf.Duration"
    }

    fn to_map(&self) -> Result<crate::message::Map, crate::AnyError> {
        crate::message::to_json_other(self)
    }

    fn from_map(map: &crate::message::Map) -> Result<Self, crate::AnyError> {
        crate::message::from_other(map)
    }
}

/// Converts a [Duration] to its [String] representation.
impl From<Duration> for String {
    fn from(duration: Duration) -> String {
        let sign = if duration.seconds < 0 || duration.nanos < 0 {
            "-"
        } else {
            ""
        };
        if duration.nanos == 0 {
            return format!("{sign}{}s", duration.seconds.abs());
        }
        let ns = format!("{:09}", duration.nanos.abs());
        format!(
            "{sign}{}.{}s",
            duration.seconds.abs(),
            ns.trim_end_matches('0')
        )
    }
}

/// Converts the string representation of a duration to [Duration].
impl TryFrom<&str> for Duration {
    type Error = DurationError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let digits = value
            .strip_suffix('s')
            .ok_or_else(|| DurationError::Deserialize("missing trailing 's'".into()))?;
        let (sign, digits) = match digits.strip_prefix('-') {
            Some(stripped) => (-1, stripped),
            None => (1, digits),
        };
        let mut split = digits.splitn(2, '.');
        let (seconds, nanos) = (split.next(), split.next());
        let seconds = seconds
            .map(str::parse::<i64>)
            .transpose()
            .map_err(|e| DurationError::Deserialize(e.into()))?
            .unwrap_or(0);
        let nanos = nanos
            .map(|s| {
                if s.len() > 9 {
                    return Err(DurationError::OutOfRange);
                }
                format!("{s:0<9}")
                    .parse::<i32>()
                    .map_err(|e| DurationError::Deserialize(e.into()))
            })
            .transpose()?
            .unwrap_or(0);

        Duration::new(sign * seconds, sign as i32 * nanos)
    }
}

/// Converts a [std::time::Duration] to a [Duration], if it is in range.
impl TryFrom<std::time::Duration> for Duration {
    type Error = DurationError;
    fn try_from(value: std::time::Duration) -> Result<Self, Self::Error> {
        let seconds = i64::try_from(value.as_secs()).map_err(|_| DurationError::OutOfRange)?;
        Duration::new(seconds, value.subsec_nanos() as i32)
    }
}

/// Converts a [Duration] to a [std::time::Duration], if it is not negative.
impl TryFrom<Duration> for std::time::Duration {
    type Error = DurationError;
    fn try_from(value: Duration) -> Result<Self, Self::Error> {
        if value.seconds < 0 || value.nanos < 0 {
            return Err(DurationError::OutOfRange);
        }
        Ok(std::time::Duration::new(
            value.seconds as u64,
            value.nanos as u32,
        ))
    }
}

impl serde::ser::Serialize for Duration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let formatted = String::from(*self);
        formatted.serialize(serializer)
    }
}

struct DurationVisitor;

impl serde::de::Visitor<'_> for DurationVisitor {
    type Value = Duration;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a string with a duration in Google format ([sign]{seconds}.{nanos}s)")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Duration::try_from(value).map_err(E::custom)
    }
}

impl<'de> serde::de::Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(DurationVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;
    type Result = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test_case(0, 0, "0s" ; "zero")]
    #[test_case(3, 0, "3s" ; "whole seconds")]
    #[test_case(3, 1, "3.000000001s" ; "nanos")]
    #[test_case(3, 1_000, "3.000001s" ; "micros")]
    #[test_case(-12, -340_000_000, "-12.34s" ; "negative")]
    #[test_case(0, -500_000_000, "-0.5s" ; "negative sub-second")]
    fn format(seconds: i64, nanos: i32, want: &str) -> Result {
        let d = Duration::new(seconds, nanos)?;
        assert_eq!(String::from(d), want);
        assert_eq!(Duration::try_from(want)?, d);
        Ok(())
    }

    #[test_case(Duration::MAX_SECONDS + 1, 0 ; "seconds above range")]
    #[test_case(Duration::MIN_SECONDS - 1, 0 ; "seconds below range")]
    #[test_case(0, Duration::MAX_NANOS + 1 ; "nanos above range")]
    #[test_case(0, Duration::MIN_NANOS - 1 ; "nanos below range")]
    fn new_out_of_range(seconds: i64, nanos: i32) {
        let got = Duration::new(seconds, nanos);
        assert!(matches!(got, Err(DurationError::OutOfRange)), "{got:?}");
    }

    #[test]
    fn mismatched_signs() {
        let got = Duration::new(1, -1);
        assert!(matches!(got, Err(DurationError::MismatchedSigns)), "{got:?}");
    }

    #[test_case(10, 2_000_000_000, 12, 0 ; "carry")]
    #[test_case(1, -500_000_000, 0, 500_000_000 ; "borrow")]
    #[test_case(-1, 500_000_000, 0, -500_000_000 ; "negative borrow")]
    #[test_case(i64::MAX, 0, Duration::MAX_SECONDS, 0 ; "saturate max")]
    #[test_case(i64::MIN, 0, Duration::MIN_SECONDS, 0 ; "saturate min")]
    fn clamp(seconds: i64, nanos: i32, want_seconds: i64, want_nanos: i32) {
        let got = Duration::clamp(seconds, nanos);
        assert_eq!(got.seconds(), want_seconds);
        assert_eq!(got.nanos(), want_nanos);
    }

    #[test_case("" ; "empty")]
    #[test_case("1" ; "missing suffix")]
    #[test_case("abcs" ; "not a number")]
    #[test_case("1.0000000001s" ; "too many nanos")]
    fn parse_errors(input: &str) {
        let got = Duration::try_from(input);
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn std_conversions() -> Result {
        let d = Duration::try_from(std::time::Duration::from_millis(1_500))?;
        assert_eq!(d, Duration::new(1, 500_000_000)?);
        let got = std::time::Duration::try_from(d)?;
        assert_eq!(got, std::time::Duration::from_millis(1_500));
        let negative = std::time::Duration::try_from(Duration::clamp(-1, 0));
        assert!(negative.is_err(), "{negative:?}");
        Ok(())
    }

    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct Helper {
        pub time_to_live: Duration,
    }

    #[test]
    fn in_struct() -> Result {
        let input = Helper {
            time_to_live: Duration::new(12, 345_678_900)?,
        };
        let json = serde_json::to_value(&input)?;
        assert_eq!(json, json!({"timeToLive": "12.3456789s"}));
        let got = serde_json::from_value::<Helper>(json)?;
        assert_eq!(got, input);
        Ok(())
    }
}
