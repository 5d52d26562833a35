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

use time::format_description::well_known::Rfc3339;

/// Well-known point in time representation for Google APIs.
///
/// # Examples
/// ```
/// # use gapic_wkt::{Timestamp, TimestampError};
/// let ts = Timestamp::try_from("2025-05-16T09:46:12.500Z")?;
/// assert_eq!(ts.seconds(), 1747388772);
/// assert_eq!(ts.nanos(), 500_000_000);
/// # Ok::<(), TimestampError>(())
/// ```
///
/// A Timestamp represents a point in time independent of any time zone or
/// local calendar, encoded as a count of seconds and fractions of seconds at
/// nanosecond resolution, counted from the Unix epoch.
///
/// # JSON Mapping
///
/// In JSON format, the Timestamp type is encoded as a string in the
/// [RFC 3339] format, for example "2017-01-15T01:30:15.01Z".
///
/// [RFC 3339]: https://www.ietf.org/rfc/rfc3339.txt
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
#[non_exhaustive]
pub struct Timestamp {
    seconds: i64,
    nanos: i32,
}

/// Represent failures in converting or creating [Timestamp] instances.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum TimestampError {
    /// One of the components (seconds and/or nanoseconds) was out of range.
    #[error("seconds and/or nanoseconds out of range")]
    OutOfRange,

    /// Cannot deserialize the timestamp.
    #[error("cannot deserialize the timestamp: {0}")]
    Deserialize(#[source] BoxedError),
}

type BoxedError = Box<dyn std::error::Error + Send + Sync>;
type Error = TimestampError;
const NS: i128 = 1_000_000_000;

impl Timestamp {
    const NS: i32 = 1_000_000_000;

    /// The minimum value for the `seconds` component. Corresponds to '0001-01-01T00:00:00Z'.
    pub const MIN_SECONDS: i64 = -62135596800;

    /// The maximum value for the `seconds` component. Corresponds to '9999-12-31T23:59:59Z'.
    pub const MAX_SECONDS: i64 = 253402300799;

    /// The minimum value for the `nanos` component.
    pub const MIN_NANOS: i32 = 0;

    /// The maximum value for the `nanos` component.
    pub const MAX_NANOS: i32 = Self::NS - 1;

    /// Creates a new [Timestamp] from the seconds and nanoseconds.
    ///
    /// If either value is out of range it returns an error.
    pub fn new(seconds: i64, nanos: i32) -> Result<Self, Error> {
        if !(Self::MIN_SECONDS..=Self::MAX_SECONDS).contains(&seconds) {
            return Err(Error::OutOfRange);
        }
        if !(Self::MIN_NANOS..=Self::MAX_NANOS).contains(&nanos) {
            return Err(Error::OutOfRange);
        }
        Ok(Self { seconds, nanos })
    }

    /// Create a normalized, clamped [Timestamp].
    ///
    /// # Examples
    /// ```
    /// # use gapic_wkt::Timestamp;
    /// let ts = Timestamp::clamp(1747388772, 2_000_000_000);
    /// assert_eq!(String::from(ts), "2025-05-16T09:46:14Z");
    /// ```
    ///
    /// The function adds the nanoseconds part (with carry) to the seconds
    /// part, with saturation.
    pub fn clamp(seconds: i64, nanos: i32) -> Self {
        let (seconds, nanos) = match nanos.cmp(&0_i32) {
            std::cmp::Ordering::Equal => (seconds, nanos),
            std::cmp::Ordering::Greater => (
                seconds.saturating_add((nanos / Self::NS) as i64),
                nanos % Self::NS,
            ),
            std::cmp::Ordering::Less if nanos % Self::NS == 0 => {
                (seconds.saturating_add((nanos / Self::NS) as i64), 0)
            }
            std::cmp::Ordering::Less => (
                seconds.saturating_sub(1 - (nanos / Self::NS) as i64),
                Self::NS + nanos % Self::NS,
            ),
        };
        if seconds < Self::MIN_SECONDS {
            return Self {
                seconds: Self::MIN_SECONDS,
                nanos: 0,
            };
        } else if seconds > Self::MAX_SECONDS {
            return Self {
                seconds: Self::MAX_SECONDS,
                nanos: 0,
            };
        }
        Self { seconds, nanos }
    }

    /// Represents seconds of UTC time since Unix epoch (1970-01-01T00:00:00Z).
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Non-negative fractions of a second at nanosecond resolution.
    pub fn nanos(&self) -> i32 {
        self.nanos
    }
}

impl crate::message::Message for Timestamp {
    fn typename() -> &'static str {
        "type.googleapis.com/google.protobuf.Timestamp"
    }

    fn to_map(&self) -> Result<crate::message::Map, crate::AnyError> {
        crate::message::to_json_other(self)
    }

    fn from_map(map: &crate::message::Map) -> Result<Self, crate::AnyError> {
        crate::message::from_other(map)
    }
}

/// Converts a [Timestamp] to its [String] representation.
impl From<Timestamp> for String {
    fn from(timestamp: Timestamp) -> Self {
        // Both components are validated on construction, so the conversion and
        // the formatting cannot fail.
        let ts = time::OffsetDateTime::from_unix_timestamp_nanos(
            timestamp.seconds as i128 * NS + timestamp.nanos as i128,
        )
        .expect("Timestamp values are always in the range supported by time::OffsetDateTime");
        ts.format(&Rfc3339)
            .expect("Timestamp values always format as RFC 3339")
    }
}

/// Converts the string representation of a timestamp to [Timestamp].
impl TryFrom<&str> for Timestamp {
    type Error = TimestampError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let odt = time::OffsetDateTime::parse(value, &Rfc3339)
            .map_err(|e| TimestampError::Deserialize(e.into()))?;
        let nanos_since_epoch = odt.unix_timestamp_nanos();
        let seconds = (nanos_since_epoch / NS) as i64;
        let nanos = (nanos_since_epoch % NS) as i32;
        if nanos < 0 {
            return Timestamp::new(seconds - 1, Self::NS + nanos);
        }
        Timestamp::new(seconds, nanos)
    }
}

/// Converts from [time::OffsetDateTime] to [Timestamp].
impl TryFrom<time::OffsetDateTime> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: time::OffsetDateTime) -> Result<Self, Self::Error> {
        Timestamp::new(value.unix_timestamp(), value.nanosecond() as i32)
    }
}

impl serde::ser::Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        String::from(*self).serialize(serializer)
    }
}

struct TimestampVisitor;

impl serde::de::Visitor<'_> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a string with a timestamp in RFC 3339 format")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Timestamp::try_from(value).map_err(E::custom)
    }
}

impl<'de> serde::de::Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(TimestampVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;
    use time::macros::datetime;
    type Result = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn unix_epoch() -> Result {
        let ts = Timestamp::default();
        assert_eq!(String::from(ts), "1970-01-01T00:00:00Z");
        Ok(())
    }

    #[test_case("0001-01-01T00:00:00Z" ; "min")]
    #[test_case("9999-12-31T23:59:59.999999999Z" ; "max")]
    #[test_case("2025-05-16T09:46:12.5Z" ; "fraction")]
    #[test_case("1969-12-31T23:59:59.5Z" ; "before epoch")]
    fn roundtrip(input: &str) -> Result {
        let ts = Timestamp::try_from(input)?;
        assert_eq!(String::from(ts), input);
        Ok(())
    }

    #[test]
    fn before_epoch_components() -> Result {
        let ts = Timestamp::try_from("1969-12-31T23:59:59.5Z")?;
        assert_eq!(ts.seconds(), -1);
        assert_eq!(ts.nanos(), 500_000_000);
        Ok(())
    }

    #[test_case(Timestamp::MIN_SECONDS - 1, 0 ; "seconds below range")]
    #[test_case(Timestamp::MAX_SECONDS + 1, 0 ; "seconds above range")]
    #[test_case(0, -1 ; "negative nanos")]
    #[test_case(0, 1_000_000_000 ; "nanos above range")]
    fn new_out_of_range(seconds: i64, nanos: i32) {
        let got = Timestamp::new(seconds, nanos);
        assert!(matches!(got, Err(TimestampError::OutOfRange)), "{got:?}");
    }

    #[test_case(0, 2_000_000_000, 2, 0 ; "carry")]
    #[test_case(10, -1, 9, 999_999_999 ; "borrow")]
    #[test_case(10, -2_000_000_000, 8, 0 ; "borrow whole seconds")]
    #[test_case(i64::MIN, 0, Timestamp::MIN_SECONDS, 0 ; "saturate min")]
    #[test_case(i64::MAX, 0, Timestamp::MAX_SECONDS, 0 ; "saturate max")]
    fn clamp(seconds: i64, nanos: i32, want_seconds: i64, want_nanos: i32) {
        let got = Timestamp::clamp(seconds, nanos);
        assert_eq!(got.seconds(), want_seconds);
        assert_eq!(got.nanos(), want_nanos);
    }

    #[test]
    fn from_offset_date_time() -> Result {
        let ts = Timestamp::try_from(datetime!(2025-05-16 09:46:12.5 UTC))?;
        assert_eq!(ts, Timestamp::new(1747388772, 500_000_000)?);
        Ok(())
    }

    #[test]
    fn deserialize_errors() {
        let got = serde_json::from_value::<Timestamp>(json!("not a timestamp"));
        assert!(got.is_err(), "{got:?}");
        let got = serde_json::from_value::<Timestamp>(json!(123));
        assert!(got.is_err(), "{got:?}");
    }
}
