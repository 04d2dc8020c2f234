//
//  bitly-client
//  api/common/time.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Timestamp format used by the Bitly API.
//!
//! Bitly renders timestamps as `2012-12-18T18:14:53+0000`: RFC 3339 without
//! the colon in the UTC offset, which `chrono`'s RFC 3339 parser rejects.
//! [`JsonDate`] wraps a [`DateTime<Utc>`] and reads and writes that format.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// `strftime` pattern for Bitly timestamps.
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// A timestamp in Bitly's wire format.
///
/// # Example
///
/// ```rust
/// use bitly_client::api::common::JsonDate;
/// use chrono::{TimeZone, Utc};
///
/// let date: JsonDate = serde_json::from_str(r#""2012-12-18T18:14:53+0000""#).unwrap();
/// assert_eq!(date.0, Utc.with_ymd_and_hms(2012, 12, 18, 18, 14, 53).unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JsonDate(pub DateTime<Utc>);

impl JsonDate {
    /// Parses a timestamp in [`TIME_FORMAT`], normalizing it to UTC.
    pub fn parse(value: &str) -> Result<Self, chrono::ParseError> {
        DateTime::parse_from_str(value, TIME_FORMAT).map(|dt| Self(dt.with_timezone(&Utc)))
    }
}

impl From<DateTime<Utc>> for JsonDate {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl fmt::Display for JsonDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIME_FORMAT))
    }
}

impl Serialize for JsonDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for JsonDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_utc_offset() {
        let date: JsonDate = serde_json::from_str(r#""2012-12-18T18:14:53+0000""#).unwrap();
        assert_eq!(date.0, Utc.with_ymd_and_hms(2012, 12, 18, 18, 14, 53).unwrap());
        assert_eq!(
            serde_json::to_string(&date).unwrap(),
            r#""2012-12-18T18:14:53+0000""#
        );
    }

    #[test]
    fn test_parse_non_utc_offset_normalizes() {
        let date = JsonDate::parse("2018-01-20T19:37:52+0200").unwrap();
        assert_eq!(date.0, Utc.with_ymd_and_hms(2018, 1, 20, 17, 37, 52).unwrap());
    }

    #[test]
    fn test_rejects_rfc3339_z_suffix() {
        assert!(serde_json::from_str::<JsonDate>(r#""2012-12-18T18:14:53Z""#).is_err());
        assert!(serde_json::from_str::<JsonDate>(r#""yesterday""#).is_err());
    }
}
