//! Two-level `major.minor` version identifiers.
//!
//! A version whose minor component is `0` is a main version; any other is a
//! branch version. Ordering is numeric on `(major, minor)`, so `10.0` sorts
//! after `9.0`. The identifier is stored and transmitted in its string form
//! and implements the sqlx traits for a PostgreSQL `TEXT` column.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use brewhub_core::error::AppError;

/// A parsed `major.minor` version identifier.
///
/// Each component is bounded to `u32`. A digit string that overflows it,
/// such as `99999999999.0`, is rejected as malformed rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VersionNumber {
    major: u32,
    minor: u32,
}

impl VersionNumber {
    /// The identifier every recipe lineage starts at.
    pub const INITIAL: Self = Self { major: 1, minor: 0 };

    /// Build an identifier from its components.
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Build the main version `{major}.0`.
    pub const fn main(major: u32) -> Self {
        Self { major, minor: 0 }
    }

    /// Major component.
    pub fn major(&self) -> u32 {
        self.major
    }

    /// Minor component (branch index).
    pub fn minor(&self) -> u32 {
        self.minor
    }

    /// Whether this is a main version (`minor == 0`).
    pub fn is_main(&self) -> bool {
        self.minor == 0
    }

    /// Whether this is a branch version (`minor != 0`).
    pub fn is_branch(&self) -> bool {
        !self.is_main()
    }

    /// Whether both identifiers belong to the same major lineage.
    pub fn same_major(&self, other: &VersionNumber) -> bool {
        self.major == other.major
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for VersionNumber {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            AppError::validation(format!(
                "Invalid version identifier '{s}': expected MAJOR.MINOR with non-negative integers"
            ))
        };

        let (major, minor) = s.split_once('.').ok_or_else(invalid)?;
        let component = |part: &str| -> Result<u32, AppError> {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse::<u32>().map_err(|_| invalid())
        };

        Ok(Self {
            major: component(major)?,
            minor: component(minor)?,
        })
    }
}

impl TryFrom<String> for VersionNumber {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VersionNumber> for String {
    fn from(version: VersionNumber) -> String {
        version.to_string()
    }
}

impl Serialize for VersionNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for VersionNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl sqlx::Type<sqlx::Postgres> for VersionNumber {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Postgres> for VersionNumber {
    fn encode_by_ref(
        &self,
        buf: &mut <sqlx::Postgres as sqlx::Database>::ArgumentBuffer<'q>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.to_string(), buf)
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for VersionNumber {
    fn decode(
        value: <sqlx::Postgres as sqlx::Database>::ValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let raw = <&str as sqlx::Decode<'r, sqlx::Postgres>>::decode(value)?;
        raw.parse::<VersionNumber>()
            .map_err(|e| Box::new(e) as sqlx::error::BoxDynError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn v(s: &str) -> VersionNumber {
        s.parse().expect("valid version")
    }

    #[test]
    fn test_parse_and_format() {
        let version = v("12.3");
        assert_eq!(version.major(), 12);
        assert_eq!(version.minor(), 3);
        assert_eq!(version.to_string(), "12.3");
        assert!(version.is_branch());
        assert!(v("4.0").is_main());
    }

    #[test]
    fn test_leading_zeros_normalize() {
        assert_eq!(v("01.00").to_string(), "1.0");
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in [
            "", "1", "1.", ".1", "1.2.3", "-1.0", "+1.0", "1.0 ", " 1.0", "a.b", "1,0",
            "99999999999.0",
        ] {
            assert!(bad.parse::<VersionNumber>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_numeric_ordering() {
        assert!(v("10.0") > v("9.0"));
        assert!(v("2.10") > v("2.9"));
        assert!(v("3.0") > v("2.99"));
        let mut versions = vec![v("10.0"), v("9.0"), v("1.1"), v("1.0")];
        versions.sort();
        let sorted: Vec<String> = versions.iter().map(ToString::to_string).collect();
        assert_eq!(sorted, ["1.0", "1.1", "9.0", "10.0"]);
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&v("2.1")).expect("serialize");
        assert_eq!(json, "\"2.1\"");
        let parsed: VersionNumber = serde_json::from_str("\"7.0\"").expect("deserialize");
        assert_eq!(parsed, VersionNumber::main(7));
        assert!(serde_json::from_str::<VersionNumber>("\"7\"").is_err());
    }

    proptest! {
        #[test]
        fn prop_display_parse_roundtrip(major in any::<u32>(), minor in any::<u32>()) {
            let version = VersionNumber::new(major, minor);
            prop_assert_eq!(version.to_string().parse::<VersionNumber>().ok(), Some(version));
        }

        #[test]
        fn prop_order_matches_tuple_order(a in any::<(u32, u32)>(), b in any::<(u32, u32)>()) {
            let (va, vb) = (VersionNumber::new(a.0, a.1), VersionNumber::new(b.0, b.1));
            prop_assert_eq!(va.cmp(&vb), a.cmp(&b));
        }
    }
}
