//! 标识符类型
//!
//! 后端以整数返回主键，而浏览器本地存储只能保存字符串。
//! `UserId` / `MatchId` 把两种形态统一为规范化的字符串，
//! 因此 `7` 与 `"7"` 比较时相等。

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into().trim().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value.to_string())
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::new(value)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serialize_canonical(&self.0, serializer)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserializer.deserialize_any(IdVisitor).map(Self)
            }
        }
    };
}

record_id!(
    /// 用户主键
    UserId
);

record_id!(
    /// 配对（互相喜欢）记录主键
    MatchId
);

/// 纯数字的 id 以 JSON 数字写回，其余保持字符串
fn serialize_canonical<S: Serializer>(raw: &str, serializer: S) -> Result<S::Ok, S::Error> {
    match raw.parse::<u64>() {
        Ok(n) if n.to_string() == raw => serializer.serialize_u64(n),
        _ => serializer.serialize_str(raw),
    }
}

struct IdVisitor;

impl<'de> Visitor<'de> for IdVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an integer or string identifier")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
        if v.fract() == 0.0 && v >= 0.0 {
            Ok(format!("{}", v as u64))
        } else {
            Err(E::invalid_value(de::Unexpected::Float(v), &self))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_string_ids_compare_equal() {
        let from_number: UserId = serde_json::from_str("7").unwrap();
        let from_string: UserId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(from_number, UserId::from("7"));
    }

    #[test]
    fn numeric_ids_serialize_as_numbers() {
        assert_eq!(serde_json::to_string(&UserId::from(42)).unwrap(), "42");
        assert_eq!(serde_json::to_string(&MatchId::from("abc")).unwrap(), "\"abc\"");
        // 前导零无法无损地写成数字
        assert_eq!(serde_json::to_string(&UserId::from("007")).unwrap(), "\"007\"");
    }

    #[test]
    fn rejects_non_identifier_values() {
        assert!(serde_json::from_str::<UserId>("true").is_err());
        assert!(serde_json::from_str::<UserId>("1.5").is_err());
    }
}
