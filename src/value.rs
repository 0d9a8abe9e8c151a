//! Generic value model exchanged with the host over the method channel.
//! Mirrors the types the host's standard codec understands:
//! - Null, Bool
//! - Int32, Int64, Float64
//! - String
//! - Uint8List (raw bytes)
//! - List
//! - Map (string keys, insertion order kept)

use std::ops::Index;

#[derive(Debug, Clone, PartialEq)]
pub enum EncodableValue {
    Null,
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Float64(f64),
    String(String),
    Uint8List(Vec<u8>),
    List(Vec<EncodableValue>),
    Map(Vec<(String, EncodableValue)>),
}

impl EncodableValue {
    pub fn get(&self, key: &str) -> Option<&EncodableValue> {
        match self {
            EncodableValue::Map(map) => map.iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            EncodableValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            EncodableValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&Vec<EncodableValue>> {
        match self {
            EncodableValue::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            EncodableValue::Uint8List(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn is_map(&self) -> bool {
        matches!(self, EncodableValue::Map(_))
    }
}

impl<'a> Index<&'a str> for EncodableValue {
    type Output = EncodableValue;

    fn index(&self, index: &'a str) -> &Self::Output {
        self.get(index).unwrap_or(&EncodableValue::Null)
    }
}

impl From<bool> for EncodableValue {
    fn from(v: bool) -> Self { EncodableValue::Bool(v) }
}

impl From<i32> for EncodableValue {
    fn from(v: i32) -> Self { EncodableValue::Int32(v) }
}

impl From<i64> for EncodableValue {
    fn from(v: i64) -> Self { EncodableValue::Int64(v) }
}

impl From<&str> for EncodableValue {
    fn from(v: &str) -> Self { EncodableValue::String(v.to_string()) }
}

impl From<String> for EncodableValue {
    fn from(v: String) -> Self { EncodableValue::String(v) }
}

impl From<Vec<u8>> for EncodableValue {
    fn from(v: Vec<u8>) -> Self { EncodableValue::Uint8List(v) }
}

impl From<Vec<EncodableValue>> for EncodableValue {
    fn from(v: Vec<EncodableValue>) -> Self { EncodableValue::List(v) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> EncodableValue {
        EncodableValue::Map(vec![
            ("allowMultipleSelection".into(), true.into()),
            ("allowedExtensions".into(), vec![EncodableValue::from("*.pdf")].into()),
        ])
    }

    #[test]
    fn map_lookup() {
        let a = args();
        assert_eq!(a["allowMultipleSelection"].as_bool(), Some(true));
        assert_eq!(a["allowedExtensions"].as_list().map(|l| l.len()), Some(1));
        assert_eq!(a["withData"], EncodableValue::Null);
    }

    #[test]
    fn typed_accessors_reject_other_variants() {
        assert_eq!(EncodableValue::from("true").as_bool(), None);
        assert_eq!(EncodableValue::Int32(1).as_str(), None);
        assert!(EncodableValue::Null.get("x").is_none());
        assert!(!EncodableValue::List(vec![]).is_map());
    }
}
