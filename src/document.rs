use std::str::FromStr;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::load::parse_str;
use crate::options::ParseOptions;
use crate::{Error, Result};

/// Insertion-ordered collection of parsed properties. Duplicate names keep
/// their first position and take the last value, as Java's loader does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: Vec<(String, String)>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_str_with_options(input: &str, options: &ParseOptions) -> Result<Self> {
        let mut properties = Self::new();
        let mut handler = |name: &str, value: &str| -> Result<()> {
            properties.insert(name, value);
            Ok(())
        };
        parse_str(input, &mut handler, options)?;
        Ok(properties)
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((name.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromStr for Properties {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        Self::from_str_with_options(input, &ParseOptions::default())
    }
}

impl Serialize for Properties {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_names_take_last_value_first_position() {
        let properties =
            Properties::from_str_with_options("a=1\nb=2\na=3\n", &ParseOptions::default())
                .unwrap();
        let entries: Vec<_> = properties.iter().collect();
        assert_eq!(entries, vec![("a", "3"), ("b", "2")]);
        assert_eq!(properties.get("a"), Some("3"));
    }

    #[test]
    fn serializes_as_a_map() {
        let properties: Properties = "a.b=1\nc=two\n".parse().unwrap();
        let json = serde_json::to_string(&properties).unwrap();
        assert_eq!(json, r#"{"a.b":"1","c":"two"}"#);
    }
}
