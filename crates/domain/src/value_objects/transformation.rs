//! Transformation parameters and their URL component form.
//!
//! The media service encodes a transformation as `k_v` components joined by
//! commas, e.g. `c_fill,h_300,w_400`. Clients send long names (`width`,
//! `crop`) or the short codes themselves; both resolve to the same component.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::DomainError;

/// Long parameter name -> short code.
const PARAMETERS: &[(&str, &str)] = &[
    ("angle", "a"),
    ("aspect_ratio", "ar"),
    ("background", "b"),
    ("border", "bo"),
    ("color", "co"),
    ("crop", "c"),
    ("default_image", "d"),
    ("density", "dn"),
    ("dpr", "dpr"),
    ("duration", "du"),
    ("effect", "e"),
    ("end_offset", "eo"),
    ("fetch_format", "f"),
    ("flags", "fl"),
    ("gravity", "g"),
    ("height", "h"),
    ("opacity", "o"),
    ("overlay", "l"),
    ("page", "pg"),
    ("quality", "q"),
    ("radius", "r"),
    ("start_offset", "so"),
    ("underlay", "u"),
    ("width", "w"),
    ("x", "x"),
    ("y", "y"),
    ("zoom", "z"),
];

/// Resolve a long name or short code to the short code.
fn short_code(key: &str) -> Option<&'static str> {
    let key = key.trim();
    PARAMETERS
        .iter()
        .find(|(long, short)| *long == key || *short == key)
        .map(|(_, short)| *short)
}

/// A validated set of transformation parameters keyed by short code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transformation {
    params: BTreeMap<&'static str, String>,
}

impl Transformation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a JSON object such as `{"width": 300, "crop": "fill"}`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for unknown keys, nested values,
    /// empty strings, or values containing `,` or `/`.
    pub fn from_json(object: &Map<String, Value>) -> Result<Self, DomainError> {
        let mut transformation = Self::new();
        for (key, value) in object {
            let rendered = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null => continue,
                _ => {
                    return Err(DomainError::validation(format!(
                        "Transformation parameter '{key}' must be a string, number or boolean"
                    )))
                }
            };
            transformation.set(key, rendered)?;
        }
        Ok(transformation)
    }

    /// Build from string pairs, e.g. the remaining query parameters of a request.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut transformation = Self::new();
        for (key, value) in pairs {
            transformation.set(key.as_ref(), value)?;
        }
        Ok(transformation)
    }

    /// Set one parameter, replacing any previous value.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<(), DomainError> {
        let code = short_code(key).ok_or_else(|| {
            DomainError::validation(format!("Unknown transformation parameter: {key}"))
        })?;
        let value = value.into();
        let value = value.trim();
        if value.is_empty() {
            return Err(DomainError::validation(format!(
                "Transformation parameter '{key}' cannot be empty"
            )));
        }
        if value.contains(',') || value.contains('/') {
            return Err(DomainError::validation(format!(
                "Transformation parameter '{key}' cannot contain ',' or '/'"
            )));
        }
        self.params.insert(code, value.to_string());
        Ok(())
    }

    /// Fill in parameters the caller did not set.
    pub fn with_defaults(mut self, defaults: &[(&'static str, &str)]) -> Self {
        for (code, value) in defaults {
            self.params
                .entry(*code)
                .or_insert_with(|| (*value).to_string());
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        short_code(key).and_then(|code| self.params.get(code).map(String::as_str))
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let components: Vec<String> = self
            .params
            .iter()
            .map(|(code, value)| format!("{code}_{value}"))
            .collect();
        f.write_str(&components.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn renders_sorted_short_codes() {
        let t = Transformation::from_json(&object(json!({
            "width": 400,
            "height": 300,
            "crop": "fill"
        })))
        .unwrap();
        assert_eq!(t.to_string(), "c_fill,h_300,w_400");
    }

    #[test]
    fn accepts_short_codes_and_long_names_alike() {
        let a = Transformation::from_pairs([("w", "10"), ("e", "sepia:50")]).unwrap();
        let b = Transformation::from_pairs([("width", "10"), ("effect", "sepia:50")]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "e_sepia:50,w_10");
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = Transformation::from_pairs([("sharpness", "3")]).unwrap_err();
        assert!(err.message().contains("sharpness"));
    }

    #[test]
    fn rejects_nested_and_unsafe_values() {
        assert!(Transformation::from_json(&object(json!({"width": [1]}))).is_err());
        assert!(Transformation::from_pairs([("crop", "fill,w_1")]).is_err());
        assert!(Transformation::from_pairs([("overlay", "a/b")]).is_err());
        assert!(Transformation::from_pairs([("crop", " ")]).is_err());
    }

    #[test]
    fn null_values_are_skipped() {
        let t = Transformation::from_json(&object(json!({"width": null, "radius": "max"}))).unwrap();
        assert_eq!(t.to_string(), "r_max");
    }

    #[test]
    fn defaults_do_not_override_caller() {
        let t = Transformation::from_pairs([("quality", "80")])
            .unwrap()
            .with_defaults(&[("q", "auto"), ("f", "auto")]);
        assert_eq!(t.get("quality"), Some("80"));
        assert_eq!(t.to_string(), "f_auto,q_80");
    }
}
