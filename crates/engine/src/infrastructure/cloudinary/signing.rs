//! Request signing for the Upload API and archive links.
//!
//! The signature covers every parameter except the credentials, the file and
//! the routing values: parameters are sorted by name, rendered as `k=v`
//! (list values comma joined), joined with `&`, suffixed with the API secret
//! and hashed. The hex digest is sent as `signature`.

use sha1::Sha1;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::Arc;

use crate::infrastructure::ports::ClockPort;

/// Parameters never included in the string to sign.
const UNSIGNED_PARAMS: &[&str] = &["api_key", "cloud_name", "file", "resource_type", "signature"];

/// Digest used for signatures; must match the account setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignatureAlgorithm {
    #[default]
    Sha1,
    Sha256,
}

impl FromStr for SignatureAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha1" | "sha-1" => Ok(Self::Sha1),
            "sha256" | "sha-256" => Ok(Self::Sha256),
            other => Err(format!("Unsupported signature algorithm: {other}")),
        }
    }
}

impl SignatureAlgorithm {
    fn hex_digest(&self, input: &[u8]) -> String {
        match self {
            Self::Sha1 => hex::encode(Sha1::digest(input)),
            Self::Sha256 => hex::encode(Sha256::digest(input)),
        }
    }
}

/// A parameter value; lists are sent as repeated `key[]` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Single(String),
    List(Vec<String>),
}

impl ParamValue {
    fn signing_form(&self) -> String {
        match self {
            Self::Single(v) => v.clone(),
            Self::List(vs) => vs.join(","),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            Self::Single(v) => v.is_empty(),
            Self::List(vs) => vs.is_empty(),
        }
    }
}

/// Sorted request parameters. Empty values are dropped on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &str, value: impl Into<String>) -> Self {
        let value = ParamValue::Single(value.into());
        if !value.is_empty() {
            self.0.insert(key.to_string(), value);
        }
        self
    }

    pub fn set_opt(self, key: &str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.set(key, v),
            None => self,
        }
    }

    pub fn set_list<I, S>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let value = ParamValue::List(values.into_iter().map(Into::into).collect());
        if !value.is_empty() {
            self.0.insert(key.to_string(), value);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    /// `a=1&b=x,y` over the signed subset, in key order.
    pub fn string_to_sign(&self) -> String {
        self.0
            .iter()
            .filter(|(k, _)| !UNSIGNED_PARAMS.contains(&k.as_str()))
            .map(|(k, v)| format!("{}={}", k, v.signing_form()))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Flattened pairs for a form body or query string.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.0.len());
        for (key, value) in &self.0 {
            match value {
                ParamValue::Single(v) => pairs.push((key.clone(), v.clone())),
                ParamValue::List(vs) => {
                    for v in vs {
                        pairs.push((format!("{key}[]"), v.clone()));
                    }
                }
            }
        }
        pairs
    }
}

/// Hex signature of `params` with `secret`.
pub fn sign(params: &Params, secret: &str, algorithm: SignatureAlgorithm) -> String {
    let payload = format!("{}{}", params.string_to_sign(), secret);
    algorithm.hex_digest(payload.as_bytes())
}

/// Adds timestamp, signature and API key to outgoing parameters.
#[derive(Clone)]
pub struct Signer {
    api_key: String,
    api_secret: String,
    algorithm: SignatureAlgorithm,
    clock: Arc<dyn ClockPort>,
}

impl Signer {
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        algorithm: SignatureAlgorithm,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            algorithm,
            clock,
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }

    pub fn sign(&self, params: Params) -> Params {
        let params = params.set("timestamp", self.clock.now().timestamp().to_string());
        let signature = sign(&params, &self.api_secret, self.algorithm);
        params
            .set("signature", signature)
            .set("api_key", self.api_key.clone())
    }
}
