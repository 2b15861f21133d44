use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Alias {
    pub keyword: String,
    pub target: String,
}

/// On-disk shape of `<root>/.airules/aliases.json`.
#[derive(Debug, Deserialize, Default)]
pub struct AliasFile {
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

/// A rule document resolved from a query.
#[derive(Debug, Serialize, Clone)]
pub struct Document {
    pub query: String,
    /// Slash-separated path relative to the root.
    pub path: String,
    /// Text rendering for JSON output; invalid UTF-8 is replaced.
    pub content: String,
    /// File contents exactly as stored.
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

#[derive(Debug, Serialize)]
pub struct UsageReport {
    pub aliases: Vec<Alias>,
}

#[derive(Debug, Serialize)]
pub struct NotFoundReport {
    pub query: String,
    pub message: String,
}
