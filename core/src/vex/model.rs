use serde::{Deserialize, Serialize};

/// Top-level VEX document as it appears on the wire. Field order matters:
/// re-serialization must emit fields in this order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VexDocument {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@id")]
    pub id: String,
    pub author: String,
    pub role: String,
    pub timestamp: String,
    pub last_updated: String,
    pub version: i64,
    pub tooling: String,
    pub statements: Vec<Statement>,
}

/// One vulnerability assessment within a document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Statement {
    pub vulnerability: Vulnerability,
    pub timestamp: String,
    pub last_updated: String,
    pub status: String,
    pub justification: String,
    pub supplier: String,
}

/// Vulnerability identity. Passed through unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vulnerability {
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Status value that makes a statement invisible to GUAC when it applies to
/// every statement in a document.
pub const STATUS_NOT_AFFECTED: &str = "not_affected";
