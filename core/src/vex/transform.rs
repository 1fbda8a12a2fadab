use std::fmt;

use thiserror::Error;

use super::model::{VexDocument, STATUS_NOT_AFFECTED};
use super::timestamp::to_rfc3339_utc;

/// Which of the two rewritable fields is being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampField {
    Timestamp,
    LastUpdated,
}

impl fmt::Display for TimestampField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimestampField::Timestamp => write!(f, "timestamp"),
            TimestampField::LastUpdated => write!(f, "last_updated"),
        }
    }
}

/// Location of a timestamp field: on the document itself, or inside the
/// statement at the given index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRef {
    pub statement: Option<usize>,
    pub field: TimestampField,
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.statement {
            Some(idx) => write!(f, "statements[{}].{}", idx, self.field),
            None => write!(f, "{}", self.field),
        }
    }
}

/// First timestamp field that failed to parse, with its location.
#[derive(Debug, Error)]
#[error("invalid timestamp in {field}: {source}")]
pub struct TransformError {
    pub field: FieldRef,
    pub source: time::error::Parse,
}

/// Result of a successful rewrite.
#[derive(Debug, Clone)]
pub struct TransformOutcome {
    pub document: VexDocument,
    /// True iff every statement carries status `not_affected` (vacuously
    /// true for an empty statement list). GUAC skips such documents.
    pub all_not_affected: bool,
}

/// Rewrite `timestamp` and `last_updated` on the document and on every
/// statement, in original order, stopping at the first field that does not
/// parse. The document is consumed, so a failed rewrite leaves no partially
/// mutated document behind.
pub fn normalize_document(mut doc: VexDocument) -> Result<TransformOutcome, TransformError> {
    doc.timestamp = rewrite(&doc.timestamp, None, TimestampField::Timestamp)?;
    doc.last_updated = rewrite(&doc.last_updated, None, TimestampField::LastUpdated)?;

    for (idx, statement) in doc.statements.iter_mut().enumerate() {
        statement.timestamp = rewrite(&statement.timestamp, Some(idx), TimestampField::Timestamp)?;
        statement.last_updated =
            rewrite(&statement.last_updated, Some(idx), TimestampField::LastUpdated)?;
    }

    let all_not_affected = doc
        .statements
        .iter()
        .all(|s| s.status == STATUS_NOT_AFFECTED);

    Ok(TransformOutcome {
        document: doc,
        all_not_affected,
    })
}

fn rewrite(
    value: &str,
    statement: Option<usize>,
    field: TimestampField,
) -> Result<String, TransformError> {
    to_rfc3339_utc(value).map_err(|source| TransformError {
        field: FieldRef { statement, field },
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::{FieldRef, TimestampField};

    #[test]
    fn field_ref_names_document_level_fields() {
        let r = FieldRef {
            statement: None,
            field: TimestampField::Timestamp,
        };
        assert_eq!(r.to_string(), "timestamp");
    }

    #[test]
    fn field_ref_names_statement_fields_by_index() {
        let r = FieldRef {
            statement: Some(3),
            field: TimestampField::LastUpdated,
        };
        assert_eq!(r.to_string(), "statements[3].last_updated");
    }
}
