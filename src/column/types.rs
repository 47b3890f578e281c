//! Column and dataset schema structures

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{ExprGenError, Result};

/// Kind of a dataset column, as declared by the dataset source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnKind {
    #[serde(rename = "num")]
    Numeric,
    #[serde(rename = "text")]
    Text,
}

impl ColumnKind {
    /// Wire tag used inside annotated identifiers
    pub fn tag(self) -> &'static str {
        match self {
            ColumnKind::Numeric => "num",
            ColumnKind::Text => "text",
        }
    }

    /// Parse a kind tag as supplied by the dataset source
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "num" | "numeric" => Ok(ColumnKind::Numeric),
            "text" | "str" => Ok(ColumnKind::Text),
            other => Err(ExprGenError::InvalidColumnKind(other.to_string())),
        }
    }
}

/// A single dataset column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
}

impl Column {
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Canonical annotated identifier, e.g. `revenue (num)` or `region (text)`
    pub fn annotated(&self) -> String {
        format!("{} ({})", self.name, self.kind.tag())
    }
}

/// Split an annotated identifier back into raw name and kind.
///
/// Only a trailing, space-separated ` (num)` / ` (text)` annotation is
/// recognized; anything else is not an annotated identifier.
pub fn parse_annotated(identifier: &str) -> Option<Column> {
    let identifier = identifier.trim();
    for kind in [ColumnKind::Numeric, ColumnKind::Text] {
        let suffix = format!(" ({})", kind.tag());
        if let Some(name) = identifier.strip_suffix(&suffix) {
            if !name.is_empty() {
                return Some(Column::new(name, kind));
            }
        }
    }
    None
}

/// Declared columns of one dataset, indexed for identifier resolution
#[derive(Debug, Clone)]
pub struct DatasetSchema {
    columns: Vec<Column>,
    by_annotated: AHashMap<String, ColumnKind>,
    by_name: AHashMap<String, ColumnKind>,
}

impl DatasetSchema {
    pub fn new(columns: Vec<Column>) -> Self {
        let mut by_annotated = AHashMap::with_capacity(columns.len());
        let mut by_name = AHashMap::with_capacity(columns.len());
        for col in &columns {
            by_annotated.insert(col.annotated(), col.kind);
            by_name.insert(col.name.clone(), col.kind);
        }
        Self {
            columns,
            by_annotated,
            by_name,
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Resolve an annotated identifier against the declared columns.
    ///
    /// The annotation is part of the canonical form, so the name and the
    /// kind must match together. A known name carrying the wrong kind tag
    /// is reported as a kind mismatch rather than an unknown column.
    pub fn resolve(&self, identifier: &str) -> Result<Column> {
        let identifier = identifier.trim();
        let col = parse_annotated(identifier)
            .ok_or_else(|| ExprGenError::UnknownColumn(identifier.to_string()))?;
        match self.by_annotated.get(&col.annotated()) {
            Some(_) => Ok(col),
            None => match self.by_name.get(&col.name) {
                Some(actual) => Err(ExprGenError::ColumnKindMismatch(format!(
                    "'{}' is declared as ({}), not ({})",
                    col.name,
                    actual.tag(),
                    col.kind.tag()
                ))),
                None => Err(ExprGenError::UnknownColumn(identifier.to_string())),
            },
        }
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.by_annotated.contains_key(identifier.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotated_round_trip() {
        let col = Column::new("revenue", ColumnKind::Numeric);
        assert_eq!(col.annotated(), "revenue (num)");
        assert_eq!(parse_annotated("revenue (num)"), Some(col));

        let col = Column::new("region", ColumnKind::Text);
        assert_eq!(col.annotated(), "region (text)");
        assert_eq!(parse_annotated("region (text)"), Some(col));
    }

    #[test]
    fn test_parse_annotated_rejects_unannotated() {
        assert_eq!(parse_annotated("revenue"), None);
        assert_eq!(parse_annotated("revenue (int)"), None);
        assert_eq!(parse_annotated(" (num)"), None);
        assert_eq!(parse_annotated(""), None);
    }

    #[test]
    fn test_parse_annotated_requires_space() {
        // The annotation must be space-separated from the name
        assert_eq!(parse_annotated("revenue(num)"), None);
    }

    #[test]
    fn test_resolve_known_column() {
        let schema = DatasetSchema::new(vec![
            Column::new("score", ColumnKind::Numeric),
            Column::new("result", ColumnKind::Text),
        ]);

        assert!(schema.resolve("score (num)").is_ok());
        assert!(schema.resolve("result (text)").is_ok());
        assert!(schema.contains("score (num)"));
        assert!(!schema.contains("score (text)"));
    }

    #[test]
    fn test_resolve_kind_mismatch() {
        let schema = DatasetSchema::new(vec![Column::new("score", ColumnKind::Numeric)]);

        match schema.resolve("score (text)") {
            Err(ExprGenError::ColumnKindMismatch(msg)) => {
                assert!(msg.contains("score"));
                assert!(msg.contains("num"));
            }
            other => panic!("Expected kind mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_unknown_column() {
        let schema = DatasetSchema::new(vec![Column::new("score", ColumnKind::Numeric)]);

        match schema.resolve("grade (num)") {
            Err(ExprGenError::UnknownColumn(name)) => assert_eq!(name, "grade (num)"),
            other => panic!("Expected unknown column, got {:?}", other),
        }
    }

    #[test]
    fn test_kind_tag_parsing() {
        assert_eq!(ColumnKind::from_tag("num").unwrap(), ColumnKind::Numeric);
        assert_eq!(
            ColumnKind::from_tag("NUMERIC").unwrap(),
            ColumnKind::Numeric
        );
        assert_eq!(ColumnKind::from_tag("text").unwrap(), ColumnKind::Text);
        assert_eq!(ColumnKind::from_tag("str").unwrap(), ColumnKind::Text);
        assert!(ColumnKind::from_tag("date").is_err());
    }
}
