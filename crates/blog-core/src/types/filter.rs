//! Filter types for dynamic query building.
//!
//! A list query's predicate is a conjunction of [`FilterGroup`]s. Inside a
//! group, fields are joined by the group's [`FilterMode`]. Field names are
//! static column identifiers chosen by the entity mapping; values are
//! always bound as statement parameters.

use serde::{Deserialize, Serialize};

/// How the fields of a single filter group are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// A row matches when any field matches (`OR`).
    #[default]
    Any,
    /// A row matches only when every field matches (`AND`).
    All,
}

impl FilterMode {
    /// Return the SQL keyword, padded with spaces.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Any => " OR ",
            Self::All => " AND ",
        }
    }
}

/// Filter comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// Exact equality.
    Eq,
    /// SQL `ILIKE` case-insensitive pattern match.
    ILike,
}

impl FilterOp {
    /// Return the SQL operator, padded with spaces.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Eq => " = ",
            Self::ILike => " ILIKE ",
        }
    }
}

/// A dynamic filter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// A string value.
    Text(String),
    /// An integer value.
    Integer(i64),
}

/// A single filter condition on a named column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterField {
    /// The column to filter on.
    pub field: &'static str,
    /// The comparison operator.
    pub op: FilterOp,
    /// The value to compare against.
    pub value: FilterValue,
}

impl FilterField {
    /// Create a new filter field.
    pub fn new(field: &'static str, op: FilterOp, value: FilterValue) -> Self {
        Self { field, op, value }
    }

    /// Shorthand for an integer equality filter.
    pub fn eq(field: &'static str, value: i64) -> Self {
        Self::new(field, FilterOp::Eq, FilterValue::Integer(value))
    }

    /// Case-insensitive substring match on `field`.
    ///
    /// LIKE metacharacters in `term` are escaped so the term is matched
    /// literally.
    pub fn contains(field: &'static str, term: &str) -> Self {
        Self::new(
            field,
            FilterOp::ILike,
            FilterValue::Text(format!("%{}%", escape_like(term))),
        )
    }
}

/// A set of conditions joined by one [`FilterMode`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterGroup {
    /// How the fields are combined.
    pub mode: FilterMode,
    /// The conditions in this group.
    pub fields: Vec<FilterField>,
}

impl FilterGroup {
    /// Create an empty group with the given mode.
    pub fn new(mode: FilterMode) -> Self {
        Self {
            mode,
            fields: Vec::new(),
        }
    }

    /// Search `term` across `columns`, matching when any column contains it.
    ///
    /// An absent or empty term yields an empty group, which adds no
    /// predicate.
    pub fn search(term: Option<&str>, columns: &[&'static str]) -> Self {
        let mut group = Self::new(FilterMode::Any);
        if let Some(term) = term.filter(|t| !t.is_empty()) {
            group.fields = columns
                .iter()
                .copied()
                .map(|column| FilterField::contains(column, term))
                .collect();
        }
        group
    }

    /// Add an integer equality condition when `value` is positive.
    ///
    /// Zero, negative and absent values mean "not filtered".
    pub fn eq_if_positive(mut self, field: &'static str, value: Option<i64>) -> Self {
        if let Some(value) = value.filter(|v| *v > 0) {
            self.fields.push(FilterField::eq(field, value));
        }
        self
    }

    /// Whether the group contributes no predicate.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Escape `%`, `_` and `\` for use inside an `ILIKE` pattern.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
