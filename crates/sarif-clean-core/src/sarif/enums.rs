//! SARIF enumerations and their coercion from loosely-typed input.
//!
//! Some producers serialize enum members as their ordinal instead of the
//! canonical string. Each coercer accepts either form:
//!
//!   - `Level`         → falls back to `warning`
//!   - `Kind`          → falls back to `open`
//!   - `BaselineState` → no fallback, the field is dropped
//!   - `ColumnKind`    → any integer other than 1 is `unicodeCodePoints`
//!
//! Output is always the canonical string form.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::value::{is_integer, non_negative_int};

/// `result.level` / `reportingConfiguration.level`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Level {
    None,
    Note,
    Warning,
    Error,
}

impl Level {
    const TABLE: [Level; 4] = [Level::None, Level::Note, Level::Warning, Level::Error];

    pub fn as_str(self) -> &'static str {
        match self {
            Level::None => "none",
            Level::Note => "note",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }

    /// Total: unrecognized input becomes [`Level::Warning`].
    pub fn coerce(value: &Value) -> Self {
        coerce_with(value, &Self::TABLE, Self::as_str).unwrap_or(Level::Warning)
    }
}

/// `result.kind`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Kind {
    NotApplicable,
    Pass,
    Fail,
    Open,
    Informational,
    Review,
}

impl Kind {
    const TABLE: [Kind; 6] = [
        Kind::NotApplicable,
        Kind::Pass,
        Kind::Fail,
        Kind::Open,
        Kind::Informational,
        Kind::Review,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Kind::NotApplicable => "notApplicable",
            Kind::Pass => "pass",
            Kind::Fail => "fail",
            Kind::Open => "open",
            Kind::Informational => "informational",
            Kind::Review => "review",
        }
    }

    /// Total: unrecognized input becomes [`Kind::Open`].
    pub fn coerce(value: &Value) -> Self {
        coerce_with(value, &Self::TABLE, Self::as_str).unwrap_or(Kind::Open)
    }
}

/// `result.baselineState`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum BaselineState {
    New,
    Unchanged,
    Updated,
    Absent,
}

impl BaselineState {
    const TABLE: [BaselineState; 4] = [
        BaselineState::New,
        BaselineState::Unchanged,
        BaselineState::Updated,
        BaselineState::Absent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BaselineState::New => "new",
            BaselineState::Unchanged => "unchanged",
            BaselineState::Updated => "updated",
            BaselineState::Absent => "absent",
        }
    }

    /// `None` means the field must be omitted.
    pub fn coerce(value: &Value) -> Option<Self> {
        coerce_with(value, &Self::TABLE, Self::as_str)
    }
}

/// `run.columnKind`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ColumnKind {
    Utf16CodeUnits,
    UnicodeCodePoints,
}

impl ColumnKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnKind::Utf16CodeUnits => "utf16CodeUnits",
            ColumnKind::UnicodeCodePoints => "unicodeCodePoints",
        }
    }

    /// Integer 1 is UTF-16, every other integer is code points. Strings must
    /// match a canonical name exactly.
    pub fn coerce(value: &Value) -> Option<Self> {
        match value {
            v if is_integer(v) => Some(if v.as_u64() == Some(1) {
                ColumnKind::Utf16CodeUnits
            } else {
                ColumnKind::UnicodeCodePoints
            }),
            Value::String(s) => [ColumnKind::Utf16CodeUnits, ColumnKind::UnicodeCodePoints]
                .into_iter()
                .find(|k| k.as_str() == s.as_str()),
            _ => None,
        }
    }
}

macro_rules! impl_display {
    ($($ty:ty),*) => {$(
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    )*};
}

impl_display!(Level, Kind, BaselineState, ColumnKind);

/// Ordinal lookup for integers, case-insensitive name lookup for strings.
fn coerce_with<T: Copy>(value: &Value, table: &[T], name: fn(T) -> &'static str) -> Option<T> {
    match value {
        Value::Number(_) => non_negative_int(value)
            .and_then(|n| usize::try_from(n).ok())
            .and_then(|i| table.get(i).copied()),
        Value::String(s) => table
            .iter()
            .copied()
            .find(|&member| name(member).eq_ignore_ascii_case(s)),
        _ => None,
    }
}
