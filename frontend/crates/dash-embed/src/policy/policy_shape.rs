use serde::Serialize;

/// Form of the row-level-security predicate behind a description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyShape {
    /// `column = 'value'`
    Equality,
    /// `a = 'x' AND b = 'y'`
    Conjunction,
    /// `column IN ('x', 'y', ...)`
    Disjunction,
    /// No filter at all
    Unrestricted,
}
