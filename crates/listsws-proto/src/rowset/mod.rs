//! Tabular row extraction.
//!
//! The server returns list data as `z:row` elements whose attributes are
//! the row's columns, each named with the `ows_` prefix. Column lookup is a
//! flat match on prefix + logical name; the row shape is trusted to match
//! the requested view fields and a mismatch is an error, never defaulted.

use listsws_core::constants::{COLUMN_PREFIX, ID_COLUMN, ID_FIELD};

use crate::error::{ProtoError, ProtoResult};
use crate::xml::{Namespace, XmlElement};

/// One returned row: column name (with prefix) to value, in the order the
/// server sent the columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultRow {
    columns: Vec<(String, String)>,
}

impl ResultRow {
    /// Builds a row from a `z:row` element's attributes.
    #[must_use]
    pub fn from_element(row: &XmlElement) -> Self {
        row.attributes()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }

    /// Value of a column by its full (prefixed) name.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Item identifier from the reserved `ows_ID` column.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.get(ID_COLUMN)
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// A repeated column keeps its first position and takes the last value.
impl FromIterator<(String, String)> for ResultRow {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let mut columns: Vec<(String, String)> = Vec::new();
        for (name, value) in iter {
            match columns.iter_mut().find(|(existing, _)| *existing == name) {
                Some(slot) => slot.1 = value,
                None => columns.push((name, value)),
            }
        }
        Self { columns }
    }
}

/// Column name the server uses for a logical field name.
#[must_use]
pub fn column_name(base_name: &str) -> String {
    format!("{COLUMN_PREFIX}{base_name}")
}

fn is_row(element: &XmlElement) -> bool {
    element.local_name() == "row"
        && (element.namespace() == &Namespace::ROWSET_ROW
            || (element.namespace().is_none() && element.prefix.as_deref() == Some("z")))
}

/// Lazily yields every row in a response payload, in document order.
pub fn extract_rows(payload: &XmlElement) -> impl Iterator<Item = ResultRow> + '_ {
    payload
        .self_and_descendants()
        .filter(|element| is_row(element))
        .map(ResultRow::from_element)
}

/// Returns the only row of a payload.
///
/// ## Errors
/// Returns `UnexpectedCardinality` unless the payload holds exactly one
/// row, and `MissingColumn` if that row has no `ows_ID` column.
pub fn extract_single_row(payload: &XmlElement) -> ProtoResult<ResultRow> {
    let mut rows = extract_rows(payload);
    let (Some(row), None) = (rows.next(), rows.next()) else {
        let found = extract_rows(payload).count();
        tracing::error!(found, "Expected exactly one row in response");
        return Err(ProtoError::UnexpectedCardinality { expected: 1, found });
    };

    if row.id().is_none() {
        return Err(ProtoError::MissingColumn(ID_FIELD.to_owned()));
    }

    Ok(row)
}

/// Reads a column by its logical name, applying the `ows_` prefix.
///
/// ## Errors
/// Returns `MissingColumn` if the row has no such column.
pub fn extract_column<'a>(row: &'a ResultRow, base_name: &str) -> ProtoResult<&'a str> {
    row.get(&column_name(base_name))
        .ok_or_else(|| ProtoError::MissingColumn(base_name.to_owned()))
}
