//! Positional record decoding.
//!
//! Livestatus answers with an array of rows, each row an array whose cells
//! follow the order of the requested `Columns:` header. A [`Record`] ties
//! that column list and the decoding of a row together; both are generated
//! by [`livestatus_record!`] from one ordered field list.

use serde_json::Value;
use thiserror::Error;

/// Decoding error types.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("{kind} reply is not an array of rows: {source}")]
    Malformed {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("{kind} row {row}: expected {expected} columns, got {found}")]
    RowLength {
        kind: &'static str,
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("{kind} row {row}, column {column}: expected {expected}, got {found}")]
    Field {
        kind: &'static str,
        row: usize,
        column: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

/// A single cell that did not have the JSON type its field needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellError {
    pub column: &'static str,
    pub expected: &'static str,
    pub found: &'static str,
}

/// A record type whose fields map positionally onto a Livestatus table.
pub trait Record: Sized {
    /// Livestatus table the record is read from.
    const TABLE: &'static str;
    /// Human readable name, used in "not found" messages.
    const KIND: &'static str;
    /// Columns to request, in the order [`Record::from_row`] consumes them.
    const COLUMNS: &'static [&'static str];

    /// Build a record from one row. The caller has already checked that the
    /// row holds exactly `COLUMNS.len()` cells.
    fn from_row(row: &[Value]) -> Result<Self, CellError>;
}

/// Coercion from a Livestatus JSON cell into a field value.
pub trait FromColumn: Sized {
    /// Name of the expected JSON shape, for error messages.
    const EXPECTED: &'static str;

    /// Returns the JSON type name of `value` on mismatch.
    fn from_column(value: &Value) -> Result<Self, &'static str>;
}

impl FromColumn for i64 {
    const EXPECTED: &'static str = "number";

    fn from_column(value: &Value) -> Result<Self, &'static str> {
        match value {
            // Latency and execution time are floats on the wire; truncate.
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .ok_or("number"),
            other => Err(json_type(other)),
        }
    }
}

impl FromColumn for bool {
    const EXPECTED: &'static str = "number";

    fn from_column(value: &Value) -> Result<Self, &'static str> {
        match value {
            Value::Number(n) => Ok(n.as_f64().map_or(true, |f| f != 0.0)),
            other => Err(json_type(other)),
        }
    }
}

impl FromColumn for String {
    const EXPECTED: &'static str = "string";

    fn from_column(value: &Value) -> Result<Self, &'static str> {
        match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(json_type(other)),
        }
    }
}

/// An empty string means "not set", e.g. the service of a host comment.
impl FromColumn for Option<String> {
    const EXPECTED: &'static str = "string";

    fn from_column(value: &Value) -> Result<Self, &'static str> {
        String::from_column(value).map(|s| if s.is_empty() { None } else { Some(s) })
    }
}

impl<T: FromColumn> FromColumn for Vec<T> {
    const EXPECTED: &'static str = "array";

    fn from_column(value: &Value) -> Result<Self, &'static str> {
        match value {
            Value::Array(items) => items.iter().map(T::from_column).collect(),
            other => Err(json_type(other)),
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Take the next cell of a row and coerce it into `T`.
///
/// Used by the code generated by [`livestatus_record!`].
pub fn take_cell<'a, T, I>(cells: &mut I, column: &'static str) -> Result<T, CellError>
where
    T: FromColumn,
    I: Iterator<Item = &'a Value>,
{
    let value = cells.next().ok_or(CellError {
        column,
        expected: T::EXPECTED,
        found: "nothing",
    })?;
    T::from_column(value).map_err(|found| CellError {
        column,
        expected: T::EXPECTED,
        found,
    })
}

/// Decode a complete Livestatus JSON reply into records.
///
/// Fails as a whole if any row does not match the column contract of `R`.
pub fn decode_reply<R: Record>(body: &[u8]) -> Result<Vec<R>, DecodeError> {
    let rows: Vec<Vec<Value>> = serde_json::from_slice(body).map_err(|source| DecodeError::Malformed {
        kind: R::KIND,
        source,
    })?;

    rows.iter()
        .enumerate()
        .map(|(row, cells)| {
            if cells.len() != R::COLUMNS.len() {
                return Err(DecodeError::RowLength {
                    kind: R::KIND,
                    row,
                    expected: R::COLUMNS.len(),
                    found: cells.len(),
                });
            }
            R::from_row(cells).map_err(|e| DecodeError::Field {
                kind: R::KIND,
                row,
                column: e.column,
                expected: e.expected,
                found: e.found,
            })
        })
        .collect()
}

/// Declare a record struct together with its Livestatus column contract.
///
/// Each field line is `name: Type = "column"`. The struct fields, the
/// `COLUMNS` list and the decoding order all come from the same list.
macro_rules! livestatus_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident from $table:literal {
            $(
                $(#[$field_meta:meta])*
                pub $field:ident : $ty:ty = $column:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )+
        }

        impl $crate::livestatus::Record for $name {
            const TABLE: &'static str = $table;
            const KIND: &'static str = stringify!($name);
            const COLUMNS: &'static [&'static str] = &[$($column),+];

            fn from_row(
                row: &[serde_json::Value],
            ) -> Result<Self, $crate::livestatus::CellError> {
                let mut cells = row.iter();
                Ok(Self {
                    $($field: $crate::livestatus::take_cell(&mut cells, $column)?,)+
                })
            }
        }
    };
}
