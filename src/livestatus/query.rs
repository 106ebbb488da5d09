//! Livestatus query documents.

use std::fmt;
use thiserror::Error;

use super::Record;

/// Rejected filter value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("filter value for {column} is empty")]
    Empty { column: &'static str },
    #[error("filter value for {column} contains a control character")]
    ControlCharacter { column: &'static str },
}

/// An equality filter line, `Filter: <column> = <value>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    column: &'static str,
    value: String,
}

impl Filter {
    /// Build an equality filter.
    ///
    /// The protocol is line based, so a value may not contain line breaks or
    /// any other control character.
    pub fn equals(column: &'static str, value: impl Into<String>) -> Result<Self, FilterError> {
        let value = value.into();
        if value.is_empty() {
            return Err(FilterError::Empty { column });
        }
        if value.chars().any(char::is_control) {
            return Err(FilterError::ControlCharacter { column });
        }
        Ok(Self { column, value })
    }
}

/// A `GET` request against one Livestatus table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    table: &'static str,
    columns: &'static [&'static str],
    filters: Vec<Filter>,
}

impl Query {
    pub fn new(table: &'static str, columns: &'static [&'static str]) -> Self {
        Self {
            table,
            columns,
            filters: Vec::new(),
        }
    }

    /// Query the table of `R`, requesting its column contract.
    pub fn for_record<R: Record>() -> Self {
        Self::new(R::TABLE, R::COLUMNS)
    }

    /// Add a filter. Multiple filters are AND-ed by Livestatus.
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn table(&self) -> &'static str {
        self.table
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "GET {}", self.table)?;
        for filter in &self.filters {
            writeln!(f, "Filter: {} = {}", filter.column, filter.value)?;
        }
        writeln!(f, "Columns:{}", self.columns.join(" "))?;
        // The blank line ends the request.
        write!(f, "OutputFormat: json\n\n")
    }
}
