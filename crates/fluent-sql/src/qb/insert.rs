//! INSERT statement builder.

use crate::error::{BuildError, BuildResult};
use crate::qb::traits::{Statement, StatementKind};
use crate::qb::value::Value;

/// Multi-row INSERT builder.
///
/// Each row added with [`Insert::add_values`] is expected to have one value
/// per column. Row arity is not checked; a mismatch renders as-is.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Insert {
    /// Table name
    table: Option<String>,
    /// Column names
    columns: Vec<String>,
    /// Value rows, in insertion order
    rows: Vec<Vec<Value>>,
}

impl Insert {
    /// Create an empty INSERT builder.
    pub fn builder() -> Self {
        Self::default()
    }

    /// Create an INSERT builder targeting `table`.
    pub fn into(table: &str) -> Self {
        Self::builder().table(table)
    }

    /// Set the target table.
    pub fn table(mut self, table: &str) -> Self {
        self.table = Some(table.to_string());
        self
    }

    /// Set the inserted columns, replacing any earlier list.
    pub fn set_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Append one row of values.
    ///
    /// Use [`crate::values!`] for rows of mixed types.
    pub fn add_values<I, V>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
        self
    }

    /// Append one row of values if `check` is true.
    pub fn add_values_if<I, V>(self, row: I, check: bool) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        if check { self.add_values(row) } else { self }
    }
}

impl Statement for Insert {
    const KIND: StatementKind = StatementKind::Insert;

    fn table_name(&self) -> Option<&str> {
        self.table.as_deref()
    }

    fn validate(&self) -> BuildResult<()> {
        if self.rows.is_empty() {
            return Err(BuildError::empty_statement(
                Self::KIND.as_str(),
                "no rows added",
            ));
        }
        Ok(())
    }

    fn render(&self, table: &str) -> (String, Vec<Value>) {
        let rows: Vec<String> = self
            .rows
            .iter()
            .map(|row| format!("({})", vec!["?"; row.len()].join(", ")))
            .collect();

        let sql = format!(
            "INSERT INTO {} ({}) VALUES {}",
            table,
            self.columns.join(", "),
            rows.join(", ")
        );
        let params = self.rows.iter().flatten().cloned().collect();

        (sql, params)
    }
}
