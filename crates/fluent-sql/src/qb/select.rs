//! SELECT statement builder.

use crate::qb::predicate::Predicates;
use crate::qb::traits::{Filter, Statement, StatementKind};
use crate::qb::value::Value;

/// SELECT statement builder.
///
/// Clauses render in a fixed order regardless of call order:
/// `SELECT .. FROM .. WHERE .. ORDER BY .. LIMIT .. OFFSET ..`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Select {
    /// Table name
    table: Option<String>,
    /// SELECT columns
    columns: Vec<String>,
    /// WHERE conditions
    predicates: Predicates,
    /// ORDER BY column and whether it is descending
    order_by: Option<(String, bool)>,
    /// LIMIT
    limit: Option<u64>,
    /// OFFSET
    offset: Option<u64>,
}

impl Select {
    /// Create an empty SELECT builder.
    pub fn builder() -> Self {
        Self::default()
    }

    /// Set the selected columns, replacing any earlier list.
    pub fn select<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Set the selected columns if `check` is true.
    pub fn select_if<I, S>(self, columns: I, check: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if check { self.select(columns) } else { self }
    }

    /// Set the table to select from.
    pub fn from(mut self, table: &str) -> Self {
        self.table = Some(table.to_string());
        self
    }

    /// Set the table if `check` is true.
    pub fn from_if(self, table: &str, check: bool) -> Self {
        if check { self.from(table) } else { self }
    }

    /// Sort by `column`, descending when `is_descending` is true.
    pub fn order_by(mut self, column: &str, is_descending: bool) -> Self {
        self.order_by = Some((column.to_string(), is_descending));
        self
    }

    /// Sort by `column` if `check` is true.
    pub fn order_by_if(self, column: &str, is_descending: bool, check: bool) -> Self {
        if check { self.order_by(column, is_descending) } else { self }
    }

    /// Set LIMIT. A limit of 0 is not rendered.
    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Set LIMIT if `check` is true and a limit is given.
    pub fn limit_if(self, n: impl Into<Option<u64>>, check: bool) -> Self {
        match n.into() {
            Some(n) if check => self.limit(n),
            _ => self,
        }
    }

    /// Set OFFSET. An offset of 0 is not rendered.
    pub fn offset(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }

    /// Set OFFSET if `check` is true and an offset is given.
    pub fn offset_if(self, n: impl Into<Option<u64>>, check: bool) -> Self {
        match n.into() {
            Some(n) if check => self.offset(n),
            _ => self,
        }
    }
}

impl Filter for Select {
    fn predicates_mut(&mut self) -> &mut Predicates {
        &mut self.predicates
    }
}

impl Statement for Select {
    const KIND: StatementKind = StatementKind::Select;

    fn table_name(&self) -> Option<&str> {
        self.table.as_deref()
    }

    fn render(&self, table: &str) -> (String, Vec<Value>) {
        let mut params = Vec::new();
        let mut sql = format!("SELECT {} FROM {}", self.columns.join(", "), table);

        self.predicates.write_where(&mut sql, &mut params);

        if let Some((ref column, is_descending)) = self.order_by {
            sql.push_str(" ORDER BY ");
            sql.push_str(column);
            sql.push_str(if is_descending { " DESC" } else { " ASC" });
        }

        if let Some(limit) = self.limit.filter(|n| *n > 0) {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        if let Some(offset) = self.offset.filter(|n| *n > 0) {
            sql.push_str(&format!(" OFFSET {}", offset));
        }

        (sql, params)
    }
}
