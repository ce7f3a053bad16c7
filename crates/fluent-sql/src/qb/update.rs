//! UPDATE statement builder.

use crate::error::{BuildError, BuildResult};
use crate::qb::predicate::Predicates;
use crate::qb::traits::{Filter, Statement, StatementKind};
use crate::qb::value::Value;

/// UPDATE statement builder.
///
/// SET values bind before WHERE values, so the argument list is always
/// assignments first, then predicates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Update {
    /// Table name
    table: Option<String>,
    /// SET clauses, in call order
    assignments: Vec<(String, Value)>,
    /// WHERE conditions
    predicates: Predicates,
}

impl Update {
    /// Create an empty UPDATE builder.
    pub fn builder() -> Self {
        Self::default()
    }

    /// Set the target table.
    ///
    /// Also usable as a constructor: `Update::builder().table("users")`.
    pub fn table(mut self, table: &str) -> Self {
        self.table = Some(table.to_string());
        self
    }

    /// Add `field = ?` to the SET clause.
    pub fn set(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.assignments.push((field.to_string(), value.into()));
        self
    }

    /// Add `field = ?` to the SET clause if `check` is true.
    pub fn set_if(self, field: &str, value: impl Into<Value>, check: bool) -> Self {
        if check { self.set(field, value) } else { self }
    }

    /// Set an optional value (None => skip).
    pub fn set_opt<T: Into<Value>>(self, field: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.set(field, v),
            None => self,
        }
    }

    /// Set a JSON column from any `serde` value.
    pub fn set_json<T: serde::Serialize + ?Sized>(
        self,
        field: &str,
        value: &T,
    ) -> serde_json::Result<Self> {
        let json_val = Value::json(value)?;
        Ok(self.set(field, json_val))
    }
}

impl Filter for Update {
    fn predicates_mut(&mut self) -> &mut Predicates {
        &mut self.predicates
    }
}

impl Statement for Update {
    const KIND: StatementKind = StatementKind::Update;

    fn table_name(&self) -> Option<&str> {
        self.table.as_deref()
    }

    fn validate(&self) -> BuildResult<()> {
        if self.assignments.is_empty() {
            return Err(BuildError::empty_statement(
                Self::KIND.as_str(),
                "SET clause cannot be empty",
            ));
        }
        Ok(())
    }

    fn render(&self, table: &str) -> (String, Vec<Value>) {
        let mut params = Vec::with_capacity(self.assignments.len());
        let mut sql = format!("UPDATE {}", table);

        if !self.assignments.is_empty() {
            let set_parts: Vec<String> = self
                .assignments
                .iter()
                .map(|(field, value)| {
                    params.push(value.clone());
                    format!("{} = ?", field)
                })
                .collect();
            sql.push_str(" SET ");
            sql.push_str(&set_parts.join(", "));
        }

        self.predicates.write_where(&mut sql, &mut params);

        (sql, params)
    }
}
