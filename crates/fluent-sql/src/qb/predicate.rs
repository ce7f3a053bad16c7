//! WHERE predicates and their ordered accumulator.
//!
//! A [`Predicate`] is a rendered clause fragment (`age >= ?`) plus the
//! argument(s) bound to its placeholders. Field names are trusted and written
//! verbatim; values never touch the SQL text.
//!
//! [`Predicates`] keeps predicates in insertion order, which is also the order
//! they are joined with `AND` and the order their arguments are emitted.

use crate::qb::value::Value;

/// Argument attached to a predicate.
#[derive(Clone, Debug, PartialEq)]
pub enum Arg {
    /// One value for a single `?`.
    Single(Value),
    /// One value per `?` of an `IN (...)` list, flattened at render time.
    List(Vec<Value>),
}

/// A single WHERE condition.
#[derive(Clone, Debug, PartialEq)]
pub struct Predicate {
    clause: String,
    arg: Option<Arg>,
}

impl Predicate {
    /// Create a predicate from a pre-rendered clause.
    ///
    /// The number of `?` in `clause` must match the number of values in `arg`.
    pub fn new(clause: impl Into<String>, arg: Option<Arg>) -> Self {
        Self {
            clause: clause.into(),
            arg,
        }
    }

    fn compare(field: &str, op: &str, value: Value) -> Self {
        Self::new(format!("{} {} ?", field, op), Some(Arg::Single(value)))
    }

    /// The rendered SQL fragment.
    pub fn clause(&self) -> &str {
        &self.clause
    }

    /// The bound argument, if any.
    pub fn arg(&self) -> Option<&Arg> {
        self.arg.as_ref()
    }

    /// Whether an argument is bound.
    ///
    /// `IS NULL` checks carry no argument, which is not the same as binding
    /// [`Value::Null`].
    pub fn has_arg(&self) -> bool {
        self.arg.is_some()
    }

    /// Iterate the argument values in placeholder order.
    pub fn args(&self) -> impl Iterator<Item = &Value> {
        let values: &[Value] = match &self.arg {
            None => &[],
            Some(Arg::Single(v)) => std::slice::from_ref(v),
            Some(Arg::List(vs)) => vs,
        };
        values.iter()
    }
}

/// `<field> = ?`
pub fn is_equal(field: &str, value: impl Into<Value>) -> Predicate {
    Predicate::compare(field, "=", value.into())
}

/// `<field> != ?`
pub fn is_not_equal(field: &str, value: impl Into<Value>) -> Predicate {
    Predicate::compare(field, "!=", value.into())
}

/// `<field> < ?`
pub fn is_less_than(field: &str, value: impl Into<Value>) -> Predicate {
    Predicate::compare(field, "<", value.into())
}

/// `<field> <= ?`
pub fn is_less_than_or_equal_to(field: &str, value: impl Into<Value>) -> Predicate {
    Predicate::compare(field, "<=", value.into())
}

/// `<field> > ?`
pub fn is_greater_than(field: &str, value: impl Into<Value>) -> Predicate {
    Predicate::compare(field, ">", value.into())
}

/// `<field> >= ?`
pub fn is_greater_than_or_equal_to(field: &str, value: impl Into<Value>) -> Predicate {
    Predicate::compare(field, ">=", value.into())
}

/// `<field> IS NULL`
pub fn is_null(field: &str) -> Predicate {
    Predicate::new(format!("{} IS NULL", field), None)
}

/// `<field> IS NOT NULL`
pub fn is_not_null(field: &str) -> Predicate {
    Predicate::new(format!("{} IS NOT NULL", field), None)
}

/// `<field> LIKE ?`
pub fn is_like(field: &str, pattern: impl Into<Value>) -> Predicate {
    Predicate::compare(field, "LIKE", pattern.into())
}

/// `<field> IN (?,?,...)`, one placeholder per value.
///
/// An empty list renders `<field> IN ()`, which most databases reject.
/// Callers are expected to guard against it.
pub fn is_in<I, V>(field: &str, values: I) -> Predicate
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let values: Vec<Value> = values.into_iter().map(Into::into).collect();
    let placeholders = vec!["?"; values.len()].join(",");
    Predicate::new(
        format!("{} IN ({})", field, placeholders),
        Some(Arg::List(values)),
    )
}

/// Ordered collection of predicates joined with `AND`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Predicates {
    items: Vec<Predicate>,
}

impl Predicates {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Check if no predicate has been added.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a predicate.
    pub fn push(&mut self, predicate: Predicate) {
        self.items.push(predicate);
    }

    /// Render the clause text (without the `WHERE` keyword) and append the
    /// flattened arguments to `params`.
    ///
    /// Returns an empty string when there are no predicates.
    pub fn build(&self, params: &mut Vec<Value>) -> String {
        let clauses: Vec<&str> = self.items.iter().map(Predicate::clause).collect();
        params.extend(self.items.iter().flat_map(Predicate::args).cloned());
        clauses.join(" AND ")
    }

    /// Append ` WHERE <clauses>` to `sql` if any predicate exists.
    pub(crate) fn write_where(&self, sql: &mut String, params: &mut Vec<Value>) {
        if self.is_empty() {
            return;
        }
        sql.push_str(" WHERE ");
        sql.push_str(&self.build(params));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparisons() {
        assert_eq!(is_equal("name", "alice").clause(), "name = ?");
        assert_eq!(is_not_equal("name", "alice").clause(), "name != ?");
        assert_eq!(is_less_than("age", 50).clause(), "age < ?");
        assert_eq!(is_less_than_or_equal_to("age", 50).clause(), "age <= ?");
        assert_eq!(is_greater_than("age", 30).clause(), "age > ?");
        assert_eq!(is_greater_than_or_equal_to("age", 30).clause(), "age >= ?");
        assert_eq!(is_like("name", "%frank").clause(), "name LIKE ?");
    }

    #[test]
    fn test_null_checks_have_no_arg() {
        let p = is_null("deleted_at");
        assert_eq!(p.clause(), "deleted_at IS NULL");
        assert!(!p.has_arg());
        assert_eq!(p.args().count(), 0);

        let p = is_not_null("email");
        assert_eq!(p.clause(), "email IS NOT NULL");
        assert!(!p.has_arg());
    }

    #[test]
    fn test_null_value_is_still_an_arg() {
        let p = is_equal("parent_id", Value::Null);
        assert!(p.has_arg());
        assert_eq!(p.args().collect::<Vec<_>>(), vec![&Value::Null]);
    }

    #[test]
    fn test_in_list() {
        let p = is_in("id", [1, 2, 3]);
        assert_eq!(p.clause(), "id IN (?,?,?)");
        assert_eq!(
            p.arg(),
            Some(&Arg::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)]))
        );
    }

    #[test]
    fn test_in_list_with_null_element() {
        let p = is_in("parent_id", [Some(1), None]);
        assert_eq!(p.clause(), "parent_id IN (?,?)");
        assert_eq!(p.args().count(), 2);
    }

    #[test]
    fn test_empty_in_list() {
        let p = is_in("id", Vec::<i64>::new());
        assert_eq!(p.clause(), "id IN ()");
        assert!(p.has_arg());
        assert_eq!(p.args().count(), 0);
    }

    #[test]
    fn test_predicates_build() {
        let mut group = Predicates::new();
        group.push(is_equal("status", "active"));
        group.push(is_null("deleted_at"));
        group.push(is_in("role", ["admin", "user"]));
        group.push(is_greater_than("age", 18));

        let mut params = Vec::new();
        let sql = group.build(&mut params);
        assert_eq!(
            sql,
            "status = ? AND deleted_at IS NULL AND role IN (?,?) AND age > ?"
        );
        assert_eq!(
            params,
            vec![
                Value::from("active"),
                Value::from("admin"),
                Value::from("user"),
                Value::from(18),
            ]
        );
    }

    #[test]
    fn test_empty_predicates() {
        let group = Predicates::new();
        let mut params = Vec::new();
        assert_eq!(group.build(&mut params), "");
        assert!(params.is_empty());

        let mut sql = String::from("SELECT * FROM t");
        group.write_where(&mut sql, &mut params);
        assert_eq!(sql, "SELECT * FROM t");
    }
}
