/// Build a `Vec<Value>` from expressions of mixed types.
///
/// ```
/// use fluent_sql::{Value, values};
///
/// let row = values!["frank", 42, None::<i64>, true];
/// assert_eq!(
///     row,
///     vec![Value::from("frank"), Value::Int(42), Value::Null, Value::Bool(true)]
/// );
/// ```
#[macro_export]
macro_rules! values {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($value)),+]
    };
}
