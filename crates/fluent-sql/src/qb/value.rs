//! Bound argument values.
//!
//! Every argument handed to a builder is converted into a [`Value`], a closed
//! set of the kinds a `?`-placeholder executor understands. Values that do not
//! fit the closed set can travel as a [`RawValue`].

use std::any::Any;
use std::fmt;
use std::num::TryFromIntError;
use std::sync::Arc;

/// A single bound argument.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// SQL NULL
    Null,
    /// Boolean
    Bool(bool),
    /// Integer
    Int(i64),
    /// Unsigned integer above `i64::MAX`
    UInt(u64),
    /// Floating point
    Float(f64),
    /// Text
    Text(String),
    /// JSON document
    Json(serde_json::Value),
    /// Opaque value passed through to the executor untouched
    Raw(RawValue),
}

impl Value {
    /// Serialize any `serde` value into a [`Value::Json`].
    pub fn json<T: serde::Serialize + ?Sized>(value: &T) -> serde_json::Result<Self> {
        Ok(Value::Json(serde_json::to_value(value)?))
    }

    /// Wrap an arbitrary value as a [`Value::Raw`].
    pub fn raw<T: Any + Send + Sync>(value: T) -> Self {
        Value::Raw(RawValue::new(value))
    }

    /// Whether this is SQL NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// A clone-friendly opaque argument.
///
/// Cloning shares the underlying value. Two raw values are equal only when
/// they point at the same allocation.
#[derive(Clone)]
pub struct RawValue {
    type_name: &'static str,
    inner: Arc<dyn Any + Send + Sync>,
}

impl RawValue {
    /// Wrap a value.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            inner: Arc::new(value),
        }
    }

    /// Name of the wrapped Rust type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Borrow the wrapped value if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.inner).downcast_ref::<T>()
    }
}

impl PartialEq for RawValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawValue").field(&self.type_name).finish()
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Int(i64::from(n))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

// Unsigned values that fit stay `Int`, so `5u64` and `5i32` compare equal.
impl From<u64> for Value {
    fn from(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(n) => Value::Int(n),
            Err(_) => Value::UInt(n),
        }
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::from(n as u64)
    }
}

impl From<isize> for Value {
    fn from(n: isize) -> Self {
        Value::Int(n as i64)
    }
}

impl TryFrom<i128> for Value {
    type Error = TryFromIntError;

    fn try_from(n: i128) -> Result<Self, Self::Error> {
        match i64::try_from(n) {
            Ok(n) => Ok(Value::Int(n)),
            Err(_) => u64::try_from(n).map(Value::UInt),
        }
    }
}

impl TryFrom<u128> for Value {
    type Error = TryFromIntError;

    fn try_from(n: u128) -> Result<Self, Self::Error> {
        u64::try_from(n).map(Value::from)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Text(s.clone())
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Text(c.to_string())
    }
}

impl From<serde_json::Value> for Value {
    fn from(j: serde_json::Value) -> Self {
        Value::Json(j)
    }
}

impl From<RawValue> for Value {
    fn from(r: RawValue) -> Self {
        Value::Raw(r)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone> From<chrono::DateTime<Tz>> for Value
where
    Tz::Offset: fmt::Display,
{
    fn from(ts: chrono::DateTime<Tz>) -> Self {
        Value::Text(ts.to_rfc3339())
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDateTime> for Value {
    fn from(ts: chrono::NaiveDateTime) -> Self {
        Value::Text(ts.to_string())
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for Value {
    fn from(d: chrono::NaiveDate) -> Self {
        Value::Text(d.to_string())
    }
}

#[cfg(feature = "uuid")]
impl From<uuid::Uuid> for Value {
    fn from(u: uuid::Uuid) -> Self {
        Value::Text(u.hyphenated().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_conversions() {
        assert_eq!(Value::from(30i32), Value::Int(30));
        assert_eq!(Value::from(7u8), Value::Int(7));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(1.5f64), Value::Float(1.5));
        assert_eq!(Value::from("frank"), Value::Text("frank".to_string()));
        assert_eq!(Value::from('x'), Value::Text("x".to_string()));
    }

    #[test]
    fn test_wide_integers() {
        assert_eq!(Value::from(5u64), Value::Int(5));
        assert_eq!(Value::from(u64::MAX), Value::UInt(u64::MAX));
        assert_eq!(Value::from(vec![1, 2, 3].len()), Value::Int(3));
        assert_eq!(Value::from(-4isize), Value::Int(-4));

        assert_eq!(Value::try_from(-9i128), Ok(Value::Int(-9)));
        assert_eq!(
            Value::try_from(i128::from(u64::MAX)),
            Ok(Value::UInt(u64::MAX))
        );
        assert!(Value::try_from(i128::MIN).is_err());
        assert_eq!(Value::try_from(42u128), Ok(Value::Int(42)));
        assert!(Value::try_from(u128::MAX).is_err());
    }

    #[test]
    fn test_option_is_null_or_inner() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some("a")), Value::Text("a".to_string()));
        assert!(Value::from(None::<&str>).is_null());
    }

    #[test]
    fn test_json() {
        #[derive(serde::Serialize)]
        struct Prefs {
            theme: &'static str,
        }

        let v = Value::json(&Prefs { theme: "dark" }).unwrap();
        assert_eq!(v, Value::Json(serde_json::json!({ "theme": "dark" })));
    }

    #[test]
    fn test_raw_identity() {
        let raw = RawValue::new(vec![1u8, 2, 3]);
        let shared = raw.clone();
        assert_eq!(Value::Raw(raw.clone()), Value::Raw(shared));
        assert_ne!(Value::Raw(raw.clone()), Value::raw(vec![1u8, 2, 3]));
        assert_eq!(raw.downcast_ref::<Vec<u8>>(), Some(&vec![1u8, 2, 3]));
        assert!(raw.downcast_ref::<String>().is_none());
    }

    #[cfg(feature = "uuid")]
    #[test]
    fn test_uuid_as_text() {
        let u = uuid::Uuid::nil();
        assert_eq!(
            Value::from(u),
            Value::Text("00000000-0000-0000-0000-000000000000".to_string())
        );
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_naive_date_as_text() {
        let d = chrono::NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(Value::from(d), Value::Text("2024-03-09".to_string()));
    }
}
