//!
//! Bound argument values.
//!
//! An argument is either a single scalar, or a list of scalars. The list form
//! exists for set membership (`IN (?)`), where one placeholder stands for the
//! whole sequence and the downstream layer expands it.
//!

/// A scalar value bound to one placeholder.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

/// An argument bound to one placeholder of a rendered fragment.
#[derive(Clone, Debug, PartialEq)]
pub enum Arg {
    Scalar(Value),
    List(Vec<Value>),
}

impl Arg {
    /// The number of values the downstream layer ends up binding for this argument.
    pub fn placeholders(&self) -> usize {
        match self {
            Arg::Scalar(_) => 1,
            Arg::List(values) => values.len(),
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Arg::List(_))
    }
}

macro_rules! value_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Int(value as i64)
                }
            }
        )*
    };
}

value_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(value.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}

macro_rules! scalar_arg_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Arg::Scalar(value.into())
                }
            }
        )*
    };
}

scalar_arg_from!(Value, bool, i8, i16, i32, i64, u8, u16, u32, f32, f64, String, &str, &String);

impl<T: Into<Value>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        Arg::Scalar(value.into())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Arg {
    fn from(values: Vec<T>) -> Self {
        Arg::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Arg {
    fn from(values: [T; N]) -> Self {
        Arg::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Arg {
    fn from(values: &[T]) -> Self {
        Arg::List(values.iter().cloned().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_conversions() {
        assert_eq!(Arg::from("123"), Arg::Scalar(Value::Text("123".into())));
        assert_eq!(Arg::from(7u8), Arg::Scalar(Value::Int(7)));
        assert_eq!(Arg::from(None::<i32>), Arg::Scalar(Value::Null));
        assert_eq!(Arg::from(Some(true)), Arg::Scalar(Value::Bool(true)));
    }

    #[test]
    fn list_conversions() {
        let arg = Arg::from(vec!["123", "456"]);
        assert_eq!(
            arg,
            Arg::List(vec![Value::Text("123".into()), Value::Text("456".into())])
        );
        assert!(arg.is_list());
        assert_eq!(arg.placeholders(), 2);

        assert_eq!(Arg::from([1, 2, 3]).placeholders(), 3);
        assert_eq!(Arg::from(&[1.5f64][..]), Arg::List(vec![Value::Float(1.5)]));
    }
}
