pub use crate::{to_where, try_to_where, Arg, Columns, Expr, Fragment, ToWhere, Value, Where};
