use std::fmt;

use crate::builder::WhereBuilder;
use crate::column::Columns;

/// Comparison operator of a column predicate.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Op {
    Eq,
    Ne,
    Gte,
    Gt,
    Lt,
    Lte,
    Like,
    /// Set membership. Renders `IN (?)`, the single placeholder standing
    /// for the whole list.
    In,
}

impl Op {
    pub fn token(self) -> &'static str {
        match self {
            Op::Eq => "=",
            Op::Ne => "!=",
            Op::Gte => ">=",
            Op::Gt => ">",
            Op::Lt => "<",
            Op::Lte => "<=",
            Op::Like => "LIKE",
            Op::In => "IN",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Render `<column> <op> ?` for every column in name order, joined by `AND`.
///
/// An empty set of columns renders nothing.
pub(crate) fn build_predicate(op: Op, columns: &Columns, builder: &mut WhereBuilder) {
    for (index, (name, arg)) in columns.iter().enumerate() {
        if index > 0 {
            builder.push(" AND ");
        }
        builder.push(name);
        builder.push(" ");
        builder.push(op.token());
        match op {
            Op::In => {
                builder.push(" (");
                builder.push_arg(arg);
                builder.push(")");
            }
            _ => {
                builder.push(" ");
                builder.push_arg(arg);
            }
        }
    }
}
