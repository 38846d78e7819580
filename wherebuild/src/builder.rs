use std::fmt;

use crate::value::Arg;

/// Accumulates the text and the arguments of a WHERE fragment while an
/// expression tree is rendered.
#[derive(Default)]
pub struct WhereBuilder {
    buf: String,
    args: Vec<Arg>,
}

impl WhereBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(self) -> Fragment {
        Fragment {
            sql: self.buf,
            args: self.args,
        }
    }

    pub fn push(&mut self, str: &str) {
        self.buf.push_str(str);
    }

    /// Push a `?` placeholder together with the argument bound to it.
    pub fn push_arg(&mut self, arg: &Arg) {
        self.buf.push('?');
        self.args.push(arg.clone());
    }
}

/// A rendered condition: SQL text with `?` placeholders, and the
/// arguments in placeholder order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fragment {
    sql: String,
    args: Vec<Arg>,
}

impl Fragment {
    pub fn new(sql: impl Into<String>, args: Vec<Arg>) -> Self {
        Self {
            sql: sql.into(),
            args,
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    pub fn into_parts(self) -> (String, Vec<Arg>) {
        (self.sql, self.args)
    }

    /// True when there is no condition at all.
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    /// Number of `?` tokens in the text.
    pub fn placeholder_count(&self) -> usize {
        self.sql.matches('?').count()
    }

    /// Number of values bound once every list argument is expanded.
    pub fn bound_count(&self) -> usize {
        self.args.iter().map(Arg::placeholders).sum()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}
