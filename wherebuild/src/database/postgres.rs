use std::fmt::Write;

use sqlx::postgres::PgArguments;
use sqlx::query::Query;

use super::{rewrite, Database, Rewritten};
use crate::builder::Fragment;
use crate::value::Value;
use crate::WhereResult;

#[derive(Clone, Debug)]
pub struct Postgres;

impl Database for Postgres {
    fn write_placeholder(buf: &mut String, index: usize) {
        let _ = write!(buf, "${}", index);
    }
}

/// A WHERE fragment ready for `sqlx` against Postgres: `$n` placeholders,
/// with list arguments expanded inside `IN (...)`.
#[derive(Clone, Debug, PartialEq)]
pub struct PgWhere {
    rewritten: Rewritten,
}

impl PgWhere {
    pub fn new(fragment: &Fragment) -> WhereResult<Self> {
        Ok(Self {
            rewritten: rewrite::<Postgres>(fragment)?,
        })
    }

    pub fn sql(&self) -> &str {
        &self.rewritten.sql
    }

    pub fn values(&self) -> &[Value] {
        &self.rewritten.values
    }

    /// Full statement text: `<prefix> WHERE <condition>`, or just the prefix
    /// when there is no condition.
    pub fn statement(&self, prefix: &str) -> String {
        if self.rewritten.sql.is_empty() {
            prefix.to_owned()
        } else {
            format!("{} WHERE {}", prefix, self.rewritten.sql)
        }
    }

    /// Bind every value, in placeholder order, onto `query`.
    pub fn bind<'q>(
        &self,
        mut query: Query<'q, sqlx::Postgres, PgArguments>,
    ) -> Query<'q, sqlx::Postgres, PgArguments> {
        for value in &self.rewritten.values {
            query = match value.clone() {
                Value::Null => query.bind(None::<String>),
                Value::Bool(value) => query.bind(value),
                Value::Int(value) => query.bind(value),
                Value::Float(value) => query.bind(value),
                Value::Text(value) => query.bind(value),
            };
        }

        query
    }
}
