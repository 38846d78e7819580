//!
//! Placeholder rewriting for concrete databases.
//!

#[cfg(feature = "postgres")]
pub mod postgres;

use crate::builder::Fragment;
use crate::value::{Arg, Value};
use crate::{WhereError, WhereResult};

/// A database's placeholder syntax.
pub trait Database: std::fmt::Debug + Sync + Send + Clone + 'static {
    /// Write the placeholder of the `index`-th bound value, counting from 1.
    fn write_placeholder(buf: &mut String, index: usize);
}

/// A fragment rewritten for `DB`: list arguments are expanded into one
/// placeholder per element, and the values are flattened accordingly.
#[derive(Clone, Debug, PartialEq)]
pub struct Rewritten {
    pub sql: String,
    pub values: Vec<Value>,
}

pub fn rewrite<DB: Database>(fragment: &Fragment) -> WhereResult<Rewritten> {
    let placeholders = fragment.placeholder_count();
    if placeholders != fragment.args().len() {
        return Err(WhereError::PlaceholderMismatch {
            placeholders,
            args: fragment.args().len(),
        });
    }

    let mut sql = String::with_capacity(fragment.sql().len());
    let mut values = Vec::with_capacity(fragment.bound_count());
    let mut args = fragment.args().iter();

    for ch in fragment.sql().chars() {
        if ch != '?' {
            sql.push(ch);
            continue;
        }

        match args.next() {
            Some(Arg::Scalar(value)) => {
                values.push(value.clone());
                DB::write_placeholder(&mut sql, values.len());
            }
            Some(Arg::List(list)) if list.is_empty() => sql.push_str("NULL"),
            Some(Arg::List(list)) => {
                for (index, value) in list.iter().enumerate() {
                    if index > 0 {
                        sql.push_str(", ");
                    }
                    values.push(value.clone());
                    DB::write_placeholder(&mut sql, values.len());
                }
            }
            None => sql.push(ch),
        }
    }

    tracing::trace!(%sql, values = values.len(), "rewrote placeholders");

    Ok(Rewritten { sql, values })
}
