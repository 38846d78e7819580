//!
//! Parameterized WHERE fragments from a small predicate algebra.
//!
//! ```
//! use wherebuild::{to_where, Expr};
//!
//! let fragment = to_where(&[
//!     Expr::is_in([("cate", vec!["123", "456"])]),
//!     Expr::or([Expr::eq([("name", "1")]), Expr::eq([("name", "2")])]),
//!     Expr::gte([("cate", "123")]),
//! ]);
//!
//! assert_eq!(
//!     fragment.sql(),
//!     "cate IN (?) AND (name = ? OR name = ?) AND cate >= ?"
//! );
//! assert_eq!(fragment.args().len(), 4);
//! ```
//!
//! Column predicates always render their columns in name order. Placeholders
//! are `?`, one per argument; a set-membership argument is a whole list bound
//! to a single placeholder, left for the execution layer to expand.
//!

pub use wherebuild_macros::*;

pub mod build;
pub mod builder;
pub mod column;
pub mod database;
pub mod explain;
pub mod expr;
pub mod logic;
pub mod predicate;
pub mod prelude;
pub mod value;

use build::Build;

pub use builder::Fragment;
pub use column::Columns;
pub use expr::Expr;
pub use logic::Logic;
pub use predicate::Op;
pub use value::{Arg, Value};

#[cfg(feature = "postgres")]
pub use database::postgres::PgWhere;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WhereError {
    #[error("Empty {op} predicate")]
    EmptyPredicate { op: Op },

    #[error("Empty {logic} group")]
    EmptyGroup { logic: Logic },

    #[error("Fragment has {placeholders} placeholders but {args} arguments")]
    PlaceholderMismatch { placeholders: usize, args: usize },
}

pub type WhereResult<T> = Result<T, WhereError>;

/// Combine top-level expressions with `AND`, without enclosing parentheses.
///
/// An empty list yields an empty fragment, meaning "no condition". Note the
/// difference with an empty group, which renders as `()`.
pub fn to_where(exprs: &[Expr]) -> Fragment {
    let mut builder = builder::WhereBuilder::new();
    exprs.build(&mut builder);
    let fragment = builder.build();

    tracing::debug!(
        exprs = exprs.len(),
        args = fragment.args().len(),
        "rendered where fragment"
    );

    fragment
}

/// Like [to_where], but first rejects empty predicates and empty groups.
pub fn try_to_where(exprs: &[Expr]) -> WhereResult<Fragment> {
    for expr in exprs {
        if let Err(err) = expr.validate() {
            tracing::debug!(%err, "rejected where expression");
            return Err(err);
        }
    }

    Ok(to_where(exprs))
}

/// Types that describe a list of top-level conditions.
///
/// Usually derived with `#[derive(ToWhere)]`.
pub trait ToWhere {
    fn to_exprs(&self) -> Vec<Expr>;

    fn to_where(&self) -> Fragment {
        to_where(&self.to_exprs())
    }
}

/// An owned list of top-level conditions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Where(Vec<Expr>);

impl Where {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, expr: Expr) {
        self.0.push(expr);
    }

    pub fn and(mut self, expr: Expr) -> Self {
        self.push(expr);
        self
    }

    pub fn exprs(&self) -> &[Expr] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_where(&self) -> Fragment {
        to_where(&self.0)
    }

    pub fn try_to_where(&self) -> WhereResult<Fragment> {
        try_to_where(&self.0)
    }
}

impl ToWhere for Where {
    fn to_exprs(&self) -> Vec<Expr> {
        self.0.clone()
    }
}

impl FromIterator<Expr> for Where {
    fn from_iter<I: IntoIterator<Item = Expr>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<Expr>> for Where {
    fn from(exprs: Vec<Expr>) -> Self {
        Self(exprs)
    }
}
