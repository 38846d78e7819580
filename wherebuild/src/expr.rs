use crate::build::Build;
use crate::builder::{Fragment, WhereBuilder};
use crate::column::Columns;
use crate::logic::{self, Logic};
use crate::predicate::{self, Op};
use crate::{WhereError, WhereResult};

/// A condition expression.
///
/// Leaves compare one or more columns with a single operator, the columns
/// being implicitly ANDed. Groups combine child expressions with `AND` or
/// `OR` and render inside parentheses.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Eq(Columns),
    Ne(Columns),
    Gte(Columns),
    Gt(Columns),
    Lt(Columns),
    Lte(Columns),
    Like(Columns),
    In(Columns),
    Or(Vec<Expr>),
    And(Vec<Expr>),
}

impl Expr {
    pub fn eq(columns: impl Into<Columns>) -> Self {
        Expr::Eq(columns.into())
    }

    pub fn ne(columns: impl Into<Columns>) -> Self {
        Expr::Ne(columns.into())
    }

    pub fn gte(columns: impl Into<Columns>) -> Self {
        Expr::Gte(columns.into())
    }

    pub fn gt(columns: impl Into<Columns>) -> Self {
        Expr::Gt(columns.into())
    }

    pub fn lt(columns: impl Into<Columns>) -> Self {
        Expr::Lt(columns.into())
    }

    pub fn lte(columns: impl Into<Columns>) -> Self {
        Expr::Lte(columns.into())
    }

    pub fn like(columns: impl Into<Columns>) -> Self {
        Expr::Like(columns.into())
    }

    /// Set membership: each column's value is expected to be a list.
    pub fn is_in(columns: impl Into<Columns>) -> Self {
        Expr::In(columns.into())
    }

    pub fn or(children: impl IntoIterator<Item = Expr>) -> Self {
        Expr::Or(children.into_iter().collect())
    }

    pub fn and(children: impl IntoIterator<Item = Expr>) -> Self {
        Expr::And(children.into_iter().collect())
    }

    /// Build a column predicate for a given operator.
    pub fn predicate(op: Op, columns: impl Into<Columns>) -> Self {
        let columns = columns.into();
        match op {
            Op::Eq => Expr::Eq(columns),
            Op::Ne => Expr::Ne(columns),
            Op::Gte => Expr::Gte(columns),
            Op::Gt => Expr::Gt(columns),
            Op::Lt => Expr::Lt(columns),
            Op::Lte => Expr::Lte(columns),
            Op::Like => Expr::Like(columns),
            Op::In => Expr::In(columns),
        }
    }

    /// Build a group for a given connective.
    pub fn group(logic: Logic, children: impl IntoIterator<Item = Expr>) -> Self {
        match logic {
            Logic::And => Expr::and(children),
            Logic::Or => Expr::or(children),
        }
    }

    /// The operator and columns, if this is a column predicate.
    pub fn as_predicate(&self) -> Option<(Op, &Columns)> {
        match self {
            Expr::Eq(columns) => Some((Op::Eq, columns)),
            Expr::Ne(columns) => Some((Op::Ne, columns)),
            Expr::Gte(columns) => Some((Op::Gte, columns)),
            Expr::Gt(columns) => Some((Op::Gt, columns)),
            Expr::Lt(columns) => Some((Op::Lt, columns)),
            Expr::Lte(columns) => Some((Op::Lte, columns)),
            Expr::Like(columns) => Some((Op::Like, columns)),
            Expr::In(columns) => Some((Op::In, columns)),
            Expr::Or(_) | Expr::And(_) => None,
        }
    }

    /// The connective and children, if this is a group.
    pub fn as_group(&self) -> Option<(Logic, &[Expr])> {
        match self {
            Expr::Or(children) => Some((Logic::Or, children)),
            Expr::And(children) => Some((Logic::And, children)),
            _ => None,
        }
    }

    /// Render this expression on its own.
    pub fn to_where(&self) -> Fragment {
        let mut builder = WhereBuilder::new();
        self.build(&mut builder);
        builder.build()
    }

    /// Reject empty predicates and empty groups anywhere in the tree.
    ///
    /// Rendering never checks this; an empty predicate renders as an empty
    /// string and an empty group as `()`.
    pub fn validate(&self) -> WhereResult<()> {
        if let Some((op, columns)) = self.as_predicate() {
            if columns.is_empty() {
                return Err(WhereError::EmptyPredicate { op });
            }
        } else if let Some((logic, children)) = self.as_group() {
            if children.is_empty() {
                return Err(WhereError::EmptyGroup { logic });
            }
            for child in children {
                child.validate()?;
            }
        }

        Ok(())
    }
}

impl Build for Expr {
    fn build(&self, builder: &mut WhereBuilder) {
        match self {
            Expr::Or(children) => logic::build_group(Logic::Or, children, builder),
            Expr::And(children) => logic::build_group(Logic::And, children, builder),
            Expr::Eq(columns) => predicate::build_predicate(Op::Eq, columns, builder),
            Expr::Ne(columns) => predicate::build_predicate(Op::Ne, columns, builder),
            Expr::Gte(columns) => predicate::build_predicate(Op::Gte, columns, builder),
            Expr::Gt(columns) => predicate::build_predicate(Op::Gt, columns, builder),
            Expr::Lt(columns) => predicate::build_predicate(Op::Lt, columns, builder),
            Expr::Lte(columns) => predicate::build_predicate(Op::Lte, columns, builder),
            Expr::Like(columns) => predicate::build_predicate(Op::Like, columns, builder),
            Expr::In(columns) => predicate::build_predicate(Op::In, columns, builder),
        }
    }
}
