use std::fmt;

use crate::build::Build;
use crate::builder::WhereBuilder;

/// Boolean connective of a group.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Logic {
    And,
    Or,
}

impl Logic {
    pub fn separator(self) -> &'static str {
        match self {
            Logic::And => " AND ",
            Logic::Or => " OR ",
        }
    }
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Logic::And => "AND",
            Logic::Or => "OR",
        })
    }
}

/// Render `(<child> <logic> <child> ...)`, children in caller order.
///
/// An empty group still renders its parentheses: `()`.
pub(crate) fn build_group<B: Build>(logic: Logic, children: &[B], builder: &mut WhereBuilder) {
    builder.push("(");
    for (index, child) in children.iter().enumerate() {
        if index > 0 {
            builder.push(logic.separator());
        }
        child.build(builder);
    }
    builder.push(")");
}
