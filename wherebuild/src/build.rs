use crate::builder::WhereBuilder;

/// Anything that renders itself into a WHERE fragment.
pub trait Build: std::fmt::Debug + Send + Sync {
    fn build(&self, builder: &mut WhereBuilder);
}

impl<B: Build> Build for [B] {
    /// Render a flat list, joined with `AND` and without parentheses.
    fn build(&self, builder: &mut WhereBuilder) {
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                builder.push(" AND ");
            }
            item.build(builder);
        }
    }
}
