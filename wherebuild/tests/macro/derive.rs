use wherebuild::ToWhere;

#[derive(ToWhere)]
pub struct Empty {}

#[derive(ToWhere)]
pub struct Filter {
    #[filter(in)]
    pub cate: Vec<String>,

    #[filter(gte, column = "created_at")]
    pub since: Option<i64>,

    /// Documented fields keep working.
    #[filter(like)]
    pub name: String,
}

fn main() {
    assert!(Empty {}.to_where().is_empty());

    let filter = Filter {
        cate: vec!["a".to_owned()],
        since: None,
        name: "%x%".to_owned(),
    };

    assert_eq!(filter.to_where().sql(), "cate IN (?) AND name LIKE ?");
}
