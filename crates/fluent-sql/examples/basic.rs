//! Basic fluent-sql example
//!
//! Run with: cargo run --example basic -p fluent-sql --features tracing
//!
//! Rendered statements are logged at DEBUG under the `fluent_sql::sql` target.

use fluent_sql::prelude::*;

const USERS: Table = Table::new("users")
    .with_select_cols(&["id", "username", "email"])
    .with_insert_cols(&["username", "email"]);

struct Search<'a> {
    name: Option<&'a str>,
    min_age: Option<i64>,
    ids: Vec<i64>,
    page_size: Option<u64>,
}

fn search(filter: &Search<'_>) -> BuildResult<BuiltQuery> {
    qb::select(["id", "username"])
        .from("users")
        .where_is_like_if("username", filter.name.unwrap_or_default(), filter.name.is_some())
        .where_is_greater_than_or_equal_to_if(
            "age",
            filter.min_age.unwrap_or_default(),
            filter.min_age.is_some(),
        )
        .where_in_if("id", filter.ids.iter().copied(), !filter.ids.is_empty())
        .where_is_null("deleted_at")
        .order_by("id", true)
        .limit_if(filter.page_size, filter.page_size.is_some())
        .build()
}

fn print(label: &str, query: &BuiltQuery) {
    println!("{label}:");
    println!("  SQL:    {}", query.sql);
    println!("  params: {:?}", query.params());
}

fn main() -> Result<(), BuildError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Select ===");
    let everything = Search {
        name: None,
        min_age: None,
        ids: Vec::new(),
        page_size: None,
    };
    print("no filters", &search(&everything)?);

    let narrow = Search {
        name: Some("fr%"),
        min_age: Some(21),
        ids: vec![1, 2, 3],
        page_size: Some(20),
    };
    print("all filters", &search(&narrow)?);

    println!("\n=== Insert ===");
    let insert = USERS
        .insert()
        .add_values(values!["frank", "warthog@wolfcola.com"])
        .add_values(values!["dennis", Value::Null])
        .build()?;
    print("two rows", &insert);

    println!("\n=== Update ===");
    let update = USERS
        .update_by_id(1)
        .set("email", "frank@paddys.pub")
        .set_opt("username", None::<&str>)
        .build()?;
    print("by id", &update);

    println!("\n=== Rejected ===");
    match qb::update("users").where_is_equal("id", 1).build() {
        Ok(query) => print("unexpected", &query),
        Err(err) => println!("  error: {err}"),
    }

    Ok(())
}
