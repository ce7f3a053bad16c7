use super::insert::Insert;
use super::select::Select;
use super::traits::Filter;
use super::update::Update;
use super::value::Value;

/// Database table metadata helper.
///
/// This is a small ergonomic wrapper to create builders with consistent
/// column lists.
///
/// # Example
///
/// ```rust
/// use fluent_sql::prelude::*;
///
/// const USERS: Table = Table::new("users")
///     .with_select_cols(&["id", "username", "email", "created_at"]);
///
/// let (sql, _) = USERS.select().where_is_equal("id", 1).to_sql()?;
/// assert_eq!(sql, "SELECT id, username, email, created_at FROM users WHERE id = ?");
/// # Ok::<(), fluent_sql::BuildError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Table {
    pub name: &'static str,
    pub select_cols: &'static [&'static str],
    pub insert_cols: &'static [&'static str],
    pub id_col: &'static str,
}

impl Table {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            select_cols: &["*"],
            insert_cols: &[],
            id_col: "id",
        }
    }

    pub const fn with_select_cols(mut self, cols: &'static [&'static str]) -> Self {
        self.select_cols = cols;
        self
    }

    pub const fn with_insert_cols(mut self, cols: &'static [&'static str]) -> Self {
        self.insert_cols = cols;
        self
    }

    pub const fn with_id_col(mut self, col: &'static str) -> Self {
        self.id_col = col;
        self
    }

    pub fn select(&self) -> Select {
        Select::builder()
            .select(self.select_cols.iter().copied())
            .from(self.name)
    }

    pub fn insert(&self) -> Insert {
        let builder = Insert::into(self.name);
        if self.insert_cols.is_empty() {
            builder
        } else {
            builder.set_columns(self.insert_cols.iter().copied())
        }
    }

    pub fn update(&self) -> Update {
        Update::builder().table(self.name)
    }

    pub fn select_by_id(&self, id: impl Into<Value>) -> Select {
        self.select().where_is_equal(self.id_col, id)
    }

    pub fn update_by_id(&self, id: impl Into<Value>) -> Update {
        self.update().where_is_equal(self.id_col, id)
    }
}
