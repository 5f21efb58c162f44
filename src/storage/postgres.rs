use anyhow::Result;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use crate::author::db_types::{AuthorRecord, CreateAuthor};
use crate::budget::db_types::{BudgetEntry, BudgetRecord, CreateBudgetRecord};
use crate::utils::db::{DbPool, get_conn};
use crate::utils::errors::DomainError;
use crate::utils::traits::{AuthorStore, BudgetStore};

/// Escapes LIKE metacharacters so the filter matches literally. Postgres
/// uses `\` as the default escape character.
pub fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[derive(Clone)]
pub struct PgAuthorStore {
    pool: DbPool,
}

impl PgAuthorStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl AuthorStore for PgAuthorStore {
    fn create(&self, new_author: CreateAuthor) -> Result<AuthorRecord> {
        use crate::schema::author::table as AuthorTable;

        let mut conn = get_conn(&self.pool)?;
        let res = diesel::insert_into(AuthorTable)
            .values(&new_author)
            .returning(AuthorRecord::as_returning())
            .get_result::<AuthorRecord>(&mut conn)?;

        Ok(res)
    }

    fn get(&self, author_id: i32) -> Result<Option<AuthorRecord>> {
        use crate::schema::author::dsl::*;

        let mut conn = get_conn(&self.pool)?;
        let res = author
            .filter(id.eq(author_id))
            .select(AuthorRecord::as_select())
            .first::<AuthorRecord>(&mut conn)
            .optional()?;

        Ok(res)
    }
}

#[derive(Clone)]
pub struct PgBudgetStore {
    pool: DbPool,
}

impl PgBudgetStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl BudgetStore for PgBudgetStore {
    fn insert(&self, record: CreateBudgetRecord) -> Result<BudgetRecord> {
        use crate::schema::budget::table as BudgetTable;

        let mut conn = get_conn(&self.pool)?;
        let res = diesel::insert_into(BudgetTable)
            .values(&record)
            .returning(BudgetRecord::as_returning())
            .get_result::<BudgetRecord>(&mut conn);

        match res {
            Ok(row) => Ok(row),
            Err(DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _)) => {
                tracing::error!("Budget record references unknown author {:?}", record.author_id);
                Err(DomainError::MissingAuthor(record.author_id.unwrap_or_default()).into())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn query_by_year(
        &self,
        year_value: i32,
        author_name_filter: Option<&str>,
    ) -> Result<Vec<BudgetEntry>> {
        use crate::schema::{author, budget};

        let mut conn = get_conn(&self.pool)?;

        let mut query = budget::table
            .left_join(author::table)
            .filter(budget::year.eq(year_value))
            .select((BudgetRecord::as_select(), Option::<AuthorRecord>::as_select()))
            .into_boxed();

        if let Some(filter) = author_name_filter {
            query = query.filter(author::full_name.ilike(format!("%{}%", escape_like(filter))));
        }

        let rows = query
            .order(budget::id.asc())
            .load::<(BudgetRecord, Option<AuthorRecord>)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(record, author)| BudgetEntry::new(record, author))
            .collect())
    }
}
