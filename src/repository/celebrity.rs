use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    core::{
        error::RepositoryError,
        sqlx_utils::{binds_query_as, escape_like, query_builder, SqlxBinds},
    },
    model::celebrity::{Celebrity, TABLE_NAME},
};

#[async_trait]
pub trait CelebrityRepository: Send + Sync {
    /// Case-insensitive substring search on name, name ascending, at most `limit` rows.
    async fn search(
        &self,
        search: Option<&str>,
        limit: u32,
    ) -> Result<Vec<Celebrity>, RepositoryError>;

    async fn create(&self, celebrity: &Celebrity) -> Result<(), RepositoryError>;
}

pub struct PgCelebrityRepository {
    db: Pool<Postgres>,
}

impl PgCelebrityRepository {
    pub fn new(db: Pool<Postgres>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CelebrityRepository for PgCelebrityRepository {
    async fn search(
        &self,
        search: Option<&str>,
        limit: u32,
    ) -> Result<Vec<Celebrity>, RepositoryError> {
        let mut binds: Vec<SqlxBinds> = vec![];
        let mut filters: Vec<String> = vec![];
        if let Some(search) = search {
            binds.push(SqlxBinds::String(format!("%{}%", escape_like(search))));
            filters.push(format!("name ILIKE ${}", binds.len()));
        }
        let stmt = query_builder(None, TABLE_NAME, &filters, &["name ASC"], Some(limit));
        let data = binds_query_as::<Celebrity>(&stmt, binds)
            .fetch_all(&self.db)
            .await?;
        Ok(data)
    }

    async fn create(&self, celebrity: &Celebrity) -> Result<(), RepositoryError> {
        sqlx::query(
            format!(
                r#"
        INSERT INTO {} (id, name, birth_date, sun_sign, traits, image, profession)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
                TABLE_NAME
            )
            .as_str(),
        )
        .bind(celebrity.id)
        .bind(&celebrity.name)
        .bind(celebrity.birth_date)
        .bind(celebrity.sun_sign)
        .bind(&celebrity.traits)
        .bind(&celebrity.image)
        .bind(&celebrity.profession)
        .execute(&self.db)
        .await?;
        Ok(())
    }
}
