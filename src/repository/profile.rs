use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    core::{
        error::RepositoryError,
        sqlx_utils::{binds_query_as, query_builder, SqlxBinds},
    },
    model::profile::{Profile, ProfileKind, TABLE_NAME},
};

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Profiles owned by `user_id`, oldest first, optionally narrowed to one kind.
    async fn find_by_user(
        &self,
        user_id: &Uuid,
        kind: Option<ProfileKind>,
    ) -> Result<Vec<Profile>, RepositoryError>;

    async fn find_main_by_user(&self, user_id: &Uuid) -> Result<Option<Profile>, RepositoryError>;

    /// Scoped lookup, a profile owned by someone else is reported as absent.
    async fn find_by_id(
        &self,
        user_id: &Uuid,
        id: &Uuid,
    ) -> Result<Option<Profile>, RepositoryError>;

    async fn create(&self, profile: &Profile) -> Result<(), RepositoryError>;

    /// `false` when no row owned by `profile.user_id` has `profile.id`.
    async fn update(&self, profile: &Profile) -> Result<bool, RepositoryError>;

    async fn delete(&self, user_id: &Uuid, id: &Uuid) -> Result<(), RepositoryError>;
}

pub struct PgProfileRepository {
    db: Pool<Postgres>,
}

impl PgProfileRepository {
    pub fn new(db: Pool<Postgres>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    async fn find_by_user(
        &self,
        user_id: &Uuid,
        kind: Option<ProfileKind>,
    ) -> Result<Vec<Profile>, RepositoryError> {
        let mut binds: Vec<SqlxBinds> = vec![SqlxBinds::Uuid(*user_id)];
        let mut filters: Vec<String> = vec!["user_id = $1".to_string()];
        if let Some(kind) = kind {
            binds.push(SqlxBinds::ProfileKind(kind));
            filters.push(format!("kind = ${}", binds.len()));
        }
        let stmt = query_builder(
            None,
            TABLE_NAME,
            &filters,
            &["created_at ASC", "id ASC"],
            None,
        );
        let data = binds_query_as::<Profile>(&stmt, binds)
            .fetch_all(&self.db)
            .await?;
        Ok(data)
    }

    async fn find_main_by_user(&self, user_id: &Uuid) -> Result<Option<Profile>, RepositoryError> {
        let binds = vec![
            SqlxBinds::Uuid(*user_id),
            SqlxBinds::ProfileKind(ProfileKind::Main),
        ];
        let filters = vec!["user_id = $1".to_string(), "kind = $2".to_string()];
        let stmt = query_builder(None, TABLE_NAME, &filters, &["created_at ASC"], Some(1));
        let data = binds_query_as::<Profile>(&stmt, binds)
            .fetch_optional(&self.db)
            .await?;
        Ok(data)
    }

    async fn find_by_id(
        &self,
        user_id: &Uuid,
        id: &Uuid,
    ) -> Result<Option<Profile>, RepositoryError> {
        let binds = vec![SqlxBinds::Uuid(*id), SqlxBinds::Uuid(*user_id)];
        let filters = vec!["id = $1".to_string(), "user_id = $2".to_string()];
        let stmt = query_builder(None, TABLE_NAME, &filters, &[], None);
        let data = binds_query_as::<Profile>(&stmt, binds)
            .fetch_optional(&self.db)
            .await?;
        Ok(data)
    }

    async fn create(&self, profile: &Profile) -> Result<(), RepositoryError> {
        sqlx::query(
            format!(
                r#"
        INSERT INTO {} (id, user_id, kind, name, avatar, birth_date, birth_time, birth_place,
        sun_sign, moon_sign, ascendant, traits, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
        "#,
                TABLE_NAME
            )
            .as_str(),
        )
        .bind(profile.id)
        .bind(profile.user_id)
        .bind(profile.kind)
        .bind(&profile.name)
        .bind(&profile.avatar)
        .bind(profile.birth_date)
        .bind(&profile.birth_time)
        .bind(&profile.birth_place)
        .bind(profile.sun_sign)
        .bind(&profile.moon_sign)
        .bind(&profile.ascendant)
        .bind(&profile.traits)
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .execute(&self.db)
        .await?;
        Ok(())
    }

    async fn update(&self, profile: &Profile) -> Result<bool, RepositoryError> {
        let res = sqlx::query(
            format!(
                r#"UPDATE {}
            SET name = $1, avatar = $2, birth_date = $3, birth_time = $4, birth_place = $5,
            sun_sign = $6, moon_sign = $7, ascendant = $8, traits = $9, updated_at = $10
            WHERE id = $11 AND user_id = $12"#,
                TABLE_NAME
            )
            .as_str(),
        )
        .bind(&profile.name)
        .bind(&profile.avatar)
        .bind(profile.birth_date)
        .bind(&profile.birth_time)
        .bind(&profile.birth_place)
        .bind(profile.sun_sign)
        .bind(&profile.moon_sign)
        .bind(&profile.ascendant)
        .bind(&profile.traits)
        .bind(profile.updated_at)
        .bind(profile.id)
        .bind(profile.user_id)
        .execute(&self.db)
        .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn delete(&self, user_id: &Uuid, id: &Uuid) -> Result<(), RepositoryError> {
        sqlx::query(format!("DELETE FROM {} WHERE id = $1 AND user_id = $2", TABLE_NAME).as_str())
            .bind(id)
            .bind(user_id)
            .execute(&self.db)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, NaiveDate};
    use sqlx::PgPool;
    use uuid::Uuid;

    use crate::{
        core::error::RepositoryError,
        factory::profile::ProfileFactory,
        model::{
            profile::{Profile, ProfileKind},
            zodiac_sign::ZodiacSign,
        },
        repository::profile::{PgProfileRepository, ProfileRepository},
    };

    #[sqlx::test]
    async fn test_find_by_user_is_scoped_and_ordered(pool: PgPool) -> anyhow::Result<()> {
        // Given
        let user_id = Uuid::now_v7();
        let mut factory = ProfileFactory::<Uuid>::new();
        factory.modified_many(|data, idx, ext| Profile {
            user_id: ext,
            kind: if idx % 2 == 0 {
                ProfileKind::Friend
            } else {
                ProfileKind::Partner
            },
            created_at: DateTime::parse_from_rfc3339("2024-01-01T00:00:00+07:00").unwrap()
                + Duration::seconds(idx as i64),
            ..data.clone()
        });
        let created = factory.generate_many(&pool, 4, user_id).await?;
        factory.generate_many(&pool, 3, Uuid::now_v7()).await?;
        let repo = PgProfileRepository::new(pool);

        // When
        let all = repo.find_by_user(&user_id, None).await?;
        let friends = repo.find_by_user(&user_id, Some(ProfileKind::Friend)).await?;

        // Expect
        assert_eq!(
            all.iter().map(|x| x.id).collect::<Vec<Uuid>>(),
            created.iter().map(|x| x.id).collect::<Vec<Uuid>>()
        );
        assert_eq!(friends.len(), 2);
        assert!(friends.iter().all(|x| x.kind == ProfileKind::Friend));
        Ok(())
    }

    #[sqlx::test]
    async fn test_find_by_id_hides_other_users(pool: PgPool) -> anyhow::Result<()> {
        // Given
        let owner = Uuid::now_v7();
        let mut factory = ProfileFactory::<Uuid>::new();
        factory.modified_one(|data, ext| Profile {
            user_id: ext,
            ..data.clone()
        });
        let profile = factory.generate_one(&pool, owner).await?;
        let repo = PgProfileRepository::new(pool);

        // Expect
        assert!(repo.find_by_id(&owner, &profile.id).await?.is_some());
        assert!(repo.find_by_id(&Uuid::now_v7(), &profile.id).await?.is_none());
        Ok(())
    }

    #[sqlx::test]
    async fn test_second_main_profile_violates_unique_index(pool: PgPool) -> anyhow::Result<()> {
        // Given
        let user_id = Uuid::now_v7();
        let mut factory = ProfileFactory::<Uuid>::new();
        factory.modified_one(|data, ext| Profile {
            user_id: ext,
            kind: ProfileKind::Main,
            ..data.clone()
        });
        let main = factory.generate_one(&pool, user_id).await?;
        let repo = PgProfileRepository::new(pool);

        // When
        let duplicate = Profile {
            id: Uuid::now_v7(),
            ..main.clone()
        };
        let res = repo.create(&duplicate).await;

        // Expect
        assert!(matches!(res, Err(RepositoryError::UniqueViolation(_))));
        let found = repo.find_main_by_user(&user_id).await?;
        assert_eq!(found.map(|x| x.id), Some(main.id));
        Ok(())
    }

    #[sqlx::test]
    async fn test_update_and_delete(pool: PgPool) -> anyhow::Result<()> {
        // Given
        let user_id = Uuid::now_v7();
        let mut factory = ProfileFactory::<Uuid>::new();
        factory.modified_one(|data, ext| Profile {
            user_id: ext,
            ..data.clone()
        });
        let profile = factory.generate_one(&pool, user_id).await?;
        let repo = PgProfileRepository::new(pool);

        // When
        let changed = Profile {
            name: "Changed".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 11, 1).unwrap(),
            sun_sign: ZodiacSign::Scorpio,
            traits: vec!["Intenso".to_string()],
            ..profile.clone()
        };
        let updated = repo.update(&changed).await?;

        // Expect
        assert!(updated);
        let found = repo.find_by_id(&user_id, &profile.id).await?.unwrap();
        assert_eq!(found.name, "Changed");
        assert_eq!(found.sun_sign, ZodiacSign::Scorpio);
        assert_eq!(found.traits, vec!["Intenso".to_string()]);
        // delete scoped to another user is a no-op
        repo.delete(&Uuid::now_v7(), &profile.id).await?;
        assert!(repo.find_by_id(&user_id, &profile.id).await?.is_some());
        repo.delete(&user_id, &profile.id).await?;
        assert!(repo.find_by_id(&user_id, &profile.id).await?.is_none());
        Ok(())
    }

    #[sqlx::test]
    async fn test_update_missing_row_reports_false(pool: PgPool) -> anyhow::Result<()> {
        // Given
        let user_id = Uuid::now_v7();
        let mut factory = ProfileFactory::<Uuid>::new();
        factory.modified_one(|data, ext| Profile {
            user_id: ext,
            ..data.clone()
        });
        let profile = factory.generate_one(&pool, user_id).await?;
        let repo = PgProfileRepository::new(pool);
        repo.delete(&user_id, &profile.id).await?;

        // When
        let updated = repo
            .update(&Profile {
                name: "Ghost".to_string(),
                ..profile.clone()
            })
            .await?;
        let other_user = repo
            .update(&Profile {
                id: Uuid::now_v7(),
                user_id: Uuid::now_v7(),
                ..profile.clone()
            })
            .await?;

        // Expect
        assert!(!updated);
        assert!(!other_user);
        Ok(())
    }
}
