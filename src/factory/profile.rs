use chrono::NaiveDate;
use fake::{faker::name::en::Name, Dummy, Fake, Faker};
use serde::Deserialize;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::{
    core::utils::now,
    model::profile::{Profile, ProfileKind, TABLE_NAME},
    service::zodiac::{owned_traits, sign_from_date},
};

pub struct ProfileFactory<T: Clone> {
    modifier_one: fn(x: &Profile, ext: T) -> Profile,
    modifier_many: fn(x: &Profile, idx: usize, ext: T) -> Profile,
}

impl<T: Clone> Default for ProfileFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> ProfileFactory<T> {
    pub fn new() -> Self {
        Self {
            modifier_one: |x, _| x.clone(),
            modifier_many: |x, _, _| x.clone(),
        }
    }

    pub fn modified_one(&mut self, modifier: fn(x: &Profile, ext: T) -> Profile) {
        self.modifier_one = modifier
    }

    pub fn modified_many(&mut self, modifier: fn(x: &Profile, idx: usize, ext: T) -> Profile) {
        self.modifier_many = modifier
    }

    pub async fn generate_one(&mut self, db: &PgPool, ext: T) -> anyhow::Result<Profile> {
        let data = ProfileDummy::new().generate_one();
        let data = (self.modifier_one)(&data, ext);
        let mut tx = db.begin().await?;
        insert_profile(&mut tx, &data).await?;
        tx.commit().await?;
        Ok(data)
    }

    pub async fn generate_many(
        &mut self,
        db: &PgPool,
        num: u32,
        ext: T,
    ) -> anyhow::Result<Vec<Profile>> {
        let data = ProfileDummy::new().generate_many(num);
        let mut result: Vec<Profile> = vec![];
        for (idx, item) in data.iter().enumerate() {
            result.push((self.modifier_many)(item, idx, ext.clone()));
        }
        let mut tx = db.begin().await?;
        for item in result.iter() {
            insert_profile(&mut tx, item).await?;
        }
        tx.commit().await?;
        Ok(result)
    }
}

async fn insert_profile(tx: &mut Transaction<'_, Postgres>, data: &Profile) -> anyhow::Result<()> {
    sqlx::query(
        format!(
            r#"
        INSERT INTO {} (id, user_id, kind, name, avatar, birth_date, birth_time, birth_place,
        sun_sign, moon_sign, ascendant, traits, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)"#,
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(data.id)
    .bind(data.user_id)
    .bind(data.kind)
    .bind(&data.name)
    .bind(&data.avatar)
    .bind(data.birth_date)
    .bind(&data.birth_time)
    .bind(&data.birth_place)
    .bind(data.sun_sign)
    .bind(&data.moon_sign)
    .bind(&data.ascendant)
    .bind(&data.traits)
    .bind(data.created_at)
    .bind(data.updated_at)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

#[derive(Debug, Default, Deserialize, Dummy, Clone)]
struct ProfileDummy {
    pub id: Uuid,
    pub user_id: Uuid,
    #[dummy(faker = "Name()")]
    pub name: String,
    pub avatar: Option<String>,
    #[dummy(faker = "1940..2020")]
    pub birth_year: i32,
    #[dummy(faker = "1..13")]
    pub birth_month: u32,
    #[dummy(faker = "1..29")]
    pub birth_day: u32,
    pub birth_time: Option<String>,
    pub birth_place: Option<String>,
}

impl ProfileDummy {
    pub fn new() -> Self {
        Faker.fake::<Self>()
    }

    fn into_profile(self) -> Profile {
        let birth_date = NaiveDate::from_ymd_opt(self.birth_year, self.birth_month, self.birth_day)
            .unwrap_or_default();
        let sun_sign = sign_from_date(&birth_date);
        let now = now();
        Profile {
            id: self.id,
            user_id: self.user_id,
            kind: ProfileKind::Friend,
            name: self.name,
            avatar: self.avatar,
            birth_date,
            birth_time: self.birth_time,
            birth_place: self.birth_place,
            sun_sign,
            moon_sign: None,
            ascendant: None,
            traits: owned_traits(sun_sign),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn generate_one(&self) -> Profile {
        Faker.fake::<Self>().into_profile()
    }

    pub fn generate_many(&self, num: u32) -> Vec<Profile> {
        let mut result: Vec<Profile> = vec![];
        for _ in 0..num {
            result.push(Faker.fake::<Self>().into_profile());
        }
        result
    }
}
