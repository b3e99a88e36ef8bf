use chrono::NaiveDate;
use fake::{faker::name::en::Name, Dummy, Fake, Faker};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    model::celebrity::{Celebrity, TABLE_NAME},
    service::zodiac::{owned_traits, sign_from_date},
};

pub struct CelebrityFactory<T: Clone> {
    modifier_one: fn(x: &Celebrity, ext: T) -> Celebrity,
    modifier_many: fn(x: &Celebrity, idx: usize, ext: T) -> Celebrity,
}

impl<T: Clone> Default for CelebrityFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> CelebrityFactory<T> {
    pub fn new() -> Self {
        Self {
            modifier_one: |x, _| x.clone(),
            modifier_many: |x, _, _| x.clone(),
        }
    }

    pub fn modified_one(&mut self, modifier: fn(x: &Celebrity, ext: T) -> Celebrity) {
        self.modifier_one = modifier
    }

    pub fn modified_many(&mut self, modifier: fn(x: &Celebrity, idx: usize, ext: T) -> Celebrity) {
        self.modifier_many = modifier
    }

    pub async fn generate_one(&mut self, db: &PgPool, ext: T) -> anyhow::Result<Celebrity> {
        let data = CelebrityDummy::new().generate_one();
        let data = (self.modifier_one)(&data, ext);
        insert_celebrity(db, &data).await?;
        Ok(data)
    }

    pub async fn generate_many(
        &mut self,
        db: &PgPool,
        num: u32,
        ext: T,
    ) -> anyhow::Result<Vec<Celebrity>> {
        let data = CelebrityDummy::new().generate_many(num);
        let mut result: Vec<Celebrity> = vec![];
        for (idx, item) in data.iter().enumerate() {
            result.push((self.modifier_many)(item, idx, ext.clone()));
        }
        for item in result.iter() {
            insert_celebrity(db, item).await?;
        }
        Ok(result)
    }
}

async fn insert_celebrity(db: &PgPool, data: &Celebrity) -> anyhow::Result<()> {
    sqlx::query(
        format!(
            r#"
        INSERT INTO {} (id, name, birth_date, sun_sign, traits, image, profession)
        VALUES ($1, $2, $3, $4, $5, $6, $7)"#,
            TABLE_NAME
        )
        .as_str(),
    )
    .bind(data.id)
    .bind(&data.name)
    .bind(data.birth_date)
    .bind(data.sun_sign)
    .bind(&data.traits)
    .bind(&data.image)
    .bind(&data.profession)
    .execute(db)
    .await?;
    Ok(())
}

#[derive(Debug, Default, Deserialize, Dummy, Clone)]
struct CelebrityDummy {
    pub id: Uuid,
    #[dummy(faker = "Name()")]
    pub name: String,
    #[dummy(faker = "1940..2010")]
    pub birth_year: i32,
    #[dummy(faker = "1..13")]
    pub birth_month: u32,
    #[dummy(faker = "1..29")]
    pub birth_day: u32,
    pub image: Option<String>,
    pub profession: Option<String>,
}

impl CelebrityDummy {
    pub fn new() -> Self {
        Faker.fake::<Self>()
    }

    fn into_celebrity(self) -> Celebrity {
        let birth_date = NaiveDate::from_ymd_opt(self.birth_year, self.birth_month, self.birth_day)
            .unwrap_or_default();
        let sun_sign = sign_from_date(&birth_date);
        Celebrity {
            id: self.id,
            name: self.name,
            birth_date,
            sun_sign,
            traits: owned_traits(sun_sign),
            image: self.image,
            profession: self.profession,
        }
    }

    pub fn generate_one(&self) -> Celebrity {
        Faker.fake::<Self>().into_celebrity()
    }

    pub fn generate_many(&self, num: u32) -> Vec<Celebrity> {
        (0..num)
            .map(|_| Faker.fake::<Self>().into_celebrity())
            .collect()
    }
}
