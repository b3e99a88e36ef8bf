use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    core::utils::parse_date,
    model::celebrity::Celebrity,
    repository::celebrity::{CelebrityRepository, PgCelebrityRepository},
    service::zodiac::{owned_traits, sign_from_date},
};

/// Insert a catalogue entry with its sun sign and traits precomputed.
pub async fn add_celebrity(
    pool: &PgPool,
    name: &str,
    birth_date: &str,
    profession: Option<String>,
    image: Option<String>,
) -> anyhow::Result<Celebrity> {
    let birth_date = parse_date(birth_date)?;
    let sun_sign = sign_from_date(&birth_date);
    let celebrity = Celebrity {
        id: Uuid::now_v7(),
        name: name.to_string(),
        birth_date,
        sun_sign,
        traits: owned_traits(sun_sign),
        image,
        profession,
    };
    PgCelebrityRepository::new(pool.clone())
        .create(&celebrity)
        .await?;
    Ok(celebrity)
}
