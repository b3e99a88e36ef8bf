use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::prelude::FromRow;
use uuid::Uuid;

use super::zodiac_sign::ZodiacSign;

pub const TABLE_NAME: &str = "public.celebrity";

#[derive(Clone, Debug, Deserialize, FromRow)]
pub struct Celebrity {
    pub id: Uuid,
    pub name: String,
    pub birth_date: NaiveDate,
    pub sun_sign: ZodiacSign,
    pub traits: Vec<String>,
    pub image: Option<String>,
    pub profession: Option<String>,
}
