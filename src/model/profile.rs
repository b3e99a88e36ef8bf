use chrono::{DateTime, FixedOffset, NaiveDate};
use poem_openapi::Enum;
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use uuid::Uuid;

use super::zodiac_sign::ZodiacSign;

pub const TABLE_NAME: &str = "public.profile";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, Enum, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[oai(rename_all = "lowercase")]
#[sqlx(type_name = "profile_kind", rename_all = "lowercase")]
pub enum ProfileKind {
    Main,
    Partner,
    Child,
    Friend,
    Crush,
    Celebrity,
}

#[derive(Clone, Debug, Deserialize, FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: ProfileKind,
    pub name: String,
    pub avatar: Option<String>,
    pub birth_date: NaiveDate,
    pub birth_time: Option<String>,
    pub birth_place: Option<String>,
    pub sun_sign: ZodiacSign,
    pub moon_sign: Option<String>,
    pub ascendant: Option<String>,
    pub traits: Vec<String>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

/// Fields accepted when creating a profile. Sun sign and traits are derived.
#[derive(Clone, Debug)]
pub struct NewProfile {
    pub kind: ProfileKind,
    pub name: String,
    pub avatar: Option<String>,
    pub birth_date: NaiveDate,
    pub birth_time: Option<String>,
    pub birth_place: Option<String>,
}

/// Partial update, `None` leaves the stored value untouched.
#[derive(Clone, Debug, Default)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub birth_time: Option<String>,
    pub birth_place: Option<String>,
}

impl ProfileChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.avatar.is_none()
            && self.birth_date.is_none()
            && self.birth_time.is_none()
            && self.birth_place.is_none()
    }
}
