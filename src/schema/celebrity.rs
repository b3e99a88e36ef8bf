use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::Deserialize;

use super::common::{InternalServerErrorResponse, UnauthorizedResponse};
use crate::{
    core::utils::date_to_string,
    model::{celebrity::Celebrity, zodiac_sign::ZodiacSign},
};

#[derive(Object, Deserialize)]
pub struct CelebrityResponse {
    pub id: String,
    pub name: String,
    pub birth_date: String,
    pub sun_sign: ZodiacSign,
    pub traits: Vec<String>,
    pub image: Option<String>,
    pub profession: Option<String>,
}

impl From<Celebrity> for CelebrityResponse {
    fn from(x: Celebrity) -> Self {
        Self {
            id: x.id.to_string(),
            name: x.name,
            birth_date: date_to_string(x.birth_date),
            sun_sign: x.sun_sign,
            traits: x.traits,
            image: x.image,
            profession: x.profession,
        }
    }
}

#[derive(ApiResponse)]
pub enum CelebritySearchResponses {
    #[oai(status = 200)]
    Ok(Json<Vec<CelebrityResponse>>),

    #[oai(status = 401)]
    Unauthorized(Json<UnauthorizedResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}
