use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::Deserialize;

use super::common::BadRequestResponse;
use crate::model::zodiac_sign::ZodiacSign;

#[derive(Object, Deserialize)]
pub struct ZodiacResponse {
    pub birth_date: String,
    pub sun_sign: ZodiacSign,
    pub traits: Vec<String>,
}

#[derive(ApiResponse)]
pub enum ZodiacResponses {
    #[oai(status = 200)]
    Ok(Json<ZodiacResponse>),

    #[oai(status = 400)]
    BadRequest(Json<BadRequestResponse>),
}
