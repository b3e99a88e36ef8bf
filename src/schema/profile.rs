use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::Deserialize;

use super::common::{
    BadRequestResponse, ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
    UnauthorizedResponse,
};
use crate::{
    core::utils::{date_to_string, datetime_to_string},
    model::{
        profile::{Profile, ProfileKind},
        zodiac_sign::ZodiacSign,
    },
};

#[derive(Object, Deserialize)]
pub struct ProfileResponse {
    pub id: String,
    pub kind: ProfileKind,
    pub name: String,
    pub avatar: Option<String>,
    pub birth_date: String,
    pub birth_time: Option<String>,
    pub birth_place: Option<String>,
    pub sun_sign: ZodiacSign,
    pub moon_sign: Option<String>,
    pub ascendant: Option<String>,
    pub traits: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Profile> for ProfileResponse {
    fn from(x: Profile) -> Self {
        Self {
            id: x.id.to_string(),
            kind: x.kind,
            name: x.name,
            avatar: x.avatar,
            birth_date: date_to_string(x.birth_date),
            birth_time: x.birth_time,
            birth_place: x.birth_place,
            sun_sign: x.sun_sign,
            moon_sign: x.moon_sign,
            ascendant: x.ascendant,
            traits: x.traits,
            created_at: datetime_to_string(x.created_at),
            updated_at: datetime_to_string(x.updated_at),
        }
    }
}

#[derive(ApiResponse)]
pub enum ProfileListResponses {
    #[oai(status = 200)]
    Ok(Json<Vec<ProfileResponse>>),

    #[oai(status = 401)]
    Unauthorized(Json<UnauthorizedResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[allow(clippy::large_enum_variant)]
#[derive(ApiResponse)]
pub enum MainProfileResponses {
    /// `null` when the user has no main profile yet
    #[oai(status = 200)]
    Ok(Json<Option<ProfileResponse>>),

    #[oai(status = 401)]
    Unauthorized(Json<UnauthorizedResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[allow(clippy::large_enum_variant)]
#[derive(ApiResponse)]
pub enum ProfileDetailResponses {
    #[oai(status = 200)]
    Ok(Json<ProfileResponse>),

    #[oai(status = 401)]
    Unauthorized(Json<UnauthorizedResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(Object, Deserialize)]
pub struct ProfileCreateRequest {
    pub kind: ProfileKind,
    pub name: String,
    pub avatar: Option<String>,
    /// YYYY-MM-DD
    pub birth_date: String,
    pub birth_time: Option<String>,
    pub birth_place: Option<String>,
}

#[allow(clippy::large_enum_variant)]
#[derive(ApiResponse)]
pub enum ProfileCreateResponses {
    #[oai(status = 201)]
    Created(Json<ProfileResponse>),

    #[oai(status = 400)]
    BadRequest(Json<BadRequestResponse>),

    #[oai(status = 401)]
    Unauthorized(Json<UnauthorizedResponse>),

    #[oai(status = 409)]
    Conflict(Json<ConflictResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(Object, Deserialize)]
pub struct ProfileUpdateRequest {
    pub name: Option<String>,
    pub avatar: Option<String>,
    /// YYYY-MM-DD
    pub birth_date: Option<String>,
    pub birth_time: Option<String>,
    pub birth_place: Option<String>,
}

#[allow(clippy::large_enum_variant)]
#[derive(ApiResponse)]
pub enum ProfileUpdateResponses {
    #[oai(status = 200)]
    Ok(Json<ProfileResponse>),

    #[oai(status = 400)]
    BadRequest(Json<BadRequestResponse>),

    #[oai(status = 401)]
    Unauthorized(Json<UnauthorizedResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(ApiResponse)]
pub enum ProfileDeleteResponses {
    #[oai(status = 204)]
    NoContent,

    #[oai(status = 401)]
    Unauthorized(Json<UnauthorizedResponse>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 409)]
    Conflict(Json<ConflictResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}
