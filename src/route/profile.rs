use std::sync::Arc;

use poem::web::Data;
use poem_openapi::{param::Query, payload::Json, OpenApi, Tags};
use uuid::Uuid;

use crate::{
    core::{
        error::ProfileError,
        security::{get_user_id_from_token, BearerAuthorization},
        utils::{parse_date, parse_date_opt},
    },
    model::profile::{NewProfile, ProfileChanges, ProfileKind},
    schema::{
        common::{
            BadRequestResponse, ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
            UnauthorizedResponse,
        },
        profile::{
            MainProfileResponses, ProfileCreateRequest, ProfileCreateResponses,
            ProfileDeleteResponses, ProfileDetailResponses, ProfileListResponses,
            ProfileResponse, ProfileUpdateRequest, ProfileUpdateResponses,
        },
    },
    AppState,
};

#[derive(Tags)]
enum ApiProfileTags {
    Profile,
}

pub struct ApiProfile;

#[OpenApi]
impl ApiProfile {
    #[oai(path = "/profile/", method = "get", tag = "ApiProfileTags::Profile")]
    async fn profile_list_api(
        &self,
        Query(kind): Query<Option<ProfileKind>>,
        state: Data<&Arc<AppState>>,
        auth: BearerAuthorization,
    ) -> ProfileListResponses {
        // Validate user token
        let user_id = match get_user_id_from_token(auth.0.token, &state.jwt_secret) {
            Some(val) => val,
            None => {
                return ProfileListResponses::Unauthorized(Json(UnauthorizedResponse::default()))
            }
        };

        let res = match kind {
            Some(kind) => {
                state
                    .profile_service
                    .get_profiles_by_type(&user_id, kind)
                    .await
            }
            None => state.profile_service.list_profiles(&user_id).await,
        };
        match res {
            Ok(data) => ProfileListResponses::Ok(Json(
                data.into_iter().map(ProfileResponse::from).collect(),
            )),
            Err(err) => ProfileListResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.profile",
                    "profile_list_api",
                    "list profiles",
                    &err.to_string(),
                ),
            )),
        }
    }

    #[oai(path = "/profile/main/", method = "get", tag = "ApiProfileTags::Profile")]
    async fn main_profile_api(
        &self,
        state: Data<&Arc<AppState>>,
        auth: BearerAuthorization,
    ) -> MainProfileResponses {
        // Validate user token
        let user_id = match get_user_id_from_token(auth.0.token, &state.jwt_secret) {
            Some(val) => val,
            None => {
                return MainProfileResponses::Unauthorized(Json(UnauthorizedResponse::default()))
            }
        };

        match state.profile_service.get_main_profile(&user_id).await {
            Ok(data) => MainProfileResponses::Ok(Json(data.map(ProfileResponse::from))),
            Err(err) => MainProfileResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.profile",
                    "main_profile_api",
                    "get_main_profile",
                    &err.to_string(),
                ),
            )),
        }
    }

    #[oai(path = "/profile/detail/", method = "get", tag = "ApiProfileTags::Profile")]
    async fn profile_detail_api(
        &self,
        Query(id): Query<String>,
        state: Data<&Arc<AppState>>,
        auth: BearerAuthorization,
    ) -> ProfileDetailResponses {
        // Validate user token
        let user_id = match get_user_id_from_token(auth.0.token, &state.jwt_secret) {
            Some(val) => val,
            None => {
                return ProfileDetailResponses::Unauthorized(Json(UnauthorizedResponse::default()))
            }
        };

        let id = match Uuid::parse_str(&id) {
            Ok(val) => val,
            Err(_) => {
                return ProfileDetailResponses::NotFound(Json(NotFoundResponse {
                    message: format!("profile with id = {} not found", &id),
                }))
            }
        };
        match state.profile_service.get_profile_by_id(&user_id, &id).await {
            Ok(data) => ProfileDetailResponses::Ok(Json(data.into())),
            Err(ProfileError::NotFound(message)) => {
                ProfileDetailResponses::NotFound(Json(NotFoundResponse { message }))
            }
            Err(err) => ProfileDetailResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.profile",
                    "profile_detail_api",
                    "get_profile_by_id",
                    &err.to_string(),
                ),
            )),
        }
    }

    #[oai(path = "/profile/", method = "post", tag = "ApiProfileTags::Profile")]
    async fn profile_create_api(
        &self,
        Json(json): Json<ProfileCreateRequest>,
        state: Data<&Arc<AppState>>,
        auth: BearerAuthorization,
    ) -> ProfileCreateResponses {
        // Validate user token
        let user_id = match get_user_id_from_token(auth.0.token, &state.jwt_secret) {
            Some(val) => val,
            None => {
                return ProfileCreateResponses::Unauthorized(Json(UnauthorizedResponse::default()))
            }
        };

        let birth_date = match parse_date(&json.birth_date) {
            Ok(val) => val,
            Err(_) => {
                return ProfileCreateResponses::BadRequest(Json(BadRequestResponse {
                    message: format!("birth_date {} is not a YYYY-MM-DD date", json.birth_date),
                }))
            }
        };
        if json.name.trim().is_empty() {
            return ProfileCreateResponses::BadRequest(Json(BadRequestResponse {
                message: "name is required".to_string(),
            }));
        }
        let payload = NewProfile {
            kind: json.kind,
            name: json.name,
            avatar: json.avatar,
            birth_date,
            birth_time: json.birth_time,
            birth_place: json.birth_place,
        };
        match state.profile_service.create_profile(&user_id, payload).await {
            Ok(data) => ProfileCreateResponses::Created(Json(data.into())),
            Err(ProfileError::Conflict(message)) => {
                ProfileCreateResponses::Conflict(Json(ConflictResponse { message }))
            }
            Err(err) => ProfileCreateResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.profile",
                    "profile_create_api",
                    "create_profile",
                    &err.to_string(),
                ),
            )),
        }
    }

    #[oai(path = "/profile/", method = "put", tag = "ApiProfileTags::Profile")]
    async fn profile_update_api(
        &self,
        Query(id): Query<String>,
        Json(json): Json<ProfileUpdateRequest>,
        state: Data<&Arc<AppState>>,
        auth: BearerAuthorization,
    ) -> ProfileUpdateResponses {
        // Validate user token
        let user_id = match get_user_id_from_token(auth.0.token, &state.jwt_secret) {
            Some(val) => val,
            None => {
                return ProfileUpdateResponses::Unauthorized(Json(UnauthorizedResponse::default()))
            }
        };

        let id = match Uuid::parse_str(&id) {
            Ok(val) => val,
            Err(_) => {
                return ProfileUpdateResponses::NotFound(Json(NotFoundResponse {
                    message: format!("profile with id = {} not found", &id),
                }))
            }
        };
        let birth_date = match parse_date_opt(json.birth_date.clone()) {
            Ok(val) => val,
            Err(_) => {
                return ProfileUpdateResponses::BadRequest(Json(BadRequestResponse {
                    message: format!(
                        "birth_date {} is not a YYYY-MM-DD date",
                        json.birth_date.unwrap_or_default()
                    ),
                }))
            }
        };
        if json.name.as_deref().is_some_and(|x| x.trim().is_empty()) {
            return ProfileUpdateResponses::BadRequest(Json(BadRequestResponse {
                message: "name can not be blank".to_string(),
            }));
        }
        let payload = ProfileChanges {
            name: json.name,
            avatar: json.avatar,
            birth_date,
            birth_time: json.birth_time,
            birth_place: json.birth_place,
        };
        match state
            .profile_service
            .update_profile(&user_id, &id, payload)
            .await
        {
            Ok(data) => ProfileUpdateResponses::Ok(Json(data.into())),
            Err(ProfileError::NotFound(message)) => {
                ProfileUpdateResponses::NotFound(Json(NotFoundResponse { message }))
            }
            Err(err) => ProfileUpdateResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.profile",
                    "profile_update_api",
                    "update_profile",
                    &err.to_string(),
                ),
            )),
        }
    }

    #[oai(path = "/profile/", method = "delete", tag = "ApiProfileTags::Profile")]
    async fn profile_delete_api(
        &self,
        Query(id): Query<String>,
        state: Data<&Arc<AppState>>,
        auth: BearerAuthorization,
    ) -> ProfileDeleteResponses {
        // Validate user token
        let user_id = match get_user_id_from_token(auth.0.token, &state.jwt_secret) {
            Some(val) => val,
            None => {
                return ProfileDeleteResponses::Unauthorized(Json(UnauthorizedResponse::default()))
            }
        };

        let id = match Uuid::parse_str(&id) {
            Ok(val) => val,
            Err(_) => {
                return ProfileDeleteResponses::NotFound(Json(NotFoundResponse {
                    message: format!("profile with id = {} not found", &id),
                }))
            }
        };
        match state.profile_service.delete_profile(&user_id, &id).await {
            Ok(()) => ProfileDeleteResponses::NoContent,
            Err(ProfileError::NotFound(message)) => {
                ProfileDeleteResponses::NotFound(Json(NotFoundResponse { message }))
            }
            Err(ProfileError::Conflict(message)) => {
                ProfileDeleteResponses::Conflict(Json(ConflictResponse { message }))
            }
            Err(err) => ProfileDeleteResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.profile",
                    "profile_delete_api",
                    "delete_profile",
                    &err.to_string(),
                ),
            )),
        }
    }
}
