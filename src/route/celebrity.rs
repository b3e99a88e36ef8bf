use std::sync::Arc;

use poem::web::Data;
use poem_openapi::{param::Query, payload::Json, OpenApi, Tags};

use crate::{
    core::security::{get_user_id_from_token, BearerAuthorization},
    schema::{
        celebrity::{CelebrityResponse, CelebritySearchResponses},
        common::{InternalServerErrorResponse, UnauthorizedResponse},
    },
    AppState,
};

#[derive(Tags)]
enum ApiCelebrityTags {
    Celebrity,
}

pub struct ApiCelebrity;

#[OpenApi]
impl ApiCelebrity {
    #[oai(path = "/celebrity/", method = "get", tag = "ApiCelebrityTags::Celebrity")]
    async fn celebrity_search_api(
        &self,
        Query(search): Query<Option<String>>,
        state: Data<&Arc<AppState>>,
        auth: BearerAuthorization,
    ) -> CelebritySearchResponses {
        // Validate user token
        if get_user_id_from_token(auth.0.token, &state.jwt_secret).is_none() {
            return CelebritySearchResponses::Unauthorized(Json(UnauthorizedResponse::default()));
        }

        match state
            .profile_service
            .search_celebrities(search.as_deref())
            .await
        {
            Ok(data) => CelebritySearchResponses::Ok(Json(
                data.into_iter().map(CelebrityResponse::from).collect(),
            )),
            Err(err) => CelebritySearchResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.celebrity",
                    "celebrity_search_api",
                    "search_celebrities",
                    &err.to_string(),
                ),
            )),
        }
    }
}
