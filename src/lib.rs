use std::sync::Arc;

use poem::{
    middleware::{AddData, AddDataEndpoint, Cors, CorsEndpoint},
    EndpointExt, Route,
};
use poem_openapi::OpenApiService;
use repository::{celebrity::PgCelebrityRepository, profile::PgProfileRepository};
use route::{celebrity::ApiCelebrity, profile::ApiProfile, zodiac::ApiZodiac};
use service::profile::ProfileService;
use settings::Config;
use sqlx::{Pool, Postgres};

pub mod cli;
pub mod core;
pub mod factory;
pub mod model;
pub mod repository;
pub mod route;
pub mod schema;
pub mod service;
pub mod settings;

pub struct AppState {
    pub db: Pool<Postgres>,
    pub jwt_secret: String,
    pub profile_service: ProfileService,
}

impl AppState {
    /// Wire the postgres repositories into the profile service.
    pub fn new(db: Pool<Postgres>, config: &Config) -> Self {
        let profile_service = ProfileService::new(
            Arc::new(PgProfileRepository::new(db.clone())),
            Arc::new(PgCelebrityRepository::new(db.clone())),
        );
        Self {
            db,
            jwt_secret: config.jwt_secret.clone(),
            profile_service,
        }
    }
}

pub fn init_openapi_route(
    app_state: Arc<AppState>,
    config: &Config,
) -> CorsEndpoint<AddDataEndpoint<Route, Arc<AppState>>> {
    let prefix = config.prefix.clone().unwrap_or("/".to_string());
    let openapi_route = OpenApiService::new(
        (ApiProfile, ApiCelebrity, ApiZodiac),
        "Astro Profile",
        "1.0",
    )
    .server(prefix.clone());
    let openapi_json_endpoint = openapi_route.spec_endpoint();
    let ui = openapi_route.swagger_ui();
    Route::new()
        .nest(prefix, openapi_route)
        .nest("/docs", ui)
        .at("openapi.json", openapi_json_endpoint)
        .with(AddData::new(app_state))
        .with(Cors::new())
}
