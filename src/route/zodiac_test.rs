use std::sync::Arc;

use poem::{http::StatusCode, test::TestClient};
use serde_json::json;
use sqlx::PgPool;

use crate::{core::test_utils::test_config, init_openapi_route, AppState};

#[sqlx::test]
async fn test_zodiac_api(pool: PgPool) -> anyhow::Result<()> {
    // Given
    let config = test_config();
    let app_state = Arc::new(AppState::new(pool, &config));
    let app = init_openapi_route(app_state.clone(), &config);
    let cli = TestClient::new(app);

    // When
    let resp = cli
        .get("/api/zodiac")
        .query("birth_date", &"1985-12-22")
        .send()
        .await;
    let resp_bad = cli
        .get("/api/zodiac")
        .query("birth_date", &"1985-13-01")
        .send()
        .await;

    // Expect
    resp.assert_status_is_ok();
    resp.assert_json(&json!({
        "birth_date": "1985-12-22",
        "sun_sign": "capricorn",
        "traits": ["Responsavel", "Disciplinado", "Ambicioso", "Pratico", "Paciente"]
    }))
    .await;
    resp_bad.assert_status(StatusCode::BAD_REQUEST);
    Ok(())
}
