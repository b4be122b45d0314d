use std::sync::Arc;
use std::time::Duration;

use actix_web::web;

use crate::bootstrap::assemble_app_state;
use crate::config::{AppConfig, Argon2Settings, HasherKind, UpstreamSettings};
use crate::tests::support::auth_helper::test_jwt_config;
use crate::tests::support::stubs::{OfflineLocations, OfflineWeather};
use crate::AppState;

pub fn e2e_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        environment: "test".to_string(),
        cors_origins: vec![],
        password_hasher: HasherKind::Bcrypt,
        argon2: Argon2Settings {
            memory_kib: 4 * 1024,
            iterations: 1,
            parallelism: 1,
        },
        bcrypt_cost: 4,
        analysis_tick: Duration::from_millis(2),
        report_tick: Duration::from_millis(2),
        upstream: UpstreamSettings {
            open_meteo_url: "http://127.0.0.1:9/forecast".to_string(),
            ibge_url: "http://127.0.0.1:9/localidades".to_string(),
            nominatim_url: "http://127.0.0.1:9/search".to_string(),
            timeout: Duration::from_millis(100),
        },
    }
}

pub fn e2e_state() -> web::Data<AppState> {
    let state = assemble_app_state(
        &e2e_config(),
        test_jwt_config(),
        Arc::new(OfflineWeather),
        Arc::new(OfflineLocations),
    )
    .expect("e2e state must assemble");
    web::Data::new(state)
}

/// Full application as served, minus middleware.
macro_rules! e2e_app {
    () => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data($crate::tests::common::e2e_state())
                .configure($crate::bootstrap::init_routes)
                .default_service(actix_web::web::to($crate::shared::api::route_not_found)),
        )
        .await
    };
}

/// Sends `req` and returns `(status, json body)`.
macro_rules! send {
    ($app:expr, $req:expr) => {{
        let resp = actix_web::test::call_service(&$app, $req.to_request()).await;
        let status = resp.status().as_u16();
        let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
        (status, body)
    }};
}

/// Registers a user and returns its bearer token.
macro_rules! register {
    ($app:expr, $email:expr) => {{
        let (status, body) = send!(
            $app,
            actix_web::test::TestRequest::post()
                .uri("/api/auth/register")
                .set_json(serde_json::json!({
                    "firstName": "Ana",
                    "lastName": "Souza",
                    "email": $email,
                    "password": "secret123"
                }))
        );
        assert_eq!(status, 201, "registration failed: {}", body);
        body["token"].as_str().expect("token").to_string()
    }};
}
