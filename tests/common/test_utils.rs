#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, header::ORIGIN},
};
use dice_api::{
    config::{Config, CorsConfig, LogsConfig, ServerConfig},
    server,
};
use serde_json::Value;
use tower::ServiceExt; // for `oneshot`

pub const FRONT_END: &str = "https://dice.example.com";

pub const INVALID_PARAMS: &str = "Invalid params: 1<=count<=20, 2<=sides<=100";

/// Create a test configuration allowing only [`FRONT_END`]
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        cors: CorsConfig {
            allowed_origin: FRONT_END.to_string(),
        },
    }
}

pub fn create_test_app() -> Router {
    server::build_router(&create_test_config()).unwrap()
}

/// Issue a GET, optionally with an `Origin` header
pub async fn get(app: Router, uri: &str, origin: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(origin) = origin {
        builder = builder.header(ORIGIN, origin);
    }
    let request = builder.body(Body::empty()).unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8080
  logs:
    level: "debug"

cors:
  allowed_origin: "http://localhost:5173"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
"#;
