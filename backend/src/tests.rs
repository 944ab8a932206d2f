//! Tests for the canvas bootstrap, covering session key loading and
//! readiness signalling.

use super::{MIN_SESSION_KEY_BYTES, load_session_key};
use crate::server::{ServerConfig, create_server};
use actix_web::cookie::{Key, SameSite};
use actix_web::web;
use canvas::inbound::http::health::HealthState;
use rstest::{fixture, rstest};
use std::path::PathBuf;
use uuid::Uuid;

#[fixture]
fn health_state() -> web::Data<HealthState> {
    web::Data::new(HealthState::new())
}

#[fixture]
fn server_config() -> ServerConfig {
    ServerConfig::new(
        Key::generate(),
        false,
        SameSite::Lax,
        "127.0.0.1:0".parse().expect("loopback address"),
    )
}

fn scratch_key_path() -> PathBuf {
    std::env::temp_dir().join(format!("canvas-session-key-{}", Uuid::new_v4()))
}

#[rstest]
#[actix_rt::test]
async fn create_server_marks_ready(
    health_state: web::Data<HealthState>,
    server_config: ServerConfig,
) {
    assert!(!health_state.is_ready(), "state should start unready");
    assert_eq!(server_config.bind_addr().port(), 0);

    let _server =
        create_server(health_state.clone(), server_config).expect("server should build");

    assert!(
        health_state.is_ready(),
        "server creation should mark readiness"
    );
}

#[rstest]
fn session_key_is_derived_from_file() {
    let path = scratch_key_path();
    let material = vec![7_u8; MIN_SESSION_KEY_BYTES * 2];
    std::fs::write(&path, &material).expect("write key file");

    let loaded = load_session_key(&path, false).expect("key loads");
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded.master(), Key::derive_from(&material).master());
}

#[rstest]
#[case(false)]
#[case(true)]
fn missing_key_file_falls_back_in_debug_builds(#[case] allow_ephemeral: bool) {
    let path = scratch_key_path();

    let result = load_session_key(&path, allow_ephemeral);

    if cfg!(debug_assertions) || allow_ephemeral {
        assert!(result.is_ok(), "ephemeral key expected");
    } else {
        assert!(result.is_err(), "missing key must be fatal");
    }
}

#[rstest]
fn short_key_file_falls_back_to_ephemeral_key() {
    let path = scratch_key_path();
    std::fs::write(&path, b"too short").expect("write key file");

    let result = load_session_key(&path, true);
    let _ = std::fs::remove_file(&path);

    assert!(result.is_ok(), "short key falls back instead of panicking");
}
