//! Canvas entry-point: loads settings, prepares the pixel store, and serves
//! the REST endpoints.

mod server;

use std::io;
use std::path::Path;

use actix_web::cookie::{Key, SameSite};
use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use canvas::inbound::http::health::HealthState;
use canvas::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use canvas::settings::CanvasSettings;

use server::{ServerConfig, create_server};

/// Smallest master key accepted by [`Key::derive_from`].
const MIN_SESSION_KEY_BYTES: usize = 32;

/// Read the session signing key, or fall back to a generated one when allowed.
fn load_session_key(path: &Path, allow_ephemeral: bool) -> io::Result<Key> {
    let failure = match std::fs::read(path) {
        Ok(bytes) if bytes.len() >= MIN_SESSION_KEY_BYTES => return Ok(Key::derive_from(&bytes)),
        Ok(bytes) => format!(
            "session key has {} bytes, need at least {MIN_SESSION_KEY_BYTES}",
            bytes.len()
        ),
        Err(e) => e.to_string(),
    };

    if cfg!(debug_assertions) || allow_ephemeral {
        warn!(path = %path.display(), error = %failure, "using temporary session key (dev only)");
        Ok(Key::generate())
    } else {
        Err(io::Error::other(format!(
            "failed to read session key at {}: {failure}",
            path.display()
        )))
    }
}

async fn connect_store(settings: &CanvasSettings) -> io::Result<Option<DbPool>> {
    let Some(pool_config) = PoolConfig::from_settings(settings) else {
        return Ok(None);
    };
    run_pending_migrations(pool_config.database_url())
        .await
        .map_err(io::Error::other)?;
    let pool = DbPool::new(pool_config).await.map_err(io::Error::other)?;
    Ok(Some(pool))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = CanvasSettings::load_from_iter(std::env::args_os())
        .map_err(|err| io::Error::other(err.to_string()))?;
    let key = load_session_key(&settings.session_key_file(), settings.session_allow_ephemeral)?;

    let mut config = ServerConfig::new(
        key,
        settings.cookie_secure,
        SameSite::Lax,
        settings.bind_addr(),
    );
    if let Some(pool) = connect_store(&settings).await? {
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(addr = %settings.bind_addr(), "canvas listening");
    server.await
}

#[cfg(test)]
mod tests;
