//! Soul API handlers.
//!
//! ```text
//! POST /souls
//! GET /souls/me
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::Serialize;
use tracing::{error, info};

use crate::domain::{Error, SoulId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, SoulResponseSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Response body describing a soul.
#[derive(Debug, Serialize)]
pub struct SoulResponse {
    /// Identifier of the soul bound to the session.
    pub id: SoulId,
}

/// Mint a new soul and bind it to the session cookie.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use canvas::inbound::http::souls::register_soul;
///
/// let app = App::new().service(register_soul);
/// ```
#[utoipa::path(
    post,
    path = "/souls",
    responses(
        (status = 201, description = "Soul created", body = SoulResponseSchema,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["souls"],
    operation_id = "registerSoul",
    security([])
)]
#[post("/souls")]
pub async fn register_soul(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let id = state.souls.register().await.map_err(|failure| {
        error!(error = %failure, "soul registration failed");
        Error::internal("can't create a soul")
    })?;
    session.persist_soul(id)?;
    info!(soul = %id, "soul registered");
    Ok(HttpResponse::Created().json(SoulResponse { id }))
}

/// Return the soul bound to the session.
#[utoipa::path(
    get,
    path = "/souls/me",
    responses(
        (status = 200, description = "Current soul", body = SoulResponseSchema),
        (status = 401, description = "No soul bound to the session", body = ErrorSchema)
    ),
    tags = ["souls"],
    operation_id = "currentSoul"
)]
#[get("/souls/me")]
pub async fn current_soul(session: SessionContext) -> ApiResult<web::Json<SoulResponse>> {
    let id = session.soul().ok_or_else(Error::unauthenticated)?;
    Ok(web::Json(SoulResponse { id }))
}
