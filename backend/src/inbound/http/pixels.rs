//! Canvas API handlers.
//!
//! ```text
//! GET /pixels
//! POST /pixels:paint {"x":2,"y":3,"color":"green"}
//! ```

use actix_web::{HttpResponse, get, post, web};
use futures_util::StreamExt;
use serde::Serialize;
use tracing::debug;

use crate::domain::{Error, Pixel};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, PaintPixelRequestSchema, PixelsResponseSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Response body for `GET /pixels`.
#[derive(Debug, Serialize)]
pub struct PixelsResponse {
    /// Every painted pixel, empty when nothing has been painted.
    pub pixels: Vec<Pixel>,
}

/// List every painted pixel.
#[utoipa::path(
    get,
    path = "/pixels",
    responses(
        (status = 200, description = "Painted pixels", body = PixelsResponseSchema),
        (status = 500, description = "Pixel store unavailable", body = ErrorSchema)
    ),
    tags = ["pixels"],
    operation_id = "listPixels",
    security([])
)]
#[get("/pixels")]
pub async fn list_pixels(state: web::Data<HttpState>) -> ApiResult<web::Json<PixelsResponse>> {
    let pixels = state.pixels_query.list_pixels().await?;
    Ok(web::Json(PixelsResponse { pixels }))
}

/// Largest paint body read from the wire.
pub const MAX_PAINT_BODY_BYTES: usize = 64 * 1024;

/// Paint one pixel on behalf of the session's soul.
///
/// The body is streamed only once the session resolves to a soul, so an
/// anonymous caller is rejected before any of the payload is read or decoded.
#[utoipa::path(
    post,
    path = "/pixels:paint",
    request_body = PaintPixelRequestSchema,
    responses(
        (status = 204, description = "Pixel painted"),
        (status = 401, description = "No soul bound to the session", body = ErrorSchema),
        (status = 422, description = "Malformed or oversized body, invalid color or coordinate", body = ErrorSchema),
        (status = 500, description = "Pixel store write failed", body = ErrorSchema)
    ),
    tags = ["pixels"],
    operation_id = "paintPixel"
)]
#[post("/pixels:paint")]
pub async fn paint_pixel(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Payload,
) -> ApiResult<HttpResponse> {
    let caller = session.soul();
    let body = match caller {
        Some(_) => read_body(payload).await?,
        None => web::BytesMut::new(),
    };
    state.pixels_command.paint_pixel(caller, &body).await?;
    Ok(HttpResponse::NoContent().finish())
}

async fn read_body(mut payload: web::Payload) -> Result<web::BytesMut, Error> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|err| {
            debug!(error = %err, "paint body could not be read");
            Error::malformed_request()
        })?;
        if body.len() + chunk.len() > MAX_PAINT_BODY_BYTES {
            debug!(limit = MAX_PAINT_BODY_BYTES, "paint body too large");
            return Err(Error::malformed_request());
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}
