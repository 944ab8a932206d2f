//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the canvas, soul, and health endpoints together with
//! the schema wrappers from [`crate::inbound::http::schemas`], so domain
//! types stay free of utoipa derives. The document backs Swagger UI in debug
//! builds and is exported by the `openapi-dump` binary.

use crate::inbound::http::schemas::{
    ColorSchema, ErrorCodeSchema, ErrorSchema, PaintPixelRequestSchema, PixelSchema,
    PixelsResponseSchema, SoulResponseSchema,
};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie carrying the soul issued by POST /souls.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Canvas API",
        description = "Shared pixel canvas painted by session-bound souls."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::pixels::list_pixels,
        crate::inbound::http::pixels::paint_pixel,
        crate::inbound::http::souls::register_soul,
        crate::inbound::http::souls::current_soul,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        PixelSchema,
        PixelsResponseSchema,
        PaintPixelRequestSchema,
        ColorSchema,
        SoulResponseSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "pixels", description = "Reading and painting the canvas"),
        (name = "souls", description = "Caller identities"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
