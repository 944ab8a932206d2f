//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the structure of their corresponding domain
//! types but live in the inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// No soul is bound to the caller's session.
    #[schema(rename = "unauthenticated")]
    Unauthenticated,
    /// The request body is not a paint request.
    #[schema(rename = "malformed_request")]
    MalformedRequest,
    /// The color is not in the palette.
    #[schema(rename = "invalid_color")]
    InvalidColor,
    /// A coordinate is outside the canvas.
    #[schema(rename = "invalid_coordinate")]
    InvalidCoordinate,
    /// The pixel store could not be read.
    #[schema(rename = "store_unavailable")]
    StoreUnavailable,
    /// The pixel store rejected a write.
    #[schema(rename = "store_write_failed")]
    StoreWriteFailed,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_color")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "invalid color")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Color`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Color)]
#[schema(rename_all = "lowercase")]
pub enum ColorSchema {
    White,
    Black,
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Orange,
}

/// OpenAPI schema for [`crate::domain::Pixel`].
///
/// One painted cell together with the soul that last painted it.
#[derive(ToSchema)]
#[schema(as = crate::domain::Pixel)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PixelSchema {
    #[schema(minimum = 0, example = 2)]
    x: i32,
    #[schema(minimum = 0, example = 3)]
    y: i32,
    color: ColorSchema,
    /// Soul that last painted the pixel.
    #[schema(example = 7)]
    owner: i64,
}

/// OpenAPI schema for [`crate::inbound::http::pixels::PixelsResponse`].
#[derive(ToSchema)]
#[schema(as = crate::inbound::http::pixels::PixelsResponse)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PixelsResponseSchema {
    pixels: Vec<PixelSchema>,
}

/// OpenAPI schema for [`crate::domain::PaintPixelPayload`].
///
/// Coordinates and color are validated by the service, so any integer and
/// any string are accepted at the schema level.
#[derive(ToSchema)]
#[schema(as = crate::domain::PaintPixelPayload)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PaintPixelRequestSchema {
    #[schema(example = 2)]
    x: i64,
    #[schema(example = 3)]
    y: i64,
    #[schema(example = "green")]
    color: String,
}

/// OpenAPI schema for [`crate::inbound::http::souls::SoulResponse`].
#[derive(ToSchema)]
#[schema(as = crate::inbound::http::souls::SoulResponse)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct SoulResponseSchema {
    #[schema(example = 7)]
    id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Color, ErrorCode};
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn error_schema_has_expected_name() {
        let schema_json = schema_to_json::<ErrorSchema>();
        // utoipa replaces :: with . in schema names
        assert_eq!(ErrorSchema::name(), "crate.domain.Error");
        assert!(schema_json.contains("message"));
        assert!(
            schema_json.contains("traceId"),
            "schema should use the camelCase wire name"
        );
    }

    #[test]
    fn error_code_schema_variants_match_domain() {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        for code in [
            ErrorCode::Unauthenticated,
            ErrorCode::MalformedRequest,
            ErrorCode::InvalidColor,
            ErrorCode::InvalidCoordinate,
            ErrorCode::StoreUnavailable,
            ErrorCode::StoreWriteFailed,
            ErrorCode::InternalError,
        ] {
            let wire = serde_json::to_value(code).expect("code serialises");
            let wire = wire.as_str().expect("code is a string");
            assert!(schema_json.contains(wire), "missing {wire}");
        }
    }

    #[test]
    fn color_schema_lists_the_palette() {
        let schema_json = schema_to_json::<ColorSchema>();
        for color in Color::PALETTE {
            assert!(
                schema_json.contains(&format!("\"{color}\"")),
                "missing {color}"
            );
        }
    }

    #[test]
    fn pixel_schema_has_wire_fields() {
        let schema_json = schema_to_json::<PixelSchema>();
        assert_eq!(PixelSchema::name(), "crate.domain.Pixel");
        for field in ["\"x\"", "\"y\"", "\"color\"", "\"owner\""] {
            assert!(schema_json.contains(field), "missing {field}");
        }
    }
}
