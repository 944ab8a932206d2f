//! Domain primitives, services, and ports.
//!
//! Purpose: Define the strongly typed canvas entities used by the HTTP and
//! persistence layers, plus the [`PixelService`] that coordinates them.
//!
//! Public surface:
//! - Color (alias to `color::Color`): one of the eight palette colors.
//! - Coordinate (alias to `pixel::Coordinate`): non-negative grid position.
//! - Pixel (alias to `pixel::Pixel`): one painted cell and its owner.
//! - SoulId (alias to `soul::SoulId`): opaque non-zero caller identity.
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - TraceId (alias to `trace_id::TraceId`): per-request correlation id.

pub mod color;
pub mod error;
pub mod pixel;
pub mod pixel_service;
pub mod ports;
pub mod soul;
pub mod trace_id;

pub use self::color::{Color, UnknownColor};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::pixel::{Coordinate, CoordinateValidationError, PaintPixelPayload, Pixel};
pub use self::pixel_service::PixelService;
pub use self::soul::{SoulId, SoulIdValidationError};
pub use self::trace_id::TraceId;

/// HTTP header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use canvas::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::invalid_color())
/// }
/// # assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
