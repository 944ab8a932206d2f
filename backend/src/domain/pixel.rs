//! Pixel data model.
//!
//! A [`Pixel`] is the paint state of one canvas cell. The store keeps at most
//! one pixel per `(x, y)`; painting a coordinate again replaces its color and
//! owner. Unpainted cells have no record at all.

use std::fmt;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{Color, SoulId};

/// Validation errors returned when building a [`Coordinate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CoordinateValidationError {
    /// The value is below zero.
    #[error("coordinate {0} is negative")]
    Negative(i64),
    /// The value does not fit the canvas coordinate range.
    #[error("coordinate {0} exceeds {max}", max = i32::MAX)]
    OutOfRange(i64),
}

/// Non-negative canvas coordinate.
///
/// The range is `0..=i32::MAX`, matching the integer columns of the
/// PostgreSQL store.
///
/// # Examples
/// ```
/// use canvas::domain::Coordinate;
///
/// let x = Coordinate::new(12).expect("valid coordinate");
/// assert_eq!(x.get(), 12);
/// assert!(Coordinate::new(-1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i32")]
pub struct Coordinate(i32);

impl Coordinate {
    /// Validate and construct a coordinate.
    pub fn new(raw: i64) -> Result<Self, CoordinateValidationError> {
        if raw < 0 {
            return Err(CoordinateValidationError::Negative(raw));
        }
        i32::try_from(raw)
            .map(Self)
            .map_err(|_| CoordinateValidationError::OutOfRange(raw))
    }

    /// Raw value.
    pub fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i64> for Coordinate {
    type Error = CoordinateValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Coordinate> for i32 {
    fn from(value: Coordinate) -> Self {
        value.get()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Paint state of one canvas cell.
///
/// Serialised as `{"x": 2, "y": 3, "color": "green", "owner": 7}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pixel {
    /// Column of the cell.
    pub x: Coordinate,
    /// Row of the cell.
    pub y: Coordinate,
    /// Current color.
    pub color: Color,
    /// Soul that last painted the cell.
    pub owner: SoulId,
}

impl Pixel {
    /// Canvas position of the pixel.
    pub fn position(&self) -> (Coordinate, Coordinate) {
        (self.x, self.y)
    }
}

/// Undecoded paint request body, `{"x": int, "y": int, "color": string}`.
///
/// Decoding is lenient about shape: a missing or `null` field takes its zero
/// value, a `null` body is an all-zero request, unknown fields are ignored and
/// only the first JSON value of the body is read. Invalid JSON, a non-object
/// body or a field of the wrong type is rejected. Color membership and the
/// coordinate range are validated afterwards by the pixel service so each
/// failure keeps its own error kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaintPixelPayload {
    /// Requested column.
    #[serde(default, deserialize_with = "null_as_default")]
    pub x: i64,
    /// Requested row.
    #[serde(default, deserialize_with = "null_as_default")]
    pub y: i64,
    /// Requested color name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl PaintPixelPayload {
    /// Decode the first JSON value of a request body.
    ///
    /// # Examples
    /// ```
    /// use canvas::domain::PaintPixelPayload;
    ///
    /// let payload = PaintPixelPayload::decode(br#"{"color": "red"} trailing"#)
    ///     .expect("decodes");
    /// assert_eq!((payload.x, payload.y, payload.color.as_str()), (0, 0, "red"));
    /// assert!(PaintPixelPayload::decode(b"[1, 2]").is_err());
    /// ```
    pub fn decode(body: &[u8]) -> Result<Self, serde_json::Error> {
        let first = serde_json::Deserializer::from_slice(body)
            .into_iter::<Value>()
            .next()
            .ok_or_else(|| <serde_json::Error as de::Error>::custom("empty body"))??;
        if first.is_null() {
            return Ok(Self::default());
        }
        if !first.is_object() {
            return Err(de::Error::invalid_type(
                unexpected(&first),
                &"a paint request object",
            ));
        }
        serde_json::from_value(first)
    }
}

fn unexpected(value: &Value) -> de::Unexpected<'_> {
    match value {
        Value::Bool(flag) => de::Unexpected::Bool(*flag),
        Value::Number(_) => de::Unexpected::Other("number"),
        Value::String(text) => de::Unexpected::Str(text),
        Value::Array(_) => de::Unexpected::Seq,
        Value::Null | Value::Object(_) => de::Unexpected::Other("value"),
    }
}
