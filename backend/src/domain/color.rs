//! Canvas palette.
//!
//! The palette is closed: a color either is one of the eight variants below
//! or it is rejected. Parsing is an exact match against the lowercase names,
//! so `"Black"`, `" red"` and `""` are all invalid.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the fixed paint colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Color {
    /// `black`
    Black,
    /// `white`
    White,
    /// `red`
    Red,
    /// `green`
    Green,
    /// `blue`
    Blue,
    /// `yellow`
    Yellow,
    /// `purple`
    Purple,
    /// `orange`
    Orange,
}

/// Returned when a string is not a palette color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("color `{0}` is not in the palette")]
pub struct UnknownColor(pub String);

impl Color {
    /// Every paintable color, in palette order.
    pub const PALETTE: [Color; 8] = [
        Color::Black,
        Color::White,
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Purple,
        Color::Orange,
    ];

    /// Wire and storage name of the color.
    ///
    /// # Examples
    /// ```
    /// use canvas::domain::Color;
    ///
    /// assert_eq!(Color::Purple.as_str(), "purple");
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
            Self::Orange => "orange",
        }
    }
}

impl FromStr for Color {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::PALETTE
            .into_iter()
            .find(|color| color.as_str() == s)
            .ok_or_else(|| UnknownColor(s.to_owned()))
    }
}

impl TryFrom<String> for Color {
    type Error = UnknownColor;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for &'static str {
    fn from(value: Color) -> Self {
        value.as_str()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn every_palette_color_parses_from_its_name() {
        for color in Color::PALETTE {
            assert_eq!(color.as_str().parse::<Color>(), Ok(color));
        }
    }

    #[rstest]
    #[case("")]
    #[case("Black")]
    #[case("RED")]
    #[case(" red")]
    #[case("green ")]
    #[case("pink")]
    #[case("#000000")]
    fn rejects_values_outside_the_palette(#[case] raw: &str) {
        let err = raw.parse::<Color>().expect_err("not a palette color");
        assert_eq!(err, UnknownColor(raw.to_owned()));
    }

    #[rstest]
    fn serialises_as_lowercase_name() {
        let value = serde_json::to_value(Color::Orange).expect("serialise");
        assert_eq!(value, serde_json::json!("orange"));
    }

    #[rstest]
    fn deserialise_rejects_unknown_names() {
        assert!(serde_json::from_str::<Color>("\"Yellow\"").is_err());
        assert_eq!(
            serde_json::from_str::<Color>("\"yellow\"").expect("palette color"),
            Color::Yellow
        );
    }
}
