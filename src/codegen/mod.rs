// src/codegen/mod.rs
// Snippet generators for Appium gestures
//
// Each generator validates its request, picks a template for the
// (language, target) pair and substitutes the request values verbatim.
// Values are not escaped: an elementId is embedded exactly as given.

pub mod double_tap;
pub mod long_press;
pub mod requests;
pub mod scroll;
pub mod swipe;
pub mod tap;

use crate::error::{GestureError, Result};
use rmcp::schemars;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use requests::{
    DoubleTapRequest, LongPressRequest, ScrollRequest, SwipeRequest, TapRequest,
};

/// Snippet dialect
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    schemars::JsonSchema,
    strum::IntoStaticStr,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    /// WebdriverIO
    Javascript,
    /// Appium Java client
    Java,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Cardinal direction of a scroll or swipe
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    schemars::JsonSchema,
    strum::IntoStaticStr,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates, formatted for a snippet
    pub fn js(self) -> (JsNumber, JsNumber) {
        (JsNumber(self.x), JsNumber(self.y))
    }
}

/// A number printed the way JavaScript's `String(n)` prints it.
///
/// Integral values have no fractional part, `-0` prints as `0`, and
/// magnitudes of 1e21 and above or below 1e-6 use exponent notation with an
/// explicit sign (`1e+21`, `1.5e-7`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsNumber(pub f64);

impl fmt::Display for JsNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0;
        if n == 0.0 {
            return f.write_str("0");
        }
        if n.is_nan() {
            return f.write_str("NaN");
        }
        if n.is_infinite() {
            return f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" });
        }

        let magnitude = n.abs();
        if (1e-6..1e21).contains(&magnitude) {
            return write!(f, "{n}");
        }

        let exp = format!("{n:e}");
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => write!(f, "{mantissa}e+{power}"),
            _ => f.write_str(&exp),
        }
    }
}

/// What a gesture acts on
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Target<'a> {
    /// Element located by accessibility id
    Element(&'a str),
    /// Raw screen position
    Coordinates(Point),
}

impl<'a> Target<'a> {
    /// Validate the element/coordinate fields of a request.
    ///
    /// The element check runs first, so a request with `use_element` set and
    /// no id always reports `elementId` regardless of the coordinates. An
    /// empty id counts as missing.
    pub fn resolve(
        use_element: bool,
        element_id: Option<&'a str>,
        x: Option<f64>,
        y: Option<f64>,
    ) -> Result<Self> {
        if use_element {
            return match element_id {
                Some(id) if !id.is_empty() => Ok(Target::Element(id)),
                _ => Err(GestureError::MissingRequiredField("elementId")),
            };
        }

        match (x, y) {
            (Some(x), Some(y)) => Ok(Target::Coordinates(Point::new(x, y))),
            _ => Err(GestureError::MissingRequiredField("x/y")),
        }
    }
}
