// src/dispatch.rs
// Routes externally visible operation names to snippet generators

use crate::catalog;
use crate::codegen::{self, DoubleTapRequest, LongPressRequest, ScrollRequest, SwipeRequest, TapRequest};
use crate::error::{GestureError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use strum::IntoEnumIterator;
use tracing::debug;

/// Code generation operations, in registration order
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::IntoStaticStr,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Operation {
    #[strum(serialize = "generate-tap-code")]
    Tap,
    #[strum(serialize = "generate-swipe-code")]
    Swipe,
    #[strum(serialize = "generate-scroll-code")]
    Scroll,
    #[strum(serialize = "generate-long-press-code")]
    LongPress,
    #[strum(serialize = "generate-double-tap-code")]
    DoubleTap,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    pub fn description(&self) -> &'static str {
        match self {
            Operation::Tap => "Generate code for tap gesture in Appium",
            Operation::Swipe => "Generate code for swipe gesture in Appium",
            Operation::Scroll => "Generate code for scroll gesture in Appium",
            Operation::LongPress => "Generate code for long press gesture in Appium",
            Operation::DoubleTap => "Generate code for double tap gesture in Appium",
        }
    }

    /// Decode `params` into this operation's request type and run its generator
    pub fn run(&self, params: Value) -> Result<String> {
        match self {
            Operation::Tap => codegen::tap::generate(&decode::<TapRequest>(params)?),
            Operation::Swipe => codegen::swipe::generate(&decode::<SwipeRequest>(params)?),
            Operation::Scroll => codegen::scroll::generate(&decode::<ScrollRequest>(params)?),
            Operation::LongPress => {
                codegen::long_press::generate(&decode::<LongPressRequest>(params)?)
            }
            Operation::DoubleTap => {
                codegen::double_tap::generate(&decode::<DoubleTapRequest>(params)?)
            }
        }
    }
}

fn decode<T: DeserializeOwned>(params: Value) -> Result<T> {
    // A call without arguments is treated as an empty object so that
    // required-field errors name the field instead of the shape
    let params = if params.is_null() {
        Value::Object(Default::default())
    } else {
        params
    };
    Ok(serde_json::from_value(params)?)
}

/// Names of every generate operation, in registration order
pub fn operation_names() -> Vec<&'static str> {
    Operation::iter().map(|op| op.as_str()).collect()
}

/// Resolve an operation by name and run it
pub fn generate(name: &str, params: Value) -> Result<String> {
    let op: Operation = name
        .parse()
        .map_err(|_| GestureError::NotFound(name.to_string()))?;
    debug!(operation = op.as_str(), "Generating snippet");
    op.run(params)
}

/// Look up a gesture document by free-form name (never fails)
pub fn lookup_doc(name: &str) -> String {
    catalog::lookup_doc(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn operation_names_in_order() {
        assert_eq!(
            operation_names(),
            vec![
                "generate-tap-code",
                "generate-swipe-code",
                "generate-scroll-code",
                "generate-long-press-code",
                "generate-double-tap-code",
            ]
        );
    }

    #[test]
    fn unknown_operation_is_not_found() {
        let err = generate("generate-pinch-code", json!({})).unwrap_err();
        assert!(matches!(err, GestureError::NotFound(ref name) if name == "generate-pinch-code"));
    }

    #[test]
    fn tap_end_to_end() {
        let code = generate(
            "generate-tap-code",
            json!({ "language": "javascript", "useElement": true, "elementId": "login-btn" }),
        )
        .unwrap();
        assert!(code.contains("login-btn"));
    }

    #[test]
    fn bad_params_are_invalid() {
        let err = generate("generate-scroll-code", json!({ "language": "java", "direction": "sideways" }))
            .unwrap_err();
        assert!(matches!(err, GestureError::InvalidParams(_)));
    }

    #[test]
    fn null_params_report_missing_field() {
        let err = generate("generate-swipe-code", Value::Null).unwrap_err();
        assert!(err.to_string().contains("language"));
    }

    #[test]
    fn every_operation_validates_element_id() {
        for op in [Operation::Tap, Operation::Scroll, Operation::LongPress, Operation::DoubleTap] {
            let params = json!({ "language": "java", "direction": "down", "useElement": true });
            let err = op.run(params).unwrap_err();
            assert_eq!(err.missing_field(), Some("elementId"), "{}", op.as_str());
        }
    }

    #[test]
    fn output_is_deterministic() {
        let params = json!({ "language": "javascript", "direction": "left", "distance": 120 });
        let first = generate("generate-scroll-code", params.clone()).unwrap();
        let second = generate("generate-scroll-code", params).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn lookup_doc_delegates_to_catalog() {
        assert!(lookup_doc("swipe").starts_with("# Swipe Gesture in Appium"));
        assert!(lookup_doc("fling").starts_with("Gesture \"fling\" not found."));
    }
}
