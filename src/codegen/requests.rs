// src/codegen/requests.rs
// Structured parameters for each generator (wire names are camelCase)

use super::{Direction, Language};
use rmcp::schemars;
use serde::Deserialize;

fn default_swipe_duration() -> f64 {
    500.0
}

fn default_scroll_distance() -> f64 {
    300.0
}

fn default_long_press_duration() -> f64 {
    2000.0
}

fn default_pause_duration() -> f64 {
    200.0
}

#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TapRequest {
    #[schemars(description = "Snippet language: javascript or java")]
    pub language: Language,
    #[schemars(description = "Tap an element by accessibility id instead of coordinates")]
    #[serde(default)]
    pub use_element: bool,
    #[schemars(description = "Accessibility id (required when useElement is true)")]
    pub element_id: Option<String>,
    #[schemars(description = "X coordinate (required when useElement is false)")]
    pub x: Option<f64>,
    #[schemars(description = "Y coordinate (required when useElement is false)")]
    pub y: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SwipeRequest {
    #[schemars(description = "Snippet language: javascript or java")]
    pub language: Language,
    #[schemars(description = "Start X coordinate")]
    pub start_x: f64,
    #[schemars(description = "Start Y coordinate")]
    pub start_y: f64,
    #[schemars(description = "End X coordinate")]
    pub end_x: f64,
    #[schemars(description = "End Y coordinate")]
    pub end_y: f64,
    #[schemars(description = "Swipe duration in milliseconds (default 500)")]
    #[serde(default = "default_swipe_duration")]
    pub duration: f64,
}

#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScrollRequest {
    #[schemars(description = "Snippet language: javascript or java")]
    pub language: Language,
    #[schemars(description = "Scroll direction: up, down, left or right")]
    pub direction: Direction,
    #[schemars(description = "Scroll an element into view instead of scrolling by distance")]
    #[serde(default)]
    pub use_element: bool,
    #[schemars(description = "Accessibility id (required when useElement is true)")]
    pub element_id: Option<String>,
    #[schemars(description = "Scroll distance in pixels (default 300)")]
    #[serde(default = "default_scroll_distance")]
    pub distance: f64,
}

#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LongPressRequest {
    #[schemars(description = "Snippet language: javascript or java")]
    pub language: Language,
    #[schemars(description = "Press an element by accessibility id instead of coordinates")]
    pub use_element: bool,
    #[schemars(description = "Accessibility id (required when useElement is true)")]
    pub element_id: Option<String>,
    #[schemars(description = "X coordinate (required when useElement is false)")]
    pub x: Option<f64>,
    #[schemars(description = "Y coordinate (required when useElement is false)")]
    pub y: Option<f64>,
    #[schemars(description = "Hold duration in milliseconds (default 2000)")]
    #[serde(default = "default_long_press_duration")]
    pub duration: f64,
}

#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DoubleTapRequest {
    #[schemars(description = "Snippet language: javascript or java")]
    pub language: Language,
    #[schemars(description = "Double tap an element by accessibility id instead of coordinates")]
    pub use_element: bool,
    #[schemars(description = "Accessibility id (required when useElement is true)")]
    pub element_id: Option<String>,
    #[schemars(description = "X coordinate (required when useElement is false)")]
    pub x: Option<f64>,
    #[schemars(description = "Y coordinate (required when useElement is false)")]
    pub y: Option<f64>,
    #[schemars(description = "Pause between the two taps in milliseconds (default 200)")]
    #[serde(default = "default_pause_duration")]
    pub pause_duration: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn swipe_duration_defaults() {
        let req: SwipeRequest = serde_json::from_value(json!({
            "language": "java", "startX": 0, "startY": 0, "endX": 10, "endY": 0
        }))
        .unwrap();
        assert_eq!(req.duration, 500.0);
    }

    #[test]
    fn scroll_defaults() {
        let req: ScrollRequest =
            serde_json::from_value(json!({ "language": "javascript", "direction": "up" })).unwrap();
        assert!(!req.use_element);
        assert_eq!(req.distance, 300.0);
        assert_eq!(req.direction, Direction::Up);
    }

    #[test]
    fn tap_use_element_is_optional() {
        let req: TapRequest =
            serde_json::from_value(json!({ "language": "java", "x": 1, "y": 2 })).unwrap();
        assert!(!req.use_element);
    }

    #[test]
    fn long_press_requires_use_element() {
        let result: Result<LongPressRequest, _> =
            serde_json::from_value(json!({ "language": "java", "x": 1, "y": 2 }));
        assert!(result.is_err());
    }

    #[test]
    fn unknown_language_rejected() {
        let result: Result<TapRequest, _> =
            serde_json::from_value(json!({ "language": "python", "useElement": false }));
        assert!(result.is_err());
    }

    #[test]
    fn camel_case_fields() {
        let req: DoubleTapRequest = serde_json::from_value(json!({
            "language": "javascript",
            "useElement": true,
            "elementId": "like",
            "pauseDuration": 150
        }))
        .unwrap();
        assert_eq!(req.element_id.as_deref(), Some("like"));
        assert_eq!(req.pause_duration, 150.0);
    }
}
