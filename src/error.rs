// src/error.rs
// Standardized error types for gesture generation

use thiserror::Error;

/// Main error type for the gestures library
#[derive(Error, Debug)]
pub enum GestureError {
    /// A field required by the chosen target mode was not supplied
    #[error("{}", missing_field_message(.0))]
    MissingRequiredField(&'static str),

    /// Unknown operation name
    #[error("not found: {0}")]
    NotFound(String),

    /// Parameters could not be decoded into the operation's request type
    #[error("invalid parameters: {0}")]
    InvalidParams(#[from] serde_json::Error),
}

/// Convenience type alias for Result using GestureError
pub type Result<T> = std::result::Result<T, GestureError>;

fn missing_field_message(field: &str) -> String {
    match field {
        "elementId" => "elementId is required when useElement is true".to_string(),
        "x/y" => "x and y coordinates are required when useElement is false".to_string(),
        other => format!("{other} is required"),
    }
}

impl GestureError {
    /// Convert to user-facing string for MCP tool boundaries
    pub fn to_user_string(&self) -> String {
        format!("Error: {self}")
    }

    /// Name of the missing field, if this is a validation failure
    pub fn missing_field(&self) -> Option<&'static str> {
        match self {
            GestureError::MissingRequiredField(field) => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_id_message() {
        let err = GestureError::MissingRequiredField("elementId");
        assert_eq!(err.to_string(), "elementId is required when useElement is true");
        assert_eq!(err.missing_field(), Some("elementId"));
    }

    #[test]
    fn test_missing_coordinates_message() {
        let err = GestureError::MissingRequiredField("x/y");
        assert!(err.to_string().contains("x and y coordinates"));
    }

    #[test]
    fn test_missing_other_field_message() {
        let err = GestureError::MissingRequiredField("direction");
        assert_eq!(err.to_string(), "direction is required");
    }

    #[test]
    fn test_not_found_error() {
        let err = GestureError::NotFound("generate-pinch-code".to_string());
        assert!(err.to_string().contains("not found"));
        assert!(err.to_string().contains("generate-pinch-code"));
        assert_eq!(err.missing_field(), None);
    }

    #[test]
    fn test_to_user_string() {
        let err = GestureError::MissingRequiredField("elementId");
        assert_eq!(
            err.to_user_string(),
            "Error: elementId is required when useElement is true"
        );
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<i32>("not json").unwrap_err();
        let err: GestureError = json_err.into();
        assert!(matches!(err, GestureError::InvalidParams(_)));
        assert!(err.to_string().contains("invalid parameters"));
    }
}
