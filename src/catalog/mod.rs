// src/catalog/mod.rs
// Static gesture documentation, keyed by gesture name

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// URI scheme used for documentation resources
pub const URI_SCHEME: &str = "gesture://";

/// Gestures with a reference document, in catalog order
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::IntoStaticStr,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Gesture {
    Tap,
    Swipe,
    Scroll,
    PinchZoom,
    LongPress,
    DragDrop,
    DoubleTap,
}

impl Gesture {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Resource URI, e.g. `gesture://pinch-zoom`
    pub fn uri(&self) -> String {
        format!("{URI_SCHEME}{}", self.as_str())
    }

    /// Human-readable resource title
    pub fn title(&self) -> &'static str {
        match self {
            Gesture::Tap => "Tap Gesture",
            Gesture::Swipe => "Swipe Gesture",
            Gesture::Scroll => "Scroll Gesture",
            Gesture::PinchZoom => "Pinch and Zoom Gesture",
            Gesture::LongPress => "Long Press Gesture",
            Gesture::DragDrop => "Drag and Drop Gesture",
            Gesture::DoubleTap => "Double Tap Gesture",
        }
    }

    /// Markdown body of the reference document
    pub fn doc(&self) -> &'static str {
        match self {
            Gesture::Tap => include_str!("docs/tap.md"),
            Gesture::Swipe => include_str!("docs/swipe.md"),
            Gesture::Scroll => include_str!("docs/scroll.md"),
            Gesture::PinchZoom => include_str!("docs/pinch-zoom.md"),
            Gesture::LongPress => include_str!("docs/long-press.md"),
            Gesture::DragDrop => include_str!("docs/drag-drop.md"),
            Gesture::DoubleTap => include_str!("docs/double-tap.md"),
        }
    }

    /// Resolve a free-form name. Surrounding whitespace is ignored, case is not.
    pub fn from_name(name: &str) -> Option<Self> {
        name.trim().parse().ok()
    }

    /// Resolve a `gesture://<name>` URI
    pub fn from_uri(uri: &str) -> Option<Self> {
        uri.strip_prefix(URI_SCHEME).and_then(Self::from_name)
    }
}

/// All known gesture names, comma-separated in catalog order
pub fn available_names() -> String {
    Gesture::iter()
        .map(|g| g.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Look up a document by gesture name.
///
/// Unknown names are not an error: the caller gets a message listing the
/// available gestures so it can retry with a valid one.
pub fn lookup_doc(name: &str) -> String {
    match Gesture::from_name(name) {
        Some(gesture) => gesture.doc().to_string(),
        None => format!(
            "Gesture \"{}\" not found. Available gestures: {}",
            name,
            available_names()
        ),
    }
}
