// src/mcp/resources.rs
// MCP Resource handlers: gesture documentation via the Resource protocol

use super::GestureServer;
use crate::catalog::{self, Gesture, URI_SCHEME};
use rmcp::model::{
    AnnotateAble, Annotated, ListResourceTemplatesResult, ListResourcesResult, RawResource,
    RawResourceTemplate, ReadResourceResult, ResourceContents,
};
use strum::IntoEnumIterator;

const MARKDOWN: &str = "text/markdown";

/// Helper to wrap a raw resource/template without annotations.
fn no_ann<T: AnnotateAble>(raw: T) -> Annotated<T> {
    Annotated::new(raw, None)
}

fn text_contents(uri: &str, text: String) -> ReadResourceResult {
    ReadResourceResult {
        contents: vec![ResourceContents::TextResourceContents {
            uri: uri.to_string(),
            mime_type: Some(MARKDOWN.into()),
            text,
            meta: None,
        }],
    }
}

impl GestureServer {
    /// One static resource per documented gesture, in catalog order.
    pub fn resource_list() -> Vec<Annotated<RawResource>> {
        Gesture::iter()
            .map(|gesture| {
                no_ann(RawResource {
                    uri: gesture.uri(),
                    name: format!("{}-gesture", gesture.as_str()),
                    title: Some(gesture.title().into()),
                    description: Some(format!("{} documentation with code examples", gesture.title())),
                    mime_type: Some(MARKDOWN.into()),
                    size: Some(gesture.doc().len() as u32),
                    icons: None,
                    meta: None,
                })
            })
            .collect()
    }

    /// Build the list of resource templates (parameterized URIs).
    pub fn resource_template_list() -> Vec<Annotated<RawResourceTemplate>> {
        vec![no_ann(RawResourceTemplate {
            uri_template: format!("{URI_SCHEME}{{name}}"),
            name: "gesture-by-name".into(),
            title: Some("Gesture by Name".into()),
            description: Some(format!(
                "Gesture documentation by name. Available gestures: {}",
                catalog::available_names()
            )),
            mime_type: Some(MARKDOWN.into()),
            icons: None,
        })]
    }

    /// Handle `resources/list`.
    pub(super) fn handle_list_resources(&self) -> ListResourcesResult {
        ListResourcesResult {
            resources: Self::resource_list(),
            next_cursor: None,
            meta: None,
        }
    }

    /// Handle `resources/templates/list`.
    pub(super) fn handle_list_resource_templates(&self) -> ListResourceTemplatesResult {
        ListResourceTemplatesResult {
            resource_templates: Self::resource_template_list(),
            next_cursor: None,
            meta: None,
        }
    }

    /// Handle `resources/read`.
    ///
    /// Any `gesture://` URI is answered: unknown names get the catalog's
    /// "not found" text as ordinary contents. Other schemes are rejected.
    pub fn read_resource_uri(&self, uri: &str) -> Result<ReadResourceResult, rmcp::ErrorData> {
        let Some(name) = uri.strip_prefix(URI_SCHEME) else {
            return Err(rmcp::ErrorData::invalid_params(
                format!("Unknown resource URI: {uri}"),
                None,
            ));
        };

        if Gesture::from_uri(uri).is_none() {
            tracing::debug!(uri, "Gesture resource not found");
        }
        Ok(text_contents(uri, catalog::lookup_doc(name)))
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════
