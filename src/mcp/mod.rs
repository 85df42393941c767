// src/mcp/mod.rs
// MCP Server implementation

mod handler;
pub mod resources;

use crate::codegen::{
    self, DoubleTapRequest, LongPressRequest, ScrollRequest, SwipeRequest, TapRequest,
};
use crate::error::Result;
use rmcp::{
    ErrorData as McpError,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content},
    tool, tool_router,
};

/// MCP Server state
///
/// Generators and documents are pure, so the server holds nothing but its
/// router and can be cloned freely per session.
#[derive(Clone)]
pub struct GestureServer {
    tool_router: ToolRouter<Self>,
}

impl Default for GestureServer {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Names of all registered tools
    pub fn list_tool_names(&self) -> Vec<String> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect()
    }
}

/// Convert a generator result into a tool result.
///
/// Validation failures are reported in-band with `isError` set rather than as
/// protocol errors, so the calling model sees the message.
fn snippet_result(result: Result<String>) -> CallToolResult {
    match result {
        Ok(code) => CallToolResult::success(vec![Content::text(code)]),
        Err(e) => {
            tracing::debug!(error = %e, "Snippet generation rejected");
            CallToolResult::error(vec![Content::text(e.to_user_string())])
        }
    }
}

#[tool_router]
impl GestureServer {
    #[tool(
        name = "generate-tap-code",
        description = "Generate code for tap gesture in Appium",
        annotations(read_only_hint = true, open_world_hint = false)
    )]
    async fn generate_tap_code(
        &self,
        Parameters(req): Parameters<TapRequest>,
    ) -> std::result::Result<CallToolResult, McpError> {
        Ok(snippet_result(codegen::tap::generate(&req)))
    }

    #[tool(
        name = "generate-swipe-code",
        description = "Generate code for swipe gesture in Appium",
        annotations(read_only_hint = true, open_world_hint = false)
    )]
    async fn generate_swipe_code(
        &self,
        Parameters(req): Parameters<SwipeRequest>,
    ) -> std::result::Result<CallToolResult, McpError> {
        Ok(snippet_result(codegen::swipe::generate(&req)))
    }

    #[tool(
        name = "generate-scroll-code",
        description = "Generate code for scroll gesture in Appium",
        annotations(read_only_hint = true, open_world_hint = false)
    )]
    async fn generate_scroll_code(
        &self,
        Parameters(req): Parameters<ScrollRequest>,
    ) -> std::result::Result<CallToolResult, McpError> {
        Ok(snippet_result(codegen::scroll::generate(&req)))
    }

    #[tool(
        name = "generate-long-press-code",
        description = "Generate code for long press gesture in Appium",
        annotations(read_only_hint = true, open_world_hint = false)
    )]
    async fn generate_long_press_code(
        &self,
        Parameters(req): Parameters<LongPressRequest>,
    ) -> std::result::Result<CallToolResult, McpError> {
        Ok(snippet_result(codegen::long_press::generate(&req)))
    }

    #[tool(
        name = "generate-double-tap-code",
        description = "Generate code for double tap gesture in Appium",
        annotations(read_only_hint = true, open_world_hint = false)
    )]
    async fn generate_double_tap_code(
        &self,
        Parameters(req): Parameters<DoubleTapRequest>,
    ) -> std::result::Result<CallToolResult, McpError> {
        Ok(snippet_result(codegen::double_tap::generate(&req)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::operation_names;
    use crate::error::GestureError;
    use std::collections::HashSet;

    /// The MCP router and the dispatch registry must expose the same names
    #[test]
    fn tools_match_dispatch_registry() {
        let server = GestureServer::new();
        let mcp_tools: HashSet<String> = server.list_tool_names().into_iter().collect();
        let registry: HashSet<String> =
            operation_names().into_iter().map(String::from).collect();
        assert_eq!(mcp_tools, registry);
    }

    #[test]
    fn error_results_are_flagged() {
        let result = snippet_result(Err(GestureError::MissingRequiredField("x/y")));
        assert_eq!(result.is_error, Some(true));
        let text = result.content[0].as_text().unwrap().text.clone();
        assert_eq!(text, "Error: x and y coordinates are required when useElement is false");
    }

    #[test]
    fn success_results_carry_code() {
        let result = snippet_result(Ok("await element.tap();".to_string()));
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result.content[0].as_text().unwrap().text, "await element.tap();");
    }

    #[tokio::test]
    async fn tool_method_reports_validation_error() {
        let server = GestureServer::new();
        let req: TapRequest =
            serde_json::from_value(serde_json::json!({ "language": "java", "useElement": true }))
                .unwrap();
        let result = server.generate_tap_code(Parameters(req)).await.unwrap();
        assert_eq!(result.is_error, Some(true));
    }
}
