// src/cli/tool.rs
// Direct tool execution from CLI

use anyhow::{Context, Result};
use gestures::dispatch;

/// Execute a generate tool directly from the command line.
///
/// Returns `Ok(false)` when the tool rejected its arguments; the message has
/// already been written to stderr.
pub fn run_tool(name: &str, args: &str) -> Result<bool> {
    let params: serde_json::Value =
        serde_json::from_str(args).context("tool arguments must be a JSON object")?;

    match dispatch::generate(name, params) {
        Ok(code) => {
            println!("{}", code);
            Ok(true)
        }
        Err(e) => {
            eprintln!("{}", e.to_user_string());
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gestures::mcp::GestureServer;
    use std::collections::HashSet;

    /// Every name the CLI dispatches must also be an MCP tool
    #[test]
    fn cli_names_match_mcp_tools() {
        let mcp: HashSet<String> = GestureServer::new().list_tool_names().into_iter().collect();
        for name in dispatch::operation_names() {
            assert!(mcp.contains(name), "CLI tool {name} missing from MCP router");
        }
        assert_eq!(mcp.len(), dispatch::operation_names().len());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(run_tool("generate-tap-code", "{not json").is_err());
    }

    #[test]
    fn rejected_params_report_false() {
        assert!(!run_tool("generate-tap-code", r#"{"language":"java"}"#).unwrap());
        assert!(!run_tool("generate-fling-code", "{}").unwrap());
    }

    #[test]
    fn valid_call_reports_true() {
        let args = r#"{"language":"javascript","useElement":true,"elementId":"login-btn"}"#;
        assert!(run_tool("generate-tap-code", args).unwrap());
    }
}
