// src/cli/mod.rs
// CLI module for appium-gestures commands

use clap::{Parser, Subcommand};

pub mod docs;
pub mod serve;
pub mod tool;

pub use docs::{run_doc, run_list};
pub use serve::{run_http_server, run_mcp_server};
pub use tool::run_tool;

#[derive(Parser)]
#[command(name = "appium-gestures")]
#[command(about = "MCP server providing Appium gesture documentation and code generators")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run as MCP server (default: stdio)
    Serve {
        /// Serve over Streamable HTTP instead of stdio
        #[arg(long, alias = "sse")]
        http: bool,

        /// Port for the HTTP transport
        #[arg(short, long)]
        port: Option<u16>,

        /// Bind address for the HTTP transport
        #[arg(long)]
        bind: Option<String>,
    },

    /// Execute a generate tool directly
    Tool {
        /// Tool name (e.g. generate-tap-code)
        #[arg(index = 1)]
        name: String,

        /// JSON arguments (e.g. '{"language": "java", "useElement": true, "elementId": "ok"}')
        #[arg(index = 2, default_value = "{}")]
        args: String,
    },

    /// Print the documentation for a gesture
    Doc {
        /// Gesture name (e.g. tap, pinch-zoom)
        name: String,
    },

    /// List tools and resources
    List,
}
