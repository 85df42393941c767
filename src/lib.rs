// src/lib.rs
// Appium gesture reference and code generators, served over MCP

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod catalog;
pub mod codegen;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod mcp;

pub use error::{GestureError, Result};
