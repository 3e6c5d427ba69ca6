//! tca-mcp: Composable Architecture documentation and tooling server.
//!
//! Serves documentation topics as MCP resources and exposes tools for
//! feature templates, reducer scaffolding, doc search and linting of
//! Swift reducer code.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod lint;
pub mod mcp;
pub mod observability;
pub mod scaffold;
