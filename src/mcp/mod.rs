//! MCP server: Model Context Protocol implementation over stdio.
//!
//! - [`tools`]: the four tools (get-template, lint-code, search-docs,
//!   generate-reducer), their descriptors and the dispatcher
//! - [`resources`]: `tca://docs/<key>` documentation resources
//! - [`server`]: the rmcp `ServerHandler` and the stdio entry point

pub mod resources;
pub mod server;
pub mod tools;

pub use server::{run_server, TcaServer};
