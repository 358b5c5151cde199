//! Token-count and SEARCH/REPLACE diff analysis exposed as an MCP server.

pub mod analysis;
pub mod server;
