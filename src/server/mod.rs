//! MCP server exposing the `analyze_tokens` and `generate_diff` tools.
//!
//! The server speaks MCP over stdio; `pmcp` owns framing, request/response
//! correlation, `tools/list`, and rejection of unknown tool names. Everything
//! domain-specific lives in the tool handlers and `crate::analysis`.

pub mod logging;
mod tool;

use pmcp::{Server, ServerCapabilities};

use crate::analysis::tokens;

/// Run the MCP server over stdio. Blocks until the client disconnects.
pub async fn run() -> pmcp::Result<()> {
    // Pull the encoding tables in up front so a broken install fails at
    // startup rather than on the first analyze_tokens call.
    tokens::load_encoder();

    let server = Server::builder()
        .name("tokendiff")
        .version(env!("CARGO_PKG_VERSION"))
        .capabilities(ServerCapabilities::default())
        .tool("analyze_tokens", tool::create_analyze_tokens_tool())
        .tool("generate_diff", tool::create_generate_diff_tool())
        .build()?;

    log::info!("running tokendiff MCP server on stdio");
    server.run_stdio().await
}
