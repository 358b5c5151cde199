//! Pure analysis routines behind the tool surface.
//!
//! Nothing here touches the protocol layer; both modules are plain functions
//! over string slices so they can be tested without a running server.

pub mod diff;
pub mod tokens;

pub use diff::search_replace_diff;
pub use tokens::TokenReport;
