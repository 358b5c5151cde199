//! Token counting over the o200k BPE encoding.

use std::fmt;

use once_cell::sync::Lazy;
use tiktoken_rs::{CoreBPE, o200k_base};

// The encoding tables are bundled with the crate; loading them is expensive,
// so it happens once per process.
static ENCODER: Lazy<CoreBPE> =
    Lazy::new(|| o200k_base().expect("load bundled o200k_base encoding"));

/// Force the encoder to load now instead of on the first request.
pub fn load_encoder() {
    Lazy::force(&ENCODER);
}

/// Number of o200k tokens in `text`.
pub fn count_tokens(text: &str) -> usize {
    ENCODER.encode_with_special_tokens(text).len()
}

/// Token counts for an original/modified pair of code strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenReport {
    pub original: usize,
    pub modified: usize,
}

impl TokenReport {
    pub fn new(original_code: &str, modified_code: &str) -> Self {
        Self {
            original: count_tokens(original_code),
            modified: count_tokens(modified_code),
        }
    }

    /// Signed difference `original - modified`; negative when the edit grew
    /// the code.
    pub fn delta(&self) -> i64 {
        self.original as i64 - self.modified as i64
    }
}

impl fmt::Display for TokenReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Original Tokens: {}, Modified Tokens: {}, Token Difference: {}",
            self.original,
            self.modified,
            self.delta()
        )
    }
}
