use pmcp::{SimpleTool, ToolHandler};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::analysis::{TokenReport, search_replace_diff};

/// Arguments shared by both tools: the two code revisions to compare.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CodePair {
    original_code: String,
    modified_code: String,
}

impl CodePair {
    /// Reject missing or non-string fields instead of coercing them; a
    /// request either carries both code strings or gets a validation error
    /// naming the offending key.
    fn from_args(args: Value) -> pmcp::Result<Self> {
        serde_json::from_value(args)
            .map_err(|err| pmcp::Error::Validation(format!("invalid tool arguments: {err}")))
    }
}

/// Wrap `text` as the single text content block of a tool result.
fn text_block(text: String) -> Value {
    json!({ "content": [{ "type": "text", "text": text }] })
}

pub(super) fn create_analyze_tokens_tool() -> impl ToolHandler {
    SimpleTool::new("analyze_tokens", move |args: Value, _extra| {
        Box::pin(async move {
            let pair = CodePair::from_args(args)?;
            let report = TokenReport::new(&pair.original_code, &pair.modified_code);
            log::debug!("analyze_tokens: {report}");
            Ok(text_block(report.to_string()))
        })
    })
    .with_description(
        "Analyze the token impact of a code edit. Counts o200k tokens in the original and \
         modified code and reports both counts plus the signed difference.",
    )
    .with_schema(code_pair_schema())
}

pub(super) fn create_generate_diff_tool() -> impl ToolHandler {
    SimpleTool::new("generate_diff", move |args: Value, _extra| {
        Box::pin(async move {
            let pair = CodePair::from_args(args)?;
            let diff = search_replace_diff(&pair.original_code, &pair.modified_code);
            log::debug!("generate_diff: produced {} bytes", diff.len());
            Ok(text_block(diff))
        })
    })
    .with_description(
        "Generate a line-level diff between original and modified code, formatted with \
         <<<<<<< SEARCH / ======= / >>>>>>> REPLACE conflict markers.",
    )
    .with_schema(code_pair_schema())
}

fn code_pair_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "originalCode": {
                "type": "string",
                "description": "The original code before the edit"
            },
            "modifiedCode": {
                "type": "string",
                "description": "The modified code after the edit"
            }
        },
        "required": ["originalCode", "modifiedCode"]
    })
}
