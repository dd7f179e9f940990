use super::{codes, ErrorCode, Hint};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorHelpSummary {
    pub code: String,
    pub summary: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorHelp {
    pub code: String,
    pub summary: String,
    pub details_schema: serde_json::Value,
    pub hints: Vec<Hint>,
}

pub fn list() -> Vec<ErrorHelpSummary> {
    codes::all_codes()
        .iter()
        .copied()
        .map(|code| {
            let help = explain(code);
            ErrorHelpSummary {
                code: help.code,
                summary: help.summary,
            }
        })
        .collect()
}

pub fn explain(code: ErrorCode) -> ErrorHelp {
    match code {
        ErrorCode::ConfigInvalidJson => ErrorHelp {
            code: code.as_str().to_string(),
            summary: "Configuration JSON is invalid".to_string(),
            details_schema: serde_json::json!({"path":"string","error":"string"}),
            hints: vec![Hint {
                message: "Fix JSON syntax in treekit.json or run 'treekit config reset'".to_string(),
            }],
        },
        ErrorCode::ConfigInvalidValue => ErrorHelp {
            code: code.as_str().to_string(),
            summary: "Configuration value is invalid".to_string(),
            details_schema: serde_json::json!({"key":"string","value":"string?","problem":"string"}),
            hints: vec![Hint {
                message: "Run 'treekit config show --builtin' to see the expected shape".to_string(),
            }],
        },
        ErrorCode::ValidationInvalidArgument => ErrorHelp {
            code: code.as_str().to_string(),
            summary: "Invalid argument".to_string(),
            details_schema: serde_json::json!({"field":"string","problem":"string","id":"string?","tried":"string[]?"}),
            hints: vec![Hint {
                message: "Check argument values and formats".to_string(),
            }],
        },
        ErrorCode::ValidationInvalidJson => ErrorHelp {
            code: code.as_str().to_string(),
            summary: "Invalid JSON input".to_string(),
            details_schema: serde_json::json!({"error":"string","context":"string?"}),
            hints: vec![Hint {
                message: "Pass inline JSON, @path/to/file.json, or - to read stdin".to_string(),
            }],
        },
        ErrorCode::ValidationUnknownErrorCode => ErrorHelp {
            code: code.as_str().to_string(),
            summary: "Unknown error code".to_string(),
            details_schema: serde_json::json!({"code":"string"}),
            hints: vec![Hint {
                message: "Run 'treekit error list' to see available error codes".to_string(),
            }],
        },
        ErrorCode::PathNotContainer => ErrorHelp {
            code: code.as_str().to_string(),
            summary: "Path cannot be written because the root is a scalar".to_string(),
            details_schema: serde_json::json!({"path":"string","segment":"string","found":"string"}),
            hints: vec![Hint {
                message: "Use an object, array or null as the root document".to_string(),
            }],
        },
        ErrorCode::PathInvalidSegment => ErrorHelp {
            code: code.as_str().to_string(),
            summary: "Path segment is not a valid array index".to_string(),
            details_schema: serde_json::json!({"path":"string","segment":"string","found":"string"}),
            hints: vec![Hint {
                message: "Array segments must be non-negative integers, e.g. 'items.0.name'".to_string(),
            }],
        },
        ErrorCode::InternalIoError => ErrorHelp {
            code: code.as_str().to_string(),
            summary: "IO error".to_string(),
            details_schema: serde_json::json!({"error":"string","context":"string?"}),
            hints: vec![],
        },
        ErrorCode::InternalJsonError => ErrorHelp {
            code: code.as_str().to_string(),
            summary: "JSON error".to_string(),
            details_schema: serde_json::json!({"error":"string","context":"string?"}),
            hints: vec![],
        },
        ErrorCode::InternalUnexpected => ErrorHelp {
            code: code.as_str().to_string(),
            summary: "Unexpected error".to_string(),
            details_schema: serde_json::json!({"error":"string"}),
            hints: vec![],
        },
    }
}
