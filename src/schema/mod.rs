//! Generator output contract
//!
//! This module defines the structured shape the external text generator
//! must produce: the expression string, condition groups, the closed
//! operator/function enumerations, and the sentinel warning texts the
//! generator emits in place of an expression when the request cannot be
//! translated.

mod function;
mod operand;
mod operator;
mod result;

pub use function::*;
pub use operand::*;
pub use operator::*;
pub use result::*;

use crate::error::{ExprGenError, Result};

/// Sentinel the generator emits when asked to apply a function across
/// several columns
pub const CROSS_COLUMN_FUNCTION_WARNING: &str =
    "Warning: Functions cannot be applied across multiple columns";

/// Sentinel the generator emits for a request it cannot make sense of
pub const UNINTELLIGIBLE_REQUEST_WARNING: &str =
    "I don't understand. Please change your request";

/// Whether an expression text carries one of the generator's warning
/// sentinels. Containment, not equality: the generator sometimes wraps
/// the sentinel in surrounding prose.
pub fn contains_warning_sentinel(expression: &str) -> bool {
    expression.contains(CROSS_COLUMN_FUNCTION_WARNING)
        || expression.contains(UNINTELLIGIBLE_REQUEST_WARNING)
}

/// Parse the generator's reply text into the wire structure.
///
/// The reply is expected to be a bare JSON object; a markdown code fence
/// around it is tolerated and stripped. Anything else is reported as
/// malformed output for the caller to surface.
pub fn parse_reply(reply: &str) -> Result<RawResult> {
    let body = strip_code_fence(reply.trim());
    serde_json::from_str(body).map_err(|e| ExprGenError::MalformedOutput(e.to_string()))
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string ("json") on the fence line
    let rest = match rest.find('\n') {
        Some(pos) => &rest[pos + 1..],
        None => rest,
    };
    rest.strip_suffix("```").map(str::trim).unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_json() {
        let raw = parse_reply(r#"{"Expression": "\"col1 (num)\"", "Condition_Groups": []}"#)
            .unwrap();
        assert_eq!(raw.expression, "\"col1 (num)\"");
        assert!(raw.condition_groups.is_empty());
    }

    #[test]
    fn test_parse_fenced_json() {
        let reply = "```json\n{\"Expression\": \"\\\"col1 (num)\\\"\", \"Condition_Groups\": []}\n```";
        let raw = parse_reply(reply).unwrap();
        assert_eq!(raw.expression, "\"col1 (num)\"");
    }

    #[test]
    fn test_parse_non_json_is_malformed() {
        match parse_reply("Sure! Here is your expression: col1 + col2") {
            Err(ExprGenError::MalformedOutput(_)) => {}
            other => panic!("Expected malformed output, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_wrong_shape_is_malformed() {
        match parse_reply(r#"{"expression": "lowercase key"}"#) {
            Err(ExprGenError::MalformedOutput(_)) => {}
            other => panic!("Expected malformed output, got {:?}", other),
        }
    }

    #[test]
    fn test_sentinel_containment() {
        assert!(contains_warning_sentinel(CROSS_COLUMN_FUNCTION_WARNING));
        assert!(contains_warning_sentinel(&format!(
            "{}. Try a single column instead.",
            CROSS_COLUMN_FUNCTION_WARNING
        )));
        assert!(contains_warning_sentinel(UNINTELLIGIBLE_REQUEST_WARNING));
        assert!(!contains_warning_sentinel("\"col1 (num)\" + \"col2 (num)\""));
        assert!(!contains_warning_sentinel(""));
    }
}
