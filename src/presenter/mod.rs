//! Presenter
//!
//! Classifies a validated result into one of four terminal display
//! outcomes and pre-renders the expression and condition groups for the
//! host UI. Classification is a single pass with a fixed priority order;
//! every validated result reaches exactly one outcome.

mod display;


pub use display::DisplayPlan;

use serde::Serialize;
use tracing::debug;

use crate::schema::{CROSS_COLUMN_FUNCTION_WARNING, UNINTELLIGIBLE_REQUEST_WARNING};
use crate::validator::{Condition, ConditionGroup, ValidatedResult};

/// Message shown when the expression's base term is not a numeric column
pub const INVALID_BASE_COLUMN_MESSAGE: &str =
    "While the conditions can be on any column, the base column (expression) cannot be a text/date column";

/// Annotation token that marks a text-kind identifier inside an expression
const TEXT_ANNOTATION_TOKEN: &str = "(text)";

/// Terminal display outcomes, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The generator refused a cross-column function application
    CrossColumnFunctionWarning,
    /// The generator could not make sense of the request
    UnintelligibleRequestWarning,
    /// The expression is empty or its base term is a text column
    InvalidBaseColumnWarning,
    /// A displayable expression with its condition groups
    Rendered,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::CrossColumnFunctionWarning => "cross_column_function_warning",
            Outcome::UnintelligibleRequestWarning => "unintelligible_request_warning",
            Outcome::InvalidBaseColumnWarning => "invalid_base_column_warning",
            Outcome::Rendered => "rendered",
        }
    }

    pub fn is_warning(self) -> bool {
        !matches!(self, Outcome::Rendered)
    }
}

/// One condition, formatted for the four-field display. Operand fields
/// are absent for operators that carry no comparison value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedCondition {
    pub column_name: String,
    pub operator: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operand_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operand: Option<String>,
}

/// One condition group, formatted for display. The connective is shown
/// only when the group holds more than one condition; for a single
/// condition it is vacuous.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_operator: Option<String>,
    pub conditions: Vec<RenderedCondition>,
}

/// Classify an expression text. Checked in fixed order; first match wins.
pub fn classify(expression: &str) -> Outcome {
    let trimmed = expression.trim();
    if trimmed.contains(CROSS_COLUMN_FUNCTION_WARNING) {
        Outcome::CrossColumnFunctionWarning
    } else if trimmed.contains(UNINTELLIGIBLE_REQUEST_WARNING) {
        Outcome::UnintelligibleRequestWarning
    } else if trimmed.is_empty() || trimmed.contains(TEXT_ANNOTATION_TOKEN) {
        Outcome::InvalidBaseColumnWarning
    } else {
        Outcome::Rendered
    }
}

/// Produce the display plan for a validated result
pub fn present(result: &ValidatedResult) -> DisplayPlan {
    let outcome = classify(&result.expression);
    debug!(outcome = outcome.as_str(), "presenting validated result");

    match outcome {
        Outcome::CrossColumnFunctionWarning => {
            DisplayPlan::warning(outcome, CROSS_COLUMN_FUNCTION_WARNING)
        }
        Outcome::UnintelligibleRequestWarning => {
            DisplayPlan::warning(outcome, UNINTELLIGIBLE_REQUEST_WARNING)
        }
        Outcome::InvalidBaseColumnWarning => {
            DisplayPlan::warning(outcome, INVALID_BASE_COLUMN_MESSAGE)
        }
        Outcome::Rendered => {
            let expression = result.expression.replace('\'', "\"");
            let groups = result.condition_groups.iter().map(render_group).collect();
            DisplayPlan::rendered(expression, groups)
        }
    }
}

fn render_group(group: &ConditionGroup) -> RenderedGroup {
    let group_operator =
        (group.conditions.len() > 1).then(|| group.operator.as_str().to_string());
    RenderedGroup {
        group_operator,
        conditions: group.conditions.iter().map(render_condition).collect(),
    }
}

fn render_condition(condition: &Condition) -> RenderedCondition {
    let (operand_type, operand) = if condition.operator.takes_operand() {
        (
            Some(condition.operand_type.as_str().to_string()),
            Some(
                condition
                    .operand
                    .iter()
                    .map(|value| value.render())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        )
    } else {
        (None, None)
    };

    RenderedCondition {
        column_name: condition.column.annotated(),
        operator: condition.operator.as_str().to_string(),
        operand_type,
        operand,
    }
}
