//! Schema validator
//!
//! Checks a parsed generator reply against the dataset's declared columns
//! and resolves its raw string fields into the closed enumerations. The
//! output is a normalized result the presenter can render without further
//! error handling.

#[cfg(test)]
mod property_tests;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::column::{Column, DatasetSchema};
use crate::error::{ExprGenError, Result};
use crate::schema::{
    contains_warning_sentinel, AggregateFunction, ColumnOperator, GroupOperator, OperandList,
    OperandType, RawCondition, RawGroup, RawResult,
};

/// Quoted annotated identifiers inside an expression, e.g. `"col1 (num)"`
static QUOTED_IDENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"["']([^"']+?\((?:num|text)\))["']"#).unwrap());

/// Function-style applications left over once quoted identifiers are removed
static FUNCTION_CALL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Za-z_][A-Za-z0-9_]*)\s*\(").unwrap());

/// A validated condition: column resolved, operator and operand type typed
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub column: Column,
    pub operator: ColumnOperator,
    pub operand_type: OperandType,
    pub operand: OperandList,
}

/// A validated condition group
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionGroup {
    pub operator: GroupOperator,
    pub conditions: Vec<Condition>,
}

/// A generator reply that passed validation. The expression carries
/// canonical (double) quotes; range bounds are ordered smallest-first.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedResult {
    pub expression: String,
    pub condition_groups: Vec<ConditionGroup>,
}

/// Validate a parsed reply against the dataset schema.
///
/// Sentinel warning texts and the empty expression pass through unchanged;
/// they carry no identifiers to check and the presenter classifies them.
pub fn validate(raw: &RawResult, schema: &DatasetSchema) -> Result<ValidatedResult> {
    debug!(
        groups = raw.condition_groups.len(),
        "validating generator reply"
    );

    let expression = normalize_quotes(&raw.expression);
    check_expression(&expression, schema)?;

    let mut condition_groups = Vec::with_capacity(raw.condition_groups.len());
    for group in &raw.condition_groups {
        condition_groups.push(validate_group(group, schema)?);
    }

    Ok(ValidatedResult {
        expression,
        condition_groups,
    })
}

/// Canonical quoting style: double quotes throughout the expression
fn normalize_quotes(expression: &str) -> String {
    expression.replace('\'', "\"")
}

fn check_expression(expression: &str, schema: &DatasetSchema) -> Result<()> {
    let trimmed = expression.trim();
    if trimmed.is_empty() || contains_warning_sentinel(trimmed) {
        return Ok(());
    }

    for captures in QUOTED_IDENT_RE.captures_iter(trimmed) {
        let identifier = &captures[1];
        schema.resolve(identifier)?;
    }

    // With quoted identifiers out of the way, anything shaped like a call
    // must be one of the supported functions
    let stripped = QUOTED_IDENT_RE.replace_all(trimmed, " ");
    for captures in FUNCTION_CALL_RE.captures_iter(&stripped) {
        let name = &captures[1];
        if AggregateFunction::from_name(name).is_none() {
            return Err(ExprGenError::UnsupportedFunction(name.to_string()));
        }
    }

    Ok(())
}

fn validate_group(group: &RawGroup, schema: &DatasetSchema) -> Result<ConditionGroup> {
    let operator = GroupOperator::from_wire(&group.group_operator)
        .ok_or_else(|| ExprGenError::UnsupportedGroupOperator(group.group_operator.clone()))?;

    let mut conditions = Vec::with_capacity(group.conditions.len());
    for condition in &group.conditions {
        conditions.push(validate_condition(condition, schema)?);
    }

    Ok(ConditionGroup {
        operator,
        conditions,
    })
}

fn validate_condition(condition: &RawCondition, schema: &DatasetSchema) -> Result<Condition> {
    let operator = ColumnOperator::from_wire(&condition.column_operator)
        .ok_or_else(|| ExprGenError::UnsupportedOperator(condition.column_operator.clone()))?;

    // For no-operand operators the operand fields are carried but never
    // surfaced; an off-schema Operand_Type there is ignored, not fatal
    let operand_type = match OperandType::from_wire(&condition.operand_type) {
        Some(t) => t,
        None if !operator.takes_operand() => OperandType::Value,
        None => {
            return Err(ExprGenError::InvalidOperandType(
                condition.operand_type.clone(),
            ))
        }
    };

    let column = schema.resolve(&condition.column_name)?;
    let mut operand = condition.operand.clone();

    if operator.takes_operand() {
        if operand_type == OperandType::ColumnValue {
            for entry in &operand {
                let identifier = entry.as_str().ok_or_else(|| {
                    ExprGenError::UnknownColumn(entry.render())
                })?;
                schema.resolve(identifier)?;
            }
        }

        if operator.is_range() {
            if operand.len() != 2 {
                return Err(ExprGenError::InvalidRangeOperand {
                    operator: operator.as_str().to_string(),
                    count: operand.len(),
                });
            }
            if operand_type == OperandType::Value {
                normalize_range(&mut operand);
            }
        }
    }

    Ok(Condition {
        column,
        operator,
        operand_type,
        operand,
    })
}

/// Range semantics are min/max of the two bounds regardless of the given
/// order, so store them smallest-first: numerically when both bounds are
/// numbers, lexicographically otherwise (which covers ISO dates).
fn normalize_range(operand: &mut OperandList) {
    let swap = match (operand[0].as_number(), operand[1].as_number()) {
        (Some(a), Some(b)) => a > b,
        _ => operand[0].render() > operand[1].render(),
    };
    if swap {
        operand.swap(0, 1);
    }
}
