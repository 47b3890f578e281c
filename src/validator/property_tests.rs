//! Property tests for the validator

use proptest::prelude::*;
use smallvec::SmallVec;

use crate::column::{Column, ColumnKind, DatasetSchema};
use crate::error::ExprGenError;
use crate::schema::{
    ColumnOperator, OperandValue, RawCondition, RawGroup, RawResult, ALL_OPERATORS,
};
use crate::validator::validate;

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

fn test_schema() -> DatasetSchema {
    DatasetSchema::new(vec![
        Column::new("col1", ColumnKind::Numeric),
        Column::new("col2", ColumnKind::Numeric),
        Column::new("col3", ColumnKind::Text),
        Column::new("col4", ColumnKind::Text),
    ])
}

/// Generate annotated identifiers declared in the test schema
fn known_identifier_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("col1 (num)".to_string()),
        Just("col2 (num)".to_string()),
        Just("col3 (text)".to_string()),
        Just("col4 (text)".to_string()),
    ]
}

/// Generate recognized operators
fn operator_strategy() -> impl Strategy<Value = ColumnOperator> {
    prop::sample::select(ALL_OPERATORS.to_vec())
}

/// Generate literal operand values
fn operand_value_strategy() -> impl Strategy<Value = OperandValue> {
    prop_oneof![
        Just(OperandValue::Null),
        any::<bool>().prop_map(OperandValue::Bool),
        (-1000i32..=1000i32).prop_map(|n| OperandValue::Number(n as f64)),
        "[a-z]{1,8}".prop_map(OperandValue::Str),
    ]
}

/// Generate a condition whose arity matches its operator
fn condition_strategy() -> impl Strategy<Value = RawCondition> {
    (
        known_identifier_strategy(),
        operator_strategy(),
        prop::collection::vec(operand_value_strategy(), 1..=3),
    )
        .prop_map(|(column_name, operator, mut operand)| {
            if operator.is_range() {
                operand.truncate(2);
                while operand.len() < 2 {
                    operand.push(OperandValue::Number(0.0));
                }
            }
            RawCondition {
                column_name,
                column_operator: operator.as_str().to_string(),
                operand_type: "Value".to_string(),
                operand: SmallVec::from_vec(operand),
            }
        })
}

/// Generate a group of conditions under a recognized connective
fn group_strategy() -> impl Strategy<Value = RawGroup> {
    (
        prop_oneof![Just("and".to_string()), Just("or".to_string())],
        prop::collection::vec(condition_strategy(), 1..=4),
    )
        .prop_map(|(group_operator, conditions)| RawGroup {
            group_operator,
            conditions,
        })
}

/// Generate an expression over declared columns, optionally quoted with
/// single quotes to exercise normalization
fn expression_strategy() -> impl Strategy<Value = String> {
    (
        known_identifier_strategy().prop_filter("numeric base", |id| id.ends_with("(num)")),
        known_identifier_strategy().prop_filter("numeric base", |id| id.ends_with("(num)")),
        any::<bool>(),
    )
        .prop_map(|(a, b, single_quotes)| {
            let quote = if single_quotes { '\'' } else { '"' };
            format!(
                "({q}{a}{q} + {q}{b}{q}) / 2",
                q = quote,
                a = a,
                b = b
            )
        })
}

fn raw_result_strategy() -> impl Strategy<Value = RawResult> {
    (
        expression_strategy(),
        prop::collection::vec(group_strategy(), 0..=3),
    )
        .prop_map(|(expression, condition_groups)| RawResult {
            expression,
            condition_groups,
        })
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Results built from declared columns and recognized operators
    /// always validate
    #[test]
    fn prop_well_formed_results_validate(raw in raw_result_strategy()) {
        let result = validate(&raw, &test_schema());
        prop_assert!(result.is_ok(), "Rejected well-formed result: {:?}", result.err());
    }

    /// Validation normalizes every quote to the canonical double form
    #[test]
    fn prop_expression_quotes_normalized(raw in raw_result_strategy()) {
        let validated = validate(&raw, &test_schema()).unwrap();
        prop_assert!(!validated.expression.contains('\''));
    }

    /// Range bounds come out smallest-first regardless of given order
    #[test]
    fn prop_range_bounds_ordered(lo in -1000i32..=1000i32, hi in -1000i32..=1000i32) {
        let raw = RawResult {
            expression: "\"col1 (num)\"".to_string(),
            condition_groups: vec![RawGroup {
                group_operator: "and".to_string(),
                conditions: vec![RawCondition {
                    column_name: "col2 (num)".to_string(),
                    column_operator: "in between".to_string(),
                    operand_type: "Value".to_string(),
                    operand: SmallVec::from_vec(vec![
                        OperandValue::Number(lo as f64),
                        OperandValue::Number(hi as f64),
                    ]),
                }],
            }],
        };
        let validated = validate(&raw, &test_schema()).unwrap();
        let operand = &validated.condition_groups[0].conditions[0].operand;
        let a = operand[0].as_number().unwrap();
        let b = operand[1].as_number().unwrap();
        prop_assert!(a <= b, "Bounds not ordered: {} > {}", a, b);
    }

    /// Unrecognized operators are always rejected with the offending
    /// fragment
    #[test]
    fn prop_unknown_operator_rejected(op in "[a-z]{3,12}") {
        prop_assume!(ColumnOperator::from_wire(&op).is_none());
        let raw = RawResult {
            expression: "\"col1 (num)\"".to_string(),
            condition_groups: vec![RawGroup {
                group_operator: "and".to_string(),
                conditions: vec![RawCondition {
                    column_name: "col2 (num)".to_string(),
                    column_operator: op.clone(),
                    operand_type: "Value".to_string(),
                    operand: SmallVec::from_vec(vec![OperandValue::Number(1.0)]),
                }],
            }],
        };
        match validate(&raw, &test_schema()) {
            Err(ExprGenError::UnsupportedOperator(fragment)) => prop_assert_eq!(fragment, op),
            other => prop_assert!(false, "Expected unsupported operator, got {:?}", other),
        }
    }

    /// Undeclared identifiers in the expression are always rejected
    #[test]
    fn prop_unknown_expression_column_rejected(name in "[a-z]{5,10}") {
        prop_assume!(!name.starts_with("col"));
        let raw = RawResult {
            expression: format!("\"{} (num)\"", name),
            condition_groups: vec![],
        };
        prop_assert!(matches!(
            validate(&raw, &test_schema()),
            Err(ExprGenError::UnknownColumn(_))
        ));
    }

    /// Validation is deterministic: the same input validates to the same
    /// normalized result
    #[test]
    fn prop_validation_deterministic(raw in raw_result_strategy()) {
        let first = validate(&raw, &test_schema()).unwrap();
        let second = validate(&raw, &test_schema()).unwrap();
        prop_assert_eq!(first, second);
    }
}
