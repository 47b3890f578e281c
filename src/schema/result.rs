//! Wire structures of the generator reply
//!
//! These mirror the JSON contract field-for-field. Operator and type
//! fields stay plain strings here so an unrecognized value surfaces as a
//! validation error with the offending fragment, not as a parse failure.

use serde::Deserialize;
use smallvec::SmallVec;

use super::operand::OperandValue;

/// Operand storage: one entry for scalar comparisons, two for ranges,
/// more for membership tests
pub type OperandList = SmallVec<[OperandValue; 2]>;

/// The generator's reply, as received
#[derive(Debug, Clone, Deserialize)]
pub struct RawResult {
    #[serde(rename = "Expression")]
    pub expression: String,
    #[serde(rename = "Condition_Groups", default)]
    pub condition_groups: Vec<RawGroup>,
}

/// One condition group on the wire
#[derive(Debug, Clone, Deserialize)]
pub struct RawGroup {
    #[serde(rename = "Group_Operator")]
    pub group_operator: String,
    #[serde(rename = "Conditions", default)]
    pub conditions: Vec<RawCondition>,
}

/// One condition on the wire
#[derive(Debug, Clone, Deserialize)]
pub struct RawCondition {
    #[serde(rename = "Column_Name")]
    pub column_name: String,
    #[serde(rename = "Column_Operator")]
    pub column_operator: String,
    #[serde(rename = "Operand_Type")]
    pub operand_type: String,
    #[serde(rename = "Operand", default)]
    pub operand: OperandList,
}
