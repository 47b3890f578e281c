//! Closed operator enumerations of the generator output contract

/// Boolean connective applied pairwise across the conditions of one group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupOperator {
    And,
    Or,
}

impl GroupOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            GroupOperator::And => "and",
            GroupOperator::Or => "or",
        }
    }

    /// Parse the wire form. Tolerates case drift from the generator.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "and" => Some(GroupOperator::And),
            "or" => Some(GroupOperator::Or),
            _ => None,
        }
    }
}

/// The fixed condition operator set of the generator output contract.
///
/// Wire strings are matched exactly; the generator is constrained to this
/// enumeration by its output schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnOperator {
    Is,
    IsOneOf,
    IsNot,
    IsNotOneOf,
    IsLessThan,
    IsLessThanOrEqual,
    IsGreaterThan,
    IsGreaterThanOrEqual,
    IsMaximum,
    IsNotMaximum,
    IsMinimum,
    IsNotMinimum,
    IsEmpty,
    IsNotEmpty,
    InBetween,
    Contains,
    DoesNotContain,
    StartsWith,
    EndsWith,
    DoesNotStartWith,
    DoesNotEndWith,
    IsEarlierThan,
    IsOnOrEarlierThan,
    IsLaterThan,
    IsOnOrLaterThan,
}

/// Every recognized operator, in wire-schema order
pub const ALL_OPERATORS: [ColumnOperator; 25] = [
    ColumnOperator::Is,
    ColumnOperator::IsOneOf,
    ColumnOperator::IsNot,
    ColumnOperator::IsNotOneOf,
    ColumnOperator::IsLessThan,
    ColumnOperator::IsLessThanOrEqual,
    ColumnOperator::IsGreaterThan,
    ColumnOperator::IsGreaterThanOrEqual,
    ColumnOperator::IsMaximum,
    ColumnOperator::IsNotMaximum,
    ColumnOperator::IsMinimum,
    ColumnOperator::IsNotMinimum,
    ColumnOperator::IsEmpty,
    ColumnOperator::IsNotEmpty,
    ColumnOperator::InBetween,
    ColumnOperator::Contains,
    ColumnOperator::DoesNotContain,
    ColumnOperator::StartsWith,
    ColumnOperator::EndsWith,
    ColumnOperator::DoesNotStartWith,
    ColumnOperator::DoesNotEndWith,
    ColumnOperator::IsEarlierThan,
    ColumnOperator::IsOnOrEarlierThan,
    ColumnOperator::IsLaterThan,
    ColumnOperator::IsOnOrLaterThan,
];

impl ColumnOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnOperator::Is => "is",
            ColumnOperator::IsOneOf => "is one of",
            ColumnOperator::IsNot => "is NOT",
            ColumnOperator::IsNotOneOf => "is NOT one of",
            ColumnOperator::IsLessThan => "is less than",
            ColumnOperator::IsLessThanOrEqual => "is less than or equal to",
            ColumnOperator::IsGreaterThan => "is greater than",
            ColumnOperator::IsGreaterThanOrEqual => "is greater than or equal to",
            ColumnOperator::IsMaximum => "is the maximum value",
            ColumnOperator::IsNotMaximum => "is NOT the maximum value",
            ColumnOperator::IsMinimum => "is the minimum value",
            ColumnOperator::IsNotMinimum => "is NOT the minimum value",
            ColumnOperator::IsEmpty => "is Empty",
            ColumnOperator::IsNotEmpty => "is NOT Empty",
            ColumnOperator::InBetween => "in between",
            ColumnOperator::Contains => "contains",
            ColumnOperator::DoesNotContain => "does NOT contain",
            ColumnOperator::StartsWith => "starts with",
            ColumnOperator::EndsWith => "ends with",
            ColumnOperator::DoesNotStartWith => "does NOT start with",
            ColumnOperator::DoesNotEndWith => "does NOT end with",
            ColumnOperator::IsEarlierThan => "is earlier than",
            ColumnOperator::IsOnOrEarlierThan => "is on or earlier than",
            ColumnOperator::IsLaterThan => "is later than",
            ColumnOperator::IsOnOrLaterThan => "is on or later than",
        }
    }

    /// Parse the exact wire form
    pub fn from_wire(s: &str) -> Option<Self> {
        ALL_OPERATORS.iter().copied().find(|op| op.as_str() == s)
    }

    /// Whether this operator carries a comparison operand.
    ///
    /// Emptiness and min/max membership need no comparison value; their
    /// operand fields are carried on the wire but never surfaced.
    pub fn takes_operand(self) -> bool {
        !matches!(
            self,
            ColumnOperator::IsMaximum
                | ColumnOperator::IsNotMaximum
                | ColumnOperator::IsMinimum
                | ColumnOperator::IsNotMinimum
                | ColumnOperator::IsEmpty
                | ColumnOperator::IsNotEmpty
        )
    }

    /// Whether this operator expects exactly two operand values forming an
    /// inclusive range
    pub fn is_range(self) -> bool {
        matches!(self, ColumnOperator::InBetween)
    }
}
