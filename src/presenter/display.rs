//! DisplayPlan - Stateful display handle for the Python-Rust boundary
//!
//! Holds the pre-rendered outcome in Rust heap memory so the Python host
//! can lazily pull the pieces it needs without serializing everything
//! upfront.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};
use serde::Serialize;

use super::{Outcome, RenderedCondition, RenderedGroup};

/// The presenter's single chosen outcome, pre-rendered for display.
///
/// # Thread Safety
/// DisplayPlan implements Send + Sync because every contained type
/// (String, Vec, plain enums) is Send + Sync.
#[pyclass]
#[derive(Debug, Clone, Serialize)]
pub struct DisplayPlan {
    /// Which of the four terminal outcomes was reached
    outcome: Outcome,
    /// Warning message, for the three warning outcomes
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<String>,
    /// Rendered expression, for the rendered outcome
    #[serde(skip_serializing_if = "Option::is_none")]
    expression: Option<String>,
    /// Rendered condition groups, for the rendered outcome
    condition_groups: Vec<RenderedGroup>,
}

impl DisplayPlan {
    /// Build a warning plan; expression and groups are suppressed
    pub(crate) fn warning(outcome: Outcome, message: &str) -> Self {
        Self {
            outcome,
            warning: Some(message.to_string()),
            expression: None,
            condition_groups: Vec::new(),
        }
    }

    /// Build a rendered plan
    pub(crate) fn rendered(expression: String, condition_groups: Vec<RenderedGroup>) -> Self {
        Self {
            outcome: Outcome::Rendered,
            warning: None,
            expression: Some(expression),
            condition_groups,
        }
    }

    /// Outcome reached by the presenter
    pub fn outcome_kind(&self) -> Outcome {
        self.outcome
    }

    /// Warning message, when a warning outcome was reached
    pub fn warning_message(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    /// Rendered expression, when the rendered outcome was reached
    pub fn rendered_expression(&self) -> Option<&str> {
        self.expression.as_deref()
    }

    /// Rendered condition groups
    pub fn rendered_groups(&self) -> &[RenderedGroup] {
        &self.condition_groups
    }
}

#[pymethods]
impl DisplayPlan {
    // ------------------------------------------------------------------------
    // Getter Properties
    // ------------------------------------------------------------------------

    /// Outcome tag: "cross_column_function_warning",
    /// "unintelligible_request_warning", "invalid_base_column_warning",
    /// or "rendered"
    #[getter]
    fn outcome(&self) -> &'static str {
        self.outcome.as_str()
    }

    /// Whether this plan is one of the warning outcomes
    #[getter]
    fn is_warning(&self) -> bool {
        self.outcome.is_warning()
    }

    /// Warning message for warning outcomes, None otherwise
    #[getter]
    fn warning_text(&self) -> Option<String> {
        self.warning.clone()
    }

    /// Rendered expression for the rendered outcome, None otherwise
    #[getter]
    fn expression(&self) -> Option<String> {
        self.expression.clone()
    }

    /// Number of condition groups in the rendered outcome
    #[getter]
    fn total_groups(&self) -> usize {
        self.condition_groups.len()
    }

    /// Number of conditions across all groups
    #[getter]
    fn total_conditions(&self) -> usize {
        self.condition_groups.iter().map(|g| g.conditions.len()).sum()
    }

    // ------------------------------------------------------------------------
    // Lazy Data Access Methods
    // ------------------------------------------------------------------------

    /// Get the condition groups as a list of dicts.
    ///
    /// Each group dict holds an optional "group_operator" (present only
    /// for multi-condition groups) and a "conditions" list; operand keys
    /// are omitted for operators that carry no comparison value.
    fn get_groups(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let list = PyList::empty(py);
        for group in &self.condition_groups {
            let dict = PyDict::new(py);
            if let Some(op) = &group.group_operator {
                dict.set_item("group_operator", op)?;
            }
            let conditions = PyList::empty(py);
            for condition in &group.conditions {
                conditions.append(self.condition_to_dict(py, condition)?)?;
            }
            dict.set_item("conditions", conditions)?;
            list.append(dict)?;
        }
        Ok(list.into())
    }

    /// Serialize the whole plan to a JSON string
    fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(self)
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        format!(
            "DisplayPlan(outcome='{}', groups={})",
            self.outcome.as_str(),
            self.condition_groups.len()
        )
    }
}

// ============================================================================
// Private Helper Methods
// ============================================================================

impl DisplayPlan {
    /// Convert a RenderedCondition to a Python dict
    fn condition_to_dict<'py>(
        &self,
        py: Python<'py>,
        condition: &RenderedCondition,
    ) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new(py);
        dict.set_item("column_name", &condition.column_name)?;
        dict.set_item("operator", &condition.operator)?;
        if let Some(operand_type) = &condition.operand_type {
            dict.set_item("operand_type", operand_type)?;
        }
        if let Some(operand) = &condition.operand {
            dict.set_item("operand", operand)?;
        }
        Ok(dict)
    }
}
