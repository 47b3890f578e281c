//! Request pipeline
//!
//! One engine per dataset. A request runs prompt construction, the
//! external generation call, reply parsing, validation, and presentation
//! to completion before the next request is considered; nothing is shared
//! between requests and nothing is retried here.

use tracing::debug;

use crate::column::DatasetSchema;
use crate::error::{ExprGenError, Result};
use crate::presenter::{present, DisplayPlan};
use crate::prompt::{build_prompt, PromptTemplate, DEFAULT_SAMPLE_ROWS};
use crate::schema::parse_reply;
use crate::validator::validate;

/// The opaque text-generation collaborator.
///
/// Implementations wrap whatever service maps the instruction to the
/// structured reply; the engine only sees prompt text in and reply text
/// out. Retries, timeouts, and rate limiting belong to the implementation
/// or its caller, never to the engine.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> Result<String>;
}

impl<F> TextGenerator for F
where
    F: Fn(&str) -> Result<String>,
{
    fn generate(&self, prompt: &str) -> Result<String> {
        self(prompt)
    }
}

/// Engine bundling one dataset's schema, samples, and guideline template
pub struct RequestEngine {
    schema: DatasetSchema,
    samples: Vec<Vec<String>>,
    template: PromptTemplate,
    sample_rows: usize,
}

impl RequestEngine {
    pub fn new(
        schema: DatasetSchema,
        samples: Vec<Vec<String>>,
        template: PromptTemplate,
        sample_rows: Option<usize>,
    ) -> Self {
        Self {
            schema,
            samples,
            template,
            sample_rows: sample_rows.unwrap_or(DEFAULT_SAMPLE_ROWS),
        }
    }

    pub fn schema(&self) -> &DatasetSchema {
        &self.schema
    }

    pub fn template(&self) -> &PromptTemplate {
        &self.template
    }

    /// Build the full instruction for one user request
    pub fn build_prompt(&self, user_request: &str) -> String {
        build_prompt(
            &self.template,
            &self.schema,
            &self.samples,
            self.sample_rows,
            user_request,
        )
    }

    /// Parse, validate, and present one generator reply
    pub fn process_reply(&self, reply: &str) -> Result<DisplayPlan> {
        let raw = parse_reply(reply)?;
        let validated = validate(&raw, &self.schema)?;
        Ok(present(&validated))
    }

    /// Run the full pipeline for one request
    pub fn run<G: TextGenerator>(&self, generator: &G, user_request: &str) -> Result<DisplayPlan> {
        let prompt = self.build_prompt(user_request);
        debug!(
            template = self.template.id(),
            prompt_len = prompt.len(),
            "dispatching generation request"
        );
        let reply = generator.generate(&prompt)?;
        self.process_reply(&reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{Column, ColumnKind};
    use crate::presenter::Outcome;

    fn test_engine() -> RequestEngine {
        RequestEngine::new(
            DatasetSchema::new(vec![
                Column::new("col1", ColumnKind::Numeric),
                Column::new("col2", ColumnKind::Numeric),
                Column::new("col3", ColumnKind::Text),
            ]),
            vec![
                vec!["1".to_string(), "2".to_string()],
                vec!["3".to_string(), "4".to_string()],
                vec!["pass".to_string(), "fail".to_string()],
            ],
            PromptTemplate::default(),
            None,
        )
    }

    #[test]
    fn test_run_renders_generator_reply() {
        let engine = test_engine();
        let generator = |prompt: &str| -> crate::error::Result<String> {
            // The engine hands the collaborator a grounded prompt
            assert!(prompt.contains("Column: col1 (num)"));
            Ok(r#"{"Expression": "AVG(\"col1 (num)\")", "Condition_Groups": []}"#.to_string())
        };

        let plan = engine.run(&generator, "average of col1").unwrap();
        assert_eq!(plan.outcome_kind(), Outcome::Rendered);
        assert_eq!(plan.rendered_expression(), Some("AVG(\"col1 (num)\")"));
    }

    #[test]
    fn test_run_surfaces_generation_failure() {
        let engine = test_engine();
        let generator = |_: &str| -> crate::error::Result<String> {
            Err(ExprGenError::GenerationFailure("service unreachable".to_string()))
        };

        match engine.run(&generator, "anything") {
            Err(ExprGenError::GenerationFailure(msg)) => {
                assert!(msg.contains("unreachable"))
            }
            other => panic!("Expected generation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_run_reports_malformed_reply() {
        let engine = test_engine();
        let generator =
            |_: &str| -> crate::error::Result<String> { Ok("not json at all".to_string()) };

        assert!(matches!(
            engine.run(&generator, "anything"),
            Err(ExprGenError::MalformedOutput(_))
        ));
    }

    #[test]
    fn test_run_reports_validation_error() {
        let engine = test_engine();
        let generator = |_: &str| -> crate::error::Result<String> {
            Ok(r#"{"Expression": "\"ghost (num)\"", "Condition_Groups": []}"#.to_string())
        };

        assert!(matches!(
            engine.run(&generator, "anything"),
            Err(ExprGenError::UnknownColumn(_))
        ));
    }

    #[test]
    fn test_run_classifies_sentinel_reply() {
        let engine = test_engine();
        let generator = |_: &str| -> crate::error::Result<String> {
            Ok(format!(
                r#"{{"Expression": "{}", "Condition_Groups": []}}"#,
                crate::schema::UNINTELLIGIBLE_REQUEST_WARNING
            ))
        };

        let plan = engine.run(&generator, "colorless green ideas").unwrap();
        assert_eq!(plan.outcome_kind(), Outcome::UnintelligibleRequestWarning);
    }

    #[test]
    fn test_process_reply_full_scenario() {
        let engine = test_engine();
        let reply = r#"{
            "Expression": "MAX(\"col1 (num)\") - MIN(\"col1 (num)\")",
            "Condition_Groups": [
                {
                    "Group_Operator": "and",
                    "Conditions": [
                        {
                            "Column_Name": "col2 (num)",
                            "Column_Operator": "is Empty",
                            "Operand_Type": "Value",
                            "Operand": ["Null"]
                        }
                    ]
                }
            ]
        }"#;

        let plan = engine.process_reply(reply).unwrap();
        assert_eq!(plan.outcome_kind(), Outcome::Rendered);
        let groups = plan.rendered_groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].group_operator, None);
        assert_eq!(groups[0].conditions[0].operator, "is Empty");
        assert_eq!(groups[0].conditions[0].operand, None);
    }
}
