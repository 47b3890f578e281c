//! Prompt construction for the text generator
//!
//! Builds the full instruction sent to the external generator: guideline
//! text, the user's request, and a bounded sample of each column's values
//! so the generator can ground column references.

mod template;

pub use template::{DEFAULT_GUIDELINES, DEFAULT_TEMPLATE_ID};

use crate::column::DatasetSchema;
use crate::schema::ALL_FUNCTIONS;

/// Default number of sampled rows appended per column
pub const DEFAULT_SAMPLE_ROWS: usize = 20;

/// Versioned guideline text. Hosts may inject their own revision at init
/// time; the validator and presenter never depend on its wording.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    id: String,
    guidelines: String,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        let roster = ALL_FUNCTIONS
            .iter()
            .map(|f| f.signature())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            id: DEFAULT_TEMPLATE_ID.to_string(),
            guidelines: DEFAULT_GUIDELINES.replace("{functions}", &roster),
        }
    }
}

impl PromptTemplate {
    /// A host-supplied template revision
    pub fn custom(id: impl Into<String>, guidelines: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            guidelines: guidelines.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn guidelines(&self) -> &str {
        &self.guidelines
    }
}

/// Build the full instruction for one request.
///
/// `samples` holds one value vector per column, aligned with the schema's
/// column order; at most `sample_rows` values per column are included.
pub fn build_prompt(
    template: &PromptTemplate,
    schema: &DatasetSchema,
    samples: &[Vec<String>],
    sample_rows: usize,
    user_request: &str,
) -> String {
    let mut prompt = String::with_capacity(template.guidelines.len() + 512);
    prompt.push_str(&template.guidelines);
    prompt.push_str("\n\nUser Intent: ");
    prompt.push_str(user_request);
    prompt.push_str("\nThe columns of the dataset are as follows:\n");

    for (index, column) in schema.columns().iter().enumerate() {
        prompt.push_str("\nColumn: ");
        prompt.push_str(&column.annotated());
        prompt.push_str("\nValues:\n");
        if let Some(values) = samples.get(index) {
            let shown = &values[..values.len().min(sample_rows)];
            prompt.push_str(&shown.join(", "));
        }
        prompt.push('\n');
    }

    prompt.push_str("\nGiven the intent, output just the dictionary and no other text.");
    prompt
}
