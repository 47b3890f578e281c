//! Expr Gen Core - Math expression generator core engine
//!
//! This crate provides the Rust core of the math expression generator
//! with Python bindings via PyO3. The Python host owns the UI and the
//! call to the text-generation service; the core owns prompt
//! construction, reply parsing, validation against the dataset schema,
//! and display rendering.

use pyo3::prelude::*;

pub mod column;
pub mod error;
pub mod pipeline;
pub mod presenter;
pub mod prompt;
pub mod schema;
pub mod validator;

use crate::column::deserialize_columns;
use crate::error::ExprGenError;
use crate::pipeline::RequestEngine;
use crate::presenter::DisplayPlan;
use crate::prompt::PromptTemplate;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::sync::Arc;

// ============================================================================
// Cached Engine
// ============================================================================

/// Global cached engine for the currently loaded dataset
static CACHED_ENGINE: OnceCell<Arc<RwLock<RequestEngine>>> = OnceCell::new();

fn cached_engine() -> PyResult<Arc<RwLock<RequestEngine>>> {
    CACHED_ENGINE
        .get()
        .cloned()
        .ok_or_else(|| ExprGenError::DatasetNotInitialized.into())
}

// ============================================================================
// Python Functions
// ============================================================================

/// Initialize the engine for one dataset (call once per loaded dataset)
///
/// This caches the dataset schema, the per-column value samples, and the
/// guideline template in Rust memory, so each request only carries the
/// user's text across the boundary.
///
/// # Arguments
/// * `columns` - List of column descriptions: dicts with `name`, `kind`
///   (`"num"` / `"text"`) and an optional `values` sample list
/// * `template` - Optional custom guideline text replacing the built-in
///   template
/// * `sample_rows` - Optional cap on sampled values per column (default: 20)
#[pyfunction]
#[pyo3(signature = (columns, template=None, sample_rows=None))]
fn init_dataset(
    columns: &Bound<'_, PyAny>,
    template: Option<String>,
    sample_rows: Option<usize>,
) -> PyResult<()> {
    let (schema, samples) = deserialize_columns(columns)?;

    let template = match template {
        Some(text) => PromptTemplate::custom("host-supplied", text),
        None => PromptTemplate::default(),
    };

    let engine = RequestEngine::new(schema, samples, template, sample_rows);

    // If already initialized, swap in the new dataset
    if let Some(existing) = CACHED_ENGINE.get() {
        let mut guard = existing.write();
        *guard = engine;
    } else {
        let _ = CACHED_ENGINE.set(Arc::new(RwLock::new(engine)));
    }

    Ok(())
}

/// Check if a dataset is initialized
#[pyfunction]
fn is_dataset_initialized() -> bool {
    CACHED_ENGINE.get().is_some()
}

/// Build the full generation instruction for one user request
///
/// # Raises
/// RuntimeError if `init_dataset` was not called first
#[pyfunction]
fn build_prompt(user_request: String) -> PyResult<String> {
    let engine_arc = cached_engine()?;
    let engine = engine_arc.read();
    Ok(engine.build_prompt(&user_request))
}

/// Parse, validate, and render one generator reply
///
/// # Returns
/// A DisplayPlan holding the single chosen display outcome
///
/// # Raises
/// ValueError for malformed replies or validation failures,
/// RuntimeError if `init_dataset` was not called first
#[pyfunction]
fn process_reply(reply: String) -> PyResult<DisplayPlan> {
    let engine_arc = cached_engine()?;
    let engine = engine_arc.read();
    engine.process_reply(&reply).map_err(PyErr::from)
}

/// Run the full pipeline: build the prompt, call the host's generator,
/// and render its reply
///
/// # Arguments
/// * `generator` - A callable taking the prompt string and returning the
///   generator's reply text; any exception it raises is surfaced as a
///   generation failure
/// * `user_request` - The user's natural-language request
///
/// # Raises
/// RuntimeError when the generator call fails, ValueError for malformed
/// replies or validation failures
#[pyfunction]
fn generate_expression(generator: &Bound<'_, PyAny>, user_request: String) -> PyResult<DisplayPlan> {
    let engine_arc = cached_engine()?;
    let engine = engine_arc.read();

    let prompt = engine.build_prompt(&user_request);
    let reply: String = generator
        .call1((prompt.as_str(),))
        .and_then(|value| value.extract())
        .map_err(|e| ExprGenError::GenerationFailure(e.to_string()))?;

    engine.process_reply(&reply).map_err(PyErr::from)
}

/// Parse, validate, and render one generator reply asynchronously
///
/// This runs the processing in a background thread using Tokio's
/// spawn_blocking, allowing Python's asyncio event loop to remain
/// responsive while large replies are handled.
///
/// # Returns
/// A Python awaitable that resolves to a DisplayPlan
///
/// # Raises
/// RuntimeError if `init_dataset` was not called first
#[pyfunction]
fn process_reply_async<'py>(py: Python<'py>, reply: String) -> PyResult<Bound<'py, PyAny>> {
    // Get cached engine before entering async context
    let engine_arc = cached_engine()?;

    pyo3_async_runtimes::tokio::future_into_py(py, async move {
        let result = tokio::task::spawn_blocking(move || {
            let engine = engine_arc.read();
            engine
                .process_reply(&reply)
                .map_err(PyErr::from)
        })
        .await
        .map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                "Processing task panicked: {}",
                e
            ))
        })??;

        Ok(result)
    })
}

// ============================================================================
// Python Module Definition
// ============================================================================

/// Python module definition
#[pymodule]
fn expr_gen_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(init_dataset, m)?)?;
    m.add_function(wrap_pyfunction!(is_dataset_initialized, m)?)?;
    m.add_function(wrap_pyfunction!(build_prompt, m)?)?;
    m.add_function(wrap_pyfunction!(process_reply, m)?)?;
    m.add_function(wrap_pyfunction!(generate_expression, m)?)?;
    m.add_function(wrap_pyfunction!(process_reply_async, m)?)?;
    m.add_class::<DisplayPlan>()?;
    Ok(())
}
