//! Column model and dataset schema deserialization
//!
//! This module handles the dataset surface: column kinds, the annotated
//! identifier form used everywhere else in the crate, and deserialization
//! of the column description supplied by the Python host.

mod types;


pub use types::*;

use pyo3::types::{PyAnyMethods, PyDict, PyDictMethods, PyList, PyListMethods};
use pyo3::Bound;

/// Helper to get attribute from either dict or object
fn get_attr<'py>(
    obj: &Bound<'py, pyo3::PyAny>,
    name: &str,
) -> pyo3::PyResult<Bound<'py, pyo3::PyAny>> {
    if let Ok(dict) = obj.downcast::<PyDict>() {
        dict.get_item(name)?
            .ok_or_else(|| pyo3::exceptions::PyKeyError::new_err(name.to_string()))
    } else {
        obj.getattr(name)
    }
}

/// Helper to get optional attribute from either dict or object
fn get_attr_opt<'py>(obj: &Bound<'py, pyo3::PyAny>, name: &str) -> Option<Bound<'py, pyo3::PyAny>> {
    if let Ok(dict) = obj.downcast::<PyDict>() {
        dict.get_item(name).ok().flatten()
    } else {
        obj.getattr(name).ok()
    }
}

/// Deserialize the dataset column description from the Python host.
///
/// Expected format: a list of dicts (or objects) with `name`, `kind`
/// (`"num"` / `"text"`, also accepted under `dtype`) and an optional
/// `values` list holding the sampled cell values for that column.
///
/// Returns the dataset schema plus one sample vector per column, aligned
/// with the schema's column order. Sample values are stringified here so
/// the rest of the crate never touches Python objects.
pub fn deserialize_columns(
    obj: &Bound<'_, pyo3::PyAny>,
) -> pyo3::PyResult<(DatasetSchema, Vec<Vec<String>>)> {
    let list: Bound<'_, PyList> = obj.extract()?;

    let mut columns = Vec::with_capacity(list.len());
    let mut samples = Vec::with_capacity(list.len());

    for item in list.iter() {
        let name: String = get_attr(&item, "name")?.extract()?;
        // Support both "kind" and "dtype" field names
        let kind_tag: String = get_attr(&item, "kind")
            .or_else(|_| get_attr(&item, "dtype"))?
            .extract()?;
        let kind = ColumnKind::from_tag(&kind_tag)?;

        let values = match get_attr_opt(&item, "values") {
            Some(values_obj) if !values_obj.is_none() => {
                let values_list: Bound<'_, PyList> = values_obj.extract()?;
                let mut values = Vec::with_capacity(values_list.len());
                for value in values_list.iter() {
                    values.push(value.str()?.to_string());
                }
                values
            }
            _ => Vec::new(),
        };

        columns.push(Column::new(name, kind));
        samples.push(values);
    }

    Ok((DatasetSchema::new(columns), samples))
}
