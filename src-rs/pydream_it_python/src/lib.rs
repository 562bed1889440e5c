//! Python model loader for the PyDREAM script generator
//!
//! Imports the model module with an embedded interpreter and reads the rules
//! of its `model` object. Unlike the source loader, this sees rules created
//! by macros and loops, at the cost of needing PySB installed.

#![warn(missing_docs)]

use std::path::Path;

use pydream_it_ir::{Model, Parameter, Rule};
use pydream_it_model_loader::ModelLoader;
use pydream_it_shared::error::{AsPydreamError, Context};
use pyo3::{prelude::*, types::PyList};

/// Loads a model by importing its module in Python.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonLoader;

/// An error that occurred while importing a model in Python.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PythonLoadError {
    /// The model path has no usable module name
    InvalidModulePath,
    /// Python raised an exception
    Python {
        /// The module being imported
        module: String,
        /// The exception, as Python displays it
        exception: String,
    },
}

impl AsPydreamError for PythonLoadError {
    fn message(&self) -> String {
        match self {
            Self::InvalidModulePath => "the model path does not name a Python module".to_string(),
            Self::Python { module, exception } => {
                format!("failed to load model from module '{module}': {exception}")
            }
        }
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::InvalidModulePath => vec![Context::Help(
                "pass the path of a `.py` file that defines `model`".to_string(),
            )],
            Self::Python { .. } => vec![Context::Note(
                "the model module must be importable and define a PySB `model`".to_string(),
            )],
        }
    }
}

/// Splits a model path into the directory to import from and the module name.
fn module_location(path: &Path) -> Result<(String, String), PythonLoadError> {
    let module = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .ok_or(PythonLoadError::InvalidModulePath)?;

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let directory = directory
        .to_str()
        .ok_or(PythonLoadError::InvalidModulePath)?;

    Ok((directory.to_string(), module.to_string()))
}

/// Reads a rate attribute of a rule. `None` means the rule has no rate in
/// that direction, either because the attribute is `None` or missing.
fn read_rate(rule: &Bound<'_, PyAny>, attribute: &str) -> PyResult<Option<Parameter>> {
    if !rule.hasattr(attribute)? {
        return Ok(None);
    }

    let rate = rule.getattr(attribute)?;
    if rate.is_none() {
        return Ok(None);
    }

    let name: String = rate.getattr("name")?.extract()?;
    let value: f64 = rate.getattr("value")?.extract()?;
    Ok(Some(Parameter::new(name, value)))
}

fn import_model(py: Python<'_>, directory: &str, module: &str) -> PyResult<Model> {
    let sys_path = py.import("sys")?.getattr("path")?;
    let sys_path = sys_path.downcast::<PyList>()?;
    sys_path.insert(0, directory)?;

    let model = py.import(module)?.getattr("model")?;

    let mut rules = vec![];
    for rule in model.getattr("rules")?.try_iter()? {
        let rule = rule?;
        let name: String = rule.getattr("name")?.extract()?;
        let forward_rate = read_rate(&rule, "rate_forward")?;
        let reverse_rate = read_rate(&rule, "rate_reverse")?;
        rules.push(Rule::new(name, forward_rate, reverse_rate));
    }

    Ok(Model::new(rules))
}

impl ModelLoader for PythonLoader {
    type Error = PythonLoadError;

    fn load_model(&self, path: &Path, _source: &str) -> Result<Model, Self::Error> {
        let (directory, module) = module_location(path)?;

        Python::with_gil(|py| {
            import_model(py, &directory, &module).map_err(|error| PythonLoadError::Python {
                module: module.clone(),
                exception: error.to_string(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use pyo3::ffi::c_str;

    use super::*;

    #[test]
    fn rule_without_reverse_rate_attribute() {
        Python::with_gil(|py| {
            let rule = py
                .eval(
                    c_str!(
                        "__import__('types').SimpleNamespace(name='r1', \
                         rate_forward=__import__('types').SimpleNamespace(name='k1', value=2.5))"
                    ),
                    None,
                    None,
                )
                .expect("rule should evaluate");

            let forward = read_rate(&rule, "rate_forward")
                .expect("forward rate should be read")
                .expect("rule has a forward rate");
            assert_eq!(forward.name(), "k1");
            assert!((forward.value() - 2.5).abs() < f64::EPSILON);

            let reverse = read_rate(&rule, "rate_reverse").expect("missing rate is not an error");
            assert_eq!(reverse, None);
        });
    }

    #[test]
    fn rule_with_none_reverse_rate() {
        Python::with_gil(|py| {
            let rule = py
                .eval(
                    c_str!("__import__('types').SimpleNamespace(rate_reverse=None)"),
                    None,
                    None,
                )
                .expect("rule should evaluate");

            let reverse = read_rate(&rule, "rate_reverse").expect("`None` rate is not an error");
            assert_eq!(reverse, None);
        });
    }

    #[test]
    fn module_location_from_path() {
        let (directory, module) =
            module_location(Path::new("models/egfr.py")).expect("valid module path");
        assert_eq!(directory, "models");
        assert_eq!(module, "egfr");
    }

    #[test]
    fn module_location_in_current_directory() {
        let (directory, module) = module_location(Path::new("egfr.py")).expect("valid module path");
        assert_eq!(directory, ".");
        assert_eq!(module, "egfr");
    }

    #[test]
    fn module_location_without_file_name() {
        assert_eq!(
            module_location(Path::new("/")),
            Err(PythonLoadError::InvalidModulePath)
        );
    }
}
