//! Rules that cannot be read from the source
//!
//! PySB macros and helper functions create rules by running Python, so the
//! rules they make never appear as `Rule(...)` calls. A model that uses them
//! is rejected instead of being loaded with those rules missing.

use indexmap::IndexSet;
use pydream_it_ast::{Import, ImportedNames, ModelSource, import::ImportNode};
use pydream_it_shared::span::Span;

use crate::error::LoadError;

const PYSB_MODULE: &str = "pysb";
const MACROS_MODULE: &str = "pysb.macros";

/// The functions `from pysb.macros import *` brings in
const PYSB_MACROS: &[&str] = &[
    "assemble_chain_sequential_base",
    "assemble_pore_sequential",
    "bind",
    "bind_complex",
    "bind_table",
    "bind_table_complex",
    "catalyze",
    "catalyze_complex",
    "catalyze_one_step",
    "catalyze_one_step_reversible",
    "catalyze_state",
    "degrade",
    "drug_binding",
    "equilibrate",
    "pore_bind",
    "pore_transport",
    "synthesize",
    "synthesize_degrade_table",
];

/// Callees that take parameters without creating rules
const COMPONENTS_WITHOUT_RULES: &[&str] = &[
    "Annotation",
    "Compartment",
    "EnergyPattern",
    "Initial",
    "Monomer",
    "Observable",
    "Tag",
    "print",
];

/// The callee paths that refer to a `pysb.macros` function
#[derive(Debug, Default)]
struct MacroCallees {
    names: IndexSet<String>,
    module_prefixes: Vec<String>,
}

impl MacroCallees {
    fn from_imports(imports: &[ImportNode]) -> Self {
        let mut callees = Self::default();

        for import in imports {
            match import.node_value() {
                Import::From { module, names } if module == MACROS_MODULE => match names {
                    ImportedNames::Glob => callees
                        .names
                        .extend(PYSB_MACROS.iter().map(|name| (*name).to_string())),
                    ImportedNames::List(names) => callees
                        .names
                        .extend(names.iter().map(|name| name.bound_name().to_string())),
                },
                Import::From {
                    module,
                    names: ImportedNames::List(names),
                } if module == PYSB_MODULE => {
                    callees.module_prefixes.extend(
                        names
                            .iter()
                            .filter(|name| name.name().as_str() == "macros")
                            .map(|name| format!("{}.", name.bound_name())),
                    );
                }
                Import::Module { module, alias } if module == MACROS_MODULE || module == PYSB_MODULE => {
                    // `import pysb.macros` binds `pysb`, as does `import pysb`
                    let prefix = match alias {
                        Some(alias) if module == MACROS_MODULE => format!("{}.", alias.as_str()),
                        Some(alias) => format!("{}.macros.", alias.as_str()),
                        None => format!("{MACROS_MODULE}."),
                    };
                    callees.module_prefixes.push(prefix);
                }
                Import::From { .. } | Import::Module { .. } => (),
            }
        }

        callees
    }

    fn contains(&self, callee: &str) -> bool {
        self.names.contains(callee)
            || self
                .module_prefixes
                .iter()
                .any(|prefix| callee.starts_with(prefix.as_str()))
    }
}

/// Checks that no call other than `Rule(...)` can create rules.
///
/// A call is rejected if it is a `pysb.macros` function, or if it is passed
/// a declared parameter or expression and is not a component that is known
/// to take parameters without creating rules. `declaration_of` returns the
/// span of the declaration of a name, if there is one.
pub fn check_other_calls(
    model_source: &ModelSource,
    declaration_of: impl Fn(&str) -> Option<Span>,
) -> Result<(), LoadError> {
    let macro_callees = MacroCallees::from_imports(model_source.imports());

    for call in model_source.other_calls() {
        let callee = call.callee();

        if macro_callees.contains(callee) {
            return Err(LoadError::MacroCall {
                callee: callee.node_value().clone(),
                span: callee.span(),
            });
        }

        if COMPONENTS_WITHOUT_RULES.contains(&call.callee_name()) {
            continue;
        }

        for reference in call.references() {
            if let Some(declaration_span) = declaration_of(reference.as_str()) {
                return Err(LoadError::ParameterPassedToCall {
                    callee: callee.node_value().clone(),
                    name: reference.as_str().to_string(),
                    span: reference.span(),
                    declaration_span,
                });
            }
        }
    }

    Ok(())
}
