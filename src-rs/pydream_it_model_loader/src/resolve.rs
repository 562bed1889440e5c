//! Resolution of parsed model building calls into a [`Model`]
//!
//! Calls are resolved in source order, so a rule can only use parameters
//! declared above it, as when the model file is run.

use indexmap::IndexMap;
use pydream_it_ast::{
    ArgValue, CallKind, ModelSource,
    argument::ArgumentNode,
    call::{Call, CallNode},
};
use pydream_it_ir::{Model, Parameter, RateRole, Rule};
use pydream_it_shared::span::Span;

use crate::{error::LoadError, other_call::check_other_calls};

/// A parameter or expression that rules may refer to
#[derive(Debug, Clone)]
enum Declaration {
    Parameter(Parameter),
    Expression { name: String },
}

#[derive(Debug, Clone)]
struct DeclaredItem {
    declaration: Declaration,
    span: Span,
}

/// The names a rule can use to refer to a declaration
///
/// A declaration is known by its string name and by the variable it is
/// assigned to, which usually agree.
#[derive(Debug, Default)]
struct SymbolTable {
    items: IndexMap<String, DeclaredItem>,
}

impl SymbolTable {
    fn declare(&mut self, call: &CallNode, name: &str, declaration: Declaration) {
        let item = DeclaredItem {
            declaration,
            span: call.span(),
        };

        if let Some(variable) = call.assigned_to() {
            self.items.insert(variable.as_str().to_string(), item.clone());
        }
        self.items.insert(name.to_string(), item);
    }

    fn get(&self, name: &str) -> Option<&DeclaredItem> {
        self.items.get(name)
    }
}

/// Resolves the calls of a model file into a model.
///
/// Fails if the file calls anything that may create rules other than
/// `Rule(...)`, since those rules would be missing from the model.
pub fn resolve_model(model_source: &ModelSource) -> Result<Model, LoadError> {
    let mut has_model = false;
    let mut symbols = SymbolTable::default();
    let mut rules = vec![];

    for (index, call) in model_source.calls().iter().enumerate() {
        match call.kind() {
            CallKind::Model => has_model = true,
            CallKind::Parameter => {
                let parameter = resolve_parameter(call)?;
                let name = parameter.name().to_string();
                symbols.declare(call, &name, Declaration::Parameter(parameter));
            }
            CallKind::Expression => {
                let name = call_name(call)?;
                symbols.declare(call, &name, Declaration::Expression { name: name.clone() });
            }
            CallKind::Rule => {
                let later_calls = &model_source.calls()[index + 1..];
                rules.push(resolve_rule(call, &symbols, later_calls)?);
            }
        }
    }

    if !has_model {
        return Err(LoadError::MissingModel);
    }

    check_other_calls(model_source, |name| symbols.get(name).map(|item| item.span))?;

    Ok(Model::new(rules))
}

/// Returns the string literal name of a call.
fn call_name(call: &CallNode) -> Result<String, LoadError> {
    let Some(name) = call.argument(0, "name") else {
        return Err(LoadError::MissingName {
            kind: call.kind(),
            callee_span: call.callee().span(),
        });
    };

    match name.value().node_value() {
        ArgValue::String(name) => Ok(name.clone()),
        other => Err(LoadError::NonStringName {
            kind: call.kind(),
            found: other.describe(),
            span: name.value().span(),
        }),
    }
}

fn resolve_parameter(call: &CallNode) -> Result<Parameter, LoadError> {
    let name = call_name(call)?;

    let value = match call.argument(1, "value") {
        // PySB's default value
        None => 0.0,
        Some(value) => match value.value().node_value() {
            ArgValue::Number(number) => *number,
            other => {
                return Err(LoadError::NonLiteralValue {
                    parameter: name,
                    found: other.describe(),
                    span: value.value().span(),
                });
            }
        },
    };

    Ok(Parameter::new(name, value))
}

fn resolve_rule(
    call: &CallNode,
    symbols: &SymbolTable,
    later_calls: &[CallNode],
) -> Result<Rule, LoadError> {
    let name = call_name(call)?;

    let forward_rate = call.argument(2, "rate_forward");
    let reverse_rate = call.argument(3, "rate_reverse");

    let forward_rate = resolve_rate(&name, RateRole::Forward, forward_rate, symbols, later_calls)?;
    let reverse_rate = resolve_rate(&name, RateRole::Reverse, reverse_rate, symbols, later_calls)?;

    Ok(Rule::new(name, forward_rate, reverse_rate))
}

/// Resolves a rate argument to the parameter it names.
///
/// A missing argument and `None` both mean the rule has no rate in that
/// direction.
fn resolve_rate(
    rule: &str,
    role: RateRole,
    argument: Option<&ArgumentNode>,
    symbols: &SymbolTable,
    later_calls: &[CallNode],
) -> Result<Option<Parameter>, LoadError> {
    let Some(argument) = argument else {
        return Ok(None);
    };
    let span = argument.value().span();

    let rate_name = match argument.value().node_value() {
        ArgValue::None => return Ok(None),
        ArgValue::Identifier(rate_name) => rate_name,
        other => {
            return Err(LoadError::UnsupportedRate {
                rule: rule.to_string(),
                role,
                found: other.describe(),
                span,
            });
        }
    };

    match symbols.get(rate_name) {
        Some(DeclaredItem {
            declaration: Declaration::Parameter(parameter),
            ..
        }) => Ok(Some(parameter.clone())),
        Some(DeclaredItem {
            declaration: Declaration::Expression { name },
            span: expression_span,
        }) => Err(LoadError::ExpressionRate {
            rule: rule.to_string(),
            name: name.clone(),
            span,
            expression_span: *expression_span,
        }),
        None => Err(LoadError::UndefinedRate {
            rule: rule.to_string(),
            name: rate_name.clone(),
            span,
            declared_later: find_declaration(later_calls, rate_name),
        }),
    }
}

/// Finds a parameter declared under `name` among `calls`.
fn find_declaration(calls: &[CallNode], name: &str) -> Option<Span> {
    calls
        .iter()
        .filter(|call| call.kind() == CallKind::Parameter)
        .find(|call| declares(call, name))
        .map(|call| call.span())
}

fn declares(call: &Call, name: &str) -> bool {
    let by_variable = call
        .assigned_to()
        .is_some_and(|variable| variable.as_str() == name);
    let by_name = call
        .argument(0, "name")
        .is_some_and(|argument| matches!(argument.value().node_value(), ArgValue::String(n) if n == name));

    by_variable || by_name
}
