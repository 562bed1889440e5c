//! Errors that can occur while loading a model from its source

use pydream_it_ast::CallKind;
use pydream_it_ir::RateRole;
use pydream_it_parser::error::ParserError;
use pydream_it_shared::{
    error::{AsPydreamError, Context, ErrorLocation},
    span::Span,
};

/// An error that occurred while loading a model from its source.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    /// The model file could not be parsed
    Parse(ParserError),
    /// The file has no `Model()` call
    MissingModel,
    /// A call has no name argument
    MissingName {
        /// The kind of call
        kind: CallKind,
        /// The span of the callee
        callee_span: Span,
    },
    /// The name of a call is not a string literal
    NonStringName {
        /// The kind of call
        kind: CallKind,
        /// What was found instead
        found: &'static str,
        /// The span of the name argument
        span: Span,
    },
    /// The value of a parameter is not a number literal
    NonLiteralValue {
        /// The name of the parameter
        parameter: String,
        /// What was found instead
        found: &'static str,
        /// The span of the value argument
        span: Span,
    },
    /// A rate argument is neither a parameter name nor `None`
    UnsupportedRate {
        /// The name of the rule
        rule: String,
        /// The direction of the rate
        role: RateRole,
        /// What was found instead
        found: &'static str,
        /// The span of the rate argument
        span: Span,
    },
    /// A rate argument names a parameter that is not declared before the rule
    UndefinedRate {
        /// The name of the rule
        rule: String,
        /// The name used as the rate
        name: String,
        /// The span of the rate argument
        span: Span,
        /// The span of a parameter with that name declared after the rule
        declared_later: Option<Span>,
    },
    /// A rate argument names an expression rather than a parameter
    ExpressionRate {
        /// The name of the rule
        rule: String,
        /// The name of the expression
        name: String,
        /// The span of the rate argument
        span: Span,
        /// The span of the expression declaration
        expression_span: Span,
    },
    /// A `pysb.macros` function is called
    MacroCall {
        /// The callee as written
        callee: String,
        /// The span of the callee
        span: Span,
    },
    /// A declared parameter or expression is passed to a call that may
    /// create rules
    ParameterPassedToCall {
        /// The callee as written
        callee: String,
        /// The name that is passed
        name: String,
        /// The span of the name in the arguments
        span: Span,
        /// The span of the declaration of the name
        declaration_span: Span,
    },
}

const PYTHON_LOADER_HELP: &str =
    "import the model with Python instead by running with `--python`, which needs the `python` feature";

impl From<ParserError> for LoadError {
    fn from(error: ParserError) -> Self {
        Self::Parse(error)
    }
}

const fn role_name(role: RateRole) -> &'static str {
    match role {
        RateRole::Forward => "forward",
        RateRole::Reverse => "reverse",
    }
}

/// Highlights a span, cut off at the end of its first line.
fn location_of(source: &str, span: Span) -> ErrorLocation {
    let offset = span.start().offset.min(source.len());
    let line_end = source[offset..]
        .find('\n')
        .map_or(source.len(), |newline| offset + newline);
    let length = span.len().min(line_end - offset);

    if length == 0 {
        ErrorLocation::from_source_and_offset(source, offset)
    } else {
        ErrorLocation::from_source_and_span(source, offset, length)
    }
}

impl AsPydreamError for LoadError {
    fn message(&self) -> String {
        match self {
            Self::Parse(error) => error.message(),
            Self::MissingModel => "no `Model()` call found in the model file".to_string(),
            Self::MissingName { kind, .. } => {
                format!("`{}(...)` call has no name", kind.callee())
            }
            Self::NonStringName { kind, found, .. } => {
                format!(
                    "the name of a `{}(...)` call must be a string, found {found}",
                    kind.callee()
                )
            }
            Self::NonLiteralValue {
                parameter, found, ..
            } => {
                format!("value of parameter '{parameter}' must be a number, found {found}")
            }
            Self::UnsupportedRate {
                rule, role, found, ..
            } => {
                format!(
                    "{} rate of rule '{rule}' must be a parameter or `None`, found {found}",
                    role_name(*role)
                )
            }
            Self::UndefinedRate { rule, name, .. } => {
                format!("undefined rate parameter '{name}' in rule '{rule}'")
            }
            Self::ExpressionRate { rule, name, .. } => {
                format!("rule '{rule}' uses expression '{name}' as a rate")
            }
            Self::MacroCall { callee, .. } => {
                format!("`{callee}(...)` is a PySB macro, whose rules cannot be read from the source")
            }
            Self::ParameterPassedToCall { callee, name, .. } => {
                format!("'{name}' is passed to `{callee}(...)`, which may create rules that cannot be read from the source")
            }
        }
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::Parse(error) => error.context(),
            Self::MissingModel => vec![Context::Help(
                "create the model with `Model()` before declaring its components".to_string(),
            )],
            Self::MissingName { .. } => vec![],
            Self::NonStringName { .. } | Self::NonLiteralValue { .. } => vec![Context::Note(
                "model files are read without running Python, so only literals can be used here"
                    .to_string(),
            )],
            Self::UnsupportedRate { .. } => vec![Context::Help(
                "declare the rate with `Parameter(...)` and pass it by name".to_string(),
            )],
            Self::UndefinedRate {
                name,
                declared_later,
                ..
            } => match declared_later {
                Some(_) => vec![],
                None => vec![Context::Help(format!(
                    "declare it with `Parameter('{name}', ...)` before the rule"
                ))],
            },
            Self::ExpressionRate { .. } => vec![Context::Note(
                "only parameters can be sampled by PyDREAM".to_string(),
            )],
            Self::MacroCall { .. } => vec![Context::Help(PYTHON_LOADER_HELP.to_string())],
            Self::ParameterPassedToCall { .. } => vec![
                Context::Note("only rules declared with `Rule(...)` are read from the source".to_string()),
                Context::Help(PYTHON_LOADER_HELP.to_string()),
            ],
        }
    }

    fn error_location(&self, source: &str) -> Option<ErrorLocation> {
        match self {
            Self::Parse(error) => error.error_location(source),
            Self::MissingModel => None,
            Self::MissingName {
                callee_span: span, ..
            }
            | Self::NonStringName { span, .. }
            | Self::NonLiteralValue { span, .. }
            | Self::UnsupportedRate { span, .. }
            | Self::UndefinedRate { span, .. }
            | Self::ExpressionRate { span, .. }
            | Self::MacroCall { span, .. }
            | Self::ParameterPassedToCall { span, .. } => Some(location_of(source, *span)),
        }
    }

    fn context_with_source(&self, source: &str) -> Vec<(Context, Option<ErrorLocation>)> {
        match self {
            Self::Parse(error) => error.context_with_source(source),
            Self::UndefinedRate {
                name,
                declared_later: Some(declared_span),
                ..
            } => vec![(
                Context::Note(format!("'{name}' is declared after the rule here")),
                Some(location_of(source, *declared_span)),
            )],
            Self::ExpressionRate {
                expression_span, ..
            } => vec![(
                Context::Note("expression declared here".to_string()),
                Some(location_of(source, *expression_span)),
            )],
            Self::ParameterPassedToCall {
                name,
                declaration_span,
                ..
            } => vec![(
                Context::Note(format!("'{name}' declared here")),
                Some(location_of(source, *declaration_span)),
            )],
            Self::MissingModel
            | Self::MissingName { .. }
            | Self::NonStringName { .. }
            | Self::NonLiteralValue { .. }
            | Self::UnsupportedRate { .. }
            | Self::UndefinedRate { .. }
            | Self::MacroCall { .. } => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_rate_message() {
        let error = LoadError::UndefinedRate {
            rule: "bind".to_string(),
            name: "kf".to_string(),
            span: Span::random(),
            declared_later: None,
        };

        assert_eq!(error.message(), "undefined rate parameter 'kf' in rule 'bind'");
        assert_eq!(
            error.context(),
            vec![Context::Help(
                "declare it with `Parameter('kf', ...)` before the rule".to_string()
            )]
        );
    }

    #[test]
    fn undefined_rate_declared_later_points_at_declaration() {
        let source = "Model()\nRule('r', A() >> B(), kf)\nParameter('kf', 1.0)\n";
        let rate_offset = source.find("kf)").expect("rate in source");
        let declared_offset = source.find("Parameter").expect("declaration in source");

        let span_at = |offset: usize, length: usize| {
            let line = source[..offset].matches('\n').count() + 1;
            let column = offset - source[..offset].rfind('\n').map_or(0, |i| i + 1) + 1;
            let start = pydream_it_shared::span::SourceLocation {
                offset,
                line,
                column,
            };
            let end = pydream_it_shared::span::SourceLocation {
                offset: offset + length,
                line,
                column: column + length,
            };
            Span::new(start, end)
        };

        let error = LoadError::UndefinedRate {
            rule: "r".to_string(),
            name: "kf".to_string(),
            span: span_at(rate_offset, 2),
            declared_later: Some(span_at(declared_offset, 20)),
        };

        let location = error.error_location(source).expect("location");
        assert_eq!(location.line(), 2);
        assert_eq!(location.column(), 23);

        let context = error.context_with_source(source);
        assert_eq!(context.len(), 1);
        let (_, declared) = &context[0];
        assert_eq!(declared.as_ref().map(ErrorLocation::line), Some(3));
        assert!(error.context().is_empty());
    }

    #[test]
    fn missing_model_has_no_location() {
        assert!(LoadError::MissingModel.error_location("").is_none());
    }

    #[test]
    fn unsupported_rate_names_direction() {
        let error = LoadError::UnsupportedRate {
            rule: "deg".to_string(),
            role: RateRole::Reverse,
            found: "a number",
            span: Span::random(),
        };

        assert_eq!(
            error.message(),
            "reverse rate of rule 'deg' must be a parameter or `None`, found a number"
        );
    }

    #[test]
    fn passed_parameter_suggests_python_loader() {
        let error = LoadError::ParameterPassedToCall {
            callee: "bind".to_string(),
            name: "kf".to_string(),
            span: Span::random(),
            declaration_span: Span::random(),
        };

        assert_eq!(
            error.message(),
            "'kf' is passed to `bind(...)`, which may create rules that cannot be read from the source"
        );
        assert!(matches!(
            error.context().last(),
            Some(Context::Help(help)) if help.contains("--python")
        ));
    }
}
