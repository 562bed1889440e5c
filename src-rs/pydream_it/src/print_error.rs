//! Error message formatting and display
//!
//! Errors are printed in the style of rustc:
//!
//! ```text
//! error: undefined rate parameter 'kf' in rule 'bind'
//!  --> models/egfr.py:12:38
//!    |
//! 12 | Rule('bind', A(b=None) + B(a=None) | A(b=1) % B(a=1), kf, kr)
//!    |                                                       ^-
//!    = help: declare it with `Parameter('kf', ...)` before the rule
//! ```

use std::path::Path;

use anstream::eprintln;
use owo_colors::{OwoColorize, Style};
use pydream_it_shared::error::{Context, ErrorLocation, PydreamError};

use crate::stylesheet;

/// Prints a formatted error message to stderr
pub fn print(error: &PydreamError, print_debug: bool) {
    if print_debug {
        eprintln!("{error:?}");
    } else {
        let error_string = error_to_string(error);
        eprintln!("{error_string}");
    }
}

/// Converts an error to a formatted string representation
fn error_to_string(error: &PydreamError) -> String {
    let message_line = get_error_message_line(error.message());
    let location_line = get_location_line(error.path(), error.location());
    let empty_line = String::new();

    let details = error.location().map_or_else(
        || get_context_lines(error.context(), " "),
        |location| get_source_lines(location, error.context(), stylesheet::ERROR_COLOR),
    );
    let context_with_source_lines =
        get_context_with_source_lines(error.path(), error.context_with_source());

    let mut lines = vec![message_line, location_line];
    if !details.is_empty() {
        lines.push(details);
    }
    lines.push(empty_line);
    lines.extend(context_with_source_lines);

    lines.join("\n")
}

/// Formats the main error message line
fn get_error_message_line(message: &str) -> String {
    get_message_line("error", stylesheet::ERROR_COLOR, message)
}

/// Formats a note message line
fn get_note_message_line(message: &str) -> String {
    get_message_line("note", stylesheet::NOTE_COLOR, message)
}

/// Formats a help message line
fn get_help_message_line(message: &str) -> String {
    get_message_line("help", stylesheet::HELP_COLOR, message)
}

/// Formats a message line with a colored prefix
fn get_message_line(kind: &str, kind_color: Style, message: &str) -> String {
    // <kind>: <message>
    let kind_str = kind_color.style(kind);
    let message_line = format!("{kind_str}: {message}");

    message_line.bold().to_string()
}

/// Formats the location information line
fn get_location_line(path: &Path, location: Option<&ErrorLocation>) -> String {
    // location line (line and column are optional)
    //  --> <path>
    // OR
    //  --> <path>:<line>:<column>
    let arrow = stylesheet::SOURCE_ANNOTATION.style("-->");
    let path = path.display();

    location.map_or_else(
        || format!(" {arrow} {path}"),
        |location| format!(" {arrow} {path}:{}:{}", location.line(), location.column()),
    )
}

/// Formats context lines (`= note: ...`) after a margin
fn get_context_lines(context: &[Context], margin: &str) -> String {
    context
        .iter()
        .map(|context| {
            let (equals, context_message) = match context {
                Context::Note(message) => (
                    stylesheet::NOTE_COLOR.bold().style("="),
                    get_note_message_line(message),
                ),
                Context::Help(message) => (
                    stylesheet::HELP_COLOR.bold().style("="),
                    get_help_message_line(message),
                ),
            };
            format!("{margin} {equals} {context_message}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formats the source code snippet with error highlighting
fn get_source_lines(
    location: &ErrorLocation,
    context: &[Context],
    code_highlight_color: Style,
) -> String {
    // source line (if available)
    //   |
    // 1 | Rule('r', A() >> B(), kf)
    //   |                       ^-
    //   |
    let line = location.line();
    let column = location.column();
    let length = location.length();
    let line_source = location.line_source();

    // The width of the left margin is the number of digits in the line number
    let margin_width = line.ilog10() + 1;
    let margin = " ".repeat(margin_width as usize);

    let bar = stylesheet::SOURCE_ANNOTATION.style("|");

    let line_label = stylesheet::SOURCE_ANNOTATION.style(line.to_string());

    let pointer_indent = " ".repeat(column - 1);

    let pointer = code_highlight_color.bold().style("^");
    let pointer_rest = code_highlight_color
        .bold()
        .style("-".repeat(length.saturating_sub(1)));

    let blank_line = format!("{margin} {bar} ");
    let source_line = format!("{line_label} {bar} {line_source}");
    let pointer_line = format!("{margin} {bar} {pointer_indent}{pointer}{pointer_rest}");

    let mut source_lines = vec![blank_line, source_line, pointer_line];
    if !context.is_empty() {
        source_lines.push(get_context_lines(context, &margin));
    }

    source_lines.join("\n")
}

fn get_context_with_source_lines(
    path: &Path,
    contexts: &[(Context, ErrorLocation)],
) -> Vec<String> {
    contexts
        .iter()
        .map(|(context, location)| {
            let (context_message, context_color) = match context {
                Context::Note(message) => (get_note_message_line(message), stylesheet::NOTE_COLOR),
                Context::Help(message) => (get_help_message_line(message), stylesheet::HELP_COLOR),
            };

            let location_line = get_location_line(path, Some(location));
            let source_lines = get_source_lines(location, &[], context_color);
            let empty_line = String::new();
            [context_message, location_line, source_lines, empty_line].join("\n")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pydream_it_shared::error::AsPydreamError;

    use super::*;

    struct UndefinedRate;

    impl AsPydreamError for UndefinedRate {
        fn message(&self) -> String {
            "undefined rate parameter 'kf' in rule 'r'".to_string()
        }

        fn context(&self) -> Vec<Context> {
            vec![Context::Help("declare it".to_string())]
        }

        fn error_location(&self, source: &str) -> Option<ErrorLocation> {
            Some(ErrorLocation::from_source_and_span(source, 30, 2))
        }
    }

    struct Unreadable;

    impl AsPydreamError for Unreadable {
        fn message(&self) -> String {
            "failed to read model file".to_string()
        }

        fn context(&self) -> Vec<Context> {
            vec![Context::Note("no such file".to_string())]
        }
    }

    fn strip_styles(text: &str) -> String {
        let mut plain = Vec::new();
        {
            let mut stream = anstream::StripStream::new(&mut plain);
            std::io::Write::write_all(&mut stream, text.as_bytes()).expect("writing to a vector");
        }
        String::from_utf8(plain).expect("stripped text is utf-8")
    }

    #[test]
    fn error_with_source_snippet() {
        let source = "Model()\nRule('r', A() >> B(), kf)\n";
        let error =
            PydreamError::from_error_with_source(&UndefinedRate, PathBuf::from("m.py"), source);

        let rendered = strip_styles(&error_to_string(&error));

        let expected = [
            "error: undefined rate parameter 'kf' in rule 'r'".to_string(),
            " --> m.py:2:23".to_string(),
            "  | ".to_string(),
            "2 | Rule('r', A() >> B(), kf)".to_string(),
            format!("  | {}^-", " ".repeat(22)),
            "  = help: declare it".to_string(),
            String::new(),
        ]
        .join("\n");
        assert_eq!(rendered, expected);
    }

    #[test]
    fn error_without_location_keeps_context() {
        let error = PydreamError::from_error(&Unreadable, PathBuf::from("missing.py"));

        let rendered = strip_styles(&error_to_string(&error));

        assert_eq!(
            rendered,
            "error: failed to read model file\n --> missing.py\n  = note: no such file\n"
        );
    }
}
