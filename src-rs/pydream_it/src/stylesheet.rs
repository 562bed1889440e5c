use owo_colors::Style;

pub const ERROR_COLOR: Style = Style::new().red();
pub const NOTE_COLOR: Style = Style::new().blue();
pub const HELP_COLOR: Style = Style::new().blue();
pub const SOURCE_ANNOTATION: Style = Style::new().blue().bold();

pub const STAGE: Style = Style::new().green().bold();
pub const PARAMETER_NAME: Style = Style::new().cyan();
pub const PRIOR_UNIFORM: Style = Style::new().magenta();
pub const PRIOR_NORMAL: Style = Style::new().yellow();
