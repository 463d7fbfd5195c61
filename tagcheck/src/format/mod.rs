use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// Control over colored diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Color when stdout is a terminal and NO_COLOR is unset
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl From<&str> for ColorChoice {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "always" => ColorChoice::Always,
            "never" => ColorChoice::Never,
            _ => ColorChoice::Auto,
        }
    }
}

/// Trait for diagnostic formatting that can be TTY-aware or plain text
pub trait OutputFormatter: Send + Sync {
    /// Render an error message
    fn render_error(&self, message: &str) -> String;

    /// Render a warning message
    fn render_warning(&self, message: &str) -> String;

    /// Print an error message on stdout, where the pipeline log captures it
    fn error(&self, message: &str) {
        println!("{}", self.render_error(message));
    }

    /// Print a warning message
    fn warning(&self, message: &str) {
        eprintln!("{}", self.render_warning(message));
    }
}

/// TTY-aware formatter with colors
pub struct TtyFormatter;

impl OutputFormatter for TtyFormatter {
    fn render_error(&self, message: &str) -> String {
        format!("{} {}", "✗".red().bold(), message)
    }

    fn render_warning(&self, message: &str) -> String {
        format!("{} {}", "⚠".yellow().bold(), message)
    }
}

/// Plain text formatter for non-TTY output (CI logs, pipes)
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn render_error(&self, message: &str) -> String {
        format!("✗ {}", message)
    }

    fn render_warning(&self, message: &str) -> String {
        format!("⚠ {}", message)
    }
}

/// Create the appropriate formatter for a color choice
pub fn create_formatter(choice: ColorChoice) -> Box<dyn OutputFormatter> {
    if should_color(choice) {
        Box::new(TtyFormatter)
    } else {
        Box::new(PlainFormatter)
    }
}

/// Check if diagnostics should be colored
pub fn should_color(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
        }
    }
}

/// Print an error message
pub fn error(choice: ColorChoice, message: &str) {
    create_formatter(choice).error(message);
}


/// Print a warning message
pub fn warning(choice: ColorChoice, message: &str) {
    create_formatter(choice).warning(message);
}
