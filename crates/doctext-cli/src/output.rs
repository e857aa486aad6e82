use std::io::{IsTerminal, Write};

use owo_colors::OwoColorize;

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    /// Color only when stdout is a terminal, `--no-color` was not given and
    /// `NO_COLOR` is unset.
    pub fn detect(no_color: bool) -> Self {
        let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        ColorMode(!no_color && !no_color_env && std::io::stdout().is_terminal())
    }

    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print the single `Error:` line. Errors go to stdout, like the text does.
pub fn print_error(w: &mut dyn Write, message: &str, color: ColorMode) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(w, "{} {}", "Error:".red().bold(), message)
    } else {
        writeln!(w, "Error: {}", message)
    }
}

/// Write the extracted text followed by a newline.
pub fn write_text(w: &mut dyn Write, text: &str) -> std::io::Result<()> {
    writeln!(w, "{}", text)?;
    w.flush()
}
