use crate::color::Color;
use crate::palette::PaletteEntry;
use crossterm::style::{Color as TermColor, ResetColor, SetForegroundColor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Hex,
    XtermNumber,
}

impl OutputMode {
    pub fn from_flag(xterm_number: bool) -> Self {
        if xterm_number {
            OutputMode::XtermNumber
        } else {
            OutputMode::Hex
        }
    }
}

/// A one-cell truecolor swatch of `color` followed by a reset.
pub fn swatch(color: &Color) -> String {
    format!(
        "{} {}",
        SetForegroundColor(TermColor::Rgb {
            r: color.red(),
            g: color.green(),
            b: color.blue(),
        }),
        ResetColor
    )
}

// The swatch shows the query colour, the value shows the matched palette entry.
pub fn format_match(query: &Color, matched: &PaletteEntry, mode: OutputMode) -> String {
    let value = match mode {
        OutputMode::Hex => matched.color.to_string(),
        OutputMode::XtermNumber => matched.index.to_string(),
    };
    format!("{} {}", value, swatch(query))
}
