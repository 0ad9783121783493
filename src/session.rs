use crate::color::Color;
use crate::config::PROMPT;
use crate::error::AppError;
use crate::output::{OutputMode, format_match};
use crate::palette;
use std::io::{BufRead, Write};

/// Outcome counters for a run, used for the closing log line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub matched: usize,
    pub rejected: usize,
}

fn io_context(context: &'static str) -> impl Fn(std::io::Error) -> AppError {
    move |source| AppError::Io {
        source,
        context: Some(context.to_string()),
    }
}

// Malformed input is reported on `err` and skipped; only I/O failures abort.
fn convert_one<W: Write, E: Write>(
    input: &str,
    mode: OutputMode,
    out: &mut W,
    err: &mut E,
    summary: &mut Summary,
) -> Result<(), AppError> {
    match input.parse::<Color>() {
        Ok(query) => {
            let matched = palette::nearest(&query);
            writeln!(out, "{}", format_match(&query, matched, mode))
                .map_err(io_context("write result"))?;
            summary.matched += 1;
        }
        Err(e) => {
            log::debug!("Skipping input: {}", e);
            writeln!(err, "{}", e).map_err(io_context("write error message"))?;
            summary.rejected += 1;
        }
    }
    Ok(())
}

pub fn run_batch<W: Write, E: Write>(
    operands: &[String],
    mode: OutputMode,
    out: &mut W,
    err: &mut E,
) -> Result<Summary, AppError> {
    let mut summary = Summary::default();
    for operand in operands {
        convert_one(operand, mode, out, err, &mut summary)?;
    }
    out.flush().map_err(io_context("flush stdout"))?;
    Ok(summary)
}

/// Prompts until an empty line or end of input.
pub fn run_interactive<R: BufRead, W: Write, E: Write>(
    input: &mut R,
    mode: OutputMode,
    out: &mut W,
    err: &mut E,
) -> Result<Summary, AppError> {
    let mut summary = Summary::default();
    let mut line = String::new();
    loop {
        write!(out, "{}", PROMPT).map_err(io_context("write prompt"))?;
        out.flush().map_err(io_context("flush stdout"))?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .map_err(io_context("read stdin"))?;
        let value = line.trim();
        if read == 0 || value.is_empty() {
            if read == 0 {
                writeln!(out).map_err(io_context("write newline"))?;
            }
            log::debug!("Interactive session ended");
            break;
        }

        convert_one(value, mode, out, err, &mut summary)?;
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn lines(buf: &[u8]) -> Vec<String> {
        String::from_utf8_lossy(buf)
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn batch_prints_one_line_per_operand_in_order() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let summary = run_batch(
            &strings(&["ff0000", "#123456", "0x808080"]),
            OutputMode::XtermNumber,
            &mut out,
            &mut err,
        )
        .unwrap();

        let out = lines(&out);
        assert_eq!(out.len(), 3);
        assert!(out[0].starts_with("196 "));
        assert!(out[1].starts_with("23 "));
        assert!(out[2].starts_with("244 "));
        assert!(err.is_empty());
        assert_eq!(summary, Summary { matched: 3, rejected: 0 });
    }

    #[test]
    fn batch_skips_malformed_operand_and_continues() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let summary = run_batch(
            &strings(&["zzzzzz", "ff0000"]),
            OutputMode::Hex,
            &mut out,
            &mut err,
        )
        .unwrap();

        let out = lines(&out);
        assert_eq!(out.len(), 1);
        assert!(out[0].starts_with("#ff0000 "));
        assert_eq!(lines(&err), vec!["invalid color: zzzzzz"]);
        assert_eq!(summary, Summary { matched: 1, rejected: 1 });
    }

    #[test]
    fn batch_with_no_operands_prints_nothing() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let summary = run_batch(&[], OutputMode::Hex, &mut out, &mut err).unwrap();
        assert!(out.is_empty());
        assert!(err.is_empty());
        assert_eq!(summary, Summary::default());
    }

    #[test]
    fn interactive_stops_on_empty_line() {
        let mut input = Cursor::new("\nff0000\n");
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let summary = run_interactive(&mut input, OutputMode::Hex, &mut out, &mut err).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), PROMPT);
        assert!(err.is_empty());
        assert_eq!(summary, Summary::default());
    }

    #[test]
    fn interactive_reprompts_after_bad_input() {
        let mut input = Cursor::new("nope\n  #123456  \n\n");
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let summary =
            run_interactive(&mut input, OutputMode::Hex, &mut out, &mut err).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches(PROMPT).count(), 3);
        assert!(out.contains("#005f5f \x1b[38;2;18;52;86m "));
        assert_eq!(lines(&err), vec!["invalid color: nope"]);
        assert_eq!(summary, Summary { matched: 1, rejected: 1 });
    }

    #[test]
    fn interactive_ends_at_eof() {
        let mut input = Cursor::new("0x0000ff");
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let summary =
            run_interactive(&mut input, OutputMode::XtermNumber, &mut out, &mut err).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("21 \x1b[38;2;0;0;255m "));
        assert!(out.ends_with('\n'));
        assert_eq!(summary.matched, 1);
    }
}
