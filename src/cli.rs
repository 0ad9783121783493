use crate::config::HELP_TEMPLATE;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Find the closest xterm 256 color of a hex value.",
    long_about = None,
    override_usage = "hexto256 [OPTIONS] hex ...",
    help_template = HELP_TEMPLATE
)]
pub struct CliArgs {
    /// Hex colors: RRGGBB, #RRGGBB or 0xRRGGBB
    #[arg(value_name = "hex")]
    pub colors: Vec<String>,

    /// interactive mode
    #[arg(
        short,
        long,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        value_parser = parse_flag_value,
        action = ArgAction::Set
    )]
    pub interactive: bool,

    /// return the xterm-number instead of the hex value
    #[arg(
        short = 'x',
        long,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        value_parser = parse_flag_value,
        action = ArgAction::Set
    )]
    pub xterm_number: bool,

    /// more log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

fn parse_flag_value(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => Ok(true),
        "0" | "f" | "false" => Ok(false),
        other => Err(format!("expected true/false/1/0/t/f, got '{}'", other)),
    }
}

pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
