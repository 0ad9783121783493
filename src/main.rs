mod cli;
mod color;
mod config;
mod error;
mod logging;
mod output;
mod palette;
mod session;

use crate::error::AppError;
use crate::output::OutputMode;
use std::io;
use std::process::exit;

fn run_app() -> Result<(), AppError> {
    let args = cli::parse_args();

    logging::setup_logging(
        logging::level_for_verbosity(args.verbose),
        args.log_file.as_deref(),
    )?;
    log_app_startup!();

    let mode = OutputMode::from_flag(args.xterm_number);
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    let summary = if args.interactive {
        if !args.colors.is_empty() {
            log::warn!(
                "Ignoring {} operand(s) in interactive mode",
                args.colors.len()
            );
        }
        let stdin = io::stdin();
        session::run_interactive(&mut stdin.lock(), mode, &mut out, &mut err)?
    } else {
        session::run_batch(&args.colors, mode, &mut out, &mut err)?
    };

    log::info!(
        "Matched {} color(s), rejected {}",
        summary.matched,
        summary.rejected
    );
    Ok(())
}

fn main() {
    let main_result = std::panic::catch_unwind(run_app);

    match main_result {
        Ok(Ok(())) => exit(0),
        Ok(Err(e)) => {
            eprintln!("\x1b[0m\x1b[31mError:\x1b[0m {}", e);
            log::error!("Application exited with error: {}", e);
            exit(1);
        }
        Err(panic_payload) => {
            eprintln!("\x1b[0m\x1b[91mCritical Error: Application Panicked!\x1b[0m");
            if let Some(s) = panic_payload.downcast_ref::<String>() {
                eprintln!("Panic message: {}", s);
            } else if let Some(s) = panic_payload.downcast_ref::<&str>() {
                eprintln!("Panic message: {}", s);
            } else {
                eprintln!("Panic occurred with unknown payload type.");
            }
            exit(101);
        }
    }
}
