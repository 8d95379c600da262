//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `noteline_core` linkage.
//! - Optionally start mode-based file logging.
//! - Optionally describe the line enclosing a char offset of a file.
//!
//! Usage: `noteline_cli [--log-dir <dir>] [<file> <offset>]`

use noteline_core::AppMode;
use std::process::ExitCode;

const USAGE: &str = "usage: noteline_cli [--log-dir <dir>] [<file> <offset>]";

fn main() -> ExitCode {
    match run(std::env::args().skip(1).collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Vec<String>) -> Result<(), String> {
    let rest = match args.as_slice() {
        [flag, log_dir, rest @ ..] if flag == "--log-dir" => {
            let mode = AppMode::from_env();
            noteline_core::init_logging_for_mode(mode, log_dir)?;
            println!("logging mode={} log_dir={log_dir}", mode.as_str());
            rest
        }
        [flag] if flag == "--log-dir" => return Err(USAGE.to_string()),
        rest => rest,
    };

    println!("noteline_core ping={}", noteline_core::ping());
    println!("noteline_core version={}", noteline_core::core_version());

    match rest {
        [] => Ok(()),
        [path, offset] => describe_line(path, offset),
        _ => Err(USAGE.to_string()),
    }
}

fn describe_line(path: &str, offset: &str) -> Result<(), String> {
    let offset: usize = offset
        .parse()
        .map_err(|err| format!("invalid offset `{offset}`: {err}"))?;
    let content =
        std::fs::read_to_string(path).map_err(|err| format!("failed to read `{path}`: {err}"))?;
    let line = noteline_core::locate_line(&content, offset).map_err(|err| err.to_string())?;

    println!("line={} column={}", line.line_number, line.column);
    println!("begin={} end={}", line.begin_offset, line.end_offset);
    println!(
        "indent={} bullet={:?}",
        line.indent_width,
        line.bullet.as_str()
    );
    Ok(())
}
