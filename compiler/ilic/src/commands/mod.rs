//! Command handlers for the Ithilios CLI.
//!
//! Each submodule implements one CLI command. Option parsing and file
//! reading shared between them live here in the module root.

use std::path::Path;

use ili_diagnostic::emitter::ColorMode;

use crate::SessionConfig;

mod debug;
mod repl;
mod run;

pub use debug::{lex_file, parse_file, render_ast, render_tokens};
pub use repl::{run_repl, ReplCommand};
pub use run::run_file;

/// Source file extension accepted by every file command.
pub const SOURCE_EXTENSION: &str = "ili";

/// Split `--color=` and `--max-depth=` out of the command line.
///
/// Returns the session configuration and the remaining arguments in order.
/// `no_color` reflects a non-empty `NO_COLOR` environment variable and only
/// applies when `--color` is not given.
pub fn parse_options(
    args: &[String],
    no_color: bool,
) -> Result<(SessionConfig, Vec<String>), String> {
    let mut config = SessionConfig::default();
    let mut color = None;
    let mut rest = Vec::new();

    for arg in args {
        if let Some(value) = arg.strip_prefix("--color=") {
            let Some(mode) = ColorMode::parse(value) else {
                return Err(format!(
                    "invalid value for --color: '{value}' (expected auto, always or never)"
                ));
            };
            color = Some(mode);
        } else if let Some(value) = arg.strip_prefix("--max-depth=") {
            match value.parse::<usize>() {
                Ok(limit) if limit > 0 => config.max_call_depth = Some(limit),
                _ => {
                    return Err(format!(
                        "invalid value for --max-depth: '{value}' (expected a positive integer)"
                    ));
                }
            }
        } else {
            rest.push(arg.clone());
        }
    }

    config.color = match color {
        Some(mode) => mode,
        None if no_color => ColorMode::Never,
        None => ColorMode::Auto,
    };
    Ok((config, rest))
}

pub fn has_source_extension(path: &str) -> bool {
    Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SOURCE_EXTENSION))
}

/// Read a source file, exiting with a message if it is not an `.ili` file
/// or cannot be read.
pub(super) fn read_source(path: &str) -> String {
    if !has_source_extension(path) {
        eprintln!("error: only .{SOURCE_EXTENSION} files are supported: '{path}'");
        std::process::exit(1);
    }

    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_options_are_split_from_positionals() {
        let (config, rest) =
            parse_options(&args(&["run", "--color=never", "main.ili", "--max-depth=64"]), false)
                .unwrap();
        assert_eq!(rest, args(&["run", "main.ili"]));
        assert_eq!(config.color, ColorMode::Never);
        assert_eq!(config.max_call_depth, Some(64));
        assert!(!config.echo_values);
    }

    #[test]
    fn test_no_color_env_yields_to_flag() {
        let (config, _) = parse_options(&args(&["main.ili"]), true).unwrap();
        assert_eq!(config.color, ColorMode::Never);

        let (config, _) = parse_options(&args(&["--color=always"]), true).unwrap();
        assert_eq!(config.color, ColorMode::Always);

        let (config, _) = parse_options(&[], false).unwrap();
        assert_eq!(config.color, ColorMode::Auto);
        assert_eq!(config.max_call_depth, None);
    }

    #[test]
    fn test_invalid_option_values() {
        let err = parse_options(&args(&["--color=rainbow"]), false).unwrap_err();
        assert!(err.contains("--color"), "{err}");
        assert!(parse_options(&args(&["--max-depth=0"]), false).is_err());
        assert!(parse_options(&args(&["--max-depth=many"]), false).is_err());
    }

    #[test]
    fn test_source_extension() {
        assert!(has_source_extension("main.ili"));
        assert!(has_source_extension("dir/MAIN.ILI"));
        assert!(!has_source_extension("main.py"));
        assert!(!has_source_extension("ili"));
        assert!(!has_source_extension("main.ili.txt"));
    }
}
