//! Interactive read-eval-print loop.

use std::io::{self, BufRead, Write};

use crate::{Session, VERSION};

const PROMPT: &str = "input >> ";
const FAREWELL: &str = "Goodbye! And See You Again!";
/// Clear the screen and move the cursor home.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// How the REPL treats one input line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReplCommand {
    /// Blank line.
    Skip,
    Exit,
    Clear,
    /// Anything else is Ithilios source.
    Source,
}

impl ReplCommand {
    pub fn classify(line: &str) -> ReplCommand {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            ReplCommand::Skip
        } else if trimmed.eq_ignore_ascii_case("exit") {
            ReplCommand::Exit
        } else if trimmed.eq_ignore_ascii_case("clear") {
            ReplCommand::Clear
        } else {
            ReplCommand::Source
        }
    }
}

/// Run the REPL until `exit` or end of input.
///
/// Prompts and the banner go to `out`; program output and diagnostics go
/// wherever `session` sends them. Variables and functions persist across
/// lines, and every statement value that is not `none` is echoed.
pub fn run_repl<R: BufRead, O: Write, W: Write>(
    mut input: R,
    mut out: O,
    session: &mut Session<W>,
) -> io::Result<()> {
    writeln!(out, "Ithilios Language Interpreter")?;
    writeln!(out, "Version: {VERSION}")?;

    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        match ReplCommand::classify(&line) {
            ReplCommand::Skip => {}
            ReplCommand::Exit => {
                writeln!(out, "{FAREWELL}")?;
                return Ok(());
            }
            ReplCommand::Clear => write!(out, "{CLEAR_SCREEN}")?,
            ReplCommand::Source => {
                session.run_source(line.trim_end_matches(['\n', '\r']));
            }
        }
    }
}
