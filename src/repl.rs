use crate::cli::{operator_list, VERSION};
use crate::config::Config;
use crate::terminal::execute_line;
use log::warn;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

const EXIT_KEYWORDS: [&str; 2] = ["exit", "quit"];

/// Is this line a request to leave the REPL? Case-insensitive.
pub(crate) fn is_exit_command(line: &str) -> bool {
    EXIT_KEYWORDS.iter().any(|k| line.eq_ignore_ascii_case(k))
}

fn print_banner() {
    println!("rpncalc {} - postfix (Reverse Polish) notation calculator", VERSION);
    println!("  Operators: {}", operator_list());
    println!("  Operands:  integers or decimals (e.g. 5, -2.5, 100)");
    println!("  Enter an expression such as '3 4 +', or 'exit' to quit");
}

/// Run the interactive loop until `exit`, `quit` or Ctrl-D
pub(crate) fn run_repl(config: &Config) -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;

    let history_path = config.history_path();
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    if config.banner {
        print_banner();
    }

    let result = loop {
        match rl.readline(&config.prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed.is_empty() {
                    eprintln!("Error: expression must not be empty");
                    continue;
                }

                let _ = rl.add_history_entry(trimmed);

                if is_exit_command(trimmed) {
                    break Ok(());
                }

                // Evaluation errors are already reported; keep reading
                let _ = execute_line(trimmed);
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C - drop the current line
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D - exit
                break Ok(());
            }
            Err(err) => break Err(err),
        }
    };

    if let Some(ref path) = history_path {
        if let Err(e) = rl.save_history(path) {
            warn!("could not save history to {}: {}", path.display(), e);
        }
    }

    result
}
