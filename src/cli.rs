use rpncalc::OPERATORS;
use std::path::PathBuf;

pub(crate) const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parsed command-line arguments
#[derive(Debug, Default)]
pub(crate) struct CliArgs {
    pub(crate) command: Option<String>,
    pub(crate) config: Option<PathBuf>,
    pub(crate) help: bool,
    pub(crate) version: bool,
    pub(crate) trace: bool,
}

/// Parse command-line arguments
pub(crate) fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut cli = CliArgs::default();

    let mut i = 1; // Skip program name
    while i < args.len() {
        match args[i].as_str() {
            "--trace" => {
                cli.trace = true;
            }
            "--config" => {
                let path = args
                    .get(i + 1)
                    .ok_or_else(|| "--config requires a path".to_string())?;
                cli.config = Some(PathBuf::from(path));
                i += 1;
            }
            "-c" => {
                // Everything after -c is the expression
                cli.command = Some(args[i + 1..].join(" "));
                break;
            }
            "--help" | "-h" => {
                cli.help = true;
            }
            "--version" | "-V" => {
                cli.version = true;
            }
            other => return Err(format!("unknown argument: {}", other)),
        }
        i += 1;
    }

    Ok(cli)
}

pub(crate) fn print_help() {
    println!(
        r#"rpncalc {} - postfix (Reverse Polish) notation calculator

USAGE:
    rpncalc                     Start interactive REPL
    rpncalc -c <expression>     Evaluate a single expression
    rpncalc --trace             Log every reduction step to stderr
    rpncalc --config <path>     Read settings from <path>
    rpncalc --help              Show this help message
    rpncalc --version           Show version

EXPRESSIONS:
    Tokens are separated by whitespace. Operators follow their operands.
    3 4 +                       7
    5 1 2 + 4 * + 3 -           14
    5 2 -                       3 (top of stack is the right operand)

OPERATORS:
    {}

OPERANDS:
    Integers or decimals with optional sign: 5, -2.5, 100, .5, 1e3

CONFIGURATION:
    ~/.rpncalc.toml             Default config file ($RPNCALC_CONFIG overrides)
    RPNCALC_BANNER=1            Show startup banner
    RUST_LOG=debug              Log filter (see env_logger)

REPL COMMANDS:
    exit, quit                  Exit the REPL (case-insensitive)"#,
        VERSION,
        operator_list()
    );
}

pub(crate) fn print_version() {
    println!("rpncalc {}", VERSION);
}

/// Comma-separated operator symbols, e.g. `+, -, *, /, %`
pub(crate) fn operator_list() -> String {
    OPERATORS
        .iter()
        .map(|op| op.symbol())
        .collect::<Vec<_>>()
        .join(", ")
}
