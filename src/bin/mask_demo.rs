//! `mask_demo` — apply an input mask to lines read from stdin
//!
//! # Usage
//!
//! ```bash
//! echo 12345678901 | cargo run --bin mask_demo -- --mask CPF
//! cargo run --bin mask_demo -- --list
//! ```

use input_masks::mask::registry;
use input_masks::{Error, LogLevel, MaskConfig, MaskKind, digits_only, set_log_callback};
use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

// ============================================================================
// CLI Parsing
// ============================================================================

const HELP_TEXT: &str = "mask_demo - apply an input mask to lines read from stdin

USAGE:
    mask_demo [OPTIONS] < input.txt

OPTIONS:
    -h, --help              Print this help message and exit
    --mask <ID>             Mask identifier: CPF, PHONE, CEP, NASCIMENTO,
                            CURRENCY (default: no mask)
    --max-length <N>        Override the mask's max display length
                            (0 disables truncation)
    --digits                Print the extracted digits instead of the
                            masked value
    --list                  Print the mask registry and exit
    --verbose               Report truncations on stderr

EXAMPLES:
    echo 12345678901 | mask_demo --mask CPF        # 123.456.789-01
    echo 001234 | mask_demo --mask CURRENCY        # R$ 1.234
    mask_demo --list
";

/// Application configuration parsed from command-line arguments.
#[derive(Clone, Debug, Default)]
pub struct Config {
    pub mask: MaskKind,
    pub max_length: Option<usize>,
    pub digits: bool,
    pub list: bool,
    pub verbose: bool,
}

/// Result of CLI parsing.
pub enum ParseResult {
    /// Successfully parsed configuration.
    Config(Config),
    /// User requested help.
    Help,
    /// Parse error with message.
    Error(String),
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        // Skip program name
        args.next();

        while let Some(arg) = args.next() {
            let arg_str = arg.to_string_lossy();

            match arg_str.as_ref() {
                "-h" | "--help" => return ParseResult::Help,

                "--mask" => {
                    let value = match args.next() {
                        Some(v) => v.to_string_lossy().to_string(),
                        None => return ParseResult::Error("--mask requires a value".to_string()),
                    };
                    // Strict here, unlike the library resolver
                    match value.parse::<MaskKind>() {
                        Ok(kind) => config.mask = kind,
                        Err(e) => return ParseResult::Error(e.to_string()),
                    }
                }

                "--max-length" => {
                    let value = match args.next() {
                        Some(v) => v.to_string_lossy().to_string(),
                        None => {
                            return ParseResult::Error("--max-length requires a value".to_string());
                        }
                    };
                    match value.parse::<usize>() {
                        Ok(n) => config.max_length = Some(n),
                        Err(_) => {
                            let err = Error::InvalidArgument {
                                name: "--max-length",
                                value,
                            };
                            return ParseResult::Error(err.to_string());
                        }
                    }
                }

                "--digits" => config.digits = true,
                "--list" => config.list = true,
                "--verbose" => config.verbose = true,

                other => {
                    return ParseResult::Error(format!(
                        "Unknown argument: {other}\nRun with --help for usage"
                    ));
                }
            }
        }

        ParseResult::Config(config)
    }

    /// Config the masked lines are produced with.
    fn mask_config(&self) -> MaskConfig {
        let mut mask = self.mask.config();
        if let Some(max_length) = self.max_length {
            mask.max_length = max_length;
        }
        mask
    }
}

// ============================================================================
// Output
// ============================================================================

fn print_registry(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{:<12} {:>10} {:>10}  sample", "mask", "max_length", "digits")?;
    for (kind, config) in registry() {
        let cap = kind
            .digit_cap()
            .map_or_else(|| "-".to_string(), |cap| cap.to_string());
        writeln!(
            out,
            "{:<12} {:>10} {:>10}  {}",
            kind.to_string(),
            config.max_length,
            cap,
            config.apply("12345678901")
        )?;
    }
    Ok(())
}

fn mask_lines(config: &Config, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
    let mask = config.mask_config();
    for line in input.lines() {
        let line = line?;
        let masked = mask.apply(&line);
        let formatted_len = mask.format(&line).len();
        if formatted_len > masked.len() {
            input_masks::emit_log(
                LogLevel::Info,
                &format!("{}: cut {formatted_len} chars to {}", config.mask, masked.len()),
            );
        }
        if config.digits {
            writeln!(out, "{}", digits_only(&masked))?;
        } else {
            writeln!(out, "{masked}")?;
        }
    }
    out.flush()
}

fn main() -> ExitCode {
    let config = match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => config,
        ParseResult::Help => {
            print!("{HELP_TEXT}");
            return ExitCode::SUCCESS;
        }
        ParseResult::Error(msg) => {
            eprintln!("error: {msg}");
            return ExitCode::from(2);
        }
    };

    if config.verbose {
        set_log_callback(|level, msg| eprintln!("[{level:?}] {msg}"));
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = if config.list {
        print_registry(&mut out)
    } else {
        mask_lines(&config, io::stdin().lock(), &mut out)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
