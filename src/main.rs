use std::{
    fmt::Display,
    fs,
    io::{self, BufWriter, Write, stdout},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anstream::stderr;
use anstyle::{AnsiColor, Color, Style};
use ariadne::Source;
use clap::{CommandFactory, Parser, Subcommand, ValueHint};
use clap_complete::{Generator, Shell};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

use crate::{
    ast::EnumDescriptor,
    cpp::{Config, CppOptions, Summary},
    error::{Error, ResultExt},
    reports::Reports,
    syntax::parse,
};

pub mod ast;
pub mod codegen;
pub mod cpp;
pub mod error;
pub mod reports;
pub mod syntax;

/// A tool for generating string conversion functions from C++ enum declarations
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate to_string and parse functions for every enum in a file
    ///
    /// Enums are separated by blank lines. Each one must start with its declaration line,
    /// followed by one enumerator per line. Groups that don't start with a declaration are
    /// reported and skipped.
    Generate {
        /// The path to the file containing the enums
        #[arg(value_hint = ValueHint::FilePath)]
        input: PathBuf,
        /// The file to write the generated code to, overwriting it; defaults to standard output
        #[arg(value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
        /// The namespace qualifying the to_string definitions
        #[arg(short = 'n', long, default_value = "Minty")]
        namespace: String,
        /// The namespace qualifying the parse definitions [default: <NAMESPACE>::Parse]
        #[arg(short = 'p', long)]
        parse_namespace: Option<String>,
        /// The string type used in the generated signatures
        #[arg(long, default_value = "String")]
        string_type: String,
        /// The boolean type used in the generated signatures
        #[arg(long, default_value = "Bool")]
        bool_type: String,
        /// Leave the prefix shared by all enumerators out of the generated strings
        #[arg(short = 's', long)]
        strip_prefix: bool,
    },
    /// Check that every group in a file starts with an enum declaration
    ///
    /// Will exit with exit code 0 if it does and with exit code 1 if it doesn't.
    Check {
        /// The path to the file to check
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },
    /// Generate a tab-completion script for your shell
    Completions {
        /// The shell to target
        shell: Shell,
    },
}

fn main() -> ExitCode {
    init_logging();

    let args = Args::parse();

    let result = match args.command {
        Command::Generate {
            input,
            output,
            namespace,
            parse_namespace,
            string_type,
            bool_type,
            strip_prefix,
        } => {
            let config = Config {
                input,
                output,
                options: CppOptions::new(
                    namespace,
                    parse_namespace,
                    string_type,
                    bool_type,
                    strip_prefix,
                ),
            };

            cpp::generate(&config).and_then(print_summary)
        }
        Command::Check { file } => check(&file),
        Command::Completions { shell } => {
            let mut command = Args::command();
            command.set_bin_name(command.get_name().to_string());
            command.build();

            let mut file = stdout().lock();

            shell
                .try_generate(&command, &mut file)
                .and_then(|()| file.flush())
                .with_stdout()
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            print_error(&error);
            error.exit_code()
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var("ENUMGEN_LOG")
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn print_error<E: Display>(error: &E) {
    const STYLE: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red)));

    let mut stream = BufWriter::new(stderr().lock());
    let _ = writeln!(stream, "{STYLE}Error:{STYLE:#} {error}");
}

fn print_summary(summary: Summary) -> Result<(), Error> {
    const STYLE: Style = Style::new()
        .fg_color(Some(Color::Ansi(AnsiColor::Green)))
        .bold();

    let Summary {
        generated,
        skipped,
        warnings,
    } = summary;

    let mut stream = BufWriter::new(stderr().lock());
    writeln!(
        stream,
        "{STYLE}Finished:{STYLE:#} generated {generated} enum(s), skipped {skipped} group(s), {warnings} warning(s)"
    )
    .and_then(|()| stream.flush())
    .with_stderr()
}

fn check(file: &Path) -> Result<(), Error> {
    let loaded = load_file(file)?;

    if loaded.skipped > 0 {
        Err(Error::Malformed {
            path: file.to_path_buf(),
            count: loaded.skipped,
        })
    } else {
        Ok(())
    }
}

#[derive(Debug)]
pub struct Loaded {
    pub descriptors: Vec<EnumDescriptor>,
    pub skipped: usize,
    pub warnings: usize,
}

/// Loads and parses the file, printing any diagnostics
pub fn load_file(file: &Path) -> Result<Loaded, Error> {
    let filename = file.to_string_lossy();
    let src = fs::read_to_string(file).with_path(file)?;
    let mut reports = Reports::default();

    let descriptors = parse(&src, &mut reports, &filename);

    if reports.has_any() {
        let mut stream = BufWriter::new(stderr().lock());
        let mut cache = (filename.as_ref(), Source::from(src.as_str()));

        for report in &reports {
            report.write(&mut cache, &mut stream).with_stderr()?;
        }

        stream.flush().with_stderr()?;
    }

    Ok(Loaded {
        descriptors,
        skipped: reports.error_count(),
        warnings: reports.warning_count(),
    })
}
