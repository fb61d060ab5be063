use clap::{Args, Parser, Subcommand};

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::errors::{Error, Result};
use crate::{process_file, process_str, Operation, OutputFormat, ProcessConfig};

/// Command line arguments
#[derive(Parser)]
#[command(author, version, about, long_about=None)] // Read from Cargo.toml
struct Arguments {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List path segments with their resolved end points
    Parse {
        #[command(flatten)]
        common: CommonArgs,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },
    /// List end points, one line per subpath
    Points {
        #[command(flatten)]
        common: CommonArgs,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },
    /// Rewrite path data with arcs converted to cubic beziers
    Arcs {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Simplify the path's polylines, emitting M/L path data
    Fit {
        #[command(flatten)]
        common: CommonArgs,

        /// Proportion of each subpath's points to keep
        ///
        /// Subpaths are not reduced below five points; subpaths already that
        /// small are omitted if the ratio would reduce them further.
        #[arg(short, long, default_value = "0.5")]
        ratio: f64,

        /// Close every subpath in the output
        #[arg(long, conflicts_with = "open")]
        closed: bool,

        /// Don't close subpaths in the output, even if the input is closed
        #[arg(long)]
        open: bool,
    },
}

#[derive(Args)]
struct CommonArgs {
    /// File containing path data ('-' for stdin)
    #[arg(default_value = "-")]
    file: String,

    /// Path data given directly, instead of FILE
    #[arg(short, long, conflicts_with = "file")]
    data: Option<String>,

    /// Target output file ('-' for stdout)
    #[arg(short, long, default_value = "-")]
    output: String,

    /// Fail on malformed path data rather than using what could be parsed
    #[arg(long)]
    strict: bool,
}

/// Where path data is read from.
#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    /// Path to input file, or '-' for stdin
    File(String),
    /// Literal path data
    Data(String),
}

/// Top-level configuration used by the `roughpath` command-line process.
///
/// This is typically derived from command line arguments and passed to `run()`.
///
/// 'front-end' program settings (e.g. input/output locations) are stored
/// directly in this struct. Per-run processing settings are stored in the
/// embedded `ProcessConfig` struct.
#[derive(Clone, Debug)]
pub struct Config {
    pub input: Input,
    /// Path to output file, or '-' for stdout
    pub output_path: String,
    /// processing config options
    pub process: ProcessConfig,
}

impl Config {
    fn from_args(args: Arguments) -> Result<Self> {
        let (common, operation, format, closed) = match args.command {
            Commands::Parse { common, format } => (common, Operation::Parse, format, None),
            Commands::Points { common, format } => (common, Operation::Points, format, None),
            Commands::Arcs { common } => (common, Operation::Arcs, OutputFormat::Text, None),
            Commands::Fit {
                common,
                ratio,
                closed,
                open,
            } => {
                let closed = match (closed, open) {
                    (true, _) => Some(true),
                    (_, true) => Some(false),
                    _ => None,
                };
                (common, Operation::Fit { ratio }, OutputFormat::Text, closed)
            }
        };

        let input = match common.data {
            Some(data) => Input::Data(data),
            None => Input::File(common.file),
        };
        if let Input::File(ref file) = input {
            if file != "-" && common.output != "-" {
                let in_path = Path::new(file);
                let out_path = Path::new(&common.output);
                if out_path.exists() && out_path.canonicalize()? == in_path.canonicalize()? {
                    return Err(Error::Cli(
                        "Output path must not refer to the same file as the input file.".into(),
                    ));
                }
            }
        }

        Ok(Self {
            input,
            output_path: common.output,
            process: ProcessConfig {
                operation,
                format,
                strict: common.strict,
                closed,
            },
        })
    }

    /// Create a `Config` object set up given a command line string.
    ///
    /// The string is parsed using `shlex::split()`, so values containing
    /// spaces or quotes should be quoted or escaped appropriately.
    pub fn from_cmdline(args: &str) -> Result<Self> {
        let args = shlex::split(args).unwrap_or_default();
        let args =
            Arguments::try_parse_from(args.iter()).map_err(|e| Error::Cli(e.to_string()))?;
        Self::from_args(args)
    }
}

/// Create a `Config` object from process arguments.
pub fn get_config() -> Result<Config> {
    let args = Arguments::parse();
    Config::from_args(args)
}

/// Set up logging to stderr; the `RUST_LOG` environment variable overrides
/// the default of showing warnings only.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("roughpath=warn"));
    // a subscriber may already be installed if embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the `roughpath` program with a given `Config`.
pub fn run(config: Config) -> Result<()> {
    match config.input {
        Input::File(path) => process_file(&path, &config.output_path, &config.process),
        Input::Data(data) => {
            let output = process_str(data, &config.process)?;
            if config.output_path == "-" {
                std::io::stdout().write_all(output.as_bytes())?;
            } else {
                fs::write(&config.output_path, output)?;
            }
            Ok(())
        }
    }
}
