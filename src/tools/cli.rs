use std::{fmt::Display, fmt::Formatter};

use clap::Parser;
use log::{info, warn};

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    /// -q wins, otherwise each -v raises the level by one step above Errors.
    fn from_flags(quiet: bool, count: u8) -> Self {
        if quiet {
            return Verbosity::Quiet;
        }
        match count {
            0 => Verbosity::Errors,
            1 => Verbosity::Warnings,
            2 => Verbosity::Info,
            3 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    pub fn level_filter(self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Off,
            Verbosity::Errors => log::LevelFilter::Error,
            Verbosity::Warnings => log::LevelFilter::Warn,
            Verbosity::Info => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
            Verbosity::Trace => log::LevelFilter::Trace,
        }
    }
}

/// What to do with the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// Huffman compress the input
    Compress,
    /// Expand Huffman compressed input
    Expand,
    /// Apply the move to front transform
    MtfEncode,
    /// Reverse the move to front transform
    MtfDecode,
    /// Apply the Burrows-Wheeler transform (4 byte little-endian key, then the last column)
    BwtEncode,
    /// Reverse the Burrows-Wheeler transform
    BwtDecode,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Define the two output channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    File(String),
    Stdout,
}
impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::File(name) => write!(f, "file {}", name),
            Output::Stdout => write!(f, "stdout"),
        }
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "A block-sorting compressor toolkit: Huffman coding, move to front and the Burrows-Wheeler transform",
    long_about = None
)]
pub struct Args {
    /// Operation to run
    #[clap(value_enum)]
    mode: Mode,

    /// File to read for input (standard input if omitted)
    #[clap()]
    file: Option<String>,

    /// File to write output to (standard output if omitted)
    #[clap(short = 'o', long = "output")]
    output: Option<String>,

    /// Write the output as a hex dump followed by the bit count
    #[clap(short = 'x', long = "hexdump")]
    hexdump: bool,

    /// Be verbose (a 2nd -v gives more)
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress noncritical error messages
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,
}

/// Options controlling one run of the tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Operation to run
    pub op_mode: Mode,
    /// File to read for input, stdin when None
    pub file: Option<String>,
    /// Location where output is sent
    pub output: Output,
    /// Render output as a hex dump
    pub hexdump: bool,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl Opts {
    pub fn new() -> Self {
        Self {
            op_mode: Mode::Compress,
            file: None,
            output: Output::Stdout,
            hexdump: false,
            verbose: Verbosity::Errors,
        }
    }
}

impl Default for Opts {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Args> for Opts {
    fn from(args: Args) -> Self {
        Self {
            op_mode: args.mode,
            file: args.file,
            output: args.output.map_or(Output::Stdout, Output::File),
            hexdump: args.hexdump,
            verbose: Verbosity::from_flags(args.quiet, args.verbose),
        }
    }
}

/// Parse the command line into Opts and set the log level to match.
pub fn opts_init() -> Opts {
    let opts = Opts::from(Args::parse());
    log::set_max_level(opts.verbose.level_filter());

    info!("---- bwzip Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    match &opts.file {
        Some(s) => info!("Getting input from the file {}", s),
        None => warn!("Getting input from stdin"),
    }
    info!("Sending output to {}", opts.output);
    if opts.hexdump {
        info!("Writing output as a hex dump")
    };
    info!("---- bwzip Initialization End ----");
    opts
}
