//Enable more cargo lint tests
#![warn(rust_2018_idioms)]

use std::{
    fs::File,
    io::{self, BufWriter, Read, Write},
};

use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use bwzip::tools::cli::{opts_init, Mode, Opts, Output};
use bwzip::tools::hexdump::hexdump;
use bwzip::tools::mtf::{mtf_decode, mtf_encode};
use bwzip::{bwt_decode, bwt_encode, compress, expand, Error};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    // Available log levels are Error, Warn, Info, Debug, Trace. Output may go to stdout, so log to stderr.
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Could not start the logger: {}", e);
    }

    let opts = opts_init();

    //----- Figure how what we need to do and go do it
    if let Err(e) = run(&opts) {
        error!("{} failed: {}", opts.op_mode, e);
        std::process::exit(1);
    }
    info!("Done.");
}

/// Read the whole input, transform it as the mode asks, and write the result.
fn run(opts: &Opts) -> Result<(), Error> {
    let input = read_input(opts)?;
    info!("Read {} bytes.", input.len());

    let output = match opts.op_mode {
        Mode::Compress => compress(&input)?,
        Mode::Expand => expand(&input)?,
        Mode::MtfEncode => mtf_encode(&input),
        Mode::MtfDecode => mtf_decode(&input),
        Mode::BwtEncode => {
            let (key, bwt) = bwt_encode(&input)?;
            let mut out = Vec::with_capacity(bwt.len() + 4);
            out.extend_from_slice(&key.to_le_bytes());
            out.extend_from_slice(&bwt);
            out
        }
        Mode::BwtDecode => {
            if input.len() < 4 {
                return Err(Error::EndOfStream);
            }
            let (key, bwt) = input.split_at(4);
            let key = u32::from_le_bytes([key[0], key[1], key[2], key[3]]);
            bwt_decode(key, bwt)?
        }
    };

    write_output(opts, &output)
}

/// Input comes from the named file, or from stdin.
fn read_input(opts: &Opts) -> Result<Vec<u8>, Error> {
    let mut input = Vec::new();
    match &opts.file {
        Some(name) => File::open(name)?.read_to_end(&mut input)?,
        None => io::stdin().lock().read_to_end(&mut input)?,
    };
    Ok(input)
}

/// Output goes to the named file, or to stdout. Hex dumps are written as text.
fn write_output(opts: &Opts, data: &[u8]) -> Result<(), Error> {
    let mut writer: Box<dyn Write> = match &opts.output {
        Output::File(name) => Box::new(BufWriter::new(File::create(name)?)),
        Output::Stdout => Box::new(BufWriter::new(io::stdout().lock())),
    };
    if opts.hexdump {
        writer.write_all(hexdump(data).as_bytes())?;
    } else {
        writer.write_all(data)?;
    }
    writer.flush()?;
    info!("Wrote {} bytes to {}.", data.len(), opts.output);
    Ok(())
}
