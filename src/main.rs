use std::{io, process};

use clap::{CommandFactory, Parser};
use color_eyre::eyre::Result;
use tracing::{debug, error, trace, Level};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use reverse_endian::{parse_hex, reverse32, reverse32_buffer, self_test, to_hex, Report};


#[derive(Parser, Debug)]
#[command(
    version = reverse_endian::LIBRARY_VERSION,
    about = "Reverse the byte order of a 32-bit value",
    after_help = "Examples:\n  reverse-endian 0x12345678\n  reverse-endian DEADBEEF\n  reverse-endian --test",
)]
struct Cli {
    /// Hexadecimal value to reverse, with or without a 0x prefix
    #[arg(value_name = "HEX_VALUE", conflicts_with = "test")]
    value: Option<String>,

    /// Run the built-in test vectors
    #[arg(short, long)]
    test: bool,

    /// Turn verbose level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Do not print any logging messages.
    ///
    /// Normal output of the command is still available on stdout.
    #[arg(short, long)]
    quiet: bool,
}

fn init_tracing(verbose_level: u8) {
    // use an env filter with default level of INFO
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let tracing = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(env_filter);

    // flags given on the command-line override those from the environment
    match verbose_level {
        0 => tracing.init(),
        1 => tracing.with_max_level(Level::DEBUG).init(),
        _ => tracing.with_max_level(Level::TRACE).init(),
    };
}

fn run_tests() -> Result<()> {
    println!("=== 32-bit Endian Reversal Tests ===\n");

    let reports = match self_test() {
        Ok(reports) => reports,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            process::exit(1);
        },
    };

    for report in &reports {
        println!("{report}");
        println!("---");
    }

    println!("\n=== Interactive Example ===");
    println!("To use these functions with your own numbers:");
    println!("reverse32(0x12345678) => {}", to_hex(reverse32(0x12345678)));
    println!("reverse32_buffer(0x12345678) => {}", to_hex(reverse32_buffer(0x12345678)));

    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if !cli.quiet {
        init_tracing(cli.verbose);
        trace!("{:?}", cli);
    }

    if cli.test {
        return run_tests();
    }

    let Some(input) = cli.value else {
        let mut prog = <Cli as CommandFactory>::command();
        prog.print_help()?;
        process::exit(2);
    };

    match parse_hex(&input) {
        Ok(value) => {
            debug!("reversing {}", to_hex(value));
            println!("{}", Report::new(value));
        },
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("Usage: reverse-endian <HEX_VALUE>   (e.g. 0x12345678, see --help)");
            process::exit(1);
        },
    }

    Ok(())
}
