//! Binary entry point for the `lzw` command-line tool.
//!
//! Encodes its single string argument, prints the code stream and the
//! compression ratio, then decodes the stream again and prints the result.
//!
//! # Control flow
//!
//! 1. [`detect_init`] derives the program name and starting display level.
//! 2. [`parse_args`] processes all flags and builds a [`ParsedArgs`] value.
//! 3. [`run`] builds the [`Report`] and prints it.
//!
//! Usage errors, a missing argument and `--help` exit with status 1; codec
//! failures are reported on stderr and also exit with status 1.

use lzw::cli::args::{parse_args, ParsedArgs};
use lzw::cli::constants::set_display_level;
use lzw::cli::help::{print_bad_usage, print_usage, print_version};
use lzw::cli::init::detect_init;
use lzw::cli::report::Report;
use lzw::{displaylevel, displayout};

/// Run the codec over the parsed input and print the report.
fn run(args: &ParsedArgs) -> anyhow::Result<()> {
    let input = args.input.as_deref().unwrap_or_default().as_bytes();

    displaylevel!(
        4,
        "*** {} v{} ***\n",
        lzw::cli::constants::PROGRAM_NAME,
        lzw::LZW_VERSION_STRING
    );

    let report = Report::build(input)?;
    displayout!("{}", report);

    displaylevel!(
        3,
        "{} codes ({} literal, {} learned) for {} input bytes\n",
        report.codes.len(),
        report.codes.len() - report.learned_codes(),
        report.learned_codes(),
        report.input.len()
    );
    Ok(())
}

fn main() {
    let argv0 = std::env::args().next().unwrap_or_default();
    let init = detect_init(&argv0);
    set_display_level(init.display_level);
    let exe_name = init.exe_name.clone();

    let args = match parse_args(init) {
        Ok(a) => a,
        Err(e) => {
            displaylevel!(1, "{}: {}\n", exe_name, e);
            print_bad_usage(&exe_name);
        }
    };
    set_display_level(args.display_level);

    if args.version {
        print_version();
        std::process::exit(0);
    }
    if args.wants_usage() {
        print_usage(&args.exe_name);
        std::process::exit(1);
    }

    if let Err(e) = run(&args) {
        displaylevel!(1, "{}: error: {:#}\n", args.exe_name, e);
        std::process::exit(1);
    }
}
