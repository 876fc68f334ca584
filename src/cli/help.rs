// cli/help.rs — Usage, version and bad-usage printers for the `lzw` binary.

use crate::cli::constants::{display_level, AUTHOR, ENV_DISPLAY_LEVEL, PROGRAM_NAME};

/// Print brief usage to stderr.
pub fn print_usage(program: &str) {
    eprintln!("Usage: {} [options] <string>", program);
    eprintln!();
    eprintln!("Encodes <string> with LZW, prints the code stream and the");
    eprintln!("compression ratio, then decodes it again.");
    eprintln!();
    eprintln!("Options : ");
    eprintln!(" -h/--help    : display this help and exit ");
    eprintln!(" -V/--version : display version number and exit ");
    eprintln!(" -v/--verbose : increase verbosity ");
    eprintln!(" -q/--quiet   : decrease verbosity ");
    eprintln!(" --           : treat the next argument as <string> ");
    eprintln!();
    eprintln!(
        "Environment : {} sets the initial verbosity (0-4) ",
        ENV_DISPLAY_LEVEL
    );
}

/// Print the version line to stdout.
pub fn print_version() {
    println!(
        "*** {} v{}, by {} ***",
        PROGRAM_NAME,
        crate::version_string(),
        AUTHOR
    );
}

/// Print "Incorrect parameters" and brief usage to stderr, then exit 1.
pub fn print_bad_usage(program: &str) -> ! {
    if display_level() >= 1 {
        crate::display!("Incorrect parameters\n");
        print_usage(program);
    }
    std::process::exit(1);
}
