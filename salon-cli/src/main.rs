//! Entry point for the salon map command-line interface.
#![forbid(unsafe_code)]

use salon_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "fatal errors are reported on the terminal before exiting"
)]
fn main() {
    match salon_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("salon-map: {err}");
            std::process::exit(1);
        }
    }
}
