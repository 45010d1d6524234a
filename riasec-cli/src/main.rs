//! Entry point for the `riasec` command-line interface.
#![forbid(unsafe_code)]

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn main() {
    riasec_cli::init_logging();
    if let Err(err) = riasec_cli::run() {
        eprintln!("riasec: {err}");
        std::process::exit(1);
    }
}
