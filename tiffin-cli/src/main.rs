//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = tiffin_cli::run() {
        eprintln!("tiffin: {err}");
        std::process::exit(1);
    }
}
