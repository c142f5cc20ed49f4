//! `parsenote [-h|--help] <XML_FILE>`
//!
//! The binary only wires logging and process exit around `cli::run()`; all
//! note handling lives in the library.

mod cli;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match cli::run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            cli::print_error(&e);
            std::process::exit(1);
        }
    }
}
