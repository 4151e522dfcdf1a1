mod config;

use std::env::args_os;
use std::process::ExitCode;
use dotenv::dotenv;
use eyre::WrapErr;
use log::debug;
use phonepad_keypad::PhonePad;
use crate::config::Config;

fn print_usage() {
    eprintln!("Usage: phonepad <input>");
    eprintln!();
    eprintln!("Parameters:");
    eprintln!("input       A string in 'phone pad' format to be decoded, ending with '#'");
}

fn run(input: &str) -> eyre::Result<String> {
    let config_path = Config::path();
    let config = Config::load_from(&config_path)
        .wrap_err_with(|| format!("failed to load config from {}", config_path.display()))?;
    let pad = PhonePad::new(config.keymap()?);
    debug!("Using {:?}.", pad.keymap());

    let output = pad.decode(input)?;
    Ok(output)
}

fn main() -> ExitCode {
    // Initialize environment and logger
    dotenv().ok();
    pretty_env_logger::init();

    let Some(input) = args_os().nth(1) else {
        print_usage();
        return ExitCode::FAILURE;
    };
    // Bytes that are not valid UTF-8 become U+FFFD, which the decoder rejects.
    let input = input.to_string_lossy();

    match run(&input) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("An error occurred: {err:#}");
            ExitCode::FAILURE
        }
    }
}
