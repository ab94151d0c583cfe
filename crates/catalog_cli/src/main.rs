//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `catalog_core` linkage.
//! - Create one category from arguments and print it as JSON, or print its
//!   validation errors.
//!
//! Usage: `catalog_cli <name> [description] [--inactive]`

use catalog_core::{CategoryService, CreateCategoryCommand, LoggingConfig};
use log::info;
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("catalog_core ping={}", catalog_core::ping());
    println!("catalog_core version={}", catalog_core::core_version());

    if let Some(config) = LoggingConfig::from_env() {
        if let Err(err) = config.init() {
            eprintln!("logging disabled: {err}");
        }
    }

    let command = parse_args(std::env::args().skip(1));
    info!("event=cli_create module=cli status=start active={}", command.active);

    match CategoryService::new().create_category(&command) {
        Ok(category) => match serde_json::to_string_pretty(&category) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("failed to encode category: {err}");
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            for error in err.errors() {
                eprintln!("error: {error}");
            }
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: impl Iterator<Item = String>) -> CreateCategoryCommand {
    let mut active = true;
    let mut positional = Vec::new();
    for arg in args {
        if arg == "--inactive" {
            active = false;
        } else {
            positional.push(arg);
        }
    }

    let mut positional = positional.into_iter();
    let name = positional.next();
    let description = positional.next().unwrap_or_default();
    CreateCategoryCommand::new(name.as_deref(), description, active)
}
