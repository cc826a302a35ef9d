use std::{
    io::{self, BufRead},
    process::ExitCode,
};

use color::{format_color_string, is_valid_color_string, named, Color};
use settings::{Action, SETTINGS};

pub fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let action = SETTINGS.action;

    if action == Action::ListNames {
        for (name, [r, g, b]) in named::names() {
            println!("{name:<20} #{r:02x}{g:02x}{b:02x}");
        }
        return ExitCode::SUCCESS;
    }

    let mut all_valid = true;

    if SETTINGS.colors.is_empty() {
        log::debug!("No colors on the command line, reading from stdin");

        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(error) => {
                    log::error!("Failed to read from stdin: {error}");
                    return ExitCode::FAILURE;
                },
            };

            if line.trim().is_empty() {
                continue;
            }

            all_valid &= process(&line, action);
        }
    } else {
        for color in &SETTINGS.colors {
            all_valid &= process(color, action);
        }
    }

    if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Perform `action` on a single color, returning whether the color was valid
fn process(input: &str, action: Action) -> bool {
    match action {
        Action::Format(format) => match format_color_string(input, format) {
            Ok(formatted) => {
                println!("{formatted}");
                true
            },
            Err(error) => {
                log::error!("{error}");
                false
            },
        },
        Action::Components(model) => match Color::parse(input, model) {
            Ok(color) => {
                let [first, second, third, alpha] = color.components();
                println!("{model}: {first}, {second}, {third}, {alpha}");
                true
            },
            Err(error) => {
                log::error!("{error}");
                false
            },
        },
        Action::Check => {
            let is_valid = is_valid_color_string(input);
            println!("{input}: {}", if is_valid { "valid" } else { "invalid" });
            is_valid
        },
        Action::ListNames => unreachable!("named colors are listed before any input is read"),
    }
}
