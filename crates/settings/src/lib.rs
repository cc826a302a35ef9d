//! Responsible for creating and managing the global swatch settings

mod cli;

use std::sync::LazyLock;

use clap::Parser;
use color::{ColorFormat, ColorModel};

/// The global settings singleton
pub static SETTINGS: LazyLock<Settings> = LazyLock::new(Settings::init);

/// What swatch should do with each color it is given
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Print the color as a string in the given format
    Format(ColorFormat),

    /// Print the raw components of the color in the given model
    Components(ColorModel),

    /// Only report whether the color could be parsed
    Check,

    /// Ignore all input colors and print the table of named colors
    ListNames,
}

/// Holds all the configurable information for a swatch invocation
#[derive(Debug)]
pub struct Settings {
    pub action: Action,

    /// Colors passed on the command line
    ///
    /// If this is empty, colors are read from stdin instead.
    pub colors: Vec<String>,
}

impl Settings {
    #[must_use]
    pub fn init() -> Self {
        let mut settings = Self::default();

        let args = cli::Arguments::parse();

        args.update_settings(&mut settings);

        settings
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            action: Action::Format(ColorFormat::default()),
            colors: vec![],
        }
    }
}
