use color::{ColorFormat, ColorModel};

use crate::{Action, Settings};

#[derive(clap::Parser, Debug)]
#[command(name = "swatch", version, about = "Parse, convert and reformat CSS colors", long_about = None)]
pub struct Arguments {
    /// Colors to process, read line by line from stdin if none are given
    colors: Vec<String>,

    /// Output format: rgb, rgba, rgb%, rgba%, hex, hsl or hsla
    #[arg(short, long, value_parser = parse_format)]
    format: Option<ColorFormat>,

    /// Print the components in this model (rgba, hsla or hsva) instead of a color string
    #[arg(short, long, value_parser = parse_model)]
    model: Option<ColorModel>,

    /// Only report whether each color is valid
    #[clap(
        short,
        long,
        action = clap::ArgAction::SetTrue,
    )]
    check: bool,

    /// Print every named color along with its hex value
    #[clap(
        long,
        action = clap::ArgAction::SetTrue,
    )]
    list_names: bool,
}

impl Arguments {
    /// Apply the arguments to `settings`
    ///
    /// If more than one action is requested, `--list-names` wins over `--check`,
    /// which wins over `--model`, which wins over `--format`.
    pub(crate) fn update_settings(self, settings: &mut Settings) {
        if let Some(format) = self.format {
            settings.action = Action::Format(format);
        }

        if let Some(model) = self.model {
            settings.action = Action::Components(model);
        }

        if self.check {
            settings.action = Action::Check;
        }

        if self.list_names {
            settings.action = Action::ListNames;
        }

        settings.colors = self.colors;
    }
}

fn parse_format(s: &str) -> Result<ColorFormat, String> {
    s.parse().map_err(|e: color::UnknownVariant| format!("{e}"))
}

fn parse_model(s: &str) -> Result<ColorModel, String> {
    s.parse().map_err(|e: color::UnknownVariant| format!("{e}"))
}
