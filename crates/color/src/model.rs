use std::{fmt, str::FromStr};

use crate::{
    convert::{self, normalize},
    parse_color, serialize_color, InvalidColor,
};

/// The components of a color, with the alpha channel last
///
/// What the first three components mean depends on the [ColorModel].
pub type Components = [f64; 4];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorModel {
    /// Red, green and blue in `0..=255`, integers
    #[default]
    Rgba,

    /// Hue in `0..=360` (integer), saturation and lightness in `0..=100` (one decimal)
    Hsla,

    /// Hue in `0..=360` (integer), saturation and value in `0..=100` (one decimal)
    Hsva,
}

/// The textual representations a color can be serialized to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    /// `rgb(255, 0, 0)`
    Rgb,

    /// `rgba(255, 0, 0, 0.5)`
    Rgba,

    /// `rgb(100%, 0%, 0%)`
    RgbPercent,

    /// `rgba(100%, 0%, 0%, 0.5)`
    RgbaPercent,

    /// `#ff0000`, without alpha
    #[default]
    Hex,

    /// `hsl(0, 100%, 50%)`
    Hsl,

    /// `hsla(0, 100%, 50%, 0.5)`
    Hsla,
}

/// Returned when a [ColorModel] or [ColorFormat] name is not recognized
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownVariant {
    kind: &'static str,
    name: String,
}

/// A color together with the model its components belong to
///
/// The components are always normalized for the model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    model: ColorModel,
    components: Components,
}

impl ColorModel {
    pub const ALL: [Self; 3] = [Self::Rgba, Self::Hsla, Self::Hsva];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rgba => "rgba",
            Self::Hsla => "hsla",
            Self::Hsva => "hsva",
        }
    }

    /// Clamp every component to the range of this model and round it to the models precision
    ///
    /// Alpha is always clamped to `0..=1` with two decimals.
    #[must_use]
    pub fn normalize(self, components: Components) -> Components {
        let [first, second, third, alpha] = components;
        let alpha = normalize(alpha, 0., 1., 2);

        match self {
            Self::Rgba => [
                normalize(first, 0., 255., 0),
                normalize(second, 0., 255., 0),
                normalize(third, 0., 255., 0),
                alpha,
            ],
            Self::Hsla | Self::Hsva => [
                normalize(first, 0., 360., 0),
                normalize(second, 0., 100., 1),
                normalize(third, 0., 100., 1),
                alpha,
            ],
        }
    }

    /// Convert `components` from this model to `target`
    ///
    /// The alpha channel is passed through unchanged. The result is normalized for `target`.
    #[must_use]
    pub fn convert(self, components: Components, target: Self) -> Components {
        let [first, second, third, alpha] = self.normalize(components);

        let (first, second, third) = match (self, target) {
            (Self::Rgba, Self::Hsla) => convert::rgb_to_hsl(first, second, third),
            (Self::Rgba, Self::Hsva) => convert::rgb_to_hsv(first, second, third),
            (Self::Hsla, Self::Rgba) => convert::hsl_to_rgb(first, second, third),
            (Self::Hsla, Self::Hsva) => convert::hsl_to_hsv(first, second, third),
            (Self::Hsva, Self::Rgba) => convert::hsv_to_rgb(first, second, third),
            (Self::Hsva, Self::Hsla) => convert::hsv_to_hsl(first, second, third),
            (Self::Rgba, Self::Rgba) | (Self::Hsla, Self::Hsla) | (Self::Hsva, Self::Hsva) => {
                (first, second, third)
            },
        };

        target.normalize([first, second, third, alpha])
    }
}

impl ColorFormat {
    pub const ALL: [Self; 7] = [
        Self::Rgb,
        Self::Rgba,
        Self::RgbPercent,
        Self::RgbaPercent,
        Self::Hex,
        Self::Hsl,
        Self::Hsla,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
            Self::RgbPercent => "rgb%",
            Self::RgbaPercent => "rgba%",
            Self::Hex => "hex",
            Self::Hsl => "hsl",
            Self::Hsla => "hsla",
        }
    }

    /// The model colors are converted to before being serialized in this format
    #[must_use]
    pub const fn implied_model(self) -> ColorModel {
        match self {
            Self::Hsl | Self::Hsla => ColorModel::Hsla,
            Self::Rgb | Self::Rgba | Self::RgbPercent | Self::RgbaPercent | Self::Hex => {
                ColorModel::Rgba
            },
        }
    }
}

impl Color {
    #[must_use]
    pub fn new(model: ColorModel, components: Components) -> Self {
        Self {
            model,
            components: model.normalize(components),
        }
    }

    pub fn parse(text: &str, model: ColorModel) -> Result<Self, InvalidColor> {
        let components = parse_color(text, model)?;

        Ok(Self { model, components })
    }

    #[inline]
    #[must_use]
    pub const fn model(&self) -> ColorModel {
        self.model
    }

    #[inline]
    #[must_use]
    pub const fn components(&self) -> Components {
        self.components
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.components[3]
    }

    #[must_use]
    pub fn to_model(self, model: ColorModel) -> Self {
        Self {
            model,
            components: self.model.convert(self.components, model),
        }
    }

    #[must_use]
    pub fn serialize(&self, format: ColorFormat) -> String {
        serialize_color(self.components, self.model, format)
    }
}

impl FromStr for Color {
    type Err = InvalidColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, ColorModel::Rgba)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize(ColorFormat::Hex))
    }
}

impl FromStr for ColorModel {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|model| model.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVariant {
                kind: "color model",
                name: s.to_owned(),
            })
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorFormat {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVariant {
                kind: "color format",
                name: s.to_owned(),
            })
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {:?}", self.kind, self.name)
    }
}

impl std::error::Error for UnknownVariant {}

#[cfg(test)]
mod tests {
    use super::{Color, ColorFormat, ColorModel};

    #[test]
    fn normalize_components() {
        assert_eq!(
            ColorModel::Rgba.normalize([300., -5., 127.5, 1.234]),
            [255., 0., 128., 1.]
        );
        assert_eq!(
            ColorModel::Hsla.normalize([400., 50.55, 33.333, 0.125]),
            [360., 50.6, 33.3, 0.13]
        );
    }

    #[test]
    fn not_a_number_components() {
        let color = Color::new(ColorModel::Rgba, [f64::NAN, 0., 0., 1.]);
        assert_eq!(color.components(), [0., 0., 0., 1.]);

        let color = Color::new(ColorModel::Hsla, [120., f64::NAN, 50., f64::NAN]);
        assert_eq!(color.components(), [120., 0., 50., 0.]);
    }

    #[test]
    fn convert_between_models() {
        let red = [255., 0., 0., 0.5];

        assert_eq!(ColorModel::Rgba.convert(red, ColorModel::Hsla), [0., 100., 50., 0.5]);
        assert_eq!(ColorModel::Rgba.convert(red, ColorModel::Hsva), [0., 100., 100., 0.5]);
        assert_eq!(
            ColorModel::Hsva.convert([0., 100., 100., 0.5], ColorModel::Hsla),
            [0., 100., 50., 0.5]
        );
        assert_eq!(ColorModel::Rgba.convert(red, ColorModel::Rgba), red);
    }

    #[test]
    fn parse_names() {
        assert_eq!("hsva".parse(), Ok(ColorModel::Hsva));
        assert_eq!("RGBA".parse(), Ok(ColorModel::Rgba));
        assert!("cmyk".parse::<ColorModel>().is_err());

        assert_eq!("rgba%".parse(), Ok(ColorFormat::RgbaPercent));
        assert_eq!("hex".parse(), Ok(ColorFormat::Hex));
        assert!("lab".parse::<ColorFormat>().is_err());

        for format in ColorFormat::ALL {
            assert_eq!(format.to_string().parse(), Ok(format));
        }
    }

    #[test]
    fn implied_model() {
        assert_eq!(ColorFormat::Hsl.implied_model(), ColorModel::Hsla);
        assert_eq!(ColorFormat::Hsla.implied_model(), ColorModel::Hsla);
        assert_eq!(ColorFormat::RgbPercent.implied_model(), ColorModel::Rgba);
        assert_eq!(ColorFormat::Hex.implied_model(), ColorModel::Rgba);
    }

    #[test]
    fn color_value() {
        let color: Color = "rgba(100, 149, 237, 0.25)".parse().unwrap();

        assert_eq!(color.model(), ColorModel::Rgba);
        assert_eq!(color.components(), [100., 149., 237., 0.25]);
        assert_eq!(color.alpha(), 0.25);
        assert_eq!(color.to_string(), "#6495ed");

        let hsla = color.to_model(ColorModel::Hsla);
        assert_eq!(hsla.components(), [219., 79.2, 66.1, 0.25]);
        assert_eq!(hsla.serialize(ColorFormat::Hsla), "hsla(219, 79.2%, 66.1%, 0.25)");

        assert_eq!(
            Color::new(ColorModel::Hsva, [720., 150., 50., 2.]).components(),
            [360., 100., 50., 1.]
        );
    }
}
