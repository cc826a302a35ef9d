//! Turns color strings into normalized [Components].
//!
//! The following syntaxes are accepted (case-insensitive, whitespace between tokens is ignored):
//! * `rgb(r, g, b)` and `rgb(r%, g%, b%)`
//! * `rgba(r, g, b, a)` and `rgb(r%, g%, b%, a)`
//! * `hsl(h, s%, l%)` and `hsla(h, s%, l%, a)`
//! * `#rgb` and `#rrggbb`
//! * any of the [named colors](crate::named)

use std::fmt;

use crate::{
    named,
    tokenizer::{tokenize_color, Token, TokenKind},
    ColorModel, Components,
};

/// The string does not describe a color in any supported syntax
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidColor {
    input: String,
}

impl InvalidColor {
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for InvalidColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color string: {:?}", self.input)
    }
}

impl std::error::Error for InvalidColor {}

/// The functional notations that can be parsed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Grammar {
    /// `rgb(N, N, N)`
    Rgb,

    /// `rgb(P, P, P)`
    RgbPercentage,

    /// `rgba(N, N, N, N)`
    Rgba,

    /// `rgb(P, P, P, N)`
    ///
    /// Note that the function name is `rgb(`, *not* `rgba(`. `rgba(P, P, P, N)` is rejected.
    RgbPercentageAlpha,

    /// `hsl(N, P, P)`
    Hsl,

    /// `hsla(N, P, P, N)`
    Hsla,
}

impl Grammar {
    const ALL: [Self; 6] = [
        Self::Rgb,
        Self::RgbPercentage,
        Self::Rgba,
        Self::RgbPercentageAlpha,
        Self::Hsl,
        Self::Hsla,
    ];

    const fn function(self) -> &'static str {
        match self {
            Self::Rgb | Self::RgbPercentage | Self::RgbPercentageAlpha => "rgb(",
            Self::Rgba => "rgba(",
            Self::Hsl => "hsl(",
            Self::Hsla => "hsla(",
        }
    }

    const fn arguments(self) -> &'static [TokenKind] {
        use TokenKind::{Number, Percentage};

        match self {
            Self::Rgb => &[Number, Number, Number],
            Self::RgbPercentage => &[Percentage, Percentage, Percentage],
            Self::Rgba => &[Number, Number, Number, Number],
            Self::RgbPercentageAlpha => &[Percentage, Percentage, Percentage, Number],
            Self::Hsl => &[Number, Percentage, Percentage],
            Self::Hsla => &[Number, Percentage, Percentage, Number],
        }
    }

    const fn model(self) -> ColorModel {
        match self {
            Self::Rgb | Self::RgbPercentage | Self::Rgba | Self::RgbPercentageAlpha => {
                ColorModel::Rgba
            },
            Self::Hsl | Self::Hsla => ColorModel::Hsla,
        }
    }

    /// Extract the (unnormalized) components if `tokens` match this grammar exactly
    ///
    /// Grammars without an alpha argument produce an alpha of `1`.
    fn match_tokens(self, tokens: &[Token]) -> Option<Components> {
        let arguments = self.arguments();

        // The function, one token per argument, one delimiter after each argument
        if tokens.len() != 2 * arguments.len() + 1 {
            return None;
        }

        if !matches!(&tokens[0], Token::Function(name) if name == self.function()) {
            return None;
        }

        let mut components = [0., 0., 0., 1.];
        for (index, expected_kind) in arguments.iter().enumerate() {
            let argument = &tokens[2 * index + 1];
            let delimiter = &tokens[2 * index + 2];

            let expected_delimiter = if index + 1 == arguments.len() {
                ')'
            } else {
                ','
            };

            if argument.kind() != *expected_kind || *delimiter != Token::Char(expected_delimiter)
            {
                return None;
            }

            components[index] = leading_number(&argument.text())?;
        }

        if matches!(self, Self::RgbPercentage | Self::RgbPercentageAlpha) {
            for channel in &mut components[..3] {
                *channel = *channel / 100. * 255.;
            }
        }

        Some(components)
    }
}

/// Parse the longest prefix of `text` that forms a decimal number
///
/// Returns `None` if there is no such prefix.
fn leading_number(text: &str) -> Option<f64> {
    let mut end = usize::from(text.starts_with('-'));
    let mut seen_digit = false;
    let mut seen_dot = false;

    for byte in &text.as_bytes()[end..] {
        match byte {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }

    if !seen_digit {
        return None;
    }

    text[..end].parse().ok()
}

/// Parse `#rgb` or `#rrggbb`
fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#')?;

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_owned(),
        _ => return None,
    };

    let value = u32::from_str_radix(&expanded, 16).ok()?;
    let [_, r, g, b] = value.to_be_bytes();
    Some([r, g, b])
}

fn parse_components(text: &str) -> Result<(ColorModel, Components), InvalidColor> {
    let trimmed = text.trim();
    let tokens = tokenize_color(trimmed);

    for grammar in Grammar::ALL {
        if let Some(components) = grammar.match_tokens(&tokens) {
            log::trace!("{trimmed:?} matches {grammar:?}");
            return Ok((grammar.model(), components));
        }
    }

    if let [Token::Hex(hex)] = tokens.as_slice() {
        if let Some([r, g, b]) = parse_hex(hex) {
            return Ok((
                ColorModel::Rgba,
                [f64::from(r), f64::from(g), f64::from(b), 1.],
            ));
        }
    }

    if let Some([r, g, b]) = named::lookup(&trimmed.to_lowercase()) {
        return Ok((
            ColorModel::Rgba,
            [f64::from(r), f64::from(g), f64::from(b), 1.],
        ));
    }

    log::debug!("Failed to parse {trimmed:?} as a color, tokens: {tokens:?}");
    Err(InvalidColor {
        input: text.to_owned(),
    })
}

/// Parse a color string into the components of `model`
///
/// The components are clamped and rounded to the precision of `model`.
///
/// # Example
/// ```
/// # use color::{parse_color, ColorModel};
/// assert_eq!(parse_color("#f00", ColorModel::Rgba), Ok([255., 0., 0., 1.]));
/// assert_eq!(parse_color("red", ColorModel::Hsla), Ok([0., 100., 50., 1.]));
/// assert!(parse_color("reddish", ColorModel::Rgba).is_err());
/// ```
pub fn parse_color(text: &str, model: ColorModel) -> Result<Components, InvalidColor> {
    let (source_model, components) = parse_components(text)?;

    Ok(source_model.convert(components, model))
}

/// Whether `text` is accepted by [parse_color]
#[must_use]
pub fn is_valid_color_string(text: &str) -> bool {
    parse_components(text).is_ok()
}

#[cfg(test)]
mod tests {
    use super::{is_valid_color_string, leading_number, parse_color, parse_hex};
    use crate::ColorModel;

    fn rgba(text: &str) -> [f64; 4] {
        parse_color(text, ColorModel::Rgba).unwrap()
    }

    #[test]
    fn parse_hex_color_code() {
        assert_eq!(rgba("#fff"), [255., 255., 255., 1.]);
        assert_eq!(rgba("#ff0000"), [255., 0., 0., 1.]);
        assert_eq!(rgba("#F00f10"), [240., 15., 16., 1.]);
        assert_eq!(rgba("  #abc  "), [170., 187., 204., 1.]);

        // Alpha is not supported in hex notation
        assert!(!is_valid_color_string("#abcd"));
        assert!(!is_valid_color_string("#f00f10ab"));
        assert!(!is_valid_color_string("#ff00"));
    }

    #[test]
    fn parse_rgb_function() {
        assert_eq!(rgba("rgb(0, 128, 255)"), [0., 128., 255., 1.]);
        assert_eq!(rgba("RGB( 0,128 ,255 )"), [0., 128., 255., 1.]);
        assert_eq!(rgba("rgb(300, -20, 12.6)"), [255., 0., 13., 1.]);
        assert_eq!(rgba("rgb(100%, 50%, 10%)"), [255., 128., 26., 1.]);

        // mixed numbers and percentages - should not parse
        assert!(!is_valid_color_string("rgb(50, 10, 10%)"));

        // missing or superfluous arguments
        assert!(!is_valid_color_string("rgb(1, 2)"));
        assert!(!is_valid_color_string("rgb(1, 2, 3, 4)"));
        assert!(!is_valid_color_string("rgb(1, 2, 3"));
        assert!(!is_valid_color_string("rgb(1 2 3)"));
    }

    #[test]
    fn parse_rgba_function() {
        assert_eq!(rgba("rgba(1, 2, 3, 0.5)"), [1., 2., 3., 0.5]);
        assert_eq!(rgba("rgba(1, 2, 3, 0.555)"), [1., 2., 3., 0.56]);
        assert_eq!(rgba("rgba(1, 2, 3, 7)"), [1., 2., 3., 1.]);
        assert!(!is_valid_color_string("rgba(1, 2, 3)"));
        assert!(!is_valid_color_string("rgba(1, 2, 3, 50%)"));
    }

    #[test]
    fn percentage_alpha_uses_rgb_function() {
        assert_eq!(rgba("rgb(100%, 0%, 50%, 0.3)"), [255., 0., 128., 0.3]);
        assert!(!is_valid_color_string("rgba(100%, 0%, 50%, 0.3)"));
    }

    #[test]
    fn parse_hsl_function() {
        assert_eq!(rgba("hsl(0, 100%, 50%)"), [255., 0., 0., 1.]);
        assert_eq!(rgba("hsla(120, 100%, 50%, 0.25)"), [0., 255., 0., 0.25]);
        assert_eq!(
            parse_color("hsl(219, 79.2%, 66.1%)", ColorModel::Hsla),
            Ok([219., 79.2, 66.1, 1.])
        );
        assert_eq!(
            parse_color("hsl(400, 150%, -5%)", ColorModel::Hsla),
            Ok([360., 100., 0., 1.])
        );

        assert!(!is_valid_color_string("hsl(0, 100, 50)"));
        assert!(!is_valid_color_string("hsl(0%, 100%, 50%)"));
        assert!(!is_valid_color_string("hsla(0, 100%, 50%)"));
    }

    #[test]
    fn parse_color_name() {
        assert_eq!(rgba("red"), [255., 0., 0., 1.]);
        assert_eq!(rgba("cornflowerblue"), [100., 149., 237., 1.]);
        assert_eq!(rgba(" CornflowerBlue\n"), [100., 149., 237., 1.]);

        assert!(!is_valid_color_string("not-a-color"));
        assert!(!is_valid_color_string("cornflower blue"));
        assert!(!is_valid_color_string(""));
    }

    #[test]
    fn convert_to_requested_model() {
        assert_eq!(
            parse_color("red", ColorModel::Hsva),
            Ok([0., 100., 100., 1.])
        );
        assert_eq!(
            parse_color("hsla(0, 100%, 50%, 0.5)", ColorModel::Hsva),
            Ok([0., 100., 100., 0.5])
        );
        assert_eq!(
            parse_color("cornflowerblue", ColorModel::Hsla),
            Ok([219., 79.2, 66.1, 1.])
        );
    }

    #[test]
    fn error_contains_input() {
        let error = parse_color(" nope ", ColorModel::Rgba).unwrap_err();

        assert_eq!(error.input(), " nope ");
        assert_eq!(error.to_string(), "invalid color string: \" nope \"");
    }

    #[test]
    fn numbers_are_read_up_to_the_first_invalid_character() {
        assert_eq!(leading_number("12"), Some(12.));
        assert_eq!(leading_number("-.5"), Some(-0.5));
        assert_eq!(leading_number("5."), Some(5.));
        assert_eq!(leading_number("1.2.3"), Some(1.2));
        assert_eq!(leading_number("50%"), Some(50.));
        assert_eq!(leading_number("-"), None);
        assert_eq!(leading_number("."), None);
        assert_eq!(leading_number("--1"), None);

        assert_eq!(rgba("rgb(1.2.3, 0, 0)"), [1., 0., 0., 1.]);
        assert!(!is_valid_color_string("rgb(-, 0, 0)"));
    }

    #[test]
    fn hex_expansion() {
        assert_eq!(parse_hex("#fa0"), Some([0xff, 0xaa, 0x00]));
        assert_eq!(parse_hex("#123456"), Some([0x12, 0x34, 0x56]));
        assert_eq!(parse_hex("#1234"), None);
        assert_eq!(parse_hex("123"), None);
    }
}
