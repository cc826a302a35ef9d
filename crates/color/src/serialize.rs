//! Turns [Components] back into color strings.

use crate::{convert::normalize, parse_color, ColorFormat, ColorModel, Components, InvalidColor};

/// Serialize the components of a color in `model` as `format`
///
/// # Example
/// ```
/// # use color::{serialize_color, ColorFormat, ColorModel};
/// let red = [255., 0., 0., 1.];
///
/// assert_eq!(serialize_color(red, ColorModel::Rgba, ColorFormat::Hex), "#ff0000");
/// assert_eq!(serialize_color(red, ColorModel::Rgba, ColorFormat::Hsl), "hsl(0, 100%, 50%)");
/// ```
#[must_use]
pub fn serialize_color(components: Components, model: ColorModel, format: ColorFormat) -> String {
    let [first, second, third, alpha] = model.convert(components, format.implied_model());

    match format {
        ColorFormat::Rgb => format!("rgb({first}, {second}, {third})"),
        ColorFormat::Rgba => format!("rgba({first}, {second}, {third}, {alpha})"),
        ColorFormat::RgbPercent => {
            let [r, g, b] = rgb_percentages(components, model, [first, second, third]);
            format!("rgb({r}%, {g}%, {b}%)")
        },
        ColorFormat::RgbaPercent => {
            let [r, g, b] = rgb_percentages(components, model, [first, second, third]);
            format!("rgba({r}%, {g}%, {b}%, {alpha})")
        },
        ColorFormat::Hex => {
            // Normalized channels are integers in 0..=255, so the casts are lossless
            format!(
                "#{:02x}{:02x}{:02x}",
                first as u8, second as u8, third as u8
            )
        },
        ColorFormat::Hsl => format!("hsl({first}, {second}%, {third}%)"),
        ColorFormat::Hsla => format!("hsla({first}, {second}%, {third}%, {alpha})"),
    }
}

/// RGB input is not rounded to integer channels before being turned into percentages
fn rgb_percentages(components: Components, model: ColorModel, converted: [f64; 3]) -> [f64; 3] {
    let channels = match model {
        ColorModel::Rgba => [components[0], components[1], components[2]],
        ColorModel::Hsla | ColorModel::Hsva => converted,
    };

    channels.map(|channel| normalize(channel / 255. * 100., 0., 100., 1))
}

/// Reformat a color string as `format`
///
/// # Example
/// ```
/// # use color::{format_color_string, ColorFormat};
/// assert_eq!(
///     format_color_string("cornflowerblue", ColorFormat::Rgb).unwrap(),
///     "rgb(100, 149, 237)"
/// );
/// ```
pub fn format_color_string(text: &str, format: ColorFormat) -> Result<String, InvalidColor> {
    let model = format.implied_model();
    let components = parse_color(text, model)?;

    Ok(serialize_color(components, model, format))
}

#[cfg(test)]
mod tests {
    use super::{format_color_string, serialize_color};
    use crate::{ColorFormat, ColorModel};

    #[test]
    fn rgb_family() {
        let color = [255., 128., 0., 0.5];

        assert_eq!(
            serialize_color(color, ColorModel::Rgba, ColorFormat::Rgb),
            "rgb(255, 128, 0)"
        );
        assert_eq!(
            serialize_color(color, ColorModel::Rgba, ColorFormat::Rgba),
            "rgba(255, 128, 0, 0.5)"
        );
        assert_eq!(
            serialize_color(color, ColorModel::Rgba, ColorFormat::RgbPercent),
            "rgb(100%, 50.2%, 0%)"
        );
        assert_eq!(
            serialize_color(color, ColorModel::Rgba, ColorFormat::RgbaPercent),
            "rgba(100%, 50.2%, 0%, 0.5)"
        );
        assert_eq!(
            serialize_color(color, ColorModel::Rgba, ColorFormat::Hex),
            "#ff8000"
        );
    }

    #[test]
    fn percentages_use_unrounded_channels() {
        assert_eq!(
            serialize_color([127.6, 0., 0., 1.], ColorModel::Rgba, ColorFormat::RgbPercent),
            "rgb(50%, 0%, 0%)"
        );
        assert_eq!(
            serialize_color([300., -4., 63.9, 0.5], ColorModel::Rgba, ColorFormat::RgbaPercent),
            "rgba(100%, 0%, 25.1%, 0.5)"
        );
    }

    #[test]
    fn not_a_number_is_normalized() {
        assert_eq!(
            serialize_color([0., 0., 0., f64::NAN], ColorModel::Rgba, ColorFormat::Rgba),
            "rgba(0, 0, 0, 0)"
        );
    }

    #[test]
    fn hex_is_zero_padded() {
        assert_eq!(
            serialize_color([1., 2., 3., 1.], ColorModel::Rgba, ColorFormat::Hex),
            "#010203"
        );
        assert_eq!(
            serialize_color([0., 0., 0., 0.], ColorModel::Rgba, ColorFormat::Hex),
            "#000000"
        );
    }

    #[test]
    fn out_of_range_input_is_normalized() {
        assert_eq!(
            serialize_color([300., -1., 12.4, 1.5], ColorModel::Rgba, ColorFormat::Rgba),
            "rgba(255, 0, 12, 1)"
        );
    }

    #[test]
    fn convert_before_serializing() {
        assert_eq!(
            serialize_color([0., 100., 50., 0.5], ColorModel::Hsla, ColorFormat::Rgba),
            "rgba(255, 0, 0, 0.5)"
        );
        assert_eq!(
            serialize_color([240., 100., 100., 1.], ColorModel::Hsva, ColorFormat::Hex),
            "#0000ff"
        );
        assert_eq!(
            serialize_color([240., 100., 100., 1.], ColorModel::Hsva, ColorFormat::Hsl),
            "hsl(240, 100%, 50%)"
        );
        assert_eq!(
            serialize_color([100., 149., 237., 0.8], ColorModel::Rgba, ColorFormat::Hsla),
            "hsla(219, 79.2%, 66.1%, 0.8)"
        );
    }

    #[test]
    fn reformat_color_strings() {
        assert_eq!(
            format_color_string("red", ColorFormat::Hsl).unwrap(),
            "hsl(0, 100%, 50%)"
        );
        assert_eq!(
            format_color_string("#FFF", ColorFormat::Rgba).unwrap(),
            "rgba(255, 255, 255, 1)"
        );
        assert_eq!(
            format_color_string("hsla(120, 100%, 25%, 0.5)", ColorFormat::Hsla).unwrap(),
            "hsla(120, 100%, 25%, 0.5)"
        );
        assert_eq!(
            format_color_string("rgb(100%, 0%, 0%)", ColorFormat::RgbPercent).unwrap(),
            "rgb(100%, 0%, 0%)"
        );
        assert!(format_color_string("blurple", ColorFormat::Hex).is_err());
    }
}
