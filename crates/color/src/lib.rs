//! Parsing, serialization and conversion of CSS color strings.
//!
//! Colors are represented as four [Components], whose meaning is given by a [ColorModel].
//! Every tuple handed out by this crate is clamped to the range of its model and rounded
//! to the models precision.
//!
//! ```
//! # use color::{format_color_string, parse_color, ColorFormat, ColorModel};
//! let components = parse_color("hsl(0, 100%, 50%)", ColorModel::Rgba).unwrap();
//! assert_eq!(components, [255., 0., 0., 1.]);
//!
//! let hex = format_color_string("rgb(100, 149, 237)", ColorFormat::Hex).unwrap();
//! assert_eq!(hex, "#6495ed");
//! ```

pub mod convert;
mod model;
pub mod named;
mod parser;
pub mod scanner;
mod serialize;
pub mod tokenizer;

pub use model::{Color, ColorFormat, ColorModel, Components, UnknownVariant};
pub use parser::{is_valid_color_string, parse_color, InvalidColor};
pub use serialize::{format_color_string, serialize_color};
pub use tokenizer::{tokenize_color, Token, TokenKind};
