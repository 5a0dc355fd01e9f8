//! Encoding of an options tree into the JSON configuration format expected
//! by the Highcharts browser library.
//!
//! The output is not always strict JSON: some values are inline JavaScript
//! fragments (function bodies, color computations) that the browser library
//! expects to find unquoted. This is why encoding is done by a dedicated
//! [Encode] walk instead of a serde serializer.
//!
//! Composite option objects encode structurally, field by field, omitting
//! unset fields. Leaf values dispatch through the rule table held by a
//! [JsonRenderer]; a caller can replace the rule for any [LeafKind] to adapt
//! the output to a different host environment.

mod encoder;
mod rules;
mod write;

use std::collections::HashMap;
use std::fmt::Debug;

use serde::de::DeserializeOwned;

use crate::color::ColorRef;
use crate::error::DecodeError;
use crate::error::Result;
use crate::series::Coordinate;
use crate::value::Center;
use crate::value::Crosshair;
use crate::value::CssStyle;
use crate::value::DateTimeLabelFormat;
use crate::value::Function;
use crate::value::MinorTickInterval;
use crate::value::PixelOrPercent;
use crate::value::Symbol;

pub use crate::json::encoder::ArrayEncoder;
pub use crate::json::encoder::Encoder;
pub use crate::json::encoder::ObjectEncoder;

/// A value that can be written into the JSON output.
pub trait Encode {
    /// Writes this value at the encoder's current value position.
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()>;
}

/// The family of enumerations that encode as their lowercased variant name,
/// always as a quoted string.
pub trait TokenEnum: Debug {
    /// Returns the variant name as written in the source.
    fn name(&self) -> &'static str;

    /// Returns the lowercased token this variant encodes to.
    fn token(&self) -> String {
        self.name().to_lowercase()
    }
}

/// The family of enumerations that encode as an author-assigned literal,
/// which may be a string or a number.
pub trait LiteralEnum: Debug {
    /// Returns the literal assigned to this variant.
    fn literal(&self) -> JsonLiteral;
}

/// The literal assigned to a [LiteralEnum] variant.
///
/// A string literal stays quoted in the output; a numeric literal stays bare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonLiteral {
    /// A quoted string literal, emitted verbatim between quotes.
    Str(&'static str),
    /// A bare numeric literal.
    Int(i64),
}

/// A borrowed leaf value on its way to an encoding rule.
#[derive(Debug, Clone, Copy)]
pub enum Leaf<'a> {
    Color(&'a ColorRef),
    PixelOrPercent(&'a PixelOrPercent),
    Coordinate(&'a Coordinate),
    Function(&'a Function),
    Symbol(&'a Symbol),
    CssStyle(&'a CssStyle),
    DateTimeLabelFormat(&'a DateTimeLabelFormat),
    MinorTickInterval(&'a MinorTickInterval),
    Center(&'a Center),
    Crosshair(&'a Crosshair),
    Token(&'a dyn TokenEnum),
    Literal(&'a dyn LiteralEnum),
}

impl Leaf<'_> {
    /// Returns the discriminant the rule table is keyed by.
    pub fn kind(&self) -> LeafKind {
        match self {
            Leaf::Color(color) => match color {
                ColorRef::Hex { .. } => LeafKind::HexColor,
                ColorRef::Rgba { .. } => LeafKind::RgbaColor,
                ColorRef::Simple { .. } => LeafKind::SimpleColor,
                ColorRef::Null => LeafKind::NullColor,
                ColorRef::Gradient(_) => LeafKind::GradientColor,
            },
            Leaf::PixelOrPercent(_) => LeafKind::PixelOrPercent,
            Leaf::Coordinate(_) => LeafKind::Coordinate,
            Leaf::Function(_) => LeafKind::Function,
            Leaf::Symbol(_) => LeafKind::Symbol,
            Leaf::CssStyle(_) => LeafKind::CssStyle,
            Leaf::DateTimeLabelFormat(_) => LeafKind::DateTimeLabelFormat,
            Leaf::MinorTickInterval(_) => LeafKind::MinorTickInterval,
            Leaf::Center(_) => LeafKind::Center,
            Leaf::Crosshair(_) => LeafKind::Crosshair,
            Leaf::Token(_) => LeafKind::TokenEnum,
            Leaf::Literal(_) => LeafKind::LiteralEnum,
        }
    }
}

/// The discriminant identifying one encoding rule in the rule table.
///
/// The color variants are separate kinds so that each can be replaced
/// independently, mirroring the per-type registration of the original
/// library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafKind {
    HexColor,
    RgbaColor,
    SimpleColor,
    NullColor,
    GradientColor,
    PixelOrPercent,
    Coordinate,
    Function,
    Symbol,
    CssStyle,
    DateTimeLabelFormat,
    MinorTickInterval,
    Center,
    Crosshair,
    TokenEnum,
    LiteralEnum,
}

/// An encoding rule for one leaf kind.
///
/// A rule writes the leaf at the encoder's current value position. It may
/// recurse into nested values through the encoder, and it fails with
/// [EncodeError::UnsupportedVariant] when handed a leaf it does not handle.
///
/// [EncodeError::UnsupportedVariant]: crate::error::EncodeError::UnsupportedVariant
pub type EncodeRule = Box<dyn Fn(&Leaf<'_>, &mut Encoder<'_>) -> Result<()> + Send + Sync>;

/// A renderer turning option objects into indented JSON documents.
///
/// A renderer owns its rule table. [JsonRenderer::register] replaces the rule
/// for one leaf kind; because registration needs `&mut self`, no encoding
/// call can observe a partially updated table.
pub struct JsonRenderer {
    rules: HashMap<LeafKind, EncodeRule>,
}

impl JsonRenderer {
    /// Creates a renderer with the default rule for every leaf kind
    /// installed.
    pub fn new() -> JsonRenderer {
        Self {
            rules: rules::defaults(),
        }
    }

    /// Replaces the encoding rule for the given leaf kind.
    ///
    /// This is the hook for host environments that need a different textual
    /// shape for some option class, for example another wrapping syntax for
    /// inline functions.
    pub fn register(&mut self, kind: LeafKind, rule: EncodeRule) {
        self.rules.insert(kind, rule);
    }

    /// Encodes a value into an indented JSON document.
    ///
    /// Encoding is a pure function of the value: encoding the same unmutated
    /// tree twice yields byte-identical output. Any rule failure aborts the
    /// whole call and no partial output is returned.
    pub fn to_json<T: Encode + ?Sized>(&self, value: &T) -> Result<String> {
        let mut enc = Encoder::new(self);
        value.encode(&mut enc)?;

        Ok(enc.into_string())
    }

    pub(crate) fn rule(&self, kind: LeafKind) -> Option<&EncodeRule> {
        self.rules.get(&kind)
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Decodes an inbound JSON event payload into a typed container.
///
/// Only the small event shapes sent back by a rendered chart are supported;
/// there is deliberately no decoder for a full options tree.
pub fn from_json<T: DeserializeOwned>(json: &str) -> std::result::Result<T, DecodeError> {
    Ok(serde_json::from_str(json)?)
}

/// Defines an enumeration belonging to the lowercase-token family.
macro_rules! token_enum {
    ($(#[$meta:meta])* $vis:vis enum $name:ident { $($(#[$vmeta:meta])* $variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $crate::json::TokenEnum for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }

        impl $crate::json::Encode for $name {
            fn encode(&self, enc: &mut $crate::json::Encoder<'_>) -> $crate::error::Result<()> {
                enc.leaf($crate::json::Leaf::Token(self))
            }
        }
    };
}

pub(crate) use token_enum;

impl Encode for f64 {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        enc.number_f64(*self)
    }
}

impl Encode for i32 {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        enc.number_i64(i64::from(*self));
        Ok(())
    }
}

impl Encode for u32 {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        enc.number_i64(i64::from(*self));
        Ok(())
    }
}

impl Encode for i64 {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        enc.number_i64(*self);
        Ok(())
    }
}

impl Encode for usize {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        enc.number_i64(*self as i64);
        Ok(())
    }
}

impl Encode for bool {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        enc.bool(*self);
        Ok(())
    }
}

impl Encode for str {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        enc.string(self);
        Ok(())
    }
}

impl Encode for String {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        enc.string(self);
        Ok(())
    }
}

impl<T: Encode> Encode for [T] {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        let mut array = enc.array();
        for element in self {
            array.element(element)?;
        }

        array.finish()
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        self.as_slice().encode(enc)
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        self.as_ref().encode(enc)
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        (*self).encode(enc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::axis::Axis;
    use crate::axis::AxisType;
    use crate::error::EncodeError;
    use crate::options::Options;
    use crate::options::Title;
    use crate::series::Coordinate;
    use crate::series::CoordinateKind;
    use crate::series::DataPoint;
    use crate::series::Series;
    use crate::series::SeriesType;
    use crate::value::PixelOrPercent;

    fn line_chart() -> Options {
        let mut options = Options::new();
        options.chart_mut().render_to = Some(String::from("mount"));
        options.chart_mut().chart_type = Some(SeriesType::Line);
        options.title = Some(Title::text("Reservoir levels"));
        options.x_axis = vec![Axis {
            axis_type: Some(AxisType::Datetime),
            ..Axis::default()
        }];
        options.series = vec![Series {
            name: Some(String::from("Level")),
            data: vec![
                DataPoint::Coordinate(Coordinate::pair(1.0, 2.0)),
                DataPoint::Number(3.5),
            ],
            ..Series::default()
        }];

        options
    }

    #[test]
    fn encodes_a_tree_with_unset_fields_omitted() {
        let options = line_chart();

        let json = JsonRenderer::new().to_json(&options).unwrap();

        let expected = r#"{
  "chart": {
    "renderTo": "mount",
    "type": "line"
  },
  "title": {
    "text": "Reservoir levels"
  },
  "xAxis": [
    {
      "type": "datetime"
    }
  ],
  "series": [
    {
      "name": "Level",
      "data": [
        [1, 2],
        3.5
      ]
    }
  ]
}"#;
        assert_eq!(expected, json);
    }

    #[test]
    fn an_empty_tree_is_an_empty_object() {
        let json = JsonRenderer::new().to_json(&Options::new()).unwrap();

        assert_eq!("{}", json);
    }

    #[test]
    fn encoding_is_idempotent() {
        let renderer = JsonRenderer::new();
        let options = line_chart();

        let first = renderer.to_json(&options).unwrap();
        let second = renderer.to_json(&options).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn a_registered_rule_replaces_the_default() {
        let mut renderer = JsonRenderer::new();
        renderer.register(
            LeafKind::Function,
            Box::new(|leaf, enc| {
                let Leaf::Function(function) = leaf else {
                    unreachable!();
                };

                enc.raw(&format!("new Handler(\"{}\")", function.body));
                Ok(())
            }),
        );

        let function = crate::value::Function::new("go");
        let json = renderer.to_json(&function).unwrap();

        assert_eq!("new Handler(\"go\")", json);
    }

    #[test]
    fn encoding_failures_name_the_field_path() {
        let mut options = line_chart();
        options.series[0].data[1] =
            DataPoint::Coordinate(Coordinate::from_components(CoordinateKind::Pair, vec![1.0]));

        let error = JsonRenderer::new().to_json(&options).unwrap_err();

        assert_eq!(
            EncodeError::ArityMismatch {
                path: String::from("$.series[0].data[1]"),
                expected: 2,
                actual: 1,
            },
            error
        );
    }

    #[test]
    fn a_mismatched_rule_fails_with_the_field_path() {
        let mut renderer = JsonRenderer::new();
        // A replacement rule that only understands functions, installed for
        // the pixel-or-percent kind.
        renderer.register(
            LeafKind::PixelOrPercent,
            Box::new(|leaf, enc| match leaf {
                Leaf::Function(function) => {
                    enc.raw(&function.body);
                    Ok(())
                }
                other => Err(EncodeError::UnsupportedVariant {
                    path: enc.path(),
                    detail: format!("{other:?}"),
                }),
            }),
        );

        let mut options = Options::new();
        options
            .plot_options_mut()
            .get_or_create(SeriesType::Pie)
            .size = Some(PixelOrPercent::percent(80));

        let error = renderer.to_json(&options).unwrap_err();

        match error {
            EncodeError::UnsupportedVariant { path, .. } => {
                assert_eq!("$.plotOptions.pie.size", path);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn decodes_a_known_event_shape() {
        #[derive(serde::Deserialize)]
        struct Payload {
            min: f64,
        }

        let payload: Payload = from_json("{\"min\": 1.5}").unwrap();

        assert_eq!(1.5, payload.min);
    }

    #[test]
    fn a_malformed_payload_is_a_decode_error() {
        #[derive(Debug, serde::Deserialize)]
        struct Payload {
            #[allow(dead_code)]
            min: f64,
        }

        let result = from_json::<Payload>("{\"min\": ");

        assert!(result.is_err());
    }
}
