//! The default encoding rule for every leaf kind.
//!
//! Each rule reproduces the textual shape the Highcharts library expects for
//! one option class. Rules registered here can be replaced per renderer
//! through [JsonRenderer::register].
//!
//! [JsonRenderer::register]: crate::json::JsonRenderer::register

use std::collections::HashMap;

use crate::color::ColorRef;
use crate::color::GradientKind;
use crate::error::EncodeError;
use crate::error::Result;
use crate::json::Encoder;
use crate::json::EncodeRule;
use crate::json::JsonLiteral;
use crate::json::Leaf;
use crate::json::LeafKind;
use crate::json::TokenEnum;
use crate::value::MinorTickInterval;
use crate::value::Symbol;
use crate::value::Unit;

pub(crate) fn defaults() -> HashMap<LeafKind, EncodeRule> {
    let mut rules: HashMap<LeafKind, EncodeRule> = HashMap::new();

    rules.insert(LeafKind::HexColor, Box::new(hex_color));
    rules.insert(LeafKind::RgbaColor, Box::new(rgba_color));
    rules.insert(LeafKind::SimpleColor, Box::new(simple_color));
    rules.insert(LeafKind::NullColor, Box::new(null_color));
    rules.insert(LeafKind::GradientColor, Box::new(gradient_color));
    rules.insert(LeafKind::PixelOrPercent, Box::new(pixel_or_percent));
    rules.insert(LeafKind::Coordinate, Box::new(coordinate));
    rules.insert(LeafKind::Function, Box::new(function));
    rules.insert(LeafKind::Symbol, Box::new(symbol));
    rules.insert(LeafKind::CssStyle, Box::new(css_style));
    rules.insert(LeafKind::DateTimeLabelFormat, Box::new(date_time_label_format));
    rules.insert(LeafKind::MinorTickInterval, Box::new(minor_tick_interval));
    rules.insert(LeafKind::Center, Box::new(center));
    rules.insert(LeafKind::Crosshair, Box::new(crosshair));
    rules.insert(LeafKind::TokenEnum, Box::new(token_enum));
    rules.insert(LeafKind::LiteralEnum, Box::new(literal_enum));

    rules
}

fn unsupported(leaf: &Leaf<'_>, enc: &Encoder<'_>) -> EncodeError {
    EncodeError::UnsupportedVariant {
        path: enc.path(),
        detail: format!("{leaf:?}"),
    }
}

/// A hex color without a brighten factor is a plain quoted string. With a
/// brighten factor it becomes an inline color computation, with the factor
/// always formatted to two decimals and a `.` separator.
fn hex_color(leaf: &Leaf<'_>, enc: &mut Encoder<'_>) -> Result<()> {
    let Leaf::Color(ColorRef::Hex { hex, brighten }) = leaf else {
        return Err(unsupported(leaf, enc));
    };

    match brighten {
        None => enc.string(hex),
        Some(factor) => enc.raw(&format!(
            "Highcharts.Color(\"{hex}\").brighten({factor:.2}).get()"
        )),
    }

    Ok(())
}

fn rgba_color(leaf: &Leaf<'_>, enc: &mut Encoder<'_>) -> Result<()> {
    let Leaf::Color(ColorRef::Rgba {
        red,
        green,
        blue,
        alpha,
    }) = leaf
    else {
        return Err(unsupported(leaf, enc));
    };

    enc.string(&format!("rgba({red},{green},{blue},{alpha})"));
    Ok(())
}

fn simple_color(leaf: &Leaf<'_>, enc: &mut Encoder<'_>) -> Result<()> {
    let Leaf::Color(ColorRef::Simple { red, green, blue }) = leaf else {
        return Err(unsupported(leaf, enc));
    };

    enc.string(&format!("#{red:02x}{green:02x}{blue:02x}"));
    Ok(())
}

/// The explicit "no color" value. It is a real value, not an unset field,
/// and always reaches the output as the `null` sentinel.
fn null_color(leaf: &Leaf<'_>, enc: &mut Encoder<'_>) -> Result<()> {
    let Leaf::Color(ColorRef::Null) = leaf else {
        return Err(unsupported(leaf, enc));
    };

    enc.null();
    Ok(())
}

fn gradient_color(leaf: &Leaf<'_>, enc: &mut Encoder<'_>) -> Result<()> {
    let Leaf::Color(ColorRef::Gradient(gradient)) = leaf else {
        return Err(unsupported(leaf, enc));
    };

    let mut object = enc.object();
    match &gradient.kind {
        GradientKind::Linear(coordinates) => {
            object.field_required("linearGradient", coordinates)?;
        }
        GradientKind::Radial(coordinates) => {
            object.field_required("radialGradient", coordinates)?;
        }
    }
    object.field_list("stops", &gradient.stops)?;
    object.finish()
}

/// A pixel value is a bare number, a percent value is a `"N%"` string.
fn pixel_or_percent(leaf: &Leaf<'_>, enc: &mut Encoder<'_>) -> Result<()> {
    let Leaf::PixelOrPercent(value) = leaf else {
        return Err(unsupported(leaf, enc));
    };

    match value.unit {
        Unit::Pixels => enc.number_i64(i64::from(value.value)),
        Unit::Percent => enc.string(&format!("{}%", value.value)),
    }

    Ok(())
}

/// A coordinate is a raw bracketed list of its components in fixed order.
/// The component count is checked against the arity of the coordinate kind;
/// a mismatch aborts the encoding call.
fn coordinate(leaf: &Leaf<'_>, enc: &mut Encoder<'_>) -> Result<()> {
    let Leaf::Coordinate(coordinate) = leaf else {
        return Err(unsupported(leaf, enc));
    };

    let expected = coordinate.kind.arity();
    let actual = coordinate.components.len();
    if expected != actual {
        return Err(EncodeError::ArityMismatch {
            path: enc.path(),
            expected,
            actual,
        });
    }

    if coordinate.components.iter().any(|c| !c.is_finite()) {
        return Err(EncodeError::NonFiniteNumber { path: enc.path() });
    }

    let components = coordinate
        .components
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    enc.raw(&format!("[{components}]"));
    Ok(())
}

/// A function is an unquoted inline code fragment. The body is embedded
/// verbatim, with no escaping; see the trust note on [Function].
///
/// [Function]: crate::value::Function
fn function(leaf: &Leaf<'_>, enc: &mut Encoder<'_>) -> Result<()> {
    let Leaf::Function(function) = leaf else {
        return Err(unsupported(leaf, enc));
    };

    enc.raw(&format!(
        "function({}) {{ {} }}",
        function.args.join(", "),
        function.body
    ));
    Ok(())
}

fn symbol(leaf: &Leaf<'_>, enc: &mut Encoder<'_>) -> Result<()> {
    let Leaf::Symbol(symbol) = leaf else {
        return Err(unsupported(leaf, enc));
    };

    match symbol {
        Symbol::Predefined(kind) => enc.string(&kind.token()),
        Symbol::Url(url) => enc.string(&format!("url({url})")),
    }

    Ok(())
}

fn css_style(leaf: &Leaf<'_>, enc: &mut Encoder<'_>) -> Result<()> {
    let Leaf::CssStyle(style) = leaf else {
        return Err(unsupported(leaf, enc));
    };

    enc.string(style.value.trim());
    Ok(())
}

fn date_time_label_format(leaf: &Leaf<'_>, enc: &mut Encoder<'_>) -> Result<()> {
    let Leaf::DateTimeLabelFormat(format) = leaf else {
        return Err(unsupported(leaf, enc));
    };

    enc.string(&format.to_library_tokens());
    Ok(())
}

fn minor_tick_interval(leaf: &Leaf<'_>, enc: &mut Encoder<'_>) -> Result<()> {
    let Leaf::MinorTickInterval(interval) = leaf else {
        return Err(unsupported(leaf, enc));
    };

    match interval {
        MinorTickInterval::Auto => enc.string("auto"),
        MinorTickInterval::Interval(value) => enc.number_f64(*value)?,
        MinorTickInterval::Null => enc.null(),
    }

    Ok(())
}

/// A center is a fixed two-element array of pixel-or-percent values,
/// written inline.
fn center(leaf: &Leaf<'_>, enc: &mut Encoder<'_>) -> Result<()> {
    let Leaf::Center(center) = leaf else {
        return Err(unsupported(leaf, enc));
    };

    enc.raw("[");
    enc.leaf(Leaf::PixelOrPercent(&center.x))?;
    enc.raw(", ");
    enc.leaf(Leaf::PixelOrPercent(&center.y))?;
    enc.raw("]");
    Ok(())
}

/// A crosshair with no fields set is the bare `true` toggle; otherwise it is
/// an object of the set fields.
fn crosshair(leaf: &Leaf<'_>, enc: &mut Encoder<'_>) -> Result<()> {
    let Leaf::Crosshair(crosshair) = leaf else {
        return Err(unsupported(leaf, enc));
    };

    if crosshair.is_empty() {
        enc.bool(true);
        return Ok(());
    }

    let mut object = enc.object();
    object.field("width", &crosshair.width)?;
    object.field("color", &crosshair.color)?;
    object.field("dashStyle", &crosshair.dash_style)?;
    object.field("zIndex", &crosshair.z_index)?;
    object.finish()
}

fn token_enum(leaf: &Leaf<'_>, enc: &mut Encoder<'_>) -> Result<()> {
    let Leaf::Token(token) = leaf else {
        return Err(unsupported(leaf, enc));
    };

    enc.string(&token.token());
    Ok(())
}

fn literal_enum(leaf: &Leaf<'_>, enc: &mut Encoder<'_>) -> Result<()> {
    let Leaf::Literal(literal) = leaf else {
        return Err(unsupported(leaf, enc));
    };

    match literal.literal() {
        JsonLiteral::Str(value) => enc.string(value),
        JsonLiteral::Int(value) => enc.number_i64(value),
    }

    Ok(())
}
