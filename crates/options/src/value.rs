//! Small leaf value types shared across the option model.

use crate::color::ColorRef;
use crate::error::Result;
use crate::json::Encode;
use crate::json::Encoder;
use crate::json::JsonLiteral;
use crate::json::Leaf;
use crate::json::LiteralEnum;
use crate::json::token_enum;

/// A length that is either an absolute pixel count or a percentage of the
/// surrounding box.
///
/// A pixel value encodes as a bare number, a percent value as a `"N%"`
/// string; no other representation exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelOrPercent {
    pub value: i32,
    pub unit: Unit,
}

impl PixelOrPercent {
    pub fn pixels(value: i32) -> PixelOrPercent {
        Self {
            value,
            unit: Unit::Pixels,
        }
    }

    pub fn percent(value: i32) -> PixelOrPercent {
        Self {
            value,
            unit: Unit::Percent,
        }
    }
}

impl Encode for PixelOrPercent {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        enc.leaf(Leaf::PixelOrPercent(self))
    }
}

/// The unit tag of a [PixelOrPercent] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Pixels,
    Percent,
}

/// A literal JavaScript function.
///
/// The body is embedded in the output verbatim, unquoted and unescaped: the
/// configuration author is trusted. Never build a function body from end-user
/// input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Function {
    pub args: Vec<String>,
    pub body: String,
}

impl Function {
    pub fn new(body: impl Into<String>) -> Function {
        Self {
            args: Vec::new(),
            body: body.into(),
        }
    }

    pub fn with_args(args: &[&str], body: impl Into<String>) -> Function {
        Self {
            args: args.iter().map(|a| String::from(*a)).collect(),
            body: body.into(),
        }
    }
}

impl Encode for Function {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        enc.leaf(Leaf::Function(self))
    }
}

/// A marker symbol: one of the predefined shapes or an image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbol {
    Predefined(SymbolKind),
    Url(String),
}

impl Encode for Symbol {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        enc.leaf(Leaf::Symbol(self))
    }
}

token_enum! {
    /// The predefined marker shapes.
    pub enum SymbolKind {
        Circle,
        Square,
        Diamond,
        Triangle,
        TriangleDown,
    }
}

/// A CSS declaration list, encoded as one quoted string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssStyle {
    pub value: String,
}

impl CssStyle {
    pub fn new(value: impl Into<String>) -> CssStyle {
        Self {
            value: value.into(),
        }
    }
}

impl Encode for CssStyle {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        enc.leaf(Leaf::CssStyle(self))
    }
}

/// A date format pattern written with readable tokens.
///
/// Encoding substitutes each readable token with the `%`-token the charting
/// library uses, for example `YYYY-MM-DD` becomes `%Y-%m-%d`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeLabelFormat {
    pub pattern: String,
}

impl DateTimeLabelFormat {
    /// Substitution pairs, ordered so that longer tokens are replaced first.
    const TOKENS: [(&str, &str); 9] = [
        ("YYYY", "%Y"),
        ("YY", "%y"),
        ("MM", "%m"),
        ("DD", "%d"),
        ("HH", "%H"),
        ("mm", "%M"),
        ("ss", "%S"),
        ("EEEE", "%A"),
        ("EEE", "%a"),
    ];

    pub fn new(pattern: impl Into<String>) -> DateTimeLabelFormat {
        Self {
            pattern: pattern.into(),
        }
    }

    pub(crate) fn to_library_tokens(&self) -> String {
        let mut pattern = self.pattern.clone();
        for (token, replacement) in Self::TOKENS {
            pattern = pattern.replace(token, replacement);
        }

        pattern
    }
}

impl Encode for DateTimeLabelFormat {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        enc.leaf(Leaf::DateTimeLabelFormat(self))
    }
}

/// The interval of minor axis ticks: automatic, a fixed interval, or none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MinorTickInterval {
    Auto,
    Interval(f64),
    Null,
}

impl Encode for MinorTickInterval {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        enc.leaf(Leaf::MinorTickInterval(self))
    }
}

/// The center of a pie or gauge, encoded as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Center {
    pub x: PixelOrPercent,
    pub y: PixelOrPercent,
}

impl Center {
    pub fn new(x: PixelOrPercent, y: PixelOrPercent) -> Center {
        Self { x, y }
    }
}

impl Encode for Center {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        enc.leaf(Leaf::Center(self))
    }
}

/// An axis crosshair.
///
/// With no fields set it encodes as the bare `true` toggle, otherwise as an
/// object holding the set fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Crosshair {
    pub width: Option<u32>,
    pub color: Option<ColorRef>,
    pub dash_style: Option<DashStyle>,
    pub z_index: Option<u32>,
}

impl Crosshair {
    pub(crate) fn is_empty(&self) -> bool {
        self.width.is_none()
            && self.color.is_none()
            && self.dash_style.is_none()
            && self.z_index.is_none()
    }
}

impl Encode for Crosshair {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        enc.leaf(Leaf::Crosshair(self))
    }
}

/// Line dash styles.
///
/// The library expects these tokens in mixed case, so the variants carry
/// explicit string literals instead of lowercased names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashStyle {
    Solid,
    ShortDash,
    ShortDot,
    ShortDashDot,
    ShortDashDotDot,
    Dot,
    Dash,
    LongDash,
    DashDot,
    LongDashDot,
    LongDashDotDot,
}

impl LiteralEnum for DashStyle {
    fn literal(&self) -> JsonLiteral {
        let literal = match self {
            DashStyle::Solid => "Solid",
            DashStyle::ShortDash => "ShortDash",
            DashStyle::ShortDot => "ShortDot",
            DashStyle::ShortDashDot => "ShortDashDot",
            DashStyle::ShortDashDotDot => "ShortDashDotDot",
            DashStyle::Dot => "Dot",
            DashStyle::Dash => "Dash",
            DashStyle::LongDash => "LongDash",
            DashStyle::DashDot => "DashDot",
            DashStyle::LongDashDot => "LongDashDot",
            DashStyle::LongDashDotDot => "LongDashDotDot",
        };

        JsonLiteral::Str(literal)
    }
}

impl Encode for DashStyle {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        enc.leaf(Leaf::Literal(self))
    }
}

/// Days of the week, encoded as the numeric codes the library expects
/// for `startOfWeek`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl LiteralEnum for Weekday {
    fn literal(&self) -> JsonLiteral {
        let code = match self {
            Weekday::Sunday => 0,
            Weekday::Monday => 1,
            Weekday::Tuesday => 2,
            Weekday::Wednesday => 3,
            Weekday::Thursday => 4,
            Weekday::Friday => 5,
            Weekday::Saturday => 6,
        };

        JsonLiteral::Int(code)
    }
}

impl Encode for Weekday {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        enc.leaf(Leaf::Literal(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_format_substitution_replaces_longer_tokens_first() {
        let format = DateTimeLabelFormat::new("EEEE, YYYY (YY)");

        assert_eq!("%A, %Y (%y)", format.to_library_tokens());
    }

    #[test]
    fn unit_tag_is_preserved_by_construction() {
        assert_eq!(Unit::Pixels, PixelOrPercent::pixels(10).unit);
        assert_eq!(Unit::Percent, PixelOrPercent::percent(10).unit);
    }
}
