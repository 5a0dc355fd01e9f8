//! Color values accepted by chart options.
//!
//! A [ColorRef] is exactly one of a fixed set of variants, each with its own
//! JSON encoding. [ColorRef::Null] is a real value meaning "render no color";
//! it is distinct from leaving a color field unset, which omits the field
//! from the output entirely.

use crate::error::Result;
use crate::json::Encode;
use crate::json::Encoder;
use crate::json::Leaf;

/// A reference to a color, in one of the shapes the charting
/// library understands.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorRef {
    /// A hex color string, optionally brightened by the chart library
    /// at render time.
    Hex {
        /// The hex color, including the leading `#`.
        hex: String,
        /// The brighten factor passed to the library's color computation.
        brighten: Option<f32>,
    },

    /// A color with explicit red, green, blue and alpha channels.
    Rgba {
        red: u8,
        green: u8,
        blue: u8,
        alpha: f32,
    },

    /// A plain RGB color, encoded as a `#rrggbb` string.
    Simple { red: u8, green: u8, blue: u8 },

    /// The explicit "no color" value.
    Null,

    /// A gradient between color stops.
    Gradient(Gradient),
}

impl ColorRef {
    pub const WHITE: ColorRef = ColorRef::Simple {
        red: 255,
        green: 255,
        blue: 255,
    };

    pub const BLACK: ColorRef = ColorRef::Simple {
        red: 0,
        green: 0,
        blue: 0,
    };

    pub const RED: ColorRef = ColorRef::Simple {
        red: 255,
        green: 0,
        blue: 0,
    };

    pub const GREEN: ColorRef = ColorRef::Simple {
        red: 0,
        green: 255,
        blue: 0,
    };

    pub const BLUE: ColorRef = ColorRef::Simple {
        red: 0,
        green: 0,
        blue: 255,
    };

    pub fn hex(hex: impl Into<String>) -> ColorRef {
        ColorRef::Hex {
            hex: hex.into(),
            brighten: None,
        }
    }

    pub fn hex_brightened(hex: impl Into<String>, brighten: f32) -> ColorRef {
        ColorRef::Hex {
            hex: hex.into(),
            brighten: Some(brighten),
        }
    }

    pub fn rgba(red: u8, green: u8, blue: u8, alpha: f32) -> ColorRef {
        ColorRef::Rgba {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub fn simple(red: u8, green: u8, blue: u8) -> ColorRef {
        ColorRef::Simple { red, green, blue }
    }
}

impl Encode for ColorRef {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        enc.leaf(Leaf::Color(self))
    }
}

/// A gradient color definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub kind: GradientKind,
    pub stops: Vec<Stop>,
}

impl Gradient {
    pub fn linear(coordinates: LinearGradient, stops: Vec<Stop>) -> Gradient {
        Self {
            kind: GradientKind::Linear(coordinates),
            stops,
        }
    }

    pub fn radial(coordinates: RadialGradient, stops: Vec<Stop>) -> Gradient {
        Self {
            kind: GradientKind::Radial(coordinates),
            stops,
        }
    }
}

/// The direction description of a gradient.
#[derive(Debug, Clone, PartialEq)]
pub enum GradientKind {
    Linear(LinearGradient),
    Radial(RadialGradient),
}

/// The start and end of a linear gradient, in relative coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGradient {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Encode for LinearGradient {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        let mut object = enc.object();
        object.field_required("x1", &self.x1)?;
        object.field_required("y1", &self.y1)?;
        object.field_required("x2", &self.x2)?;
        object.field_required("y2", &self.y2)?;
        object.finish()
    }
}

/// The center and radius of a radial gradient, in relative coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialGradient {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

impl Encode for RadialGradient {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        let mut object = enc.object();
        object.field_required("cx", &self.cx)?;
        object.field_required("cy", &self.cy)?;
        object.field_required("r", &self.r)?;
        object.finish()
    }
}

/// One gradient stop, encoded as a `[position, color]` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub position: f64,
    pub color: ColorRef,
}

impl Stop {
    pub fn new(position: f64, color: ColorRef) -> Stop {
        Self { position, color }
    }
}

impl Encode for Stop {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        let mut array = enc.array();
        array.element(&self.position)?;
        array.element(&self.color)?;
        array.finish()
    }
}
