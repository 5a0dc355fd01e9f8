//! Axis configuration.

use crate::color::ColorRef;
use crate::error::Result;
use crate::id::Id;
use crate::json::Encode;
use crate::json::Encoder;
use crate::json::token_enum;
use crate::value::Crosshair;
use crate::value::CssStyle;
use crate::value::Function;
use crate::value::MinorTickInterval;
use crate::value::Weekday;

token_enum! {
    /// The axis scale types.
    pub enum AxisType {
        Linear,
        Logarithmic,
        Datetime,
        Category,
    }
}

/// One x or y axis.
///
/// The `chartson_id` is assigned at construction and used only by the lookup
/// functions; it never reaches the JSON output.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub chartson_id: Id,
    pub title: Option<AxisTitle>,
    pub axis_type: Option<AxisType>,
    pub categories: Vec<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub tick_interval: Option<f64>,
    pub minor_tick_interval: Option<MinorTickInterval>,
    pub labels: Option<AxisLabels>,
    pub opposite: Option<bool>,
    pub crosshair: Option<Crosshair>,
    pub start_of_week: Option<Weekday>,
    pub line_width: Option<u32>,
    pub line_color: Option<ColorRef>,
}

impl Axis {
    pub fn new() -> Axis {
        Self {
            chartson_id: Id::next(),
            title: None,
            axis_type: None,
            categories: Vec::new(),
            min: None,
            max: None,
            tick_interval: None,
            minor_tick_interval: None,
            labels: None,
            opposite: None,
            crosshair: None,
            start_of_week: None,
            line_width: None,
            line_color: None,
        }
    }
}

impl Default for Axis {
    fn default() -> Self {
        Self::new()
    }
}

impl Encode for Axis {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        let mut object = enc.object();
        object.field("title", &self.title)?;
        object.field("type", &self.axis_type)?;
        object.field_list("categories", &self.categories)?;
        object.field("min", &self.min)?;
        object.field("max", &self.max)?;
        object.field("tickInterval", &self.tick_interval)?;
        object.field("minorTickInterval", &self.minor_tick_interval)?;
        object.field("labels", &self.labels)?;
        object.field("opposite", &self.opposite)?;
        object.field("crosshair", &self.crosshair)?;
        object.field("startOfWeek", &self.start_of_week)?;
        object.field("lineWidth", &self.line_width)?;
        object.field("lineColor", &self.line_color)?;
        object.finish()
    }
}

/// The title of an axis.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisTitle {
    pub text: Option<String>,
    pub style: Option<CssStyle>,
}

impl AxisTitle {
    pub fn text(text: impl Into<String>) -> AxisTitle {
        Self {
            text: Some(text.into()),
            style: None,
        }
    }
}

impl Encode for AxisTitle {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        let mut object = enc.object();
        object.field("text", &self.text)?;
        object.field("style", &self.style)?;
        object.finish()
    }
}

/// The tick labels of an axis.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisLabels {
    pub enabled: Option<bool>,
    pub formatter: Option<Function>,
    pub rotation: Option<i32>,
    pub style: Option<CssStyle>,
}

impl Encode for AxisLabels {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        let mut object = enc.object();
        object.field("enabled", &self.enabled)?;
        object.field("formatter", &self.formatter)?;
        object.field("rotation", &self.rotation)?;
        object.field("style", &self.style)?;
        object.finish()
    }
}
