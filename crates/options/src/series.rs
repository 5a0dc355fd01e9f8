//! Series, data points and coordinates.

use crate::color::ColorRef;
use crate::error::Result;
use crate::id::Id;
use crate::json::Encode;
use crate::json::Encoder;
use crate::json::Leaf;
use crate::json::token_enum;
use crate::options::Options;
use crate::value::Symbol;

token_enum! {
    /// The series types this model knows about.
    pub enum SeriesType {
        Line,
        Spline,
        Area,
        Areaspline,
        Arearange,
        Areasplinerange,
        Column,
        Columnrange,
        Bar,
        Pie,
        Scatter,
        Bubble,
        Gauge,
        Boxplot,
        Errorbar,
        Waterfall,
        Funnel,
        Pyramid,
        Heatmap,
    }
}

impl SeriesType {
    /// Classifies this series type by the script file family it needs in
    /// the browser.
    pub fn chart_type(&self) -> ChartType {
        match self {
            SeriesType::Arearange
            | SeriesType::Areasplinerange
            | SeriesType::Columnrange
            | SeriesType::Bubble
            | SeriesType::Gauge
            | SeriesType::Boxplot
            | SeriesType::Errorbar
            | SeriesType::Waterfall => ChartType::Advanced,
            _ => ChartType::Default,
        }
    }
}

/// Whether a series type is covered by the base library script or needs the
/// additional one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartType {
    Default,
    Advanced,
}

/// A fixed-arity numeric tuple, encoded as a raw JSON array.
///
/// Construction does not validate the component count against the kind;
/// a mismatch surfaces as an [EncodeError::ArityMismatch] when the tree
/// is encoded.
///
/// [EncodeError::ArityMismatch]: crate::error::EncodeError::ArityMismatch
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate {
    pub kind: CoordinateKind,
    pub components: Vec<f64>,
}

impl Coordinate {
    /// A 2-D `[x, y]` point.
    pub fn pair(x: f64, y: f64) -> Coordinate {
        Self {
            kind: CoordinateKind::Pair,
            components: vec![x, y],
        }
    }

    /// A 3-D `[x, y, z]` point.
    pub fn three_d(x: f64, y: f64, z: f64) -> Coordinate {
        Self {
            kind: CoordinateKind::ThreeD,
            components: vec![x, y, z],
        }
    }

    /// A `[x, low, high]` range point.
    pub fn range(x: f64, low: f64, high: f64) -> Coordinate {
        Self {
            kind: CoordinateKind::Range,
            components: vec![x, low, high],
        }
    }

    /// A `[x, y, size]` bubble point.
    pub fn bubble(x: f64, y: f64, size: f64) -> Coordinate {
        Self {
            kind: CoordinateKind::Bubble,
            components: vec![x, y, size],
        }
    }

    /// Builds a coordinate from raw parts, without checking the component
    /// count.
    pub fn from_components(kind: CoordinateKind, components: Vec<f64>) -> Coordinate {
        Self { kind, components }
    }
}

impl Encode for Coordinate {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        enc.leaf(Leaf::Coordinate(self))
    }
}

/// The coordinate variants and their fixed arities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateKind {
    Pair,
    ThreeD,
    Range,
    Bubble,
}

impl CoordinateKind {
    pub fn arity(&self) -> usize {
        match self {
            CoordinateKind::Pair => 2,
            CoordinateKind::ThreeD | CoordinateKind::Range | CoordinateKind::Bubble => 3,
        }
    }
}

/// One entry of a series' data list.
#[derive(Debug, Clone, PartialEq)]
pub enum DataPoint {
    /// A bare y value.
    Number(f64),
    /// A gap in the data.
    Null,
    /// A coordinate tuple.
    Coordinate(Coordinate),
    /// A fully configured point.
    Point(Point),
}

impl Encode for DataPoint {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        match self {
            DataPoint::Number(value) => enc.number_f64(*value),
            DataPoint::Null => {
                enc.null();
                Ok(())
            }
            DataPoint::Coordinate(coordinate) => coordinate.encode(enc),
            DataPoint::Point(point) => point.encode(enc),
        }
    }
}

/// A fully configured data point.
///
/// The `chartson_id` is assigned at construction and used only by the lookup
/// functions; it never reaches the JSON output. The `drilldown` sub-options
/// are not encoded either: the drilldown post-processor moves them into a
/// side-channel array and records the point's position there in
/// `drilldown_index`.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub chartson_id: Id,
    pub name: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub color: Option<ColorRef>,
    pub marker: Option<Marker>,
    pub selected: Option<bool>,
    pub sliced: Option<bool>,
    pub drilldown: Option<Box<Options>>,
    pub drilldown_index: Option<usize>,
}

impl Point {
    pub fn new() -> Point {
        Self {
            chartson_id: Id::next(),
            name: None,
            x: None,
            y: None,
            color: None,
            marker: None,
            selected: None,
            sliced: None,
            drilldown: None,
            drilldown_index: None,
        }
    }

    pub fn y(value: f64) -> Point {
        Self {
            y: Some(value),
            ..Point::new()
        }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new()
    }
}

impl Encode for Point {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        let mut object = enc.object();
        object.field("name", &self.name)?;
        object.field("x", &self.x)?;
        object.field("y", &self.y)?;
        object.field("color", &self.color)?;
        object.field("marker", &self.marker)?;
        object.field("selected", &self.selected)?;
        object.field("sliced", &self.sliced)?;
        object.field("drilldownIndex", &self.drilldown_index)?;
        object.finish()
    }
}

/// The marker drawn at a data point.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Marker {
    pub enabled: Option<bool>,
    pub symbol: Option<Symbol>,
    pub radius: Option<u32>,
    pub fill_color: Option<ColorRef>,
    pub line_color: Option<ColorRef>,
    pub line_width: Option<u32>,
}

impl Encode for Marker {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        let mut object = enc.object();
        object.field("enabled", &self.enabled)?;
        object.field("symbol", &self.symbol)?;
        object.field("radius", &self.radius)?;
        object.field("fillColor", &self.fill_color)?;
        object.field("lineColor", &self.line_color)?;
        object.field("lineWidth", &self.line_width)?;
        object.finish()
    }
}

/// One chart series.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub chartson_id: Id,
    pub name: Option<String>,
    pub series_type: Option<SeriesType>,
    pub data: Vec<DataPoint>,
    pub color: Option<ColorRef>,
    pub x_axis: Option<u32>,
    pub y_axis: Option<u32>,
    pub visible: Option<bool>,
    pub marker: Option<Marker>,
}

impl Series {
    pub fn new() -> Series {
        Self {
            chartson_id: Id::next(),
            name: None,
            series_type: None,
            data: Vec::new(),
            color: None,
            x_axis: None,
            y_axis: None,
            visible: None,
            marker: None,
        }
    }
}

impl Default for Series {
    fn default() -> Self {
        Self::new()
    }
}

impl Encode for Series {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        let mut object = enc.object();
        object.field("name", &self.name)?;
        object.field("type", &self.series_type)?;
        object.field_list("data", &self.data)?;
        object.field("color", &self.color)?;
        object.field("xAxis", &self.x_axis)?;
        object.field("yAxis", &self.y_axis)?;
        object.field("visible", &self.visible)?;
        object.field("marker", &self.marker)?;
        object.finish()
    }
}
