//! The root configuration tree for one chart render.
//!
//! All fields are optional; unset fields are omitted from the JSON output.
//! The tree is built once per render request, optionally mutated by a
//! post-processor, encoded once and then discarded.

use std::collections::BTreeMap;

use crate::axis::Axis;
use crate::color::ColorRef;
use crate::error::Result;
use crate::json::Encode;
use crate::json::Encoder;
use crate::json::TokenEnum;
use crate::json::token_enum;
use crate::series::Marker;
use crate::series::Series;
use crate::series::SeriesType;
use crate::value::Center;
use crate::value::CssStyle;
use crate::value::DateTimeLabelFormat;
use crate::value::Function;
use crate::value::PixelOrPercent;

token_enum! {
    pub enum HorizontalAlignment {
        Left,
        Center,
        Right,
    }
}

token_enum! {
    pub enum VerticalAlignment {
        Top,
        Middle,
        Bottom,
    }
}

token_enum! {
    pub enum LegendLayout {
        Horizontal,
        Vertical,
    }
}

token_enum! {
    pub enum Cursor {
        Pointer,
    }
}

token_enum! {
    pub enum Stacking {
        Normal,
        Percent,
    }
}

token_enum! {
    pub enum ZoomType {
        X,
        Y,
        Xy,
    }
}

/// The full typed configuration for one chart render.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Options {
    pub chart: Option<ChartOptions>,
    pub title: Option<Title>,
    pub subtitle: Option<Title>,
    pub x_axis: Vec<Axis>,
    pub y_axis: Vec<Axis>,
    pub plot_options: Option<PlotOptionsChoice>,
    pub tooltip: Option<Tooltip>,
    pub legend: Option<Legend>,
    pub credits: Option<Credits>,
    pub exporting: Option<ExportingOptions>,
    pub series: Vec<Series>,
}

impl Options {
    pub fn new() -> Options {
        Options::default()
    }

    /// Returns the chart options, creating them if unset.
    pub fn chart_mut(&mut self) -> &mut ChartOptions {
        self.chart.get_or_insert_with(ChartOptions::default)
    }

    /// Returns the plot options, creating them if unset.
    pub fn plot_options_mut(&mut self) -> &mut PlotOptionsChoice {
        self.plot_options.get_or_insert_with(PlotOptionsChoice::new)
    }

    /// Returns the identifier of the DOM element the chart mounts into.
    pub fn render_to(&self) -> Option<&str> {
        self.chart.as_ref()?.render_to.as_deref()
    }

    /// Sets the identifier of the DOM element the chart mounts into,
    /// creating the chart options if needed.
    pub fn set_render_to(&mut self, render_to: impl Into<String>) {
        self.chart_mut().render_to = Some(render_to.into());
    }

    /// Copies the render target from another configuration, creating the
    /// chart options if needed.
    pub fn copy_render_to(&mut self, from: &Options) {
        self.chart_mut().render_to = from.render_to().map(String::from);
    }

    /// Installs a chart load handler unless one is already set.
    pub fn set_chart_events_load(&mut self, function: Function) {
        let events = self.chart_mut().events_mut();
        if events.load.is_none() {
            events.load = Some(function);
        }
    }
}

impl Encode for Options {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        let mut object = enc.object();
        object.field("chart", &self.chart)?;
        object.field("title", &self.title)?;
        object.field("subtitle", &self.subtitle)?;
        object.field_list("xAxis", &self.x_axis)?;
        object.field_list("yAxis", &self.y_axis)?;
        if let Some(plot_options) = &self.plot_options
            && !plot_options.is_empty()
        {
            object.field_required("plotOptions", plot_options)?;
        }
        object.field("tooltip", &self.tooltip)?;
        object.field("legend", &self.legend)?;
        object.field("credits", &self.credits)?;
        object.field("exporting", &self.exporting)?;
        object.field_list("series", &self.series)?;
        object.finish()
    }
}

/// Options of the chart frame itself: mount point, type, dimensions,
/// top-level event handlers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartOptions {
    pub render_to: Option<String>,
    pub chart_type: Option<SeriesType>,
    pub polar: Option<bool>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub background_color: Option<ColorRef>,
    pub style: Option<CssStyle>,
    pub zoom_type: Option<ZoomType>,
    pub events: Option<Events>,
}

impl ChartOptions {
    /// Returns the chart event handlers, creating them if unset.
    pub fn events_mut(&mut self) -> &mut Events {
        self.events.get_or_insert_with(Events::default)
    }
}

impl Encode for ChartOptions {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        let mut object = enc.object();
        object.field("renderTo", &self.render_to)?;
        object.field("type", &self.chart_type)?;
        object.field("polar", &self.polar)?;
        object.field("width", &self.width)?;
        object.field("height", &self.height)?;
        object.field("backgroundColor", &self.background_color)?;
        object.field("style", &self.style)?;
        object.field("zoomType", &self.zoom_type)?;
        object.field("events", &self.events)?;
        object.finish()
    }
}

/// Event handlers, each an inline JavaScript function.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Events {
    pub load: Option<Function>,
    pub click: Option<Function>,
}

impl Encode for Events {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        let mut object = enc.object();
        object.field("load", &self.load)?;
        object.field("click", &self.click)?;
        object.finish()
    }
}

/// A chart title or subtitle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Title {
    pub text: Option<String>,
    pub align: Option<HorizontalAlignment>,
    pub style: Option<CssStyle>,
}

impl Title {
    pub fn text(text: impl Into<String>) -> Title {
        Self {
            text: Some(text.into()),
            align: None,
            style: None,
        }
    }
}

impl Encode for Title {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        let mut object = enc.object();
        object.field("text", &self.text)?;
        object.field("align", &self.align)?;
        object.field("style", &self.style)?;
        object.finish()
    }
}

/// Per-series-type plot options, encoded as an object keyed by the
/// series type token.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlotOptionsChoice {
    choices: BTreeMap<SeriesType, PlotOptions>,
}

impl PlotOptionsChoice {
    pub fn new() -> PlotOptionsChoice {
        PlotOptionsChoice::default()
    }

    pub fn get(&self, series_type: SeriesType) -> Option<&PlotOptions> {
        self.choices.get(&series_type)
    }

    pub fn set(&mut self, series_type: SeriesType, plot_options: PlotOptions) {
        self.choices.insert(series_type, plot_options);
    }

    /// Returns the plot options for a series type, creating them if unset.
    pub fn get_or_create(&mut self, series_type: SeriesType) -> &mut PlotOptions {
        self.choices.entry(series_type).or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }
}

impl Encode for PlotOptionsChoice {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        let mut object = enc.object();
        for (series_type, plot_options) in &self.choices {
            object.field_required(&series_type.token(), plot_options)?;
        }
        object.finish()
    }
}

/// Plot options for one series type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlotOptions {
    pub allow_point_select: Option<bool>,
    pub cursor: Option<Cursor>,
    pub stacking: Option<Stacking>,
    pub marker: Option<Marker>,
    pub center: Option<Center>,
    pub size: Option<PixelOrPercent>,
    pub point: Option<PointOptions>,
}

impl PlotOptions {
    /// Returns the point options, creating them if unset.
    pub fn point_mut(&mut self) -> &mut PointOptions {
        self.point.get_or_insert_with(PointOptions::default)
    }
}

impl Encode for PlotOptions {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        let mut object = enc.object();
        object.field("allowPointSelect", &self.allow_point_select)?;
        object.field("cursor", &self.cursor)?;
        object.field("stacking", &self.stacking)?;
        object.field("marker", &self.marker)?;
        object.field("center", &self.center)?;
        object.field("size", &self.size)?;
        object.field("point", &self.point)?;
        object.finish()
    }
}

/// Options applied to every point of a series type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointOptions {
    pub events: Option<Events>,
}

impl PointOptions {
    /// Returns the point event handlers, creating them if unset.
    pub fn events_mut(&mut self) -> &mut Events {
        self.events.get_or_insert_with(Events::default)
    }
}

impl Encode for PointOptions {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        let mut object = enc.object();
        object.field("events", &self.events)?;
        object.finish()
    }
}

/// Tooltip configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tooltip {
    pub enabled: Option<bool>,
    pub shared: Option<bool>,
    pub formatter: Option<Function>,
    pub value_suffix: Option<String>,
}

impl Encode for Tooltip {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        let mut object = enc.object();
        object.field("enabled", &self.enabled)?;
        object.field("shared", &self.shared)?;
        object.field("formatter", &self.formatter)?;
        object.field("valueSuffix", &self.value_suffix)?;
        object.finish()
    }
}

/// Legend configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Legend {
    pub enabled: Option<bool>,
    pub align: Option<HorizontalAlignment>,
    pub vertical_align: Option<VerticalAlignment>,
    pub layout: Option<LegendLayout>,
    pub border_width: Option<u32>,
}

impl Encode for Legend {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        let mut object = enc.object();
        object.field("enabled", &self.enabled)?;
        object.field("align", &self.align)?;
        object.field("verticalAlign", &self.vertical_align)?;
        object.field("layout", &self.layout)?;
        object.field("borderWidth", &self.border_width)?;
        object.finish()
    }
}

/// The credits label in the chart corner.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Credits {
    pub enabled: Option<bool>,
    pub text: Option<String>,
    pub href: Option<String>,
}

impl Encode for Credits {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        let mut object = enc.object();
        object.field("enabled", &self.enabled)?;
        object.field("text", &self.text)?;
        object.field("href", &self.href)?;
        object.finish()
    }
}

/// Export menu configuration. When unset, exporting is enabled by default
/// in the browser library.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExportingOptions {
    pub enabled: Option<bool>,
    pub filename: Option<String>,
    pub csv: Option<CsvOptions>,
}

impl Encode for ExportingOptions {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        let mut object = enc.object();
        object.field("enabled", &self.enabled)?;
        object.field("filename", &self.filename)?;
        object.field("csv", &self.csv)?;
        object.finish()
    }
}

/// CSV export settings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CsvOptions {
    pub date_format: Option<DateTimeLabelFormat>,
    pub decimal_point: Option<String>,
    pub item_delimiter: Option<String>,
    pub line_delimiter: Option<String>,
}

impl Encode for CsvOptions {
    fn encode(&self, enc: &mut Encoder<'_>) -> Result<()> {
        let mut object = enc.object();
        object.field("dateFormat", &self.date_format)?;
        object.field("decimalPoint", &self.decimal_point)?;
        object.field("itemDelimiter", &self.item_delimiter)?;
        object.field("lineDelimiter", &self.line_delimiter)?;
        object.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_mut_creates_the_chart_options_once() {
        let mut options = Options::new();

        options.chart_mut().polar = Some(true);
        options.chart_mut().height = Some(400);

        let chart = options.chart.as_ref().unwrap();
        assert_eq!(Some(true), chart.polar);
        assert_eq!(Some(400), chart.height);
    }

    #[test]
    fn set_render_to_creates_the_chart_options() {
        let mut options = Options::new();

        options.set_render_to("chart1");

        assert_eq!(Some("chart1"), options.render_to());
    }

    #[test]
    fn copy_render_to_overwrites_the_target() {
        let mut from = Options::new();
        from.set_render_to("parent");
        let mut to = Options::new();
        to.set_render_to("stale");

        to.copy_render_to(&from);

        assert_eq!(Some("parent"), to.render_to());
    }

    #[test]
    fn set_chart_events_load_keeps_an_existing_handler() {
        let mut options = Options::new();

        options.set_chart_events_load(Function::new("first();"));
        options.set_chart_events_load(Function::new("second();"));

        let events = options.chart.as_ref().unwrap().events.as_ref().unwrap();
        assert_eq!(Some(Function::new("first();")), events.load);
    }

    #[test]
    fn plot_options_choice_get_or_create_is_idempotent() {
        let mut choice = PlotOptionsChoice::new();

        choice.get_or_create(SeriesType::Pie).allow_point_select = Some(true);
        choice.get_or_create(SeriesType::Pie).cursor = Some(Cursor::Pointer);

        let pie = choice.get(SeriesType::Pie).unwrap();
        assert_eq!(Some(true), pie.allow_point_select);
        assert_eq!(Some(Cursor::Pointer), pie.cursor);
    }
}
