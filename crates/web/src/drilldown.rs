//! Drilldown: clicking a point reveals a nested sub-chart.
//!
//! The processor scans the options tree for points carrying drilldown
//! sub-options. When it finds any, it moves them into a side-channel array
//! serialized into the page header, records each point's position there, and
//! installs a click handler that loads the sub-chart from that array. Points
//! without drilldown data leave the tree untouched.

use chartson_options::json::JsonRenderer;
use chartson_options::options::Options;
use chartson_options::series::DataPoint;
use chartson_options::series::SeriesType;
use chartson_options::value::Function;

use crate::error::Result;
use crate::process::OptionsProcessor;
use crate::process::PageHeader;
use crate::process::ProcessorContext;

/// Adds drilldown behavior to a chart.
///
/// The component identifier scopes the JavaScript array name so that several
/// charts on one page do not clash.
pub struct DrilldownProcessor<'r> {
    component_id: String,
    renderer: &'r JsonRenderer,
}

impl<'r> DrilldownProcessor<'r> {
    /// Base name of the JavaScript array holding the drilldown options.
    const ARRAY_NAME: &'static str = "drilldownOptions";

    /// The static script resource providing the drilldown click helper.
    const SCRIPT_REFERENCE: &'static str = "drilldown.js";

    pub fn new(component_id: impl Into<String>, renderer: &'r JsonRenderer) -> DrilldownProcessor<'r> {
        Self {
            component_id: component_id.into(),
            renderer,
        }
    }

    /// Returns the component-scoped name of the drilldown options array.
    pub fn array_name(&self) -> String {
        format!("{}_{}", self.component_id, Self::ARRAY_NAME)
    }

    /// Moves every point's drilldown sub-options into the context, recording
    /// the point's position in the side-channel array and retargeting the
    /// sub-chart at the parent's mount point.
    fn collect(&self, options: &mut Options, context: &mut ProcessorContext) {
        let render_to = options.render_to().map(String::from);

        for series in &mut options.series {
            for data in &mut series.data {
                let DataPoint::Point(point) = data else {
                    continue;
                };
                let Some(drilldown) = point.drilldown.take() else {
                    continue;
                };

                let mut drilldown = *drilldown;
                drilldown.chart_mut().render_to = render_to.clone();

                point.drilldown_index = Some(context.drilldown_options.len());
                context.drilldown_options.push(drilldown);
            }
        }
    }

    /// Installs the drilldown click handler on the plot options of the
    /// chart's series type, creating the nested structure on demand.
    fn install_click_handler(&self, options: &mut Options) {
        let chart_type = options
            .chart
            .as_ref()
            .and_then(|chart| chart.chart_type)
            .unwrap_or(SeriesType::Line);

        let handler = Function::new(format!("chartsonDrilldown(this, {});", self.array_name()));

        options
            .plot_options_mut()
            .get_or_create(chart_type)
            .point_mut()
            .events_mut()
            .click = Some(handler);
    }

    fn emit_header(
        &self,
        context: &ProcessorContext,
        header: &mut dyn PageHeader,
    ) -> Result<()> {
        let array_name = self.array_name();

        header.script(
            &format!("{}-init", Self::ARRAY_NAME),
            &format!("var {};\n var {};", Self::ARRAY_NAME, array_name),
        )?;

        let drilldown_json = self.renderer.to_json(&context.drilldown_options)?;
        header.dom_ready(&format!("{array_name} = {drilldown_json};"))?;

        header.reference(Self::SCRIPT_REFERENCE)
    }
}

impl OptionsProcessor for DrilldownProcessor<'_> {
    fn process(
        &mut self,
        options: &mut Options,
        context: &mut ProcessorContext,
        header: &mut dyn PageHeader,
    ) -> Result<()> {
        self.collect(options, context);
        if context.drilldown_options.is_empty() {
            return Ok(());
        }

        self.install_click_handler(options);
        for drilldown in &mut context.drilldown_options {
            self.install_click_handler(drilldown);
        }

        self.emit_header(context, header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chartson_options::options::Title;
    use chartson_options::series::Point;
    use chartson_options::series::Series;

    use crate::process::ScriptBuffer;

    fn chart_with_drilldown_point() -> Options {
        let mut sub_chart = Options::new();
        sub_chart.chart_mut().chart_type = Some(SeriesType::Pie);
        sub_chart.title = Some(Title::text("Details"));

        let point = Point {
            y: Some(12.0),
            drilldown: Some(Box::new(sub_chart)),
            ..Point::default()
        };

        let mut options = Options::new();
        options.set_render_to("mount");
        options.chart_mut().chart_type = Some(SeriesType::Column);
        options.series = vec![Series {
            data: vec![DataPoint::Point(point)],
            ..Series::default()
        }];

        options
    }

    #[test]
    fn without_drilldown_points_nothing_happens() {
        let renderer = JsonRenderer::new();
        let mut processor = DrilldownProcessor::new("comp1", &renderer);
        let mut options = Options::new();
        options.series = vec![Series::default()];
        let mut context = ProcessorContext::new();
        let mut buffer = ScriptBuffer::new();

        processor
            .process(&mut options, &mut context, &mut buffer)
            .unwrap();

        assert!(context.drilldown_options.is_empty());
        assert!(buffer.is_empty());
        assert!(options.plot_options.is_none());
    }

    #[test]
    fn installs_a_click_handler_scoped_to_the_component() {
        let renderer = JsonRenderer::new();
        let mut processor = DrilldownProcessor::new("comp1", &renderer);
        let mut options = chart_with_drilldown_point();
        let mut context = ProcessorContext::new();
        let mut buffer = ScriptBuffer::new();

        processor
            .process(&mut options, &mut context, &mut buffer)
            .unwrap();

        let click = options
            .plot_options
            .as_ref()
            .and_then(|choice| choice.get(SeriesType::Column))
            .and_then(|plot| plot.point.as_ref())
            .and_then(|point| point.events.as_ref())
            .and_then(|events| events.click.as_ref())
            .unwrap();

        assert_eq!(
            Function::new("chartsonDrilldown(this, comp1_drilldownOptions);"),
            *click
        );
    }

    #[test]
    fn moves_the_sub_chart_into_the_side_channel() {
        let renderer = JsonRenderer::new();
        let mut processor = DrilldownProcessor::new("comp1", &renderer);
        let mut options = chart_with_drilldown_point();
        let mut context = ProcessorContext::new();
        let mut buffer = ScriptBuffer::new();

        processor
            .process(&mut options, &mut context, &mut buffer)
            .unwrap();

        assert_eq!(1, context.drilldown_options.len());
        assert_eq!(Some("mount"), context.drilldown_options[0].render_to());

        let DataPoint::Point(point) = &options.series[0].data[0] else {
            panic!("expected a point");
        };
        assert!(point.drilldown.is_none());
        assert_eq!(Some(0), point.drilldown_index);
    }

    #[test]
    fn emits_the_array_scripts_and_the_script_reference() {
        let renderer = JsonRenderer::new();
        let mut processor = DrilldownProcessor::new("comp1", &renderer);
        let mut options = chart_with_drilldown_point();
        let mut context = ProcessorContext::new();
        let mut buffer = ScriptBuffer::new();

        processor
            .process(&mut options, &mut context, &mut buffer)
            .unwrap();

        assert_eq!(
            vec![(
                String::from("drilldownOptions-init"),
                String::from("var drilldownOptions;\n var comp1_drilldownOptions;"),
            )],
            buffer.scripts
        );
        assert_eq!(1, buffer.dom_ready.len());
        assert!(buffer.dom_ready[0].starts_with("comp1_drilldownOptions = ["));
        assert!(buffer.dom_ready[0].contains("\"renderTo\": \"mount\""));
        assert_eq!(vec![String::from("drilldown.js")], buffer.references);
    }
}
