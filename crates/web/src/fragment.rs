//! Renders the HTML fragment that mounts a chart on a page.
//!
//! The fragment consists of the target `div` and a script that builds the
//! chart from its encoded configuration. The hosting framework decides where
//! the fragment lands in the page.

use serde::Serialize;
use tinytemplate::TinyTemplate;

use chartson_options::json::JsonRenderer;
use chartson_options::options::Options;

use crate::error::Result;
use crate::error::WebError;

/// Renders chart mount fragments from an options tree.
pub struct ChartFragment<'r> {
    renderer: &'r JsonRenderer,
}

impl<'r> ChartFragment<'r> {
    const TEMPLATE_NAME: &'static str = "chart";

    pub fn new(renderer: &'r JsonRenderer) -> ChartFragment<'r> {
        Self { renderer }
    }

    /// Renders the mount fragment for the given options.
    ///
    /// The options must carry a render target; without one the browser has
    /// no element to attach the chart to.
    pub fn render(&self, options: &Options) -> Result<String> {
        let render_to = options.render_to().ok_or(WebError::MissingRenderTarget)?;

        let mut template = TinyTemplate::new();
        template.add_template(Self::TEMPLATE_NAME, include_str!("./fragment/chart.html.tt"))?;

        let context = Context {
            render_to,
            options: self.renderer.to_json(options)?,
        };

        Ok(template.render(Self::TEMPLATE_NAME, &context)?)
    }
}

#[derive(Serialize)]
struct Context<'a> {
    render_to: &'a str,
    options: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    use chartson_options::options::Title;

    #[test]
    fn renders_the_mount_div_and_the_chart_script() {
        let mut options = Options::new();
        options.set_render_to("chart1");
        options.title = Some(Title::text("Revenue"));

        let renderer = JsonRenderer::new();
        let fragment = ChartFragment::new(&renderer).render(&options).unwrap();

        assert!(fragment.contains(r#"<div id="chart1" class="chart"></div>"#));
        assert!(fragment.contains("var chart1_options = {"));
        assert!(fragment.contains(r#""text": "Revenue""#));
        assert!(fragment.contains("var chart1_chart = new Highcharts.Chart(chart1_options);"));
    }

    #[test]
    fn refuses_options_without_a_render_target() {
        let renderer = JsonRenderer::new();
        let result = ChartFragment::new(&renderer).render(&Options::new());

        assert!(matches!(result, Err(WebError::MissingRenderTarget)));
    }
}
