//! Pure predicates telling a host page which charting-library script files a
//! configuration needs.
//!
//! A page component can call these before rendering to decide which script
//! references to emit alongside the chart.

use crate::options::Options;
use crate::series::ChartType;
use crate::series::SeriesType;

/// Returns true if the configuration needs the `highcharts-more.js` script:
/// either the chart is polar or an advanced series type is used anywhere.
pub fn needs_more_js(options: &Options) -> bool {
    has_polar(options) || has_advanced_chart_type(options)
}

/// Returns true if the configuration needs the `funnel.js` script.
pub fn needs_funnel_js(options: &Options) -> bool {
    matches!(
        chart_type(options),
        Some(SeriesType::Funnel) | Some(SeriesType::Pyramid)
    )
}

/// Returns true if the configuration needs the `heatmap.js` script.
pub fn needs_heatmap_js(options: &Options) -> bool {
    matches!(chart_type(options), Some(SeriesType::Heatmap))
}

/// Returns true if the configuration needs the `exporting.js` script.
///
/// Exporting is enabled by default in the browser library, so an unset
/// exporting section still needs the script.
pub fn needs_exporting_js(options: &Options) -> bool {
    match &options.exporting {
        None => true,
        Some(exporting) => exporting.enabled.unwrap_or(false),
    }
}

fn chart_type(options: &Options) -> Option<SeriesType> {
    options.chart.as_ref()?.chart_type
}

fn has_polar(options: &Options) -> bool {
    options
        .chart
        .as_ref()
        .is_some_and(|chart| chart.polar.unwrap_or(false))
}

fn has_advanced_chart_type(options: &Options) -> bool {
    let chart_is_advanced = chart_type(options)
        .is_some_and(|series_type| series_type.chart_type() == ChartType::Advanced);

    chart_is_advanced
        || options.series.iter().any(|series| {
            series
                .series_type
                .is_some_and(|series_type| series_type.chart_type() == ChartType::Advanced)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ExportingOptions;
    use crate::series::Series;

    #[test]
    fn polar_charts_need_the_more_script() {
        let mut options = Options::new();
        options.chart_mut().polar = Some(true);

        assert!(needs_more_js(&options));
    }

    #[test]
    fn advanced_series_types_need_the_more_script() {
        let options = Options {
            series: vec![Series {
                series_type: Some(SeriesType::Arearange),
                ..Series::default()
            }],
            ..Options::default()
        };

        assert!(needs_more_js(&options));
    }

    #[test]
    fn plain_line_charts_do_not_need_the_more_script() {
        let mut options = Options::new();
        options.chart_mut().chart_type = Some(SeriesType::Line);

        assert!(!needs_more_js(&options));
    }

    #[test]
    fn funnel_and_pyramid_need_the_funnel_script() {
        let mut options = Options::new();
        options.chart_mut().chart_type = Some(SeriesType::Funnel);
        assert!(needs_funnel_js(&options));

        options.chart_mut().chart_type = Some(SeriesType::Pyramid);
        assert!(needs_funnel_js(&options));

        options.chart_mut().chart_type = Some(SeriesType::Pie);
        assert!(!needs_funnel_js(&options));
    }

    #[test]
    fn heatmaps_need_the_heatmap_script() {
        let mut options = Options::new();
        options.chart_mut().chart_type = Some(SeriesType::Heatmap);

        assert!(needs_heatmap_js(&options));
    }

    #[test]
    fn exporting_defaults_to_enabled() {
        assert!(needs_exporting_js(&Options::new()));

        let disabled = Options {
            exporting: Some(ExportingOptions {
                enabled: Some(false),
                ..ExportingOptions::default()
            }),
            ..Options::default()
        };
        assert!(!needs_exporting_js(&disabled));

        let unset = Options {
            exporting: Some(ExportingOptions::default()),
            ..Options::default()
        };
        assert!(!needs_exporting_js(&unset));
    }
}
