//! Zoom selection events sent back by the browser.
//!
//! When the user drags a selection rectangle over a chart, the page posts the
//! selected axis ranges as a JSON payload. This module decodes that payload
//! into typed events.

use serde::Deserialize;

use crate::error::Result;

/// The axis ranges of one selection rectangle.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SelectionEvent {
    #[serde(rename = "xAxes", default)]
    pub x_axes: Vec<AxisSelection>,
    #[serde(rename = "yAxes", default)]
    pub y_axes: Vec<AxisSelection>,
}

/// The selected range on one axis, identified by its position in the
/// options tree.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AxisSelection {
    #[serde(rename = "axisIndex")]
    pub axis_index: usize,
    pub min: f64,
    pub max: f64,
}

impl SelectionEvent {
    /// Decodes a selection payload posted by the page.
    pub fn from_json(json: &str) -> Result<SelectionEvent> {
        Ok(chartson_options::json::from_json(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_selection_payload() {
        let payload = r#"{"xAxes":[{"axisIndex":0,"min":1.5,"max":9.0}],"yAxes":[]}"#;

        let event = SelectionEvent::from_json(payload).unwrap();

        assert_eq!(
            SelectionEvent {
                x_axes: vec![AxisSelection {
                    axis_index: 0,
                    min: 1.5,
                    max: 9.0,
                }],
                y_axes: Vec::new(),
            },
            event
        );
    }

    #[test]
    fn missing_axis_lists_decode_as_empty() {
        let event = SelectionEvent::from_json("{}").unwrap();

        assert!(event.x_axes.is_empty());
        assert!(event.y_axes.is_empty());
    }

    #[test]
    fn malformed_payload_is_an_error() {
        let result = SelectionEvent::from_json("{\"xAxes\":");

        assert!(result.is_err());
    }
}
