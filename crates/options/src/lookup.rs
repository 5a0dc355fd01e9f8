//! Finding series, points and axes inside a built options tree by their
//! synthetic [Id].
//!
//! All lookups are linear scans in tree order; the first match wins. A miss
//! is an explicit `None`, never an error.
//!
//! [Id]: crate::id::Id

use crate::axis::Axis;
use crate::id::Id;
use crate::options::Options;
use crate::series::DataPoint;
use crate::series::Point;
use crate::series::Series;

/// Returns the series carrying the given identifier.
pub fn series_by_id(options: &Options, id: Id) -> Option<&Series> {
    options
        .series
        .iter()
        .find(|series| series.chartson_id == id)
}

/// Returns the point carrying the given identifier, searching every series.
pub fn point_by_id(options: &Options, id: Id) -> Option<&Point> {
    options
        .series
        .iter()
        .flat_map(|series| series.data.iter())
        .find_map(|data| match data {
            DataPoint::Point(point) if point.chartson_id == id => Some(point),
            _ => None,
        })
}

/// Returns the axis carrying the given identifier. The x axes are scanned
/// before the y axes.
pub fn axis_by_id(options: &Options, id: Id) -> Option<&Axis> {
    options
        .x_axis
        .iter()
        .chain(options.y_axis.iter())
        .find(|axis| axis.chartson_id == id)
}

/// Returns the zero-based position of the series carrying the given
/// identifier.
///
/// An earlier version of this lookup returned `0` for a miss, which made a
/// miss indistinguishable from a hit at the first position. A miss is now an
/// explicit `None`; callers must check it before indexing.
pub fn series_index(options: &Options, id: Id) -> Option<usize> {
    options
        .series
        .iter()
        .position(|series| series.chartson_id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series_with_id(id: u64) -> Series {
        Series {
            chartson_id: Id::from(id),
            ..Series::default()
        }
    }

    fn options_with_series_ids(ids: &[u64]) -> Options {
        Options {
            series: ids.iter().map(|id| series_with_id(*id)).collect(),
            ..Options::default()
        }
    }

    #[test]
    fn finds_a_series_by_its_id() {
        let options = options_with_series_ids(&[3, 5, 7]);

        let series = series_by_id(&options, Id::from(7)).unwrap();

        assert_eq!(Id::from(7), series.chartson_id);
    }

    #[test]
    fn a_missing_series_id_is_an_explicit_miss() {
        let options = options_with_series_ids(&[3, 5, 7]);

        assert!(series_by_id(&options, Id::from(99)).is_none());
    }

    #[test]
    fn returns_the_position_of_a_series() {
        let options = options_with_series_ids(&[3, 5, 7]);

        assert_eq!(Some(2), series_index(&options, Id::from(7)));
        assert_eq!(Some(0), series_index(&options, Id::from(3)));
    }

    #[test]
    fn a_missing_series_id_has_no_position() {
        let options = options_with_series_ids(&[3, 5, 7]);

        assert_eq!(None, series_index(&options, Id::from(99)));
    }

    #[test]
    fn finds_a_point_across_series() {
        let mut options = options_with_series_ids(&[3]);
        let point = Point {
            chartson_id: Id::from(11),
            y: Some(4.2),
            ..Point::default()
        };
        options.series[0].data = vec![
            DataPoint::Number(1.0),
            DataPoint::Point(point),
        ];

        let found = point_by_id(&options, Id::from(11)).unwrap();

        assert_eq!(Some(4.2), found.y);
        assert!(point_by_id(&options, Id::from(99)).is_none());
    }

    #[test]
    fn finds_an_axis_in_x_before_y() {
        let options = Options {
            x_axis: vec![Axis {
                chartson_id: Id::from(21),
                ..Axis::default()
            }],
            y_axis: vec![Axis {
                chartson_id: Id::from(22),
                ..Axis::default()
            }],
            ..Options::default()
        };

        assert_eq!(
            Id::from(21),
            axis_by_id(&options, Id::from(21)).unwrap().chartson_id
        );
        assert_eq!(
            Id::from(22),
            axis_by_id(&options, Id::from(22)).unwrap().chartson_id
        );
        assert!(axis_by_id(&options, Id::from(99)).is_none());
    }
}
