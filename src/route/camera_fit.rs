use crate::domain::LonLat;

pub const MAX_ZOOM: f64 = 12.0;
pub const MIN_ZOOM: f64 = 0.0;
pub const PITCH: f64 = 45.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFit {
    pub center: LonLat,
    pub zoom: f64,
    pub bearing: f64,
    pub pitch: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    pub fn around(points: &[LonLat]) -> Option<Self> {
        let first = points.first()?;
        let initial = BoundingBox {
            min_lon: first.longitude(),
            max_lon: first.longitude(),
            min_lat: first.latitude(),
            max_lat: first.latitude(),
        };

        Some(points.iter().fold(initial, |bounds, point| BoundingBox {
            min_lon: bounds.min_lon.min(point.longitude()),
            max_lon: bounds.max_lon.max(point.longitude()),
            min_lat: bounds.min_lat.min(point.latitude()),
            max_lat: bounds.max_lat.max(point.latitude()),
        }))
    }

    pub fn center(&self) -> LonLat {
        LonLat((self.min_lon + self.max_lon) / 2.0, (self.min_lat + self.max_lat) / 2.0)
    }

    pub fn max_span(&self) -> f64 {
        (self.max_lon - self.min_lon).max(self.max_lat - self.min_lat)
    }
}

/// Frames the whole route, looking from the first point towards the last one.
/// Returns `None` for an empty point set.
pub fn compute_camera_fit(points: &[LonLat]) -> Option<CameraFit> {
    let bounds = BoundingBox::around(points)?;
    let (first, last) = (points.first()?, points.last()?);

    Some(CameraFit {
        center: bounds.center(),
        zoom: zoom_for_span(bounds.max_span()),
        bearing: initial_bearing(*first, *last),
        pitch: PITCH,
    })
}

/// Great-circle initial bearing in degrees, normalized into [0, 360).
pub fn initial_bearing(from: LonLat, to: LonLat) -> f64 {
    let lat1 = from.latitude().to_radians();
    let lat2 = to.latitude().to_radians();
    let dlon = (to.longitude() - from.longitude()).to_radians();

    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();

    let bearing = y.atan2(x).to_degrees().rem_euclid(360.0);
    // rem_euclid may round a tiny negative value up to exactly 360
    if bearing >= 360.0 { 0.0 } else { bearing }
}

pub fn zoom_for_span(max_span: f64) -> f64 {
    if max_span.is_nan() || max_span <= 0.0 {
        return MAX_ZOOM;
    }

    (8.0 - max_span.log2()).floor().clamp(MIN_ZOOM, MAX_ZOOM)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const EPSILON: f64 = 1e-9;

    #[rstest]
    #[case(LonLat(0.0, 0.0), LonLat(0.0, 1.0), 0.0)]
    #[case(LonLat(0.0, 0.0), LonLat(1.0, 0.0), 90.0)]
    #[case(LonLat(0.0, 1.0), LonLat(0.0, 0.0), 180.0)]
    #[case(LonLat(1.0, 0.0), LonLat(0.0, 0.0), 270.0)]
    #[case(LonLat(3.0, 3.0), LonLat(3.0, 3.0), 0.0)]
    fn computes_the_initial_bearing(#[case] from: LonLat, #[case] to: LonLat, #[case] expected: f64) {
        let bearing = initial_bearing(from, to);

        assert!((bearing - expected).abs() < EPSILON, "expected {}, got {}", expected, bearing);
    }

    #[test]
    fn bearing_is_never_negative() {
        let bearing = initial_bearing(LonLat(-122.33, 47.61), LonLat(-123.0, 47.0));

        assert!((0.0..360.0).contains(&bearing), "bearing {} out of range", bearing);
    }

    #[rstest]
    #[case(0.0, 12.0)]
    #[case(0.01, 12.0)]
    #[case(1.0, 8.0)]
    #[case(2.0, 7.0)]
    #[case(3.0, 6.0)]
    #[case(360.0, 0.0)]
    fn approximates_the_zoom_from_the_span(#[case] span: f64, #[case] expected: f64) {
        assert_eq!(zoom_for_span(span), expected);
    }

    #[test]
    fn returns_none_for_no_points() {
        assert_eq!(compute_camera_fit(&[]), None);
    }

    #[test]
    fn clamps_identical_points_to_the_maximum_zoom() {
        let point = LonLat(-122.33, 47.61);

        let fit = compute_camera_fit(&[point, point, point]).unwrap();

        assert_eq!(
            fit,
            CameraFit {
                center: point,
                zoom: MAX_ZOOM,
                bearing: 0.0,
                pitch: PITCH,
            }
        );
        assert!(fit.zoom.is_finite());
    }

    #[test]
    fn centers_on_the_bounding_box() {
        let points = [LonLat(-122.33, 47.61), LonLat(-124.0, 46.0), LonLat(-122.68, 45.52)];

        let fit = compute_camera_fit(&points).unwrap();

        assert!((fit.center.longitude() - -123.165).abs() < EPSILON);
        assert!((fit.center.latitude() - 46.565).abs() < EPSILON);
        assert_eq!(fit.zoom, 6.0);
        assert!(fit.bearing > 180.0 && fit.bearing < 270.0, "expected a south-westerly bearing, got {}", fit.bearing);
    }

    #[test]
    fn is_deterministic() {
        let points = [LonLat(2.35, 48.86), LonLat(4.83, 45.76), LonLat(5.37, 43.30)];

        assert_eq!(compute_camera_fit(&points), compute_camera_fit(&points));
    }
}
