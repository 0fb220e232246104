//! Route-line geometry
//!
//! Haversine distances and nearest-point-on-polyline snapping. Snapping
//! projects the sample and the line into a local tangent plane centered on
//! the sample (meters east/north), takes the closest point over every
//! segment, and converts that point back to geographic coordinates. At the
//! few-kilometer scales involved the planar approximation is well inside
//! GPS accuracy.

use crate::core::{GeoPoint, EARTH_RADIUS_M};
use nalgebra::Vector2;

/// Result of snapping a position onto a route line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnappedPoint {
    /// Closest point on the line
    pub point: GeoPoint,
    /// Index of the segment the point lies on (ties go to the lowest index)
    pub segment_index: usize,
    /// Distance from the raw sample to the line (meters)
    pub distance_m: f64,
}

/// Great-circle distance between two points (meters)
pub fn haversine_m(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

/// Project a point into the local tangent plane around `origin` (meters east/north)
fn to_plane(origin: &GeoPoint, point: &GeoPoint) -> Vector2<f64> {
    let east = (point.lon - origin.lon).to_radians() * EARTH_RADIUS_M * origin.lat.to_radians().cos();
    let north = (point.lat - origin.lat).to_radians() * EARTH_RADIUS_M;
    Vector2::new(east, north)
}

/// Convert plane coordinates back to geographic coordinates
fn from_plane(origin: &GeoPoint, plane: Vector2<f64>) -> GeoPoint {
    let cos_lat = origin.lat.to_radians().cos();
    let lon = origin.lon + (plane.x / (EARTH_RADIUS_M * cos_lat)).to_degrees();
    let lat = origin.lat + (plane.y / EARTH_RADIUS_M).to_degrees();
    GeoPoint::new(lon, lat)
}

/// Snap `sample` to the nearest point on `line`.
///
/// Returns `None` for an empty line. A single-vertex line snaps to that
/// vertex. Ties between segments resolve to the lowest segment index.
pub fn nearest_point_on_line(line: &[GeoPoint], sample: &GeoPoint) -> Option<SnappedPoint> {
    if line.is_empty() {
        return None;
    }
    if line.len() == 1 {
        return Some(SnappedPoint {
            point: line[0],
            segment_index: 0,
            distance_m: haversine_m(sample, &line[0]),
        });
    }

    let p = Vector2::new(0.0, 0.0); // sample is the plane origin
    let mut best: Option<(f64, usize, Vector2<f64>)> = None;

    for (index, pair) in line.windows(2).enumerate() {
        let a = to_plane(sample, &pair[0]);
        let b = to_plane(sample, &pair[1]);
        let ab = b - a;
        let len_sq = ab.norm_squared();

        let closest = if len_sq == 0.0 {
            a
        } else {
            let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
            a + ab * t
        };

        let dist = (closest - p).norm();
        let better = match &best {
            Some((best_dist, _, _)) => dist < *best_dist,
            None => true,
        };
        if better {
            best = Some((dist, index, closest));
        }
    }

    best.map(|(distance_m, segment_index, closest)| SnappedPoint {
        point: from_plane(sample, closest),
        segment_index,
        distance_m,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_known_distance() {
        // One degree of latitude along a meridian
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 1.0);
        let d = haversine_m(&a, &b);
        assert!((d - 111_195.0).abs() < 100.0, "got {}", d);
    }

    #[test]
    fn test_haversine_zero_for_same_point() {
        let p = GeoPoint::new(78.7047, 10.7905);
        assert_eq!(haversine_m(&p, &p), 0.0);
    }

    #[test]
    fn test_snap_onto_segment_interior() {
        // Line along the equator; sample due south of its midpoint
        let line = vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.1, 0.0)];
        let sample = GeoPoint::new(0.05, -0.01);

        let snapped = nearest_point_on_line(&line, &sample).unwrap();
        assert_eq!(snapped.segment_index, 0);
        assert!((snapped.point.lon - 0.05).abs() < 1e-6);
        assert!(snapped.point.lat.abs() < 1e-6);

        let expected = 0.01_f64.to_radians() * EARTH_RADIUS_M;
        assert!((snapped.distance_m - expected).abs() < 1.0);
    }

    #[test]
    fn test_snap_clamps_to_endpoint() {
        let line = vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.1, 0.0)];
        let sample = GeoPoint::new(0.2, 0.0);

        let snapped = nearest_point_on_line(&line, &sample).unwrap();
        assert!((snapped.point.lon - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_snap_picks_nearest_segment() {
        // L-shaped line; sample close to the second segment
        let line = vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.1, 0.0),
            GeoPoint::new(0.1, 0.1),
        ];
        let sample = GeoPoint::new(0.095, 0.05);

        let snapped = nearest_point_on_line(&line, &sample).unwrap();
        assert_eq!(snapped.segment_index, 1);
    }

    #[test]
    fn test_snap_tie_takes_lowest_segment() {
        // Sample equidistant from two collinear segments' shared vertex
        let line = vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.1, 0.0),
            GeoPoint::new(0.2, 0.0),
        ];
        let sample = GeoPoint::new(0.1, 0.01);

        let snapped = nearest_point_on_line(&line, &sample).unwrap();
        assert_eq!(snapped.segment_index, 0);
    }

    #[test]
    fn test_empty_and_single_vertex_lines() {
        let sample = GeoPoint::new(0.0, 0.0);
        assert!(nearest_point_on_line(&[], &sample).is_none());

        let lone = vec![GeoPoint::new(0.0, 0.01)];
        let snapped = nearest_point_on_line(&lone, &sample).unwrap();
        assert_eq!(snapped.point, lone[0]);
        assert!(snapped.distance_m > 0.0);
    }
}
