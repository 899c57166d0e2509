//! Line-of-sight test against a spherical obstruction centred at the origin.

use serde::{Deserialize, Serialize};

use crate::geo::{Point3D, EARTH_RADIUS_KM};

/// Spherical body that blocks line of sight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Radius of the obstructing sphere in kilometres.
    pub radius: f64,
    /// Distance below `radius` still treated as touching the limb.
    pub limb_tolerance: f64,
}

impl Body {
    /// A body with no limb tolerance; the comparison is exactly `distance >= radius`.
    pub const fn exact(radius: f64) -> Self {
        Self {
            radius,
            limb_tolerance: 0.0,
        }
    }

    /// Accept segments dipping up to `tolerance` kilometres below the radius.
    ///
    /// Ground points sit on the sphere and their computed distance from the
    /// centre can round one ulp short of the radius; a tolerance around `1e-6`
    /// keeps such links.
    pub fn with_limb_tolerance(mut self, tolerance: f64) -> Self {
        self.limb_tolerance = tolerance;
        self
    }

    /// Whether a segment whose closest approach to the centre is `distance` clears the body.
    ///
    /// Touching the limb counts as clear. NaN distances never clear.
    pub fn clears(&self, distance: f64) -> bool {
        distance >= self.radius - self.limb_tolerance
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::exact(EARTH_RADIUS_KM)
    }
}

#[derive(Debug, Clone, Copy)]
struct Vector {
    x: f64,
    y: f64,
    z: f64,
}

impl Vector {
    fn between(from: &Point3D, to: &Point3D) -> Self {
        Self {
            x: to.x - from.x,
            y: to.y - from.y,
            z: to.z - from.z,
        }
    }

    fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    fn cross(&self, other: &Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }
}

/// Closest approach of the segment `first`–`second` to the origin.
///
/// The origin is projected onto the line through both points with `t = 0` at
/// `first` and `t = 1` at `second`. When the projection falls before `first`
/// or past `second` the distance to that endpoint is used, otherwise the
/// perpendicular point-to-line distance. Coincident points have no direction;
/// their own distance from the origin is returned.
pub fn distance_from_origin_to_segment(first: &Point3D, second: &Point3D) -> f64 {
    let direction = Vector::between(first, second);
    let to_origin_from_first = Vector::between(first, &Point3D::ORIGIN);

    let length_squared = direction.length_squared();
    if length_squared == 0.0 {
        return to_origin_from_first.length();
    }

    let t = direction.dot(&to_origin_from_first) / length_squared;
    if t < 0.0 {
        to_origin_from_first.length()
    } else if t > 1.0 {
        Vector::between(second, &Point3D::ORIGIN).length()
    } else {
        direction.cross(&to_origin_from_first).length() / length_squared.sqrt()
    }
}

/// Whether `first` and `second` can see each other past `body`.
pub fn is_visible(first: &Point3D, second: &Point3D, body: &Body) -> bool {
    body.clears(distance_from_origin_to_segment(first, second))
}

/// Straight-line distance between two points, carried as edge metadata.
pub fn distance_between(first: &Point3D, second: &Point3D) -> f64 {
    first.distance_to(second)
}
