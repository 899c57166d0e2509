//! Geodetic to Cartesian conversion on a spherical Earth.
//!
//! Positions are expressed in kilometres in an Earth-centred frame: the
//! x axis pierces the equator at the prime meridian, the z axis points at the
//! north pole. The body is modelled as a sphere of radius [`EARTH_RADIUS_KM`],
//! which is also the obstruction used by the visibility test.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Cartesian coordinates in kilometres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub const ORIGIN: Point3D = Point3D {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Calculate the Euclidean distance to another position.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Distance from the centre of the body.
    pub fn norm(&self) -> f64 {
        self.distance_to(&Self::ORIGIN)
    }

    /// Project back onto latitude, longitude and altitude above the sphere.
    ///
    /// The origin has no defined direction and maps to `(0, 0, -R)`.
    pub fn to_geodetic(&self) -> Geodetic {
        let radius = self.norm();
        if radius == 0.0 {
            return Geodetic::new(0.0, 0.0, -EARTH_RADIUS_KM);
        }
        let latitude = (self.z / radius).clamp(-1.0, 1.0).asin().to_degrees();
        let longitude = self.y.atan2(self.x).to_degrees();
        Geodetic::new(latitude, longitude, radius - EARTH_RADIUS_KM)
    }
}

/// Latitude/longitude in degrees with altitude in kilometres above the sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geodetic {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

impl Geodetic {
    pub const fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }

    /// A point on the surface (altitude zero), as used for route endpoints.
    pub const fn ground(latitude: f64, longitude: f64) -> Self {
        Self::new(latitude, longitude, 0.0)
    }

    pub fn to_cartesian(&self) -> Point3D {
        lat_lon_alt_to_xyz(self.latitude, self.longitude, self.altitude)
    }
}

impl From<Geodetic> for Point3D {
    fn from(value: Geodetic) -> Self {
        value.to_cartesian()
    }
}

/// Convert latitude/longitude (degrees) and altitude (km) to Cartesian coordinates.
///
/// NaN inputs are not trapped and propagate into the result.
pub fn lat_lon_alt_to_xyz(lat: f64, lon: f64, alt: f64) -> Point3D {
    let radius = EARTH_RADIUS_KM + alt;
    let (sin_lat, cos_lat) = lat.to_radians().sin_cos();
    let (sin_lon, cos_lon) = lon.to_radians().sin_cos();

    Point3D {
        x: radius * cos_lat * cos_lon,
        y: radius * cos_lat * sin_lon,
        z: radius * sin_lat,
    }
}
