//! Single point transforms.
//! Angles are always expressed in decimal degrees, distances in meters.
use crate::ellipsoid::Ellipsoid;

/// Geodetic to ECEF conversion of a single point.
///
/// Implementors must be pure: the same (latitude, longitude, elevation)
/// triplet always yields the same (x, y, z) triplet, without side effects.
/// Reference frame parameters are part of the implementor itself,
/// they are never passed per call.
pub trait GeodeticToEcef {
    /// Converts latitude and longitude (ddeg) and elevation
    /// above the ellipsoid (m) to ECEF (x, y, z) coordinates (m).
    fn ecef_from_geodetic(&self, latitude: f64, longitude: f64, elevation: f64) -> [f64; 3];
}

impl GeodeticToEcef for Ellipsoid {
    fn ecef_from_geodetic(&self, latitude: f64, longitude: f64, elevation: f64) -> [f64; 3] {
        let (x, y, z) = map_3d::geodetic2ecef(
            latitude.to_radians(),
            longitude.to_radians(),
            elevation,
            (*self).into(),
        );
        [x, y, z]
    }
}

impl<F> GeodeticToEcef for F
where
    F: Fn(f64, f64, f64) -> [f64; 3],
{
    fn ecef_from_geodetic(&self, latitude: f64, longitude: f64, elevation: f64) -> [f64; 3] {
        self(latitude, longitude, elevation)
    }
}

impl Ellipsoid {
    /// Converts ECEF (x, y, z) coordinates (m) to geodetic
    /// (latitude, longitude, altitude) in (ddeg, ddeg, m).
    /// Points of the polar axis map to ±90° and 0° longitude,
    /// the center of the Earth is indeterminate (NaN).
    pub fn ecef_to_geodetic(&self, ecef: [f64; 3]) -> [f64; 3] {
        let [x, y, z] = ecef;
        let (lat, lon, alt) = map_3d::ecef2geodetic(x, y, z, (*self).into());
        [lat.to_degrees(), lon.to_degrees(), alt]
    }
}

/// Converts horizontal angles, observed at given geodetic location,
/// to a unit direction vector expressed in ECEF.
/// Azimuth is counted clockwise from geographic north,
/// elevation positively above the horizon. All angles in ddeg.
pub fn ecef_from_horizontal(
    latitude: f64,
    longitude: f64,
    azimuth: f64,
    elevation: f64,
) -> [f64; 3] {
    let (e, n, u) = map_3d::aer2enu(azimuth.to_radians(), elevation.to_radians(), 1.0);
    let (x, y, z) = map_3d::enu2uvw(e, n, u, latitude.to_radians(), longitude.to_radians());
    [x, y, z]
}

/// Converts an ECEF direction, observed at given geodetic location,
/// to horizontal (azimuth, elevation) angles in ddeg.
/// The direction does not have to be normalized.
/// Azimuth is wrapped to [0; 360[.
pub fn ecef_to_horizontal(latitude: f64, longitude: f64, direction: [f64; 3]) -> [f64; 2] {
    let [x, y, z] = direction;
    let (e, n, u) = map_3d::uvw2enu(x, y, z, latitude.to_radians(), longitude.to_radians());
    let (az, el, _) = map_3d::enu2aer(e, n, u);

    let mut azimuth = az.to_degrees();
    if azimuth >= 360.0 {
        // tiny negative angles round up
        azimuth = 0.0;
    }

    [azimuth, el.to_degrees()]
}
