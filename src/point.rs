use crate::{ellipsoid::Ellipsoid, geodesy::GeodeticToEcef};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geodetic coordinates of a single point
#[derive(Default, Copy, Debug, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeodeticPoint {
    /// Latitude in ddeg
    pub latitude: f64,
    /// Longitude in ddeg
    pub longitude: f64,
    /// Elevation above the reference ellipsoid, in meters
    pub elevation: f64,
}

impl From<(f64, f64, f64)> for GeodeticPoint {
    fn from(lle: (f64, f64, f64)) -> Self {
        Self::new(lle.0, lle.1, lle.2)
    }
}

impl From<GeodeticPoint> for (f64, f64, f64) {
    fn from(val: GeodeticPoint) -> Self {
        (val.latitude, val.longitude, val.elevation)
    }
}

impl GeodeticPoint {
    pub fn new(latitude: f64, longitude: f64, elevation: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation,
        }
    }
    /// Builds Self from ECEF coordinates (m), expressed
    /// relative to given [Ellipsoid]
    pub fn from_ecef(ecef: [f64; 3], ellipsoid: &Ellipsoid) -> Self {
        let [latitude, longitude, elevation] = ellipsoid.ecef_to_geodetic(ecef);
        Self::new(latitude, longitude, elevation)
    }
    /// Converts Self to ECEF coordinates (m)
    pub fn to_ecef<P: GeodeticToEcef + ?Sized>(&self, primitive: &P) -> [f64; 3] {
        primitive.ecef_from_geodetic(self.latitude, self.longitude, self.elevation)
    }
}

impl std::fmt::Display for GeodeticPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "({}°, {}°, {}m)",
            self.latitude, self.longitude, self.elevation
        )
    }
}
