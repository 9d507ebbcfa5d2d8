//! Reference ellipsoids
use crate::prelude::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [Ellipsoid] approximates the Earth surface, as an oblate spheroid.
/// All geodetic coordinates are expressed relative to one of these.
#[derive(Default, Copy, Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Ellipsoid {
    /// World Geodetic System 1984, used by GPS
    #[default]
    WGS84,
    /// World Geodetic System 1972
    WGS72,
    /// World Geodetic System 1966
    WGS66,
    /// World Geodetic System 1960
    WGS60,
    /// Glonass reference frame
    PZ90,
    /// Beidou reference frame, also known as CGCS2000
    BDC,
    /// Geodetic Reference System 1980, used by ITRF realizations
    GRS80,
    Bessel,
    Airy,
    International,
}

impl From<Ellipsoid> for map_3d::Ellipsoid {
    fn from(ellipsoid: Ellipsoid) -> Self {
        match ellipsoid {
            Ellipsoid::WGS84 => Self::WGS84,
            Ellipsoid::WGS72 => Self::WGS72,
            Ellipsoid::WGS66 => Self::WGS66,
            Ellipsoid::WGS60 => Self::WGS60,
            Ellipsoid::PZ90 => Self::PZ90,
            Ellipsoid::BDC => Self::BDC,
            Ellipsoid::GRS80 => Self::GRS80,
            Ellipsoid::Bessel => Self::Bessel,
            Ellipsoid::Airy => Self::Airy,
            Ellipsoid::International => Self::International,
        }
    }
}

impl Ellipsoid {
    /// All supported [Ellipsoid]s
    pub const ALL: [Self; 10] = [
        Self::WGS84,
        Self::WGS72,
        Self::WGS66,
        Self::WGS60,
        Self::PZ90,
        Self::BDC,
        Self::GRS80,
        Self::Bessel,
        Self::Airy,
        Self::International,
    ];

    /// Semi-major (equatorial) axis, in meters
    pub fn semi_major_axis(&self) -> f64 {
        map_3d::Ellipsoid::from(*self).parameters().0
    }

    /// Semi-minor (polar) axis, in meters
    pub fn semi_minor_axis(&self) -> f64 {
        map_3d::Ellipsoid::from(*self).parameters().1
    }

    /// Flattening: (a - b) / a
    pub fn flattening(&self) -> f64 {
        map_3d::Ellipsoid::from(*self).parameters().2
    }

    /// First eccentricity squared: (a² - b²) / a²
    pub fn eccentricity_squared(&self) -> f64 {
        map_3d::Ellipsoid::from(*self).parameters().3
    }

    /// Radius of curvature in the prime vertical, at given
    /// geodetic latitude expressed in ddeg.
    pub fn prime_vertical_radius(&self, latitude: f64) -> f64 {
        map_3d::get_radius_normal(latitude.to_radians(), (*self).into())
    }
}

impl std::fmt::Display for Ellipsoid {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::WGS84 => f.write_str("WGS84"),
            Self::WGS72 => f.write_str("WGS72"),
            Self::WGS66 => f.write_str("WGS66"),
            Self::WGS60 => f.write_str("WGS60"),
            Self::PZ90 => f.write_str("PZ90"),
            Self::BDC => f.write_str("BDC"),
            Self::GRS80 => f.write_str("GRS80"),
            Self::Bessel => f.write_str("Bessel"),
            Self::Airy => f.write_str("Airy"),
            Self::International => f.write_str("International"),
        }
    }
}

impl std::str::FromStr for Ellipsoid {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_uppercase();
        match name.as_str() {
            "WGS84" | "WGS-84" => Ok(Self::WGS84),
            "WGS72" | "WGS-72" => Ok(Self::WGS72),
            "WGS66" | "WGS-66" => Ok(Self::WGS66),
            "WGS60" | "WGS-60" => Ok(Self::WGS60),
            "PZ90" | "PZ-90" => Ok(Self::PZ90),
            "BDC" | "CGCS2000" => Ok(Self::BDC),
            "GRS80" | "GRS-80" => Ok(Self::GRS80),
            "BESSEL" => Ok(Self::Bessel),
            "AIRY" => Ok(Self::Airy),
            "INTERNATIONAL" => Ok(Self::International),
            _ => Err(Error::UnknownEllipsoid(s.to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn wgs84_parameters() {
        let wgs84 = Ellipsoid::default();
        assert_eq!(wgs84, Ellipsoid::WGS84);
        assert_eq!(wgs84.semi_major_axis(), 6_378_137.0);
        assert!((wgs84.semi_minor_axis() - 6_356_752.314_245).abs() < 1.0E-6);

        let f = 1.0 / 298.257_223_563;
        assert!((wgs84.flattening() - f).abs() < 1.0E-18);
        assert!((wgs84.eccentricity_squared() - f * (2.0 - f)).abs() < 1.0E-15);
        // published value is rounded to 12 significant digits
        assert!((wgs84.eccentricity_squared() - 6.694_379_990_14E-3).abs() < 1.0E-14);

        assert_eq!(wgs84.prime_vertical_radius(0.0), wgs84.semi_major_axis());
    }

    #[test]
    fn parameters() {
        for ellipsoid in Ellipsoid::ALL {
            let (a, b) = (ellipsoid.semi_major_axis(), ellipsoid.semi_minor_axis());
            assert!(b < a, "{}: invalid axes", ellipsoid);
            let f = ellipsoid.flattening();
            assert!((b - a * (1.0 - f)).abs() < 1.0E-9);
            assert!(ellipsoid.prime_vertical_radius(90.0) > a);
        }
        assert_eq!(Ellipsoid::WGS72.semi_major_axis(), 6_378_135.0);
        assert_eq!(Ellipsoid::Bessel.semi_major_axis(), 6_377_397.155);
    }

    #[test]
    fn parsing() {
        for (desc, expected) in [
            ("WGS84", Ellipsoid::WGS84),
            ("wgs-84", Ellipsoid::WGS84),
            (" GRS80 ", Ellipsoid::GRS80),
            ("WGS72", Ellipsoid::WGS72),
            ("cgcs2000", Ellipsoid::BDC),
            ("bessel", Ellipsoid::Bessel),
        ] {
            let ellipsoid = Ellipsoid::from_str(desc).unwrap();
            assert_eq!(ellipsoid, expected);
        }
        assert_eq!(
            Ellipsoid::from_str("Clarke1866"),
            Err(Error::UnknownEllipsoid("Clarke1866".to_string()))
        );
        for ellipsoid in Ellipsoid::ALL {
            let parsed = Ellipsoid::from_str(&ellipsoid.to_string()).unwrap();
            assert_eq!(parsed, ellipsoid);
        }
    }
}
