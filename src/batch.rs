//! Batch drivers.
//!
//! Every driver walks parallel input sequences and writes into caller owned
//! buffers, interleaved 3D vectors being stored as (x, y, z, x, y, z, ..).
//! The point count `n` is signed: `n <= 0` is a no-op that never fails
//! nor writes. Buffer sizes are verified before the first write,
//! so a batch either completes entirely or leaves the outputs untouched.
//! Values beyond the first `n` points (`3n` slots) are never accessed.
//! Geometry is never validated: NaN and infinite values are propagated.
use itertools::izip;

#[cfg(feature = "log")]
use log::{debug, error};

use crate::{
    ellipsoid::Ellipsoid,
    geodesy::{ecef_from_horizontal, ecef_to_horizontal, GeodeticToEcef},
    prelude::Error,
};

/*
 * Number of points to process, None when there is nothing to do
 */
pub(crate) fn batch_len(n: isize) -> Option<usize> {
    usize::try_from(n).ok().filter(|n| *n > 0)
}

/*
 * Number of slots of an interleaved 3D buffer
 */
pub(crate) fn interleaved_len(n: usize) -> Result<usize, Error> {
    n.checked_mul(3).ok_or_else(|| {
        #[cfg(feature = "log")]
        error!("{} points overflow the interleaved layout", n);
        Error::CountOverflow(n)
    })
}

/*
 * Sequences describing the same points must have the same size
 */
pub(crate) fn check_same_size(
    reference: &'static str,
    reference_len: usize,
    name: &'static str,
    len: usize,
) -> Result<(), Error> {
    if len != reference_len {
        #[cfg(feature = "log")]
        error!(
            "{} holds {} values, {} holds {}",
            reference, reference_len, name, len
        );
        return Err(Error::SizeMismatch(reference, name));
    }
    Ok(())
}

pub(crate) fn check_input(name: &'static str, len: usize, required: usize) -> Result<(), Error> {
    if len < required {
        #[cfg(feature = "log")]
        error!("{} holds {} values, {} required", name, len, required);
        return Err(Error::InputTooShort {
            name,
            len,
            required,
        });
    }
    Ok(())
}

pub(crate) fn check_output(name: &'static str, len: usize, required: usize) -> Result<(), Error> {
    if len < required {
        #[cfg(feature = "log")]
        error!("{} buffer holds {} values, {} required", name, len, required);
        return Err(Error::OutputTooSmall {
            name,
            len,
            required,
        });
    }
    Ok(())
}

/// Converts `n` geodetic coordinates to ECEF coordinates.
///
/// Point `i` is described by `latitude[i]`, `longitude[i]` (ddeg) and
/// `elevation[i]` (m); its (x, y, z) ECEF coordinates (m) are written to
/// `output[3i..3i + 3]`. The `primitive` is invoked exactly once per point,
/// in ascending order.
///
/// ```
/// use ecef_batch::prelude::*;
///
/// let latitude = [0.0, 90.0];
/// let longitude = [0.0, 0.0];
/// let elevation = [0.0, 0.0];
/// let mut ecef = [0.0; 6];
///
/// convert_batch(&Ellipsoid::WGS84, &latitude, &longitude, &elevation, &mut ecef, 2)
///     .unwrap();
///
/// assert_eq!(ecef[0], 6_378_137.0);
/// assert!((ecef[5] - 6_356_752.314_245).abs() < 1.0E-6);
/// ```
pub fn convert_batch<P: GeodeticToEcef + ?Sized>(
    primitive: &P,
    latitude: &[f64],
    longitude: &[f64],
    elevation: &[f64],
    output: &mut [f64],
    n: isize,
) -> Result<(), Error> {
    let Some(n) = batch_len(n) else {
        return Ok(());
    };

    let required = interleaved_len(n)?;
    check_input("latitude", latitude.len(), n)?;
    check_input("longitude", longitude.len(), n)?;
    check_input("elevation", elevation.len(), n)?;
    check_output("ecef", output.len(), required)?;

    #[cfg(feature = "log")]
    debug!("ecef from geodetic: {} points", n);

    for (lat, lon, elev, xyz) in izip!(
        &latitude[..n],
        &longitude[..n],
        &elevation[..n],
        output[..required].chunks_exact_mut(3),
    ) {
        xyz.copy_from_slice(&primitive.ecef_from_geodetic(*lat, *lon, *elev));
    }

    Ok(())
}

/// Converts geodetic coordinates to ECEF coordinates, into
/// a typed buffer. The point count is `latitude.len()`:
/// all inputs must have the same size and the output must
/// hold at least as many vectors. Exceeding vectors are untouched.
pub fn convert_batch_into<P: GeodeticToEcef + ?Sized>(
    primitive: &P,
    latitude: &[f64],
    longitude: &[f64],
    elevation: &[f64],
    output: &mut [[f64; 3]],
) -> Result<(), Error> {
    let n = latitude.len();
    check_same_size("latitude", n, "longitude", longitude.len())?;
    check_same_size("latitude", n, "elevation", elevation.len())?;
    check_output("ecef", output.len(), n)?;

    #[cfg(feature = "log")]
    debug!("ecef from geodetic: {} points", n);

    for (lat, lon, elev, xyz) in izip!(latitude, longitude, elevation, output.iter_mut()) {
        *xyz = primitive.ecef_from_geodetic(*lat, *lon, *elev);
    }

    Ok(())
}

/// Converts `n` interleaved ECEF coordinates (m), relative to given
/// [Ellipsoid], to geodetic latitude, longitude (ddeg) and altitude (m).
/// Point `i` is read from `ecef[3i..3i + 3]`.
pub fn ecef_to_geodetic_batch(
    ellipsoid: &Ellipsoid,
    ecef: &[f64],
    latitude: &mut [f64],
    longitude: &mut [f64],
    altitude: &mut [f64],
    n: isize,
) -> Result<(), Error> {
    let Some(n) = batch_len(n) else {
        return Ok(());
    };

    let required = interleaved_len(n)?;
    check_input("ecef", ecef.len(), required)?;
    check_output("latitude", latitude.len(), n)?;
    check_output("longitude", longitude.len(), n)?;
    check_output("altitude", altitude.len(), n)?;

    #[cfg(feature = "log")]
    debug!("ecef to geodetic: {} points", n);

    for (xyz, lat, lon, alt) in izip!(
        ecef[..required].chunks_exact(3),
        &mut latitude[..n],
        &mut longitude[..n],
        &mut altitude[..n],
    ) {
        [*lat, *lon, *alt] = ellipsoid.ecef_to_geodetic([xyz[0], xyz[1], xyz[2]]);
    }

    Ok(())
}

/// Converts `n` horizontal (azimuth, elevation) angles (ddeg), observed
/// at (latitude, longitude) locations (ddeg), to ECEF unit directions.
/// Direction `i` is written to `direction[3i..3i + 3]`.
pub fn ecef_from_horizontal_batch(
    latitude: &[f64],
    longitude: &[f64],
    azimuth: &[f64],
    elevation: &[f64],
    direction: &mut [f64],
    n: isize,
) -> Result<(), Error> {
    let Some(n) = batch_len(n) else {
        return Ok(());
    };

    let required = interleaved_len(n)?;
    check_input("latitude", latitude.len(), n)?;
    check_input("longitude", longitude.len(), n)?;
    check_input("azimuth", azimuth.len(), n)?;
    check_input("elevation", elevation.len(), n)?;
    check_output("direction", direction.len(), required)?;

    #[cfg(feature = "log")]
    debug!("ecef from horizontal: {} directions", n);

    for (lat, lon, az, el, uvw) in izip!(
        &latitude[..n],
        &longitude[..n],
        &azimuth[..n],
        &elevation[..n],
        direction[..required].chunks_exact_mut(3),
    ) {
        uvw.copy_from_slice(&ecef_from_horizontal(*lat, *lon, *az, *el));
    }

    Ok(())
}

/// Converts `n` interleaved ECEF directions, observed at (latitude, longitude)
/// locations (ddeg), to horizontal azimuth and elevation angles (ddeg).
/// Direction `i` is read from `direction[3i..3i + 3]`.
pub fn ecef_to_horizontal_batch(
    latitude: &[f64],
    longitude: &[f64],
    direction: &[f64],
    azimuth: &mut [f64],
    elevation: &mut [f64],
    n: isize,
) -> Result<(), Error> {
    let Some(n) = batch_len(n) else {
        return Ok(());
    };

    let required = interleaved_len(n)?;
    check_input("latitude", latitude.len(), n)?;
    check_input("longitude", longitude.len(), n)?;
    check_input("direction", direction.len(), required)?;
    check_output("azimuth", azimuth.len(), n)?;
    check_output("elevation", elevation.len(), n)?;

    #[cfg(feature = "log")]
    debug!("ecef to horizontal: {} directions", n);

    for (lat, lon, uvw, az, el) in izip!(
        &latitude[..n],
        &longitude[..n],
        direction[..required].chunks_exact(3),
        &mut azimuth[..n],
        &mut elevation[..n],
    ) {
        [*az, *el] = ecef_to_horizontal(*lat, *lon, [uvw[0], uvw[1], uvw[2]]);
    }

    Ok(())
}
