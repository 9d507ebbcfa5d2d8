//! Data parallel batch drivers, running on the rayon thread pool.
//! They share the exact contract of their sequential counterparts
//! in [crate::batch]: points are independent, each worker writes a disjoint
//! set of interleaved slots, so no synchronization is required.
use rayon::prelude::*;

#[cfg(feature = "log")]
use log::debug;

use crate::{
    batch::{batch_len, check_input, check_output, check_same_size, interleaved_len},
    geodesy::GeodeticToEcef,
    prelude::Error,
};

/// Minimal number of points a rayon task processes.
pub const MIN_TASK_LEN: usize = 1024;

/// Parallel version of [crate::batch::convert_batch].
/// Same count semantics, same preconditions, same output layout.
pub fn par_convert_batch<P: GeodeticToEcef + Sync + ?Sized>(
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
    debug!(
        "ecef from geodetic: {} points over {} threads",
        n,
        rayon::current_num_threads()
    );

    output[..required]
        .par_chunks_exact_mut(3)
        .zip(latitude[..n].par_iter())
        .zip(longitude[..n].par_iter())
        .zip(elevation[..n].par_iter())
        .with_min_len(MIN_TASK_LEN)
        .for_each(|(((xyz, lat), lon), elev)| {
            xyz.copy_from_slice(&primitive.ecef_from_geodetic(*lat, *lon, *elev));
        });

    Ok(())
}

/// Parallel version of [crate::batch::convert_batch_into].
pub fn par_convert_batch_into<P: GeodeticToEcef + Sync + ?Sized>(
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
    debug!(
        "ecef from geodetic: {} points over {} threads",
        n,
        rayon::current_num_threads()
    );

    output[..n]
        .par_iter_mut()
        .zip(latitude.par_iter())
        .zip(longitude.par_iter())
        .zip(elevation.par_iter())
        .with_min_len(MIN_TASK_LEN)
        .for_each(|(((xyz, lat), lon), elev)| {
            *xyz = primitive.ecef_from_geodetic(*lat, *lon, *elev);
        });

    Ok(())
}
