//! Allocating conversion façade
use crate::{
    batch::{
        check_same_size, convert_batch, convert_batch_into, ecef_from_horizontal_batch,
        ecef_to_geodetic_batch, ecef_to_horizontal_batch,
    },
    cfg::BatchConfig,
    ellipsoid::Ellipsoid,
    prelude::Error,
};

#[cfg(feature = "log")]
use log::{error, trace};

/*
 * Number of interleaved vectors, rejecting anything that is not n x 3
 */
fn interleaved_count(values: &[f64]) -> Result<usize, Error> {
    if values.len() < 3 || values.len() % 3 != 0 {
        #[cfg(feature = "log")]
        error!("{} values do not describe n x 3 coordinates", values.len());
        Err(Error::NotInterleaved(values.len()))
    } else {
        Ok(values.len() / 3)
    }
}

/*
 * Batch drivers take signed counts, slice lengths always fit
 */
fn signed(n: usize) -> Result<isize, Error> {
    isize::try_from(n).map_err(|_| {
        #[cfg(feature = "log")]
        error!("{} points overflow the signed point count", n);
        Error::CountOverflow(n)
    })
}

/// [Converter] applies batch conversions relative to a single
/// [Ellipsoid], allocating and returning the results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Converter {
    cfg: BatchConfig,
}

impl Converter {
    /// Builds a new [Converter] from given [BatchConfig]
    pub fn new(cfg: BatchConfig) -> Self {
        #[cfg(feature = "log")]
        trace!("converter: {} ellipsoid", cfg.ellipsoid);
        Self { cfg }
    }

    /// Builds a [Converter] working on the WGS84 ellipsoid,
    /// without parallel processing
    pub fn wgs84() -> Self {
        Self::default()
    }

    /// Reference [Ellipsoid]
    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.cfg.ellipsoid
    }

    /// [BatchConfig] in use
    pub fn config(&self) -> &BatchConfig {
        &self.cfg
    }

    /*
     * True if this batch should be processed in parallel
     */
    #[cfg(feature = "parallel")]
    fn parallel(&self, n: usize) -> bool {
        self.cfg.parallel && n >= self.cfg.parallel_threshold
    }

    /// Converts `n` geodetic coordinates into caller owned interleaved ECEF
    /// buffer. See [crate::batch::convert_batch] for the complete contract.
    /// Runs in parallel when enabled and `n` reaches the configured threshold.
    pub fn convert_batch(
        &self,
        latitude: &[f64],
        longitude: &[f64],
        elevation: &[f64],
        output: &mut [f64],
        n: isize,
    ) -> Result<(), Error> {
        #[cfg(feature = "parallel")]
        {
            if n > 0 && self.parallel(n as usize) {
                #[cfg(feature = "log")]
                trace!("parallel batch: {} points", n);
                return crate::parallel::par_convert_batch(
                    &self.cfg.ellipsoid,
                    latitude,
                    longitude,
                    elevation,
                    output,
                    n,
                );
            }
        }
        convert_batch(&self.cfg.ellipsoid, latitude, longitude, elevation, output, n)
    }

    /// Converts geodetic coordinates (ddeg, ddeg, m) to ECEF coordinates (m).
    /// All inputs must have the same size.
    pub fn ecef_from_geodetic(
        &self,
        latitude: &[f64],
        longitude: &[f64],
        elevation: &[f64],
    ) -> Result<Vec<[f64; 3]>, Error> {
        let n = latitude.len();
        check_same_size("latitude", n, "longitude", longitude.len())?;
        check_same_size("latitude", n, "elevation", elevation.len())?;

        let mut ecef = vec![[0.0_f64; 3]; n];

        #[cfg(feature = "parallel")]
        {
            if self.parallel(n) {
                #[cfg(feature = "log")]
                trace!("parallel batch: {} points", n);
                crate::parallel::par_convert_batch_into(
                    &self.cfg.ellipsoid,
                    latitude,
                    longitude,
                    elevation,
                    &mut ecef,
                )?;
                return Ok(ecef);
            }
        }

        convert_batch_into(&self.cfg.ellipsoid, latitude, longitude, elevation, &mut ecef)?;
        Ok(ecef)
    }

    /// Converts interleaved ECEF coordinates (m) to geodetic
    /// (latitude, longitude, altitude) sequences (ddeg, ddeg, m).
    /// `ecef` must be n x 3.
    pub fn ecef_to_geodetic(&self, ecef: &[f64]) -> Result<(Vec<f64>, Vec<f64>, Vec<f64>), Error> {
        let n = interleaved_count(ecef)?;

        let mut latitude = vec![0.0_f64; n];
        let mut longitude = vec![0.0_f64; n];
        let mut altitude = vec![0.0_f64; n];

        ecef_to_geodetic_batch(
            &self.cfg.ellipsoid,
            ecef,
            &mut latitude,
            &mut longitude,
            &mut altitude,
            signed(n)?,
        )?;

        Ok((latitude, longitude, altitude))
    }

    /// Converts horizontal angles (ddeg), observed at geodetic locations (ddeg),
    /// to ECEF unit directions. All inputs must have the same size.
    pub fn ecef_from_horizontal(
        &self,
        latitude: &[f64],
        longitude: &[f64],
        azimuth: &[f64],
        elevation: &[f64],
    ) -> Result<Vec<[f64; 3]>, Error> {
        let n = latitude.len();
        check_same_size("latitude", n, "longitude", longitude.len())?;
        check_same_size("latitude", n, "azimuth", azimuth.len())?;
        check_same_size("latitude", n, "elevation", elevation.len())?;

        let mut flat = vec![0.0_f64; 3 * n];
        ecef_from_horizontal_batch(latitude, longitude, azimuth, elevation, &mut flat, signed(n)?)?;

        Ok(flat
            .chunks_exact(3)
            .map(|uvw| [uvw[0], uvw[1], uvw[2]])
            .collect())
    }

    /// Converts interleaved ECEF directions, observed at geodetic locations (ddeg),
    /// to (azimuth, elevation) sequences (ddeg).
    /// `direction` must be n x 3, with n the size of both location sequences.
    pub fn ecef_to_horizontal(
        &self,
        latitude: &[f64],
        longitude: &[f64],
        direction: &[f64],
    ) -> Result<(Vec<f64>, Vec<f64>), Error> {
        let n = latitude.len();
        check_same_size("latitude", n, "longitude", longitude.len())?;
        check_same_size("latitude", n, "direction", interleaved_count(direction)?)?;

        let mut azimuth = vec![0.0_f64; n];
        let mut elevation = vec![0.0_f64; n];

        ecef_to_horizontal_batch(
            latitude,
            longitude,
            direction,
            &mut azimuth,
            &mut elevation,
            signed(n)?,
        )?;

        Ok((azimuth, elevation))
    }
}
