#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

/*
 * Vectorized geodetic <-> ECEF conversions.
 * Shipped under both Apache-2.0 and MIT License.
 *
 * Angles are decimal degrees, distances are meters, everywhere.
 */

pub mod batch;
pub mod cfg;
pub mod converter;
pub mod ellipsoid;
pub mod geodesy;
pub mod point;

mod error;

#[cfg(feature = "parallel")]
#[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
pub mod parallel;

#[cfg(test)]
mod tests;

/// Package to include all basic structures
pub mod prelude {
    pub use crate::{
        batch::{
            convert_batch, convert_batch_into, ecef_from_horizontal_batch,
            ecef_to_geodetic_batch, ecef_to_horizontal_batch,
        },
        cfg::BatchConfig,
        converter::Converter,
        ellipsoid::Ellipsoid,
        error::Error,
        geodesy::{ecef_from_horizontal, ecef_to_horizontal, GeodeticToEcef},
        point::GeodeticPoint,
    };

    #[cfg(feature = "parallel")]
    #[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
    pub use crate::parallel::{par_convert_batch, par_convert_batch_into};
}
