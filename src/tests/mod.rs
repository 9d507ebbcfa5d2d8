//! ecef-batch test modules




#[cfg(feature = "log")]
mod logging;
