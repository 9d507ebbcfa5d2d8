use thiserror::Error;

/// Errors that may rise when preparing a batch conversion.
/// Geometry is never validated: only buffer layouts
/// and reference ellipsoid names are.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// An input sequence holds fewer values than the point count
    #[error("{name} holds {len} values, {required} required")]
    InputTooShort {
        name: &'static str,
        len: usize,
        required: usize,
    },
    /// An output buffer cannot hold the whole batch
    #[error("{name} buffer holds {len} values, {required} required")]
    OutputTooSmall {
        name: &'static str,
        len: usize,
        required: usize,
    },
    /// Two parallel sequences should describe the same points
    #[error("{0} and {1} must have the same size")]
    SizeMismatch(&'static str, &'static str),
    /// Interleaved coordinates must be n x 3
    #[error("interleaved coordinates must be n x 3, got {0} values")]
    NotInterleaved(usize),
    /// 3 x N does not fit in memory
    #[error("point count {0} overflows the interleaved layout")]
    CountOverflow(usize),
    #[error("unknown ellipsoid \"{0}\"")]
    UnknownEllipsoid(String),
}
