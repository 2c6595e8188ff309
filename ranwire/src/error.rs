//! Error types returned by the codecs.
//!
//! Every rejection names the precondition that failed. None of them is fatal:
//! the caller decides whether to drop, log or escalate.

use thiserror::Error;

use crate::gtpu::MessageType;

/// Errors from [`GtpuCodec`](crate::gtpu::GtpuCodec).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GtpuError {
    /// The version field is not GTP v1.
    #[error("unsupported GTP-U version {0}")]
    UnsupportedVersion(u8),

    /// The protocol type bit selects GTP' instead of GTP.
    #[error("unsupported protocol type {0}, only GTP is handled")]
    UnsupportedProtocolType(u8),

    /// The E flag is set; extension headers are not interpreted.
    #[error("GTP-U extension headers are not supported")]
    UnsupportedExtension,

    /// The message type is outside the set handled in this direction.
    #[error("unsupported GTP-U message type {0}")]
    UnsupportedMessageType(MessageType),

    /// Not enough head-room in front of the payload to prepend the header.
    #[error("no room for GTP-U header: needed {needed} bytes of head-room, have {available}")]
    InsufficientHeadroom {
        /// Header length to be prepended.
        needed: usize,
        /// Head-room in front of the window.
        available: usize,
    },

    /// The payload does not fit the 16-bit length field.
    #[error("payload of {0} bytes does not fit a GTP-U length field")]
    PayloadTooLong(usize),

    /// The buffer ends before the header does.
    #[error("truncated GTP-U header: needed {needed} bytes, have {available}")]
    TruncatedHeader {
        /// Header length implied by the flags.
        needed: usize,
        /// Bytes left in the window.
        available: usize,
    },
}

/// Errors from the SLIV codec.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlivError {
    /// The resource grid has no units, so no allocation exists.
    #[error("resource grid size must be non-zero")]
    EmptyGrid,

    /// The grid is too large for its SLIVs to fit a `u32`.
    #[error("resource grid size {0} exceeds {max}", max = crate::sliv::MAX_GRID_SIZE)]
    GridTooLarge(u32),

    /// Start or length fall outside the grid.
    #[error("invalid allocation: start {start}, length {length} in a grid of {grid_size}")]
    InvalidAllocation {
        /// Grid size `N`.
        grid_size: u32,
        /// Requested start `S`.
        start: u32,
        /// Requested length `L`.
        length: u32,
    },
}

/// Crate-level error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A GTP-U header was rejected.
    #[error("GTP-U: {0}")]
    Gtpu(#[from] GtpuError),

    /// A SLIV conversion was rejected.
    #[error("SLIV: {0}")]
    Sliv(#[from] SlivError),
}
