#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

//! Wire-format codecs for a RAN protocol stack.
//!
//! - [`gtpu`]: the GTP-U tunnelling header, written into and stripped from
//!   packet buffers in place.
//! - [`sliv`]: the start and length indicator value used to signal
//!   contiguous resource allocations.
//!
//! Both codecs are stateless and allocation free.

#[macro_use]
mod macros;

mod traits;
pub use traits::{Buf, PktBuf, PktBufMut};

mod cursors;
pub use cursors::{Cursor, CursorMut};

pub mod error;
pub use error::{Error, GtpuError, SlivError};

pub mod gtpu;
pub mod sliv;
