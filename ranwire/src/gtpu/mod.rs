//! GTP-U header codec, 3GPP TS 29.281 section 5.
//!
//! The codec frames user-plane packets in place: [`GtpuCodec::write_header`]
//! prepends the header into the head-room of a [`PktBufMut`](crate::PktBufMut)
//! and [`GtpuCodec::read_header`] strips it by advancing the window. Rejected
//! input never touches the buffer.
//!
//! ```
//! use ranwire::gtpu::{GtpuCodec, GtpuHeader, MessageType, GTPU_BASE_HEADER_LEN};
//! use ranwire::{Buf, CursorMut};
//!
//! let mut bytes = [0u8; 64];
//! let mut buf = CursorMut::with_headroom(&mut bytes[..], 16);
//! let codec = GtpuCodec::default();
//!
//! codec
//!     .write_header(&GtpuHeader::g_pdu(0x12345678, 48), &mut buf)
//!     .unwrap();
//! assert_eq!(buf.remaining(), 48 + GTPU_BASE_HEADER_LEN);
//!
//! let header = codec.read_header(&mut buf).unwrap();
//! assert_eq!(header.teid, 0x12345678);
//! assert_eq!(header.message_type, MessageType::G_PDU);
//! assert_eq!(buf.remaining(), 48);
//! ```

mod codec;
mod flags;
mod header;

pub use codec::{GtpuCodec, HeaderReadMode, HeaderWriteMode};
pub use flags::{GtpuFlags, GTPU_VERSION_V1, GTP_PRIME_PROTO, GTP_PROTO};
pub use header::{GtpuHeader, GTPU_BASE_HEADER_LEN, GTPU_EXTENDED_HEADER_LEN};

/// Next-extension-header value meaning no extension header follows.
pub const NO_MORE_EXTENSION_HEADERS: u8 = 0;

enum_sim! {
    /// GTP-U message type, TS 29.281 table 6.1-1.
    pub struct MessageType (u8) {
        /// Path management: echo request.
        ECHO_REQUEST = 1,
        /// Path management: echo response.
        ECHO_RESPONSE = 2,
        /// Tunnel management: error indication.
        ERROR_INDICATION = 26,
        /// Path management: supported extension headers notification.
        SUPPORTED_EXTENSION_HEADERS_NOTIFICATION = 31,
        /// Tunnel management: end marker.
        END_MARKER = 254,
        /// Encapsulated user data.
        G_PDU = 255,
    }
}
