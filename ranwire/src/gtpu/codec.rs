use slog::{error, o, Discard, Logger};

use super::{
    GtpuFlags, GtpuHeader, MessageType, GTPU_BASE_HEADER_LEN, GTPU_EXTENDED_HEADER_LEN,
    GTPU_VERSION_V1, GTP_PROTO,
};
use crate::error::GtpuError;
use crate::{PktBuf, PktBufMut};

/// How [`GtpuCodec::read_header`] sizes headers and filters message types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderReadMode {
    /// The header is 12 bytes when any of S, E or PN is set. G-PDUs and echo
    /// requests are accepted.
    #[default]
    Standard,
    /// Reproduces a historic reader: the PN flag is ignored when sizing the
    /// header, and the message type test `mt != G_PDU || mt != ECHO_REQUEST`
    /// rejects every message. Useful to check interop against peers built
    /// on that reader.
    Legacy,
}

impl HeaderReadMode {
    /// Wire length of a header carrying `flags`.
    #[inline]
    pub fn header_len(&self, flags: GtpuFlags) -> usize {
        let extended = match self {
            HeaderReadMode::Standard => flags.has_optional_fields(),
            HeaderReadMode::Legacy => flags.sequence() || flags.extension_header(),
        };
        if extended {
            GTPU_EXTENDED_HEADER_LEN
        } else {
            GTPU_BASE_HEADER_LEN
        }
    }

    /// Whether a received message of type `message_type` is handled.
    #[inline]
    pub fn accepts(&self, message_type: MessageType) -> bool {
        match self {
            HeaderReadMode::Standard => {
                message_type == MessageType::G_PDU || message_type == MessageType::ECHO_REQUEST
            }
            HeaderReadMode::Legacy => false,
        }
    }
}

/// How [`GtpuCodec::write_header`] lays out headers carrying S or PN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderWriteMode {
    /// The 12-byte form is written when S or PN is set, so the flag octet
    /// and the header length agree and [`HeaderReadMode::Standard`] reads
    /// the header back.
    #[default]
    Standard,
    /// Exactly 8 bytes are always written and the flag octet is copied as
    /// given, matching a historic writer. Head-room is checked against 8.
    Legacy,
}

impl HeaderWriteMode {
    /// Bytes written for a header carrying `flags`.
    #[inline]
    pub fn header_len(&self, flags: GtpuFlags) -> usize {
        match self {
            HeaderWriteMode::Standard if flags.has_optional_fields() => GTPU_EXTENDED_HEADER_LEN,
            _ => GTPU_BASE_HEADER_LEN,
        }
    }
}

/// Writes and strips GTP-U headers in place.
///
/// The codec holds no per-packet state. Rejections are logged at error level
/// through the configured logger and returned as [`GtpuError`].
#[derive(Debug, Clone)]
pub struct GtpuCodec {
    logger: Logger,
    read_mode: HeaderReadMode,
    write_mode: HeaderWriteMode,
}

impl Default for GtpuCodec {
    fn default() -> Self {
        Self::new(Logger::root(Discard, o!()))
    }
}

impl GtpuCodec {
    /// A codec logging rejections to `logger`, in the standard read and
    /// write modes.
    pub fn new(logger: Logger) -> Self {
        Self {
            logger,
            read_mode: HeaderReadMode::default(),
            write_mode: HeaderWriteMode::default(),
        }
    }

    /// Replace the read mode.
    pub fn with_read_mode(mut self, read_mode: HeaderReadMode) -> Self {
        self.read_mode = read_mode;
        self
    }

    /// Replace the write mode.
    pub fn with_write_mode(mut self, write_mode: HeaderWriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    /// The current read mode.
    pub fn read_mode(&self) -> HeaderReadMode {
        self.read_mode
    }

    /// The current write mode.
    pub fn write_mode(&self) -> HeaderWriteMode {
        self.write_mode
    }

    /// Prepend `header` into the head-room of `buf`.
    ///
    /// Only version 1 GTP data PDUs without extension headers are written.
    /// The header length follows the write mode. On error `buf` is left as
    /// it was.
    pub fn write_header<B: PktBufMut>(
        &self,
        header: &GtpuHeader,
        buf: &mut B,
    ) -> Result<(), GtpuError> {
        let flags = header.flags;
        if flags.version() != GTPU_VERSION_V1 {
            error!(self.logger, "Unhandled GTP-U version"; "flags" => %flags);
            return Err(GtpuError::UnsupportedVersion(flags.version()));
        }
        if flags.protocol_type() != GTP_PROTO {
            error!(self.logger, "Unhandled GTP protocol type"; "flags" => %flags);
            return Err(GtpuError::UnsupportedProtocolType(flags.protocol_type()));
        }
        if flags.extension_header() {
            error!(self.logger, "Unhandled GTP-U header extensions"; "flags" => %flags);
            return Err(GtpuError::UnsupportedExtension);
        }
        let message_type = header.message_type;
        if message_type != MessageType::G_PDU {
            error!(self.logger, "Unhandled GTP-U message type to write"; "message_type" => %message_type);
            return Err(GtpuError::UnsupportedMessageType(message_type));
        }

        let header_len = self.write_mode.header_len(flags);
        let available = buf.chunk_headroom();
        if available < header_len {
            error!(self.logger, "No room in PDU for GTP-U header"; "needed" => header_len, "headroom" => available);
            return Err(GtpuError::InsufficientHeadroom {
                needed: header_len,
                available,
            });
        }

        buf.move_back(header_len);
        let bytes = &mut buf.chunk_mut()[..header_len];
        header.emit_base(bytes);
        if header_len == GTPU_EXTENDED_HEADER_LEN {
            header.emit_optional(bytes);
        }
        Ok(())
    }

    /// Prepend a G-PDU header whose length field covers the whole of `buf`.
    pub fn encapsulate<B: PktBufMut>(
        &self,
        teid: u32,
        buf: &mut B,
    ) -> Result<GtpuHeader, GtpuError> {
        let payload_len = buf.remaining();
        let length = u16::try_from(payload_len).map_err(|_| {
            error!(self.logger, "Payload too long for GTP-U"; "len" => payload_len);
            GtpuError::PayloadTooLong(payload_len)
        })?;
        let header = GtpuHeader::g_pdu(teid, length);
        self.write_header(&header, buf)?;
        Ok(header)
    }

    /// Decode the header at the front of `buf` and strip it.
    ///
    /// On error `buf` is left as it was.
    pub fn read_header<B: PktBuf>(&self, buf: &mut B) -> Result<GtpuHeader, GtpuError> {
        let (header, header_len) = self.peek_header(buf.chunk())?;
        buf.advance(header_len);
        Ok(header)
    }

    /// Decode and validate the header at the front of `bytes` without
    /// consuming anything. Returns the header and its wire length.
    ///
    /// Checks run in this order: version, protocol type, E flag, header
    /// length against the available bytes, message type.
    pub fn peek_header(&self, bytes: &[u8]) -> Result<(GtpuHeader, usize), GtpuError> {
        if bytes.len() < GTPU_BASE_HEADER_LEN {
            error!(self.logger, "Truncated GTP-U header"; "len" => bytes.len());
            return Err(GtpuError::TruncatedHeader {
                needed: GTPU_BASE_HEADER_LEN,
                available: bytes.len(),
            });
        }

        let mut header = GtpuHeader::parse_base(bytes);
        let flags = header.flags;
        if flags.version() != GTPU_VERSION_V1 {
            error!(self.logger, "Unhandled GTP-U version"; "flags" => %flags);
            return Err(GtpuError::UnsupportedVersion(flags.version()));
        }
        if flags.protocol_type() != GTP_PROTO {
            error!(self.logger, "Unhandled GTP protocol type"; "flags" => %flags);
            return Err(GtpuError::UnsupportedProtocolType(flags.protocol_type()));
        }
        if flags.extension_header() {
            error!(self.logger, "Unhandled GTP-U header extensions"; "flags" => %flags);
            return Err(GtpuError::UnsupportedExtension);
        }

        let header_len = self.read_mode.header_len(flags);
        if bytes.len() < header_len {
            error!(self.logger, "Truncated GTP-U header"; "flags" => %flags, "len" => bytes.len());
            return Err(GtpuError::TruncatedHeader {
                needed: header_len,
                available: bytes.len(),
            });
        }
        if header_len == GTPU_EXTENDED_HEADER_LEN {
            header.parse_optional(bytes);
        }

        let message_type = header.message_type;
        if !self.read_mode.accepts(message_type) {
            error!(self.logger, "Unhandled GTP-U message type"; "message_type" => %message_type);
            return Err(GtpuError::UnsupportedMessageType(message_type));
        }

        Ok((header, header_len))
    }
}
