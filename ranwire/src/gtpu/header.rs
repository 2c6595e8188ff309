use byteorder::{ByteOrder, NetworkEndian};

use super::{GtpuFlags, MessageType, NO_MORE_EXTENSION_HEADERS};

/// Length of the mandatory part of the header.
pub const GTPU_BASE_HEADER_LEN: usize = 8;
/// Length of the header when sequence number, N-PDU number and next
/// extension header type are present.
pub const GTPU_EXTENDED_HEADER_LEN: usize = 12;

header_field_range_accessors! {
    (length_field, length_field_mut, 2..4),
    (teid_field, teid_field_mut, 4..8),
    (sequence_field, sequence_field_mut, 8..10),
}

const FLAGS_OFFSET: usize = 0;
const MESSAGE_TYPE_OFFSET: usize = 1;
const NPDU_OFFSET: usize = 10;
const NEXT_EXT_OFFSET: usize = 11;

/// A decoded GTP-U header.
///
/// `sequence_number`, `n_pdu` and `next_ext_hdr_type` are only meaningful
/// when `flags.has_optional_fields()` is true; they are zero otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GtpuHeader {
    /// The first octet.
    pub flags: GtpuFlags,
    /// The second octet.
    pub message_type: MessageType,
    /// Length of everything after the mandatory 8 bytes.
    pub length: u16,
    /// Tunnel endpoint identifier.
    pub teid: u32,
    /// Sequence number, present with S.
    pub sequence_number: u16,
    /// N-PDU number, present with PN.
    pub n_pdu: u8,
    /// Type of the first extension header, present with E.
    pub next_ext_hdr_type: u8,
}

impl Default for GtpuHeader {
    fn default() -> Self {
        Self {
            flags: GtpuFlags::default(),
            message_type: MessageType::G_PDU,
            length: 0,
            teid: 0,
            sequence_number: 0,
            n_pdu: 0,
            next_ext_hdr_type: NO_MORE_EXTENSION_HEADERS,
        }
    }
}

impl GtpuHeader {
    /// A G-PDU header for `length` bytes of user data on tunnel `teid`.
    pub fn g_pdu(teid: u32, length: u16) -> Self {
        Self {
            teid,
            length,
            ..Default::default()
        }
    }

    /// Number of bytes this header occupies on the wire.
    #[inline]
    pub fn header_len(&self) -> usize {
        if self.flags.has_optional_fields() {
            GTPU_EXTENDED_HEADER_LEN
        } else {
            GTPU_BASE_HEADER_LEN
        }
    }

    /// Read the mandatory fields from the first 8 bytes of `buf`.
    ///
    /// # Panics
    /// Panics if `buf` is shorter than [`GTPU_BASE_HEADER_LEN`].
    pub(crate) fn parse_base(buf: &[u8]) -> Self {
        Self {
            flags: GtpuFlags::from(buf[FLAGS_OFFSET]),
            message_type: MessageType::from(buf[MESSAGE_TYPE_OFFSET]),
            length: NetworkEndian::read_u16(length_field(buf)),
            teid: NetworkEndian::read_u32(teid_field(buf)),
            ..Default::default()
        }
    }

    /// Read bytes 8..12 of `buf`.
    ///
    /// # Panics
    /// Panics if `buf` is shorter than [`GTPU_EXTENDED_HEADER_LEN`].
    pub(crate) fn parse_optional(&mut self, buf: &[u8]) {
        self.sequence_number = NetworkEndian::read_u16(sequence_field(buf));
        self.n_pdu = buf[NPDU_OFFSET];
        self.next_ext_hdr_type = buf[NEXT_EXT_OFFSET];
    }

    /// Write the mandatory fields to the first 8 bytes of `buf`. The flag
    /// octet is written as given.
    ///
    /// # Panics
    /// Panics if `buf` is shorter than [`GTPU_BASE_HEADER_LEN`].
    pub(crate) fn emit_base(&self, buf: &mut [u8]) {
        buf[FLAGS_OFFSET] = self.flags.raw();
        buf[MESSAGE_TYPE_OFFSET] = self.message_type.raw();
        NetworkEndian::write_u16(length_field_mut(buf), self.length);
        NetworkEndian::write_u32(teid_field_mut(buf), self.teid);
    }

    /// Write bytes 8..12 of `buf`. Extension headers are never emitted, so
    /// the next extension header type is always zero.
    ///
    /// # Panics
    /// Panics if `buf` is shorter than [`GTPU_EXTENDED_HEADER_LEN`].
    pub(crate) fn emit_optional(&self, buf: &mut [u8]) {
        NetworkEndian::write_u16(sequence_field_mut(buf), self.sequence_number);
        buf[NPDU_OFFSET] = self.n_pdu;
        buf[NEXT_EXT_OFFSET] = NO_MORE_EXTENSION_HEADERS;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_base_header() {
        let mut buf = [0xee; 10];
        GtpuHeader::g_pdu(0x12345678, 100).emit_base(&mut buf);
        assert_eq!(
            buf,
            [0x30, 0xff, 0x00, 0x64, 0x12, 0x34, 0x56, 0x78, 0xee, 0xee]
        );
    }

    #[test]
    fn emit_and_parse_extended_header() {
        let header = GtpuHeader {
            flags: GtpuFlags::default().with_sequence(true),
            sequence_number: 0xbeef,
            n_pdu: 7,
            next_ext_hdr_type: 0x85,
            ..GtpuHeader::g_pdu(1, 4)
        };
        assert_eq!(header.header_len(), GTPU_EXTENDED_HEADER_LEN);

        let mut buf = [0; GTPU_EXTENDED_HEADER_LEN];
        header.emit_base(&mut buf);
        header.emit_optional(&mut buf);
        assert_eq!(
            buf,
            [0x32, 0xff, 0x00, 0x04, 0x00, 0x00, 0x00, 0x01, 0xbe, 0xef, 0x07, 0x00]
        );

        let mut parsed = GtpuHeader::parse_base(&buf);
        assert_eq!(parsed.sequence_number, 0);
        parsed.parse_optional(&buf);
        assert_eq!(
            parsed,
            GtpuHeader {
                next_ext_hdr_type: NO_MORE_EXTENSION_HEADERS,
                ..header
            }
        );
    }
}
