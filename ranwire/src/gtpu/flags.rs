use core::fmt;

/// Version value carried by GTP v1 headers.
pub const GTPU_VERSION_V1: u8 = 1;
/// Protocol type bit for GTP.
pub const GTP_PROTO: u8 = 1;
/// Protocol type bit for GTP' (charging).
pub const GTP_PRIME_PROTO: u8 = 0;

const VERSION_SHIFT: u8 = 5;
const PROTOCOL_TYPE_SHIFT: u8 = 4;
const SPARE_SHIFT: u8 = 3;
const E_FLAG: u8 = 0x04;
const S_FLAG: u8 = 0x02;
const PN_FLAG: u8 = 0x01;

/// The first header octet: `[version:3][PT:1][spare:1][E:1][S:1][PN:1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GtpuFlags(u8);

impl GtpuFlags {
    /// Wrap a raw flag octet.
    #[inline]
    pub const fn from_raw(value: u8) -> Self {
        Self(value)
    }

    /// The raw flag octet.
    #[inline]
    pub const fn raw(&self) -> u8 {
        self.0
    }

    /// The 3-bit version field.
    #[inline]
    pub const fn version(&self) -> u8 {
        self.0 >> VERSION_SHIFT
    }

    /// The protocol type bit: [`GTP_PROTO`] or [`GTP_PRIME_PROTO`].
    #[inline]
    pub const fn protocol_type(&self) -> u8 {
        (self.0 >> PROTOCOL_TYPE_SHIFT) & 0x1
    }

    /// The spare bit.
    #[inline]
    pub const fn spare(&self) -> u8 {
        (self.0 >> SPARE_SHIFT) & 0x1
    }

    /// The E flag: an extension header follows.
    #[inline]
    pub const fn extension_header(&self) -> bool {
        self.0 & E_FLAG != 0
    }

    /// The S flag: the sequence number is present.
    #[inline]
    pub const fn sequence(&self) -> bool {
        self.0 & S_FLAG != 0
    }

    /// The PN flag: the N-PDU number is present.
    #[inline]
    pub const fn npdu(&self) -> bool {
        self.0 & PN_FLAG != 0
    }

    /// True when any of E, S or PN is set, which makes the header 12 bytes long.
    #[inline]
    pub const fn has_optional_fields(&self) -> bool {
        self.0 & (E_FLAG | S_FLAG | PN_FLAG) != 0
    }

    /// Replace the version field. Only the low 3 bits of `value` are kept.
    #[inline]
    pub const fn with_version(self, value: u8) -> Self {
        Self((self.0 & 0x1f) | ((value & 0x7) << VERSION_SHIFT))
    }

    /// Replace the protocol type bit. Only the low bit of `value` is kept.
    #[inline]
    pub const fn with_protocol_type(self, value: u8) -> Self {
        Self((self.0 & !(1 << PROTOCOL_TYPE_SHIFT)) | ((value & 0x1) << PROTOCOL_TYPE_SHIFT))
    }

    /// Set or clear the E flag.
    #[inline]
    pub const fn with_extension_header(self, value: bool) -> Self {
        self.with_bit(E_FLAG, value)
    }

    /// Set or clear the S flag.
    #[inline]
    pub const fn with_sequence(self, value: bool) -> Self {
        self.with_bit(S_FLAG, value)
    }

    /// Set or clear the PN flag.
    #[inline]
    pub const fn with_npdu(self, value: bool) -> Self {
        self.with_bit(PN_FLAG, value)
    }

    #[inline]
    const fn with_bit(self, mask: u8, value: bool) -> Self {
        if value {
            Self(self.0 | mask)
        } else {
            Self(self.0 & !mask)
        }
    }
}

impl Default for GtpuFlags {
    /// Version 1, GTP, no optional fields.
    fn default() -> Self {
        Self(0)
            .with_version(GTPU_VERSION_V1)
            .with_protocol_type(GTP_PROTO)
    }
}

impl From<u8> for GtpuFlags {
    #[inline]
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<GtpuFlags> for u8 {
    #[inline]
    fn from(value: GtpuFlags) -> u8 {
        value.0
    }
}

impl fmt::Display for GtpuFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02x}", self.0)
    }
}
