// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Encapsulation header: the 4 bytes in front of every CDR payload.
//!
//! ```text
//! byte 0..2  representation identifier (big-endian u16)
//! byte 2..4  representation options (always 00 00)
//! ```

use std::fmt;

use crate::core::{CodecError, Result};

/// Size of the encapsulation header in bytes.
pub const CDR_HEADER_SIZE: usize = 4;

/// Representation identifier of an encapsulated payload.
///
/// Only plain CDR in either byte order can be encoded and decoded; the
/// parameter-list and XCDR2 identifiers are recognized so that error
/// messages can name them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EncapsulationKind {
    CdrBe,
    #[default]
    CdrLe,
    PlCdrBe,
    PlCdrLe,
    Cdr2Be,
    Cdr2Le,
    DCdr2Be,
    DCdr2Le,
    PlCdr2Be,
    PlCdr2Le,
}

impl EncapsulationKind {
    /// Representation identifier as written on the wire.
    pub const fn id(self) -> u16 {
        match self {
            EncapsulationKind::CdrBe => 0x0000,
            EncapsulationKind::CdrLe => 0x0001,
            EncapsulationKind::PlCdrBe => 0x0002,
            EncapsulationKind::PlCdrLe => 0x0003,
            EncapsulationKind::Cdr2Be => 0x0006,
            EncapsulationKind::Cdr2Le => 0x0007,
            EncapsulationKind::DCdr2Be => 0x0008,
            EncapsulationKind::DCdr2Le => 0x0009,
            EncapsulationKind::PlCdr2Be => 0x000a,
            EncapsulationKind::PlCdr2Le => 0x000b,
        }
    }

    /// Look up a representation identifier.
    pub const fn from_id(id: u16) -> Option<Self> {
        Some(match id {
            0x0000 => EncapsulationKind::CdrBe,
            0x0001 => EncapsulationKind::CdrLe,
            0x0002 => EncapsulationKind::PlCdrBe,
            0x0003 => EncapsulationKind::PlCdrLe,
            0x0006 => EncapsulationKind::Cdr2Be,
            0x0007 => EncapsulationKind::Cdr2Le,
            0x0008 => EncapsulationKind::DCdr2Be,
            0x0009 => EncapsulationKind::DCdr2Le,
            0x000a => EncapsulationKind::PlCdr2Be,
            0x000b => EncapsulationKind::PlCdr2Le,
            _ => return None,
        })
    }

    /// Whether the payload is little-endian.
    pub const fn is_little_endian(self) -> bool {
        self.id() & 1 == 1
    }

    /// Whether this crate can read and write the representation.
    pub const fn is_supported(self) -> bool {
        matches!(self, EncapsulationKind::CdrBe | EncapsulationKind::CdrLe)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EncapsulationKind::CdrBe => "CDR_BE",
            EncapsulationKind::CdrLe => "CDR_LE",
            EncapsulationKind::PlCdrBe => "PL_CDR_BE",
            EncapsulationKind::PlCdrLe => "PL_CDR_LE",
            EncapsulationKind::Cdr2Be => "CDR2_BE",
            EncapsulationKind::Cdr2Le => "CDR2_LE",
            EncapsulationKind::DCdr2Be => "D_CDR2_BE",
            EncapsulationKind::DCdr2Le => "D_CDR2_LE",
            EncapsulationKind::PlCdr2Be => "PL_CDR2_BE",
            EncapsulationKind::PlCdr2Le => "PL_CDR2_LE",
        }
    }

    /// The 4 header bytes for this representation.
    pub const fn header(self) -> [u8; CDR_HEADER_SIZE] {
        let id = self.id().to_be_bytes();
        [id[0], id[1], 0x00, 0x00]
    }

    /// Validate a header and return its representation.
    ///
    /// Fails with a malformed-data error for short input, unknown or
    /// unsupported identifiers, and non-zero options.
    pub fn from_header(data: &[u8]) -> Result<Self> {
        let Some(header) = data.get(..CDR_HEADER_SIZE) else {
            return Err(CodecError::buffer_too_short(CDR_HEADER_SIZE, data.len(), 0));
        };
        let id = u16::from_be_bytes([header[0], header[1]]);
        let kind = EncapsulationKind::from_id(id)
            .ok_or_else(|| CodecError::invalid_header(header, "unknown representation"))?;
        if !kind.is_supported() {
            return Err(CodecError::invalid_header(
                header,
                format!("unsupported representation {kind}"),
            ));
        }
        if header[2..] != [0, 0] {
            return Err(CodecError::invalid_header(header, "non-zero options"));
        }
        Ok(kind)
    }

    /// Fail unless this representation can be encoded.
    pub(crate) fn ensure_encodable(self) -> Result<()> {
        if self.is_supported() {
            Ok(())
        } else {
            Err(CodecError::invalid_argument(format!(
                "cannot encode {self}, only CDR_LE and CDR_BE are supported"
            )))
        }
    }
}

impl fmt::Display for EncapsulationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    #[test]
    fn test_header_bytes() {
        assert_eq!(EncapsulationKind::CdrLe.header(), [0x00, 0x01, 0x00, 0x00]);
        assert_eq!(EncapsulationKind::CdrBe.header(), [0x00, 0x00, 0x00, 0x00]);
        assert_eq!(EncapsulationKind::PlCdr2Le.header(), [0x00, 0x0b, 0x00, 0x00]);
    }

    #[test]
    fn test_id_round_trip() {
        for id in 0..=0x0bu16 {
            if let Some(kind) = EncapsulationKind::from_id(id) {
                assert_eq!(kind.id(), id);
            }
        }
        assert!(EncapsulationKind::from_id(0x0004).is_none());
        assert!(EncapsulationKind::from_id(0x0100).is_none());
    }

    #[test]
    fn test_endianness() {
        assert!(EncapsulationKind::CdrLe.is_little_endian());
        assert!(!EncapsulationKind::CdrBe.is_little_endian());
        assert!(EncapsulationKind::Cdr2Le.is_little_endian());
        assert!(!EncapsulationKind::DCdr2Be.is_little_endian());
    }

    #[test]
    fn test_from_header_accepts_plain_cdr() {
        assert_eq!(
            EncapsulationKind::from_header(&[0, 1, 0, 0, 0xAA]).unwrap(),
            EncapsulationKind::CdrLe
        );
        assert_eq!(
            EncapsulationKind::from_header(&[0, 0, 0, 0]).unwrap(),
            EncapsulationKind::CdrBe
        );
    }

    #[test]
    fn test_from_header_rejects() {
        for header in [
            &[0xFF, 0xFF, 0xFF, 0xFF][..],
            &[0x00, 0x07, 0x00, 0x00],
            &[0x00, 0x03, 0x00, 0x00],
            &[0x00, 0x01, 0x00, 0x01],
            &[0x00, 0x01],
        ] {
            let err = EncapsulationKind::from_header(header).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedData, "{header:?}");
        }
    }

    #[test]
    fn test_unknown_header_message() {
        let err = EncapsulationKind::from_header(&[0xFF; 4]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid encapsulation header [ffffffff]: unknown representation"
        );
    }

    #[test]
    fn test_ensure_encodable() {
        assert!(EncapsulationKind::CdrLe.ensure_encodable().is_ok());
        assert!(EncapsulationKind::CdrBe.ensure_encodable().is_ok());
        let err = EncapsulationKind::Cdr2Le.ensure_encodable().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
