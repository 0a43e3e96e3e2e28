// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CDR cursor for reading CDR-encoded data with proper alignment.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use super::encapsulation::{EncapsulationKind, CDR_HEADER_SIZE};
use crate::core::{CodecError, Result};

/// CDR cursor that tracks position and origin for proper alignment.
///
/// Alignment is computed as `(offset - origin) % size` with the origin fixed
/// at the end of the encapsulation header. Nested messages do not move the
/// origin.
///
/// Every read is bounds-checked; running off the end yields a
/// malformed-data error instead of a panic.
///
/// # Example
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use roboschema::encoding::cdr::CdrCursor;
///
/// let data = vec![0x00, 0x01, 0x00, 0x00, 0x2A, 0x00, 0x00, 0x00]; // header + value
/// let mut cursor = CdrCursor::new(&data)?;
/// assert_eq!(cursor.read_u32()?, 42);
/// # Ok(())
/// # }
/// ```
pub struct CdrCursor<'a> {
    /// The data buffer (includes the encapsulation header)
    data: &'a [u8],
    /// Current read position
    offset: usize,
    /// Alignment reference point
    origin: usize,
    /// Representation taken from the header
    kind: EncapsulationKind,
}

impl<'a> CdrCursor<'a> {
    /// Create a cursor over encapsulated data, validating the header.
    ///
    /// The header must name CDR_LE or CDR_BE with zero options.
    pub fn new(data: &'a [u8]) -> Result<Self> {
        let kind = EncapsulationKind::from_header(data)?;
        Ok(Self {
            data,
            offset: CDR_HEADER_SIZE,
            origin: CDR_HEADER_SIZE,
            kind,
        })
    }

    /// Representation declared by the header.
    #[inline]
    pub fn kind(&self) -> EncapsulationKind {
        self.kind
    }

    #[inline]
    pub fn is_little_endian(&self) -> bool {
        self.kind.is_little_endian()
    }

    /// Current position, counted from the start of the header.
    #[inline]
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Bytes left to read.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.offset)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.data.len()
    }

    /// Skip padding up to the next multiple of `size` past the origin.
    ///
    /// Padding contents are not checked.
    pub fn align(&mut self, size: usize) -> Result<()> {
        let alignment = (self.offset - self.origin) % size;
        if alignment > 0 {
            let padding = size - alignment;
            if padding > self.remaining() {
                return Err(CodecError::buffer_too_short(
                    padding,
                    self.remaining(),
                    self.offset as u64,
                ));
            }
            self.offset += padding;
        }
        Ok(())
    }

    /// Take `count` bytes without alignment.
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        if count > self.remaining() {
            return Err(CodecError::buffer_too_short(
                count,
                self.remaining(),
                self.offset as u64,
            ));
        }
        let start = self.offset;
        self.offset += count;
        Ok(&self.data[start..self.offset])
    }

    /// Align to `size` and take `size` bytes.
    #[inline]
    fn read_aligned(&mut self, size: usize) -> Result<&'a [u8]> {
        self.align(size)?;
        self.read_bytes(size)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let bytes = self.read_aligned(2)?;
        Ok(if self.is_little_endian() {
            LittleEndian::read_u16(bytes)
        } else {
            BigEndian::read_u16(bytes)
        })
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(self.read_u16()? as i16)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let bytes = self.read_aligned(4)?;
        Ok(if self.is_little_endian() {
            LittleEndian::read_u32(bytes)
        } else {
            BigEndian::read_u32(bytes)
        })
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(self.read_u32()? as i32)
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        let bytes = self.read_aligned(8)?;
        Ok(if self.is_little_endian() {
            LittleEndian::read_u64(bytes)
        } else {
            BigEndian::read_u64(bytes)
        })
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(self.read_u64()? as i64)
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_bits(self.read_u32()?))
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_bits(self.read_u64()?))
    }

    /// Read a boolean, rejecting bytes other than 0 and 1.
    pub fn read_bool(&mut self) -> Result<bool> {
        let position = self.offset;
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(CodecError::invalid_discriminant(
                "bool",
                u64::from(other),
                position,
            )),
        }
    }

    /// Read a length-prefixed, NUL-terminated UTF-8 string.
    ///
    /// The length counts the terminator, so it is never zero.
    pub fn read_string(&mut self) -> Result<String> {
        let len = self.read_u32()? as usize;
        let position = self.offset;
        if len == 0 {
            return Err(CodecError::invalid_string(
                position,
                "length 0 leaves no room for the NUL terminator",
            ));
        }
        if len > self.remaining() {
            return Err(CodecError::length_exceeded(len, position, self.data.len()));
        }
        let bytes = self.read_bytes(len)?;
        let (text, nul) = bytes.split_at(len - 1);
        if nul != [0] {
            return Err(CodecError::invalid_string(position, "missing NUL terminator"));
        }
        std::str::from_utf8(text)
            .map(str::to_owned)
            .map_err(|e| CodecError::invalid_string(position, format!("invalid UTF-8: {e}")))
    }

    /// Read a sequence count and check it against the remaining bytes.
    ///
    /// `min_element_size` is the smallest encoding of one element; a count
    /// whose minimal payload cannot fit is rejected before anything is
    /// allocated.
    pub fn read_sequence_length(&mut self, min_element_size: usize) -> Result<usize> {
        let count = self.read_u32()? as usize;
        let needed = count.saturating_mul(min_element_size.max(1));
        if needed > self.remaining() {
            return Err(CodecError::length_exceeded(
                count,
                self.offset,
                self.data.len(),
            ));
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CodecError, ErrorKind};

    const LE: [u8; 4] = [0x00, 0x01, 0x00, 0x00];
    const BE: [u8; 4] = [0x00, 0x00, 0x00, 0x00];

    fn le(payload: &[u8]) -> Vec<u8> {
        let mut data = LE.to_vec();
        data.extend_from_slice(payload);
        data
    }

    #[test]
    fn test_cursor_new() {
        let cursor = CdrCursor::new(&LE).unwrap();
        assert_eq!(cursor.position(), 4);
        assert_eq!(cursor.remaining(), 0);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.kind(), EncapsulationKind::CdrLe);
    }

    #[test]
    fn test_cursor_too_short() {
        let err = CdrCursor::new(&[0x00, 0x01]).err().unwrap();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_cursor_rejects_xcdr2() {
        let err = CdrCursor::new(&[0x00, 0x07, 0x00, 0x00]).err().unwrap();
        assert!(matches!(err, CodecError::InvalidHeader { .. }));
    }

    #[test]
    fn test_read_u8() {
        let data = le(&[0x42, 0xFF]);
        let mut cursor = CdrCursor::new(&data).unwrap();
        assert_eq!(cursor.read_u8().unwrap(), 0x42);
        assert_eq!(cursor.read_u8().unwrap(), 0xFF);
        assert!(cursor.read_u8().is_err());
    }

    #[test]
    fn test_read_u64_origin_after_header() {
        // (4 - 4) % 8 == 0: no padding before the first 8-byte field
        let data = le(&0x123456789ABCDEF0u64.to_le_bytes());
        let mut cursor = CdrCursor::new(&data).unwrap();
        assert_eq!(cursor.read_u64().unwrap(), 0x123456789ABCDEF0);
    }

    #[test]
    fn test_alignment() {
        let mut payload = vec![0x01, 0xAA, 0xAA, 0xAA];
        payload.extend_from_slice(&7u32.to_le_bytes());
        payload.extend_from_slice(&1.5f64.to_le_bytes());
        let data = le(&payload);
        let mut cursor = CdrCursor::new(&data).unwrap();
        assert_eq!(cursor.read_u8().unwrap(), 1);
        assert_eq!(cursor.read_u32().unwrap(), 7);
        assert_eq!(cursor.position(), 12);
        assert_eq!(cursor.read_f64().unwrap(), 1.5);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_align_buffer_too_short() {
        let data = le(&[0x01, 0x00]);
        let mut cursor = CdrCursor::new(&data).unwrap();
        cursor.read_u8().unwrap();
        let err = cursor.align(4).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedData);
    }

    #[test]
    fn test_signed_extremes() {
        let mut payload = Vec::new();
        payload.extend_from_slice(&i16::MIN.to_le_bytes());
        payload.extend_from_slice(&[0, 0]);
        payload.extend_from_slice(&i32::MAX.to_le_bytes());
        payload.extend_from_slice(&i64::MIN.to_le_bytes());
        let data = le(&payload);
        let mut cursor = CdrCursor::new(&data).unwrap();
        assert_eq!(cursor.read_i16().unwrap(), i16::MIN);
        assert_eq!(cursor.read_i32().unwrap(), i32::MAX);
        assert_eq!(cursor.read_i64().unwrap(), i64::MIN);
    }

    #[test]
    fn test_big_endian() {
        let mut data = BE.to_vec();
        data.extend_from_slice(&0x01020304u32.to_be_bytes());
        data.extend_from_slice(&2.25f64.to_be_bytes());
        let mut cursor = CdrCursor::new(&data).unwrap();
        assert!(!cursor.is_little_endian());
        assert_eq!(cursor.read_u32().unwrap(), 0x01020304);
        assert_eq!(cursor.read_f64().unwrap(), 2.25);
    }

    #[test]
    fn test_read_bool() {
        let data = le(&[0, 1, 2]);
        let mut cursor = CdrCursor::new(&data).unwrap();
        assert!(!cursor.read_bool().unwrap());
        assert!(cursor.read_bool().unwrap());
        let err = cursor.read_bool().unwrap_err();
        assert_eq!(err.to_string(), "Unrecognized discriminant 2 for bool at position 6");
    }

    #[test]
    fn test_read_string() {
        let mut payload = 6u32.to_le_bytes().to_vec();
        payload.extend_from_slice(b"hello\0");
        let data = le(&payload);
        let mut cursor = CdrCursor::new(&data).unwrap();
        assert_eq!(cursor.read_string().unwrap(), "hello");
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_read_empty_string() {
        let mut payload = 1u32.to_le_bytes().to_vec();
        payload.push(0);
        let data = le(&payload);
        let mut cursor = CdrCursor::new(&data).unwrap();
        assert_eq!(cursor.read_string().unwrap(), "");
    }

    #[test]
    fn test_read_string_errors() {
        let cases: [(&[u8], fn(&CodecError) -> bool); 4] = [
            (&[0, 0, 0, 0], |e| matches!(e, CodecError::InvalidString { .. })),
            (&[9, 0, 0, 0, b'a', 0], |e| {
                matches!(e, CodecError::LengthExceeded { .. })
            }),
            (&[2, 0, 0, 0, b'a', b'b'], |e| {
                matches!(e, CodecError::InvalidString { .. })
            }),
            (&[3, 0, 0, 0, 0xC3, 0x28, 0], |e| {
                matches!(e, CodecError::InvalidString { .. })
            }),
        ];
        for (payload, check) in cases {
            let data = le(payload);
            let mut cursor = CdrCursor::new(&data).unwrap();
            let err = cursor.read_string().unwrap_err();
            assert!(check(&err), "{payload:?}: {err}");
            assert!(err.is_malformed());
        }
    }

    #[test]
    fn test_sequence_length_plausibility() {
        let mut payload = 3u32.to_le_bytes().to_vec();
        payload.extend_from_slice(&[0; 12]);
        let data = le(&payload);
        let mut cursor = CdrCursor::new(&data).unwrap();
        assert_eq!(cursor.read_sequence_length(4).unwrap(), 3);

        let data = le(&u32::MAX.to_le_bytes());
        let mut cursor = CdrCursor::new(&data).unwrap();
        let err = cursor.read_sequence_length(1).unwrap_err();
        assert!(matches!(err, CodecError::LengthExceeded { .. }));
    }

    #[test]
    fn test_read_bytes_too_short() {
        let data = le(&[1, 2]);
        let mut cursor = CdrCursor::new(&data).unwrap();
        assert_eq!(cursor.read_bytes(0).unwrap(), &[] as &[u8]);
        assert!(cursor.read_bytes(3).is_err());
        assert_eq!(cursor.read_bytes(2).unwrap(), &[1, 2]);
    }
}
