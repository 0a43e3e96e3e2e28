// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CDR size calculator for computing the size of CDR-encoded data.

use super::sink::CdrSink;
use crate::core::{CodecError, Result};

/// CDR size calculator.
///
/// A sink that stores nothing and only counts. Running the encoder over a
/// calculator yields the exact encoded size, header and padding included,
/// so callers can size a buffer before the real write.
///
/// # Example
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use roboschema::encoding::cdr::{CdrCalculator, CdrEncoder, EncapsulationKind};
///
/// let mut encoder = CdrEncoder::with_sink(CdrCalculator::new(), EncapsulationKind::CdrLe)?;
/// encoder.int32(7)?;     // 4 bytes
/// encoder.uint8(1)?;     // 1 byte
/// encoder.string("abcd")?; // 3 padding + 4 (length) + 4 + 1 (NUL)
/// assert_eq!(encoder.into_sink().size(), 4 + 4 + 1 + 3 + 4 + 5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct CdrCalculator {
    size: usize,
}

impl CdrCalculator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes counted so far.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    fn grow(&mut self, count: usize) -> Result<()> {
        self.size = self
            .size
            .checked_add(count)
            .ok_or_else(|| CodecError::invalid_argument("encoded size overflows usize"))?;
        Ok(())
    }
}

impl CdrSink for CdrCalculator {
    fn put(&mut self, bytes: &[u8]) -> Result<()> {
        self.grow(bytes.len())
    }

    fn put_zeros(&mut self, count: usize) -> Result<()> {
        self.grow(count)
    }

    #[inline]
    fn position(&self) -> usize {
        self.size
    }
}
