// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Output targets for [`CdrEncoder`](super::CdrEncoder).
//!
//! The encoder only appends; a sink decides where the bytes go. Three sinks
//! exist: a growable `Vec<u8>`, a caller-provided fixed slice
//! ([`SliceSink`]), and the counting [`CdrCalculator`](super::CdrCalculator).

use crate::core::{CodecError, Result};

/// Append-only byte sink.
pub trait CdrSink {
    /// Append `bytes`.
    fn put(&mut self, bytes: &[u8]) -> Result<()>;

    /// Append `count` zero bytes (alignment padding).
    fn put_zeros(&mut self, count: usize) -> Result<()>;

    /// Number of bytes appended so far.
    fn position(&self) -> usize;
}

impl CdrSink for Vec<u8> {
    fn put(&mut self, bytes: &[u8]) -> Result<()> {
        self.try_reserve(bytes.len())
            .map_err(|_| CodecError::allocation(self.len().saturating_add(bytes.len())))?;
        self.extend_from_slice(bytes);
        Ok(())
    }

    fn put_zeros(&mut self, count: usize) -> Result<()> {
        self.try_reserve(count)
            .map_err(|_| CodecError::allocation(self.len().saturating_add(count)))?;
        self.resize(self.len() + count, 0);
        Ok(())
    }

    #[inline]
    fn position(&self) -> usize {
        self.len()
    }
}

/// Sink writing into a caller-provided buffer.
///
/// Writing past the end fails with a buffer-too-small error; bytes already
/// written stay in place.
#[derive(Debug)]
pub struct SliceSink<'a> {
    buf: &'a mut [u8],
    offset: usize,
}

impl<'a> SliceSink<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, offset: 0 }
    }

    /// Total capacity of the underlying buffer.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    fn claim(&mut self, count: usize) -> Result<&mut [u8]> {
        let end = self
            .offset
            .checked_add(count)
            .filter(|end| *end <= self.buf.len())
            .ok_or_else(|| {
                CodecError::buffer_too_small(self.offset.saturating_add(count), self.buf.len())
            })?;
        let start = self.offset;
        self.offset = end;
        Ok(&mut self.buf[start..end])
    }
}

impl CdrSink for SliceSink<'_> {
    fn put(&mut self, bytes: &[u8]) -> Result<()> {
        self.claim(bytes.len())?.copy_from_slice(bytes);
        Ok(())
    }

    fn put_zeros(&mut self, count: usize) -> Result<()> {
        self.claim(count)?.fill(0);
        Ok(())
    }

    #[inline]
    fn position(&self) -> usize {
        self.offset
    }
}
