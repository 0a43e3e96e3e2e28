// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Whole-message CDR codec.
//!
//! [`CdrCodec`] ties the encoder, the calculator and the decoder together
//! behind four operations: encode into a new buffer, measure, encode into a
//! caller buffer (sized mode), and decode. The free functions use the
//! default little-endian codec.

use tracing::debug;

use super::calculator::CdrCalculator;
use super::decoder::CdrDecoder;
use super::encapsulation::EncapsulationKind;
use super::encoder::CdrEncoder;
use super::sink::SliceSink;
use crate::core::{CodecError, MessageValue, Result};
use crate::schema::{registry, MessageSchema};

/// CDR codec carrying the encapsulation used for encoding.
///
/// Decoding follows whatever header the input carries (CDR_LE or CDR_BE),
/// independent of the codec's own kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CdrCodec {
    kind: EncapsulationKind,
}

impl CdrCodec {
    /// Create a codec that encodes with `kind`.
    ///
    /// Encoding fails with an invalid-argument error unless `kind` is
    /// CDR_LE or CDR_BE.
    pub const fn new(kind: EncapsulationKind) -> Self {
        Self { kind }
    }

    pub const fn kind(&self) -> EncapsulationKind {
        self.kind
    }

    /// Encode `message` into a newly allocated buffer.
    pub fn encode(&self, message: &MessageValue) -> Result<Vec<u8>> {
        let mut encoder = CdrEncoder::with_sink(Vec::new(), self.kind)?;
        encoder.encode_message(message)?;
        let data = encoder.into_sink();
        debug!(
            schema = message.schema().name,
            encapsulation = %self.kind,
            bytes = data.len(),
            "Encoded CDR message"
        );
        Ok(data)
    }

    /// Exact number of bytes [`encode`](Self::encode) would produce.
    pub fn encoded_len(&self, message: &MessageValue) -> Result<usize> {
        let mut encoder = CdrEncoder::with_sink(CdrCalculator::new(), self.kind)?;
        encoder.encode_message(message)?;
        Ok(encoder.into_sink().size())
    }

    /// Sized-mode encoding.
    ///
    /// With `None`, returns the required size without writing anything.
    /// With a buffer shorter than required, fails with a buffer-too-small
    /// error reporting the required size and leaves the buffer untouched.
    /// Otherwise writes exactly the required number of bytes at the start
    /// of `buf` and returns that count.
    pub fn encode_sized(&self, message: &MessageValue, buf: Option<&mut [u8]>) -> Result<usize> {
        let required = self.encoded_len(message)?;
        let Some(buf) = buf else {
            return Ok(required);
        };
        if buf.len() < required {
            debug!(
                schema = message.schema().name,
                required,
                capacity = buf.len(),
                "Caller buffer too small for CDR message"
            );
            return Err(CodecError::buffer_too_small(required, buf.len()));
        }
        let mut encoder = CdrEncoder::with_sink(SliceSink::new(&mut buf[..required]), self.kind)?;
        encoder.encode_message(message)?;
        let written = encoder.size();
        debug_assert_eq!(written, required);
        debug!(
            schema = message.schema().name,
            encapsulation = %self.kind,
            bytes = written,
            "Encoded CDR message into caller buffer"
        );
        Ok(written)
    }

    /// Decode `data` as an instance of `schema`.
    ///
    /// Empty input is an invalid argument; every other failure to parse is
    /// malformed data.
    pub fn decode(&self, schema: &'static MessageSchema, data: &[u8]) -> Result<MessageValue> {
        if data.is_empty() {
            return Err(CodecError::invalid_argument(format!(
                "no data to decode as {}",
                schema.name
            )));
        }
        let message = CdrDecoder::new().decode(schema, data).map_err(|e| {
            debug!(schema = schema.name, error = ?e.log_fields(), "CDR decode failed");
            e
        })?;
        debug!(schema = schema.name, bytes = data.len(), "Decoded CDR message");
        Ok(message)
    }

    /// Resolve `name` through the registry, then [`decode`](Self::decode).
    pub fn decode_by_name(&self, name: &str, data: &[u8]) -> Result<MessageValue> {
        let schema = registry::lookup(name).ok_or_else(|| CodecError::type_not_found(name))?;
        self.decode(schema, data)
    }
}

/// Encode as little-endian CDR into a new buffer.
pub fn encode(message: &MessageValue) -> Result<Vec<u8>> {
    CdrCodec::default().encode(message)
}

/// Decode CDR bytes (header included) as an instance of `schema`.
pub fn decode(schema: &'static MessageSchema, data: &[u8]) -> Result<MessageValue> {
    CdrCodec::default().decode(schema, data)
}

/// Exact encoded size of `message`, header included.
pub fn encoded_len(message: &MessageValue) -> Result<usize> {
    CdrCodec::default().encoded_len(message)
}

/// Sized-mode encoding; see [`CdrCodec::encode_sized`].
pub fn encode_sized(message: &MessageValue, buf: Option<&mut [u8]>) -> Result<usize> {
    CdrCodec::default().encode_sized(message, buf)
}
