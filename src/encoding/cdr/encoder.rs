// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CDR encoder for writing CDR-encoded data.

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use tracing::trace;

use super::encapsulation::EncapsulationKind;
use super::sink::CdrSink;
use crate::core::{CodecError, MessageValue, Result, Value};
use crate::schema::{ElementType, FieldType, MessageSchema, PrimitiveType};

/// Default initial capacity for the encoder buffer.
const DEFAULT_CAPACITY: usize = 64;

/// Nesting limit for messages inside messages.
const MAX_DEPTH: usize = 32;

/// Align, then write a fixed-size scalar in the encoder's byte order.
macro_rules! put_ordered {
    ($self:ident, $size:literal, $write:ident, $value:expr) => {{
        $self.align($size)?;
        let mut buf = [0u8; $size];
        if $self.little_endian {
            LittleEndian::$write(&mut buf, $value);
        } else {
            BigEndian::$write(&mut buf, $value);
        }
        $self.sink.put(&buf)?;
        Ok($self)
    }};
}

/// CDR encoder for writing CDR-encoded data.
///
/// The encoder writes the encapsulation header on construction, then
/// appends fields with zero padding so every primitive starts at a multiple
/// of its size counted from the end of the header. It is generic over the
/// output [`CdrSink`]: a `Vec<u8>` by default, a fixed slice, or the
/// counting [`CdrCalculator`](super::CdrCalculator).
///
/// # Example
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use roboschema::encoding::cdr::CdrEncoder;
///
/// let mut encoder = CdrEncoder::new();
/// encoder.int32(42)?;
/// encoder.string("hello")?;
/// let data = encoder.finish();
/// assert_eq!(data.len(), 4 + 4 + 4 + 6);
/// # Ok(())
/// # }
/// ```
pub struct CdrEncoder<S: CdrSink = Vec<u8>> {
    /// Output sink, header included
    sink: S,
    /// Sink position where the payload starts; alignment is relative to it
    origin: usize,
    /// Encapsulation kind
    kind: EncapsulationKind,
    /// Whether to use little endian encoding
    little_endian: bool,
}

impl Default for CdrEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl CdrEncoder {
    /// Create a new encoder with default settings (CDR, little-endian).
    #[must_use]
    pub fn new() -> Self {
        let kind = EncapsulationKind::default();
        let mut buffer = Vec::with_capacity(DEFAULT_CAPACITY);
        buffer.extend_from_slice(&kind.header());
        Self {
            origin: buffer.len(),
            sink: buffer,
            kind,
            little_endian: kind.is_little_endian(),
        }
    }

    /// Create a `Vec`-backed encoder with the specified encapsulation kind.
    pub fn with_kind(kind: EncapsulationKind) -> Result<Self> {
        Self::with_sink(Vec::with_capacity(DEFAULT_CAPACITY), kind)
    }

    /// Consume the encoder and return the encoded data.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.sink
    }
}

impl<S: CdrSink> CdrEncoder<S> {
    /// Create an encoder over `sink`, writing the header for `kind`.
    ///
    /// Only CDR_LE and CDR_BE can be encoded.
    pub fn with_sink(mut sink: S, kind: EncapsulationKind) -> Result<Self> {
        kind.ensure_encodable()?;
        sink.put(&kind.header())?;
        Ok(Self {
            origin: sink.position(),
            sink,
            kind,
            little_endian: kind.is_little_endian(),
        })
    }

    /// Get the encapsulation kind.
    #[must_use]
    pub const fn kind(&self) -> EncapsulationKind {
        self.kind
    }

    /// Bytes written so far, header included.
    #[must_use]
    pub fn size(&self) -> usize {
        self.sink.position()
    }

    /// Consume the encoder and return its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Write zero padding up to the next multiple of `size` past the origin.
    fn align(&mut self, size: usize) -> Result<()> {
        let alignment = (self.sink.position() - self.origin) % size;
        if alignment > 0 {
            self.sink.put_zeros(size - alignment)?;
        }
        Ok(())
    }

    pub fn int8(&mut self, value: i8) -> Result<&mut Self> {
        self.uint8(value as u8)
    }

    pub fn uint8(&mut self, value: u8) -> Result<&mut Self> {
        self.sink.put(&[value])?;
        Ok(self)
    }

    /// Write a boolean as a single `0x00`/`0x01` byte.
    pub fn bool(&mut self, value: bool) -> Result<&mut Self> {
        self.uint8(u8::from(value))
    }

    pub fn int16(&mut self, value: i16) -> Result<&mut Self> {
        put_ordered!(self, 2, write_i16, value)
    }

    pub fn uint16(&mut self, value: u16) -> Result<&mut Self> {
        put_ordered!(self, 2, write_u16, value)
    }

    pub fn int32(&mut self, value: i32) -> Result<&mut Self> {
        put_ordered!(self, 4, write_i32, value)
    }

    pub fn uint32(&mut self, value: u32) -> Result<&mut Self> {
        put_ordered!(self, 4, write_u32, value)
    }

    pub fn int64(&mut self, value: i64) -> Result<&mut Self> {
        put_ordered!(self, 8, write_i64, value)
    }

    pub fn uint64(&mut self, value: u64) -> Result<&mut Self> {
        put_ordered!(self, 8, write_u64, value)
    }

    pub fn float32(&mut self, value: f32) -> Result<&mut Self> {
        put_ordered!(self, 4, write_f32, value)
    }

    pub fn float64(&mut self, value: f64) -> Result<&mut Self> {
        put_ordered!(self, 8, write_f64, value)
    }

    /// Write a string: `u32` length including the NUL, the bytes, the NUL.
    pub fn string(&mut self, value: &str) -> Result<&mut Self> {
        let len = u32::try_from(value.len() + 1).map_err(|_| {
            CodecError::invalid_argument(format!(
                "string of {} bytes does not fit a 32-bit length",
                value.len()
            ))
        })?;
        self.uint32(len)?;
        self.sink.put(value.as_bytes())?;
        self.sink.put(&[0])?;
        Ok(self)
    }

    /// Write a sequence length (for dynamic arrays).
    pub fn sequence_length(&mut self, count: usize) -> Result<&mut Self> {
        let count = u32::try_from(count).map_err(|_| {
            CodecError::invalid_argument(format!(
                "sequence of {count} elements does not fit a 32-bit count"
            ))
        })?;
        trace!(count, "sequence");
        self.uint32(count)
    }

    /// Write raw bytes without alignment.
    pub fn bytes(&mut self, data: &[u8]) -> Result<&mut Self> {
        self.sink.put(data)?;
        Ok(self)
    }

    /// Encode every field of `message` in declaration order.
    ///
    /// The encapsulation header has already been written; nothing follows
    /// the last field.
    pub fn encode_message(&mut self, message: &MessageValue) -> Result<()> {
        self.encode_struct(message, 0)
    }

    fn encode_struct(&mut self, message: &MessageValue, depth: usize) -> Result<()> {
        if depth > MAX_DEPTH {
            return Err(CodecError::invalid_schema(
                message.schema().name,
                format!("nesting deeper than {MAX_DEPTH} levels"),
            ));
        }
        for (field, value) in message.schema().fields.iter().zip(message.values()) {
            self.encode_field(&field.field_type, value, field.name, depth)?;
        }
        Ok(())
    }

    fn encode_field(
        &mut self,
        field_type: &FieldType,
        value: &Value,
        name: &str,
        depth: usize,
    ) -> Result<()> {
        match field_type {
            FieldType::Primitive(prim) => self.encode_primitive(*prim, value, name),
            FieldType::String => {
                let s = value
                    .as_str()
                    .ok_or_else(|| mismatch(name, field_type, value))?;
                self.string(s)?;
                Ok(())
            }
            FieldType::Nested(schema) => {
                let nested = nested_value(*schema, value, name)?;
                self.encode_struct(nested, depth + 1)
            }
            FieldType::Array { element, len } => {
                let actual = value.len().ok_or_else(|| mismatch(name, field_type, value))?;
                if actual != *len {
                    return Err(CodecError::invalid_argument(format!(
                        "field '{name}' is {field_type} but holds {actual} elements"
                    )));
                }
                self.encode_elements(element, value, name, depth)
            }
            FieldType::Sequence(element) => {
                let count = value.len().ok_or_else(|| mismatch(name, field_type, value))?;
                self.sequence_length(count)?;
                self.encode_elements(element, value, name, depth)
            }
        }
    }

    fn encode_elements(
        &mut self,
        element: &ElementType,
        value: &Value,
        name: &str,
        depth: usize,
    ) -> Result<()> {
        match (element, value) {
            (ElementType::Primitive(PrimitiveType::UInt8), Value::Bytes(bytes)) => {
                self.bytes(bytes)?;
                Ok(())
            }
            (_, Value::Array(items)) => {
                let item_type = FieldType::from_element(*element);
                for item in items {
                    self.encode_field(&item_type, item, name, depth)?;
                }
                Ok(())
            }
            _ => Err(CodecError::type_mismatch(
                name,
                format!("elements of {element}"),
                value.type_name(),
            )),
        }
    }

    fn encode_primitive(&mut self, prim: PrimitiveType, value: &Value, name: &str) -> Result<()> {
        match (prim, value) {
            (PrimitiveType::Bool, Value::Bool(v)) => self.bool(*v),
            (PrimitiveType::Int8, Value::Int8(v)) => self.int8(*v),
            (PrimitiveType::Int16, Value::Int16(v)) => self.int16(*v),
            (PrimitiveType::Int32, Value::Int32(v)) => self.int32(*v),
            (PrimitiveType::Int64, Value::Int64(v)) => self.int64(*v),
            (PrimitiveType::UInt8, Value::UInt8(v)) => self.uint8(*v),
            (PrimitiveType::UInt16, Value::UInt16(v)) => self.uint16(*v),
            (PrimitiveType::UInt32, Value::UInt32(v)) => self.uint32(*v),
            (PrimitiveType::UInt64, Value::UInt64(v)) => self.uint64(*v),
            (PrimitiveType::Float32, Value::Float32(v)) => self.float32(*v),
            (PrimitiveType::Float64, Value::Float64(v)) => self.float64(*v),
            _ => return Err(CodecError::type_mismatch(name, prim.as_str(), value.type_name())),
        }?;
        Ok(())
    }
}

fn mismatch(name: &str, field_type: &FieldType, value: &Value) -> CodecError {
    CodecError::type_mismatch(name, field_type.to_string(), value.type_name())
}

fn nested_value<'v>(
    schema: &'static MessageSchema,
    value: &'v Value,
    name: &str,
) -> Result<&'v MessageValue> {
    match value.as_message() {
        Some(msg) if msg.schema().name == schema.name => Ok(msg),
        Some(msg) => Err(CodecError::type_mismatch(name, schema.name, msg.schema().name)),
        None => Err(CodecError::type_mismatch(name, schema.name, value.type_name())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;
    use crate::encoding::cdr::{CdrCalculator, SliceSink};
    use crate::msgs::builtin_interfaces::TIME;
    use crate::msgs::std_msgs::HEADER;
    use crate::schema::{FieldDescriptor, MessageSchema};

    static PADDED: MessageSchema = MessageSchema {
        name: "test_msgs/msg/Padded",
        fields: &[
            FieldDescriptor::new("flag", FieldType::BOOL),
            FieldDescriptor::new("value", FieldType::FLOAT64),
        ],
    };

    static FIXED: MessageSchema = MessageSchema {
        name: "test_msgs/msg/Fixed",
        fields: &[FieldDescriptor::new(
            "rgb",
            FieldType::array(ElementType::FLOAT32, 3),
        )],
    };

    #[test]
    fn test_header_written_first() {
        assert_eq!(CdrEncoder::new().finish(), vec![0x00, 0x01, 0x00, 0x00]);
        let be = CdrEncoder::with_kind(EncapsulationKind::CdrBe).unwrap();
        assert_eq!(be.finish(), vec![0x00, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_rejects_xcdr_kinds() {
        let err = CdrEncoder::with_kind(EncapsulationKind::Cdr2Le).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_primitive_alignment() {
        let mut encoder = CdrEncoder::new();
        encoder.uint8(0xAB).unwrap();
        encoder.uint16(0x0102).unwrap();
        encoder.uint8(0xCD).unwrap();
        encoder.uint64(7).unwrap();
        let data = encoder.finish();
        let mut expected = vec![0, 1, 0, 0, 0xAB, 0, 0x02, 0x01, 0xCD, 0, 0, 0];
        expected.extend_from_slice(&7u64.to_le_bytes());
        assert_eq!(data, expected);
    }

    #[test]
    fn test_big_endian_scalars() {
        let mut encoder = CdrEncoder::with_kind(EncapsulationKind::CdrBe).unwrap();
        encoder.int32(-2).unwrap();
        encoder.float32(1.0).unwrap();
        let data = encoder.finish();
        assert_eq!(&data[4..8], &(-2i32).to_be_bytes());
        assert_eq!(&data[8..12], &1.0f32.to_be_bytes());
    }

    #[test]
    fn test_string_layout() {
        let mut encoder = CdrEncoder::new();
        encoder.string("").unwrap();
        encoder.string("ab").unwrap();
        let data = encoder.finish();
        assert_eq!(
            &data[4..],
            &[1, 0, 0, 0, 0, 0, 0, 0, 3, 0, 0, 0, b'a', b'b', 0]
        );
    }

    #[test]
    fn test_bool_then_double_padding() {
        let msg = MessageValue::new(&PADDED)
            .with("flag", true)
            .unwrap()
            .with("value", 2.5f64)
            .unwrap();
        let mut encoder = CdrEncoder::new();
        encoder.encode_message(&msg).unwrap();
        let data = encoder.finish();
        assert_eq!(data.len(), 4 + 1 + 7 + 8);
        assert_eq!(&data[4..12], &[1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(&data[12..], &2.5f64.to_le_bytes());
    }

    #[test]
    fn test_nested_does_not_reset_origin() {
        let mut header = MessageValue::new(&HEADER);
        header.set_path("stamp.sec", 1i32).unwrap();
        header.set("frame_id", "camera").unwrap();
        let mut encoder = CdrEncoder::new();
        encoder.encode_message(&header).unwrap();
        let data = encoder.finish();
        assert_eq!(data.len(), 4 + 8 + 4 + 7);
        assert_eq!(&data[12..16], &7u32.to_le_bytes());
        assert_eq!(&data[16..], b"camera\0");
    }

    #[test]
    fn test_calculator_matches_vec() {
        let time = MessageValue::new(&TIME).with("sec", 5i32).unwrap();
        let mut calc = CdrEncoder::with_sink(CdrCalculator::new(), EncapsulationKind::CdrLe)
            .unwrap();
        calc.encode_message(&time).unwrap();
        let mut vec = CdrEncoder::new();
        vec.encode_message(&time).unwrap();
        assert_eq!(calc.into_sink().size(), vec.finish().len());
    }

    #[test]
    fn test_slice_sink_too_small() {
        let time = MessageValue::new(&TIME);
        let mut buf = [0u8; 8];
        let mut encoder =
            CdrEncoder::with_sink(SliceSink::new(&mut buf), EncapsulationKind::CdrLe).unwrap();
        let err = encoder.encode_message(&time).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BufferTooSmall);
    }

    #[test]
    fn test_fixed_array_has_no_length_prefix() {
        let mut msg = MessageValue::new(&FIXED);
        msg.set("rgb", vec![1.0f32, 0.5, 0.25]).unwrap();
        let mut encoder = CdrEncoder::new();
        encoder.encode_message(&msg).unwrap();
        let data = encoder.finish();
        assert_eq!(data.len(), 4 + 12);
        assert_eq!(&data[4..8], &1.0f32.to_le_bytes());
    }

    #[test]
    fn test_value_of_wrong_schema_rejected() {
        let wrong = Value::Message(MessageValue::new(&PADDED));
        let err = nested_value(&TIME, &wrong, "stamp").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
