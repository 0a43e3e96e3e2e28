// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CDR (Common Data Representation) decoder implementation.
//!
//! Decodes CDR-encoded binary data by walking a static schema.

use tracing::{trace, warn};

use super::cursor::CdrCursor;
use crate::core::{CodecError, MessageValue, Result, Value};
use crate::schema::{ElementType, FieldType, MessageSchema, PrimitiveType};

/// Nesting limit for messages inside messages.
const MAX_DEPTH: usize = 32;

/// Schema-driven CDR decoder.
///
/// Errors raised inside a field are wrapped with the dotted field path and
/// the position where the failing field started, e.g. `header.frame_id`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CdrDecoder;

impl CdrDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decode a CDR-encoded message (including its 4-byte header).
    ///
    /// Bytes left after the last field are ignored.
    pub fn decode(&self, schema: &'static MessageSchema, data: &[u8]) -> Result<MessageValue> {
        let mut cursor = CdrCursor::new(data)?;
        let message = self.decode_struct(schema, &mut cursor, 0)?;
        if !cursor.is_at_end() {
            warn!(
                schema = schema.name,
                trailing = cursor.remaining(),
                "Ignoring trailing bytes after CDR message"
            );
        }
        Ok(message)
    }

    fn decode_struct(
        &self,
        schema: &'static MessageSchema,
        cursor: &mut CdrCursor<'_>,
        depth: usize,
    ) -> Result<MessageValue> {
        if depth > MAX_DEPTH {
            return Err(CodecError::invalid_schema(
                schema.name,
                format!("nesting deeper than {MAX_DEPTH} levels"),
            ));
        }
        let mut fields = Vec::with_capacity(schema.fields.len());
        for field in schema.fields {
            let start = cursor.position();
            let value = self
                .decode_field(&field.field_type, cursor, depth)
                .map_err(|e| e.in_field(field.name, field.field_type, start as u64))?;
            fields.push(value);
        }
        Ok(MessageValue::from_fields(schema, fields))
    }

    fn decode_field(
        &self,
        field_type: &FieldType,
        cursor: &mut CdrCursor<'_>,
        depth: usize,
    ) -> Result<Value> {
        match field_type {
            FieldType::Primitive(prim) => decode_primitive(*prim, cursor),
            FieldType::String => Ok(Value::String(cursor.read_string()?)),
            FieldType::Nested(schema) => Ok(Value::Message(self.decode_struct(
                *schema,
                cursor,
                depth + 1,
            )?)),
            FieldType::Array { element, len } => self.decode_elements(element, *len, cursor, depth),
            FieldType::Sequence(element) => {
                let count = cursor.read_sequence_length(element.min_encoded_size())?;
                trace!(count, element = %element, "sequence");
                self.decode_elements(element, count, cursor, depth)
            }
        }
    }

    fn decode_elements(
        &self,
        element: &ElementType,
        count: usize,
        cursor: &mut CdrCursor<'_>,
        depth: usize,
    ) -> Result<Value> {
        if let ElementType::Primitive(PrimitiveType::UInt8) = element {
            let bytes = cursor.read_bytes(count)?;
            let mut out = Vec::new();
            out.try_reserve_exact(count)
                .map_err(|_| CodecError::allocation(count))?;
            out.extend_from_slice(bytes);
            return Ok(Value::Bytes(out));
        }

        let item_type = FieldType::from_element(*element);
        let mut items = Vec::new();
        items
            .try_reserve_exact(count)
            .map_err(|_| CodecError::allocation(count.saturating_mul(std::mem::size_of::<Value>())))?;
        for index in 0..count {
            let start = cursor.position();
            let item = self
                .decode_field(&item_type, cursor, depth)
                .map_err(|e| e.in_field(&index.to_string(), element, start as u64))?;
            items.push(item);
        }
        Ok(Value::Array(items))
    }
}

fn decode_primitive(prim: PrimitiveType, cursor: &mut CdrCursor<'_>) -> Result<Value> {
    Ok(match prim {
        PrimitiveType::Bool => Value::Bool(cursor.read_bool()?),
        PrimitiveType::Int8 => Value::Int8(cursor.read_i8()?),
        PrimitiveType::Int16 => Value::Int16(cursor.read_i16()?),
        PrimitiveType::Int32 => Value::Int32(cursor.read_i32()?),
        PrimitiveType::Int64 => Value::Int64(cursor.read_i64()?),
        PrimitiveType::UInt8 => Value::UInt8(cursor.read_u8()?),
        PrimitiveType::UInt16 => Value::UInt16(cursor.read_u16()?),
        PrimitiveType::UInt32 => Value::UInt32(cursor.read_u32()?),
        PrimitiveType::UInt64 => Value::UInt64(cursor.read_u64()?),
        PrimitiveType::Float32 => Value::Float32(cursor.read_f32()?),
        PrimitiveType::Float64 => Value::Float64(cursor.read_f64()?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;
    use crate::msgs::std_msgs::HEADER;
    use crate::schema::FieldDescriptor;

    static SAMPLE: MessageSchema = MessageSchema {
        name: "test_msgs/msg/Sample",
        fields: &[
            FieldDescriptor::new("flag", FieldType::BOOL),
            FieldDescriptor::new("names", FieldType::sequence(ElementType::String)),
            FieldDescriptor::new("payload", FieldType::sequence(ElementType::UINT8)),
        ],
    };

    fn le(payload: &[u8]) -> Vec<u8> {
        let mut data = vec![0x00, 0x01, 0x00, 0x00];
        data.extend_from_slice(payload);
        data
    }

    #[test]
    fn test_decode_sample() {
        let mut payload = vec![1, 0, 0, 0];
        payload.extend_from_slice(&2u32.to_le_bytes());
        payload.extend_from_slice(&2u32.to_le_bytes());
        payload.extend_from_slice(b"a\0\0\0");
        payload.extend_from_slice(&3u32.to_le_bytes());
        payload.extend_from_slice(b"bc\0\0");
        payload.extend_from_slice(&3u32.to_le_bytes());
        payload.extend_from_slice(&[7, 8, 9]);

        let msg = CdrDecoder::new().decode(&SAMPLE, &le(&payload)).unwrap();
        assert_eq!(msg.get("flag"), Some(&Value::Bool(true)));
        assert_eq!(msg.get_path("names.1").and_then(Value::as_str), Some("bc"));
        assert_eq!(
            msg.get("payload").and_then(Value::as_bytes),
            Some(&[7u8, 8, 9][..])
        );
    }

    #[test]
    fn test_error_carries_field_path() {
        // stamp ok, frame_id length 9 with only 2 bytes behind it
        let mut payload = vec![0u8; 8];
        payload.extend_from_slice(&9u32.to_le_bytes());
        payload.extend_from_slice(b"a\0");

        let err = CdrDecoder::new().decode(&HEADER, &le(&payload)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedData);
        match err {
            CodecError::FieldDecodeError {
                field_name,
                cursor_pos,
                ..
            } => {
                assert_eq!(field_name, "frame_id");
                assert_eq!(cursor_pos, 12);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_nested_path_and_element_index() {
        // flag, then a names sequence whose second string is not terminated
        let mut payload = vec![0, 0, 0, 0];
        payload.extend_from_slice(&2u32.to_le_bytes());
        payload.extend_from_slice(&1u32.to_le_bytes());
        payload.extend_from_slice(b"\0\0\0\0");
        payload.extend_from_slice(&2u32.to_le_bytes());
        payload.extend_from_slice(b"xy");

        let err = CdrDecoder::new().decode(&SAMPLE, &le(&payload)).unwrap_err();
        match &err {
            CodecError::FieldDecodeError { field_name, .. } => assert_eq!(field_name, "names.1"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.is_malformed());
    }

    #[test]
    fn test_huge_sequence_count_rejected_before_allocation() {
        let mut payload = vec![0, 0, 0, 0];
        payload.extend_from_slice(&0xFFFF_FFF0u32.to_le_bytes());
        let err = CdrDecoder::new().decode(&SAMPLE, &le(&payload)).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let mut payload = vec![0u8; 8];
        payload.extend_from_slice(&1u32.to_le_bytes());
        payload.extend_from_slice(&[0, 0xEE, 0xEE]);
        let msg = CdrDecoder::new().decode(&HEADER, &le(&payload)).unwrap();
        assert_eq!(msg.get("frame_id").and_then(Value::as_str), Some(""));
    }
}
