// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Message value model.
//!
//! A [`MessageValue`] is an instance of a static
//! [`MessageSchema`](crate::schema::MessageSchema): one [`Value`] per field,
//! stored in declaration order. Values are constructed with schema defaults
//! and mutated through type-checked setters, so an encoder never sees a
//! value that disagrees with its schema. Everything is serde-serializable
//! for diagnostics.

use std::fmt;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use super::error::{CodecError, Result};
use crate::schema::{ElementType, FieldType, MessageSchema, PrimitiveType};

/// A single field value.
///
/// Equality compares floats by bit pattern, so a NaN equals the same NaN
/// and `-0.0` differs from `0.0`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Value {
    // Boolean
    Bool(bool),

    // Signed integers
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),

    // Unsigned integers
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),

    // Floating point
    Float32(f32),
    Float64(f64),

    // String (UTF-8)
    String(String),

    /// uint8 arrays and sequences (image frames, point cloud payloads)
    Bytes(Vec<u8>),

    /// Every other fixed array or sequence
    Array(Vec<Value>),

    /// Nested message
    Message(MessageValue),
}

impl Value {
    /// Schema default for a field: numeric zero, `false`, empty string,
    /// empty sequence, zero-filled fixed array, zero-valued nested message.
    pub fn zero(field_type: &FieldType) -> Value {
        match field_type {
            FieldType::Primitive(p) => Value::zero_primitive(*p),
            FieldType::String => Value::String(String::new()),
            FieldType::Nested(schema) => Value::Message(MessageValue::new(schema)),
            FieldType::Array { element, len } => match element {
                ElementType::Primitive(PrimitiveType::UInt8) => Value::Bytes(vec![0; *len]),
                _ => {
                    let item = FieldType::from_element(*element);
                    Value::Array((0..*len).map(|_| Value::zero(&item)).collect())
                }
            },
            FieldType::Sequence(ElementType::Primitive(PrimitiveType::UInt8)) => {
                Value::Bytes(Vec::new())
            }
            FieldType::Sequence(_) => Value::Array(Vec::new()),
        }
    }

    fn zero_primitive(prim: PrimitiveType) -> Value {
        match prim {
            PrimitiveType::Bool => Value::Bool(false),
            PrimitiveType::Int8 => Value::Int8(0),
            PrimitiveType::Int16 => Value::Int16(0),
            PrimitiveType::Int32 => Value::Int32(0),
            PrimitiveType::Int64 => Value::Int64(0),
            PrimitiveType::UInt8 => Value::UInt8(0),
            PrimitiveType::UInt16 => Value::UInt16(0),
            PrimitiveType::UInt32 => Value::UInt32(0),
            PrimitiveType::UInt64 => Value::UInt64(0),
            PrimitiveType::Float32 => Value::Float32(0.0),
            PrimitiveType::Float64 => Value::Float64(0.0),
        }
    }

    /// Check this value against a field type and return the canonical form.
    ///
    /// `path` names the field in error messages. An `Array` of `UInt8`
    /// values for a uint8 array/sequence is turned into `Bytes`; fixed
    /// arrays must have exactly the declared length; nested messages must
    /// be instances of the declared schema.
    pub fn conform(self, field_type: &FieldType, path: &str) -> Result<Value> {
        match (field_type, self) {
            (FieldType::Primitive(p), value) => {
                if value.primitive_type() == Some(*p) {
                    Ok(value)
                } else {
                    Err(CodecError::type_mismatch(path, p.as_str(), value.type_name()))
                }
            }
            (FieldType::String, value @ Value::String(_)) => Ok(value),
            (FieldType::Nested(schema), Value::Message(msg)) => {
                if msg.schema.name == schema.name {
                    Ok(Value::Message(msg))
                } else {
                    Err(CodecError::type_mismatch(path, schema.name, msg.schema.name))
                }
            }
            (FieldType::Array { element, len }, value) => {
                let value = Value::conform_elements(element, value, field_type, path)?;
                let actual = value.len().unwrap_or(0);
                if actual != *len {
                    return Err(CodecError::type_mismatch(
                        path,
                        field_type.to_string(),
                        format!("{} with {actual} elements", value.type_name()),
                    ));
                }
                Ok(value)
            }
            (FieldType::Sequence(element), value) => {
                Value::conform_elements(element, value, field_type, path)
            }
            (expected, value) => Err(CodecError::type_mismatch(
                path,
                expected.to_string(),
                value.type_name(),
            )),
        }
    }

    fn conform_elements(
        element: &ElementType,
        value: Value,
        field_type: &FieldType,
        path: &str,
    ) -> Result<Value> {
        let is_bytes = matches!(element, ElementType::Primitive(PrimitiveType::UInt8));
        match value {
            Value::Bytes(bytes) if is_bytes => Ok(Value::Bytes(bytes)),
            Value::Array(items) if is_bytes => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| match item {
                    Value::UInt8(b) => Ok(b),
                    other => Err(CodecError::type_mismatch(
                        format!("{path}.{i}"),
                        "uint8",
                        other.type_name(),
                    )),
                })
                .collect::<Result<Vec<u8>>>()
                .map(Value::Bytes),
            Value::Array(items) => {
                let item_type = FieldType::from_element(*element);
                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| item.conform(&item_type, &format!("{path}.{i}")))
                    .collect::<Result<Vec<Value>>>()
                    .map(Value::Array)
            }
            other => Err(CodecError::type_mismatch(
                path,
                field_type.to_string(),
                other.type_name(),
            )),
        }
    }

    /// Primitive type of a scalar value.
    pub fn primitive_type(&self) -> Option<PrimitiveType> {
        match self {
            Value::Bool(_) => Some(PrimitiveType::Bool),
            Value::Int8(_) => Some(PrimitiveType::Int8),
            Value::Int16(_) => Some(PrimitiveType::Int16),
            Value::Int32(_) => Some(PrimitiveType::Int32),
            Value::Int64(_) => Some(PrimitiveType::Int64),
            Value::UInt8(_) => Some(PrimitiveType::UInt8),
            Value::UInt16(_) => Some(PrimitiveType::UInt16),
            Value::UInt32(_) => Some(PrimitiveType::UInt32),
            Value::UInt64(_) => Some(PrimitiveType::UInt64),
            Value::Float32(_) => Some(PrimitiveType::Float32),
            Value::Float64(_) => Some(PrimitiveType::Float64),
            Value::String(_) | Value::Bytes(_) | Value::Array(_) | Value::Message(_) => None,
        }
    }

    /// Get the type name as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Array(_) => "array",
            Value::Message(_) => "message",
            scalar => scalar.primitive_type().map_or("unknown", PrimitiveType::as_str),
        }
    }

    /// Number of elements for `Bytes`/`Array` values.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Bytes(b) => Some(b.len()),
            Value::Array(a) => Some(a.len()),
            _ => None,
        }
    }

    /// Try to get as bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to convert any integer value to i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int8(v) => Some(i64::from(*v)),
            Value::Int16(v) => Some(i64::from(*v)),
            Value::Int32(v) => Some(i64::from(*v)),
            Value::Int64(v) => Some(*v),
            Value::UInt8(v) => Some(i64::from(*v)),
            Value::UInt16(v) => Some(i64::from(*v)),
            Value::UInt32(v) => Some(i64::from(*v)),
            Value::UInt64(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Try to convert any unsigned or non-negative integer value to u64.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::UInt8(v) => Some(u64::from(*v)),
            Value::UInt16(v) => Some(u64::from(*v)),
            Value::UInt32(v) => Some(u64::from(*v)),
            Value::UInt64(v) => Some(*v),
            other => other.as_i64().and_then(|v| u64::try_from(v).ok()),
        }
    }

    /// Try to convert any numeric value to f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float32(v) => Some(f64::from(*v)),
            Value::Float64(v) => Some(*v),
            Value::UInt64(v) => Some(*v as f64),
            Value::Int64(v) => Some(*v as f64),
            other => other.as_i64().map(|v| v as f64),
        }
    }

    /// Try to get as string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as byte slice.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get as array slice.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Try to get as nested message.
    pub fn as_message(&self) -> Option<&MessageValue> {
        match self {
            Value::Message(m) => Some(m),
            _ => None,
        }
    }

    /// Try to get as mutable nested message.
    fn as_message_mut(&mut self) -> Option<&mut MessageValue> {
        match self {
            Value::Message(m) => Some(m),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::Int8(v) => write!(f, "{v}"),
            Value::Int16(v) => write!(f, "{v}"),
            Value::Int32(v) => write!(f, "{v}"),
            Value::Int64(v) => write!(f, "{v}"),
            Value::UInt8(v) => write!(f, "{v}"),
            Value::UInt16(v) => write!(f, "{v}"),
            Value::UInt32(v) => write!(f, "{v}"),
            Value::UInt64(v) => write!(f, "{v}"),
            Value::Float32(v) => write!(f, "{v}"),
            Value::Float64(v) => write!(f, "{v}"),
            Value::String(s) => write!(f, "\"{s}\""),
            Value::Bytes(b) => write!(f, "<{} bytes>", b.len()),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Message(m) => write!(f, "{m}"),
        }
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }

            impl From<Vec<$ty>> for Value {
                fn from(v: Vec<$ty>) -> Self {
                    Value::Array(v.into_iter().map(Value::$variant).collect())
                }
            }
        )*
    };
}

impl_from_scalar!(
    bool => Bool,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
    f32 => Float32,
    f64 => Float64,
    String => String,
    MessageValue => Message,
);

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::UInt8(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Vec<&str>> for Value {
    fn from(v: Vec<&str>) -> Self {
        Value::Array(v.into_iter().map(Value::from).collect())
    }
}

impl<const N: usize> From<[f64; N]> for Value {
    fn from(v: [f64; N]) -> Self {
        Value::Array(v.into_iter().map(Value::Float64).collect())
    }
}

/// An instance of a message schema.
#[derive(Debug, Clone)]
pub struct MessageValue {
    schema: &'static MessageSchema,
    fields: Vec<Value>,
}

impl MessageValue {
    /// Construct a value with every field at its schema default.
    pub fn new(schema: &'static MessageSchema) -> Self {
        Self {
            schema,
            fields: schema
                .fields
                .iter()
                .map(|f| Value::zero(&f.field_type))
                .collect(),
        }
    }

    /// Build a value from already-conforming field values in declaration
    /// order. Used by the decoder.
    pub(crate) fn from_fields(schema: &'static MessageSchema, fields: Vec<Value>) -> Self {
        debug_assert_eq!(schema.fields.len(), fields.len());
        Self { schema, fields }
    }

    /// The schema this value is an instance of.
    pub fn schema(&self) -> &'static MessageSchema {
        self.schema
    }

    /// Field values in declaration order.
    pub fn values(&self) -> &[Value] {
        &self.fields
    }

    /// `(name, value)` pairs in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &Value)> + '_ {
        self.schema
            .fields
            .iter()
            .map(|f| f.name)
            .zip(self.fields.iter())
    }

    /// Get a field by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schema.field_index(name).map(|i| &self.fields[i])
    }

    /// Set a field by name, type-checking against the schema.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let index = self
            .schema
            .field_index(name)
            .ok_or_else(|| CodecError::unknown_field(self.schema.name, name))?;
        let field_type = &self.schema.fields[index].field_type;
        self.fields[index] = value.into().conform(field_type, name)?;
        Ok(())
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Result<Self> {
        self.set(name, value)?;
        Ok(self)
    }

    /// Get a value by dotted path, e.g. `header.stamp.sec` or `boxes.0.label`.
    ///
    /// uint8 arrays and sequences are stored as [`Value::Bytes`] and are
    /// returned whole; index them through [`Value::as_bytes`].
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.get(segments.next()?)?;
        for segment in segments {
            current = match current {
                Value::Message(msg) => msg.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Set a value by dotted path. Intermediate segments must name nested
    /// message fields or message elements of an array/sequence. A trailing
    /// index replaces one element in place, including single bytes of a
    /// uint8 field (`data.3`).
    pub fn set_path(&mut self, path: &str, value: impl Into<Value>) -> Result<()> {
        match path.split_once('.') {
            None => self.set(path, value),
            Some((head, rest)) => {
                let schema_name = self.schema.name;
                let index = self
                    .schema
                    .field_index(head)
                    .ok_or_else(|| CodecError::unknown_field(schema_name, head))?;
                let item_type = match self.schema.fields[index].field_type {
                    FieldType::Array { element, .. } | FieldType::Sequence(element) => {
                        FieldType::from_element(element)
                    }
                    other => other,
                };
                match &mut self.fields[index] {
                    Value::Message(msg) => msg.set_path(rest, value),
                    Value::Array(items) => {
                        let (idx, tail) = rest.split_once('.').unwrap_or((rest, ""));
                        let slot = idx
                            .parse::<usize>()
                            .ok()
                            .and_then(|i| items.get_mut(i))
                            .ok_or_else(|| CodecError::unknown_field(schema_name, path))?;
                        if tail.is_empty() {
                            *slot = value.into().conform(&item_type, path)?;
                            Ok(())
                        } else {
                            slot.as_message_mut()
                                .ok_or_else(|| CodecError::unknown_field(schema_name, path))?
                                .set_path(tail, value)
                        }
                    }
                    Value::Bytes(bytes) => {
                        let slot = rest
                            .parse::<usize>()
                            .ok()
                            .and_then(|i| bytes.get_mut(i))
                            .ok_or_else(|| CodecError::unknown_field(schema_name, path))?;
                        match value.into() {
                            Value::UInt8(b) => {
                                *slot = b;
                                Ok(())
                            }
                            other => Err(CodecError::type_mismatch(path, "uint8", other.type_name())),
                        }
                    }
                    _ => Err(CodecError::unknown_field(schema_name, path)),
                }
            }
        }
    }

    /// Render as a JSON value, fields in declaration order.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| CodecError::encode("JSON", e.to_string()))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int8(a), Value::Int8(b)) => a == b,
            (Value::Int16(a), Value::Int16(b)) => a == b,
            (Value::Int32(a), Value::Int32(b)) => a == b,
            (Value::Int64(a), Value::Int64(b)) => a == b,
            (Value::UInt8(a), Value::UInt8(b)) => a == b,
            (Value::UInt16(a), Value::UInt16(b)) => a == b,
            (Value::UInt32(a), Value::UInt32(b)) => a == b,
            (Value::UInt64(a), Value::UInt64(b)) => a == b,
            (Value::Float32(a), Value::Float32(b)) => a.to_bits() == b.to_bits(),
            (Value::Float64(a), Value::Float64(b)) => a.to_bits() == b.to_bits(),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Message(a), Value::Message(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialEq for MessageValue {
    fn eq(&self, other: &Self) -> bool {
        self.schema.name == other.schema.name && self.fields == other.fields
    }
}

impl Serialize for MessageValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in self.fields() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl fmt::Display for MessageValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.schema.type_name())?;
        for (i, (name, value)) in self.fields().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, " {name}: {value}")?;
        }
        write!(f, " }}")
    }
}
