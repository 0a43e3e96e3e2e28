// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Static field-list schemas.
//!
//! Every message type in the catalog is a `static` [`MessageSchema`]: a name
//! plus an ordered slice of [`FieldDescriptor`]s. Declaration order is wire
//! order. The codec walks these descriptors; there is no per-type codec code.

use std::fmt;

/// Fixed-size primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// Boolean (one byte, 0 or 1)
    Bool,
    /// 8-bit signed integer
    Int8,
    /// 16-bit signed integer
    Int16,
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// 8-bit unsigned integer
    UInt8,
    /// 16-bit unsigned integer
    UInt16,
    /// 32-bit unsigned integer
    UInt32,
    /// 64-bit unsigned integer
    UInt64,
    /// 32-bit float
    Float32,
    /// 64-bit float
    Float64,
}

impl PrimitiveType {
    /// Encoded size in bytes.
    pub const fn size(self) -> usize {
        match self {
            PrimitiveType::Bool | PrimitiveType::Int8 | PrimitiveType::UInt8 => 1,
            PrimitiveType::Int16 | PrimitiveType::UInt16 => 2,
            PrimitiveType::Int32 | PrimitiveType::UInt32 | PrimitiveType::Float32 => 4,
            PrimitiveType::Int64 | PrimitiveType::UInt64 | PrimitiveType::Float64 => 8,
        }
    }

    /// Alignment requirement in bytes. Plain CDR aligns every primitive to
    /// its own size.
    pub const fn alignment(self) -> usize {
        self.size()
    }

    /// IDL-style type name.
    pub const fn as_str(self) -> &'static str {
        match self {
            PrimitiveType::Bool => "bool",
            PrimitiveType::Int8 => "int8",
            PrimitiveType::Int16 => "int16",
            PrimitiveType::Int32 => "int32",
            PrimitiveType::Int64 => "int64",
            PrimitiveType::UInt8 => "uint8",
            PrimitiveType::UInt16 => "uint16",
            PrimitiveType::UInt32 => "uint32",
            PrimitiveType::UInt64 => "uint64",
            PrimitiveType::Float32 => "float32",
            PrimitiveType::Float64 => "float64",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Element type of a fixed array or sequence.
#[derive(Debug, Clone, Copy)]
pub enum ElementType {
    /// Primitive element
    Primitive(PrimitiveType),
    /// UTF-8 string element
    String,
    /// Nested message element
    Nested(&'static MessageSchema),
}

impl ElementType {
    pub const BOOL: ElementType = ElementType::Primitive(PrimitiveType::Bool);
    pub const INT8: ElementType = ElementType::Primitive(PrimitiveType::Int8);
    pub const INT16: ElementType = ElementType::Primitive(PrimitiveType::Int16);
    pub const INT32: ElementType = ElementType::Primitive(PrimitiveType::Int32);
    pub const INT64: ElementType = ElementType::Primitive(PrimitiveType::Int64);
    pub const UINT8: ElementType = ElementType::Primitive(PrimitiveType::UInt8);
    pub const UINT16: ElementType = ElementType::Primitive(PrimitiveType::UInt16);
    pub const UINT32: ElementType = ElementType::Primitive(PrimitiveType::UInt32);
    pub const UINT64: ElementType = ElementType::Primitive(PrimitiveType::UInt64);
    pub const FLOAT32: ElementType = ElementType::Primitive(PrimitiveType::Float32);
    pub const FLOAT64: ElementType = ElementType::Primitive(PrimitiveType::Float64);

    /// Lower bound on the encoded size of one element, ignoring padding.
    pub fn min_encoded_size(&self) -> usize {
        match self {
            ElementType::Primitive(p) => p.size(),
            // length prefix + NUL
            ElementType::String => 5,
            ElementType::Nested(schema) => schema.min_encoded_size(),
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementType::Primitive(p) => write!(f, "{p}"),
            ElementType::String => f.write_str("string"),
            ElementType::Nested(schema) => f.write_str(schema.name),
        }
    }
}

/// Field type - primitive, string, nested message, fixed array or sequence.
#[derive(Debug, Clone, Copy)]
pub enum FieldType {
    /// Primitive type
    Primitive(PrimitiveType),
    /// UTF-8 string (length-prefixed, NUL-terminated)
    String,
    /// Nested message type
    Nested(&'static MessageSchema),
    /// Fixed-size array; the length is not encoded
    Array {
        /// Element type
        element: ElementType,
        /// Number of elements
        len: usize,
    },
    /// Dynamic sequence; a u32 count precedes the elements
    Sequence(ElementType),
}

impl FieldType {
    pub const BOOL: FieldType = FieldType::Primitive(PrimitiveType::Bool);
    pub const INT8: FieldType = FieldType::Primitive(PrimitiveType::Int8);
    pub const INT16: FieldType = FieldType::Primitive(PrimitiveType::Int16);
    pub const INT32: FieldType = FieldType::Primitive(PrimitiveType::Int32);
    pub const INT64: FieldType = FieldType::Primitive(PrimitiveType::Int64);
    pub const UINT8: FieldType = FieldType::Primitive(PrimitiveType::UInt8);
    pub const UINT16: FieldType = FieldType::Primitive(PrimitiveType::UInt16);
    pub const UINT32: FieldType = FieldType::Primitive(PrimitiveType::UInt32);
    pub const UINT64: FieldType = FieldType::Primitive(PrimitiveType::UInt64);
    pub const FLOAT32: FieldType = FieldType::Primitive(PrimitiveType::Float32);
    pub const FLOAT64: FieldType = FieldType::Primitive(PrimitiveType::Float64);

    /// Fixed-size array of `len` elements.
    pub const fn array(element: ElementType, len: usize) -> Self {
        FieldType::Array { element, len }
    }

    /// Dynamic sequence.
    pub const fn sequence(element: ElementType) -> Self {
        FieldType::Sequence(element)
    }

    /// Lower bound on the encoded size of this field, ignoring padding.
    pub fn min_encoded_size(&self) -> usize {
        match self {
            FieldType::Primitive(p) => p.size(),
            FieldType::String => 5,
            FieldType::Nested(schema) => schema.min_encoded_size(),
            FieldType::Array { element, len } => element.min_encoded_size().saturating_mul(*len),
            FieldType::Sequence(_) => 4,
        }
    }

    /// Field type for a single element of this element type.
    pub const fn from_element(element: ElementType) -> Self {
        match element {
            ElementType::Primitive(p) => FieldType::Primitive(p),
            ElementType::String => FieldType::String,
            ElementType::Nested(schema) => FieldType::Nested(schema),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Primitive(p) => write!(f, "{p}"),
            FieldType::String => f.write_str("string"),
            FieldType::Nested(schema) => f.write_str(schema.name),
            FieldType::Array { element, len } => write!(f, "{element}[{len}]"),
            FieldType::Sequence(element) => write!(f, "sequence<{element}>"),
        }
    }
}

/// A named field in a message type.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    /// Field name
    pub name: &'static str,
    /// Field type
    pub field_type: FieldType,
}

impl FieldDescriptor {
    /// Create a field descriptor.
    pub const fn new(name: &'static str, field_type: FieldType) -> Self {
        Self { name, field_type }
    }
}

/// A message type definition with its ordered fields.
#[derive(Debug)]
pub struct MessageSchema {
    /// Full schema name (e.g., "std_msgs/msg/Header")
    pub name: &'static str,
    /// Fields in declaration (= wire) order
    pub fields: &'static [FieldDescriptor],
}

impl MessageSchema {
    /// Package part of the name (`std_msgs` for `std_msgs/msg/Header`).
    pub fn package(&self) -> &'static str {
        self.name.split('/').next().unwrap_or(self.name)
    }

    /// Short type name (`Header` for `std_msgs/msg/Header`).
    pub fn type_name(&self) -> &'static str {
        self.name.rsplit('/').next().unwrap_or(self.name)
    }

    /// Index of the field with this name.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Field descriptor with this name.
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Lower bound on the encoded size of the field walk, ignoring padding.
    pub fn min_encoded_size(&self) -> usize {
        self.fields
            .iter()
            .map(|f| f.field_type.min_encoded_size())
            .fold(0usize, usize::saturating_add)
    }
}

impl PartialEq for MessageSchema {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for MessageSchema {}

impl fmt::Display for MessageSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static INNER: MessageSchema = MessageSchema {
        name: "test_msgs/msg/Inner",
        fields: &[
            FieldDescriptor::new("flag", FieldType::Primitive(PrimitiveType::Bool)),
            FieldDescriptor::new("value", FieldType::Primitive(PrimitiveType::Float64)),
        ],
    };

    static OUTER: MessageSchema = MessageSchema {
        name: "test_msgs/msg/Outer",
        fields: &[
            FieldDescriptor::new("label", FieldType::String),
            FieldDescriptor::new("inner", FieldType::Nested(&INNER)),
            FieldDescriptor::new(
                "matrix",
                FieldType::Array {
                    element: ElementType::Primitive(PrimitiveType::Float32),
                    len: 4,
                },
            ),
            FieldDescriptor::new("items", FieldType::Sequence(ElementType::Nested(&INNER))),
        ],
    };

    #[test]
    fn test_primitive_sizes() {
        assert_eq!(PrimitiveType::Bool.size(), 1);
        assert_eq!(PrimitiveType::UInt16.alignment(), 2);
        assert_eq!(PrimitiveType::Float32.size(), 4);
        assert_eq!(PrimitiveType::Int64.alignment(), 8);
    }

    #[test]
    fn test_schema_names() {
        assert_eq!(OUTER.package(), "test_msgs");
        assert_eq!(OUTER.type_name(), "Outer");
        assert_eq!(OUTER.field_index("inner"), Some(1));
        assert!(OUTER.field("missing").is_none());
    }

    #[test]
    fn test_min_encoded_size() {
        // bool + float64
        assert_eq!(INNER.min_encoded_size(), 9);
        // string 5 + inner 9 + 4 * float32 + sequence count
        assert_eq!(OUTER.min_encoded_size(), 5 + 9 + 16 + 4);
    }

    #[test]
    fn test_field_type_display() {
        let fields: Vec<String> = OUTER
            .fields
            .iter()
            .map(|f| f.field_type.to_string())
            .collect();
        assert_eq!(
            fields,
            vec![
                "string",
                "test_msgs/msg/Inner",
                "float32[4]",
                "sequence<test_msgs/msg/Inner>"
            ]
        );
    }
}
