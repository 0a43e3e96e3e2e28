// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for roboschema.
//!
//! Every fallible operation returns [`CodecError`]. Each variant belongs to
//! exactly one [`ErrorKind`], which is what callers branch on:
//! - invalid arguments (caller bugs, bad values handed to the encoder)
//! - malformed data (truncated or corrupt wire bytes)
//! - buffer too small (sized encoding only, carries the required size)
//! - allocation failure

use std::fmt;

/// Coarse classification of a [`CodecError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing input, zero length, unknown field, wrong value type.
    InvalidArgument,
    /// Truncated buffer, bad header, invalid UTF-8, implausible length.
    MalformedData,
    /// Caller-supplied buffer cannot hold the encoding.
    BufferTooSmall,
    /// An output buffer or decoded value could not be allocated.
    AllocationFailure,
}

impl ErrorKind {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::MalformedData => "malformed_data",
            ErrorKind::BufferTooSmall => "buffer_too_small",
            ErrorKind::AllocationFailure => "allocation_failure",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while building, encoding or decoding messages.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CodecError {
    /// A required input was empty or otherwise unusable.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the argument
        message: String,
    },

    /// Parse error in a schema name or other textual input
    #[error("Parse error in {context}: {message}")]
    ParseError {
        /// What was being parsed
        context: String,
        /// Error message
        message: String,
    },

    /// Type not found in registry
    #[error("Type not found: '{type_name}'")]
    TypeNotFound {
        /// Type name that was not found
        type_name: String,
    },

    /// A message has no field with this name
    #[error("Unknown field '{field}' in '{schema}'")]
    UnknownField {
        /// Schema name
        schema: String,
        /// Requested field name or path segment
        field: String,
    },

    /// A value does not conform to the declared field type
    #[error("Type mismatch for '{field}': expected {expected}, found {found}")]
    TypeMismatch {
        /// Field name or path
        field: String,
        /// Declared type
        expected: String,
        /// Type of the supplied value
        found: String,
    },

    /// Encoding error for a value that cannot be put on the wire
    #[error("{codec} encode error: {message}")]
    EncodeError {
        /// Codec context (e.g., "CDR", "JSON")
        codec: String,
        /// Error message
        message: String,
    },

    /// Schema nesting exceeded the walker's depth limit
    #[error("Invalid schema '{schema_name}': {reason}")]
    InvalidSchema {
        /// Schema name or identifier
        schema_name: String,
        /// Validation error message
        reason: String,
    },

    /// Buffer too short for requested read
    #[error("Buffer too short: requested {requested} bytes at position {cursor_pos}, but only {available} bytes available")]
    BufferTooShort {
        /// Requested bytes
        requested: usize,
        /// Available bytes
        available: usize,
        /// Cursor position when error occurred
        cursor_pos: u64,
    },

    /// Encapsulation header missing, unknown or unsupported
    #[error("Invalid encapsulation header [{header}]: {reason}")]
    InvalidHeader {
        /// Header bytes as hex
        header: String,
        /// Why the header was rejected
        reason: String,
    },

    /// Array or sequence length exceeded data bounds
    #[error("Length {length} exceeds buffer at position {position} (buffer length: {buffer_len})")]
    LengthExceeded {
        /// Length that was read
        length: usize,
        /// Position in buffer
        position: usize,
        /// Buffer length
        buffer_len: usize,
    },

    /// String payload is structurally invalid
    #[error("Invalid string at position {position}: {reason}")]
    InvalidString {
        /// Position of the length prefix
        position: usize,
        /// What was wrong
        reason: String,
    },

    /// Byte that does not map onto any value of the target type
    #[error("Unrecognized discriminant {value} for {type_name} at position {position}")]
    InvalidDiscriminant {
        /// Target type
        type_name: String,
        /// Raw value found on the wire
        value: u64,
        /// Position of the value
        position: usize,
    },

    /// Field decode error with context
    #[error("Failed to decode field '{field_name}' (type: '{field_type}', cursor_pos: {cursor_pos}): {cause}")]
    FieldDecodeError {
        /// Dotted field path
        field_name: String,
        /// Field type
        field_type: String,
        /// Cursor position when error occurred
        cursor_pos: u64,
        /// Underlying error
        #[source]
        cause: Box<CodecError>,
    },

    /// Caller-supplied buffer cannot hold the encoding
    #[error("Buffer too small: {required} bytes required, capacity is {capacity}")]
    BufferTooSmall {
        /// Exact encoded size
        required: usize,
        /// Size of the supplied buffer
        capacity: usize,
    },

    /// Memory reservation failed
    #[error("Allocation of {requested} bytes failed")]
    AllocationFailed {
        /// Bytes that could not be reserved
        requested: usize,
    },
}

impl CodecError {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        CodecError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(context: impl Into<String>, message: impl Into<String>) -> Self {
        CodecError::ParseError {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create a "type not found" error.
    pub fn type_not_found(type_name: impl Into<String>) -> Self {
        CodecError::TypeNotFound {
            type_name: type_name.into(),
        }
    }

    /// Create an unknown field error.
    pub fn unknown_field(schema: impl Into<String>, field: impl Into<String>) -> Self {
        CodecError::UnknownField {
            schema: schema.into(),
            field: field.into(),
        }
    }

    /// Create a type mismatch error.
    pub fn type_mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        CodecError::TypeMismatch {
            field: field.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create an encode error.
    pub fn encode(codec: impl Into<String>, message: impl Into<String>) -> Self {
        CodecError::EncodeError {
            codec: codec.into(),
            message: message.into(),
        }
    }

    /// Create an invalid schema error.
    pub fn invalid_schema(schema_name: impl Into<String>, reason: impl Into<String>) -> Self {
        CodecError::InvalidSchema {
            schema_name: schema_name.into(),
            reason: reason.into(),
        }
    }

    /// Create a buffer too short error.
    pub fn buffer_too_short(requested: usize, available: usize, cursor_pos: u64) -> Self {
        CodecError::BufferTooShort {
            requested,
            available,
            cursor_pos,
        }
    }

    /// Create an invalid header error from the raw header bytes.
    pub fn invalid_header(header: &[u8], reason: impl Into<String>) -> Self {
        CodecError::InvalidHeader {
            header: hex::encode(header),
            reason: reason.into(),
        }
    }

    /// Create a length exceeded error.
    pub fn length_exceeded(length: usize, position: usize, buffer_len: usize) -> Self {
        CodecError::LengthExceeded {
            length,
            position,
            buffer_len,
        }
    }

    /// Create an invalid string error.
    pub fn invalid_string(position: usize, reason: impl Into<String>) -> Self {
        CodecError::InvalidString {
            position,
            reason: reason.into(),
        }
    }

    /// Create an unrecognized discriminant error.
    pub fn invalid_discriminant(type_name: impl Into<String>, value: u64, position: usize) -> Self {
        CodecError::InvalidDiscriminant {
            type_name: type_name.into(),
            value,
            position,
        }
    }

    /// Create a buffer too small error.
    pub fn buffer_too_small(required: usize, capacity: usize) -> Self {
        CodecError::BufferTooSmall { required, capacity }
    }

    /// Create an allocation failure error.
    pub fn allocation(requested: usize) -> Self {
        CodecError::AllocationFailed { requested }
    }

    /// Attach a field path to a decode error.
    ///
    /// Errors that already carry a path get `field` prepended, so an error
    /// raised in `stamp.sec` and wrapped again by `header` reads
    /// `header.stamp.sec` with the innermost cursor position.
    pub fn in_field(self, field: &str, field_type: impl fmt::Display, cursor_pos: u64) -> Self {
        match self {
            CodecError::FieldDecodeError {
                field_name,
                field_type,
                cursor_pos,
                cause,
            } => CodecError::FieldDecodeError {
                field_name: format!("{field}.{field_name}"),
                field_type,
                cursor_pos,
                cause,
            },
            other => CodecError::FieldDecodeError {
                field_name: field.to_string(),
                field_type: field_type.to_string(),
                cursor_pos,
                cause: Box::new(other),
            },
        }
    }

    /// Classify this error into one of the four taxonomy kinds.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::InvalidArgument { .. }
            | CodecError::ParseError { .. }
            | CodecError::TypeNotFound { .. }
            | CodecError::UnknownField { .. }
            | CodecError::TypeMismatch { .. }
            | CodecError::EncodeError { .. }
            | CodecError::InvalidSchema { .. } => ErrorKind::InvalidArgument,
            CodecError::BufferTooShort { .. }
            | CodecError::InvalidHeader { .. }
            | CodecError::LengthExceeded { .. }
            | CodecError::InvalidString { .. }
            | CodecError::InvalidDiscriminant { .. } => ErrorKind::MalformedData,
            CodecError::FieldDecodeError { cause, .. } => cause.kind(),
            CodecError::BufferTooSmall { .. } => ErrorKind::BufferTooSmall,
            CodecError::AllocationFailed { .. } => ErrorKind::AllocationFailure,
        }
    }

    /// Check whether this is a malformed-data error.
    pub fn is_malformed(&self) -> bool {
        self.kind() == ErrorKind::MalformedData
    }

    /// Required size reported by a buffer-too-small error.
    pub fn required_size(&self) -> Option<usize> {
        match self {
            CodecError::BufferTooSmall { required, .. } => Some(*required),
            _ => None,
        }
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("kind", self.kind().to_string())];
        match self {
            CodecError::InvalidArgument { message } => fields.push(("message", message.clone())),
            CodecError::ParseError { context, message } => {
                fields.push(("context", context.clone()));
                fields.push(("message", message.clone()));
            }
            CodecError::TypeNotFound { type_name } => fields.push(("type", type_name.clone())),
            CodecError::UnknownField { schema, field } => {
                fields.push(("schema", schema.clone()));
                fields.push(("field", field.clone()));
            }
            CodecError::TypeMismatch {
                field,
                expected,
                found,
            } => {
                fields.push(("field", field.clone()));
                fields.push(("expected", expected.clone()));
                fields.push(("found", found.clone()));
            }
            CodecError::EncodeError { codec, message } => {
                fields.push(("codec", codec.clone()));
                fields.push(("message", message.clone()));
            }
            CodecError::InvalidSchema {
                schema_name,
                reason,
            } => {
                fields.push(("schema", schema_name.clone()));
                fields.push(("reason", reason.clone()));
            }
            CodecError::BufferTooShort {
                requested,
                available,
                cursor_pos,
            } => {
                fields.push(("requested", requested.to_string()));
                fields.push(("available", available.to_string()));
                fields.push(("cursor", cursor_pos.to_string()));
            }
            CodecError::InvalidHeader { header, reason } => {
                fields.push(("header", header.clone()));
                fields.push(("reason", reason.clone()));
            }
            CodecError::LengthExceeded {
                length,
                position,
                buffer_len,
            } => {
                fields.push(("length", length.to_string()));
                fields.push(("position", position.to_string()));
                fields.push(("buffer_len", buffer_len.to_string()));
            }
            CodecError::InvalidString { position, reason } => {
                fields.push(("position", position.to_string()));
                fields.push(("reason", reason.clone()));
            }
            CodecError::InvalidDiscriminant {
                type_name,
                value,
                position,
            } => {
                fields.push(("type", type_name.clone()));
                fields.push(("value", value.to_string()));
                fields.push(("position", position.to_string()));
            }
            CodecError::FieldDecodeError {
                field_name,
                field_type,
                cursor_pos,
                cause,
            } => {
                fields.push(("field", field_name.clone()));
                fields.push(("type", field_type.clone()));
                fields.push(("cursor", cursor_pos.to_string()));
                fields.push(("cause", cause.to_string()));
            }
            CodecError::BufferTooSmall { required, capacity } => {
                fields.push(("required", required.to_string()));
                fields.push(("capacity", capacity.to_string()));
            }
            CodecError::AllocationFailed { requested } => {
                fields.push(("requested", requested.to_string()));
            }
        }
        fields
    }
}

/// Result type for roboschema operations.
pub type Result<T> = std::result::Result<T, CodecError>;
