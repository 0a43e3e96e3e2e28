// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Message catalog.
//!
//! One module per package. Each module declares its message types as
//! `static` [`MessageSchema`]s, exposes them through a `SCHEMAS` slice for the
//! registry, and carries the package's constant tables.
//!
//! A few frequently used types ([`builtin_interfaces::Time`],
//! [`builtin_interfaces::Duration`], [`std_msgs::Header`]) also have plain
//! Rust structs implementing [`CdrMessage`].

pub mod builtin_interfaces;
pub mod edgefirst_msgs;
pub mod foxglove_msgs;
pub mod geometry_msgs;
pub mod nav_msgs;
pub mod rosgraph_msgs;
pub mod sensor_msgs;
pub mod service;
pub mod std_msgs;

use crate::core::{CodecError, MessageValue, Result, Value};
use crate::encoding::cdr;
use crate::schema::MessageSchema;

/// A Rust struct with a fixed schema in the catalog.
pub trait CdrMessage: Sized {
    /// The schema this type encodes as.
    fn schema() -> &'static MessageSchema;

    /// Convert into a dynamic message value.
    fn to_value(&self) -> MessageValue;

    /// Convert from a dynamic message value of [`schema`](Self::schema).
    fn from_value(value: &MessageValue) -> Result<Self>;

    /// Encode as CDR (little-endian, with encapsulation header).
    fn encode(&self) -> Result<Vec<u8>> {
        cdr::encode(&self.to_value())
    }

    /// Decode from CDR bytes.
    fn decode(bytes: &[u8]) -> Result<Self> {
        Self::from_value(&cdr::decode(Self::schema(), bytes)?)
    }
}

/// Fail unless `value` is an instance of `schema`.
pub(crate) fn expect_schema(value: &MessageValue, schema: &'static MessageSchema) -> Result<()> {
    if value.schema().name == schema.name {
        Ok(())
    } else {
        Err(CodecError::type_mismatch(
            "<message>",
            schema.name,
            value.schema().name,
        ))
    }
}

/// Extract a field and convert it with `pick`, reporting `expected` on
/// mismatch.
pub(crate) fn typed_field<'a, T>(
    value: &'a MessageValue,
    name: &str,
    expected: &str,
    pick: impl FnOnce(&'a Value) -> Option<T>,
) -> Result<T> {
    let field = value
        .get(name)
        .ok_or_else(|| CodecError::unknown_field(value.schema().name, name))?;
    pick(field).ok_or_else(|| CodecError::type_mismatch(name, expected, field.type_name()))
}
