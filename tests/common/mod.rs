// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for integration tests.

#![allow(dead_code)]

use roboschema::schema::{ElementType, FieldType, MessageSchema, PrimitiveType};
use roboschema::{list_schemas, lookup, MessageValue, Result, Value};

// ============================================================================
// Wire Builders
// ============================================================================

/// CDR_LE header followed by `payload`.
pub fn cdr_le(payload: &[u8]) -> Vec<u8> {
    let mut data = vec![0x00, 0x01, 0x00, 0x00];
    data.extend_from_slice(payload);
    data
}

/// CDR_BE header followed by `payload`.
pub fn cdr_be(payload: &[u8]) -> Vec<u8> {
    let mut data = vec![0x00, 0x00, 0x00, 0x00];
    data.extend_from_slice(payload);
    data
}

/// Little-endian CDR string: length (with NUL), bytes, NUL.
pub fn le_string(s: &str) -> Vec<u8> {
    let mut out = ((s.len() + 1) as u32).to_le_bytes().to_vec();
    out.extend_from_slice(s.as_bytes());
    out.push(0);
    out
}

// ============================================================================
// Sample Values
// ============================================================================

/// Every schema in the registry.
pub fn catalog() -> Vec<&'static MessageSchema> {
    list_schemas()
        .into_iter()
        .map(|name| lookup(name).expect("listed schema resolves"))
        .collect()
}

/// A value of `schema` where every field differs from its default.
///
/// Sequence lengths cycle through 0..=3 so empty sequences are covered too.
pub fn populated(schema: &'static MessageSchema, seed: u64) -> MessageValue {
    let mut msg = MessageValue::new(schema);
    for (i, field) in schema.fields.iter().enumerate() {
        let seed = seed.wrapping_mul(31).wrapping_add(i as u64 + 1);
        msg.set(field.name, sample(&field.field_type, seed))
            .unwrap_or_else(|e| panic!("{}.{}: {e}", schema.name, field.name));
    }
    msg
}

/// Sample value for a field type.
pub fn sample(field_type: &FieldType, seed: u64) -> Value {
    match field_type {
        FieldType::Primitive(prim) => sample_primitive(*prim, seed),
        FieldType::String => Value::String(format!("frame_{seed}")),
        FieldType::Nested(schema) => Value::Message(populated(*schema, seed)),
        FieldType::Array { element, len } => sample_elements(element, *len, seed),
        FieldType::Sequence(element) => sample_elements(element, (seed % 4) as usize, seed),
    }
}

fn sample_elements(element: &ElementType, count: usize, seed: u64) -> Value {
    let item = FieldType::from_element(*element);
    Value::Array(
        (0..count)
            .map(|i| sample(&item, seed.wrapping_add(i as u64 * 7)))
            .collect(),
    )
}

fn sample_primitive(prim: PrimitiveType, seed: u64) -> Value {
    let small = (seed % 100) as i64 + 1;
    match prim {
        PrimitiveType::Bool => Value::Bool(seed % 2 == 1),
        PrimitiveType::Int8 => Value::Int8(-(small as i8)),
        PrimitiveType::Int16 => Value::Int16(-(small as i16) * 3),
        PrimitiveType::Int32 => Value::Int32(-(small as i32) * 1000),
        PrimitiveType::Int64 => Value::Int64(-small * 1_000_000_007),
        PrimitiveType::UInt8 => Value::UInt8(small as u8),
        PrimitiveType::UInt16 => Value::UInt16(small as u16 * 300),
        PrimitiveType::UInt32 => Value::UInt32(small as u32 * 70_000),
        PrimitiveType::UInt64 => Value::UInt64(small as u64 * 5_000_000_000),
        PrimitiveType::Float32 => Value::Float32(small as f32 * 0.25),
        PrimitiveType::Float64 => Value::Float64(small as f64 * -1.125),
    }
}

// ============================================================================
// Assertions
// ============================================================================

/// Assert that `result` failed with a malformed-data error.
pub fn assert_malformed<T: std::fmt::Debug>(result: Result<T>, context: &str) {
    match result {
        Err(e) => assert!(e.is_malformed(), "{context}: expected malformed data, got {e}"),
        Ok(v) => panic!("{context}: expected malformed data, decoded {v:?}"),
    }
}
