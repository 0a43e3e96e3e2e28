// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! `builtin_interfaces` package: Time and Duration.
//!
//! Both share the same layout:
//! ```text
//! int32 sec
//! uint32 nanosec
//! ```

use super::{expect_schema, typed_field, CdrMessage};
use crate::core::{MessageValue, Result, Value};
use crate::schema::{FieldDescriptor, FieldType, MessageSchema};

const NANOS_PER_SEC: u64 = 1_000_000_000;

pub static TIME: MessageSchema = MessageSchema {
    name: "builtin_interfaces/msg/Time",
    fields: &[
        FieldDescriptor::new("sec", FieldType::INT32),
        FieldDescriptor::new("nanosec", FieldType::UINT32),
    ],
};

pub static DURATION: MessageSchema = MessageSchema {
    name: "builtin_interfaces/msg/Duration",
    fields: &[
        FieldDescriptor::new("sec", FieldType::INT32),
        FieldDescriptor::new("nanosec", FieldType::UINT32),
    ],
};

/// All schemas in this package.
pub static SCHEMAS: &[&MessageSchema] = &[&TIME, &DURATION];

/// A point in time as seconds plus nanoseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Time {
    pub sec: i32,
    pub nanosec: u32,
}

impl Time {
    pub fn new(sec: i32, nanosec: u32) -> Self {
        Self { sec, nanosec }
    }

    /// Split a nanosecond count. Seconds beyond `i32::MAX` wrap.
    pub fn from_nanos(nanos: u64) -> Self {
        Self {
            sec: (nanos / NANOS_PER_SEC) as i32,
            nanosec: (nanos % NANOS_PER_SEC) as u32,
        }
    }

    /// Total nanoseconds. Negative seconds wrap as in two's complement.
    pub fn to_nanos(&self) -> u64 {
        (self.sec as u64)
            .wrapping_mul(NANOS_PER_SEC)
            .wrapping_add(u64::from(self.nanosec))
    }
}

impl From<Time> for u64 {
    fn from(time: Time) -> Self {
        time.to_nanos()
    }
}

impl CdrMessage for Time {
    fn schema() -> &'static MessageSchema {
        &TIME
    }

    fn to_value(&self) -> MessageValue {
        MessageValue::from_fields(
            &TIME,
            vec![Value::Int32(self.sec), Value::UInt32(self.nanosec)],
        )
    }

    fn from_value(value: &MessageValue) -> Result<Self> {
        expect_schema(value, &TIME)?;
        Ok(Self {
            sec: typed_field(value, "sec", "int32", |v| match v {
                Value::Int32(s) => Some(*s),
                _ => None,
            })?,
            nanosec: typed_field(value, "nanosec", "uint32", |v| match v {
                Value::UInt32(n) => Some(*n),
                _ => None,
            })?,
        })
    }
}

/// A signed span of time as seconds plus nanoseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Duration {
    pub sec: i32,
    pub nanosec: u32,
}

impl Duration {
    pub fn new(sec: i32, nanosec: u32) -> Self {
        Self { sec, nanosec }
    }

    /// Split a signed nanosecond count; `nanosec` is always in
    /// `0..1_000_000_000`, so `-1ns` is `{ sec: -1, nanosec: 999_999_999 }`.
    ///
    /// Counts beyond the `i32` seconds range saturate to the largest or
    /// smallest representable duration.
    pub fn from_nanos(nanos: i64) -> Self {
        let per_sec = NANOS_PER_SEC as i64;
        match i32::try_from(nanos.div_euclid(per_sec)) {
            Ok(sec) => Self {
                sec,
                nanosec: nanos.rem_euclid(per_sec) as u32,
            },
            Err(_) if nanos < 0 => Self::new(i32::MIN, 0),
            Err(_) => Self::new(i32::MAX, 999_999_999),
        }
    }

    /// Total signed nanoseconds.
    pub fn to_nanos(&self) -> i64 {
        i64::from(self.sec) * NANOS_PER_SEC as i64 + i64::from(self.nanosec)
    }
}

impl From<std::time::Duration> for Duration {
    /// Seconds saturate at `i32::MAX`.
    fn from(dur: std::time::Duration) -> Self {
        Self {
            sec: i32::try_from(dur.as_secs()).unwrap_or(i32::MAX),
            nanosec: dur.subsec_nanos(),
        }
    }
}

impl CdrMessage for Duration {
    fn schema() -> &'static MessageSchema {
        &DURATION
    }

    fn to_value(&self) -> MessageValue {
        MessageValue::from_fields(
            &DURATION,
            vec![Value::Int32(self.sec), Value::UInt32(self.nanosec)],
        )
    }

    fn from_value(value: &MessageValue) -> Result<Self> {
        expect_schema(value, &DURATION)?;
        Ok(Self {
            sec: typed_field(value, "sec", "int32", |v| match v {
                Value::Int32(s) => Some(*s),
                _ => None,
            })?,
            nanosec: typed_field(value, "nanosec", "uint32", |v| match v {
                Value::UInt32(n) => Some(*n),
                _ => None,
            })?,
        })
    }
}
