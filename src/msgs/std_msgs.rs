// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! `std_msgs` package: Header and ColorRGBA.

use super::builtin_interfaces::{Time, TIME};
use super::{expect_schema, typed_field, CdrMessage};
use crate::core::{MessageValue, Result, Value};
use crate::schema::{FieldDescriptor, FieldType, MessageSchema};

/// Standard metadata for stamped data.
pub static HEADER: MessageSchema = MessageSchema {
    name: "std_msgs/msg/Header",
    fields: &[
        FieldDescriptor::new("stamp", FieldType::Nested(&TIME)),
        FieldDescriptor::new("frame_id", FieldType::String),
    ],
};

pub static COLOR_RGBA: MessageSchema = MessageSchema {
    name: "std_msgs/msg/ColorRGBA",
    fields: &[
        FieldDescriptor::new("r", FieldType::FLOAT32),
        FieldDescriptor::new("g", FieldType::FLOAT32),
        FieldDescriptor::new("b", FieldType::FLOAT32),
        FieldDescriptor::new("a", FieldType::FLOAT32),
    ],
};

/// All schemas in this package.
pub static SCHEMAS: &[&MessageSchema] = &[&HEADER, &COLOR_RGBA];

/// Typed `std_msgs/msg/Header`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    pub stamp: Time,
    pub frame_id: String,
}

impl Header {
    pub fn new(stamp: Time, frame_id: impl Into<String>) -> Self {
        Self {
            stamp,
            frame_id: frame_id.into(),
        }
    }
}

impl CdrMessage for Header {
    fn schema() -> &'static MessageSchema {
        &HEADER
    }

    fn to_value(&self) -> MessageValue {
        MessageValue::from_fields(
            &HEADER,
            vec![
                Value::Message(self.stamp.to_value()),
                Value::String(self.frame_id.clone()),
            ],
        )
    }

    fn from_value(value: &MessageValue) -> Result<Self> {
        expect_schema(value, &HEADER)?;
        let stamp = typed_field(value, "stamp", TIME.name, Value::as_message)?;
        Ok(Self {
            stamp: Time::from_value(stamp)?,
            frame_id: typed_field(value, "frame_id", "string", Value::as_str)?.to_string(),
        })
    }
}
