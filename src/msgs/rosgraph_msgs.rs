// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! `rosgraph_msgs` package.

use super::builtin_interfaces::TIME;
use crate::schema::{FieldDescriptor, FieldType, MessageSchema};

/// Simulated time published on `/clock`.
pub static CLOCK: MessageSchema = MessageSchema {
    name: "rosgraph_msgs/msg/Clock",
    fields: &[FieldDescriptor::new("clock", FieldType::Nested(&TIME))],
};

/// All schemas in this package.
pub static SCHEMAS: &[&MessageSchema] = &[&CLOCK];
