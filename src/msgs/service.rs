// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Request/response correlation header for service calls.
//!
//! Not a `msg` type, so it is not listed in the registry; use
//! [`SERVICE_HEADER`] directly.

use crate::schema::{FieldDescriptor, FieldType, MessageSchema};

pub static SERVICE_HEADER: MessageSchema = MessageSchema {
    name: "service/ServiceHeader",
    fields: &[
        FieldDescriptor::new("guid", FieldType::INT64),
        FieldDescriptor::new("seq", FieldType::UINT64),
    ],
};
