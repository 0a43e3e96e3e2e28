// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Static message schemas and the name registry.
//!
//! This module provides:
//! - [`ast`] - field types, field descriptors and [`MessageSchema`]
//! - [`registry`] - lookup of catalog schemas by name

pub mod ast;
pub mod registry;

pub use ast::{ElementType, FieldDescriptor, FieldType, MessageSchema, PrimitiveType};
pub use registry::{is_supported, list_package, list_schemas, lookup, parse_schema};
