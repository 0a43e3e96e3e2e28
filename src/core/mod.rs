// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout roboschema.
//!
//! This module provides the foundational types for the library:
//! - [`CodecError`] / [`ErrorKind`] - error taxonomy
//! - [`Value`] / [`MessageValue`] - dynamic message values

pub mod error;
pub mod value;

pub use error::{CodecError, ErrorKind, Result};
pub use value::{MessageValue, Value};
