// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Roboschema
//!
//! Robotics message schemas and a CDR (Common Data Representation) codec.
//!
//! The crate is organized as:
//! - [`schema`] - static field-list schemas and the name registry
//! - [`msgs`] - the message catalog (ROS 2 common interfaces, Foxglove and
//!   EdgeFirst messages) with its constant tables
//! - [`core`] - dynamic message values and the error taxonomy
//! - [`encoding::cdr`] - the plain-CDR encoder, decoder and size calculator
//! - [`pointcloud`] - point extraction from `sensor_msgs/msg/PointCloud2`
//!
//! ## Wire format
//!
//! Every encoded message begins with a 4-byte encapsulation header
//! (representation identifier and options). Encoding produces CDR_LE by
//! default; decoding accepts CDR_LE and CDR_BE. Primitives are aligned to
//! their own size relative to the end of the header, strings carry a
//! length prefix that counts their NUL terminator, and sequences carry a
//! `u32` element count.
//!
//! ## Example
//!
//! ```rust
//! use roboschema::msgs::std_msgs::HEADER;
//! use roboschema::{decode, encode, MessageValue};
//!
//! let mut header = MessageValue::new(&HEADER);
//! header.set_path("stamp.sec", 42i32)?;
//! header.set("frame_id", "camera")?;
//!
//! let bytes = encode(&header)?;
//! assert_eq!(bytes.len(), 23);
//! assert_eq!(decode(&HEADER, &bytes)?, header);
//! # Ok::<(), roboschema::CodecError>(())
//! ```
//!
//! ## Example: sized encoding
//!
//! ```rust
//! use roboschema::msgs::builtin_interfaces::TIME;
//! use roboschema::{encode_sized, ErrorKind, MessageValue};
//!
//! let time = MessageValue::new(&TIME);
//! let required = encode_sized(&time, None)?;
//! assert_eq!(required, 12);
//!
//! let mut small = [0u8; 8];
//! let err = encode_sized(&time, Some(&mut small[..])).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::BufferTooSmall);
//!
//! let mut buf = vec![0u8; required];
//! assert_eq!(encode_sized(&time, Some(&mut buf[..]))?, 12);
//! # Ok::<(), roboschema::CodecError>(())
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use core::{CodecError, ErrorKind, MessageValue, Result, Value};

// Encoding/decoding
pub mod encoding;

pub use encoding::cdr::{decode, encode, encode_sized, encoded_len, CdrCodec, EncapsulationKind};

// Schemas and the name registry
pub mod schema;

pub use schema::{
    is_supported, list_package, list_schemas, lookup, parse_schema, FieldType, MessageSchema,
};

// Message catalog
pub mod msgs;

pub use msgs::CdrMessage;

// PointCloud2 helpers
pub mod pointcloud;

pub use pointcloud::{decode_pcd, Point};
