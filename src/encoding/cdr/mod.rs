// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CDR (Common Data Representation) module.
//!
//! Provides CDR encoding, decoding, and size calculation for catalog
//! messages: plain CDR (XCDR1) with a 4-byte encapsulation header, in
//! either byte order.

pub mod calculator;
pub mod codec;
pub mod cursor;
pub mod decoder;
pub mod encapsulation;
pub mod encoder;
pub mod sink;

pub use calculator::CdrCalculator;
pub use codec::{decode, encode, encode_sized, encoded_len, CdrCodec};
pub use cursor::CdrCursor;
pub use decoder::CdrDecoder;
pub use encapsulation::{EncapsulationKind, CDR_HEADER_SIZE};
pub use encoder::CdrEncoder;
pub use sink::{CdrSink, SliceSink};
