// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! `edgefirst_msgs` package: perception outputs, radar data and
//! zero-copy buffer descriptors.

use super::builtin_interfaces::{DURATION, TIME};
use super::std_msgs::HEADER;
use crate::schema::{ElementType, FieldDescriptor, FieldType, MessageSchema};

/// Axis labels for `RadarCube.layout`.
pub mod radar_cube_dimension {
    pub const UNDEFINED: u8 = 0;
    pub const RANGE: u8 = 1;
    pub const DOPPLER: u8 = 2;
    pub const AZIMUTH: u8 = 3;
    pub const ELEVATION: u8 = 4;
    pub const RXCHANNEL: u8 = 5;
    pub const SEQUENCE: u8 = 6;
}

/// Tensor element types for `ModelInfo.input_type` / `output_type`.
pub mod model_info {
    pub const RAW: u8 = 0;
    pub const INT8: u8 = 1;
    pub const UINT8: u8 = 2;
    pub const INT16: u8 = 3;
    pub const UINT16: u8 = 4;
    pub const FLOAT16: u8 = 5;
    pub const INT32: u8 = 6;
    pub const UINT32: u8 = 7;
    pub const FLOAT32: u8 = 8;
    pub const INT64: u8 = 9;
    pub const UINT64: u8 = 10;
    pub const FLOAT64: u8 = 11;
    pub const STRING: u8 = 12;
}

pub static DATE: MessageSchema = MessageSchema {
    name: "edgefirst_msgs/msg/Date",
    fields: &[
        FieldDescriptor::new("year", FieldType::UINT16),
        FieldDescriptor::new("month", FieldType::UINT8),
        FieldDescriptor::new("day", FieldType::UINT8),
    ],
};

/// Wall-clock date and time; `timezone` is the UTC offset in minutes.
pub static LOCAL_TIME: MessageSchema = MessageSchema {
    name: "edgefirst_msgs/msg/LocalTime",
    fields: &[
        FieldDescriptor::new("header", FieldType::Nested(&HEADER)),
        FieldDescriptor::new("date", FieldType::Nested(&DATE)),
        FieldDescriptor::new("time", FieldType::Nested(&TIME)),
        FieldDescriptor::new("timezone", FieldType::INT16),
    ],
};

/// Tracker state attached to a detection.
pub static TRACK: MessageSchema = MessageSchema {
    name: "edgefirst_msgs/msg/Track",
    fields: &[
        FieldDescriptor::new("id", FieldType::String),
        FieldDescriptor::new("lifetime", FieldType::INT32),
        FieldDescriptor::new("created", FieldType::Nested(&TIME)),
    ],
};

/// Bounding box in normalized image coordinates.
pub static BOX: MessageSchema = MessageSchema {
    name: "edgefirst_msgs/msg/Box",
    fields: &[
        FieldDescriptor::new("center_x", FieldType::FLOAT32),
        FieldDescriptor::new("center_y", FieldType::FLOAT32),
        FieldDescriptor::new("width", FieldType::FLOAT32),
        FieldDescriptor::new("height", FieldType::FLOAT32),
        FieldDescriptor::new("label", FieldType::String),
        FieldDescriptor::new("score", FieldType::FLOAT32),
        FieldDescriptor::new("distance", FieldType::FLOAT32),
        FieldDescriptor::new("speed", FieldType::FLOAT32),
        FieldDescriptor::new("track", FieldType::Nested(&TRACK)),
    ],
};

pub static DETECT: MessageSchema = MessageSchema {
    name: "edgefirst_msgs/msg/Detect",
    fields: &[
        FieldDescriptor::new("header", FieldType::Nested(&HEADER)),
        FieldDescriptor::new("input_timestamp", FieldType::Nested(&TIME)),
        FieldDescriptor::new("model_time", FieldType::Nested(&TIME)),
        FieldDescriptor::new("output_time", FieldType::Nested(&TIME)),
        FieldDescriptor::new("boxes", FieldType::sequence(ElementType::Nested(&BOX))),
    ],
};

/// Segmentation mask. `mask` holds `length` planes of `height * width`
/// bytes, optionally compressed as named by `encoding`.
pub static MASK: MessageSchema = MessageSchema {
    name: "edgefirst_msgs/msg/Mask",
    fields: &[
        FieldDescriptor::new("height", FieldType::UINT32),
        FieldDescriptor::new("width", FieldType::UINT32),
        FieldDescriptor::new("length", FieldType::UINT32),
        FieldDescriptor::new("encoding", FieldType::String),
        FieldDescriptor::new("mask", FieldType::sequence(ElementType::UINT8)),
        FieldDescriptor::new("boxed", FieldType::BOOL),
    ],
};

pub static MODEL: MessageSchema = MessageSchema {
    name: "edgefirst_msgs/msg/Model",
    fields: &[
        FieldDescriptor::new("header", FieldType::Nested(&HEADER)),
        FieldDescriptor::new("input_time", FieldType::Nested(&DURATION)),
        FieldDescriptor::new("model_time", FieldType::Nested(&DURATION)),
        FieldDescriptor::new("output_time", FieldType::Nested(&DURATION)),
        FieldDescriptor::new("decode_time", FieldType::Nested(&DURATION)),
        FieldDescriptor::new("boxes", FieldType::sequence(ElementType::Nested(&BOX))),
        FieldDescriptor::new("masks", FieldType::sequence(ElementType::Nested(&MASK))),
    ],
};

pub static MODEL_INFO: MessageSchema = MessageSchema {
    name: "edgefirst_msgs/msg/ModelInfo",
    fields: &[
        FieldDescriptor::new("header", FieldType::Nested(&HEADER)),
        FieldDescriptor::new("input_shape", FieldType::sequence(ElementType::UINT32)),
        FieldDescriptor::new("input_type", FieldType::UINT8),
        FieldDescriptor::new("output_shape", FieldType::sequence(ElementType::UINT32)),
        FieldDescriptor::new("output_type", FieldType::UINT8),
        FieldDescriptor::new("labels", FieldType::sequence(ElementType::String)),
        FieldDescriptor::new("model_type", FieldType::String),
        FieldDescriptor::new("model_format", FieldType::String),
        FieldDescriptor::new("model_name", FieldType::String),
    ],
};

/// Radar data cube. `layout` labels each axis of `shape` with a
/// [`radar_cube_dimension`] value; when `is_complex` is set the innermost
/// axis interleaves real and imaginary parts.
pub static RADAR_CUBE: MessageSchema = MessageSchema {
    name: "edgefirst_msgs/msg/RadarCube",
    fields: &[
        FieldDescriptor::new("header", FieldType::Nested(&HEADER)),
        FieldDescriptor::new("timestamp", FieldType::UINT64),
        FieldDescriptor::new("layout", FieldType::sequence(ElementType::UINT8)),
        FieldDescriptor::new("shape", FieldType::sequence(ElementType::UINT16)),
        FieldDescriptor::new("scales", FieldType::sequence(ElementType::FLOAT32)),
        FieldDescriptor::new("cube", FieldType::sequence(ElementType::INT16)),
        FieldDescriptor::new("is_complex", FieldType::BOOL),
    ],
};

pub static RADAR_INFO: MessageSchema = MessageSchema {
    name: "edgefirst_msgs/msg/RadarInfo",
    fields: &[
        FieldDescriptor::new("header", FieldType::Nested(&HEADER)),
        FieldDescriptor::new("center_frequency", FieldType::String),
        FieldDescriptor::new("frequency_sweep", FieldType::String),
        FieldDescriptor::new("range_toggle", FieldType::String),
        FieldDescriptor::new("detection_sensitivity", FieldType::String),
        FieldDescriptor::new("cube", FieldType::BOOL),
    ],
};

/// Descriptor for a DMA buffer shared between processes: owner `pid`,
/// its file descriptor `fd`, and the image geometry.
pub static DMA_BUFFER: MessageSchema = MessageSchema {
    name: "edgefirst_msgs/msg/DmaBuffer",
    fields: &[
        FieldDescriptor::new("header", FieldType::Nested(&HEADER)),
        FieldDescriptor::new("pid", FieldType::UINT32),
        FieldDescriptor::new("fd", FieldType::INT32),
        FieldDescriptor::new("width", FieldType::UINT32),
        FieldDescriptor::new("height", FieldType::UINT32),
        FieldDescriptor::new("stride", FieldType::UINT32),
        FieldDescriptor::new("fourcc", FieldType::UINT32),
        FieldDescriptor::new("length", FieldType::UINT32),
    ],
};

/// All schemas in this package.
pub static SCHEMAS: &[&MessageSchema] = &[
    &BOX,
    &DATE,
    &DETECT,
    &DMA_BUFFER,
    &LOCAL_TIME,
    &MASK,
    &MODEL,
    &MODEL_INFO,
    &RADAR_CUBE,
    &RADAR_INFO,
    &TRACK,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MessageValue, Value};
    use crate::encoding::cdr::{decode, encode};

    fn detection(label: &str, score: f32) -> MessageValue {
        let mut b = MessageValue::new(&BOX);
        b.set("center_x", 0.5f32).unwrap();
        b.set("center_y", 0.25f32).unwrap();
        b.set("label", label).unwrap();
        b.set("score", score).unwrap();
        b.set_path("track.id", "t-17").unwrap();
        b.set_path("track.lifetime", 4i32).unwrap();
        b
    }

    #[test]
    fn test_detect_round_trip() {
        let mut detect = MessageValue::new(&DETECT);
        detect.set_path("header.frame_id", "camera").unwrap();
        detect
            .set("boxes", vec![detection("person", 0.9), detection("car", 0.6)])
            .unwrap();

        let decoded = decode(&DETECT, &encode(&detect).unwrap()).unwrap();
        assert_eq!(decoded, detect);
        assert_eq!(
            decoded.get_path("boxes.1.label").and_then(Value::as_str),
            Some("car")
        );
        assert_eq!(
            decoded.get_path("boxes.0.track.id").and_then(Value::as_str),
            Some("t-17")
        );
    }

    #[test]
    fn test_date_packs_tightly() {
        let date = MessageValue::new(&DATE)
            .with("year", 2025u16)
            .unwrap()
            .with("month", 6u8)
            .unwrap()
            .with("day", 30u8)
            .unwrap();
        let bytes = encode(&date).unwrap();
        assert_eq!(&bytes[4..], &[0xe9, 0x07, 6, 30]);
    }

    #[test]
    fn test_radar_cube_sequences() {
        let mut cube = MessageValue::new(&RADAR_CUBE);
        cube.set("timestamp", 1_700_000_000_000u64).unwrap();
        cube.set(
            "layout",
            vec![
                radar_cube_dimension::SEQUENCE,
                radar_cube_dimension::RANGE,
                radar_cube_dimension::RXCHANNEL,
                radar_cube_dimension::DOPPLER,
            ],
        )
        .unwrap();
        cube.set("shape", vec![2u16, 4, 1, 2]).unwrap();
        cube.set("scales", vec![1.0f32, 0.5, 1.0, 0.25]).unwrap();
        cube.set("cube", (0..32).map(|v| v as i16 - 16).collect::<Vec<i16>>())
            .unwrap();
        cube.set("is_complex", true).unwrap();

        let decoded = decode(&RADAR_CUBE, &encode(&cube).unwrap()).unwrap();
        assert_eq!(decoded, cube);
        assert_eq!(decoded.get_path("cube.0"), Some(&Value::Int16(-16)));
    }

    #[test]
    fn test_model_info_labels() {
        let mut info = MessageValue::new(&MODEL_INFO);
        info.set("input_shape", vec![1u32, 640, 640, 3]).unwrap();
        info.set("input_type", model_info::UINT8).unwrap();
        info.set("output_type", model_info::FLOAT32).unwrap();
        info.set("labels", vec!["person", "bicycle", ""]).unwrap();
        info.set("model_name", "yolov8n").unwrap();

        let decoded = decode(&MODEL_INFO, &encode(&info).unwrap()).unwrap();
        assert_eq!(decoded, info);
        assert_eq!(decoded.get("labels").and_then(Value::len), Some(3));
    }
}
