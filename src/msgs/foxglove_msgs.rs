// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! `foxglove_msgs` package: compressed video and 2D image annotations.

use super::builtin_interfaces::TIME;
use super::std_msgs::HEADER;
use crate::schema::{ElementType, FieldDescriptor, FieldType, MessageSchema};

/// `PointsAnnotation.type` values.
pub mod point_annotation_type {
    pub const UNKNOWN: u8 = 0;
    /// individual points
    pub const POINTS: u8 = 1;
    /// closed polygon
    pub const LINE_LOOP: u8 = 2;
    /// connected line segments
    pub const LINE_STRIP: u8 = 3;
    /// independent segments between each pair of points
    pub const LINE_LIST: u8 = 4;
}

/// Single frame of an H.264/H.265 stream; `format` names the codec.
pub static COMPRESSED_VIDEO: MessageSchema = MessageSchema {
    name: "foxglove_msgs/msg/CompressedVideo",
    fields: &[
        FieldDescriptor::new("header", FieldType::Nested(&HEADER)),
        FieldDescriptor::new("data", FieldType::sequence(ElementType::UINT8)),
        FieldDescriptor::new("format", FieldType::String),
    ],
};

/// Pixel coordinates, origin at the top-left corner.
pub static POINT2: MessageSchema = MessageSchema {
    name: "foxglove_msgs/msg/Point2",
    fields: &[
        FieldDescriptor::new("x", FieldType::FLOAT64),
        FieldDescriptor::new("y", FieldType::FLOAT64),
    ],
};

/// RGBA with components in `0.0..=1.0`.
pub static COLOR: MessageSchema = MessageSchema {
    name: "foxglove_msgs/msg/Color",
    fields: &[
        FieldDescriptor::new("r", FieldType::FLOAT64),
        FieldDescriptor::new("g", FieldType::FLOAT64),
        FieldDescriptor::new("b", FieldType::FLOAT64),
        FieldDescriptor::new("a", FieldType::FLOAT64),
    ],
};

pub static CIRCLE_ANNOTATION: MessageSchema = MessageSchema {
    name: "foxglove_msgs/msg/CircleAnnotation",
    fields: &[
        FieldDescriptor::new("timestamp", FieldType::Nested(&TIME)),
        FieldDescriptor::new("position", FieldType::Nested(&POINT2)),
        FieldDescriptor::new("diameter", FieldType::FLOAT64),
        FieldDescriptor::new("thickness", FieldType::FLOAT64),
        FieldDescriptor::new("fill_color", FieldType::Nested(&COLOR)),
        FieldDescriptor::new("outline_color", FieldType::Nested(&COLOR)),
    ],
};

/// Points or lines; `type` takes a [`point_annotation_type`] value and
/// `outline_colors`, when non-empty, has one entry per point.
pub static POINTS_ANNOTATION: MessageSchema = MessageSchema {
    name: "foxglove_msgs/msg/PointsAnnotation",
    fields: &[
        FieldDescriptor::new("timestamp", FieldType::Nested(&TIME)),
        FieldDescriptor::new("type", FieldType::UINT8),
        FieldDescriptor::new("points", FieldType::sequence(ElementType::Nested(&POINT2))),
        FieldDescriptor::new("outline_color", FieldType::Nested(&COLOR)),
        FieldDescriptor::new(
            "outline_colors",
            FieldType::sequence(ElementType::Nested(&COLOR)),
        ),
        FieldDescriptor::new("fill_color", FieldType::Nested(&COLOR)),
        FieldDescriptor::new("thickness", FieldType::FLOAT64),
    ],
};

pub static TEXT_ANNOTATION: MessageSchema = MessageSchema {
    name: "foxglove_msgs/msg/TextAnnotation",
    fields: &[
        FieldDescriptor::new("timestamp", FieldType::Nested(&TIME)),
        FieldDescriptor::new("position", FieldType::Nested(&POINT2)),
        FieldDescriptor::new("text", FieldType::String),
        FieldDescriptor::new("font_size", FieldType::FLOAT64),
        FieldDescriptor::new("text_color", FieldType::Nested(&COLOR)),
        FieldDescriptor::new("background_color", FieldType::Nested(&COLOR)),
    ],
};

pub static IMAGE_ANNOTATIONS: MessageSchema = MessageSchema {
    name: "foxglove_msgs/msg/ImageAnnotations",
    fields: &[
        FieldDescriptor::new(
            "circles",
            FieldType::sequence(ElementType::Nested(&CIRCLE_ANNOTATION)),
        ),
        FieldDescriptor::new(
            "points",
            FieldType::sequence(ElementType::Nested(&POINTS_ANNOTATION)),
        ),
        FieldDescriptor::new(
            "texts",
            FieldType::sequence(ElementType::Nested(&TEXT_ANNOTATION)),
        ),
    ],
};

/// All schemas in this package.
pub static SCHEMAS: &[&MessageSchema] = &[
    &CIRCLE_ANNOTATION,
    &COLOR,
    &COMPRESSED_VIDEO,
    &IMAGE_ANNOTATIONS,
    &POINT2,
    &POINTS_ANNOTATION,
    &TEXT_ANNOTATION,
];
