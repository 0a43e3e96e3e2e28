// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! `sensor_msgs` package: images, point clouds, IMU and GNSS fixes.
//!
//! Constant tables for enumerated fields live in the submodules
//! [`point_field`], [`nav_sat_status`] and [`nav_sat_fix`].

use super::geometry_msgs::{QUATERNION, VECTOR3};
use super::std_msgs::HEADER;
use crate::schema::{ElementType, FieldDescriptor, FieldType, MessageSchema};

/// `PointField.datatype` codes.
pub mod point_field {
    pub const INT8: u8 = 1;
    pub const UINT8: u8 = 2;
    pub const INT16: u8 = 3;
    pub const UINT16: u8 = 4;
    pub const INT32: u8 = 5;
    pub const UINT32: u8 = 6;
    pub const FLOAT32: u8 = 7;
    pub const FLOAT64: u8 = 8;

    /// Size in bytes of a datatype code, `None` for unknown codes.
    pub const fn size_of(datatype: u8) -> Option<usize> {
        match datatype {
            INT8 | UINT8 => Some(1),
            INT16 | UINT16 => Some(2),
            INT32 | UINT32 | FLOAT32 => Some(4),
            FLOAT64 => Some(8),
            _ => None,
        }
    }
}

/// `NavSatStatus` status and service values.
pub mod nav_sat_status {
    /// unable to fix position
    pub const STATUS_NO_FIX: i8 = -1;
    /// unaugmented fix
    pub const STATUS_FIX: i8 = 0;
    /// with satellite-based augmentation
    pub const STATUS_SBAS_FIX: i8 = 1;
    /// with ground-based augmentation
    pub const STATUS_GBAS_FIX: i8 = 2;

    pub const SERVICE_GPS: u16 = 1;
    pub const SERVICE_GLONASS: u16 = 2;
    /// includes BeiDou
    pub const SERVICE_COMPASS: u16 = 4;
    pub const SERVICE_GALILEO: u16 = 8;
}

/// `NavSatFix.position_covariance_type` values.
pub mod nav_sat_fix {
    pub const COVARIANCE_TYPE_UNKNOWN: u8 = 0;
    pub const COVARIANCE_TYPE_APPROXIMATED: u8 = 1;
    pub const COVARIANCE_TYPE_DIAGONAL_KNOWN: u8 = 2;
    pub const COVARIANCE_TYPE_KNOWN: u8 = 3;
}

pub static REGION_OF_INTEREST: MessageSchema = MessageSchema {
    name: "sensor_msgs/msg/RegionOfInterest",
    fields: &[
        FieldDescriptor::new("x_offset", FieldType::UINT32),
        FieldDescriptor::new("y_offset", FieldType::UINT32),
        FieldDescriptor::new("height", FieldType::UINT32),
        FieldDescriptor::new("width", FieldType::UINT32),
        FieldDescriptor::new("do_rectify", FieldType::BOOL),
    ],
};

/// Camera calibration: intrinsics `k`, rectification `r`, projection `p`.
pub static CAMERA_INFO: MessageSchema = MessageSchema {
    name: "sensor_msgs/msg/CameraInfo",
    fields: &[
        FieldDescriptor::new("header", FieldType::Nested(&HEADER)),
        FieldDescriptor::new("height", FieldType::UINT32),
        FieldDescriptor::new("width", FieldType::UINT32),
        FieldDescriptor::new("distortion_model", FieldType::String),
        FieldDescriptor::new("d", FieldType::sequence(ElementType::FLOAT64)),
        FieldDescriptor::new("k", FieldType::array(ElementType::FLOAT64, 9)),
        FieldDescriptor::new("r", FieldType::array(ElementType::FLOAT64, 9)),
        FieldDescriptor::new("p", FieldType::array(ElementType::FLOAT64, 12)),
        FieldDescriptor::new("binning_x", FieldType::UINT32),
        FieldDescriptor::new("binning_y", FieldType::UINT32),
        FieldDescriptor::new("roi", FieldType::Nested(&REGION_OF_INTEREST)),
    ],
};

pub static COMPRESSED_IMAGE: MessageSchema = MessageSchema {
    name: "sensor_msgs/msg/CompressedImage",
    fields: &[
        FieldDescriptor::new("header", FieldType::Nested(&HEADER)),
        FieldDescriptor::new("format", FieldType::String),
        FieldDescriptor::new("data", FieldType::sequence(ElementType::UINT8)),
    ],
};

/// Uncompressed image; `step` is the row length in bytes.
pub static IMAGE: MessageSchema = MessageSchema {
    name: "sensor_msgs/msg/Image",
    fields: &[
        FieldDescriptor::new("header", FieldType::Nested(&HEADER)),
        FieldDescriptor::new("height", FieldType::UINT32),
        FieldDescriptor::new("width", FieldType::UINT32),
        FieldDescriptor::new("encoding", FieldType::String),
        FieldDescriptor::new("is_bigendian", FieldType::UINT8),
        FieldDescriptor::new("step", FieldType::UINT32),
        FieldDescriptor::new("data", FieldType::sequence(ElementType::UINT8)),
    ],
};

pub static IMU: MessageSchema = MessageSchema {
    name: "sensor_msgs/msg/Imu",
    fields: &[
        FieldDescriptor::new("header", FieldType::Nested(&HEADER)),
        FieldDescriptor::new("orientation", FieldType::Nested(&QUATERNION)),
        FieldDescriptor::new(
            "orientation_covariance",
            FieldType::array(ElementType::FLOAT64, 9),
        ),
        FieldDescriptor::new("angular_velocity", FieldType::Nested(&VECTOR3)),
        FieldDescriptor::new(
            "angular_velocity_covariance",
            FieldType::array(ElementType::FLOAT64, 9),
        ),
        FieldDescriptor::new("linear_acceleration", FieldType::Nested(&VECTOR3)),
        FieldDescriptor::new(
            "linear_acceleration_covariance",
            FieldType::array(ElementType::FLOAT64, 9),
        ),
    ],
};

pub static NAV_SAT_STATUS: MessageSchema = MessageSchema {
    name: "sensor_msgs/msg/NavSatStatus",
    fields: &[
        FieldDescriptor::new("status", FieldType::INT8),
        FieldDescriptor::new("service", FieldType::UINT16),
    ],
};

pub static NAV_SAT_FIX: MessageSchema = MessageSchema {
    name: "sensor_msgs/msg/NavSatFix",
    fields: &[
        FieldDescriptor::new("header", FieldType::Nested(&HEADER)),
        FieldDescriptor::new("status", FieldType::Nested(&NAV_SAT_STATUS)),
        FieldDescriptor::new("latitude", FieldType::FLOAT64),
        FieldDescriptor::new("longitude", FieldType::FLOAT64),
        FieldDescriptor::new("altitude", FieldType::FLOAT64),
        FieldDescriptor::new(
            "position_covariance",
            FieldType::array(ElementType::FLOAT64, 9),
        ),
        FieldDescriptor::new("position_covariance_type", FieldType::UINT8),
    ],
};

/// One channel of a [`POINT_CLOUD2`] point layout.
pub static POINT_FIELD: MessageSchema = MessageSchema {
    name: "sensor_msgs/msg/PointField",
    fields: &[
        FieldDescriptor::new("name", FieldType::String),
        FieldDescriptor::new("offset", FieldType::UINT32),
        FieldDescriptor::new("datatype", FieldType::UINT8),
        FieldDescriptor::new("count", FieldType::UINT32),
    ],
};

/// Packed N-dimensional points. See [`crate::pointcloud::decode_pcd`].
pub static POINT_CLOUD2: MessageSchema = MessageSchema {
    name: "sensor_msgs/msg/PointCloud2",
    fields: &[
        FieldDescriptor::new("header", FieldType::Nested(&HEADER)),
        FieldDescriptor::new("height", FieldType::UINT32),
        FieldDescriptor::new("width", FieldType::UINT32),
        FieldDescriptor::new(
            "fields",
            FieldType::sequence(ElementType::Nested(&POINT_FIELD)),
        ),
        FieldDescriptor::new("is_bigendian", FieldType::BOOL),
        FieldDescriptor::new("point_step", FieldType::UINT32),
        FieldDescriptor::new("row_step", FieldType::UINT32),
        FieldDescriptor::new("data", FieldType::sequence(ElementType::UINT8)),
        FieldDescriptor::new("is_dense", FieldType::BOOL),
    ],
};

/// All schemas in this package.
pub static SCHEMAS: &[&MessageSchema] = &[
    &CAMERA_INFO,
    &COMPRESSED_IMAGE,
    &IMAGE,
    &IMU,
    &NAV_SAT_FIX,
    &NAV_SAT_STATUS,
    &POINT_CLOUD2,
    &POINT_FIELD,
    &REGION_OF_INTEREST,
];
