// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! `geometry_msgs` package: points, vectors, poses, transforms, twists.

use super::std_msgs::HEADER;
use crate::schema::{ElementType, FieldDescriptor, FieldType, MessageSchema};

pub static VECTOR3: MessageSchema = MessageSchema {
    name: "geometry_msgs/msg/Vector3",
    fields: &[
        FieldDescriptor::new("x", FieldType::FLOAT64),
        FieldDescriptor::new("y", FieldType::FLOAT64),
        FieldDescriptor::new("z", FieldType::FLOAT64),
    ],
};

pub static POINT: MessageSchema = MessageSchema {
    name: "geometry_msgs/msg/Point",
    fields: &[
        FieldDescriptor::new("x", FieldType::FLOAT64),
        FieldDescriptor::new("y", FieldType::FLOAT64),
        FieldDescriptor::new("z", FieldType::FLOAT64),
    ],
};

/// Single-precision point, used by compact point lists.
pub static POINT32: MessageSchema = MessageSchema {
    name: "geometry_msgs/msg/Point32",
    fields: &[
        FieldDescriptor::new("x", FieldType::FLOAT32),
        FieldDescriptor::new("y", FieldType::FLOAT32),
        FieldDescriptor::new("z", FieldType::FLOAT32),
    ],
};

pub static POINT_STAMPED: MessageSchema = MessageSchema {
    name: "geometry_msgs/msg/PointStamped",
    fields: &[
        FieldDescriptor::new("header", FieldType::Nested(&HEADER)),
        FieldDescriptor::new("point", FieldType::Nested(&POINT)),
    ],
};

pub static QUATERNION: MessageSchema = MessageSchema {
    name: "geometry_msgs/msg/Quaternion",
    fields: &[
        FieldDescriptor::new("x", FieldType::FLOAT64),
        FieldDescriptor::new("y", FieldType::FLOAT64),
        FieldDescriptor::new("z", FieldType::FLOAT64),
        FieldDescriptor::new("w", FieldType::FLOAT64),
    ],
};

pub static POSE: MessageSchema = MessageSchema {
    name: "geometry_msgs/msg/Pose",
    fields: &[
        FieldDescriptor::new("position", FieldType::Nested(&POINT)),
        FieldDescriptor::new("orientation", FieldType::Nested(&QUATERNION)),
    ],
};

pub static POSE2D: MessageSchema = MessageSchema {
    name: "geometry_msgs/msg/Pose2D",
    fields: &[
        FieldDescriptor::new("x", FieldType::FLOAT64),
        FieldDescriptor::new("y", FieldType::FLOAT64),
        FieldDescriptor::new("theta", FieldType::FLOAT64),
    ],
};

pub static POSE_STAMPED: MessageSchema = MessageSchema {
    name: "geometry_msgs/msg/PoseStamped",
    fields: &[
        FieldDescriptor::new("header", FieldType::Nested(&HEADER)),
        FieldDescriptor::new("pose", FieldType::Nested(&POSE)),
    ],
};

/// Pose with a row-major 6x6 covariance (x, y, z, rot x, rot y, rot z).
pub static POSE_WITH_COVARIANCE: MessageSchema = MessageSchema {
    name: "geometry_msgs/msg/PoseWithCovariance",
    fields: &[
        FieldDescriptor::new("pose", FieldType::Nested(&POSE)),
        FieldDescriptor::new("covariance", FieldType::array(ElementType::FLOAT64, 36)),
    ],
};

pub static TRANSFORM: MessageSchema = MessageSchema {
    name: "geometry_msgs/msg/Transform",
    fields: &[
        FieldDescriptor::new("translation", FieldType::Nested(&VECTOR3)),
        FieldDescriptor::new("rotation", FieldType::Nested(&QUATERNION)),
    ],
};

/// Transform from `header.frame_id` to `child_frame_id`.
pub static TRANSFORM_STAMPED: MessageSchema = MessageSchema {
    name: "geometry_msgs/msg/TransformStamped",
    fields: &[
        FieldDescriptor::new("header", FieldType::Nested(&HEADER)),
        FieldDescriptor::new("child_frame_id", FieldType::String),
        FieldDescriptor::new("transform", FieldType::Nested(&TRANSFORM)),
    ],
};

pub static TWIST: MessageSchema = MessageSchema {
    name: "geometry_msgs/msg/Twist",
    fields: &[
        FieldDescriptor::new("linear", FieldType::Nested(&VECTOR3)),
        FieldDescriptor::new("angular", FieldType::Nested(&VECTOR3)),
    ],
};

pub static TWIST_STAMPED: MessageSchema = MessageSchema {
    name: "geometry_msgs/msg/TwistStamped",
    fields: &[
        FieldDescriptor::new("header", FieldType::Nested(&HEADER)),
        FieldDescriptor::new("twist", FieldType::Nested(&TWIST)),
    ],
};

pub static TWIST_WITH_COVARIANCE: MessageSchema = MessageSchema {
    name: "geometry_msgs/msg/TwistWithCovariance",
    fields: &[
        FieldDescriptor::new("twist", FieldType::Nested(&TWIST)),
        FieldDescriptor::new("covariance", FieldType::array(ElementType::FLOAT64, 36)),
    ],
};

pub static ACCEL: MessageSchema = MessageSchema {
    name: "geometry_msgs/msg/Accel",
    fields: &[
        FieldDescriptor::new("linear", FieldType::Nested(&VECTOR3)),
        FieldDescriptor::new("angular", FieldType::Nested(&VECTOR3)),
    ],
};

pub static ACCEL_STAMPED: MessageSchema = MessageSchema {
    name: "geometry_msgs/msg/AccelStamped",
    fields: &[
        FieldDescriptor::new("header", FieldType::Nested(&HEADER)),
        FieldDescriptor::new("accel", FieldType::Nested(&ACCEL)),
    ],
};

/// Mass, center of mass and inertia tensor of a rigid body.
pub static INERTIA: MessageSchema = MessageSchema {
    name: "geometry_msgs/msg/Inertia",
    fields: &[
        FieldDescriptor::new("m", FieldType::FLOAT64),
        FieldDescriptor::new("com", FieldType::Nested(&VECTOR3)),
        FieldDescriptor::new("ixx", FieldType::FLOAT64),
        FieldDescriptor::new("ixy", FieldType::FLOAT64),
        FieldDescriptor::new("ixz", FieldType::FLOAT64),
        FieldDescriptor::new("iyy", FieldType::FLOAT64),
        FieldDescriptor::new("iyz", FieldType::FLOAT64),
        FieldDescriptor::new("izz", FieldType::FLOAT64),
    ],
};

pub static INERTIA_STAMPED: MessageSchema = MessageSchema {
    name: "geometry_msgs/msg/InertiaStamped",
    fields: &[
        FieldDescriptor::new("header", FieldType::Nested(&HEADER)),
        FieldDescriptor::new("inertia", FieldType::Nested(&INERTIA)),
    ],
};

/// All schemas in this package.
pub static SCHEMAS: &[&MessageSchema] = &[
    &ACCEL,
    &ACCEL_STAMPED,
    &INERTIA,
    &INERTIA_STAMPED,
    &POINT,
    &POINT32,
    &POINT_STAMPED,
    &POSE,
    &POSE2D,
    &POSE_STAMPED,
    &POSE_WITH_COVARIANCE,
    &QUATERNION,
    &TRANSFORM,
    &TRANSFORM_STAMPED,
    &TWIST,
    &TWIST_STAMPED,
    &TWIST_WITH_COVARIANCE,
    &VECTOR3,
];
