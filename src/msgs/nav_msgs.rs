// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! `nav_msgs` package: odometry, paths and occupancy grids.

use super::builtin_interfaces::TIME;
use super::geometry_msgs::{POSE, POSE_STAMPED, POSE_WITH_COVARIANCE, TWIST_WITH_COVARIANCE};
use super::std_msgs::HEADER;
use crate::schema::{ElementType, FieldDescriptor, FieldType, MessageSchema};

/// Estimated pose and velocity; the twist is expressed in `child_frame_id`.
pub static ODOMETRY: MessageSchema = MessageSchema {
    name: "nav_msgs/msg/Odometry",
    fields: &[
        FieldDescriptor::new("header", FieldType::Nested(&HEADER)),
        FieldDescriptor::new("child_frame_id", FieldType::String),
        FieldDescriptor::new("pose", FieldType::Nested(&POSE_WITH_COVARIANCE)),
        FieldDescriptor::new("twist", FieldType::Nested(&TWIST_WITH_COVARIANCE)),
    ],
};

pub static PATH: MessageSchema = MessageSchema {
    name: "nav_msgs/msg/Path",
    fields: &[
        FieldDescriptor::new("header", FieldType::Nested(&HEADER)),
        FieldDescriptor::new(
            "poses",
            FieldType::sequence(ElementType::Nested(&POSE_STAMPED)),
        ),
    ],
};

pub static MAP_META_DATA: MessageSchema = MessageSchema {
    name: "nav_msgs/msg/MapMetaData",
    fields: &[
        FieldDescriptor::new("map_load_time", FieldType::Nested(&TIME)),
        FieldDescriptor::new("resolution", FieldType::FLOAT32),
        FieldDescriptor::new("width", FieldType::UINT32),
        FieldDescriptor::new("height", FieldType::UINT32),
        FieldDescriptor::new("origin", FieldType::Nested(&POSE)),
    ],
};

/// Row-major grid, cell values are occupancy probabilities in `0..=100` or
/// `-1` for unknown.
pub static OCCUPANCY_GRID: MessageSchema = MessageSchema {
    name: "nav_msgs/msg/OccupancyGrid",
    fields: &[
        FieldDescriptor::new("header", FieldType::Nested(&HEADER)),
        FieldDescriptor::new("info", FieldType::Nested(&MAP_META_DATA)),
        FieldDescriptor::new("data", FieldType::sequence(ElementType::INT8)),
    ],
};

/// All schemas in this package.
pub static SCHEMAS: &[&MessageSchema] = &[&MAP_META_DATA, &OCCUPANCY_GRID, &ODOMETRY, &PATH];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MessageValue, Value};
    use crate::encoding::cdr::{decode, encode};

    #[test]
    fn test_path_with_poses() {
        let mut pose = MessageValue::new(&POSE_STAMPED);
        pose.set_path("header.frame_id", "map").unwrap();
        pose.set_path("pose.orientation.w", 1.0f64).unwrap();

        let mut path = MessageValue::new(&PATH);
        path.set("poses", vec![pose.clone(), pose.clone(), pose])
            .unwrap();

        let decoded = decode(&PATH, &encode(&path).unwrap()).unwrap();
        assert_eq!(decoded, path);
        assert_eq!(decoded.get("poses").and_then(Value::len), Some(3));
    }

    #[test]
    fn test_occupancy_grid_cells() {
        let mut grid = MessageValue::new(&OCCUPANCY_GRID);
        grid.set_path("info.width", 2u32).unwrap();
        grid.set_path("info.height", 2u32).unwrap();
        grid.set("data", vec![-1i8, 0, 50, 100]).unwrap();

        let decoded = decode(&OCCUPANCY_GRID, &encode(&grid).unwrap()).unwrap();
        assert_eq!(decoded.get_path("data.0"), Some(&Value::Int8(-1)));
        assert_eq!(decoded, grid);
    }
}
