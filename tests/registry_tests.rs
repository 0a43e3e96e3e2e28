// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Schema name parsing and registry lookups.

mod common;

use common::populated;
use roboschema::{
    encode, is_supported, list_package, list_schemas, lookup, parse_schema, CdrCodec, CodecError,
    ErrorKind,
};

#[test]
fn test_parse_schema_valid() {
    assert_eq!(
        parse_schema("sensor_msgs/msg/Image").unwrap(),
        ("sensor_msgs", "Image")
    );
    assert_eq!(
        parse_schema("edgefirst_msgs/msg/RadarCube").unwrap(),
        ("edgefirst_msgs", "RadarCube")
    );
}

#[test]
fn test_parse_schema_invalid() {
    for name in [
        "",
        "sensor_msgs",
        "sensor_msgs/Image",
        "sensor_msgs/srv/Image",
        "/msg/Image",
        "sensor_msgs/msg/",
        "a/msg/b/c",
    ] {
        let err = parse_schema(name).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument, "{name:?}");
    }
}

#[test]
fn test_every_listed_schema_is_supported() {
    let names = list_schemas();
    assert!(names.len() >= 50, "catalog has {} schemas", names.len());
    assert!(names.windows(2).all(|w| w[0] < w[1]), "sorted and unique");
    for name in names {
        assert!(is_supported(name), "{name}");
        assert_eq!(lookup(name).unwrap().name, name);
        parse_schema(name).unwrap();
    }
}

#[test]
fn test_catalog_contents() {
    for name in [
        "builtin_interfaces/msg/Time",
        "std_msgs/msg/Header",
        "geometry_msgs/msg/TransformStamped",
        "sensor_msgs/msg/PointCloud2",
        "nav_msgs/msg/Odometry",
        "foxglove_msgs/msg/CompressedVideo",
        "edgefirst_msgs/msg/Detect",
        "rosgraph_msgs/msg/Clock",
    ] {
        assert!(is_supported(name), "{name}");
    }
    assert!(!is_supported("std_msgs/Header"));
    assert!(!is_supported("std_msgs/msg/String"));
}

#[test]
fn test_short_name_lookup() {
    assert_eq!(
        lookup("geometry_msgs/Pose").map(|s| s.name),
        Some("geometry_msgs/msg/Pose")
    );
    assert!(lookup("geometry_msgs/msg/Nope").is_none());
    assert!(lookup("Pose").is_none());
}

#[test]
fn test_list_package() {
    let builtin: Vec<_> = list_package("builtin_interfaces")
        .iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(builtin.len(), 2);
    assert!(builtin.contains(&"builtin_interfaces/msg/Duration"));
    assert!(list_package("sensor_msgs")
        .iter()
        .all(|s| s.package() == "sensor_msgs"));
    assert!(list_package("unknown_msgs").is_empty());
}

#[test]
fn test_decode_by_name() {
    let schema = lookup("sensor_msgs/msg/Imu").unwrap();
    let msg = populated(schema, 2);
    let data = encode(&msg).unwrap();
    let codec = CdrCodec::default();
    assert_eq!(codec.decode_by_name("sensor_msgs/msg/Imu", &data).unwrap(), msg);
    assert_eq!(codec.decode_by_name("sensor_msgs/Imu", &data).unwrap(), msg);

    let err = codec.decode_by_name("sensor_msgs/msg/Missing", &data).unwrap_err();
    assert!(matches!(err, CodecError::TypeNotFound { .. }));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}
