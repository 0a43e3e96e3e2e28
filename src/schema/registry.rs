// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Name registry for the message catalog.
//!
//! Schema names follow the `package/msg/TypeName` convention
//! (e.g. `sensor_msgs/msg/Image`). Lookups also accept the short
//! `package/TypeName` form used by ROS1 tooling.
//!
//! ```
//! use roboschema::schema::registry::{is_supported, lookup};
//!
//! assert!(is_supported("sensor_msgs/msg/Image"));
//! assert_eq!(lookup("std_msgs/Header").unwrap().name, "std_msgs/msg/Header");
//! assert!(!is_supported("unknown_msgs/msg/Foo"));
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use super::ast::MessageSchema;
use crate::core::{CodecError, Result};
use crate::msgs::{
    builtin_interfaces, edgefirst_msgs, foxglove_msgs, geometry_msgs, nav_msgs, rosgraph_msgs,
    sensor_msgs, std_msgs,
};

type Package = (&'static str, &'static [&'static MessageSchema]);

/// Every registered package with its schemas.
fn packages() -> [Package; 8] {
    [
        ("builtin_interfaces", builtin_interfaces::SCHEMAS),
        ("edgefirst_msgs", edgefirst_msgs::SCHEMAS),
        ("foxglove_msgs", foxglove_msgs::SCHEMAS),
        ("geometry_msgs", geometry_msgs::SCHEMAS),
        ("nav_msgs", nav_msgs::SCHEMAS),
        ("rosgraph_msgs", rosgraph_msgs::SCHEMAS),
        ("sensor_msgs", sensor_msgs::SCHEMAS),
        ("std_msgs", std_msgs::SCHEMAS),
    ]
}

fn by_name() -> &'static HashMap<&'static str, &'static MessageSchema> {
    static INDEX: OnceLock<HashMap<&'static str, &'static MessageSchema>> = OnceLock::new();
    INDEX.get_or_init(|| {
        packages()
            .into_iter()
            .flat_map(|(_, schemas)| schemas.iter())
            .map(|schema| (schema.name, *schema))
            .collect()
    })
}

/// Split `package/msg/TypeName` into `(package, TypeName)`.
///
/// The name must have exactly three non-empty segments with `msg` in the
/// middle.
pub fn parse_schema(schema: &str) -> Result<(&str, &str)> {
    let mut parts = schema.split('/');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(package), Some("msg"), Some(type_name), None)
            if !package.is_empty() && !type_name.is_empty() =>
        {
            Ok((package, type_name))
        }
        _ => Err(CodecError::parse(
            "schema name",
            format!("'{schema}' is not of the form package/msg/TypeName"),
        )),
    }
}

/// Find a schema by full (`pkg/msg/Type`) or short (`pkg/Type`) name.
pub fn lookup(name: &str) -> Option<&'static MessageSchema> {
    let index = by_name();
    if let Some(schema) = index.get(name) {
        return Some(*schema);
    }
    let (package, type_name) = name.split_once('/')?;
    if type_name.contains('/') {
        return None;
    }
    index.get(format!("{package}/msg/{type_name}").as_str()).copied()
}

/// Check whether `schema` names a type in the catalog.
///
/// Only the full `package/msg/TypeName` form counts as supported.
pub fn is_supported(schema: &str) -> bool {
    parse_schema(schema).is_ok() && by_name().contains_key(schema)
}

/// All registered schema names, sorted.
pub fn list_schemas() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = by_name().keys().copied().collect();
    names.sort_unstable();
    names
}

/// The schemas of one package, or an empty slice for unknown packages.
pub fn list_package(package: &str) -> &'static [&'static MessageSchema] {
    packages()
        .into_iter()
        .find(|(name, _)| *name == package)
        .map(|(_, schemas)| schemas)
        .unwrap_or_default()
}
