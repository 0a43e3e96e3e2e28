// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! PointCloud2 point extraction.
//!
//! Turns the packed `data` payload of a `sensor_msgs/msg/PointCloud2` value
//! into a list of [`Point`]s using the cloud's `fields` layout.

use std::collections::HashMap;

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use tracing::{debug, warn};

use crate::core::{CodecError, MessageValue, Result, Value};
use crate::msgs::sensor_msgs::{point_field, POINT_CLOUD2};
use crate::msgs::typed_field;

/// One decoded point.
///
/// Channels named `x`, `y` and `z` fill the coordinates and `cluster_id`
/// fills `id`. Every other channel is kept in `fields` by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub id: isize,
    pub fields: HashMap<String, f64>,
}

/// A channel of the point layout, pulled out of the `fields` sequence.
struct Channel<'a> {
    name: &'a str,
    offset: usize,
    datatype: u8,
}

/// Decode every point of a PointCloud2 value.
///
/// Points are visited row by row; the point at `(row, col)` starts at
/// `row * row_step + col * point_step` in `data`. Only the first element of
/// multi-count channels is read. Channels with an unknown datatype are
/// skipped.
///
/// # Errors
///
/// Invalid argument when `cloud` is not a PointCloud2 value, malformed data
/// when a point or channel lies outside the payload.
///
/// # Example
///
/// ```
/// use roboschema::msgs::sensor_msgs::{point_field, POINT_CLOUD2, POINT_FIELD};
/// use roboschema::{decode_pcd, MessageValue};
///
/// let x = MessageValue::new(&POINT_FIELD)
///     .with("name", "x")?
///     .with("datatype", point_field::FLOAT32)?
///     .with("count", 1u32)?;
///
/// let cloud = MessageValue::new(&POINT_CLOUD2)
///     .with("height", 1u32)?
///     .with("width", 1u32)?
///     .with("fields", vec![x])?
///     .with("point_step", 4u32)?
///     .with("row_step", 4u32)?
///     .with("data", 2.5f32.to_le_bytes().to_vec())?;
///
/// let points = decode_pcd(&cloud)?;
/// assert_eq!(points[0].x, 2.5);
/// # Ok::<(), roboschema::CodecError>(())
/// ```
pub fn decode_pcd(cloud: &MessageValue) -> Result<Vec<Point>> {
    if cloud.schema().name != POINT_CLOUD2.name {
        return Err(CodecError::invalid_argument(format!(
            "expected {}, got {}",
            POINT_CLOUD2.name,
            cloud.schema().name
        )));
    }

    let height = u32_field(cloud, "height")? as usize;
    let width = u32_field(cloud, "width")? as usize;
    let point_step = u32_field(cloud, "point_step")? as usize;
    let row_step = u32_field(cloud, "row_step")? as usize;
    let big_endian = typed_field(cloud, "is_bigendian", "bool", Value::as_bool)?;
    let data = typed_field(cloud, "data", "uint8[]", Value::as_bytes)?;
    let channels = channels(cloud)?;

    let total = height
        .checked_mul(width)
        .ok_or_else(|| CodecError::invalid_argument("point count overflows usize"))?;
    // Rows may overlap (row_step 0), so the payload length only bounds the
    // up-front reservation, not the point count.
    let reserve = total.min(data.len() / point_step.max(1) + 1);
    let mut points = Vec::new();
    points
        .try_reserve_exact(reserve)
        .map_err(|_| CodecError::allocation(reserve.saturating_mul(std::mem::size_of::<Point>())))?;

    for row in 0..height {
        for col in 0..width {
            let start = row
                .checked_mul(row_step)
                .and_then(|r| col.checked_mul(point_step).and_then(|c| r.checked_add(c)))
                .ok_or_else(|| CodecError::length_exceeded(usize::MAX, 0, data.len()))?;
            let end = start.saturating_add(point_step);
            let bytes = data.get(start..end).ok_or_else(|| {
                CodecError::buffer_too_short(point_step, data.len().saturating_sub(start), start as u64)
            })?;
            let point = if big_endian {
                parse_point::<BigEndian>(&channels, bytes, start)?
            } else {
                parse_point::<LittleEndian>(&channels, bytes, start)?
            };
            points.push(point);
        }
    }

    debug!(
        points = points.len(),
        channels = channels.len(),
        big_endian,
        "Decoded point cloud"
    );
    Ok(points)
}

fn u32_field(cloud: &MessageValue, name: &str) -> Result<u32> {
    typed_field(cloud, name, "uint32", |v| match v {
        Value::UInt32(n) => Some(*n),
        _ => None,
    })
}

fn channels(cloud: &MessageValue) -> Result<Vec<Channel<'_>>> {
    let fields = typed_field(cloud, "fields", "PointField[]", Value::as_array)?;
    fields
        .iter()
        .map(|field| {
            let field = field.as_message().ok_or_else(|| {
                CodecError::type_mismatch("fields", "PointField", field.type_name())
            })?;
            let name = typed_field(field, "name", "string", Value::as_str)?;
            let offset = typed_field(field, "offset", "uint32", |v| match v {
                Value::UInt32(n) => Some(*n as usize),
                _ => None,
            })?;
            let datatype = typed_field(field, "datatype", "uint8", |v| match v {
                Value::UInt8(n) => Some(*n),
                _ => None,
            })?;
            Ok(Channel {
                name,
                offset,
                datatype,
            })
        })
        .collect()
}

fn parse_point<B: ByteOrder>(channels: &[Channel<'_>], bytes: &[u8], start: usize) -> Result<Point> {
    let mut point = Point::default();
    for channel in channels {
        let Some(size) = point_field::size_of(channel.datatype) else {
            warn!(
                channel = channel.name,
                datatype = channel.datatype,
                "Skipping point channel with unknown datatype"
            );
            continue;
        };
        let raw = channel
            .offset
            .checked_add(size)
            .and_then(|end| bytes.get(channel.offset..end))
            .ok_or_else(|| {
                CodecError::buffer_too_short(
                    size,
                    bytes.len().saturating_sub(channel.offset),
                    (start + channel.offset.min(bytes.len())) as u64,
                )
            })?;
        let value = match channel.datatype {
            point_field::INT8 => raw[0] as i8 as f64,
            point_field::UINT8 => raw[0] as f64,
            point_field::INT16 => B::read_i16(raw) as f64,
            point_field::UINT16 => B::read_u16(raw) as f64,
            point_field::INT32 => B::read_i32(raw) as f64,
            point_field::UINT32 => B::read_u32(raw) as f64,
            point_field::FLOAT32 => B::read_f32(raw) as f64,
            _ => B::read_f64(raw),
        };
        match channel.name {
            "x" => point.x = value,
            "y" => point.y = value,
            "z" => point.z = value,
            "cluster_id" => point.id = value as isize,
            other => {
                point.fields.insert(other.to_string(), value);
            }
        }
    }
    Ok(point)
}
