//! Dataset model shared by the runtime catalog and the build-time dataset check.
//!
//! This file only depends on `serde` and `serde_json` so `build.rs` can include it and reject a
//! dataset the runtime could not parse.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// View box applied to records that do not declare one.
pub const DEFAULT_VIEW_BOX: &str = "0 0 24 24";

fn default_view_box() -> String {
    DEFAULT_VIEW_BOX.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One dataset entry: a unique name plus the shapes that draw it.
pub struct IconRecord {
    /// Lookup key.
    pub name: String,
    /// SVG `viewBox` for the icon's coordinate space.
    #[serde(rename = "viewBox", default = "default_view_box")]
    pub view_box: String,
    /// Shape descriptor.
    #[serde(rename = "svgData", default)]
    pub svg_data: SvgData,
}

impl IconRecord {
    /// Creates a record with the default view box.
    pub fn new(name: impl Into<String>, svg_data: SvgData) -> Self {
        Self {
            name: name.into(),
            view_box: default_view_box(),
            svg_data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
/// Scalar attribute value as it appears in the dataset.
pub enum AttrValue {
    /// Numeric value, printed without a trailing `.0` for integers.
    Number(serde_json::Number),
    /// Free-form text value (`"10%"`, `"currentColor"`).
    Text(String),
    /// Boolean value, printed as `true` / `false`.
    Flag(bool),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
            Self::Flag(value) => write!(f, "{value}"),
        }
    }
}

/// Presentation attributes carried next to a shape's geometry, keyed as in the dataset.
pub type Presentation = BTreeMap<String, AttrValue>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
/// One shape or a list of shapes under a descriptor key.
pub enum Shapes<T> {
    /// List form: `"paths": [{ .. }, { .. }]`.
    Many(Vec<T>),
    /// Single-object form: `"rects": { .. }`.
    One(T),
}

impl<T> Shapes<T> {
    /// Borrows the shapes as a slice regardless of the dataset form.
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::Many(shapes) => shapes,
            Self::One(shape) => std::slice::from_ref(shape),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// `<path>` primitive.
pub struct PathShape {
    /// Path data.
    pub d: String,
    /// Extra presentation attributes.
    #[serde(flatten)]
    pub attrs: Presentation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// `<polygon>` or `<polyline>` primitive.
pub struct PointsShape {
    /// Point list, e.g. `"20,20 60,20 60,60"`.
    pub points: String,
    /// Extra presentation attributes.
    #[serde(flatten)]
    pub attrs: Presentation,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
/// `<rect>` primitive.
pub struct RectShape {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Left edge.
    pub x: Option<AttrValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Top edge.
    pub y: Option<AttrValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Width.
    pub width: Option<AttrValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Height.
    pub height: Option<AttrValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Horizontal corner radius.
    pub rx: Option<AttrValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Vertical corner radius.
    pub ry: Option<AttrValue>,
    /// Extra presentation attributes.
    #[serde(flatten)]
    pub attrs: Presentation,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
/// Shape descriptor for one icon.
///
/// Unknown keys are dropped during deserialization, and a shape key holding a falsy JSON value
/// (`null`, `false`, `0`, `""`) is treated as absent.
pub struct SvgData {
    /// `<path>` shapes.
    #[serde(
        default,
        deserialize_with = "truthy_shapes",
        skip_serializing_if = "Option::is_none"
    )]
    pub paths: Option<Shapes<PathShape>>,
    /// `<polygon>` shapes.
    #[serde(
        default,
        deserialize_with = "truthy_shapes",
        skip_serializing_if = "Option::is_none"
    )]
    pub polygons: Option<Shapes<PointsShape>>,
    /// `<polyline>` shapes.
    #[serde(
        default,
        deserialize_with = "truthy_shapes",
        skip_serializing_if = "Option::is_none"
    )]
    pub polylines: Option<Shapes<PointsShape>>,
    /// `<rect>` shapes.
    #[serde(
        default,
        deserialize_with = "truthy_shapes",
        skip_serializing_if = "Option::is_none"
    )]
    pub rects: Option<Shapes<RectShape>>,
}

impl SvgData {
    /// Returns `true` when no recognized shape key is present.
    pub fn is_empty(&self) -> bool {
        self.paths.is_none()
            && self.polygons.is_none()
            && self.polylines.is_none()
            && self.rects.is_none()
    }
}

fn truthy_shapes<'de, D, T>(deserializer: D) -> Result<Option<Shapes<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if is_falsy(&value) {
        return Ok(None);
    }
    Shapes::deserialize(value).map(Some).map_err(D::Error::custom)
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
