//! Shape descriptors and the SVG markup builder.
//!
//! A descriptor names which SVG primitives compose an icon. Each recognized key accepts either a
//! single shape object or a list of them; anything else in the descriptor is ignored.

use quick_xml::escape::escape;

use crate::model::{PathShape, PointsShape, Presentation, RectShape, SvgData};

/// Builds one markup fragment per shape, in the order paths, polygons, polylines, rects.
///
/// Always returns at least one fragment: a descriptor with no recognized shapes yields `[""]`.
pub fn get_svg_content(data: &SvgData) -> Vec<String> {
    let mut content = Vec::new();

    if let Some(paths) = &data.paths {
        content.extend(paths.as_slice().iter().map(path_markup));
    }
    if let Some(polygons) = &data.polygons {
        content.extend(
            polygons
                .as_slice()
                .iter()
                .map(|shape| points_markup("polygon", shape)),
        );
    }
    if let Some(polylines) = &data.polylines {
        content.extend(
            polylines
                .as_slice()
                .iter()
                .map(|shape| points_markup("polyline", shape)),
        );
    }
    if let Some(rects) = &data.rects {
        content.extend(rects.as_slice().iter().map(rect_markup));
    }

    if content.is_empty() {
        content.push(String::new());
    }
    content
}

fn path_markup(shape: &PathShape) -> String {
    let mut out = String::from("<path");
    push_attr(&mut out, "d", &shape.d);
    push_presentation(&mut out, &shape.attrs);
    out.push_str("/>");
    out
}

fn points_markup(tag: &str, shape: &PointsShape) -> String {
    let mut out = format!("<{tag}");
    push_attr(&mut out, "points", &shape.points);
    push_presentation(&mut out, &shape.attrs);
    out.push_str("/>");
    out
}

fn rect_markup(shape: &RectShape) -> String {
    let mut out = String::from("<rect");
    let geometry = [
        ("x", &shape.x),
        ("y", &shape.y),
        ("width", &shape.width),
        ("height", &shape.height),
        ("rx", &shape.rx),
        ("ry", &shape.ry),
    ];
    for (name, value) in geometry {
        if let Some(value) = value {
            push_attr(&mut out, name, &value.to_string());
        }
    }
    push_presentation(&mut out, &shape.attrs);
    out.push_str("/>");
    out
}

fn push_presentation(out: &mut String, attrs: &Presentation) {
    for (key, value) in attrs {
        push_attr(out, &svg_attribute_name(key), &value.to_string());
    }
}

pub(crate) fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}

/// Maps a dataset key to its SVG attribute name (`strokeWidth` -> `stroke-width`).
///
/// Keys that are camelCase in SVG itself keep their spelling.
pub fn svg_attribute_name(key: &str) -> String {
    const CAMEL_CASE_ATTRIBUTES: &[&str] = &[
        "viewBox",
        "preserveAspectRatio",
        "pathLength",
        "gradientTransform",
        "gradientUnits",
        "patternUnits",
    ];
    if CAMEL_CASE_ATTRIBUTES.contains(&key) {
        return key.to_string();
    }

    let mut name = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            name.push('-');
            name.push(ch.to_ascii_lowercase());
        } else {
            name.push(ch);
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::model::Shapes;

    fn descriptor(value: serde_json::Value) -> SvgData {
        serde_json::from_value(value).expect("descriptor should parse")
    }

    #[test]
    fn empty_descriptor_yields_single_empty_fragment() {
        assert_eq!(get_svg_content(&SvgData::default()), vec![String::new()]);
    }

    #[test]
    fn unrecognized_keys_are_ignored() {
        let data = descriptor(json!({ "invalidProp": [{ "invalidAttribute": 43 }] }));
        assert!(data.is_empty());
        assert_eq!(get_svg_content(&data), vec![String::new()]);
    }

    #[test]
    fn null_and_empty_lists_produce_no_shapes() {
        let data = descriptor(json!({ "paths": null, "polygons": [] }));
        assert_eq!(get_svg_content(&data), vec![String::new()]);
    }

    #[test]
    fn polygons_render_points() {
        let data = descriptor(json!({ "polygons": [{ "points": "20,20 60,20 60,60 20,60" }] }));
        assert_eq!(
            get_svg_content(&data),
            vec![r#"<polygon points="20,20 60,20 60,60 20,60"/>"#.to_string()]
        );
    }

    #[test]
    fn polylines_render_points() {
        let data = descriptor(json!({ "polylines": [{ "points": "20,20 60,20 60,60 20,60" }] }));
        assert_eq!(
            get_svg_content(&data),
            vec![r#"<polyline points="20,20 60,20 60,60 20,60"/>"#.to_string()]
        );
    }

    #[test]
    fn single_rect_object_is_accepted() {
        let data = descriptor(json!({
            "rects": { "width": 100, "height": 100, "x": 10, "y": 10, "rx": 1, "ry": 1 }
        }));
        assert_eq!(
            get_svg_content(&data),
            vec![r#"<rect x="10" y="10" width="100" height="100" rx="1" ry="1"/>"#.to_string()]
        );
    }

    #[test]
    fn rect_omits_missing_geometry_and_keeps_fractions() {
        let data = descriptor(json!({ "rects": [{ "width": "50%", "height": 2.5 }] }));
        assert_eq!(
            get_svg_content(&data),
            vec![r#"<rect width="50%" height="2.5"/>"#.to_string()]
        );
    }

    #[test]
    fn shapes_follow_fixed_kind_order() {
        let data = descriptor(json!({
            "rects": [{ "width": 1, "height": 1 }],
            "polylines": [{ "points": "0,0 1,1" }],
            "paths": [{ "d": "M0 0h1" }, { "d": "M1 1h1" }],
            "polygons": [{ "points": "0,0 1,0 1,1" }]
        }));
        let tags: Vec<String> = get_svg_content(&data)
            .iter()
            .map(|fragment| fragment.split(' ').next().unwrap_or_default().to_string())
            .collect();
        assert_eq!(
            tags,
            vec!["<path", "<path", "<polygon", "<polyline", "<rect"]
        );
    }

    #[test]
    fn presentation_attributes_are_kebab_cased() {
        let data = descriptor(json!({
            "polylines": [{
                "points": "6,9 12,15 18,9",
                "strokeWidth": 2,
                "strokeLinecap": "round"
            }]
        }));
        assert_eq!(
            get_svg_content(&data),
            vec![
                r#"<polyline points="6,9 12,15 18,9" stroke-linecap="round" stroke-width="2"/>"#
                    .to_string()
            ]
        );
    }

    #[test]
    fn attribute_values_are_escaped() {
        let data = SvgData {
            paths: Some(Shapes::One(PathShape {
                d: r#"M0 0"/><script>"#.to_string(),
                attrs: Presentation::new(),
            })),
            ..SvgData::default()
        };
        let content = get_svg_content(&data);
        assert!(!content[0].contains("<script>"));
        assert!(content[0].contains("&quot;/&gt;&lt;script&gt;"));
    }

    #[test]
    fn svg_attribute_name_keeps_native_camel_case() {
        assert_eq!(svg_attribute_name("fillRule"), "fill-rule");
        assert_eq!(svg_attribute_name("fill"), "fill");
        assert_eq!(svg_attribute_name("viewBox"), "viewBox");
    }
}
