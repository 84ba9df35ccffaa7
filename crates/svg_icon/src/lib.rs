//! Bundled SVG icon catalog with an accessible Leptos icon component.
//!
//! Icons are looked up by name in a JSON dataset embedded at build time. Their shape
//! descriptors (paths, polygons, polylines, rects) are turned into SVG markup, and the
//! [`Icon`] component wraps that markup in an `<svg role="img">` whose `aria-labelledby`
//! references a generated `<title>` id. The same output is available as a plain string through
//! [`render_icon`] for callers without a DOM.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod catalog;
mod component;
mod error;
mod model;
mod render;
mod shapes;

pub use catalog::{
    find_icon, find_icon_in, get_svg_data, get_svg_data_in, icon_names, icons, parse_icon_dataset,
};
pub use component::Icon;
pub use error::IconError;
pub use model::{
    AttrValue, IconRecord, PathShape, PointsShape, Presentation, RectShape, Shapes, SvgData,
    DEFAULT_VIEW_BOX,
};
pub use render::{next_title_id, render_icon, IconMarkup, IconSize};
pub use shapes::{get_svg_content, svg_attribute_name};

/// Convenience imports for crates embedding icons in their views.
pub mod prelude {
    pub use crate::{render_icon, Icon, IconError, IconMarkup, IconSize};
}
