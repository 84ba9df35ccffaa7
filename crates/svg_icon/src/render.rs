//! Render model shared by the Leptos component and the string renderer.
//!
//! Each [`IconMarkup`] owns a freshly generated title id, so the `<title id>` and the root's
//! `aria-labelledby` are always taken from the same value.

use std::sync::atomic::{AtomicUsize, Ordering};

use quick_xml::escape::escape;

use crate::catalog::find_icon;
use crate::error::IconError;
use crate::model::{IconRecord, DEFAULT_VIEW_BOX};
use crate::shapes::{get_svg_content, push_attr};

static NEXT_ICON_TITLE_ID: AtomicUsize = AtomicUsize::new(1);

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Rendered icon dimensions.
pub enum IconSize {
    /// 16px, inline with body text.
    Small,
    /// 24px, the dataset's native grid.
    #[default]
    Medium,
    /// 32px.
    Large,
    /// Arbitrary square size in pixels.
    Px(u16),
}

impl IconSize {
    /// Pixel size for both width and height.
    pub const fn px(self) -> u16 {
        match self {
            Self::Small => 16,
            Self::Medium => 24,
            Self::Large => 32,
            Self::Px(px) => px,
        }
    }

    /// Token written to `data-size` for CSS hooks.
    pub fn token(self) -> String {
        match self {
            Self::Small => "sm".to_string(),
            Self::Medium => "md".to_string(),
            Self::Large => "lg".to_string(),
            Self::Px(px) => format!("{px}px"),
        }
    }
}

/// Allocates a document-unique title id for one render of `name`.
///
/// Ids come from a per-process counter, so a server render and a hydrating client render number
/// them independently. Hydrated views should pass an explicit id through
/// [`IconMarkup::with_title_id`] (the component's `id` prop).
pub fn next_title_id(name: &str) -> String {
    let slug: String = name
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
                ch.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    let serial = NEXT_ICON_TITLE_ID.fetch_add(1, Ordering::Relaxed);
    if slug.is_empty() {
        format!("icon-title-{serial}")
    } else {
        format!("icon-{slug}-title-{serial}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Everything needed to draw one accessible icon instance.
pub struct IconMarkup {
    name: String,
    description: String,
    title_id: String,
    view_box: String,
    body: String,
}

impl IconMarkup {
    /// Looks up `name` in the bundled dataset and prepares its markup.
    ///
    /// # Errors
    ///
    /// Returns [`IconError::UnknownIcon`] when the name is missing and
    /// [`IconError::DuplicateName`] when it is ambiguous.
    pub fn build(name: &str, description: impl Into<String>) -> Result<Self, IconError> {
        match find_icon(name)? {
            Some(record) => Ok(Self::from_record(record, description)),
            None => Err(IconError::UnknownIcon {
                name: name.to_string(),
            }),
        }
    }

    /// Prepares markup for an already resolved record.
    pub fn from_record(record: &IconRecord, description: impl Into<String>) -> Self {
        Self {
            name: record.name.clone(),
            description: description.into(),
            title_id: next_title_id(&record.name),
            view_box: record.view_box.clone(),
            body: get_svg_content(&record.svg_data).concat(),
        }
    }

    /// Empty icon that still carries the accessible title.
    pub fn placeholder(name: &str, description: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            description: description.into(),
            title_id: next_title_id(name),
            view_box: DEFAULT_VIEW_BOX.to_string(),
            body: String::new(),
        }
    }

    /// Replaces the generated title id with a caller-chosen one.
    ///
    /// Blank ids are ignored so the root always stays labelled.
    pub fn with_title_id(mut self, title_id: impl Into<String>) -> Self {
        let title_id = title_id.into();
        if !title_id.trim().is_empty() {
            self.title_id = title_id;
        }
        self
    }

    /// Icon name this markup was built for.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Caller-supplied description, unmodified.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Id of the `<title>` element.
    pub fn title_id(&self) -> &str {
        &self.title_id
    }

    /// Value of the root's `aria-labelledby`; always the title id.
    pub fn labelled_by(&self) -> &str {
        &self.title_id
    }

    /// Coordinate space of the shapes.
    pub fn view_box(&self) -> &str {
        &self.view_box
    }

    /// Concatenated shape fragments.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Children of the `<svg>` root: the `<title>` followed by the shapes.
    pub fn inner_html(&self) -> String {
        let mut out = String::from("<title");
        push_attr(&mut out, "id", &self.title_id);
        out.push('>');
        out.push_str(&escape(self.description.as_str()));
        out.push_str("</title>");
        out.push_str(&self.body);
        out
    }

    /// Serializes a complete standalone `<svg>` element.
    pub fn to_svg_string(&self, size: IconSize, class: Option<&str>) -> String {
        let px = size.px().to_string();
        let mut out = String::from("<svg");
        push_attr(&mut out, "class", &root_class(class));
        push_attr(&mut out, "data-icon", &self.name);
        push_attr(&mut out, "data-size", &size.token());
        push_attr(&mut out, "xmlns", SVG_NAMESPACE);
        push_attr(&mut out, "viewBox", &self.view_box);
        push_attr(&mut out, "width", &px);
        push_attr(&mut out, "height", &px);
        push_attr(&mut out, "fill", "currentColor");
        push_attr(&mut out, "role", "img");
        push_attr(&mut out, "focusable", "false");
        push_attr(&mut out, "aria-labelledby", self.labelled_by());
        out.push('>');
        out.push_str(&self.inner_html());
        out.push_str("</svg>");
        out
    }
}

pub(crate) fn root_class(extra: Option<&str>) -> String {
    match extra.map(str::trim).filter(|class| !class.is_empty()) {
        Some(class) => format!("svg-icon {class}"),
        None => "svg-icon".to_string(),
    }
}

/// Renders the bundled icon `name` to a standalone SVG string.
///
/// # Errors
///
/// See [`IconMarkup::build`].
pub fn render_icon(name: &str, description: &str, size: IconSize) -> Result<String, IconError> {
    Ok(IconMarkup::build(name, description)?.to_svg_string(size, None))
}
