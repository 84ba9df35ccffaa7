use leptos::*;

use crate::render::{root_class, IconMarkup, IconSize};

#[component]
/// Renders a bundled icon as an inline, labelled `<svg>`.
///
/// The description becomes the `<title>` text, and the root's `aria-labelledby` points at the
/// title's id. Unknown or ambiguous names log a warning and render an empty icon that keeps its
/// accessible title.
pub fn Icon(
    /// Dataset name of the icon.
    #[prop(into)]
    name: String,
    /// Accessible description announced for the icon.
    #[prop(into)]
    description: String,
    /// Rendered size.
    #[prop(optional)]
    size: IconSize,
    /// Extra classes appended to the root class.
    #[prop(optional, into)]
    class: Option<String>,
    /// Title id to use instead of a generated one. Set it when the view is hydrated so server
    /// and client markup agree.
    #[prop(optional, into)]
    id: Option<String>,
) -> impl IntoView {
    let mut markup = IconMarkup::build(&name, description.as_str()).unwrap_or_else(|err| {
        logging::warn!("icon render failed: {err}");
        IconMarkup::placeholder(&name, description.as_str())
    });
    if let Some(id) = id {
        markup = markup.with_title_id(id);
    }
    let size_px = size.px().to_string();
    let labelled_by = markup.labelled_by().to_string();

    view! {
        <svg
            class=root_class(class.as_deref())
            data-icon=markup.name().to_string()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox=markup.view_box().to_string()
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            role="img"
            focusable="false"
            aria-labelledby=labelled_by
            inner_html=markup.inner_html()
        />
    }
}
