use std::collections::BTreeSet;

use svg_icon::{
    find_icon, find_icon_in, get_svg_content, get_svg_data, icon_names, icons, parse_icon_dataset,
    render_icon, IconError, IconMarkup, IconSize,
};

#[test]
fn every_bundled_name_resolves_to_exactly_itself() {
    for name in icon_names() {
        let record = find_icon(name)
            .unwrap_or_else(|err| panic!("lookup of {name} failed: {err}"))
            .unwrap_or_else(|| panic!("{name} should resolve"));
        assert_eq!(record.name, name);
    }
}

#[test]
fn bundled_names_are_unique() {
    let unique: BTreeSet<&str> = icon_names().collect();
    assert_eq!(unique.len(), icons().len());
}

#[test]
fn every_bundled_icon_draws_something() {
    for name in icon_names() {
        let data = get_svg_data(name)
            .expect("lookup")
            .expect("bundled icon has data");
        let content = get_svg_content(data);
        assert!(
            content.iter().all(|fragment| !fragment.is_empty()),
            "{name} produced an empty fragment"
        );
    }
}

#[test]
fn every_bundled_icon_renders_with_linked_title() {
    for name in icon_names() {
        let markup = IconMarkup::build(name, format!("{name} icon")).expect("render");
        let svg = markup.to_svg_string(IconSize::Large, Some("toolbar-icon"));
        assert!(svg.contains(&format!("aria-labelledby=\"{}\"", markup.labelled_by())));
        assert!(svg.contains(&format!("<title id=\"{}\">", markup.title_id())));
        assert!(svg.starts_with("<svg class=\"svg-icon toolbar-icon\""));
    }
}

#[test]
fn search_icon_renders_path_markup() {
    let svg = render_icon("search", "close the thing", IconSize::Small).expect("search renders");
    assert!(svg.contains("<path d=\"M10.5 3"));
    assert!(svg.contains(">close the thing</title>"));
}

#[test]
fn caller_dataset_with_duplicates_fails_lookup() {
    let records = parse_icon_dataset(
        r#"[
            { "name": "bob", "svgData": { "rects": { "width": 1, "height": 1 } } },
            { "name": "bob" },
            { "name": "alice" }
        ]"#,
    )
    .expect("dataset parses");

    assert!(matches!(
        find_icon_in("bob", &records),
        Err(IconError::DuplicateName { matches: 2, .. })
    ));
    assert!(matches!(find_icon_in("alice", &records), Ok(Some(_))));
    assert!(matches!(find_icon_in("carol", &records), Ok(None)));
}
