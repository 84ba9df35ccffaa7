//! Bundled icon dataset and name lookup.
//!
//! The dataset is embedded at build time (see `build.rs`) and parsed once on first access.
//! Lookups scan the records linearly; duplicate names are reported when a lookup hits them
//! rather than when the dataset is loaded.

use std::sync::OnceLock;

use crate::error::IconError;
use crate::model::{IconRecord, SvgData};

include!(concat!(env!("OUT_DIR"), "/icon_dataset_generated.rs"));

/// Parses a JSON array of icon records.
///
/// # Errors
///
/// Returns [`IconError::InvalidDataset`] when the payload is not an array of records.
pub fn parse_icon_dataset(json: &str) -> Result<Vec<IconRecord>, IconError> {
    serde_json::from_str(json).map_err(|err| IconError::InvalidDataset {
        reason: err.to_string(),
    })
}

/// Returns the bundled icon records.
///
/// `build.rs` deserializes the dataset into the same record types, so this parse cannot fail
/// for a crate that compiled.
pub fn icons() -> &'static [IconRecord] {
    static DATASET: OnceLock<Vec<IconRecord>> = OnceLock::new();
    DATASET.get_or_init(|| {
        parse_icon_dataset(ICON_DATASET_JSON).expect("bundled icon dataset should parse")
    })
}

/// Iterates the bundled icon names in dataset order.
pub fn icon_names() -> impl Iterator<Item = &'static str> {
    icons().iter().map(|record| record.name.as_str())
}

/// Looks up `name` in the bundled dataset. See [`find_icon_in`].
///
/// # Errors
///
/// Returns [`IconError::DuplicateName`] when the bundled dataset repeats `name`.
pub fn find_icon(name: &str) -> Result<Option<&'static IconRecord>, IconError> {
    find_icon_in(name, icons())
}

/// Looks up `name` in `records` by exact match.
///
/// Returns `Ok(None)` when nothing matches.
///
/// # Errors
///
/// Returns [`IconError::DuplicateName`] when more than one record matches.
pub fn find_icon_in<'a>(
    name: &str,
    records: &'a [IconRecord],
) -> Result<Option<&'a IconRecord>, IconError> {
    let mut matches = records.iter().filter(|record| record.name == name);
    let Some(found) = matches.next() else {
        return Ok(None);
    };
    let extra = matches.count();
    if extra > 0 {
        return Err(IconError::DuplicateName {
            name: name.to_string(),
            matches: extra + 1,
        });
    }
    Ok(Some(found))
}

/// Returns the shape descriptor of the bundled icon named `name`, or `Ok(None)` if unknown.
///
/// # Errors
///
/// Returns [`IconError::DuplicateName`] when the bundled dataset repeats `name`.
pub fn get_svg_data(name: &str) -> Result<Option<&'static SvgData>, IconError> {
    get_svg_data_in(name, icons())
}

/// Returns the shape descriptor of the record named `name` in `records`.
///
/// # Errors
///
/// Returns [`IconError::DuplicateName`] when more than one record matches.
pub fn get_svg_data_in<'a>(
    name: &str,
    records: &'a [IconRecord],
) -> Result<Option<&'a SvgData>, IconError> {
    Ok(find_icon_in(name, records)?.map(|record| &record.svg_data))
}
