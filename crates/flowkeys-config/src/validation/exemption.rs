use std::sync::LazyLock;

use regex::Regex;

use crate::schema::FlowkeysConfig;

static CLASS_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_-][A-Za-z0-9_-]*$").unwrap());

/// The marker must be a single, valid CSS class name.
pub(super) fn validate_exemption(errors: &mut Vec<String>, config: &FlowkeysConfig) {
    let marker = &config.exemption.marker_class;
    if !CLASS_NAME_RE.is_match(marker) {
        errors.push(format!(
            "exemption.marker_class must be a single class name, got '{marker}'"
        ));
    }
}
