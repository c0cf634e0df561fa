//! Shared helpers for unit tests.
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::collections::HashMap;

use crate::locale::LocaleTag;
use crate::model::TranslationModel;
use crate::module::ModuleName;

/// The `fr` locale tag.
pub(crate) fn fr_locale() -> LocaleTag {
    LocaleTag::parse("fr").unwrap()
}

/// Builds a translation map from literal pairs.
pub(crate) fn translations(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries.iter().map(|(key, value)| ((*key).to_string(), (*value).to_string())).collect()
}

/// The `fr` model of the `app` crate with `hello` and `bye`.
pub(crate) fn sample_model() -> TranslationModel {
    TranslationModel::new(
        ModuleName::new_unchecked("app"),
        fr_locale(),
        translations(&[("hello", "Bonjour"), ("bye", "Au revoir")]),
    )
}
