//! Normalized translation data for one locale.

use std::collections::HashMap;

use serde::Serialize;

use crate::locale::LocaleTag;
use crate::module::ModuleName;

/// One translatable string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourcePair {
    pub key: String,
    pub value: String,
}

impl ResourcePair {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into() }
    }
}

/// Everything needed to generate the source file of one locale.
///
/// Pairs are sorted by key in byte order, so the generated output does not depend on the
/// key order of the resource file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationModel {
    /// Crate the generated file belongs to.
    module_name: ModuleName,
    /// Locale of the resource file.
    locale: LocaleTag,
    /// Translations sorted by key.
    pairs: Vec<ResourcePair>,
}

impl TranslationModel {
    #[must_use]
    pub fn new(
        module_name: ModuleName,
        locale: LocaleTag,
        translations: HashMap<String, String>,
    ) -> Self {
        let mut pairs: Vec<ResourcePair> = translations
            .into_iter()
            .map(|(key, value)| ResourcePair { key, value })
            .collect();
        // Keys are unique, so an unstable sort is still deterministic.
        pairs.sort_unstable_by(|a, b| a.key.cmp(&b.key));

        Self { module_name, locale, pairs }
    }

    #[must_use]
    pub const fn module_name(&self) -> &ModuleName {
        &self.module_name
    }

    #[must_use]
    pub const fn locale(&self) -> &LocaleTag {
        &self.locale
    }

    #[must_use]
    pub fn pairs(&self) -> &[ResourcePair] {
        &self.pairs
    }
}
