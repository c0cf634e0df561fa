//! Locale tag detection from resource file names.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use thiserror::Error;
use unic_langid::LanguageIdentifier;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    /// The path has no file name to take a tag from.
    #[error("Path '{0}' has no file name")]
    MissingFileName(String),

    #[error("Invalid locale tag '{tag}': {reason}")]
    InvalidTag { tag: String, reason: String },
}

/// Primary language subtags accepted in a locale tag.
///
/// Every ISO 639-1 code, plus the ISO 639-2/3 codes that have CLDR locale data.
static KNOWN_LANGUAGES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // ISO 639-1
        "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az", "ba", "be",
        "bg", "bi", "bm", "bn", "bo", "br", "bs", "ca", "ce", "ch", "co", "cr", "cs", "cu",
        "cv", "cy", "da", "de", "dv", "dz", "ee", "el", "en", "eo", "es", "et", "eu", "fa",
        "ff", "fi", "fj", "fo", "fr", "fy", "ga", "gd", "gl", "gn", "gu", "gv", "ha", "he",
        "hi", "ho", "hr", "ht", "hu", "hy", "hz", "ia", "id", "ie", "ig", "ii", "ik", "io",
        "is", "it", "iu", "ja", "jv", "ka", "kg", "ki", "kj", "kk", "kl", "km", "kn", "ko",
        "kr", "ks", "ku", "kv", "kw", "ky", "la", "lb", "lg", "li", "ln", "lo", "lt", "lu",
        "lv", "mg", "mh", "mi", "mk", "ml", "mn", "mr", "ms", "mt", "my", "na", "nb", "nd",
        "ne", "ng", "nl", "nn", "no", "nr", "nv", "ny", "oc", "oj", "om", "or", "os", "pa",
        "pi", "pl", "ps", "pt", "qu", "rm", "rn", "ro", "ru", "rw", "sa", "sc", "sd", "se",
        "sg", "si", "sk", "sl", "sm", "sn", "so", "sq", "sr", "ss", "st", "su", "sv", "sw",
        "ta", "te", "tg", "th", "ti", "tk", "tl", "tn", "to", "tr", "ts", "tt", "tw", "ty",
        "ug", "uk", "ur", "uz", "ve", "vi", "vo", "wa", "wo", "xh", "yi", "yo", "za", "zh",
        "zu",
        // ISO 639-2/3 with CLDR data
        "agq", "ann", "arn", "asa", "ast", "bas", "bem", "bez", "bgc", "bho", "blo", "brx",
        "byn", "ccp", "ceb", "cgg", "chr", "ckb", "csw", "dav", "dje", "doi", "dsb", "dua",
        "dyo", "ebu", "ewo", "fil", "fur", "gaa", "gez", "gsw", "guz", "haw", "hsb", "ife",
        "jgo", "jmc", "kab", "kaj", "kam", "kcg", "kde", "kea", "ken", "kgp", "khq", "kkj",
        "kln", "kok", "kpe", "ksb", "ksf", "ksh", "lag", "lij", "lkt", "lmo", "lrc", "luo",
        "luy", "mai", "mas", "mdf", "mer", "mfe", "mgh", "mgo", "mni", "moh", "mua", "mus",
        "myv", "mzn", "naq", "nds", "nmg", "nnh", "nqo", "nso", "nus", "nyn", "osa", "pcm",
        "prg", "quc", "raj", "rof", "rwk", "sah", "saq", "sat", "sbp", "scn", "seh", "ses",
        "shi", "sma", "smj", "smn", "sms", "ssy", "syr", "szl", "teo", "tig", "tok", "trv",
        "trw", "twq", "tzm", "vai", "vec", "vmw", "vun", "wae", "wal", "xnr", "xog", "yav",
        "yrl", "yue", "zgh", "zza",
        // undetermined
        "und",
    ]
    .into_iter()
    .collect()
});

/// A validated locale tag such as `en`, `pt-BR` or `zh-Hant-TW`.
///
/// The tag keeps the spelling of the file it came from. It must parse as a Unicode language
/// identifier whose language subtag is a known language code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleTag(String);

impl LocaleTag {
    /// Validates `tag` against the language identifier grammar and the known languages.
    pub fn parse(tag: &str) -> Result<Self, LocaleError> {
        if tag.is_empty() {
            return Err(LocaleError::InvalidTag {
                tag: String::new(),
                reason: "the tag is empty".to_string(),
            });
        }

        let langid = LanguageIdentifier::from_bytes(tag.as_bytes()).map_err(|e| {
            LocaleError::InvalidTag { tag: tag.to_string(), reason: e.to_string() }
        })?;

        let language = langid.language.as_str();
        if !KNOWN_LANGUAGES.contains(language) {
            return Err(LocaleError::InvalidTag {
                tag: tag.to_string(),
                reason: format!("unknown language subtag '{language}'"),
            });
        }

        Ok(Self(tag.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Upper snake case form used for generated item names (`pt-BR` -> `PT_BR`).
    ///
    /// Language subtags always start with a letter and subtags are ASCII alphanumeric, so
    /// the result is always a valid Rust identifier.
    #[must_use]
    pub fn const_ident(&self) -> String {
        self.0
            .chars()
            .map(|c| if c == '-' || c == '_' { '_' } else { c.to_ascii_uppercase() })
            .collect()
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extracts the locale tag from a resource file path.
///
/// The directory and the last extension are stripped and the remaining file stem must be
/// a valid locale tag.
///
/// # Examples
/// - `fr.arb` → `fr`
/// - `l10n/pt-BR.arb` → `pt-BR`
/// - `not-a-locale.arb` → error
pub fn locale_from_path(path: &Path) -> Result<LocaleTag, LocaleError> {
    let stem = path
        .file_stem()
        .ok_or_else(|| LocaleError::MissingFileName(path.display().to_string()))?
        .to_string_lossy();

    LocaleTag::parse(&stem)
}
