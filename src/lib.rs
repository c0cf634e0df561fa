//! arb-i18n-codegen
//!
//! Build-time generator that turns ARB locale files into Rust translation tables.
//!
//! Each `<locale>.arb` file goes through the same pipeline: the locale tag is taken from
//! the file name, the file is parsed into key/value pairs, the pairs are sorted into a
//! [`model::TranslationModel`], rendered through a fixed template and finally checked and
//! formatted as Rust source before being written to `<locale>_i18n.rs`.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod generator;
pub mod input;
pub mod locale;
pub mod model;
pub mod module;
pub mod output;
pub mod render;
pub mod runner;

#[cfg(test)]
mod test_utils;

pub use error::{
    ErrorKind,
    GenerateError,
    RunError,
};
pub use generator::Generator;
pub use runner::{
    RunSummary,
    run,
};
