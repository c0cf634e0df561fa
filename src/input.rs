//! Resource file inputs.

pub mod arb;

pub use arb::{
    METADATA_PREFIX,
    ParseError,
    parse_arb,
};
