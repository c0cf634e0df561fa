//! Template expansion of a [`TranslationModel`] into Rust source text.

use std::collections::HashMap;
use std::error::Error as _;

use serde::Serialize;
use tera::{
    Context,
    Tera,
    Value,
};
use thiserror::Error;

use crate::model::{
    ResourcePair,
    TranslationModel,
};

/// Version of the fields [`TemplateContext`] hands to the template.
///
/// The bundled template declares the version it was written against in a
/// `{# schema-version: N #}` comment; [`Renderer::new`] refuses a template that does not
/// match.
pub const TEMPLATE_SCHEMA_VERSION: u32 = 1;

/// Name the bundled template is registered under.
const TEMPLATE_NAME: &str = "translations.rs";
/// Bundled template source.
const TEMPLATE: &str = include_str!("templates/translations.rs.tera");

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Template declares schema version {found:?}, expected {}", TEMPLATE_SCHEMA_VERSION)]
    SchemaMismatch { found: Option<u32> },

    #[error("Template expansion failed: {0}")]
    Expansion(String),
}

impl From<tera::Error> for RenderError {
    fn from(err: tera::Error) -> Self {
        // Tera puts the useful part (missing variable, bad filter input) in the source chain.
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Self::Expansion(message)
    }
}

/// Fields available to the template, schema version 1.
#[derive(Debug, Serialize)]
struct TemplateContext<'a> {
    /// Crate the file is generated for.
    module: &'a str,
    /// Locale tag as written in the file name.
    locale: &'a str,
    /// Upper snake case item name derived from the locale tag.
    ident: String,
    /// Translations in key order.
    pairs: &'a [ResourcePair],
}

impl<'a> From<&'a TranslationModel> for TemplateContext<'a> {
    fn from(model: &'a TranslationModel) -> Self {
        Self {
            module: model.module_name().as_str(),
            locale: model.locale().as_str(),
            ident: model.locale().const_ident(),
            pairs: model.pairs(),
        }
    }
}

/// Expands translation models through the bundled template.
#[derive(Debug)]
pub struct Renderer {
    /// Template engine holding the compiled template.
    tera: Tera,
}

impl Renderer {
    /// Builds a renderer around the bundled template.
    pub fn new() -> Result<Self, RenderError> {
        Self::with_template(TEMPLATE)
    }

    /// Builds a renderer around `template`, which must declare the current schema version.
    pub(crate) fn with_template(template: &str) -> Result<Self, RenderError> {
        let found = declared_schema_version(template);
        if found != Some(TEMPLATE_SCHEMA_VERSION) {
            return Err(RenderError::SchemaMismatch { found });
        }

        let mut tera = Tera::default();
        tera.register_filter("rust_str", rust_str);
        tera.add_raw_template(TEMPLATE_NAME, template)?;

        Ok(Self { tera })
    }

    /// Renders `model` into Rust source text.
    ///
    /// The text is not formatted and not yet checked for syntax.
    pub fn render(&self, model: &TranslationModel) -> Result<String, RenderError> {
        let context = Context::from_serialize(TemplateContext::from(model))?;
        Ok(self.tera.render(TEMPLATE_NAME, &context)?)
    }
}

fn declared_schema_version(template: &str) -> Option<u32> {
    let rest = template.trim_start().strip_prefix("{#")?;
    let (comment, _) = rest.split_once("#}")?;
    comment.trim().strip_prefix("schema-version:")?.trim().parse().ok()
}

/// Tera filter printing a string as a Rust string literal.
fn rust_str(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = tera::try_get_value!("rust_str", "value", String, value);
    Ok(Value::String(proc_macro2::Literal::string(&text).to_string()))
}
