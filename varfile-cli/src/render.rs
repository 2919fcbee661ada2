//! Template rendering.
//!
//! The template language is Handlebars; this module only hands it the
//! resolved variables. Output is not HTML-escaped and unknown variables
//! render as empty text.

use anyhow::{Context, Result};
use handlebars::Handlebars;
use varfile_decoder::VariableSet;

pub fn render(name: &str, template: &str, vars: &VariableSet) -> Result<String> {
    let mut engine = Handlebars::new();
    engine.register_escape_fn(handlebars::no_escape);
    engine
        .register_template_string(name, template)
        .context("failed to parse template")?;
    engine
        .render(name, vars)
        .context("failed to execute template")
}
