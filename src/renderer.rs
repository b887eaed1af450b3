//! Text substitution for project templates.
//! Placeholders use MiniJinja's `{{ name }}` syntax and are replaced verbatim.
use crate::error::{Error, Result};
use indexmap::IndexMap;
use minijinja::{Environment, UndefinedBehavior};

/// Variable name to value mapping supplied at render time.
pub type Variables = IndexMap<String, String>;

const TEMPLATE_NAME: &str = "template";

/// A compiled template, ready to be rendered any number of times.
pub struct Template {
    env: Environment<'static>,
}

impl Template {
    /// Compiles template source text.
    ///
    /// # Errors
    /// * `Error::TemplateSyntaxError` if a placeholder is malformed
    pub fn compile<S: Into<String>>(source: S) -> Result<Self> {
        let mut env = Environment::new();
        // A placeholder missing from the variables is an error, never an empty string.
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.add_template_owned(TEMPLATE_NAME, source.into())
            .map_err(Error::TemplateSyntaxError)?;
        Ok(Self { env })
    }

    /// Renders the template with the given variables.
    ///
    /// # Errors
    /// * `Error::TemplateRenderError` if a placeholder has no matching variable
    pub fn render(&self, variables: &Variables) -> Result<String> {
        let tmpl = self.env.get_template(TEMPLATE_NAME).map_err(Error::TemplateRenderError)?;
        tmpl.render(variables).map_err(Error::TemplateRenderError)
    }
}

/// Compiles and renders `source` in one go.
pub fn render_str(source: &str, variables: &Variables) -> Result<String> {
    Template::compile(source)?.render(variables)
}
