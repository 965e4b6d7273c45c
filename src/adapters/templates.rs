//! Embedded Markdown templates rendered with minijinja.

use include_dir::{Dir, DirEntry, include_dir};
use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use crate::domain::AppError;
use crate::domain::labels;

static TEMPLATE_DIR: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

pub const BUSINESS_WHITEPAPER: &str = "business_whitepaper.md.j2";
pub const TECHNICAL_WHITEPAPER: &str = "technical_whitepaper.md.j2";
pub const API_REFERENCE: &str = "api_reference.md.j2";
pub const DEPLOYMENT_GUIDE: &str = "deployment_guide.md.j2";

/// Template environment over the embedded `.j2` files.
///
/// Templates are addressed by their path relative to the template root,
/// e.g. `partials/api_groups.md.j2`.
pub struct MarkdownTemplates {
    env: Environment<'static>,
}

impl MarkdownTemplates {
    pub fn embedded() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        env.add_filter("title_key", |key: &str| -> String { labels::title_key(key) });

        register_dir(&mut env, &TEMPLATE_DIR)?;
        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, AppError> {
        let template = self.env.get_template(name).map_err(|e| AppError::Template {
            name: name.to_string(),
            details: format!("failed to load: {}", e),
        })?;

        template.render(ctx).map_err(|e| AppError::Template {
            name: name.to_string(),
            details: format!("failed to render: {}", e),
        })
    }

    /// Names of every registered template, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.env.templates().map(|(name, _)| name).collect();
        names.sort_unstable();
        names
    }
}

fn register_dir(env: &mut Environment<'static>, dir: &'static Dir<'static>) -> Result<(), AppError> {
    for entry in dir.entries() {
        match entry {
            DirEntry::Dir(sub) => register_dir(env, sub)?,
            DirEntry::File(file) => {
                let path = file.path();
                if path.extension().is_none_or(|ext| ext != "j2") {
                    continue;
                }
                let name = path.to_str().ok_or_else(|| AppError::Template {
                    name: path.to_string_lossy().into_owned(),
                    details: "template path is not UTF-8".to_string(),
                })?;
                let source = file.contents_utf8().ok_or_else(|| AppError::Template {
                    name: name.to_string(),
                    details: "template is not UTF-8".to_string(),
                })?;
                env.add_template(name, source).map_err(|e| AppError::Template {
                    name: name.to_string(),
                    details: format!("failed to register: {}", e),
                })?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use minijinja::context;

    #[test]
    fn all_templates_are_registered() {
        let templates = MarkdownTemplates::embedded().expect("templates");
        let names = templates.names();
        for name in [BUSINESS_WHITEPAPER, TECHNICAL_WHITEPAPER, API_REFERENCE, DEPLOYMENT_GUIDE] {
            assert!(names.contains(&name), "missing {name}");
        }
        assert!(names.contains(&"partials/api_groups.md.j2"));
    }

    #[test]
    fn missing_template_is_a_template_error() {
        let templates = MarkdownTemplates::embedded().expect("templates");
        let err = templates.render("absent.md.j2", context! {}).expect_err("must fail");
        assert!(matches!(err, AppError::Template { ref name, .. } if name == "absent.md.j2"));
    }

    #[test]
    fn missing_variable_is_rejected() {
        let templates = MarkdownTemplates::embedded().expect("templates");
        let err = templates.render(API_REFERENCE, context! {}).expect_err("strict undefined");
        assert!(matches!(err, AppError::Template { .. }));
    }
}
