//! View renderer
//!
//! Page templates are parsed once at startup into an immutable registry
//! that handlers share by reference. A template that is missing or fails
//! to parse at startup is not fatal: pages that need it answer 500 with
//! the underlying error text.

use std::collections::HashMap;
use std::path::Path;

use handlebars::{handlebars_helper, Handlebars};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::error::PageError;

/// Template names used by the page handlers (`<name>.html` on disk)
pub const PAGE_TEMPLATES: [&str; 5] = ["index", "artists", "locations", "dates", "relations"];

/// Immutable set of parsed page templates
pub struct TemplateRegistry {
    handlebars: Handlebars<'static>,
    /// Templates that failed to load, with the reason
    failures: HashMap<String, String>,
}

impl TemplateRegistry {
    fn empty() -> Self {
        let mut handlebars = Handlebars::new();

        // "north_carolina-usa" -> "North Carolina, USA"
        handlebars_helper!(place: |name: str| pretty_place(name));
        handlebars.register_helper("place", Box::new(place));

        Self {
            handlebars,
            failures: HashMap::new(),
        }
    }

    /// Load every page template from `dir`
    pub fn load(dir: &Path) -> Self {
        let mut registry = Self::empty();

        for name in PAGE_TEMPLATES {
            let path = dir.join(format!("{}.html", name));
            if !path.is_file() {
                warn!("Template {} missing at {}", name, path.display());
                registry
                    .failures
                    .insert(name.to_string(), format!("open {}: no such file", path.display()));
                continue;
            }

            if let Err(e) = registry.handlebars.register_template_file(name, &path) {
                error!("Template {} failed to parse: {}", name, e);
                registry.failures.insert(name.to_string(), e.to_string());
            }
        }

        info!(
            "Loaded {}/{} page templates from {}",
            PAGE_TEMPLATES.len() - registry.failures.len(),
            PAGE_TEMPLATES.len(),
            dir.display()
        );
        registry
    }

    /// Build a registry from in-memory template sources
    pub fn from_sources<'a>(sources: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut registry = Self::empty();
        for (name, source) in sources {
            if let Err(e) = registry.handlebars.register_template_string(name, source) {
                registry.failures.insert(name.to_string(), e.to_string());
            }
        }
        registry
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }

    /// Render template `name` with `data`
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, PageError> {
        if let Some(reason) = self.failures.get(name) {
            return Err(PageError::Template(reason.clone()));
        }

        self.handlebars
            .render(name, data)
            .map_err(|e| PageError::Template(e.to_string()))
    }
}

/// Human-readable form of an API location slug
pub fn pretty_place(slug: &str) -> String {
    let parts: Vec<&str> = slug.split('-').collect();
    let last = parts.len() - 1;

    parts
        .iter()
        .enumerate()
        .map(|(i, part)| {
            let joined = part.split('_').map(capitalize).collect::<Vec<_>>().join(" ");
            // Short last segment is a country code: "usa", "uk"
            if i == last && i > 0 && part.len() <= 3 && !part.contains('_') {
                joined.to_uppercase()
            } else {
                joined
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
