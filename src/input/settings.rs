use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::utils;

/// Paths that can be configured in the settings file.
///
/// Relative paths are relative to the settings file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Paths {
    source: Option<PathBuf>,
    boilerplate: Option<PathBuf>,
    output: Option<PathBuf>,
}

/// The optional toml settings file.
///
/// ```toml
/// [paths]
/// source = "some-syllabi.yaml"
/// boilerplate = "BOILERPLATE.md"
/// output = "README.md"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Settings {
    #[serde(default)]
    paths: Paths,
}

impl Settings {
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let mut settings: Self = utils::toml_from_reader(
            File::open(path).with_context(|| format!("failed to open `{}`", path.display()))?,
        )
        .with_context(|| format!("failed to parse `{}`", path.display()))?;

        if let Some(base) = path.parent() {
            settings.resolve_relative_to(base);
        }

        Ok(settings)
    }

    fn resolve_relative_to(&mut self, base: &Path) {
        for path in [
            &mut self.paths.source,
            &mut self.paths.boilerplate,
            &mut self.paths.output,
        ]
        .into_iter()
        .flatten()
        {
            // `-` stands for stdout and is not a path
            if path.is_relative() && path.as_os_str() != "-" {
                *path = base.join(&*path);
            }
        }
    }

    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.paths.source.as_deref()
    }

    #[must_use]
    pub fn boilerplate(&self) -> Option<&Path> {
        self.paths.boilerplate.as_deref()
    }

    #[must_use]
    pub fn output(&self) -> Option<&Path> {
        self.paths.output.as_deref()
    }
}
