use std::path::Path;

use anyhow::Context;
use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::input::CourseRecord;
use crate::utils::{self, PathExt};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported data file `{path}`, expected a .yaml, .yml, .json or .toml file")]
pub struct UnsupportedFormat {
    path: String,
}

/// The formats a data file can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Yaml,
    Json,
    Toml,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Result<Self, UnsupportedFormat> {
        if path.has_extension("yaml") || path.has_extension("yml") {
            Ok(Self::Yaml)
        } else if path.has_extension("json") {
            Ok(Self::Json)
        } else if path.has_extension("toml") {
            Ok(Self::Toml)
        } else {
            Err(UnsupportedFormat {
                path: path.display().to_string(),
            })
        }
    }
}

/// Toml has no top-level arrays, so the courses live in `[[course]]` tables.
#[derive(Debug, Deserialize)]
struct TomlCourses {
    #[serde(default)]
    course: Vec<CourseRecord>,
}

pub fn courses_from_str(source: &str, format: SourceFormat) -> anyhow::Result<Vec<CourseRecord>> {
    Ok(match format {
        SourceFormat::Yaml => serde_yaml::from_str(source)?,
        SourceFormat::Json => serde_json::from_str(source)?,
        SourceFormat::Toml => toml::from_str::<TomlCourses>(source)?.course,
    })
}

/// Reads all courses from the data file in the order they are listed.
pub fn load_courses(path: impl AsRef<Path>) -> anyhow::Result<Vec<CourseRecord>> {
    let path = path.as_ref();
    let format = SourceFormat::from_path(path)?;
    debug!("reading {:?} courses from `{}`", format, path.display());

    let source = utils::read_to_string(path)
        .with_context(|| format!("failed to read `{}`", path.display()))?;

    let courses = courses_from_str(&source, format)
        .with_context(|| format!("failed to parse `{}`", path.display()))?;

    Ok(courses)
}
