use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, trace};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::input::{CourseRecord, Output};
use crate::render::{self, Row, TemplateError};

#[derive(Debug, Error)]
#[error("failed to write the README to {destination}")]
pub struct WriteError {
    destination: String,
    #[source]
    source: io::Error,
}

impl WriteError {
    fn new(destination: impl Into<String>, source: io::Error) -> Self {
        Self {
            destination: destination.into(),
            source,
        }
    }
}

/// The finished README, held in memory until it is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readme {
    content: String,
    row_count: usize,
}

impl Readme {
    /// Builds the document from courses that are already sorted.
    pub fn assemble(
        boilerplate: &str,
        source_name: &str,
        courses: &[CourseRecord],
    ) -> Result<Self, TemplateError> {
        let rows = courses
            .iter()
            .map(|course| Row::new(course).render())
            .collect::<Result<Vec<_>, _>>()?;

        let row_count = rows.len();
        let header = render::table_header(row_count, source_name)?;
        debug!("rendered {} rows", row_count);

        let mut content = String::with_capacity(
            boilerplate.len() + header.len() + rows.iter().map(|row| row.len() + 1).sum::<usize>(),
        );
        content.push_str(boilerplate);
        content.push_str(&header);
        content.push_str(&rows.join("\n"));
        content.push_str(render::TABLE_FOOTER);

        Ok(Self { content, row_count })
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Writes the README in one go.
    ///
    /// Files are written to a temporary file next to the destination first and
    /// only moved into place once everything has been written, so a failure
    /// never leaves a partially written README behind.
    pub fn write_to(&self, output: &Output) -> Result<(), WriteError> {
        match output {
            Output::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout
                    .write_all(self.content.as_bytes())
                    .and_then(|()| stdout.flush())
                    .map_err(|error| WriteError::new("stdout", error))
            }
            Output::File(path) => {
                info!("writing README to `{}`", path.display());
                write_atomically(path, self.content.as_bytes())
                    .map_err(|error| WriteError::new(format!("`{}`", path.display()), error))
            }
        }
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn write_atomically(path: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = parent_dir(path);
    let mut file = NamedTempFile::new_in(&dir)?;
    trace!("writing to: {}", file.path().display());

    file.write_all(contents)?;
    file.flush()?;

    // temporary files are only readable by the owner
    let permissions = match fs::metadata(path) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(error) if error.kind() == io::ErrorKind::NotFound => default_permissions(),
        Err(error) => return Err(error),
    };

    if let Some(permissions) = permissions {
        file.as_file().set_permissions(permissions)?;
    }

    file.persist(path).map_err(|error| error.error)?;

    Ok(())
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;

    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_assemble_empty() {
        let readme = Readme::assemble("# Intro\n", "courses.yaml", &[]).unwrap();

        assert_eq!(readme.row_count(), 0);
        assert!(readme.content().starts_with("# Intro\n\nThere are currently <strong>0</strong>"));
        assert!(readme.content().ends_with("<tbody>\n</tbody></table>"));
    }

    #[test]
    fn test_rows_are_joined_by_newlines() {
        let courses = [CourseRecord::new("A"), CourseRecord::new("B")];
        let readme = Readme::assemble("", "courses.yaml", &courses).unwrap();

        let first = Row::new(&courses[0]).render().unwrap();
        let second = Row::new(&courses[1]).render().unwrap();

        assert_eq!(readme.row_count(), 2);
        assert!(readme
            .content()
            .ends_with(&format!("<tbody>\n{}\n{}</tbody></table>", first, second)));
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        let readme = Readme::assemble("# Intro\n", "courses.yaml", &[]).unwrap();

        readme.write_to(&Output::File(path.clone())).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), readme.content());
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("README.md");
        let readme = Readme::assemble("", "courses.yaml", &[]).unwrap();

        let error = readme.write_to(&Output::File(path.clone())).unwrap_err();

        assert!(error.to_string().starts_with("failed to write the README to"));
        assert!(!path.exists());
    }

    #[test]
    fn test_parent_dir() {
        assert_eq!(parent_dir(Path::new("README.md")), PathBuf::from("."));
        assert_eq!(parent_dir(Path::new("docs/README.md")), PathBuf::from("docs"));
    }
}
