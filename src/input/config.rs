use std::borrow::Cow;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::debug;

use crate::input::Settings;
use crate::utils::{self, Resources};

pub const DEFAULT_SOURCE: &str = "some-syllabi.yaml";
pub const DEFAULT_BOILERPLATE: &str = "BOILERPLATE.md";
pub const DEFAULT_OUTPUT: &str = "README.md";

/// Where the text in front of the course table comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Boilerplate {
    File(PathBuf),
    /// The boilerplate that is compiled into the binary.
    Embedded,
}

/// Where the generated document is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    File(PathBuf),
    Stdout,
}

impl Output {
    /// `-` means stdout, everything else is a path.
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if path.as_os_str() == "-" {
            Self::Stdout
        } else {
            Self::File(path)
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    source: PathBuf,
    boilerplate: Boilerplate,
    output: Output,
}

#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    workspace: Option<PathBuf>,
    source: PathBuf,
    boilerplate: Option<PathBuf>,
    output: Option<Output>,
}

impl ConfigBuilder {
    fn new(source: PathBuf) -> Self {
        Self {
            workspace: None,
            source,
            boilerplate: None,
            output: None,
        }
    }

    pub fn source(&mut self, source: impl Into<PathBuf>) -> &mut Self {
        self.source = source.into();
        self
    }

    pub fn boilerplate(&mut self, boilerplate: impl Into<PathBuf>) -> &mut Self {
        self.boilerplate = Some(boilerplate.into());
        self
    }

    pub fn output(&mut self, output: impl Into<PathBuf>) -> &mut Self {
        self.output = Some(Output::from_path(output));
        self
    }

    /// The directory the default boilerplate and output are placed in.
    ///
    /// Defaults to the directory of the data file.
    pub fn workspace(&mut self, workspace: impl Into<PathBuf>) -> &mut Self {
        self.workspace = Some(workspace.into());
        self
    }

    pub fn build(self) -> anyhow::Result<Config> {
        let workspace = match self.workspace {
            Some(workspace) => workspace,
            None => dunce::canonicalize(&self.source)
                .with_context(|| format!("failed to find `{}`", self.source.display()))?
                .parent()
                .ok_or_else(|| anyhow::anyhow!("the data file should have a parent directory"))?
                .to_path_buf(),
        };
        debug!("workspace: {}", workspace.display());

        let boilerplate = match self.boilerplate {
            Some(path) => Boilerplate::File(path),
            None => {
                let path = workspace.join(DEFAULT_BOILERPLATE);
                if path.is_file() {
                    Boilerplate::File(path)
                } else {
                    debug!("`{}` does not exist, using the embedded boilerplate", path.display());
                    Boilerplate::Embedded
                }
            }
        };

        let output = self
            .output
            .unwrap_or_else(|| Output::File(workspace.join(DEFAULT_OUTPUT)));

        Ok(Config {
            source: self.source,
            boilerplate,
            output,
        })
    }
}

impl Config {
    #[must_use]
    pub fn builder(source: impl Into<PathBuf>) -> ConfigBuilder {
        ConfigBuilder::new(source.into())
    }

    /// Starts from the paths in the settings file, missing ones get the defaults.
    pub fn try_from_settings_file(path: impl AsRef<Path>) -> anyhow::Result<ConfigBuilder> {
        let settings = Settings::from_file(path)?;

        Ok(Self::from_settings(&settings))
    }

    #[must_use]
    pub fn from_settings(settings: &Settings) -> ConfigBuilder {
        let mut builder = Self::builder(settings.source().unwrap_or(Path::new(DEFAULT_SOURCE)));

        if let Some(boilerplate) = settings.boilerplate() {
            builder.boilerplate(boilerplate);
        }

        if let Some(output) = settings.output() {
            builder.output(output);
        }

        builder
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The file name of the data file, which the README links to.
    pub fn source_name(&self) -> Cow<'_, str> {
        self.source
            .file_name()
            .map_or_else(|| self.source.to_string_lossy(), |name| name.to_string_lossy())
    }

    pub fn boilerplate(&self) -> &Boilerplate {
        &self.boilerplate
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    pub fn read_boilerplate(&self) -> anyhow::Result<String> {
        match &self.boilerplate {
            Boilerplate::File(path) => utils::read_to_string(path)
                .with_context(|| format!("failed to read `{}`", path.display())),
            Boilerplate::Embedded => {
                let file = Resources::get(DEFAULT_BOILERPLATE)
                    .ok_or_else(|| anyhow::anyhow!("missing embedded `{}`", DEFAULT_BOILERPLATE))?;

                Ok(String::from_utf8(file.data.into_owned())?)
            }
        }
    }
}
