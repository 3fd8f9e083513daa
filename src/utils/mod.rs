use std::ffi::OsStr;
use std::fs;
use std::io;
use std::io::{BufReader, Read};
use std::path::Path;

use log::trace;
use rust_embed::RustEmbed;
use serde::de::DeserializeOwned;

#[derive(RustEmbed)]
#[folder = "resources/"]
pub struct Resources;

fn read_all<R: Read>(reader: R) -> io::Result<String> {
    let mut reader = BufReader::new(reader);
    let mut data = String::with_capacity(64 * 1024);
    reader.read_to_string(&mut data)?;
    Ok(data)
}

pub fn toml_from_reader<R, T>(reader: R) -> anyhow::Result<T>
where
    R: Read,
    T: DeserializeOwned,
{
    Ok(toml::from_str(&read_all(reader)?)?)
}

pub fn read_to_string(path: impl AsRef<Path>) -> io::Result<String> {
    trace!("reading from: {}", path.as_ref().display());
    fs::read_to_string(path)
}

pub trait PathExt {
    #[must_use]
    fn has_extension<E>(&self, extension: E) -> bool
    where
        for<'a> &'a OsStr: PartialEq<E>;
}

impl PathExt for Path {
    fn has_extension<E>(&self, extension: E) -> bool
    where
        for<'a> &'a OsStr: PartialEq<E>,
    {
        self.extension().map_or(false, |ext| ext == extension)
    }
}

pub trait StrExt {
    /// Returns the first `max` characters, if the string is longer than that.
    fn truncated(&self, max: usize) -> Option<&str>;
}

impl StrExt for str {
    fn truncated(&self, max: usize) -> Option<&str> {
        self.char_indices().nth(max).map(|(index, _)| &self[..index])
    }
}
