use std::fs;
use std::path::{Path, PathBuf};

use syllabi_readme::input::{courses_from_str, CourseRecord, SourceFormat};

/// The three courses used throughout the tests, listed oldest first.
#[allow(dead_code)]
pub const THREE_COURSES: &str = concat!(
    //
    "- title: C\n",
    "- title: B\n",
    "  time_period: 2021\n",
    "- title: A\n",
    "  time_period: 2021 Fall\n",
);

#[must_use]
#[allow(dead_code)]
pub fn courses(yaml: &str) -> Vec<CourseRecord> {
    courses_from_str(yaml, SourceFormat::Yaml).expect("yaml should be valid")
}

/// Writes `contents` to `name` in `dir` and returns the path.
#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("should be able to write to the temporary directory");
    path
}

#[allow(dead_code)]
pub fn debug_setup() {
    std::env::set_var("RUST_BACKTRACE", "1");
    std::env::set_var("RUST_APP_LOG", "trace");
    color_backtrace::install();
    let _ = pretty_env_logger::try_init_custom_env("RUST_APP_LOG");
}
