mod html_generator;
mod utils;

pub mod input;
pub mod order;
pub mod render;

use log::info;

pub use crate::html_generator::{Readme, WriteError};
use crate::input::Config;

/// Loads, sorts and renders all courses and writes the README.
///
/// Returns the number of courses listed in the README.
pub fn generate_readme(config: &Config) -> anyhow::Result<usize> {
    let mut courses = input::load_courses(config.source())?;
    info!(
        "loaded {} courses from `{}`",
        courses.len(),
        config.source().display()
    );

    order::sort_courses(&mut courses);

    let boilerplate = config.read_boilerplate()?;
    let readme = Readme::assemble(&boilerplate, &config.source_name(), &courses)?;

    readme.write_to(config.output())?;
    info!("Done");

    Ok(readme.row_count())
}
