use core::fmt;

use crate::input::CourseRecord;

/// The links shown below the course title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Links<'a> {
    /// The homepage doubles as the syllabus.
    Combined(&'a str),
    Separate {
        homepage: Option<&'a str>,
        syllabus: Option<&'a str>,
    },
}

impl<'a> Links<'a> {
    #[must_use]
    pub fn new(record: &'a CourseRecord) -> Self {
        match (record.homepage(), record.syllabus()) {
            (Some(homepage), Some(syllabus)) if homepage == syllabus => Self::Combined(homepage),
            (homepage, syllabus) => Self::Separate { homepage, syllabus },
        }
    }
}

impl fmt::Display for Links<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Combined(url) => write!(f, "<a href=\"{}\">Homepage/Syllabus</a>", url),
            Self::Separate { homepage, syllabus } => {
                let links = [("Homepage", *homepage), ("Syllabus", *syllabus)]
                    .into_iter()
                    .filter_map(|(label, url)| url.map(|url| (label, url)));

                for (number, (label, url)) in links.enumerate() {
                    if number > 0 {
                        f.write_str(" / ")?;
                    }

                    write!(f, "\n<a href=\"{}\">{}</a>", url, label)?;
                }

                Ok(())
            }
        }
    }
}
