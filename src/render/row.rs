use formatx::formatx;

use crate::input::CourseRecord;
use crate::render::{Links, TemplateError};
use crate::utils::StrExt;

/// Longer descriptions are cut off after this many characters.
pub const DESCRIPTION_LENGTH: usize = 300;

const ROW_TEMPLATE: &str = concat!(
    "\n",
    "  <tr>\n",
    "    <td>\n",
    "        <h5>{course} <br>\n",
    "            {links}\n",
    "        </h5>\n",
    "        {description}\n",
    "        {teachers}\n",
    "    </td>\n",
    "    <td>\n",
    "        {organization}\n",
    "    </td>\n",
    "  </tr>",
);

#[must_use]
pub fn course_title(record: &CourseRecord) -> String {
    match record.time_period() {
        Some(time_period) => format!("{} » {}", record.title(), time_period),
        None => record.title().to_string(),
    }
}

#[must_use]
pub fn description(record: &CourseRecord) -> String {
    let Some(description) = record.description() else {
        return String::new();
    };

    match description.truncated(DESCRIPTION_LENGTH) {
        Some(truncated) => format!("<p><em>{}...</em></p>", truncated),
        None => format!("<p><em>{}</em></p>", description),
    }
}

#[must_use]
pub fn instructors(record: &CourseRecord) -> String {
    record
        .instructors()
        .map(|instructors| format!("<p>Instructors: {}</p>", instructors.join(", ")))
        .unwrap_or_default()
}

/// A course rendered as a row of the README table.
///
/// None of the values are escaped, the data file is trusted to contain
/// valid html.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    course: String,
    links: Links<'a>,
    description: String,
    teachers: String,
    organization: &'a str,
}

impl<'a> Row<'a> {
    #[must_use]
    pub fn new(record: &'a CourseRecord) -> Self {
        Self {
            course: course_title(record),
            links: Links::new(record),
            description: description(record),
            teachers: instructors(record),
            organization: record.org().unwrap_or_default(),
        }
    }

    pub fn render(&self) -> Result<String, TemplateError> {
        formatx!(
            ROW_TEMPLATE,
            course = self.course.as_str(),
            links = self.links.to_string(),
            description = self.description.as_str(),
            teachers = self.teachers.as_str(),
            organization = self.organization
        )
        .map_err(|error| TemplateError::new("row", error))
    }
}
