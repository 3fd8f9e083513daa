use std::cmp::Reverse;

use log::debug;

use crate::input::CourseRecord;

mod season;
mod sort_key;

pub use season::*;
pub use sort_key::*;

/// Sorts the courses from the most recent to the oldest one.
///
/// Courses with the same key keep the order they were listed in.
pub fn sort_courses(courses: &mut [CourseRecord]) {
    courses.sort_by_cached_key(|course| Reverse(SortKey::new(course)));

    if log::log_enabled!(log::Level::Debug) {
        for course in courses.iter() {
            debug!("sorted: {}", SortKey::new(course));
        }
    }
}
