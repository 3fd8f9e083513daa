use core::fmt;

use thiserror::Error;

mod links;
mod row;
mod table;

pub use links::*;
pub use row::*;
pub use table::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to fill in the {name} template: {reason}")]
pub struct TemplateError {
    name: &'static str,
    reason: String,
}

impl TemplateError {
    pub(crate) fn new(name: &'static str, reason: impl fmt::Debug) -> Self {
        Self {
            name,
            reason: format!("{:?}", reason),
        }
    }
}
