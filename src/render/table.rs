use formatx::formatx;

use crate::render::TemplateError;

const TABLE_HEADER: &str = concat!(
    "\n",
    "There are currently <strong>{rowcount}</strong> courses listed; ",
    "see [{source}]({link}) for more data fields.\n",
    "\n",
    "<table>\n",
    "<thead>\n",
    "    <tr>\n",
    "        <th>Course</th>\n",
    "        <th>Organization</th>\n",
    "    </tr>\n",
    "</thead>\n",
    "<tbody>\n",
);

/// Closes the table opened by [`table_header`].
pub const TABLE_FOOTER: &str = "</tbody></table>";

/// Opens the course table and states how many courses are listed.
///
/// `source` is the name of the data file, the header links to it.
pub fn table_header(row_count: usize, source: &str) -> Result<String, TemplateError> {
    formatx!(
        TABLE_HEADER,
        rowcount = row_count,
        source = source,
        link = source
    )
    .map_err(|error| TemplateError::new("table header", error))
}
