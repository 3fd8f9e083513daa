//! Tests that generate a complete README from files on disk.

use std::fs;

use syllabi_readme::input::Config;
use syllabi_readme::render::DESCRIPTION_LENGTH;
use syllabi_readme::{generate_readme, Readme};

use pretty_assertions::assert_eq;

mod common;

#[test]
fn test_three_courses_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let source = common::write_file(dir.path(), "some-syllabi.yaml", common::THREE_COURSES);
    common::write_file(dir.path(), "BOILERPLATE.md", "# Syllabi\n");

    let config = Config::builder(&source).build().unwrap();
    let count = generate_readme(&config).unwrap();
    assert_eq!(count, 3);

    let readme = fs::read_to_string(dir.path().join("README.md")).unwrap();
    assert!(readme.starts_with(concat!(
        "# Syllabi\n",
        "\n",
        "There are currently <strong>3</strong> courses listed; ",
        "see [some-syllabi.yaml](some-syllabi.yaml) for more data fields.\n",
    )));
    assert!(readme.ends_with("</tbody></table>"));

    let a = readme.find("<h5>A » 2021 Fall <br>").unwrap();
    let b = readme.find("<h5>B » 2021 <br>").unwrap();
    let c = readme.find("<h5>C <br>").unwrap();
    assert!(a < b && b < c);
}

#[test]
fn test_links_in_document() {
    let courses = common::courses(concat!(
        "- title: Same\n",
        "  homepage: https://x.test\n",
        "  syllabus: https://x.test\n",
        "- title: Distinct\n",
        "  homepage: https://a\n",
        "  syllabus: https://b\n",
    ));

    let readme = Readme::assemble("", "some-syllabi.yaml", &courses).unwrap();

    assert!(readme
        .content()
        .contains("<a href=\"https://x.test\">Homepage/Syllabus</a>"));
    assert!(readme
        .content()
        .contains("<a href=\"https://a\">Homepage</a> / \n<a href=\"https://b\">Syllabus</a>"));
}

#[test]
fn test_description_budget() {
    let long = "y".repeat(DESCRIPTION_LENGTH + 1);
    let short = "z".repeat(DESCRIPTION_LENGTH);
    let courses = common::courses(&format!(
        "- title: Long\n  description: {}\n- title: Short\n  description: {}\n",
        long, short
    ));

    let readme = Readme::assemble("", "some-syllabi.yaml", &courses).unwrap();

    assert!(readme.content().contains(&format!(
        "<p><em>{}...</em></p>",
        "y".repeat(DESCRIPTION_LENGTH)
    )));
    assert!(readme
        .content()
        .contains(&format!("<p><em>{}</em></p>", short)));
}

#[test]
fn test_numeric_time_period_is_displayed() {
    let courses = common::courses("- title: Stats\n  time_period: 2019\n");

    let readme = Readme::assemble("", "some-syllabi.yaml", &courses).unwrap();

    assert!(readme.content().contains("<h5>Stats » 2019 <br>"));
}

#[test]
fn test_missing_links_are_omitted() {
    let courses = common::courses("- title: Nothing\n");

    let readme = Readme::assemble("", "some-syllabi.yaml", &courses).unwrap();

    assert!(!readme.content().contains("href"));
}

#[test]
fn test_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("data")).unwrap();
    common::write_file(
        &dir.path().join("data"),
        "courses.json",
        r#"[{"title": "Only", "time_period": "2022 Summer", "org": "MIT"}]"#,
    );
    let settings = common::write_file(
        dir.path(),
        "readme.toml",
        concat!(
            "[paths]\n",
            "source = \"data/courses.json\"\n",
            "output = \"docs.md\"\n",
        ),
    );

    let config = Config::try_from_settings_file(&settings)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(generate_readme(&config).unwrap(), 1);

    let readme = fs::read_to_string(dir.path().join("docs.md")).unwrap();
    // no BOILERPLATE.md next to the data, so the embedded one is used
    assert!(readme.starts_with("# Some syllabi"));
    assert!(readme.contains("see [courses.json](courses.json)"));
    assert!(readme.contains("<h5>Only » 2022 Summer <br>"));
    assert!(readme.contains("        MIT\n"));
}

#[test]
fn test_invalid_data_leaves_readme_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let source = common::write_file(
        dir.path(),
        "some-syllabi.yaml",
        "- time_period: 2021 Fall\n",
    );
    let output = common::write_file(dir.path(), "README.md", "previous README");

    let config = Config::builder(&source).build().unwrap();
    assert!(generate_readme(&config).is_err());

    assert_eq!(fs::read_to_string(output).unwrap(), "previous README");
}

#[test]
fn test_missing_boilerplate_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = common::write_file(dir.path(), "some-syllabi.yaml", common::THREE_COURSES);

    let mut builder = Config::builder(&source);
    builder.boilerplate(dir.path().join("missing.md"));
    let config = builder.build().unwrap();

    let error = generate_readme(&config).unwrap_err();
    assert!(format!("{:#}", error).contains("missing.md"));
    assert!(!dir.path().join("README.md").exists());
}
