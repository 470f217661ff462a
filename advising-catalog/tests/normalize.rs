use advising_catalog::normalize::{GRADUATE_RANGE, MIN_CODE_LEN};
use advising_catalog::{
    DEFAULT_HOURS, Level, NormalizeOptions, PLACEHOLDER_TITLE, RowLayout, normalize_row,
    parse_hours,
};

fn undergrad() -> NormalizeOptions {
    NormalizeOptions::default()
}

fn catalog() -> NormalizeOptions {
    NormalizeOptions::default()
        .with_layout(RowLayout::DescriptionColumn)
        .with_subjects(["ENGL", "CRWT", "WRIT"])
}

#[test]
fn american_novel_example_row() {
    let row = ["ENGL30553", "", "19th Century American Novel", "3"];
    let c = normalize_row(&row, &undergrad()).unwrap();
    assert_eq!(c.code, "ENGL 30553");
    assert_eq!(c.title, "19th Century American Novel");
    assert_eq!(c.hours, 3);
    assert_eq!(c.level, Some(Level::Upper));
    assert!(c.description.is_none());
}

#[test]
fn inserts_exactly_one_space() {
    for raw in ["ENGL10803", "CRWT20103", "WRIT40163", "ENGL 20803"] {
        let c = normalize_row(&[raw, "", "Some Course"], &undergrad()).unwrap();
        assert_eq!(c.code.matches(' ').count(), 1, "{raw}");
        assert_eq!(c.code.len(), 10, "{raw}");
    }
}

#[test]
fn lower_division_below_30000() {
    let c = normalize_row(&["ENGL20803", "", "Intro to Fiction", "3"], &undergrad()).unwrap();
    assert_eq!(c.level, Some(Level::Lower));

    let c = normalize_row(&["ENGL29993", "", "Edge", "3"], &undergrad()).unwrap();
    assert_eq!(c.level, Some(Level::Lower));

    let c = normalize_row(&["ENGL30003", "", "Edge", "3"], &undergrad()).unwrap();
    assert_eq!(c.level, Some(Level::Upper));

    let c = normalize_row(&["ENGL49993", "", "Edge", "3"], &undergrad()).unwrap();
    assert_eq!(c.level, Some(Level::Upper));
}

#[test]
fn graduate_courses_dropped_unless_cross_listed() {
    assert!(normalize_row(&["ENGL50100", "", "Graduate Seminar", "3"], &undergrad()).is_none());
    assert!(normalize_row(&["ENGL59993", "", "Graduate Seminar", "3"], &undergrad()).is_none());

    let kept = normalize_row(&["ENGL50233", "", "Studies in Creative Writing", "3"], &undergrad())
        .unwrap();
    assert_eq!(kept.code, "ENGL 50233");
    assert_eq!(kept.level, Some(Level::Upper));
}

#[test]
fn custom_cross_listing() {
    let opts = NormalizeOptions::default().with_cross_listed(["ENGL 50100"]);
    assert!(normalize_row(&["ENGL50100", "", "Seminar", "3"], &opts).is_some());
    assert!(normalize_row(&["ENGL50233", "", "Studies", "3"], &opts).is_none());
}

#[test]
fn sixty_thousand_level_not_filtered() {
    assert!(!GRADUATE_RANGE.contains(&60000));
    let c = normalize_row(&["ENGL60003", "", "Dissertation", "3"], &undergrad()).unwrap();
    assert_eq!(c.code, "ENGL 60003");
}

#[test]
fn short_or_missing_codes_skipped() {
    assert!(normalize_row(&["", "", "No Code", "3"], &undergrad()).is_none());
    assert!(normalize_row(&["ENGL303", "", "Short", "3"], &undergrad()).is_none());
    assert_eq!("ENGL3055".len(), MIN_CODE_LEN);
    assert!(normalize_row(&["ENGL3055", "", "Eight", "3"], &undergrad()).is_some());
}

#[test]
fn too_few_columns_skipped() {
    assert!(normalize_row(&["ENGL30553", ""], &undergrad()).is_none());
    assert!(normalize_row::<&str>(&[], &undergrad()).is_none());
}

#[test]
fn unparseable_code_passes_through() {
    let c = normalize_row(&["ENGL-30553", "", "Odd Code", "3"], &undergrad()).unwrap();
    assert_eq!(c.code, "ENGL-30553");
    assert_eq!(c.level, None);
}

#[test]
fn missing_title_gets_placeholder() {
    let c = normalize_row(&["ENGL30553", "", "   ", "3"], &undergrad()).unwrap();
    assert_eq!(c.title, PLACEHOLDER_TITLE);
}

#[test]
fn hours_default_when_column_absent() {
    let c = normalize_row(&["ENGL30553", "", "Title"], &undergrad()).unwrap();
    assert_eq!(c.hours, DEFAULT_HOURS);
}

#[test]
fn variable_credit_falls_back() {
    let c = normalize_row(&["ENGL40970", "", "Internship", "1-6"], &undergrad()).unwrap();
    assert_eq!(c.hours, 3);
}

#[test]
fn hours_parsing() {
    assert_eq!(parse_hours("4"), 4);
    assert_eq!(parse_hours(" 1 "), 1);
    assert_eq!(parse_hours("3.0"), 3);
    assert_eq!(parse_hours("2.9"), 2);
    assert_eq!(parse_hours("1-6"), 3);
    assert_eq!(parse_hours("0-3"), 3);
    assert_eq!(parse_hours("three"), 3);
    assert_eq!(parse_hours(""), 3);
    assert_eq!(parse_hours("NaN"), 3);
    assert_eq!(parse_hours("inf"), 3);
}

#[test]
fn catalog_layout_reads_description_and_code_hours() {
    let row = [
        "CRWT10203",
        "https://example.edu/crwt-10203",
        "Intro to Creative Writing",
        "Workshop in which students present their writing.",
    ];
    let c = normalize_row(&row, &catalog()).unwrap();
    assert_eq!(c.code, "CRWT 10203");
    assert_eq!(c.hours, 3);
    assert_eq!(
        c.description.as_deref(),
        Some("Workshop in which students present their writing.")
    );

    let c = normalize_row(&["WRIT40166", "", "Capstone"], &catalog()).unwrap();
    assert_eq!(c.hours, 6);
    assert_eq!(c.description.as_deref(), Some(""));
}

#[test]
fn subject_filter() {
    assert!(normalize_row(&["HIST30003", "", "Modern Europe", "x"], &catalog()).is_none());
    assert!(normalize_row(&["HIST30003", "", "Modern Europe", "3"], &undergrad()).is_some());
}
