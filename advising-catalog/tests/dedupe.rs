use advising_catalog::{CourseRecord, dedupe};

#[test]
fn keeps_first_seen() {
    let set = dedupe(vec![
        CourseRecord::new("ENGL 30553", "First", 3),
        CourseRecord::new("ENGL 20803", "Other", 3),
        CourseRecord::new("ENGL 30553", "Second", 4),
    ]);
    assert_eq!(set.len(), 2);
    assert_eq!(set.duplicates(), 1);
    assert_eq!(set.get("ENGL 30553").unwrap().title, "First");
    assert_eq!(set.get("ENGL 30553").unwrap().hours, 3);

    let codes: Vec<&str> = set.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, vec!["ENGL 30553", "ENGL 20803"]);
}

#[test]
fn idempotent() {
    let once = dedupe(vec![
        CourseRecord::new("ENGL 30553", "A", 3),
        CourseRecord::new("ENGL 30553", "B", 3),
        CourseRecord::new("CRWT 10203", "C", 3),
    ])
    .into_records();
    let twice = dedupe(once.clone()).into_records();
    assert_eq!(once, twice);
}

#[test]
fn empty_input() {
    let set = dedupe(Vec::new());
    assert!(set.is_empty());
    assert!(!set.contains("ENGL 30553"));
}
