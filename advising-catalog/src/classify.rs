//! Keyword classifier that files each course under one advising category.
//!
//! Rules are checked in a fixed order against the lowercased title and the
//! code's subject prefix. The first matching rule wins, so a title that hits
//! keywords from several categories lands in the earliest one.

use crate::types::{Category, CourseRecord};

enum Predicate {
    /// Any keyword appears in the title.
    Keywords(&'static [&'static str]),
    /// The code has the prefix, or any keyword appears in the title.
    PrefixOrKeywords(&'static str, &'static [&'static str]),
    /// The code has the prefix and some keyword appears in the title.
    PrefixAndKeywords(&'static str, &'static [&'static str]),
}

impl Predicate {
    fn matches(&self, code: &str, title: &str) -> bool {
        match self {
            Predicate::Keywords(keywords) => contains_any(title, keywords),
            Predicate::PrefixOrKeywords(prefix, keywords) => {
                code.starts_with(prefix) || contains_any(title, keywords)
            }
            Predicate::PrefixAndKeywords(prefix, keywords) => {
                code.starts_with(prefix) && contains_any(title, keywords)
            }
        }
    }
}

fn contains_any(title: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| title.contains(k))
}

const RULES: &[(Category, Predicate)] = &[
    (
        Category::AmericanLiterature,
        Predicate::Keywords(&[
            "american",
            "u.s.",
            "latina/o",
            "latinx",
            "african american",
            "asian american",
            "native american",
        ]),
    ),
    (
        Category::BritishLiterature,
        Predicate::Keywords(&[
            "british",
            "chaucer",
            "milton",
            "shakespeare",
            "austen",
            "arthur",
            "victorian",
            "renaissance",
            "romanticism",
            "irish",
        ]),
    ),
    (
        Category::GlobalLiterature,
        Predicate::Keywords(&[
            "global",
            "world literature",
            "multi-ethnic",
            "post-colonial",
            "india",
            "diasporic",
            "transnational",
        ]),
    ),
    (
        Category::Theory,
        Predicate::Keywords(&["theory", "theories", "criticism", "pedagogy"]),
    ),
    (
        Category::CreativeWriting,
        Predicate::PrefixOrKeywords(
            "CRWT",
            &["creative", "workshop", "poetry writing", "fiction writing"],
        ),
    ),
    (
        Category::ProfessionalWriting,
        Predicate::Keywords(&[
            "professional writing",
            "technical writing",
            "editing",
            "publishing",
            "internship",
        ]),
    ),
    (
        Category::DigitalRhetorics,
        Predicate::Keywords(&[
            "multimedia",
            "digital",
            "coding",
            "games",
            "technology",
            "social media",
        ]),
    ),
    (
        Category::RhetoricsCultures,
        Predicate::PrefixAndKeywords(
            "WRIT",
            &[
                "rhetoric",
                "power",
                "protest",
                "culture",
                "language",
                "persuasion",
                "argument",
            ],
        ),
    ),
];

/// Pick the category for a course. Falls back to [`Category::General`].
///
/// # Examples
///
/// ```
/// use advising_catalog::{Category, CourseRecord, classify};
///
/// let course = CourseRecord::new("ENGL 30553", "19th Century American Novel", 3);
/// assert_eq!(classify(&course), Category::AmericanLiterature);
/// ```
pub fn classify(course: &CourseRecord) -> Category {
    let title = course.title.to_lowercase();
    RULES
        .iter()
        .find(|(_, predicate)| predicate.matches(&course.code, &title))
        .map_or(Category::General, |(category, _)| *category)
}

/// Courses grouped by category, every category present.
#[derive(Debug, Clone, Default)]
pub struct OrganizedCatalog {
    buckets: [Vec<CourseRecord>; 10],
}

impl OrganizedCatalog {
    pub fn get(&self, category: Category) -> &[CourseRecord] {
        &self.buckets[category.index()]
    }

    /// Categories and their courses in output order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[CourseRecord])> {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    fn push(&mut self, category: Category, course: CourseRecord) {
        self.buckets[category.index()].push(course);
    }
}

/// Classify every course, keeping input order within each category.
pub fn organize<I>(courses: I) -> OrganizedCatalog
where
    I: IntoIterator<Item = CourseRecord>,
{
    let mut organized = OrganizedCatalog::default();
    for course in courses {
        let category = classify(&course);
        organized.push(category, course);
    }
    organized
}
