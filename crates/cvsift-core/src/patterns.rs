use std::sync::LazyLock;

use regex::Regex;

/// Skill vocabulary, scanned in this order. Result ordering is part of the
/// output contract, so entries must not be reordered.
pub const SKILLS: &[&str] = &[
    "Python",
    "Machine Learning",
    "SQL",
    "Java",
    "C++",
    "TensorFlow",
    "PyTorch",
    "Deep Learning",
    "NLP",
    "Data Analysis",
    "scikit-learn",
    "Pandas",
    "NumPy",
];

/// Job-title vocabulary. Scan order decides which titles claim the three
/// result slots, so entries must not be reordered.
pub const JOB_TITLES: &[&str] = &[
    "Software Engineer",
    "Senior Software Engineer",
    "Lead Software Engineer",
    "Software Developer",
    "Full Stack Developer",
    "Backend Developer",
    "Frontend Developer",
    "DevOps Engineer",
    "Cloud Engineer",
    "Data Scientist",
    "Data Analyst",
    "Data Engineer",
    "Machine Learning Engineer",
    "AI Engineer",
    "Business Analyst",
    "Project Manager",
    "Product Manager",
    "Technical Lead",
    "QA Engineer",
];

/// Degree and field-of-study keywords matched inside the education window.
pub const DEGREE_KEYWORDS: &[&str] = &[
    "B.Tech",
    "M.Tech",
    "B.E.",
    "MCA",
    "BSc",
    "B.Sc",
    "MSc",
    "M.Sc",
    "MBA",
    "BCA",
    "Diploma",
    "Bachelor",
    "Master",
    "PhD",
    "Computer Science",
    "Information Technology",
    "Mechanical Engineering",
];

/// Phrases that open an education section. Lowercase; matched against
/// lowercased lines.
pub const SECTION_HEADERS: &[&str] = &[
    "education",
    "academic",
    "qualification",
    "educational background",
];

/// Terms the entity tagger tends to mislabel as person names.
pub const TAGGER_EXCLUDE_TERMS: &[&str] = &[
    "Tamil Nadu",
    "India",
    "Chennai",
    "Mumbai",
    "Delhi",
    "Bangalore",
    "Wells Fargo",
    "Infosys",
    "College",
];

pub static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("email regex")
});

/// Phone patterns for the Indian numbering plan, in priority order:
/// +91 with a 5+5 split, a bare 10-digit number, +91 with a contiguous run.
pub static PHONE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\+91[-\s]?\d{5}[-\s]?\d{5}",
        r"\b[6-9]\d{9}\b",
        r"\+91[-\s]?\d{10}",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("phone regex"))
    .collect()
});

/// Direct experience statements like "7+ years of experience". Applied to
/// lowercased text.
pub static STATED_EXPERIENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\+?\s*years?\s*(?:of)?\s*(?:experience|exp)?").expect("experience regex")
});

/// Employment date ranges, 2000-2099 only, with an open end spelled
/// "present" or "current". Applied to lowercased text.
pub static DATE_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(20\d{2})\s*[-–]\s*(20\d{2}|present|current)").expect("date range regex")
});

/// A run of letters and spaces sitting directly before an email address,
/// with an optional `|` or `-` separator in between.
pub static NAME_BEFORE_EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z\s]+)\s*[\|\-]?\s*[\w.]+@").expect("name regex"));

/// Matches a fixed vocabulary against free text. The substring strategy is
/// the compatibility baseline; a word-boundary-aware matcher can be swapped
/// in behind this trait without touching extractor logic.
pub trait KeywordMatcher: Send + Sync {
    fn vocabulary(&self) -> &'static [&'static str];

    /// Vocabulary entries found in `text`, in vocabulary order.
    fn matches(&self, text: &str) -> Vec<&'static str>;
}

/// Case-insensitive substring containment, no word-boundary enforcement.
/// Accepts false positives from overlapping tokens as a known tradeoff.
pub struct SubstringMatcher {
    vocabulary: &'static [&'static str],
}

impl SubstringMatcher {
    #[must_use]
    pub const fn new(vocabulary: &'static [&'static str]) -> Self {
        Self { vocabulary }
    }
}

impl KeywordMatcher for SubstringMatcher {
    fn vocabulary(&self) -> &'static [&'static str] {
        self.vocabulary
    }

    fn matches(&self, text: &str) -> Vec<&'static str> {
        let haystack = text.to_lowercase();
        self.vocabulary
            .iter()
            .copied()
            .filter(|entry| haystack.contains(&entry.to_lowercase()))
            .collect()
    }
}

pub static SKILL_MATCHER: SubstringMatcher = SubstringMatcher::new(SKILLS);
pub static TITLE_MATCHER: SubstringMatcher = SubstringMatcher::new(JOB_TITLES);
pub static DEGREE_MATCHER: SubstringMatcher = SubstringMatcher::new(DEGREE_KEYWORDS);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_matcher_preserves_vocabulary_order() {
        let found = SKILL_MATCHER.matches("I know TensorFlow and some Python");
        assert_eq!(found, vec!["Python", "TensorFlow"]);
    }

    #[test]
    fn substring_matcher_is_case_insensitive() {
        let found = SKILL_MATCHER.matches("worked with PYTHON and pandas");
        assert_eq!(found, vec!["Python", "Pandas"]);
    }

    #[test]
    fn substring_matcher_ignores_word_boundaries() {
        // Known tradeoff: "javascript" contains "java".
        let found = SKILL_MATCHER.matches("wrote javascript for years");
        assert_eq!(found, vec!["Java"]);
    }

    #[test]
    fn email_regex_matches_plain_address() {
        assert!(EMAIL_RE.is_match("reach me at someone@example.co.in"));
        assert!(!EMAIL_RE.is_match("not-an-email @ example"));
    }

    #[test]
    fn phone_patterns_ordered_by_priority() {
        assert!(PHONE_RES[0].is_match("+91-98765-43210"));
        assert!(PHONE_RES[1].is_match("call 9876543210 now"));
        assert!(PHONE_RES[2].is_match("+91 9876543210"));
    }

    #[test]
    fn date_range_accepts_en_dash() {
        assert!(DATE_RANGE_RE.is_match("2019 – 2022"));
        assert!(DATE_RANGE_RE.is_match("2020 - present"));
        assert!(!DATE_RANGE_RE.is_match("1999 - 2001"));
    }
}
