use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityLabel {
    Person,
    Organization,
    Location,
    Other,
}

impl EntityLabel {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Organization => "organization",
            Self::Location => "location",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labeled span produced by an entity tagger. Offsets are byte positions
/// into the tagged text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub text: String,
    pub label: EntityLabel,
    pub start: usize,
    pub end: usize,
}

impl EntitySpan {
    #[must_use]
    pub fn new(text: String, label: EntityLabel, start: usize, end: usize) -> Self {
        Self {
            text,
            label,
            start,
            end,
        }
    }
}

/// Named-entity oracle. The pipeline only reads `Person` spans; other labels
/// exist so richer taggers can be plugged in without a trait change.
pub trait EntityTagger: Send + Sync {
    fn tag(&self, text: &str) -> Vec<EntitySpan>;
}

/// Tokens that open or break a candidate run even though they are
/// title-cased: section headers, seniority qualifiers, title vocabulary.
const RUN_BREAKERS: &[&str] = &[
    "Resume",
    "Curriculum",
    "Vitae",
    "Summary",
    "Objective",
    "Profile",
    "Contact",
    "Address",
    "Phone",
    "Email",
    "Education",
    "Experience",
    "Skills",
    "Projects",
    "Certifications",
    "Software",
    "Senior",
    "Junior",
    "Lead",
    "Full",
    "Stack",
    "Backend",
    "Frontend",
    "Cloud",
    "Data",
    "Machine",
    "Learning",
    "Business",
    "Project",
    "Product",
    "Technical",
    "Engineer",
    "Developer",
    "Scientist",
    "Analyst",
    "Manager",
    "Consultant",
    "Intern",
    "University",
    "Institute",
    "School",
    "Bachelor",
    "Master",
];

/// A single title-cased word is never a person; two or more are a candidate.
const MIN_RUN_TOKENS: usize = 2;

/// Rule-based person tagger: consecutive title-cased words form a candidate
/// span. A stand-in for a model-backed tagger; it overtags freely (company
/// and place names qualify too), which is what the extractor-side exclusion
/// list is for.
pub struct CapitalizedRunTagger;

impl CapitalizedRunTagger {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn flush_run(run: &mut Vec<(usize, usize)>, text: &str, spans: &mut Vec<EntitySpan>) {
    if run.len() >= MIN_RUN_TOKENS {
        let start = run[0].0;
        let end = run[run.len() - 1].1;
        spans.push(EntitySpan::new(
            text[start..end].to_string(),
            EntityLabel::Person,
            start,
            end,
        ));
    }
    run.clear();
}

impl Default for CapitalizedRunTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityTagger for CapitalizedRunTagger {
    fn tag(&self, text: &str) -> Vec<EntitySpan> {
        let mut spans = Vec::new();
        let mut line_start = 0;
        for line in text.split('\n') {
            // (start, end) byte offsets of the tokens in the current run
            let mut run: Vec<(usize, usize)> = Vec::new();
            for (offset, word) in words_with_offsets(line) {
                let trimmed = word.trim_end_matches([',', ';', ':']);
                if is_name_token(trimmed) && !RUN_BREAKERS.contains(&trimmed) {
                    run.push((line_start + offset, line_start + offset + trimmed.len()));
                } else {
                    flush_run(&mut run, text, &mut spans);
                }
            }
            flush_run(&mut run, text, &mut spans);
            line_start += line.len() + 1;
        }
        spans
    }
}

fn words_with_offsets(line: &str) -> Vec<(usize, &str)> {
    let mut words = Vec::new();
    let mut start = None;
    for (i, c) in line.char_indices() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                words.push((s, &line[s..i]));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        words.push((s, &line[s..]));
    }
    words
}

/// Title-cased word: one uppercase letter, then lowercase letters, with an
/// optional trailing period for initials ("J." style is not a token on its
/// own, but "Kumar." survives).
fn is_name_token(word: &str) -> bool {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_uppercase() {
        return false;
    }
    let rest = chars.as_str().trim_end_matches('.');
    !rest.is_empty() && rest.chars().all(|c| c.is_lowercase() && c.is_alphabetic())
}

static SHARED_TAGGER: OnceLock<Arc<dyn EntityTagger>> = OnceLock::new();

/// Process-wide tagger handle, created on first use behind a one-time
/// initialization barrier and read-only afterwards.
pub fn shared_tagger() -> Arc<dyn EntityTagger> {
    SHARED_TAGGER
        .get_or_init(|| Arc::new(CapitalizedRunTagger::new()))
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person_texts(text: &str) -> Vec<String> {
        CapitalizedRunTagger::new()
            .tag(text)
            .into_iter()
            .filter(|s| s.label == EntityLabel::Person)
            .map(|s| s.text)
            .collect()
    }

    #[test]
    fn tags_consecutive_title_cased_words() {
        let found = person_texts("Rahul Sharma\n9876543210");
        assert_eq!(found, vec!["Rahul Sharma"]);
    }

    #[test]
    fn overtags_company_names_like_a_real_tagger() {
        let found = person_texts("Worked at Wells Fargo with Priya Nair");
        assert_eq!(found, vec!["Wells Fargo", "Priya Nair"]);
    }

    #[test]
    fn title_vocabulary_breaks_runs() {
        let found = person_texts("John Smith Senior Software Engineer");
        assert_eq!(found, vec!["John Smith"]);
    }

    #[test]
    fn single_word_is_not_a_person() {
        assert!(person_texts("Hyderabad").is_empty());
    }

    #[test]
    fn all_caps_words_are_not_tokens() {
        assert!(person_texts("JOHN SMITH").is_empty());
    }

    #[test]
    fn span_offsets_index_into_the_text() {
        let text = "Contact: Anita Desai | anita@example.com";
        let spans = CapitalizedRunTagger::new().tag(text);
        assert_eq!(spans.len(), 1);
        assert_eq!(&text[spans[0].start..spans[0].end], "Anita Desai");
    }

    #[test]
    fn shared_handle_is_reused() {
        let a = shared_tagger();
        let b = shared_tagger();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
