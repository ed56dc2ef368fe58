//! The seven field extractors. Each reads the full document text and emits
//! one field; no extractor depends on another's output. Name and experience
//! extraction are ordered strategy chains: every strategy is a pure function
//! over the text, evaluated in order, first success wins, never merged.

use chrono::{Datelike, Utc};

use crate::ner::{EntityLabel, EntityTagger};
use crate::patterns::{
    self, KeywordMatcher, DATE_RANGE_RE, DEGREE_MATCHER, EMAIL_RE, NAME_BEFORE_EMAIL_RE,
    PHONE_RES, SKILL_MATCHER, STATED_EXPERIENCE_RE, TITLE_MATCHER,
};

/// Only this many leading characters are consulted for name detection.
const NAME_WINDOW_CHARS: usize = 500;

/// Lines scanned by the heading heuristic.
const HEADING_LINES: usize = 5;

/// Lines in the education window: the header line plus the following 14.
const EDUCATION_WINDOW_LINES: usize = 15;

/// Titles returned at most.
const MAX_JOB_TITLES: usize = 3;

/// First syntactic email address in document order.
pub fn email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// First phone pattern that matches anywhere wins; later patterns are not
/// consulted even if they would match earlier in the text.
pub fn phone(text: &str) -> Option<String> {
    PHONE_RES
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| m.as_str().to_string())
}

/// Skill vocabulary entries present in the text, in vocabulary order.
pub fn skills(text: &str) -> Vec<String> {
    SKILL_MATCHER
        .matches(text)
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Degree keywords found inside the education window. The window is the
/// first line containing a section-header phrase plus the following 14
/// lines; with no header line the whole document is scanned instead.
pub fn education(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text.split('\n').collect();
    let header = lines.iter().position(|line| {
        let lowered = line.to_lowercase();
        patterns::SECTION_HEADERS
            .iter()
            .any(|h| lowered.contains(h))
    });

    let matched = match header {
        Some(start) => {
            let end = (start + EDUCATION_WINDOW_LINES).min(lines.len());
            let window = lines[start..end].join("\n");
            DEGREE_MATCHER.matches(&window)
        }
        None => DEGREE_MATCHER.matches(text),
    };
    matched.into_iter().map(str::to_string).collect()
}

/// At most three distinct titles, in vocabulary order. Vocabulary order is
/// load-bearing: a base title listed before its seniority-qualified variant
/// will also match the variant's text and claim a slot.
pub fn job_titles(text: &str) -> Vec<String> {
    TITLE_MATCHER
        .matches(text)
        .into_iter()
        .take(MAX_JOB_TITLES)
        .map(str::to_string)
        .collect()
}

const EXPERIENCE_STRATEGIES: &[fn(&str) -> Option<u32>] = &[stated_years, date_range_years];

/// Total years of experience. Direct statements always preempt date-range
/// inference; the two are never combined.
pub fn experience_years(text: &str) -> Option<u32> {
    EXPERIENCE_STRATEGIES
        .iter()
        .find_map(|strategy| strategy(text))
}

/// Largest figure among direct "N years" statements. Resumes sometimes
/// restate a lower aggregate earlier and the true total later, so the
/// maximum wins.
fn stated_years(text: &str) -> Option<u32> {
    let lowered = text.to_lowercase();
    STATED_EXPERIENCE_RE
        .captures_iter(&lowered)
        .filter_map(|caps| caps[1].parse::<u32>().ok())
        .max()
}

/// Sum of `end - start` over all date ranges, with "present"/"current"
/// resolving to the calendar year at call time. The one spot where parsing
/// is not a pure function of the text.
fn date_range_years(text: &str) -> Option<u32> {
    let lowered = text.to_lowercase();
    let current_year = Utc::now().year();

    let mut total = 0i32;
    let mut seen = false;
    for caps in DATE_RANGE_RE.captures_iter(&lowered) {
        let Ok(start) = caps[1].parse::<i32>() else {
            continue;
        };
        let end = match &caps[2] {
            "present" | "current" => current_year,
            year => match year.parse::<i32>() {
                Ok(y) => y,
                Err(_) => continue,
            },
        };
        seen = true;
        total += end - start;
    }

    if seen && total > 0 {
        u32::try_from(total).ok()
    } else {
        None
    }
}

type NameStrategy = fn(&str, &dyn EntityTagger) -> Option<String>;

const NAME_STRATEGIES: &[NameStrategy] = &[heading_name, tagged_person, name_before_email];

/// Candidate name, or empty when every strategy comes up dry. Absence is a
/// normal outcome for low-quality input, never an error.
pub fn name(text: &str, tagger: &dyn EntityTagger) -> Vec<String> {
    NAME_STRATEGIES
        .iter()
        .find_map(|strategy| strategy(text, tagger))
        .map(|found| vec![found])
        .unwrap_or_default()
}

/// Strategy 1: a short alphabetic line near the top, fully uppercase or in
/// title case, is taken to be the candidate's name heading.
fn heading_name(text: &str, _tagger: &dyn EntityTagger) -> Option<String> {
    text.split('\n').take(HEADING_LINES).find_map(|line| {
        let line = line.trim();
        if !plausible_name_length(line) {
            return None;
        }
        let letters: Vec<char> = line.chars().filter(|c| *c != ' ' && *c != '.').collect();
        if letters.is_empty() || !letters.iter().all(|c| c.is_alphabetic()) {
            return None;
        }
        if is_all_uppercase(line) || is_title_case(line) {
            Some(line.to_string())
        } else {
            None
        }
    })
}

/// Strategy 2: first person span the entity tagger finds in the top of the
/// document, skipping the fixed list of known tagger false positives.
fn tagged_person(text: &str, tagger: &dyn EntityTagger) -> Option<String> {
    tagger
        .tag(head(text, NAME_WINDOW_CHARS))
        .into_iter()
        .filter(|span| span.label == EntityLabel::Person)
        .map(|span| span.text)
        .find(|candidate| !patterns::TAGGER_EXCLUDE_TERMS.contains(&candidate.as_str()))
}

/// Strategy 3: a run of letters directly before an email address, as in
/// "John Smith | jsmith@example.com".
fn name_before_email(text: &str, _tagger: &dyn EntityTagger) -> Option<String> {
    let caps = NAME_BEFORE_EMAIL_RE.captures(head(text, NAME_WINDOW_CHARS))?;
    let candidate = caps[1].trim();
    plausible_name_length(candidate).then(|| candidate.to_string())
}

/// Trimmed length strictly between 5 and 49 characters.
fn plausible_name_length(candidate: &str) -> bool {
    let len = candidate.chars().count();
    len > 5 && len < 50
}

fn head(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// All cased characters uppercase, and at least one of them.
fn is_all_uppercase(text: &str) -> bool {
    let mut cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}

/// Every cased run starts with exactly one uppercase letter followed by
/// lowercase, and at least one cased character exists.
fn is_title_case(text: &str) -> bool {
    let mut cased = false;
    let mut prev_cased = false;
    for c in text.chars() {
        if c.is_uppercase() {
            if prev_cased {
                return false;
            }
            prev_cased = true;
            cased = true;
        } else if c.is_lowercase() {
            if !prev_cased {
                return false;
            }
            cased = true;
        } else {
            prev_cased = false;
        }
    }
    cased
}
