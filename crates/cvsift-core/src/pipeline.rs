use std::path::Path;
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::document::{self, DocumentFormat, ParseError};
use crate::extract;
use crate::ner::{shared_tagger, EntityTagger};
use crate::profile::ResumeProfile;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

pub type PipelineResult<T> = Result<T, PipelineError>;

/// The parse pipeline: format dispatch, text extraction, then the seven
/// field extractors over the same text. Stateless across calls; the only
/// shared resource is the injected tagger handle.
pub struct ResumePipeline {
    tagger: Arc<dyn EntityTagger>,
}

impl ResumePipeline {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tagger: shared_tagger(),
        }
    }

    #[must_use]
    pub fn with_tagger(mut self, tagger: Arc<dyn EntityTagger>) -> Self {
        self.tagger = tagger;
        self
    }

    /// Parse one resume file. Unknown extensions short-circuit to the
    /// unsupported-format record; a corrupt or unreadable pdf/docx
    /// propagates as a hard failure with no partial result.
    pub fn parse_file(&self, path: &Path) -> PipelineResult<ResumeProfile> {
        let format = DocumentFormat::from_path(path);
        debug!(path = %path.display(), %format, "parsing resume");
        if format == DocumentFormat::Other {
            return Ok(ResumeProfile::unsupported());
        }
        let text = document::extract_text(path)?;
        Ok(self.parse_text(&text))
    }

    /// Parse bytes already in memory, dispatching on `format`.
    pub fn parse_bytes(&self, data: &[u8], format: DocumentFormat) -> PipelineResult<ResumeProfile> {
        if format == DocumentFormat::Other {
            return Ok(ResumeProfile::unsupported());
        }
        let text = document::extract_text_bytes(data, format)?;
        Ok(self.parse_text(&text))
    }

    /// Run all seven extractors over already-decoded text. Pure except for
    /// "present"/"current" date ends, which resolve to the calendar year at
    /// call time.
    #[must_use]
    pub fn parse_text(&self, text: &str) -> ResumeProfile {
        ResumeProfile {
            name: extract::name(text, self.tagger.as_ref()),
            email: extract::email(text),
            phone: extract::phone(text),
            skills: extract::skills(text),
            education: extract::education(text),
            experience_years: extract::experience_years(text),
            job_titles: extract::job_titles(text),
        }
    }
}

impl Default for ResumePipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
JOHN SMITH
Data Scientist | jsmith@example.com | +91-98765-43210
5+ years experience in Machine Learning and Python

Education
B.Tech in Computer Science, Anna University, 2014 - 2018";

    #[test]
    fn full_record_from_sample_text() {
        let profile = ResumePipeline::new().parse_text(SAMPLE);
        assert_eq!(profile.name, vec!["JOHN SMITH"]);
        assert_eq!(profile.email.as_deref(), Some("jsmith@example.com"));
        assert_eq!(profile.phone.as_deref(), Some("+91-98765-43210"));
        assert_eq!(profile.skills, vec!["Python", "Machine Learning"]);
        assert!(profile.education.contains(&"B.Tech".to_string()));
        assert_eq!(profile.experience_years, Some(5));
        assert_eq!(profile.job_titles, vec!["Data Scientist"]);
    }

    #[test]
    fn parsing_twice_yields_identical_records() {
        let pipeline = ResumePipeline::new();
        assert_eq!(pipeline.parse_text(SAMPLE), pipeline.parse_text(SAMPLE));
    }

    #[test]
    fn empty_text_is_a_successful_empty_parse() {
        let profile = ResumePipeline::new().parse_text("");
        assert_eq!(profile, ResumeProfile::default());
    }

    #[test]
    fn unknown_extension_short_circuits_to_the_sentinel() {
        let profile = ResumePipeline::new()
            .parse_file(Path::new("resume.txt"))
            .unwrap();
        assert!(profile.is_unsupported());
    }

    #[test]
    fn missing_pdf_is_a_hard_failure() {
        let err = ResumePipeline::new()
            .parse_file(Path::new("/definitely/not/here.pdf"))
            .unwrap_err();
        assert!(matches!(err, PipelineError::Parse(ParseError::Io(_))));
    }

    #[test]
    fn injected_tagger_is_used() {
        use crate::ner::{EntityLabel, EntitySpan};

        struct FixedTagger;
        impl EntityTagger for FixedTagger {
            fn tag(&self, _text: &str) -> Vec<EntitySpan> {
                vec![EntitySpan::new(
                    "Priya Nair".to_string(),
                    EntityLabel::Person,
                    0,
                    10,
                )]
            }
        }

        let pipeline = ResumePipeline::new().with_tagger(Arc::new(FixedTagger));
        let profile = pipeline.parse_text("no heading line qualifies here");
        assert_eq!(profile.name, vec!["Priya Nair"]);
    }
}
