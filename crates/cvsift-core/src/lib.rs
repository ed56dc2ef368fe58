pub mod document;
pub mod extract;
pub mod ner;
pub mod patterns;
pub mod pipeline;
pub mod profile;

pub use document::{DocumentFormat, ParseError};
pub use ner::{shared_tagger, CapitalizedRunTagger, EntityLabel, EntitySpan, EntityTagger};
pub use pipeline::{PipelineError, PipelineResult, ResumePipeline};
pub use profile::{ResumeProfile, UNSUPPORTED_FORMAT_SENTINEL};
