//! Collaborator abstractions.
//!
//! The pipeline never constructs clients itself: applications build one
//! language model and one searcher at start-up and inject them.

pub mod document;
pub mod llm;
pub mod searcher;
