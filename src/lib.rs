//! Title-casing for song, album and artist metadata

pub mod config;
pub mod dictionary;
pub mod fields;
pub mod titlecase;

pub use titlecase::{convert, titlecase, PostHook, PreHook, TitleCaseEngine};
