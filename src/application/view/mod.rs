//! View models derived from a classification.
//!
//! Building views is pure: the same classification and disclosure always
//! give the same tree. Presenters decide how to draw it.

pub mod listing;
pub mod report;
pub mod summary;
