mod document;
mod rewrite;

pub use document::{load, save};
pub use rewrite::{ConstraintKind, RewriteMode, classify, rewrite_constraint, uncap_document};
