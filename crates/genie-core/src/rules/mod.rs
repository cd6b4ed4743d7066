//! Keyword dispatch.
//!
//! Utterances are lowercased and checked against an ordered list of
//! [`KeywordRule`]s; the first rule whose keyword occurs in the text wins.
//! Unmatched text gets the default help reply.
//!
//! Scrapbook requests are detected separately with [`is_scrapbook_request`]
//! and must be checked before the rule book.

mod book;
mod intent;

pub use book::{KeywordRule, RuleBook, is_scrapbook_request};
pub use intent::{DEFAULT_REPLY, Intent, Reply, welcome_reply};
