//! Cross-entity search for the back-office: matching, ranking,
//! highlighting and suggestions.
//!
//! The matcher is a pure function over a dataset snapshot; the stateful
//! debounce layer lives in `services`.

pub mod highlight;
pub mod matcher;
pub mod results;
pub mod suggest;

pub use highlight::{highlight, plain_text, HighlightSpan};
pub use matcher::{sanitize_text, search, MAX_QUERY_LEN};
pub use results::{SearchResult, SearchResults};
pub use suggest::{suggest, suggest_with_config};
