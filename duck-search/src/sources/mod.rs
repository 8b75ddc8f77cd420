//! The three result sources.
//!
//! Each source builds its request URL from the query and the client
//! configuration, fetches through the shared [`CachedFetcher`](crate::fetch::CachedFetcher),
//! and degrades instead of failing: the text source skips failed pages,
//! the JSON sources return `None`.

pub mod instant;
pub mod text;
pub mod wiki;
