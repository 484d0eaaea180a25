//! Deterministic post and tag selection for static content sites.
//!
//! `content-select` decides which content entries a site lists and in
//! which order: visibility filtering (drafts, scheduled posts), newest-first
//! ordering by effective date, per-tag listings and a deduplicated tag
//! index. Around that core it provides site configuration, an on-disk
//! content snapshot, and the feed and card data that listing pages render.
//! Identical inputs and an identical `now` always produce identical
//! outputs.

pub mod config;
pub mod entry;
pub mod feed;
pub mod selection;
pub mod snapshot;
pub mod types;
pub mod view;
