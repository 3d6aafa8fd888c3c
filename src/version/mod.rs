//! Release version tracking
//!
//! Produces a deduplicated, newest-first list of known vcluster releases
//! while touching the network as little as possible.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Releases   │────▶│    Cache    │     │  Baseline   │
//! │(orchestrate)│     │ (releases.  │     │ (compiled   │
//! └─────────────┘     │    json)    │     │    in)      │
//!        │            └─────────────┘     └─────────────┘
//!        ▼                                       ▲
//! ┌─────────────┐                         ┌─────────────┐
//! │   Source    │                         │    Merge    │
//! │  (GitHub)   │                         │(dedup, sort)│
//! └─────────────┘                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`semver`]: Version parsing and ordering
//! - [`baseline`]: Release lists compiled into the binary
//! - [`cache`]: TTL-aware on-disk release cache with atomic writes
//! - [`source`]: Trait for fetching releases from a remote host
//! - [`sources`]: Concrete source implementations (GitHub)
//! - [`merge`]: Deduplicating merge of version lists
//! - [`releases`]: Three-tier lookup combining all of the above
//! - [`error`]: Error types for cache and source operations

pub mod baseline;
pub mod cache;
pub mod error;
pub mod merge;
pub mod releases;
pub mod semver;
pub mod source;
pub mod sources;
