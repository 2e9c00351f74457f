//! Dashboard Pipeline
//!
//! One fetch cycle runs concurrent fetch -> join -> assemble and yields a
//! single immutable view-model snapshot, or a single typed failure:
//!
//! - [`fetch`]: concurrent fetch coordinator (fan-out/fan-in, fail-fast)
//! - [`aggregate`]: foreign-key join and per-parent aggregation
//! - [`view`]: pure view-model assembly
//! - [`engine`]: cycle driver with stale-result protection

pub mod aggregate;
pub mod engine;
pub mod fetch;
pub mod view;

pub use aggregate::{aggregate_by, aggregate_with_secondary, Aggregate};
pub use engine::{Dashboard, Snapshot};
pub use fetch::{fetch_all, Collections};
pub use view::{assemble, Series, Totals, ViewModel};
