mod bounding_box;
pub mod cleanup_ops;
mod cleanup_report;
mod collection_change;
mod feed_graph;
mod filter_error;
pub mod selection_ops;
mod tracked_collection;

#[cfg(test)]
pub(crate) mod test_graph;

pub use bounding_box::{parse_bbox, BoundingBox};
pub use cleanup_ops::cleanup_all;
pub use cleanup_report::CleanupReport;
pub use collection_change::{abbreviate, ChangeSummary, CollectionChange};
pub use feed_graph::{EntityStore, FeedGraph};
pub use filter_error::FilterError;
pub use selection_ops::{retain_agencies, retain_routes, retain_stops, set_service_end_date};
pub use tracked_collection::TrackedCollection;
