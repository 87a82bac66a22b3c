//! reading and writing GTFS feeds as directories of csv files or zip archives.
mod feed_error;
mod feed_reader;
mod feed_writer;

pub use feed_error::FeedError;
pub use feed_reader::read_feed;
pub use feed_writer::{compress_directory, prepare_output_directory, write_feed};
