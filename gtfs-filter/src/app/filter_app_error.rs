use crate::{feed::FeedError, filter::FilterError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterAppError {
    #[error("failure reading filter configuration: {0}")]
    ConfigurationError(String),
    #[error("failure reading or writing GTFS feed: {source}")]
    FeedError {
        #[from]
        source: FeedError,
    },
    #[error("failure filtering GTFS feed: {source}")]
    FilterError {
        #[from]
        source: FilterError,
    },
}
