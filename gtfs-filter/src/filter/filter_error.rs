#[derive(thiserror::Error, Debug)]
pub enum FilterError {
    /// single-entity lookups are not supported by the filter, which only
    /// manages bulk collections. callers must treat this as fatal.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
    #[error("invalid service end date {year:04}-{month:02}-{day:02}")]
    InvalidServiceDate { year: i32, month: u32, day: u32 },
}
