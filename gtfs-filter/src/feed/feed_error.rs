use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum FeedError {
    #[error("i/o failure on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read or write {filename}: {source}")]
    Csv {
        filename: String,
        source: csv::Error,
    },
    #[error("failure reading or writing zip archive: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("required file {filename} is missing from feed {feed}")]
    MissingFile { filename: String, feed: PathBuf },
}

impl FeedError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> FeedError {
        FeedError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn csv(filename: &str, source: csv::Error) -> FeedError {
        FeedError::Csv {
            filename: filename.to_string(),
            source,
        }
    }
}
