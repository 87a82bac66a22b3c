pub mod app;
pub mod feed;
pub mod filter;
pub mod model;
