mod filter_app;
mod filter_app_error;
mod filter_configuration;

pub use filter_app::FilterApp;
pub use filter_app_error::FilterAppError;
pub use filter_configuration::FilterConfiguration;
