pub mod config;
pub mod converter;
pub mod errors;
pub mod image;
pub mod record;

pub use config::Config;
pub use converter::convert;
pub use errors::ConvertError;
