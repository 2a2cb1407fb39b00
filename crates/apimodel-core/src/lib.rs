pub mod config;
pub mod error;
pub mod model;
pub mod parse;
pub mod value;
pub mod version;

pub use error::ParseError;
pub use model::ApiModel;
pub use version::Version;
