pub mod config;
pub mod error;
pub mod input_modality;

pub use config::NavigatorConfig;
pub use error::{NavigatorError, NavigatorResult};
pub use input_modality::InputModality;
