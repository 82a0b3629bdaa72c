pub mod config;
pub mod error_log;
pub mod modality;
pub mod url_state;
