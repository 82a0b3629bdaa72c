pub mod days;
pub mod global_context;
