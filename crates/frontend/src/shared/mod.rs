pub mod dom;
pub mod scroll;
