pub mod homepage;
pub mod questions;
