pub mod list;
pub mod range;
pub mod target;
