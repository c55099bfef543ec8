pub mod add;
pub mod summary;
