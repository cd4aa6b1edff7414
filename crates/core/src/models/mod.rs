pub mod slot;
pub mod upload;
