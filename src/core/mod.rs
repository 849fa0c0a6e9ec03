pub mod persistence;
pub mod resource;
pub mod util;
