pub mod duration;
pub mod entities;
pub mod validate;
