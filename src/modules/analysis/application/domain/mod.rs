pub mod entities;
pub mod results;
