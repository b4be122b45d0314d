pub mod entities;
pub mod output;
