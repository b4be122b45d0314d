pub mod jwt;
pub mod security;
pub mod user_store_memory;
