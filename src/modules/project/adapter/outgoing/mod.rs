mod project_store_memory;

pub use project_store_memory::InMemoryProjectStore;
