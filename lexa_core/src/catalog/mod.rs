mod memory;
mod store;

pub use memory::InMemoryCatalog;
pub use store::CatalogStore;
