// Service exports
pub mod cache;
pub mod rest;
pub mod store;

pub use cache::CachedProfileStore;
pub use rest::RestProfileStore;
pub use store::{ProfileStore, StoreError};
