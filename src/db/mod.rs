pub mod kv;
pub mod migrate;
pub mod pool;
pub mod queries;
pub mod stats;

pub use kv::{KeyValueStorage, MemoryStorage};
pub use pool::DbPool;
