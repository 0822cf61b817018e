mod memory;
pub use memory::MemoryCache;

mod options;
pub use options::Options;

mod error;
pub use error::{CacheError, Result};

pub mod model;
