pub mod cli;
pub mod entity;
pub mod error;
pub mod search;
pub mod session;
pub mod storage;
pub mod warnings;

pub use error::{AuroraError, Result};
pub use search::{search, SearchConfig, SearchResult};
pub use session::Session;
pub use storage::NoteStore;
