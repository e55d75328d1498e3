pub mod categories;
pub mod context;
pub mod export;
pub mod format;
pub mod session;
pub mod summary;

pub use context::AppContext;
