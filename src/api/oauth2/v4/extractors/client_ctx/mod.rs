mod core;
mod types;

pub use self::core::ClientCtxExtractor;
pub use types::ClientCtx;
