pub mod context;
pub mod intent;
pub mod reply;

pub use context::*;
pub use intent::*;
pub use reply::*;
