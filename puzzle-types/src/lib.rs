pub mod category;
pub mod errors;
pub mod game;

// Re-export all types
pub use category::*;
pub use errors::*;
pub use game::*;
