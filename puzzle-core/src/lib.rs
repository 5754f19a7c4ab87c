pub mod category_game;
pub mod session_store;
pub mod word_game;

// Re-export main components
pub use category_game::*;
pub use session_store::*;
pub use word_game::*;
