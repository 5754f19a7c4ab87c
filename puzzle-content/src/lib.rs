pub mod connections;
pub mod fallback;
pub mod word_lists;

pub use connections::*;
pub use fallback::*;
pub use word_lists::*;
