pub mod category_results;
pub mod word_results;

pub mod prelude {
    pub use super::category_results::Entity as CategoryResults;
    pub use super::word_results::Entity as WordResults;
}
