pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_word_results_table;
mod m20240101_000002_create_category_results_table;

pub struct Migrator;

impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_word_results_table::Migration),
            Box::new(m20240101_000002_create_category_results_table::Migration),
        ]
    }
}
