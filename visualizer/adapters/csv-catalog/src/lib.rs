pub use catalog::CsvCatalog;

mod catalog;
