pub mod training_catalog;
