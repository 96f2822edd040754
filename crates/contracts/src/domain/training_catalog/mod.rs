pub mod aggregate;
pub mod seed;

pub use aggregate::{Catalog, CatalogError, Module, ModuleId, Training, TrainingId};
