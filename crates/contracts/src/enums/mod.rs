pub mod modality;

pub use modality::Modality;
