use serde::{Deserialize, Serialize};

/// Delivery medium of a training
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    /// Virtual reality headset
    #[serde(rename = "VR")]
    Vr,
    /// Augmented reality on a handheld device
    #[serde(rename = "AR")]
    Ar,
}

impl Modality {
    /// Short code shown on the card chip
    pub fn code(&self) -> &'static str {
        match self {
            Modality::Vr => "VR",
            Modality::Ar => "AR",
        }
    }
}
