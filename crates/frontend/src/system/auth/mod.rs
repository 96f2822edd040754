pub mod credential_gate;
pub mod view_model;
