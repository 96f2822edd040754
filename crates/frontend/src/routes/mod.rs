pub mod navigation;
pub mod routes;
