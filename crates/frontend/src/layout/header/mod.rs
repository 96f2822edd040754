pub mod topbar;

pub use topbar::Topbar;
