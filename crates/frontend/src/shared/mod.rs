pub mod components;
pub mod duration_utils;
pub mod external_link;
pub mod icons;
