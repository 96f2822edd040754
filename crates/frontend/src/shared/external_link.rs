/// Opens an external resource in a new browsing context
pub trait ResourceOpener {
    fn open(&self, url: &str);
}

/// `window.open(url, "_blank", "noopener,noreferrer")`. Fire-and-forget.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowOpener;

pub const NEW_CONTEXT_TARGET: &str = "_blank";
pub const NEW_CONTEXT_FEATURES: &str = "noopener,noreferrer";

impl ResourceOpener for WindowOpener {
    fn open(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("open external: no window available");
            return;
        };
        if let Err(e) =
            window.open_with_url_and_target_and_features(url, NEW_CONTEXT_TARGET, NEW_CONTEXT_FEATURES)
        {
            log::warn!("open external '{}' failed: {:?}", url, e);
        }
    }
}
