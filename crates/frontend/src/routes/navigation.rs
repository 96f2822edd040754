use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

/// The two logical views of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    CredentialGate,
    Catalog,
}

impl Destination {
    pub fn name(&self) -> &'static str {
        match self {
            Destination::CredentialGate => "credential-gate",
            Destination::Catalog => "catalog",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Destination::CredentialGate => "/",
            Destination::Catalog => "/gallery",
        }
    }
}

/// Moves the app between views. Any `Fn(Destination)` closure qualifies.
pub trait Navigator {
    fn navigate(&self, destination: Destination);
}

impl<F> Navigator for F
where
    F: Fn(Destination),
{
    fn navigate(&self, destination: Destination) {
        self(destination)
    }
}

/// Navigator backed by the router. Must be called under `<Router>`.
pub fn use_app_navigator() -> impl Navigator + Clone + 'static {
    let navigate = use_navigate();
    move |destination: Destination| {
        log::debug!("navigate -> {} ({})", destination.name(), destination.path());
        navigate(destination.path(), NavigateOptions::default());
    }
}
