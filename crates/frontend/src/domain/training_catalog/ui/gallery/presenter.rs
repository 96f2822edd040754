use contracts::domain::training_catalog::{Catalog, Module, ModuleId, Training};

use crate::routes::navigation::{Destination, Navigator};
use crate::shared::duration_utils;
use crate::shared::external_link::ResourceOpener;

pub const LABEL_COMPLETED: &str = "completed";
pub const LABEL_PENDING: &str = "pending";
pub const LABEL_START: &str = "start training";
pub const LABEL_COMING_SOON: &str = "coming soon";

/// What the launch button of a card does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchAffordance {
    /// Training not enabled; the button is inert
    NotReady,
    /// Training enabled; the button opens its url
    Ready,
}

impl LaunchAffordance {
    pub fn label(&self) -> &'static str {
        match self {
            LaunchAffordance::NotReady => LABEL_COMING_SOON,
            LaunchAffordance::Ready => LABEL_START,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LaunchAffordance::Ready)
    }
}

/// Everything a training card shows, derived once from the training
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingCardModel {
    pub training: Training,
    pub duration: String,
    pub completion: &'static str,
    pub affordance: LaunchAffordance,
}

/// One module heading with its cards, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSection {
    pub id: ModuleId,
    pub name: String,
    pub cards: Vec<TrainingCardModel>,
}

/// Derives display values for the injected catalog.
///
/// Holds no state besides the catalog it was built with; it never talks to
/// the credential gate.
#[derive(Debug, Clone)]
pub struct CatalogPresenter {
    catalog: Catalog,
}

impl CatalogPresenter {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Modules in seed order, each with trainings in seed order
    pub fn list_modules(&self) -> &[Module] {
        self.catalog.modules()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// What the gallery renders: every training once, under its module,
    /// in module order then training order
    pub fn sections(&self) -> Vec<ModuleSection> {
        self.list_modules()
            .iter()
            .map(|module| ModuleSection {
                id: module.id.clone(),
                name: module.name.clone(),
                cards: module.trainings.iter().map(Self::card).collect(),
            })
            .collect()
    }

    pub fn card(training: &Training) -> TrainingCardModel {
        TrainingCardModel {
            training: training.clone(),
            duration: Self::format_duration(training.minutes),
            completion: Self::completion_label(training),
            affordance: Self::launch_affordance(training),
        }
    }

    pub fn format_duration(minutes: u32) -> String {
        duration_utils::format_duration(minutes)
    }

    pub fn completion_label(training: &Training) -> &'static str {
        if training.completed {
            LABEL_COMPLETED
        } else {
            LABEL_PENDING
        }
    }

    pub fn launch_affordance(training: &Training) -> LaunchAffordance {
        if training.enabled {
            LaunchAffordance::Ready
        } else {
            LaunchAffordance::NotReady
        }
    }

    /// Opens the training url when it is ready; otherwise does nothing
    pub fn launch(training: &Training, opener: &impl ResourceOpener) -> LaunchAffordance {
        let affordance = Self::launch_affordance(training);
        if affordance.is_ready() {
            log::info!("launch training '{}'", training.id.as_str());
            opener.open(&training.url);
        } else {
            log::debug!("launch suppressed for '{}': not enabled", training.id.as_str());
        }
        affordance
    }

    pub fn logout(&self, navigator: &impl Navigator) {
        log::info!("logout");
        navigator.navigate(Destination::CredentialGate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::training_catalog::seed::bundled_catalog;
    use contracts::domain::training_catalog::TrainingId;
    use contracts::enums::Modality;
    use std::cell::RefCell;

    #[derive(Default)]
    struct CountingOpener {
        opened: RefCell<Vec<String>>,
    }

    impl ResourceOpener for CountingOpener {
        fn open(&self, url: &str) {
            self.opened.borrow_mut().push(url.to_string());
        }
    }

    fn training(id: &str, enabled: bool, completed: bool) -> Training {
        Training {
            id: TrainingId::new(id),
            title: id.to_string(),
            description: String::new(),
            minutes: 15,
            completed,
            modality: Modality::Ar,
            url: format!("https://example.com/{}?a=1&b=2", id),
            enabled,
            image_url: None,
        }
    }

    fn presenter() -> CatalogPresenter {
        CatalogPresenter::new(bundled_catalog().unwrap())
    }

    #[test]
    fn test_list_modules_is_stable_and_in_seed_order() {
        let presenter = presenter();

        let first: Vec<Vec<&str>> = presenter
            .list_modules()
            .iter()
            .map(|m| m.trainings.iter().map(|t| t.id.as_str()).collect())
            .collect();
        let second: Vec<Vec<&str>> = presenter
            .list_modules()
            .iter()
            .map(|m| m.trainings.iter().map(|t| t.id.as_str()).collect())
            .collect();

        assert_eq!(first, vec![vec!["fire-1"], vec!["nr10-1", "nr10-2", "nr10-3"]]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_list_modules_returns_injected_data_unmodified() {
        let modules = vec![
            Module {
                id: ModuleId::new("z"),
                name: "Z".to_string(),
                trainings: vec![training("z-2", true, false), training("z-1", false, true)],
            },
            Module {
                id: ModuleId::new("a"),
                name: "A".to_string(),
                trainings: vec![],
            },
        ];
        let presenter = CatalogPresenter::new(Catalog::new(modules.clone()).unwrap());

        assert_eq!(presenter.list_modules(), modules.as_slice());
    }

    #[test]
    fn test_sections_render_each_training_once_in_order() {
        let sections = presenter().sections();

        let layout: Vec<(&str, Vec<&str>)> = sections
            .iter()
            .map(|s| {
                let ids = s.cards.iter().map(|c| c.training.id.as_str()).collect();
                (s.id.as_str(), ids)
            })
            .collect();

        assert_eq!(
            layout,
            vec![
                ("fire", vec!["fire-1"]),
                ("nr10", vec!["nr10-1", "nr10-2", "nr10-3"]),
            ]
        );
    }

    #[test]
    fn test_sections_keep_duplicate_looking_titles_and_empty_modules() {
        let modules = vec![
            Module {
                id: ModuleId::new("b"),
                name: "B".to_string(),
                trainings: vec![training("b-1", false, false), training("b-2", true, true)],
            },
            Module {
                id: ModuleId::new("empty"),
                name: "Empty".to_string(),
                trainings: vec![],
            },
            Module {
                id: ModuleId::new("a"),
                name: "B".to_string(),
                trainings: vec![training("a-1", false, false)],
            },
        ];
        let presenter = CatalogPresenter::new(Catalog::new(modules).unwrap());
        let sections = presenter.sections();

        let names: Vec<&str> = sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["B", "Empty", "B"]);
        let total: usize = sections.iter().map(|s| s.cards.len()).sum();
        assert_eq!(total, 3);
        assert!(sections[1].cards.is_empty());

        let card = &sections[0].cards[1];
        assert_eq!(card.duration, "15 min");
        assert_eq!(card.completion, "completed");
        assert_eq!(card.affordance, LaunchAffordance::Ready);
    }

    #[test]
    fn test_is_empty() {
        assert!(!presenter().is_empty());
        assert!(CatalogPresenter::new(Catalog::default()).is_empty());
        assert!(CatalogPresenter::new(Catalog::default()).sections().is_empty());
    }

    #[test]
    fn test_format_duration_examples() {
        assert_eq!(CatalogPresenter::format_duration(0), "0 min");
        assert_eq!(CatalogPresenter::format_duration(59), "59 min");
        assert_eq!(CatalogPresenter::format_duration(60), "1h");
        assert_eq!(CatalogPresenter::format_duration(90), "1h 30min");
        assert_eq!(CatalogPresenter::format_duration(125), "2h 5min");
    }

    #[test]
    fn test_completion_label_for_every_seed_item() {
        let presenter = presenter();
        for t in presenter.list_modules().iter().flat_map(|m| m.trainings.iter()) {
            let expected = if t.completed { "completed" } else { "pending" };
            assert_eq!(CatalogPresenter::completion_label(t), expected);
        }
    }

    #[test]
    fn test_launch_affordance_labels() {
        let ready = CatalogPresenter::launch_affordance(&training("r", true, false));
        let not_ready = CatalogPresenter::launch_affordance(&training("n", false, false));

        assert_eq!(ready, LaunchAffordance::Ready);
        assert_eq!(ready.label(), "start training");
        assert_eq!(not_ready, LaunchAffordance::NotReady);
        assert_eq!(not_ready.label(), "coming soon");
    }

    #[test]
    fn test_launch_never_opens_disabled_training() {
        let opener = CountingOpener::default();
        let t = training("n", false, false);

        for _ in 0..5 {
            assert_eq!(CatalogPresenter::launch(&t, &opener), LaunchAffordance::NotReady);
        }

        assert!(opener.opened.borrow().is_empty());
    }

    #[test]
    fn test_launch_opens_enabled_training_once_per_call() {
        let opener = CountingOpener::default();
        let t = training("r", true, false);

        CatalogPresenter::launch(&t, &opener);
        assert_eq!(opener.opened.borrow().len(), 1);

        CatalogPresenter::launch(&t, &opener);
        CatalogPresenter::launch(&t, &opener);
        assert_eq!(opener.opened.borrow().len(), 3);
        assert!(opener.opened.borrow().iter().all(|u| u == "https://example.com/r?a=1&b=2"));
    }

    #[test]
    fn test_logout_navigates_to_gate() {
        let visited = RefCell::new(Vec::new());
        let navigator = |d: Destination| visited.borrow_mut().push(d);

        presenter().logout(&navigator);

        assert_eq!(*visited.borrow(), vec![Destination::CredentialGate]);
    }
}
