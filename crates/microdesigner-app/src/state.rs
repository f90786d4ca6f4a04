//! Application state (Model in TEA pattern)

use microdesigner_core::{ServiceCatalog, ServiceRecord};

use crate::config::Settings;
use crate::message::DetailsAction;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Board with toolbox and canvas, nothing selected
    #[default]
    Board,

    /// Command bar has keyboard focus
    CommandInput,

    /// Details modal for the selected service
    ServiceDetails,
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current UI mode
    pub ui_mode: UiMode,

    /// Loaded settings
    pub settings: Settings,

    /// Fixed service records
    catalog: ServiceCatalog,

    /// Index into `catalog` of the service whose details are shown
    selected: Option<usize>,

    /// Index into `catalog` of the card with keyboard focus
    focused: usize,

    /// Focused button in the details modal
    pub focused_action: DetailsAction,

    /// Text typed into the command bar (never executed)
    pub command_input: String,

    quitting: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let catalog = ServiceCatalog::sample();
        let focused = settings
            .behavior
            .initial_focus
            .as_deref()
            .and_then(|id| catalog.index_of(id))
            .unwrap_or(0);

        Self {
            ui_mode: UiMode::Board,
            settings,
            catalog,
            selected: None,
            focused,
            focused_action: DetailsAction::default(),
            command_input: String::new(),
            quitting: false,
        }
    }

    pub fn catalog(&self) -> &ServiceCatalog {
        &self.catalog
    }

    /// The service whose details modal is shown, if any
    pub fn selected_service(&self) -> Option<&ServiceRecord> {
        self.selected.and_then(|index| self.catalog.get(index))
    }

    /// The card with keyboard focus
    pub fn focused_service(&self) -> Option<&ServiceRecord> {
        self.catalog.get(self.focused)
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.focused_service().is_some_and(|s| s.id == id)
    }

    /// Show details for the service with `id`.
    ///
    /// Returns `false` (and changes nothing) when the id is not in the
    /// catalog. Selecting the already-selected service is a no-op.
    pub fn select_service(&mut self, id: &str) -> bool {
        let Some(index) = self.catalog.index_of(id) else {
            return false;
        };

        if self.selected != Some(index) {
            self.selected = Some(index);
            self.focused_action = DetailsAction::default();
        }
        self.focused = index;
        self.ui_mode = UiMode::ServiceDetails;
        true
    }

    /// Dismiss the details modal
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.focused_action = DetailsAction::default();
        self.ui_mode = UiMode::Board;
    }

    pub fn focus_next_service(&mut self) {
        if !self.catalog.is_empty() {
            self.focused = (self.focused + 1) % self.catalog.len();
        }
    }

    pub fn focus_previous_service(&mut self) {
        if !self.catalog.is_empty() {
            self.focused = (self.focused + self.catalog.len() - 1) % self.catalog.len();
        }
    }

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }
}
