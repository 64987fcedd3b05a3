//! Settings page controller
//!
//! Tracks the form, saves through the codec and gates the start button.

use crate::persistence;
use crate::platform::storage::KeyValueStore;
use crate::settings::{Avatar, Difficulty, Settings, Theme};

/// Form validation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// A required field is missing
    Unvalidated,
    /// All fields filled, not yet saved (or edited since)
    Valid,
    /// The stored record matches the form
    Saved,
}

/// Raw form contents; any field may be unset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    pub name: String,
    pub avatar: Option<Avatar>,
    pub difficulty: Option<Difficulty>,
    pub theme: Option<Theme>,
}

impl Default for SettingsForm {
    /// Matches the page's initial markup: difficulty and theme preselected
    fn default() -> Self {
        Self {
            name: String::new(),
            avatar: None,
            difficulty: Some(Difficulty::default()),
            theme: Some(Theme::default()),
        }
    }
}

impl SettingsForm {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            name: settings.name.clone(),
            avatar: Some(settings.avatar),
            difficulty: Some(settings.difficulty),
            theme: Some(settings.theme),
        }
    }

    /// The record this form describes, if complete
    pub fn to_settings(&self) -> Option<Settings> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        Some(Settings::new(name, self.avatar?, self.difficulty?, self.theme?))
    }
}

/// Settings page state
pub struct SetupPage<S: KeyValueStore> {
    store: S,
    form: SettingsForm,
    saved: Option<Settings>,
}

impl<S: KeyValueStore> SetupPage<S> {
    /// Open the page, pre-filling the form from stored settings
    pub fn new(store: S) -> Self {
        let saved = persistence::load_settings(&store);
        let form = saved
            .as_ref()
            .map(SettingsForm::from_settings)
            .unwrap_or_default();
        if let Some(settings) = &saved {
            log::info!("Settings page restored for {}", settings.name);
        }
        Self { store, form, saved }
    }

    pub fn form(&self) -> &SettingsForm {
        &self.form
    }

    /// Replace the whole form (the DOM layer re-reads every input)
    pub fn set_form(&mut self, form: SettingsForm) {
        self.form = form;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    pub fn set_avatar(&mut self, avatar: Avatar) {
        self.form.avatar = Some(avatar);
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.form.difficulty = Some(difficulty);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.form.theme = Some(theme);
    }

    pub fn form_state(&self) -> FormState {
        match self.form.to_settings() {
            None => FormState::Unvalidated,
            Some(settings) if self.saved.as_ref() == Some(&settings) => FormState::Saved,
            Some(_) => FormState::Valid,
        }
    }

    /// Save the form; does nothing unless the form is complete
    pub fn save(&mut self) -> Option<&Settings> {
        let Some(settings) = self.form.to_settings() else {
            log::warn!("Save ignored: settings form incomplete");
            return None;
        };
        if !persistence::save_settings(&mut self.store, &settings) {
            return None;
        }
        self.saved = Some(settings);
        self.saved.as_ref()
    }

    /// Last saved or loaded record
    pub fn saved(&self) -> Option<&Settings> {
        self.saved.as_ref()
    }

    /// Greeting derived from the saved record
    pub fn greeting(&self) -> Option<String> {
        self.saved.as_ref().map(Settings::greeting)
    }

    /// Body class derived from the saved record
    pub fn theme_class(&self) -> &'static str {
        self.saved
            .as_ref()
            .map(|s| s.theme)
            .unwrap_or_default()
            .body_class()
    }

    pub fn can_start(&self) -> bool {
        self.form_state() != FormState::Unvalidated && self.saved.is_some()
    }

    /// Settings to start the game with, if starting is allowed
    pub fn start(&self) -> Option<&Settings> {
        if !self.can_start() {
            return None;
        }
        let settings = self.saved.as_ref()?;
        log::info!("Starting game for {} ({})", settings.name, settings.difficulty.as_str());
        Some(settings)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
