//! The "generate keys" dialog: owns one [`KeyConfigurationForm`] per
//! activation and hands the finished configuration to its caller.
//!
//! ```text
//!   Closed --open--> Open --confirm (complete)--> Closed   save + toggle_dialog
//!                    Open --cancel--------------> Closed   toggle_dialog
//! ```

use tracing::{debug, field, info, instrument, warn};

use crate::{
    capability::Disablement,
    form::{Field, FormMode, KeyConfigurationForm},
    format::{FormatRegistry, ServerInfo},
    infrastructure::logging::record_field,
    types::KeyStoreConfig,
};

/// Callbacks the caller supplies to receive the dialog's results.
pub trait DialogCallbacks {
    /// Receives the finished configuration. Called at most once per
    /// activation, and only on confirm. The dialog does not wait for or
    /// observe the outcome of whatever the caller does with it; reporting a
    /// failed save is up to the caller.
    fn save(&mut self, config: KeyStoreConfig);

    /// Called exactly once when an activation ends, after `save` on confirm
    /// and on its own on cancel.
    fn toggle_dialog(&mut self);
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    Opened,
    /// The dialog was already open; the form in progress is kept.
    AlreadyOpen,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Confirmed,
    /// The form was incomplete. Nothing was saved and the dialog stays open.
    Rejected { missing: Vec<Field> },
    NotOpen,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CancelOutcome {
    Cancelled,
    NotOpen,
}

/// State of the dialog's submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    disabled_by: Option<Disablement>,
}

impl SubmitControl {
    pub fn is_enabled(&self) -> bool {
        self.disabled_by.is_none()
    }

    pub fn disabled_by(&self) -> Option<&Disablement> {
        self.disabled_by.as_ref()
    }
}

#[derive(Debug)]
enum DialogState {
    Closed,
    Open(KeyConfigurationForm),
}

/// Dialog capturing a [`KeyStoreConfig`] for one client.
#[derive(Debug)]
pub struct KeyConfigurationDialog<C> {
    client_id: String,
    mode: FormMode,
    registry: FormatRegistry,
    callbacks: C,
    state: DialogState,
}

impl<C: DialogCallbacks> KeyConfigurationDialog<C> {
    /// A closed dialog for `client_id`. `advertised` is the list of formats
    /// known so far; it may be empty until server info has loaded.
    pub fn new(
        client_id: impl Into<String>,
        mode: FormMode,
        advertised: Vec<String>,
        callbacks: C,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            mode,
            registry: FormatRegistry::new(mode.has_pem).with_advertised(advertised),
            callbacks,
            state: DialogState::Closed,
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    pub fn callbacks(&self) -> &C {
        &self.callbacks
    }

    pub fn callbacks_mut(&mut self) -> &mut C {
        &mut self.callbacks
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, DialogState::Open(_))
    }

    pub fn form(&self) -> Option<&KeyConfigurationForm> {
        match &self.state {
            DialogState::Open(form) => Some(form),
            DialogState::Closed => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut KeyConfigurationForm> {
        match &mut self.state {
            DialogState::Open(form) => Some(form),
            DialogState::Closed => None,
        }
    }

    /// Open the dialog with a fresh form seeded with the client id as key
    /// alias. Opening an open dialog changes nothing.
    #[instrument(skip_all, fields(client_id = %self.client_id))]
    pub fn open(&mut self) -> OpenOutcome {
        if self.is_open() {
            debug!("Dialog already open, keeping the form in progress.");
            return OpenOutcome::AlreadyOpen;
        }

        let form = KeyConfigurationForm::new(self.mode, &self.client_id, self.registry.offered());
        info!("Opened key configuration dialog.");
        self.state = DialogState::Open(form);
        OpenOutcome::Opened
    }

    /// Server info finished loading. Updates the offered formats, including
    /// those of an open form.
    pub fn on_server_info_loaded(&mut self, server_info: &ServerInfo) {
        self.registry.load(server_info);
        let offered = self.registry.offered();
        if let Some(form) = self.form_mut() {
            form.on_formats_loaded(offered);
        }
    }

    /// The submit button's state, or `None` while the dialog is closed.
    pub fn submit_control(&self) -> Option<SubmitControl> {
        let missing = self.form()?.missing_fields();
        let disabled_by = (!missing.is_empty()).then_some(Disablement::Incomplete { missing });
        Some(SubmitControl { disabled_by })
    }

    /// Hand the configuration to [`DialogCallbacks::save`] and close.
    ///
    /// Completeness is checked again here, whatever state the submit button
    /// was last rendered in.
    #[instrument(skip_all, fields(client_id = %self.client_id, format = field::Empty))]
    pub fn confirm(&mut self) -> ConfirmOutcome {
        let form = match std::mem::replace(&mut self.state, DialogState::Closed) {
            DialogState::Closed => {
                debug!("Confirm requested while the dialog is closed.");
                return ConfirmOutcome::NotOpen;
            }
            DialogState::Open(form) => form,
        };
        if let Some(format) = form.format() {
            record_field("format", format);
        }

        match form.into_config() {
            Ok(config) => {
                info!("Key store configuration confirmed.");
                self.callbacks.save(config);
                self.callbacks.toggle_dialog();
                ConfirmOutcome::Confirmed
            }
            Err(form) => {
                let missing = form.missing_fields();
                warn!("Rejected confirm of incomplete form. Missing: {:?}", missing);
                self.state = DialogState::Open(form);
                ConfirmOutcome::Rejected { missing }
            }
        }
    }

    /// Discard the form and close without saving.
    #[instrument(skip_all, fields(client_id = %self.client_id))]
    pub fn cancel(&mut self) -> CancelOutcome {
        match std::mem::replace(&mut self.state, DialogState::Closed) {
            DialogState::Closed => CancelOutcome::NotOpen,
            DialogState::Open(_) => {
                info!("Key configuration dialog cancelled.");
                self.callbacks.toggle_dialog();
                CancelOutcome::Cancelled
            }
        }
    }
}
