use super::api;
use super::record_form::RecordForm;
use super::state::SheetSession;
use crate::shared::config::AppConfig;
use crate::shared::confirm::ConfirmSlot;
use crate::shared::gateway::{GatewayClient, GatewayError};
use crate::shared::modal_frame::{ModalPhase, ModalState};
use crate::shared::notifications::Notifications;
use contracts::gateway::{MutationOutcome, MutationRequest};
use contracts::sheets::RowIndex;
use leptos::prelude::*;
use std::sync::Arc;
use thiserror::Error;

pub const DELETE_CONFIRM_MESSAGE: &str =
    "Are you sure you want to delete this record? This action cannot be undone.";
const SAVED_MESSAGE: &str = "Operation completed.";
const DELETED_MESSAGE: &str = "Record deleted.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkspaceError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error("Gateway endpoint is not configured: open the page with ?endpoint=<url> or build with SHEET_CONSOLE_ENDPOINT set")]
    EndpointNotConfigured,
    #[error("No sheet is selected")]
    NoActiveSheet,
    #[error("Record not found: {0}")]
    RecordNotFound(RowIndex),
    #[error("Field \"{0}\" is required")]
    MissingField(String),
    #[error("No record form is open")]
    NoOpenForm,
}

/// What the confirmation dialog will do when the user answers OK
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmIntent {
    DeleteRow(RowIndex),
}

/// Controller of the sheet console.
///
/// Every public operation reports its own failure as an error toast and
/// also returns it. Operations that talk to the gateway finish applying the
/// response before they return.
#[derive(Clone)]
pub struct SheetWorkspace {
    pub session: RwSignal<SheetSession>,
    pub record_form: RwSignal<Option<RecordForm>>,
    pub form_modal: ModalState,
    pub confirm_modal: ModalState,
    pub confirmation: RwSignal<ConfirmSlot<ConfirmIntent>>,
    pub notifications: Notifications,
    gateway: Option<GatewayClient>,
    config: Arc<AppConfig>,
}

impl SheetWorkspace {
    pub fn new(config: Arc<AppConfig>, gateway: Option<GatewayClient>, notifications: Notifications) -> Self {
        Self {
            session: RwSignal::new(SheetSession::default()),
            record_form: RwSignal::new(None),
            form_modal: ModalState::new(),
            confirm_modal: ModalState::new(),
            confirmation: RwSignal::new(ConfirmSlot::default()),
            notifications,
            gateway,
            config,
        }
    }

    fn gateway(&self) -> Result<&GatewayClient, WorkspaceError> {
        self.gateway.as_ref().ok_or(WorkspaceError::EndpointNotConfigured)
    }

    fn active_sheet(&self) -> Result<String, WorkspaceError> {
        self.session
            .with_untracked(|s| s.active.clone())
            .ok_or(WorkspaceError::NoActiveSheet)
    }

    fn reported<T>(&self, result: Result<T, WorkspaceError>) -> Result<T, WorkspaceError> {
        if let Err(e) = &result {
            // gateway failures are already logged by the client
            if !matches!(e, WorkspaceError::Gateway(_)) {
                log::warn!("{}", e);
            }
            self.notifications.error(e.to_string());
        }
        result
    }

    // ---- sheets ----

    pub async fn load_sheet_names(&self) -> Result<(), WorkspaceError> {
        let result = self.load_sheet_names_inner().await;
        self.reported(result)
    }

    async fn load_sheet_names_inner(&self) -> Result<(), WorkspaceError> {
        let names = api::fetch_sheet_names(self.gateway()?).await?;
        log::info!("Gateway lists {} sheet(s)", names.len());
        let first = self.session.write().set_sheet_names(names);
        match first {
            Some(first) => self.load_sheet_inner(&first).await,
            None => Ok(()),
        }
    }

    /// Activates `name` and re-fetches it, even if it was already active.
    pub async fn select_sheet(&self, name: String) -> Result<(), WorkspaceError> {
        if !self.session.write().activate(&name) {
            log::warn!("Ignoring unknown sheet '{}'", name);
            return Ok(());
        }
        let result = self.load_sheet_inner(&name).await;
        self.reported(result)
    }

    pub async fn reload_active(&self) -> Result<(), WorkspaceError> {
        let result = match self.active_sheet() {
            Ok(sheet) => self.load_sheet_inner(&sheet).await,
            Err(e) => Err(e),
        };
        self.reported(result)
    }

    async fn load_sheet_inner(&self, name: &str) -> Result<(), WorkspaceError> {
        let gateway = self.gateway()?;
        let ticket = self.session.write().begin_load(name);
        match api::fetch_sheet_data(gateway, name).await {
            Ok(data) => {
                let rows = data.rows.len();
                if self.session.write().apply_data(&ticket, data) {
                    log::debug!("Loaded {} row(s) of '{}'", rows, name);
                } else {
                    log::debug!("Dropped stale response for '{}'", name);
                }
                Ok(())
            }
            Err(e) => {
                self.session.write().clear_data(&ticket);
                Err(e.into())
            }
        }
    }

    // ---- record form ----

    pub fn open_create_form(&self) -> Result<(), WorkspaceError> {
        let result = self.active_sheet().map(|_| {
            let form = self
                .session
                .with_untracked(|s| RecordForm::for_create(&s.headers, &self.config));
            self.show_form(form);
        });
        self.reported(result)
    }

    pub fn open_edit_form(&self, row_index: RowIndex) -> Result<(), WorkspaceError> {
        let form = self.session.with_untracked(|s| {
            s.find_row(&row_index)
                .map(|row| RecordForm::for_edit(&s.headers, row, &self.config))
        });
        let result = match form {
            Some(form) => {
                self.show_form(form);
                Ok(())
            }
            None => Err(WorkspaceError::RecordNotFound(row_index)),
        };
        self.reported(result)
    }

    fn show_form(&self, form: RecordForm) {
        self.record_form.set(Some(form));
        self.form_modal.open();
    }

    pub fn set_field(&self, position: usize, value: String) {
        self.record_form.update(|form| {
            if let Some(form) = form {
                form.set_value(position, value);
            }
        });
    }

    pub fn close_form(&self) {
        self.form_modal.close();
    }

    /// The close fade finished; the pending edit is discarded.
    pub fn form_hidden(&self) {
        self.record_form.set(None);
    }

    pub async fn submit_form(&self) -> Result<(), WorkspaceError> {
        let result = self.submit_form_inner().await;
        self.reported(result)
    }

    async fn submit_form_inner(&self) -> Result<(), WorkspaceError> {
        let form = self
            .record_form
            .get_untracked()
            .ok_or(WorkspaceError::NoOpenForm)?;
        if let Some(missing) = form.first_missing() {
            return Err(WorkspaceError::MissingField(missing.header.clone()));
        }
        let sheet = self.active_sheet()?;

        let outcome = api::submit_mutation(self.gateway()?, &form.to_request(&sheet)).await?;
        self.announce(outcome, SAVED_MESSAGE);
        self.close_form();

        let active = self.active_sheet()?;
        self.load_sheet_inner(&active).await
    }

    // ---- delete confirmation ----

    /// Asks for confirmation; any earlier unanswered request is dropped.
    pub fn request_delete(&self, row_index: RowIndex) {
        self.confirmation.update(|slot| {
            slot.bind(DELETE_CONFIRM_MESSAGE, ConfirmIntent::DeleteRow(row_index));
        });
        self.confirm_modal.open();
    }

    pub async fn confirm(&self) -> Result<(), WorkspaceError> {
        let intent = self.confirmation.try_update(|slot| slot.take()).flatten();
        self.confirm_modal.close();
        let result = match intent {
            Some(ConfirmIntent::DeleteRow(row_index)) => self.delete_row_inner(row_index).await,
            None => Ok(()),
        };
        self.reported(result)
    }

    pub fn cancel_confirm(&self) {
        self.confirmation.update(|slot| slot.clear());
        self.confirm_modal.close();
    }

    async fn delete_row_inner(&self, row_index: RowIndex) -> Result<(), WorkspaceError> {
        let sheet = self.active_sheet()?;
        let request = MutationRequest::delete(&sheet, row_index);
        let outcome = api::submit_mutation(self.gateway()?, &request).await?;
        self.announce(outcome, DELETED_MESSAGE);

        let active = self.active_sheet()?;
        self.load_sheet_inner(&active).await
    }

    fn announce(&self, outcome: MutationOutcome, fallback: &str) {
        let message = outcome
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());
        self.notifications.success(message);
    }

    /// Escape closes the topmost modal only.
    pub fn handle_escape(&self) {
        if self.confirm_modal.phase() != ModalPhase::Closed {
            self.cancel_confirm();
        } else if self.form_modal.phase() != ModalPhase::Closed {
            self.close_form();
        }
    }
}
