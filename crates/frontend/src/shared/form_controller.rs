//! Add/edit form state machine, shared by every entity.
//!
//! Validation runs synchronously in `submit`; a form with errors never produces
//! a payload, so no request can be sent for it.

use contracts::shared::entity::EntityResource;
use contracts::shared::validation::{FieldErrors, FormMode, FormModel};

use crate::shared::api::{ApiAction, ApiError};

/// Pause between the success banner and navigating back to the list
pub const SUCCESS_REDIRECT_DELAY_MS: u32 = 1200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    /// Edit form waiting for the entity to arrive
    Loading,
    Idle,
    Submitting,
    Success(String),
    Failed(String),
}

/// What the screen has to do after `reset`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetAction {
    Cleared,
    /// Re-fetch the entity and `load` it again
    Reload(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Submission<F> {
    pub mode: FormMode,
    pub payload: F,
}

pub struct FormController<E: EntityResource> {
    mode: FormMode,
    fields: E::Form,
    errors: FieldErrors,
    status: FormStatus,
}

impl<E: EntityResource> Clone for FormController<E> {
    fn clone(&self) -> Self {
        Self {
            mode: self.mode.clone(),
            fields: self.fields.clone(),
            errors: self.errors.clone(),
            status: self.status.clone(),
        }
    }
}

impl<E: EntityResource> FormController<E> {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            fields: E::Form::default(),
            errors: FieldErrors::new(),
            status: FormStatus::Idle,
        }
    }

    pub fn update(id: impl Into<String>) -> Self {
        Self {
            mode: FormMode::Update { id: id.into() },
            fields: E::Form::default(),
            errors: FieldErrors::new(),
            status: FormStatus::Loading,
        }
    }

    pub fn for_mode(mode: FormMode) -> Self {
        match mode {
            FormMode::Create => Self::create(),
            FormMode::Update { id } => Self::update(id),
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn fields(&self) -> &E::Form {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Inputs are disabled while loading or saving
    pub fn is_busy(&self) -> bool {
        matches!(self.status, FormStatus::Loading | FormStatus::Submitting)
    }

    /// Apply a user edit. Errors stay until the next submit or reset.
    pub fn edit(&mut self, change: impl FnOnce(&mut E::Form)) {
        change(&mut self.fields);
    }

    pub fn load(&mut self, fields: E::Form) {
        self.fields = fields;
        self.status = FormStatus::Idle;
    }

    pub fn load_failed(&mut self, err: &ApiError) {
        self.status = FormStatus::Failed(err.user_message(ApiAction::Load, E::SINGULAR));
    }

    /// Busy, or saved and waiting for the redirect
    pub fn is_locked(&self) -> bool {
        self.is_busy() || matches!(self.status, FormStatus::Success(_))
    }

    /// Validate; on success move to `Submitting` and hand out the payload.
    pub fn submit(&mut self) -> Option<Submission<E::Form>> {
        if self.is_locked() {
            return None;
        }
        self.errors = self.fields.validate(&self.mode);
        if !self.errors.is_empty() {
            log::debug!(
                "{} form rejected: {} field error(s)",
                E::SINGULAR,
                self.errors.len()
            );
            self.status = FormStatus::Idle;
            return None;
        }
        self.status = FormStatus::Submitting;
        Some(Submission {
            mode: self.mode.clone(),
            payload: self.fields.clone(),
        })
    }

    pub fn finish(&mut self, result: Result<(), ApiError>) {
        let action = if self.mode.is_create() {
            ApiAction::Create
        } else {
            ApiAction::Update
        };
        self.status = match result {
            Ok(()) => FormStatus::Success(self.success_message()),
            Err(err) => FormStatus::Failed(err.user_message(action, E::SINGULAR)),
        };
    }

    pub fn reset(&mut self) -> ResetAction {
        self.errors = FieldErrors::new();
        match &self.mode {
            FormMode::Create => {
                self.fields = E::Form::default();
                self.status = FormStatus::Idle;
                ResetAction::Cleared
            }
            FormMode::Update { id } => {
                self.status = FormStatus::Loading;
                ResetAction::Reload(id.clone())
            }
        }
    }

    fn success_message(&self) -> String {
        let verb = if self.mode.is_create() { "added" } else { "updated" };
        let mut noun = E::SINGULAR.to_string();
        if let Some(first) = noun.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        format!("{} {} successfully.", noun, verb)
    }
}
