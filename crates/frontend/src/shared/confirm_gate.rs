/// Two-step delete: a row's delete button only opens the dialog, and the id
/// leaves the gate once the user confirms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfirmationGate {
    #[default]
    Idle,
    Awaiting {
        id: String,
    },
    Deleting {
        id: String,
    },
}

impl ConfirmationGate {
    /// Open the dialog for `id`. Ignored while another delete is pending.
    pub fn request(&mut self, id: String) -> bool {
        if *self != ConfirmationGate::Idle {
            return false;
        }
        *self = ConfirmationGate::Awaiting { id };
        true
    }

    pub fn decline(&mut self) {
        if let ConfirmationGate::Awaiting { .. } = self {
            *self = ConfirmationGate::Idle;
        }
    }

    /// Yields the id to delete, once
    pub fn confirm(&mut self) -> Option<String> {
        match std::mem::take(self) {
            ConfirmationGate::Awaiting { id } => {
                *self = ConfirmationGate::Deleting { id: id.clone() };
                Some(id)
            }
            other => {
                *self = other;
                None
            }
        }
    }

    pub fn finish(&mut self) {
        *self = ConfirmationGate::Idle;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, ConfirmationGate::Idle)
    }

    pub fn is_deleting(&self) -> bool {
        matches!(self, ConfirmationGate::Deleting { .. })
    }
}
