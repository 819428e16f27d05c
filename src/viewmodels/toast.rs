// ============================================================================
// TOAST - UN SOLO MENSAJE VISIBLE
// ============================================================================
// Cada mensaje nuevo recibe un ticket. El temporizador de auto-cierre solo
// borra el mensaje si su ticket sigue siendo el actual.
// ============================================================================

use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastSlot {
    pub message: Option<String>,
    pub ticket: u64,
}

pub enum ToastAction {
    Show { ticket: u64, message: String },
    Expire { ticket: u64 },
}

impl ToastSlot {
    pub fn apply(&self, action: ToastAction) -> ToastSlot {
        match action {
            ToastAction::Show { ticket, message } => ToastSlot {
                message: Some(message),
                ticket,
            },
            ToastAction::Expire { ticket } if ticket == self.ticket => ToastSlot {
                message: None,
                ticket,
            },
            // Temporizador de un mensaje ya reemplazado
            ToastAction::Expire { .. } => self.clone(),
        }
    }
}

impl Reducible for ToastSlot {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(ticket: u64, message: &str) -> ToastAction {
        ToastAction::Show {
            ticket,
            message: message.to_string(),
        }
    }

    #[test]
    fn expire_clears_current_message() {
        let slot = ToastSlot::default().apply(show(1, "Saved"));
        assert_eq!(slot.message.as_deref(), Some("Saved"));

        let slot = slot.apply(ToastAction::Expire { ticket: 1 });
        assert_eq!(slot.message, None);
    }

    #[test]
    fn new_message_overwrites_and_ignores_stale_timer() {
        let slot = ToastSlot::default()
            .apply(show(1, "first"))
            .apply(show(2, "second"));
        assert_eq!(slot.message.as_deref(), Some("second"));

        let slot = slot.apply(ToastAction::Expire { ticket: 1 });
        assert_eq!(slot.message.as_deref(), Some("second"));

        let slot = slot.apply(ToastAction::Expire { ticket: 2 });
        assert_eq!(slot.message, None);
    }

    #[test]
    fn reducer_keeps_same_rc_for_stale_expiry() {
        let slot = Rc::new(ToastSlot::default().apply(show(3, "x")));
        let same = slot.clone().reduce(ToastAction::Expire { ticket: 2 });
        assert!(Rc::ptr_eq(&slot, &same));
    }
}
