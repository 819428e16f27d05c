// ============================================================================
// USE TOAST HOOK - Notificación temporal de un solo slot
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::viewmodels::{ToastAction, ToastSlot};

#[derive(Clone)]
pub struct UseToastHandle {
    pub message: Option<String>,
    pub show: Callback<String>,
}

#[hook]
pub fn use_toast() -> UseToastHandle {
    let slot = use_reducer(ToastSlot::default);
    let next_ticket = use_mut_ref(|| 0u64);
    let timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    let show = {
        let dispatcher = slot.dispatcher();
        let next_ticket = next_ticket.clone();
        let timer = timer.clone();
        Callback::from(move |message: String| {
            let ticket = {
                let mut next = next_ticket.borrow_mut();
                *next += 1;
                *next
            };
            log::info!("🔔 Toast: {}", message);
            dispatcher.dispatch(ToastAction::Show { ticket, message });

            // Reemplazar el Timeout anterior lo cancela
            let expire = dispatcher.clone();
            *timer.borrow_mut() = Some(Timeout::new(CONFIG.toast_duration_ms, move || {
                expire.dispatch(ToastAction::Expire { ticket });
            }));
        })
    };

    // Cancelar el temporizador pendiente al desmontar
    {
        let timer = timer.clone();
        use_effect_with((), move |_| {
            move || {
                timer.borrow_mut().take();
            }
        });
    }

    UseToastHandle {
        message: slot.message.clone(),
        show,
    }
}
