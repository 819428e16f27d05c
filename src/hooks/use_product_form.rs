// ============================================================================
// USE PRODUCT FORM HOOK - Estado y flujo del formulario
// ============================================================================
// Hook nativo de Yew - Delega validación y armado del envío al ViewModel
// ============================================================================

use gloo_timers::callback::Timeout;
use web_sys::HtmlFormElement;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::{use_image_previews, use_toast, UseImagePreviewsHandle, UseToastHandle};
use crate::models::{FormMode, Product};
use crate::services::ApiClient;
use crate::utils::{load_session_email, navigate_to};
use crate::viewmodels::{
    plan_submission, submit_outcome, FieldChange, FormFields, SubmitPhase, LOAD_FAILED_MESSAGE,
};

/// Handle del hook
#[derive(Clone)]
pub struct UseProductFormHandle {
    pub mode: FormMode,
    pub fields: UseReducerHandle<FormFields>,
    pub existing: Option<Product>,
    pub loading: bool,
    pub phase: SubmitPhase,
    pub previews: UseImagePreviewsHandle,
    pub toast: UseToastHandle,
    pub update: Callback<FieldChange>,
    pub submit: Callback<SubmitEvent>,
}

#[hook]
pub fn use_product_form(product_id: Option<String>) -> UseProductFormHandle {
    let mode = FormMode::from_id(product_id);
    let fields = use_reducer(FormFields::default);
    let existing = use_state(|| None::<Product>);
    let loading = use_state(|| false);
    let phase = use_state(|| SubmitPhase::Idle);
    let previews = use_image_previews();
    let toast = use_toast();

    // Cargar producto en modo edición (una vez por id)
    {
        let fields = fields.clone();
        let existing = existing.clone();
        let loading = loading.clone();
        let show_toast = toast.show.clone();

        use_effect_with(mode.clone(), move |mode| {
            match mode.product_id().map(str::to_string) {
                Some(id) => {
                    log::info!("✏️ Modo edición: producto {}", id);
                    loading.set(true);
                    wasm_bindgen_futures::spawn_local(async move {
                        match ApiClient::new().get_product(&id).await {
                            Ok(product) => {
                                fields.dispatch(FieldChange::Load(product.clone()));
                                existing.set(Some(product));
                            }
                            Err(e) => {
                                log::error!("❌ Error cargando producto {}: {}", id, e);
                                show_toast.emit(LOAD_FAILED_MESSAGE.to_string());
                            }
                        }
                        loading.set(false);
                    });
                }
                None => log::info!("🆕 Modo creación"),
            }
            || ()
        });
    }

    let update = {
        let fields = fields.clone();
        Callback::from(move |change: FieldChange| fields.dispatch(change))
    };

    let submit = {
        let mode = mode.clone();
        let fields = fields.clone();
        let existing = existing.clone();
        let phase = phase.clone();
        let previews = previews.clone();
        let show_toast = toast.show.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form_element: Option<HtmlFormElement> = e.target_dyn_into();

            // Mismo efecto que el botón deshabilitado
            if !phase.can_begin() {
                log::warn!("⚠️ Envío en curso, se ignora el submit");
                return;
            }

            let draft = fields.to_draft(previews.files.clone());
            let user_email = match mode {
                FormMode::Create => load_session_email(),
                FormMode::Edit { .. } => None,
            };

            let plan = match plan_submission(&draft, &mode, user_email) {
                Ok(plan) => plan,
                Err(err) => {
                    log::warn!("⚠️ Validación fallida: {}", err);
                    let invalid = SubmitPhase::after_validation(&Err(err));
                    if let Some(message) = invalid.toast_message(&mode) {
                        show_toast.emit(message);
                    }
                    phase.set(invalid.settle());
                    return;
                }
            };

            phase.set(SubmitPhase::after_validation(&Ok(())));

            let mode = mode.clone();
            let fields = fields.clone();
            let existing = existing.clone();
            let phase = phase.clone();
            let clear_previews = previews.clear.clone();
            let show_toast = show_toast.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = ApiClient::new().submit(&plan).await;
                match &result {
                    Ok(_) => log::info!("✅ Producto guardado ({:?})", mode),
                    Err(err) => log::error!("❌ Error guardando producto: {}", err),
                }

                let outcome = submit_outcome(&mode, &result, CONFIG.redirect_delay_ms);
                if let Some(message) = outcome.toast {
                    show_toast.emit(message);
                }
                if outcome.reset_fields {
                    fields.dispatch(FieldChange::Reset);
                    // El input de archivos no está controlado por Yew
                    if let Some(form_element) = &form_element {
                        form_element.reset();
                    }
                }
                if outcome.clear_previews {
                    clear_previews.emit(());
                }
                if let Some(product) = outcome.refreshed {
                    existing.set(Some(product));
                }
                phase.set(outcome.phase);

                if let Some(delay) = outcome.redirect_after_ms {
                    Timeout::new(delay, || {
                        navigate_to(&CONFIG.listing_route);
                    })
                    .forget();
                }
            });
        })
    };

    UseProductFormHandle {
        mode,
        fields,
        existing: (*existing).clone(),
        loading: *loading,
        phase: (*phase).clone(),
        previews,
        toast,
        update,
        submit,
    }
}
