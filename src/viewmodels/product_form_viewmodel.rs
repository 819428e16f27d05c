// ============================================================================
// PRODUCT FORM VIEWMODEL - LÓGICA DEL FORMULARIO
// ============================================================================
// Validación, construcción del plan multipart y máquina de estados del
// envío. Sin DOM ni red: el hook decide cuándo llamar a la API.
// ============================================================================

use std::rc::Rc;
use yew::Reducible;

use crate::errors::{ApiError, ValidationError};
use crate::models::{Category, FormMode, Product, ProductDraft};
use crate::utils::constants::{
    FIELD_CATEGORY, FIELD_DESCRIPTION, FIELD_IMAGES, FIELD_NAME, FIELD_PRICE, FIELD_USER_EMAIL,
};

pub const CREATED_MESSAGE: &str = "Product created successfully!";
pub const UPDATED_MESSAGE: &str = "Product updated successfully!";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load product details";

/// Campos escalares del formulario (las imágenes viven en el hook de previews)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: Option<Category>,
}

pub enum FieldChange {
    Name(String),
    Description(String),
    Price(String),
    Category(Option<Category>),
    Load(Product),
    Reset,
}

impl FormFields {
    pub fn apply(&self, change: FieldChange) -> FormFields {
        let mut next = self.clone();
        match change {
            FieldChange::Name(v) => next.name = v,
            FieldChange::Description(v) => next.description = v,
            FieldChange::Price(v) => next.price = v,
            FieldChange::Category(c) => next.category = c,
            FieldChange::Load(product) => {
                let draft: ProductDraft<()> = ProductDraft::from_product(&product);
                next = FormFields {
                    name: draft.name,
                    description: draft.description,
                    price: draft.price,
                    category: draft.category,
                };
            }
            FieldChange::Reset => next = FormFields::default(),
        }
        next
    }

    pub fn to_draft<F>(&self, images: Vec<F>) -> ProductDraft<F> {
        ProductDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price.clone(),
            category: self.category,
            images,
        }
    }
}

impl Reducible for FormFields {
    type Action = FieldChange;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Post,
    Put,
}

/// Lo que se va a enviar: método, ruta y partes del multipart
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionPlan<F> {
    pub method: HttpMethod,
    pub path: String,
    pub fields: Vec<(&'static str, String)>,
    pub images: Vec<F>,
}

impl<F> SubmissionPlan<F> {
    /// Partes del multipart (una por campo y una por imagen)
    pub fn part_count(&self) -> usize {
        self.fields.len() + self.images.len()
    }

    pub fn part_names(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .map(|(name, _)| *name)
            .chain(self.images.iter().map(|_| FIELD_IMAGES))
            .collect()
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Presencia de los campos requeridos; imágenes solo al crear
pub fn validate<F>(draft: &ProductDraft<F>, mode: &FormMode) -> Result<(), ValidationError> {
    let blank = |s: &str| s.trim().is_empty();

    if blank(&draft.name) || blank(&draft.description) || blank(&draft.price) || draft.category.is_none() {
        return Err(ValidationError::MissingFields);
    }

    if !mode.is_edit() && draft.images.is_empty() {
        return Err(ValidationError::MissingImages);
    }

    Ok(())
}

/// Valida y arma el plan. Si falla, no hay petición que hacer.
pub fn plan_submission<F: Clone>(
    draft: &ProductDraft<F>,
    mode: &FormMode,
    user_email: Option<String>,
) -> Result<SubmissionPlan<F>, ValidationError> {
    validate(draft, mode)?;

    let category = draft
        .category
        .map(|c| c.to_string())
        .ok_or(ValidationError::MissingFields)?;

    let mut fields = vec![
        (FIELD_NAME, draft.name.clone()),
        (FIELD_DESCRIPTION, draft.description.clone()),
        (FIELD_PRICE, draft.price.clone()),
        (FIELD_CATEGORY, category),
    ];

    let (method, path) = match mode {
        FormMode::Create => {
            // Sin sesión guardada no se manda el campo
            if let Some(email) = user_email.filter(|e| !e.trim().is_empty()) {
                fields.push((FIELD_USER_EMAIL, email));
            }
            (HttpMethod::Post, "/api/products/create".to_string())
        }
        FormMode::Edit { id } => (HttpMethod::Put, format!("/api/products/update/{}", id)),
    };

    Ok(SubmissionPlan {
        method,
        path,
        fields,
        images: draft.images.clone(),
    })
}

/// Estados del envío. La validación es síncrona dentro del evento submit,
/// así que de `Idle` se pasa directo a `Invalid` o `Submitting`.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitPhase {
    Idle,
    Invalid(ValidationError),
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmitPhase {
    /// El botón de envío se deshabilita mientras hay una petición en curso
    pub fn is_busy(&self) -> bool {
        matches!(self, SubmitPhase::Submitting | SubmitPhase::Succeeded)
    }

    /// Un submit nuevo solo se acepta fuera de vuelo
    pub fn can_begin(&self) -> bool {
        !self.is_busy()
    }

    pub fn after_validation(result: &Result<(), ValidationError>) -> SubmitPhase {
        match result {
            Ok(()) => SubmitPhase::Submitting,
            Err(e) => SubmitPhase::Invalid(e.clone()),
        }
    }

    pub fn after_request<T>(result: &Result<T, ApiError>) -> SubmitPhase {
        match result {
            Ok(_) => SubmitPhase::Succeeded,
            Err(e) => SubmitPhase::Failed(e.user_message()),
        }
    }

    /// Mensaje para el toast en los estados terminales
    pub fn toast_message(&self, mode: &FormMode) -> Option<String> {
        match self {
            SubmitPhase::Invalid(e) => Some(e.to_string()),
            SubmitPhase::Failed(message) => Some(message.clone()),
            SubmitPhase::Succeeded => Some(success_message(mode).to_string()),
            _ => None,
        }
    }

    /// Invalid y Failed vuelven a Idle en cuanto se muestra el mensaje
    pub fn settle(self) -> SubmitPhase {
        match self {
            SubmitPhase::Invalid(_) | SubmitPhase::Failed(_) => SubmitPhase::Idle,
            other => other,
        }
    }
}

pub fn success_message(mode: &FormMode) -> &'static str {
    if mode.is_edit() {
        UPDATED_MESSAGE
    } else {
        CREATED_MESSAGE
    }
}

/// Qué hacer con la respuesta del servidor; el hook solo lo ejecuta
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub phase: SubmitPhase,
    pub toast: Option<String>,
    pub reset_fields: bool,
    pub clear_previews: bool,
    /// Producto devuelto por un update, para refrescar las imágenes existentes
    pub refreshed: Option<Product>,
    pub redirect_after_ms: Option<u32>,
}

pub fn submit_outcome(
    mode: &FormMode,
    result: &Result<Option<Product>, ApiError>,
    redirect_delay_ms: u32,
) -> SubmitOutcome {
    let phase = SubmitPhase::after_request(result);
    let toast = phase.toast_message(mode);

    match result {
        Ok(saved) => {
            // Solo al crear se limpia el formulario
            let reset = !mode.is_edit();
            SubmitOutcome {
                phase,
                toast,
                reset_fields: reset,
                clear_previews: reset,
                refreshed: if reset { None } else { saved.clone() },
                redirect_after_ms: Some(redirect_delay_ms),
            }
        }
        Err(_) => SubmitOutcome {
            phase: phase.settle(),
            toast,
            reset_fields: false,
            clear_previews: false,
            refreshed: None,
            redirect_after_ms: None,
        },
    }
}
