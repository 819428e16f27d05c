pub mod product_form_viewmodel;
pub mod image_previews;
pub mod toast;

pub use product_form_viewmodel::{
    plan_submission, submit_outcome, validate, FieldChange, FormFields, HttpMethod,
    SubmissionPlan, SubmitOutcome, SubmitPhase, LOAD_FAILED_MESSAGE,
};
pub use image_previews::{ObjectUrlBackend, PreviewBackend, PreviewSet};
pub use toast::{ToastAction, ToastSlot};
