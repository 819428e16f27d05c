pub mod use_toast;
pub mod use_image_previews;
pub mod use_product_form;

pub use use_toast::{use_toast, UseToastHandle};
pub use use_image_previews::{use_image_previews, UseImagePreviewsHandle};
pub use use_product_form::{use_product_form, UseProductFormHandle};
