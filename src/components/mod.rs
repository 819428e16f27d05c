pub mod app;
pub mod image_preview_grid;
pub mod product_form;
pub mod toast;

pub use app::App;
pub use image_preview_grid::ImagePreviewGrid;
pub use product_form::ProductFormView;
pub use toast::Toast;
