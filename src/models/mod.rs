pub mod product;

pub use product::{Category, FormMode, Product, ProductDraft};
