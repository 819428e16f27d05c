use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Categorías que acepta la API (se envían con su nombre en inglés)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
pub enum Category {
    Electronics,
    Clothing,
    Accessories,
}

/// Producto tal y como lo devuelve `GET /api/products/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "price_as_string")]
    pub price: String,
    #[serde(default, deserialize_with = "lenient_category")]
    pub category: Option<Category>,
    /// Rutas relativas al servidor
    #[serde(default)]
    pub images: Vec<String>,
}

/// Campos editables del formulario. `F` es el handle de archivo
/// (`web_sys::File` en el navegador).
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft<F> {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: Option<Category>,
    pub images: Vec<F>,
}

impl<F> Default for ProductDraft<F> {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            category: None,
            images: Vec::new(),
        }
    }
}

impl<F> ProductDraft<F> {
    /// Borrador pre-rellenado desde un producto existente (sin imágenes nuevas)
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.clone(),
            category: product.category,
            images: Vec::new(),
        }
    }
}

/// Crear vs editar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

impl FormMode {
    pub fn from_id(id: Option<String>) -> Self {
        match id {
            Some(id) if !id.trim().is_empty() => FormMode::Edit { id },
            _ => FormMode::Create,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit { .. })
    }

    pub fn product_id(&self) -> Option<&str> {
        match self {
            FormMode::Create => None,
            FormMode::Edit { id } => Some(id.as_str()),
        }
    }
}

// El backend guarda el precio como número, el formulario lo maneja como texto
fn price_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!("precio inválido: {}", other))),
    }
}

// Una categoría desconocida deja el select vacío en lugar de romper la carga
fn lenient_category<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse::<Category>().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn category_round_trips_through_its_name() {
        for category in Category::iter() {
            assert_eq!(category.to_string().parse::<Category>().ok(), Some(category));
        }
        assert!("Furniture".parse::<Category>().is_err());
    }

    #[test]
    fn product_accepts_numeric_price_and_mongo_id() {
        let json = r#"{
            "_id": "42",
            "name": "Lamp",
            "description": "Desk lamp",
            "price": 20,
            "category": "Electronics",
            "images": ["/uploads/lamp.png"]
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "42");
        assert_eq!(product.price, "20");
        assert_eq!(product.category, Some(Category::Electronics));
        assert_eq!(product.images, vec!["/uploads/lamp.png".to_string()]);
    }

    #[test]
    fn unknown_category_loads_as_unselected() {
        let json = r#"{"id":"1","name":"x","description":"y","price":"5","category":"Toys"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.category, None);
        assert!(product.images.is_empty());
    }

    #[test]
    fn draft_from_product_copies_scalar_fields_only() {
        let product = Product {
            id: "7".into(),
            name: "Scarf".into(),
            description: "Wool".into(),
            price: "12.5".into(),
            category: Some(Category::Clothing),
            images: vec!["/a.png".into()],
        };
        let draft: ProductDraft<()> = ProductDraft::from_product(&product);
        assert_eq!(draft.name, "Scarf");
        assert_eq!(draft.price, "12.5");
        assert_eq!(draft.category, Some(Category::Clothing));
        assert!(draft.images.is_empty());
    }

    #[test]
    fn form_mode_from_id() {
        assert_eq!(FormMode::from_id(None), FormMode::Create);
        assert_eq!(FormMode::from_id(Some("  ".into())), FormMode::Create);
        let edit = FormMode::from_id(Some("42".into()));
        assert!(edit.is_edit());
        assert_eq!(edit.product_id(), Some("42"));
    }
}
