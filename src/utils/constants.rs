/// Clave de localStorage con el email del usuario logueado (texto plano)
pub const STORAGE_KEY_USER_EMAIL: &str = "userEmail";

/// Ruta de edición: `/edit-product/{id}`
pub const EDIT_ROUTE_PREFIX: &str = "/edit-product/";

/// Parámetro de query alternativo: `?id={id}`
pub const PRODUCT_ID_QUERY_PARAM: &str = "id";

// Partes del multipart
pub const FIELD_NAME: &str = "name";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_PRICE: &str = "price";
pub const FIELD_CATEGORY: &str = "category";
pub const FIELD_USER_EMAIL: &str = "userEmail";
pub const FIELD_IMAGES: &str = "images";
