use web_sys::{window, UrlSearchParams};

use crate::utils::constants::{EDIT_ROUTE_PREFIX, PRODUCT_ID_QUERY_PARAM};

/// Id del producto en una ruta `/edit-product/{id}`
pub fn edit_path_id(pathname: &str) -> Option<String> {
    let id = pathname.strip_prefix(EDIT_ROUTE_PREFIX)?.trim_end_matches('/');
    if id.is_empty() || id.contains('/') {
        return None;
    }
    Some(id.to_string())
}

/// `?id={id}` decodificado por el navegador (`%20` y `+` pasan a espacio)
pub fn query_product_id(search: &str) -> Option<String> {
    UrlSearchParams::new_with_str(search)
        .ok()?
        .get(PRODUCT_ID_QUERY_PARAM)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Extrae el id del producto de la URL: la ruta manda, la query es el respaldo
pub fn product_id_from_location(pathname: &str, search: &str) -> Option<String> {
    edit_path_id(pathname).or_else(|| query_product_id(search))
}

/// Id del producto en la URL actual del navegador
pub fn current_product_id() -> Option<String> {
    let location = window()?.location();
    let pathname = location.pathname().ok()?;
    let search = location.search().unwrap_or_default();
    product_id_from_location(&pathname, &search)
}

/// Navegación completa (recarga la página)
pub fn navigate_to(route: &str) {
    log::info!("➡️ Navegando a {}", route);
    match window() {
        Some(win) => {
            if let Err(e) = win.location().set_href(route) {
                log::error!("❌ Error navegando a {}: {:?}", route, e);
            }
        }
        None => log::error!("❌ No hay window para navegar"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_path_yields_id() {
        assert_eq!(edit_path_id("/edit-product/42"), Some("42".into()));
        assert_eq!(edit_path_id("/edit-product/42/"), Some("42".into()));
        assert_eq!(
            product_id_from_location("/edit-product/42", "?id=7"),
            Some("42".into())
        );
    }

    #[test]
    fn other_paths_have_no_id() {
        assert_eq!(edit_path_id("/add-product"), None);
        assert_eq!(edit_path_id("/edit-product/"), None);
        assert_eq!(edit_path_id("/edit-product/4/images"), None);
    }
}

// `UrlSearchParams` solo existe en el navegador
#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn query_param_is_a_fallback() {
        assert_eq!(
            product_id_from_location("/product-form", "?tab=1&id=abc"),
            Some("abc".into())
        );
        assert_eq!(product_id_from_location("/", "?id="), None);
        assert_eq!(product_id_from_location("/", ""), None);
    }

    #[wasm_bindgen_test]
    fn query_value_is_decoded() {
        assert_eq!(query_product_id("?id=a%20b"), Some("a b".into()));
        assert_eq!(query_product_id("?id=4+2"), Some("4 2".into()));
    }
}
