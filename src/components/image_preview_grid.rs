use yew::prelude::*;

use crate::config::CONFIG;

#[derive(Properties, PartialEq, Clone)]
pub struct ImagePreviewGridProps {
    /// Object URLs de los archivos recién seleccionados
    #[prop_or_default]
    pub previews: Vec<String>,
    /// Rutas relativas de las imágenes ya guardadas (modo edición)
    #[prop_or_default]
    pub existing: Vec<String>,
}

#[function_component(ImagePreviewGrid)]
pub fn image_preview_grid(props: &ImagePreviewGridProps) -> Html {
    // Las imágenes nuevas reemplazan a las guardadas al actualizar
    let showing_new = !props.previews.is_empty();
    if !showing_new && props.existing.is_empty() {
        return html! {};
    }

    let items: Html = if showing_new {
        props
            .previews
            .iter()
            .enumerate()
            .map(|(i, url)| {
                html! {
                    <img key={url.clone()} class="image-preview new" src={url.clone()} alt={format!("Preview {}", i + 1)} />
                }
            })
            .collect()
    } else {
        props
            .existing
            .iter()
            .enumerate()
            .map(|(i, path)| {
                html! {
                    <img key={path.clone()} class="image-preview existing" src={CONFIG.asset_url(path)} alt={format!("Product image {}", i + 1)} />
                }
            })
            .collect()
    };

    html! {
        <div class="image-preview-grid">
            {items}
            if !showing_new {
                <p class="image-preview-hint">{"Current images are kept unless you select new ones."}</p>
            }
        </div>
    }
}
