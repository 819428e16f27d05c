// ============================================================================
// USE IMAGE PREVIEWS HOOK - Archivos seleccionados + object URLs
// ============================================================================
// El PreviewSet es dueño de las URLs: se liberan al reemplazar la selección,
// al limpiar y al desmontar el componente.
// ============================================================================

use web_sys::File;
use yew::prelude::*;

use crate::viewmodels::{ObjectUrlBackend, PreviewSet};

#[derive(Clone)]
pub struct UseImagePreviewsHandle {
    pub files: Vec<File>,
    pub urls: Vec<String>,
    pub select: Callback<Vec<File>>,
    pub clear: Callback<()>,
}

#[hook]
pub fn use_image_previews() -> UseImagePreviewsHandle {
    let files = use_state(Vec::<File>::new);
    let urls = use_state(Vec::<String>::new);
    let previews = use_mut_ref(|| PreviewSet::new(ObjectUrlBackend));

    let select = {
        let files = files.clone();
        let urls = urls.clone();
        let previews = previews.clone();
        Callback::from(move |selected: Vec<File>| {
            log::info!("🖼️ {} imágenes seleccionadas", selected.len());
            let handles = previews.borrow_mut().replace(&selected).to_vec();
            urls.set(handles);
            files.set(selected);
        })
    };

    let clear = {
        let files = files.clone();
        let urls = urls.clone();
        let previews = previews.clone();
        Callback::from(move |_| {
            previews.borrow_mut().clear();
            urls.set(Vec::new());
            files.set(Vec::new());
        })
    };

    {
        let previews = previews.clone();
        use_effect_with((), move |_| {
            move || {
                log::info!("🧹 Liberando previsualizaciones (unmount)");
                previews.borrow_mut().clear();
            }
        });
    }

    UseImagePreviewsHandle {
        files: (*files).clone(),
        urls: (*urls).clone(),
        select,
        clear,
    }
}
