// ============================================================================
// IMAGE PREVIEWS - HANDLES LOCALES DE ARCHIVOS SELECCIONADOS
// ============================================================================
// Cada archivo seleccionado recibe una object URL para mostrarlo antes de
// subirlo. Las URLs anteriores se liberan siempre que la lista se reemplaza,
// se limpia o el set se destruye (unmount).
// ============================================================================

/// Backend que crea y libera handles de previsualización
pub trait PreviewBackend {
    type Source;

    fn create(&self, source: &Self::Source) -> Result<String, String>;

    fn release(&self, handle: &str);
}

/// Dueño de los handles vivos
pub struct PreviewSet<B: PreviewBackend> {
    backend: B,
    handles: Vec<String>,
}

impl<B: PreviewBackend> PreviewSet<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            handles: Vec::new(),
        }
    }

    /// Libera los handles actuales y crea uno por archivo
    pub fn replace(&mut self, sources: &[B::Source]) -> &[String] {
        self.clear();
        for source in sources {
            match self.backend.create(source) {
                Ok(handle) => self.handles.push(handle),
                Err(e) => log::warn!("⚠️ No se pudo crear la previsualización: {}", e),
            }
        }
        log::info!("🖼️ {} previsualizaciones activas", self.handles.len());
        &self.handles
    }

    pub fn clear(&mut self) {
        for handle in self.handles.drain(..) {
            self.backend.release(&handle);
        }
    }

    pub fn handles(&self) -> &[String] {
        &self.handles
    }
}

impl<B: PreviewBackend> Drop for PreviewSet<B> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Object URLs del navegador (`URL.createObjectURL` / `revokeObjectURL`)
pub struct ObjectUrlBackend;

impl PreviewBackend for ObjectUrlBackend {
    type Source = web_sys::File;

    fn create(&self, file: &web_sys::File) -> Result<String, String> {
        web_sys::Url::create_object_url_with_blob(file).map_err(|e| format!("{:?}", e))
    }

    fn release(&self, handle: &str) {
        if let Err(e) = web_sys::Url::revoke_object_url(handle) {
            log::warn!("⚠️ Error liberando {}: {:?}", handle, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    #[derive(Default)]
    struct Ledger {
        next: usize,
        live: HashSet<String>,
        released: Vec<String>,
    }

    #[derive(Clone, Default)]
    struct FakeBackend(Rc<RefCell<Ledger>>);

    impl PreviewBackend for FakeBackend {
        type Source = &'static str;

        fn create(&self, name: &&'static str) -> Result<String, String> {
            if name.is_empty() {
                return Err("empty file".into());
            }
            let mut ledger = self.0.borrow_mut();
            ledger.next += 1;
            let handle = format!("blob:{}#{}", name, ledger.next);
            ledger.live.insert(handle.clone());
            Ok(handle)
        }

        fn release(&self, handle: &str) {
            let mut ledger = self.0.borrow_mut();
            assert!(ledger.live.remove(handle), "double release of {}", handle);
            ledger.released.push(handle.to_string());
        }
    }

    #[test]
    fn selecting_n_files_creates_n_handles() {
        let backend = FakeBackend::default();
        let mut set = PreviewSet::new(backend.clone());

        assert_eq!(set.replace(&["a.png", "b.png", "c.png"]).len(), 3);
        assert_eq!(backend.0.borrow().live.len(), 3);
    }

    #[test]
    fn new_selection_releases_every_previous_handle() {
        let backend = FakeBackend::default();
        let mut set = PreviewSet::new(backend.clone());

        let first: Vec<String> = set.replace(&["a.png", "b.png"]).to_vec();
        set.replace(&["c.png"]);

        let ledger = backend.0.borrow();
        assert_eq!(ledger.released, first);
        assert_eq!(ledger.live.len(), 1);
        assert_eq!(set.handles().len(), 1);
    }

    #[test]
    fn drop_releases_remaining_handles() {
        let backend = FakeBackend::default();
        {
            let mut set = PreviewSet::new(backend.clone());
            set.replace(&["a.png", "b.png"]);
        }
        let ledger = backend.0.borrow();
        assert!(ledger.live.is_empty());
        assert_eq!(ledger.released.len(), 2);
    }

    #[test]
    fn clear_then_drop_does_not_release_twice() {
        let backend = FakeBackend::default();
        let mut set = PreviewSet::new(backend.clone());
        set.replace(&["a.png"]);
        set.clear();
        drop(set);
        assert_eq!(backend.0.borrow().released.len(), 1);
    }

    #[test]
    fn failed_creation_is_skipped() {
        let backend = FakeBackend::default();
        let mut set = PreviewSet::new(backend.clone());
        assert_eq!(set.replace(&["a.png", "", "b.png"]).len(), 2);
    }
}
