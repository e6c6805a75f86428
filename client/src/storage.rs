//! localStorage-backed pet persistence

use gochi_game::store::PetStore;

/// The browser's localStorage behind the [`PetStore`] trait
pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    /// None outside a browser window or when storage access is denied
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

impl PetStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(err) = self.storage.set_item(key, value) {
            log::error!("localStorage write failed: {:?}", err);
        }
    }
}
