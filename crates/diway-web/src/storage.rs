//! Browser Storage Adapters
//!
//! Local-storage implementation of the core storage port, plus the JSON
//! download helper behind the export button.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Storage, Url};

use diway_core::{DeckError, QuestionStore, Result, STORAGE_KEY};

/// `QuestionStore` backed by `window.localStorage`.
///
/// Holds no handle; the storage object is resolved per call so the struct
/// stays `Send + Sync` and can live inside reactive state.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<Storage> {
        web_sys::window()
            .ok_or_else(|| DeckError::Storage("no window".into()))?
            .local_storage()
            .map_err(|err| DeckError::Storage(js_error(&err)))?
            .ok_or_else(|| DeckError::Storage("local storage unavailable".into()))
    }
}

impl QuestionStore for LocalStorageStore {
    fn read(&self) -> Result<Option<String>> {
        Self::storage()?
            .get_item(STORAGE_KEY)
            .map_err(|err| DeckError::Storage(js_error(&err)))
    }

    fn write(&self, payload: &str) -> Result<()> {
        Self::storage()?
            .set_item(STORAGE_KEY, payload)
            .map_err(|err| DeckError::Storage(js_error(&err)))
    }
}

/// Trigger a browser download of `payload` as `file_name`
pub fn download_json(file_name: &str, payload: &str) -> Result<()> {
    let window = web_sys::window().ok_or_else(|| DeckError::Storage("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| DeckError::Storage("no document".into()))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(payload));
    let options = BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|err| DeckError::Storage(js_error(&err)))?;

    let url =
        Url::create_object_url_with_blob(&blob).map_err(|err| DeckError::Storage(js_error(&err)))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|err| DeckError::Storage(js_error(&err)))?
        .dyn_into()
        .map_err(|_| DeckError::Storage("anchor element cast failed".into()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    Url::revoke_object_url(&url).map_err(|err| DeckError::Storage(js_error(&err)))?;
    Ok(())
}

fn js_error(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
