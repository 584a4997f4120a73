//! File input reading for image fields.
//!
//! The picked file is read fully into memory and handed back with an object
//! URL for the modal preview. Nothing is uploaded until the draft is submitted;
//! the preview URL is revoked once its draft no longer shows it.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::net::transport::PendingUpload;

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Read the first file of the `<input type="file">` that fired `ev`.
pub fn read_selected_file<F>(ev: &leptos::ev::Event, apply: F)
where
    F: FnOnce(PendingUpload, Option<String>) + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
            return;
        };
        let Some(file) = input.files().and_then(|list| list.get(0)) else {
            return;
        };
        crate::util::task::spawn(async move {
            match read_file(&file).await {
                Ok(upload) => {
                    let preview = web_sys::Url::create_object_url_with_blob(&file).ok();
                    apply(upload, preview);
                }
                Err(e) => log::error!("failed to read {}: {e:?}", file.name()),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ev, apply);
    }
}

/// Release object URLs handed out by `read_selected_file`.
pub fn revoke_previews(urls: &[String]) {
    #[cfg(feature = "hydrate")]
    for url in urls {
        if let Err(e) = web_sys::Url::revoke_object_url(url) {
            log::warn!("failed to revoke preview {url}: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = urls;
}

#[cfg(feature = "hydrate")]
async fn read_file(file: &web_sys::File) -> Result<PendingUpload, wasm_bindgen::JsValue> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(PendingUpload { file_name: file.name(), content_type: content_type_or_default(&file.type_()), bytes })
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn content_type_or_default(raw: &str) -> String {
    if raw.trim().is_empty() { FALLBACK_CONTENT_TYPE.to_owned() } else { raw.to_owned() }
}
