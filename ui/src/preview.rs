//! Preview references for selected images.
//!
//! A preview reference lets the screen show the picked image without reading
//! the file again. In the browser it is a blob url which holds on to memory
//! until revoked, so every reference handed out must be released exactly once.

use api::ImageUpload;
use thiserror::Error;

#[cfg(target_arch = "wasm32")]
pub use self::wasm32::BlobPreviewStore as PlatformPreviewStore;

#[cfg(not(target_arch = "wasm32"))]
pub use self::non_wasm32::DataUrlPreviewStore as PlatformPreviewStore;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreviewError {
    #[error("could not create preview: {0}")]
    Platform(String),
}

/// A url an `<img>` can display. Deliberately not `Clone`: whoever holds it
/// owns the underlying resource and must hand it back to the store.
#[derive(Debug, PartialEq, Eq)]
pub struct PreviewUrl(String);

impl PreviewUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Creates and releases preview references.
pub trait PreviewStore {
    fn create(&mut self, image: &ImageUpload) -> Result<PreviewUrl, PreviewError>;

    fn release(&mut self, preview: PreviewUrl);
}

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use super::*;
    use wasm_bindgen::JsValue;

    /// Backs previews with `URL.createObjectURL` blobs.
    #[derive(Default)]
    pub struct BlobPreviewStore;

    fn js_err(e: JsValue) -> PreviewError {
        PreviewError::Platform(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
    }

    impl PreviewStore for BlobPreviewStore {
        fn create(&mut self, image: &ImageUpload) -> Result<PreviewUrl, PreviewError> {
            let bytes = js_sys::Uint8Array::from(image.bytes());
            let parts = js_sys::Array::of1(&bytes);
            let options = web_sys::BlobPropertyBag::new();
            options.set_type(image.mime_type());
            let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
                .map_err(js_err)?;
            let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;
            Ok(PreviewUrl::new(url))
        }

        fn release(&mut self, preview: PreviewUrl) {
            if let Err(e) = web_sys::Url::revoke_object_url(preview.as_str()) {
                dioxus_logger::tracing::warn!("failed to revoke preview url: {:?}", e);
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use super::*;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    /// Inlines the image as a `data:` url. There is nothing to free, so
    /// releasing only drops the string.
    #[derive(Default)]
    pub struct DataUrlPreviewStore;

    impl PreviewStore for DataUrlPreviewStore {
        fn create(&mut self, image: &ImageUpload) -> Result<PreviewUrl, PreviewError> {
            Ok(PreviewUrl::new(format!(
                "data:{};base64,{}",
                image.mime_type(),
                STANDARD.encode(image.bytes())
            )))
        }

        fn release(&mut self, preview: PreviewUrl) {
            drop(preview);
        }
    }

}
