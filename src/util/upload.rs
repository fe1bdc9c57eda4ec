//! Image selection for the analysis desk.
//!
//! Validation is pure; reading a browser `File` into a [`PendingUpload`]
//! requires the `csr` feature.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use thiserror::Error;

#[cfg(feature = "csr")]
use crate::net::api::PendingUpload;

pub const MAX_UPLOAD_MB: u64 = 5;
pub const MAX_UPLOAD_BYTES: u64 = MAX_UPLOAD_MB * 1024 * 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
}

impl ImageKind {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "image/jpeg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            _ => None,
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Unsupported file format ({0}). Use JPG or PNG.")]
    UnsupportedType(String),
    #[error("The image exceeds the {max} MB upload limit.", max = MAX_UPLOAD_MB)]
    TooLarge(u64),
    #[error("The selected file is empty.")]
    Empty,
    #[error("Could not read the selected file: {0}")]
    Read(String),
}

/// Check a candidate file's declared MIME type and size.
///
/// # Errors
///
/// Returns an [`UploadError`] for anything other than a non-empty JPEG/PNG
/// within [`MAX_UPLOAD_BYTES`].
pub fn validate(mime: &str, size: u64) -> Result<ImageKind, UploadError> {
    let Some(kind) = ImageKind::from_mime(mime) else {
        return Err(UploadError::UnsupportedType(mime.to_owned()));
    };
    if size == 0 {
        return Err(UploadError::Empty);
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge(size));
    }
    Ok(kind)
}

/// First file chosen in the `<input type="file">` that fired `ev`.
#[cfg(feature = "csr")]
pub fn file_from_event(ev: &web_sys::Event) -> Option<web_sys::File> {
    use wasm_bindgen::JsCast;

    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    input.files()?.get(0)
}

/// Validate and read a browser file, creating an object URL for preview.
///
/// # Errors
///
/// Returns an [`UploadError`] if validation fails or the browser cannot read
/// the file.
#[cfg(feature = "csr")]
pub async fn read_image(file: web_sys::File) -> Result<PendingUpload, UploadError> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let size = file.size() as u64;
    let kind = validate(&file.type_(), size)?;

    let read_err = |err: wasm_bindgen::JsValue| UploadError::Read(format!("{err:?}"));

    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(read_err)?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let preview_url = web_sys::Url::create_object_url_with_blob(&file).map_err(read_err)?;

    Ok(PendingUpload {
        file_name: file.name(),
        mime: kind.mime().to_owned(),
        bytes,
        preview_url,
    })
}

/// Release an object URL created for a preview.
pub fn revoke_preview(url: &str) {
    #[cfg(feature = "csr")]
    {
        if let Err(err) = web_sys::Url::revoke_object_url(url) {
            log::debug!("upload: could not revoke preview url: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
    }
}
