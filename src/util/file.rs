//! Selected-file handle and MIME classification for receipt uploads.

#[cfg(test)]
#[path = "file_test.rs"]
mod file_test;

/// A file picked in an `<input type="file">`.
///
/// Metadata is copied out so validation and upload state stay testable
/// outside the browser; the live `File` handle is kept only in browser builds.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
    #[cfg(feature = "hydrate")]
    pub handle: Option<web_sys::File>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
            #[cfg(feature = "hydrate")]
            handle: None,
        }
    }

    pub fn is_image(&self) -> bool {
        is_image(&self.mime_type)
    }

    pub fn is_pdf(&self) -> bool {
        is_pdf(&self.mime_type)
    }

    /// First file of an `<input type="file">` change event, if any.
    #[cfg(feature = "hydrate")]
    pub fn from_input_event(ev: &leptos::ev::Event) -> Option<Self> {
        use wasm_bindgen::JsCast;

        let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
        let file = input.files()?.get(0)?;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let size = file.size() as u64;
        Some(Self { name: file.name(), mime_type: file.type_(), size, handle: Some(file) })
    }

    /// Object URL over the local file for an inline preview. Release it with
    /// `net::api::revoke_object_url`.
    pub fn local_object_url(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let handle = self.handle.as_ref()?;
            web_sys::Url::create_object_url_with_blob(handle).ok()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

/// Whether a MIME type is an image (`image/*`).
pub fn is_image(mime: &str) -> bool {
    mime.trim().to_ascii_lowercase().starts_with("image/")
}

/// Whether a MIME type is a PDF document.
pub fn is_pdf(mime: &str) -> bool {
    mime.trim().eq_ignore_ascii_case("application/pdf")
}

/// Receipt uploads accept images and PDFs only.
pub fn is_supported_receipt(mime: &str) -> bool {
    is_image(mime) || is_pdf(mime)
}
