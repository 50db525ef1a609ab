//! Client-side export of a generated result to a downloadable file.
//!
//! DESIGN
//! ======
//! Encoding is a pure function over an immutable `ContentResponse`; no
//! format conversion happens here; the HTML and Markdown documents arrive
//! pre-built from the service, and JSON is the full response pretty-printed.
//! Taking `&ContentResponse` makes "export with no held result"
//! unrepresentable. The actual download (Blob + anchor click) is browser
//! glue gated behind the `hydrate` feature.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use content::ContentResponse;

/// Downloadable formats. Each fixes a filename, media type, and encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Html,
    Markdown,
    Json,
}

impl ExportFormat {
    /// Every export format, in button order.
    pub const ALL: [Self; 3] = [Self::Html, Self::Markdown, Self::Json];

    /// Button label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Html => "Export HTML",
            Self::Markdown => "Export Markdown",
            Self::Json => "Export JSON",
        }
    }
}

/// A fully encoded file ready to hand to the browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportPayload {
    pub filename: &'static str,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// The full response serialized as pretty-printed JSON (2-space indent).
///
/// Also backs the JSON display mode so the viewer and the exporter always
/// agree byte-for-byte.
#[must_use]
pub fn pretty_json(result: &ContentResponse) -> String {
    serde_json::to_string_pretty(result).unwrap_or_default()
}

/// Encode a held result for download in the given format.
#[must_use]
pub fn payload(result: &ContentResponse, format: ExportFormat) -> ExportPayload {
    match format {
        ExportFormat::Html => ExportPayload {
            filename: "content.html",
            mime: "text/html",
            bytes: result.html_content.clone().into_bytes(),
        },
        ExportFormat::Markdown => ExportPayload {
            filename: "content.md",
            mime: "text/markdown",
            bytes: result.markdown_content.clone().into_bytes(),
        },
        ExportFormat::Json => ExportPayload {
            filename: "content.json",
            mime: "application/json",
            bytes: pretty_json(result).into_bytes(),
        },
    }
}

/// Encode and trigger a browser download for a held result.
///
/// No-op outside the browser (SSR); export controls are only rendered when
/// a result is held, so this is never reachable without one.
pub fn trigger_download(result: &ContentResponse, format: ExportFormat) {
    let encoded = payload(result, format);
    download(&encoded);
}

/// Hand an encoded payload to the browser as a file download.
#[cfg(feature = "hydrate")]
fn download(payload: &ExportPayload) {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(payload.bytes.as_slice()).into());
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(payload.mime);

    let Ok(blob) = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options) else {
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return;
    };

    let anchor = document
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().ok());
    if let (Some(anchor), Some(body)) = (anchor, document.body()) {
        anchor.set_href(&url);
        anchor.set_download(payload.filename);
        let _ = body.append_child(&anchor);
        anchor.click();
        let _ = body.remove_child(&anchor);
    }
    let _ = web_sys::Url::revoke_object_url(&url);
}

#[cfg(not(feature = "hydrate"))]
fn download(payload: &ExportPayload) {
    let _ = payload;
}
