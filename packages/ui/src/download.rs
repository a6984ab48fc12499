//! Saving a downloaded PDF report.
//!
//! The browser gets a synthetic download (object URL, hidden anchor click,
//! URL revoked right after). Desktop writes the file into the user's
//! download directory.

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("could not save report: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not save report: {0}")]
    Browser(String),
}

#[cfg(target_arch = "wasm32")]
pub fn save_report(filename: &str, bytes: &[u8]) -> Result<(), SaveError> {
    use wasm_bindgen::JsCast;

    let browser = |e: wasm_bindgen::JsValue| SaveError::Browser(format!("{e:?}"));

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/pdf");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(browser)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(browser)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| SaveError::Browser("no document".to_string()))?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(browser)?
        .dyn_into()
        .map_err(|_| SaveError::Browser("anchor element expected".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(browser)?;
    tracing::info!("Report downloaded as {}", filename);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_report(filename: &str, bytes: &[u8]) -> Result<(), SaveError> {
    let path = report_path(dirs::download_dir(), filename);
    std::fs::write(&path, bytes)?;
    tracing::info!("Report saved to {}", path.display());
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn report_path(download_dir: Option<std::path::PathBuf>, filename: &str) -> std::path::PathBuf {
    download_dir
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join(filename)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_report_path() {
        assert_eq!(
            report_path(Some(PathBuf::from("/home/u/Downloads")), "pumps_report.pdf"),
            PathBuf::from("/home/u/Downloads/pumps_report.pdf")
        );
        assert_eq!(report_path(None, "a_report.pdf"), PathBuf::from("./a_report.pdf"));
    }
}
