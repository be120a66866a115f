//! File intake and upload naming helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Upload surfaces (dropzones, file pickers) hand picked files to page logic
//! through callbacks. [`PickedFile`] keeps those callback signatures valid in
//! SSR builds, where `web-sys` is absent and no file can ever be picked.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

/// A file chosen by the operator. Real in the browser, inert under SSR.
#[cfg(feature = "hydrate")]
pub type PickedFile = web_sys::File;

/// A file chosen by the operator. Real in the browser, inert under SSR.
#[cfg(not(feature = "hydrate"))]
#[derive(Clone, Debug, PartialEq)]
pub struct PickedFile;

/// The picked file's own name (empty under SSR).
pub fn picked_file_name(file: &PickedFile) -> String {
    #[cfg(feature = "hydrate")]
    {
        file.name()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = file;
        String::new()
    }
}

/// Rename an upload so its stored filename encodes the target ordinal,
/// keeping the original extension (`"scan-03.PNG"`, 4 → `"4.PNG"`).
pub fn numbered_filename(original: &str, ordinal: u32) -> String {
    let extension = original
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
        .unwrap_or("bin");
    format!("{ordinal}.{extension}")
}

/// First file carried by a drop event, if any.
#[cfg(feature = "hydrate")]
pub fn first_dropped_file(ev: &web_sys::DragEvent) -> Option<PickedFile> {
    ev.data_transfer()?.files()?.get(0)
}

/// First file selected in a file input, if any.
#[cfg(feature = "hydrate")]
pub fn first_input_file(input: &web_sys::HtmlInputElement) -> Option<PickedFile> {
    input.files()?.get(0)
}
