//! Thin wrappers over the browser APIs the client touches directly.
//!
//! Everything else goes through Yew. Lookups that fail (no window, no
//! element) degrade to a neutral value instead of panicking.

/// Shows a blocking yes/no prompt. Returns `false` if the prompt cannot be shown.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Reads the `content` attribute of `<meta name="{name}">`, if present.
pub fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
}
