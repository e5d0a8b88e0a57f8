//! Blocking browser confirmation dialog.

/// Ask the user to confirm `message`. Off-browser there is nobody to ask,
/// so the answer is always no.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}
