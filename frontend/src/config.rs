// Build-time settings. Trunk exposes the environment to rustc, so these are
// baked into the wasm bundle.

/// Webhook the contact page posts to. Empty when unset, in which case every
/// submission fails and the form shows its error state.
pub fn contact_webhook_url() -> &'static str {
    option_env!("DISCORD_WEBHOOK_URL").unwrap_or("")
}

/// Webhook for the chat widget, falling back to the contact webhook.
pub fn chat_webhook_url() -> &'static str {
    match option_env!("DISCORD_CHAT_WEBHOOK_URL") {
        Some(url) if !url.is_empty() => url,
        _ => contact_webhook_url(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DataStoreConfig {
    pub url: &'static str,
    pub anon_key: &'static str,
}

/// Hosted data store credentials. Nothing reads from the store yet, it is
/// only resolved so a missing pair shows up in the console at startup.
pub fn data_store() -> Option<DataStoreConfig> {
    data_store_from(option_env!("SUPABASE_URL"), option_env!("SUPABASE_ANON_KEY"))
}

fn data_store_from(url: Option<&'static str>, anon_key: Option<&'static str>) -> Option<DataStoreConfig> {
    match (url, anon_key) {
        (Some(url), Some(anon_key)) if !url.is_empty() && !anon_key.is_empty() => {
            Some(DataStoreConfig { url, anon_key })
        }
        _ => None,
    }
}

#[cfg(debug_assertions)]
pub fn base_path() -> Option<&'static str> {
    None // trunk serve always mounts at the root
}

#[cfg(not(debug_assertions))]
pub fn base_path() -> Option<&'static str> {
    option_env!("BYTE_BASE_PATH").filter(|p| !p.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_store_needs_both_values() {
        assert_eq!(data_store_from(None, None), None);
        assert_eq!(data_store_from(Some("https://x.supabase.co"), None), None);
        assert_eq!(data_store_from(Some("https://x.supabase.co"), Some("")), None);
        assert_eq!(
            data_store_from(Some("https://x.supabase.co"), Some("anon")),
            Some(DataStoreConfig { url: "https://x.supabase.co", anon_key: "anon" })
        );
    }
}
