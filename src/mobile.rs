// Mobile fallback
//
// Most mobile in-app browsers cannot reach a wallet extension directly; the
// recovery path is a deep link that re-opens the page inside the wallet
// app's own browser.

/// User-agent tokens treated as mobile contexts.
const MOBILE_UA_TOKENS: [&str; 4] = ["iphone", "ipad", "ipod", "android"];

/// Base of the MetaMask in-app-browser deep link.
pub const METAMASK_DEEP_LINK_BASE: &str = "https://metamask.app.link/dapp/";

/// Ambient facts about the page the orchestrator runs in.
#[derive(Clone, Debug, Default)]
pub struct PageContext {
    pub user_agent: String,
    pub host: String,
    pub path: String,
}

impl PageContext {
    pub fn new(
        user_agent: impl Into<String>,
        host: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            user_agent: user_agent.into(),
            host: host.into(),
            path: path.into(),
        }
    }
}

/// Whether the user agent looks like a mobile OS.
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let lowered = user_agent.to_lowercase();
    MOBILE_UA_TOKENS.iter().any(|token| lowered.contains(token))
}

/// Deep link that opens the current page inside the MetaMask app.
///
/// Only host and path are carried; query and fragment are dropped.
pub fn metamask_deep_link(page: &PageContext) -> String {
    format!("{}{}{}", METAMASK_DEEP_LINK_BASE, page.host, page.path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const IPHONE_UA: &str =
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
    const DESKTOP_UA: &str =
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0";

    #[test]
    fn test_mobile_user_agents_are_detected() {
        assert!(is_mobile_user_agent(IPHONE_UA));
        assert!(is_mobile_user_agent("Mozilla/5.0 (Linux; ANDROID 14; Pixel 8)"));
        assert!(!is_mobile_user_agent(DESKTOP_UA));
        assert!(!is_mobile_user_agent(""));
    }

    #[test]
    fn test_deep_link_carries_host_and_path_only() {
        let page = PageContext::new(IPHONE_UA, "forge.ekopia.space", "/deploy");
        assert_eq!(
            metamask_deep_link(&page),
            "https://metamask.app.link/dapp/forge.ekopia.space/deploy"
        );
    }
}
