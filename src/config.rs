/// `https://home.sensibo.com/api/v2`
pub const DEFAULT_BASE_URL: &str = "https://home.sensibo.com/api/v2";

/// Where to send requests, and the key to send with them.
#[derive(Clone)]
pub struct Config {
    base_url: String,
    api_key: String,
}

impl Config {
    pub fn new(api_key: impl ToString) -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Point at another server, e.g. a local mock. No trailing slash.
    pub fn with_base_url(mut self, base_url: impl ToString) -> Self {
        self.base_url = base_url.to_string().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full url for `path`, with the key appended as the last query parameter.
    pub(crate) fn url(&self, path: &str) -> String {
        let delim = if path.contains('?') { '&' } else { '?' };
        format!("{}{}{}apiKey={}", self.base_url, path, delim, self.api_key)
    }
}

// keep the key out of logs and panics
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
