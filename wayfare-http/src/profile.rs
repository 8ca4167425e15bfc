use reqwest::header::{
    ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, CONNECTION, DNT, HeaderMap, HeaderName, HeaderValue,
    UPGRADE_INSECURE_REQUESTS, USER_AGENT,
};

use crate::FetchError;

/// Request signature of an ordinary desktop browser.
///
/// Values are static configuration; nothing is rotated or computed per
/// request. The header map is built once when a [`PageSession`](crate::PageSession)
/// is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserProfile {
    pub user_agent: String,
    pub accept: String,
    pub accept_language: String,
    pub accept_encoding: String,
    pub do_not_track: String,
    pub connection: String,
    pub upgrade_insecure_requests: String,
}

impl Default for BrowserProfile {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string(),
            accept: "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8"
                .to_string(),
            accept_language: "en-US,en;q=0.5".to_string(),
            accept_encoding: "gzip, deflate".to_string(),
            do_not_track: "1".to_string(),
            connection: "keep-alive".to_string(),
            upgrade_insecure_requests: "1".to_string(),
        }
    }
}

impl BrowserProfile {
    /// Render the profile as default request headers.
    ///
    /// ```
    /// use wayfare_http::BrowserProfile;
    ///
    /// let headers = BrowserProfile::default().header_map().unwrap();
    /// assert_eq!(headers["dnt"], "1");
    /// assert_eq!(headers["accept-language"], "en-US,en;q=0.5");
    /// ```
    pub fn header_map(&self) -> Result<HeaderMap, FetchError> {
        let pairs: [(HeaderName, &str); 7] = [
            (USER_AGENT, self.user_agent.as_str()),
            (ACCEPT, self.accept.as_str()),
            (ACCEPT_LANGUAGE, self.accept_language.as_str()),
            (ACCEPT_ENCODING, self.accept_encoding.as_str()),
            (DNT, self.do_not_track.as_str()),
            (CONNECTION, self.connection.as_str()),
            (UPGRADE_INSECURE_REQUESTS, self.upgrade_insecure_requests.as_str()),
        ];

        let mut headers = HeaderMap::with_capacity(pairs.len());
        for (name, value) in pairs {
            let value = HeaderValue::from_str(value)
                .map_err(|e| FetchError::Build(format!("invalid {name} header: {e}")))?;
            headers.insert(name, value);
        }
        Ok(headers)
    }
}
