use crate::config::UpstreamSettings;

/// Nominatim rejects requests without an identifying agent.
const USER_AGENT: &str = concat!("EcoPlan/", env!("CARGO_PKG_VERSION"));

/// One pooled client shared by every upstream adapter.
pub fn build_http_client(settings: &UpstreamSettings) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(settings.timeout)
        .user_agent(USER_AGENT)
        .build()
}
