use std::time::Duration;

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;

const REQUEST_TIMEOUT_SECS: u64 = 120;

static CLIENT: OnceCell<Client> = OnceCell::new();

/// Process-wide blocking client. Sources override the timeout per request.
pub fn http_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("club_insights/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build http client")
    })
}
