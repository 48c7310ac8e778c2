use std::time::Instant;

use anyhow::Context;
use log::debug;
use reqwest::blocking::Client;
use serde_json::Value;

use crate::{
    error::FetchError,
    utilities::response::{check_status, decode_record},
};

/// Fetches one url and hands back the decoded JSON body.
pub trait UserSource {
    fn fetch(&self, url: &str) -> Result<Value, FetchError>;
}

/// Blocking GET over reqwest. Returns only once the whole body is read
/// and decoded.
pub struct HttpUserSource {
    client: Client,
}

impl HttpUserSource {
    pub fn new() -> anyhow::Result<Self> {
        // no idle connections are kept, every request dials its own
        let client = Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .context("could not build http client")?;
        Ok(HttpUserSource { client })
    }
}

impl UserSource for HttpUserSource {
    fn fetch(&self, url: &str) -> Result<Value, FetchError> {
        debug!("GET {}", url);
        let started = Instant::now();
        let network = |source| FetchError::Network {
            url: url.to_string(),
            source,
        };

        let res = self.client.get(url).send().map_err(network)?;
        check_status(url, res.status())?;
        let res_text = res.text().map_err(network)?;
        let record = decode_record(url, &res_text)?;

        debug!("decoded {} in {:?}", url, started.elapsed());
        Ok(record)
    }
}
