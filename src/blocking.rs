//! A synchronous client, for callers without an async runtime.
//!
//! Each call blocks the current thread until the response has been read and
//! decoded. Like `reqwest::blocking`, don't use this from inside an async
//! runtime.

use log::debug;
use reqwest::blocking::RequestBuilder;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::{
    decode, encode_target, ensure_ok, measurements_path, set_status_path, status_path, AcState,
    AcStatus, Config, Measurements, PodList, Result, SetResult, CONSUMES, PODS_PATH, PRODUCES,
};

/// Blocking counterpart of [`crate::Client`], on top of `reqwest::blocking`.
///
/// May be shared between threads; concurrent calls each get their own request.
#[derive(Clone, Debug)]
pub struct Client {
    config: Config,
    http: reqwest::blocking::Client,
}

impl Client {
    pub fn new(api_key: impl ToString) -> Result<Self> {
        Self::with_config(Config::new(api_key))
    }

    pub fn with_config(config: Config) -> Result<Self> {
        let http = reqwest::blocking::Client::builder().build()?;
        Ok(Self::with_http_client(config, http))
    }

    pub fn with_http_client(config: Config, http: reqwest::blocking::Client) -> Self {
        Client { config, http }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn list_pods(&self) -> Result<PodList> {
        self.get(PODS_PATH)
    }

    pub fn pod_status(&self, id: &str) -> Result<AcStatus> {
        self.get(&status_path(id))
    }

    pub fn pod_measurements(&self, id: &str) -> Result<Measurements> {
        self.get(&measurements_path(id))
    }

    pub fn set_pod_status(&self, id: &str, target: &AcState) -> Result<SetResult> {
        let request = self
            .request(Method::POST, &set_status_path(id))
            .header(CONTENT_TYPE, PRODUCES)
            .body(encode_target(target)?);
        handle_response(request)
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        handle_response(self.request(Method::GET, path))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!("{} {}", method, path);
        self.http
            .request(method, self.config.url(path))
            .header(ACCEPT, CONSUMES)
    }
}

fn handle_response<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    let response = request.send()?;
    ensure_ok(response.status())?;
    decode(&response.text()?)
}
