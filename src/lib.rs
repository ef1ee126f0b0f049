mod ac_state;
pub mod blocking;
mod config;
mod error;
mod measurements;
mod pods;

use log::{debug, trace};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

pub use ac_state::{
    AcState, AcStateChange, AcStateEntry, AcStatus, Mode, SetAcStateRequest, SetResult,
    TemperatureUnit,
};
pub use config::{Config, DEFAULT_BASE_URL};
pub use error::{Error, ParseModeError, Result};
pub use measurements::{Measurement, MeasurementTime, Measurements};
pub use pods::{Pod, PodList, Room};

const CONSUMES: &str = "application/json";
const PRODUCES: &str = "application/json; charset=utf-8";

const PODS_PATH: &str = "/users/me/pods?fields=id,room";

fn status_path(id: &str) -> String {
    format!("/pods/{}/acStates?fields=status,acState&limit=1", id)
}

fn measurements_path(id: &str) -> String {
    format!("/pods/{}/measurements", id)
}

fn set_status_path(id: &str) -> String {
    format!("/pods/{}/acStates", id)
}

/// Async client for the Sensibo v2 API.
///
/// Holds nothing but immutable configuration and a `reqwest` handle, so it's
/// cheap to clone and fine to share between tasks.
#[derive(Clone, Debug)]
pub struct Client {
    config: Config,
    http: reqwest::Client,
}

impl Client {
    pub fn new(api_key: impl ToString) -> Self {
        Self::with_config(Config::new(api_key))
    }

    pub fn with_config(config: Config) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Bring your own transport, e.g. one with timeouts or a proxy configured.
    pub fn with_http_client(config: Config, http: reqwest::Client) -> Self {
        Client { config, http }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// All pods registered to the account owning the key.
    pub async fn list_pods(&self) -> Result<PodList> {
        self.get(PODS_PATH).await
    }

    /// The most recent AC state of pod `id`.
    pub async fn pod_status(&self, id: &str) -> Result<AcStatus> {
        self.get(&status_path(id)).await
    }

    pub async fn pod_measurements(&self, id: &str) -> Result<Measurements> {
        self.get(&measurements_path(id)).await
    }

    /// Ask pod `id` to assume `target`.
    pub async fn set_pod_status(&self, id: &str, target: &AcState) -> Result<SetResult> {
        let request = self
            .request(Method::POST, &set_status_path(id))
            .header(CONTENT_TYPE, PRODUCES)
            .body(encode_target(target)?);
        handle_response(request).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        handle_response(self.request(Method::GET, path)).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!("{} {}", method, path);
        self.http
            .request(method, self.config.url(path))
            .header(ACCEPT, CONSUMES)
    }
}

async fn handle_response<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    let response = request.send().await?;
    ensure_ok(response.status())?;
    decode(&response.text().await?)
}

fn encode_target(target: &AcState) -> Result<Vec<u8>> {
    serde_json::to_vec(&SetAcStateRequest { ac_state: target }).map_err(Error::Encode)
}

fn ensure_ok(status: StatusCode) -> Result<()> {
    if status != StatusCode::OK {
        debug!("request failed, received HTTP {}", status);
        return Err(Error::Status {
            status: status.as_u16(),
        });
    }
    Ok(())
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    trace!("response body: {}", body);
    serde_json::from_str(body).map_err(Error::Decode)
}
