#![deny(missing_docs)]
#![deny(missing_copy_implementations)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unused_import_braces)]
#![deny(unused_qualifications)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

//! This crate implements a client for the PrusaLink web api, the local
//! HTTP interface exposed by Prusa 3d printers.
//!
//! The api is snapshot-style: three GET resources (`status`, `job`, `info`)
//! describe the device at call time, and a handful of file/job/camera
//! actions mutate it. There is no push channel; callers poll. Every method
//! here performs exactly one round trip, with no retry or backoff of its
//! own, and remembers the last successful response per resource.

mod camera;
mod files;
mod info;
mod job;
mod status;

use std::sync::Arc;

use anyhow::Result;
use reqwest::header::{HeaderMap, HeaderValue};
use tokio::sync::Mutex;

pub use files::remote_path;
pub use info::Info;
pub use job::{Job, JobFile, JobPoll};
pub use status::{DeviceState, Status, StatusJob, StatusPrinter};

/// Header carrying the static access code on every request.
const API_KEY_HEADER: &str = "X-Api-Key";

/// Client is a connection to one PrusaLink device.
#[derive(Clone)]
pub struct Client {
    pub(crate) url_base: String,
    pub(crate) http: reqwest::Client,
    snapshots: Arc<Snapshots>,
}

/// Last successful response per resource. Overwritten on every fetch,
/// never merged; instances do not share these.
#[derive(Default)]
struct Snapshots {
    status: Mutex<Option<Status>>,
    job: Mutex<Option<JobPoll>>,
    info: Mutex<Option<Info>>,
}

impl Client {
    /// Create a new Client handle to control the printer via its PrusaLink
    /// interface. The `api_key` is sent as the `X-Api-Key` header on every
    /// request.
    pub fn new(host: &str, port: u16, api_key: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, HeaderValue::from_str(api_key)?);

        Ok(Self {
            url_base: format!("http://{host}:{port}/api/v1"),
            http: reqwest::Client::builder().default_headers(headers).build()?,
            snapshots: Arc::new(Snapshots::default()),
        })
    }

    /// Base URL every resource path is appended to.
    pub fn url_base(&self) -> &str {
        &self.url_base
    }

    /// The last status document fetched by [Client::status], if any.
    pub async fn last_status(&self) -> Option<Status> {
        *self.snapshots.status.lock().await
    }

    /// The last job poll result from [Client::job], if any.
    pub async fn last_job(&self) -> Option<JobPoll> {
        self.snapshots.job.lock().await.clone()
    }

    /// The last device description fetched by [Client::info], if any.
    pub async fn last_info(&self) -> Option<Info> {
        self.snapshots.info.lock().await.clone()
    }

    pub(crate) async fn remember_status(&self, status: Status) {
        *self.snapshots.status.lock().await = Some(status);
    }

    pub(crate) async fn remember_job(&self, poll: JobPoll) {
        *self.snapshots.job.lock().await = Some(poll);
    }

    pub(crate) async fn remember_info(&self, info: Info) {
        *self.snapshots.info.lock().await = Some(info);
    }
}

/// Check an action response for the expected `204 No Content`.
pub(crate) fn expect_no_content(resp: &reqwest::Response, action: &str) -> Result<()> {
    if resp.status() != reqwest::StatusCode::NO_CONTENT {
        anyhow::bail!("{action} returned {}", resp.status());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_base() {
        let client = Client::new("192.168.1.50", 80, "s3cret").unwrap();
        assert_eq!(client.url_base(), "http://192.168.1.50:80/api/v1");
    }

    #[tokio::test]
    async fn test_snapshots_start_empty() {
        let client = Client::new("localhost", 8181, "key").unwrap();
        assert!(client.last_status().await.is_none());
        assert!(client.last_job().await.is_none());
        assert!(client.last_info().await.is_none());
    }
}
