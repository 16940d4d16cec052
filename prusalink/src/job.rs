use anyhow::Result;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use super::{expect_no_content, Client};

/// File metadata attached to a print job.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct JobFile {
    /// File name on the storage.
    pub name: Option<String>,

    /// Human readable name, when the storage keeps one.
    pub display_name: Option<String>,

    /// Storage path of the file.
    pub path: Option<String>,

    /// Size in bytes.
    pub size: Option<u64>,
}

/// An active print job as reported by the `/job` resource.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Job {
    /// Identifier the stop/pause/resume resources are addressed by.
    pub id: i64,

    /// Job state word, informational only.
    pub state: Option<String>,

    /// Completion percentage, `0.0` to `100.0`.
    pub progress: Option<f64>,

    /// Estimated seconds left.
    pub time_remaining: Option<i64>,

    /// Seconds spent printing so far.
    pub time_printing: Option<i64>,

    /// File being printed.
    pub file: Option<JobFile>,
}

/// Result of polling the `/job` resource.
///
/// The device answers `204 No Content` when no job is active. That is data,
/// not a failure, and it is kept distinct from a fetch error so call sites
/// that need a job id cannot miss the idle branch.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub enum JobPoll {
    /// A job exists and may be addressed by its id.
    Active(Job),
    /// No job is currently active.
    Idle,
}

impl JobPoll {
    /// Id of the active job, if one exists.
    pub fn id(&self) -> Option<i64> {
        match self {
            JobPoll::Active(job) => Some(job.id),
            JobPoll::Idle => None,
        }
    }
}

impl Client {
    /// Poll the job resource.
    pub async fn job(&self) -> Result<JobPoll> {
        tracing::debug!(base = self.url_base, "requesting job");
        let resp = self.http.get(format!("{}/job", self.url_base)).send().await?;

        let poll = match resp.status() {
            code if code == StatusCode::NO_CONTENT => JobPoll::Idle,
            code if code.is_success() => JobPoll::Active(resp.json().await?),
            code => anyhow::bail!("job fetch returned {code}"),
        };
        self.remember_job(poll.clone()).await;
        Ok(poll)
    }

    /// Stop the job with the given id.
    pub async fn stop_job(&self, id: i64) -> Result<()> {
        tracing::debug!(base = self.url_base, id, "stopping job");
        let resp = self.http.delete(format!("{}/job/{id}", self.url_base)).send().await?;
        expect_no_content(&resp, "job stop")
    }

    /// Pause the job with the given id.
    pub async fn pause_job(&self, id: i64) -> Result<()> {
        tracing::debug!(base = self.url_base, id, "pausing job");
        let resp = self
            .http
            .put(format!("{}/job/{id}/pause", self.url_base))
            .send()
            .await?;
        expect_no_content(&resp, "job pause")
    }

    /// Resume the job with the given id.
    pub async fn resume_job(&self, id: i64) -> Result<()> {
        tracing::debug!(base = self.url_base, id, "resuming job");
        let resp = self
            .http
            .put(format!("{}/job/{id}/resume", self.url_base))
            .send()
            .await?;
        expect_no_content(&resp, "job resume")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_deserialize_job() {
        let payload = r#"{
            "id": 129,
            "state": "PRINTING",
            "progress": 12.0,
            "time_remaining": 4620,
            "time_printing": 720,
            "file": {
                "name": "benchy.gcode",
                "display_name": "3DBenchy",
                "path": "/usb/benchy.gcode",
                "size": 1250034
            }
        }"#;

        let job: Job = serde_json::from_str(payload).unwrap();
        assert_eq!(job.id, 129);
        assert_eq!(job.state.as_deref(), Some("PRINTING"));
        let file = job.file.unwrap();
        assert_eq!(file.name.as_deref(), Some("benchy.gcode"));
        assert_eq!(file.path.as_deref(), Some("/usb/benchy.gcode"));
    }

    #[test]
    fn test_deserialize_job_bare() {
        // Firmware may omit everything but the id.
        let payload = r#"{ "id": 7 }"#;

        let job: Job = serde_json::from_str(payload).unwrap();
        assert_eq!(job.id, 7);
        assert!(job.file.is_none());
        assert!(job.progress.is_none());
    }

    #[test]
    fn test_poll_id() {
        let job: Job = serde_json::from_str(r#"{ "id": 42 }"#).unwrap();
        assert_eq!(JobPoll::Active(job).id(), Some(42));
        assert_eq!(JobPoll::Idle.id(), None);
    }
}
