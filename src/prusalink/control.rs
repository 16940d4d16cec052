use prusalink::JobPoll;

use super::PrusaLink;
use crate::{Control as ControlTrait, FileManagement as FileManagementTrait, PrintOptions};

impl PrusaLink {
    /// One probe round trip against the status resource. The adapter holds
    /// no connection of its own, so "connected" means the api answers now.
    pub(crate) async fn reachable(&self) -> bool {
        self.client.status().await.is_ok()
    }

    /// Id of the active job. Logs why there is nothing to address; a
    /// missing job never turns into an action request.
    async fn active_job_id(&self) -> Option<i64> {
        match self.poll_job().await? {
            JobPoll::Active(job) => Some(job.id),
            JobPoll::Idle => {
                tracing::warn!("no active job");
                None
            }
        }
    }
}

impl ControlTrait for PrusaLink {
    async fn connect(&self) {
        // Prime the info snapshot so device identity is recorded early.
        if let Err(err) = self.client.info().await {
            tracing::warn!(error = %err, "printer unreachable on connect");
        }
    }

    async fn disconnect(&self) {}

    async fn mqtt_start(&self) -> bool {
        self.reachable().await
    }

    async fn mqtt_stop(&self) {}

    async fn mqtt_client_connected(&self) -> bool {
        self.reachable().await
    }

    async fn mqtt_client_ready(&self) -> bool {
        // Commands ride the same snapshot api as telemetry; reachable
        // means ready.
        self.reachable().await
    }

    async fn start_print(&self, filename: &str, _plate_number: i64, options: PrintOptions) -> bool {
        if options.use_ams || options.skip_objects.is_some() {
            tracing::debug!("plate and hub options ignored; no equivalent on this machine");
        }

        match self.client.start(filename).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, filename, "print start failed");
                false
            }
        }
    }

    async fn stop_print(&self) -> bool {
        let Some(id) = self.active_job_id().await else {
            return false;
        };
        match self.client.stop_job(id).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, id, "print stop failed");
                false
            }
        }
    }

    async fn pause_print(&self) -> bool {
        let Some(id) = self.active_job_id().await else {
            return false;
        };
        match self.client.pause_job(id).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, id, "print pause failed");
                false
            }
        }
    }

    async fn resume_print(&self) -> bool {
        let Some(id) = self.active_job_id().await else {
            return false;
        };
        match self.client.resume_job(id).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, id, "print resume failed");
                false
            }
        }
    }
}

impl FileManagementTrait for PrusaLink {
    async fn upload_file(&self, data: &[u8], filename: &str) -> String {
        match self.client.upload(filename, data.to_vec()).await {
            Ok(path) => path,
            Err(err) => {
                tracing::warn!(error = %err, filename, "upload failed");
                String::new()
            }
        }
    }

    async fn delete_file(&self, file_path: &str) -> String {
        match self.client.delete(file_path).await {
            Ok(()) => file_path.to_owned(),
            Err(err) => {
                tracing::warn!(error = %err, file_path, "file delete failed");
                String::new()
            }
        }
    }
}
