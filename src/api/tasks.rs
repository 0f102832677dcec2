use urlencoding::encode;

use crate::client::NexusClient;
use crate::error::Result;
use crate::types::{Page, Task};

/// Scheduled-task management.
pub struct TaskApi<'a> {
    client: &'a NexusClient,
}

impl<'a> TaskApi<'a> {
    pub(crate) fn new(client: &'a NexusClient) -> Self {
        Self { client }
    }

    pub fn list(&self) -> Result<Page<Task>> {
        self.client.get_json("/v1/tasks", &[])
    }

    pub fn get(&self, task_id: &str) -> Result<Task> {
        self.client
            .get_json(&format!("/v1/tasks/{}", encode(task_id)), &[])
    }

    /// Triggers an immediate run.
    pub fn run(&self, task_id: &str) -> Result<()> {
        self.client
            .post(&format!("/v1/tasks/{}/run", encode(task_id)))?;
        Ok(())
    }

    pub fn stop(&self, task_id: &str) -> Result<()> {
        self.client
            .post(&format!("/v1/tasks/{}/stop", encode(task_id)))?;
        Ok(())
    }
}
