use serde::Serialize;

/// Shared HTTP plumbing for the workflow and chat endpoints.
#[derive(Clone)]
pub struct DifyClient {
    pub(crate) base_url: String,
    pub(crate) api_key: String,
    pub(crate) user: String,
    pub(crate) client: reqwest::Client,
}

impl DifyClient {
    pub fn new(base_url: String, api_key: String, user: String) -> Self {
        Self {
            base_url,
            api_key,
            user,
            client: reqwest::Client::new(),
        }
    }

    pub(crate) async fn run_workflow(
        &self,
        inputs: serde_json::Value,
        response_mode: &str,
    ) -> Result<reqwest::Response, reqwest::Error> {
        let request = WorkflowRequest {
            inputs,
            response_mode,
            user: &self.user,
        };

        self.client
            .post(format!("{}/workflows/run", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
    }
}

#[derive(Serialize)]
pub(crate) struct WorkflowRequest<'a> {
    pub inputs: serde_json::Value,
    pub response_mode: &'a str,
    pub user: &'a str,
}
