use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use super::{SyncError, WorkspaceSync};
use crate::models::{ApplicationStatus, Job};

pub const DEFAULT_API_BASE: &str = "https://api.notion.com/v1";
const NOTION_VERSION: &str = "2022-06-28";

#[derive(Debug, Deserialize)]
struct NotionErrorBody {
    message: String,
}

/// Live Notion backend. One database holds one page per application.
#[derive(Clone)]
pub struct NotionSync {
    client: Client,
    api_key: String,
    api_base: String,
    database_id: String,
}

impl NotionSync {
    pub fn new(
        api_key: String,
        database_id: String,
        api_base: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SyncError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            api_base: api_base.into(),
            database_id,
        })
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .bearer_auth(&self.api_key)
            .header("Notion-Version", NOTION_VERSION)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Value, SyncError> {
        let response = self.authorized(builder).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<NotionErrorBody>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(SyncError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }
}

fn page_properties(job: &Job, status: ApplicationStatus, user_id: i64) -> Value {
    json!({
        "Company": { "title": [{ "text": { "content": job.company_name } }] },
        "Position": { "rich_text": [{ "text": { "content": job.position } }] },
        "Status": { "select": { "name": status.as_str() } },
        "Applied Date": { "date": { "start": Utc::now().to_rfc3339() } },
        "User ID": { "number": user_id },
    })
}

fn status_properties(status: ApplicationStatus) -> Value {
    json!({
        "Status": { "select": { "name": status.as_str() } },
        "Last Updated": { "date": { "start": Utc::now().to_rfc3339() } },
    })
}

#[async_trait]
impl WorkspaceSync for NotionSync {
    async fn create_application_record(
        &self,
        job: &Job,
        status: ApplicationStatus,
        user_id: i64,
    ) -> Result<String, SyncError> {
        let body = json!({
            "parent": { "database_id": self.database_id },
            "properties": page_properties(job, status, user_id),
        });
        let page = self
            .send(self.client.post(format!("{}/pages", self.api_base)).json(&body))
            .await?;

        let page_id = page["id"]
            .as_str()
            .ok_or(SyncError::MissingField("id"))?
            .to_string();
        debug!("Created Notion page {page_id} for job {}", job.id);
        Ok(page_id)
    }

    async fn update_application_status(
        &self,
        page_id: &str,
        status: ApplicationStatus,
    ) -> Result<(), SyncError> {
        let body = json!({ "properties": status_properties(status) });
        self.send(
            self.client
                .patch(format!("{}/pages/{page_id}", self.api_base))
                .json(&body),
        )
        .await?;
        debug!("Updated Notion page {page_id} to '{status}'");
        Ok(())
    }

    async fn list_user_records(&self, user_id: i64) -> Result<Vec<Value>, SyncError> {
        let body = json!({
            "filter": { "property": "User ID", "number": { "equals": user_id } }
        });
        let result = self
            .send(
                self.client
                    .post(format!(
                        "{}/databases/{}/query",
                        self.api_base, self.database_id
                    ))
                    .json(&body),
            )
            .await?;

        match result.get("results") {
            Some(Value::Array(pages)) => Ok(pages.clone()),
            _ => Err(SyncError::MissingField("results")),
        }
    }

    fn is_configured(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::Path,
        http::{HeaderMap, StatusCode},
        routing::{patch, post},
        Json, Router,
    };

    async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn sample_job() -> Job {
        Job {
            id: 3,
            company_name: "GlobalLink".to_string(),
            company_initials: "GL".to_string(),
            company_color: "purple".to_string(),
            position: "UX/UI Designer".to_string(),
            location: "New York, NY".to_string(),
            salary: "$85K".to_string(),
            job_type: "Full-time".to_string(),
            description: String::new(),
            requirements: String::new(),
            posted_date: Utc::now(),
            notion_page_id: String::new(),
            tags: vec![],
        }
    }

    fn sync(base: String) -> NotionSync {
        NotionSync::new(
            "secret".to_string(),
            "db-1".to_string(),
            base,
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_page_properties_shape() {
        let props = page_properties(&sample_job(), ApplicationStatus::InReview, 7);
        assert_eq!(props["Company"]["title"][0]["text"]["content"], "GlobalLink");
        assert_eq!(props["Position"]["rich_text"][0]["text"]["content"], "UX/UI Designer");
        assert_eq!(props["Status"]["select"]["name"], "In Review");
        assert_eq!(props["User ID"]["number"], 7);
    }

    #[tokio::test]
    async fn test_create_record_returns_page_id() {
        let router = Router::new().route(
            "/pages",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                assert_eq!(headers["notion-version"], NOTION_VERSION);
                assert_eq!(headers["authorization"], "Bearer secret");
                assert_eq!(body["parent"]["database_id"], "db-1");
                Json(json!({ "id": "page-abc" }))
            }),
        );
        let notion = sync(spawn_stub(router).await);

        let page_id = notion
            .create_application_record(&sample_job(), ApplicationStatus::Applied, 1)
            .await
            .unwrap();
        assert_eq!(page_id, "page-abc");
        assert!(notion.is_configured());
    }

    #[tokio::test]
    async fn test_update_status_targets_page() {
        let router = Router::new().route(
            "/pages/:id",
            patch(|Path(id): Path<String>, Json(body): Json<Value>| async move {
                assert_eq!(id, "page-abc");
                assert_eq!(body["properties"]["Status"]["select"]["name"], "Offer");
                Json(json!({ "id": id }))
            }),
        );
        let notion = sync(spawn_stub(router).await);
        notion
            .update_application_status("page-abc", ApplicationStatus::Offer)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_list_user_records_filters_by_user() {
        let router = Router::new().route(
            "/databases/:id/query",
            post(|Path(id): Path<String>, Json(body): Json<Value>| async move {
                assert_eq!(id, "db-1");
                assert_eq!(body["filter"]["number"]["equals"], 4);
                Json(json!({ "results": [{ "id": "p1" }, { "id": "p2" }] }))
            }),
        );
        let notion = sync(spawn_stub(router).await);
        let records = notion.list_user_records(4).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["id"], "p2");
    }

    #[tokio::test]
    async fn test_api_error_surfaces_message() {
        let router = Router::new().route(
            "/pages",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "object": "error", "message": "body failed validation" })),
                )
            }),
        );
        let notion = sync(spawn_stub(router).await);
        match notion
            .create_application_record(&sample_job(), ApplicationStatus::Applied, 1)
            .await
        {
            Err(SyncError::Api { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message, "body failed validation");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_noop_sync_refuses() {
        let noop = crate::sync::NoopSync;
        assert!(!noop.is_configured());
        assert!(matches!(
            noop.create_application_record(&sample_job(), ApplicationStatus::Applied, 1)
                .await,
            Err(SyncError::NotConfigured)
        ));
        assert!(matches!(
            noop.update_application_status("p", ApplicationStatus::Offer).await,
            Err(SyncError::NotConfigured)
        ));
        assert!(matches!(
            noop.list_user_records(1).await,
            Err(SyncError::NotConfigured)
        ));
    }
}
