use crate::domain::model::{Application, Credentials, Session};
use crate::domain::ports::{ConfigProvider, ManagementApi};
use crate::utils::error::{ApimError, Result};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PageInfo {
    #[serde(default)]
    total_pages: u32,
}

#[derive(Debug, Deserialize)]
struct PagedApplications {
    data: Vec<Application>,
    #[serde(default)]
    page: Option<PageInfo>,
}

/// 列表端點可能回傳分頁封包或整個陣列
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApplicationsBody {
    Paged(PagedApplications),
    Complete(Vec<Application>),
}

/// reqwest 實作的 APIM 管理 API 客戶端
pub struct HttpManagementApi {
    client: Client,
    base_url: String,
    organization: String,
    environment: String,
    page_size: usize,
}

impl HttpManagementApi {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.management_url().trim_end_matches('/').to_string(),
            organization: config.organization().to_string(),
            environment: config.environment().to_string(),
            page_size: config.page_size(),
        })
    }

    fn login_endpoint(&self) -> String {
        format!(
            "{}/management/organizations/{}/user/login",
            self.base_url, self.organization
        )
    }

    fn applications_endpoint(&self) -> String {
        format!(
            "{}/management/organizations/{}/environments/{}/applications/_paged",
            self.base_url, self.organization, self.environment
        )
    }

    /// 非 2xx 回應轉成錯誤
    async fn check_status(endpoint: &str, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ApimError::AuthenticationError {
                status: status.as_u16(),
                message,
            });
        }

        Err(ApimError::ApiResponseError {
            status: status.as_u16(),
            endpoint: endpoint.to_string(),
            message,
        })
    }

    /// 伺服器有回應但內容不是預期的 JSON（例如入口網站的 HTML）
    async fn decode_body<T: DeserializeOwned>(endpoint: &str, response: Response) -> Result<T> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApimError::MalformedResponse {
            message: format!("{} returned an unexpected body: {}", endpoint, e),
        })
    }

    async fn fetch_page(&self, session: &Session, page: u32) -> Result<ApplicationsBody> {
        let endpoint = self.applications_endpoint();
        tracing::debug!("📡 Requesting applications page {} from {}", page, endpoint);

        let response = self
            .client
            .get(&endpoint)
            .bearer_auth(session.token())
            .query(&[("page", page.to_string()), ("size", self.page_size.to_string())])
            .send()
            .await?;
        tracing::debug!("📡 Applications response status: {}", response.status());

        let response = Self::check_status(&endpoint, response).await?;
        Self::decode_body(&endpoint, response).await
    }
}

#[async_trait]
impl ManagementApi for HttpManagementApi {
    async fn login(&self, credentials: &Credentials) -> Result<Session> {
        let endpoint = self.login_endpoint();
        tracing::debug!("🔐 Logging in as {} at {}", credentials.username, endpoint);

        let response = self
            .client
            .post(&endpoint)
            .basic_auth(&credentials.username, Some(&credentials.password))
            .send()
            .await?;
        tracing::debug!("🔐 Login response status: {}", response.status());

        let response = Self::check_status(&endpoint, response).await?;
        let body: LoginResponse = Self::decode_body(&endpoint, response).await?;

        match body.token {
            Some(token) if !token.is_empty() => Ok(Session::new(token)),
            _ => Err(ApimError::MalformedResponse {
                message: "login response does not contain a token".to_string(),
            }),
        }
    }

    async fn list_applications(
        &self,
        session: &Session,
        delay: Duration,
    ) -> Result<Vec<Application>> {
        let mut applications = Vec::new();
        let mut page = 1;

        loop {
            let paged = match self.fetch_page(session, page).await? {
                ApplicationsBody::Complete(items) => {
                    // 舊版端點一次回傳全部
                    applications.extend(items);
                    break;
                }
                ApplicationsBody::Paged(paged) => paged,
            };

            let received = paged.data.len();
            applications.extend(paged.data);

            let last_page = match &paged.page {
                Some(info) => page >= info.total_pages,
                None => true,
            };
            if last_page || received == 0 {
                break;
            }

            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            page += 1;
        }

        tracing::debug!(
            "📦 Retrieved {} applications over {} page(s)",
            applications.len(),
            page
        );
        Ok(applications)
    }
}
