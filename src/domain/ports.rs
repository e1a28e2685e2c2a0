use crate::domain::model::{Application, Credentials, Session};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn management_url(&self) -> &str;
    fn organization(&self) -> &str;
    fn environment(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn page_size(&self) -> usize;
}

#[async_trait]
pub trait ManagementApi: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<Session>;

    /// 回傳完整清單，分頁之間等待 `delay`
    async fn list_applications(
        &self,
        session: &Session,
        delay: Duration,
    ) -> Result<Vec<Application>>;
}

pub trait Console: Send {
    fn raw(&mut self, line: &str) -> Result<()>;
}
