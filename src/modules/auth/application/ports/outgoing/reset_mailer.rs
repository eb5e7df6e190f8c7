use async_trait::async_trait;

#[async_trait]
pub trait ResetMailer: Send + Sync {
    async fn send_reset_link(&self, to: &str, link: &str) -> Result<(), String>;
}
