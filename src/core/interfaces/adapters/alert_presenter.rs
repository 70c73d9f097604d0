use async_trait::async_trait;

#[async_trait]
pub trait AlertPresenter: Send + Sync {
    /// Resolves once the user has dismissed the alert.
    async fn show_alert(&self, title: &str, message: &str);
}
