use async_trait::async_trait;

use crate::core::interfaces::adapters::AlertPresenter;

pub struct RfdAlertPresenter;

impl RfdAlertPresenter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AlertPresenter for RfdAlertPresenter {
    async fn show_alert(&self, title: &str, message: &str) {
        log::info!("[ALERT] {}: {}", title, message);

        rfd::AsyncMessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title(title)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show()
            .await;
    }
}
