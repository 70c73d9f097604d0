use std::sync::Arc;

use iced::window::Id;
use iced::{Element, Task, Theme};

use crate::adapters::{GeminiPlantIdentifier, RfdAlertPresenter, RfdImageFilePicker};
use crate::core::interfaces::ports::CameraDevice;
use crate::core::models::UserSettings;
use crate::core::orchestrators::app_orchestrator::{AppOrchestrator, OrchestratorMessage};

pub struct PlantApp {
    orchestrator: AppOrchestrator,
}

impl PlantApp {
    pub fn build() -> (Self, Task<OrchestratorMessage>) {
        log::info!("[APP] Initializing application");

        let settings = UserSettings::load().unwrap_or_else(|e| {
            log::warn!("[APP] Failed to load settings: {}, using defaults", e);
            UserSettings::default()
        });
        log::info!(
            "[APP] Using model {} with key from ${}",
            settings.model_name,
            settings.api_key_env_var
        );

        let orchestrator = AppOrchestrator::build(
            Arc::new(GeminiPlantIdentifier::from_settings(&settings)),
            Self::select_camera_device(),
            Arc::new(RfdImageFilePicker::new()),
            Arc::new(RfdAlertPresenter::new()),
            settings,
        );

        let startup = orchestrator.startup_tasks();
        (Self { orchestrator }, startup)
    }

    #[cfg(feature = "camera")]
    fn select_camera_device() -> Arc<dyn CameraDevice> {
        log::info!("[APP] Camera support enabled");
        Arc::new(crate::ports::NokhwaCameraDevice::initialize())
    }

    #[cfg(not(feature = "camera"))]
    fn select_camera_device() -> Arc<dyn CameraDevice> {
        log::info!("[APP] Built without camera support");
        Arc::new(crate::ports::UnavailableCameraDevice::initialize())
    }

    pub fn handle_update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self, window_id: Id) -> Element<'_, OrchestratorMessage> {
        self.orchestrator.render_view(window_id)
    }

    pub fn window_title(&self, window_id: Id) -> String {
        self.orchestrator.get_window_title(window_id)
    }

    pub fn window_theme(&self, window_id: Id) -> Theme {
        self.orchestrator.get_theme(window_id)
    }

    pub fn handle_subscription(&self) -> iced::Subscription<OrchestratorMessage> {
        use iced::window;

        iced::event::listen_with(|event, _status, id| match event {
            iced::Event::Window(window::Event::Closed) => {
                Some(OrchestratorMessage::WindowClosed(id))
            }
            iced::Event::Window(window::Event::FileHovered(_)) => {
                Some(OrchestratorMessage::FileHovered)
            }
            iced::Event::Window(window::Event::FilesHoveredLeft) => {
                Some(OrchestratorMessage::FileHoverLeft)
            }
            iced::Event::Window(window::Event::FileDropped(path)) => {
                Some(OrchestratorMessage::FileDropped(path))
            }
            _ => None,
        })
    }
}
