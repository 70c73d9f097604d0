use std::path::PathBuf;
use std::sync::Arc;

use iced::widget::image::Handle;
use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::window::{self, Id};
use iced::{Alignment, Background, Element, Length, Size, Task, Theme};

use crate::core::interfaces::adapters::{
    AlertPresenter, ImageFilePicker, PlantIdentificationService,
};
use crate::core::interfaces::ports::CameraDevice;
use crate::core::models::{
    IdentificationError, PlantRecord, SelectedImage, SessionState, UserSettings,
};
use crate::core::orchestrators::{camera_capture, image_acquisition};
use crate::global_constants::{
    ALERT_CAMERA_CAPTURE_FAILED, ALERT_NO_CAMERA, ALERT_TITLE_CAMERA, APPLICATION_SUBTITLE,
    APPLICATION_TITLE, STATUS_CAPTURING, STATUS_IDENTIFICATION_FAILED, STATUS_IDENTIFIED,
    STATUS_IDENTIFYING, STATUS_IMAGE_SELECTED, STATUS_READY,
};
use crate::presentation::app_theme;
use crate::presentation::{PlantInfoView, UploadZoneMessage, UploadZoneView};

pub struct AppOrchestrator {
    plant_identifier: Arc<dyn PlantIdentificationService>,
    camera_device: Arc<dyn CameraDevice>,
    file_picker: Arc<dyn ImageFilePicker>,
    alert_presenter: Arc<dyn AlertPresenter>,
    settings: UserSettings,
    session: SessionState,
    preview_handle: Option<Handle>,
    has_video_input: bool,
    is_file_hovered: bool,
    active_alert: Option<&'static str>,
    pending_image_path: Option<PathBuf>,
    main_window_id: Option<Id>,
    status: String,
}

#[derive(Clone)]
pub enum OrchestratorMessage {
    OpenMainWindow,
    WindowClosed(Id),
    CameraDetectionFinished(bool),
    UploadZone(UploadZoneMessage),
    ImageFileChosen(Option<PathBuf>),
    FileHovered,
    FileHoverLeft,
    FileDropped(PathBuf),
    ImageLoaded(PathBuf, Result<SelectedImage, String>),
    CameraCaptureFinished(Result<SelectedImage, String>),
    AlertDismissed,
    IdentifyPlant,
    IdentificationFinished(Result<PlantRecord, IdentificationError>),
}

impl std::fmt::Debug for OrchestratorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrchestratorMessage::OpenMainWindow => write!(f, "OpenMainWindow"),
            OrchestratorMessage::WindowClosed(id) => write!(f, "WindowClosed({:?})", id),
            OrchestratorMessage::CameraDetectionFinished(found) => {
                write!(f, "CameraDetectionFinished({})", found)
            }
            OrchestratorMessage::UploadZone(msg) => write!(f, "UploadZone({:?})", msg),
            OrchestratorMessage::ImageFileChosen(path) => write!(f, "ImageFileChosen({:?})", path),
            OrchestratorMessage::FileHovered => write!(f, "FileHovered"),
            OrchestratorMessage::FileHoverLeft => write!(f, "FileHoverLeft"),
            OrchestratorMessage::FileDropped(path) => write!(f, "FileDropped({:?})", path),
            OrchestratorMessage::ImageLoaded(path, result) => {
                write!(f, "ImageLoaded({:?}, {:?})", path, result.is_ok())
            }
            OrchestratorMessage::CameraCaptureFinished(result) => {
                write!(f, "CameraCaptureFinished({:?})", result.is_ok())
            }
            OrchestratorMessage::AlertDismissed => write!(f, "AlertDismissed"),
            OrchestratorMessage::IdentifyPlant => write!(f, "IdentifyPlant"),
            OrchestratorMessage::IdentificationFinished(result) => {
                write!(f, "IdentificationFinished({:?})", result.is_ok())
            }
        }
    }
}

impl AppOrchestrator {
    pub fn build(
        plant_identifier: Arc<dyn PlantIdentificationService>,
        camera_device: Arc<dyn CameraDevice>,
        file_picker: Arc<dyn ImageFilePicker>,
        alert_presenter: Arc<dyn AlertPresenter>,
        settings: UserSettings,
    ) -> Self {
        Self {
            plant_identifier,
            camera_device,
            file_picker,
            alert_presenter,
            settings,
            session: SessionState::default(),
            preview_handle: None,
            has_video_input: false,
            is_file_hovered: false,
            active_alert: None,
            pending_image_path: None,
            main_window_id: None,
            status: STATUS_READY.to_string(),
        }
    }

    pub fn startup_tasks(&self) -> Task<OrchestratorMessage> {
        Task::batch(vec![
            Task::done(OrchestratorMessage::OpenMainWindow),
            self.detect_camera(),
        ])
    }

    pub fn get_window_title(&self, _window: Id) -> String {
        APPLICATION_TITLE.to_string()
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        log::info!("[ORCHESTRATOR] Received message: {:?}", message);

        match message {
            OrchestratorMessage::OpenMainWindow => self.handle_open_main_window(),
            OrchestratorMessage::WindowClosed(id) => self.handle_window_closed(id),
            OrchestratorMessage::CameraDetectionFinished(found) => {
                self.has_video_input = found;
                Task::none()
            }
            OrchestratorMessage::UploadZone(zone_msg) => self.handle_upload_zone_message(zone_msg),
            OrchestratorMessage::ImageFileChosen(Some(path)) => self.load_image(path),
            OrchestratorMessage::ImageFileChosen(None) => Task::none(),
            OrchestratorMessage::FileHovered => {
                self.is_file_hovered = true;
                Task::none()
            }
            OrchestratorMessage::FileHoverLeft => {
                self.is_file_hovered = false;
                Task::none()
            }
            OrchestratorMessage::FileDropped(path) => self.handle_file_dropped(path),
            OrchestratorMessage::ImageLoaded(path, result) => {
                self.handle_image_loaded(path, result)
            }
            OrchestratorMessage::CameraCaptureFinished(result) => {
                self.handle_camera_capture_finished(result)
            }
            OrchestratorMessage::AlertDismissed => {
                self.active_alert = None;
                Task::none()
            }
            OrchestratorMessage::IdentifyPlant => self.handle_identify_plant(),
            OrchestratorMessage::IdentificationFinished(result) => {
                self.handle_identification_finished(result)
            }
        }
    }

    pub fn render_view(&self, window_id: Id) -> Element<'_, OrchestratorMessage> {
        if Some(window_id) == self.main_window_id {
            self.render_main_window()
        } else {
            text("Loading...").into()
        }
    }

    fn handle_open_main_window(&mut self) -> Task<OrchestratorMessage> {
        if self.main_window_id.is_some() {
            log::warn!("[ORCHESTRATOR] Main window already exists and is open");
            return Task::none();
        }

        let (id, task) = window::open(window::Settings {
            size: Size::new(1100.0, 820.0),
            position: window::Position::Centered,
            ..Default::default()
        });

        self.main_window_id = Some(id);
        log::info!("[ORCHESTRATOR] Main window created with ID: {:?}", id);
        task.discard()
    }

    fn handle_window_closed(&mut self, id: Id) -> Task<OrchestratorMessage> {
        log::info!("[ORCHESTRATOR] Window closed: {:?}", id);

        if Some(id) == self.main_window_id {
            self.main_window_id = None;
            log::info!("[ORCHESTRATOR] Main window closed, exiting");
            return iced::exit();
        }
        Task::none()
    }

    fn detect_camera(&self) -> Task<OrchestratorMessage> {
        let camera_device = Arc::clone(&self.camera_device);

        Task::future(async move {
            let found = tokio::task::spawn_blocking(move || {
                camera_capture::detect_video_input(camera_device.as_ref())
            })
            .await
            .unwrap_or(false);
            OrchestratorMessage::CameraDetectionFinished(found)
        })
    }

    fn handle_upload_zone_message(&mut self, zone_msg: UploadZoneMessage) -> Task<OrchestratorMessage> {
        if let Some(alert) = self.active_alert {
            log::debug!("[ORCHESTRATOR] Ignoring {:?} while alert is open: {}", zone_msg, alert);
            return Task::none();
        }

        match zone_msg {
            UploadZoneMessage::BrowseRequested => {
                let file_picker = Arc::clone(&self.file_picker);
                Task::future(async move {
                    OrchestratorMessage::ImageFileChosen(file_picker.pick_image_file().await)
                })
            }
            UploadZoneMessage::CaptureRequested => self.handle_capture_requested(),
        }
    }

    /// Only the first file of a drop gesture counts; if it is not an image the
    /// whole drop is ignored.
    fn handle_file_dropped(&mut self, path: PathBuf) -> Task<OrchestratorMessage> {
        let is_first_of_gesture = std::mem::replace(&mut self.is_file_hovered, false);

        if let Some(alert) = self.active_alert {
            log::debug!("[ORCHESTRATOR] Ignoring drop of {:?} while alert is open: {}", path, alert);
            return Task::none();
        }
        if !is_first_of_gesture {
            log::debug!("[ORCHESTRATOR] Ignoring additional dropped file: {:?}", path);
            return Task::none();
        }
        if !image_acquisition::is_acceptable_drop(&path) {
            return Task::none();
        }
        self.load_image(path)
    }

    /// The most recently requested file wins; earlier loads still in flight
    /// are discarded when they finish.
    fn load_image(&mut self, path: PathBuf) -> Task<OrchestratorMessage> {
        self.pending_image_path = Some(path.clone());

        Task::future(async move {
            let result = image_acquisition::load_image_file(&path)
                .await
                .map_err(|e| format!("{:#}", e));
            OrchestratorMessage::ImageLoaded(path, result)
        })
    }

    fn handle_image_loaded(
        &mut self,
        path: PathBuf,
        result: Result<SelectedImage, String>,
    ) -> Task<OrchestratorMessage> {
        if self.pending_image_path.as_ref() != Some(&path) {
            log::debug!("[ORCHESTRATOR] Discarding superseded load of {:?}", path);
            return Task::none();
        }
        self.pending_image_path = None;

        match result {
            Ok(image) => self.select_image(image),
            Err(e) => {
                log::error!("[ORCHESTRATOR] Failed to load image: {}", e);
                self.status = format!("Failed to load image: {}", e);
            }
        }
        Task::none()
    }

    fn select_image(&mut self, image: SelectedImage) {
        log::info!("[ORCHESTRATOR] Image selected: {:?}", image);

        self.preview_handle = Some(Handle::from_bytes(image.bytes().to_vec()));
        self.session = self.session.with_selected_image(image);
        if !self.session.is_loading() {
            self.status = STATUS_IMAGE_SELECTED.to_string();
        }
    }

    fn handle_capture_requested(&mut self) -> Task<OrchestratorMessage> {
        if !self.has_video_input {
            return self.show_camera_alert(ALERT_NO_CAMERA);
        }

        log::info!("[ORCHESTRATOR] Capturing image from camera");
        self.status = STATUS_CAPTURING.to_string();
        let camera_device = Arc::clone(&self.camera_device);

        Task::future(async move {
            let capture = tokio::task::spawn_blocking(move || {
                camera_capture::capture_single_frame(camera_device.as_ref())
            })
            .await;

            let result = match capture {
                Ok(Ok(image)) => Ok(image),
                Ok(Err(e)) => Err(format!("{:#}", e)),
                Err(e) => Err(e.to_string()),
            };
            OrchestratorMessage::CameraCaptureFinished(result)
        })
    }

    fn handle_camera_capture_finished(
        &mut self,
        result: Result<SelectedImage, String>,
    ) -> Task<OrchestratorMessage> {
        match result {
            Ok(image) => {
                self.pending_image_path = None;
                self.select_image(image);
                Task::none()
            }
            Err(e) => {
                log::error!("[ORCHESTRATOR] Error capturing image from camera: {}", e);
                self.show_camera_alert(ALERT_CAMERA_CAPTURE_FAILED)
            }
        }
    }

    /// Camera problems are reported in a modal dialog rather than inline.
    fn show_camera_alert(&mut self, message: &'static str) -> Task<OrchestratorMessage> {
        self.active_alert = Some(message);
        self.status = message.to_string();
        let alert_presenter = Arc::clone(&self.alert_presenter);

        Task::future(async move {
            alert_presenter.show_alert(ALERT_TITLE_CAMERA, message).await;
            OrchestratorMessage::AlertDismissed
        })
    }

    fn handle_identify_plant(&mut self) -> Task<OrchestratorMessage> {
        if self.active_alert.is_some() {
            return Task::none();
        }

        let Some(next_session) = self.session.begin_identification() else {
            log::debug!("[ORCHESTRATOR] Identify ignored: no image or request in flight");
            return Task::none();
        };
        let Some(image) = next_session.selected_image().cloned() else {
            return Task::none();
        };

        self.session = next_session;
        self.status = STATUS_IDENTIFYING.to_string();
        log::info!("[ORCHESTRATOR] Starting identification for {:?}", image);

        let plant_identifier = Arc::clone(&self.plant_identifier);
        Task::future(async move {
            let result = plant_identifier.identify_plant(&image).await;
            OrchestratorMessage::IdentificationFinished(result)
        })
    }

    fn handle_identification_finished(
        &mut self,
        result: Result<PlantRecord, IdentificationError>,
    ) -> Task<OrchestratorMessage> {
        match &result {
            Ok(record) => {
                log::info!("[ORCHESTRATOR] Identification complete: {}", record.name);
                self.status = STATUS_IDENTIFIED.to_string();
            }
            Err(e) => {
                log::error!("[ORCHESTRATOR] Identification failed: {}", e);
                self.status = STATUS_IDENTIFICATION_FAILED.to_string();
            }
        }

        self.session = self.session.finish_identification(result);
        Task::none()
    }

    pub fn get_theme(&self, _window: Id) -> Theme {
        app_theme::get_theme(&self.settings.theme_mode)
    }

    fn render_main_window(&self) -> Element<'_, OrchestratorMessage> {
        let title = text(APPLICATION_TITLE).size(44).style(|_theme: &iced::Theme| {
            iced::widget::text::Style {
                color: Some(app_theme::heading_text_color()),
            }
        });
        let subtitle = text(APPLICATION_SUBTITLE)
            .size(16)
            .width(Length::Fixed(640.0))
            .align_x(Alignment::Center);

        let header_section = column![title, subtitle]
            .spacing(12)
            .align_x(Alignment::Center)
            .width(Length::Fill);

        let mut top_row = row![self.render_upload_panel()].spacing(24);
        if let Some(record) = self.session.plant_record() {
            top_row = top_row.push(
                container(PlantInfoView::build(record).render_details_panel())
                    .width(Length::FillPortion(1)),
            );
        } else {
            top_row = top_row.push(Space::new().width(Length::FillPortion(1)));
        }

        let mut content = column![header_section, top_row]
            .spacing(32)
            .padding(40)
            .width(Length::Fill);

        if let Some(record) = self.session.plant_record() {
            let plant_info_view = PlantInfoView::build(record);
            content = content
                .push(plant_info_view.render_plant_card())
                .push(plant_info_view.render_conditions_panel());
        }

        content = content.push(self.render_status_indicator());

        container(scrollable(content))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|theme: &Theme| {
                let palette = theme.palette();
                iced::widget::container::Style {
                    background: Some(Background::Color(palette.background)),
                    text_color: Some(palette.text),
                    ..Default::default()
                }
            })
            .into()
    }

    fn render_upload_panel(&self) -> Element<'_, OrchestratorMessage> {
        let heading = text("Upload Your Plant Photo").size(24).style(|_theme: &iced::Theme| {
            iced::widget::text::Style {
                color: Some(app_theme::heading_text_color()),
            }
        });

        let upload_zone = UploadZoneView::build(
            self.preview_handle.as_ref(),
            self.has_video_input,
            self.is_file_hovered,
        )
        .render_ui()
        .map(OrchestratorMessage::UploadZone);

        let mut panel = column![heading, upload_zone].spacing(20);

        if let Some(error_message) = self.session.error_message() {
            panel = panel.push(
                container(text(error_message).size(14))
                    .padding(16)
                    .width(Length::Fill)
                    .style(app_theme::error_banner_style),
            );
        }

        let button_label = if self.session.is_loading() {
            STATUS_IDENTIFYING
        } else {
            "Identify Plant"
        };
        let identify_btn = button(container(text(button_label).size(17)).center_x(Length::Fill))
        .padding([14, 24])
        .width(Length::Fill)
        .style(app_theme::primary_button_style)
        .on_press_maybe(self.can_submit().then_some(OrchestratorMessage::IdentifyPlant));

        panel = panel.push(identify_btn);

        container(panel.padding(28))
            .width(Length::FillPortion(1))
            .style(app_theme::panel_style)
            .into()
    }

    fn render_status_indicator(&self) -> Element<'_, OrchestratorMessage> {
        container(
            text(&self.status)
                .size(13)
                .style(|_theme: &iced::Theme| iced::widget::text::Style {
                    color: Some(app_theme::muted_text_color()),
                }),
        )
        .center_x(Length::Fill)
        .into()
    }

    fn can_submit(&self) -> bool {
        self.session.can_identify() && self.active_alert.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::interfaces::ports::CameraStream;
    use async_trait::async_trait;

    struct MockPlantIdentifier;
    #[async_trait]
    impl PlantIdentificationService for MockPlantIdentifier {
        async fn identify_plant(
            &self,
            _image: &SelectedImage,
        ) -> Result<PlantRecord, IdentificationError> {
            Ok(create_test_record())
        }
    }

    struct MockCameraDevice;
    impl CameraDevice for MockCameraDevice {
        fn has_video_input(&self) -> anyhow::Result<bool> {
            Ok(true)
        }

        fn open_stream(&self) -> anyhow::Result<Box<dyn CameraStream>> {
            anyhow::bail!("not used in orchestrator tests")
        }
    }

    struct MockFilePicker;
    #[async_trait]
    impl ImageFilePicker for MockFilePicker {
        async fn pick_image_file(&self) -> Option<PathBuf> {
            None
        }
    }

    struct MockAlertPresenter;
    #[async_trait]
    impl AlertPresenter for MockAlertPresenter {
        async fn show_alert(&self, _title: &str, _message: &str) {}
    }

    fn create_test_record() -> PlantRecord {
        PlantRecord {
            name: "Lavender".to_string(),
            description: "Fragrant purple spikes".to_string(),
            care: "Full sun, little water".to_string(),
            ..Default::default()
        }
    }

    fn create_test_image() -> SelectedImage {
        SelectedImage::new("lavender.png", "image/png", vec![0x89, b'P', b'N', b'G'])
    }

    fn create_test_orchestrator() -> AppOrchestrator {
        AppOrchestrator::build(
            Arc::new(MockPlantIdentifier),
            Arc::new(MockCameraDevice),
            Arc::new(MockFilePicker),
            Arc::new(MockAlertPresenter),
            UserSettings::default(),
        )
    }

    fn finish_loading(orchestrator: &mut AppOrchestrator, path: &str, image: SelectedImage) {
        let _ = orchestrator.update(OrchestratorMessage::ImageLoaded(
            PathBuf::from(path),
            Ok(image),
        ));
    }

    fn create_orchestrator_with_image() -> AppOrchestrator {
        let mut orchestrator = create_test_orchestrator();
        let path = "/photos/lavender.png";
        let _ = orchestrator.update(OrchestratorMessage::ImageFileChosen(Some(PathBuf::from(path))));
        finish_loading(&mut orchestrator, path, create_test_image());
        orchestrator
    }

    #[test]
    fn test_build_creates_orchestrator_with_correct_initial_state() {
        let orchestrator = create_test_orchestrator();

        assert_eq!(orchestrator.session, SessionState::default());
        assert!(orchestrator.preview_handle.is_none());
        assert!(orchestrator.main_window_id.is_none());
        assert!(!orchestrator.has_video_input);
        assert!(!orchestrator.can_submit());
        assert_eq!(orchestrator.status, STATUS_READY);
    }

    #[test]
    fn test_get_theme_follows_settings() {
        let mut orchestrator = create_test_orchestrator();
        orchestrator.settings.theme_mode = crate::core::models::ThemeMode::Dark;

        let theme = orchestrator.get_theme(Id::unique());

        assert_eq!(
            theme.palette().background,
            app_theme::get_theme(&crate::core::models::ThemeMode::Dark)
                .palette()
                .background
        );
    }

    #[test]
    fn test_get_window_title_returns_application_title() {
        let orchestrator = create_test_orchestrator();

        assert_eq!(orchestrator.get_window_title(Id::unique()), "Plant Identifier");
    }

    #[test]
    fn test_dropping_non_image_file_selects_nothing() {
        let mut orchestrator = create_test_orchestrator();
        let _ = orchestrator.update(OrchestratorMessage::FileHovered);

        let _ = orchestrator.update(OrchestratorMessage::FileDropped(PathBuf::from(
            "/tmp/notes.txt",
        )));

        assert!(orchestrator.session.selected_image().is_none());
        assert!(orchestrator.preview_handle.is_none());
        assert!(orchestrator.pending_image_path.is_none());
        assert!(!orchestrator.is_file_hovered);
        assert_eq!(orchestrator.status, STATUS_READY);
    }

    #[test]
    fn test_dropping_several_images_keeps_the_first() {
        let mut orchestrator = create_test_orchestrator();
        let first = SelectedImage::new("a.png", "image/png", vec![1]);
        let second = SelectedImage::new("b.png", "image/png", vec![2]);
        let _ = orchestrator.update(OrchestratorMessage::FileHovered);
        let _ = orchestrator.update(OrchestratorMessage::FileHovered);

        let _ = orchestrator.update(OrchestratorMessage::FileDropped(PathBuf::from("/tmp/a.png")));
        let _ = orchestrator.update(OrchestratorMessage::FileDropped(PathBuf::from("/tmp/b.png")));
        finish_loading(&mut orchestrator, "/tmp/b.png", second);
        finish_loading(&mut orchestrator, "/tmp/a.png", first.clone());

        assert_eq!(orchestrator.session.selected_image(), Some(&first));
        assert!(orchestrator.pending_image_path.is_none());
    }

    #[test]
    fn test_drop_whose_first_file_is_not_an_image_is_ignored_entirely() {
        let mut orchestrator = create_test_orchestrator();
        let _ = orchestrator.update(OrchestratorMessage::FileHovered);

        let _ = orchestrator.update(OrchestratorMessage::FileDropped(PathBuf::from("/tmp/notes.txt")));
        let _ = orchestrator.update(OrchestratorMessage::FileDropped(PathBuf::from("/tmp/a.png")));

        assert!(orchestrator.pending_image_path.is_none());
    }

    #[test]
    fn test_next_drop_gesture_is_accepted_again() {
        let mut orchestrator = create_test_orchestrator();
        let _ = orchestrator.update(OrchestratorMessage::FileHovered);
        let _ = orchestrator.update(OrchestratorMessage::FileDropped(PathBuf::from("/tmp/notes.txt")));

        let _ = orchestrator.update(OrchestratorMessage::FileHovered);
        let _ = orchestrator.update(OrchestratorMessage::FileDropped(PathBuf::from("/tmp/a.png")));

        assert_eq!(orchestrator.pending_image_path, Some(PathBuf::from("/tmp/a.png")));
    }

    #[test]
    fn test_latest_requested_image_wins_over_earlier_load() {
        let mut orchestrator = create_test_orchestrator();
        let browsed = SelectedImage::new("browsed.png", "image/png", vec![1]);
        let dropped = SelectedImage::new("dropped.png", "image/png", vec![2]);

        let _ = orchestrator.update(OrchestratorMessage::ImageFileChosen(Some(PathBuf::from(
            "/tmp/browsed.png",
        ))));
        let _ = orchestrator.update(OrchestratorMessage::FileHovered);
        let _ = orchestrator.update(OrchestratorMessage::FileDropped(PathBuf::from(
            "/tmp/dropped.png",
        )));
        finish_loading(&mut orchestrator, "/tmp/dropped.png", dropped.clone());
        finish_loading(&mut orchestrator, "/tmp/browsed.png", browsed);

        assert_eq!(orchestrator.session.selected_image(), Some(&dropped));
    }

    #[test]
    fn test_drop_is_ignored_while_camera_alert_is_open() {
        let mut orchestrator = create_test_orchestrator();
        let _ = orchestrator.update(OrchestratorMessage::UploadZone(
            UploadZoneMessage::CaptureRequested,
        ));
        let _ = orchestrator.update(OrchestratorMessage::FileHovered);

        let _ = orchestrator.update(OrchestratorMessage::FileDropped(PathBuf::from("/tmp/a.png")));

        assert_eq!(orchestrator.active_alert, Some(ALERT_NO_CAMERA));
        assert!(orchestrator.pending_image_path.is_none());
        assert!(!orchestrator.is_file_hovered);
    }

    #[test]
    fn test_image_loaded_selects_image_and_builds_preview() {
        let orchestrator = create_orchestrator_with_image();

        assert_eq!(
            orchestrator.session.selected_image(),
            Some(&create_test_image())
        );
        assert!(orchestrator.preview_handle.is_some());
        assert!(orchestrator.can_submit());
        assert_eq!(orchestrator.status, STATUS_IMAGE_SELECTED);
    }

    #[test]
    fn test_image_load_failure_reports_status_only() {
        let mut orchestrator = create_test_orchestrator();
        let _ = orchestrator.update(OrchestratorMessage::ImageFileChosen(Some(PathBuf::from(
            "/x.png",
        ))));

        let _ = orchestrator.update(OrchestratorMessage::ImageLoaded(
            PathBuf::from("/x.png"),
            Err("Unable to read /x.png".to_string()),
        ));

        assert!(orchestrator.session.selected_image().is_none());
        assert!(orchestrator.status.contains("Unable to read /x.png"));
    }

    #[test]
    fn test_identify_without_image_is_no_op() {
        let mut orchestrator = create_test_orchestrator();

        let _ = orchestrator.update(OrchestratorMessage::IdentifyPlant);

        assert!(!orchestrator.session.is_loading());
        assert_eq!(orchestrator.status, STATUS_READY);
    }

    #[test]
    fn test_identify_sets_loading_and_disables_resubmission() {
        let mut orchestrator = create_orchestrator_with_image();

        let _ = orchestrator.update(OrchestratorMessage::IdentifyPlant);
        let in_flight = orchestrator.session.clone();
        let _ = orchestrator.update(OrchestratorMessage::IdentifyPlant);

        assert!(orchestrator.session.is_loading());
        assert!(!orchestrator.can_submit());
        assert_eq!(orchestrator.session, in_flight);
        assert_eq!(orchestrator.status, STATUS_IDENTIFYING);
    }

    #[test]
    fn test_identification_success_shows_record() {
        let mut orchestrator = create_orchestrator_with_image();
        let _ = orchestrator.update(OrchestratorMessage::IdentifyPlant);

        let _ = orchestrator.update(OrchestratorMessage::IdentificationFinished(Ok(
            create_test_record(),
        )));

        assert_eq!(orchestrator.session.plant_record(), Some(&create_test_record()));
        assert!(orchestrator.session.error_message().is_none());
        assert!(orchestrator.can_submit());
    }

    #[test]
    fn test_identification_permission_failure_shows_inline_message() {
        let mut orchestrator = create_orchestrator_with_image();
        let _ = orchestrator.update(OrchestratorMessage::IdentifyPlant);

        let _ = orchestrator.update(OrchestratorMessage::IdentificationFinished(Err(
            IdentificationError::PermissionDenied,
        )));

        assert!(orchestrator.session.plant_record().is_none());
        assert_eq!(
            orchestrator.session.error_message(),
            Some("API key doesn't have access to Gemini Vision API. Please check your API key permissions.")
        );
        assert!(orchestrator.active_alert.is_none());
    }

    #[test]
    fn test_capture_without_camera_raises_alert() {
        let mut orchestrator = create_test_orchestrator();

        let _ = orchestrator.update(OrchestratorMessage::UploadZone(
            UploadZoneMessage::CaptureRequested,
        ));

        assert_eq!(orchestrator.active_alert, Some(ALERT_NO_CAMERA));
        assert!(orchestrator.session.selected_image().is_none());
    }

    #[test]
    fn test_camera_capture_failure_raises_alert_and_blocks_until_dismissed() {
        let mut orchestrator = create_orchestrator_with_image();
        let _ = orchestrator.update(OrchestratorMessage::CameraDetectionFinished(true));

        let _ = orchestrator.update(OrchestratorMessage::CameraCaptureFinished(Err(
            "permission denied".to_string(),
        )));

        assert_eq!(orchestrator.active_alert, Some(ALERT_CAMERA_CAPTURE_FAILED));
        assert!(orchestrator.session.error_message().is_none());

        let _ = orchestrator.update(OrchestratorMessage::IdentifyPlant);
        assert!(!orchestrator.session.is_loading());

        let _ = orchestrator.update(OrchestratorMessage::AlertDismissed);
        let _ = orchestrator.update(OrchestratorMessage::IdentifyPlant);
        assert!(orchestrator.session.is_loading());
    }

    #[test]
    fn test_camera_capture_success_selects_captured_image() {
        let mut orchestrator = create_test_orchestrator();
        let captured = SelectedImage::new("captured-image.jpg", "image/jpeg", vec![0xFF, 0xD8]);

        let _ = orchestrator.update(OrchestratorMessage::CameraCaptureFinished(Ok(
            captured.clone(),
        )));

        assert_eq!(orchestrator.session.selected_image(), Some(&captured));
        assert!(orchestrator.active_alert.is_none());
    }

    #[test]
    fn test_file_hover_events_toggle_highlight() {
        let mut orchestrator = create_test_orchestrator();

        let _ = orchestrator.update(OrchestratorMessage::FileHovered);
        assert!(orchestrator.is_file_hovered);

        let _ = orchestrator.update(OrchestratorMessage::FileHoverLeft);
        assert!(!orchestrator.is_file_hovered);
    }
}
