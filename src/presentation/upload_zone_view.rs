use iced::widget::image::Handle;
use iced::widget::{button, column, container, text, Image};
use iced::{Alignment, ContentFit, Element, Length};

use crate::presentation::app_theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadZoneMessage {
    BrowseRequested,
    CaptureRequested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraControl {
    CaptureButton,
    NoCameraNotice,
}

/// With a preview the camera control is hidden, as in the drop area prompt.
pub fn camera_control(has_preview: bool, has_video_input: bool) -> Option<CameraControl> {
    match (has_preview, has_video_input) {
        (true, _) => None,
        (false, true) => Some(CameraControl::CaptureButton),
        (false, false) => Some(CameraControl::NoCameraNotice),
    }
}

pub fn prompt_text(has_preview: bool, is_file_hovered: bool) -> &'static str {
    match (is_file_hovered, has_preview) {
        (true, _) => "Release to use this image",
        (false, true) => "Click browse or drag to change image",
        (false, false) => "Drop your image here or click to browse",
    }
}

pub struct UploadZoneView<'a> {
    preview: Option<&'a Handle>,
    has_video_input: bool,
    is_file_hovered: bool,
}

impl<'a> UploadZoneView<'a> {
    pub fn build(preview: Option<&'a Handle>, has_video_input: bool, is_file_hovered: bool) -> Self {
        Self {
            preview,
            has_video_input,
            is_file_hovered,
        }
    }

    pub fn render_ui(&self) -> Element<'a, UploadZoneMessage> {
        let has_preview = self.preview.is_some();
        let mut content = column![].spacing(12).align_x(Alignment::Center);

        match camera_control(has_preview, self.has_video_input) {
            Some(CameraControl::CaptureButton) => {
                content = content.push(
                    button(text("Capture Image").size(15))
                        .padding([10, 24])
                        .width(Length::Fill)
                        .style(app_theme::primary_button_style)
                        .on_press(UploadZoneMessage::CaptureRequested),
                );
            }
            Some(CameraControl::NoCameraNotice) => {
                content = content.push(text("No camera detected").size(13).style(
                    |_theme: &iced::Theme| iced::widget::text::Style {
                        color: Some(app_theme::muted_text_color()),
                    },
                ));
            }
            None => {}
        }

        if let Some(handle) = self.preview {
            content = content.push(
                Image::new(handle.clone())
                    .content_fit(ContentFit::Contain)
                    .width(Length::Fill)
                    .height(Length::Fixed(220.0)),
            );
        } else {
            content = content.push(text("+").size(40).style(|_theme: &iced::Theme| {
                iced::widget::text::Style {
                    color: Some(app_theme::heading_text_color()),
                }
            }));
        }

        content = content.push(
            text(prompt_text(has_preview, self.is_file_hovered))
                .size(14)
                .style(|_theme: &iced::Theme| iced::widget::text::Style {
                    color: Some(app_theme::muted_text_color()),
                }),
        );

        content = content.push(
            button(text("Browse...").size(14))
                .padding([8, 20])
                .style(app_theme::secondary_button_style)
                .on_press(UploadZoneMessage::BrowseRequested),
        );

        let is_file_hovered = self.is_file_hovered;
        container(content)
            .padding(20)
            .width(Length::Fill)
            .height(Length::Fixed(320.0))
            .center_x(Length::Fill)
            .center_y(Length::Fixed(320.0))
            .style(move |_theme| app_theme::drop_zone_style(is_file_hovered))
            .into()
    }
}
