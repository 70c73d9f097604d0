use iced::widget::{column, container, row, text};
use iced::{Element, Length};

use crate::core::models::PlantRecord;
use crate::presentation::app_theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailEntry {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSection {
    pub title: &'static str,
    pub entries: Vec<DetailEntry>,
}

/// Absent optional fields become empty strings, never placeholders.
fn entry(label: &'static str, value: &Option<String>) -> DetailEntry {
    DetailEntry {
        label,
        value: value.clone().unwrap_or_default(),
    }
}

pub fn plant_details_section(record: &PlantRecord) -> DetailSection {
    DetailSection {
        title: "Plant Details",
        entries: vec![
            entry("Scientific Name", &record.scientific_name),
            entry("Family", &record.family),
            entry("Native Region", &record.native_region),
        ],
    }
}

pub fn growing_conditions_section(record: &PlantRecord) -> DetailSection {
    DetailSection {
        title: "Growing Conditions",
        entries: vec![
            entry("Watering Needs", &record.watering_needs),
            entry("Sunlight", &record.sunlight_requirements),
            entry("Temperature", &record.temperature),
            entry("Humidity", &record.humidity),
            entry("Soil Type", &record.soil_type),
        ],
    }
}

pub struct PlantInfoView<'a> {
    record: &'a PlantRecord,
}

impl<'a> PlantInfoView<'a> {
    pub fn build(record: &'a PlantRecord) -> Self {
        Self { record }
    }

    pub fn render_details_panel<Message: 'a>(&self) -> Element<'a, Message> {
        render_section(plant_details_section(self.record))
    }

    pub fn render_conditions_panel<Message: 'a>(&self) -> Element<'a, Message> {
        render_section(growing_conditions_section(self.record))
    }

    /// Name, description and care, with the scientific name and growth rate
    /// only when the model supplied them.
    pub fn render_plant_card<Message: 'a>(&self) -> Element<'a, Message> {
        let record = self.record;

        let mut header = column![text(record.name.as_str())
            .size(30)
            .style(|_theme: &iced::Theme| iced::widget::text::Style {
                color: Some(app_theme::heading_text_color()),
            })]
        .spacing(4);
        if let Some(scientific_name) = &record.scientific_name {
            header = header.push(text(scientific_name.as_str()).size(18));
        }

        let mut description_column = column![
            section_heading("Description"),
            text(record.description.as_str()).size(15),
        ]
        .spacing(8)
        .width(Length::FillPortion(1));
        if let Some(growth_rate) = &record.growth_rate {
            description_column = description_column.push(
                container(text(format!("Growth Rate: {}", growth_rate)).size(15))
                    .padding(12)
                    .width(Length::Fill),
            );
        }

        let care_column = column![
            section_heading("Care Instructions"),
            text(record.care.as_str()).size(15),
        ]
        .spacing(8)
        .width(Length::FillPortion(1));

        let content = column![header, row![description_column, care_column].spacing(24)]
            .spacing(20)
            .padding(24);

        container(content)
            .width(Length::Fill)
            .style(app_theme::panel_style)
            .into()
    }
}

fn section_heading<'a, Message: 'a>(label: &'a str) -> Element<'a, Message> {
    text(label)
        .size(18)
        .style(|_theme: &iced::Theme| iced::widget::text::Style {
            color: Some(app_theme::heading_text_color()),
        })
        .into()
}

fn render_section<'a, Message: 'a>(section: DetailSection) -> Element<'a, Message> {
    let mut entries = column![].spacing(12);
    for detail in section.entries {
        entries = entries.push(
            column![
                text(detail.label)
                    .size(14)
                    .style(|_theme: &iced::Theme| iced::widget::text::Style {
                        color: Some(app_theme::muted_text_color()),
                    }),
                text(detail.value).size(16),
            ]
            .spacing(2),
        );
    }

    container(
        column![section_heading(section.title), entries]
            .spacing(16)
            .padding(24),
    )
    .width(Length::Fill)
    .style(app_theme::panel_style)
    .into()
}
