use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

use crate::core::models::ThemeMode;

const LEAF_GREEN: Color = Color {
    r: 0.086,
    g: 0.502,
    b: 0.239,
    a: 1.0,
};
const LEAF_GREEN_HOVER: Color = Color {
    r: 0.082,
    g: 0.439,
    b: 0.208,
    a: 1.0,
};
const LEAF_GREEN_PRESSED: Color = Color {
    r: 0.067,
    g: 0.365,
    b: 0.173,
    a: 1.0,
};
const DISABLED_GRAY: Color = Color {
    r: 0.612,
    g: 0.639,
    b: 0.686,
    a: 1.0,
};

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.06, 0.09, 0.07),
                text: Color::from_rgb(0.93, 0.96, 0.93),
                primary: Color::from_rgb(0.29, 0.78, 0.45),
                success: Color::from_rgb(0.2, 0.9, 0.4),
                danger: Color::from_rgb(1.0, 0.4, 0.4),
                warning: Color::from_rgb(1.0, 0.7, 0.0),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.863, 0.988, 0.906),
                text: Color::from_rgb(0.1, 0.1, 0.1),
                primary: LEAF_GREEN,
                success: Color::from_rgb(0.1, 0.7, 0.3),
                danger: Color::from_rgb(0.725, 0.110, 0.110),
                warning: Color::from_rgb(0.9, 0.6, 0.0),
            },
        ),
    }
}

fn button_style_with(background: Color, text_color: Color, snap: bool) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: background,
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow::default(),
        snap,
    }
}

pub fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => button_style_with(LEAF_GREEN, Color::WHITE, false),
        button::Status::Hovered => button_style_with(LEAF_GREEN_HOVER, Color::WHITE, false),
        button::Status::Pressed => button_style_with(LEAF_GREEN_PRESSED, Color::WHITE, true),
        button::Status::Disabled => button_style_with(DISABLED_GRAY, Color::WHITE, false),
    }
}

pub fn secondary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = LEAF_GREEN_PRESSED;
    let mut style = match status {
        button::Status::Active => button_style_with(Color::WHITE, text_color, false),
        button::Status::Hovered => {
            button_style_with(Color::from_rgb(0.941, 0.992, 0.957), text_color, false)
        }
        button::Status::Pressed => {
            button_style_with(Color::from_rgb(0.863, 0.988, 0.906), text_color, true)
        }
        button::Status::Disabled => {
            button_style_with(Color::from_rgb(0.95, 0.95, 0.95), DISABLED_GRAY, false)
        }
    };
    style.border.color = LEAF_GREEN;
    style
}

pub fn panel_style(theme: &Theme) -> container::Style {
    let palette = theme.palette();
    let background = if palette.background.r + palette.background.g + palette.background.b < 1.5 {
        Color::from_rgb(0.11, 0.15, 0.12)
    } else {
        Color::WHITE
    };

    container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(palette.text),
        border: Border {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

pub fn error_banner_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgb(0.996, 0.949, 0.949))),
        text_color: Some(Color::from_rgb(0.725, 0.110, 0.110)),
        border: Border {
            color: Color::from_rgb(0.996, 0.792, 0.792),
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

pub fn drop_zone_style(is_file_hovered: bool) -> container::Style {
    let (background, border_alpha) = if is_file_hovered {
        (Color::from_rgba(0.086, 0.502, 0.239, 0.08), 0.8)
    } else {
        (Color::TRANSPARENT, 0.3)
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: Color::from_rgba(0.086, 0.502, 0.239, border_alpha),
            width: 2.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

pub fn muted_text_color() -> Color {
    Color::from_rgba(0.45, 0.45, 0.45, 1.0)
}

pub fn heading_text_color() -> Color {
    Color::from_rgb(0.086, 0.396, 0.204)
}
