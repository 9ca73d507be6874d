//! # Status Banner Module
//!
//! Styled status banners used across pages: informational, success, and
//! warning. Each is a bordered container with a tinted background.

use crate::app::Message;
use iced::widget::{container, text};
use iced::{Background, Border, Color, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Info,
    Success,
    Warning,
}

impl BannerKind {
    fn palette(&self) -> (Color, Color, Color) {
        // (background, border, text)
        match self {
            BannerKind::Info => (
                Color::from_rgb(0.85, 0.92, 0.98),
                Color::from_rgb(0.45, 0.65, 0.85),
                Color::from_rgb(0.10, 0.25, 0.45),
            ),
            BannerKind::Success => (
                Color::from_rgb(0.85, 0.95, 0.85),
                Color::from_rgb(0.45, 0.75, 0.45),
                Color::from_rgb(0.10, 0.35, 0.10),
            ),
            BannerKind::Warning => (
                Color::from_rgb(0.99, 0.95, 0.82),
                Color::from_rgb(0.85, 0.70, 0.35),
                Color::from_rgb(0.45, 0.32, 0.05),
            ),
        }
    }
}

/// A full-width status banner
pub fn banner<'a>(kind: BannerKind, message: &'a str) -> Element<'a, Message> {
    let (background, border_color, text_color) = kind.palette();

    container(text(message).size(16))
        .padding(12)
        .width(Length::Fill)
        .style(move |_theme: &iced::Theme| container::Style {
            background: Some(Background::Color(background)),
            text_color: Some(text_color),
            border: Border {
                color: border_color,
                width: 1.0,
                radius: 6.0.into(),
            },
            ..Default::default()
        })
        .into()
}

pub fn info(message: &str) -> Element<'_, Message> {
    banner(BannerKind::Info, message)
}

pub fn success(message: &str) -> Element<'_, Message> {
    banner(BannerKind::Success, message)
}

pub fn warning(message: &str) -> Element<'_, Message> {
    banner(BannerKind::Warning, message)
}
