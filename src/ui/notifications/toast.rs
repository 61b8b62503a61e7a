// SPDX-License-Identifier: MPL-2.0
//! Toast widgets for rendering the notification stack.
//!
//! Toasts are the visual representation of stack items, appearing as small
//! cards with a state-colored accent, a dismiss button and, for expandable
//! cards, an expand toggle. Fading and collapsing are left to the host.

use super::clock::Clock;
use super::item::{is_unfinished, NotificationItem};
use super::stack::{Message, NotificationStack};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

/// What the overlay draws for the current stack state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OverlayMode {
    /// No cards: nothing to draw or track.
    Empty,
    /// Hidden with cards: an invisible zone still reports pointer movement.
    Dormant,
    Shown,
}

fn overlay_mode<C: Clock>(stack: &NotificationStack<C>) -> OverlayMode {
    if stack.is_empty() {
        OverlayMode::Empty
    } else if stack.is_visible() {
        OverlayMode::Shown
    } else {
        OverlayMode::Dormant
    }
}

impl Toast {
    /// Renders a single card.
    pub fn view(item: &dyn NotificationItem) -> Element<'_, Message> {
        let id = item.id();
        let accent_color = accent_color(item);

        let mut body = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(item.title()).size(typography::BODY));

        // Collapsed expandable cards only show their headline
        let expanded = item.as_expandable().map(|e| e.is_expanded());
        if expanded.unwrap_or(true) {
            if let Some(detail) = item.detail() {
                body = body.push(Text::new(detail).size(typography::CAPTION));
            }
        }

        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(body)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            );

        if let Some(expanded) = expanded {
            let label = if expanded { "▾" } else { "▸" };
            content = content.push(
                button(text(label).size(typography::BODY))
                    .on_press(Message::ToggleExpanded(id))
                    .padding(spacing::XXS)
                    .style(flat_button_style),
            );
        }

        content = content.push(
            button(text("×").size(typography::BODY))
                .on_press(Message::Dismiss(id))
                .padding(spacing::XXS)
                .style(flat_button_style),
        );

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders the whole stack in the bottom-right corner, newest card on top.
    ///
    /// Pointer movement over the cards is reported as
    /// [`Message::PointerMoved`]. While the stack is hidden nothing is drawn,
    /// but the area the cards occupy keeps reporting pointer movement so the
    /// stack can come back.
    pub fn view_overlay<C: Clock>(stack: &NotificationStack<C>) -> Element<'_, Message> {
        match overlay_mode(stack) {
            OverlayMode::Empty => {
                // Return an empty container that takes no space
                return Container::new(text(""))
                    .width(Length::Shrink)
                    .height(Length::Shrink)
                    .into();
            }
            OverlayMode::Dormant => {
                let zone = Space::new()
                    .width(Length::Fixed(sizing::TOAST_WIDTH))
                    .height(Length::Fixed(hover_zone_height(stack.len())));
                return bottom_right(mouse_area(zone).on_move(|_| Message::PointerMoved));
            }
            OverlayMode::Shown => {}
        }

        let close_all = button(text("Close all").size(typography::CAPTION))
            .on_press(Message::CloseAll)
            .padding(spacing::XXS)
            .style(flat_button_style);

        let mut children: Vec<Element<'_, Message>> = vec![close_all.into()];
        children.extend(stack.items().map(|item| Self::view(item)));

        let toast_column = Column::with_children(children)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        bottom_right(mouse_area(toast_column).on_move(|_| Message::PointerMoved))
    }
}

/// Positions the overlay content in the bottom-right corner with padding.
fn bottom_right<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

fn hover_zone_height(cards: usize) -> f32 {
    sizing::TOAST_HOVER_HEIGHT * cards as f32
}

/// Accent for a card: in-flight work, completed work, or a plain notice.
fn accent_color(item: &dyn NotificationItem) -> Color {
    if is_unfinished(item) {
        palette::INFO_500
    } else if item.as_progress().is_some() {
        palette::SUCCESS_500
    } else {
        palette::PRIMARY_500
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss, expand and close-all buttons.
fn flat_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let hover_background = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: hover_background(opacity::OVERLAY_SUBTLE),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: hover_background(opacity::OVERLAY_MEDIUM),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StackConfig;
    use crate::ui::notifications::cards::{ProgressCard, StatusCard};
    use crate::ui::notifications::clock::ManualClock;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(&theme, accent);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn accent_tracks_progress_state() {
        let (card, tracker) = ProgressCard::new("Encoding");
        assert_eq!(accent_color(&card), palette::INFO_500);

        tracker.finish();
        assert_eq!(accent_color(&card), palette::SUCCESS_500);

        assert_eq!(accent_color(&StatusCard::new("plain")), palette::PRIMARY_500);
    }

    #[test]
    fn hidden_stack_with_cards_keeps_tracking_pointer() {
        let mut stack = NotificationStack::with_clock(&StackConfig::default(), ManualClock::new());
        assert_eq!(overlay_mode(&stack), OverlayMode::Empty);

        stack.add(StatusCard::new("card")).expect("add");
        assert_eq!(overlay_mode(&stack), OverlayMode::Shown);

        stack.hide();
        assert_eq!(overlay_mode(&stack), OverlayMode::Dormant);

        // What the dormant zone emits brings the stack back
        stack.handle_message(&Message::PointerMoved);
        assert_eq!(overlay_mode(&stack), OverlayMode::Shown);
    }

    #[test]
    fn hover_zone_grows_with_cards() {
        assert!(hover_zone_height(3) > hover_zone_height(1));
    }

    #[test]
    fn active_button_has_no_background() {
        let style = flat_button_style(&Theme::Light, button::Status::Active);
        assert!(style.background.is_none());
    }
}
