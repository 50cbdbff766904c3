//! Primary action button
//!
//! Full-width filled capsule with a leading glyph and a semibold label. The
//! caller owns the `PressState`; the capsule, label and glyph are all drawn
//! from it so the whole button fades together while held.

use iced::widget::{container, mouse_area, row, svg, text};
use iced::{mouse, Alignment, Element, Length};

use deepthought_shared::{IconRef, PressState};

use crate::ui::theme::{self, button_styles, utils};

/// A full-width primary button. Always enabled.
///
/// `on_press_change` receives `Pressed` when the pointer goes down over the
/// button and `Resting` when it leaves while held. Releasing over the button
/// emits `on_release`.
pub fn primary_button<'a, Message: Clone + 'a>(
    label: &'a str,
    icon: IconRef,
    state: PressState,
    on_press_change: impl Fn(PressState) -> Message,
    on_release: Message,
) -> Element<'a, Message> {
    let foreground = button_styles::primary_foreground(state);
    let mut content = row![].spacing(8).align_y(Alignment::Center);

    if let Some(handle) = theme::icon_handle(icon) {
        content = content.push(
            svg(handle)
                .width(Length::Fixed(utils::lock_icon_size()))
                .height(Length::Fixed(utils::lock_icon_size()))
                .style(move |_theme, _status| svg::Style {
                    color: Some(foreground),
                }),
        );
    }

    content = content.push(
        text(label)
            .size(utils::typography::label_text_size())
            .font(utils::typography::semibold())
            .color(foreground),
    );

    let capsule = container(content)
        .center(Length::Fill)
        .height(Length::Fixed(utils::button_height()))
        .style(button_styles::primary_capsule(state));

    mouse_area(capsule)
        .on_press(on_press_change(PressState::Pressed))
        .on_exit(on_press_change(PressState::Resting))
        .on_release(on_release)
        .interaction(mouse::Interaction::Pointer)
        .into()
}
