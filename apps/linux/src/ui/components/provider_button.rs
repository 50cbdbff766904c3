//! Outlined "continue with" button

use iced::widget::{button, row, svg, text, Space};
use iced::{Alignment, Element, Length};
use tracing::warn;

use deepthought_shared::ProviderEntry;

use crate::ui::theme::{self, button_styles, svg_styles, utils, PROVIDER_LABEL};

/// Renders one provider entry as a white pill with a leading icon.
///
/// Template icons are tinted with the label color, original icons keep their
/// own colors. Each tap produces `on_press` once.
pub fn provider_button<'a, Message: Clone + 'a>(
    entry: ProviderEntry,
    on_press: Message,
) -> Element<'a, Message> {
    let icon_size = Length::Fixed(utils::provider_icon_size());

    let icon: Element<'a, Message> = match theme::icon_handle(entry.icon) {
        Some(handle) => svg(handle)
            .width(icon_size)
            .height(icon_size)
            .style(svg_styles::render_mode(entry.render_mode, PROVIDER_LABEL))
            .into(),
        None => {
            warn!("No artwork for icon {:?}", entry.icon);
            Space::new(icon_size, icon_size).into()
        }
    };

    let content = row![
        icon,
        text(entry.title)
            .size(utils::typography::label_text_size())
            .font(utils::typography::semibold())
            .color(PROVIDER_LABEL),
        Space::with_width(Length::Fill),
    ]
    .spacing(utils::icon_label_spacing())
    .align_y(Alignment::Center)
    .height(Length::Fill);

    button(content)
        .on_press(on_press)
        .width(Length::Fill)
        .height(Length::Fixed(utils::button_height()))
        .padding(utils::provider_button_padding())
        .style(button_styles::provider_outlined())
        .into()
}
