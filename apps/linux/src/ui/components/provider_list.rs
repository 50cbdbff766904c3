//! Fixed list of "continue with" buttons

use iced::widget::{column, container};
use iced::{Element, Length, Padding};

use deepthought_shared::{provider_catalog, ProviderEntry, ProviderKind};

use super::provider_button::provider_button;
use crate::ui::theme::utils;

/// The seven provider buttons in catalog order
#[derive(Debug, Clone)]
pub struct ProviderButtonList {
    entries: [ProviderEntry; 7],
}

impl Default for ProviderButtonList {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderButtonList {
    pub fn new() -> Self {
        Self {
            entries: provider_catalog(),
        }
    }

    #[allow(dead_code)]
    pub fn entries(&self) -> &[ProviderEntry] {
        &self.entries
    }

    /// Render the list; `on_select` maps the tapped provider to a message
    pub fn view<'a, Message: Clone + 'a>(
        &self,
        on_select: impl Fn(ProviderKind) -> Message,
    ) -> Element<'a, Message> {
        let last = self.entries.len() - 1;

        let buttons = self.entries.iter().enumerate().map(|(index, entry)| {
            let button = provider_button(*entry, on_select(entry.kind));

            if index == last {
                container(button)
                    .width(Length::Fill)
                    .padding(Padding {
                        bottom: utils::provider_list_trailing_space(),
                        ..Padding::ZERO
                    })
                    .into()
            } else {
                button
            }
        });

        column(buttons)
            .spacing(utils::standard_spacing())
            .width(Length::Fill)
            .into()
    }
}
