//! Login View
//!
//! The whole sign-in screen: the login form, a divider, and the provider
//! buttons, stacked inside a scrollable over the screen background.

use iced::widget::{column, container, scrollable, Space};
use iced::{Element, Length, Task};
use tracing::debug;

use deepthought_shared::ProviderKind;

use crate::ui::components::{LoginForm, LoginFormMessage, ProviderButtonList};
use crate::ui::theme::{container_styles, utils};

/// Messages for the login view
#[derive(Debug, Clone, PartialEq)]
pub enum LoginMessage {
    /// Message for the embedded login form
    Form(LoginFormMessage),
    /// A "continue with" button was tapped
    ProviderSelected(ProviderKind),
}

/// Login view component
#[derive(Debug, Default)]
pub struct LoginView {
    form: LoginForm,
    providers: ProviderButtonList,
}

impl LoginView {
    /// Create a new login view with empty fields
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the view with a message
    pub fn update(&mut self, message: LoginMessage) -> Task<LoginMessage> {
        match message {
            LoginMessage::Form(form_message) => {
                self.form.update(form_message).map(LoginMessage::Form)
            }
            LoginMessage::ProviderSelected(kind) => {
                debug!("Provider button pressed: {}; no action configured", kind);
                Task::none()
            }
        }
    }

    /// Render the view
    pub fn view(&self) -> Element<'_, LoginMessage> {
        let content = column![
            self.form.view().map(LoginMessage::Form),
            self.view_divider(),
            self.providers.view(LoginMessage::ProviderSelected),
        ]
        .spacing(utils::standard_spacing())
        .width(Length::Fill);

        container(
            scrollable(
                container(content)
                    .padding(utils::screen_padding())
                    .width(Length::Fill),
            )
            .width(Length::Fill)
            .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container_styles::screen_background())
        .into()
    }

    fn view_divider(&self) -> Element<'_, LoginMessage> {
        container(
            container(Space::with_height(Length::Fixed(1.0)))
                .width(Length::Fill)
                .height(Length::Fixed(1.0))
                .style(container_styles::divider()),
        )
        .padding(utils::divider_padding())
        .width(Length::Fill)
        .into()
    }

    #[allow(dead_code)]
    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    #[allow(dead_code)]
    pub fn providers(&self) -> &ProviderButtonList {
        &self.providers
    }
}
