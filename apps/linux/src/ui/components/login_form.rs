//! Login Form Component
//!
//! Email and password inputs plus the primary "Entrar" button. The form owns
//! the two text values and the press state of the button; each input edit
//! replaces the stored value before the next render. No validation is applied
//! and the button is always enabled.

use iced::widget::{column, text_input};
use iced::{Element, Length, Task};
use tracing::debug;

use deepthought_shared::models::LOCK_ICON;
use deepthought_shared::{FieldKind, LoginCredentials, PressState};

use super::button::primary_button;
use crate::ui::theme::{text_input_styles, utils};

/// Label of the primary button
pub const LOGIN_LABEL: &str = "Entrar";

/// Messages for the login form
#[derive(Debug, Clone, PartialEq)]
pub enum LoginFormMessage {
    /// Email input changed
    EmailChanged(String),
    /// Password input changed
    PasswordChanged(String),
    /// Pointer went down on the primary button, or left it while held
    PressChanged(PressState),
    /// Primary button released, or Enter inside either input
    Submit,
}

/// Login form component
#[derive(Debug, Default)]
pub struct LoginForm {
    credentials: LoginCredentials,
    press_state: PressState,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the form with a message
    pub fn update(&mut self, message: LoginFormMessage) -> Task<LoginFormMessage> {
        match message {
            LoginFormMessage::EmailChanged(email) => {
                self.credentials.set_email(email);
            }
            LoginFormMessage::PasswordChanged(password) => {
                self.credentials.set_password(password);
            }
            LoginFormMessage::PressChanged(state) => {
                self.press_state = state;
            }
            LoginFormMessage::Submit => {
                self.press_state = PressState::Resting;

                // No authentication backend is attached to this screen
                debug!(
                    "Login pressed (email: {} chars, password: {} chars); no action configured",
                    self.credentials.email().chars().count(),
                    self.credentials.password_len()
                );
            }
        }

        Task::none()
    }

    /// Render the form
    pub fn view(&self) -> Element<'_, LoginFormMessage> {
        column![
            self.field(FieldKind::Email, self.credentials.email()),
            self.field(FieldKind::Password, self.credentials.password()),
            primary_button(
                LOGIN_LABEL,
                LOCK_ICON,
                self.press_state,
                LoginFormMessage::PressChanged,
                LoginFormMessage::Submit,
            ),
        ]
        .spacing(utils::standard_spacing())
        .width(Length::Fill)
        .into()
    }

    fn field<'a>(&self, kind: FieldKind, value: &'a str) -> Element<'a, LoginFormMessage> {
        let hints = kind.hints();

        let on_input = match kind {
            FieldKind::Email => LoginFormMessage::EmailChanged,
            FieldKind::Password => LoginFormMessage::PasswordChanged,
        };

        text_input(kind.placeholder(), value)
            .on_input(on_input)
            .on_submit(LoginFormMessage::Submit)
            .secure(hints.secure)
            .padding(utils::text_input_padding())
            .size(utils::typography::text_input_size())
            .style(text_input_styles::rounded())
            .width(Length::Fill)
            .into()
    }

    /// Current email and password
    #[allow(dead_code)]
    pub fn credentials(&self) -> &LoginCredentials {
        &self.credentials
    }

    #[allow(dead_code)]
    pub fn press_state(&self) -> PressState {
        self.press_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let form = LoginForm::new();
        assert!(form.credentials().is_empty());
    }

    #[test]
    fn test_each_edit_replaces_stored_value() {
        let mut form = LoginForm::new();

        for partial in ["a", "a@", "a@b", "a@b.", "a@b.c", "a@b.co", "a@b.com"] {
            let _ = form.update(LoginFormMessage::EmailChanged(partial.to_string()));
            assert_eq!(form.credentials().email(), partial);
        }
    }

    #[test]
    fn test_password_kept_verbatim_and_masked() {
        let mut form = LoginForm::new();
        let _ = form.update(LoginFormMessage::PasswordChanged("secret1".to_string()));

        assert_eq!(form.credentials().password(), "secret1");
        assert_eq!(form.credentials().masked_password(), "•••••••");
        assert!(FieldKind::Password.hints().secure);
    }

    #[test]
    fn test_submit_changes_nothing() {
        let mut form = LoginForm::new();
        let _ = form.update(LoginFormMessage::EmailChanged("a@b.com".to_string()));
        let _ = form.update(LoginFormMessage::PasswordChanged("secret1".to_string()));
        let before = form.credentials().clone();

        let _ = form.update(LoginFormMessage::Submit);

        assert_eq!(form.credentials(), &before);
    }

    #[test]
    fn test_press_fades_lock_until_release() {
        use crate::ui::theme::button_styles::primary_foreground;

        let mut form = LoginForm::new();
        assert_eq!(form.press_state(), PressState::Resting);

        let _ = form.update(LoginFormMessage::PressChanged(PressState::Pressed));
        assert_eq!(form.press_state(), PressState::Pressed);
        assert!((primary_foreground(form.press_state()).a - 0.9).abs() < 1e-6);
        let _ = form.view();

        let _ = form.update(LoginFormMessage::Submit);
        assert_eq!(form.press_state(), PressState::Resting);
        assert_eq!(primary_foreground(form.press_state()).a, 1.0);
    }

    #[test]
    fn test_leaving_while_held_cancels_press() {
        let mut form = LoginForm::new();
        let _ = form.update(LoginFormMessage::EmailChanged("a@b.com".to_string()));
        let _ = form.update(LoginFormMessage::PressChanged(PressState::Pressed));
        let _ = form.update(LoginFormMessage::PressChanged(PressState::Resting));

        assert_eq!(form.press_state(), PressState::Resting);
        assert_eq!(form.credentials().email(), "a@b.com");
    }

    #[test]
    fn test_view_builds_for_empty_and_filled_form() {
        let mut form = LoginForm::new();
        let _ = form.view();

        let _ = form.update(LoginFormMessage::EmailChanged("a@b.com".to_string()));
        let _ = form.view();
    }
}
