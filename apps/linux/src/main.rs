//! DeepThought Desktop App
//!
//! The DeepThought sign-in screen, built with the Iced GUI framework: email
//! and password fields, an "Entrar" button and a list of "continue with"
//! provider buttons. None of the buttons is wired to an authentication
//! backend yet.

use clap::Parser;
use iced::{Element, Task, Theme};
use std::path::PathBuf;
use tracing::info;

mod config;
mod logging;
mod ui;

use deepthought_shared::AppConfig;
use ui::create_deepthought_theme;
use ui::theme::utils::typography;
use ui::views::{LoginMessage, LoginView};

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "deepthought", version, about = "DeepThought sign-in screen")]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Console log level (e.g. "debug", "deepthought=trace")
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

/// Main application messages
#[derive(Debug, Clone)]
pub enum Message {
    Login(LoginMessage),
}

/// Main application structure
pub struct DeepThoughtApp {
    login: LoginView,
    theme: Theme,
}

impl DeepThoughtApp {
    fn new(config: &AppConfig) -> (Self, Task<Message>) {
        info!("Initializing DeepThought sign-in screen");

        let accent = config::accent_color(&config.ui);
        let app = Self {
            login: LoginView::new(),
            theme: create_deepthought_theme(config.ui.appearance, accent),
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        "DeepThought - Entrar".to_string()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Login(login_message) => self.login.update(login_message).map(Message::Login),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        self.login.view().map(Message::Login)
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }
}

fn main() -> iced::Result {
    let args = Args::parse();

    if let Err(e) = logging::initialize_default_logging(args.log_level.as_deref()) {
        eprintln!("Failed to initialize logging: {e:#}");
    }

    info!("Starting DeepThought");

    let app_config = config::ConfigManager::load_or_default(args.config);
    typography::init_font_size(app_config.ui.font_size);

    let window = iced::window::Settings {
        size: config::window_size(&app_config.ui),
        position: iced::window::Position::Centered,
        ..Default::default()
    };

    iced::application(
        DeepThoughtApp::title,
        DeepThoughtApp::update,
        DeepThoughtApp::view,
    )
    .theme(DeepThoughtApp::theme)
    .window(window)
    .antialiasing(true)
    .run_with(move || DeepThoughtApp::new(&app_config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ui::components::LoginFormMessage;

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "deepthought",
            "--config",
            "/tmp/deepthought.yml",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/deepthought.yml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));

        let args = Args::try_parse_from(["deepthought"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
    }

    #[test]
    fn test_app_routes_login_messages() {
        let (mut app, _) = DeepThoughtApp::new(&AppConfig::default());

        let _ = app.update(Message::Login(LoginMessage::Form(
            LoginFormMessage::EmailChanged("a@b.com".to_string()),
        )));
        let _ = app.update(Message::Login(LoginMessage::Form(LoginFormMessage::Submit)));

        assert_eq!(app.login.form().credentials().email(), "a@b.com");
        assert_eq!(app.title(), "DeepThought - Entrar");
        let _ = app.view();
    }

    #[test]
    fn test_theme_follows_configuration() {
        let mut config = AppConfig::default();
        config.ui.accent_color = "#34A853".to_string();

        let (app, _) = DeepThoughtApp::new(&config);
        assert_eq!(
            app.theme().palette().primary,
            iced::Color::from_rgb8(0x34, 0xA8, 0x53)
        );
    }
}
