//! Input field hints and button press state

/// The two text fields of the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Email,
    Password,
}

/// Semantic content of a field, used by autofill on platforms that have it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextContentType {
    EmailAddress,
    Password,
}

/// Keyboard layout requested for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardKind {
    Default,
    Email,
}

/// Platform hints attached to a text field.
///
/// Desktop toolkits ignore most of these; they are kept as data so every
/// frontend configures the fields the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputHints {
    pub content_type: TextContentType,
    pub keyboard: KeyboardKind,
    pub autocapitalize: bool,
    pub autocorrect: bool,
    /// Characters are drawn masked
    pub secure: bool,
}

impl FieldKind {
    pub fn placeholder(&self) -> &'static str {
        match self {
            FieldKind::Email => "Email",
            FieldKind::Password => "Password",
        }
    }

    pub fn hints(&self) -> InputHints {
        match self {
            FieldKind::Email => InputHints {
                content_type: TextContentType::EmailAddress,
                keyboard: KeyboardKind::Email,
                autocapitalize: false,
                autocorrect: false,
                secure: false,
            },
            FieldKind::Password => InputHints {
                content_type: TextContentType::Password,
                keyboard: KeyboardKind::Default,
                autocapitalize: false,
                autocorrect: false,
                secure: true,
            },
        }
    }
}

/// Visual press feedback of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PressState {
    #[default]
    Resting,
    Pressed,
}

impl PressState {
    pub fn from_pressed(pressed: bool) -> Self {
        if pressed {
            PressState::Pressed
        } else {
            PressState::Resting
        }
    }

    /// Opacity multiplier applied to the whole button
    pub fn opacity(&self) -> f32 {
        match self {
            PressState::Resting => 1.0,
            PressState::Pressed => 0.9,
        }
    }
}
