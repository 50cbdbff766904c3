//! Email and password text owned by the login form

use std::fmt;

/// Glyph shown in place of each password character
pub const MASK_CHAR: char = '•';

/// The email and password typed into the login form.
///
/// Values are stored exactly as typed. Nothing here trims, lowercases or
/// validates them.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: String,
}

impl LoginCredentials {
    /// Create empty credentials
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Replace the email with the current contents of the email field
    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    /// Replace the password with the current contents of the password field
    pub fn set_password(&mut self, password: String) {
        self.password = password;
    }

    /// The password as it appears on screen: one mask glyph per character
    pub fn masked_password(&self) -> String {
        mask(&self.password)
    }

    /// Number of characters in the password, safe to log
    pub fn password_len(&self) -> usize {
        self.password.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_empty() && self.password.is_empty()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &format_args!("<{} chars>", self.password_len()))
            .finish()
    }
}

/// Mask every character of `value`
pub fn mask(value: &str) -> String {
    value.chars().map(|_| MASK_CHAR).collect()
}
