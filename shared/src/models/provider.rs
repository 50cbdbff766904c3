//! Third-party "continue with" providers shown below the login form
//!
//! The catalog is fixed data. Order, titles, icons and render modes never
//! change at runtime.

use std::fmt;

/// A third-party sign-in option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Google,
    Microsoft,
    Apple,
    Phone,
    Facebook,
    LinkedIn,
    GitHub,
}

impl ProviderKind {
    /// Every provider, in display order
    pub const ALL: [ProviderKind; 7] = [
        ProviderKind::Google,
        ProviderKind::Microsoft,
        ProviderKind::Apple,
        ProviderKind::Phone,
        ProviderKind::Facebook,
        ProviderKind::LinkedIn,
        ProviderKind::GitHub,
    ];

    /// Short identifier used in log output
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Google => "google",
            ProviderKind::Microsoft => "microsoft",
            ProviderKind::Apple => "apple",
            ProviderKind::Phone => "phone",
            ProviderKind::Facebook => "facebook",
            ProviderKind::LinkedIn => "linkedin",
            ProviderKind::GitHub => "github",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to an icon, resolved to artwork by the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconRef {
    /// Artwork bundled with the application
    Asset(&'static str),
    /// A platform glyph
    System(&'static str),
}

impl IconRef {
    pub fn name(&self) -> &'static str {
        match self {
            IconRef::Asset(name) | IconRef::System(name) => name,
        }
    }
}

/// Icon used by the primary "Entrar" button
pub const LOCK_ICON: IconRef = IconRef::System("lock.fill");

/// How an icon's colors are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// Authored colors are discarded and replaced by the foreground tint
    Template,
    /// Authored colors are kept
    Original,
}

/// One row of the provider list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderEntry {
    pub kind: ProviderKind,
    pub title: &'static str,
    pub icon: IconRef,
    pub render_mode: RenderMode,
}

impl ProviderEntry {
    /// Catalog entry for `kind`
    pub const fn for_kind(kind: ProviderKind) -> Self {
        let (title, icon, render_mode) = match kind {
            ProviderKind::Google => (
                "Continuar com o Google",
                IconRef::Asset("google"),
                RenderMode::Original,
            ),
            ProviderKind::Microsoft => (
                "Continuar com a conta Microsoft",
                IconRef::Asset("microsoft"),
                RenderMode::Original,
            ),
            ProviderKind::Apple => (
                "Continuar com a Apple",
                IconRef::System("apple.logo"),
                RenderMode::Template,
            ),
            ProviderKind::Phone => (
                "Continuar com o telefone",
                IconRef::System("phone.fill"),
                RenderMode::Template,
            ),
            ProviderKind::Facebook => (
                "Continuar com o Facebook",
                IconRef::Asset("facebook"),
                RenderMode::Original,
            ),
            ProviderKind::LinkedIn => (
                "Continuar com o LinkedIn",
                IconRef::Asset("linkedin"),
                RenderMode::Original,
            ),
            // Monochrome mark, tinted like the system glyphs
            ProviderKind::GitHub => (
                "Continuar com o GitHub",
                IconRef::Asset("github"),
                RenderMode::Template,
            ),
        };

        Self {
            kind,
            title,
            icon,
            render_mode,
        }
    }
}

/// The seven provider entries, in display order
pub fn provider_catalog() -> [ProviderEntry; 7] {
    ProviderKind::ALL.map(ProviderEntry::for_kind)
}
