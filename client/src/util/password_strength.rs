//! Password strength meter shown under the registration password field.

#[cfg(test)]
#[path = "password_strength_test.rs"]
mod password_strength_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PasswordStrength {
    #[default]
    Empty,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    /// Classify `password` from its [`score`].
    #[must_use]
    pub fn of(password: &str) -> Self {
        if password.is_empty() {
            return Self::Empty;
        }
        match score(password) {
            0..=2 => Self::Weak,
            3..=4 => Self::Medium,
            5 => Self::Strong,
            _ => Self::VeryStrong,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Empty => "Força da senha",
            Self::Weak => "Senha fraca",
            Self::Medium => "Senha média",
            Self::Strong => "Senha forte",
            Self::VeryStrong => "Senha muito forte",
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Empty => "password-strength",
            Self::Weak => "password-strength strength-weak",
            Self::Medium => "password-strength strength-medium",
            Self::Strong => "password-strength strength-strong",
            Self::VeryStrong => "password-strength strength-very-strong",
        }
    }
}

/// One point each for: 8+ chars, 12+ chars, a lowercase letter, an
/// uppercase letter, a digit, any other character.
#[must_use]
pub fn score(password: &str) -> u8 {
    let len = password.chars().count();
    let checks = [
        len >= 8,
        len >= 12,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    checks.iter().map(|&hit| u8::from(hit)).sum()
}
