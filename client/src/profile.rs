//! Stored user profile record and the defaults used to synthesize one.
//!
//! DESIGN
//! ======
//! JSON keys keep the names the existing static pages already write
//! (`nome`, `telefone`, `cargo`, ...) so profiles created by either side stay
//! readable by the other. Every field defaults so partial legacy records
//! still deserialize.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use serde::{Deserialize, Serialize};

/// Phone stored when the registration form leaves the field blank.
pub const DEFAULT_PHONE: &str = "(21) 98765-4321";

/// Department used when neither the role table nor the company applies.
pub const DEFAULT_DEPARTMENT: &str = "Operações";

pub const DEFAULT_BIO: &str = "Bem-vindo ao FlowPilot!";

/// Generic avatar shown until the user uploads one.
pub const DEFAULT_AVATAR: &str = "data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 64 64'><circle cx='32' cy='32' r='32' fill='%234361ee'/><circle cx='32' cy='24' r='12' fill='white'/><path d='M12 54c4-10 16-14 20-14s16 4 20 14' fill='white'/></svg>";

/// Selectable roles and the department each one belongs to.
pub const ROLE_DEPARTMENTS: &[(&str, &str)] = &[
    ("Desenvolvedor", "TI"),
    ("Designer", "Marketing"),
    ("Contador", "Financeiro"),
    ("Vendedor", "Vendas"),
    ("Atendente", "Atendimento"),
    ("RH", "Recursos Humanos"),
    ("Marketing", "Marketing"),
];

/// A registered (demo) account.
///
/// `password` is kept in plaintext. This site is a mock and the record is
/// never sent anywhere; see [`crate::auth::recovery`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "nome", default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "telefone", default)]
    pub phone: String,
    #[serde(default)]
    pub password: String,
    #[serde(rename = "cargo", default)]
    pub role: String,
    #[serde(rename = "departamento", default)]
    pub department: String,
    #[serde(rename = "dataEntrada", default)]
    pub join_date: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub avatar: String,
}

impl UserProfile {
    /// Case-insensitive identity check against `email`.
    #[must_use]
    pub fn has_email(&self, email: &str) -> bool {
        !self.email.is_empty() && same_email(&self.email, email)
    }

    /// First word of the display name, for greetings.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }
}

/// Compare two emails ignoring case.
#[must_use]
pub fn same_email(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Map a role to its department, falling back to the free-text company and
/// then to [`DEFAULT_DEPARTMENT`].
#[must_use]
pub fn department_for(role: &str, company: &str) -> String {
    ROLE_DEPARTMENTS
        .iter()
        .find(|(r, _)| *r == role)
        .map(|(_, dept)| (*dept).to_owned())
        .or_else(|| {
            let company = company.trim();
            (!company.is_empty()).then(|| company.to_owned())
        })
        .unwrap_or_else(|| DEFAULT_DEPARTMENT.to_owned())
}
