//! pt-BR number and currency formatting.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Group digits in thousands with `.` (`1250` → `1.250`).
#[must_use]
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Whole-real amount, e.g. `R$ 1.188`.
#[must_use]
pub fn format_brl(amount: u32) -> String {
    format!("R$ {}", group_thousands(i64::from(amount)))
}

/// `dd/mm/yyyy`.
#[must_use]
pub fn format_date(day: u32, month: u32, year: i32) -> String {
    format!("{day:02}/{month:02}/{year}")
}
