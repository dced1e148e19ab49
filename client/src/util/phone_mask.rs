//! Brazilian phone mask applied while the user types.

#[cfg(test)]
#[path = "phone_mask_test.rs"]
mod phone_mask_test;

/// Area code plus a 9-digit mobile number.
pub const MAX_PHONE_DIGITS: usize = 11;

/// Reformat raw input as `(AA) NNNN-NNNN` (landline) or `(AA) NNNNN-NNNN`
/// (mobile). Non-digits are dropped and input is capped at
/// [`MAX_PHONE_DIGITS`]. Partial input is formatted progressively; fewer
/// than two digits are returned as-is.
#[must_use]
pub fn format_phone(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_PHONE_DIGITS)
        .collect();
    if digits.len() < 2 {
        return digits;
    }

    let (area, rest) = digits.split_at(2);
    if digits.len() < MAX_PHONE_DIGITS {
        let (prefix, line) = rest.split_at(rest.len().min(4));
        let mut out = format!("({area}");
        if !prefix.is_empty() {
            out.push_str(") ");
            out.push_str(prefix);
        }
        if !line.is_empty() {
            out.push('-');
            out.push_str(line);
        }
        out
    } else {
        let (prefix, line) = rest.split_at(5);
        format!("({area}) {prefix}-{line}")
    }
}
