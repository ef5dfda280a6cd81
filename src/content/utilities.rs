//! Sales utilities: loan EMI and WhatsApp deep links.

use crate::error::{KonnectError, Result};

/// Monthly instalment for a reducing-balance loan.
///
/// `P·r·(1+r)^n / ((1+r)^n − 1)` with `r = annual_rate_pct / 1200` and
/// `n = years · 12`. A zero (or vanishingly small) rate degenerates to `P / n`.
pub fn emi(principal: f64, annual_rate_pct: f64, years: u32) -> Result<f64> {
    if !principal.is_finite() || principal < 0.0 {
        return Err(KonnectError::InvalidArgument(
            "loan amount must be a non-negative number".into(),
        ));
    }
    if !annual_rate_pct.is_finite() || annual_rate_pct < 0.0 {
        return Err(KonnectError::InvalidArgument(
            "interest rate must be a non-negative number".into(),
        ));
    }
    if years == 0 {
        return Err(KonnectError::InvalidArgument(
            "loan tenure must be at least one year".into(),
        ));
    }

    let n = f64::from(years) * 12.0;
    let r = annual_rate_pct / 1200.0;
    // (1+r)^n - 1 via exp_m1 keeps precision for rates near zero.
    let accrued = (n * r.ln_1p()).exp_m1();
    if accrued == 0.0 {
        return Ok(principal / n);
    }
    Ok(principal * r * (accrued + 1.0) / accrued)
}

/// `₹ 43,391 per month`: truncated to whole rupees, comma grouped.
pub fn format_emi(amount: f64) -> String {
    format!("₹ {} per month", group_thousands(amount.trunc() as u64))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `https://wa.me/<digits>?text=<form-encoded message>`.
///
/// Spaces, dashes, parentheses and a leading `+` are dropped from the
/// phone number; anything else non-numeric is rejected.
pub fn whatsapp_link(phone: &str, message: &str) -> Result<String> {
    let digits: String = phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')' | '+'))
        .collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(KonnectError::InvalidArgument(format!(
            "'{phone}' is not a phone number"
        )));
    }
    let text: String = url::form_urlencoded::byte_serialize(message.as_bytes()).collect();
    Ok(format!("https://wa.me/{digits}?text={text}"))
}
