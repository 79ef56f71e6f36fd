pub const FLAT_FEE_RATE: f64 = 0.036;
pub const TRADITIONAL_LOW_RATE: f64 = 0.10;
pub const TRADITIONAL_HIGH_RATE: f64 = 0.15;
const MONTHS: i64 = 12;

/// Monthly fee comparison for one rent figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RentQuote {
    pub rent: u32,
    pub flat_fee: i64,
    pub traditional: (i64, i64),
    pub annual_saving: (i64, i64),
}

impl RentQuote {
    pub fn for_rent(rent: u32) -> Self {
        let rent_f = f64::from(rent);
        let flat_fee = (rent_f * FLAT_FEE_RATE).round() as i64;
        let low = (rent_f * TRADITIONAL_LOW_RATE).round() as i64;
        let high = (rent_f * TRADITIONAL_HIGH_RATE).round() as i64;
        Self {
            rent,
            flat_fee,
            traditional: (low, high),
            annual_saving: ((low - flat_fee) * MONTHS, (high - flat_fee) * MONTHS),
        }
    }
}

/// Slider values come through as strings; anything that is not a whole
/// non-negative number is rejected.
pub fn parse_rent(input: &str) -> Option<u32> {
    input.trim().parse().ok()
}

/// `1536` -> `£1,536`.
pub fn format_pounds(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-£{}", grouped)
    } else {
        format!("£{}", grouped)
    }
}

pub fn format_range((low, high): (i64, i64)) -> String {
    format!("{} – {}", format_pounds(low), format_pounds(high))
}
