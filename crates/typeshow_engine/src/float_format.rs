//! Shortest round-trip rendering of floating point values.
//!
//! The digits are the shortest decimal string that parses back to the same value at the
//! value's own width, so an `f32` keeps fewer digits than an `f64` holding the same literal.
//! Values whose leading digit sits at a decimal exponent in `-4..6` are written positionally,
//! everything else in scientific form with a signed, at least two digit exponent.

const MIN_POSITIONAL_EXPONENT: i32 = -4;
const MAX_POSITIONAL_EXPONENT: i32 = 6;

pub fn format_f32(value: f32) -> String {
    if value.is_nan() || value.is_infinite() {
        return format_non_finite(value.is_nan(), value.is_sign_negative());
    }
    // `{:e}` yields the shortest digits that round-trip through f32
    render_scientific(&format!("{:e}", value))
}

pub fn format_f64(value: f64) -> String {
    if value.is_nan() || value.is_infinite() {
        return format_non_finite(value.is_nan(), value.is_sign_negative());
    }
    render_scientific(&format!("{:e}", value))
}

fn format_non_finite(is_nan: bool, is_negative: bool) -> String {
    match (is_nan, is_negative) {
        (true, _) => "NaN".to_string(),
        (false, true) => "-Inf".to_string(),
        (false, false) => "+Inf".to_string(),
    }
}

/// Rewrites Rust's `{:e}` output (`-2.5545544e2`) into the final notation.
fn render_scientific(scientific: &str) -> String {
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific.to_string();
    };
    let (negative, mantissa) = match mantissa.strip_prefix('-') {
        Some(unsigned) => (true, unsigned),
        None => (false, mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let mut rendered = String::with_capacity(digits.len() + 8);
    if negative {
        rendered.push('-');
    }
    if (MIN_POSITIONAL_EXPONENT..MAX_POSITIONAL_EXPONENT).contains(&exponent) {
        push_positional(&mut rendered, &digits, exponent);
    } else {
        push_exponential(&mut rendered, &digits, exponent);
    }
    rendered
}

fn push_positional(out: &mut String, digits: &str, exponent: i32) {
    // number of digits in front of the decimal point
    let point = exponent + 1;
    if point <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat_n('0', point.unsigned_abs() as usize));
        out.push_str(digits);
    } else if point as usize >= digits.len() {
        out.push_str(digits);
        out.extend(std::iter::repeat_n('0', point as usize - digits.len()));
    } else {
        let (whole, fraction) = digits.split_at(point as usize);
        out.push_str(whole);
        out.push('.');
        out.push_str(fraction);
    }
}

fn push_exponential(out: &mut String, digits: &str, exponent: i32) {
    let (first, rest) = digits.split_at(1);
    out.push_str(first);
    if !rest.is_empty() {
        out.push('.');
        out.push_str(rest);
    }
    let sign = if exponent < 0 { '-' } else { '+' };
    out.push_str(&format!("e{}{:02}", sign, exponent.unsigned_abs()));
}
