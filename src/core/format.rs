//! printf-style placeholder substitution for translated strings.
//!
//! Supports the conversion syntax `%[argnum$][flags][width][.precision]specifier`
//! with the specifiers `b c d e E f F g G h H o s u x X` and `%%` for a literal percent.
//! Flags are `-` (left-justify), `+` (always print the sign), `0` and ` ` (pad
//! character) and `'c` (pad with `c`). Positional placeholders (`%2$s`) do not
//! advance the implicit argument counter, so translators can reorder inserts.
//!
//! Widths, precisions and argument numbers must stay below [`MAX_SPEC_VALUE`].
//! Float precision is capped at [`MAX_FLOAT_PRECISION`] digits.

use std::{fmt, iter::Peekable, str::Chars};

use thiserror::Error;

/// A value substituted into a placeholder.
///
/// Values are coerced to whatever the placeholder asks for: `%d` on a string
/// reads its leading integer (`"12 apples"` is 12, `"apples"` is 0) and `%s` on a
/// number prints it.
#[derive(Debug, Clone, PartialEq)]
pub enum Insert {
    Str(String),
    Int(i64),
    Float(f64),
}

impl From<&str> for Insert {
    fn from(value: &str) -> Self {
        Insert::Str(value.to_string())
    }
}

impl From<String> for Insert {
    fn from(value: String) -> Self {
        Insert::Str(value)
    }
}

impl From<&String> for Insert {
    fn from(value: &String) -> Self {
        Insert::Str(value.clone())
    }
}

impl From<i64> for Insert {
    fn from(value: i64) -> Self {
        Insert::Int(value)
    }
}

impl From<i32> for Insert {
    fn from(value: i32) -> Self {
        Insert::Int(value.into())
    }
}

impl From<u32> for Insert {
    fn from(value: u32) -> Self {
        Insert::Int(value.into())
    }
}

impl From<usize> for Insert {
    fn from(value: usize) -> Self {
        Insert::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Insert {
    fn from(value: f64) -> Self {
        Insert::Float(value)
    }
}

impl fmt::Display for Insert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Insert::Str(s) => f.write_str(s),
            Insert::Int(i) => write!(f, "{}", i),
            Insert::Float(v) if v.fract() == 0.0 && v.abs() < 1e15 => write!(f, "{}", *v as i64),
            Insert::Float(v) => write!(f, "{}", v),
        }
    }
}

impl Insert {
    fn to_int(&self) -> i64 {
        match self {
            Insert::Int(i) => *i,
            Insert::Float(v) => *v as i64,
            Insert::Str(s) => leading_int(s),
        }
    }

    fn to_float(&self) -> f64 {
        match self {
            Insert::Int(i) => *i as f64,
            Insert::Float(v) => *v,
            Insert::Str(s) => leading_float(s),
        }
    }
}

/// Exclusive upper bound for widths, precisions and argument numbers.
pub const MAX_SPEC_VALUE: usize = i32::MAX as usize;

/// Float conversions never print more digits than this after the point.
pub const MAX_FLOAT_PRECISION: usize = 53;

/// Errors raised by [`vsprintf`]. These point at a mismatch between a
/// translation and its call site and are never swallowed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("{required} arguments are required, {given} given")]
    TooFewArguments { required: usize, given: usize },

    #[error("argument number specifier must be greater than zero")]
    ZeroArgnum,

    #[error("argument number specifier must be less than 2147483647")]
    ArgnumTooLarge,

    #[error("width must be less than 2147483647")]
    WidthTooLarge,

    #[error("precision must be less than 2147483647")]
    PrecisionTooLarge,

    #[error("unknown format specifier \"{0}\"")]
    UnknownSpecifier(char),

    #[error("missing format specifier at end of string")]
    MissingSpecifier,
}

#[derive(Debug, Default)]
struct Spec {
    argnum: Option<usize>,
    left: bool,
    plus: bool,
    pad: Option<char>,
    width: usize,
    precision: Option<usize>,
}

/// Substitute `inserts` into `format`.
pub fn vsprintf(format: &str, inserts: &[Insert]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(format.len());
    let mut chars = format.chars().peekable();
    let mut next_arg = 0;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        if chars.peek() == Some(&'%') {
            chars.next();
            out.push('%');
            continue;
        }

        let spec = parse_spec(&mut chars)?;
        let conversion = chars.next().ok_or(FormatError::MissingSpecifier)?;

        let index = match spec.argnum {
            Some(n) => n - 1,
            None => {
                next_arg += 1;
                next_arg - 1
            }
        };
        let arg = inserts.get(index).ok_or(FormatError::TooFewArguments {
            required: index + 1,
            given: inserts.len(),
        })?;

        let (body, numeric) = convert(conversion, arg, &spec)?;
        out.push_str(&pad(body, &spec, numeric));
    }

    Ok(out)
}

fn parse_spec(chars: &mut Peekable<Chars<'_>>) -> Result<Spec, FormatError> {
    let mut spec = Spec::default();

    // `%1$s`: a run of digits followed by `$` is an argnum, otherwise a width.
    let digits = take_digits(chars);
    if !digits.is_empty() {
        if chars.peek() == Some(&'$') {
            chars.next();
            let n = bounded(&digits).ok_or(FormatError::ArgnumTooLarge)?;
            if n == 0 {
                return Err(FormatError::ZeroArgnum);
            }
            spec.argnum = Some(n);
        } else {
            apply_width_digits(&mut spec, &digits)?;
            parse_precision(chars, &mut spec)?;
            return Ok(spec);
        }
    }

    loop {
        match chars.peek() {
            Some('-') => spec.left = true,
            Some('+') => spec.plus = true,
            Some('0') => spec.pad = Some('0'),
            Some(' ') => spec.pad = Some(' '),
            Some('\'') => {
                chars.next();
                spec.pad = chars.next();
                continue;
            }
            _ => break,
        }
        chars.next();
    }

    let width = take_digits(chars);
    if !width.is_empty() {
        spec.width = bounded(&width).ok_or(FormatError::WidthTooLarge)?;
    }
    parse_precision(chars, &mut spec)?;
    Ok(spec)
}

/// A leading `0` in a bare width run is the zero-pad flag (`%05d`).
fn apply_width_digits(spec: &mut Spec, digits: &str) -> Result<(), FormatError> {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.len() != digits.len() {
        spec.pad = Some('0');
    }
    if !trimmed.is_empty() {
        spec.width = bounded(trimmed).ok_or(FormatError::WidthTooLarge)?;
    }
    Ok(())
}

/// `%.s` is precision 0.
fn parse_precision(chars: &mut Peekable<Chars<'_>>, spec: &mut Spec) -> Result<(), FormatError> {
    if chars.peek() == Some(&'.') {
        chars.next();
        let digits = take_digits(chars);
        let precision = if digits.is_empty() {
            0
        } else {
            bounded(&digits).ok_or(FormatError::PrecisionTooLarge)?
        };
        spec.precision = Some(precision);
    }
    Ok(())
}

/// Parse a digit run, or `None` when it reaches [`MAX_SPEC_VALUE`].
fn bounded(digits: &str) -> Option<usize> {
    digits.parse::<usize>().ok().filter(|n| *n < MAX_SPEC_VALUE)
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut digits = String::new();
    while let Some(c) = chars.peek().copied().filter(char::is_ascii_digit) {
        digits.push(c);
        chars.next();
    }
    digits
}

/// Render one argument. The flag tells the padder whether the body is a signed number.
fn convert(conversion: char, arg: &Insert, spec: &Spec) -> Result<(String, bool), FormatError> {
    let rendered = match conversion {
        's' => {
            let s = arg.to_string();
            match spec.precision {
                Some(p) => s.chars().take(p).collect(),
                None => s,
            }
        }
        'd' => {
            let n = arg.to_int();
            return Ok((signed(n.to_string(), n >= 0, spec.plus), true));
        }
        'u' => (arg.to_int() as u64).to_string(),
        'f' | 'F' => {
            let v = arg.to_float();
            let body = format!("{:.*}", float_precision(spec), v);
            return Ok((signed(body, v >= 0.0, spec.plus), true));
        }
        'e' | 'E' => {
            let v = arg.to_float();
            let body = exponent(v, float_precision(spec));
            let body = if conversion == 'E' {
                body.to_uppercase()
            } else {
                body
            };
            return Ok((signed(body, v >= 0.0, spec.plus), true));
        }
        'g' | 'G' | 'h' | 'H' => {
            let v = arg.to_float();
            let body = general(v, float_precision(spec).max(1));
            let body = if matches!(conversion, 'G' | 'H') {
                body.to_uppercase()
            } else {
                body
            };
            return Ok((signed(body, v >= 0.0, spec.plus), true));
        }
        'x' => format!("{:x}", arg.to_int() as u64),
        'X' => format!("{:X}", arg.to_int() as u64),
        'o' => format!("{:o}", arg.to_int() as u64),
        'b' => format!("{:b}", arg.to_int() as u64),
        'c' => u32::try_from(arg.to_int())
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_default(),
        other => return Err(FormatError::UnknownSpecifier(other)),
    };
    Ok((rendered, false))
}

fn signed(body: String, non_negative: bool, plus: bool) -> String {
    if plus && non_negative {
        format!("+{}", body)
    } else {
        body
    }
}

fn float_precision(spec: &Spec) -> usize {
    spec.precision.unwrap_or(6).min(MAX_FLOAT_PRECISION)
}

/// `%g`: at most `precision` significant digits without trailing zeros. Exponent
/// notation (`1.0e+20`, `1.234e-5`) is used when the exponent is below -4 or
/// reaches `precision`.
fn general(v: f64, precision: usize) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }

    let raw = format!("{:.*e}", precision - 1, v.abs());
    let (mantissa, exp) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let digits = digits.trim_end_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };

    // Position of the decimal point relative to the first digit.
    let point = exp + 1;
    let body = if point < -3 || point > precision as i32 {
        let (first, rest) = digits.split_at(1);
        let rest = if rest.is_empty() { "0" } else { rest };
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}.{}e{}{}", first, rest, sign, exp.abs())
    } else if point <= 0 {
        format!("0.{}{}", "0".repeat(point.unsigned_abs() as usize), digits)
    } else {
        let point = point as usize;
        if digits.len() <= point {
            format!("{}{}", digits, "0".repeat(point - digits.len()))
        } else {
            format!("{}.{}", &digits[..point], &digits[point..])
        }
    };

    if v < 0.0 { format!("-{}", body) } else { body }
}

/// `1.5e+3` style exponent notation.
fn exponent(v: f64, precision: usize) -> String {
    let raw = format!("{:.*e}", precision, v);
    match raw.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            if exp < 0 {
                format!("{}e{}", mantissa, exp)
            } else {
                format!("{}e+{}", mantissa, exp)
            }
        }
        None => raw,
    }
}

fn pad(body: String, spec: &Spec, numeric: bool) -> String {
    let len = body.chars().count();
    if len >= spec.width {
        return body;
    }
    let fill_char = spec.pad.unwrap_or(' ');
    let fill: String = std::iter::repeat_n(fill_char, spec.width - len).collect();

    if spec.left {
        return format!("{}{}", body, fill);
    }
    // Zeros go between the sign and the digits.
    if numeric
        && fill_char == '0'
        && let Some(sign) = body.chars().next().filter(|c| *c == '-' || *c == '+')
    {
        return format!("{}{}{}", sign, fill, &body[1..]);
    }
    format!("{}{}", fill, body)
}

fn numeric_prefix(s: &str, allow_fraction: bool) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'-' | b'+')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if allow_fraction && end < bytes.len() && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > end + 1 || end > digits_start {
            end = frac_end;
        }
    }
    if end == digits_start { "" } else { &s[..end] }
}

fn leading_int(s: &str) -> i64 {
    numeric_prefix(s.trim_start(), false)
        .parse()
        .unwrap_or_default()
}

fn leading_float(s: &str) -> f64 {
    numeric_prefix(s.trim_start(), true)
        .parse()
        .unwrap_or_default()
}
