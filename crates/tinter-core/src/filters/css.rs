//! CSS `filter` property formatting and parsing.

use super::{
    FilterParams, FilterSet, BRIGHTNESS, CONTRAST, HUE_ROTATE, HUE_SCALE, INVERT, NO_FILTER,
    SATURATE, SEPIA,
};

/// Format parameters as
/// `invert(I%) sepia(S%) saturate(SAT%) hue-rotate(Hdeg) brightness(B%) contrast(C%)`.
///
/// Each value is rounded to the nearest integer; the hue is converted to
/// degrees first and reduced into `[0, 360)`.
pub fn format_filter_css(params: &FilterParams) -> String {
    let v = params.values();
    let pct = |idx: usize| v[idx].round().max(0.0) as i64;
    let hue = ((v[HUE_ROTATE] * HUE_SCALE).round().max(0.0) as i64) % 360;

    format!(
        "invert({}%) sepia({}%) saturate({}%) hue-rotate({}deg) brightness({}%) contrast({}%)",
        pct(INVERT),
        pct(SEPIA),
        pct(SATURATE),
        hue,
        pct(BRIGHTNESS),
        pct(CONTRAST)
    )
}

/// Parse a CSS `filter` value made of the six supported functions.
///
/// Multiplier functions accept `N%` or a bare number (`50%` == `0.5`).
/// `hue-rotate` accepts `deg`, `rad`, `turn` or a bare number of degrees.
/// The functions are applied in fixed CSS order regardless of the order they
/// are written in, so each may appear at most once.
pub fn parse_filter_css(css: &str) -> Result<FilterSet, String> {
    let trimmed = css.trim();
    let mut set = FilterSet::default();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NO_FILTER) {
        return Ok(set);
    }

    let mut rest = trimmed;
    while !rest.is_empty() {
        let open = rest
            .find('(')
            .ok_or_else(|| format!("Expected '(' in filter function: {}", rest))?;
        let close = rest
            .find(')')
            .ok_or_else(|| format!("Missing ')' in filter function: {}", rest))?;
        if close < open {
            return Err(format!("Malformed filter function: {}", rest));
        }

        let name = rest[..open].trim().to_ascii_lowercase();
        let arg = rest[open + 1..close].trim();

        let slot = match name.as_str() {
            "invert" => &mut set.invert,
            "sepia" => &mut set.sepia,
            "saturate" => &mut set.saturate,
            "hue-rotate" => &mut set.hue_rotate,
            "brightness" => &mut set.brightness,
            "contrast" => &mut set.contrast,
            _ => {
                return Err(format!(
                    "Unsupported filter function '{}'. Valid options: invert, sepia, \
                     saturate, hue-rotate, brightness, contrast",
                    name
                ))
            }
        };
        if slot.is_some() {
            return Err(format!("Filter function '{}' given more than once", name));
        }

        let value = if name == "hue-rotate" {
            parse_angle(arg)?
        } else {
            parse_amount(arg)?
        };
        *slot = Some(value);

        rest = rest[close + 1..].trim_start();
    }

    Ok(set)
}

/// `50%` -> 0.5, `0.5` -> 0.5
fn parse_amount(arg: &str) -> Result<f64, String> {
    let (number, scale) = match arg.strip_suffix('%') {
        Some(n) => (n, 0.01),
        None => (arg, 1.0),
    };
    let value = parse_number(number)?;
    if value < 0.0 {
        return Err(format!("Filter amount cannot be negative: {}", arg));
    }
    Ok(value * scale)
}

/// Angle in degrees from `deg`, `rad`, `turn` or a bare number.
fn parse_angle(arg: &str) -> Result<f64, String> {
    if let Some(n) = arg.strip_suffix("deg") {
        parse_number(n)
    } else if let Some(n) = arg.strip_suffix("rad") {
        Ok(parse_number(n)?.to_degrees())
    } else if let Some(n) = arg.strip_suffix("turn") {
        Ok(parse_number(n)? * 360.0)
    } else {
        parse_number(arg)
    }
}

fn parse_number(s: &str) -> Result<f64, String> {
    let s = s.trim();
    let value = s
        .parse::<f64>()
        .map_err(|_| format!("Invalid filter value: '{}'", s))?;
    if !value.is_finite() {
        return Err(format!("Filter value must be finite: '{}'", s));
    }
    Ok(value)
}
