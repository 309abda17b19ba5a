use tinter_cli::{parse_base_color, parse_hue_rotate_mode};
use tinter_core::parse_filter_css;

/// Simulate a CSS filter string on a base color and print the result.
pub fn cmd_apply(filter: String, base: String, hue_rotate: Option<String>) -> Result<(), String> {
    let filters = parse_filter_css(&filter)?;
    let base = parse_base_color(&base)?;
    let mode = parse_hue_rotate_mode(hue_rotate.as_deref())?.unwrap_or_default();

    let result = base.apply_filters(&filters, mode);
    println!("{}", result);

    Ok(())
}
