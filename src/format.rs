use crate::ratings::TitleAndValue;

const WIDTH_JUSTIFICATION_SEPARATOR: &str = ".";

/// Justify a title/value pair to `width` characters: title on the left,
/// value on the right, a dotted run bracketed by single spaces in between.
///
/// Widths count characters, not bytes, so emoji in the title occupy one
/// slot each. A pair too wide for `width` clamps the dotted run to zero
/// instead of panicking.
pub fn adjusted_line(stat: &TitleAndValue, width: usize) -> String {
    let used = stat.title.chars().count() + stat.value.chars().count() + 2;
    let spacing = width.saturating_sub(used);
    format!(
        "{} {} {}",
        stat.title,
        WIDTH_JUSTIFICATION_SEPARATOR.repeat(spacing),
        stat.value
    )
}
