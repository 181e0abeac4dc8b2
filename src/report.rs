use crate::error::Result;

/// Collects every line before rendering anything.
///
/// Returns the first error unchanged, so a failure partway through produces
/// no text at all. On success the lines are joined with `\n` and terminated
/// by one trailing newline; no lines render as the empty string.
pub fn render_report<I>(lines: I) -> Result<String>
where
    I: IntoIterator<Item = Result<String>>,
{
    let lines = lines.into_iter().collect::<Result<Vec<_>>>()?;
    if lines.is_empty() {
        return Ok(String::new());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    Ok(out)
}
