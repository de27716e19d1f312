/// `m:ss` for a whole number of seconds.
#[must_use]
pub fn format_seconds(seconds: u64) -> String {
    let minutes = seconds / 60;
    let remainder = seconds % 60;
    format!("{minutes}:{remainder:02}")
}
