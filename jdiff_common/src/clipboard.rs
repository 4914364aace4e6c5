use crate::JdiffError;

/// Narrow interface for handing plain text to the host clipboard.
///
/// The comparison core never touches the clipboard itself; shells inject an
/// implementation (an OSC 52 terminal writer, a GUI toolkit binding, a test
/// fake) and the core-side callers stay oblivious to the mechanism.
pub trait ClipboardWrite {
    fn write_text(&self, text: &str) -> Result<(), JdiffError>;
}
