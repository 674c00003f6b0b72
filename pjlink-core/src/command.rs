//! PJLink command line encoding

/// Build the wire line for one authenticated command
///
/// # Line layout
///
/// ```text
/// <digest>%<class><command> <param>
/// ```
///
/// The digest prefix, the `%` marker, the class digit, the four-character
/// command and the single space before the parameter are all fixed by the
/// wire contract. The trailing carriage return is appended by the session
/// on write, not here.
///
/// # Examples
///
/// ```
/// use pjlink_core::command;
///
/// let line = command::encode_command("abc123", "1", "POWR", "?");
/// assert_eq!(line, "abc123%1POWR ?");
/// ```
pub fn encode_command(digest: &str, class: &str, command: &str, param: &str) -> String {
    format!("{digest}%{class}{command} {param}")
}
