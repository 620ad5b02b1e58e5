//! Command and argument parsing.

use std::time::Duration;

/// Mute length used when `/mute` gets no usable duration.
pub const DEFAULT_MUTE_SECS: u32 = 60;

/// A slash-command split into its name and argument text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    /// Lower-cased name without the leading `/` or any `@botname` suffix.
    pub name: String,
    /// Everything after the command token, trimmed. Empty when absent.
    pub args: String,
}

/// Parse `/name@bot args...` into a [`CommandInvocation`].
///
/// Returns `None` for text that doesn't start with `/` or has an empty
/// command name.
pub fn parse_command(text: &str) -> Option<CommandInvocation> {
    let text = text.trim();
    if !text.starts_with('/') {
        return None;
    }

    let (token, rest) = match text.find(char::is_whitespace) {
        Some(idx) => text.split_at(idx),
        None => (text, ""),
    };

    let name = token[1..].split('@').next().unwrap_or_default().to_lowercase();
    if name.is_empty() {
        return None;
    }

    Some(CommandInvocation {
        name,
        args: rest.trim().to_string(),
    })
}

/// Parse duration string (e.g., "90", "45s", "30m", "1h", "1d").
///
/// A bare number is seconds. Supported units:
/// - s: seconds
/// - m: minutes
/// - h: hours
/// - d: days
/// - w: weeks
pub fn parse_duration(input: &str) -> Option<Duration> {
    let input = input.trim();
    if let Ok(secs) = input.parse::<u64>() {
        return Some(Duration::from_secs(secs));
    }

    let unit = input.chars().last()?;
    let digits = &input[..input.len() - unit.len_utf8()];
    let amount: u64 = digits.parse().ok()?;

    let seconds = match unit.to_ascii_lowercase() {
        's' => amount,
        'm' => amount.checked_mul(60)?,
        'h' => amount.checked_mul(3600)?,
        'd' => amount.checked_mul(86400)?,
        'w' => amount.checked_mul(604800)?,
        _ => return None,
    };

    Some(Duration::from_secs(seconds))
}

/// Mute length from `/mute` arguments.
///
/// The first argument is read as whole seconds. Missing, non-numeric, zero
/// or oversized values all give [`DEFAULT_MUTE_SECS`].
pub fn parse_mute_seconds(args: &str) -> u32 {
    args.split_whitespace()
        .next()
        .and_then(|token| token.parse::<u32>().ok())
        .filter(|&secs| secs > 0)
        .unwrap_or(DEFAULT_MUTE_SECS)
}
