//! Antiflood configuration commands.

use super::{CommandContext, CommandError, CommandOutcome};
use crate::utils::parse_duration;

/// Handle /setflood <limit> [window_seconds].
pub fn set_flood(ctx: &CommandContext<'_>) -> Result<CommandOutcome, CommandError> {
    const USAGE: &str = "usage.setflood";

    let mut parts = ctx.args.split_whitespace();
    let limit = parts
        .next()
        .ok_or(CommandError::MissingArgument { usage: USAGE })
        .and_then(|raw| positive(raw, USAGE))?;
    let window = parts.next().map(|raw| positive(raw, USAGE)).transpose()?;

    let mut settings = ctx.settings.clone();
    settings.flood_limit = limit;
    if let Some(window) = window {
        settings.flood_window_secs = window;
    }

    let confirmation = ctx
        .text("antiflood.updated")
        .replace("{limit}", &settings.flood_limit.to_string())
        .replace("{window}", &settings.flood_window_secs.to_string());

    Ok(CommandOutcome::Update { settings, confirmation })
}

/// Handle /setautomute <seconds>. Accepts durations like `5m`; zero is allowed.
pub fn set_automute(ctx: &CommandContext<'_>) -> Result<CommandOutcome, CommandError> {
    const USAGE: &str = "usage.setautomute";

    let raw = ctx
        .args
        .split_whitespace()
        .next()
        .ok_or(CommandError::MissingArgument { usage: USAGE })?;
    let seconds = parse_duration(raw)
        .and_then(|d| u32::try_from(d.as_secs()).ok())
        .ok_or_else(|| invalid(raw, USAGE))?;

    let mut settings = ctx.settings.clone();
    settings.auto_mute_secs = seconds;

    Ok(CommandOutcome::Update {
        settings,
        confirmation: ctx
            .text("antiflood.automute_updated")
            .replace("{seconds}", &seconds.to_string()),
    })
}

fn positive(raw: &str, usage: &'static str) -> Result<u32, CommandError> {
    raw.parse::<u32>()
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| invalid(raw, usage))
}

fn invalid(raw: &str, usage: &'static str) -> CommandError {
    CommandError::InvalidArgument {
        usage,
        value: raw.to_string(),
    }
}
