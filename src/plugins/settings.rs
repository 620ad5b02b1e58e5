//! Settings overview command.

use super::{CommandContext, CommandError, CommandOutcome};
use crate::database::ChatSettings;
use crate::moderation::ModerationIntent;

/// Handle /settings.
pub fn show(ctx: &CommandContext<'_>) -> Result<CommandOutcome, CommandError> {
    Ok(CommandOutcome::Intents(vec![ModerationIntent::send(format_settings(
        ctx,
        ctx.settings,
    ))]))
}

fn format_settings(ctx: &CommandContext<'_>, s: &ChatSettings) -> String {
    let links = if s.links_allowed { ctx.text("settings.yes") } else { ctx.text("settings.no") };
    let words = if s.banned_words.is_empty() {
        ctx.text("settings.none")
    } else {
        s.banned_words.join(", ")
    };

    ctx.text("settings.summary")
        .replace("{welcome}", &s.welcome_text)
        .replace("{links}", &links)
        .replace("{words}", &words)
        .replace("{limit}", &s.flood_limit.to_string())
        .replace("{window}", &s.flood_window_secs.to_string())
        .replace("{mute}", &s.auto_mute_secs.to_string())
}
