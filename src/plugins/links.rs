//! Link lock commands.

use super::{CommandContext, CommandError, CommandOutcome};

/// Handle /locklinks.
pub fn lock(ctx: &CommandContext<'_>) -> Result<CommandOutcome, CommandError> {
    set_links(ctx, false, "links.locked")
}

/// Handle /unlocklinks.
pub fn unlock(ctx: &CommandContext<'_>) -> Result<CommandOutcome, CommandError> {
    set_links(ctx, true, "links.unlocked")
}

fn set_links(ctx: &CommandContext<'_>, allowed: bool, key: &str) -> Result<CommandOutcome, CommandError> {
    let mut settings = ctx.settings.clone();
    settings.links_allowed = allowed;

    Ok(CommandOutcome::Update {
        settings,
        confirmation: ctx.text(key),
    })
}
