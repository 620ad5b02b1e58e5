//! Banned word commands.

use super::{CommandContext, CommandError, CommandOutcome};
use crate::moderation::ModerationIntent;

/// Handle /addword <word>.
pub fn add(ctx: &CommandContext<'_>) -> Result<CommandOutcome, CommandError> {
    if ctx.args.is_empty() {
        return Err(CommandError::MissingArgument { usage: "usage.addword" });
    }

    let word = ctx.args.to_lowercase();
    let mut settings = ctx.settings.clone();
    settings.add_word(&word);

    Ok(CommandOutcome::Update {
        settings,
        confirmation: ctx.text("words.added").replace("{word}", &word),
    })
}

/// Handle /delword <word>. Removing an absent word still confirms.
pub fn delete(ctx: &CommandContext<'_>) -> Result<CommandOutcome, CommandError> {
    if ctx.args.is_empty() {
        return Err(CommandError::MissingArgument { usage: "usage.delword" });
    }

    let mut settings = ctx.settings.clone();
    settings.remove_word(ctx.args);

    Ok(CommandOutcome::Update {
        settings,
        confirmation: ctx.text("words.removed"),
    })
}

/// Handle /listwords.
pub fn list(ctx: &CommandContext<'_>) -> Result<CommandOutcome, CommandError> {
    let words = &ctx.settings.banned_words;
    let text = if words.is_empty() {
        ctx.text("words.empty")
    } else {
        ctx.text("words.list").replace("{words}", &words.join(", "))
    };

    Ok(CommandOutcome::Intents(vec![ModerationIntent::send(text)]))
}
