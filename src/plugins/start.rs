//! Start/help command.

use super::{CommandContext, CommandError, CommandOutcome};
use crate::moderation::ModerationIntent;

/// Handle /start and /help: static help text, as a reply.
pub fn start(ctx: &CommandContext<'_>) -> Result<CommandOutcome, CommandError> {
    Ok(CommandOutcome::Intents(vec![ModerationIntent::reply(
        ctx.text("start.help"),
        ctx.message_id,
    )]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::ChatSettings;
    use crate::plugins::tests::ctx;

    #[test]
    fn replies_with_help() {
        let settings = ChatSettings::default();
        let outcome = start(&ctx("", &settings)).unwrap();

        let CommandOutcome::Intents(intents) = outcome else {
            panic!("expected intents");
        };
        assert!(matches!(
            &intents[..],
            [ModerationIntent::SendMessage { text, reply_to: Some(10) }] if text.contains("/setwelcome")
        ));
    }
}
