//! Ban and unban commands.

use super::{CommandContext, CommandError, CommandOutcome};
use crate::moderation::ModerationIntent;

/// Handle /ban, replying to the target's message.
pub fn ban(ctx: &CommandContext<'_>) -> Result<CommandOutcome, CommandError> {
    let target = ctx
        .reply_to_user
        .ok_or(CommandError::MissingTarget { usage: "usage.ban" })?;

    Ok(CommandOutcome::Intents(vec![
        ModerationIntent::BanUser { user_id: target },
        ModerationIntent::send(ctx.text("ban.done")),
    ]))
}

/// Handle /unban [user_id]. The reply target wins over the argument.
pub fn unban(ctx: &CommandContext<'_>) -> Result<CommandOutcome, CommandError> {
    const USAGE: &str = "usage.unban";

    let target = match (ctx.reply_to_user, ctx.args.split_whitespace().next()) {
        (Some(user_id), _) => user_id,
        (None, Some(raw)) => raw.parse::<u64>().map_err(|_| CommandError::InvalidArgument {
            usage: USAGE,
            value: raw.to_string(),
        })?,
        (None, None) => return Err(CommandError::MissingTarget { usage: USAGE }),
    };

    Ok(CommandOutcome::Intents(vec![
        ModerationIntent::UnbanUser { user_id: target },
        ModerationIntent::send(ctx.text("ban.unbanned")),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::ChatSettings;
    use crate::plugins::tests::ctx;

    fn first_intent(outcome: Result<CommandOutcome, CommandError>) -> ModerationIntent {
        match outcome {
            Ok(CommandOutcome::Intents(intents)) => intents[0].clone(),
            other => panic!("expected intents, got {other:?}"),
        }
    }

    #[test]
    fn ban_requires_reply() {
        let settings = ChatSettings::default();
        assert_eq!(ban(&ctx("", &settings)).unwrap_err().usage_key(), "usage.ban");

        let mut c = ctx("", &settings);
        c.reply_to_user = Some(9);
        assert_eq!(first_intent(ban(&c)), ModerationIntent::BanUser { user_id: 9 });
    }

    #[test]
    fn unban_by_numeric_argument() {
        let settings = ChatSettings::default();
        assert_eq!(
            first_intent(unban(&ctx("123456", &settings))),
            ModerationIntent::UnbanUser { user_id: 123456 }
        );
    }

    #[test]
    fn unban_prefers_reply_target() {
        let settings = ChatSettings::default();
        let mut c = ctx("123456", &settings);
        c.reply_to_user = Some(9);
        assert_eq!(first_intent(unban(&c)), ModerationIntent::UnbanUser { user_id: 9 });
    }

    #[test]
    fn unban_rejects_missing_or_non_numeric_target() {
        let settings = ChatSettings::default();
        assert_eq!(
            unban(&ctx("", &settings)),
            Err(CommandError::MissingTarget { usage: "usage.unban" })
        );
        assert!(matches!(
            unban(&ctx("@someone", &settings)),
            Err(CommandError::InvalidArgument { .. })
        ));
    }
}
