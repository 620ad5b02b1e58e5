//! Mute command.

use super::{CommandContext, CommandError, CommandOutcome};
use crate::moderation::ModerationIntent;
use crate::utils::parse_mute_seconds;

/// Handle /mute [seconds], replying to the target's message.
/// Missing or unusable durations mute for 60 seconds.
pub fn mute(ctx: &CommandContext<'_>) -> Result<CommandOutcome, CommandError> {
    let target = ctx
        .reply_to_user
        .ok_or(CommandError::MissingTarget { usage: "usage.mute" })?;
    let seconds = parse_mute_seconds(ctx.args);

    Ok(CommandOutcome::Intents(vec![
        ModerationIntent::RestrictUser {
            user_id: target,
            until: ctx.now_secs + i64::from(seconds),
        },
        ModerationIntent::send(ctx.text("mute.done").replace("{seconds}", &seconds.to_string())),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::ChatSettings;
    use crate::plugins::tests::ctx;

    #[test]
    fn needs_a_reply_target() {
        let settings = ChatSettings::default();
        assert_eq!(
            mute(&ctx("30", &settings)),
            Err(CommandError::MissingTarget { usage: "usage.mute" })
        );
    }

    #[test]
    fn invalid_duration_falls_back_to_sixty_seconds() {
        let settings = ChatSettings::default();
        let mut c = ctx("forever", &settings);
        c.reply_to_user = Some(5);

        let CommandOutcome::Intents(intents) = mute(&c).unwrap() else {
            panic!("expected intents");
        };
        assert_eq!(intents[0], ModerationIntent::RestrictUser { user_id: 5, until: 1_060 });
    }

    #[test]
    fn unit_suffixed_duration_is_not_a_number() {
        let settings = ChatSettings::default();
        let mut c = ctx("2m", &settings);
        c.reply_to_user = Some(5);

        let CommandOutcome::Intents(intents) = mute(&c).unwrap() else {
            panic!("expected intents");
        };
        assert_eq!(intents[0], ModerationIntent::RestrictUser { user_id: 5, until: 1_060 });
    }
}
