//! Welcome text command.

use super::{CommandContext, CommandError, CommandOutcome};

/// Handle /setwelcome <text>.
pub fn set_welcome(ctx: &CommandContext<'_>) -> Result<CommandOutcome, CommandError> {
    if ctx.args.is_empty() {
        return Err(CommandError::MissingArgument { usage: "usage.setwelcome" });
    }

    let mut settings = ctx.settings.clone();
    settings.welcome_text = ctx.args.to_string();

    Ok(CommandOutcome::Update {
        settings,
        confirmation: ctx.text("welcome.saved"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::ChatSettings;
    use crate::plugins::tests::{ctx, updated};

    #[test]
    fn replaces_only_the_welcome_text() {
        let settings = ChatSettings {
            links_allowed: true,
            ..Default::default()
        };
        let new = updated(set_welcome(&ctx("Hello there", &settings)));

        assert_eq!(new.welcome_text, "Hello there");
        assert!(new.links_allowed);
    }

    #[test]
    fn requires_text() {
        let settings = ChatSettings::default();
        assert_eq!(
            set_welcome(&ctx("", &settings)),
            Err(CommandError::MissingArgument { usage: "usage.setwelcome" })
        );
    }
}
