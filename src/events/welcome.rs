//! Welcome messages for new members.

use crate::database::ChatSettings;
use crate::i18n::get_text;
use crate::moderation::{MembershipJoin, ModerationIntent};

/// One greeting per joining member, built from the chat's welcome text.
pub fn welcome_intents(join: &MembershipJoin, settings: &ChatSettings, locale: &str) -> Vec<ModerationIntent> {
    let template = get_text(locale, "welcome.greeting");

    join.members
        .iter()
        .map(|member| {
            ModerationIntent::send(
                template
                    .replace("{name}", &member.first_name)
                    .replace("{text}", &settings.welcome_text),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moderation::NewMember;

    #[test]
    fn greets_every_member() {
        let join = MembershipJoin {
            chat_id: -1,
            members: vec![
                NewMember { user_id: 1, first_name: "Ana".into() },
                NewMember { user_id: 2, first_name: "Bo".into() },
            ],
        };
        let settings = ChatSettings {
            welcome_text: "glad you're here".into(),
            ..Default::default()
        };

        let intents = welcome_intents(&join, &settings, "en");
        assert_eq!(
            intents,
            vec![
                ModerationIntent::send("Ana, glad you're here"),
                ModerationIntent::send("Bo, glad you're here"),
            ]
        );
    }
}
