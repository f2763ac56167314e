use std::rc::Rc;

use crate::profile::ProfileData;

use super::CommandRegistration;

mod fun;
mod portfolio;
mod system;
mod theme;

/// Every built-in command, in the order `help` lists them.
pub(super) fn builtin_registrations(profile: Rc<ProfileData>) -> Vec<CommandRegistration> {
    vec![
        system::help_registration(),
        portfolio::whoami_registration(profile.clone()),
        portfolio::skills_registration(profile.clone()),
        portfolio::projects_registration(profile.clone()),
        portfolio::contact_registration(profile.clone()),
        system::clear_registration(),
        theme::theme_registration(),
        system::time_registration(),
        fun::weather_registration(),
        fun::quote_registration(profile.clone()),
        fun::fact_registration(profile.clone()),
        fun::funfact_registration(profile.clone()),
        fun::ascii_art_registration(),
        fun::fortune_registration(profile.clone()),
        fun::banner_registration(profile),
    ]
}
