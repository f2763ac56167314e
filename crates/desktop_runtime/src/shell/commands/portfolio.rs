use std::rc::Rc;

use system_shell::CommandContext;
use system_shell_contract::CommandResult;

use super::super::{descriptor, CommandRegistration};
use crate::profile::{ProfileData, SkillCategory};

pub(super) fn whoami_registration(profile: Rc<ProfileData>) -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor(
            "whoami",
            &[],
            "Display user information",
            "whoami",
            Vec::new(),
            Vec::new(),
        ),
        handler: Rc::new(move |_: &CommandContext<'_>| {
            let bio = &profile.bio;
            Ok(CommandResult::text(format!(
                "Name: {}\nTitle: {}\n\n{}",
                bio.name, bio.title, bio.description
            )))
        }),
    }
}

pub(super) fn skills_registration(profile: Rc<ProfileData>) -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor(
            "skills",
            &[],
            "List my technical skills by category",
            "skills",
            Vec::new(),
            Vec::new(),
        ),
        handler: Rc::new(move |_: &CommandContext<'_>| {
            Ok(CommandResult::text(render_skills(&profile)))
        }),
    }
}

fn render_skills(profile: &ProfileData) -> String {
    SkillCategory::ALL
        .into_iter()
        .filter_map(|category| {
            let names = profile
                .skills_in(category)
                .map(|skill| format!("  - {}", skill.name))
                .collect::<Vec<_>>();
            // Other is only listed when something falls into it.
            if category == SkillCategory::Other && names.is_empty() {
                return None;
            }
            let mut block = format!("{}:", category.label());
            for name in names {
                block.push('\n');
                block.push_str(&name);
            }
            Some(block)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub(super) fn projects_registration(profile: Rc<ProfileData>) -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor(
            "projects",
            &[],
            "Show my projects",
            "projects",
            Vec::new(),
            Vec::new(),
        ),
        handler: Rc::new(move |_: &CommandContext<'_>| {
            if profile.projects.is_empty() {
                return Ok(CommandResult::text("No projects listed yet."));
            }
            let blocks = profile
                .projects
                .iter()
                .map(|project| {
                    format!(
                        "Project: {}\nDescription: {}\nTechnologies: {}\nGitHub: {}",
                        project.name,
                        project.description,
                        project.technologies.join(", "),
                        project.github_url
                    )
                })
                .collect::<Vec<_>>();
            Ok(CommandResult::text(blocks.join("\n\n")))
        }),
    }
}

pub(super) fn contact_registration(profile: Rc<ProfileData>) -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor(
            "contact",
            &[],
            "Show contact information",
            "contact",
            Vec::new(),
            Vec::new(),
        ),
        handler: Rc::new(move |_: &CommandContext<'_>| {
            Ok(CommandResult::text(format!(
                "Email: {}\nLinkedIn: {}",
                profile.contact.email, profile.contact.linkedin
            )))
        }),
    }
}
