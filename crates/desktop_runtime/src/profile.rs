//! Read-only portfolio data served by the terminal commands.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bio {
    pub name: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Network,
    Cloud,
    Other,
}

impl SkillCategory {
    /// Listing order used by the `skills` command.
    pub const ALL: [SkillCategory; 5] = [
        Self::Frontend,
        Self::Backend,
        Self::Network,
        Self::Cloud,
        Self::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Network => "Network",
            Self::Cloud => "Cloud",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub linkedin: String,
}

/// Portfolio owner data plus the pools the random-pick commands draw from.
///
/// Keys missing from a JSON override keep the built-in values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileData {
    pub bio: Bio,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub contact: Contact,
    /// User name shown in the terminal prompt.
    pub handle: String,
    pub quotes: Vec<String>,
    pub facts: Vec<String>,
    pub fun_facts: Vec<String>,
    pub fortunes: Vec<String>,
}

impl ProfileData {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Skills of one category, in declaration order.
    pub fn skills_in(&self, category: SkillCategory) -> impl Iterator<Item = &Skill> {
        self.skills
            .iter()
            .filter(move |skill| skill.category == category)
    }
}

fn skill(name: &str, category: SkillCategory) -> Skill {
    Skill {
        name: name.to_string(),
        category,
    }
}

fn project(name: &str, description: &str, technologies: &[&str], github_url: &str) -> Project {
    Project {
        name: name.to_string(),
        description: description.to_string(),
        technologies: technologies.iter().map(|tech| tech.to_string()).collect(),
        github_url: github_url.to_string(),
    }
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

impl Default for ProfileData {
    fn default() -> Self {
        use SkillCategory::{Backend, Cloud, Frontend, Network};

        Self {
            bio: Bio {
                name: "John Doe".to_string(),
                title: "Full Stack Developer".to_string(),
                description: "I'm a passionate developer with expertise in building modern web \
                    applications. I specialize in React, Next.js, and TypeScript. I enjoy \
                    creating performant, beautiful, and accessible user interfaces."
                    .to_string(),
            },
            skills: vec![
                skill("React", Frontend),
                skill("Next.js", Frontend),
                skill("TypeScript", Frontend),
                skill("JavaScript", Frontend),
                skill("Tailwind CSS", Frontend),
                skill("Framer Motion", Frontend),
                skill("HTML/CSS", Frontend),
                skill("Node.js", Backend),
                skill("Express", Backend),
                skill("MongoDB", Backend),
                skill("PostgreSQL", Backend),
                skill("GraphQL", Backend),
                skill("AWS", Cloud),
                skill("Vercel", Cloud),
                skill("Docker", Cloud),
                skill("CI/CD", Cloud),
                skill("HTTP/HTTPS", Network),
                skill("REST APIs", Network),
                skill("WebSockets", Network),
            ],
            projects: vec![
                project(
                    "E-Commerce Platform",
                    "A full-stack e-commerce solution with advanced product filtering, cart \
                     functionality, and payment integration.",
                    &["Next.js", "TypeScript", "Tailwind CSS", "Prisma", "PostgreSQL"],
                    "https://github.com/johndoe/ecommerce-platform",
                ),
                project(
                    "Task Management App",
                    "A Kanban-style task management application with drag-and-drop \
                     functionality, real-time updates, and team collaboration features.",
                    &["React", "Redux", "Node.js", "Socket.io", "MongoDB"],
                    "https://github.com/johndoe/task-management",
                ),
                project(
                    "Personal Blog",
                    "A statically generated blog with markdown support, code syntax \
                     highlighting, and search functionality.",
                    &["Next.js", "MDX", "Tailwind CSS", "Vercel"],
                    "https://github.com/johndoe/personal-blog",
                ),
                project(
                    "Weather Dashboard",
                    "An interactive weather dashboard that displays current conditions and \
                     forecasts for multiple locations with beautiful visualizations.",
                    &["React", "D3.js", "OpenWeather API", "Geolocation API"],
                    "https://github.com/johndoe/weather-dashboard",
                ),
            ],
            contact: Contact {
                email: "john.doe@example.com".to_string(),
                linkedin: "https://linkedin.com/in/johndoe".to_string(),
            },
            handle: "guest".to_string(),
            quotes: lines(&[
                "\"Talk is cheap. Show me the code.\" - Linus Torvalds",
                "\"Programs must be written for people to read, and only incidentally for machines to execute.\" - Harold Abelson",
                "\"Simplicity is prerequisite for reliability.\" - Edsger W. Dijkstra",
                "\"First, solve the problem. Then, write the code.\" - John Johnson",
                "\"Make it work, make it right, make it fast.\" - Kent Beck",
            ]),
            facts: lines(&[
                "The first computer bug was an actual moth found in a Harvard Mark II relay in 1947.",
                "The first website went online in 1991 and is still reachable at info.cern.ch.",
                "JavaScript was written in ten days in 1995.",
                "Email predates the World Wide Web by more than two decades.",
            ]),
            fun_facts: lines(&[
                "I debug best with a cup of coffee and a rubber duck.",
                "My first program printed my name a thousand times.",
                "I have strong opinions about tabs versus spaces.",
                "I keep a terminal open even when I am not coding.",
            ]),
            fortunes: lines(&[
                "A clean commit history is in your future.",
                "Your next deploy will go smoothly.",
                "You will find the missing semicolon.",
                "An unexpected pull request brings good news.",
                "The bug you seek is in the last place you look.",
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn override_keeps_missing_keys() {
        let profile = ProfileData::from_json(
            r#"{"bio":{"name":"Ada Lovelace","title":"Analyst","description":"Notes on engines."},"handle":"ada"}"#,
        )
        .expect("parse profile");
        assert_eq!(profile.bio.name, "Ada Lovelace");
        assert_eq!(profile.handle, "ada");
        assert_eq!(profile.contact, ProfileData::default().contact);
        assert_eq!(profile.projects.len(), 4);
    }

    #[test]
    fn skills_filter_by_category() {
        let profile = ProfileData::default();
        let network = profile
            .skills_in(SkillCategory::Network)
            .map(|skill| skill.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(network, vec!["HTTP/HTTPS", "REST APIs", "WebSockets"]);
        assert_eq!(profile.skills_in(SkillCategory::Other).count(), 0);
    }

    #[test]
    fn project_urls_use_camel_case_keys() {
        let json = serde_json::to_value(&ProfileData::default().projects[0]).expect("json");
        assert_eq!(
            json["githubUrl"],
            "https://github.com/johndoe/ecommerce-platform"
        );
    }
}
