//! Fixed profile content shown on the static pages.

use crate::models::BlogPost;

pub const DISPLAY_NAME: &str = "shrssrhs";
pub const TAGLINE: &str = "Student & Developer";
pub const ABOUT: &str = "I'm a student learning to code and building desktop applications with \
Python. Currently exploring web development with TypeScript and React.";

pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
    pub handle: &'static str,
}

pub const CONTACTS: &[Link] = &[
    Link {
        label: "GitHub",
        href: "https://github.com/shrssrhs",
        handle: "@shrssrhs",
    },
    Link {
        label: "Telegram",
        href: "https://t.me/shrssrhsduke",
        handle: "@shrssrhsduke",
    },
];

pub struct Venture {
    pub title: &'static str,
    pub href: &'static str,
    pub description: &'static str,
}

pub const VENTURES: &[Venture] = &[
    Venture {
        title: "YouTube | shrssrhs",
        href: "https://www.youtube.com/@shrssrhs",
        description: "Videos about coding, projects, and tech.",
    },
    Venture {
        title: "Telegram | SherstyanoiGad",
        href: "https://t.me/SherstyanoiGad",
        description: "Channel with updates, thoughts, and behind the scenes.",
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub link: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Habit Tracker",
        description: "Desktop app for tracking daily habits with streaks, weekly goals, \
statistics charts, CSV export, and desktop notifications.",
        tech: &["Python", "CustomTkinter", "SQLite", "Matplotlib"],
        link: "https://github.com/shrssrhs/habit-tracker",
    },
    Project {
        title: "Portfolio Website",
        description: "Personal portfolio site served by a small Rust web server. \
The site you're looking at right now.",
        tech: &["Rust", "axum", "tokio"],
        link: "https://github.com/shrssrhs/portfolio",
    },
];

pub struct SkillGroup {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: "Languages",
        items: &["Python", "TypeScript", "HTML/CSS"],
    },
    SkillGroup {
        category: "Frameworks & Libraries",
        items: &["CustomTkinter", "Next.js", "React", "Tailwind CSS"],
    },
    SkillGroup {
        category: "Tools & Databases",
        items: &["Git", "SQLite", "Matplotlib", "VS Code"],
    },
];

pub struct Milestone {
    pub period: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const TIMELINE: &[Milestone] = &[
    Milestone {
        period: "2025 - Present",
        title: "Self-taught Developer",
        description: "Building desktop applications with Python and learning web development \
with TypeScript and React.",
    },
    Milestone {
        period: "2024 - 2025",
        title: "Programming Courses",
        description: "Completed courses covering Python fundamentals, GUI development, audio \
processing, and data visualization.",
    },
];

pub fn builtin_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            slug: "getting-started-with-python".to_string(),
            title: "How I Got Started with Python".to_string(),
            date: "2025-01-15".to_string(),
            summary: "My journey from zero coding knowledge to building desktop apps with \
Python and CustomTkinter."
                .to_string(),
        },
        BlogPost {
            slug: "building-habit-tracker".to_string(),
            title: "Building a Habit Tracker from Scratch".to_string(),
            date: "2025-02-01".to_string(),
            summary: "A deep dive into creating a full-featured habit tracking app with SQLite, \
Matplotlib, and desktop notifications."
                .to_string(),
        },
    ]
}
