//! Static copy for the presentational sections.

pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub about: &'static [&'static str],
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub struct Role {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("About", "#about"),
    ("Skills", "#skills"),
    ("Experience", "#experience"),
    ("LeetCode", "#leetcode"),
    ("Contact", "#contact"),
];

pub const PROFILE: Profile = Profile {
    name: "Priyansh Garg",
    headline: "Software Engineer",
    tagline: "I build reliable backends and clean, fast web experiences.",
    about: &[
        "I enjoy turning fuzzy problems into small, well-tested systems.",
        "Most of my time goes into APIs, data pipelines and the tooling around them.",
    ],
    email: "hello@example.com",
    github: "https://github.com/",
    linkedin: "https://www.linkedin.com/",
};

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        title: "Languages",
        skills: &["Rust", "TypeScript", "Python", "SQL"],
    },
    SkillGroup {
        title: "Web",
        skills: &["React", "Leptos", "Node.js", "Tailwind CSS"],
    },
    SkillGroup {
        title: "Infrastructure",
        skills: &["PostgreSQL", "Docker", "AWS", "CI/CD"],
    },
];

pub const EXPERIENCE: &[Role] = &[
    Role {
        title: "Software Engineer",
        company: "Acme Corp",
        period: "2023 - Present",
        highlights: &[
            "Own the public API and its rate limiting.",
            "Cut p99 latency of the search service in half.",
        ],
    },
    Role {
        title: "Software Engineering Intern",
        company: "Startup Labs",
        period: "2022",
        highlights: &["Shipped the first version of the billing dashboard."],
    },
];
