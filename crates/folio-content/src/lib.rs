//! Static portfolio content.
//!
//! Read-only data consumed by the TUI for iteration and display. Everything
//! here is `'static`; nothing in the application mutates it.

/// Identity and hero copy.
pub struct Profile {
    pub name: &'static str,
    pub full_name: &'static str,
    pub greeting: &'static str,
    pub intro: &'static str,
}

/// A labeled external link.
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// A headline number on the about section.
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// One education timeline entry.
pub struct EducationEntry {
    pub institution: &'static str,
    pub degree: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

/// A skill with a 0-100 proficiency level.
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub category: &'static str,
}

/// A summary card under the skill grid.
pub struct SummaryCard {
    pub title: &'static str,
    pub blurb: &'static str,
}

/// A portfolio project.
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub code_url: &'static str,
    pub demo_url: Option<&'static str>,
}

/// Ways to reach the author, shown on the contact section.
pub struct ContactInfo {
    pub email: &'static str,
    pub location: &'static str,
    pub phone: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Sumalatha",
    full_name: "Sumalatha Salapu",
    greeting: "Hi, I'm Sumalatha 👋",
    intro: "I'm a Web Developer passionate about crafting interactive and beautiful web experiences.",
};

/// Decorative code fragments floating around the hero.
pub const CODE_SNIPPETS: &[&str] = &["<div>", "const dev = () => {}", "print('Hello')", "</>"];

pub const HERO_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        url: "https://github.com",
    },
    SocialLink {
        label: "LinkedIn",
        url: "https://linkedin.com",
    },
];

pub const ABOUT_TITLE: &str = "About Me";

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I'm a final-year Computer Science Engineering student with a deep passion for web development and creating beautiful, interactive user experiences.",
    "My journey in tech has been driven by curiosity and the desire to bring ideas to life through code. I specialize in front-end development, crafting responsive and engaging web applications that users love.",
    "When I'm not coding, I'm exploring new technologies, contributing to open-source projects, and constantly learning to stay at the forefront of web development.",
];

pub const ABOUT_STATS: &[Stat] = &[
    Stat {
        value: "15+",
        label: "Projects Worked",
    },
    Stat {
        value: "300+",
        label: "Problems Solved",
    },
];

pub const EDUCATION_TITLE: &str = "Education";

pub const EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        institution: "JNTUK University College of Engineering",
        degree: "B.Tech - Computer Science Engineering",
        period: "2021 - 2025",
        description: "Focused on web development, data structures, algorithms, and software engineering principles. Active in coding clubs and tech events.",
    },
    EducationEntry {
        institution: "Sri Chaitanya Junior College",
        degree: "Intermediate - MPC",
        period: "2019 - 2021",
        description: "Completed with distinction. Developed strong foundation in mathematics and physics.",
    },
    EducationEntry {
        institution: "Narayana High School",
        degree: "Secondary School Education",
        period: "2018 - 2019",
        description: "Achieved excellent grades. Developed early interest in computers and technology.",
    },
];

pub const SKILLS_TITLE: &str = "Skills & Expertise";

pub const SKILLS: &[Skill] = &[
    Skill {
        name: "HTML/CSS",
        level: 95,
        category: "Frontend",
    },
    Skill {
        name: "JavaScript",
        level: 90,
        category: "Frontend",
    },
    Skill {
        name: "React",
        level: 85,
        category: "Frontend",
    },
    Skill {
        name: "TypeScript",
        level: 80,
        category: "Frontend",
    },
    Skill {
        name: "Tailwind CSS",
        level: 90,
        category: "Frontend",
    },
    Skill {
        name: "Node.js",
        level: 75,
        category: "Backend",
    },
    Skill {
        name: "Express",
        level: 70,
        category: "Backend",
    },
    Skill {
        name: "MongoDB",
        level: 75,
        category: "Database",
    },
    Skill {
        name: "Git & GitHub",
        level: 85,
        category: "Tools",
    },
    Skill {
        name: "Responsive Design",
        level: 92,
        category: "Design",
    },
];

pub const SKILL_SUMMARY: &[SummaryCard] = &[
    SummaryCard {
        title: "Frontend Dev",
        blurb: "Modern & Responsive UIs",
    },
    SummaryCard {
        title: "Full Stack",
        blurb: "End-to-End Solutions",
    },
    SummaryCard {
        title: "UI/UX Design",
        blurb: "Beautiful Interfaces",
    },
];

pub const PROJECTS_TITLE: &str = "Featured Projects";

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Platform",
        description: "A full-featured online shopping platform with cart functionality, payment integration, and admin dashboard.",
        tech: &["React", "Node.js", "MongoDB", "Stripe"],
        code_url: "https://github.com",
        demo_url: None,
    },
    Project {
        title: "Task Management App",
        description: "Collaborative task management tool with real-time updates, drag-and-drop interface, and team collaboration features.",
        tech: &["React", "Firebase", "Tailwind CSS"],
        code_url: "https://github.com",
        demo_url: Some("https://demo.com"),
    },
    Project {
        title: "Weather Dashboard",
        description: "Real-time weather application with location-based forecasts, interactive maps, and weather alerts.",
        tech: &["JavaScript", "API Integration", "Chart.js"],
        code_url: "https://github.com",
        demo_url: None,
    },
    Project {
        title: "Portfolio Generator",
        description: "A tool that helps developers create beautiful portfolios with customizable templates and themes.",
        tech: &["React", "TypeScript", "CSS Modules"],
        code_url: "https://github.com",
        demo_url: None,
    },
    Project {
        title: "Chat Application",
        description: "Real-time messaging app with group chats, file sharing, and end-to-end encryption.",
        tech: &["React", "Socket.io", "Express", "MongoDB"],
        code_url: "https://github.com",
        demo_url: None,
    },
    Project {
        title: "Blog Platform",
        description: "Modern blogging platform with markdown support, comments, and social sharing features.",
        tech: &["Next.js", "Prisma", "PostgreSQL"],
        code_url: "https://github.com",
        demo_url: None,
    },
];

pub const CONTACT_TITLE: &str = "Get In Touch";
pub const CONTACT_HEADLINE: &str = "Let's Connect!";
pub const CONTACT_PITCH: &str = "I'm always excited to collaborate on interesting projects or discuss new opportunities. Feel free to reach out!";

pub const CONTACT: ContactInfo = ContactInfo {
    email: "sumalathasalapu123@email.com",
    location: "Andhra Pradesh, India",
    phone: "+91 74162 73611",
};

pub const CONTACT_SOCIALS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        url: "https://github.com/SumaLatha2023",
    },
    SocialLink {
        label: "LinkedIn",
        url: "www.linkedin.com/in/sumalatha-salapu",
    },
    SocialLink {
        label: "Instagram",
        url: "https://www.instagram.com/sumalatha_salapu/",
    },
    SocialLink {
        label: "X",
        url: "https://x.com/Sumalatha_2004?",
    },
    SocialLink {
        label: "Discord",
        url: "discordapp.com/users/sumalatha_salapu_30067",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_levels_are_percentages() {
        for skill in SKILLS {
            assert!(skill.level <= 100, "{} exceeds 100", skill.name);
        }
    }

    #[test]
    fn every_project_has_a_code_link() {
        for project in PROJECTS {
            assert!(!project.code_url.is_empty(), "{}", project.title);
            assert!(!project.tech.is_empty(), "{}", project.title);
        }
    }

    #[test]
    fn education_is_reverse_chronological() {
        let start_years: Vec<i32> = EDUCATION
            .iter()
            .filter_map(|e| e.period.split(' ').next())
            .filter_map(|y| y.parse().ok())
            .collect();
        assert_eq!(start_years.len(), EDUCATION.len());
        assert!(start_years.windows(2).all(|w| w[0] >= w[1]));
    }
}
