// SPDX-License-Identifier: MPL-2.0
//! The portfolio's content tables.

use super::{
    AboutFact, ContactInfo, Course, EducationEntry, NavLink, Profile, Project, SectionId, Skill,
    SkillCategory,
};
use crate::ui::icons::Glyph;

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        id: SectionId::Hero,
        label: "Home",
    },
    NavLink {
        id: SectionId::About,
        label: "About",
    },
    NavLink {
        id: SectionId::Skills,
        label: "Skills",
    },
    NavLink {
        id: SectionId::Projects,
        label: "Projects",
    },
    NavLink {
        id: SectionId::Education,
        label: "Education",
    },
    NavLink {
        id: SectionId::Contact,
        label: "Contact",
    },
];

pub const PROFILE: Profile = Profile {
    name: "Bekzat Kuanyshov",
    initials: "BK",
    role: "Frontend Developer",
    tagline: "Frontend developer building responsive, fast interfaces",
    highlights: &["React", "Tailwind CSS", "Vite", "Node.js"],
    avatar: "img/img1.jpg",
    resume: "docs/bkuanyshov.docx",
};

// ==========================================================================
// About
// ==========================================================================

pub const ABOUT_TITLE: &str = "About me";
pub const ABOUT_SUBTITLE: &str = "A little more about my experience and interests";

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I build fast and clear user interfaces. I like clean code, I am interested in \
     UI/UX design and I want to keep growing inside a team of professionals.",
    "I have worked with modern frameworks and libraries such as React, Tailwind CSS \
     and Node.js. I am always learning new technologies and applying good development \
     practices.",
    "In my spare time I explore new development tools, contribute to open-source \
     projects and build my own applications to grow this portfolio.",
];

pub const ABOUT_FACTS: &[AboutFact] = &[
    AboutFact {
        icon: Glyph::Book,
        label: "Education",
        value: "Astana IT University, Cybersecurity",
    },
    AboutFact {
        icon: Glyph::Calendar,
        label: "Graduation",
        value: "2025",
    },
    AboutFact {
        icon: Glyph::Code,
        label: "Experience",
        value: "Frontend development",
    },
    AboutFact {
        icon: Glyph::Pin,
        label: "Location",
        value: "Astana, Kazakhstan",
    },
];

// ==========================================================================
// Skills
// ==========================================================================

pub const SKILLS_TITLE: &str = "Skills";
pub const SKILLS_SUBTITLE: &str = "My technical and personal skills";

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend",
        skills: &[
            Skill::new("HTML", 5),
            Skill::new("CSS", 5),
            Skill::new("JavaScript", 4),
            Skill::new("React", 4),
            Skill::new("Tailwind CSS", 5),
            Skill::new("Bootstrap", 4),
            Skill::new("Vite", 4),
        ],
    },
    SkillCategory {
        title: "Backend",
        skills: &[
            Skill::new("Node.js", 3),
            Skill::new("Express.js", 3),
            Skill::new("PostgreSQL", 4),
            Skill::new("MongoDB", 4),
            Skill::new("Python", 3),
            Skill::new("Golang", 2),
        ],
    },
    SkillCategory {
        title: "Tools",
        skills: &[
            Skill::new("Git", 4),
            Skill::new("VS Code", 5),
            Skill::new("Figma", 3),
            Skill::new("GitHub", 4),
            Skill::new("Postman", 4),
            Skill::new("Chrome DevTools", 4),
            Skill::new("Adobe Photoshop", 3),
        ],
    },
    SkillCategory {
        title: "Soft Skills",
        skills: &[
            Skill::new("Responsibility", 5),
            Skill::new("Attention to detail", 4),
            Skill::new("Teamwork", 4),
            Skill::new("Fast learning", 5),
            Skill::new("Communication", 4),
        ],
    },
];

// ==========================================================================
// Projects
// ==========================================================================

pub const PROJECTS_TITLE: &str = "Projects";
pub const PROJECTS_SUBTITLE: &str = "Some of my work";

pub const PROJECTS: &[Project] = &[
    Project {
        title: "GoldFish, a fried fish restaurant",
        description: "A modern responsive landing page for a restaurant with a bright \
                      design, animations and call-to-action buttons. It presents the \
                      best fish dishes in Astana and invites visitors in.",
        image: "img/img2.jpg",
        technologies: &["React", "Tailwind CSS", "Vite"],
        demo_url: Some("https://example.com/project1"),
        source_url: Some("https://github.com/bkuanyshov/Gold-fish.git"),
    },
    Project {
        title: "Eye Bot, AI eye disease screening",
        description: "A web service that uses machine learning to analyse fundus images \
                      and give a preliminary diagnosis of eye diseases. Animated, \
                      responsive interface with simple navigation.",
        image: "img/img3.jpg",
        technologies: &["React", "Tailwind CSS", "Vite", "HTML", "CSS", "JavaScript"],
        demo_url: Some("https://example.com/project2"),
        source_url: Some("https://github.com/bkuanyshov/chat-bot-eye.git"),
    },
    Project {
        title: "BikeShop",
        description: "An online bicycle shop with a catalog, a blog, company and contact \
                      pages. Convenient search and a modern interface.",
        image: "img/img5.jpg",
        technologies: &["React", "TypeScript", "Vite", "TailwindCSS"],
        demo_url: Some("http://localhost:5174"),
        source_url: Some("https://github.com/bkuanyshov/bike-shop.git"),
    },
    Project {
        title: "Basketball Arena",
        description: "An online basketball game with 1v1 and 3v3 modes, tournaments and \
                      matches against players from all over the world.",
        image: "img/img4.jpg",
        technologies: &["React", "TypeScript", "Vite", "TailwindCSS"],
        demo_url: Some("https://example.com/project4"),
        source_url: Some("https://github.com/bkuanyshov/basketball-game.git"),
    },
];

// ==========================================================================
// Education
// ==========================================================================

pub const EDUCATION_TITLE: &str = "Education and courses";
pub const EDUCATION_SUBTITLE: &str = "My degree and the courses I completed";

pub const EDUCATION: &[EducationEntry] = &[EducationEntry {
    institution: "Astana IT University",
    degree: "Cybersecurity",
    years: "2021-2025",
    description: "Foundations of information security, cryptography, and the \
                  protection of computer systems and networks.",
}];

pub const COURSES: &[Course] = &[
    Course {
        name: "The Complete JavaScript Course",
        provider: "Udemy",
        year: "2024",
        duration: "6 months",
        certificate_url: Some("https://example.com/cert1"),
    },
    Course {
        name: "React, the Complete Guide",
        provider: "Stepik",
        year: "2023",
        duration: "3 months",
        certificate_url: Some("https://example.com/cert2"),
    },
    Course {
        name: "Modern Frontend Developer",
        provider: "Coursera",
        year: "2023",
        duration: "4 months",
        certificate_url: Some("https://example.com/cert3"),
    },
];

// ==========================================================================
// Contact
// ==========================================================================

pub const CONTACT_TITLE: &str = "Contact";
pub const CONTACT_SUBTITLE: &str = "Get in touch to work together";

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        icon: Glyph::Phone,
        label: "Phone",
        value: "+7 (702) 619 67 60",
        link: Some("tel:+77026196760"),
    },
    ContactInfo {
        icon: Glyph::Mail,
        label: "Email",
        value: "bkuanyshov17@gmail.com",
        link: Some("mailto:bkuanyshov17@gmail.com"),
    },
    ContactInfo {
        icon: Glyph::Code,
        label: "GitHub",
        value: "github.com/bkuanyshov",
        link: Some("https://github.com/bkuanyshov"),
    },
    ContactInfo {
        icon: Glyph::Person,
        label: "LinkedIn",
        value: "linkedin.com/in/bekzat",
        link: Some("https://linkedin.com/in/bekzat"),
    },
];

/// Text shown after a simulated submission.
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Your message was sent successfully!";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_cover_every_section_in_order() {
        let ids: Vec<SectionId> = NAV_LINKS.iter().map(|link| link.id).collect();
        assert_eq!(ids, SectionId::ALL.to_vec());
    }

    #[test]
    fn every_skill_level_is_in_range() {
        for category in SKILL_CATEGORIES {
            assert!(!category.skills.is_empty(), "{} is empty", category.title);
            for skill in category.skills {
                assert!((1..=5).contains(&skill.level.get()));
            }
        }
    }

    #[test]
    fn frontend_lists_react_at_level_four() {
        let frontend = SKILL_CATEGORIES
            .iter()
            .find(|category| category.title == "Frontend")
            .expect("frontend category");
        let react = frontend
            .skills
            .iter()
            .find(|skill| skill.name == "React")
            .expect("react skill");
        assert_eq!(react.level.get(), 4);
    }

    #[test]
    fn contact_list_has_web_profiles() {
        assert_eq!(CONTACT_INFO.iter().filter(|info| info.is_social()).count(), 2);
    }
}
