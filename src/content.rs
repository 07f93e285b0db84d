//! Static page content.

use crate::models::{
    Category, Experience, NavRoute, Network, Principle, Profile, Project, Skill, SocialLink, Stat,
    WorkingHours,
};

pub const PROFILE: Profile = Profile {
    first_name: "Ibrahim",
    last_name: "Sohofi",
    role: "Web Developer & UI Designer",
    headline: "I design and build modern web applications with a focus on responsive design, \
               user experience, and clean code. Currently working on new projects and \
               improving my skills as a developer.",
    about: "I'm a web developer from Morocco who is passionate about creating modern web \
            applications. I'm currently focused on expanding my skills and working on personal \
            projects to build my portfolio. I love learning new technologies and solving \
            challenging problems.",
    journey: &[
        "My journey in web development began with a curiosity about how websites work. \
         Starting with HTML and CSS, I gradually expanded my knowledge to include JavaScript, \
         PHP, and modern frameworks like React. I enjoy the process of turning ideas into \
         functional and visually appealing websites.",
        "As a student of web development, I continuously strive to improve my skills and \
         stay updated with the latest industry trends and best practices. I am passionate \
         about creating clean, efficient, and user-friendly web applications.",
    ],
    email: "sohofibrahim9@gmail.com",
    location: "Morocco",
    blurb: "A passionate web developer focused on creating modern, responsive, and \
            user-friendly websites and applications.",
    portrait: "/images/IMG.png",
    repositories_url: "https://github.com/ibrahimsohofi?tab=repositories",
};

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Vidstack Player",
        description: "A forked project from vidstack/player. A modern video player alternative \
                      to JW Player and Video.js.",
        image: "https://placehold.co/600x400/e2e8f0/ffffff?text=Vidstack+Player",
        tags: &["TypeScript", "Video", "Player"],
        category: "video",
        repo_url: "https://github.com/ibrahimsohofi/vidstack",
        demo_url: "",
    },
    Project {
        id: 2,
        title: "Books Website",
        description: "A website for browsing and exploring books built with HTML.",
        image: "https://placehold.co/600x400/e2e8f0/ffffff?text=Books+Website",
        tags: &["HTML", "CSS", "Web"],
        category: "web",
        repo_url: "https://github.com/ibrahimsohofi/Bookswebsite",
        demo_url: "",
    },
    Project {
        id: 3,
        title: "Watch Series",
        description: "A platform for watching series and shows built with TypeScript.",
        image: "https://placehold.co/600x400/e2e8f0/ffffff?text=Watch+Series",
        tags: &["TypeScript", "React", "Streaming"],
        category: "streaming",
        repo_url: "https://github.com/ibrahimsohofi/watch-series-",
        demo_url: "",
    },
    Project {
        id: 4,
        title: "Vid_dl",
        description: "JavaScript-based video downloader project.",
        image: "https://placehold.co/600x400/e2e8f0/ffffff?text=Vid_dl",
        tags: &["JavaScript", "Node.js", "Downloader"],
        category: "utilities",
        repo_url: "https://github.com/ibrahimsohofi/Vid_dl",
        demo_url: "",
    },
    Project {
        id: 5,
        title: "Watchit",
        description: "A TypeScript-based streaming platform project.",
        image: "https://placehold.co/600x400/e2e8f0/ffffff?text=Watchit",
        tags: &["TypeScript", "React", "Streaming"],
        category: "streaming",
        repo_url: "https://github.com/ibrahimsohofi/watchit",
        demo_url: "",
    },
    Project {
        id: 6,
        title: "Vidnet Frontend",
        description: "A JavaScript frontend for a video platform.",
        image: "https://placehold.co/600x400/e2e8f0/ffffff?text=Vidnet+Frontend",
        tags: &["JavaScript", "React", "Frontend"],
        category: "web",
        repo_url: "https://github.com/ibrahimsohofi/vidnet_frontend",
        demo_url: "",
    },
];

pub const CATEGORIES: &[Category] = &[
    Category { id: "all", label: "All" },
    Category { id: "web", label: "Web" },
    Category { id: "streaming", label: "Streaming" },
    Category { id: "utilities", label: "Utilities" },
    Category { id: "video", label: "Video" },
];

pub const SKILLS: &[Skill] = &[
    Skill { name: "JavaScript", image: "/images/skills/javascript.svg", level: 75 },
    Skill { name: "HTML5", image: "/images/skills/html5.svg", level: 90 },
    Skill { name: "CSS3", image: "/images/skills/css3.svg", level: 85 },
    Skill { name: "React", image: "/images/skills/react.svg", level: 70 },
    Skill { name: "PHP", image: "/images/skills/php.svg", level: 65 },
    Skill { name: "Python", image: "/images/skills/python.svg", level: 60 },
    Skill { name: "Bootstrap", image: "/images/skills/bootstrap.svg", level: 80 },
    Skill { name: "Tailwind CSS", image: "/images/skills/tailwindcss.svg", level: 75 },
];

pub const PRINCIPLES: &[Principle] = &[
    Principle {
        title: "Clean Code",
        description: "I write clean, maintainable, and efficient code following best practices.",
    },
    Principle {
        title: "Continuous Learning",
        description: "I'm always exploring new technologies and expanding my skill set.",
    },
    Principle {
        title: "Problem Solving",
        description: "I approach problems methodically and enjoy finding elegant solutions.",
    },
];

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        period: "2021 - Present",
        title: "Web Developer Student",
        description: "Improving my skills in web development, working on personal projects, \
                      and exploring new technologies.",
    },
    Experience {
        period: "2019 - 2021",
        title: "HTML/CSS Beginner",
        description: "Started learning web development with basic HTML, CSS, and JavaScript \
                      fundamentals.",
    },
];

pub const STATS: &[Stat] = &[
    Stat { value: "30+", label: "Repositories" },
    Stat { value: "8+", label: "Tech Skills" },
    Stat { value: "10+", label: "Following" },
    Stat { value: "106+", label: "Contributions" },
];

pub const SOCIALS: &[SocialLink] = &[
    SocialLink { network: Network::GitHub, url: "https://github.com/ibrahimsohofi" },
    SocialLink { network: Network::LinkedIn, url: "https://linkedin.com/in/ibrahimsohofi" },
    SocialLink { network: Network::Twitter, url: "https://twitter.com/Ibrahimsohofi" },
    SocialLink { network: Network::Instagram, url: "https://instagram.com/sohofi.ibrahim" },
];

pub const WORKING_HOURS: &[WorkingHours] = &[
    WorkingHours { days: "Monday - Friday", hours: "9:00 AM - 6:00 PM" },
    WorkingHours { days: "Saturday", hours: "10:00 AM - 4:00 PM" },
    WorkingHours { days: "Sunday", hours: "Closed" },
];

pub const ROUTES: &[NavRoute] = &[
    NavRoute { href: "/", label: "Home" },
    NavRoute { href: "#about", label: "About" },
    NavRoute { href: "#skills", label: "Skills" },
    NavRoute { href: "#projects", label: "Projects" },
    NavRoute { href: "#contact", label: "Contact" },
];

pub const NO_PROJECTS_NOTICE: &str = "No projects found in this category.";

pub fn project(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

pub fn category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

/// Copyright line for the footer, stamped with the given year.
pub fn copyright(year: i32) -> String {
    format!("© {year} {}. All rights reserved.", PROFILE.full_name())
}

/// Current calendar year, local time when the offset is known.
pub fn current_year() -> i32 {
    time::OffsetDateTime::now_local()
        .unwrap_or_else(|_| time::OffsetDateTime::now_utc())
        .year()
}
