//! Every piece of copy, link and asset the site renders.

use crate::Route;

// -----------------------------
// Site-level metadata & branding
// -----------------------------

pub struct SiteMeta {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
    pub author: &'static str,
    pub logo_url: &'static str,
    pub contact_email: &'static str,
    /// Optional, an empty string hides it.
    pub contact_phone: &'static str,
    pub location: &'static str,
    pub copyright_year: u16,
    pub copyright_owner: &'static str,
}

pub const SITE: SiteMeta = SiteMeta {
    name: "Byte",
    tagline: "Digital Innovation Team",
    description: "Byte is a cutting-edge digital innovation team specializing in cybersecurity services, Linux distributions, developer tools, AI models, and technical documentation.",
    keywords: "Byte, digital innovation, cybersecurity, Linux distributions, developer tools, AI models, technical documentation, technology, software development",
    author: "Byte Team",
    logo_url: "https://github.com/Bytrum/.github/blob/main/Bytrum_banner.png?raw=true",
    contact_email: "hello@byte-team.website",
    contact_phone: "",
    location: "Egypt",
    copyright_year: 2026,
    copyright_owner: "Byte-Team",
};

// -----------------------------
// Navigation
// -----------------------------

#[derive(Clone, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: Route,
}

pub fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem { label: "Home", route: Route::Home },
        NavItem { label: "About", route: Route::About },
        NavItem { label: "Projects", route: Route::Projects },
        NavItem { label: "Team", route: Route::Team },
        NavItem { label: "Contact", route: Route::Contact },
    ]
}

pub const SOCIAL_GITHUB: &str = "https://github.com/Bytrum";

// -----------------------------
// Footer
// -----------------------------

/// A footer link either points at a route inside the site or at a plain href.
#[derive(Clone, PartialEq)]
pub enum FooterTarget {
    Internal(Route),
    External(&'static str),
}

#[derive(Clone, PartialEq)]
pub struct FooterLink {
    pub label: &'static str,
    pub target: FooterTarget,
}

pub const FOOTER_BLURB: &str = "Digital innovation at its finest. We create solutions that matter.";

pub fn footer_services() -> Vec<FooterLink> {
    vec![
        FooterLink { label: "Cybersecurity Services", target: FooterTarget::External("#") },
        FooterLink { label: "Blogs and Docs", target: FooterTarget::Internal(Route::Blogs) },
        FooterLink { label: "Linux Distro and Apps", target: FooterTarget::External("#") },
        FooterLink { label: "Tools To Help Developers", target: FooterTarget::External("#") },
        FooterLink { label: "AI Models", target: FooterTarget::External("#") },
    ]
}

pub fn footer_company() -> Vec<FooterLink> {
    vec![
        FooterLink { label: "About Us", target: FooterTarget::Internal(Route::About) },
        FooterLink { label: "Our Team", target: FooterTarget::Internal(Route::Team) },
        FooterLink { label: "Projects", target: FooterTarget::Internal(Route::Projects) },
        FooterLink { label: "Contact", target: FooterTarget::Internal(Route::Contact) },
    ]
}

// -----------------------------
// Homepage
// -----------------------------

pub const HERO_WORDS: [&str; 3] = ["Welcome", "to", "Byte"];
pub const HERO_SUBTITLE: &str = "We are a team of digital innovators, creators, and problem solvers";

pub struct Service {
    pub icon_class: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [Service; 5] = [
    Service {
        icon_class: "fas fa-shield-alt",
        title: "Cybersecurity Services",
        description: "Comprehensive security solutions including penetration testing, vulnerability assessments, and security consulting to protect your digital assets.",
    },
    Service {
        icon_class: "fas fa-blog",
        title: "Blogs and Docs",
        description: "Technical documentation, tutorials, and educational content to help developers and teams stay updated with the latest technologies.",
    },
    Service {
        icon_class: "fab fa-linux",
        title: "Linux Distro and Apps",
        description: "Custom Linux distributions and specialized applications built for specific use cases and optimized performance.",
    },
    Service {
        icon_class: "fas fa-tools",
        title: "Tools To Help Developers",
        description: "Development utilities, automation scripts, and productivity tools designed to streamline the development workflow.",
    },
    Service {
        icon_class: "fas fa-brain",
        title: "AI Models",
        description: "Custom artificial intelligence models and machine learning solutions tailored to solve specific business problems.",
    },
];

pub struct TeamPreview {
    pub name: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
}

pub const TEAM_PREVIEW: [TeamPreview; 5] = [
    TeamPreview { name: "Ahmed Shafik", role: "Software Engineer and Manager", avatar: "https://github.com/Lazysniperz.png" },
    TeamPreview { name: "Omar Sameh", role: "CEO & Founder", avatar: "https://github.com/om7iux.png" },
    TeamPreview { name: "Asaadzx", role: "Software Engineer and Manager", avatar: "https://github.com/asaadzx.png" },
    TeamPreview { name: "Abd Elaziz", role: "Cyber Security Agent", avatar: "https://github.com/haunter4e.png" },
    TeamPreview { name: "Basmala Mahmoud", role: "Social Media Manager", avatar: "https://github.com/basmalamahmoud32010-ai.png" },
];

/// One line of the typed terminal on the homepage and the css class that
/// colours it.
pub struct CodeLine {
    pub text: &'static str,
    pub class: &'static str,
}

pub const TERMINAL_TITLE: &str = "byte-team.cpp";

pub const TERMINAL_CODE: [CodeLine; 35] = [
    CodeLine { text: "#include <iostream>", class: "cpp-include" },
    CodeLine { text: "#include <string>", class: "cpp-include" },
    CodeLine { text: "#include <vector>", class: "cpp-include" },
    CodeLine { text: "", class: "" },
    CodeLine { text: "class TeamIdentity {", class: "cpp-class" },
    CodeLine { text: "private:", class: "cpp-keyword" },
    CodeLine { text: "    std::string teamName = \"Byte\";", class: "cpp-string" },
    CodeLine { text: "    std::vector<std::string> coreValues = {", class: "cpp-keyword" },
    CodeLine { text: "        \"Innovation\",", class: "cpp-string" },
    CodeLine { text: "        \"Excellence\",", class: "cpp-string" },
    CodeLine { text: "        \"Collaboration\",", class: "cpp-string" },
    CodeLine { text: "        \"Creativity\"", class: "cpp-string" },
    CodeLine { text: "    };", class: "cpp-operator" },
    CodeLine { text: "", class: "" },
    CodeLine { text: "public:", class: "cpp-keyword" },
    CodeLine { text: "    void displayIdentity() {", class: "cpp-function" },
    CodeLine { text: "        std::cout << \"=== BYTE TEAM IDENTITY ===\" << std::endl;", class: "cpp-output" },
    CodeLine { text: "        std::cout << \"Team Name: \" << teamName << std::endl;", class: "cpp-output" },
    CodeLine { text: "        std::cout << \"Core Values:\" << std::endl;", class: "cpp-output" },
    CodeLine { text: "", class: "" },
    CodeLine { text: "        for(const auto& value : coreValues) {", class: "cpp-keyword" },
    CodeLine { text: "            std::cout << \"  - \" << value << std::endl;", class: "cpp-output" },
    CodeLine { text: "        }", class: "cpp-operator" },
    CodeLine { text: "", class: "" },
    CodeLine { text: "        std::cout << \"\\nMission: Digital Innovation\" << std::endl;", class: "cpp-output" },
    CodeLine { text: "        std::cout << \"Status: Active & Growing\" << std::endl;", class: "cpp-output" },
    CodeLine { text: "        std::cout << \"=========================\" << std::endl;", class: "cpp-output" },
    CodeLine { text: "    }", class: "cpp-operator" },
    CodeLine { text: "};", class: "cpp-operator" },
    CodeLine { text: "", class: "" },
    CodeLine { text: "int main() {", class: "cpp-function" },
    CodeLine { text: "    TeamIdentity byte;", class: "cpp-class" },
    CodeLine { text: "    byte.displayIdentity();", class: "cpp-function" },
    CodeLine { text: "    return 0;", class: "cpp-keyword" },
    CodeLine { text: "}", class: "cpp-operator" },
];

// -----------------------------
// About page
// -----------------------------

pub const ABOUT_SUBTITLE: &str = "We are a passionate team of digital innovators dedicated to creating exceptional experiences through technology and creativity.";

pub const MISSION_PARAGRAPHS: [&str; 2] = [
    "At Byte, we believe that technology should enhance human experiences, not complicate them. Our mission is to create digital solutions that are not only functional and beautiful but also intuitive and meaningful.",
    "We work closely with our clients to understand their unique challenges and goals, then craft tailored solutions that drive real business value and user satisfaction.",
];

pub struct Value {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const VALUES: [Value; 4] = [
    Value { icon: "fas fa-lightbulb", title: "Innovation", description: "We constantly push boundaries and explore new technologies to deliver cutting-edge solutions." },
    Value { icon: "fas fa-users", title: "Collaboration", description: "We believe in the power of teamwork and foster a culture of open communication and mutual respect." },
    Value { icon: "fas fa-star", title: "Excellence", description: "We strive for excellence in everything we do, from code quality to user experience." },
    Value { icon: "fas fa-heart", title: "Passion", description: "Our team is passionate about technology and committed to creating meaningful digital experiences." },
];

pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const TIMELINE: [Milestone; 1] = [Milestone {
    year: "2025",
    title: "The Birth of Byte",
    description: "Byte was founded with a vision to revolutionize digital experiences through innovation and cutting-edge technology.",
}];

pub const TECHNOLOGIES: [&str; 16] = [
    "React", "Next.js", "Node.js", "Python", "TypeScript", "Vue.js", "Flutter", "React Native",
    "AWS", "Docker", "Kubernetes", "MongoDB", "PostgreSQL", "Firebase", "TensorFlow", "Figma",
];

// -----------------------------
// Team page
// -----------------------------

#[derive(Clone, Copy, PartialEq, Default)]
pub struct SocialLinks {
    pub github: &'static str,
    pub linkedin: &'static str,
    pub discord: &'static str,
    pub instagram: &'static str,
    pub portfolio: &'static str,
}

impl SocialLinks {
    /// `(href, icon class)` for each link that is actually filled in, in the
    /// order the team cards show them.
    pub fn present(&self) -> Vec<(&'static str, &'static str)> {
        [
            (self.linkedin, "fab fa-linkedin"),
            (self.github, "fab fa-github"),
            (self.discord, "fab fa-discord"),
            (self.instagram, "fab fa-instagram"),
            (self.portfolio, "fas fa-globe"),
        ]
        .into_iter()
        .map(|(href, icon)| (href.trim(), icon))
        .filter(|(href, _)| !href.is_empty())
        .collect()
    }
}

#[derive(Clone, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub avatar: &'static str,
    pub social: SocialLinks,
}

pub struct TeamGroup {
    pub heading: &'static str,
    pub members: &'static [TeamMember],
}

pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

pub const TEAM_SUBTITLE: &str = "Our talented team of innovators, creators, and problem solvers";

pub const TEAM_STATS: [Stat; 3] = [
    Stat { number: "3", label: "Projects Completed" },
    Stat { number: "4", label: "Years Experience" },
    Stat { number: "24/7", label: "Support Available" },
];

static OWNERS: [TeamMember; 1] = [TeamMember {
    name: "Omar Sameh",
    role: "CEO & Founder & Cybersecurity Expert",
    bio: "Hi, Im Omar. Passionate about Red Teaming and Penetration testing, I explore and challenge limits.",
    avatar: "https://github.com/om7iux.png",
    social: SocialLinks {
        github: "https://github.com/om7iux",
        linkedin: "https://www.linkedin.com/in/om7iux/",
        discord: "https://discord.com/users/1128989531346059364",
        instagram: "",
        portfolio: "",
    },
}];

static DEVELOPERS: [TeamMember; 3] = [
    TeamMember {
        name: "Asaad Zein",
        role: "Supervisor & Ai Developer",
        bio: "A 15 Years Old Boy Who Loves Coding And Electric Engineering And Data Science.",
        avatar: "https://github.com/asaadzx.png",
        social: SocialLinks {
            github: "https://github.com/asaadzx",
            linkedin: "https://www.linkedin.com/in/asaad-zx/",
            discord: "https://discord.com/users/913099850982248528",
            instagram: "https://www.instagram.com/asaad.zein.1/",
            portfolio: "https://asaadzx.is-a.dev/",
        },
    },
    TeamMember {
        name: "Abd Elaziz Mohamed",
        role: "Cybersecurity Expert",
        bio: "Detail-oriented cybersecurity specialist with a knack for identifying vulnerabilities and enhancing system security.",
        avatar: "https://github.com/haunter4e.png",
        social: SocialLinks {
            github: "https://github.com/haunter4e",
            linkedin: "",
            discord: "https://discord.com/users/939600444961996810",
            instagram: "https://www.instagram.com/k.i.l.lq/",
            portfolio: "",
        },
    },
    TeamMember {
        name: "Ahmed Shafik",
        role: "Supervisor & Ai Developer & Cybersecurity Expert",
        bio: "Skilled developer with a passion for intuitive and beautiful user interfaces.",
        avatar: "https://github.com/Lazysniperz.png",
        social: SocialLinks {
            github: "https://github.com/Lazysniperz",
            linkedin: "",
            discord: "https://discord.com/users/1259926188265308372",
            instagram: "https://www.instagram.com/ssniperx/",
            portfolio: "https://ghosty.is-a.dev",
        },
    },
];

static MANAGERS: [TeamMember; 1] = [TeamMember {
    name: "Basmala Mahmoud",
    role: "Social Media Manager",
    bio: "Creative social media expert with a talent for engaging content and community building.",
    avatar: "https://github.com/basmalamahmoud32010-ai.png",
    social: SocialLinks {
        github: "https://github.com/basmalamahmoud32010-a",
        linkedin: "",
        discord: "",
        instagram: "",
        portfolio: "",
    },
}];

/// Groups in the order the team page lists them.
pub static TEAM_GROUPS: [TeamGroup; 3] = [
    TeamGroup { heading: "Owners", members: &OWNERS },
    TeamGroup { heading: "Dev Team", members: &DEVELOPERS },
    TeamGroup { heading: "Team Managers", members: &MANAGERS },
];

// -----------------------------
// Contact page
// -----------------------------

pub const CONTACT_SUBTITLE: &str = "Ready to start your next project? Let's discuss how we can help bring your vision to life.";

pub struct ContactCard {
    pub icon_class: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}

pub const CONTACT_CARDS: [ContactCard; 3] = [
    ContactCard { icon_class: "fas fa-envelope", title: "Email Us", value: SITE.contact_email, note: "We'll respond within 24 hours" },
    ContactCard { icon_class: "fas fa-phone", title: "Call Us", value: SITE.contact_phone, note: "Mon-Fri 9AM-6PM EST" },
    ContactCard { icon_class: "fas fa-map-marker-alt", title: "Visit Us", value: SITE.location, note: "Schedule a meeting" },
];

#[derive(PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQ: [FaqEntry; 6] = [
    FaqEntry {
        question: "What services does Byte offer?",
        answer: "We offer comprehensive digital solutions including cybersecurity services, technical documentation and blogs, custom Linux distributions and applications, developer tools and utilities, and custom AI models. Our team specializes in creating secure, innovative solutions using cutting-edge technologies.",
    },
    FaqEntry {
        question: "How long does a typical project take?",
        answer: "Project timelines vary depending on complexity and scope. A simple website might take 2-4 weeks, while a complex application could take 3-6 months. We provide detailed timelines during our initial consultation.",
    },
    FaqEntry {
        question: "Do you work with startups and small businesses?",
        answer: "Absolutely! We work with businesses of all sizes, from startups to enterprise companies. We tailor our approach to meet your specific needs and budget requirements.",
    },
    FaqEntry {
        question: "What technologies do you use?",
        answer: "We use modern, industry-standard technologies including React, Next.js, Node.js, Python, Flutter, and more. We choose the best technology stack for each project based on requirements and goals.",
    },
    FaqEntry {
        question: "Do you provide ongoing support and maintenance?",
        answer: "Yes, we offer comprehensive support and maintenance packages to ensure your digital solutions continue to perform optimally. This includes updates, security patches, and technical support.",
    },
    FaqEntry {
        question: "How do you handle project communication?",
        answer: "We maintain transparent communication throughout the project lifecycle. You'll have a dedicated project manager and regular check-ins to keep you updated on progress and address any questions.",
    },
];

/// `(code, label)` pairs for the budget select on the project form.
pub const BUDGET_OPTIONS: [(&str, &str); 5] = [
    ("under-10k", "Under $10,000"),
    ("10k-25k", "$10,000 - $25,000"),
    ("25k-50k", "$25,000 - $50,000"),
    ("50k-100k", "$50,000 - $100,000"),
    ("over-100k", "Over $100,000"),
];

pub const TIMELINE_OPTIONS: [(&str, &str); 4] = [
    ("asap", "ASAP"),
    ("1-2-months", "1-2 months"),
    ("3-6-months", "3-6 months"),
    ("6-months-plus", "6+ months"),
];

// -----------------------------
// Projects page
// -----------------------------

pub const PROJECTS_SUBTITLE: &str = "Discover our innovative solutions and cutting-edge applications";

/// Category id that matches every project.
pub const ALL_CATEGORIES: &str = "all";

pub struct ProjectCategory {
    pub id: &'static str,
    pub label: &'static str,
}

pub const PROJECT_CATEGORIES: [ProjectCategory; 5] = [
    ProjectCategory { id: ALL_CATEGORIES, label: "All Projects" },
    ProjectCategory { id: "pentest", label: "Pentesting" },
    ProjectCategory { id: "linux", label: "Linux Distros" },
    ProjectCategory { id: "dev", label: "Linux and dev tools" },
    ProjectCategory { id: "ai", label: "AI & ML" },
];

#[derive(Clone, PartialEq, Debug)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
    pub year: &'static str,
    pub duration: &'static str,
    pub link: &'static str,
    /// Empty when there is no screenshot yet.
    pub image: &'static str,
}

pub static PROJECTS: [Project; 2] = [
    Project {
        id: 1,
        title: "GhostFreakOS",
        description: "Custom Linux distribution optimized for new users who want to try arch linux with no bloat and security professionals with pre-installed development tools.",
        category: "linux",
        tags: &["Arch Linux", "Custom", "Security"],
        year: "2025",
        duration: "1 month",
        link: "https://ghostfreak.is-local.org",
        image: "https://i.ibb.co/8g1bXrvy/GSH.png",
    },
    Project {
        id: 2,
        title: "ZenShell",
        description: "A Linux Shell Built in C++ and configured by Lua for enhanced development workflow and automation.",
        category: "dev",
        tags: &["C++", "Shell", "Lua"],
        year: "2025",
        duration: "1 month",
        link: "https://github.com/asaadzx/zenshell",
        image: "",
    },
];

/// Label shown on a project card for its category id, e.g. `LINUX DISTROS`.
pub fn category_label(id: &str) -> String {
    PROJECT_CATEGORIES
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.label)
        .unwrap_or(id)
        .to_uppercase()
}

// -----------------------------
// Blogs
// -----------------------------

pub const BLOGS_SUBTITLE: &str = "Welcome to my blog collection! Here you'll find posts made by me, Asaad Zein, exploring technology, engineering, and more.";
pub const BLOGS_COMING_SOON_TITLE: &str = "More Blogs Coming Soon";
pub const BLOGS_COMING_SOON_SUBTITLE: &str = "Stay tuned for more posts about electronics, programming, and creative projects!";

pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub intro: &'static str,
    pub author: &'static str,
}

pub static BLOG_POSTS: [BlogPost; 1] = [BlogPost {
    slug: "ElectricEngineeringYounge",
    title: "⚡ How 15-Year-Olds Are Powering Their Future with Electronics & Microcontrollers",
    intro: "In the past, learning electrical engineering or programming microcontrollers was something reserved for university labs or seasoned engineers. Today, teenagers, some as young as 15, are wiring circuits, coding microchips, and building real-world gadgets from their bedrooms.",
    author: "Asaad Zein",
}];

pub fn blog_post(slug: &str) -> Option<&'static BlogPost> {
    BLOG_POSTS.iter().find(|post| post.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_skips_empty_social_links() {
        let links = MANAGERS[0].social.present();
        assert_eq!(links, vec![("https://github.com/basmalamahmoud32010-a", "fab fa-github")]);

        let all = DEVELOPERS[0].social.present();
        assert_eq!(all.len(), 5);
        assert_eq!(all[0].1, "fab fa-linkedin");
        assert_eq!(all[4].1, "fas fa-globe");
    }

    #[test]
    fn present_is_empty_for_default_links() {
        assert!(SocialLinks::default().present().is_empty());
    }

    #[test]
    fn project_ids_are_unique_and_categories_known() {
        let mut ids: Vec<u32> = PROJECTS.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PROJECTS.len());

        for project in PROJECTS.iter() {
            assert!(
                PROJECT_CATEGORIES.iter().any(|c| c.id == project.category),
                "{} has unknown category {}",
                project.title,
                project.category
            );
        }
    }

    #[test]
    fn category_label_falls_back_to_id() {
        assert_eq!(category_label("linux"), "LINUX DISTROS");
        assert_eq!(category_label("robotics"), "ROBOTICS");
    }

    #[test]
    fn blog_lookup_by_slug() {
        assert!(blog_post("ElectricEngineeringYounge").is_some());
        assert!(blog_post("electricengineeringyounge").is_none());
        assert!(blog_post("").is_none());
    }

    #[test]
    fn contact_cards_read_from_site_meta() {
        assert_eq!(CONTACT_CARDS[0].value, SITE.contact_email);
        assert_eq!(CONTACT_CARDS[2].value, SITE.location);
    }
}
