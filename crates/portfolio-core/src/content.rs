//! Static page content.
//!
//! Everything the page shows is compiled in. The tables below are the only
//! source of truth for the markup renderer; nothing here changes at runtime.

use crate::constants::MAX_SKILL_LEVEL;
use crate::error::PortfolioError;

/// Icon shown next to a skill. Rendered as a small glyph by the markup layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Code,
    Server,
    Database,
    Terminal,
    Cloud,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Code => "&lt;/&gt;",
            Icon::Server => "&#9636;",
            Icon::Database => "&#9921;",
            Icon::Terminal => "&gt;_",
            Icon::Cloud => "&#9729;",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub icon: Icon,
}

impl Skill {
    /// Progress bar width in percent, capped at 100.
    #[inline]
    pub fn bar_percent(&self) -> u8 {
        self.level.min(MAX_SKILL_LEVEL)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectStatus {
    Live,
    InDevelopment,
    Developed,
    Deprecated,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Live => "Live & Deploying",
            ProjectStatus::InDevelopment => "In Development",
            ProjectStatus::Developed => "Developed",
            ProjectStatus::Deprecated => "Deprecated",
        }
    }
}

/// Badge palette of a project card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gradient {
    Cyan,
    Purple,
    Green,
    Red,
}

impl Gradient {
    pub fn classes(self) -> &'static str {
        match self {
            Gradient::Cyan => "from-cyan-500 to-blue-600",
            Gradient::Purple => "from-purple-500 to-pink-600",
            Gradient::Green => "from-green-500 to-emerald-600",
            Gradient::Red => "from-red-500 to-red-600",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub period: &'static str,
    pub status: ProjectStatus,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub gradient: Gradient,
    pub url: Option<&'static str>,
}

impl Project {
    /// URL a click on this card opens, if any.
    #[inline]
    pub fn click_target(&self) -> Option<&'static str> {
        self.url
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Certification {
    pub name: &'static str,
    pub org: &'static str,
    pub date: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    GitHub,
    LinkedIn,
    Email,
    Phone,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub label: &'static str,
    pub href: &'static str,
}

impl ContactLink {
    /// Profile links open in a new browsing context; `mailto:`/`tel:` are
    /// handed to the browser as-is.
    #[inline]
    pub fn opens_new_context(&self) -> bool {
        matches!(self.kind, ContactKind::GitHub | ContactKind::LinkedIn)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub accent: &'static str,
}

/// A run of bio text; highlighted runs get an accent colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BioRun {
    Plain(&'static str),
    Highlight(&'static str, &'static str),
}

#[derive(Clone, Copy, Debug)]
pub struct Profile {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub role: &'static str,
    pub bio: &'static [BioRun],
    pub stats: &'static [Stat],
    pub links: &'static [ContactLink],
    pub skills: &'static [Skill],
    pub projects: &'static [Project],
    pub experience: &'static [Experience],
    pub certifications: &'static [Certification],
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub copyright: &'static str,
    pub tagline: &'static str,
}

impl Profile {
    pub fn default_profile() -> &'static Profile {
        &PROFILE
    }

    pub fn validate(&self) -> Result<(), PortfolioError> {
        if let Some(s) = self.skills.iter().find(|s| s.level > MAX_SKILL_LEVEL) {
            return Err(PortfolioError::SkillLevelOutOfRange {
                name: s.name,
                level: s.level,
            });
        }
        Ok(())
    }

    pub fn link(&self, kind: ContactKind) -> Option<&ContactLink> {
        self.links.iter().find(|l| l.kind == kind)
    }
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "React.js", level: 95, icon: Icon::Code },
    Skill { name: "Node.js", level: 90, icon: Icon::Server },
    Skill { name: "SQL", level: 88, icon: Icon::Database },
    Skill { name: "React Native", level: 85, icon: Icon::Terminal },
    Skill { name: "PHP", level: 82, icon: Icon::Code },
    Skill { name: "Google Cloud", level: 80, icon: Icon::Cloud },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "GPMS - Field Sales & Operation Management",
        period: "Dec 2025 - Current",
        status: ProjectStatus::Live,
        description: "Industry-ready SaaS solution streamlining field sales operations with multi-inventory, accounting, vehicles, and payments management.",
        tech: &["PostgreSQL", "Express.js", "React.js", "React Native", "Google Cloud"],
        gradient: Gradient::Cyan,
        url: Some("https://portal.garodia.in.net"),
    },
    Project {
        title: "Octa Wipe – Enterprise Bulk System Wiping",
        period: "Oct 2025 - Current",
        status: ProjectStatus::InDevelopment,
        description: "Single-click bulk wiping solution for Windows & Linux devices. NIST 800-88 & DOD 5220.22-M compliant network boot purge system.",
        tech: &["Python", "Node.js", "Serva", "Ubuntu LTS", "Rust"],
        gradient: Gradient::Purple,
        url: None,
    },
    Project {
        title: "Arch.Ai",
        period: "Apr 2025 - Jun 2025",
        status: ProjectStatus::Developed,
        description: "AI-powered Interior Designing Software providing 3D models, layouts, and material suggestions based on user preferences.",
        tech: &["React.js", "Firebase", "Node.js", "Three.js"],
        gradient: Gradient::Green,
        url: None,
    },
    Project {
        title: "UPI Payment Management For SME",
        period: "May 2023 - Mar 2025",
        status: ProjectStatus::Deprecated,
        description: "Integrated payment solution for multi-counter sales billing with Airtel Payments Bank at low cost for small enterprises.",
        tech: &["PHP", "MySQL", "Linux", "Bootstrap"],
        gradient: Gradient::Red,
        url: None,
    },
];

pub const EXPERIENCE: &[Experience] = &[Experience {
    role: "Software Developer",
    company: "Mai Health Inc.",
    period: "Aug 2024 - Mar 2025",
    summary: "Led a team as Intermediate React Developer, building efficient, user-friendly web applications. Guided team through modern React development practices to ensure high-quality, scalable solutions.",
}];

pub const CERTIFICATIONS: &[Certification] = &[
    Certification { name: "Introduction to Networks", org: "Cisco", date: "Jan 2026" },
    Certification { name: "Python For Data Science", org: "NPTEL - IIT Madras", date: "Feb 2024" },
    Certification { name: "Ethical Hacking", org: "IIT Bombay", date: "Dec 2022" },
];

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        kind: ContactKind::GitHub,
        label: "GitHub",
        href: "https://github.com/Satyamgarodia",
    },
    ContactLink {
        kind: ContactKind::LinkedIn,
        label: "LinkedIn",
        href: "https://linkedin.com/in/satyam-garodia",
    },
    ContactLink {
        kind: ContactKind::Email,
        label: "Email",
        href: "mailto:Satyamgarodia1@gmail.com",
    },
    ContactLink {
        kind: ContactKind::Phone,
        label: "Phone",
        href: "tel:+918340370685",
    },
];

pub const STATS: &[Stat] = &[
    Stat { value: "3+", label: "Live Projects", accent: "cyan" },
    Stat { value: "10+", label: "Technologies", accent: "green" },
    Stat { value: "3", label: "Certifications", accent: "purple" },
];

pub const BIO: &[BioRun] = &[
    BioRun::Plain("Full-stack developer specializing in "),
    BioRun::Highlight("SaaS architecture", "cyan"),
    BioRun::Plain(" and "),
    BioRun::Highlight("enterprise-grade systems", "cyan"),
    BioRun::Plain(". Building SAP-level workflows with expertise in Node.js, React, and Linux system operations. Currently developing "),
    BioRun::Highlight("NIST SP 800-88 compliant", "green"),
    BioRun::Plain(" bulk data wiping solutions."),
];

static PROFILE: Profile = Profile {
    first_name: "SATYAM",
    last_name: "GARODIA",
    role: "SOFTWARE DEVELOPER",
    bio: BIO,
    stats: STATS,
    links: CONTACT_LINKS,
    skills: SKILLS,
    projects: PROJECTS,
    experience: EXPERIENCE,
    certifications: CERTIFICATIONS,
    email: "Satyamgarodia1@gmail.com",
    phone: "+91 83403 70685",
    location: "Gurgaon, Haryana, India",
    copyright: "© 2026 Satyam Garodia",
    tagline: "</> with passion & precision",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_profile_is_valid() {
        assert!(Profile::default_profile().validate().is_ok());
    }

    #[test]
    fn out_of_range_level_is_rejected() {
        static BAD: &[Skill] = &[Skill { name: "Overclocked", level: 120, icon: Icon::Code }];
        let mut p = *Profile::default_profile();
        p.skills = BAD;
        assert_eq!(
            p.validate(),
            Err(PortfolioError::SkillLevelOutOfRange { name: "Overclocked", level: 120 })
        );
        assert_eq!(BAD[0].bar_percent(), 100);
    }

    #[test]
    fn only_profile_links_open_new_context() {
        let p = Profile::default_profile();
        assert!(p.link(ContactKind::GitHub).is_some_and(|l| l.opens_new_context()));
        assert!(p.link(ContactKind::Email).is_some_and(|l| !l.opens_new_context()));
        assert!(p.link(ContactKind::Phone).is_some_and(|l| l.href.starts_with("tel:")));
    }
}
