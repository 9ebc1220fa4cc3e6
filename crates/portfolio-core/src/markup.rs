//! HTML for the page sections.
//!
//! The browser layer injects `render_page` into the root element once on
//! mount; the hooks it needs afterwards are plain attributes:
//! `data-level` on skill bars, `data-href` on clickable project cards,
//! `reveal` on every section and the `hero-content`/`glitch-title` ids.

use crate::constants::{CERT_STAGGER_MS, MAX_SKILL_LEVEL, PROJECT_STAGGER_MS, SKILL_STAGGER_MS};
use crate::content::{BioRun, ContactKind, Profile};

pub const HERO_CONTENT_ID: &str = "hero-content";
pub const GLITCH_TITLE_ID: &str = "glitch-title";
pub const SKILL_BAR_CLASS: &str = "skill-bar-fill";
pub const PROJECT_CARD_CLASS: &str = "project-card";
pub const REVEAL_CLASS: &str = "reveal";

pub const HERO_HIDDEN_CLASSES: [&str; 2] = ["opacity-0", "translate-y-10"];
pub const HERO_SHOWN_CLASSES: [&str; 2] = ["opacity-100", "translate-y-0"];

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// CSS width of a skill bar. Bars stay empty until the page has loaded.
#[inline]
pub fn bar_width(level: u8, loaded: bool) -> String {
    if loaded {
        format!("{}%", level.min(MAX_SKILL_LEVEL))
    } else {
        "0%".to_string()
    }
}

#[inline]
pub fn stagger_ms(index: usize, step_ms: u32) -> u32 {
    (index as u32).saturating_mul(step_ms)
}

fn section_heading(icon: &str, icon_class: &str, title: &str, gradient: &str) -> String {
    format!(
        "<h2 class='text-6xl font-black mb-4 flex items-center gap-4 font-orbitron'>\
         <span class='{icon_class}'>{icon}</span>\
         <span class='text-transparent bg-clip-text bg-gradient-to-r {gradient}'>{}</span></h2>",
        escape(title)
    )
}

pub fn render_hero(p: &Profile) -> String {
    let bio: String = p
        .bio
        .iter()
        .map(|run| match run {
            BioRun::Plain(t) => escape(t),
            BioRun::Highlight(t, accent) => format!(
                "<span class='text-{accent}-400 font-semibold'>{}</span>",
                escape(t)
            ),
        })
        .collect();
    let stats: String = p
        .stats
        .iter()
        .map(|s| {
            format!(
                "<div class='stat border border-{a}-500/30 bg-{a}-500/5 p-6 rounded-lg'>\
                 <div class='text-4xl font-bold text-{a}-400 mb-2'>{}</div>\
                 <div class='text-gray-400 text-sm'>{}</div></div>",
                escape(s.value),
                escape(s.label),
                a = s.accent
            )
        })
        .collect();
    let links: String = p
        .links
        .iter()
        .map(|l| {
            let target = if l.opens_new_context() {
                " target='_blank' rel='noopener noreferrer'"
            } else {
                ""
            };
            format!(
                "<a class='contact-link' href='{}'{target}><span>{}</span></a>",
                escape(l.href),
                escape(l.label)
            )
        })
        .collect();
    format!(
        "<section class='hero relative min-h-screen flex items-center justify-center px-6'>\
         <div id='{HERO_CONTENT_ID}' class='max-w-6xl w-full transition-all duration-1000 {} {}'>\
         <div class='boot-log mb-8 font-mono text-sm text-green-400 opacity-70'>\
         <span class='animate-pulse'>&#9656;</span> Initializing portfolio.exe...<br>\
         <span class='animate-pulse delay-100'>&#9656;</span> Loading modules...<br>\
         <span class='animate-pulse delay-200'>&#9656;</span> System ready.</div>\
         <h1 id='{GLITCH_TITLE_ID}' class='text-8xl font-black mb-4 tracking-tighter font-orbitron'>{}<br>\
         <span class='text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 via-green-400 to-cyan-400 animate-gradient'>{}</span></h1>\
         <div class='flex items-center gap-3 mb-8'><span class='text-green-400 animate-pulse'>&gt;_</span>\
         <h2 class='text-3xl font-bold text-green-400 font-space-mono'>{}</h2></div>\
         <p class='text-xl text-gray-300 max-w-4xl leading-relaxed mb-12 font-light'>{bio}</p>\
         <div class='grid grid-cols-3 gap-6 mb-12'>{stats}</div>\
         <div class='flex gap-6 flex-wrap'>{links}</div>\
         <div class='scroll-hint absolute bottom-10 left-1/2 animate-bounce text-cyan-400'>&#8964;</div>\
         </div></section>",
        HERO_HIDDEN_CLASSES[0],
        HERO_HIDDEN_CLASSES[1],
        escape(p.first_name),
        escape(p.last_name),
        escape(p.role),
    )
}

pub fn render_skills(p: &Profile, loaded: bool) -> String {
    let rows: String = p
        .skills
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let delay = stagger_ms(i, SKILL_STAGGER_MS);
            format!(
                "<div class='skill group'>\
                 <div class='flex items-center justify-between mb-3'>\
                 <div class='flex items-center gap-3'><span class='text-cyan-400'>{}</span>\
                 <span class='text-xl font-semibold'>{}</span></div>\
                 <span class='text-cyan-400 font-mono'>{}%</span></div>\
                 <div class='h-3 bg-gray-800 rounded-full overflow-hidden border border-gray-700'>\
                 <div class='{SKILL_BAR_CLASS} h-full rounded-full' data-level='{}' \
                 style='width:{};transition-delay:{delay}ms'></div></div></div>",
                s.icon.glyph(),
                escape(s.name),
                s.bar_percent(),
                s.bar_percent(),
                bar_width(s.level, loaded),
            )
        })
        .collect();
    format!(
        "<section class='{REVEAL_CLASS} relative py-32 px-6'><div class='max-w-6xl mx-auto'>{}\
         <p class='text-gray-400 mb-12 text-lg'>Core technologies &amp; expertise</p>\
         <div class='grid md:grid-cols-2 gap-8'>{rows}</div></div></section>",
        section_heading("&#9889;", "text-yellow-400", "SKILLS", "from-yellow-400 to-orange-400"),
    )
}

pub fn render_projects(p: &Profile) -> String {
    let cards: String = p
        .projects
        .iter()
        .enumerate()
        .map(|(i, proj)| {
            let href = proj
                .click_target()
                .map(|u| format!(" data-href='{}'", escape(u)))
                .unwrap_or_default();
            let tags: String = proj
                .tech
                .iter()
                .map(|t| format!("<span class='tech-tag'>{}</span>", escape(t)))
                .collect();
            format!(
                "<div class='{PROJECT_CARD_CLASS} group border border-gray-800 rounded-2xl p-8'{href} \
                 style='animation-delay:{}ms'>\
                 <div class='flex items-start justify-between mb-4'><div>\
                 <h3 class='text-3xl font-bold mb-2'>{}</h3>\
                 <div class='flex items-center gap-4 text-sm text-gray-400'>\
                 <span class='font-mono'>{}</span>\
                 <span class='status-badge bg-gradient-to-r {}'>{}</span></div></div>\
                 <span class='external-icon'>&#8599;</span></div>\
                 <p class='text-gray-300 text-lg mb-6 leading-relaxed'>{}</p>\
                 <div class='flex flex-wrap gap-2'>{tags}</div></div>",
                stagger_ms(i, PROJECT_STAGGER_MS),
                escape(proj.title),
                escape(proj.period),
                proj.gradient.classes(),
                escape(proj.status.label()),
                escape(proj.description),
            )
        })
        .collect();
    format!(
        "<section class='{REVEAL_CLASS} relative py-32 px-6 bg-gradient-to-b from-black via-gray-900 to-black'>\
         <div class='max-w-6xl mx-auto'>{}\
         <p class='text-gray-400 mb-12 text-lg'>Building enterprise solutions &amp; innovative tools</p>\
         <div class='space-y-8'>{cards}</div></div></section>",
        section_heading("&#128188;", "text-purple-400", "PROJECTS", "from-purple-400 to-pink-400"),
    )
}

pub fn render_experience(p: &Profile) -> String {
    let entries: String = p
        .experience
        .iter()
        .map(|e| {
            format!(
                "<div class='relative'><div class='timeline-dot'></div>\
                 <div class='experience-card'>\
                 <h3 class='text-2xl font-bold mb-2'>{}</h3>\
                 <p class='text-cyan-400 mb-4 font-semibold'>{} &#8226; {}</p>\
                 <p class='text-gray-300 leading-relaxed'>{}</p></div></div>",
                escape(e.role),
                escape(e.company),
                escape(e.period),
                escape(e.summary),
            )
        })
        .collect();
    format!(
        "<section class='{REVEAL_CLASS} relative py-32 px-6'><div class='max-w-6xl mx-auto'>{}\
         <p class='text-gray-400 mb-12 text-lg'>Professional journey</p>\
         <div class='border-l-4 border-cyan-500 pl-8 space-y-12'>{entries}</div></div></section>",
        section_heading("&#9636;", "text-blue-400", "EXPERIENCE", "from-blue-400 to-cyan-400"),
    )
}

pub fn render_certifications(p: &Profile) -> String {
    let cards: String = p
        .certifications
        .iter()
        .enumerate()
        .map(|(i, c)| {
            format!(
                "<div class='cert-card' style='animation-delay:{}ms'>\
                 <span class='text-green-400'>&#127942;</span>\
                 <h3 class='text-xl font-bold mb-2'>{}</h3>\
                 <p class='text-cyan-400 text-sm mb-1'>{}</p>\
                 <p class='text-gray-500 text-sm font-mono'>{}</p></div>",
                stagger_ms(i, CERT_STAGGER_MS),
                escape(c.name),
                escape(c.org),
                escape(c.date),
            )
        })
        .collect();
    format!(
        "<section class='{REVEAL_CLASS} relative py-32 px-6 bg-gradient-to-b from-black to-gray-900'>\
         <div class='max-w-6xl mx-auto'>{}\
         <p class='text-gray-400 mb-12 text-lg'>Continuous learning &amp; professional development</p>\
         <div class='grid md:grid-cols-3 gap-6'>{cards}</div></div></section>",
        section_heading("&#127942;", "text-green-400", "CERTIFICATIONS", "from-green-400 to-emerald-400"),
    )
}

/// Contact card, wrapped in a link when the profile has one for `kind`.
fn contact_card(p: &Profile, kind: ContactKind, glyph: &str, accent: &str, text: &str) -> String {
    let label = p.link(kind).map_or("", |l| l.label);
    let body = format!(
        "<span class='text-{accent}-400'>{glyph}</span><div class='text-left'>\
         <div class='text-xs text-gray-500 mb-1'>{label}</div><div class='font-mono text-sm'>{}</div></div>",
        escape(text)
    );
    match p.link(kind) {
        Some(link) => format!(
            "<a class='contact-card' href='{}'>{body}</a>",
            escape(link.href)
        ),
        None => format!("<div class='contact-card'>{body}</div>"),
    }
}

pub fn render_contact(p: &Profile) -> String {
    format!(
        "<section class='{REVEAL_CLASS} relative py-32 px-6'><div class='max-w-4xl mx-auto text-center'>\
         <h2 class='text-6xl font-black mb-8 font-orbitron'>\
         <span class='text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 via-green-400 to-cyan-400 animate-gradient'>LET&#39;S CONNECT</span></h2>\
         <p class='text-2xl text-gray-300 mb-12'>Open to opportunities, collaborations, and interesting conversations</p>\
         <div class='grid md:grid-cols-2 gap-6 mb-12'>\
         {}{}</div>\
         <div class='flex items-center justify-center gap-3 text-gray-500'>\
         <span class='text-cyan-400'>&#128205;</span><span>{}</span></div></div></section>",
        contact_card(p, ContactKind::Email, "&#9993;", "cyan", p.email),
        contact_card(p, ContactKind::Phone, "&#9742;", "green", p.phone),
        escape(p.location),
    )
}

pub fn render_footer(p: &Profile) -> String {
    format!(
        "<footer class='relative border-t border-gray-800 py-8 px-6'><div class='max-w-6xl mx-auto text-center'>\
         <p class='text-gray-500 font-mono text-sm'>{}</p>\
         <p class='text-gray-700 font-mono text-xs mt-2'>{}</p></div></footer>",
        escape(p.copyright),
        escape(p.tagline),
    )
}

/// Full page body. Skill bars start empty; the browser layer fills them once
/// the page is mounted so the width transition plays.
pub fn render_page(p: &Profile) -> String {
    [
        render_hero(p),
        render_skills(p, false),
        render_projects(p),
        render_experience(p),
        render_certifications(p),
        render_contact(p),
        render_footer(p),
    ]
    .concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_handles_markup_characters() {
        assert_eq!(escape("</> & \"x\""), "&lt;/&gt; &amp; &quot;x&quot;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn bar_width_caps_and_waits_for_load() {
        assert_eq!(bar_width(95, true), "95%");
        assert_eq!(bar_width(95, false), "0%");
        assert_eq!(bar_width(250, true), "100%");
    }
}
