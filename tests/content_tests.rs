// Host-side tests for the built-in page content.

use portfolio_core::{ContactKind, Profile, ProjectStatus};

#[test]
fn skill_levels_are_percentages() {
    let p = Profile::default_profile();
    assert!(!p.skills.is_empty());
    for s in p.skills {
        assert!(s.level <= 100, "{} has level {}", s.name, s.level);
        assert_eq!(s.bar_percent(), s.level);
    }
    assert!(p.validate().is_ok());
}

#[test]
fn only_the_live_project_is_clickable() {
    let p = Profile::default_profile();
    let clickable: Vec<_> = p.projects.iter().filter_map(|pr| pr.click_target()).collect();
    assert_eq!(clickable, vec!["https://portal.garodia.in.net"]);
    let live = p
        .projects
        .iter()
        .find(|pr| pr.status == ProjectStatus::Live)
        .unwrap();
    assert_eq!(live.click_target(), Some("https://portal.garodia.in.net"));
}

#[test]
fn every_status_has_a_label() {
    let labels: Vec<_> = [
        ProjectStatus::Live,
        ProjectStatus::InDevelopment,
        ProjectStatus::Developed,
        ProjectStatus::Deprecated,
    ]
    .iter()
    .map(|s| s.label())
    .collect();
    assert_eq!(
        labels,
        vec!["Live & Deploying", "In Development", "Developed", "Deprecated"]
    );
}

#[test]
fn projects_have_tags_and_unique_titles() {
    let p = Profile::default_profile();
    for (i, a) in p.projects.iter().enumerate() {
        assert!(!a.tech.is_empty(), "{} has no tech tags", a.title);
        for b in &p.projects[i + 1..] {
            assert_ne!(a.title, b.title);
        }
    }
}

#[test]
fn contact_links_cover_every_kind() {
    let p = Profile::default_profile();
    for kind in [
        ContactKind::GitHub,
        ContactKind::LinkedIn,
        ContactKind::Email,
        ContactKind::Phone,
    ] {
        assert!(p.link(kind).is_some(), "missing {:?}", kind);
    }
    assert!(p
        .link(ContactKind::Email)
        .is_some_and(|l| l.href == format!("mailto:{}", p.email)));
}

#[test]
fn certification_count_matches_hero_stat() {
    let p = Profile::default_profile();
    let stat = p.stats.iter().find(|s| s.label == "Certifications").unwrap();
    assert_eq!(stat.value, p.certifications.len().to_string());
}
