//! Geometric constructivism, primary colors, hard shadows.
//!
//! Cards, badges and markers cycle through the three primaries by position.
//! Each list starts the cycle at its own offset so adjacent sections differ.

use crate::models::{ContactKind, ResumeData};
use crate::render::escape::e;
use crate::render::layout::{date_range, each, palette, when, Page};

const PRIMARIES: [&str; 3] = ["red", "blue", "yellow"];

const EXPERIENCE_OFFSET: usize = 0;
const EDUCATION_OFFSET: usize = 1;
const PROJECT_OFFSET: usize = 2;

const FONTS: &str = r#"  <link rel="preconnect" href="https://fonts.googleapis.com" />
  <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin />
  <link href="https://fonts.googleapis.com/css2?family=Outfit:wght@400;500;700;900&amp;display=swap" rel="stylesheet" />
"#;

const STYLES: &str = r#"
    /* ===== TOKENS ===== */
    :root {
      --bg: #F0F0F0;
      --fg: #121212;
      --red: #D02020;
      --blue: #1040C0;
      --yellow: #F0C020;
      --white: #FFFFFF;
      --border: 4px solid #121212;
      --shadow-sm: 4px 4px 0px 0px #121212;
      --shadow-lg: 8px 8px 0px 0px #121212;
      --font: 'Outfit', sans-serif;
    }

    body {
      font-family: var(--font);
      font-weight: 500;
      background-color: var(--bg);
      color: var(--fg);
      position: relative;
    }

    /* dot grid */
    body::before {
      content: '';
      position: fixed;
      inset: 0;
      background-image: radial-gradient(circle, var(--fg) 1px, transparent 1px);
      background-size: 24px 24px;
      opacity: 0.03;
      pointer-events: none;
      z-index: 0;
    }

    h1, h2, h3 {
      font-weight: 900;
      text-transform: uppercase;
      letter-spacing: -0.05em;
      line-height: 1.05;
    }

    .page-wrapper {
      position: relative;
      z-index: 1;
      max-width: 960px;
      margin: 0 auto;
      padding: 0 24px;
    }

    /* ===== HEADER ===== */
    .header {
      position: relative;
      padding: 80px 0 48px;
      border-bottom: var(--border);
      overflow: hidden;
    }

    .header-inner {
      position: relative;
      z-index: 2;
    }

    .name {
      font-size: clamp(3.5rem, 10vw, 7rem);
      line-height: 0.92;
      margin-bottom: 16px;
    }

    .title {
      font-size: 1.35rem;
      text-transform: uppercase;
      letter-spacing: 0.15em;
      opacity: 0.7;
    }

    .header-geo {
      position: absolute;
      z-index: 1;
      pointer-events: none;
    }

    .header-geo--circle {
      width: 200px;
      height: 200px;
      border-radius: 9999px;
      background: var(--red);
      top: -40px;
      right: -30px;
      opacity: 0.85;
    }

    .header-geo--square {
      width: 120px;
      height: 120px;
      background: var(--blue);
      bottom: 30px;
      right: 140px;
      opacity: 0.7;
    }

    .header-geo--diamond {
      width: 80px;
      height: 80px;
      background: var(--yellow);
      top: 60px;
      right: 260px;
      transform: rotate(45deg);
      opacity: 0.8;
    }

    /* ===== CONTACT BAR ===== */
    .contact-bar {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      margin-top: 32px;
      border: var(--border);
      background: var(--white);
      position: relative;
      z-index: 2;
    }

    .contact-link,
    .contact-item {
      display: flex;
      align-items: center;
      gap: 8px;
      padding: 14px 20px;
      font-size: 0.9rem;
      border-right: var(--border);
      transition: background-color 0.15s ease;
    }

    .contact-link:hover {
      background: var(--yellow);
    }

    .contact-separator {
      display: none;
    }

    .contact-icon {
      display: inline-block;
      width: 10px;
      height: 10px;
      flex-shrink: 0;
    }

    /* shape per primary: red circle, blue square, yellow diamond */
    .contact-icon--red,
    .card-geo--red {
      background: var(--red);
      border-radius: 9999px;
    }

    .contact-icon--blue,
    .card-geo--blue {
      background: var(--blue);
    }

    .contact-icon--yellow,
    .card-geo--yellow {
      background: var(--yellow);
      transform: rotate(45deg);
    }

    /* ===== SECTIONS ===== */
    .section {
      padding: 56px 0;
      border-bottom: var(--border);
      position: relative;
    }

    .section-heading {
      font-size: 2.5rem;
      margin-bottom: 36px;
      position: relative;
      display: inline-block;
    }

    .section-heading::after {
      content: '';
      position: absolute;
      bottom: -8px;
      left: 0;
      width: 48px;
      height: 6px;
      background: var(--red);
    }

    .section--blue,
    .section--yellow {
      margin-left: -24px;
      margin-right: -24px;
      padding-left: 24px;
      padding-right: 24px;
    }

    .section--blue {
      background: var(--blue);
    }

    .section-heading--light {
      color: var(--white);
    }

    .section-heading--light::after {
      background: var(--yellow);
    }

    .summary-text {
      font-size: 1.2rem;
      line-height: 1.8;
      color: var(--white);
      max-width: 740px;
      font-weight: 400;
    }

    .section--yellow {
      background: var(--yellow);
    }

    .section--yellow .section-heading::after {
      background: var(--fg);
    }

    /* ===== CARDS ===== */
    .card-list {
      display: flex;
      flex-direction: column;
      gap: 28px;
    }

    .card,
    .project-card {
      position: relative;
      background: var(--white);
      border: var(--border);
      padding: 28px;
      box-shadow: var(--shadow-lg);
    }

    .card-geo {
      position: absolute;
      top: -8px;
      right: -8px;
      width: 16px;
      height: 16px;
      z-index: 3;
    }

    .card-header {
      display: flex;
      justify-content: space-between;
      align-items: flex-start;
      gap: 16px;
      margin-bottom: 12px;
    }

    .card-title {
      font-size: 1.2rem;
      letter-spacing: -0.03em;
    }

    .card-subtitle {
      font-size: 1rem;
      opacity: 0.65;
      margin-top: 4px;
    }

    .card-description {
      font-size: 0.95rem;
      line-height: 1.7;
      opacity: 0.8;
      font-weight: 400;
    }

    .date-badge,
    .tech-tag {
      display: inline-block;
      font-weight: 700;
      text-transform: uppercase;
      letter-spacing: 0.04em;
      border: 2px solid var(--fg);
    }

    .date-badge {
      padding: 6px 14px;
      font-size: 0.78rem;
      white-space: nowrap;
      flex-shrink: 0;
    }

    /* ===== SKILLS ===== */
    .skills-grid {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
    }

    .skill-badge {
      display: inline-block;
      padding: 10px 22px;
      font-size: 0.9rem;
      font-weight: 700;
      text-transform: uppercase;
      border: var(--border);
      box-shadow: var(--shadow-sm);
    }

    .date-badge--red,
    .skill-badge--red,
    .tech-tag--red {
      background: var(--red);
      color: var(--white);
    }

    .date-badge--blue,
    .skill-badge--blue,
    .tech-tag--blue {
      background: var(--blue);
      color: var(--white);
    }

    .date-badge--yellow,
    .skill-badge--yellow,
    .tech-tag--yellow {
      background: var(--yellow);
      color: var(--fg);
    }

    /* ===== PROJECTS ===== */
    .projects-grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(340px, 1fr));
      gap: 28px;
    }

    .project-card {
      transition: transform 0.15s ease;
    }

    .project-card:hover {
      transform: translate(-2px, -2px);
      box-shadow: 10px 10px 0px 0px #121212;
    }

    .project-card-header {
      margin-bottom: 12px;
    }

    .project-name {
      font-size: 1.15rem;
      font-weight: 900;
      text-transform: uppercase;
      letter-spacing: -0.03em;
      display: inline-block;
      border-bottom: 3px solid var(--red);
      padding-bottom: 2px;
    }

    a.project-name:hover {
      color: var(--blue);
      border-bottom-color: var(--blue);
    }

    .project-description {
      font-size: 0.9rem;
      line-height: 1.7;
      opacity: 0.75;
      margin-bottom: 16px;
      font-weight: 400;
    }

    .project-tech {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .tech-tag {
      font-size: 0.75rem;
      padding: 5px 12px;
    }

    /* ===== FOOTER ===== */
    .footer {
      position: relative;
      background: var(--fg);
      padding: 48px 24px;
      margin-left: -24px;
      margin-right: -24px;
      border-top: var(--border);
      display: flex;
      justify-content: center;
      align-items: center;
    }

    .footer::before {
      content: '';
      position: absolute;
      top: 0;
      left: 0;
      right: 0;
      height: 6px;
      background: var(--red);
    }

    .footer-shapes {
      display: flex;
      align-items: center;
      gap: 20px;
    }

    .footer-shape {
      display: inline-block;
    }

    .footer-shape--circle {
      width: 28px;
      height: 28px;
      background: var(--red);
      border-radius: 9999px;
    }

    .footer-shape--square {
      width: 24px;
      height: 24px;
      background: var(--blue);
    }

    .footer-shape--triangle {
      width: 0;
      height: 0;
      border-left: 14px solid transparent;
      border-right: 14px solid transparent;
      border-bottom: 26px solid var(--yellow);
    }

    @media (max-width: 768px) {
      .page-wrapper {
        padding: 0 16px;
      }

      .header {
        padding: 56px 0 36px;
      }

      .header-geo--circle {
        width: 120px;
        height: 120px;
      }

      .header-geo--square,
      .header-geo--diamond {
        display: none;
      }

      .contact-bar {
        flex-direction: column;
        align-items: stretch;
      }

      .contact-link,
      .contact-item {
        border-right: none;
        border-bottom: 2px solid var(--fg);
      }

      .section--blue,
      .section--yellow,
      .footer {
        margin-left: -16px;
        margin-right: -16px;
      }

      .card-header {
        flex-direction: column;
        gap: 8px;
      }

      .projects-grid {
        grid-template-columns: 1fr;
      }

      .card,
      .project-card {
        padding: 20px;
        box-shadow: var(--shadow-sm);
      }
    }
"#;

const EXTERNAL: &str = r#"target="_blank" rel="noopener noreferrer""#;

pub fn render(data: &ResumeData) -> String {
    let title = if data.name.is_empty() {
        "Portfolio".to_string()
    } else {
        e(&data.name).to_string()
    };

    let body = format!(
        r#"  <div class="page-wrapper">
{header}    <main>
{summary}{experience}{education}{skills}{projects}    </main>
    <footer class="footer">
      <div class="footer-shapes">
        <span class="footer-shape footer-shape--circle"></span>
        <span class="footer-shape footer-shape--square"></span>
        <span class="footer-shape footer-shape--triangle"></span>
      </div>
    </footer>
  </div>"#,
        header = when(data.has_header(), || header(data)),
        summary = when(!data.summary.is_empty(), || {
            format!(
                r#"      <section class="section section--blue">
        <h2 class="section-heading section-heading--light">ABOUT</h2>
        <p class="summary-text">{}</p>
      </section>
"#,
                e(&data.summary)
            )
        }),
        experience = when(!data.experience.is_empty(), || experience(data)),
        education = when(!data.education.is_empty(), || education(data)),
        skills = when(!data.skills.is_empty(), || skills(data)),
        projects = when(!data.projects.is_empty(), || projects(data)),
    );

    Page {
        title: &title,
        head_links: FONTS,
        styles: STYLES,
        body: &body,
    }
    .into_html()
}

fn header(data: &ResumeData) -> String {
    let contacts: Vec<String> = data
        .contacts()
        .map(|contact| {
            // markers follow contact order through the primaries
            let icon = format!(
                r#"<span class="contact-icon contact-icon--{}"></span>"#,
                palette(PRIMARIES, contact.kind as usize, 0)
            );
            let text = match contact.kind {
                ContactKind::LinkedIn | ContactKind::GitHub => contact.kind.label().to_string(),
                _ => e(contact.value).to_string(),
            };
            match (contact.kind, contact.kind.href(contact.value)) {
                (ContactKind::Email, Some(href)) => {
                    format!(r#"<a href="{}" class="contact-link">{icon}{text}</a>"#, e(&href))
                }
                (kind, Some(href)) if kind.is_external() => format!(
                    r#"<a href="{}" {EXTERNAL} class="contact-link">{icon}{text}</a>"#,
                    e(&href)
                ),
                _ => format!(r#"<span class="contact-item">{icon}{text}</span>"#),
            }
        })
        .collect();

    format!(
        r#"    <header class="header">
      <div class="header-geo header-geo--circle"></div>
      <div class="header-geo header-geo--square"></div>
      <div class="header-geo header-geo--diamond"></div>
      <div class="header-inner">
        {name}
        {title}
      </div>
      {contacts}
    </header>
"#,
        name = when(!data.name.is_empty(), || format!(
            r#"<h1 class="name">{}</h1>"#,
            e(&data.name)
        )),
        title = when(!data.title.is_empty(), || format!(
            r#"<p class="title">{}</p>"#,
            e(&data.title)
        )),
        contacts = when(!contacts.is_empty(), || format!(
            r#"<div class="contact-bar">{}</div>"#,
            contacts.join(r#"<span class="contact-separator"></span>"#)
        )),
    )
}

fn section(heading: &str, modifier: &str, content: &str) -> String {
    format!(
        r#"      <section class="section{modifier}">
        <h2 class="section-heading">{heading}</h2>
{content}
      </section>
"#
    )
}

fn date_badge(start: &str, end: &str, color: &str) -> String {
    let dates = date_range(start, end, " &mdash; ");
    when(!dates.is_empty(), || {
        format!(r#"<span class="date-badge date-badge--{color}">{dates}</span>"#)
    })
}

fn experience(data: &ResumeData) -> String {
    let cards = each(&data.experience, |(i, exp)| {
        let color = palette(PRIMARIES, i, EXPERIENCE_OFFSET);
        format!(
            r#"          <div class="card">
            <span class="card-geo card-geo--{color}"></span>
            <div class="card-header">
              <div>
                <h3 class="card-title">{role}</h3>
                <p class="card-subtitle">{company}</p>
              </div>
              {badge}
            </div>
            {description}
          </div>
"#,
            role = e(&exp.role),
            company = e(&exp.company),
            badge = date_badge(&exp.start_date, &exp.end_date, color),
            description = when(!exp.description.is_empty(), || format!(
                r#"<p class="card-description">{}</p>"#,
                e(&exp.description)
            )),
        )
    });
    section(
        "EXPERIENCE",
        "",
        &format!("        <div class=\"card-list\">\n{cards}        </div>"),
    )
}

fn education(data: &ResumeData) -> String {
    let cards = each(&data.education, |(i, edu)| {
        let color = palette(PRIMARIES, i, EDUCATION_OFFSET);
        format!(
            r#"          <div class="card">
            <span class="card-geo card-geo--{color}"></span>
            <div class="card-header">
              <div>
                <h3 class="card-title">{degree}{field}</h3>
                <p class="card-subtitle">{institution}</p>
              </div>
              {badge}
            </div>
          </div>
"#,
            degree = e(&edu.degree),
            field = when(!edu.field.is_empty(), || format!(" IN {}", e(&edu.field))),
            institution = e(&edu.institution),
            badge = date_badge(&edu.start_date, &edu.end_date, color),
        )
    });
    section(
        "EDUCATION",
        "",
        &format!("        <div class=\"card-list\">\n{cards}        </div>"),
    )
}

fn skills(data: &ResumeData) -> String {
    let badges = each(&data.skills, |(i, skill)| {
        format!(
            r#"<span class="skill-badge skill-badge--{}">{}</span>"#,
            palette(PRIMARIES, i, 0),
            e(skill)
        )
    });
    section(
        "SKILLS",
        " section--yellow",
        &format!(r#"        <div class="skills-grid">{badges}</div>"#),
    )
}

fn projects(data: &ResumeData) -> String {
    let cards = each(&data.projects, |(i, project)| {
        let name = if project.url.is_empty() {
            format!(r#"<h3 class="project-name">{}</h3>"#, e(&project.name))
        } else {
            format!(
                r#"<a href="{}" {EXTERNAL} class="project-name">{}</a>"#,
                e(&project.url),
                e(&project.name)
            )
        };
        format!(
            r#"          <div class="project-card">
            <span class="card-geo card-geo--{color}"></span>
            <div class="project-card-header">{name}</div>
            {description}
            {tech}
          </div>
"#,
            color = palette(PRIMARIES, i, PROJECT_OFFSET),
            description = when(!project.description.is_empty(), || format!(
                r#"<p class="project-description">{}</p>"#,
                e(&project.description)
            )),
            tech = when(!project.technologies.is_empty(), || format!(
                r#"<div class="project-tech">{}</div>"#,
                each(&project.technologies, |(j, t)| format!(
                    r#"<span class="tech-tag tech-tag--{}">{}</span>"#,
                    palette(PRIMARIES, j, 0),
                    e(t)
                ))
            )),
        )
    });
    section(
        "PROJECTS",
        "",
        &format!("        <div class=\"projects-grid\">\n{cards}        </div>"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Education, Experience, Project};

    fn geo_colors(html: &str) -> Vec<&str> {
        html.match_indices(r#"<span class="card-geo card-geo--"#)
            .map(|(at, m)| {
                let rest = &html[at + m.len()..];
                &rest[..rest.find('"').unwrap()]
            })
            .collect()
    }

    #[test]
    fn test_experience_cycles_from_red() {
        let data = ResumeData {
            experience: vec![Experience::default(); 4],
            ..Default::default()
        };
        assert_eq!(
            geo_colors(&render(&data)),
            vec!["red", "blue", "yellow", "red"]
        );
    }

    #[test]
    fn test_education_and_projects_use_own_offsets() {
        let data = ResumeData {
            education: vec![Education::default(); 2],
            projects: vec![Project::default(); 2],
            ..Default::default()
        };
        assert_eq!(
            geo_colors(&render(&data)),
            vec!["blue", "yellow", "yellow", "red"]
        );
    }

    #[test]
    fn test_contact_markers_follow_field_order() {
        let data = ResumeData {
            email: "a@b.c".into(),
            location: "Dessau".into(),
            github: "https://github.com/x".into(),
            ..Default::default()
        };
        let html = render(&data);
        assert!(html.contains(r#"<span class="contact-icon contact-icon--red"></span>a@b.c</a>"#));
        assert!(html.contains(r#"<span class="contact-icon contact-icon--yellow"></span>Dessau</span>"#));
        assert!(html.contains(r#"<span class="contact-icon contact-icon--yellow"></span>GitHub</a>"#));
    }

    #[test]
    fn test_skills_on_yellow_and_summary_on_blue() {
        let data = ResumeData {
            summary: "Form follows function".into(),
            skills: vec!["Type".into(), "Grid".into()],
            ..Default::default()
        };
        let html = render(&data);
        assert!(html.contains(r#"<section class="section section--blue">"#));
        assert!(html.contains(r#"<section class="section section--yellow">"#));
        assert!(html.contains(r#"skill-badge--red">Type<"#));
        assert!(html.contains(r#"skill-badge--blue">Grid<"#));
    }

    #[test]
    fn test_field_is_uppercase_joined() {
        let data = ResumeData {
            education: vec![Education {
                degree: "Diploma".into(),
                field: "Architecture".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert!(render(&data).contains("Diploma IN Architecture"));
    }
}
