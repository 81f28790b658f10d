//! Pure black & white, serif editorial, oversized type.

use crate::models::{ContactKind, ResumeData};
use crate::render::escape::e;
use crate::render::layout::{date_range, each, when, Page};

const FONTS: &str = r#"  <link rel="preconnect" href="https://fonts.googleapis.com" />
  <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin />
  <link href="https://fonts.googleapis.com/css2?family=Playfair+Display:wght@400;700;900&amp;family=Source+Serif+4:wght@400;600&amp;family=JetBrains+Mono:wght@400;500&amp;display=swap" rel="stylesheet" />
"#;

const STYLES: &str = r#"
    /* Only: #000000, #FFFFFF, #525252 */
    :root {
      --black: #000000;
      --white: #FFFFFF;
      --gray: #525252;
      --font-display: 'Playfair Display', Georgia, 'Times New Roman', serif;
      --font-body: 'Source Serif 4', Georgia, 'Times New Roman', serif;
      --font-mono: 'JetBrains Mono', 'Courier New', Courier, monospace;
    }

    body {
      font-family: var(--font-body);
      background-color: var(--white);
      color: var(--black);
      position: relative;
      font-size: 18px;
      line-height: 1.7;
    }

    /* paper grain */
    body::before {
      content: '';
      position: fixed;
      top: 0;
      left: 0;
      width: 100%;
      height: 100%;
      pointer-events: none;
      z-index: 9999;
      opacity: 0.02;
      background-image: url("data:image/svg+xml,%3Csvg viewBox='0 0 256 256' xmlns='http://www.w3.org/2000/svg'%3E%3Cfilter id='noise'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='0.9' numOctaves='4' stitchTiles='stitch'/%3E%3C/filter%3E%3Crect width='100%25' height='100%25' filter='url(%23noise)'/%3E%3C/svg%3E");
      background-size: 256px 256px;
    }

    .page-wrapper {
      max-width: 900px;
      margin: 0 auto;
      padding: 0 40px;
    }

    /* ── Header ── */
    .header {
      padding: 120px 0 80px;
      border-bottom: 4px solid var(--black);
    }

    .name {
      font-family: var(--font-display);
      font-size: 7rem;
      font-weight: 900;
      line-height: 0.95;
      letter-spacing: -0.03em;
      margin-bottom: 20px;
      text-transform: uppercase;
    }

    .title {
      font-size: 1.5rem;
      color: var(--gray);
      letter-spacing: 0.04em;
      margin-bottom: 48px;
    }

    .contact-row {
      display: flex;
      flex-wrap: wrap;
      gap: 24px 40px;
    }

    .contact-link {
      font-family: var(--font-mono);
      font-size: 0.72rem;
      font-weight: 500;
      letter-spacing: 0.12em;
      text-transform: uppercase;
      display: inline-flex;
      align-items: center;
      transition: color 0.2s ease;
    }

    .contact-link:hover {
      color: var(--gray);
    }

    .contact-dash {
      margin: 0 8px;
      color: var(--gray);
    }

    /* ── Dividers ── */
    .section-rule,
    .footer-rule {
      border: none;
      height: 4px;
      background-color: var(--black);
      margin: 0;
    }

    .entry-rule {
      border: none;
      height: 1px;
      background-color: var(--black);
      margin: 32px 0;
      opacity: 0.2;
    }

    /* ── Sections ── */
    .section {
      padding: 80px 0;
    }

    .section-heading {
      font-family: var(--font-display);
      font-size: 2.5rem;
      font-weight: 900;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      margin-bottom: 48px;
      line-height: 1.1;
    }

    .section-summary {
      padding: 100px 0;
    }

    .pull-quote {
      position: relative;
      max-width: 780px;
      margin: 0 auto;
      text-align: center;
      padding: 0 24px;
    }

    .pull-quote-mark {
      font-family: var(--font-display);
      font-size: 8rem;
      font-weight: 900;
      line-height: 0;
      display: block;
      user-select: none;
      opacity: 0.12;
    }

    .pull-quote-mark--end {
      text-align: right;
    }

    .pull-quote-text {
      font-family: var(--font-display);
      font-size: 1.75rem;
      font-style: italic;
      line-height: 1.6;
      margin: 24px 0;
    }

    /* ── Entries ── */
    .entries {
      display: flex;
      flex-direction: column;
    }

    .entry-header {
      display: flex;
      justify-content: space-between;
      align-items: flex-start;
      gap: 24px;
      margin-bottom: 12px;
    }

    .entry-titles {
      flex: 1;
    }

    .entry-role {
      font-family: var(--font-display);
      font-size: 1.5rem;
      font-weight: 700;
      line-height: 1.3;
      margin-bottom: 4px;
    }

    .entry-company {
      font-size: 1.05rem;
      font-style: italic;
      color: var(--gray);
    }

    .entry-date {
      font-family: var(--font-mono);
      font-size: 0.78rem;
      letter-spacing: 0.05em;
      color: var(--gray);
      white-space: nowrap;
      flex-shrink: 0;
      padding-top: 8px;
      text-transform: uppercase;
    }

    .entry-description {
      font-size: 1rem;
      line-height: 1.75;
      color: var(--gray);
      max-width: 680px;
    }

    /* ── Skills: inverted ── */
    .section-skills {
      background-color: var(--black);
      color: var(--white);
      margin-left: -40px;
      margin-right: -40px;
      padding-left: 40px;
      padding-right: 40px;
    }

    .skills-inner {
      max-width: 900px;
      margin: 0 auto;
    }

    .section-heading--inverted {
      color: var(--white);
    }

    .skills-grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(180px, 1fr));
      gap: 16px;
    }

    .skill-item {
      display: flex;
      align-items: center;
      justify-content: center;
      padding: 16px 24px;
      font-family: var(--font-mono);
      font-size: 0.82rem;
      font-weight: 500;
      letter-spacing: 0.06em;
      text-transform: uppercase;
      border: 1px solid var(--white);
      text-align: center;
      transition: background-color 0.2s ease, color 0.2s ease;
      cursor: default;
    }

    .skill-item:hover {
      background-color: var(--white);
      color: var(--black);
    }

    /* ── Projects ── */
    .projects-grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(360px, 1fr));
    }

    .project-card {
      padding: 36px;
      border: 1px solid var(--black);
      transition: background-color 0.2s ease, color 0.2s ease;
    }

    .project-card:hover {
      background-color: var(--black);
      color: var(--white);
    }

    .project-card:hover .project-name,
    .project-card:hover .project-arrow {
      color: var(--white);
    }

    .project-card:hover .project-description {
      color: rgba(255, 255, 255, 0.7);
    }

    .project-card:hover .tech-tag {
      border-color: var(--white);
      color: var(--white);
    }

    .project-header {
      margin-bottom: 16px;
    }

    .project-name {
      font-family: var(--font-display);
      font-size: 1.35rem;
      font-weight: 700;
      display: inline;
      transition: color 0.2s ease;
    }

    .project-arrow {
      margin-left: 6px;
      font-size: 1rem;
    }

    .project-description {
      font-size: 0.95rem;
      color: var(--gray);
      margin-bottom: 20px;
    }

    .project-tech {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .tech-tag {
      font-family: var(--font-mono);
      font-size: 0.7rem;
      font-weight: 500;
      letter-spacing: 0.06em;
      text-transform: uppercase;
      padding: 6px 14px;
      border: 1px solid var(--black);
    }

    /* ── Footer ── */
    .footer {
      padding: 48px 0 80px;
      text-align: center;
    }

    .footer-text {
      font-family: var(--font-mono);
      font-size: 0.7rem;
      letter-spacing: 0.15em;
      text-transform: uppercase;
      color: var(--gray);
    }

    @media (max-width: 900px) {
      .name {
        font-size: 5rem;
      }

      .projects-grid {
        grid-template-columns: 1fr;
      }
    }

    @media (max-width: 640px) {
      .page-wrapper {
        padding: 0 24px;
      }

      .name {
        font-size: 3.2rem;
      }

      .contact-row {
        flex-direction: column;
        gap: 12px;
      }

      .section {
        padding: 56px 0;
      }

      .entry-header {
        flex-direction: column;
        gap: 4px;
      }

      .section-skills {
        margin-left: -24px;
        margin-right: -24px;
        padding-left: 24px;
        padding-right: 24px;
      }
    }

    @media print {
      body::before {
        display: none;
      }

      .section-skills {
        margin-left: 0;
        margin-right: 0;
      }
    }
"#;

const EXTERNAL: &str = r#"target="_blank" rel="noopener noreferrer""#;

const SECTION_RULE: &str = "      <hr class=\"section-rule\" />\n";

pub fn render(data: &ResumeData) -> String {
    let title = if data.name.is_empty() {
        "Portfolio".to_string()
    } else {
        e(&data.name).to_string()
    };

    let body = format!(
        r#"  <div class="page-wrapper">
{header}    <main>
{summary}{experience}{education}{skills}{projects}      <hr class="footer-rule" />
      <footer class="footer">
        <p class="footer-text">Portfolio</p>
      </footer>
    </main>
  </div>"#,
        header = when(data.has_header(), || header(data)),
        summary = when(!data.summary.is_empty(), || summary(data)),
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
    let contacts: String = data
        .contacts()
        .map(|contact| {
            let label = match contact.kind {
                ContactKind::Website => "Web",
                other => other.label(),
            };
            // profile URLs are too long for the caption row
            let text = match contact.kind {
                ContactKind::LinkedIn | ContactKind::GitHub => "Profile".to_string(),
                _ => e(contact.value).to_string(),
            };
            let inner = format!(
                r#"<span class="contact-label">{label}</span><span class="contact-dash">&mdash;</span>{text}"#
            );
            match (contact.kind, contact.kind.href(contact.value)) {
                (ContactKind::Email, Some(href)) => {
                    format!(r#"<a href="{}" class="contact-link">{inner}</a>"#, e(&href))
                }
                (kind, Some(href)) if kind.is_external() => format!(
                    r#"<a href="{}" {EXTERNAL} class="contact-link">{inner}</a>"#,
                    e(&href)
                ),
                _ => format!(r#"<span class="contact-link">{inner}</span>"#),
            }
        })
        .collect();

    format!(
        r#"    <header class="header">
      {name}
      {title}
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
            r#"<div class="contact-row">{contacts}</div>"#
        )),
    )
}

fn summary(data: &ResumeData) -> String {
    format!(
        r#"{SECTION_RULE}      <section class="section section-summary">
        <div class="pull-quote">
          <span class="pull-quote-mark" aria-hidden="true">&ldquo;</span>
          <blockquote class="pull-quote-text">{}</blockquote>
          <span class="pull-quote-mark pull-quote-mark--end" aria-hidden="true">&rdquo;</span>
        </div>
      </section>
"#,
        e(&data.summary)
    )
}

fn section(heading: &str, content: &str) -> String {
    format!(
        r#"{SECTION_RULE}      <section class="section">
        <h2 class="section-heading">{heading}</h2>
{content}
      </section>
"#
    )
}

/// One editorial entry; a hairline rule separates it from the previous one.
/// `role` and `company` are already markup, the rest is raw text.
fn entry(index: usize, role: &str, company: &str, start: &str, end: &str, description: &str) -> String {
    let dates = date_range(start, end, " &mdash; ");
    format!(
        r#"          {rule}
          <div class="entry">
            <div class="entry-header">
              <div class="entry-titles">
                <h3 class="entry-role">{role}</h3>
                <p class="entry-company">{company}</p>
              </div>
              {dates}
            </div>
            {description}
          </div>
"#,
        rule = when(index > 0, || r#"<hr class="entry-rule" />"#.to_string()),
        dates = when(!dates.is_empty(), || format!(
            r#"<span class="entry-date">{dates}</span>"#
        )),
        description = when(!description.is_empty(), || format!(
            r#"<p class="entry-description">{}</p>"#,
            e(description)
        )),
    )
}

fn experience(data: &ResumeData) -> String {
    let entries = each(&data.experience, |(i, exp)| {
        entry(
            i,
            &e(&exp.role).to_string(),
            &e(&exp.company).to_string(),
            &exp.start_date,
            &exp.end_date,
            &exp.description,
        )
    });
    section(
        "Experience",
        &format!("        <div class=\"entries\">\n{entries}        </div>"),
    )
}

fn education(data: &ResumeData) -> String {
    let entries = each(&data.education, |(i, edu)| {
        let degree = if edu.field.is_empty() {
            e(&edu.degree).to_string()
        } else {
            format!("{} in {}", e(&edu.degree), e(&edu.field))
        };
        entry(
            i,
            &degree,
            &e(&edu.institution).to_string(),
            &edu.start_date,
            &edu.end_date,
            "",
        )
    });
    section(
        "Education",
        &format!("        <div class=\"entries\">\n{entries}        </div>"),
    )
}

fn skills(data: &ResumeData) -> String {
    let items = each(&data.skills, |(_, skill)| {
        format!(r#"<span class="skill-item">{}</span>"#, e(skill))
    });
    format!(
        r#"{SECTION_RULE}      <section class="section section-skills">
        <div class="skills-inner">
          <h2 class="section-heading section-heading--inverted">Skills</h2>
          <div class="skills-grid">{items}</div>
        </div>
      </section>
"#
    )
}

fn projects(data: &ResumeData) -> String {
    let cards = each(&data.projects, |(_, project)| {
        let name = if project.url.is_empty() {
            format!(r#"<h3 class="project-name">{}</h3>"#, e(&project.name))
        } else {
            format!(
                r#"<a href="{}" {EXTERNAL} class="project-name">{}<span class="project-arrow">&nearr;</span></a>"#,
                e(&project.url),
                e(&project.name)
            )
        };
        format!(
            r#"          <div class="project-card">
            <div class="project-header">{name}</div>
            {description}
            {tech}
          </div>
"#,
            description = when(!project.description.is_empty(), || format!(
                r#"<p class="project-description">{}</p>"#,
                e(&project.description)
            )),
            tech = when(!project.technologies.is_empty(), || format!(
                r#"<div class="project-tech">{}</div>"#,
                each(&project.technologies, |(_, t)| format!(
                    r#"<span class="tech-tag">{}</span>"#,
                    e(t)
                ))
            )),
        )
    });
    section(
        "Projects",
        &format!("        <div class=\"projects-grid\">\n{cards}        </div>"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Experience, Project};

    #[test]
    fn test_entry_rules_only_between_entries() {
        let data = ResumeData {
            experience: vec![
                Experience {
                    role: "A".into(),
                    ..Default::default()
                },
                Experience {
                    role: "B".into(),
                    ..Default::default()
                },
                Experience {
                    role: "C".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let html = render(&data);
        assert_eq!(html.matches(r#"<hr class="entry-rule" />"#).count(), 2);
        assert_eq!(html.matches(r#"<hr class="section-rule" />"#).count(), 1);
    }

    #[test]
    fn test_summary_is_a_pull_quote() {
        let data = ResumeData {
            summary: "Less, but better.".into(),
            ..Default::default()
        };
        let html = render(&data);
        assert!(html.contains(r#"<blockquote class="pull-quote-text">Less, but better.</blockquote>"#));
        assert!(html.contains("&ldquo;"));
    }

    #[test]
    fn test_profiles_show_profile_caption() {
        let data = ResumeData {
            website: "https://me.dev".into(),
            github: "https://github.com/me".into(),
            ..Default::default()
        };
        let html = render(&data);
        assert!(html.contains(r#"<span class="contact-label">Web</span><span class="contact-dash">&mdash;</span>https://me.dev</a>"#));
        assert!(html.contains(r#"<span class="contact-label">GitHub</span><span class="contact-dash">&mdash;</span>Profile</a>"#));
    }

    #[test]
    fn test_linked_project_has_arrow() {
        let data = ResumeData {
            projects: vec![Project {
                name: "Type".into(),
                url: "https://type.dev".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert!(render(&data).contains(r#"Type<span class="project-arrow">&nearr;</span></a>"#));
    }

    #[test]
    fn test_skills_section_is_inverted() {
        let data = ResumeData {
            skills: vec!["Kerning".into()],
            ..Default::default()
        };
        let html = render(&data);
        assert!(html.contains(r#"<section class="section section-skills">"#));
        assert!(html.contains("section-heading--inverted"));
    }
}
