//! Navy/white, serif headings, two-column, formal.
//!
//! The only theme whose output depends on anything but the resume: the footer
//! carries a copyright year, passed in by the caller.

use crate::models::{ContactKind, ResumeData};
use crate::render::escape::e;
use crate::render::layout::{date_range, each, title_with_subtitle, when, Page};

const STYLES: &str = r#"
    /* ── Typography ────────────────────────────────────────── */
    :root {
      --navy: #1e3a5f;
      --navy-light: #2a5080;
      --navy-dark: #152c49;
      --accent: #3a6ea5;
      --border: #c8d6e5;
      --bg: #ffffff;
      --bg-sidebar: #f5f7fa;
      --text: #2d3436;
      --text-light: #636e72;
      --serif: Georgia, 'Times New Roman', Times, serif;
      --sans: 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
    }

    body {
      font-family: var(--sans);
      color: var(--text);
      background: #e8ecf1;
      line-height: 1.65;
      font-size: 15px;
    }

    .page-wrapper {
      max-width: 1080px;
      margin: 40px auto;
      background: var(--bg);
      box-shadow: 0 2px 24px rgba(0, 0, 0, 0.10);
      border-radius: 2px;
      overflow: hidden;
    }

    /* ── Header ────────────────────────────────────────────── */
    .header {
      background: var(--navy);
      color: #ffffff;
      padding: 48px 56px 40px;
      border-bottom: 4px solid var(--navy-dark);
    }

    .header-name {
      font-family: var(--serif);
      font-size: 2.6rem;
      font-weight: 700;
      letter-spacing: 0.02em;
      margin-bottom: 4px;
      line-height: 1.2;
    }

    .header-title {
      font-size: 1.15rem;
      font-weight: 300;
      letter-spacing: 0.06em;
      text-transform: uppercase;
      opacity: 0.85;
    }

    /* ── Two-column layout ─────────────────────────────────── */
    .content {
      display: flex;
      min-height: 600px;
    }

    .main-column {
      flex: 0 0 65%;
      max-width: 65%;
      padding: 40px 48px 48px 56px;
      border-right: 1px solid var(--border);
    }

    .sidebar {
      flex: 0 0 35%;
      max-width: 35%;
      padding: 40px 40px 48px 36px;
      background: var(--bg-sidebar);
    }

    .main-section {
      margin-bottom: 36px;
    }

    .main-section:last-child {
      margin-bottom: 0;
    }

    .section-heading {
      font-family: var(--serif);
      font-size: 1.35rem;
      font-weight: 700;
      color: var(--navy);
      text-transform: uppercase;
      letter-spacing: 0.08em;
    }

    .section-rule {
      border: none;
      border-top: 2px solid var(--navy);
      margin: 8px 0 20px;
    }

    .summary-text {
      line-height: 1.75;
    }

    /* Experience */
    .experience-entry,
    .project-entry {
      margin-bottom: 24px;
      padding-bottom: 24px;
      border-bottom: 1px solid var(--border);
    }

    .experience-entry:last-child,
    .project-entry:last-child {
      margin-bottom: 0;
      padding-bottom: 0;
      border-bottom: none;
    }

    .experience-header {
      display: flex;
      justify-content: space-between;
      align-items: flex-start;
      gap: 16px;
      margin-bottom: 8px;
    }

    .experience-role,
    .project-name {
      font-family: var(--serif);
      font-size: 1.1rem;
      font-weight: 700;
      color: var(--navy-dark);
    }

    .experience-company {
      font-size: 0.95rem;
      color: var(--accent);
      font-weight: 500;
      margin-top: 2px;
    }

    .experience-dates {
      font-size: 0.85rem;
      color: var(--text-light);
      white-space: nowrap;
      padding-top: 3px;
    }

    .experience-description {
      line-height: 1.7;
      margin-top: 4px;
    }

    /* Projects */
    .project-header {
      display: flex;
      justify-content: space-between;
      align-items: baseline;
      gap: 12px;
      flex-wrap: wrap;
      margin-bottom: 6px;
    }

    .project-link {
      font-size: 0.82rem;
      color: var(--accent);
      text-decoration: underline;
      word-break: break-all;
    }

    .project-link:hover {
      color: var(--navy);
    }

    .project-description {
      line-height: 1.7;
      margin-bottom: 8px;
    }

    .project-tech {
      display: flex;
      flex-wrap: wrap;
      gap: 6px;
    }

    .tech-tag {
      display: inline-block;
      font-size: 0.78rem;
      background: var(--navy);
      color: #ffffff;
      padding: 2px 10px;
      border-radius: 2px;
      letter-spacing: 0.02em;
    }

    /* ── Sidebar ───────────────────────────────────────────── */
    .sidebar-section {
      margin-bottom: 32px;
    }

    .sidebar-section:last-child {
      margin-bottom: 0;
    }

    .sidebar-heading {
      font-family: var(--serif);
      font-size: 1.1rem;
      font-weight: 700;
      color: var(--navy);
      text-transform: uppercase;
      letter-spacing: 0.08em;
      padding-bottom: 8px;
      border-bottom: 2px solid var(--navy);
      margin-bottom: 16px;
    }

    .contact-list li {
      margin-bottom: 12px;
      font-size: 0.9rem;
      line-height: 1.5;
    }

    .contact-label {
      display: block;
      font-weight: 600;
      font-size: 0.78rem;
      text-transform: uppercase;
      letter-spacing: 0.06em;
      color: var(--navy);
      margin-bottom: 1px;
    }

    .contact-list a {
      color: var(--accent);
      text-decoration: underline;
      text-decoration-color: var(--border);
      text-underline-offset: 2px;
    }

    .contact-list a:hover {
      color: var(--navy);
      text-decoration-color: var(--navy);
    }

    .skills-list {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .skills-list li {
      font-size: 0.85rem;
      background: #ffffff;
      border: 1px solid var(--border);
      padding: 4px 14px;
      border-radius: 2px;
      color: var(--navy-dark);
      font-weight: 500;
    }

    .education-entry {
      margin-bottom: 18px;
      padding-bottom: 18px;
      border-bottom: 1px solid var(--border);
    }

    .education-entry:last-child {
      margin-bottom: 0;
      padding-bottom: 0;
      border-bottom: none;
    }

    .education-degree {
      font-family: var(--serif);
      font-size: 0.98rem;
      font-weight: 700;
      color: var(--navy-dark);
      line-height: 1.4;
    }

    .education-institution {
      font-size: 0.9rem;
      color: var(--accent);
      font-weight: 500;
      margin-top: 2px;
    }

    .education-dates {
      font-size: 0.82rem;
      color: var(--text-light);
      margin-top: 2px;
    }

    /* ── Footer ────────────────────────────────────────────── */
    .footer {
      background: var(--navy);
      text-align: center;
      padding: 16px 56px;
      color: rgba(255, 255, 255, 0.45);
      font-size: 0.78rem;
      letter-spacing: 0.04em;
    }

    @media (max-width: 768px) {
      body {
        background: var(--bg);
      }

      .page-wrapper {
        margin: 0;
        box-shadow: none;
        border-radius: 0;
      }

      .header {
        padding: 32px 24px 28px;
      }

      .header-name {
        font-size: 1.9rem;
      }

      .content {
        flex-direction: column;
      }

      .main-column,
      .sidebar {
        flex: 1 1 auto;
        max-width: 100%;
        padding: 28px 24px 32px;
      }

      .main-column {
        border-right: none;
        border-bottom: 1px solid var(--border);
      }

      .experience-header,
      .project-header {
        flex-direction: column;
        gap: 2px;
      }
    }
"#;

const EXTERNAL: &str = r#"target="_blank" rel="noopener noreferrer""#;

pub fn render(data: &ResumeData, year: i32) -> String {
    let header = when(!data.name.is_empty() || !data.title.is_empty(), || {
        format!(
            r#"    <header class="header">
      {name}
      {title}
    </header>
"#,
            name = when(!data.name.is_empty(), || format!(
                r#"<h1 class="header-name">{}</h1>"#,
                e(&data.name)
            )),
            title = when(!data.title.is_empty(), || format!(
                r#"<p class="header-title">{}</p>"#,
                e(&data.title)
            )),
        )
    });

    let body = format!(
        r#"  <div class="page-wrapper">
{header}    <div class="content">
      <main class="main-column">
{summary}{experience}{projects}      </main>
      <aside class="sidebar">
{contact}{skills}{education}      </aside>
    </div>
    <footer class="footer">&copy; {year} {name}</footer>
  </div>"#,
        summary = when(!data.summary.is_empty(), || {
            main_section(
                "Professional Summary",
                &format!(r#"        <p class="summary-text">{}</p>"#, e(&data.summary)),
            )
        }),
        experience = when(!data.experience.is_empty(), || experience(data)),
        projects = when(!data.projects.is_empty(), || projects(data)),
        contact = when(data.has_contact(), || contact(data)),
        skills = when(!data.skills.is_empty(), || {
            sidebar_section(
                "Skills",
                &format!(
                    r#"        <ul class="skills-list">{}</ul>"#,
                    each(&data.skills, |(_, s)| format!("<li>{}</li>", e(s)))
                ),
            )
        }),
        education = when(!data.education.is_empty(), || education(data)),
        name = e(&data.name),
    );

    Page {
        title: &title_with_subtitle(&data.name, &data.title, " &ndash; "),
        head_links: "",
        styles: STYLES,
        body: &body,
    }
    .into_html()
}

fn main_section(heading: &str, content: &str) -> String {
    format!(
        r#"      <section class="main-section">
        <h2 class="section-heading">{heading}</h2>
        <hr class="section-rule" />
{content}
      </section>
"#
    )
}

fn sidebar_section(heading: &str, content: &str) -> String {
    format!(
        r#"      <section class="sidebar-section">
        <h2 class="sidebar-heading">{heading}</h2>
{content}
      </section>
"#
    )
}

fn contact(data: &ResumeData) -> String {
    let items = data
        .contacts()
        .map(|contact| {
            let value = e(contact.value);
            let content = match (contact.kind, contact.kind.href(contact.value)) {
                (ContactKind::Email, Some(href)) => {
                    format!(r#"<a href="{}">{value}</a>"#, e(&href))
                }
                (ContactKind::Website | ContactKind::LinkedIn | ContactKind::GitHub, Some(href)) => {
                    format!(r#"<a href="{}" {EXTERNAL}>{value}</a>"#, e(&href))
                }
                _ => format!("<span>{value}</span>"),
            };
            format!(
                r#"<li><span class="contact-label">{}</span>{content}</li>"#,
                contact.kind.label()
            )
        })
        .collect::<String>();
    sidebar_section(
        "Contact",
        &format!(r#"        <ul class="contact-list">{items}</ul>"#),
    )
}

fn experience(data: &ResumeData) -> String {
    let entries = each(&data.experience, |(_, exp)| {
        let dates = date_range(&exp.start_date, &exp.end_date, " &ndash; ");
        format!(
            r#"        <div class="experience-entry">
          <div class="experience-header">
            <div>
              <h3 class="experience-role">{role}</h3>
              <p class="experience-company">{company}</p>
            </div>
            {dates}
          </div>
          {description}
        </div>
"#,
            role = e(&exp.role),
            company = e(&exp.company),
            dates = when(!dates.is_empty(), || format!(
                r#"<span class="experience-dates">{dates}</span>"#
            )),
            description = when(!exp.description.is_empty(), || format!(
                r#"<p class="experience-description">{}</p>"#,
                e(&exp.description)
            )),
        )
    });
    main_section("Experience", &entries)
}

fn projects(data: &ResumeData) -> String {
    let entries = each(&data.projects, |(_, project)| {
        format!(
            r#"        <div class="project-entry">
          <div class="project-header">
            <h3 class="project-name">{name}</h3>
            {link}
          </div>
          {description}
          {tech}
        </div>
"#,
            name = e(&project.name),
            link = when(!project.url.is_empty(), || format!(
                r#"<a class="project-link" href="{0}" {EXTERNAL}>{0}</a>"#,
                e(&project.url)
            )),
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
    main_section("Projects", &entries)
}

fn education(data: &ResumeData) -> String {
    let entries = each(&data.education, |(_, edu)| {
        let dates = date_range(&edu.start_date, &edu.end_date, " &ndash; ");
        format!(
            r#"        <div class="education-entry">
          <h3 class="education-degree">{degree}{field}</h3>
          <p class="education-institution">{institution}</p>
          {dates}
        </div>
"#,
            degree = e(&edu.degree),
            field = when(!edu.field.is_empty(), || format!(", {}", e(&edu.field))),
            institution = e(&edu.institution),
            dates = when(!dates.is_empty(), || format!(
                r#"<p class="education-dates">{dates}</p>"#
            )),
        )
    });
    sidebar_section("Education", &entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::Education;

    #[test]
    fn test_footer_uses_injected_year() {
        let data = ResumeData {
            name: "Jane Doe".into(),
            ..Default::default()
        };
        assert!(render(&data, 2031).contains("&copy; 2031 Jane Doe"));
        assert_eq!(render(&data, 2031), render(&data, 2031));
        assert_ne!(render(&data, 2031), render(&data, 2032));
    }

    #[test]
    fn test_contact_block_lives_in_sidebar() {
        let data = ResumeData {
            email: "jane@x.com".into(),
            phone: "555".into(),
            ..Default::default()
        };
        let html = render(&data, 2024);
        let sidebar = html.find(r#"<aside class="sidebar">"#).unwrap();
        let contact = html.find(r#"<h2 class="sidebar-heading">Contact</h2>"#).unwrap();
        assert!(contact > sidebar);
        assert!(html.contains(
            r#"<li><span class="contact-label">Email</span><a href="mailto:jane@x.com">jane@x.com</a></li>"#
        ));
        assert!(html.contains(r#"<li><span class="contact-label">Phone</span><span>555</span></li>"#));
        // contacts alone do not produce the name banner
        assert!(!html.contains(r#"<header class="header">"#));
    }

    #[test]
    fn test_education_in_sidebar_after_skills() {
        let data = ResumeData {
            skills: vec!["Go".into()],
            education: vec![Education {
                degree: "BA".into(),
                field: "History".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let html = render(&data, 2024);
        let skills = html.find("<li>Go</li>").unwrap();
        let degree = html.find("BA, History").unwrap();
        assert!(skills < degree);
        assert!(!html.contains(r#"class="education-dates""#));
    }
}
