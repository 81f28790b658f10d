//! Warm cream, gold accents, editorial typography.

use crate::models::{ContactKind, ResumeData};
use crate::render::escape::e;
use crate::render::layout::{date_range, each, when, Page};

const FONTS: &str = r#"  <link rel="preconnect" href="https://fonts.googleapis.com" />
  <link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Cormorant+Garamond:ital,wght@0,300;0,400;0,500;0,600;0,700;1,300;1,400;1,500;1,600&amp;display=swap" />
"#;

const STYLES: &str = r#"
    :root {
      --color-cream: #fdf8f0;
      --color-gold: #b8860b;
      --color-gold-light: #d4a853;
      --color-gold-pale: #f0e6c8;
      --color-charcoal: #2d2d2d;
      --color-charcoal-light: #4a4a4a;
      --color-warm-gray: #7a7168;
      --color-border: #e0d5c5;
      --font-serif: 'Cormorant Garamond', Georgia, Garamond, 'Times New Roman', serif;
      --font-body: Georgia, Garamond, 'Times New Roman', serif;
      --spacing-sm: 1rem;
      --spacing-md: 1.75rem;
      --spacing-lg: 2.75rem;
      --spacing-xl: 4rem;
    }

    body {
      font-family: var(--font-body);
      background-color: var(--color-cream);
      color: var(--color-charcoal);
      font-size: 16px;
      line-height: 1.75;
    }

    .page-wrapper {
      max-width: 820px;
      margin: 0 auto;
      padding: var(--spacing-xl) var(--spacing-md);
    }

    /* ---- Header ---- */
    .header {
      text-align: center;
      padding-bottom: var(--spacing-lg);
      border-bottom: 1px solid var(--color-border);
      margin-bottom: var(--spacing-lg);
    }

    .header::before,
    .footer::after {
      content: '';
      display: block;
      width: 48px;
      height: 2px;
      background: linear-gradient(90deg, var(--color-gold), var(--color-gold-light));
    }

    .header::before {
      margin: 0 auto var(--spacing-md);
    }

    .header-name {
      font-family: var(--font-serif);
      font-size: 3rem;
      font-weight: 300;
      letter-spacing: 0.18em;
      text-transform: uppercase;
      margin-bottom: 0.25rem;
      line-height: 1.2;
    }

    .header-title {
      font-family: var(--font-serif);
      font-size: 1.2rem;
      font-style: italic;
      color: var(--color-gold);
      letter-spacing: 0.08em;
      margin-bottom: var(--spacing-sm);
    }

    .contact-row {
      display: flex;
      flex-wrap: wrap;
      justify-content: center;
      gap: 0.4rem 1.5rem;
      margin-top: var(--spacing-sm);
      font-size: 0.875rem;
    }

    .contact-link,
    .contact-item {
      color: var(--color-warm-gray);
      transition: color 0.25s ease;
    }

    .contact-link:hover {
      color: var(--color-gold);
    }

    .contact-row > *:not(:last-child)::after {
      content: '';
      display: inline-block;
      width: 3px;
      height: 3px;
      background-color: var(--color-gold-light);
      border-radius: 50%;
      vertical-align: middle;
      margin-left: 1.5rem;
    }

    /* ---- Sections ---- */
    .section {
      margin-bottom: var(--spacing-lg);
    }

    .section-heading {
      font-family: var(--font-serif);
      font-size: 1.1rem;
      font-weight: 600;
      letter-spacing: 0.22em;
      text-transform: uppercase;
      color: var(--color-gold);
      margin-bottom: var(--spacing-md);
      padding-bottom: 0.6rem;
      border-bottom: 1px solid var(--color-border);
      position: relative;
    }

    .section-heading::after {
      content: '';
      position: absolute;
      bottom: -1px;
      left: 0;
      width: 60px;
      height: 1px;
      background: linear-gradient(90deg, var(--color-gold), var(--color-gold-light));
    }

    .ornamental-rule {
      border: none;
      height: 1px;
      background: linear-gradient(
        90deg,
        transparent,
        var(--color-gold-pale) 20%,
        var(--color-gold-light) 50%,
        var(--color-gold-pale) 80%,
        transparent
      );
      margin: var(--spacing-lg) 0;
    }

    .summary-text {
      font-size: 1.05rem;
      line-height: 1.9;
      color: var(--color-charcoal-light);
      max-width: 680px;
      margin: 0 auto;
      text-align: center;
      font-style: italic;
      position: relative;
      padding: 0 var(--spacing-sm);
    }

    .summary-text::before,
    .summary-text::after {
      font-family: var(--font-serif);
      font-size: 2.5rem;
      color: var(--color-gold-light);
      line-height: 1;
      position: absolute;
    }

    .summary-text::before {
      content: '\201C';
      top: -0.3rem;
      left: -0.75rem;
    }

    .summary-text::after {
      content: '\201D';
      bottom: -0.8rem;
      right: -0.5rem;
    }

    /* ---- Experience ---- */
    .experience-entry {
      margin-bottom: var(--spacing-md);
      padding-left: var(--spacing-sm);
      border-left: 2px solid var(--color-gold-pale);
    }

    .experience-entry:last-child,
    .education-entry:last-child,
    .project-entry:last-child {
      margin-bottom: 0;
    }

    .experience-role {
      font-family: var(--font-serif);
      font-size: 1.2rem;
      font-weight: 600;
      margin-bottom: 0.1rem;
      line-height: 1.4;
    }

    .experience-company,
    .education-field {
      font-style: italic;
      color: var(--color-gold);
      font-size: 0.95rem;
    }

    .experience-dates,
    .education-dates {
      font-size: 0.82rem;
      letter-spacing: 0.08em;
      color: var(--color-warm-gray);
      text-transform: uppercase;
    }

    .experience-dates {
      margin-bottom: 0.5rem;
    }

    .experience-description {
      font-size: 0.95rem;
      color: var(--color-charcoal-light);
      line-height: 1.8;
    }

    /* ---- Education ---- */
    .education-entry {
      margin-bottom: var(--spacing-md);
      display: flex;
      justify-content: space-between;
      align-items: baseline;
      flex-wrap: wrap;
      gap: 0.25rem 1rem;
    }

    .education-main {
      flex: 1;
      min-width: 200px;
    }

    .education-degree {
      font-family: var(--font-serif);
      font-size: 1.1rem;
      font-weight: 600;
      line-height: 1.4;
    }

    .education-institution {
      font-size: 0.92rem;
      color: var(--color-charcoal-light);
    }

    .education-dates {
      white-space: nowrap;
    }

    /* ---- Skills ---- */
    .skills-list {
      display: flex;
      flex-wrap: wrap;
      gap: 0.6rem;
    }

    .skill-tag {
      display: inline-block;
      padding: 0.35rem 1rem;
      font-size: 0.82rem;
      letter-spacing: 0.06em;
      color: var(--color-gold);
      border: 1px solid var(--color-gold-pale);
      border-radius: 2px;
      background: linear-gradient(135deg, rgba(184, 134, 11, 0.04), rgba(212, 168, 83, 0.08));
      transition: all 0.25s ease;
    }

    .skill-tag:hover {
      border-color: var(--color-gold-light);
    }

    /* ---- Projects ---- */
    .project-entry {
      margin-bottom: var(--spacing-md);
      padding: var(--spacing-sm);
      border: 1px solid var(--color-border);
      border-radius: 2px;
      background: linear-gradient(135deg, rgba(253, 248, 240, 0.5), rgba(250, 246, 241, 0.9));
      transition: border-color 0.25s ease;
    }

    .project-entry:hover {
      border-color: var(--color-gold-pale);
    }

    .project-header {
      display: flex;
      align-items: baseline;
      gap: 0.75rem;
      flex-wrap: wrap;
      margin-bottom: 0.35rem;
    }

    .project-name {
      font-family: var(--font-serif);
      font-size: 1.1rem;
      font-weight: 600;
    }

    .project-link {
      font-size: 0.8rem;
      color: var(--color-gold);
      letter-spacing: 0.04em;
      border-bottom: 1px solid var(--color-gold-pale);
      transition: border-color 0.25s ease;
    }

    .project-link:hover {
      border-color: var(--color-gold);
    }

    .project-description {
      font-size: 0.95rem;
      color: var(--color-charcoal-light);
      margin-bottom: 0.6rem;
    }

    .project-technologies {
      display: flex;
      flex-wrap: wrap;
      gap: 0.4rem;
    }

    .project-tech {
      font-size: 0.75rem;
      font-style: italic;
      color: var(--color-warm-gray);
      padding: 0.2rem 0.6rem;
      border: 1px solid var(--color-border);
      border-radius: 1px;
    }

    /* ---- Footer ---- */
    .footer {
      text-align: center;
      padding-top: var(--spacing-lg);
      margin-top: var(--spacing-lg);
      border-top: 1px solid var(--color-border);
    }

    .footer::after {
      margin: var(--spacing-sm) auto 0;
    }

    .footer-text {
      font-size: 0.78rem;
      letter-spacing: 0.12em;
      text-transform: uppercase;
      color: var(--color-warm-gray);
    }

    @media (max-width: 768px) {
      .page-wrapper {
        padding: var(--spacing-lg) var(--spacing-sm);
      }

      .header-name {
        font-size: 2.2rem;
        letter-spacing: 0.12em;
      }

      .contact-row {
        flex-direction: column;
        align-items: center;
        gap: 0.35rem;
      }

      .contact-row > *::after {
        display: none !important;
      }

      .education-entry {
        flex-direction: column;
      }
    }

    @media print {
      body {
        background: #fff;
        font-size: 11pt;
      }

      .page-wrapper {
        max-width: 100%;
        padding: 0;
      }
    }
"#;

const EXTERNAL: &str = r#"target="_blank" rel="noopener noreferrer""#;

const RULE: &str = "    <hr class=\"ornamental-rule\">\n";

pub fn render(data: &ResumeData) -> String {
    let (title, footer) = if data.name.is_empty() {
        ("Portfolio".to_string(), "Portfolio".to_string())
    } else {
        (
            format!("{} &mdash; Portfolio", e(&data.name)),
            e(&data.name).to_string(),
        )
    };

    // every section but the last kind is followed by an ornamental rule
    let body = format!(
        r#"  <div class="page-wrapper">
{header}{summary}{experience}{education}{skills}{projects}    <footer class="footer">
      <p class="footer-text">{footer}</p>
    </footer>
  </div>"#,
        header = when(data.has_header(), || header(data)),
        summary = when(!data.summary.is_empty(), || {
            section(
                "About",
                &format!(r#"      <p class="summary-text">{}</p>"#, e(&data.summary)),
            ) + RULE
        }),
        experience = when(!data.experience.is_empty(), || experience(data) + RULE),
        education = when(!data.education.is_empty(), || education(data) + RULE),
        skills = when(!data.skills.is_empty(), || skills(data) + RULE),
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
            let value = e(contact.value);
            match (contact.kind, contact.kind.href(contact.value)) {
                (ContactKind::LinkedIn | ContactKind::GitHub, Some(href)) => format!(
                    r#"<a href="{}" {EXTERNAL} class="contact-link">{}</a>"#,
                    e(&href),
                    contact.kind.label()
                ),
                (ContactKind::Website, Some(href)) => format!(
                    r#"<a href="{}" {EXTERNAL} class="contact-link">{value}</a>"#,
                    e(&href)
                ),
                (_, Some(href)) => {
                    format!(r#"<a href="{}" class="contact-link">{value}</a>"#, e(&href))
                }
                (_, None) => format!(r#"<span class="contact-item">{value}</span>"#),
            }
        })
        .collect();

    format!(
        "    <header class=\"header\">\n{name}{title}{contacts}    </header>\n",
        name = when(!data.name.is_empty(), || format!(
            "      <h1 class=\"header-name\">{}</h1>\n",
            e(&data.name)
        )),
        title = when(!data.title.is_empty(), || format!(
            "      <p class=\"header-title\">{}</p>\n",
            e(&data.title)
        )),
        contacts = when(!contacts.is_empty(), || format!(
            "      <div class=\"contact-row\">\n        {}\n      </div>\n",
            contacts.join("\n        ")
        )),
    )
}

fn section(heading: &str, content: &str) -> String {
    format!(
        r#"    <section class="section">
      <h2 class="section-heading">{heading}</h2>
{content}
    </section>
"#
    )
}

fn dates(start: &str, end: &str) -> String {
    date_range(start, end, " &mdash; ")
}

fn experience(data: &ResumeData) -> String {
    let entries: Vec<String> = data
        .experience
        .iter()
        .map(|exp| {
            let range = dates(&exp.start_date, &exp.end_date);
            format!(
                "      <div class=\"experience-entry\">\n        <h3 class=\"experience-role\">{role}</h3>\n{company}{range}{description}      </div>",
                role = e(&exp.role),
                company = when(!exp.company.is_empty(), || format!(
                    "        <p class=\"experience-company\">{}</p>\n",
                    e(&exp.company)
                )),
                range = when(!range.is_empty(), || format!(
                    "        <p class=\"experience-dates\">{range}</p>\n"
                )),
                description = when(!exp.description.is_empty(), || format!(
                    "        <p class=\"experience-description\">{}</p>\n",
                    e(&exp.description)
                )),
            )
        })
        .collect();
    section("Experience", &entries.join("\n"))
}

fn education(data: &ResumeData) -> String {
    let entries: Vec<String> = data
        .education
        .iter()
        .map(|edu| {
            let range = dates(&edu.start_date, &edu.end_date);
            format!(
                r#"      <div class="education-entry">
        <div class="education-main">
          <p class="education-degree">{degree}</p>
{field}          <p class="education-institution">{institution}</p>
        </div>
{range}      </div>"#,
                degree = e(&edu.degree),
                field = when(!edu.field.is_empty(), || format!(
                    "          <p class=\"education-field\">{}</p>\n",
                    e(&edu.field)
                )),
                institution = e(&edu.institution),
                range = when(!range.is_empty(), || format!(
                    "        <span class=\"education-dates\">{range}</span>\n"
                )),
            )
        })
        .collect();
    section("Education", &entries.join("\n"))
}

fn skills(data: &ResumeData) -> String {
    let tags: Vec<String> = data
        .skills
        .iter()
        .map(|skill| format!(r#"        <span class="skill-tag">{}</span>"#, e(skill)))
        .collect();
    section(
        "Skills",
        &format!(
            "      <div class=\"skills-list\">\n{}\n      </div>",
            tags.join("\n")
        ),
    )
}

fn projects(data: &ResumeData) -> String {
    let entries = each(&data.projects, |(i, project)| {
        let tech: Vec<String> = project
            .technologies
            .iter()
            .map(|t| format!(r#"          <span class="project-tech">{}</span>"#, e(t)))
            .collect();
        format!(
            r#"{sep}      <div class="project-entry">
        <div class="project-header">
          <h3 class="project-name">{name}</h3>
{link}        </div>
{description}{tech}      </div>"#,
            sep = if i > 0 { "\n" } else { "" },
            name = e(&project.name),
            link = when(!project.url.is_empty(), || format!(
                "          <a href=\"{}\" {EXTERNAL} class=\"project-link\">View Project</a>\n",
                e(&project.url)
            )),
            description = when(!project.description.is_empty(), || format!(
                "        <p class=\"project-description\">{}</p>\n",
                e(&project.description)
            )),
            tech = when(!tech.is_empty(), || format!(
                "        <div class=\"project-technologies\">\n{}\n        </div>\n",
                tech.join("\n")
            )),
        )
    });
    section("Projects", &entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Education, Project};

    #[test]
    fn test_font_is_linked_not_imported() {
        let html = render(&ResumeData::default());
        assert!(html.contains(r#"<link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Cormorant+Garamond"#));
        assert!(!html.contains("@import"));
    }

    #[test]
    fn test_rules_follow_every_section_but_projects() {
        let data = ResumeData {
            summary: "About me".into(),
            skills: vec!["Ink".into()],
            projects: vec![Project {
                name: "Folio".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let html = render(&data);
        assert_eq!(html.matches(r#"<hr class="ornamental-rule">"#).count(), 2);
        let last_rule = html.rfind(r#"<hr class="ornamental-rule">"#).unwrap();
        assert!(last_rule < html.find("Folio").unwrap());
    }

    #[test]
    fn test_no_header_and_footer_fallback_for_empty_resume() {
        let html = render(&ResumeData::default());
        assert!(!html.contains(r#"<header class="header">"#));
        assert!(html.contains(r#"<p class="footer-text">Portfolio</p>"#));
    }

    #[test]
    fn test_education_field_on_its_own_line() {
        let data = ResumeData {
            education: vec![Education {
                degree: "MA".into(),
                field: "Letters".into(),
                institution: "Sorbonne".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let html = render(&data);
        assert!(html.contains(r#"<p class="education-field">Letters</p>"#));
        assert!(!html.contains(r#"<span class="education-dates">"#));
    }

    #[test]
    fn test_project_link_reads_view_project() {
        let data = ResumeData {
            projects: vec![Project {
                name: "Folio".into(),
                url: "https://folio.dev".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert!(render(&data).contains(r#"class="project-link">View Project</a>"#));
    }
}
