//! White, clean, generous whitespace, system fonts.

use crate::models::{ContactKind, ResumeData};
use crate::render::escape::e;
use crate::render::layout::{date_range, display_url, each, strip_scheme, title_with_subtitle, Page};

const STYLES: &str = r#"
    :root {
      --color-bg: #ffffff;
      --color-text: #1a1a1a;
      --color-text-secondary: #555555;
      --color-text-muted: #888888;
      --color-border: #e5e5e5;
      --color-link: #0066cc;
      --color-link-hover: #004499;
      --color-skill-bg: #f5f5f5;
      --font-stack: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto,
        Oxygen, Ubuntu, Cantarell, 'Fira Sans', 'Droid Sans', 'Helvetica Neue',
        Arial, sans-serif;
    }

    body {
      font-family: var(--font-stack);
      background-color: var(--color-bg);
      color: var(--color-text);
      font-size: 16px;
      line-height: 1.7;
    }

    .container {
      max-width: 800px;
      margin: 0 auto;
      padding: 80px 24px;
    }

    /* ---- Header ---- */
    .header {
      margin-bottom: 56px;
    }

    .header__name {
      font-size: 2.5rem;
      font-weight: 700;
      letter-spacing: -0.025em;
      line-height: 1.2;
    }

    .header__title {
      font-size: 1.15rem;
      font-weight: 400;
      color: var(--color-text-secondary);
      margin-top: 4px;
    }

    .header__contact {
      display: flex;
      flex-wrap: wrap;
      gap: 8px 20px;
      margin-top: 20px;
      font-size: 0.9rem;
      color: var(--color-text-muted);
    }

    .header__contact a {
      color: var(--color-link);
      transition: color 0.15s ease;
    }

    .header__contact a:hover {
      color: var(--color-link-hover);
    }

    /* ---- Sections ---- */
    .section {
      margin-bottom: 48px;
    }

    .section:last-child {
      margin-bottom: 0;
    }

    .section__title {
      font-size: 0.8rem;
      font-weight: 600;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--color-text-muted);
      margin-bottom: 20px;
      padding-bottom: 10px;
      border-bottom: 1px solid var(--color-border);
    }

    .summary__text {
      font-size: 1.05rem;
      line-height: 1.8;
      color: var(--color-text-secondary);
    }

    /* ---- Experience / Education ---- */
    .experience-item,
    .education-item {
      margin-bottom: 28px;
    }

    .experience-item:last-child,
    .education-item:last-child {
      margin-bottom: 0;
    }

    .experience-item__header,
    .education-item__header {
      display: flex;
      justify-content: space-between;
      align-items: baseline;
      flex-wrap: wrap;
      gap: 4px 16px;
      margin-bottom: 6px;
    }

    .experience-item__role,
    .education-item__degree {
      font-size: 1.05rem;
      font-weight: 600;
    }

    .experience-item__dates,
    .education-item__dates {
      font-size: 0.85rem;
      color: var(--color-text-muted);
      white-space: nowrap;
    }

    .experience-item__company,
    .education-item__institution {
      font-size: 0.95rem;
      color: var(--color-text-secondary);
    }

    .experience-item__company {
      margin-bottom: 8px;
    }

    .experience-item__description {
      font-size: 0.95rem;
      color: var(--color-text-secondary);
    }

    /* ---- Skills ---- */
    .skills__list {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
    }

    .skills__item {
      font-size: 0.85rem;
      font-weight: 500;
      color: var(--color-text-secondary);
      background-color: var(--color-skill-bg);
      padding: 6px 14px;
      border-radius: 4px;
    }

    /* ---- Projects ---- */
    .project-item {
      margin-bottom: 28px;
    }

    .project-item:last-child {
      margin-bottom: 0;
    }

    .project-item__name {
      font-size: 1.05rem;
      font-weight: 600;
    }

    .project-item__name a {
      color: var(--color-link);
      transition: color 0.15s ease;
    }

    .project-item__name a:hover {
      color: var(--color-link-hover);
    }

    .project-item__description {
      font-size: 0.95rem;
      color: var(--color-text-secondary);
      margin-top: 4px;
    }

    .project-item__technologies {
      display: flex;
      flex-wrap: wrap;
      gap: 6px;
      margin-top: 10px;
    }

    .project-item__tech-tag {
      font-size: 0.78rem;
      font-weight: 500;
      color: var(--color-text-muted);
      background-color: var(--color-skill-bg);
      padding: 3px 10px;
      border-radius: 3px;
    }

    @media (max-width: 600px) {
      .container {
        padding: 48px 20px;
      }

      .header__name {
        font-size: 1.85rem;
      }

      .header__contact {
        flex-direction: column;
        gap: 4px;
      }

      .experience-item__header,
      .education-item__header {
        flex-direction: column;
        gap: 2px;
      }

      .experience-item__dates,
      .education-item__dates {
        order: -1;
      }
    }

    @media print {
      .container {
        padding: 0;
        max-width: 100%;
      }

      body {
        font-size: 12pt;
      }
    }
"#;

pub fn render(data: &ResumeData) -> String {
    let body = format!(
        r#"  <div class="container">
{header}{summary}{experience}{education}{skills}{projects}  </div>"#,
        header = header(data),
        summary = summary(data),
        experience = experience(data),
        education = education(data),
        skills = skills(data),
        projects = projects(data),
    );

    Page {
        title: &title_with_subtitle(&data.name, &data.title, " &ndash; "),
        head_links: "",
        styles: STYLES,
        body: &body,
    }
    .into_html()
}

fn header(data: &ResumeData) -> String {
    if !data.has_header() {
        return String::new();
    }

    let name = if data.name.is_empty() {
        String::new()
    } else {
        format!(r#"      <h1 class="header__name">{}</h1>"#, e(&data.name))
    };
    let title = if data.title.is_empty() {
        String::new()
    } else {
        format!(r#"      <p class="header__title">{}</p>"#, e(&data.title))
    };

    let contacts: Vec<String> = data
        .contacts()
        .map(|contact| {
            let text = match contact.kind {
                ContactKind::Website => strip_scheme(contact.value),
                ContactKind::LinkedIn | ContactKind::GitHub => display_url(contact.value),
                _ => contact.value,
            };
            match contact.kind.href(contact.value) {
                Some(href) if contact.kind.is_external() => format!(
                    r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                    e(&href),
                    e(text)
                ),
                Some(href) => format!(r#"<a href="{}">{}</a>"#, e(&href), e(text)),
                None => format!("<span>{}</span>", e(text)),
            }
        })
        .collect();
    let contact_row = if contacts.is_empty() {
        String::new()
    } else {
        format!(
            r#"      <div class="header__contact">{}</div>"#,
            contacts.join(r#"<span aria-hidden="true">&middot;</span>"#)
        )
    };

    format!(
        r#"    <header class="header">
{name}
{title}
{contact_row}
    </header>
"#
    )
}

fn section(title: &str, content: &str) -> String {
    format!(
        r#"    <section class="section">
      <h2 class="section__title">{title}</h2>
{content}
    </section>
"#
    )
}

fn summary(data: &ResumeData) -> String {
    if data.summary.is_empty() {
        return String::new();
    }
    section(
        "About",
        &format!(r#"      <p class="summary__text">{}</p>"#, e(&data.summary)),
    )
}

fn experience(data: &ResumeData) -> String {
    if data.experience.is_empty() {
        return String::new();
    }
    let items = each(&data.experience, |(_, exp)| {
        let dates = date_range(&exp.start_date, &exp.end_date, " &ndash; ");
        let dates = if dates.is_empty() {
            dates
        } else {
            format!(r#"<span class="experience-item__dates">{dates}</span>"#)
        };
        let description = if exp.description.is_empty() {
            String::new()
        } else {
            format!(
                r#"<p class="experience-item__description">{}</p>"#,
                e(&exp.description)
            )
        };
        format!(
            r#"      <div class="experience-item">
        <div class="experience-item__header">
          <span class="experience-item__role">{role}</span>
          {dates}
        </div>
        <div class="experience-item__company">{company}</div>
        {description}
      </div>
"#,
            role = e(&exp.role),
            company = e(&exp.company),
        )
    });
    section("Experience", &items)
}

fn education(data: &ResumeData) -> String {
    if data.education.is_empty() {
        return String::new();
    }
    let items = each(&data.education, |(_, edu)| {
        let field = if edu.field.is_empty() {
            String::new()
        } else {
            format!(", {}", e(&edu.field))
        };
        let dates = date_range(&edu.start_date, &edu.end_date, " &ndash; ");
        let dates = if dates.is_empty() {
            dates
        } else {
            format!(r#"<span class="education-item__dates">{dates}</span>"#)
        };
        format!(
            r#"      <div class="education-item">
        <div class="education-item__header">
          <span class="education-item__degree">{degree}{field}</span>
          {dates}
        </div>
        <div class="education-item__institution">{institution}</div>
      </div>
"#,
            degree = e(&edu.degree),
            institution = e(&edu.institution),
        )
    });
    section("Education", &items)
}

fn skills(data: &ResumeData) -> String {
    if data.skills.is_empty() {
        return String::new();
    }
    let items = each(&data.skills, |(_, skill)| {
        format!(r#"<span class="skills__item">{}</span>"#, e(skill))
    });
    section(
        "Skills",
        &format!(r#"      <div class="skills__list">{items}</div>"#),
    )
}

fn projects(data: &ResumeData) -> String {
    if data.projects.is_empty() {
        return String::new();
    }
    let items = each(&data.projects, |(_, project)| {
        let name = if project.url.is_empty() {
            e(&project.name).to_string()
        } else {
            format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                e(&project.url),
                e(&project.name)
            )
        };
        let description = if project.description.is_empty() {
            String::new()
        } else {
            format!(
                r#"<p class="project-item__description">{}</p>"#,
                e(&project.description)
            )
        };
        let tech = if project.technologies.is_empty() {
            String::new()
        } else {
            format!(
                r#"<div class="project-item__technologies">{}</div>"#,
                each(&project.technologies, |(_, t)| format!(
                    r#"<span class="project-item__tech-tag">{}</span>"#,
                    e(t)
                ))
            )
        };
        format!(
            r#"      <div class="project-item">
        <div class="project-item__name">{name}</div>
        {description}
        {tech}
      </div>
"#
        )
    });
    section("Projects", &items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Education, Experience, Project};

    #[test]
    fn test_contacts_are_joined_with_middots() {
        let data = ResumeData {
            email: "jane@x.com".into(),
            location: "Berlin".into(),
            ..Default::default()
        };
        let html = render(&data);
        assert!(html.contains(
            r#"<a href="mailto:jane@x.com">jane@x.com</a><span aria-hidden="true">&middot;</span><span>Berlin</span>"#
        ));
    }

    #[test]
    fn test_profile_links_drop_scheme_in_text() {
        let data = ResumeData {
            website: "https://www.jane.dev".into(),
            linkedin: "https://www.linkedin.com/in/jane".into(),
            ..Default::default()
        };
        let html = render(&data);
        assert!(html.contains(r#">www.jane.dev</a>"#));
        assert!(html.contains(r#">linkedin.com/in/jane</a>"#));
        assert!(html.contains(r#"href="https://www.linkedin.com/in/jane""#));
    }

    #[test]
    fn test_dates_and_field() {
        let data = ResumeData {
            experience: vec![Experience {
                role: "Dev".into(),
                start_date: "2020".into(),
                ..Default::default()
            }],
            education: vec![Education {
                degree: "BSc".into(),
                field: "Physics".into(),
                start_date: "2014".into(),
                end_date: "2018".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let html = render(&data);
        assert!(html.contains(r#"<span class="experience-item__dates">2020</span>"#));
        assert!(html.contains("BSc, Physics"));
        assert!(html.contains("2014 &ndash; 2018"));
    }

    #[test]
    fn test_project_name_links_only_with_url() {
        let data = ResumeData {
            projects: vec![
                Project {
                    name: "Linked".into(),
                    url: "https://x.io".into(),
                    ..Default::default()
                },
                Project {
                    name: "Plain".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let html = render(&data);
        assert!(html.contains(r#"<a href="https://x.io" target="_blank" rel="noopener noreferrer">Linked</a>"#));
        assert!(html.contains(r#"<div class="project-item__name">Plain</div>"#));
        assert!(!html.contains("project-item__technologies\">"));
    }

    #[test]
    fn test_title_uses_en_dash() {
        let data = ResumeData {
            name: "Jane".into(),
            title: "Engineer".into(),
            ..Default::default()
        };
        assert!(render(&data).contains("<title>Jane &ndash; Engineer</title>"));
    }
}
