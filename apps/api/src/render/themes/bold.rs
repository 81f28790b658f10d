//! Dark background, large type, gradient accents.

use crate::models::{ContactKind, ResumeData};
use crate::render::escape::e;
use crate::render::layout::{date_range, each, when, Page};

const STYLES: &str = r#"
    :root {
      --bg-primary: #0a0a0a;
      --bg-surface: #111111;
      --bg-surface-hover: #1a1a1a;
      --text-primary: #ffffff;
      --text-secondary: #a0a0a0;
      --text-muted: #666666;
      --gradient-start: #3b82f6;
      --gradient-end: #8b5cf6;
      --border-subtle: #222222;
      --font-sans: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto,
        'Helvetica Neue', Arial, sans-serif;
    }

    body {
      font-family: var(--font-sans);
      background-color: var(--bg-primary);
      color: var(--text-primary);
    }

    /* --- Header --- */
    .header {
      padding: 80px 24px 60px;
      text-align: center;
      position: relative;
      overflow: hidden;
    }

    .header::before {
      content: '';
      position: absolute;
      top: -40%;
      left: 50%;
      transform: translateX(-50%);
      width: 600px;
      height: 600px;
      background: radial-gradient(circle, rgba(59,130,246,0.12) 0%, rgba(139,92,246,0.06) 50%, transparent 70%);
      pointer-events: none;
    }

    .header-inner {
      position: relative;
      max-width: 800px;
      margin: 0 auto;
    }

    .name {
      font-size: 4rem;
      font-weight: 800;
      letter-spacing: -0.03em;
      line-height: 1.1;
      background: linear-gradient(135deg, var(--gradient-start), var(--gradient-end));
      -webkit-background-clip: text;
      -webkit-text-fill-color: transparent;
      background-clip: text;
      margin-bottom: 12px;
    }

    .title {
      font-size: 1.35rem;
      font-weight: 400;
      color: var(--text-secondary);
      margin-bottom: 28px;
    }

    .contact-row {
      display: flex;
      flex-wrap: wrap;
      justify-content: center;
      align-items: center;
      gap: 8px;
      font-size: 0.95rem;
      color: var(--text-muted);
    }

    .contact-link,
    .contact-item {
      color: var(--text-secondary);
      transition: color 0.2s ease;
    }

    .contact-link:hover {
      color: var(--gradient-start);
    }

    .contact-separator {
      color: var(--border-subtle);
      user-select: none;
    }

    /* --- Layout --- */
    .main-content {
      max-width: 860px;
      margin: 0 auto;
      padding: 0 24px 80px;
    }

    .section {
      margin-bottom: 64px;
    }

    .section-heading {
      font-size: 1.75rem;
      font-weight: 700;
      letter-spacing: -0.02em;
      margin-bottom: 32px;
      padding-bottom: 12px;
      position: relative;
      display: inline-block;
    }

    .section-heading::after {
      content: '';
      position: absolute;
      bottom: 0;
      left: 0;
      width: 100%;
      height: 3px;
      border-radius: 2px;
      background: linear-gradient(90deg, var(--gradient-start), var(--gradient-end));
    }

    .summary-text {
      font-size: 1.15rem;
      line-height: 1.8;
      color: var(--text-secondary);
      max-width: 720px;
    }

    /* --- Entries --- */
    .entries {
      display: flex;
      flex-direction: column;
      gap: 36px;
    }

    .entry {
      padding: 28px;
      background: var(--bg-surface);
      border: 1px solid var(--border-subtle);
      border-radius: 12px;
      transition: border-color 0.2s ease, background-color 0.2s ease;
    }

    .entry:hover {
      border-color: #333333;
      background-color: var(--bg-surface-hover);
    }

    .entry-header {
      display: flex;
      justify-content: space-between;
      align-items: flex-start;
      gap: 16px;
      margin-bottom: 12px;
    }

    .entry-title {
      font-size: 1.2rem;
      font-weight: 700;
    }

    .entry-subtitle {
      font-size: 1rem;
      color: var(--text-secondary);
      margin-top: 4px;
    }

    .entry-date {
      font-size: 0.85rem;
      color: var(--text-muted);
      white-space: nowrap;
      flex-shrink: 0;
      padding-top: 4px;
    }

    .entry-description {
      font-size: 0.95rem;
      line-height: 1.7;
      color: var(--text-secondary);
    }

    /* --- Skills --- */
    .skills-grid {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
    }

    .skill-badge {
      position: relative;
      display: inline-block;
      padding: 10px 20px;
      font-size: 0.9rem;
      font-weight: 500;
      background: var(--bg-surface);
      border-radius: 9999px;
      border: 1px solid transparent;
      background-clip: padding-box;
    }

    .skill-badge::before {
      content: '';
      position: absolute;
      inset: -1px;
      border-radius: 9999px;
      padding: 1px;
      background: linear-gradient(135deg, var(--gradient-start), var(--gradient-end));
      -webkit-mask: linear-gradient(#fff 0 0) content-box, linear-gradient(#fff 0 0);
      -webkit-mask-composite: xor;
      mask-composite: exclude;
      pointer-events: none;
    }

    /* --- Projects --- */
    .projects-grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(340px, 1fr));
      gap: 24px;
    }

    .project-card {
      padding: 28px;
      background: var(--bg-surface);
      border: 1px solid var(--border-subtle);
      border-radius: 12px;
      transition: border-color 0.25s ease, transform 0.25s ease, background-color 0.25s ease;
    }

    .project-card:hover {
      border-color: #333333;
      background-color: var(--bg-surface-hover);
      transform: translateY(-2px);
    }

    .project-card-header {
      margin-bottom: 12px;
    }

    .project-name {
      font-size: 1.15rem;
      font-weight: 700;
      background: linear-gradient(135deg, var(--gradient-start), var(--gradient-end));
      -webkit-background-clip: text;
      -webkit-text-fill-color: transparent;
      background-clip: text;
      display: inline;
    }

    .project-description {
      font-size: 0.9rem;
      line-height: 1.7;
      color: var(--text-secondary);
      margin-bottom: 16px;
    }

    .project-tech {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .tech-tag {
      font-size: 0.78rem;
      font-weight: 500;
      padding: 4px 12px;
      border-radius: 6px;
      background: rgba(59, 130, 246, 0.1);
      color: var(--gradient-start);
      border: 1px solid rgba(59, 130, 246, 0.15);
    }

    @media (max-width: 768px) {
      .header {
        padding: 56px 20px 40px;
      }

      .name {
        font-size: 2.6rem;
      }

      .main-content {
        padding: 0 20px 60px;
      }

      .entry-header {
        flex-direction: column;
        gap: 4px;
      }

      .projects-grid {
        grid-template-columns: 1fr;
      }

      .entry,
      .project-card {
        padding: 20px;
      }
    }

    @media (max-width: 480px) {
      .name {
        font-size: 2rem;
      }

      .main-content {
        padding: 0 16px 48px;
      }

      .skill-badge {
        padding: 8px 16px;
        font-size: 0.82rem;
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
        r#"{header}  <main class="main-content">
{summary}{experience}{education}{skills}{projects}  </main>"#,
        header = when(data.has_header(), || header(data)),
        summary = when(!data.summary.is_empty(), || {
            section(
                "About",
                &format!(r#"      <p class="summary-text">{}</p>"#, e(&data.summary)),
            )
        }),
        experience = when(!data.experience.is_empty(), || experience(data)),
        education = when(!data.education.is_empty(), || education(data)),
        skills = when(!data.skills.is_empty(), || skills(data)),
        projects = when(!data.projects.is_empty(), || projects(data)),
    );

    Page {
        title: &title,
        head_links: "",
        styles: STYLES,
        body: &body,
    }
    .into_html()
}

fn header(data: &ResumeData) -> String {
    let contacts: Vec<String> = data
        .contacts()
        .map(|contact| {
            let value = contact.value;
            match contact.kind {
                ContactKind::Email => format!(
                    r#"<a href="mailto:{0}" class="contact-link">{0}</a>"#,
                    e(value)
                ),
                ContactKind::Phone | ContactKind::Location => {
                    format!(r#"<span class="contact-item">{}</span>"#, e(value))
                }
                ContactKind::Website => format!(
                    r#"<a href="{0}" {EXTERNAL} class="contact-link">{0}</a>"#,
                    e(value)
                ),
                ContactKind::LinkedIn | ContactKind::GitHub => format!(
                    r#"<a href="{}" {EXTERNAL} class="contact-link">{}</a>"#,
                    e(value),
                    contact.kind.label()
                ),
            }
        })
        .collect();

    format!(
        r#"  <header class="header">
    <div class="header-inner">
      {name}
      {title}
      {contacts}
    </div>
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
            r#"<div class="contact-row">{}</div>"#,
            contacts.join(r#"<span class="contact-separator">/</span>"#)
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

fn entry_date(start: &str, end: &str) -> String {
    let dates = date_range(start, end, " &mdash; ");
    when(!dates.is_empty(), || {
        format!(r#"<span class="entry-date">{dates}</span>"#)
    })
}

fn experience(data: &ResumeData) -> String {
    let entries = each(&data.experience, |(_, exp)| {
        format!(
            r#"        <div class="entry">
          <div class="entry-header">
            <div>
              <h3 class="entry-title">{role}</h3>
              <p class="entry-subtitle">{company}</p>
            </div>
            {date}
          </div>
          {description}
        </div>
"#,
            role = e(&exp.role),
            company = e(&exp.company),
            date = entry_date(&exp.start_date, &exp.end_date),
            description = when(!exp.description.is_empty(), || format!(
                r#"<p class="entry-description">{}</p>"#,
                e(&exp.description)
            )),
        )
    });
    section(
        "Experience",
        &format!("      <div class=\"entries\">\n{entries}      </div>"),
    )
}

fn education(data: &ResumeData) -> String {
    let entries = each(&data.education, |(_, edu)| {
        format!(
            r#"        <div class="entry">
          <div class="entry-header">
            <div>
              <h3 class="entry-title">{degree}{field}</h3>
              <p class="entry-subtitle">{institution}</p>
            </div>
            {date}
          </div>
        </div>
"#,
            degree = e(&edu.degree),
            field = when(!edu.field.is_empty(), || format!(" in {}", e(&edu.field))),
            institution = e(&edu.institution),
            date = entry_date(&edu.start_date, &edu.end_date),
        )
    });
    section(
        "Education",
        &format!("      <div class=\"entries\">\n{entries}      </div>"),
    )
}

fn skills(data: &ResumeData) -> String {
    let badges = each(&data.skills, |(_, skill)| {
        format!(r#"<span class="skill-badge">{}</span>"#, e(skill))
    });
    section(
        "Skills",
        &format!(r#"      <div class="skills-grid">{badges}</div>"#),
    )
}

fn projects(data: &ResumeData) -> String {
    let cards = each(&data.projects, |(_, project)| {
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
            r#"        <div class="project-card">
          <div class="project-card-header">{name}</div>
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
        &format!("      <div class=\"projects-grid\">\n{cards}      </div>"),
    )
}
