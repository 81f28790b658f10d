//! Cinematic dark mode: glass cards, ambient gradients, reveal on scroll.

use crate::models::{ContactKind, ResumeData};
use crate::render::escape::e;
use crate::render::layout::{date_range, each, when, Page};

const STYLES: &str = r#"
    :root {
      --bg-deep: #050506;
      --text-primary: #EDEDEF;
      --text-secondary: #B4B4B8;
      --text-muted: #8A8F98;
      --text-faint: #5C5F66;
      --accent: #5E6AD2;
      --accent-hover: #6872D9;
      --accent-glow: rgba(94, 106, 210, 0.3);
      --accent-subtle: rgba(94, 106, 210, 0.12);
      --border: rgba(255, 255, 255, 0.06);
      --border-hover: rgba(255, 255, 255, 0.1);
      --font-sans: "Inter", system-ui, -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
      --font-mono: "JetBrains Mono", "Fira Code", "SF Mono", monospace;
      --radius-card: 16px;
      --radius-btn: 8px;
      --radius-pill: 9999px;
    }

    body {
      font-family: var(--font-sans);
      background: radial-gradient(ellipse at top, #0a0a0f 0%, #050506 50%, #020203 100%);
      color: var(--text-primary);
      font-size: 15px;
      line-height: 1.6;
      min-height: 100vh;
      position: relative;
      overflow-x: hidden;
    }

    body::before,
    body::after {
      content: '';
      position: fixed;
      filter: blur(150px);
      pointer-events: none;
      z-index: 0;
    }

    body::before {
      top: -200px;
      right: -150px;
      width: 800px;
      height: 800px;
      background: radial-gradient(circle, rgba(94, 106, 210, 0.15) 0%, transparent 70%);
      animation: float 10s ease-in-out infinite;
    }

    body::after {
      bottom: -250px;
      left: -200px;
      width: 900px;
      height: 900px;
      background: radial-gradient(circle, rgba(120, 80, 200, 0.1) 0%, transparent 70%);
      animation: float 8s ease-in-out infinite reverse;
    }

    .grid-overlay {
      position: fixed;
      inset: 0;
      pointer-events: none;
      z-index: 0;
      background-image:
        repeating-linear-gradient(0deg, rgba(255, 255, 255, 0.02) 0px, rgba(255, 255, 255, 0.02) 1px, transparent 1px, transparent 80px),
        repeating-linear-gradient(90deg, rgba(255, 255, 255, 0.02) 0px, rgba(255, 255, 255, 0.02) 1px, transparent 1px, transparent 80px);
    }

    @keyframes float {
      0%, 100% { transform: translateY(0px); }
      50% { transform: translateY(-20px); }
    }

    .section-animate {
      opacity: 0;
      transform: translateY(20px);
      transition: opacity 0.6s ease, transform 0.6s ease;
    }

    .section-animate.visible {
      opacity: 1;
      transform: translateY(0);
    }

    @media (prefers-reduced-motion: reduce) {
      .section-animate {
        opacity: 1;
        transform: none;
        transition: none;
      }
    }

    .container {
      position: relative;
      z-index: 1;
      max-width: 780px;
      margin: 0 auto;
      padding: 4rem 1.5rem 6rem;
    }

    /* header */
    .header {
      text-align: center;
      padding-bottom: 4rem;
      margin-bottom: 1rem;
    }

    .header-content {
      display: flex;
      flex-direction: column;
      align-items: center;
      gap: 0.75rem;
    }

    .header-name {
      font-size: 3.5rem;
      font-weight: 700;
      letter-spacing: -0.03em;
      line-height: 1.1;
      background: linear-gradient(to bottom, #fff, rgba(255, 255, 255, 0.7));
      -webkit-background-clip: text;
      -webkit-text-fill-color: transparent;
      background-clip: text;
    }

    .header-title {
      font-size: 1.2rem;
      color: var(--text-muted);
      letter-spacing: 0.01em;
      margin-top: 0.25rem;
    }

    .contact-row {
      display: flex;
      flex-wrap: wrap;
      justify-content: center;
      gap: 0.5rem;
      margin-top: 1.5rem;
    }

    .contact-pill {
      display: inline-flex;
      align-items: center;
      gap: 0.4rem;
      padding: 0.4rem 0.85rem;
      font-size: 0.8rem;
      color: var(--text-secondary);
      background: rgba(255, 255, 255, 0.05);
      border: 1px solid var(--border);
      border-radius: var(--radius-pill);
      backdrop-filter: blur(12px);
      -webkit-backdrop-filter: blur(12px);
      transition: all 0.25s ease;
    }

    a.contact-pill:hover {
      color: var(--text-primary);
      background: rgba(255, 255, 255, 0.08);
      border-color: var(--border-hover);
    }

    .contact-pill svg {
      flex-shrink: 0;
      opacity: 0.6;
    }

    /* sections */
    .section {
      margin-bottom: 5rem;
    }

    .section-label {
      display: flex;
      align-items: center;
      gap: 0.6rem;
      margin-bottom: 1.75rem;
    }

    .label-dot {
      width: 6px;
      height: 6px;
      border-radius: 50%;
      background: var(--accent);
      box-shadow: 0 0 8px var(--accent-glow);
      flex-shrink: 0;
    }

    .label-text {
      font-family: var(--font-mono);
      font-size: 0.7rem;
      font-weight: 500;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--text-muted);
    }

    .glass-card {
      background: linear-gradient(135deg, rgba(255, 255, 255, 0.08) 0%, rgba(255, 255, 255, 0.02) 100%);
      border: 1px solid var(--border);
      border-radius: var(--radius-card);
      padding: 1.75rem;
      backdrop-filter: blur(20px);
      -webkit-backdrop-filter: blur(20px);
      box-shadow: 0 0 0 1px rgba(255, 255, 255, 0.06), 0 2px 20px rgba(0, 0, 0, 0.4), 0 0 40px rgba(0, 0, 0, 0.2);
      transition: all 0.35s ease;
    }

    .glass-card:hover {
      border-color: var(--border-hover);
      box-shadow: 0 0 0 1px rgba(255, 255, 255, 0.08), 0 2px 20px rgba(0, 0, 0, 0.4), 0 0 80px rgba(94, 106, 210, 0.1);
    }

    .entries-grid {
      display: flex;
      flex-direction: column;
      gap: 1rem;
    }

    .summary-card {
      border-left: 3px solid var(--accent);
    }

    .summary-text {
      font-size: 1.05rem;
      line-height: 1.8;
      color: var(--text-secondary);
    }

    /* experience and education */
    .experience-header,
    .education-header {
      display: flex;
      justify-content: space-between;
      align-items: flex-start;
      gap: 1rem;
      flex-wrap: wrap;
    }

    .experience-header {
      margin-bottom: 0.75rem;
    }

    .experience-info,
    .education-info {
      flex: 1;
      min-width: 180px;
    }

    .experience-role,
    .education-degree {
      font-size: 1.1rem;
      font-weight: 600;
      letter-spacing: -0.01em;
      line-height: 1.3;
    }

    .experience-company,
    .education-institution {
      font-size: 0.9rem;
      color: var(--text-muted);
      margin-top: 0.2rem;
    }

    .education-field {
      font-weight: 400;
      color: var(--accent);
    }

    .date-badge {
      display: inline-block;
      font-family: var(--font-mono);
      font-size: 0.7rem;
      color: var(--text-faint);
      background: rgba(255, 255, 255, 0.04);
      border: 1px solid var(--border);
      border-radius: var(--radius-pill);
      padding: 0.25rem 0.7rem;
      white-space: nowrap;
      flex-shrink: 0;
    }

    .experience-description {
      font-size: 0.92rem;
      line-height: 1.75;
      color: var(--text-secondary);
      white-space: pre-wrap;
    }

    /* skills */
    .skills-grid {
      display: flex;
      flex-wrap: wrap;
      gap: 0.5rem;
    }

    .skill-pill {
      display: inline-block;
      padding: 0.4rem 0.9rem;
      font-size: 0.8rem;
      font-weight: 500;
      color: var(--text-secondary);
      background: rgba(255, 255, 255, 0.04);
      border: 1px solid var(--border);
      border-radius: var(--radius-pill);
      transition: all 0.25s ease;
    }

    .skill-pill:hover {
      color: var(--accent-hover);
      border-color: rgba(94, 106, 210, 0.3);
      background: var(--accent-subtle);
    }

    /* projects */
    .projects-grid {
      display: grid;
      grid-template-columns: 1fr;
      gap: 1rem;
    }

    .project-card {
      position: relative;
    }

    .project-header {
      display: flex;
      justify-content: space-between;
      align-items: center;
      gap: 0.75rem;
      margin-bottom: 0.6rem;
    }

    .project-name {
      font-size: 1.05rem;
      font-weight: 600;
      letter-spacing: -0.01em;
    }

    .project-link {
      display: inline-flex;
      align-items: center;
      gap: 0.35rem;
      font-size: 0.75rem;
      font-weight: 500;
      color: var(--accent);
      padding: 0.3rem 0.65rem;
      border: 1px solid rgba(94, 106, 210, 0.2);
      border-radius: var(--radius-btn);
      transition: all 0.25s ease;
      flex-shrink: 0;
    }

    .project-link:hover {
      color: var(--accent-hover);
      background: var(--accent-subtle);
    }

    .project-description {
      font-size: 0.92rem;
      line-height: 1.7;
      color: var(--text-secondary);
      margin-bottom: 0.75rem;
    }

    .project-technologies {
      display: flex;
      flex-wrap: wrap;
      gap: 0.35rem;
    }

    .tech-pill {
      display: inline-block;
      padding: 0.2rem 0.55rem;
      font-family: var(--font-mono);
      font-size: 0.68rem;
      color: var(--text-muted);
      background: rgba(255, 255, 255, 0.04);
      border: 1px solid var(--border);
      border-radius: var(--radius-pill);
    }

    /* footer */
    .footer {
      text-align: center;
      padding-top: 3rem;
      margin-top: 2rem;
      border-top: 1px solid var(--border);
    }

    .footer-accent {
      display: inline-block;
      width: 4px;
      height: 4px;
      border-radius: 50%;
      background: var(--accent);
      margin-bottom: 0.75rem;
      box-shadow: 0 0 8px var(--accent-glow);
    }

    .footer-text {
      font-size: 0.75rem;
      color: var(--text-faint);
      letter-spacing: 0.04em;
    }

    @media (min-width: 769px) {
      .container {
        padding: 6rem 2rem 8rem;
      }

      .projects-grid {
        grid-template-columns: repeat(2, 1fr);
      }
    }

    @media (max-width: 768px) {
      .container {
        padding: 3rem 1.25rem 4rem;
      }

      .header-name {
        font-size: 2.5rem;
      }

      .section {
        margin-bottom: 3.5rem;
      }

      .glass-card {
        padding: 1.25rem;
      }

      .experience-header,
      .education-header {
        flex-direction: column;
        gap: 0.5rem;
      }
    }

    @media print {
      body {
        background: #fff;
        color: #1a1a1a;
      }

      body::before,
      body::after,
      .grid-overlay {
        display: none;
      }

      .glass-card {
        background: #f8f8f8;
        border-color: #ddd;
        box-shadow: none;
        backdrop-filter: none;
      }

      .header-name {
        background: none;
        -webkit-text-fill-color: #1a1a1a;
        color: #1a1a1a;
      }

      .section-animate {
        opacity: 1;
        transform: none;
      }
    }
"#;

/// Sections start hidden and are revealed by `SCRIPT`; without scripts they show at once.
const NOSCRIPT: &str = r#"  <noscript><style>.section-animate { opacity: 1; transform: none; }</style></noscript>
"#;

const SCRIPT: &str = r#"  <script>
    (function() {
      var observer = new IntersectionObserver(function(entries) {
        entries.forEach(function(entry) {
          if (entry.isIntersecting) {
            entry.target.classList.add('visible');
            observer.unobserve(entry.target);
          }
        });
      }, { threshold: 0.1, rootMargin: '0px 0px -40px 0px' });

      document.querySelectorAll('.section-animate').forEach(function(el) {
        observer.observe(el);
      });
    })();
  </script>"#;

const EXTERNAL: &str = r#"target="_blank" rel="noopener noreferrer""#;

const SVG_OPEN: &str = r#"<svg width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">"#;

fn icon_paths(kind: ContactKind) -> &'static str {
    match kind {
        ContactKind::Email => {
            r#"<rect x="2" y="4" width="20" height="16" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#
        }
        ContactKind::Phone => {
            r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.127.96.361 1.903.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.907.339 1.85.573 2.81.7A2 2 0 0 1 22 16.92z"/>"#
        }
        ContactKind::Location => {
            r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/>"#
        }
        ContactKind::Website => {
            r#"<circle cx="12" cy="12" r="10"/><line x1="2" y1="12" x2="22" y2="12"/><path d="M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z"/>"#
        }
        ContactKind::LinkedIn => {
            r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect x="2" y="9" width="4" height="12"/><circle cx="4" cy="4" r="2"/>"#
        }
        ContactKind::GitHub => {
            r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/>"#
        }
    }
}

const EXTERNAL_ICON: &str = r#"<path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/><polyline points="15 3 21 3 21 9"/><line x1="10" y1="14" x2="21" y2="3"/>"#;

pub fn render(data: &ResumeData) -> String {
    let (title, footer) = if data.name.is_empty() {
        ("Portfolio".to_string(), "Portfolio".to_string())
    } else {
        (
            format!("{} &mdash; Portfolio", e(&data.name)),
            e(&data.name).to_string(),
        )
    };

    let body = format!(
        r#"  <div class="grid-overlay"></div>
  <div class="container">
{header}{summary}{experience}{education}{skills}{projects}    <footer class="footer">
      <div class="footer-accent"></div>
      <p class="footer-text">{footer}</p>
    </footer>
  </div>
{SCRIPT}"#,
        header = when(data.has_header(), || header(data)),
        summary = when(!data.summary.is_empty(), || {
            section(
                "About",
                &format!(
                    r#"      <div class="glass-card summary-card">
        <p class="summary-text">{}</p>
      </div>"#,
                    e(&data.summary)
                ),
            )
        }),
        experience = when(!data.experience.is_empty(), || experience(data)),
        education = when(!data.education.is_empty(), || education(data)),
        skills = when(!data.skills.is_empty(), || skills(data)),
        projects = when(!data.projects.is_empty(), || projects(data)),
    );

    Page {
        title: &title,
        head_links: NOSCRIPT,
        styles: STYLES,
        body: &body,
    }
    .into_html()
}

fn header(data: &ResumeData) -> String {
    let pills: String = data
        .contacts()
        .map(|contact| {
            let icon = format!("{SVG_OPEN}{}</svg>", icon_paths(contact.kind));
            let text = match contact.kind {
                ContactKind::LinkedIn | ContactKind::GitHub => contact.kind.label().to_string(),
                _ => e(contact.value).to_string(),
            };
            match contact.kind.href(contact.value) {
                Some(href) if contact.kind.is_external() => format!(
                    r#"<a href="{}" {EXTERNAL} class="contact-pill">{icon}{text}</a>"#,
                    e(&href)
                ),
                Some(href) => {
                    format!(r#"<a href="{}" class="contact-pill">{icon}{text}</a>"#, e(&href))
                }
                None => format!(r#"<span class="contact-pill">{icon}{text}</span>"#),
            }
        })
        .collect();

    format!(
        r#"    <header class="header section-animate">
      <div class="header-content">
        {name}
        {title}
        {contacts}
      </div>
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
        contacts = when(!pills.is_empty(), || format!(
            r#"<div class="contact-row">{pills}</div>"#
        )),
    )
}

fn section(label: &str, content: &str) -> String {
    format!(
        r#"    <section class="section section-animate">
      <div class="section-label">
        <span class="label-dot"></span>
        <span class="label-text">{label}</span>
      </div>
{content}
    </section>
"#
    )
}

fn date_badge(start: &str, end: &str) -> String {
    let dates = date_range(start, end, " &mdash; ");
    when(!dates.is_empty(), || {
        format!(r#"<span class="date-badge">{dates}</span>"#)
    })
}

fn experience(data: &ResumeData) -> String {
    let cards = each(&data.experience, |(_, exp)| {
        format!(
            r#"        <div class="glass-card experience-card">
          <div class="experience-header">
            <div class="experience-info">
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
            dates = date_badge(&exp.start_date, &exp.end_date),
            description = when(!exp.description.is_empty(), || format!(
                r#"<p class="experience-description">{}</p>"#,
                e(&exp.description)
            )),
        )
    });
    section(
        "Experience",
        &format!("      <div class=\"entries-grid\">\n{cards}      </div>"),
    )
}

fn education(data: &ResumeData) -> String {
    let cards = each(&data.education, |(_, edu)| {
        format!(
            r#"        <div class="glass-card education-card">
          <div class="education-header">
            <div class="education-info">
              <h3 class="education-degree">{degree}{field}</h3>
              <p class="education-institution">{institution}</p>
            </div>
            {dates}
          </div>
        </div>
"#,
            degree = e(&edu.degree),
            field = when(!edu.field.is_empty(), || format!(
                r#" <span class="education-field">in {}</span>"#,
                e(&edu.field)
            )),
            institution = e(&edu.institution),
            dates = date_badge(&edu.start_date, &edu.end_date),
        )
    });
    section(
        "Education",
        &format!("      <div class=\"entries-grid\">\n{cards}      </div>"),
    )
}

fn skills(data: &ResumeData) -> String {
    let pills = each(&data.skills, |(_, skill)| {
        format!(r#"<span class="skill-pill">{}</span>"#, e(skill))
    });
    section(
        "Skills",
        &format!(r#"      <div class="skills-grid">{pills}</div>"#),
    )
}

fn projects(data: &ResumeData) -> String {
    let cards = each(&data.projects, |(_, project)| {
        format!(
            r#"        <div class="glass-card project-card">
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
                r#"<a href="{}" {EXTERNAL} class="project-link">{SVG_OPEN}{EXTERNAL_ICON}</svg><span>View</span></a>"#,
                e(&project.url)
            )),
            description = when(!project.description.is_empty(), || format!(
                r#"<p class="project-description">{}</p>"#,
                e(&project.description)
            )),
            tech = when(!project.technologies.is_empty(), || format!(
                r#"<div class="project-technologies">{}</div>"#,
                each(&project.technologies, |(_, t)| format!(
                    r#"<span class="tech-pill">{}</span>"#,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Education, Experience, Project};

    #[test]
    fn test_sections_stay_visible_without_scripts() {
        let html = render(&ResumeData {
            summary: "Ships".into(),
            ..Default::default()
        });
        let head = &html[..html.find("</head>").unwrap()];
        assert!(head.contains(
            "<noscript><style>.section-animate { opacity: 1; transform: none; }</style></noscript>"
        ));
        assert!(STYLES.contains("@media (prefers-reduced-motion: reduce)"));
    }

    #[test]
    fn test_phone_is_a_link_location_is_not() {
        let data = ResumeData {
            phone: "+1 555".into(),
            location: "Oslo".into(),
            ..Default::default()
        };
        let html = render(&data);
        assert!(html.contains(r#"<a href="tel:+1 555" class="contact-pill">"#));
        assert!(html.contains(r#"<span class="contact-pill">"#));
        assert!(html.contains("</svg>Oslo</span>"));
    }

    #[test]
    fn test_every_section_is_labelled_and_animated() {
        let data = ResumeData {
            summary: "Ships".into(),
            experience: vec![Experience::default()],
            education: vec![Education::default()],
            skills: vec!["Rust".into()],
            projects: vec![Project::default()],
            ..Default::default()
        };
        let html = render(&data);
        assert_eq!(
            html.matches(r#"<section class="section section-animate">"#).count(),
            5
        );
        for label in ["About", "Experience", "Education", "Skills", "Projects"] {
            assert!(html.contains(&format!(r#"<span class="label-text">{label}</span>"#)));
        }
    }

    #[test]
    fn test_project_view_link_only_with_url() {
        let data = ResumeData {
            projects: vec![
                Project {
                    name: "Relay".into(),
                    url: "https://relay.dev".into(),
                    ..Default::default()
                },
                Project {
                    name: "Notes".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let html = render(&data);
        assert_eq!(html.matches(r#"class="project-link""#).count(), 1);
        assert!(html.contains("<span>View</span></a>"));
    }

    #[test]
    fn test_education_field_and_date_badge() {
        let data = ResumeData {
            education: vec![Education {
                degree: "MSc".into(),
                field: "Physics".into(),
                start_date: "2018".into(),
                end_date: "2020".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let html = render(&data);
        assert!(html.contains(r#"MSc <span class="education-field">in Physics</span>"#));
        assert!(html.contains(r#"<span class="date-badge">2018 &mdash; 2020</span>"#));
    }

    #[test]
    fn test_untitled_page_and_footer() {
        let html = render(&ResumeData::default());
        assert!(html.contains("<title>Portfolio</title>"));
        assert!(html.contains(r#"<p class="footer-text">Portfolio</p>"#));
        assert!(!html.contains("<header"));
        assert!(html.contains("classList.add('visible')"));
    }
}
