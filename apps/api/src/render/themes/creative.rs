//! Asymmetric grid, pastels, CSS animations, card-based.

use crate::models::{ContactKind, ResumeData};
use crate::render::escape::e;
use crate::render::layout::{date_range, each, title_with_subtitle, when, Page};

/// Pastel skill chip variants, cycled by position.
const SKILL_COLORS: usize = 5;
/// Project card widths, cycled by position.
const PROJECT_SIZES: usize = 3;

const STYLES: &str = r#"
    :root {
      --color-bg: #faf5ff;
      --color-surface: #ffffff;
      --color-text: #1e1b4b;
      --color-text-muted: #6b7280;
      --color-pink: #ec4899;
      --color-purple: #a855f7;
      --color-blue: #3b82f6;
      --color-lavender: #c4b5fd;
      --color-rose: #fecdd3;
      --color-sky: #bae6fd;
      --color-mint: #a7f3d0;
      --color-peach: #fed7aa;
      --shadow-sm: 0 1px 3px rgba(0, 0, 0, 0.06), 0 1px 2px rgba(0, 0, 0, 0.04);
      --shadow-md: 0 4px 12px rgba(0, 0, 0, 0.06), 0 2px 6px rgba(0, 0, 0, 0.04);
      --shadow-lg: 0 10px 30px rgba(0, 0, 0, 0.08), 0 4px 12px rgba(0, 0, 0, 0.04);
      --radius: 16px;
      --radius-sm: 10px;
      --radius-full: 9999px;
    }

    body {
      font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
      background-color: var(--color-bg);
      color: var(--color-text);
      line-height: 1.7;
    }

    body::before,
    body::after {
      content: "";
      position: fixed;
      border-radius: 50%;
      pointer-events: none;
      z-index: 0;
    }

    body::before {
      top: -40%;
      right: -20%;
      width: 600px;
      height: 600px;
      background: radial-gradient(circle, rgba(168, 85, 247, 0.08) 0%, transparent 70%);
    }

    body::after {
      bottom: -30%;
      left: -15%;
      width: 500px;
      height: 500px;
      background: radial-gradient(circle, rgba(236, 72, 153, 0.07) 0%, transparent 70%);
    }

    .wrapper {
      position: relative;
      z-index: 1;
      max-width: 960px;
      margin: 0 auto;
      padding: 48px 24px 80px;
    }

    @keyframes fadeInUp {
      from { opacity: 0; transform: translateY(28px); }
      to { opacity: 1; transform: translateY(0); }
    }

    @keyframes fadeIn {
      from { opacity: 0; }
      to { opacity: 1; }
    }

    @keyframes scaleIn {
      from { opacity: 0; transform: scale(0.92); }
      to { opacity: 1; transform: scale(1); }
    }

    @keyframes slideInLeft {
      from { opacity: 0; transform: translateX(-20px); }
      to { opacity: 1; transform: translateX(0); }
    }

    @keyframes float {
      0%, 100% { transform: translateY(0); }
      50% { transform: translateY(-4px); }
    }

    @keyframes shimmer {
      0% { background-position: -200% center; }
      100% { background-position: 200% center; }
    }

    .fade-in {
      opacity: 0;
      animation: fadeInUp 0.7s ease-out forwards;
    }

    /* ========== Header ========== */
    .header {
      text-align: center;
      padding: 48px 24px 40px;
      margin-bottom: 40px;
      animation: fadeIn 0.8s ease-out forwards;
    }

    .header-name {
      font-size: 3rem;
      font-weight: 800;
      letter-spacing: -0.03em;
      line-height: 1.15;
      background: linear-gradient(135deg, var(--color-purple), var(--color-pink), var(--color-blue));
      background-size: 200% auto;
      -webkit-background-clip: text;
      -webkit-text-fill-color: transparent;
      background-clip: text;
      animation: shimmer 6s linear infinite;
    }

    .header-title {
      font-size: 1.2rem;
      color: var(--color-text-muted);
      margin-top: 8px;
      letter-spacing: 0.02em;
    }

    .contact-bar {
      display: flex;
      flex-wrap: wrap;
      justify-content: center;
      gap: 10px;
      margin-top: 28px;
    }

    .contact-chip {
      display: inline-flex;
      align-items: center;
      gap: 6px;
      padding: 6px 16px;
      font-size: 0.85rem;
      background: var(--color-surface);
      border: 1px solid rgba(168, 85, 247, 0.15);
      border-radius: var(--radius-full);
      box-shadow: var(--shadow-sm);
      transition: transform 0.2s ease, box-shadow 0.2s ease, border-color 0.2s ease;
    }

    .contact-chip:hover {
      transform: translateY(-2px);
      box-shadow: var(--shadow-md);
      border-color: var(--color-lavender);
    }

    .contact-icon {
      font-size: 1rem;
      line-height: 1;
    }

    /* ========== Sections ========== */
    .section {
      margin-bottom: 56px;
    }

    .section:nth-child(2) { animation-delay: 0.1s; }
    .section:nth-child(3) { animation-delay: 0.2s; }
    .section:nth-child(4) { animation-delay: 0.3s; }
    .section:nth-child(5) { animation-delay: 0.4s; }
    .section:nth-child(6) { animation-delay: 0.5s; }

    .section-title {
      font-size: 1.6rem;
      font-weight: 700;
      margin-bottom: 24px;
      letter-spacing: -0.02em;
    }

    .section-accent {
      font-family: "Courier New", Courier, monospace;
      font-weight: 600;
      font-size: 0.9rem;
      color: var(--color-purple);
      margin-right: 8px;
    }

    /* ========== Cards ========== */
    .card {
      background: var(--color-surface);
      border-radius: var(--radius);
      padding: 28px;
      box-shadow: var(--shadow-md);
      border: 1px solid rgba(168, 85, 247, 0.08);
      transition: transform 0.25s ease, box-shadow 0.25s ease;
    }

    .card:hover {
      transform: translateY(-3px);
      box-shadow: var(--shadow-lg);
    }

    .card-header {
      margin-bottom: 6px;
    }

    .card-title {
      font-size: 1.15rem;
      font-weight: 700;
      line-height: 1.35;
    }

    .card-meta {
      display: block;
      font-size: 0.95rem;
      font-weight: 500;
      color: var(--color-purple);
      margin-top: 2px;
    }

    .card-date {
      display: inline-block;
      font-size: 0.82rem;
      font-weight: 500;
      color: var(--color-text-muted);
      background: rgba(168, 85, 247, 0.07);
      padding: 3px 12px;
      border-radius: var(--radius-full);
      margin-top: 8px;
    }

    .card-body {
      font-size: 0.95rem;
      color: var(--color-text-muted);
      margin-top: 14px;
      line-height: 1.75;
    }

    .field-highlight {
      font-weight: 400;
      color: var(--color-pink);
    }

    .summary-card {
      border-left: 4px solid var(--color-purple);
      font-size: 1.05rem;
      line-height: 1.8;
    }

    /* ========== Timeline ========== */
    .timeline {
      display: flex;
      flex-direction: column;
      gap: 20px;
      position: relative;
      padding-left: 24px;
    }

    .timeline::before {
      content: "";
      position: absolute;
      left: 5px;
      top: 8px;
      bottom: 8px;
      width: 2px;
      background: linear-gradient(180deg, var(--color-purple), var(--color-pink), var(--color-blue));
      border-radius: 2px;
    }

    .timeline-card {
      position: relative;
      animation: slideInLeft 0.5s ease-out both;
    }

    .timeline-dot {
      position: absolute;
      left: -27px;
      top: 32px;
      width: 12px;
      height: 12px;
      border-radius: 50%;
      background: var(--color-purple);
      border: 3px solid var(--color-bg);
      box-shadow: 0 0 0 2px var(--color-purple);
    }

    /* ========== Education ========== */
    .edu-grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
      gap: 20px;
    }

    .edu-card {
      border-top: 3px solid;
      border-image: linear-gradient(90deg, var(--color-blue), var(--color-purple)) 1;
    }

    /* ========== Skills ========== */
    .skills-grid {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
    }

    .skill-chip {
      padding: 10px 22px;
      font-size: 0.9rem;
      font-weight: 600;
      border-radius: var(--radius-full);
      animation: scaleIn 0.4s ease-out both;
      transition: transform 0.2s ease, box-shadow 0.2s ease;
      cursor: default;
    }

    .skill-chip:hover {
      transform: translateY(-2px) scale(1.04);
      box-shadow: var(--shadow-md);
    }

    .skill-color-0 { background: var(--color-rose); color: #9f1239; }
    .skill-color-1 { background: var(--color-lavender); color: #5b21b6; }
    .skill-color-2 { background: var(--color-sky); color: #0c4a6e; }
    .skill-color-3 { background: var(--color-mint); color: #065f46; }
    .skill-color-4 { background: var(--color-peach); color: #9a3412; }

    /* ========== Projects ========== */
    .projects-grid {
      display: grid;
      grid-template-columns: repeat(3, 1fr);
      gap: 20px;
    }

    .project-card {
      animation: scaleIn 0.5s ease-out both;
    }

    .project-size-0 { grid-column: span 2; }
    .project-size-1,
    .project-size-2 { grid-column: span 1; }

    .project-header {
      display: flex;
      justify-content: space-between;
      align-items: flex-start;
      gap: 12px;
    }

    .project-link {
      display: inline-flex;
      align-items: center;
      justify-content: center;
      width: 36px;
      height: 36px;
      min-width: 36px;
      font-size: 1.2rem;
      font-weight: 700;
      color: var(--color-purple);
      background: rgba(168, 85, 247, 0.08);
      border-radius: 50%;
      transition: background 0.2s ease, color 0.2s ease, transform 0.2s ease;
    }

    .project-link:hover {
      background: var(--color-purple);
      color: #fff;
      transform: scale(1.1);
    }

    .tech-tags {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
      margin-top: 16px;
    }

    .tech-tag {
      font-size: 0.78rem;
      font-weight: 600;
      padding: 4px 12px;
      border-radius: var(--radius-full);
      background: rgba(59, 130, 246, 0.1);
      color: var(--color-blue);
    }

    /* ========== Footer ========== */
    .footer {
      text-align: center;
      padding: 40px 0 0;
      opacity: 0.7;
    }

    .footer-dot {
      display: inline-block;
      width: 6px;
      height: 6px;
      border-radius: 50%;
      margin: 0 4px;
      animation: float 3s ease-in-out infinite;
    }

    .footer-dot:nth-child(1) { background: var(--color-pink); }
    .footer-dot:nth-child(2) { background: var(--color-purple); animation-delay: 0.3s; }
    .footer-dot:nth-child(3) { background: var(--color-blue); animation-delay: 0.6s; }

    @media (max-width: 768px) {
      .wrapper { padding: 32px 16px 60px; }
      .header-name { font-size: 2.2rem; }
      .section-title { font-size: 1.35rem; }
      .card { padding: 22px; }
      .projects-grid,
      .edu-grid { grid-template-columns: 1fr; }
      .project-size-0,
      .project-size-1,
      .project-size-2 { grid-column: span 1; }
      .timeline { padding-left: 20px; }
      .timeline-dot { left: -23px; }
    }

    @media (max-width: 480px) {
      .header-name { font-size: 1.75rem; }
      .contact-chip { font-size: 0.8rem; padding: 5px 12px; }
      .skill-chip { padding: 8px 16px; font-size: 0.82rem; }
      .card { padding: 18px; border-radius: var(--radius-sm); }
    }
"#;

/// Plays each `.fade-in` section's entrance animation once it scrolls into view.
const SCRIPT: &str = r#"  <script>
    (function() {
      var els = document.querySelectorAll('.fade-in');
      if (!('IntersectionObserver' in window)) {
        els.forEach(function(el) { el.style.opacity = '1'; });
        return;
      }
      var observer = new IntersectionObserver(function(entries) {
        entries.forEach(function(entry) {
          if (entry.isIntersecting) {
            entry.target.style.animationPlayState = 'running';
            observer.unobserve(entry.target);
          }
        });
      }, { threshold: 0.12 });
      els.forEach(function(el) {
        el.style.animationPlayState = 'paused';
        observer.observe(el);
      });
    })();
  </script>"#;

const EXTERNAL: &str = r#"target="_blank" rel="noopener noreferrer""#;

pub fn render(data: &ResumeData) -> String {
    let body = format!(
        r#"  <div class="wrapper">
{header}{summary}{experience}{education}{skills}{projects}    <footer class="footer">
      <span class="footer-dot"></span>
      <span class="footer-dot"></span>
      <span class="footer-dot"></span>
    </footer>
  </div>
{SCRIPT}"#,
        header = when(data.has_header(), || header(data)),
        summary = when(!data.summary.is_empty(), || {
            section(
                "01.",
                "About Me",
                &format!(
                    r#"      <div class="card summary-card">
        <p>{}</p>
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
        title: &title_with_subtitle(&data.name, &data.title, " &mdash; "),
        head_links: "",
        styles: STYLES,
        body: &body,
    }
    .into_html()
}

fn header(data: &ResumeData) -> String {
    let chips: String = data
        .contacts()
        .map(|contact| {
            let value = e(contact.value);
            let icon = |glyph: &str| format!(r#"<span class="contact-icon">{glyph}</span>"#);
            match contact.kind {
                ContactKind::Email => format!(
                    r#"<a href="mailto:{value}" class="contact-chip">{}{value}</a>"#,
                    icon("&#9993;")
                ),
                ContactKind::Phone => format!(
                    r#"<span class="contact-chip">{}{value}</span>"#,
                    icon("&#9742;")
                ),
                ContactKind::Location => format!(
                    r#"<span class="contact-chip">{}{value}</span>"#,
                    icon("&#9906;")
                ),
                ContactKind::Website => format!(
                    r#"<a href="{value}" {EXTERNAL} class="contact-chip">{}{value}</a>"#,
                    icon("&#9741;")
                ),
                ContactKind::LinkedIn | ContactKind::GitHub => format!(
                    r#"<a href="{value}" {EXTERNAL} class="contact-chip">{}</a>"#,
                    contact.kind.label()
                ),
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
            r#"<h1 class="header-name">{}</h1>"#,
            e(&data.name)
        )),
        title = when(!data.title.is_empty(), || format!(
            r#"<p class="header-title">{}</p>"#,
            e(&data.title)
        )),
        contacts = when(!chips.is_empty(), || format!(
            r#"<div class="contact-bar">{chips}</div>"#
        )),
    )
}

fn section(number: &str, heading: &str, content: &str) -> String {
    format!(
        r#"    <section class="section fade-in">
      <h2 class="section-title"><span class="section-accent">{number}</span> {heading}</h2>
{content}
    </section>
"#
    )
}

fn card_date(start: &str, end: &str) -> String {
    let dates = date_range(start, end, " &mdash; ");
    when(!dates.is_empty(), || {
        format!(r#"<span class="card-date">{dates}</span>"#)
    })
}

fn experience(data: &ResumeData) -> String {
    let cards = each(&data.experience, |(_, exp)| {
        format!(
            r#"        <div class="card timeline-card">
          <div class="timeline-dot"></div>
          <div class="card-header">
            <h3 class="card-title">{role}</h3>
            <span class="card-meta">{company}</span>
          </div>
          {date}
          {description}
        </div>
"#,
            role = e(&exp.role),
            company = e(&exp.company),
            date = card_date(&exp.start_date, &exp.end_date),
            description = when(!exp.description.is_empty(), || format!(
                r#"<p class="card-body">{}</p>"#,
                e(&exp.description)
            )),
        )
    });
    section(
        "02.",
        "Experience",
        &format!("      <div class=\"timeline\">\n{cards}      </div>"),
    )
}

fn education(data: &ResumeData) -> String {
    let cards = each(&data.education, |(_, edu)| {
        format!(
            r#"        <div class="card edu-card">
          <h3 class="card-title">{degree}{field}</h3>
          <span class="card-meta">{institution}</span>
          {date}
        </div>
"#,
            degree = e(&edu.degree),
            field = when(!edu.field.is_empty(), || format!(
                r#" <span class="field-highlight">in {}</span>"#,
                e(&edu.field)
            )),
            institution = e(&edu.institution),
            date = card_date(&edu.start_date, &edu.end_date),
        )
    });
    section(
        "03.",
        "Education",
        &format!("      <div class=\"edu-grid\">\n{cards}      </div>"),
    )
}

fn skills(data: &ResumeData) -> String {
    let chips = each(&data.skills, |(i, skill)| {
        format!(
            r#"        <div class="skill-chip skill-color-{color}" style="animation-delay: {delay:.2}s">{skill}</div>
"#,
            color = i % SKILL_COLORS,
            delay = i as f64 * 0.06,
            skill = e(skill),
        )
    });
    section(
        "04.",
        "Skills",
        &format!("      <div class=\"skills-grid\">\n{chips}      </div>"),
    )
}

fn projects(data: &ResumeData) -> String {
    let cards = each(&data.projects, |(i, project)| {
        let name = e(&project.name);
        format!(
            r#"        <div class="card project-card project-size-{size}" style="animation-delay: {delay:.1}s">
          <div class="project-header">
            <h3 class="card-title">{name}</h3>
            {link}
          </div>
          {description}
          {tech}
        </div>
"#,
            size = i % PROJECT_SIZES,
            delay = i as f64 * 0.1,
            link = when(!project.url.is_empty(), || format!(
                r#"<a href="{}" {EXTERNAL} class="project-link" aria-label="Visit {name}">&#8599;</a>"#,
                e(&project.url)
            )),
            description = when(!project.description.is_empty(), || format!(
                r#"<p class="card-body">{}</p>"#,
                e(&project.description)
            )),
            tech = when(!project.technologies.is_empty(), || format!(
                r#"<div class="tech-tags">{}</div>"#,
                each(&project.technologies, |(_, t)| format!(
                    r#"<span class="tech-tag">{}</span>"#,
                    e(t)
                ))
            )),
        )
    });
    section(
        "05.",
        "Projects",
        &format!("      <div class=\"projects-grid\">\n{cards}      </div>"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::Project;

    #[test]
    fn test_skill_chips_cycle_colours_and_stagger() {
        let data = ResumeData {
            skills: (0..6).map(|i| format!("s{i}")).collect(),
            ..Default::default()
        };
        let html = render(&data);
        assert!(html.contains(r#"skill-color-0" style="animation-delay: 0.00s">s0<"#));
        assert!(html.contains(r#"skill-color-2" style="animation-delay: 0.12s">s2<"#));
        assert!(html.contains(r#"skill-color-0" style="animation-delay: 0.30s">s5<"#));
    }

    #[test]
    fn test_project_sizes_and_link_label() {
        let data = ResumeData {
            projects: vec![
                Project {
                    name: "A".into(),
                    url: "https://a.dev".into(),
                    ..Default::default()
                },
                Project {
                    name: "B".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let html = render(&data);
        assert!(html.contains("project-size-0"));
        assert!(html.contains("project-size-1"));
        assert!(html.contains(r#"aria-label="Visit A">&#8599;</a>"#));
        assert_eq!(html.matches("&#8599;</a>").count(), 1);
    }

    #[test]
    fn test_sections_are_numbered() {
        let data = ResumeData {
            summary: "Hi".into(),
            skills: vec!["Go".into()],
            ..Default::default()
        };
        let html = render(&data);
        assert!(html.contains(r#"<span class="section-accent">01.</span> About Me"#));
        assert!(html.contains(r#"<span class="section-accent">04.</span> Skills"#));
        assert!(!html.contains("02.</span>"));
    }

    #[test]
    fn test_footer_and_script_always_present() {
        let html = render(&ResumeData::default());
        assert_eq!(html.matches(r#"<span class="footer-dot">"#).count(), 3);
        assert!(html.contains("IntersectionObserver"));
    }
}
