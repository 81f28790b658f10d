//! Terminal aesthetic, monospace, dark + green/amber.

use crate::models::{ContactKind, ResumeData};
use crate::render::escape::e;
use crate::render::layout::{date_range, each, when, Page};

const STYLES: &str = r#"
    :root {
      --bg-primary: #0d1117;
      --bg-secondary: #161b22;
      --bg-card: #1a1f2b;
      --bg-card-header: #21262d;
      --border: #30363d;
      --border-highlight: #3d444d;
      --text-primary: #c9d1d9;
      --text-secondary: #8b949e;
      --text-muted: #6e7681;
      --green: #4ade80;
      --green-glow: rgba(74, 222, 128, 0.15);
      --amber: #fbbf24;
      --amber-dim: #d97706;
      --amber-glow: rgba(251, 191, 36, 0.12);
      --cyan: #22d3ee;
      --red-dot: #ff5f57;
      --yellow-dot: #febc2e;
      --green-dot: #28c840;
      --font-mono: 'JetBrains Mono', 'Fira Code', 'Cascadia Code', 'Consolas', 'Monaco', monospace;
    }

    body {
      font-family: var(--font-mono);
      background-color: var(--bg-primary);
      color: var(--text-primary);
      font-size: 14px;
      line-height: 1.7;
      padding: 2rem 1rem;
      position: relative;
      overflow-x: hidden;
    }

    /* scanlines */
    body::before {
      content: '';
      position: fixed;
      top: 0;
      left: 0;
      width: 100%;
      height: 100%;
      pointer-events: none;
      background: repeating-linear-gradient(
        0deg,
        transparent,
        transparent 2px,
        rgba(0, 0, 0, 0.03) 2px,
        rgba(0, 0, 0, 0.03) 4px
      );
      z-index: 9999;
    }

    .container {
      max-width: 860px;
      margin: 0 auto;
    }

    @keyframes blink {
      0%, 50% { opacity: 1; }
      51%, 100% { opacity: 0; }
    }

    .cursor {
      animation: blink 1s step-end infinite;
      color: var(--green);
      font-weight: 400;
    }

    @keyframes fadeSlideIn {
      from { opacity: 0; transform: translateY(8px); }
      to { opacity: 1; transform: translateY(0); }
    }

    /* ---- Terminal window ---- */
    .terminal-header {
      border: 1px solid var(--border);
      border-radius: 8px;
      overflow: hidden;
      margin-bottom: 2.5rem;
      background: var(--bg-secondary);
      box-shadow:
        0 0 40px rgba(74, 222, 128, 0.04),
        0 16px 48px rgba(0, 0, 0, 0.4);
      animation: fadeSlideIn 0.5s ease-out;
    }

    .terminal-bar {
      display: flex;
      align-items: center;
      gap: 8px;
      padding: 12px 16px;
      background: var(--bg-card-header);
      border-bottom: 1px solid var(--border);
    }

    .terminal-dot {
      width: 12px;
      height: 12px;
      border-radius: 50%;
    }

    .terminal-dot.red { background: var(--red-dot); }
    .terminal-dot.yellow { background: var(--yellow-dot); }
    .terminal-dot.green { background: var(--green-dot); }

    .terminal-bar-title {
      flex: 1;
      text-align: center;
      color: var(--text-muted);
      font-size: 12px;
    }

    .terminal-body {
      padding: 2rem 2rem 2.5rem;
    }

    .ascii-greeting {
      color: var(--text-muted);
      font-size: 13px;
      margin-bottom: 1rem;
    }

    .glitch-name {
      font-size: 2.4rem;
      font-weight: 700;
      color: var(--green);
      letter-spacing: -0.5px;
      line-height: 1.2;
      text-shadow: 0 0 20px var(--green-glow);
      margin-bottom: 0.25rem;
    }

    .title-line {
      margin-bottom: 1.25rem;
    }

    .comment {
      color: var(--text-muted);
      font-style: italic;
    }

    .contact-env {
      margin-top: 1.25rem;
      font-size: 13px;
      color: var(--text-secondary);
      line-height: 2;
    }

    .env-vars {
      padding-left: 1.5rem;
      display: flex;
      flex-wrap: wrap;
      gap: 0.25rem 1.25rem;
    }

    .contact-link {
      color: var(--text-secondary);
      transition: color 0.2s ease;
    }

    .contact-link:hover {
      color: var(--amber);
    }

    .var {
      color: var(--cyan);
      font-weight: 600;
    }

    .prompt {
      color: var(--green);
      font-weight: 700;
      margin-right: 0.5rem;
      user-select: none;
    }

    /* ---- Sections ---- */
    .terminal-section {
      margin-bottom: 2.5rem;
      animation: fadeSlideIn 0.5s ease-out;
    }

    .section-header {
      font-size: 15px;
      font-weight: 600;
      color: var(--text-secondary);
      margin-bottom: 1.25rem;
      padding-bottom: 0.75rem;
      border-bottom: 1px dashed var(--border);
      letter-spacing: 0.3px;
    }

    .entries {
      display: flex;
      flex-direction: column;
      gap: 1rem;
    }

    .code-block {
      border: 1px solid var(--border);
      border-radius: 6px;
      overflow: hidden;
      background: var(--bg-card);
      transition: border-color 0.25s ease, box-shadow 0.25s ease;
    }

    .code-block:hover {
      border-color: var(--border-highlight);
      box-shadow: 0 0 16px rgba(74, 222, 128, 0.05);
    }

    .block-header {
      display: flex;
      align-items: center;
      gap: 0.6rem;
      padding: 0.75rem 1.25rem;
      background: var(--bg-card-header);
      border-bottom: 1px solid var(--border);
      font-size: 13px;
      flex-wrap: wrap;
    }

    .file-indicator {
      color: var(--amber);
      font-weight: 700;
    }

    .entry-title {
      color: var(--green);
      font-weight: 600;
      font-size: 15px;
    }

    .entry-meta {
      color: var(--text-muted);
      font-size: 13px;
    }

    .block-content {
      padding: 1rem 1.25rem;
    }

    .date-range {
      display: block;
      margin-bottom: 0.5rem;
      font-size: 13px;
    }

    .entry-desc,
    .summary-text {
      color: var(--text-secondary);
      font-size: 13px;
      white-space: pre-wrap;
      line-height: 1.75;
    }

    /* ---- Skills ---- */
    .skills-grid {
      display: flex;
      flex-wrap: wrap;
      gap: 0.6rem;
    }

    .skill-tag {
      display: inline-flex;
      align-items: center;
      padding: 0.35rem 0.85rem;
      background: var(--bg-card);
      border: 1px solid var(--border);
      border-radius: 4px;
      font-size: 13px;
      color: var(--amber);
      font-weight: 500;
      transition: all 0.2s ease;
      cursor: default;
    }

    .skill-tag:hover {
      border-color: var(--amber-dim);
      background: var(--amber-glow);
    }

    .tag-bracket {
      color: var(--text-muted);
      font-weight: 400;
      margin: 0 2px;
    }

    /* ---- Projects ---- */
    .project-link {
      margin-left: auto;
      color: var(--cyan);
      font-size: 12px;
      font-weight: 600;
      transition: color 0.2s ease;
    }

    .project-link:hover {
      color: var(--green);
    }

    .tech-stack {
      margin-top: 0.75rem;
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      gap: 0.4rem;
    }

    .tech-stack .comment {
      margin-right: 0.25rem;
      font-size: 12px;
    }

    .tech-tag {
      display: inline-block;
      padding: 0.2rem 0.6rem;
      background: var(--green-glow);
      border: 1px solid rgba(74, 222, 128, 0.2);
      border-radius: 3px;
      font-size: 11.5px;
      color: var(--green);
      font-weight: 500;
    }

    .terminal-footer {
      text-align: center;
      padding-top: 2rem;
      border-top: 1px dashed var(--border);
      color: var(--text-muted);
      font-size: 12px;
    }

    @media (max-width: 768px) {
      body {
        padding: 1rem 0.5rem;
        font-size: 13px;
      }

      .terminal-body {
        padding: 1.5rem 1.25rem 2rem;
      }

      .glitch-name {
        font-size: 1.8rem;
      }

      .env-vars {
        padding-left: 0.5rem;
        flex-direction: column;
        gap: 0.1rem;
      }
    }

    @media (max-width: 480px) {
      .terminal-bar-title {
        display: none;
      }

      .block-header {
        flex-direction: column;
        align-items: flex-start;
        gap: 0.25rem;
      }

      .project-link {
        margin-left: 0;
      }
    }

    @media print {
      body::before,
      .cursor {
        display: none;
      }

      body {
        background: #fff;
        color: #1a1a1a;
      }

      .glitch-name,
      .entry-title,
      .tech-tag,
      .skill-tag {
        color: #1a1a1a;
        text-shadow: none;
      }
    }
"#;

const EXTERNAL: &str = r#"target="_blank" rel="noopener noreferrer""#;

const PROMPT: &str = r#"<span class="prompt">$</span>"#;

pub fn render(data: &ResumeData) -> String {
    let title = if data.name.is_empty() {
        "Portfolio".to_string()
    } else {
        format!("{} &mdash; Portfolio", e(&data.name))
    };

    let body = format!(
        r#"  <div class="container">
{header}{summary}{experience}{education}{skills}{projects}    <footer class="terminal-footer">
      {PROMPT} exit 0
    </footer>
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
        head_links: "",
        styles: STYLES,
        body: &body,
    }
    .into_html()
}

/// Shell variable each contact is exported as.
fn env_var(kind: ContactKind) -> &'static str {
    match kind {
        ContactKind::Email => "EMAIL",
        ContactKind::Phone => "PHONE",
        ContactKind::Location => "LOCATION",
        ContactKind::Website => "WEB",
        ContactKind::LinkedIn => "LINKEDIN",
        ContactKind::GitHub => "GITHUB",
    }
}

fn header(data: &ResumeData) -> String {
    let exports: Vec<String> = data
        .contacts()
        .map(|contact| {
            let assignment = format!(
                r#"<span class="var">{}</span>="{}""#,
                env_var(contact.kind),
                e(contact.value)
            );
            match contact.kind.href(contact.value) {
                Some(href) if contact.kind.is_external() => format!(
                    r#"<a href="{}" {EXTERNAL} class="contact-link">{assignment}</a>"#,
                    e(&href)
                ),
                Some(href) => format!(
                    r#"<a href="{}" class="contact-link">{assignment}</a>"#,
                    e(&href)
                ),
                None => format!(r#"<span class="contact-link">{assignment}</span>"#),
            }
        })
        .collect();

    format!(
        r#"    <header class="terminal-header">
      <div class="terminal-bar">
        <span class="terminal-dot red"></span>
        <span class="terminal-dot yellow"></span>
        <span class="terminal-dot green"></span>
        <span class="terminal-bar-title">portfolio.sh</span>
      </div>
      <div class="terminal-body">
        <div class="ascii-greeting">{PROMPT} cat /etc/motd</div>
        {name}
        {title}
        {contacts}
      </div>
    </header>
"#,
        name = when(!data.name.is_empty(), || format!(
            r#"<h1 class="glitch-name">{}<span class="cursor">_</span></h1>"#,
            e(&data.name)
        )),
        title = when(!data.title.is_empty(), || format!(
            r#"<p class="title-line"><span class="comment">// {}</span></p>"#,
            e(&data.title)
        )),
        contacts = when(!exports.is_empty(), || format!(
            "<div class=\"contact-env\">\n          {PROMPT} export \\\n          <div class=\"env-vars\">{}</div>\n        </div>",
            exports.join(" \\\n            ")
        )),
    )
}

fn section(command: &str, content: &str) -> String {
    format!(
        r#"    <section class="terminal-section">
      <h2 class="section-header">{PROMPT} {command}</h2>
{content}
    </section>
"#
    )
}

/// `/* start &mdash; end */` comment line, omitted when both dates are empty.
fn date_comment(start: &str, end: &str) -> String {
    let dates = date_range(start, end, " &mdash; ");
    when(!dates.is_empty(), || {
        format!(r#"<span class="date-range"><span class="comment">/* {dates} */</span></span>"#)
    })
}

fn summary(data: &ResumeData) -> String {
    section(
        "cat README.md",
        &format!(
            r#"      <div class="code-block">
        <div class="block-header"><span class="file-indicator">~</span> README.md</div>
        <div class="block-content">
          <p class="summary-text">{}</p>
        </div>
      </div>"#,
            e(&data.summary)
        ),
    )
}

fn experience(data: &ResumeData) -> String {
    let blocks = each(&data.experience, |(_, exp)| {
        format!(
            r#"        <div class="code-block">
          <div class="block-header">
            <span class="file-indicator">&gt;</span>
            <span class="entry-title">{role}</span>
            {company}
          </div>
          <div class="block-content">
            {dates}
            {description}
          </div>
        </div>
"#,
            role = e(&exp.role),
            company = when(!exp.company.is_empty(), || format!(
                r#"<span class="entry-meta">@ {}</span>"#,
                e(&exp.company)
            )),
            dates = date_comment(&exp.start_date, &exp.end_date),
            description = when(!exp.description.is_empty(), || format!(
                r#"<p class="entry-desc">{}</p>"#,
                e(&exp.description)
            )),
        )
    });
    section(
        "git log --oneline experience/",
        &format!("      <div class=\"entries\">\n{blocks}      </div>"),
    )
}

fn education(data: &ResumeData) -> String {
    let blocks = each(&data.education, |(_, edu)| {
        format!(
            r#"        <div class="code-block">
          <div class="block-header">
            <span class="file-indicator">&gt;</span>
            <span class="entry-title">{degree}{field}</span>
          </div>
          <div class="block-content">
            <span class="entry-meta">{institution}</span>
            {dates}
          </div>
        </div>
"#,
            degree = e(&edu.degree),
            field = when(!edu.field.is_empty(), || format!(" in {}", e(&edu.field))),
            institution = e(&edu.institution),
            dates = date_comment(&edu.start_date, &edu.end_date),
        )
    });
    section(
        "ls -la education/",
        &format!("      <div class=\"entries\">\n{blocks}      </div>"),
    )
}

fn skills(data: &ResumeData) -> String {
    let tags = each(&data.skills, |(_, skill)| {
        format!(
            r#"<span class="skill-tag"><span class="tag-bracket">[</span>{}<span class="tag-bracket">]</span></span>"#,
            e(skill)
        )
    });
    section(
        r"echo $SKILLS | tr ',' '\n'",
        &format!(r#"      <div class="skills-grid">{tags}</div>"#),
    )
}

fn projects(data: &ResumeData) -> String {
    let blocks = each(&data.projects, |(_, project)| {
        format!(
            r#"        <div class="code-block">
          <div class="block-header">
            <span class="file-indicator">&gt;</span>
            <span class="entry-title">{name}</span>
            {link}
          </div>
          <div class="block-content">
            {description}
            {tech}
          </div>
        </div>
"#,
            name = e(&project.name),
            link = when(!project.url.is_empty(), || format!(
                r#"<a href="{}" {EXTERNAL} class="project-link">[open]</a>"#,
                e(&project.url)
            )),
            description = when(!project.description.is_empty(), || format!(
                r#"<p class="entry-desc">{}</p>"#,
                e(&project.description)
            )),
            tech = when(!project.technologies.is_empty(), || format!(
                r#"<div class="tech-stack"><span class="comment">// stack:</span>{}</div>"#,
                each(&project.technologies, |(_, t)| format!(
                    r#"<span class="tech-tag">{}</span>"#,
                    e(t)
                ))
            )),
        )
    });
    section(
        "find ~/projects -type d -maxdepth 1",
        &format!("      <div class=\"entries\">\n{blocks}      </div>"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::Experience;

    #[test]
    fn test_title_names_the_portfolio() {
        let data = ResumeData {
            name: "Ada".into(),
            ..Default::default()
        };
        let html = render(&data);
        assert!(html.contains("<title>Ada &mdash; Portfolio</title>"));
        assert!(html.contains(r#"Ada<span class="cursor">_</span>"#));
        assert!(render(&ResumeData::default()).contains("<title>Portfolio</title>"));
    }

    #[test]
    fn test_contacts_render_as_exports() {
        let data = ResumeData {
            email: "ada@x.io".into(),
            location: "London".into(),
            ..Default::default()
        };
        let html = render(&data);
        assert!(html.contains(r#"<a href="mailto:ada@x.io" class="contact-link"><span class="var">EMAIL</span>="ada@x.io"</a>"#));
        assert!(html.contains(r#"<span class="contact-link"><span class="var">LOCATION</span>="London"</span>"#));
        assert!(html.contains("export \\"));
    }

    #[test]
    fn test_experience_date_comment() {
        let data = ResumeData {
            experience: vec![Experience {
                role: "Dev".into(),
                company: "Acme".into(),
                start_date: "2019".into(),
                end_date: "2021".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let html = render(&data);
        assert!(html.contains("git log --oneline experience/"));
        assert!(html.contains("/* 2019 &mdash; 2021 */"));
        assert!(html.contains(r#"<span class="entry-meta">@ Acme</span>"#));
    }

    #[test]
    fn test_skills_are_bracketed() {
        let data = ResumeData {
            skills: vec!["Rust".into()],
            ..Default::default()
        };
        assert!(render(&data).contains(
            r#"<span class="tag-bracket">[</span>Rust<span class="tag-bracket">]</span>"#
        ));
    }
}
