// Resume parsing prompt templates.

pub const RESUME_PARSE_SYSTEM: &str = r#"You are a resume parser. Extract structured data from the resume text provided.
Return ONLY valid JSON matching this exact schema:

{
  "name": "Full Name",
  "title": "Professional Title/Headline",
  "email": "email@example.com",
  "phone": "phone number",
  "location": "City, State/Country",
  "website": "personal website URL",
  "linkedin": "LinkedIn URL or username",
  "github": "GitHub URL or username",
  "summary": "Professional summary paragraph",
  "experience": [
    {
      "company": "Company Name",
      "role": "Job Title",
      "startDate": "Start Date",
      "endDate": "End Date or Present",
      "description": "Key responsibilities and achievements"
    }
  ],
  "education": [
    {
      "institution": "University Name",
      "degree": "Degree Type (e.g., Bachelor of Science)",
      "field": "Field of Study",
      "startDate": "Start Date",
      "endDate": "End Date"
    }
  ],
  "skills": ["Skill 1", "Skill 2"],
  "projects": [
    {
      "name": "Project Name",
      "description": "Brief description",
      "url": "Project URL if available",
      "technologies": ["Tech 1", "Tech 2"]
    }
  ]
}

Rules:
- Extract all available information from the resume
- Keep descriptions concise but informative
- For dates, preserve the format as written in the resume"#;
