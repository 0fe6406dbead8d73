//! LaTeX generator — renders `ResumeData` into a self-contained article document.
//!
//! Used by the export path when the editor is in form mode. Section order is
//! fixed: Education, Experience, Projects, Leadership, Technical Skills.
//! Sections with no entries are left out entirely.

use std::fmt::Write;

use crate::models::resume::{PersonalInfo, ResumeData, TechnicalSkills};

const PREAMBLE: &str = r"\documentclass[letterpaper,11pt]{article}
\usepackage[margin=0.6in]{geometry}
\usepackage{enumitem}
\usepackage[hidelinks]{hyperref}
\usepackage{titlesec}
\pagestyle{empty}
\setlength{\parindent}{0pt}
\titleformat{\section}{\large\bfseries\scshape}{}{0em}{}[\titlerule]
\titlespacing{\section}{0pt}{8pt}{4pt}
\setlist[itemize]{leftmargin=0.2in,itemsep=1pt,topsep=2pt}
\newcommand{\resumeEntry}[4]{\textbf{#1} \hfill #2 \\ \textit{#3} \hfill \textit{#4} \\}
";

pub fn generate_latex(resume: &ResumeData) -> String {
    let mut doc = String::with_capacity(4096);
    doc.push_str(PREAMBLE);
    doc.push_str("\\begin{document}\n");

    if let Some(info) = &resume.personal_info {
        write_header(&mut doc, info);
    }

    if !resume.education.is_empty() {
        doc.push_str("\n\\section{Education}\n");
        for edu in &resume.education {
            entry(
                &mut doc,
                &edu.university_name,
                &edu.location,
                &edu.degree,
                &edu.dates_attended,
            );
            if let Some(coursework) = edu.coursework.as_deref().filter(|c| !c.trim().is_empty()) {
                let _ = writeln!(doc, "Coursework: {} \\\\", escape_latex(coursework.trim()));
            }
        }
    }

    if !resume.experience.is_empty() {
        doc.push_str("\n\\section{Experience}\n");
        for exp in &resume.experience {
            entry(&mut doc, &exp.job_title, &exp.dates, &exp.company, &exp.location);
            bullets(&mut doc, &exp.achievements);
        }
    }

    if !resume.projects.is_empty() {
        doc.push_str("\n\\section{Projects}\n");
        for project in &resume.projects {
            let _ = writeln!(
                doc,
                "\\textbf{{{}}} $|$ \\textit{{{}}} \\hfill {} \\\\",
                escape_latex(&project.project_name),
                escape_latex(&project.technologies),
                escape_latex(&project.date)
            );
            bullets(&mut doc, &project.description);
        }
    }

    if !resume.leadership.is_empty() {
        doc.push_str("\n\\section{Leadership}\n");
        for lead in &resume.leadership {
            entry(&mut doc, &lead.role, &lead.dates, &lead.organization, "");
            bullets(&mut doc, &lead.achievements);
        }
    }

    if !resume.technical_skills.is_empty() {
        write_skills(&mut doc, &resume.technical_skills);
    }

    doc.push_str("\n\\end{document}\n");
    doc
}

/// Escapes characters with special meaning in LaTeX text mode.
pub fn escape_latex(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => escaped.push_str("\\textbackslash{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '~' => escaped.push_str("\\textasciitilde{}"),
            '^' => escaped.push_str("\\textasciicircum{}"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Splits a free-text block into bullet lines, dropping list markers.
pub fn bullet_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(|line| {
            line.trim()
                .trim_start_matches(['-', '•', '*'])
                .trim_start()
        })
        .filter(|line| !line.is_empty())
        .collect()
}

fn write_header(doc: &mut String, info: &PersonalInfo) {
    let contacts: Vec<String> = [
        info.address.as_deref(),
        info.phone.as_deref(),
        info.email.as_deref(),
        info.linkedin.as_deref(),
        info.github.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(str::trim)
    .filter(|c| !c.is_empty())
    .map(escape_latex)
    .collect();

    doc.push_str("\\begin{center}\n");
    let _ = writeln!(doc, "{{\\LARGE \\textbf{{{}}}}} \\\\", escape_latex(info.name.trim()));
    if !contacts.is_empty() {
        let _ = writeln!(doc, "\\small {}", contacts.join(" $|$ "));
    }
    doc.push_str("\\end{center}\n");
}

fn entry(doc: &mut String, title: &str, right: &str, subtitle: &str, sub_right: &str) {
    let _ = writeln!(
        doc,
        "\\resumeEntry{{{}}}{{{}}}{{{}}}{{{}}}",
        escape_latex(title),
        escape_latex(right),
        escape_latex(subtitle),
        escape_latex(sub_right)
    );
}

fn bullets(doc: &mut String, text: &str) {
    let lines = bullet_lines(text);
    if lines.is_empty() {
        return;
    }
    doc.push_str("\\begin{itemize}\n");
    for line in lines {
        let _ = writeln!(doc, "  \\item {}", escape_latex(line));
    }
    doc.push_str("\\end{itemize}\n");
}

fn write_skills(doc: &mut String, skills: &TechnicalSkills) {
    doc.push_str("\n\\section{Technical Skills}\n");
    let rows = [
        ("Languages", &skills.languages),
        ("Developer Tools", &skills.developer_tools),
        ("Technologies/Frameworks", &skills.technologies_frameworks),
    ];
    for (label, value) in rows {
        if !value.trim().is_empty() {
            let _ = writeln!(doc, "\\textbf{{{label}}}: {} \\\\", escape_latex(value.trim()));
        }
    }
}
