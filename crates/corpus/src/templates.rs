//! Paraphrase template tables.
//!
//! Each intent maps to a fixed list of question templates with a single
//! `{}` placeholder (templates without a placeholder are emitted as-is).
//! Adding an intent is a data change, not a code change; the first entry
//! of each list is the base question.

/// Academic event schedule
pub const ACADEMIC_EVENT: &[&str] = &[
    "When is {}?",
    "What is the date for {}?",
    "Tell me the schedule for {}.",
    "When does {} happen?",
    "Can you tell me when {} is scheduled?",
];

/// Per-company placement count
pub const PLACEMENT_COUNT: &[&str] = &[
    "How many students were placed in {}?",
    "What is the placement count for {}?",
    "How many students got placed in {}?",
    "Tell me the number of students placed in {}.",
    "What is the total number of students placed in {}?",
];

/// Highest package offered (no placeholder)
pub const HIGHEST_PACKAGE: &[&str] = &[
    "Which company offered the highest package?",
    "What is the highest CTC offered?",
    "Which company has the highest salary package?",
    "Tell me the company with the highest CTC.",
    "What is the top salary package offered?",
];

/// Companies above a CTC threshold
pub const CTC_THRESHOLD: &[&str] = &[
    "List companies with CTC above {} LPA.",
    "Which companies have CTC exceeding {} LPA?",
    "Show companies offering more than {} LPA.",
    "Who are the companies with packages above {} LPA?",
];

/// Faculty identity
pub const FACULTY_IDENTITY: &[&str] = &[
    "Who is {}?",
    "Can you tell me about {}?",
    "Tell me about {}.",
    "Who is the faculty member {}?",
    "Give me information about {}.",
];

/// Faculty department membership
pub const FACULTY_DEPARTMENT: &[&str] = &[
    "Which department does {} belong to?",
    "In which department is {}?",
    "Which department is {} part of?",
    "Tell me the department of {}.",
    "Where does {} work?",
];

/// Department roster
pub const DEPARTMENT_ROSTER: &[&str] = &[
    "List all faculty members in the {} department.",
    "Who are the faculty members in the {} department?",
    "Can you list the faculty in the {} department?",
    "Tell me the faculty members in the {} department.",
    "Who works in the {} department?",
];

/// Render a template list, substituting `slot` for the `{}` placeholder.
pub fn render(templates: &[&str], slot: &str) -> Vec<String> {
    templates
        .iter()
        .map(|t| t.replacen("{}", slot, 1))
        .collect()
}
