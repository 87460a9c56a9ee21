use std::cmp::Reverse;

use tracing::info;

use crate::records::{AcademicEvent, FacultyMember, PlacementRecord, Record};
use crate::templates;

/// One synthesized question/answer pair.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct QaEntry {
    pub question: String,
    pub answer: String,
}

/// Ordered corpus of Q&A pairs. One contiguous group per source record or
/// aggregate; every paraphrase in a group shares the same answer.
pub type Corpus = Vec<QaEntry>;

fn push_group(corpus: &mut Corpus, questions: Vec<String>, answer: &str) {
    for question in questions {
        corpus.push(QaEntry {
            question,
            answer: answer.to_string(),
        });
    }
}

/// Expand normalized records into the full Q&A corpus.
///
/// Output order is academic events, then placements (with derived
/// aggregates), then faculty.
pub fn synthesize(records: &[Record]) -> Corpus {
    let mut events = Vec::new();
    let mut placements = Vec::new();
    let mut faculty = Vec::new();

    for record in records {
        match record {
            Record::Academic(event) => events.push(event.clone()),
            Record::Placement(placement) => placements.push(placement.clone()),
            Record::Faculty(member) => faculty.push(member.clone()),
        }
    }

    let mut corpus = academic_entries(&events);
    let placement_qa = placement_entries(&placements);
    let faculty_qa = faculty_entries(&faculty);

    info!(
        "Corpus synthesized: {} academic + {} placement + {} faculty = {} entries",
        corpus.len(),
        placement_qa.len(),
        faculty_qa.len(),
        corpus.len() + placement_qa.len() + faculty_qa.len()
    );

    corpus.extend(placement_qa);
    corpus.extend(faculty_qa);
    corpus
}

/// Q&A pairs for academic calendar events.
pub fn academic_entries(events: &[AcademicEvent]) -> Corpus {
    let mut corpus = Corpus::new();

    for event in events {
        let answer = format!(
            "{} is scheduled in Odd Semester: {}, Even Semester: {}.",
            event.name, event.odd_semester_range, event.even_semester_range
        );
        push_group(
            &mut corpus,
            templates::render(templates::ACADEMIC_EVENT, &event.name),
            &answer,
        );
    }

    corpus
}

/// Q&A pairs for placement records plus derived aggregates (highest
/// package, per-threshold company listings).
pub fn placement_entries(placements: &[PlacementRecord]) -> Corpus {
    let mut corpus = Corpus::new();

    // Stable sort by rounded CTC descending; ties keep input order.
    let mut sorted: Vec<&PlacementRecord> = placements.iter().collect();
    sorted.sort_by_key(|p| Reverse(p.ctc_rounded()));

    for placement in &sorted {
        let answer = format!(
            "{} students were placed in {} with a salary package of {} LPA.",
            placement.total_selected,
            placement.company,
            placement.ctc_rounded()
        );
        push_group(
            &mut corpus,
            templates::render(templates::PLACEMENT_COUNT, &placement.company),
            &answer,
        );
    }

    if let Some(top) = sorted.first() {
        let answer = format!(
            "{} offered the highest package of {} LPA.",
            top.company,
            top.ctc_rounded()
        );
        push_group(
            &mut corpus,
            templates::render(templates::HIGHEST_PACKAGE, ""),
            &answer,
        );
    }

    // Distinct rounded CTC values, already descending after the sort.
    let mut thresholds: Vec<i64> = sorted.iter().map(|p| p.ctc_rounded()).collect();
    thresholds.dedup();

    for threshold in thresholds {
        let companies: Vec<&str> = sorted
            .iter()
            .filter(|p| p.ctc_rounded() >= threshold)
            .map(|p| p.company.as_str())
            .collect();
        let answer = format!(
            "The companies offering above {} LPA are: {}.",
            threshold,
            companies.join(", ")
        );
        push_group(
            &mut corpus,
            templates::render(templates::CTC_THRESHOLD, &threshold.to_string()),
            &answer,
        );
    }

    corpus
}

/// Q&A pairs for faculty members plus per-department rosters.
///
/// Rosters preserve first-seen department order and first-seen member
/// order within a department.
pub fn faculty_entries(members: &[FacultyMember]) -> Corpus {
    let mut corpus = Corpus::new();
    let mut rosters: Vec<(String, Vec<String>)> = Vec::new();

    for member in members {
        let answer = format!(
            "{} is a faculty member in the {} department.",
            member.name, member.department
        );
        push_group(
            &mut corpus,
            templates::render(templates::FACULTY_IDENTITY, &member.name),
            &answer,
        );

        let answer = format!(
            "{} belongs to the {} department.",
            member.name, member.department
        );
        push_group(
            &mut corpus,
            templates::render(templates::FACULTY_DEPARTMENT, &member.name),
            &answer,
        );

        match rosters.iter().position(|(dept, _)| *dept == member.department) {
            Some(i) => rosters[i].1.push(member.name.clone()),
            None => rosters.push((member.department.clone(), vec![member.name.clone()])),
        }
    }

    for (department, names) in &rosters {
        let answer = format!("Faculty in {}: {}.", department, names.join(", "));
        push_group(
            &mut corpus,
            templates::render(templates::DEPARTMENT_ROSTER, department),
            &answer,
        );
    }

    corpus
}
