use sim_core::model::{Dataset, Mode};

use super::summary_vm::mode_class;

/// One entry on the mode selection screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModeCardVm {
    pub mode: Mode,
    pub title: &'static str,
    pub description: &'static str,
    pub count_label: String,
    pub tags: Vec<String>,
    pub class: String,
}

fn description(mode: Mode) -> &'static str {
    match mode {
        Mode::Practice => "Standard practice questions covering every exam objective.",
        Mode::Challenges => "Advanced certification problems for when the basics are solid.",
        Mode::Exam => "A full exam run under real certification conditions.",
    }
}

fn count_label(mode: Mode, count: usize) -> String {
    let noun = match (mode, count) {
        (Mode::Challenges, 1) => "Challenge",
        (Mode::Challenges, _) => "Challenges",
        (_, 1) => "Project",
        _ => "Projects",
    };
    format!("{count} {noun}")
}

#[must_use]
pub fn map_mode_cards(dataset: &Dataset) -> Vec<ModeCardVm> {
    Mode::ALL
        .into_iter()
        .map(|mode| ModeCardVm {
            mode,
            title: mode.label(),
            description: description(mode),
            count_label: count_label(mode, dataset.project_count(mode)),
            tags: dataset
                .projects(mode)
                .iter()
                .map(|project| project.name().to_string())
                .collect(),
            class: format!("mode-card {}", mode_class(mode)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim_core::model::{Project, ProjectFile, ProjectId, Question, QuestionId};

    fn project(id: &str, name: &str) -> Project {
        Project::new(
            ProjectId::new(id),
            name,
            ProjectFile::new(format!("{id}.xlsx")),
            vec![Question::new(QuestionId::new("q1"), vec!["Do it".into()])],
        )
    }

    #[test]
    fn cards_follow_mode_order_with_counts() {
        let dataset = Dataset::new([
            (Mode::Practice, vec![project("p1", "Bellows"), project("p2", "Tailspin")]),
            (Mode::Challenges, vec![project("c1", "Cruise")]),
        ])
        .unwrap();

        let cards = map_mode_cards(&dataset);
        let titles: Vec<_> = cards.iter().map(|card| card.title).collect();
        assert_eq!(titles, ["Practice", "Challenges", "Exam"]);
        assert_eq!(cards[0].count_label, "2 Projects");
        assert_eq!(cards[1].count_label, "1 Challenge");
        assert_eq!(cards[1].tags, vec!["Cruise".to_string()]);
    }

    #[test]
    fn empty_mode_shows_fallback_projects() {
        let dataset = Dataset::new([(Mode::Practice, vec![project("p1", "Bellows")])]).unwrap();
        let cards = map_mode_cards(&dataset);
        assert_eq!(cards[2].count_label, "1 Project");
        assert_eq!(cards[2].tags, vec!["Bellows".to_string()]);
        assert!(cards[2].class.ends_with("mode--exam"));
    }
}
