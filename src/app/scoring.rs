use crate::app::answers::AnswerStore;
use crate::model::{ContentBlock, GradableItem, Section, TestDefinition};

/// Resultado final de un intento.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: u32,
    pub total: u32,
}

impl Score {
    /// Forma legible que se persiste en el almacén de notas.
    pub fn as_record(&self) -> String {
        format!("{}/{}", self.correct, self.total)
    }
}

/// Recorre todos los ítems puntuables del test y los compara con las
/// respuestas guardadas. Función pura: se invoca una sola vez, al enviar.
///
/// En las secciones de rellenar huecos sólo puntúan los desplegables; los
/// bloques de texto no cuentan ni para el total.
pub fn compute_score(test: &TestDefinition, answers: &AnswerStore) -> Score {
    let mut score = Score {
        correct: 0,
        total: 0,
    };
    for part in &test.parts {
        for section in &part.sections {
            match section {
                Section::MultipleChoice(group) | Section::Matching(group) => {
                    for question in &group.questions {
                        grade_item(&mut score, &part.id, question, answers);
                    }
                }
                Section::FillInBlank(blanks) => {
                    for block in &blanks.blocks {
                        if let ContentBlock::Dropdown(item) = block {
                            grade_item(&mut score, &part.id, item, answers);
                        }
                    }
                }
            }
        }
    }
    score
}

fn grade_item(score: &mut Score, part_id: &str, item: &GradableItem, answers: &AnswerStore) {
    score.total += 1;
    // Sin especificación de corrección válida, el ítem nunca puntúa.
    let Some(expected) = item.correct.as_deref() else {
        return;
    };
    if answers.answer(part_id, &item.id) == Some(expected) {
        score.correct += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BlankSection, Part, Passage, QuestionGroup};

    fn item(id: &str, options: &[&str], correct: Option<&str>) -> GradableItem {
        GradableItem {
            id: id.to_owned(),
            prompt: String::new(),
            options: options.iter().map(|s| s.to_string()).collect(),
            correct: correct.map(str::to_owned),
            explanation: None,
        }
    }

    fn test_with_sections(sections: Vec<Section>) -> TestDefinition {
        TestDefinition {
            id: "t".into(),
            title: "T".into(),
            description: String::new(),
            parts: vec![Part {
                id: "p1".into(),
                title: "P1".into(),
                timer_seconds: 60,
                passage: Passage {
                    title: String::new(),
                    paragraphs: vec![],
                },
                sections,
            }],
        }
    }

    #[test]
    fn exact_match_scores_and_mismatch_does_not() {
        let test = test_with_sections(vec![Section::MultipleChoice(QuestionGroup {
            instructions: String::new(),
            questions: vec![item("q1", &["A", "B", "C"], Some("B"))],
        })]);

        let mut answers = AnswerStore::default();
        answers.set_answer("p1", "q1", "B");
        assert_eq!(
            compute_score(&test, &answers),
            Score {
                correct: 1,
                total: 1
            }
        );

        answers.set_answer("p1", "q1", "A");
        assert_eq!(
            compute_score(&test, &answers),
            Score {
                correct: 0,
                total: 1
            }
        );
    }

    #[test]
    fn text_blocks_count_for_nothing() {
        let test = test_with_sections(vec![Section::FillInBlank(BlankSection {
            instructions: String::new(),
            blocks: vec![
                ContentBlock::Text("The broken part was the".into()),
                ContentBlock::Dropdown(item("b1", &["cable", "anchor"], Some("cable"))),
            ],
        })]);

        let mut answers = AnswerStore::default();
        answers.set_answer("p1", "b1", "cable");

        let score = compute_score(&test, &answers);
        assert_eq!(score.total, 1);
        assert_eq!(score.correct, 1);
    }

    #[test]
    fn matching_items_are_graded_like_multiple_choice() {
        let test = test_with_sections(vec![Section::Matching(QuestionGroup {
            instructions: String::new(),
            questions: vec![
                item("m1", &["Menu A", "Menu B"], Some("Menu A")),
                item("m2", &["Menu A", "Menu B"], Some("Menu B")),
            ],
        })]);

        let mut answers = AnswerStore::default();
        answers.set_answer("p1", "m1", "Menu A");
        answers.set_answer("p1", "m2", "Menu A");

        assert_eq!(
            compute_score(&test, &answers),
            Score {
                correct: 1,
                total: 2
            }
        );
    }

    #[test]
    fn missing_correct_answer_counts_toward_total_but_never_scores() {
        let test = test_with_sections(vec![Section::MultipleChoice(QuestionGroup {
            instructions: String::new(),
            questions: vec![item("q1", &["A", "B"], None)],
        })]);

        let mut answers = AnswerStore::default();
        answers.set_answer("p1", "q1", "A");

        assert_eq!(
            compute_score(&test, &answers),
            Score {
                correct: 0,
                total: 1
            }
        );
    }

    #[test]
    fn unanswered_items_still_count_toward_total() {
        let test = test_with_sections(vec![Section::MultipleChoice(QuestionGroup {
            instructions: String::new(),
            questions: vec![
                item("q1", &["A", "B"], Some("A")),
                item("q2", &["A", "B"], Some("B")),
            ],
        })]);

        let answers = AnswerStore::default();
        assert_eq!(
            compute_score(&test, &answers),
            Score {
                correct: 0,
                total: 2
            }
        );
    }
}
