//! Carga del banco de tests y normalización a la forma canónica.
//!
//! El YAML de autor admite dos formas para las secciones de una parte
//! (secuencia ordenada o mapping con nombre) y dos formas de especificar la
//! respuesta correcta (`correct_index` o `correct_value`). Aquí se resuelven
//! ambas de una vez para que el núcleo nunca tenga que ramificar.

use crate::model::{
    BlankSection, ContentBlock, GradableItem, Part, Passage, QuestionGroup, Section,
    TestDefinition,
};
use serde::Deserialize;

/// Carga el banco de tests desde el YAML embebido.
pub fn read_tests_embedded() -> Vec<TestDefinition> {
    let file_content = include_str!("data/reading_tests.yaml");
    parse_tests(file_content).expect("No se pudo parsear el banco de tests YAML")
}

pub fn parse_tests(yaml: &str) -> Result<Vec<TestDefinition>, serde_yaml::Error> {
    let raw: Vec<RawTest> = serde_yaml::from_str(yaml)?;
    raw.into_iter().map(normalize_test).collect()
}

// ---------- Formas crudas del fichero ----------

#[derive(Deserialize)]
struct RawTest {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    parts: Vec<RawPart>,
}

#[derive(Deserialize)]
struct RawPart {
    part_id: String,
    title: String,
    timer_seconds: u32,
    passage: RawPassage,
    sections: RawSections,
}

#[derive(Deserialize)]
struct RawPassage {
    title: String,
    paragraphs: Vec<String>,
}

/// Las secciones pueden venir como lista o como mapping de secciones con
/// nombre; en el segundo caso el orden del documento es el que vale.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSections {
    Listed(Vec<RawSection>),
    Named(serde_yaml::Mapping),
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum RawSection {
    MultipleChoice {
        instructions: String,
        questions: Vec<RawQuestion>,
    },
    Matching {
        instructions: String,
        questions: Vec<RawQuestion>,
    },
    FillInTheBlank {
        instructions: String,
        content_blocks: Vec<RawBlock>,
    },
}

#[derive(Deserialize)]
struct RawQuestion {
    id: String,
    #[serde(default)]
    prompt: String,
    options: Vec<String>,
    correct_value: Option<String>,
    correct_index: Option<usize>,
    explanation: Option<String>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum RawBlock {
    Text {
        value: String,
    },
    Dropdown {
        id: String,
        options: Vec<String>,
        correct_value: Option<String>,
        correct_index: Option<usize>,
        explanation: Option<String>,
    },
}

// ---------- Normalización ----------

fn normalize_test(raw: RawTest) -> Result<TestDefinition, serde_yaml::Error> {
    let parts = raw
        .parts
        .into_iter()
        .map(normalize_part)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(TestDefinition {
        id: raw.id,
        title: raw.title,
        description: raw.description,
        parts,
    })
}

fn normalize_part(raw: RawPart) -> Result<Part, serde_yaml::Error> {
    let sections = match raw.sections {
        RawSections::Listed(list) => list,
        RawSections::Named(map) => map
            .into_iter()
            .map(|(_name, value)| serde_yaml::from_value(value))
            .collect::<Result<Vec<_>, _>>()?,
    };
    Ok(Part {
        id: raw.part_id,
        title: raw.title,
        timer_seconds: raw.timer_seconds,
        passage: Passage {
            title: raw.passage.title,
            paragraphs: raw.passage.paragraphs,
        },
        sections: sections.into_iter().map(normalize_section).collect(),
    })
}

fn normalize_section(raw: RawSection) -> Section {
    match raw {
        RawSection::MultipleChoice {
            instructions,
            questions,
        } => Section::MultipleChoice(QuestionGroup {
            instructions,
            questions: questions.into_iter().map(normalize_question).collect(),
        }),
        RawSection::Matching {
            instructions,
            questions,
        } => Section::Matching(QuestionGroup {
            instructions,
            questions: questions.into_iter().map(normalize_question).collect(),
        }),
        RawSection::FillInTheBlank {
            instructions,
            content_blocks,
        } => Section::FillInBlank(BlankSection {
            instructions,
            blocks: content_blocks.into_iter().map(normalize_block).collect(),
        }),
    }
}

fn normalize_question(raw: RawQuestion) -> GradableItem {
    let correct = resolve_correct(&raw.options, raw.correct_index, raw.correct_value);
    GradableItem {
        id: raw.id,
        prompt: raw.prompt,
        options: raw.options,
        correct,
        explanation: raw.explanation,
    }
}

fn normalize_block(raw: RawBlock) -> ContentBlock {
    match raw {
        RawBlock::Text { value } => ContentBlock::Text(value),
        RawBlock::Dropdown {
            id,
            options,
            correct_value,
            correct_index,
            explanation,
        } => {
            let correct = resolve_correct(&options, correct_index, correct_value);
            ContentBlock::Dropdown(GradableItem {
                id,
                prompt: String::new(),
                options,
                correct,
                explanation,
            })
        }
    }
}

/// La forma por índice tiene prioridad y resuelve SIEMPRE contra la lista de
/// opciones: un índice fuera de rango deja el ítem sin respuesta correcta
/// (nunca puntuará), sin caer al valor explícito.
fn resolve_correct(
    options: &[String],
    correct_index: Option<usize>,
    correct_value: Option<String>,
) -> Option<String> {
    match correct_index {
        Some(i) => options.get(i).cloned(),
        None => correct_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_bank_parses_and_is_well_formed() {
        let tests = read_tests_embedded();
        assert!(!tests.is_empty());
        for test in &tests {
            assert!(!test.parts.is_empty(), "test {} sin partes", test.id);
            for part in &test.parts {
                assert!(part.timer_seconds > 0);
                assert!(!part.sections.is_empty());
            }
        }
    }

    #[test]
    fn listed_and_named_sections_normalize_identically() {
        let listed = r#"
- id: t
  title: T
  parts:
    - part_id: p1
      title: P1
      timer_seconds: 60
      passage: { title: L, paragraphs: [uno] }
      sections:
        - type: multiple_choice
          instructions: a
          questions:
            - { id: q1, prompt: "?", options: [A, B], correct_index: 0 }
        - type: matching
          instructions: b
          questions:
            - { id: q2, prompt: "?", options: [X, Y], correct_value: Y }
"#;
        let named = r#"
- id: t
  title: T
  parts:
    - part_id: p1
      title: P1
      timer_seconds: 60
      passage: { title: L, paragraphs: [uno] }
      sections:
        seccion_a:
          type: multiple_choice
          instructions: a
          questions:
            - { id: q1, prompt: "?", options: [A, B], correct_index: 0 }
        seccion_b:
          type: matching
          instructions: b
          questions:
            - { id: q2, prompt: "?", options: [X, Y], correct_value: Y }
"#;
        let a = parse_tests(listed).expect("listed ok");
        let b = parse_tests(named).expect("named ok");
        assert_eq!(a, b);
        assert_eq!(a[0].parts[0].sections.len(), 2);
    }

    #[test]
    fn correct_index_takes_precedence_over_value() {
        let resolved = resolve_correct(
            &["A".into(), "B".into(), "C".into()],
            Some(1),
            Some("C".into()),
        );
        assert_eq!(resolved.as_deref(), Some("B"));
    }

    #[test]
    fn out_of_range_index_resolves_to_none() {
        // Índice malformado: no cae al valor explícito, el ítem queda sin
        // respuesta correcta posible.
        let resolved = resolve_correct(&["A".into(), "B".into()], Some(7), Some("B".into()));
        assert_eq!(resolved, None);
    }

    #[test]
    fn missing_correctness_fields_resolve_to_none() {
        assert_eq!(resolve_correct(&["A".into()], None, None), None);
    }
}
