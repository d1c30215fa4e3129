use crate::model::{ContentBlock, GradableItem, Part, Section};
use egui::{Color32, ComboBox, RichText, Ui};
use std::collections::HashMap;

/// Cambios de respuesta recogidos durante el pintado: `(pregunta, valor)`.
/// La capa de presentación nunca muta el estado directamente; el runner los
/// reenvía al callback de la aplicación al terminar el fotograma.
pub type AnswerChanges = Vec<(String, String)>;

/// Pinta todas las secciones de la parte, ya normalizadas a sus tres
/// variantes, deshabilitando la entrada cuando la parte es de sólo lectura.
pub fn show_sections(
    ui: &mut Ui,
    part: &Part,
    answers: &HashMap<String, String>,
    submitted: bool,
    read_only: bool,
    changes: &mut AnswerChanges,
) {
    let enabled = !(submitted || read_only);
    for (si, section) in part.sections.iter().enumerate() {
        match section {
            Section::MultipleChoice(group) => {
                instructions(ui, &group.instructions);
                for question in &group.questions {
                    radio_question(ui, question, answers, submitted, enabled, changes);
                }
            }
            Section::Matching(group) => {
                instructions(ui, &group.instructions);
                for question in &group.questions {
                    dropdown_question(
                        ui,
                        (&part.id, si, &question.id),
                        question,
                        answers,
                        submitted,
                        enabled,
                        changes,
                    );
                }
            }
            Section::FillInBlank(blanks) => {
                instructions(ui, &blanks.instructions);
                ui.horizontal_wrapped(|ui| {
                    for (bi, block) in blanks.blocks.iter().enumerate() {
                        match block {
                            ContentBlock::Text(text) => {
                                ui.label(text);
                            }
                            ContentBlock::Dropdown(item) => {
                                combo(
                                    ui,
                                    (&part.id, si, bi, &item.id),
                                    item,
                                    answers.get(&item.id).map(String::as_str),
                                    enabled,
                                    changes,
                                );
                            }
                        }
                    }
                });
                if submitted {
                    for block in &blanks.blocks {
                        if let ContentBlock::Dropdown(item) = block {
                            feedback(ui, item, answers.get(&item.id).map(String::as_str));
                        }
                    }
                }
            }
        }
        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);
    }
}

fn instructions(ui: &mut Ui, text: &str) {
    if !text.is_empty() {
        ui.label(RichText::new(text).italics());
        ui.add_space(6.0);
    }
}

fn radio_question(
    ui: &mut Ui,
    question: &GradableItem,
    answers: &HashMap<String, String>,
    submitted: bool,
    enabled: bool,
    changes: &mut AnswerChanges,
) {
    let current = answers.get(&question.id).map(String::as_str);
    ui.label(RichText::new(&question.prompt).strong());
    ui.add_enabled_ui(enabled, |ui| {
        for option in &question.options {
            if ui.radio(current == Some(option.as_str()), option).clicked() {
                changes.push((question.id.clone(), option.clone()));
            }
        }
    });
    if submitted {
        feedback(ui, question, current);
    }
    ui.add_space(10.0);
}

fn dropdown_question(
    ui: &mut Ui,
    salt: (&String, usize, &String),
    question: &GradableItem,
    answers: &HashMap<String, String>,
    submitted: bool,
    enabled: bool,
    changes: &mut AnswerChanges,
) {
    let current = answers.get(&question.id).map(String::as_str);
    ui.horizontal(|ui| {
        ui.label(&question.prompt);
        combo(
            ui,
            (salt.0, salt.1, 0, salt.2),
            question,
            current,
            enabled,
            changes,
        );
    });
    if submitted {
        feedback(ui, question, current);
    }
    ui.add_space(6.0);
}

fn combo(
    ui: &mut Ui,
    salt: (&String, usize, usize, &String),
    item: &GradableItem,
    current: Option<&str>,
    enabled: bool,
    changes: &mut AnswerChanges,
) {
    let selected = current.unwrap_or("— elige —");
    ui.add_enabled_ui(enabled, |ui| {
        ComboBox::from_id_salt(salt)
            .selected_text(selected)
            .show_ui(ui, |ui| {
                for option in &item.options {
                    if ui
                        .selectable_label(current == Some(option.as_str()), option)
                        .clicked()
                    {
                        changes.push((item.id.clone(), option.clone()));
                    }
                }
            });
    });
}

/// Corrección visible tras el envío: acierto, respuesta esperada y
/// explicación si la hay.
fn feedback(ui: &mut Ui, item: &GradableItem, current: Option<&str>) {
    let expected = item.correct.as_deref();
    if expected.is_some() && current == expected {
        ui.label(RichText::new("✔ Correcta").color(Color32::LIGHT_GREEN));
        return;
    }
    ui.label(RichText::new("✘ Incorrecta").color(Color32::LIGHT_RED));
    if let Some(value) = expected {
        ui.label(format!("Respuesta: {value}"));
    }
    if let Some(explanation) = &item.explanation {
        ui.label(RichText::new(explanation).italics().weak());
    }
}
