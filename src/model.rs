//! Modelo canónico de datos. Todo lo que llega del YAML de autor pasa por
//! `data.rs` y acaba en estas formas; el núcleo de sesión nunca ve la forma
//! "cruda" del fichero.

/// Un test de práctica completo: secuencia ordenada de partes.
/// Inmutable durante toda la sesión.
#[derive(Debug, Clone, PartialEq)]
pub struct TestDefinition {
    pub id: String,
    pub title: String,
    pub description: String,
    pub parts: Vec<Part>,
}

/// Una parte cronometrada: pasaje de lectura + secciones de preguntas.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    /// Único dentro del test; sirve de espacio de nombres para las respuestas.
    pub id: String,
    pub title: String,
    pub timer_seconds: u32,
    pub passage: Passage,
    pub sections: Vec<Section>,
}

/// Material de lectura. Opaco para el núcleo: sólo lo pinta la capa de
/// presentación (los párrafos admiten markdown ligero).
#[derive(Debug, Clone, PartialEq)]
pub struct Passage {
    pub title: String,
    pub paragraphs: Vec<String>,
}

/// Sección de preguntas, ya normalizada a una de las tres variantes.
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    MultipleChoice(QuestionGroup),
    Matching(QuestionGroup),
    FillInBlank(BlankSection),
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuestionGroup {
    pub instructions: String,
    pub questions: Vec<GradableItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlankSection {
    pub instructions: String,
    pub blocks: Vec<ContentBlock>,
}

/// Bloque de una sección de rellenar huecos. Sólo los desplegables puntúan.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Text(String),
    Dropdown(GradableItem),
}

/// Cualquier pregunta/hueco individual que cuenta para la nota.
///
/// `correct` ya viene resuelto desde la carga (la forma por índice tiene
/// prioridad sobre el valor explícito); `None` significa especificación
/// ausente o malformada: el ítem suma al total pero nunca puede puntuar.
#[derive(Debug, Clone, PartialEq)]
pub struct GradableItem {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: Option<String>,
    pub explanation: Option<String>,
}

/// Pantallas de la aplicación.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppState {
    #[default]
    Dashboard,
    Runner,
}
