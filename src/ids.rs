// src/ids.rs
//
// Identificadores aleatorios (UUID v4). No dependen del tamaño del banco,
// así que borrar preguntas no provoca colisiones.

use uuid::Uuid;

pub fn question_id() -> String {
    format!("q-{}", Uuid::new_v4().simple())
}

pub fn quiz_id() -> String {
    format!("quiz-{}", Uuid::new_v4().simple())
}
