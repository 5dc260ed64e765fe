// src/data.rs

use crate::model::{Question, Quiz};
use log::error;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Samples {
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub quizzes: Vec<Quiz>,
}

/// Carga los datos de ejemplo desde el YAML embebido
pub fn read_samples_embedded() -> Samples {
    parse_samples(include_str!("data/samples.yaml")).unwrap_or_else(|e| {
        error!("No se pudieron parsear los datos de ejemplo: {e}");
        Samples::default()
    })
}

pub fn parse_samples(raw: &str) -> Result<Samples, serde_yaml::Error> {
    serde_yaml::from_str(raw)
}
