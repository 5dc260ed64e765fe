// src/config.rs

use std::path::PathBuf;

/// Configuración de la aplicación
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Directorio de los ficheros JSON (sólo escritorio)
    pub data_dir: PathBuf,
    /// Cargar las preguntas y quizzes de ejemplo si no hay nada guardado
    pub seed_samples: bool,
    /// Categorías que ofrece el editor
    pub categories: Vec<String>,
    /// Tamaños de quiz que ofrece el diálogo de creación
    pub count_choices: Vec<usize>,
    pub default_count: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            seed_samples: true,
            categories: ["General", "Science", "History", "Geography", "Art", "Sports"]
                .into_iter()
                .map(String::from)
                .collect(),
            count_choices: vec![5, 10, 15, 20],
            default_count: 10,
        }
    }
}

impl AppConfig {
    /// Lee `QUIZ_CREATOR_DATA_DIR` y `QUIZ_CREATOR_SEED_SAMPLES` del entorno.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// En el navegador no hay entorno: se usan los valores fijados al compilar.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| match name {
            "QUIZ_CREATOR_DATA_DIR" => option_env!("QUIZ_CREATOR_DATA_DIR").map(String::from),
            "QUIZ_CREATOR_SEED_SAMPLES" => {
                option_env!("QUIZ_CREATOR_SEED_SAMPLES").map(String::from)
            }
            _ => None,
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        Self {
            data_dir: lookup("QUIZ_CREATOR_DATA_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(default.data_dir),
            seed_samples: lookup("QUIZ_CREATOR_SEED_SAMPLES")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(default.seed_samples),
            ..default
        }
    }

    /// Tamaño inicial del diálogo; si no está entre las opciones, la primera.
    pub fn initial_count(&self) -> usize {
        if self.count_choices.contains(&self.default_count) {
            self.default_count
        } else {
            self.count_choices.first().copied().unwrap_or(self.default_count)
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("quiz_creator")
}

#[cfg(target_arch = "wasm32")]
fn default_data_dir() -> PathBuf {
    PathBuf::new()
}
