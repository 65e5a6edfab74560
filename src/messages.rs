//! User facing text for the command line tools, in English and Spanish.

use std::path::Path;

use clap::ValueEnum;

use crate::errors::{CodeProblem, FilterError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Locale {
    #[default]
    En,
    Es,
}

const DISCLAIMER_EN: &str = "\n*** DISCLAIMER ***\n\
This tool is provided as a Proof of Concept (PoC) for educational and demonstration purposes only.\n\
It is not an official tool from Kaspersky, nor does it come with any guarantees or warranties of functionality or support.\n\
Use at your own risk, and always validate the results in your environment.\n";

const DISCLAIMER_ES: &str = "\n*** AVISO ***\n\
Esta herramienta se proporciona como una Prueba de Concepto (PoC) con fines educativos y demostrativos únicamente.\n\
No es una herramienta oficial de Kaspersky, ni ofrece garantías o soporte de funcionalidad.\n\
Úselo bajo su propio riesgo y siempre valide los resultados en su entorno.\n";

/// Message catalog for one locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    pub fn for_locale(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn disclaimer(&self) -> &'static str {
        match self.locale {
            Locale::En => DISCLAIMER_EN,
            Locale::Es => DISCLAIMER_ES,
        }
    }

    pub fn unknown_country(&self) -> &'static str {
        match self.locale {
            Locale::En => "Unknown",
            Locale::Es => "Desconocido",
        }
    }

    pub fn total(&self, n: usize) -> String {
        match self.locale {
            Locale::En => format!("Total records processed: {n}"),
            Locale::Es => format!("Total de registros procesados: {n}"),
        }
    }

    pub fn matched(&self, n: usize) -> String {
        match self.locale {
            Locale::En => format!("Records matching criteria: {n}"),
            Locale::Es => format!("Registros que cumplen los criterios: {n}"),
        }
    }

    pub fn ignored(&self, n: usize) -> String {
        match self.locale {
            Locale::En => format!("Ignored records: {n}"),
            Locale::Es => format!("Registros ignorados: {n}"),
        }
    }

    /// One line naming the country and how many records carried it.
    pub fn found(&self, n: usize, code: &str, name: Option<&str>) -> String {
        let name = name.unwrap_or(self.unknown_country());
        match (self.locale, n) {
            (Locale::En, 0) => format!("No records found with country = '{code}' ({name})."),
            (Locale::En, n) => format!("{n} records found with country = '{code}' ({name})."),
            (Locale::Es, 0) => format!("No se encontraron registros con country = '{code}' ({name})."),
            (Locale::Es, n) => {
                format!("Se encontraron {n} registros con country = '{code}' ({name}).")
            }
        }
    }

    pub fn saved(&self, path: &Path) -> String {
        match self.locale {
            Locale::En => format!("Filtered data saved to: {}", path.display()),
            Locale::Es => format!("Datos filtrados guardados en: {}", path.display()),
        }
    }

    /// `Error: ...` line for a failed run.
    pub fn error(&self, err: &FilterError) -> String {
        let text = match self.locale {
            Locale::En => err.to_string(),
            Locale::Es => spanish_error(err),
        };
        format!("Error: {text}")
    }
}

fn spanish_error(err: &FilterError) -> String {
    match err {
        FilterError::NotFound { path } => {
            format!("archivo de entrada no encontrado: {}", path.display())
        }
        FilterError::Malformed { path, reason } => {
            format!("formato inválido en el archivo de entrada {}: {reason}", path.display())
        }
        FilterError::Empty { path } => format!(
            "el archivo de entrada {} está vacío o no contiene registros",
            path.display()
        ),
        FilterError::InvalidCountryCode { code, reason } => match reason {
            CodeProblem::Length | CodeProblem::NotAlphabetic => format!(
                "código de país inválido: {code}. Debe ser un código ISO 3166-1 alfa-2 de dos letras"
            ),
            CodeProblem::Unassigned => {
                format!("el código de país '{code}' no es válido según ISO 3166-1 alfa-2")
            }
        },
        FilterError::PermissionDenied { path, source } => format!(
            "permiso denegado al acceder a {}. Detalles: {source}",
            path.display()
        ),
        FilterError::Io { path, source } => {
            format!("error de E/S en {}: {source}", path.display())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn found_line_in_both_languages() {
        let en = Messages::for_locale(Locale::En);
        let es = Messages::for_locale(Locale::Es);
        assert_eq!(
            en.found(2, "ES", Some("Spain")),
            "2 records found with country = 'ES' (Spain)."
        );
        assert_eq!(
            es.found(0, "ZZ", None),
            "No se encontraron registros con country = 'ZZ' (Desconocido)."
        );
    }

    #[test]
    fn errors_are_prefixed_and_translated() {
        let err = FilterError::NotFound {
            path: PathBuf::from("feeds/none.json"),
        };
        assert_eq!(
            Messages::default().error(&err),
            "Error: input file not found: feeds/none.json"
        );
        assert_eq!(
            Messages::for_locale(Locale::Es).error(&err),
            "Error: archivo de entrada no encontrado: feeds/none.json"
        );
    }

    #[test]
    fn disclaimer_heading() {
        assert!(Messages::default().disclaimer().contains("*** DISCLAIMER ***"));
        assert!(Messages::for_locale(Locale::Es).disclaimer().contains("*** AVISO ***"));
    }
}
