//! Filme DTOs - Data Transfer Objects per filmi
//!
//! I campi in input sono tutti `Option`: un campo mancante nel JSON arriva
//! come `None` e viene segnalato da `validator`, non dal parser.

use crate::entities::Filme;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

/// DTO per creare un nuovo filme (senza id, assegnato dal database)
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFilmeDto {
    #[validate(
        required(message = "O título do filme é obrigatório"),
        custom(function = "titulo_not_blank")
    )]
    pub titulo: Option<String>,

    #[validate(
        required(message = "O gênero do filme é obrigatório"),
        custom(function = "genero_not_blank"),
        length(max = 50, message = "O gênero deve ter no máximo 50 caracteres")
    )]
    pub genero: Option<String>,

    #[validate(
        required(message = "A duração do filme é obrigatória"),
        range(min = 70, max = 600, message = "A duração deve ter entre 70 e 600 minutos")
    )]
    pub duracao: Option<i32>,
}

/// DTO per aggiornare un filme, sia con PUT (completo) sia con PATCH
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFilmeDto {
    #[validate(
        required(message = "O título do filme é obrigatório"),
        custom(function = "titulo_not_blank")
    )]
    pub titulo: Option<String>,

    #[validate(
        required(message = "O gênero do filme é obrigatório"),
        custom(function = "genero_not_blank"),
        length(max = 50, message = "O gênero deve ter no máximo 50 caracteres")
    )]
    pub genero: Option<String>,

    #[validate(
        required(message = "A duração do filme é obrigatória"),
        range(min = 70, max = 600, message = "A duração deve ter entre 70 e 600 minutos")
    )]
    pub duracao: Option<i32>,
}

// Una stringa di soli spazi conta come assente
fn not_blank(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some(Cow::Borrowed(message));
        return Err(error);
    }
    Ok(())
}

fn titulo_not_blank(value: &str) -> Result<(), ValidationError> {
    not_blank(value, "O título do filme é obrigatório")
}

fn genero_not_blank(value: &str) -> Result<(), ValidationError> {
    not_blank(value, "O gênero do filme é obrigatório")
}

/// Proiezione in output per la lista dei filmi
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReadFilmeDto {
    pub id: i32,
    pub titulo: String,
    pub genero: String,
    pub duracao: i32,
    pub hora_da_consulta: DateTime<Utc>,
}

impl From<CreateFilmeDto> for Filme {
    /// L'id resta a 0 finché il database non ne assegna uno.
    /// Va chiamato solo dopo `validate()`.
    fn from(value: CreateFilmeDto) -> Self {
        Self {
            id: 0,
            titulo: value.titulo.unwrap_or_default(),
            genero: value.genero.unwrap_or_default(),
            duracao: value.duracao.unwrap_or_default(),
        }
    }
}

impl From<Filme> for ReadFilmeDto {
    fn from(value: Filme) -> Self {
        Self {
            id: value.id,
            titulo: value.titulo,
            genero: value.genero,
            duracao: value.duracao,
            hora_da_consulta: Utc::now(),
        }
    }
}

impl From<&Filme> for UpdateFilmeDto {
    fn from(value: &Filme) -> Self {
        Self {
            titulo: Some(value.titulo.clone()),
            genero: Some(value.genero.clone()),
            duracao: Some(value.duracao),
        }
    }
}

impl UpdateFilmeDto {
    /// Copia sul filme i campi presenti; quelli a `None` restano invariati.
    /// L'id non viene mai toccato.
    pub fn apply_to(&self, filme: &mut Filme) {
        if let Some(ref titulo) = self.titulo {
            filme.titulo = titulo.clone();
        }
        if let Some(ref genero) = self.genero {
            filme.genero = genero.clone();
        }
        if let Some(duracao) = self.duracao {
            filme.duracao = duracao;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_filme() -> Filme {
        Filme {
            id: 7,
            titulo: "Bacurau".to_string(),
            genero: "Suspense".to_string(),
            duracao: 131,
        }
    }

    #[test]
    fn create_dto_maps_to_filme_without_id() {
        let dto = CreateFilmeDto {
            titulo: Some("Bacurau".to_string()),
            genero: Some("Suspense".to_string()),
            duracao: Some(131),
        };
        let filme = Filme::from(dto);
        assert_eq!(filme.id, 0);
        assert_eq!(filme.titulo, "Bacurau");
        assert_eq!(filme.genero, "Suspense");
        assert_eq!(filme.duracao, 131);
    }

    #[test]
    fn read_dto_copies_every_field() {
        let dto = ReadFilmeDto::from(sample_filme());
        assert_eq!(dto.id, 7);
        assert_eq!(dto.titulo, "Bacurau");
        assert_eq!(dto.genero, "Suspense");
        assert_eq!(dto.duracao, 131);
    }

    #[test]
    fn read_dto_serializes_in_camel_case() {
        let json = serde_json::to_value(ReadFilmeDto::from(sample_filme())).unwrap();
        assert!(json.get("horaDaConsulta").is_some());
        assert!(json.get("hora_da_consulta").is_none());
    }

    #[test]
    fn update_dto_round_trips_through_filme() {
        let mut filme = sample_filme();
        let dto = UpdateFilmeDto::from(&filme);
        dto.apply_to(&mut filme);
        assert_eq!(filme, sample_filme());
    }

    #[test]
    fn apply_to_leaves_absent_fields_untouched() {
        let mut filme = sample_filme();
        let dto = UpdateFilmeDto {
            titulo: Some("Aquarius".to_string()),
            genero: None,
            duracao: None,
        };
        dto.apply_to(&mut filme);
        assert_eq!(filme.id, 7);
        assert_eq!(filme.titulo, "Aquarius");
        assert_eq!(filme.genero, "Suspense");
        assert_eq!(filme.duracao, 131);
    }

    #[test]
    fn validation_reports_every_missing_field() {
        let errors = CreateFilmeDto::default().validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("titulo"));
        assert!(fields.contains_key("genero"));
        assert!(fields.contains_key("duracao"));
    }

    #[test]
    fn validation_rejects_long_genero_and_short_duracao() {
        let dto = UpdateFilmeDto {
            titulo: Some("Bacurau".to_string()),
            genero: Some("x".repeat(51)),
            duracao: Some(10),
        };
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(!fields.contains_key("titulo"));
        assert!(fields.contains_key("genero"));
        assert!(fields.contains_key("duracao"));
    }

    #[test]
    fn validation_rejects_blank_strings() {
        let dto = CreateFilmeDto {
            titulo: Some("   ".to_string()),
            genero: Some("\t".to_string()),
            duracao: Some(120),
        };
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(
            fields["titulo"][0].message.as_deref(),
            Some("O título do filme é obrigatório")
        );
        assert_eq!(
            fields["genero"][0].message.as_deref(),
            Some("O gênero do filme é obrigatório")
        );
        assert!(!fields.contains_key("duracao"));
    }

    #[test]
    fn validation_accepts_complete_dto() {
        assert!(UpdateFilmeDto::from(&sample_filme()).validate().is_ok());
    }
}
