//! Patch DTOs - Documento JSON Patch (RFC 6902) per l'aggiornamento parziale
//!
//! I path vengono risolti in `FilmeField` già in fase di deserializzazione:
//! un path sconosciuto rende il documento invalido prima di toccare il database.

use super::UpdateFilmeDto;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Campi di `UpdateFilmeDto` indirizzabili da un'operazione di patch
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum FilmeField {
    Titulo,
    Genero,
    Duracao,
}

impl FilmeField {
    pub fn name(self) -> &'static str {
        match self {
            FilmeField::Titulo => "titulo",
            FilmeField::Genero => "genero",
            FilmeField::Duracao => "duracao",
        }
    }
}

impl fmt::Display for FilmeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<String> for FilmeField {
    type Error = String;

    fn try_from(path: String) -> Result<Self, Self::Error> {
        let segment = path.strip_prefix('/').unwrap_or(&path);
        match segment.to_ascii_lowercase().as_str() {
            "titulo" => Ok(FilmeField::Titulo),
            "genero" => Ok(FilmeField::Genero),
            "duracao" => Ok(FilmeField::Duracao),
            _ => Err(format!(
                "The target location specified by path segment '{segment}' was not found."
            )),
        }
    }
}

impl From<FilmeField> for String {
    fn from(value: FilmeField) -> Self {
        format!("/{}", value.name())
    }
}

/// Singola operazione di un documento di patch
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    Add { path: FilmeField, value: Value },
    Remove { path: FilmeField },
    Replace { path: FilmeField, value: Value },
    Move { from: FilmeField, path: FilmeField },
    Copy { from: FilmeField, path: FilmeField },
    Test { path: FilmeField, value: Value },
}

/// Operazione fallita, associata al campo che avrebbe dovuto modificare
#[derive(Debug, Clone, PartialEq)]
pub struct PatchError {
    pub field: FilmeField,
    pub message: String,
}

impl PatchOperation {
    pub fn path(&self) -> FilmeField {
        match self {
            PatchOperation::Add { path, .. }
            | PatchOperation::Remove { path }
            | PatchOperation::Replace { path, .. }
            | PatchOperation::Move { path, .. }
            | PatchOperation::Copy { path, .. }
            | PatchOperation::Test { path, .. } => *path,
        }
    }

    /// Applica l'operazione al DTO. In caso di errore il DTO resta invariato.
    pub fn apply(&self, dto: &mut UpdateFilmeDto) -> Result<(), PatchError> {
        let fail = |message: String| PatchError {
            field: self.path(),
            message,
        };

        match self {
            // Su un oggetto a campi fissi add e replace coincidono
            PatchOperation::Add { path, value } | PatchOperation::Replace { path, value } => {
                write_field(dto, *path, value.clone()).map_err(fail)
            }
            PatchOperation::Remove { path } => {
                clear_field(dto, *path);
                Ok(())
            }
            PatchOperation::Copy { from, path } => {
                let value = read_field(dto, *from);
                write_field(dto, *path, value).map_err(fail)
            }
            PatchOperation::Move { from, path } => {
                if from == path {
                    return Ok(());
                }
                let value = read_field(dto, *from);
                write_field(dto, *path, value).map_err(fail)?;
                clear_field(dto, *from);
                Ok(())
            }
            PatchOperation::Test { path, value } => {
                let current = read_field(dto, *path);
                if same_value(&current, value) {
                    Ok(())
                } else {
                    Err(fail(format!(
                        "The current value '{current}' at path '{path}' is not equal to the test value '{value}'."
                    )))
                }
            }
        }
    }
}

/// Applica le operazioni in ordine. Un'operazione fallita viene registrata
/// e l'applicazione prosegue con la successiva.
pub fn apply_patch(operations: &[PatchOperation], dto: &mut UpdateFilmeDto) -> Vec<PatchError> {
    operations
        .iter()
        .filter_map(|operation| operation.apply(dto).err())
        .collect()
}

// 175 e 175.0 sono lo stesso numero
fn same_value(current: &Value, expected: &Value) -> bool {
    match (current, expected) {
        (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
        _ => current == expected,
    }
}

fn read_field(dto: &UpdateFilmeDto, field: FilmeField) -> Value {
    match field {
        FilmeField::Titulo => dto.titulo.clone().map(Value::String).unwrap_or(Value::Null),
        FilmeField::Genero => dto.genero.clone().map(Value::String).unwrap_or(Value::Null),
        FilmeField::Duracao => dto.duracao.map(Value::from).unwrap_or(Value::Null),
    }
}

fn clear_field(dto: &mut UpdateFilmeDto, field: FilmeField) {
    match field {
        FilmeField::Titulo => dto.titulo = None,
        FilmeField::Genero => dto.genero = None,
        FilmeField::Duracao => dto.duracao = None,
    }
}

fn write_field(dto: &mut UpdateFilmeDto, field: FilmeField, value: Value) -> Result<(), String> {
    let invalid = |value: &Value| format!("The value '{value}' is invalid for target location.");

    match (field, value) {
        (field, Value::Null) => clear_field(dto, field),
        (FilmeField::Titulo, Value::String(titulo)) => dto.titulo = Some(titulo),
        (FilmeField::Genero, Value::String(genero)) => dto.genero = Some(genero),
        (FilmeField::Duracao, Value::Number(number)) => {
            let duracao = number
                .as_i64()
                .and_then(|n| i32::try_from(n).ok())
                .ok_or_else(|| invalid(&Value::Number(number.clone())))?;
            dto.duracao = Some(duracao);
        }
        (_, other) => return Err(invalid(&other)),
    }
    Ok(())
}
