//! Query DTOs - Data Transfer Objects per query string

use serde::{Deserialize, Serialize};

fn default_take() -> i64 {
    10
}

/// DTO per query parameters di paginazione: /filme?skip=0&take=10
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_take")]
    pub take: i64,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            take: default_take(),
        }
    }
}

impl PageQuery {
    /// Valori negativi valgono 0; nessun limite superiore su `take`
    pub fn clamped(self) -> Self {
        Self {
            skip: self.skip.max(0),
            take: self.take.max(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_values_are_clamped_to_zero() {
        let query = PageQuery { skip: -5, take: -1 }.clamped();
        assert_eq!(query, PageQuery { skip: 0, take: 0 });
    }

    #[test]
    fn large_take_is_not_capped() {
        let query = PageQuery { skip: 3, take: 5_000 }.clamped();
        assert_eq!(query.take, 5_000);
    }

    #[test]
    fn missing_parameters_use_defaults() {
        let query: PageQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query, PageQuery::default());
    }
}
