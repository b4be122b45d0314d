use serde::Serialize;
use utoipa::ToSchema;

use super::geo::Coordinates;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BrazilState {
    /// IBGE code
    #[schema(example = 35)]
    pub id: u32,
    #[schema(example = "SP")]
    pub code: String,
    #[schema(example = "São Paulo")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct City {
    pub id: u64,
    pub name: String,
}

/// Used when the state centre is unknown.
pub const BRAZIL_CENTER: Coordinates = Coordinates::known(-15.5, -56.0);

pub fn fallback_states() -> Vec<BrazilState> {
    [
        (35, "SP", "São Paulo"),
        (33, "RJ", "Rio de Janeiro"),
        (31, "MG", "Minas Gerais"),
        (41, "PR", "Paraná"),
        (43, "RS", "Rio Grande do Sul"),
        (42, "SC", "Santa Catarina"),
    ]
    .into_iter()
    .map(|(id, code, name)| BrazilState {
        id,
        code: code.to_string(),
        name: name.to_string(),
    })
    .collect()
}

/// Ids are the state id followed by the list position (35 -> 350, 351, ...).
pub fn fallback_cities(state_id: u32) -> Vec<City> {
    let names: &[&str] = match state_id {
        35 => &["São Paulo", "Campinas", "Santos", "Ribeirão Preto"],
        33 => &["Rio de Janeiro", "Niterói", "Duque de Caxias", "Nova Iguaçu"],
        31 => &["Belo Horizonte", "Uberlândia", "Contagem", "Juiz de Fora"],
        _ => &["Capital"],
    };

    names
        .iter()
        .enumerate()
        .map(|(index, name)| City {
            id: u64::from(state_id) * 10 + index as u64,
            name: name.to_string(),
        })
        .collect()
}

pub fn state_center(code: &str) -> Coordinates {
    match code.trim().to_uppercase().as_str() {
        "SP" => Coordinates::known(-23.5505, -46.6333),
        "RJ" => Coordinates::known(-22.9068, -43.1729),
        "MG" => Coordinates::known(-19.9167, -43.9345),
        "PR" => Coordinates::known(-25.4284, -49.2733),
        "RS" => Coordinates::known(-30.0346, -51.2177),
        "SC" => Coordinates::known(-27.5954, -48.5480),
        _ => BRAZIL_CENTER,
    }
}

/// Accent-insensitive ordering key so "Amapá" sorts before "Amazonas".
pub fn collation_key(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'Á' | 'À' | 'Â' | 'Ã' => 'a',
            'é' | 'ê' | 'É' | 'Ê' => 'e',
            'í' | 'Í' => 'i',
            'ó' | 'ô' | 'õ' | 'Ó' | 'Ô' | 'Õ' => 'o',
            'ú' | 'ü' | 'Ú' | 'Ü' => 'u',
            'ç' | 'Ç' => 'c',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_cities_known_and_unknown_state() {
        let sp = fallback_cities(35);
        assert_eq!(sp.len(), 4);
        assert_eq!(sp[0], City { id: 350, name: "São Paulo".to_string() });
        assert_eq!(sp[3].id, 353);

        let other = fallback_cities(13);
        assert_eq!(other, vec![City { id: 130, name: "Capital".to_string() }]);
    }

    #[test]
    fn test_state_center_defaults_to_brazil() {
        assert_eq!(state_center("rj"), Coordinates::known(-22.9068, -43.1729));
        assert_eq!(state_center("AM"), BRAZIL_CENTER);
    }

    #[test]
    fn test_fallback_states_have_codes() {
        let states = fallback_states();
        assert_eq!(states.len(), 6);
        assert!(states.iter().any(|s| s.code == "SC" && s.id == 42));
    }

    #[test]
    fn test_collation_ignores_accents_and_case() {
        let mut names = vec!["Amazonas", "Amapá", "acre", "Ceará", "Bahia"];
        names.sort_by_key(|n| collation_key(n));
        assert_eq!(names, vec!["acre", "Amapá", "Amazonas", "Bahia", "Ceará"]);
    }
}
