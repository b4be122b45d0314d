use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::modules::environment::application::domain::geo::Coordinates;
use crate::modules::environment::application::domain::locations::{BrazilState, City};
use crate::modules::environment::application::ports::outgoing::{
    LocationDirectory, LocationError,
};

#[derive(Debug, Deserialize)]
struct IbgeState {
    id: u32,
    sigla: String,
    nome: String,
}

#[derive(Debug, Deserialize)]
struct IbgeMunicipality {
    id: u64,
    nome: String,
}

/// Nominatim returns coordinates as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

impl NominatimPlace {
    fn coordinates(&self) -> Result<Coordinates, LocationError> {
        let lat: f64 = self
            .lat
            .parse()
            .map_err(|_| LocationError::Decode(format!("bad latitude '{}'", self.lat)))?;
        let lng: f64 = self
            .lon
            .parse()
            .map_err(|_| LocationError::Decode(format!("bad longitude '{}'", self.lon)))?;
        Coordinates::new(lat, lng).map_err(|e| LocationError::Decode(e.to_string()))
    }
}

/// IBGE localidades for states and municipalities, Nominatim for geocoding.
#[derive(Clone)]
pub struct HttpLocationDirectory {
    client: reqwest::Client,
    ibge_url: String,
    nominatim_url: String,
}

impl HttpLocationDirectory {
    pub fn new(
        client: reqwest::Client,
        ibge_url: impl Into<String>,
        nominatim_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            ibge_url: ibge_url.into(),
            nominatim_url: nominatim_url.into(),
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, LocationError> {
        let response = request
            .send()
            .await
            .map_err(|e| LocationError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LocationError::Status(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| LocationError::Decode(e.to_string()))
    }
}

#[async_trait]
impl LocationDirectory for HttpLocationDirectory {
    async fn states(&self) -> Result<Vec<BrazilState>, LocationError> {
        let url = format!("{}/estados", self.ibge_url);
        let states: Vec<IbgeState> = self.fetch(self.client.get(url)).await?;

        Ok(states
            .into_iter()
            .map(|s| BrazilState {
                id: s.id,
                code: s.sigla,
                name: s.nome,
            })
            .collect())
    }

    async fn cities(&self, state_id: u32) -> Result<Vec<City>, LocationError> {
        let url = format!("{}/estados/{}/municipios", self.ibge_url, state_id);
        let cities: Vec<IbgeMunicipality> = self.fetch(self.client.get(url)).await?;

        Ok(cities
            .into_iter()
            .map(|c| City {
                id: c.id,
                name: c.nome,
            })
            .collect())
    }

    async fn geocode(&self, city: &str, state: &str) -> Result<Option<Coordinates>, LocationError> {
        let query = format!("{}, {}, Brasil", city, state);
        let request = self.client.get(&self.nominatim_url).query(&[
            ("format", "json"),
            ("q", query.as_str()),
            ("limit", "1"),
        ]);
        let places: Vec<NominatimPlace> = self.fetch(request).await?;

        places.first().map(NominatimPlace::coordinates).transpose()
    }
}
