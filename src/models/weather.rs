use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, Serialize, FromRow)]
pub struct WeatherData {
    pub id: Uuid,
    pub location: String,
    pub temperature: Option<f64>,
    pub condition: Option<String>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    pub pressure: Option<f64>,
    pub forecast_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

// Cuerpo del upsert; la ubicación viene en la URL y la fecha es siempre hoy
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpsertWeatherSchema {
    pub temperature: Option<f64>,
    pub condition: Option<String>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    pub pressure: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherIcon {
    Rain,
    Sun,
    Cloud,
}

impl WeatherIcon {
    pub fn from_condition(condition: Option<&str>) -> Self {
        let condition = condition.unwrap_or_default().to_lowercase();
        if condition.contains("hujan") {
            WeatherIcon::Rain
        } else if condition.contains("cerah") {
            WeatherIcon::Sun
        } else {
            WeatherIcon::Cloud
        }
    }
}

/// Tarjeta de clima del inicio: la primera fila del día o los valores por defecto de Jakarta.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentWeather {
    pub location: String,
    pub temperature: Option<f64>,
    pub condition: Option<String>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    pub pressure: Option<f64>,
    pub icon: WeatherIcon,
}

impl CurrentWeather {
    pub fn from_rows(rows: &[WeatherData]) -> Self {
        match rows.first() {
            Some(w) => CurrentWeather {
                location: w.location.clone(),
                temperature: w.temperature,
                condition: w.condition.clone(),
                humidity: w.humidity,
                wind_speed: w.wind_speed,
                pressure: w.pressure,
                icon: WeatherIcon::from_condition(w.condition.as_deref()),
            },
            None => CurrentWeather {
                location: "Jakarta".to_string(),
                temperature: Some(28.0),
                condition: Some("Cerah berawan".to_string()),
                humidity: Some(65.0),
                wind_speed: Some(12.0),
                pressure: Some(1013.0),
                icon: WeatherIcon::Sun,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_follows_condition_keywords() {
        assert_eq!(WeatherIcon::from_condition(Some("Hujan ringan")), WeatherIcon::Rain);
        assert_eq!(WeatherIcon::from_condition(Some("CERAH")), WeatherIcon::Sun);
        assert_eq!(WeatherIcon::from_condition(Some("Berawan")), WeatherIcon::Cloud);
        assert_eq!(WeatherIcon::from_condition(None), WeatherIcon::Cloud);
    }

    #[test]
    fn empty_rows_fall_back_to_jakarta() {
        let current = CurrentWeather::from_rows(&[]);
        assert_eq!(current.location, "Jakarta");
        assert_eq!(current.temperature, Some(28.0));
        assert_eq!(current.pressure, Some(1013.0));
        assert_eq!(current.icon, WeatherIcon::Sun);
    }

    #[test]
    fn first_row_wins() {
        let today = Utc::now().date_naive();
        let rows = vec![
            WeatherData {
                id: Uuid::new_v4(),
                location: "Bandung".into(),
                temperature: Some(22.5),
                condition: Some("Hujan lebat".into()),
                humidity: None,
                wind_speed: None,
                pressure: None,
                forecast_date: today,
                created_at: Utc::now(),
            },
            WeatherData {
                id: Uuid::new_v4(),
                location: "Medan".into(),
                temperature: Some(31.0),
                condition: None,
                humidity: None,
                wind_speed: None,
                pressure: None,
                forecast_date: today,
                created_at: Utc::now(),
            },
        ];
        let current = CurrentWeather::from_rows(&rows);
        assert_eq!(current.location, "Bandung");
        assert_eq!(current.icon, WeatherIcon::Rain);
        assert_eq!(current.humidity, None);
    }
}
