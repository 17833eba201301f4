// Time-series sample domain model

/// One row of a station's pollutant time series.
///
/// The upstream feed marks gaps with a literal "NaN" token; the parser
/// coerces those (and any other non-numeric cell) to 0.0 so downstream
/// display math always receives a number.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub dt_time: String,
    pub pm25: f64,
    pub pm10: f64,
}

impl Sample {
    pub fn new(dt_time: String, pm25: f64, pm10: f64) -> Self {
        Self { dt_time, pm25, pm10 }
    }
}
