//! demos/present_forecast.rs
//!
//! Builds the outlook for a day and place, prints the summary panels and
//! writes the hourly charts as SVG files into the current directory.
//!
//! To run this demo:
//! cargo run --example present_forecast

use std::error::Error;

use chrono::{Duration, Utc};
use weather_outlook::{DisplayController, FieldName, LatLon, Outlook, SvgSurface};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    println!("Building outlook from NASA POWER observations...");

    // 1. Create the outlook client (caches in the platform cache dir)
    let outlook = Outlook::new().await?;

    // 2. A date a month from now, in Tbilisi
    let location = LatLon(41.711033, 44.758182);
    let day = Utc::now() + Duration::days(30);

    // 3. Fetch (or load from cache) the 24 hourly records
    let series = outlook
        .forecast()
        .location(location)
        .unix_time(day.timestamp())
        .call()
        .await?;

    // 4. Summarise and draw the default temperature chart
    let mut controller = DisplayController::new(SvgSurface::builder().target("hourly.svg").build());
    let view = controller.present(&series)?;
    println!("{}", serde_json::to_string_pretty(&view)?);

    // 5. Switch the chart to wind speed, as a user picking another series would
    controller.reselect(&series, FieldName::WindSpeed)?;
    println!("Chart state: {:?}", controller.chart_state());

    Ok(())
}
