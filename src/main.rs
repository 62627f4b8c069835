use anyhow::Result;

use nimbus_core::{Config, ConfigError};
use nimbus_ui::{Presenter, RenderSurface, TerminalSurface};
use nimbus_weather::{daytime, LocationProvider, WeatherProvider};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize core
    nimbus_core::init()?;

    let mut presenter = Presenter::new(TerminalSurface::new());
    presenter.surface_mut().set_location("Fetching Location...");

    match Config::load_validated() {
        Ok((config, _validation)) => {
            tracing::info!("Nimbus widget started");
            run_pipeline(&config, &mut presenter).await;
        }
        Err(err) => report_config_failure(&mut presenter, &err),
    }

    presenter.surface().draw();
    Ok(())
}

/// A bad config file never aborts the process: the widget draws its
/// placeholder state with a static explanation while the detail goes to
/// the logs.
fn report_config_failure<S: RenderSurface>(presenter: &mut Presenter<S>, err: &anyhow::Error) {
    tracing::error!("configuration error: {:#}", err);
    presenter.surface_mut().set_location("Error");
    presenter
        .surface_mut()
        .set_error(ConfigError::Invalid(err.to_string()).user_message());
}

/// Locate, fetch, render. One pass per launch; every failure writes a
/// static message to the error region and leaves the rest of the widget
/// in whatever state it had reached.
async fn run_pipeline(config: &Config, presenter: &mut Presenter<TerminalSurface>) {
    if !config.weather.is_configured() {
        let err = ConfigError::MissingSetting("weather.api_key".to_string());
        tracing::error!("{}", err);
        presenter.surface_mut().set_location("Error");
        presenter.surface_mut().set_error(err.user_message());
        return;
    }

    let location_provider = match LocationProvider::new() {
        Ok(provider) => provider,
        Err(err) => {
            tracing::error!("geolocation setup failed: {}", err);
            presenter.surface_mut().set_location("Error");
            presenter.surface_mut().set_error(err.user_message());
            return;
        }
    };

    let coords = match location_provider.acquire().await {
        Ok(coords) => coords,
        Err(err) => {
            tracing::warn!("geolocation failed: {}", err);
            presenter
                .surface_mut()
                .set_location("Location Access Denied");
            presenter.surface_mut().set_error(err.user_message());
            return;
        }
    };

    let provider = WeatherProvider::new(&config.weather.api_base_url, &config.weather.api_key);
    let report = match provider.fetch(coords.latitude, coords.longitude).await {
        Ok(report) => report,
        Err(err) => {
            tracing::error!("weather fetch failed: {}", err);
            presenter.surface_mut().set_error(err.user_message());
            return;
        }
    };

    // The API reports UTC timestamps and no daylight flag, so classify
    // from the machine's wall clock.
    let is_daytime = daytime::is_daytime_current(daytime::local_hour(report.current.timestamp));

    presenter.render_current(&report.current, is_daytime, &coords.label());
    presenter.render_hourly(&report.hourly);
}
