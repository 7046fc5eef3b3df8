use std::path::PathBuf;
use std::sync::Arc;

use chrono_tz::Tz;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Config, LogFormat};
use moneymark_core::{
    analytics::{AnalyticsService, AnalyticsServiceTrait},
    deals::{DealService, DealServiceTrait},
    events::{DomainEvent, DomainEventSink, SubscriberEventSink},
    profile::{ProfileService, ProfileServiceTrait},
};
use moneymark_storage_json::{self as storage, DealRepository, ProfileRepository};

pub struct AppState {
    pub deal_service: Arc<dyn DealServiceTrait>,
    pub profile_service: Arc<dyn ProfileServiceTrait>,
    pub analytics_service: Arc<dyn AnalyticsServiceTrait>,
    pub calendar_tz: Tz,
    pub data_dir: PathBuf,
}

pub fn init_tracing(log_format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match log_format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<AppState> {
    let data_dir = storage::init(&config.data_dir)?;

    let event_sink = Arc::new(SubscriberEventSink::new());
    event_sink.subscribe(log_domain_event);
    let domain_event_sink: Arc<dyn DomainEventSink> = event_sink;

    let deal_repository = Arc::new(DealRepository::new(&data_dir));
    let profile_repository = Arc::new(ProfileRepository::new(&data_dir));

    let deal_service: Arc<dyn DealServiceTrait> =
        Arc::new(DealService::new(deal_repository, domain_event_sink.clone()));
    let profile_service: Arc<dyn ProfileServiceTrait> =
        Arc::new(ProfileService::new(profile_repository, domain_event_sink));
    let analytics_service: Arc<dyn AnalyticsServiceTrait> = Arc::new(AnalyticsService::new(
        deal_service.clone(),
        profile_service.clone(),
        config.calendar_tz,
    ));

    tracing::debug!(
        "State ready: data dir {}, calendar zone {}",
        data_dir.display(),
        config.calendar_tz
    );

    Ok(AppState {
        deal_service,
        profile_service,
        analytics_service,
        calendar_tz: config.calendar_tz,
        data_dir,
    })
}

fn log_domain_event(event: &DomainEvent) {
    match event {
        DomainEvent::DealsAdded { deal_ids } => {
            tracing::info!(count = deal_ids.len(), "Deals added")
        }
        DomainEvent::DealsCleared => tracing::info!("Deals cleared"),
        DomainEvent::ProfileUpdated { monthly_goal } => {
            tracing::info!(%monthly_goal, "Profile updated")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use moneymark_core::deals::NewDeal;
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    fn config(data_dir: PathBuf) -> Config {
        Config {
            data_dir,
            calendar_tz: chrono_tz::UTC,
            log_format: LogFormat::Text,
        }
    }

    #[test]
    fn test_state_persists_across_rebuilds() {
        let dir = tempdir().unwrap();
        let config = config(dir.path().join("data"));
        let date = Utc.with_ymd_and_hms(2025, 1, 2, 10, 0, 0).unwrap();

        let state = build_state(&config).unwrap();
        state
            .deal_service
            .add_deal(NewDeal {
                customer_name: "Pat".to_string(),
                vehicle: "Sentra".to_string(),
                commission: dec!(350),
                date: Some(date),
                ..Default::default()
            })
            .unwrap();
        state.profile_service.set_monthly_goal(dec!(7000)).unwrap();

        let reopened = build_state(&config).unwrap();
        assert_eq!(reopened.deal_service.get_deals().len(), 1);
        assert_eq!(reopened.profile_service.get_profile().monthly_goal, dec!(7000));

        let dashboard = reopened.analytics_service.get_dashboard(date);
        assert_eq!(dashboard.goal.month_to_date_total, dec!(350));
        assert_eq!(dashboard.goal.percent, 5);
    }
}
