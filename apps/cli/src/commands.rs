use anyhow::{anyhow, Context};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::cli::{Cli, Commands};
use crate::main_lib::AppState;
use crate::render;
use moneymark_core::deals::{parse_commission, NewDeal};
use moneymark_core::profile::{parse_monthly_goal, ProfileUpdate};

pub fn run(cli: Cli, state: &AppState) -> anyhow::Result<()> {
    let json = cli.json;
    let now = Utc::now();
    match cli.command {
        Commands::AddDeal {
            customer,
            vehicle,
            commission,
            deal_number,
            date,
        } => {
            let new_deal = NewDeal {
                id: None,
                customer_name: customer,
                vehicle,
                deal_number,
                commission: parse_commission(&commission)?,
                date: date
                    .map(|date| sale_instant(date, now, state.calendar_tz))
                    .transpose()?,
            };
            let deal = state.deal_service.add_deal(new_deal)?;
            emit(json, &deal, || {
                format!(
                    "Added {} for {} ({})\n",
                    render::format_currency(deal.commission),
                    deal.customer_name,
                    deal.vehicle
                )
            })
        }
        Commands::SetGoal { amount } => {
            let profile = state
                .profile_service
                .set_monthly_goal(parse_monthly_goal(&amount)?)?;
            emit(json, &profile, || {
                format!(
                    "Monthly goal set to {}\n",
                    render::format_currency(profile.monthly_goal)
                )
            })
        }
        Commands::Profile {
            name,
            brand,
            avg_cars,
            goal,
        } => {
            let update = ProfileUpdate {
                name,
                brand,
                avg_monthly_cars: avg_cars,
                monthly_goal: goal.as_deref().map(parse_monthly_goal).transpose()?,
            };
            let profile = if is_empty_update(&update) {
                state.profile_service.get_profile()
            } else {
                state.profile_service.update_profile(update)?
            };
            emit(json, &profile, || render::profile(&profile))
        }
        Commands::Dashboard => {
            let summary = state.analytics_service.get_dashboard(now);
            emit(json, &summary, || render::dashboard(&summary, state.calendar_tz))
        }
        Commands::Analytics { range } => {
            let summary = state.analytics_service.get_range_summary(range, now);
            emit(json, &summary, || render::range_summary(&summary))
        }
        Commands::Deals { limit } => {
            let deals = match limit {
                Some(limit) => state.deal_service.recent_deals(limit),
                None => state.deal_service.get_deals(),
            };
            emit(json, &deals, || {
                if deals.is_empty() {
                    "No deals yet\n".to_string()
                } else {
                    render::deal_table(&deals, state.calendar_tz)
                }
            })
        }
        Commands::Reset { profile, deals } => {
            let (reset_profile, reset_deals) = if profile || deals {
                (profile, deals)
            } else {
                (true, true)
            };
            if reset_deals {
                state.deal_service.wipe_all();
            }
            if reset_profile {
                state.profile_service.reset_to_defaults();
            }
            let report = ResetReport {
                profile: reset_profile,
                deals: reset_deals,
            };
            emit(json, &report, || {
                format!(
                    "Reset {} in {}\n",
                    report.describe(),
                    state.data_dir.display()
                )
            })
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResetReport {
    profile: bool,
    deals: bool,
}

impl ResetReport {
    fn describe(&self) -> &'static str {
        match (self.profile, self.deals) {
            (true, true) => "profile and deals",
            (true, false) => "profile",
            _ => "deals",
        }
    }
}

fn emit<T, F>(json: bool, value: &T, text: F) -> anyhow::Result<()>
where
    T: Serialize,
    F: FnOnce() -> String,
{
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", text());
    }
    Ok(())
}

fn is_empty_update(update: &ProfileUpdate) -> bool {
    update.name.is_none()
        && update.brand.is_none()
        && update.avg_monthly_cars.is_none()
        && update.monthly_goal.is_none()
}

/// The sale date at the current local time of day.
fn sale_instant(date: NaiveDate, now: DateTime<Utc>, tz: Tz) -> anyhow::Result<DateTime<Utc>> {
    let time = now.with_timezone(&tz).time();
    tz.from_local_datetime(&date.and_time(time))
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| anyhow!("{} {} does not exist in {}", date, time, tz))
        .context("Invalid --date")
}
