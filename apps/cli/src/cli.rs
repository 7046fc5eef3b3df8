use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use moneymark_core::analytics::AnalyticsRange;

#[derive(Parser, Debug)]
#[command(name = "moneymark")]
#[command(about = "Track car-sale commissions against a monthly goal")]
#[command(version)]
pub struct Cli {
    /// Print the view model as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a sale
    AddDeal {
        /// Customer name
        #[arg(long)]
        customer: String,

        /// Vehicle sold
        #[arg(long)]
        vehicle: String,

        /// Commission earned, e.g. "1,250.50"
        #[arg(long)]
        commission: String,

        /// Dealership deal number
        #[arg(long)]
        deal_number: Option<String>,

        /// Sale date (YYYY-MM-DD); defaults to now
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Set the monthly commission goal
    SetGoal {
        /// Goal amount, e.g. "12,000"
        amount: String,
    },

    /// Show the profile, updating any field given
    Profile {
        #[arg(long)]
        name: Option<String>,

        /// Brand sold
        #[arg(long)]
        brand: Option<String>,

        /// Average cars sold per month (0-200)
        #[arg(long)]
        avg_cars: Option<u32>,

        /// Monthly goal amount
        #[arg(long)]
        goal: Option<String>,
    },

    /// Goal progress, the last seven days and recent deals
    Dashboard,

    /// Commission histogram for a calendar range
    Analytics {
        #[arg(long, default_value = "week")]
        range: AnalyticsRange,
    },

    /// List deals, newest first
    Deals {
        /// Show at most this many
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Erase stored data; with no flag both profile and deals are reset
    Reset {
        /// Reset the profile to defaults
        #[arg(long)]
        profile: bool,

        /// Delete every deal
        #[arg(long)]
        deals: bool,
    },
}
