//! Tiller CLI - Run decision scenarios end to end
//!
//! Seeds in-memory adapters, drives one orchestration flow, and prints
//! the outcome's full payload. Useful for demos and for poking at the
//! decision logic without any infrastructure.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use clap::{Parser, Subcommand};
use colored::Colorize;

use tiller::domain::decisions::{OnboardingConfig, SignalConfig};
use tiller::domain::{Account, Money, Order, PriceSnapshot, User};
use tiller::ports::{AccountRepository, OrderRepository, UserRepository};
use tiller_engine::adapters::memory::{
    CannedAdvisor, FixedMarketData, MemoryAccountRepository, MemoryOrderRepository,
    MemoryUserRepository, RecordingGateway, RecordingMailer,
};
use tiller_engine::{
    Interpreter, OnboardingService, RefundService, SignalService, WithdrawalService,
};

#[derive(Parser)]
#[command(name = "tiller")]
#[command(about = "Tiller - decision scenarios against in-memory adapters", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Withdraw from a freshly seeded account
    Withdraw {
        /// Opening balance in minor units
        #[arg(long)]
        balance: i64,
        /// Amount to withdraw in minor units
        #[arg(long)]
        amount: i64,
    },

    /// Calculate a trading signal for a seeded quote
    Signal {
        /// Observed price in minor units
        #[arg(long)]
        price: i64,
        /// Threshold in minor units
        #[arg(long)]
        threshold: i64,
        /// aggressive or conservative
        #[arg(long, default_value = "conservative")]
        mode: String,
    },

    /// Run the signup follow-up flow for a seeded user
    Signup {
        /// Email address of the new user
        #[arg(long)]
        email: String,
        /// Display name of the new user
        #[arg(long, default_value = "New User")]
        name: String,
        /// Seed the user as a VIP
        #[arg(long)]
        vip: bool,
        /// Make the mailer fail, to show execution reporting
        #[arg(long)]
        fail_mailer: bool,
    },

    /// Run the refund flow for a seeded order
    Refund {
        /// Order total in minor units
        #[arg(long)]
        total: i64,
        /// How many hours ago the order was placed
        #[arg(long, default_value_t = 2)]
        placed_hours_ago: i64,
        /// Refund window in hours
        #[arg(long, default_value_t = 24)]
        window_hours: i64,
        /// Make the gateway fail, to show execution reporting
        #[arg(long)]
        fail_gateway: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Withdraw { balance, amount } => run_withdraw(balance, amount).await,
        Commands::Signal {
            price,
            threshold,
            mode,
        } => run_signal(price, threshold, &mode).await,
        Commands::Signup {
            email,
            name,
            vip,
            fail_mailer,
        } => run_signup(&email, &name, vip, fail_mailer).await,
        Commands::Refund {
            total,
            placed_hours_ago,
            window_hours,
            fail_gateway,
        } => run_refund(total, placed_hours_ago, window_hours, fail_gateway).await,
    }
}

async fn run_withdraw(balance: i64, amount: i64) -> Result<()> {
    let repo = Arc::new(MemoryAccountRepository::new());
    let account = Account::new("demo", Money::new(balance), Utc::now());
    let account_id = account.id;
    repo.save(&account)
        .await
        .context("failed to seed account")?;

    let service = WithdrawalService::new(repo);
    let outcome = service
        .withdraw(account_id, Money::new(amount))
        .await
        .context("withdrawal flow failed")?;

    print_outcome("Withdrawal", outcome.kind(), &outcome)
}

async fn run_signal(price: i64, threshold: i64, mode: &str) -> Result<()> {
    let mode: tiller::domain::SignalMode = mode
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))
        .context("invalid --mode")?;
    let config = SignalConfig {
        threshold: Money::new(threshold),
        mode,
    };

    let market = FixedMarketData::new().with_quote(PriceSnapshot::new(
        "DEMO",
        Money::new(price),
        Utc::now(),
    ));
    let service = SignalService::new(Arc::new(market), Arc::new(CannedAdvisor::new()));

    let annotated = service
        .evaluate("DEMO", &config)
        .await
        .context("signal flow failed")?;

    print_outcome(
        "Signal",
        &annotated.decision.action.to_string(),
        &annotated,
    )
}

async fn run_signup(email: &str, name: &str, vip: bool, fail_mailer: bool) -> Result<()> {
    let repo = Arc::new(MemoryUserRepository::new());
    let user = User::new(email, name, vip, Utc::now());
    let user_id = user.id;
    repo.save(&user).await.context("failed to seed user")?;

    let mailer = Arc::new(RecordingMailer::new());
    if fail_mailer {
        mailer.fail_with("demo mailer offline");
    }
    let interpreter = Arc::new(Interpreter::new(
        mailer.clone(),
        Arc::new(RecordingGateway::new()),
    ));
    let service = OnboardingService::new(repo, interpreter, OnboardingConfig::default());

    let run = service
        .welcome(user_id)
        .await
        .context("onboarding flow failed")?;

    print_outcome("Onboarding", run.intent.kind(), &run)?;
    println!(
        "{} {} message(s) recorded by the mailer",
        "mailer:".dimmed(),
        mailer.sent().len()
    );
    Ok(())
}

async fn run_refund(
    total: i64,
    placed_hours_ago: i64,
    window_hours: i64,
    fail_gateway: bool,
) -> Result<()> {
    let repo = Arc::new(MemoryOrderRepository::new());
    let order = Order::new(
        uuid::Uuid::new_v4(),
        Money::new(total),
        window_hours,
        Utc::now() - Duration::hours(placed_hours_ago),
    );
    let order_id = order.id;
    repo.save(&order).await.context("failed to seed order")?;

    let gateway = Arc::new(RecordingGateway::new());
    if fail_gateway {
        gateway.fail_with("demo gateway offline");
    }
    let interpreter = Arc::new(Interpreter::new(
        Arc::new(RecordingMailer::new()),
        gateway.clone(),
    ));
    let service = RefundService::new(repo, interpreter);

    let run = service.refund(order_id).await.context("refund flow failed")?;

    print_outcome("Refund", run.decision.kind(), &run)?;
    println!(
        "{} {} refund(s) recorded by the gateway",
        "gateway:".dimmed(),
        gateway.issued().len()
    );
    Ok(())
}

/// Print the full outcome payload; the variant's data is the message
fn print_outcome<T: serde::Serialize>(flow: &str, kind: &str, payload: &T) -> Result<()> {
    println!("{} {}", format!("{flow}:").bold(), kind.green().bold());
    let json = serde_json::to_string_pretty(payload).context("failed to render outcome")?;
    println!("{}", json);
    Ok(())
}
