use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use client_core::{
    ControllerEvent, HttpVendorApi, NotificationIcon, VendorFields, VendorSyncController,
};
use shared::domain::{VendorId, VendorRecord};
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::info;

mod config;

use config::{load_settings, DEFAULT_SETTINGS_FILE};

#[derive(Parser, Debug)]
#[command(about = "Maintain the freight vendor list")]
struct Cli {
    /// Overrides the configured vendor service URL.
    #[arg(long)]
    base_url: Option<String>,
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
    config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    List,
    Show {
        id: i64,
    },
    Add(FieldArgs),
    /// Loads the vendor, applies the given fields on top and submits.
    Update {
        id: i64,
        #[command(flatten)]
        fields: FieldArgs,
    },
    Delete {
        id: i64,
    },
}

#[derive(Args, Debug, Default)]
struct FieldArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    destination: Option<String>,
    #[arg(long)]
    pickup: Option<String>,
    #[arg(long)]
    price: Option<String>,
    #[arg(long)]
    contact: Option<String>,
    #[arg(long)]
    delivery_days: Option<String>,
}

impl FieldArgs {
    fn apply_to(self, mut fields: VendorFields) -> VendorFields {
        if let Some(v) = self.name {
            fields.name = v;
        }
        if let Some(v) = self.destination {
            fields.destination = v;
        }
        if let Some(v) = self.pickup {
            fields.pickup = v;
        }
        if let Some(v) = self.price {
            fields.price = v;
        }
        if let Some(v) = self.contact {
            fields.contact = v;
        }
        if let Some(v) = self.delivery_days {
            fields.delivery_days = v;
        }
        fields
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = load_settings(&cli.config)?;
    if let Some(base_url) = cli.base_url {
        settings.base_url = base_url;
    }

    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .with_writer(std::io::stderr)
        .init();

    let mut http = reqwest::Client::builder();
    if let Some(timeout) = settings.request_timeout() {
        http = http.timeout(timeout);
    }
    let http = http.build().context("failed to build http client")?;
    let api = HttpVendorApi::with_client(http, &settings.base_url)?;
    info!(base_url = %api.base_url(), "using vendor service");

    let controller = VendorSyncController::new(Arc::new(api));
    let mut events = controller.subscribe_events();
    controller.initialize().await;
    drain_notifications(&mut events);

    let outcome = run_command(&controller, cli.command).await;
    drain_notifications(&mut events);
    outcome
}

async fn run_command(controller: &VendorSyncController, command: Command) -> Result<()> {
    match command {
        Command::List => {
            for vendor in controller.vendors().await {
                println!("{}", format_vendor(&vendor));
            }
        }
        Command::Show { id } => match controller.select_vendor(VendorId(id)).await {
            Some(vendor) => println!("{}", format_vendor(&vendor)),
            None => println!("vendor {id} not found"),
        },
        Command::Add(fields) => {
            controller
                .set_add_form(fields.apply_to(VendorFields::default()))
                .await;
            controller.create_vendor().await?;
        }
        Command::Update { id, fields } => {
            controller.select_vendor(VendorId(id)).await;
            let current = controller.update_form().await.fields;
            controller.set_update_fields(fields.apply_to(current)).await;
            controller.update_vendor().await?;
        }
        Command::Delete { id } => {
            controller.delete_vendor(VendorId(id)).await?;
        }
    }
    Ok(())
}

fn drain_notifications(events: &mut broadcast::Receiver<ControllerEvent>) {
    loop {
        match events.try_recv() {
            Ok(ControllerEvent::Notification(notification)) => {
                let marker = match notification.icon() {
                    NotificationIcon::Success => "[ok]",
                    NotificationIcon::Error => "[!!]",
                    NotificationIcon::None => "[--]",
                };
                println!("{marker} {}: {}", notification.title(), notification.message);
            }
            Ok(_) | Err(TryRecvError::Lagged(_)) => continue,
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
        }
    }
}

fn format_vendor(vendor: &VendorRecord) -> String {
    format!(
        "{:>5}  {:<24} {} -> {}  price={} days={} contact={}",
        vendor.id,
        vendor.name,
        vendor.pickup_location,
        vendor.destination_location,
        vendor.price,
        vendor.delivery_days,
        vendor.contact
    )
}
