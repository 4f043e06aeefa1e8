use std::process::ExitCode;

use admin_console::{AdminConsole, SubscriptionPlanDraft};
use admin_console_sdk::ResourceId;
use clap::{Args, Subcommand};

use super::{DeleteArgs, ListArgs};

#[derive(Subcommand, Debug)]
pub enum PlanCommand {
    /// List subscription plans
    List(ListArgs),
    /// Add a subscription plan
    Create(NewPlanArgs),
    /// Edit a subscription plan; omitted fields keep their current value
    Update(UpdatePlanArgs),
    /// Delete a subscription plan
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct NewPlanArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub price_monthly: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub price_yearly: f64,
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub max_users: i64,
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub max_devices: i64,
}

#[derive(Args, Debug)]
pub struct UpdatePlanArgs {
    pub id: ResourceId,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub price_monthly: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub price_yearly: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub max_users: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    pub max_devices: Option<i64>,
}

pub async fn run(command: PlanCommand, console: &AdminConsole) -> ExitCode {
    let page = console.plan_page();
    match command {
        PlanCommand::List(args) => super::list(page, &args).await,
        PlanCommand::Create(args) => {
            super::create(page, |draft: &mut SubscriptionPlanDraft| {
                draft.name = args.name;
                draft.description = args.description;
                draft.price_monthly = args.price_monthly;
                draft.price_yearly = args.price_yearly;
                draft.max_users = args.max_users;
                draft.max_devices = args.max_devices;
            })
            .await
        }
        PlanCommand::Update(args) => {
            let id = args.id;
            super::update(page, id, |draft: &mut SubscriptionPlanDraft| {
                if let Some(name) = args.name {
                    draft.name = name;
                }
                if let Some(description) = args.description {
                    draft.description = description;
                }
                if let Some(price) = args.price_monthly {
                    draft.price_monthly = price;
                }
                if let Some(price) = args.price_yearly {
                    draft.price_yearly = price;
                }
                if let Some(max_users) = args.max_users {
                    draft.max_users = max_users;
                }
                if let Some(max_devices) = args.max_devices {
                    draft.max_devices = max_devices;
                }
            })
            .await
        }
        PlanCommand::Delete(args) => super::delete(page, &args).await,
    }
}
