use std::process::ExitCode;

use admin_console::{AdminConsole, TenantDraft};
use admin_console_sdk::ResourceId;
use clap::{Args, Subcommand};

use super::{DeleteArgs, ListArgs};

#[derive(Subcommand, Debug)]
pub enum TenantCommand {
    /// List tenants
    List(ListArgs),
    /// Add a tenant
    Create(NewTenantArgs),
    /// Edit a tenant; omitted fields keep their current value
    Update(UpdateTenantArgs),
    /// Delete a tenant
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct NewTenantArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub domain: String,
    #[arg(long, default_value = "")]
    pub subdomain: String,
    #[arg(long = "phone", default_value = "")]
    pub phone_number: String,
    #[arg(long)]
    pub active: bool,
}

#[derive(Args, Debug)]
pub struct UpdateTenantArgs {
    pub id: ResourceId,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub domain: Option<String>,
    #[arg(long)]
    pub subdomain: Option<String>,
    #[arg(long = "phone")]
    pub phone_number: Option<String>,
    #[arg(long)]
    pub active: Option<bool>,
}

pub async fn run(command: TenantCommand, console: &AdminConsole) -> ExitCode {
    let page = console.tenant_page();
    match command {
        TenantCommand::List(args) => super::list(page, &args).await,
        TenantCommand::Create(args) => {
            super::create(page, |draft: &mut TenantDraft| {
                draft.name = args.name;
                draft.email = args.email;
                draft.domain = args.domain;
                draft.subdomain = args.subdomain;
                draft.phone_number = args.phone_number;
                draft.active = args.active;
            })
            .await
        }
        TenantCommand::Update(args) => {
            let id = args.id;
            super::update(page, id, |draft: &mut TenantDraft| {
                if let Some(name) = args.name {
                    draft.name = name;
                }
                if let Some(email) = args.email {
                    draft.email = email;
                }
                if let Some(domain) = args.domain {
                    draft.domain = domain;
                }
                if let Some(subdomain) = args.subdomain {
                    draft.subdomain = subdomain;
                }
                if let Some(phone_number) = args.phone_number {
                    draft.phone_number = phone_number;
                }
                if let Some(active) = args.active {
                    draft.active = active;
                }
            })
            .await
        }
        TenantCommand::Delete(args) => super::delete(page, &args).await,
    }
}
