//! Subcommands. Tenant and plan commands drive a `ListPage` exactly the way
//! the screens do: open the modal, fill the draft, save, re-render.

pub mod landing;
pub mod plans;
pub mod render;
pub mod tenants;

use std::io::{BufRead, Write};
use std::process::ExitCode;

use admin_console::ui::TableRow;
use admin_console::{Draft, ListPage};
use admin_console_sdk::{Resource, ResourceId};
use clap::Args;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    pub id: ResourceId,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Failure when the store ended in an error state.
fn exit_code<D: Draft>(page: &ListPage<D>) -> ExitCode
where
    D::Resource: TableRow,
{
    if page.store().error().is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

pub async fn list<D: Draft>(mut page: ListPage<D>, args: &ListArgs) -> ExitCode
where
    D::Resource: TableRow,
{
    page.mount().await;
    page.set_page(args.page);
    render::print_view(&page.view());
    exit_code(&page)
}

pub async fn create<D: Draft>(mut page: ListPage<D>, fill: impl FnOnce(&mut D)) -> ExitCode
where
    D::Resource: TableRow,
{
    page.begin_create();
    fill(page.modal_mut().draft_mut());
    save(page).await
}

pub async fn update<D: Draft>(
    mut page: ListPage<D>,
    id: ResourceId,
    apply: impl FnOnce(&mut D),
) -> ExitCode
where
    D::Resource: TableRow,
{
    page.mount().await;
    if page.store().error().is_some() {
        return ExitCode::FAILURE;
    }
    if !page.begin_edit(id) {
        render::print_error(&format!(
            "{} {id} not found",
            <D::Resource as Resource>::TITLE
        ));
        return ExitCode::FAILURE;
    }
    apply(page.modal_mut().draft_mut());
    save(page).await
}

async fn save<D: Draft>(mut page: ListPage<D>) -> ExitCode
where
    D::Resource: TableRow,
{
    let title = page.modal().title();
    match page.save().await {
        Ok(()) => {
            if page.store().error().is_none() {
                render::print_view(&page.view());
            }
            exit_code(&page)
        }
        Err(errors) => {
            render::print_validation_errors(&title, &errors);
            ExitCode::FAILURE
        }
    }
}

pub async fn delete<D: Draft>(mut page: ListPage<D>, args: &DeleteArgs) -> ExitCode
where
    D::Resource: TableRow,
{
    page.mount().await;
    page.request_delete(args.id);

    let Some(prompt) = page.confirmation().prompt() else {
        return ExitCode::FAILURE;
    };
    if !args.yes && !confirm(&prompt) {
        page.cancel_delete();
        println!("Cancelled");
        return ExitCode::SUCCESS;
    }

    page.confirm_delete().await;
    if page.store().error().is_none() {
        render::print_view(&page.view());
    }
    exit_code(&page)
}

/// Ask on stdin; anything but y/yes declines.
fn confirm(prompt: &str) -> bool {
    print!("{prompt} [y/N] ");
    if std::io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    match std::io::stdin().lock().read_line(&mut answer) {
        Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
        Err(e) => {
            tracing::warn!(error = %e, "failed to read confirmation");
            false
        }
    }
}
