use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;
use landing::LandingContent;
use url::Url;

use crate::config::AppConfig;

/// Path the site serves its content document from.
const FIXTURE_PATH: &str = "/assets/data.json";

#[derive(clap::Args, Debug)]
pub struct LandingArgs {
    /// Read the content document from a local file
    #[arg(long, conflicts_with = "url")]
    pub file: Option<PathBuf>,

    /// Download the content document from this URL
    #[arg(long)]
    pub url: Option<String>,
}

enum Source {
    File(PathBuf),
    Url(String),
}

/// `--file`, then `--url`, then `landing.fixture`, then the API host.
fn resolve_source(args: LandingArgs, config: &AppConfig) -> Result<Source> {
    if let Some(path) = args.file {
        return Ok(Source::File(path));
    }
    if let Some(url) = args.url {
        return Ok(Source::Url(url));
    }
    if let Some(path) = &config.landing.fixture {
        return Ok(Source::File(path.clone()));
    }
    let url = Url::parse(&config.api.base_url)
        .and_then(|base| base.join(FIXTURE_PATH))
        .with_context(|| format!("cannot derive landing URL from {}", config.api.base_url))?;
    Ok(Source::Url(url.into()))
}

/// # Errors
/// Fails when the document cannot be read, fetched or parsed.
pub async fn run(args: LandingArgs, config: &AppConfig) -> Result<()> {
    let content = match resolve_source(args, config)? {
        Source::File(path) => LandingContent::load_file(&path).await?,
        Source::Url(url) => {
            let client = config.api.http_client()?;
            LandingContent::fetch(&client, &url).await?
        }
    };
    print!("{}", format_content(&content));
    Ok(())
}

fn format_content(content: &LandingContent) -> String {
    let mut out = vec![content.app_name.bold().to_string()];
    if !content.footer_motto.is_empty() {
        out.push(content.footer_motto.clone());
    }

    if !content.features.is_empty() {
        out.push(String::new());
        out.push("Features".bold().to_string());
        out.extend(
            content
                .features
                .iter()
                .map(|f| format!("  {}: {}", f.title, f.description)),
        );
    }

    if !content.products.is_empty() {
        out.push(String::new());
        out.push("Packages".bold().to_string());
        for product in &content.products {
            let price = if product.is_contact_only() {
                "Hubungi Kami".to_owned()
            } else {
                let tag = product.price_tag();
                match tag.original {
                    Some(original) => format!(
                        "{} (was {original}, {}% off) /bulan",
                        tag.current, product.discount
                    ),
                    None => format!("{} /bulan", tag.current),
                }
            };
            out.push(format!("  {}: {price}", product.title()));
        }
    }

    out.push(String::new());
    out.push("Contact".bold().to_string());
    out.push(format!("  Email: {}", content.contact.email()));
    out.push(format!("  Telepon: {}", content.contact.phone()));
    out.push(format!("  Alamat: {}", content.contact.address()));
    out.extend(
        content
            .social_links()
            .map(|(platform, link)| format!("  {platform}: {}", link.url)),
    );

    let mut text = out.join("\n");
    text.push('\n');
    text
}
