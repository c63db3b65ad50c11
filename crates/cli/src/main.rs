use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use sitenav_engine::navbar::{ALL_SERVICES_LINK, STATIC_LINKS};
use sitenav_engine::{
    ContentAdmin, HttpContentSource, ImageUpload, NavMenuSnapshot, NavMenuStore, PortfolioDraft, PortfolioGrid,
    ServiceDraft, SiteConfig, SubServiceDraft,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "sitenav", about = "Browse the website navigation menu and portfolio from a terminal")]
struct Cli {
    /// Override the content API origin (also `SITENAV_API_BASE`).
    #[arg(long, global = true)]
    api_base: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Open the services menu and print it with its detail panel.
    Menu {
        /// Category id to show in the detail panel instead of the first one.
        #[arg(long)]
        highlight: Option<String>,
        /// Print the store snapshot as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the portfolio grid.
    Portfolio {
        /// Only show projects in this category.
        #[arg(long)]
        category: Option<String>,
        /// Number of pages to reveal.
        #[arg(long, default_value_t = 1)]
        pages: usize,
        #[arg(long)]
        json: bool,
    },
    /// Create, update and delete site content.
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Debug, Subcommand)]
enum AdminAction {
    /// List every service category, inactive ones included.
    Services,
    /// Create a service category.
    CreateService {
        #[arg(long)]
        name: String,
        #[arg(long)]
        slug: String,
        #[arg(long)]
        description: String,
        /// Store the category hidden from the menu.
        #[arg(long)]
        inactive: bool,
        #[arg(long)]
        main_image: PathBuf,
        /// `name|slug|description` with an optional `|image-path`; repeatable.
        #[arg(long = "sub-service")]
        sub_services: Vec<String>,
    },
    DeleteService {
        id: String,
    },
    /// Create a portfolio project, or update one with `--id`.
    SavePortfolio {
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        category: String,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        project_link: String,
        #[arg(long)]
        image: Option<PathBuf>,
    },
    DeletePortfolio {
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = SiteConfig::load();
    if let Some(api_base) = cli.api_base {
        config.api_base = api_base;
    }

    match cli.command {
        Command::Menu { highlight, json } => {
            let source = content_source(&config)?;
            run_menu(source, config.timeout(), highlight.as_deref(), json).await
        }
        Command::Portfolio { category, pages, json } => {
            run_portfolio(content_source(&config)?, category.as_deref(), pages, json).await
        }
        Command::Admin { action } => {
            let admin = ContentAdmin::from_config(&config).context("configure content API client")?;
            run_admin(&admin, action).await
        }
    }
}

fn content_source(config: &SiteConfig) -> Result<Arc<HttpContentSource>> {
    Ok(Arc::new(HttpContentSource::from_config(config).context("configure content API client")?))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run_menu(source: Arc<HttpContentSource>, timeout: Duration, highlight: Option<&str>, json: bool) -> Result<()> {
    let store = NavMenuStore::new(source);
    let mut updates = store.subscribe();
    store.open();

    let settled = tokio::time::timeout(timeout + Duration::from_secs(1), updates.wait_for(|snapshot| !snapshot.loading))
        .await
        .context("timed out waiting for the services menu")?
        .map(|snapshot| snapshot.clone())
        .context("menu store closed")?;

    if let Some(error) = &settled.error {
        bail!("{error}");
    }
    info!(count = settled.categories.len(), "services menu loaded");

    if let Some(category_id) = highlight
        && !store.highlight(category_id)
    {
        warn!(%category_id, "no such category; keeping the default highlight");
    }

    let snapshot = store.snapshot();
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", render_menu(&snapshot));
    }
    Ok(())
}

async fn run_portfolio(source: Arc<HttpContentSource>, category: Option<&str>, pages: usize, json: bool) -> Result<()> {
    let mut grid = PortfolioGrid::load(source.as_ref()).await.context("could not load portfolio")?;
    if let Some(category) = category {
        grid.set_filter(category);
    }
    for _ in 1..pages.max(1) {
        grid.load_more();
    }

    let visible = grid.visible_items();
    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    println!("Filters: {}", grid.filter_categories().join(" | "));
    println!("Showing: {}", grid.active_filter());
    for item in &visible {
        println!("  {:<32} {:<16} {}", item.title, item.category, item.path);
    }
    if visible.is_empty() {
        println!("  No projects.");
    }
    if grid.has_more() {
        println!("  ... more projects available (use --pages)");
    }
    Ok(())
}

async fn run_admin(admin: &ContentAdmin, action: AdminAction) -> Result<()> {
    let outcome = match action {
        AdminAction::Services => {
            for category in admin.list_services().await? {
                let state = if category.is_active { "active" } else { "hidden" };
                println!("{:<26} {:<28} {:<7} {} sub-services", category.id, category.slug, state, category.sub_services.len());
            }
            return Ok(());
        }
        AdminAction::CreateService {
            name,
            slug,
            description,
            inactive,
            main_image,
            sub_services,
        } => {
            let draft = ServiceDraft {
                name,
                slug,
                description,
                is_active: !inactive,
                main_image: Some(read_image(&main_image)?),
                sub_services: sub_services
                    .iter()
                    .map(String::as_str)
                    .map(parse_sub_service)
                    .collect::<Result<_>>()?,
            };
            admin.create_service(&draft).await?
        }
        AdminAction::DeleteService { id } => admin.delete_service(&id).await?,
        AdminAction::SavePortfolio {
            id,
            category,
            title,
            description,
            project_link,
            image,
        } => {
            let draft = PortfolioDraft {
                category,
                title,
                description,
                project_link,
                image: image.as_deref().map(read_image).transpose()?,
            };
            admin.save_portfolio(id.as_deref(), &draft).await?
        }
        AdminAction::DeletePortfolio { id } => admin.delete_portfolio(&id).await?,
    };
    println!("{}", outcome.message);
    Ok(())
}

fn read_image(path: &Path) -> Result<ImageUpload> {
    let bytes = std::fs::read(path).with_context(|| format!("read image {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    Ok(ImageUpload::from_file(file_name, bytes))
}

/// Parse `name|slug|description[|image-path]`.
fn parse_sub_service(spec: &str) -> Result<SubServiceDraft> {
    let parts: Vec<&str> = spec.split('|').collect();
    let (name, slug, description, image) = match parts.as_slice() {
        [name, slug, description] => (name, slug, description, None),
        [name, slug, description, image] => (name, slug, description, Some(Path::new(image.trim()))),
        _ => bail!("sub-service '{spec}' must look like name|slug|description[|image]"),
    };
    Ok(SubServiceDraft {
        name: name.trim().to_string(),
        slug: slug.trim().to_string(),
        description: description.trim().to_string(),
        image: image.map(read_image).transpose()?,
    })
}

fn render_menu(snapshot: &NavMenuSnapshot) -> String {
    let mut out = String::new();
    for link in STATIC_LINKS {
        out.push_str(&format!("{:<12} {}\n", link.label, link.path));
    }
    out.push_str("\nServices\n");

    if snapshot.categories.is_empty() {
        out.push_str("  No services.\n");
        return out;
    }

    let highlighted_id = snapshot.highlighted.as_ref().map(|category| category.id.as_str());
    for category in snapshot.categories.iter() {
        let marker = if Some(category.id.as_str()) == highlighted_id { ">" } else { " " };
        out.push_str(&format!("{marker} {} {}\n", category.icon.symbol(), category.label));
    }
    out.push_str(&format!("  {} -> {}\n", ALL_SERVICES_LINK.label, ALL_SERVICES_LINK.path));

    if let Some(category) = &snapshot.highlighted {
        out.push_str(&format!("\n{} ({})\n", category.label, category.path));
        if !category.description.is_empty() {
            out.push_str(&format!("{}\n", category.description));
        }
        if let Some(image_url) = &category.image_url {
            out.push_str(&format!("image: {image_url}\n"));
        }
        for item in &category.items {
            out.push_str(&format!("  {} {:<28} {}\n", item.icon.symbol(), item.label, item.path));
        }
    }
    out
}
