use super::compose::{self, Outcome};
use super::logging;
use super::print::{print_messages, render_page, render_page_list};
use super::setup::{Cli, Commands};
use clap::Parser;
use folio::api::ConfigAction;
use folio::config::FolioConfig;
use folio::draft::Draft;
use folio::error::Result;
use folio::init::{initialize, resolve_data_dir, FolioContext};
use std::io::{self, IsTerminal};
use tracing::{debug, warn};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;

    // A bad config is reported once logging is up.
    let (config, config_error) = match FolioConfig::load(&data_dir) {
        Ok(config) => (config, None),
        Err(e) => (FolioConfig::default(), Some(e)),
    };
    logging::init(cli.verbose, &config.log_level);
    if let Some(e) = config_error {
        warn!("ignoring unreadable config, using defaults: {}", e);
    }
    debug!(data_dir = %data_dir.display(), "resolved data directory");

    let mut ctx = initialize(data_dir, config);

    match cli.command {
        Some(Commands::New { title, paragraphs }) => handle_new(&mut ctx, title, paragraphs),
        Some(Commands::Compose { title }) => handle_compose(&mut ctx, title),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::View { id }) => handle_view(&ctx, id),
        Some(Commands::Delete { ids }) => handle_delete(&mut ctx, ids),
        Some(Commands::Path) => handle_path(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn handle_new(ctx: &mut FolioContext, title: Vec<String>, paragraphs: Vec<String>) -> Result<()> {
    let mut draft = Draft::new(title.join(" "));
    for paragraph in paragraphs {
        draft.append(paragraph);
    }
    let result = ctx.api.create_page(&draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_compose(ctx: &mut FolioContext, title: Vec<String>) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut draft = Draft::new(title.join(" "));
    let api = &mut ctx.api;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = compose::run_session(stdin.lock(), &mut out, &mut draft, interactive, |d| {
        api.create_page(d)
    })?;

    match outcome {
        Outcome::Saved(result) => {
            debug!(saved = result.affected_pages.len(), "compose session saved");
            Ok(())
        }
        Outcome::Aborted => Ok(()),
        Outcome::Unsaved(e) => {
            debug!(paragraphs = draft.len(), "draft lost after failed save");
            Err(e)
        }
    }
}

fn handle_list(ctx: &FolioContext) -> Result<()> {
    let result = ctx.api.list_pages()?;
    print!(
        "{}",
        render_page_list(&result.listed_pages, ctx.config.preview_width)
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &FolioContext, id: String) -> Result<()> {
    let result = ctx.api.view_page(&id)?;
    for page in &result.listed_pages {
        print!("{}", render_page(page));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut FolioContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_pages(&ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &FolioContext) -> Result<()> {
    let result = ctx.api.store_location()?;
    if let Some(location) = &result.store_location {
        println!("{}", location.display());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &FolioContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            for (key, value) in config.list_all() {
                println!("{} = {}", key, value);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}
