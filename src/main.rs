// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use kumono_search::render::{card_for, render_session, EmptyState, RenderSurface};
use kumono_search::session::LOAD_FAILED_MESSAGE;
use kumono_search::{
    export_all_blogs, search_basic, BasicOutcome, Catalog, CategoryFilter, CmsClient,
    ContentSource, JsonFileStore, SearchConfig, SearchHistory, SearchMetrics, SearchSession,
    SortKey,
};
use std::path::Path;
use std::process;
use std::time::Instant;

mod cli;
use cli::display::{self, TerminalSurface};
use cli::{data_source, Cli, Commands, HistoryAction};

fn main() {
    kumono_search::telemetry::init();
    let cli = Cli::parse();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("❌ Failed to start async runtime: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(run(cli)) {
        eprintln!("❌ {}", e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    let config = SearchConfig::load_or_default(cli.config.as_deref()).map_err(|e| e.to_string())?;

    match cli.command {
        Commands::Search {
            data,
            query,
            category,
            sort,
            scores,
            basic,
            no_history,
            store,
        } => {
            let catalog = load_catalog(data_source(data.as_deref(), &config)).await?;
            if basic {
                run_basic_search(&catalog, &config, &query, scores);
            } else {
                run_search(catalog, config.clone(), &query, category.as_deref(), sort, scores);
            }
            if !no_history {
                record_history(&store, &config, &query)?;
            }
            Ok(())
        }
        Commands::Suggest { partial, data } => {
            let catalog = load_catalog(data_source(data.as_deref(), &config)).await?;
            let session = SearchSession::new(catalog, config);
            display::print_suggestions(&session.suggest(&partial));
            Ok(())
        }
        Commands::Categories { query, data } => {
            let catalog = load_catalog(data_source(data.as_deref(), &config)).await?;
            let mut session = SearchSession::new(catalog, config);
            session.submit(&query);
            for category in session.categories() {
                println!("{}", category);
            }
            Ok(())
        }
        Commands::History { action, store } => run_history(action, &store, &config),
        Commands::Export { output, page_size } => run_export(&output, page_size).await,
    }
}

async fn load_catalog(data: &str) -> Result<Catalog, String> {
    ContentSource::from_arg(data)
        .load()
        .await
        .map_err(|e| format!("{} ({})", LOAD_FAILED_MESSAGE, e))
}

fn run_search(
    catalog: Catalog,
    config: SearchConfig,
    query: &str,
    category: Option<&str>,
    sort: SortKey,
    show_scores: bool,
) {
    let mut session = SearchSession::new(catalog, config);

    let started = Instant::now();
    session.submit(query);
    if let Some(category) = category {
        session.set_category(CategoryFilter::parse(category));
    }
    session.set_sort(sort);
    let metrics = SearchMetrics {
        total_results: session.view().len(),
        elapsed: started.elapsed(),
    };

    let mut surface = TerminalSurface {
        metrics: Some(metrics),
        show_scores,
    };
    render_session(&session, &mut surface);
}

fn run_basic_search(catalog: &Catalog, config: &SearchConfig, query: &str, show_scores: bool) {
    let started = Instant::now();
    let outcome = search_basic(query, catalog);
    let mut surface = TerminalSurface {
        metrics: Some(SearchMetrics {
            total_results: outcome.items().len(),
            elapsed: started.elapsed(),
        }),
        show_scores,
    };

    match outcome {
        BasicOutcome::EmptyQuery => surface.render_empty(&EmptyState::NeedsQuery),
        BasicOutcome::NoMatches => surface.render_empty(&EmptyState::NoMatches {
            query: query.to_string(),
        }),
        BasicOutcome::Matches(items) => {
            let cards: Vec<_> = items.iter().map(|item| card_for(item, config)).collect();
            surface.render_results(query, &cards, &[]);
        }
    }
}

fn open_history(store: &Path, config: &SearchConfig) -> Result<SearchHistory<JsonFileStore>, String> {
    let store = JsonFileStore::open(store).map_err(|e| e.to_string())?;
    Ok(SearchHistory::load_with(
        store,
        &config.history_key,
        config.history_limit,
    ))
}

fn record_history(store: &Path, config: &SearchConfig, query: &str) -> Result<(), String> {
    let mut history = open_history(store, config)?;
    history.submit(query);
    Ok(())
}

fn run_history(action: HistoryAction, store: &Path, config: &SearchConfig) -> Result<(), String> {
    let mut history = open_history(store, config)?;
    match action {
        HistoryAction::List => display::print_history(history.entries()),
        HistoryAction::Clear => {
            history.clear();
            println!("✓ Search history cleared");
        }
        HistoryAction::Add { query } => {
            history.submit(&query);
            display::print_history(history.entries());
        }
    }
    Ok(())
}

async fn run_export(output: &Path, page_size: usize) -> Result<(), String> {
    let client = CmsClient::from_env();
    let items = export_all_blogs(&client, page_size)
        .await
        .map_err(|e| format!("Export failed: {}", e))?;

    let json = serde_json::to_string_pretty(&items)
        .map_err(|e| format!("Failed to serialize search data: {}", e))?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
    }
    tokio::fs::write(output, json)
        .await
        .map_err(|e| format!("Failed to write {}: {}", output.display(), e))?;

    if client.is_dummy() {
        eprintln!("⚠️  CMS credentials not set; wrote an empty collection");
    }
    println!("✓ Exported {} posts to {}", items.len(), output.display());
    Ok(())
}
