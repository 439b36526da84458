use super::print::{
    print_config, print_messages, print_paths, print_picked, print_problem_table, print_stats,
    print_tags,
};
use super::setup::{print_grouped_help, Cli, Commands};
use clap::Parser;
use saitama::api::{AppPaths, ConfigAction, NewProblem, ProblemUpdate, SaitamaApi};
use saitama::config::SaitamaConfig;
use saitama::error::{Result, SaitamaError};
use saitama::model::{normalize_id, parse_tags, Difficulty};
use saitama::paths;
use saitama::store::fs::FileStore;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "SAITAMA_LOG";

struct AppContext {
    api: SaitamaApi<FileStore>,
    config: SaitamaConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = match cli.command {
        Some(command) => command,
        None => {
            print_grouped_help();
            return Ok(());
        }
    };

    let mut ctx = init_context()?;

    match command {
        Commands::Add {
            id,
            name,
            tags,
            difficulty,
            platform,
            url,
            notes,
        } => {
            let input = NewProblem {
                id,
                name: name.join(" "),
                tags: tags.as_deref().map(parse_tags).unwrap_or_default(),
                difficulty: parse_difficulty(difficulty)?,
                platform,
                url,
                notes,
            };
            handle_add(&mut ctx, input)
        }
        Commands::List => handle_list(&ctx),
        Commands::Pick { count, tag } => handle_pick(&ctx, count, tag),
        Commands::Search { query } => handle_search(&ctx, &query),
        Commands::Edit {
            id,
            name,
            tags,
            difficulty,
            platform,
            url,
            notes,
        } => {
            let update = ProblemUpdate {
                name,
                tags: tags.as_deref().map(parse_tags),
                difficulty: parse_difficulty(difficulty)?,
                platform,
                url,
                notes,
            };
            handle_edit(&mut ctx, &id, update)
        }
        Commands::Solve { id } => handle_solve(&mut ctx, &id),
        Commands::Delete { id, yes } => handle_delete(&mut ctx, &id, yes),
        Commands::Tags => handle_tags(&ctx),
        Commands::Stats => handle_stats(&ctx),
        Commands::Import { file, yes } => handle_import(&mut ctx, PathBuf::from(file), yes),
        Commands::Export { file } => handle_export(&ctx, PathBuf::from(file)),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
        Commands::Path => handle_path(&ctx),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "saitama=debug" } else { "error" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .ok();
}

fn init_context() -> Result<AppContext> {
    let app_dir = paths::app_dir()?;
    let config = SaitamaConfig::load(&app_dir)?;
    let store_config = config.store_config();

    let store = FileStore::open(&store_config)?;
    let app_paths = AppPaths {
        app_dir,
        data_path: store.data_path().to_path_buf(),
        backup_dir: store.backups().dir().to_path_buf(),
    };

    Ok(AppContext {
        api: SaitamaApi::new(store, app_paths),
        config,
    })
}

fn parse_difficulty(value: Option<String>) -> Result<Option<Difficulty>> {
    value
        .map(|v| v.parse::<Difficulty>().map_err(SaitamaError::Api))
        .transpose()
}

/// Asks a yes/no question on stdin. Anything but y/yes is a no.
fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N]: ", prompt);
    io::stdout().flush().map_err(SaitamaError::Io)?;

    let mut input = String::new();
    io::stdin().read_line(&mut input).map_err(SaitamaError::Io)?;
    Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn handle_add(ctx: &mut AppContext, input: NewProblem) -> Result<()> {
    let result = ctx.api.add_problem(input)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_problems()?;
    if result.listed_problems.is_empty() {
        println!("No problems found yet. Add your first one with: saitama add");
        return Ok(());
    }
    print_problem_table(&result.listed_problems);
    print_messages(&result.messages);
    Ok(())
}

fn handle_pick(ctx: &AppContext, count: Option<usize>, tag: Option<String>) -> Result<()> {
    let count = count.unwrap_or(ctx.config.pick_count);
    let mut rng = rand::thread_rng();
    let result = ctx.api.pick_problems(count, tag.as_deref(), &mut rng)?;
    print_messages(&result.messages);
    print_picked(&result.listed_problems);
    Ok(())
}

fn handle_search(ctx: &AppContext, query: &str) -> Result<()> {
    let result = ctx.api.search_problems(query)?;
    if !result.listed_problems.is_empty() {
        println!(
            "Found {} problems matching '{}':",
            result.listed_problems.len(),
            query
        );
        print_problem_table(&result.listed_problems);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: &str, update: ProblemUpdate) -> Result<()> {
    let result = ctx.api.edit_problem(id, update)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_solve(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.solve_problem(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: &str, yes: bool) -> Result<()> {
    if !yes {
        let problem = ctx
            .api
            .get_problem(id)?
            .ok_or_else(|| SaitamaError::ProblemNotFound(normalize_id(id)))?;
        if !confirm(&format!("Delete problem '{} - {}'?", problem.id, problem.name))? {
            println!("Deletion cancelled.");
            return Ok(());
        }
    }

    let result = ctx.api.delete_problem(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_tags(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.tags()?;
    print_tags(&result.tag_counts);
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.stats()?;
    if let Some(stats) = &result.stats {
        print_stats(stats);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, file: PathBuf, yes: bool) -> Result<()> {
    if !yes && !confirm("This will merge imported problems with your current list. Continue?")? {
        println!("Import cancelled.");
        return Ok(());
    }
    let result = ctx.api.import_problems(&file)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, file: PathBuf) -> Result<()> {
    let result = ctx.api.export_problems(&file)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.show_paths()?;
    print_paths(&result.paths);
    Ok(())
}
