//! CLI command implementations

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::cache::GraphCache;
use crate::commands::handlers::groups::format_census;
use crate::commands::handlers::output::write_output;
use crate::commands::handlers::query::query_and_format;
use crate::commands::QueryParams;
use crate::dictionary::{CaseFolding, InvalidWordPolicy, WordList};
use crate::engine::{GraphSource, WordGraph};

use super::args::Commands;
use super::paths::PersistentConfig;

/// Execute a CLI command
pub fn execute(command: Commands, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Query {
            start,
            goal,
            output,
            source,
        } => {
            let settings = PersistentConfig::load_from(config_path)?.merge_with_cli(&source, output);
            cmd_query(&start, &goal, &settings)
        }
        Commands::Precompute { source } => {
            if source.no_cache {
                bail!("precompute writes the cache; --no-cache cannot be used with it");
            }
            let settings = PersistentConfig::load_from(config_path)?.merge_with_cli(&source, None);
            cmd_precompute(&settings)
        }
        Commands::Groups { source } => {
            let settings = PersistentConfig::load_from(config_path)?.merge_with_cli(&source, None);
            cmd_groups(&settings)
        }
        Commands::LongestPath { word, source } => {
            let settings = PersistentConfig::load_from(config_path)?.merge_with_cli(&source, None);
            cmd_longest_path(&word, &settings)
        }
        Commands::Settings {
            set_words,
            set_cache,
            set_output,
            set_case_folding,
            set_invalid_words,
            set_use_cache,
            reset,
        } => cmd_settings(
            config_path,
            SettingsUpdate {
                words: set_words,
                cache: set_cache,
                output: set_output,
                case_folding: set_case_folding,
                invalid_words: set_invalid_words,
                use_cache: set_use_cache,
            },
            reset,
        ),
    }
}

/// Load the word list named by the settings
pub fn load_words(settings: &PersistentConfig) -> Result<WordList> {
    let path = settings.word_list_path();
    if !path.exists() {
        bail!("Word list does not exist: {}", path.display());
    }
    let words = WordList::from_path(&path, &settings.normalization())
        .with_context(|| format!("Failed to load word list: {}", path.display()))?;
    println!(
        "Loaded {} words from {}",
        words.len().to_string().green(),
        path.display().to_string().cyan()
    );
    if words.skipped() > 0 {
        println!(
            "  {} line(s) skipped (characters outside a-z)",
            words.skipped().to_string().yellow()
        );
    }
    Ok(words)
}

/// Build or restore the graph according to the settings
pub fn open_graph(words: &WordList, settings: &PersistentConfig) -> Result<WordGraph> {
    let cache = if settings.cache_enabled() {
        Some(GraphCache::new(settings.cache_path()?))
    } else {
        None
    };

    let (graph, source) = WordGraph::open(words, cache.as_ref());
    let how = match source {
        GraphSource::Cache => "Loaded precomputed data".to_string(),
        GraphSource::Rebuilt => "No usable precomputed data found, generated and cached".to_string(),
        GraphSource::Built => "Generated graph in memory".to_string(),
    };
    println!(
        "{} ({} signatures, {} edges)",
        how,
        graph.index().len(),
        graph.graph().edge_count()
    );
    Ok(graph)
}

/// Query command
fn cmd_query(start: &str, goal: &str, settings: &PersistentConfig) -> Result<()> {
    let output = settings.output_path();
    let words = load_words(settings)?;
    let graph = open_graph(&words, settings)?;

    let result = match query_and_format(&graph, &QueryParams::new(start, goal)) {
        Ok(result) => result,
        Err(e) => {
            write_output(&output, &[])
                .with_context(|| format!("Failed to write output: {}", output.display()))?;
            return Err(e.into());
        }
    };

    if result.is_empty() {
        println!("{}", result.output.yellow());
    } else {
        println!("{}", "Found path:".bold());
        for word in &result.lines {
            println!("  {}", word.green());
        }
        println!();
        println!("{} step(s)", result.lines.len() - 1);
    }

    write_output(&output, &result.lines)
        .with_context(|| format!("Failed to write output: {}", output.display()))?;
    Ok(())
}

/// Precompute command
fn cmd_precompute(settings: &PersistentConfig) -> Result<()> {
    let words = load_words(settings)?;
    let cache = GraphCache::new(settings.cache_path()?);

    let graph = WordGraph::precompute(&words, &cache)
        .with_context(|| format!("Failed to write cache: {}", cache.path().display()))?;

    println!(
        "{} {} signatures, {} edges",
        "Precomputed".green().bold(),
        graph.index().len(),
        graph.graph().edge_count()
    );
    println!("  Cache: {}", cache.path().display().to_string().cyan());
    println!("  Fingerprint: {}", graph.fingerprint());
    Ok(())
}

/// Groups command
fn cmd_groups(settings: &PersistentConfig) -> Result<()> {
    let words = load_words(settings)?;
    let graph = open_graph(&words, settings)?;

    println!("Searching groups...");
    println!("{}", format_census(&graph.census()));
    Ok(())
}

/// Longest path command
fn cmd_longest_path(word: &str, settings: &PersistentConfig) -> Result<()> {
    let words = load_words(settings)?;
    let graph = open_graph(&words, settings)?;

    let ladder = graph.longest_ladder(word)?;
    println!(
        "Longest path is from {} to {} with length {}",
        ladder.start().green(),
        ladder.goal().green(),
        ladder.steps().to_string().bold()
    );
    for word in ladder.words() {
        println!("  {}", word);
    }
    Ok(())
}

/// Values to change in the persisted settings
struct SettingsUpdate {
    words: Option<PathBuf>,
    cache: Option<PathBuf>,
    output: Option<PathBuf>,
    case_folding: Option<CaseFolding>,
    invalid_words: Option<InvalidWordPolicy>,
    use_cache: Option<bool>,
}

/// Settings command
fn cmd_settings(config_path: Option<PathBuf>, update: SettingsUpdate, reset: bool) -> Result<()> {
    if reset {
        let config = PersistentConfig::default();
        config.save_to(config_path)?;
        println!("{}", "Configuration reset to defaults".green().bold());
        println!();
        print_config(&config);
        return Ok(());
    }

    let mut config = PersistentConfig::load_from(config_path.clone())?;
    let mut changed = false;

    if let Some(words) = update.words {
        println!(
            "  Set default word list: {}",
            words.display().to_string().cyan()
        );
        config.word_list = Some(words);
        changed = true;
    }

    if let Some(cache) = update.cache {
        println!("  Set default cache: {}", cache.display().to_string().cyan());
        config.cache_path = Some(cache);
        changed = true;
    }

    if let Some(output) = update.output {
        println!("  Set default output: {}", output.display().to_string().cyan());
        config.output_path = Some(output);
        changed = true;
    }

    if let Some(folding) = update.case_folding {
        config.case_folding = Some(folding);
        println!("  Set default case folding: {}", folding.to_string().green());
        changed = true;
    }

    if let Some(policy) = update.invalid_words {
        config.invalid_words = Some(policy);
        println!("  Set default invalid words: {}", policy.to_string().green());
        changed = true;
    }

    if let Some(enabled) = update.use_cache {
        config.use_cache = Some(enabled);
        println!("  Set cache enabled: {}", enabled.to_string().green());
        changed = true;
    }

    if changed {
        config.save_to(config_path)?;
        println!();
        println!("{}", "Configuration saved".green().bold());
    } else {
        print_config(&config);
    }

    Ok(())
}

fn print_config(config: &PersistentConfig) {
    println!("{}", "Current Settings".bold().underline());
    println!();
    println!(
        "  Word list:     {}",
        config.word_list_path().display().to_string().cyan()
    );
    match config.cache_path() {
        Ok(path) => println!("  Cache:         {}", path.display().to_string().cyan()),
        Err(e) => println!("  Cache:         {}", e.to_string().red()),
    }
    println!(
        "  Output:        {}",
        config.output_path().display().to_string().cyan()
    );
    let normalization = config.normalization();
    println!(
        "  Case folding:  {}",
        normalization.case_folding.to_string().green()
    );
    println!(
        "  Invalid words: {}",
        normalization.invalid_words.to_string().green()
    );
    println!(
        "  Use cache:     {}",
        config.cache_enabled().to_string().green()
    );
}
