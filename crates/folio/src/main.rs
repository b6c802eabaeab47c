//! `folio` - CLI for rendering portfolio pages
//!
//! This binary loads a catalog, renders it to a static HTML page and offers
//! a few inspection commands.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use folio::cli::{
    CheckCommand, Cli, Command, ConfigCommand, OutputFormat, RenderCommand, TagsCommand,
};
use folio::render::{compute_used_tags, html, ClientScript};
use folio::{init_logging, App, Catalog, SiteConfig};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    if let Some(path) = cli.validate_target() {
        return handle_validate(&path);
    }

    let config = SiteConfig::load_from(cli.config.clone()).context("loading configuration")?;

    match cli.command {
        Command::Render(cmd) => handle_render(config, cmd),
        Command::Check(cmd) => handle_check(&config, &cmd),
        Command::Tags(cmd) => handle_tags(&config, &cmd),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn load_catalog(config: &SiteConfig, path: Option<&PathBuf>) -> anyhow::Result<Catalog> {
    let path = path.unwrap_or(&config.catalog.path);
    Catalog::load(path, &config.catalog)
        .with_context(|| format!("loading catalog {}", path.display()))
}

fn handle_render(config: SiteConfig, cmd: RenderCommand) -> anyhow::Result<()> {
    let catalog = load_catalog(&config, cmd.catalog.as_ref())?;
    let out = cmd.out.unwrap_or_else(|| config.output.path.clone());
    let app = App::new(catalog, config);

    if cmd.stdout {
        let script = ClientScript::from_config(&app.config().site).inlined();
        print!("{}", html::document(&app.view(), app.config(), &script));
    } else {
        html::write_site(&out, &app.view(), app.config())?;
        println!(
            "Rendered {} projects to {}",
            app.catalog().len(),
            out.display()
        );
    }
    Ok(())
}

fn handle_check(config: &SiteConfig, cmd: &CheckCommand) -> anyhow::Result<()> {
    let catalog = load_catalog(config, cmd.catalog.as_ref())?;
    let unknown = catalog.unknown_tags();
    let used = compute_used_tags(&catalog);

    if cmd.json {
        let report = serde_json::json!({
            "projects": catalog.len(),
            "tags": catalog.tags.len(),
            "used_tags": used,
            "unknown_tags": unknown,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Catalog check");
        println!("-------------");
        println!("Projects:       {}", catalog.len());
        println!("Registered tags: {}", catalog.tags.len());
        println!("Used tags:      {}", used.join(", "));
        if unknown.is_empty() {
            println!("Unknown tags:   none");
        } else {
            println!("Unknown tags:");
            for entry in &unknown {
                println!("  {} -> {}", entry.project_id, entry.tag_id);
            }
        }
    }
    Ok(())
}

fn handle_tags(config: &SiteConfig, cmd: &TagsCommand) -> anyhow::Result<()> {
    let catalog = load_catalog(config, cmd.catalog.as_ref())?;
    let used = compute_used_tags(&catalog);

    match cmd.format {
        OutputFormat::Json => {
            let tags: Vec<_> = used
                .iter()
                .map(|id| match catalog.tags.lookup(id) {
                    Some(tag) => {
                        serde_json::json!({ "id": id, "label": tag.label, "icon": tag.icon })
                    }
                    None => serde_json::json!({ "id": id, "label": null, "icon": null }),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&tags)?);
        }
        OutputFormat::Plain => {
            for id in &used {
                match catalog.tags.lookup(id) {
                    Some(tag) => println!("{id:<16} {}", tag.label),
                    None => println!("{id:<16} (unregistered)"),
                }
            }
        }
    }
    Ok(())
}

fn handle_config(config: &SiteConfig, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Site]");
                println!("  Title:              {}", config.site.title);
                println!("  Heading:            {}", config.site.heading);
                println!(
                    "  Stylesheet:         {}",
                    config.site.stylesheet.as_deref().unwrap_or("(none)")
                );
                println!(
                    "  Script:             {}",
                    config.site.script.as_deref().unwrap_or("(inline)")
                );
                println!("  Bundle script:      {}", config.site.bundle_script);
                println!();
                println!("[Catalog]");
                println!("  Path:               {}", config.catalog.path.display());
                println!("  Duplicate ids:      {:?}", config.catalog.duplicate_ids);
                println!("  Warn unknown tags:  {}", config.catalog.warn_unknown_tags);
                println!();
                println!("[Lightbox]");
                println!("  Close key:          {}", config.lightbox.close_key);
                println!();
                println!("[Output]");
                println!("  Path:               {}", config.output.path.display());
            }
        }
        ConfigCommand::Path => {
            println!("{}", SiteConfig::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            handle_validate(&file.unwrap_or_else(SiteConfig::default_config_path))?;
        }
    }
    Ok(())
}

fn handle_validate(path: &Path) -> anyhow::Result<()> {
    println!("Validating configuration: {}", path.display());
    match SiteConfig::load_from(Some(path.to_path_buf())) {
        Ok(_) => println!("Configuration is valid."),
        Err(e) => println!("Configuration error: {e}"),
    }
    Ok(())
}
