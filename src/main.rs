use clap::Parser;
use colored::*;
use github_repo_search::app::App;
use github_repo_search::cli::{parse_command, Cli, Command, HELP_TEXT};
use github_repo_search::error::{RepoSearchError, Result};
use github_repo_search::github::{ClientConfig, GitHubClient};
use github_repo_search::platform::TerminalPlatform;
use github_repo_search::state::ListState;
use github_repo_search::store::FileUsernameStore;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,github_repo_search=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = GitHubClient::with_config(ClientConfig {
        base_url: cli.base_url.clone(),
        timeout: Duration::from_secs(cli.timeout_secs),
    })?;
    let store = match &cli.state_file {
        Some(path) => FileUsernameStore::new(path),
        None => FileUsernameStore::new(FileUsernameStore::default_path()?),
    };

    println!("{}", "GitHub Repository Search".bold().green());
    println!("{}\n", "=".repeat(50).dimmed());

    let mut app = App::new(client, Arc::new(store), Arc::new(TerminalPlatform::new()));

    let started = match cli.username.as_deref() {
        Some(username) => app.commit_username(username).await,
        None => app.start().await,
    };
    report(started);
    render(&mut app, cli.json);

    if app.username().is_none() {
        println!("Enter {} to get started, or {} for commands.", "user <name>".bold(), "help".bold());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt(app.username());
        let line = match lines.next_line().await? {
            Some(line) => line,
            None => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{} {}", "✗".red(), e);
                continue;
            }
        };

        match command {
            Command::User(username) => {
                report(app.commit_username(&username).await);
                render(&mut app, cli.json);
            }
            Command::Reload => {
                report(app.refresh().await);
                render(&mut app, cli.json);
            }
            Command::List => print_rows(app.state(), cli.json),
            Command::Open(position) => report(app.select(position).map(|_| ())),
            Command::Share(position) => report(app.share(position).map(|_| ())),
            Command::Help => println!("{}", HELP_TEXT),
            Command::Quit => break,
        }
    }

    println!("Bye");
    Ok(())
}

fn prompt(username: Option<&str>) {
    print!("{}> ", username.unwrap_or("").cyan());
    std::io::stdout().flush().ok();
}

fn report(result: Result<()>) {
    if let Err(e) = result {
        match e {
            RepoSearchError::NoUsername => {
                eprintln!("{} Enter a username first: user <name>", "✗".red())
            }
            other => eprintln!("{} {}", "✗".red(), other),
        }
    }
}

/// Show the latest outcome: a pending failure notice, or the rows.
fn render(app: &mut App, json: bool) {
    if let Some(notification) = app.state_mut().take_notification() {
        eprintln!("{} {}", "✗".red(), notification.message.red());
        return;
    }
    if app.username().is_some() {
        print_rows(app.state(), json);
    }
}

fn print_rows(state: &ListState, json: bool) {
    if json {
        match serde_json::to_string_pretty(state.rows()) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("{} {}", "✗".red(), e),
        }
        return;
    }

    if state.rows().is_empty() {
        println!("{}", "No repositories.".dimmed());
        return;
    }

    for (i, row) in state.rows().iter().enumerate() {
        let mut line = format!(
            "{:>3}. {}  {}",
            i + 1,
            row.name.bold(),
            format!("★{}", row.stars).yellow()
        );
        if let Some(language) = &row.language {
            line.push_str(&format!("  {}", language.blue()));
        }
        if let Some(description) = &row.description {
            line.push_str(&format!("  {}", description.dimmed()));
        }
        println!("{}", line);
    }
}
