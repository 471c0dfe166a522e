use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "github-repo-search")]
#[command(about = "Browse a GitHub user's repositories and open or share their links")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Username to load right away (also saved as the last used username)
    pub username: Option<String>,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
    pub base_url: String,

    /// File holding the last used username
    #[arg(long, env = "REPO_SEARCH_STATE_FILE")]
    pub state_file: Option<PathBuf>,

    /// HTTP request timeout in seconds
    #[arg(long, env = "GITHUB_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Print repository lists as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// One line typed at the interactive prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    User(String),
    Reload,
    List,
    Open(usize),
    Share(usize),
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  user <name>   save <name> and list its repositories
  reload        fetch the current user's repositories again
  list          show the current list
  open <n>      open repository n in the browser
  share <n>     print repository n's link for sharing
  help          show this help
  quit          exit";

pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "user" | "u" => Ok(Command::User(rest.to_string())),
        "reload" | "r" => Ok(Command::Reload),
        "list" | "ls" | "l" => Ok(Command::List),
        "open" | "o" => parse_position(rest).map(Command::Open),
        "share" | "s" => parse_position(rest).map(Command::Share),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        "" => Err("empty command".to_string()),
        other => Err(format!("unknown command: {}", other)),
    }
}

fn parse_position(arg: &str) -> Result<usize, String> {
    arg.parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| format!("expected a repository number, got {:?}", arg))
}
