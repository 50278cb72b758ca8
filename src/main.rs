use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use vocadeck::{cli, config, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Browse the deck interactively
    Deck(DeckOptions),

    /// Print the deck once
    List(ListOptions),

    /// Show how many words each genre holds
    Genres,

    /// Play the pronunciation of a word
    Play(PlayOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct DeckOptions {
    /// Start with this search query
    #[clap(long)]
    pub search: Option<String>,

    /// Start on this genre tab (enables genre tabs)
    #[clap(long)]
    pub genre: Option<String>,

    /// Show the genre tab bar
    #[clap(long)]
    pub genre_tabs: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ListOptions {
    /// Only words whose word or meaning contains this text
    #[clap(long)]
    pub search: Option<String>,

    /// Only words of this genre
    #[clap(long)]
    pub genre: Option<String>,

    /// Show the details of this word
    #[clap(long)]
    pub expand: Option<String>,

    /// Print the records as JSON
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct PlayOptions {
    /// The word to play
    pub word: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load .env file. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Deck(opt) => cli::deck(opt.search, opt.genre, opt.genre_tabs).await,
        Command::List(opt) => cli::list(opt.search, opt.genre, opt.expand, opt.json).await,
        Command::Genres => cli::genres().await,
        Command::Play(opt) => cli::play(opt.word).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
