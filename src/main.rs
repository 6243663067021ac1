use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use toplists::{
    api::ProxyState,
    cli, config, error, server,
    utils::{self, SortKey, Window},
};

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
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Your most-listened-to artists
    Artists(ListArgs),

    /// Your most-listened-to songs
    Songs(ListArgs),

    /// Albums of your top songs
    Albums(ListArgs),

    /// Genres of your top artists
    Genres(ListArgs),

    /// Tracks recommended for a genre
    Recommend(RecommendArgs),

    /// Run the backend proxy
    Serve(ServeArgs),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct OrderArgs {
    /// Sort by `name`, or by first `artist` (songs and recommendations)
    #[clap(long, value_parser = utils::parse_sort_key)]
    pub sort: Option<SortKey>,

    /// Shuffle the list
    #[clap(long)]
    pub shuffle: bool,

    /// Create a playlist from the list, optionally naming it
    #[clap(long, value_name = "NAME")]
    pub playlist: Option<Option<String>>,
}

#[derive(Parser, Debug, Clone)]
pub struct ListArgs {
    /// Ranking window: short (~4 weeks), medium (~6 months) or long (years)
    #[clap(long, default_value = "short", value_parser = utils::parse_window)]
    pub window: Window,

    #[clap(flatten)]
    pub order: OrderArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct RecommendArgs {
    /// Seed genre, e.g. "indie-pop"
    pub genre: String,

    /// Number of tracks to ask for (1-100)
    #[clap(long, default_value_t = 20)]
    pub limit: u32,

    #[clap(flatten)]
    pub order: OrderArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct ServeArgs {
    /// Listen address, defaults to SERVER_ADDRESS
    #[clap(long)]
    pub address: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn list_options(window: Window, order: OrderArgs) -> cli::ListOptions {
    cli::ListOptions {
        window,
        sort: order.sort,
        shuffle: order.shuffle,
        playlist: order.playlist.map(Option::unwrap_or_default),
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Artists(opt) => cli::artists(list_options(opt.window, opt.order)).await,
        Command::Songs(opt) => cli::songs(list_options(opt.window, opt.order)).await,
        Command::Albums(opt) => cli::albums(list_options(opt.window, opt.order)).await,
        Command::Genres(opt) => cli::genres(list_options(opt.window, opt.order)).await,
        Command::Recommend(opt) => {
            cli::recommend(
                opt.genre,
                opt.limit,
                list_options(Window::default(), opt.order),
            )
            .await
        }
        Command::Serve(opt) => {
            let addr = opt.address.unwrap_or_else(config::server_addr);
            if let Err(e) = server::start_api_server(&addr, ProxyState::from_env()).await {
                error!("Proxy stopped. Err: {}", e);
            }
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
