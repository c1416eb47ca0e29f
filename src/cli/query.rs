use clap::Parser;
use clap::Subcommand;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Find pure-strategy equilibria of zero-sum matrix games",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub query: Option<Query>,
    #[arg(long, global = true, help = "Emit JSON instead of text")]
    pub json: bool,
    #[arg(short, long, global = true, help = "Log analysis details to stderr")]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Query {
    #[command(about = "List the games in the catalog", alias = "ls")]
    List,
    #[command(about = "Analyze one catalog game by slug", alias = "get")]
    Show {
        #[arg(required = true)]
        slug: String,
    },
    #[command(about = "Analyze every catalog game in order")]
    All,
    #[command(
        about = "Analyze a matrix given as JSON rows, e.g. '[[1,2],[1,2]]', or '-' for stdin"
    )]
    Solve {
        #[arg(required = true)]
        matrix: String,
    },
}
