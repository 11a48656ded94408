use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tvposts_search::{Category, RankOptions, SearchConfig, SearchRanker, StaticCorpus};

#[derive(Parser)]
#[command(name = "tvposts-search")]
#[command(about = "TV Posts search CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// YAML config path (defaults plus environment when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON corpus file (defaults to the bundled demo posts)
    #[arg(long)]
    corpus: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search posts
    Search {
        /// Search query
        query: String,

        /// Category filter ("all" for none)
        #[arg(short = 't', long, default_value = "all")]
        category: String,

        /// Maximum results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Also search post bodies
        #[arg(long)]
        content: bool,
    },

    /// Typeahead suggestions
    Suggest {
        query: String,
    },

    /// Page through the feed
    Posts {
        #[arg(short, long, default_value = "0")]
        offset: usize,

        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Seed for the generated posts
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Only posts about this show (slug, e.g. breaking-bad)
        #[arg(long)]
        show: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = SearchConfig::load(cli.config.as_deref())?;
    let corpus = match &cli.corpus {
        Some(path) => StaticCorpus::from_json_file(path)?,
        None => StaticCorpus::seeded(),
    };
    let ranker = SearchRanker::from_config(&config, Arc::new(corpus))?;

    if !ranker.is_remote_available() {
        println!("ℹ️  Local search only (no provider key configured)");
    }

    match cli.command {
        Commands::Search { query, category, limit, content } => {
            println!("🔍 Searching for: {}", query);

            let options = RankOptions {
                category: Category::parse_filter(&category)?,
                limit: limit.unwrap_or(config.search.default_limit),
                include_content: content,
            };

            let response = ranker.rank(&query, &options).await;

            if response.enhanced_query != query.trim() {
                println!("   Enhanced: {}", response.enhanced_query);
            }
            println!(
                "\n✅ {} of {} results ({:.2}ms)",
                response.results.len(),
                response.total_count,
                response.elapsed_ms
            );

            for (i, result) in response.results.iter().enumerate() {
                println!(
                    "   {}. [{}] {} ({}) by {} - {:?}",
                    i + 1,
                    result.relevance_score,
                    result.post.title,
                    result.post.display_name(),
                    result.post.author,
                    result.match_type
                );
            }

            if !response.suggestions.is_empty() {
                println!("\n💡 Try:");
                for suggestion in &response.suggestions {
                    println!("   - {}", suggestion);
                }
            }
        }

        Commands::Suggest { query } => {
            let suggestions = ranker.suggest(&query).await;

            if suggestions.is_empty() {
                println!("No suggestions for: {}", query);
            }

            for suggestion in suggestions {
                println!(
                    "   {:.2} {:?} {} {}",
                    suggestion.confidence,
                    suggestion.kind,
                    suggestion.text,
                    suggestion.description.unwrap_or_default()
                );
            }
        }

        Commands::Posts { offset, limit, seed, show } => {
            let corpus = ranker.corpus();
            let limit = limit.min(config.search.max_page_size);

            let posts = match show.as_deref() {
                Some(slug) => match corpus.show_name(slug) {
                    Some(name) => {
                        println!("📺 {}", name);
                        corpus.show_page(slug, offset, limit, seed)
                    }
                    None => {
                        println!("No posts for show: {}", slug);
                        Vec::new()
                    }
                },
                None => corpus.page(offset, limit, seed),
            };

            for post in posts {
                println!(
                    "   {} | {} | {} | ▲{} 💬{} | {}",
                    post.id,
                    post.show,
                    post.title,
                    post.votes,
                    post.comment_count,
                    post.timestamp.format("%Y-%m-%d %H:%M")
                );
            }
        }
    }

    Ok(())
}
