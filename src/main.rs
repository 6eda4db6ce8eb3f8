use clap::{Parser, Subcommand, ValueEnum};
use review_sentiment::config;
use review_sentiment::{AnalyzerConfig, RankOrder, SentimentAnalyzer};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "review-sentiment", about = "Word-level sentiment from rated movie reviews")]
struct Args {
    /// Corpus of rated sentences, one `<digit><text>` per line
    #[arg(long, env = config::REVIEWS_PATH_ENV, default_value = config::DEFAULT_REVIEWS_PATH)]
    reviews: String,

    /// Stopword list, one word per line
    #[arg(long, env = config::STOPWORDS_PATH_ENV, default_value = config::DEFAULT_STOPWORDS_PATH)]
    stopwords: String,

    /// Skip corpus lines without a leading rating digit instead of failing
    #[arg(long, default_value_t = false)]
    lenient: bool,

    /// Print results as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Score a review and name its sentiment band
    Review { text: String },
    /// Show the mean rating of a single word
    Word { word: String },
    /// List the top words, best first
    Top {
        #[arg(long, value_enum, default_value_t = By::Positive)]
        by: By,
        #[arg(short, default_value_t = config::DEFAULT_TOP_N)]
        n: usize,
    },
    /// Dictionary size and ingestion counters
    Stats,
    /// Check whether a word is a stopword
    Stopword { word: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum By {
    Frequent,
    Positive,
    Negative,
}

impl From<By> for RankOrder {
    fn from(by: By) -> Self {
        match by {
            By::Frequent => RankOrder::MostFrequent,
            By::Positive => RankOrder::MostPositive,
            By::Negative => RankOrder::MostNegative,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("review_sentiment=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let options = if args.lenient {
        AnalyzerConfig::lenient()
    } else {
        AnalyzerConfig::default()
    };
    let analyzer = match options.load_files(&args.reviews, &args.stopwords) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match args.command {
        Some(Command::Review { text }) => {
            let score = analyzer.review_sentiment(&text);
            let label = analyzer.review_sentiment_label(&text);
            if args.json {
                println!("{}", json!({ "score": score, "sentiment": label }));
            } else {
                println!("{:.3} ({})", score, label);
            }
        }
        Some(Command::Word { word }) => match analyzer.word_entry(&word) {
            Some(entry) if args.json => println!("{}", serde_json::to_string(entry)?),
            Some(entry) => println!(
                "{}: {:.3} over {} occurrences",
                entry.display_form, entry.mean, entry.count
            ),
            None if args.json => println!(
                "{}",
                json!({ "word": word, "mean": config::UNKNOWN_SENTIMENT })
            ),
            None => println!("{}: unknown", word),
        },
        Some(Command::Top { by, n }) => print_top(&analyzer, by.into(), n, args.json)?,
        Some(Command::Stats) => {
            let stats = analyzer.ingest_stats();
            if args.json {
                println!(
                    "{}",
                    json!({ "dictionary_size": analyzer.dictionary_size(), "ingest": stats })
                );
            } else {
                println!("words:     {}", analyzer.dictionary_size());
                println!("lines:     {} ({} skipped)", stats.lines, stats.skipped);
                println!("tokens:    {}", stats.tokens);
                println!("stopwords: {} dropped", stats.stopwords_dropped);
            }
        }
        Some(Command::Stopword { word }) => {
            let is_stop = analyzer.is_stop_word(&word);
            if args.json {
                println!("{}", json!({ "word": word, "stopword": is_stop }));
            } else {
                println!("{}", is_stop);
            }
        }
        None => {
            print_top(&analyzer, RankOrder::MostNegative, config::DEFAULT_TOP_N, args.json)?;
            print_top(&analyzer, RankOrder::MostPositive, config::DEFAULT_TOP_N, args.json)?;
        }
    }
    Ok(())
}

fn print_top(
    analyzer: &SentimentAnalyzer,
    order: RankOrder,
    n: usize,
    as_json: bool,
) -> Result<(), serde_json::Error> {
    let entries = analyzer.ranked(order, n);
    if as_json {
        println!("{}", serde_json::to_string(&entries)?);
        return Ok(());
    }
    println!("{:?}:", order);
    for (i, entry) in entries.iter().enumerate() {
        println!(
            "  {:>3}. {:<20} mean={:.3} count={}",
            i + 1,
            entry.display_form,
            entry.mean,
            entry.count
        );
    }
    Ok(())
}
