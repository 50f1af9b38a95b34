use clap::{Args, Parser, Subcommand};
use nd_analytics::{analyze, dashboard_stats};
use nd_core::{DateRange, FilterCriteria, Result, SortBy, SortOrder, SortSpec};
use nd_search::{authors, filter_articles, quick_search, search, source_names};

mod input;
mod logging;
mod output;

use input::load_articles;
use logging::{init_logging, Logger};
use output::{AnalyzeReport, ArticleListing, ChartSummary, FacetsReport};

#[derive(Parser, Debug)]
#[command(author, version, about = "Filter, sort and chart news article collections", long_about = None)]
pub struct Cli {
    /// Log at debug level
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone)]
struct FilterArgs {
    /// Space-separated search terms; an article matches when any term appears
    #[arg(long, default_value = "")]
    keywords: String,
    /// Keep only articles by this exact author
    #[arg(long)]
    author: Option<String>,
    /// Keep only articles from this exact source name
    #[arg(long)]
    source: Option<String>,
    /// all, today, week or month
    #[arg(long, default_value = "all")]
    date_range: DateRange,
    /// Keep only articles with an image
    #[arg(long)]
    has_image: bool,
    /// Minimum description plus content word count
    #[arg(long, default_value_t = 0)]
    min_words: usize,
}

impl From<FilterArgs> for FilterCriteria {
    fn from(args: FilterArgs) -> Self {
        FilterCriteria {
            keywords: args.keywords,
            author: args.author,
            source: args.source,
            date_range: args.date_range,
            has_image: args.has_image,
            min_word_count: args.min_words,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the filtered, ordered article list
    Search {
        /// News API response (or article array) as JSON; `-` reads stdin
        input: String,
        #[command(flatten)]
        filters: FilterArgs,
        /// date, source or relevance
        #[arg(long, default_value = "date")]
        sort_by: SortBy,
        /// asc or desc
        #[arg(long, default_value = "desc")]
        sort_order: SortOrder,
        #[arg(long)]
        json: bool,
    },
    /// Print chart data and headline stats for the filtered articles
    Analyze {
        input: String,
        #[command(flatten)]
        filters: FilterArgs,
        #[arg(long)]
        json: bool,
    },
    /// Dashboard search box: short terms ignored, fixed sort direction per key
    Quick {
        input: String,
        /// Search text
        #[arg(default_value = "")]
        term: String,
        #[arg(long, default_value = "all")]
        date_range: DateRange,
        #[arg(long, default_value = "date")]
        sort_by: SortBy,
        #[arg(long)]
        json: bool,
    },
    /// List the distinct sources and authors
    Facets {
        input: String,
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Search { .. } => "search",
            Commands::Analyze { .. } => "analyze",
            Commands::Quick { .. } => "quick",
            Commands::Facets { .. } => "facets",
        }
    }
}

async fn run(command: Commands, logger: &Logger) -> Result<()> {
    match command {
        Commands::Search {
            input,
            filters,
            sort_by,
            sort_order,
            json,
        } => {
            let articles = load_articles(&input).await?;
            logger.info(&format!("📰 Loaded {} articles from {}", articles.len(), input));

            let criteria = FilterCriteria::from(filters);
            let sorting = SortSpec::new(sort_by, sort_order);
            let ordered = search(&articles, &criteria, &sorting);
            logger.debug(&format!("sorted by {} {}", sorting.sort_by, sorting.sort_order));

            if json {
                println!("{}", output::to_json(&ordered)?);
            } else {
                let listing = ArticleListing {
                    articles: &ordered,
                    total: articles.len(),
                };
                print!("{}", listing);
            }
        }
        Commands::Analyze {
            input,
            filters,
            json,
        } => {
            let articles = load_articles(&input).await?;
            logger.info(&format!("📰 Loaded {} articles from {}", articles.len(), input));

            let criteria = FilterCriteria::from(filters);
            let active = criteria.active_filters();
            let filtered = filter_articles(&articles, &criteria);
            if filtered.is_empty() {
                logger.warn("No articles left after filtering");
            }

            let chart = analyze(&filtered);
            let stats = dashboard_stats(&filtered, &chart);

            if json {
                let report = AnalyzeReport {
                    stats,
                    active_filters: output::filter_labels(&active),
                    chart: &chart,
                };
                println!("{}", output::to_json(&report)?);
            } else {
                let summary = ChartSummary {
                    chart: &chart,
                    stats: &stats,
                    active: &active,
                };
                print!("{}", summary);
            }
        }
        Commands::Quick {
            input,
            term,
            date_range,
            sort_by,
            json,
        } => {
            let articles = load_articles(&input).await?;
            logger.info(&format!("📰 Loaded {} articles from {}", articles.len(), input));

            let found = quick_search(&articles, &term, date_range, sort_by);
            if json {
                println!("{}", output::to_json(&found)?);
            } else {
                let listing = ArticleListing {
                    articles: &found,
                    total: articles.len(),
                };
                print!("{}", listing);
            }
        }
        Commands::Facets { input, json } => {
            let articles = load_articles(&input).await?;
            let report = FacetsReport {
                sources: source_names(&articles),
                authors: authors(&articles),
            };
            logger.debug(&format!(
                "{} sources, {} authors",
                report.sources.len(),
                report.authors.len()
            ));

            if json {
                println!("{}", output::to_json(&report)?);
            } else {
                print!("{}", report);
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let logger = init_logging(cli.verbose).with_prefix(format!("[{}]", cli.command.name()));
    run(cli.command, &logger).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_search_flags_map_to_criteria() {
        let cli = Cli::try_parse_from([
            "nd",
            "search",
            "articles.json",
            "--keywords",
            "climate deal",
            "--source",
            "Reuters",
            "--date-range",
            "week",
            "--has-image",
            "--min-words",
            "12",
            "--sort-by",
            "relevance",
            "--sort-order",
            "asc",
        ])
        .unwrap();

        match cli.command {
            Commands::Search {
                input,
                filters,
                sort_by,
                sort_order,
                json,
            } => {
                assert_eq!(input, "articles.json");
                assert_eq!(sort_by, SortBy::Relevance);
                assert_eq!(sort_order, SortOrder::Asc);
                assert!(!json);

                let criteria = FilterCriteria::from(filters);
                assert_eq!(criteria.keywords, "climate deal");
                assert_eq!(criteria.source.as_deref(), Some("Reuters"));
                assert_eq!(criteria.date_range, DateRange::Week);
                assert!(criteria.has_image);
                assert_eq!(criteria.min_word_count, 12);
                assert!(criteria.author.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["nd", "analyze", "-"]).unwrap();
        match cli.command {
            Commands::Analyze { filters, .. } => {
                assert!(FilterCriteria::from(filters).is_unconstrained());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_sort_key() {
        assert!(Cli::try_parse_from(["nd", "search", "a.json", "--sort-by", "popularity"]).is_err());
    }
}
