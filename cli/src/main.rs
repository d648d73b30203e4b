use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use search_cli::{build_server, read_queries};
use search_core::{
    paginate, process_queries, process_queries_joined, Document, DocumentStatus, ExecutionPolicy,
};
use tracing_subscriber::{fmt, EnvFilter};

use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "search")]
#[command(
    about = "Query an in-memory TF-IDF index built from JSON/JSONL documents",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct IndexArgs {
    /// Input path (file or directory)
    #[arg(long)]
    input: PathBuf,
    /// Space-separated stop words
    #[arg(long, default_value = "")]
    stop_words: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum StatusArg {
    Active,
    Irrelevant,
    Banned,
    Removed,
}

impl From<StatusArg> for DocumentStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Active => DocumentStatus::Active,
            StatusArg::Irrelevant => DocumentStatus::Irrelevant,
            StatusArg::Banned => DocumentStatus::Banned,
            StatusArg::Removed => DocumentStatus::Removed,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the top documents for a query
    Search {
        #[command(flatten)]
        index: IndexArgs,
        query: String,
        #[arg(long, value_enum, default_value_t = StatusArg::Active)]
        status: StatusArg,
        /// Score query words on the thread pool
        #[arg(long, default_value_t = false)]
        parallel: bool,
        #[arg(long, default_value_t = 2)]
        page_size: usize,
    },
    /// Print the query words found in every document
    Match {
        #[command(flatten)]
        index: IndexArgs,
        query: String,
        #[arg(long, default_value_t = false)]
        parallel: bool,
    },
    /// Remove documents with duplicate word sets and report them
    Dedup {
        #[command(flatten)]
        index: IndexArgs,
    },
    /// Run every line of a file as a query
    Batch {
        #[command(flatten)]
        index: IndexArgs,
        /// File with one query per line
        #[arg(long)]
        queries: PathBuf,
        /// Print one flat list instead of one list per query
        #[arg(long, default_value_t = false)]
        joined: bool,
    },
}

fn policy(parallel: bool) -> ExecutionPolicy {
    if parallel {
        ExecutionPolicy::Parallel
    } else {
        ExecutionPolicy::Sequential
    }
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search { index, query, status, parallel, page_size } => {
            let server = build_server(&index.input, &index.stop_words)?;
            let status = DocumentStatus::from(status);
            let found = server
                .find_top_documents_with_policy(policy(parallel), &query, |_, s, _| s == status)?;
            for (page_no, page) in paginate(&found, page_size).into_iter().enumerate() {
                println!("page {}", page_no + 1);
                print_documents(page);
            }
        }
        Commands::Match { index, query, parallel } => {
            let server = build_server(&index.input, &index.stop_words)?;
            for id in &server {
                let (words, status) =
                    server.match_document_with_policy(policy(parallel), &query, id)?;
                let words = words.join(" ");
                println!("{{ document_id = {id}, status = {status:?}, words = {words} }}");
            }
        }
        Commands::Dedup { index } => {
            let mut server = build_server(&index.input, &index.stop_words)?;
            for id in server.remove_duplicates() {
                println!("Found duplicate document id {id}");
            }
            println!("{} documents remain", server.document_count());
        }
        Commands::Batch { index, queries, joined } => {
            let server = build_server(&index.input, &index.stop_words)?;
            let queries = read_queries(&queries)?;
            if joined {
                print_documents(&process_queries_joined(&server, &queries)?);
            } else {
                for (query, found) in queries.iter().zip(process_queries(&server, &queries)?) {
                    println!("{} documents for query: {query}", found.len());
                    print_documents(&found);
                }
            }
        }
    }
    Ok(())
}

fn print_documents(docs: &[Document]) {
    for doc in docs {
        println!("{doc}");
    }
}
