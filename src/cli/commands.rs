//! Command implementations for the Patlex CLI.

use std::fs::File;
use std::io::BufReader;

use crate::cli::args::*;
use crate::cli::output::print_search_response;
use crate::document::{MemoryDocumentStore, PatentDocument};
use crate::embedding::EmbeddingConfig;
use crate::error::Result;
use crate::search::{HybridSearchConfig, HybridSearchEngine, SearchFilters, SearchRequest};

/// Execute a CLI command.
pub async fn execute_command(args: PatlexArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => run_search(search_args.clone(), &args).await,
    }
}

/// Load a corpus, run one search, and print the response.
async fn run_search(args: SearchArgs, cli_args: &PatlexArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Loading documents from: {}", args.documents.display());
    }

    let store = load_corpus(&args)?;
    if cli_args.verbosity() > 1 {
        println!("Loaded {} documents", store.len());
    }

    let mut embedding = EmbeddingConfig::from_env();
    if let Some(url) = &args.api_url {
        embedding.api_url = url.clone();
    }
    if let Some(model) = &args.model {
        embedding.model = model.clone();
    }
    embedding.cache = args.cache_embeddings;

    let config = HybridSearchConfig::default().with_embedding(embedding);
    let engine = HybridSearchEngine::new(config, store)?;

    let request = build_request(&args);
    let response = engine.search(&request).await?;

    print_search_response(&response, cli_args)
}

fn load_corpus(args: &SearchArgs) -> Result<MemoryDocumentStore> {
    let file = File::open(&args.documents)?;
    let documents: Vec<PatentDocument> = serde_json::from_reader(BufReader::new(file))?;

    let store = MemoryDocumentStore::new();
    store.add_documents(documents);
    Ok(store)
}

fn build_request(args: &SearchArgs) -> SearchRequest {
    let filters = SearchFilters {
        cpc_codes: args.cpc_codes.clone(),
        ipc_codes: args.ipc_codes.clone(),
        assignee: args.assignee.clone(),
        filed_after: args.filed_after.clone(),
        filed_before: args.filed_before.clone(),
    };

    SearchRequest::new(args.query.clone())
        .with_filters(filters)
        .with_page(args.page)
        .with_page_size(args.page_size)
}
