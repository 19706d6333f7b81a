//! Output formatting for CLI commands.

use crate::cli::args::{OutputFormat, PatlexArgs};
use crate::error::Result;
use crate::search::SearchResponse;

/// Print a search response in the requested output format.
pub fn print_search_response(response: &SearchResponse, args: &PatlexArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => print_json(response, args.pretty),
        OutputFormat::Human => {
            print_human(response);
            Ok(())
        }
    }
}

fn print_json(response: &SearchResponse, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(response)?
    } else {
        serde_json::to_string(response)?
    };
    println!("{rendered}");
    Ok(())
}

fn print_human(response: &SearchResponse) {
    println!(
        "{} results (provider: {}, page {} of size {})",
        response.total, response.provider, response.page, response.page_size
    );

    for (index, result) in response.results.iter().enumerate() {
        let rank = (response.page - 1) * response.page_size + index + 1;
        println!();
        println!(
            "{rank}. [{}] {} (score: {:.4}, lexical: {:.4}, semantic: {:.4})",
            result.document.id,
            result.document.title,
            result.score,
            result.lexical_score,
            result.semantic_score
        );
        if !result.document.assignee.is_empty() {
            println!("   assignee: {}", result.document.assignee);
        }
        if let Some(filed) = result.document.filing_date {
            println!("   filed: {filed}");
        }
        if let Some(ref snippet) = result.highlights.abstract_text {
            println!("   {snippet}");
        } else if let Some(ref snippet) = result.highlights.claims {
            println!("   {snippet}");
        }
    }
}
