//! End-to-end tests for the hybrid search pipeline over an in-memory
//! document store and the local hash embedder.

use chrono::NaiveDate;
use patlex::document::{MemoryDocumentStore, PatentDocument};
use patlex::embedding::EmbeddingConfig;
use patlex::search::{HybridSearchConfig, HybridSearchEngine, SearchFilters, SearchRequest};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn corpus() -> Vec<PatentDocument> {
    vec![
        PatentDocument {
            id: "US-2022-001".to_string(),
            title: "Wireless charging coil with ferrite shielding".to_string(),
            abstract_text:
                "A wireless charging coil assembly with a ferrite layer reducing eddy losses."
                    .to_string(),
            claims: "1. A wireless charging coil comprising a ferrite backing.".to_string(),
            cpc_codes: vec!["H02J50/10".to_string()],
            ipc_codes: vec!["H02J7/00".to_string()],
            assignee: "Acme Power Corp".to_string(),
            filing_date: Some(date("2021-03-15")),
            publication_date: Some(date("2022-09-01")),
        },
        PatentDocument {
            id: "US-2019-002".to_string(),
            title: "Inductive power transfer pad".to_string(),
            abstract_text: "A charging pad for inductive transfer to portable devices."
                .to_string(),
            claims: "1. A pad with a primary coil.".to_string(),
            cpc_codes: vec!["H02J50/10".to_string(), "H02J50/40".to_string()],
            ipc_codes: vec![],
            assignee: "Globex Energy".to_string(),
            filing_date: Some(date("2018-06-20")),
            publication_date: Some(date("2019-12-05")),
        },
        PatentDocument {
            id: "US-2020-003".to_string(),
            title: "Submarine hull anti-fouling coating".to_string(),
            abstract_text: "A polymer coating preventing marine growth on hulls.".to_string(),
            claims: "1. A coating composition.".to_string(),
            cpc_codes: vec!["B63B59/04".to_string()],
            ipc_codes: vec!["C09D5/16".to_string()],
            assignee: "Neptune Marine".to_string(),
            filing_date: Some(date("2019-02-01")),
            publication_date: Some(date("2020-08-14")),
        },
    ]
}

fn engine_over(docs: Vec<PatentDocument>) -> HybridSearchEngine<MemoryDocumentStore> {
    let store = MemoryDocumentStore::new();
    store.add_documents(docs);
    let config = HybridSearchConfig::default().with_embedding(EmbeddingConfig::default());
    HybridSearchEngine::new(config, store).unwrap()
}

#[tokio::test]
async fn verbatim_match_outranks_unrelated_documents() {
    let engine = engine_over(corpus());
    let response = engine
        .search(&SearchRequest::new("wireless charging coil"))
        .await
        .unwrap();

    assert_eq!(response.provider, "local-hash");
    assert_eq!(response.total, 3);
    assert_eq!(response.results[0].document.id, "US-2022-001");

    let coating = response
        .results
        .iter()
        .find(|r| r.document.id == "US-2020-003")
        .unwrap();
    assert!(response.results[0].score > coating.score);
}

#[tokio::test]
async fn classification_filter_narrows_candidates() {
    let engine = engine_over(corpus());
    let filters = SearchFilters {
        cpc_codes: vec!["H02J50/10".to_string()],
        ..Default::default()
    };
    let response = engine
        .search(&SearchRequest::new("charging").with_filters(filters))
        .await
        .unwrap();

    assert_eq!(response.total, 2);
    assert!(
        response
            .results
            .iter()
            .all(|r| r.document.cpc_codes.contains(&"H02J50/10".to_string()))
    );
}

#[tokio::test]
async fn date_range_filter_uses_filing_dates() {
    let engine = engine_over(corpus());
    let filters = SearchFilters {
        filed_after: Some("2020-01-01".to_string()),
        ..Default::default()
    };
    let response = engine
        .search(&SearchRequest::new("coil").with_filters(filters))
        .await
        .unwrap();

    assert_eq!(response.total, 1);
    assert_eq!(response.results[0].document.id, "US-2022-001");
}

#[tokio::test]
async fn pagination_covers_the_ranked_list_without_overlap() {
    let docs: Vec<PatentDocument> = (0..25)
        .map(|i| {
            let mut doc =
                PatentDocument::new(format!("US-{i:03}"), format!("Battery electrode {i}"));
            doc.abstract_text = "An electrode for lithium cells.".to_string();
            doc
        })
        .collect();
    let engine = engine_over(docs);

    let mut seen = Vec::new();
    for page in 1..=3 {
        let response = engine
            .search(
                &SearchRequest::new("battery electrode")
                    .with_page(page)
                    .with_page_size(10),
            )
            .await
            .unwrap();
        assert_eq!(response.total, 25);
        assert_eq!(response.page, page);
        assert_eq!(response.page_size, 10);
        assert_eq!(response.results.len(), if page < 3 { 10 } else { 5 });
        seen.extend(response.results.iter().map(|r| r.document.id.clone()));
    }

    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 25);
}

#[tokio::test]
async fn highlights_escape_source_markup() {
    let mut doc = PatentDocument::new("US-XSS", "Coil <script>alert(1)</script>");
    doc.abstract_text = "A coil & a <b>bold</b> claim.".to_string();
    let engine = engine_over(vec![doc]);

    let response = engine.search(&SearchRequest::new("coil")).await.unwrap();
    let highlights = &response.results[0].highlights;

    let title = highlights.title.as_deref().unwrap();
    assert!(!title.contains("<script>"));
    assert!(title.contains("&lt;script&gt;"));
    assert!(title.contains("<em>Coil</em>"));

    let abstract_hl = highlights.abstract_text.as_deref().unwrap();
    assert!(!abstract_hl.contains("<b>"));
    assert!(abstract_hl.contains("&amp;"));
}

#[tokio::test]
async fn candidate_cap_bounds_the_scored_set() {
    let docs: Vec<PatentDocument> = (0..40)
        .map(|i| PatentDocument::new(format!("US-{i:03}"), format!("Gear assembly {i}")))
        .collect();
    let store = MemoryDocumentStore::new();
    store.add_documents(docs);

    let config = HybridSearchConfig::default().with_max_candidates(10);
    let engine = HybridSearchEngine::new(config, store).unwrap();

    let response = engine
        .search(&SearchRequest::new("gear assembly"))
        .await
        .unwrap();
    assert_eq!(response.total, 10);
}

#[tokio::test]
async fn empty_query_is_rejected() {
    let engine = engine_over(corpus());
    assert!(engine.search(&SearchRequest::new("")).await.is_err());
    assert!(engine.search(&SearchRequest::new("  \t ")).await.is_err());
}
