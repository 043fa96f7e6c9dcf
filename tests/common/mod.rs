use discovery_facets::RawFacetResponse;
use serde_json::json;
use std::sync::Once;

static TRACING: Once = Once::new();

/// Route library logs to the test output; `RUST_LOG=debug` to see them.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new(
                std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
            ))
            .with_test_writer()
            .try_init();
    });
}

#[allow(dead_code)]
/// A facet response shaped like the backend's, including keys that are not facets.
pub fn backend_response() -> serde_json::Value {
    json!({
        "took": 12,
        "total": 1000,
        "max_score": 1.0,
        "funder.name.keyword": {
            "terms": [
                {"term": "NIH", "count": 300},
                {"term": "NSF", "count": 120},
                {"term": "Wellcome Trust", "count": 40}
            ],
            "total": 460
        },
        "funding.funder.name.keyword": {
            "terms": [
                {"term": "NSF", "count": 200},
                {"term": "ERC", "count": 50}
            ],
            "total": 250
        },
        "_index": {
            "terms": [
                {"term": "indexed_harvard_dataverse_1", "count": 400},
                {"term": "indexed_zenodo", "count": 250},
                {"term": "harvard_dataverse_2", "count": 100},
                {"term": "indexed_ncbi_geo", "count": 150},
                {"term": "indexed_omicsdi", "count": 100}
            ],
            "total": 1000
        },
        "variableMeasured.keyword": {
            "terms": [
                {"term": "temperature", "count": 20},
                {"term": "gene expression", "count": 90},
                {"term": "pH", "count": 20}
            ],
            "total": 130
        },
        "measurementTechnique.keyword": {
            "terms": [{"term": "RNA-seq", "count": 75}],
            "total": 75
        },
        "keywords.keyword": {
            "terms": [
                {"term": "covid-19", "count": 10},
                {"term": "malaria", "count": 33}
            ],
            "total": 43
        }
    })
}

#[allow(dead_code)]
pub fn parsed_response() -> RawFacetResponse {
    RawFacetResponse::from_json(&backend_response()).expect("fixture parses")
}
