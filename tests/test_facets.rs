//! End-to-end facet cleanup over a backend-shaped JSON body.

mod common;

use discovery_facets::{
    clean_facets, clean_facets_with, FacetEntry, FacetError, FacetSettings, RawFacetResponse,
};

#[test]
fn cleans_full_backend_response() {
    common::init_tracing();
    let groups = clean_facets(&common::parsed_response(), None).unwrap();

    let vars: Vec<&str> = groups.iter().map(|g| g.variable.as_str()).collect();
    assert_eq!(
        vars,
        vec![
            "funder",
            "source",
            "variableMeasured",
            "measurementTechnique",
            "keywords"
        ]
    );

    assert_eq!(
        groups[0].counts,
        vec![
            FacetEntry::new("NSF", 320),
            FacetEntry::new("NIH", 300),
            FacetEntry::new("ERC", 50),
            FacetEntry::new("Wellcome Trust", 40),
        ]
    );

    assert_eq!(
        groups[1].counts,
        vec![
            FacetEntry::new("Harvard Dataverse", 500),
            FacetEntry::new("Zenodo", 250),
            FacetEntry::new("NCBI GEO", 150),
            FacetEntry::new("Omics DI", 100),
        ]
    );

    // Ties keep backend order.
    assert_eq!(
        groups[2].counts,
        vec![
            FacetEntry::new("gene expression", 90),
            FacetEntry::new("temperature", 20),
            FacetEntry::new("pH", 20),
        ]
    );
    assert_eq!(groups[4].counts[0], FacetEntry::new("malaria", 33));
}

#[test]
fn facet_size_limits_funders_only() {
    let groups = clean_facets(&common::parsed_response(), Some(2)).unwrap();
    let funders: Vec<&str> = groups[0].counts.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(funders, vec!["NSF", "NIH"]);
    assert_eq!(groups[1].counts.len(), 4);
    assert_eq!(groups[2].counts.len(), 3);
}

#[test]
fn unknown_funder_entry_from_settings() {
    let settings = FacetSettings {
        include_unknown_funders: true,
        ..Default::default()
    };
    let groups = clean_facets_with(&common::parsed_response(), &settings).unwrap();
    // 1000 - 460 - 250
    assert_eq!(groups[0].counts[2], FacetEntry::new("unknown", 290));
    assert_eq!(groups[0].counts.len(), 5);
}

#[test]
fn output_serializes_to_display_model() {
    let groups = clean_facets(&common::parsed_response(), Some(1)).unwrap();
    let json = serde_json::to_value(&groups).unwrap();
    assert_eq!(json[0]["variable"], "funder");
    assert_eq!(json[0]["counts"][0]["key"], "NSF");
    assert_eq!(json[0]["counts"][0]["value"], 320);
    assert_eq!(json[1]["counts"][0]["key"], "Harvard Dataverse");
}

#[test]
fn missing_funding_field_is_fatal() {
    let mut body = common::backend_response();
    body.as_object_mut()
        .unwrap()
        .remove("funding.funder.name.keyword");
    let raw = RawFacetResponse::from_json(&body).unwrap();
    let err = clean_facets(&raw, None).unwrap_err();
    assert_eq!(
        err,
        FacetError::MissingField("funding.funder.name.keyword".to_string())
    );
    assert_eq!(err.status_code(), http::StatusCode::BAD_GATEWAY);
}
