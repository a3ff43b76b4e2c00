use crate::{
    AliasingLoader, ErrorCode, UnitRegistry,
    config::schema::ConfigModel,
    test::{
        seams::{embedded, loader_over, ws_mapping},
        support::{UnitBuilder, application_unit, scratch_dir, write_unit_file},
    },
};
use nsalias_container::{TypePath, Unit};
use std::sync::Arc;

#[test]
fn source_namespace_request_returns_target_identity() {
    let (loader, registry) = loader_over(embedded(&[(
        "javax.ws.rs.core.Application",
        application_unit(),
    )]));

    let unit = loader.load("jakarta.ws.rs.core.Application").expect("load");

    // the caller asked in jakarta.*, the handle reports javax.*
    assert_eq!(unit.name().as_str(), "javax.ws.rs.core.Application");
    assert!(registry.contains(&"javax.ws.rs.core.Application".into()));
    assert!(!registry.contains(&"jakarta.ws.rs.core.Application".into()));
    assert_eq!(registry.len(), 1);
}

#[test]
fn nested_source_references_are_rewritten() {
    let (loader, _registry) = loader_over(embedded(&[(
        "javax.ws.rs.core.Application",
        application_unit(),
    )]));

    let handle = loader.load("jakarta.ws.rs.core.Application").expect("load");
    let unit = Unit::parse(handle.bytes()).expect("parse registered bytes");

    assert_eq!(unit.self_type, TypePath::new("javax/ws/rs/core/Application"));
    assert_eq!(unit.interfaces, [TypePath::new("javax/ws/rs/core/Feature")]);
    assert_eq!(
        unit.fields[0].descriptor.to_string(),
        "Ljavax/ws/rs/core/Helper;"
    );
    assert_eq!(
        unit.methods[0].descriptor.to_string(),
        "(Ljavax/ws/rs/core/Helper;)Ljava/lang/Object;"
    );
    // attributes come through untouched
    assert_eq!(unit.attributes[0].data, b"Application.unit");
}

#[test]
fn target_namespace_request_bypasses_rewriting() {
    let bytes = application_unit();
    let (loader, _registry) = loader_over(embedded(&[(
        "javax.ws.rs.core.Application",
        bytes.clone(),
    )]));

    let unit = loader.load("javax.ws.rs.core.Application").expect("load");

    // delegated verbatim: identity is the requested one, bytes untouched,
    // internal jakarta references still present
    assert_eq!(unit.name().as_str(), "javax.ws.rs.core.Application");
    assert_eq!(unit.bytes(), bytes);
}

#[test]
fn segment_prefix_lookalike_is_out_of_scope() {
    let (loader, registry) = loader_over(embedded(&[]));

    let err = loader.load("jakarta.wsx.foo.Bar").expect_err("miss");

    // out of scope: delegated, and the empty parent reports NotFound
    assert_eq!(err.code, ErrorCode::NotFound);
    assert!(registry.is_empty());
}

#[test]
fn repeated_loads_share_one_handle() {
    let (loader, registry) = loader_over(embedded(&[(
        "javax.ws.rs.core.Application",
        application_unit(),
    )]));

    let first = loader.load("jakarta.ws.rs.core.Application").expect("load");
    let second = loader.load("jakarta.ws.rs.core.Application").expect("load");

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(registry.len(), 1);
}

#[test]
fn fetch_miss_is_fatal_and_leaves_registry_untouched() {
    let (loader, registry) = loader_over(embedded(&[]));

    let err = loader.load("jakarta.ws.rs.core.Application").expect_err("miss");

    assert_eq!(err.code, ErrorCode::Fetch);
    // both identities are named for diagnosability
    assert!(err.message.contains("jakarta.ws.rs.core.Application"));
    assert!(err.message.contains("javax.ws.rs.core.Application"));
    assert!(registry.is_empty());
}

#[test]
fn malformed_container_is_a_parse_error() {
    let (loader, registry) = loader_over(embedded(&[(
        "javax.ws.rs.core.Application",
        b"garbage".to_vec(),
    )]));

    let err = loader.load("jakarta.ws.rs.core.Application").expect_err("parse");

    assert_eq!(err.code, ErrorCode::Parse);
    assert!(registry.is_empty());
}

#[test]
fn empty_request_is_invalid_input() {
    let (loader, _registry) = loader_over(embedded(&[]));
    let err = loader.load("").expect_err("empty");
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn explicit_parent_serves_out_of_scope_requests() {
    let registry = Arc::new(UnitRegistry::new());
    let object_unit = UnitBuilder::new("java/lang/Object").to_bytes();

    let resolver = embedded(&[("javax.ws.rs.core.Application", application_unit())]);
    let parent = embedded(&[("java.lang.Object", object_unit.clone())]);

    let loader = AliasingLoader::with_parent(
        ws_mapping(),
        Arc::new(resolver),
        Arc::new(parent),
        registry.clone(),
    );

    let object = loader.load("java.lang.Object").expect("delegate");
    assert_eq!(object.name().as_str(), "java.lang.Object");
    assert_eq!(object.bytes(), object_unit);

    let app = loader.load("jakarta.ws.rs.core.Application").expect("map");
    assert_eq!(app.name().as_str(), "javax.ws.rs.core.Application");
    assert_eq!(registry.len(), 2);
}

#[test]
fn config_wires_a_directory_backed_loader() {
    let scratch = scratch_dir("config_loader");
    write_unit_file(
        scratch.path(),
        "javax.ws.rs.core.Application",
        &application_unit(),
    );

    let config: ConfigModel = toml::from_str(&format!(
        r#"
        [alias]
        source = "jakarta.ws"
        target = "javax.ws"

        [resolver]
        roots = [{root:?}]
        "#,
        root = scratch.path().display().to_string(),
    ))
    .expect("parse config");

    let registry = Arc::new(UnitRegistry::new());
    let loader = AliasingLoader::from_config(&config, registry).expect("wire loader");

    let unit = loader.load("jakarta.ws.rs.core.Application").expect("load");
    assert_eq!(unit.name().as_str(), "javax.ws.rs.core.Application");
}
