use crate::{
    AliasingLoader, UnitRegistry,
    test::{
        seams::{embedded, ws_mapping},
        support::{CountingResolver, application_unit},
    },
};
use std::{sync::Arc, thread};

const THREADS: usize = 8;

#[test]
fn concurrent_loads_of_one_identity_fetch_and_define_once() {
    let resolver = CountingResolver::new(embedded(&[(
        "javax.ws.rs.core.Application",
        application_unit(),
    )]));
    let resolver = Arc::new(resolver);
    let registry = Arc::new(UnitRegistry::new());
    let loader = Arc::new(AliasingLoader::new(
        ws_mapping(),
        resolver.clone(),
        registry.clone(),
    ));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let loader = loader.clone();
            thread::spawn(move || loader.load("jakarta.ws.rs.core.Application"))
        })
        .collect();

    let mut units = Vec::new();
    for handle in handles {
        units.push(handle.join().expect("thread").expect("load"));
    }

    // every caller observes the single registered unit
    for unit in &units {
        assert!(Arc::ptr_eq(unit, &units[0]));
        assert_eq!(unit.name().as_str(), "javax.ws.rs.core.Application");
    }
    assert_eq!(registry.len(), 1);

    // requests serialized on the in-progress marker: one fetch, one rewrite
    assert_eq!(resolver.hits(), 1);
}

#[test]
fn concurrent_loads_of_distinct_identities_proceed_independently() {
    let resolver = CountingResolver::new(embedded(&[
        (
            "javax.ws.rs.core.Application",
            application_unit(),
        ),
        (
            "javax.ws.rs.core.Response",
            crate::test::support::UnitBuilder::new("javax/ws/rs/core/Response").to_bytes(),
        ),
    ]));
    let resolver = Arc::new(resolver);
    let registry = Arc::new(UnitRegistry::new());
    let loader = Arc::new(AliasingLoader::new(
        ws_mapping(),
        resolver.clone(),
        registry.clone(),
    ));

    let names = ["jakarta.ws.rs.core.Application", "jakarta.ws.rs.core.Response"];
    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let loader = loader.clone();
            let name = names[i % names.len()];
            thread::spawn(move || loader.load(name))
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread").expect("load");
    }

    assert_eq!(registry.len(), 2);
    assert_eq!(resolver.hits(), 2);
}

#[test]
fn racing_failures_leave_no_state_behind() {
    let resolver = Arc::new(CountingResolver::new(embedded(&[])));
    let registry = Arc::new(UnitRegistry::new());
    let loader = Arc::new(AliasingLoader::new(
        ws_mapping(),
        resolver,
        registry.clone(),
    ));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let loader = loader.clone();
            thread::spawn(move || loader.load("jakarta.ws.rs.core.Missing"))
        })
        .collect();

    for handle in handles {
        assert!(handle.join().expect("thread").is_err());
    }

    assert!(registry.is_empty());
}
