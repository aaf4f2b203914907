use payment_options::application::aggregator::Aggregator;
use payment_options::application::registry::ProviderRegistry;
use payment_options::domain::payment_option::PaymentOption;
use payment_options::infrastructure::stub::StubProvider;
use std::collections::HashSet;
use std::time::{Duration, Instant};

mod common;
use common::{FailingProvider, PanickingProvider, WALLETS, fixed, profile, registry_with_silent};

#[tokio::test]
async fn test_completeness_under_success() {
    let registry = registry_with_silent(&WALLETS, &[]);
    let results = Aggregator::new(registry).collect().await;

    assert_eq!(results.len(), WALLETS.len());
    for id in WALLETS {
        assert_eq!(results.get(id), Some(&profile(id)), "wrong entry for {id}");
    }
    let keys: HashSet<&str> = results.ids().map(|id| id.as_str()).collect();
    assert_eq!(keys, WALLETS.into_iter().collect());
}

#[tokio::test]
async fn test_partial_failure_isolation() {
    let subsets: [&[&str]; 4] = [
        &["ovo"],
        &["dana", "linkaja"],
        &["gopay", "shopeepay", "oneklik", "bridd"],
        &WALLETS,
    ];

    for silent in subsets {
        let registry = registry_with_silent(&WALLETS, silent);
        let results = Aggregator::new(registry).collect().await;

        let expected: HashSet<&str> = WALLETS
            .into_iter()
            .filter(|id| !silent.contains(id))
            .collect();
        let actual: HashSet<&str> = results.ids().map(|id| id.as_str()).collect();
        assert_eq!(actual, expected, "silent subset {silent:?}");
    }
}

#[tokio::test]
async fn test_failing_and_panicking_lookups_leave_no_entry() {
    let mut registry = ProviderRegistry::new();
    registry
        .register("ovo", fixed("ovo", 20))
        .register("dana", FailingProvider)
        .register("gopay", PanickingProvider)
        .register("linkaja", fixed("linkaja", 5));

    let results = tokio::time::timeout(Duration::from_secs(2), Aggregator::new(registry).collect())
        .await
        .expect("aggregator must return after a lookup panics");

    assert_eq!(results.len(), 2);
    assert!(results.contains("ovo"));
    assert!(results.contains("linkaja"));
    assert!(!results.contains("dana"));
    assert!(!results.contains("gopay"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_cardinality_is_deterministic_across_iterations() {
    let aggregator = Aggregator::new(registry_with_silent(&WALLETS, &["bridd", "oneklik"]));

    for iteration in 0..1000 {
        let results = aggregator.collect().await;
        assert_eq!(results.len(), 5, "iteration {iteration}");
        assert!(!results.contains("bridd"));
        assert!(!results.contains("oneklik"));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_do_not_share_results() {
    let aggregator = std::sync::Arc::new(Aggregator::new(registry_with_silent(&WALLETS, &["ovo"])));

    let handles: Vec<_> = (0..50)
        .map(|_| {
            let aggregator = aggregator.clone();
            tokio::spawn(async move { aggregator.collect().await })
        })
        .collect();

    for handle in handles {
        let results = handle.await.unwrap();
        assert_eq!(results.len(), 6);
    }
}

#[tokio::test]
async fn test_latency_bounded_by_slowest_provider() {
    let mut registry = ProviderRegistry::new();
    registry
        .register("a", fixed("a", 150))
        .register("b", fixed("b", 180))
        .register("c", fixed("c", 210));

    let started = Instant::now();
    let results = Aggregator::new(registry).collect().await;
    let elapsed = started.elapsed();

    assert_eq!(results.len(), 3);
    assert!(elapsed >= Duration::from_millis(210));
    assert!(
        elapsed < Duration::from_millis(375),
        "took {elapsed:?}, closer to the sum than the max"
    );
}

#[tokio::test]
async fn test_empty_configuration_returns_immediately() {
    let started = Instant::now();
    let results = Aggregator::new(ProviderRegistry::new()).collect().await;

    assert!(results.is_empty());
    assert!(started.elapsed() < Duration::from_millis(50));
}

#[tokio::test]
async fn test_ovo_and_dana_end_to_end() {
    let ovo = PaymentOption::new(
        "628812345678",
        "Active",
        "10000",
        "https://sampleurl.com/ovo.jpg",
    );
    let dana = PaymentOption::new(
        "628823456789",
        "Active",
        "15000",
        "https://sampleurl.com/dana.jpg",
    );

    let mut registry = ProviderRegistry::new();
    registry
        .register("ovo", StubProvider::new(Duration::from_millis(200), ovo.clone()))
        .register("dana", StubProvider::new(Duration::from_millis(150), dana.clone()));

    let started = Instant::now();
    let results = Aggregator::new(registry).collect().await;
    let elapsed = started.elapsed();

    assert_eq!(results.len(), 2);
    assert_eq!(results.get("ovo"), Some(&ovo));
    assert_eq!(results.get("dana"), Some(&dana));
    assert!(elapsed >= Duration::from_millis(200));
    assert!(elapsed < Duration::from_millis(330), "took {elapsed:?}");
}
