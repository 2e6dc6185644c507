use tagmatch_core::similarity::MatrixCache;
use tagmatch_core::text::TokenizerOptions;
use tagmatch_core::{recommend, Catalog, SimilarityEngine};

const CATALOG: &str = "\
Name,ReviewCount,Brand,ImageURL,Rating,Tags
Matte Lipstick,120,Glow,https://img/1.png,4.4,matte red lipstick long lasting
Lip Gloss,35,Glow,https://img/2.png,4.1,glossy red lip gloss shine
Nail Polish,80,Shine,https://img/3.png,3.9,red nail polish quick dry
Hair Shampoo,200,Silk,https://img/4.png,4.7,moisturizing hair shampoo argan
Hair Conditioner,150,Silk,https://img/5.png,4.6,moisturizing hair conditioner argan
";

fn catalog() -> Catalog {
    Catalog::from_csv_reader(CATALOG.as_bytes()).unwrap()
}

#[test]
fn test_hair_products_recommend_each_other() {
    let results = recommend(&catalog(), "Hair Shampoo", 1);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Hair Conditioner");
    assert_eq!(results[0].brand, "Silk");
    assert_eq!(results[0].rating, Some(4.6));
}

#[test]
fn test_red_products_outrank_unrelated() {
    let results = recommend(&catalog(), "Matte Lipstick", 4);
    let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names.len(), 4);
    assert!(!names.contains(&"Matte Lipstick"));

    let unrelated = names.iter().position(|n| n.starts_with("Hair")).unwrap();
    assert!(names[..unrelated].contains(&"Lip Gloss"));
    assert!(names[..unrelated].contains(&"Nail Polish"));
}

#[test]
fn test_unknown_item_is_empty_not_error() {
    assert!(recommend(&catalog(), "Sunscreen", 3).is_empty());
}

#[test]
fn test_concurrent_requests_share_catalog() {
    let catalog = &catalog();
    let cache = &MatrixCache::new();
    let expected = recommend(catalog, "Lip Gloss", 3);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(move || {
                    SimilarityEngine::with_cache(catalog, TokenizerOptions::default(), cache)
                        .recommend("Lip Gloss", 3)
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });

    let metrics = cache.metrics();
    assert_eq!(metrics.cache_hits() + metrics.cache_misses(), 4);
    assert!(metrics.cache_misses() >= 1);
}
