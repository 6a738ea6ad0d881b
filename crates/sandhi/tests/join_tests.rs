use anvaya_sandhi::join;

// E1: rAma + eti must combine to rAmEti (vṛddhi).
#[test]
fn e1_rama_eti() {
    let results = join("rAma", "eti").unwrap();
    assert!(
        results.contains(&"rAmEti".to_string()),
        "expected rAmEti among {results:?}"
    );
}

// E2: gaRa + upadeSaH must combine to gaRopadeSaH (guṇa).
#[test]
fn e2_gana_upadeshah() {
    let results = join("gaRa", "upadeSaH").unwrap();
    assert!(
        results.contains(&"gaRopadeSaH".to_string()),
        "expected gaRopadeSaH among {results:?}"
    );
}

#[test]
fn join_results_are_deduplicated() {
    let results = join("rAma", "eti").unwrap();
    let mut sorted = results.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(results, sorted);
}

#[test]
fn avagraha_purvarupa() {
    let results = join("rAmo", "api").unwrap();
    assert!(
        results.contains(&"rAmo'pi".to_string()),
        "expected rAmo'pi among {results:?}"
    );
}
