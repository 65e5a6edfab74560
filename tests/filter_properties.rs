use ip_country_filter as ipcf;
use proptest::prelude::*;
use serde_json::{json, Map, Value};
use std::collections::BTreeSet;

const CODES: &[&str] = &["ES", "es", "Es", "US", "us", "FR", "PT", ""];
const TARGETS: &[&str] = &["ES", "US", "FR", "DE"];

fn record() -> impl Strategy<Value = Value> {
    (
        prop::option::of(prop::sample::select(CODES)),
        prop::option::of(prop::option::of(prop::sample::select(CODES))),
    )
        .prop_map(|(geo, whois)| {
            let mut m = Map::new();
            if let Some(g) = geo {
                m.insert("ip_geo".into(), json!(g));
            }
            match whois {
                Some(Some(c)) => {
                    m.insert("ip_whois".into(), json!({"country": c, "net": "AS1"}));
                }
                Some(None) => {
                    m.insert("ip_whois".into(), json!({"net": "AS1"}));
                }
                None => {}
            }
            Value::Object(m)
        })
}

// Tag each record with its position so set comparisons see identities.
fn feed() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(record(), 0..40).prop_map(|rs| {
        rs.into_iter()
            .enumerate()
            .map(|(i, mut r)| {
                r["id"] = json!(i);
                r
            })
            .collect()
    })
}

fn target() -> impl Strategy<Value = &'static str> {
    prop::sample::select(TARGETS)
}

fn ids(records: &[Value]) -> Vec<u64> {
    records.iter().map(|r| r["id"].as_u64().unwrap()).collect()
}

proptest! {
    #[test]
    fn admin_is_the_ordered_subsequence_with_that_whois_country(rs in feed(), c in target()) {
        let expected: Vec<u64> = rs
            .iter()
            .filter(|r| {
                r.get("ip_whois")
                    .and_then(|w| w.get("country"))
                    .and_then(Value::as_str)
                    .map(|s| s.eq_ignore_ascii_case(c))
                    .unwrap_or(false)
            })
            .map(|r| r["id"].as_u64().unwrap())
            .collect();
        prop_assert_eq!(ids(&ipcf::filter_admin(&rs, c)), expected);
    }

    #[test]
    fn combined_is_the_union_of_geo_and_admin(rs in feed(), c in target()) {
        let combined: BTreeSet<u64> = ids(&ipcf::filter_combined(&rs, c)).into_iter().collect();
        let mut union: BTreeSet<u64> = ids(&ipcf::filter_geo(&rs, c)).into_iter().collect();
        union.extend(ids(&ipcf::filter_admin(&rs, c)));
        prop_assert_eq!(combined, union);
    }

    #[test]
    fn combined_preserves_input_order(rs in feed(), c in target()) {
        let out = ids(&ipcf::filter_combined(&rs, c));
        prop_assert!(out.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn filtering_twice_changes_nothing(rs in feed(), c in target()) {
        for mode in ipcf::FilterMode::ALL {
            let once = ipcf::filter_records(&rs, c, mode);
            let twice = ipcf::filter_records(&once, c, mode);
            prop_assert_eq!(once, twice);
        }
    }

    #[test]
    fn records_without_whois_country_never_match_admin(rs in feed(), c in target()) {
        let out = ipcf::filter_admin(&rs, c);
        prop_assert!(out.iter().all(|r| r.pointer("/ip_whois/country").is_some()));
    }

    #[test]
    fn basic_agrees_with_admin(rs in feed(), c in target()) {
        prop_assert_eq!(ipcf::filter_basic(&rs, c), ipcf::filter_admin(&rs, c));
    }
}

#[test]
fn two_spanish_records_out_of_four() {
    let rs = vec![
        json!({"ip_whois": {"country": "ES"}}),
        json!({"ip_whois": {"country": "US"}}),
        json!({"ip_whois": {"country": "ES"}}),
        json!({"ip_whois": {"country": "FR"}}),
    ];
    let out = ipcf::filter_basic(&rs, "ES");
    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|r| r["ip_whois"]["country"] == "ES"));
}

#[test]
fn no_match_gives_empty_list() {
    let rs = vec![
        json!({"ip_whois": {"country": "US"}}),
        json!({"ip_whois": {"country": "FR"}}),
    ];
    assert_eq!(ipcf::filter_basic(&rs, "ES"), Vec::<Value>::new());
}

#[test]
fn empty_feed_gives_empty_list() {
    assert!(ipcf::filter_basic(&[], "ES").is_empty());
}
