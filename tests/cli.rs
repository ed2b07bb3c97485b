// tests/cli.rs
//
// Command-line glue: table/option combinations and user-facing failure text.
//
#![cfg(feature = "cli")]

use herald_scrape::cli::{GroupingArg, Lookup, RealmArg, Table, describe_failure, resolve_query};
use herald_scrape::error::{CellFault, MalformedCellError, TransformMismatchError};
use herald_scrape::{Grouping, Metric, Query, QueryError, Realm, RecordKind, RequestFailure, TimePeriod, Transform};

fn lookup(table: Table, realm: Option<RealmArg>, rank: Option<GroupingArg>) -> Lookup {
    Lookup { names: vec!["Debug".to_string()], table, realm, rank }
}

fn resolve(table: Table, realm: Option<RealmArg>, rank: Option<GroupingArg>) -> Result<Query, String> {
    resolve_query(&lookup(table, realm, rank))
}

#[test]
fn metric_tables_are_amounts_or_ranks() {
    let tables = [
        (Table::Rps, Metric::RealmPoints),
        (Table::Deathblows, Metric::Deathblows),
        (Table::Deaths, Metric::Deaths),
        (Table::Kills, Metric::Kills),
        (Table::Solos, Metric::SoloKills),
    ];
    for (table, metric) in tables {
        assert_eq!(resolve(table, None, None).unwrap(), Query::transformed(Transform::Amount(metric)));
        assert_eq!(
            resolve(table, None, Some(GroupingArg::Server)).unwrap(),
            Query::transformed(Transform::Rank(metric, Grouping::Server))
        );
        assert_eq!(
            resolve(table, None, Some(GroupingArg::Realm)).unwrap(),
            Query::transformed(Transform::Rank(metric, Grouping::Realm))
        );
    }
}

#[test]
fn realm_kills_raw_or_per_realm() {
    assert_eq!(resolve(Table::RealmKills, None, None).unwrap(), Query::raw(RecordKind::RealmKills));
    assert_eq!(
        resolve(Table::RealmKills, Some(RealmArg::Midgard), None).unwrap(),
        Query::transformed(Transform::RealmKills(Realm::Midgard))
    );
    assert_eq!(
        resolve(Table::RealmKills, Some(RealmArg::Albion), None).unwrap().kind(),
        RecordKind::RealmKills
    );
}

#[test]
fn rank_and_irs_tables() {
    let rank = resolve(Table::Rank, None, None).unwrap();
    assert_eq!(rank, Query::raw(RecordKind::Ranks));
    assert_eq!(rank.transform(), None);

    let irs = resolve(Table::Irs, None, None).unwrap();
    assert_eq!(irs.transform(), Some(Transform::RealmPointsPerDeath));
    assert_eq!(irs.kind(), RecordKind::Amounts);
}

#[test]
fn conflicting_options_are_rejected() {
    assert!(resolve(Table::RealmKills, None, Some(GroupingArg::Server)).is_err());
    assert!(resolve(Table::RealmKills, Some(RealmArg::Hibernia), Some(GroupingArg::Realm)).is_err());
    assert!(resolve(Table::Rps, Some(RealmArg::Albion), None).is_err());
    assert!(resolve(Table::Kills, Some(RealmArg::Albion), Some(GroupingArg::Server)).is_err());
    assert!(resolve(Table::Irs, None, Some(GroupingArg::Server)).is_err());
    assert!(resolve(Table::Irs, Some(RealmArg::Midgard), None).is_err());
    assert!(resolve(Table::Rank, None, Some(GroupingArg::Realm)).is_err());
    assert!(resolve(Table::Rank, Some(RealmArg::Midgard), None).is_err());
}

#[test]
fn failures_map_to_user_messages() {
    let not_found = QueryError::Request(RequestFailure::NotFound);
    assert_eq!(describe_failure("Nobody", &not_found), "No such subject on the herald: Nobody.");

    let upstream = QueryError::Request(RequestFailure::UpstreamError(503));
    assert_eq!(describe_failure("Debug", &upstream), "There is an issue with the herald (503).");

    let transport = reqwest::blocking::Client::new().get("http://[::1").build().unwrap_err();
    let msg = describe_failure("Debug", &QueryError::from(transport));
    assert!(msg.starts_with("Could not reach the herald: "), "{msg}");

    let invalid = QueryError::InvalidEndpoint("https://example.com/c/Debug/".to_string());
    assert_eq!(describe_failure("Debug", &invalid), "Not a valid herald subject: Debug.");

    let malformed = QueryError::from(MalformedCellError::new("td", CellFault::Missing));
    let msg = describe_failure("Debug", &malformed);
    assert!(msg.starts_with("Could not read the herald page for Debug ("), "{msg}");
    assert!(msg.contains("element not found"), "{msg}");

    let mismatch = QueryError::from(TransformMismatchError {
        transform: "Albion Kills".to_string(),
        period: TimePeriod::AllTime,
        key: "Alb Kills".to_string(),
    });
    let msg = describe_failure("Valhalla", &mismatch);
    assert!(msg.starts_with("Could not read the herald page for Valhalla ("), "{msg}");
}
