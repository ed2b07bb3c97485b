// tests/assemble.rs
//
// Record assembly per kind and subject.
//
mod common;

use herald_scrape::core::html;
use herald_scrape::error::CellFault;
use herald_scrape::record::StatValue;
use herald_scrape::specs::{HERALD_LAYOUT, assemble};
use herald_scrape::{Metric, RecordKind, SubjectKind, TimePeriod};

use common::*;

const URL: &str = "https://herald.test/c/Debug/";

#[test]
fn amounts_have_one_integer_per_metric_per_period() {
    let doc = html::parse(CHARACTER);
    let record = assemble(&doc, &HERALD_LAYOUT, RecordKind::Amounts, SubjectKind::Character, URL).unwrap();

    assert_eq!(record.kind, RecordKind::Amounts);
    for (period, stats) in record.periods.iter() {
        assert_eq!(stats.len(), Metric::AMOUNTS.len(), "{period}");
        for metric in Metric::AMOUNTS {
            assert!(
                matches!(stats.get(&metric), Some(StatValue::Amount(_))),
                "{period} / {metric}"
            );
        }
        assert!(stats.get(&Metric::RealmKills).is_none());
    }

    assert_eq!(record.amount(TimePeriod::AllTime, Metric::RealmPoints), Some(1200));
    assert_eq!(record.amount(TimePeriod::ThisWeek, Metric::Deathblows), Some(10));
    assert_eq!(record.amount(TimePeriod::LastWeek, Metric::Deaths), Some(8));
    assert_eq!(record.amount(TimePeriod::Last48Hours, Metric::Kills), Some(6));
    assert_eq!(record.amount(TimePeriod::Last48Hours, Metric::SoloKills), Some(0));
}

#[test]
fn metadata_is_stamped() {
    let doc = html::parse(CHARACTER);
    let record = assemble(&doc, &HERALD_LAYOUT, RecordKind::Amounts, SubjectKind::Character, URL).unwrap();
    assert_eq!(record.meta.url, URL);
    assert_eq!(record.meta.description, "Debug - Knights of Eire - Hibernia");
    assert_eq!(record.meta.last_updated, "Last updated: Sat, 04 May 2024 12:00 (UTC)");
}

#[test]
fn character_realm_kills_have_three_realms() {
    let doc = html::parse(CHARACTER);
    let record = assemble(&doc, &HERALD_LAYOUT, RecordKind::RealmKills, SubjectKind::Character, URL).unwrap();

    for period in TimePeriod::ALL {
        let kills = record.breakdown(period, Metric::RealmKills).unwrap();
        let labels: Vec<_> = kills.keys().map(String::as_str).collect();
        assert_eq!(labels, ["Alb Kills", "Hib Kills", "Mid Kills"], "{period}");
    }
    let all_time = record.breakdown(TimePeriod::AllTime, Metric::RealmKills).unwrap();
    assert_eq!(all_time["Alb Kills"], 50);
    assert_eq!(all_time["Mid Kills"], 38);
    assert_eq!(all_time["Hib Kills"], 0);
}

#[test]
fn guild_realm_kills_have_two_realms_and_do_not_fail() {
    let doc = html::parse(GUILD);
    let record = assemble(
        &doc,
        &HERALD_LAYOUT,
        RecordKind::RealmKills,
        SubjectKind::Guild,
        "https://herald.test/g/Valhalla/",
    )
    .unwrap();

    for period in TimePeriod::ALL {
        let kills = record.breakdown(period, Metric::RealmKills).unwrap();
        assert_eq!(kills.len(), 2, "{period}");
        assert!(!kills.contains_key("Mid Kills"));
    }
    let week = record.breakdown(TimePeriod::ThisWeek, Metric::RealmKills).unwrap();
    assert_eq!(week["Alb Kills"], 230);
    assert_eq!(week["Hib Kills"], 180);
    assert_eq!(
        record.breakdown(TimePeriod::AllTime, Metric::RealmKills).unwrap()["Alb Kills"],
        5100
    );
}

#[test]
fn guild_page_read_as_character_is_malformed() {
    let doc = html::parse(GUILD);
    let err = assemble(&doc, &HERALD_LAYOUT, RecordKind::RealmKills, SubjectKind::Character, URL).unwrap_err();
    assert!(err.address.contains("th:nth-of-type(4)"), "{}", err.address);
}

#[test]
fn character_ranks_have_three_dimensions() {
    let doc = html::parse(CHARACTER);
    let record = assemble(&doc, &HERALD_LAYOUT, RecordKind::Ranks, SubjectKind::Character, URL).unwrap();

    for (period, stats) in record.periods.iter() {
        assert_eq!(stats.len(), 5, "{period}");
        for metric in Metric::AMOUNTS {
            let ranks = record.breakdown(period, metric).unwrap();
            let labels: Vec<_> = ranks.keys().map(String::as_str).collect();
            assert_eq!(labels, ["# Class", "# Realm", "# Server"], "{period} / {metric}");
        }
    }

    let rps = record.breakdown(TimePeriod::AllTime, Metric::RealmPoints).unwrap();
    assert_eq!(rps["# Server"], 112);
    // each period keeps its own row
    let rps_48 = record.breakdown(TimePeriod::Last48Hours, Metric::RealmPoints).unwrap();
    assert_eq!(rps_48["# Server"], 9);
    assert_eq!(rps_48["# Class"], 1);
}

#[test]
fn guild_ranks_have_two_dimensions() {
    let doc = html::parse(GUILD);
    let record = assemble(
        &doc,
        &HERALD_LAYOUT,
        RecordKind::Ranks,
        SubjectKind::Guild,
        "https://herald.test/g/Valhalla/",
    )
    .unwrap();

    for period in TimePeriod::ALL {
        for metric in Metric::AMOUNTS {
            let ranks = record.breakdown(period, metric).unwrap();
            let labels: Vec<_> = ranks.keys().map(String::as_str).collect();
            assert_eq!(labels, ["# Realm", "# Server"], "{period} / {metric}");
        }
    }
    let kills = record.breakdown(TimePeriod::LastWeek, Metric::Kills).unwrap();
    assert_eq!(kills["# Realm"], 2);
    assert_eq!(kills["# Server"], 5);
}

#[test]
fn one_bad_cell_fails_the_whole_record() {
    let doc = html::parse(MALFORMED);
    let err = assemble(&doc, &HERALD_LAYOUT, RecordKind::Amounts, SubjectKind::Character, URL).unwrap_err();
    assert!(err.address.contains("tr:nth-of-type(1) > td:nth-of-type(2)"), "{}", err.address);

    // the realm-kill table on the same page is intact
    assert!(assemble(&doc, &HERALD_LAYOUT, RecordKind::RealmKills, SubjectKind::Character, URL).is_ok());
}

#[test]
fn repeated_realm_header_is_malformed() {
    let page = CHARACTER.replacen("<th>Mid Kills</th>", "<th>Alb Kills</th>", 1);
    let doc = html::parse(&page);
    let err = assemble(&doc, &HERALD_LAYOUT, RecordKind::RealmKills, SubjectKind::Character, URL).unwrap_err();

    assert_eq!(err.fault, CellFault::DuplicateHeader("Alb Kills".to_string()));
    assert!(err.address.ends_with("table:nth-of-type(3) > thead > tr > th:nth-of-type(3)"), "{}", err.address);
}

#[test]
fn repeated_rank_header_is_malformed() {
    let page = CHARACTER.replacen("<th># Realm</th>", "<th># Class</th>", 1);
    let doc = html::parse(&page);
    let err = assemble(&doc, &HERALD_LAYOUT, RecordKind::Ranks, SubjectKind::Character, URL).unwrap_err();

    assert_eq!(err.fault, CellFault::DuplicateHeader("# Class".to_string()));
    assert!(err.address.ends_with("table:nth-of-type(1) > thead > tr > th:nth-of-type(4)"), "{}", err.address);

    // amounts never read headers
    assert!(assemble(&doc, &HERALD_LAYOUT, RecordKind::Amounts, SubjectKind::Character, URL).is_ok());
}

#[test]
fn records_serialize_to_herald_keys() {
    let doc = html::parse(CHARACTER);
    let record = assemble(&doc, &HERALD_LAYOUT, RecordKind::RealmKills, SubjectKind::Character, URL).unwrap();
    let json = serde_json::to_value(&record).unwrap();

    for key in ["All Time", "This Week", "Last Week", "Last 48 Hours", "Last Updated", "Description", "URL"] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert_eq!(json["All Time"]["Realm Kills"]["Mid Kills"], 38);
    assert_eq!(json["URL"], URL);
    assert!(json.get("kind").is_none());
}
