use super::*;

#[test]
fn check_names_round_trip() {
    for id in CheckId::ALL {
        let parsed: CheckId = id.name().parse().expect("name should parse back");
        assert_eq!(parsed, id);
        assert_eq!(id.to_string(), id.name());
    }
}

#[test]
fn unknown_name_is_rejected() {
    let err = "no_such_check".parse::<CheckId>().unwrap_err();
    assert!(err.contains("no_such_check"));
}

#[test]
fn default_checks_follow_priority_order() {
    let ids: Vec<CheckId> = default_checks().iter().map(|c| c.id()).collect();
    assert_eq!(ids, CheckId::ALL.to_vec());
}

#[test]
fn suppression_edges_are_declared() {
    let checks = default_checks();
    let key_value = checks
        .iter()
        .find(|c| c.id() == CheckId::KeyValue)
        .expect("key_value registered");
    assert_eq!(key_value.suppressed_by(), &[CheckId::Descriptor]);

    let key_order = checks
        .iter()
        .find(|c| c.id() == CheckId::KeyOrder)
        .expect("key_order registered");
    assert_eq!(key_order.suppressed_by(), &[CheckId::KeyValue]);
}

#[test]
fn comment_lines_reach_only_their_checks() {
    for check in default_checks() {
        let expected = matches!(check.id(), CheckId::NonAscii | CheckId::CommentIndent);
        assert_eq!(check.applies_to(crate::lint::LineKind::Comment), expected);
    }
}
