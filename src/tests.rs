//! End-to-end checks: JSON payloads in, reply text out.

use crate::{CalendarPayload, Options, RegulationPayload, aggregate_and_rank, reply, summarize_suspensions};

fn regulation_json(rules: &[&str]) -> String {
    let features: Vec<String> = rules
        .iter()
        .map(|rule| format!(r#"{{"type":"Feature","properties":{{"rule_simplified":{rule:?}}}}}"#))
        .collect();
    format!(r#"{{"type":"FeatureCollection","features":[{}]}}"#, features.join(","))
}

#[test]
fn ranked_windows_from_payload() {
    let json = regulation_json(&[
        "Free Parking From Nov 12 Mon 9:00am Until Nov 12 Mon 10:30am",
        "Free Parking From Nov 14 Wed 11:30am. Until Nov 14 Wed 1:00pm",
        "Free Parking From Nov 14 Wed 11:30am Until Nov 14 Wed 1:00pm",
        "Free Parking From Nov 16 Fri 7:30am Until Nov 16 Fri 8:00am",
        "Free Parking From Nov 16 Fri 7:30am Until Nov 16 Fri 8:00am",
        "Free Parking From Nov 16 Fri 7:30am Until Nov 16 Fri 8:00am",
        "No Standing Anytime",
        "Free Parking From Nov 15 Thu 9:00am Until Nov 15 Thu 10:30am",
        "Free Parking From Nov 12 Mon 9:00am Until Nov 12 Mon 10:30am",
        "Free Parking From Nov 13 Tue 2:00pm Until Nov 13 Tue 3:30pm",
        "Free Parking From Nov 13 Tue 2pm Until Nov 13 Tue 3:30pm",
    ]);
    let features = RegulationPayload::from_json(&json).unwrap().into_features();

    // (rendered label, count) in rank order
    let cases: Vec<(usize, Vec<(&str, usize)>)> = vec![
        (0, vec![]),
        (1, vec![("Monday at 09:00am", 2)]),
        (2, vec![("Monday at 09:00am", 2), ("Wednesday at 11:30am", 2)]),
        (3, vec![("Monday at 09:00am", 2), ("Wednesday at 11:30am", 2), ("Thursday at 09:00am", 1)]),
        (
            10,
            vec![
                ("Monday at 09:00am", 2),
                ("Wednesday at 11:30am", 2),
                ("Thursday at 09:00am", 1),
                ("Tuesday at 02:00pm", 1),
            ],
        ),
    ];

    for (top_n, expected) in cases {
        let (windows, _) = aggregate_and_rank(&features, "here", &Options { top_n, ..Options::default() });
        let got: Vec<(String, usize)> = windows.iter().map(|w| (w.label.to_string(), w.count)).collect();
        let expected: Vec<(String, usize)> = expected.into_iter().map(|(l, c)| (l.to_string(), c)).collect();
        assert_eq!(got, expected, "top_n: {top_n}");
    }
}

#[test]
fn full_reply_from_payloads() {
    let regulations = regulation_json(&[
        "Free Parking From Nov 13 Tue 11:30am Until Nov 13 Tue 1:00pm",
        "Free Parking From Nov 13 Tue 11:30am Until Nov 13 Tue 1:00pm",
        "Free Parking From Nov 12 Mon 9:00am Until Nov 12 Mon 10:30am",
    ]);
    let calendar = r#"{"days": [
        {"today_id": "20231123", "items": [
            {"type": "Alternate Side Parking", "status": "SUSPENDED",
             "details": "Alternate side parking and meters are suspended for Thanksgiving Day.",
             "exceptionName": "Thanksgiving Day 2023"}
        ]},
        {"today_id": "20231124", "items": [
            {"type": "Alternate Side Parking", "status": "IN EFFECT", "details": "Alternate side parking is in effect."}
        ]},
        {"today_id": "20231208", "items": [
            {"type": "Alternate Side Parking", "status": "SUSPENDED",
             "details": "Alternate side parking is suspended.", "exceptionName": "Immaculate Conception 2023"}
        ]}
    ]}"#;

    let features = RegulationPayload::from_json(&regulations).unwrap().into_features();
    let days = CalendarPayload::from_json(calendar).unwrap().into_days();
    let text = reply(&features, &days, "31-10 Steinway Street, Astoria", &Options::default());

    let expected = [
        "The best time to park near 31-10 Steinway Street, Astoria is Tuesday at 11:30am, with alternate-side \
         parking restrictions ending on 2 nearby streets.",
        "The 2nd best time to park is Monday at 09:00am, with alternate-side parking restrictions ending on 1 \
         nearby streets.",
        "By the way, alternate side parking is suspended on Thursday, 11/23 and Friday, 12/08. Meters are in \
         effect except for Thanksgiving Day.",
    ]
    .join("\n\n");

    assert_eq!(text, expected);
}

#[test]
fn empty_payloads_give_documented_fallbacks() {
    let features = RegulationPayload::from_json(r#"{"features": []}"#).unwrap().into_features();
    let days = CalendarPayload::from_json(r#"{"days": []}"#).unwrap().into_days();

    assert_eq!(reply(&features, &days, "here", &Options::default()), "No free parking times found.");
    assert_eq!(summarize_suspensions(&days), "");
}
