//! End-to-end composition the way a grammar drives the algebra: match
//! terminals, lift them into partial values, merge, and resolve bounds.

use regex_automata::meta::Regex;

use crate::{Artifact, Interval, ProductionId, Span, Terminal, Time};

const PATTERN: &str = concat!(
    r"(?P<R1>\d{1,2}\.\d{1,2}\.)",
    r"|(?P<R4>\d{1,2}:\d{2})",
    r"|(?P<R2>\d{4})",
    r"|(?P<R3>morning|afternoon|evening|night)",
    r"|(?P<R5>until)",
);

fn terminals(text: &str) -> Vec<Terminal> {
    let re = Regex::new(PATTERN).unwrap();
    re.captures_iter(text)
        .map(|caps| {
            (1..=5)
                .map(ProductionId::new)
                .find_map(|id| Terminal::from_captures(id, text, &caps).ok())
                .unwrap()
        })
        .collect()
}

fn lift(t: &Terminal) -> Time {
    let time = match t.production().get() {
        1 => {
            let mut parts = t.text().split('.');
            let day = parts.next().unwrap().parse().unwrap();
            let month = parts.next().unwrap().parse().unwrap();
            Time::new().with_day(day).with_month(month)
        }
        2 => Time::new().with_year(t.text().parse().unwrap()),
        3 => Time::new().with_part_of_day(t.text().parse().unwrap()),
        4 => {
            let (hour, minute) = t.text().split_once(':').unwrap();
            Time::new()
                .with_hour(hour.parse().unwrap())
                .with_minute(minute.parse().unwrap())
        }
        other => panic!("production {other} does not denote a time"),
    };
    time.update_span(&[t]).unwrap()
}

#[test]
fn date_and_part_of_day() {
    let text = "on 15.03.2021 evening";
    let terms = terminals(text);
    assert_eq!(terms.len(), 3);

    let day_of_year = lift(&terms[0]);
    let year = lift(&terms[1]);
    assert!(day_of_year.is_doy());
    assert!(year.is_year());

    let date = Time::intersect(&day_of_year, &year)
        .unwrap()
        .update_span(&[&terms[0], &terms[1]])
        .unwrap();
    assert!(date.is_date());
    assert_eq!(date.span(), Span::new(3.into(), 13.into()));

    let pod = lift(&terms[2]);
    assert!(pod.is_pod());

    let evening = Time::intersect(&date, &pod).unwrap();
    assert!(evening.has_date() && evening.has_pod());
    insta::assert_snapshot!(evening.annotated(), @"Time[3-21]{2021-03-15 X:X (X/evening)}");

    let start = evening.start().to_datetime().unwrap();
    let end = evening.end().to_datetime().unwrap();
    assert_eq!(start.to_string(), "2021-03-15 17:00:00");
    assert_eq!(end.to_string(), "2021-03-15 19:59:00");
}

#[test]
fn open_ended_interval() {
    let text = "until 18:30";
    let terms = terminals(text);
    assert_eq!(terms[0].production(), ProductionId::new(5));

    let to = lift(&terms[1]);
    assert!(to.is_tod());

    let interval = Interval::until(to)
        .update_span(&[&terms[0], &terms[1]])
        .unwrap();

    insta::assert_snapshot!(interval.annotated(), @"Interval[0-11]{.. - X-X-X 18:30 (X/X)}");
    assert_eq!(interval.start(), Time::new().with_hour(0).with_minute(0));
    assert_eq!(interval.end(), Time::new().with_hour(18).with_minute(30));
}

#[test]
fn conflicting_fragments_do_not_combine() {
    let terms = terminals("15.03. 16.03.");

    let first = lift(&terms[0]);
    let second = lift(&terms[1]);

    assert_eq!(Time::intersect(&first, &second), None);
}
