use crate::{PartOfDay, Time, TimeShape, Weekday, classify};

fn date() -> Time {
    Time::new().with_year(2020).with_month(1).with_day(1)
}

#[test]
fn day_of_month_is_not_a_date() {
    let t = Time::new().with_day(15);

    assert!(t.is_dom());
    assert!(!t.is_date());
    assert_eq!(t.shape(), TimeShape::DayOfMonth);
}

#[test]
fn full_date() {
    assert!(date().is_date());
    assert!(!date().is_date_time());
    assert!(date().has_date());
}

#[test]
fn single_component_shapes() {
    assert!(Time::new().with_year(2020).is_year());
    assert!(Time::new().with_month(7).is_month());
    assert!(Time::new().with_day_of_week(Weekday::Mon).is_dow());
    assert!(Time::new().with_part_of_day(PartOfDay::Noon).is_pod());
}

#[test]
fn day_of_year() {
    let t = Time::new().with_month(3).with_day(15);

    assert!(t.is_doy());
    assert!(!t.is_dom());
    assert!(!t.is_month());
}

#[test]
fn time_of_day_with_and_without_minute() {
    assert!(Time::new().with_hour(14).is_tod());
    assert!(Time::new().with_hour(14).with_minute(30).is_tod());
    assert!(!Time::new().with_minute(30).is_tod());
}

#[test]
fn date_time_with_and_without_minute() {
    assert!(date().with_hour(8).is_date_time());
    assert!(date().with_hour(8).with_minute(15).is_date_time());
    assert!(!date().with_hour(8).is_date());
}

#[test]
fn extra_component_breaks_exact_shape() {
    let t = Time::new()
        .with_year(2020)
        .with_part_of_day(PartOfDay::Evening);

    assert!(!t.is_year());
    assert!(!t.is_pod());
    assert_eq!(t.shape(), TimeShape::Other);
    assert!(t.has_pod());

    assert_eq!(date().with_day_of_week(Weekday::Wed).shape(), TimeShape::Other);
}

#[test]
fn empty_value_is_other() {
    assert_eq!(classify(&Time::new()), TimeShape::Other);
}

#[test]
fn existence_checks_ignore_extra_components() {
    let t = date()
        .with_hour(18)
        .with_day_of_week(Weekday::Sat)
        .with_part_of_day(PartOfDay::Evening);

    assert!(t.has_date());
    assert!(t.has_time());
    assert!(t.has_dow());
    assert!(t.has_pod());

    let bare = Time::new().with_month(2).with_day(3);
    assert!(!bare.has_date());
    assert!(!bare.has_time());
    assert!(!bare.has_dow());
    assert!(!bare.has_pod());
}

#[test]
fn predicates_agree_with_shape() {
    let samples = [
        Time::new(),
        Time::new().with_year(1999),
        Time::new().with_month(4),
        Time::new().with_day(9),
        Time::new().with_month(4).with_day(9),
        Time::new().with_day_of_week(Weekday::Sun),
        Time::new().with_part_of_day(PartOfDay::Afternoon),
        Time::new().with_hour(6),
        Time::new().with_hour(6).with_minute(45),
        date(),
        date().with_hour(6),
        date().with_hour(6).with_minute(45),
        date().with_minute(45),
        Time::new().with_year(1999).with_day(9),
    ];

    for t in samples {
        let shape = t.shape();
        assert_eq!(t.is_year(), shape == TimeShape::Year, "{t}");
        assert_eq!(t.is_month(), shape == TimeShape::Month, "{t}");
        assert_eq!(t.is_dom(), shape == TimeShape::DayOfMonth, "{t}");
        assert_eq!(t.is_doy(), shape == TimeShape::DayOfYear, "{t}");
        assert_eq!(t.is_dow(), shape == TimeShape::DayOfWeek, "{t}");
        assert_eq!(t.is_pod(), shape == TimeShape::PartOfDay, "{t}");
        assert_eq!(t.is_tod(), shape == TimeShape::TimeOfDay, "{t}");
        assert_eq!(t.is_date(), shape == TimeShape::Date, "{t}");
        assert_eq!(t.is_date_time(), shape == TimeShape::DateTime, "{t}");
    }
}
