use crate::{Artifact, Error, ProductionId, Span, Terminal, TextSize, covering};

fn term(id: u16, start: u32, end: u32, text: &str) -> Terminal {
    Terminal::new(
        ProductionId::new(id),
        Span::new(start.into(), end.into()),
        text,
    )
}

#[test]
fn update_span_single_child() {
    let child = term(1, 4, 9, "march");
    let parent = term(7, 0, 0, "month").update_span(&[&child]).unwrap();

    assert_eq!(parent.span(), Span::new(4.into(), 9.into()));
}

#[test]
fn update_span_takes_first_start_and_last_end() {
    let day = term(1, 0, 2, "15");
    let month = term(2, 3, 8, "march");
    let year = term(3, 9, 13, "2021");

    let parent = term(9, 40, 41, "x")
        .update_span(&[&day, &month, &year])
        .unwrap();

    assert_eq!(parent.span(), Span::new(0.into(), 13.into()));
    assert_eq!(parent.len(), TextSize::from(13));
}

#[test]
fn update_span_keeps_value() {
    let child = term(1, 2, 4, "ab");
    let parent = term(5, 0, 0, "abc").update_span(&[&child]).unwrap();

    assert_eq!(parent.production(), ProductionId::new(5));
    assert_eq!(parent.text(), "abc");
}

#[test]
fn covering_rejects_empty() {
    assert_eq!(covering(&[]), Err(Error::EmptyChildren));
}

#[test]
fn covering_rejects_reversed_children() {
    let late = term(1, 10, 12, "pm");
    let early = term(2, 0, 2, "10");

    assert_eq!(
        covering(&[&late, &early]),
        Err(Error::UnorderedChildren {
            start: 10.into(),
            end: 2.into(),
        })
    );
}

#[test]
fn empty_span_artifact() {
    let t = term(1, 3, 3, "");
    assert!(t.is_empty());
    assert_eq!(t.len(), TextSize::from(0));
}

#[test]
fn annotated_rendering() {
    let t = term(4, 3, 7, "noon");

    insta::assert_snapshot!(t.annotated(), @"Terminal[3-7]{4:noon}");
    insta::assert_snapshot!(t.unanchored(), @"Terminal[]{4:noon}");
}
