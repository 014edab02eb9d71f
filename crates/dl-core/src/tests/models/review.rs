use crate::{CoreError, ReviewDraft};

#[test]
fn given_rating_in_range_when_new_draft_then_ok() {
    for rating in 1..=5 {
        assert!(ReviewDraft::new("Great work", rating).is_ok());
    }
}

#[test]
fn given_rating_out_of_range_when_new_draft_then_validation_error() {
    assert!(matches!(
        ReviewDraft::new("Great work", 0),
        Err(CoreError::Validation { .. })
    ));
    assert!(matches!(
        ReviewDraft::new("Great work", 6),
        Err(CoreError::Validation { .. })
    ));
}

#[test]
fn given_blank_text_when_new_draft_then_validation_error() {
    let err = ReviewDraft::new("   ", 4).unwrap_err();
    assert_eq!(err.display_message(), "Review text is required.");
}

#[test]
fn test_review_draft_serializes_camel_case() {
    let draft = ReviewDraft::new("Crisp engraving", 5).unwrap();
    let json = serde_json::to_value(&draft).unwrap();
    assert_eq!(json["reviewText"], "Crisp engraving");
    assert_eq!(json["rating"], 5);
}
