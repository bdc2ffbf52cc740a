use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        MotionError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(MotionError::render("x").to_string().contains("render error:"));
    assert!(
        MotionError::export_io("x")
            .to_string()
            .contains("export io error:")
    );
    assert!(
        MotionError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert_eq!(MotionError::Cancelled.to_string(), "export cancelled");
}

#[test]
fn cancellation_is_distinct_from_failure() {
    assert!(MotionError::Cancelled.is_cancelled());
    assert!(!MotionError::export_io("disk full").is_cancelled());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = MotionError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
