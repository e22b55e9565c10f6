use super::*;

#[test]
fn display_and_parse_agree_for_every_order() {
    for order in TransformOrder::ALL {
        let text = order.to_string();
        assert_eq!(text.parse::<TransformOrder>().unwrap(), order);
    }
    assert_eq!(TransformOrder::default().to_string(), "move-rotate-zoom");
}

#[test]
fn parse_accepts_underscores_and_case() {
    let order: TransformOrder = "Zoom_Rotate_Move".parse().unwrap();
    assert_eq!(order, TransformOrder::ZOOM_ROTATE_MOVE);
}

#[test]
fn repeated_kinds_are_rejected() {
    assert!(TransformOrder::new([TransformKind::Move, TransformKind::Move, TransformKind::Zoom]).is_err());
    assert!("move-zoom-zoom".parse::<TransformOrder>().is_err());
}

#[test]
fn wrong_arity_and_unknown_kinds_are_rejected() {
    let err = "move-zoom".parse::<TransformOrder>().unwrap_err();
    assert!(err.to_string().contains("exactly three"));
    assert!("move-zoom-shear".parse::<TransformOrder>().is_err());
}

#[test]
fn position_reports_nesting_depth() {
    let order = TransformOrder::ROTATE_ZOOM_MOVE;
    assert_eq!(order.position(TransformKind::Rotate), 0);
    assert_eq!(order.position(TransformKind::Move), 2);
}

#[test]
fn serde_uses_the_dashed_form() {
    let json = serde_json::to_string(&TransformOrder::ZOOM_MOVE_ROTATE).unwrap();
    assert_eq!(json, "\"zoom-move-rotate\"");
    let back: TransformOrder = serde_json::from_str("\"rotate-move-zoom\"").unwrap();
    assert_eq!(back, TransformOrder::ROTATE_MOVE_ZOOM);
    assert!(serde_json::from_str::<TransformOrder>("\"move\"").is_err());
}
