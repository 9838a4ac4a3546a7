use booklet_impose::*;

#[test]
fn test_page_orientation() {
    assert_eq!(PageOrientation::of(612.0, 792.0), PageOrientation::Portrait);
    assert_eq!(PageOrientation::of(792.0, 612.0), PageOrientation::Landscape);
    assert_eq!(PageOrientation::of(400.0, 400.0), PageOrientation::Square);
    assert_eq!(PageOrientation::of(400.0, 400.4), PageOrientation::Square);
    assert_eq!(PageOrientation::of(400.0, 401.0), PageOrientation::Portrait);
}

#[test]
fn test_paper_dimensions() {
    let a4 = PaperTarget::a4();
    assert!((constants::pt_to_mm(a4.width_pt) - 210.0).abs() < 1e-9);
    assert!((constants::pt_to_mm(a4.height_pt) - 297.0).abs() < 1e-9);

    let letter = PaperTarget::letter();
    assert_eq!((letter.width_pt, letter.height_pt), (612.0, 792.0));

    let custom = PaperTarget::custom("Booklet", 100.0, 200.0);
    assert!((constants::pt_to_mm(custom.height_pt) - 200.0).abs() < 1e-9);
}

#[test]
fn test_sheet_turns_against_input() {
    let a4 = PaperTarget::a4();
    let (long, short) = (a4.height_pt, a4.width_pt);

    assert_eq!(a4.dimensions_for(612.0, 792.0), (long, short));
    assert_eq!(a4.dimensions_for(792.0, 612.0), (short, long));
    assert_eq!(a4.dimensions_for(500.0, 500.0), (short, long));
}

#[test]
fn test_fixed_sheet() {
    let fixed = PaperTarget::a4().fixed();
    assert_eq!(fixed.orientation, SheetOrientation::Fixed);
    assert_eq!(
        fixed.dimensions_for(612.0, 792.0),
        (fixed.width_pt, fixed.height_pt)
    );
}

#[test]
fn test_paper_validation() {
    assert!(PaperTarget::tabloid().validate().is_ok());
    assert!(PaperTarget::new("Zero", 0.0, 100.0).validate().is_err());
    assert!(PaperTarget::new("NaN", f64::NAN, 100.0).validate().is_err());
}

#[test]
fn test_shape_validation() {
    assert!(PageShape::new(3, 612.0, 792.0).validate().is_ok());
    assert!(PageShape::new(3, -1.0, 792.0).validate().is_err());
}

#[test]
fn test_sheet_plan() {
    let plan = SheetPlan::new(5, 4).unwrap();
    assert_eq!(plan.number_of_sheets, 2);
    assert_eq!(plan.slots_available, 8);
    assert_eq!(plan.vacant_slots, 3);
    assert_eq!(plan.page_count(), 5);

    assert_eq!(SheetPlan::new(0, 4).unwrap(), SheetPlan::default());
}

#[test]
fn test_sheet_plan_rejects_oversized_documents() {
    let result = SheetPlan::new(u32::MAX - 2, 8);
    assert!(matches!(result, Err(ImposeError::InvalidInput(_))));

    let result = SheetPlan::new(4, 0);
    assert!(matches!(result, Err(ImposeError::InvalidInput(_))));

    let shape = PageShape::new(u32::MAX, 612.0, 792.0);
    let result = calculate_statistics(LayoutMethod::SideFold, &shape);
    assert!(matches!(result, Err(ImposeError::InvalidInput(_))));
}
