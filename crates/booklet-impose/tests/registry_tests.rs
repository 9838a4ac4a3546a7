use booklet_impose::*;

#[test]
fn test_standard_order() {
    let registry = LayoutRegistry::standard();
    let ids: Vec<_> = registry.methods().iter().map(|m| m.id()).collect();
    assert_eq!(
        ids,
        vec![
            "original",
            "side-fold",
            "calendar",
            "cut-stack",
            "side-fold-4up",
            "side-fold-4up-single",
            "folded-8up",
            "square-6up",
        ]
    );
}

#[test]
fn test_lookup_by_id() {
    let registry = LayoutRegistry::default();
    assert_eq!(registry.get("cut-stack"), Some(LayoutMethod::CutStack));
    assert_eq!(registry.get("perfect-binding"), None);
}

#[test]
fn test_portrait_availability() {
    let available = LayoutRegistry::standard().available_for(PageOrientation::Portrait);
    assert_eq!(
        available,
        vec![
            LayoutMethod::Original,
            LayoutMethod::SideFold,
            LayoutMethod::SideFold4Up,
            LayoutMethod::SideFold4UpSingle,
            LayoutMethod::Folded8Up,
        ]
    );
}

#[test]
fn test_landscape_availability() {
    let available = LayoutRegistry::standard().available_for(PageOrientation::Landscape);
    assert_eq!(
        available,
        vec![
            LayoutMethod::Original,
            LayoutMethod::Calendar,
            LayoutMethod::CutStack,
            LayoutMethod::SideFold4Up,
            LayoutMethod::SideFold4UpSingle,
        ]
    );
}

#[test]
fn test_square_availability() {
    let available = LayoutRegistry::standard().available_for(PageOrientation::Square);
    assert_eq!(available, vec![LayoutMethod::Original, LayoutMethod::Square6Up]);
}

#[test]
fn test_entries_flag_every_layout() {
    let entries = LayoutRegistry::standard().entries(PageOrientation::Square);
    assert_eq!(entries.len(), LayoutMethod::ALL.len());

    let side_fold = &entries[1];
    assert_eq!(side_fold.id, "side-fold");
    assert!(!side_fold.enabled);
    assert!(side_fold.orientation_sensitive);

    let calendar = &entries[2];
    assert!(!calendar.orientation_sensitive);
}
