use super::*;

#[test]
fn delta_line_lists_three_features_and_four_pieces() {
    assert_eq!(DELTA_RUN_MUSCLE.features.len(), 3);
    assert_eq!(DELTA_RUN_MUSCLE.pieces.len(), 4);
}

#[test]
fn delta_line_piece_names_are_unique() {
    let mut names: Vec<_> = DELTA_RUN_MUSCLE.pieces.iter().map(|p| p.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), DELTA_RUN_MUSCLE.pieces.len());
}
