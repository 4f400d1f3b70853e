use super::*;

fn cell(index: usize) -> Cell {
    Cell { value: 1, index }
}

#[test]
fn first_row_columns() {
    let r = Region::for_cell_index(0);
    assert_eq!(r.top_left, Point::new(0, 0));
    assert_eq!(r.bottom_right, Point::new(50, 50));

    let r = Region::for_cell_index(4);
    assert_eq!(r.top_left, Point::new(200, 0));
    assert_eq!(r.bottom_right, Point::new(250, 50));
}

#[test]
fn wraps_every_five_cells() {
    let r = Region::for_cell_index(5);
    assert_eq!(r.top_left, Point::new(0, 50));
    let r = Region::for_cell_index(23);
    assert_eq!(r.top_left, Point::new(150, 200));
    assert_eq!(r.bottom_right, Point::new(200, 250));
}

#[test]
fn indices_past_the_canvas_are_not_clipped() {
    let r = Region::for_cell_index(27);
    assert_eq!(r.top_left, Point::new(100, 250));
    assert_eq!(r.bottom_right, Point::new(150, 300));
}

#[test]
#[allow(arithmetic_overflow)]
fn huge_indices_saturate_instead_of_wrapping() {
    let index = usize::MAX - usize::MAX % ROW_WIDTH;
    let r = Region::for_cell_index(index);
    assert_eq!(r.top_left, Point::new(0, u32::MAX));
    assert_eq!(r.bottom_right, Point::new(50, u32::MAX));
    assert_eq!(r.height(), 0);

    let r = Region::for_cell_index(index + 3);
    assert_eq!(r.top_left, Point::new(150, u32::MAX));
}

#[test]
fn regions_follow_cell_order() {
    let cells = [cell(7), cell(1), cell(12)];
    let regions = layout_regions(&cells);
    assert_eq!(regions.len(), 3);
    for (c, r) in cells.iter().zip(&regions) {
        let expected = Point::new(
            (c.index % 5) as u32 * CELL_SIZE,
            (c.index / 5) as u32 * CELL_SIZE,
        );
        assert_eq!(r.top_left, expected);
        assert_eq!(r.width(), CELL_SIZE);
        assert_eq!(r.height(), CELL_SIZE);
    }
}

#[test]
fn no_cells_no_regions() {
    assert!(layout_regions(&[]).is_empty());
}
