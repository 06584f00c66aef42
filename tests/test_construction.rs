use sqmat::{MatrixError, SquareMatrix};

fn grid(size: usize) -> Vec<Vec<i64>> {
    (0..size)
        .map(|i| (0..size).map(|j| (10 * i + j) as i64).collect())
        .collect()
}

#[test]
fn construction_and_size() {
    let m = SquareMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    assert_eq!(m.size(), 2);

    let m = SquareMatrix::<i32>::new(0);
    assert_eq!(m.size(), 0);
}

#[test]
fn from_rows_keeps_every_element() {
    for size in 0..6 {
        let rows = grid(size);
        let m = SquareMatrix::from_rows(rows.clone()).unwrap();
        assert_eq!(m.size(), size);
        for (i, row) in rows.iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                assert_eq!(m.get_value(i, j).unwrap(), *value);
            }
        }
        assert_eq!(m.to_rows(), rows);
    }
}

#[test]
fn try_from_rows() {
    let m = SquareMatrix::try_from(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    assert_eq!(m.get_value(1, 0).unwrap(), 3.0);
}

#[test]
fn ragged_rows_are_invalid() {
    let rv = SquareMatrix::from_rows(vec![vec![1, 2], vec![3, 4, 5]]);
    assert!(matches!(rv, Err(MatrixError::InvalidArgument(_))));
}

#[test]
fn rectangular_rows_are_invalid() {
    let rv = SquareMatrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]);
    assert!(matches!(rv, Err(MatrixError::InvalidArgument(_))));

    let rv = SquareMatrix::<i32>::from_rows(vec![vec![]]);
    assert!(matches!(rv, Err(MatrixError::InvalidArgument(_))));
}

#[test]
fn empty_input_is_empty_matrix() {
    let m = SquareMatrix::<i32>::from_rows(vec![]).unwrap();
    assert!(m.is_empty());
    assert_eq!(m, SquareMatrix::new(0));
}

#[test]
fn element_access() {
    let m = SquareMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    assert_eq!(m.get_value(0, 0).unwrap(), 1);
    assert_eq!(m.get_value(1, 1).unwrap(), 4);
    assert!(matches!(m.get_value(2, 2), Err(MatrixError::OutOfRange(_))));
    assert!(matches!(m.get_value(0, 2), Err(MatrixError::OutOfRange(_))));
    assert!(matches!(m.get_value(2, 0), Err(MatrixError::OutOfRange(_))));
}

#[test]
fn set_value() -> anyhow::Result<()> {
    let mut m = SquareMatrix::<i32>::new(3);
    m.set_value(2, 1, 7)?;
    assert_eq!(m.get_value(2, 1)?, 7);
    assert_eq!(m.as_slice().iter().filter(|&&x| x != 0).count(), 1);
    Ok(())
}

#[test]
fn failed_set_value_leaves_matrix_unchanged() {
    let mut m = SquareMatrix::from_rows(grid(3)).unwrap();
    let before = m.clone();
    assert!(matches!(
        m.set_value(3, 0, -1),
        Err(MatrixError::OutOfRange(_))
    ));
    assert!(matches!(
        m.set_value(0, 3, -1),
        Err(MatrixError::OutOfRange(_))
    ));
    assert_eq!(m, before);
}

#[test]
fn no_index_is_valid_for_empty_matrix() {
    let mut m = SquareMatrix::<f64>::new(0);
    assert!(matches!(m.get_value(0, 0), Err(MatrixError::OutOfRange(_))));
    assert!(matches!(
        m.set_value(0, 0, 1.0),
        Err(MatrixError::OutOfRange(_))
    ));
    assert!(matches!(m.swap_rows(0, 0), Err(MatrixError::OutOfRange(_))));
    assert!(matches!(m.swap_cols(0, 0), Err(MatrixError::OutOfRange(_))));
    assert!(matches!(m.row(0), Err(MatrixError::OutOfRange(_))));
}

#[test]
fn display_does_not_alter_matrix() {
    let m = SquareMatrix::from_rows(grid(4)).unwrap();
    let before = m.clone();
    let text = m.to_string();
    assert_eq!(text.lines().count(), 4);
    assert!(text
        .lines()
        .all(|line| line.len() == 4 * sqmat::DISPLAY_WIDTH));
    assert_eq!(m, before);
}
