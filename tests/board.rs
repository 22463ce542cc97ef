// tests/board.rs
use std::io::{self, Write};
use toy_robot::{Board, BoardError, BoardTarget, Direction, Placement, Position, Rotation};

fn setup() -> Board<Vec<u8>> {
    Board::with_report_output(5, 5, Vec::new())
}

fn placed(x: i64, y: i64, facing: Direction) -> Board<Vec<u8>> {
    let mut board = setup();
    board.place(Position::new(x, y), facing).unwrap();
    board
}

fn report_text(board: Board<Vec<u8>>) -> String {
    String::from_utf8(board.into_report_output()).unwrap()
}

#[test]
fn test_place_inside_bounds() {
    let mut board = setup();
    assert!(board.place(Position::new(1, 1), Direction::West).is_ok());
    assert_eq!(
        board.placement(),
        Some(Placement {
            position: Position::new(1, 1),
            facing: Direction::West,
        })
    );
}

#[test]
fn test_place_succeeds_iff_inside_bounds() {
    // Non-square board so a swapped width/height would show up.
    for x in -2..6 {
        for y in -2..5 {
            let mut board = Board::with_report_output(4, 3, Vec::new());
            let result = board.place(Position::new(x, y), Direction::North);
            let inside = (0..4).contains(&x) && (0..3).contains(&y);
            assert_eq!(result.is_ok(), inside, "place at ({x}, {y})");
            if !inside {
                assert!(matches!(result, Err(BoardError::OutOfBounds { .. })));
                assert_eq!(board.placement(), None);
            }
        }
    }
}

#[test]
fn test_rejected_place_keeps_previous_placement() {
    let mut board = placed(2, 3, Direction::East);
    let err = board.place(Position::new(10, 1), Direction::West).unwrap_err();
    assert!(matches!(
        err,
        BoardError::OutOfBounds {
            position: Position { x: 10, y: 1 },
            width: 5,
            height: 5,
        }
    ));
    assert_eq!(
        board.placement(),
        Some(Placement {
            position: Position::new(2, 3),
            facing: Direction::East,
        })
    );
}

#[test]
fn test_place_replaces_placement() {
    let mut board = placed(0, 0, Direction::North);
    board.place(Position::new(4, 4), Direction::South).unwrap();
    assert_eq!(board.placement().unwrap().position, Position::new(4, 4));
    assert_eq!(board.placement().unwrap().facing, Direction::South);
}

#[test]
fn test_move_before_place() {
    let mut board = setup();
    assert!(matches!(board.move_robot(), Err(BoardError::NotPlaced)));
    assert_eq!(board.placement(), None);
}

#[test]
fn test_move_forward() {
    let mut board = placed(1, 1, Direction::North);
    assert_eq!(board.move_robot().unwrap(), Position::new(1, 2));
    assert_eq!(board.placement().unwrap().position, Position::new(1, 2));
}

#[test]
fn test_move_off_edge_is_rejected() {
    let mut board = placed(0, 1, Direction::West);
    assert!(matches!(
        board.move_robot(),
        Err(BoardError::OutOfBounds { .. })
    ));
    assert_eq!(board.placement().unwrap().position, Position::new(0, 1));
    assert_eq!(board.placement().unwrap().facing, Direction::West);
}

#[test]
fn test_move_rejected_on_every_edge() {
    let edges = [
        (Position::new(2, 4), Direction::North),
        (Position::new(4, 2), Direction::East),
        (Position::new(2, 0), Direction::South),
        (Position::new(0, 2), Direction::West),
    ];
    for (position, facing) in edges {
        let mut board = setup();
        board.place(position, facing).unwrap();
        assert!(
            matches!(board.move_robot(), Err(BoardError::OutOfBounds { .. })),
            "{facing} from {position}"
        );
        assert_eq!(board.placement().unwrap().position, position);
    }
}

#[test]
fn test_rotate_before_place() {
    let mut board = setup();
    assert!(matches!(
        board.rotate(Rotation::Left),
        Err(BoardError::NotPlaced)
    ));
}

#[test]
fn test_rotate_in_place() {
    let mut board = placed(1, 1, Direction::North);
    assert_eq!(board.rotate(Rotation::Left).unwrap(), Direction::West);

    let mut board = placed(1, 1, Direction::South);
    assert_eq!(board.rotate(Rotation::Right).unwrap(), Direction::West);
    assert_eq!(board.placement().unwrap().position, Position::new(1, 1));
}

#[test]
fn test_report_before_place_writes_nothing() {
    let mut board = setup();
    assert!(matches!(board.report(), Err(BoardError::NotPlaced)));
    assert_eq!(report_text(board), "");
}

#[test]
fn test_report_format() {
    let mut board = placed(2, 3, Direction::East);
    board.report().unwrap();
    assert_eq!(report_text(board), "Robot position: (2, 3) facing: EAST\n");
}

struct ClosedSink;

impl Write for ClosedSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_report_write_failure() {
    let mut board = Board::with_report_output(5, 5, ClosedSink);
    board.place(Position::new(0, 0), Direction::North).unwrap();
    assert!(matches!(board.report(), Err(BoardError::Report(_))));
    // The placement itself is untouched by a failed report.
    assert!(board.placement().is_some());
}

#[test]
fn test_move_off_far_edge_of_largest_board() {
    let far = i64::from(u32::MAX) - 1;
    let mut board = Board::with_report_output(u32::MAX, 1, Vec::new());
    board.place(Position::new(far, 0), Direction::East).unwrap();
    assert!(matches!(
        board.move_robot(),
        Err(BoardError::OutOfBounds {
            position: Position { x, y: 0 },
            ..
        }) if x == far + 1
    ));
    assert_eq!(board.placement().unwrap().position, Position::new(far, 0));
}

#[test]
fn test_place_beyond_i32_range_is_out_of_bounds() {
    let mut board = placed(1, 1, Direction::North);
    assert!(matches!(
        board.place(Position::new(2_147_483_648, 0), Direction::North),
        Err(BoardError::OutOfBounds { .. })
    ));
    assert_eq!(board.placement().unwrap().position, Position::new(1, 1));
}

#[test]
fn test_offset_overflow_yields_none() {
    assert_eq!(Position::new(i64::MAX, 0).offset(Direction::East.delta()), None);
    assert_eq!(Position::new(0, i64::MIN).offset(Direction::South.delta()), None);
    assert_eq!(
        Position::new(1, 1).offset(Direction::West.delta()),
        Some(Position::new(0, 1))
    );
}
