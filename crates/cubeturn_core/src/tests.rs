use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use strum::IntoEnumIterator;

use crate::*;

fn cw(face: Face) -> Turn {
    Turn::new(face, Direction::Clockwise)
}

fn ccw(face: Face) -> Turn {
    Turn::new(face, Direction::CounterClockwise)
}

fn all_turns() -> impl Iterator<Item = Turn> {
    Face::ALL.into_iter().flat_map(|face| [cw(face), ccw(face)])
}

#[test]
fn test_solved_state() {
    let cube = CubeState::new();
    cube.check_invariants().unwrap();
    assert!(cube.is_solved());

    let positions: Vec<Position> = cube.cubies().iter_values().map(|c| c.position).collect();
    assert_eq!(positions, Position::iter_all().collect::<Vec<_>>());

    for (cubie, info) in cube.cubies().iter() {
        assert_eq!(info.position, cubie.home());
        assert_eq!(Cubie::from_home(info.position), Some(cubie));
    }

    // Up-front-left corner
    let corner = cube.cubie(Cubie::from_home(Position::new(-1, -1, -1)).unwrap());
    assert_eq!(
        corner.colors,
        [
            Color::White,
            Color::Orange,
            Color::Blue,
            Color::Orange,
            Color::Blue,
            Color::White,
        ],
    );

    // Core
    let core = cube.cubie(Cubie::from_home(Position::new(0, 0, 0)).unwrap());
    assert_eq!(
        core.colors,
        [
            Color::Yellow,
            Color::Orange,
            Color::Green,
            Color::Red,
            Color::Blue,
            Color::White,
        ],
    );
}

#[test]
fn test_solved_face_colors() {
    let cube = CubeState::new();
    for (face, color) in [
        (Face::U, Color::White),
        (Face::D, Color::Yellow),
        (Face::F, Color::Blue),
        (Face::B, Color::Green),
        (Face::L, Color::Orange),
        (Face::R, Color::Red),
    ] {
        assert_eq!(cube.face_stickers(face), [[color; 3]; 3], "face {face}");
    }
}

#[test]
fn test_color_counts() {
    let counts = CubeState::new().color_counts();
    assert_eq!(counts.len(), 6);
    assert!(counts.values().all(|&n| n == 27));
}

#[test]
fn test_cubie_index_round_trip() {
    for cubie in Cubie::iter() {
        assert_eq!(Cubie::try_from_index(cubie.to_index()), Some(cubie));
    }
    assert_eq!(Cubie::try_from_index(CUBIE_COUNT), None);
    assert_eq!(Cubie::from_home(Position::new(2, 0, 0)), None);
}

#[test]
fn test_r_clockwise_corner() {
    let before = CubeState::new();
    let corner = before.cubie_at(Position::new(1, -1, -1)).unwrap();
    let old = *before.cubie(corner);

    let after = before.do_turn(cw(Face::R));
    let new = *after.cubie(corner);

    assert_eq!(new.position, Position::new(1, -1, 1));
    assert_eq!(new.color(ColorSlot::Right), old.color(ColorSlot::Right));
    assert_eq!(new.color(ColorSlot::Left), old.color(ColorSlot::Left));
    assert_eq!(new.color(ColorSlot::Up), old.color(ColorSlot::Back));
    assert_eq!(new.color(ColorSlot::Front), old.color(ColorSlot::Up));
    assert_eq!(new.color(ColorSlot::Down), old.color(ColorSlot::Front));
    assert_eq!(new.color(ColorSlot::Back), old.color(ColorSlot::Down));

    // The corner that moved into its old spot came from the bottom.
    let replacement = after.cubie_at(Position::new(1, -1, -1)).unwrap();
    assert_eq!(replacement.home(), Position::new(1, 1, -1));
}

#[test]
fn test_position_rotation_formulas() {
    let p = Position::new(1, -1, 0);
    assert_eq!(p.turned(Axis::X, Direction::Clockwise), Position::new(1, 0, 1));
    assert_eq!(
        p.turned(Axis::X, Direction::CounterClockwise),
        Position::new(1, 0, -1),
    );
    assert_eq!(p.turned(Axis::Y, Direction::Clockwise), Position::new(0, -1, 1));
    assert_eq!(
        p.turned(Axis::Y, Direction::CounterClockwise),
        Position::new(0, -1, -1),
    );
    assert_eq!(p.turned(Axis::Z, Direction::Clockwise), Position::new(-1, -1, 0));
    assert_eq!(
        p.turned(Axis::Z, Direction::CounterClockwise),
        Position::new(1, 1, 0),
    );
}

#[test]
fn test_color_cycles_skip_axis_slots() {
    let info = CubieInfo::solved(Position::new(0, 0, 0));
    for face in Face::ALL {
        let axis = face.axis();
        let cycle = axis.color_cycle();
        let fixed = ColorSlot::iter().filter(|slot| !cycle.contains(slot));
        let turned = info.turned(cw(face));
        for slot in fixed {
            assert_eq!(turned.color(slot), info.color(slot), "{face} moved {slot}");
        }
    }
}

#[test]
fn test_layer_isolation() {
    let mut cube = CubeState::new();
    cube.apply_turns([cw(Face::F), ccw(Face::L), cw(Face::D)]);

    for turn in all_turns() {
        let after = cube.do_turn(turn);
        let mut moved = 0;
        for (cubie, info) in cube.cubies().iter() {
            if info.is_in_layer(turn.face) {
                moved += 1;
                assert!(after.cubie(cubie).is_in_layer(turn.face));
            } else {
                assert_eq!(after.cubie(cubie), info, "{turn} moved {cubie}");
            }
        }
        assert_eq!(moved, 9);
        assert_eq!(cube.grip(turn.face).count(), 9);
    }
}

#[test]
fn test_inverse_law() {
    let mut start = CubeState::new();
    start.apply_turns([cw(Face::U), cw(Face::R), ccw(Face::B)]);

    for turn in all_turns() {
        let mut cube = start.clone();
        cube.apply_turn(turn);
        assert_ne!(cube, start, "{turn} did nothing");
        cube.apply_turn(turn.inverse());
        assert_eq!(cube, start, "{turn} was not undone");
    }
}

#[test]
fn test_four_turn_identity() {
    let mut start = CubeState::new();
    start.apply_turns([ccw(Face::D), cw(Face::L)]);

    for turn in all_turns() {
        let mut cube = start.clone();
        for i in 1..=4 {
            cube.apply_turn(turn);
            cube.check_invariants().unwrap();
            assert_eq!(cube == start, i == 4, "{turn} x{i}");
        }
    }
}

#[test]
fn test_turns_do_not_commute() {
    let mut ur = CubeState::new();
    ur.apply_turns([cw(Face::U), cw(Face::R)]);

    let mut ru = CubeState::new();
    ru.apply_turns([cw(Face::R), cw(Face::U)]);

    assert_ne!(ur, ru);
    assert!(
        Cubie::iter().any(|cubie| ur.cubie(cubie) != ru.cubie(cubie)),
        "some cubie should differ",
    );

    // Opposite faces do commute.
    let mut ud = CubeState::new();
    ud.apply_turns([cw(Face::U), cw(Face::D)]);
    let mut du = CubeState::new();
    du.apply_turns([cw(Face::D), cw(Face::U)]);
    assert_eq!(ud, du);
}

#[test]
fn test_single_turn_is_not_solved() {
    for turn in all_turns() {
        assert!(!CubeState::new().do_turn(turn).is_solved(), "{turn}");
    }
}

#[test]
fn test_apply_command() {
    let mut by_command = CubeState::new();
    assert!(by_command.apply_command("R", "clockwise"));
    assert!(by_command.apply_command("U", "counterclockwise"));
    assert!(by_command.apply_command("F", "CCW"));

    let mut by_turn = CubeState::new();
    by_turn.apply_turns([cw(Face::R), ccw(Face::U), ccw(Face::F)]);

    assert_eq!(by_command, by_turn);
}

#[test]
fn test_invalid_command_is_noop() {
    let mut cube = CubeState::new();
    cube.apply_turn(cw(Face::B));
    let before = cube.clone();

    for (face, direction) in [
        ("X", "clockwise"),
        ("", "clockwise"),
        ("RU", "clockwise"),
        ("r", "clockwise"),
        ("R", "sideways"),
        ("R", ""),
        ("M", "counterclockwise"),
        (" R ", "cw"),
        ("R", " cw"),
    ] {
        assert!(!cube.apply_command(face, direction), "{face:?} {direction:?}");
        assert_eq!(cube, before);
    }
}

#[test]
fn test_reset() {
    let mut cube = CubeState::new();
    cube.apply_turns([cw(Face::R), cw(Face::U), ccw(Face::L)]);
    assert!(!cube.is_solved());
    cube.reset();
    assert_eq!(cube, CubeState::default());
}

#[test]
fn test_from_cubies_checks_invariants() {
    let solved = CubeState::new();
    let state = CubeState::from_cubies(solved.cubies().clone()).unwrap();
    assert_eq!(state, solved);

    let a = Cubie::from_home(Position::new(0, 0, 0)).unwrap();
    let b = Cubie::from_home(Position::new(1, 1, 1)).unwrap();

    let duplicated = solved.cubies().map_ref(|cubie, info| match cubie == b {
        true => CubieInfo {
            position: Position::new(0, 0, 0),
            ..*info
        },
        false => *info,
    });
    assert_eq!(
        CubeState::from_cubies(duplicated),
        Err(InvariantError::DuplicatePosition {
            a,
            b,
            position: Position::new(0, 0, 0),
        }),
    );

    let recolored = solved.cubies().map_ref(|cubie, info| match cubie == a {
        true => CubieInfo {
            colors: [Color::Red; COLORS_PER_CUBIE],
            ..*info
        },
        false => *info,
    });
    assert!(matches!(
        CubeState::from_cubies(recolored),
        Err(InvariantError::ColorCount { .. }),
    ));

    let out_of_range = solved.cubies().map_ref(|cubie, info| match cubie == a {
        true => CubieInfo {
            position: Position::new(0, 2, 0),
            ..*info
        },
        false => *info,
    });
    assert!(matches!(
        CubeState::from_cubies(out_of_range),
        Err(InvariantError::PositionOutOfRange { .. }),
    ));
}

#[test]
fn test_parse_face_and_direction() {
    for face in Face::ALL {
        assert_eq!(face.to_string().parse::<Face>(), Ok(face));
        assert_eq!(face.opposite().axis(), face.axis());
        assert_eq!(face.opposite().layer(), -face.layer());
    }
    assert!("Q".parse::<Face>().is_err());

    for direction in Direction::iter() {
        assert_eq!(direction.to_string().parse::<Direction>(), Ok(direction));
    }
    assert_eq!("cw".parse::<Direction>(), Ok(Direction::Clockwise));
    assert_eq!("Counterclockwise".parse::<Direction>(), Ok(Direction::CounterClockwise));
    assert!("widdershins".parse::<Direction>().is_err());

    assert_eq!(cw(Face::R).to_string(), "R");
    assert_eq!(ccw(Face::R).to_string(), "R'");
}

proptest! {
    #[test]
    fn proptest_invariants_hold(turns in prop::collection::vec(any::<Turn>(), 0..60)) {
        let mut cube = CubeState::new();
        for turn in turns {
            cube.apply_turn(turn);
            prop_assert_eq!(cube.check_invariants(), Ok(()));
        }
    }

    #[test]
    fn proptest_visible_stickers_conserved(turns in prop::collection::vec(any::<Turn>(), 0..60)) {
        let mut cube = CubeState::new();
        cube.apply_turns(turns);

        let mut counts: BTreeMap<Color, usize> = BTreeMap::new();
        for face in Face::ALL {
            for &color in cube.face_stickers(face).iter().flatten() {
                *counts.entry(color).or_default() += 1;
            }
        }
        let expected: BTreeMap<Color, usize> = Color::iter().map(|c| (c, 9)).collect();
        prop_assert_eq!(counts, expected);
    }

    #[test]
    fn proptest_inverse_sequence_restores(turns in prop::collection::vec(any::<Turn>(), 0..60)) {
        let mut cube = CubeState::new();
        cube.apply_turns(turns.iter().copied());
        cube.apply_turns(turns.iter().rev().map(|t| t.inverse()));
        prop_assert_eq!(cube, CubeState::new());
    }

    #[test]
    fn proptest_do_turn_is_pure(
        setup in prop::collection::vec(any::<Turn>(), 0..20),
        turn in any::<Turn>(),
    ) {
        let mut cube = CubeState::new();
        cube.apply_turns(setup);
        let snapshot = cube.clone();
        let after = cube.do_turn(turn);
        prop_assert_eq!(&cube, &snapshot);

        let mut mutated = cube;
        mutated.apply_turn(turn);
        prop_assert_eq!(mutated, after);
    }
}
