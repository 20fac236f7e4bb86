//! Integration tests checking size, bounds and continuity of generated curves.
#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use hilbertcurve::{GridPoint, Orientation, error, generate};
    use proptest::prelude::*;

    fn curve_has_expected_length(depth: u32, orientation: Orientation) -> error::Result<()> {
        let curve = generate(depth, orientation)?;
        assert_eq!(curve.len(), 4usize.pow(depth));
        Ok(())
    }

    fn curve_stays_in_cell(depth: u32, orientation: Orientation) -> error::Result<()> {
        let curve = generate(depth, orientation)?;
        let origin = orientation.origin(depth);
        let side = 1i32 << (depth + 1);
        for p in &curve {
            assert!(
                (origin.x..=origin.x + side).contains(&p.x)
                    && (origin.y..=origin.y + side).contains(&p.y),
                "{orientation} depth {depth}: {p:?} outside cell at {origin:?} of side {side}"
            );
        }
        Ok(())
    }

    fn curve_is_continuous(depth: u32, orientation: Orientation) -> error::Result<()> {
        let curve = generate(depth, orientation)?;
        for (off, (a, b)) in curve.segments().enumerate() {
            assert!(
                a.is_axis_aligned_with(&b) && a.manhattan(&b) == 2,
                "{orientation} depth {depth} is discontinuous at offset {off}: {a:?} -> {b:?}"
            );
        }
        Ok(())
    }

    macro_rules! curve_tests {
        ($(($orientation:ident, $depth:literal)),* $(,)?) => {
            $(
                paste::paste! {
                    #[test]
                    fn [<length_ $orientation:lower _ $depth>]() -> error::Result<()> {
                        curve_has_expected_length($depth, Orientation::$orientation)
                    }

                    #[test]
                    fn [<bounds_ $orientation:lower _ $depth>]() -> error::Result<()> {
                        curve_stays_in_cell($depth, Orientation::$orientation)
                    }

                    #[test]
                    fn [<continuous_ $orientation:lower _ $depth>]() -> error::Result<()> {
                        curve_is_continuous($depth, Orientation::$orientation)
                    }
                }
            )*
        };
    }

    curve_tests! {
        (A, 1), (A, 4), (A, 8),
        (B, 1), (B, 4), (B, 8),
        (C, 1), (C, 4), (C, 8),
        (D, 1), (D, 4), (D, 8),
    }

    #[test]
    fn depth_one_a_is_a_square() -> error::Result<()> {
        let curve = generate(1, Orientation::A)?;
        assert_eq!(
            curve.points(),
            [
                GridPoint::new(3, 3),
                GridPoint::new(5, 3),
                GridPoint::new(5, 5),
                GridPoint::new(3, 5),
            ]
        );
        Ok(())
    }

    #[test]
    fn c_curve_fills_its_grid() -> error::Result<()> {
        for depth in 1..=6 {
            let curve = generate(depth, Orientation::C)?;
            let side = 1i32 << (depth + 1);
            let seen: HashSet<GridPoint> = curve.iter().copied().collect();
            assert_eq!(seen.len(), curve.len(), "depth {depth} revisits a cell");
            for y in (1..side).step_by(2) {
                for x in (1..side).step_by(2) {
                    assert!(seen.contains(&GridPoint::new(x, y)), "missing ({x}, {y})");
                }
            }
            assert!(
                curve
                    .iter()
                    .all(|p| (0..=side).contains(&p.x) && (0..=side).contains(&p.y))
            );
        }
        Ok(())
    }

    #[test]
    fn orientations_are_translations() -> error::Result<()> {
        let depth = 5;
        let base = generate(depth, Orientation::C)?;
        for orientation in Orientation::ALL {
            let origin = orientation.origin(depth);
            let curve = generate(depth, orientation)?;
            for (p, q) in curve.iter().zip(base.iter()) {
                assert_eq!(*p, GridPoint::new(q.x + origin.x, q.y + origin.y));
            }
        }
        Ok(())
    }

    #[test]
    fn c_and_d_are_identical() -> error::Result<()> {
        for depth in 1..=5 {
            assert_eq!(
                generate(depth, Orientation::C)?.points(),
                generate(depth, Orientation::D)?.points()
            );
        }
        Ok(())
    }

    #[test]
    fn curve_starts_and_ends_on_the_origin_edge() -> error::Result<()> {
        // Entry is the cell at the origin corner, exit the cell at the far
        // end of the second basis vector.
        for depth in 1..=6 {
            let curve = generate(depth, Orientation::C)?;
            let side = 1i32 << (depth + 1);
            assert_eq!(curve.points().first(), Some(&GridPoint::new(1, 1)));
            assert_eq!(curve.points().last(), Some(&GridPoint::new(1, side - 1)));
        }
        Ok(())
    }

    fn orientation() -> impl Strategy<Value = Orientation> {
        prop::sample::select(Orientation::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn generation_is_pure(depth in 1u32..=7, o in orientation()) {
            let first = generate(depth, o).map_err(|e| TestCaseError::fail(e.to_string()))?;
            let second = generate(depth, o).map_err(|e| TestCaseError::fail(e.to_string()))?;
            prop_assert_eq!(first, second);
        }

        #[test]
        fn point_count_is_four_to_the_depth(depth in 1u32..=8, o in orientation()) {
            let curve = generate(depth, o).map_err(|e| TestCaseError::fail(e.to_string()))?;
            prop_assert_eq!(curve.len(), 1usize << (2 * depth));
            prop_assert_eq!(curve.depth(), depth);
            prop_assert_eq!(curve.orientation(), o);
        }

        #[test]
        fn points_sit_on_odd_coordinates(depth in 1u32..=7, o in orientation()) {
            let curve = generate(depth, o).map_err(|e| TestCaseError::fail(e.to_string()))?;
            let origin = o.origin(depth);
            for p in &curve {
                prop_assert_eq!((p.x - origin.x).rem_euclid(2), 1);
                prop_assert_eq!((p.y - origin.y).rem_euclid(2), 1);
            }
        }
    }
}
