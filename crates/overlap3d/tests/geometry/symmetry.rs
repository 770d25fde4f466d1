use super::random::RandomPrimitives;
use overlap3d::query::intersection_test;

#[test]
fn intersection_test_is_symmetric() {
    let mut gen = RandomPrimitives::new(42);
    let mut hits = 0;

    for _ in 0..200 {
        let a = gen.primitives();
        let b = gen.primitives();

        for p1 in &a {
            for p2 in &b {
                let direct = intersection_test(p1, p2);
                assert!(direct.is_ok());
                assert_eq!(direct, intersection_test(p2, p1), "{:?} vs {:?}", p1, p2);

                if direct == Ok(true) {
                    hits += 1;
                }
            }
        }
    }

    // Both outcomes must have been exercised.
    assert!(hits > 0);
    assert!(hits < 200 * 36);
}

#[test]
fn primitives_intersect_themselves() {
    let mut gen = RandomPrimitives::new(7);

    for _ in 0..200 {
        for prim in &gen.primitives() {
            assert_eq!(intersection_test(prim, prim), Ok(true), "{:?}", prim);
        }
    }
}
