use baccarat_engine::cards::all_ranks;
use baccarat_engine::shoe::{Shoe, MAX_DRAWS_PER_RANK, SHOE_SIZE};

#[test]
fn counts_stay_within_caps_through_a_full_shoe() {
    let mut shoe = Shoe::new_with_seed(2024);
    for i in 1..=SHOE_SIZE {
        shoe.draw();
        assert_eq!(shoe.total_drawn(), i);
        let counts = shoe.drawn_counts();
        assert!(counts.values().all(|&n| n <= MAX_DRAWS_PER_RANK));
        assert_eq!(counts.values().sum::<u32>(), shoe.total_drawn());
    }
}

#[test]
fn full_shoe_holds_exactly_32_of_each_rank() {
    let mut shoe = Shoe::new_with_seed(77);
    for _ in 0..SHOE_SIZE {
        shoe.draw();
    }
    for r in all_ranks() {
        assert_eq!(shoe.drawn_count(r), MAX_DRAWS_PER_RANK, "rank {}", r);
    }
    assert_eq!(shoe.remaining(), 0);
}

#[test]
fn draw_after_exhaustion_resets_first() {
    let mut shoe = Shoe::new_with_seed(31337);
    for _ in 0..SHOE_SIZE {
        shoe.draw();
    }
    assert_eq!(shoe.reshuffles(), 0);

    let rank = shoe.draw();
    assert_eq!(shoe.reshuffles(), 1);
    assert_eq!(shoe.total_drawn(), 1);
    for (r, n) in shoe.drawn_counts() {
        let expected = if r == rank { 1 } else { 0 };
        assert_eq!(n, expected, "rank {}", r);
    }
}

#[test]
fn reset_twice_leaves_an_empty_tally() {
    let mut shoe = Shoe::new_with_seed(9);
    for _ in 0..123 {
        shoe.draw();
    }
    shoe.reset();
    shoe.reset();
    assert_eq!(shoe.total_drawn(), 0);
    assert!(shoe.drawn_counts().values().all(|&n| n == 0));
    assert_eq!(shoe.drawn_counts().len(), 13);
}

#[test]
fn same_seed_draws_same_sequence() {
    let mut a = Shoe::new_with_seed(12345);
    let mut b = Shoe::new_with_seed(12345);
    let xs: Vec<_> = (0..50).map(|_| a.draw()).collect();
    let ys: Vec<_> = (0..50).map(|_| b.draw()).collect();
    assert_eq!(xs, ys, "same seed must yield identical draws");
}

#[test]
fn different_seeds_draw_different_sequences() {
    let mut a = Shoe::new_with_seed(1);
    let mut b = Shoe::new_with_seed(2);
    let xs: Vec<_> = (0..50).map(|_| a.draw()).collect();
    let ys: Vec<_> = (0..50).map(|_| b.draw()).collect();
    assert_ne!(
        xs, ys,
        "different seeds should produce different draws (high probability)"
    );
}

#[test]
fn entropy_shoe_keeps_invariants_across_several_shoes() {
    let mut shoe = Shoe::new();
    for _ in 0..(SHOE_SIZE * 3 + 10) {
        shoe.draw();
        assert!(shoe.total_drawn() <= SHOE_SIZE);
    }
    assert_eq!(shoe.reshuffles(), 3);
    assert_eq!(shoe.total_drawn(), 10);
}
