use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(7)
}

#[test]
fn default_counts_produce_150_stars_and_3_shooting() {
    let field = generate(&mut rng(), 150, 3);
    assert_eq!(field.stars.len(), 150);
    assert_eq!(field.shooting.len(), 3);
    assert_eq!(field.len(), 153);
}

#[test]
fn zero_counts_produce_empty_field() {
    assert!(generate(&mut rng(), 0, 0).is_empty());
}

#[test]
fn star_values_stay_in_range() {
    let field = generate(&mut rng(), 500, 0);
    for star in &field.stars {
        assert!((0.0..100.0).contains(&star.left_pct));
        assert!((0.0..100.0).contains(&star.top_pct));
        assert!((2.0..6.0).contains(&star.duration_s));
        assert!((0.0..3.0).contains(&star.delay_s));
        assert!((0.3..0.8).contains(&star.base_opacity));
    }
}

#[test]
fn every_size_class_is_drawn() {
    let field = generate(&mut rng(), 300, 0);
    for size in StarSize::ALL {
        assert!(field.stars.iter().any(|star| star.size == size), "{} never drawn", size.as_str());
    }
}

#[test]
fn shooting_stars_start_upper_left_and_stagger() {
    let field = generate(&mut rng(), 0, 3);
    for (index, shooting) in field.shooting.iter().enumerate() {
        assert!((0.0..70.0).contains(&shooting.left_pct));
        assert!((0.0..30.0).contains(&shooting.top_pct));
        let base = index as f64 * 5.0;
        assert!((base..base + 3.0).contains(&shooting.delay_s));
    }
}

#[test]
fn same_seed_produces_same_field() {
    assert_eq!(generate(&mut rng(), 10, 2), generate(&mut rng(), 10, 2));
}

#[test]
fn second_draw_from_same_rng_differs() {
    let mut shared = rng();
    let first = generate(&mut shared, 10, 0);
    let second = generate(&mut shared, 10, 0);
    assert_ne!(first, second);
}

#[test]
fn star_renders_class_and_style_properties() {
    let star = Star { size: StarSize::Large, left_pct: 12.5, top_pct: 50.0, duration_s: 3.0, delay_s: 1.5, base_opacity: 0.4 };
    assert_eq!(star.class_name(), "star large");
    let props = star.style_properties();
    assert_eq!(props[0], ("left", "12.5%".to_owned()));
    assert_eq!(props[2], ("--duration", "3s".to_owned()));
    assert_eq!(props[4], ("--base-opacity", "0.4".to_owned()));
}

#[test]
fn shooting_star_renders_animation_delay() {
    let shooting = ShootingStar { left_pct: 10.0, top_pct: 5.0, delay_s: 6.25 };
    assert_eq!(shooting.class_name(), "shooting-star");
    assert_eq!(shooting.style_properties()[2], ("animation-delay", "6.25s".to_owned()));
}
