use rational::{Power, Rational};
use std::num::NonZeroU64;

fn main() {
    println!("=== PEP 239 Example ===\n");

    let mut r = Rational::new(2, 3);
    println!("  r = {r}");
    r /= 10;
    println!("  r /= 10 -> {r}");
    println!("  as float: {}", r.to_f64());

    println!("\n=== Canonical Form ===\n");
    let raw_pairs = [(6, 4), (6, -4), (0, 7), (5, 0), (-5, 0), (0, 0)];
    for (num, den) in raw_pairs {
        let value = Rational::from_parts(num, den);
        println!("  {num:>3}/{den:<3} -> {value:?}");
    }

    println!("\n=== Special Values ===\n");
    let inf = Rational::infinity();
    let nan = Rational::nan();
    println!("  1/0        = {}", Rational::new(1, 0));
    println!("  ∞ - ∞      = {}", &inf - &inf);
    println!("  ∞ * 0      = {}", &inf * Rational::zero());
    println!("  1 / ∞      = {}", Rational::one() / &inf);
    println!("  NaN == NaN = {}", nan == Rational::nan());
    println!("  NaN < 1    = {}", nan < Rational::one());
    println!("  NaN >= 1   = {}", nan >= Rational::one());

    println!("\n=== Ordering ===\n");
    let mut values = vec![
        Rational::new(7, 3),
        Rational::infinity(),
        Rational::new(-1, 2),
        Rational::zero(),
        Rational::neg_infinity(),
        Rational::new(22, 7),
    ];
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let sorted: Vec<String> = values.iter().map(ToString::to_string).collect();
    println!("  {}", sorted.join(" < "));

    println!("\n=== Powers ===\n");
    let base = Rational::new(2, 3);
    println!("  ({base})^3  = {}", base.pow(3));
    println!("  ({base})^-2 = {}", base.pow(-2));
    match Rational::from(2).pow_rational(&Rational::new(1, 2)) {
        Power::Exact(value) => println!("  2^(1/2)    = {value}"),
        Power::Approximate(value) => println!("  2^(1/2)    ≈ {value}"),
    }

    println!("\n=== Trimming π ===\n");
    let pi = Rational::from_f64(std::f64::consts::PI);
    println!("  exact f64 π = {pi}");
    for max_den in [1, 10, 100, 113, 1000, 100_000] {
        let Some(bound) = NonZeroU64::new(max_den) else {
            continue;
        };
        let approx = pi.trim(bound);
        println!(
            "  max den {max_den:>6} -> {:<14} (error {:e})",
            approx.to_string(),
            (&approx - &pi).abs().to_f64()
        );
    }

    println!("\n=== Demo Complete ===");
}
