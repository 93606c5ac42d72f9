//! Print n! for an n given on the command line (default 100).
//!
//! ```text
//! cargo run --release --example factorial -- 1000
//! ```

fn main() {
    let n: u32 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(100);
    println!("{}", decint_core::factorial(n));
}
