//! Print F(n) for an n given on the command line (default 1000).
//!
//! ```text
//! cargo run --release --example fibonacci -- 100000
//! ```

use decint_core::UnsignedInteger;

fn main() {
    let n: u64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(1000);

    let mut previous = UnsignedInteger::new();
    let mut current = UnsignedInteger::from(1u32);
    if n == 0 {
        println!("{previous}");
        return;
    }
    for _ in 1..n {
        let next = &previous + &current;
        previous = current;
        current = next;
    }
    println!("{current}");
}
