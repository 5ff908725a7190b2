// Adds a[i] = 5i and b[i] = (i + 0.5) * 2.1 over 20100 elements in chunks
// of 150 and prints the first 12 values of each array.

use parallel_array_sum::demo::main_with_args;
use parallel_array_sum::Variant;

fn main() {
    std::process::exit(main_with_args(Variant::Primary, std::env::args()));
}
