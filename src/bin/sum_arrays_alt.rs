// Adds a[i] = 10i and b[i] = (i + 2.5) * 3.6 over 10000 elements in chunks
// of 100 and prints the first 8 values of each array.

use parallel_array_sum::demo::main_with_args;
use parallel_array_sum::Variant;

fn main() {
    std::process::exit(main_with_args(Variant::Secondary, std::env::args()));
}
