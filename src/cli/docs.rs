// src/cli/docs.rs
// Documentation lookup and catalog listing from the command line

use gestures::catalog::Gesture;
use gestures::dispatch::{self, Operation};
use strum::IntoEnumIterator;

/// Print a gesture document (or the "not found" hint)
pub fn run_doc(name: &str) {
    println!("{}", dispatch::lookup_doc(name));
}

/// Print the tools and resources the server exposes
pub fn run_list() {
    println!("Tools:");
    for op in Operation::iter() {
        println!("  {:<26} {}", op.as_str(), op.description());
    }
    println!("\nResources:");
    for gesture in Gesture::iter() {
        println!("  {:<26} {}", gesture.uri(), gesture.title());
    }
}
