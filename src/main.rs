//! `alianza_rust` (aps) - NGO help-request intake and tracking console
//!
//! A Rust rendition of the Alianza case-intake core: JSON document storage,
//! ticket-number tracking, and a validated multi-step intake workflow.
//! Non-invasive design: no daemon, no database, no background processes.

use alianza_rust::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
