//! Binary for building WASM contracts from odra modules.
#![doc = "Binary for building WASM contracts from odra modules."]

#[allow(unused_imports)]
use collateral_lender;

fn main() {
    // Compilation to WASM is driven by the odra-build crate
}
