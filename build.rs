//! Forwards the `NUM_MODULAR_TARGET_BIT_WIDTH` environment variable (if set)
//! into a `target_bit_width_override` cfg, so that code which wants to pin
//! the native ALU width independently of `target_pointer_width` can do so at
//! build time without editing source. See DESIGN.md / SPEC_FULL.md section 4.K.

fn main() {
    println!("cargo:rerun-if-env-changed=NUM_MODULAR_TARGET_BIT_WIDTH");

    if let Ok(width) = std::env::var("NUM_MODULAR_TARGET_BIT_WIDTH") {
        match width.as_str() {
            "8" | "16" | "32" | "64" | "128" => {
                println!("cargo:rustc-cfg=target_bit_width_override=\"{}\"", width);
            }
            other => {
                println!(
                    "cargo:warning=NUM_MODULAR_TARGET_BIT_WIDTH={} is not one of 8/16/32/64/128, ignoring",
                    other
                );
            }
        }
    }
}
