//! Illustration assets referenced by instructions and advice.
//!
//! Images are hosted externally; only their ids live here.

pub const TWO_STEP: &str = "1Ehdh59aAnE8WTl1ux09DUfxl0qj56o1q";
pub const SQUAT: &str = "1PccA9V5HlFUg-PPvRPUTfRToEzrLjpgl";
pub const ONE_LEG_STAND: &str = "1-fDLR8-zBu8ShoPNEUXvpRmACKP3ty4W";
pub const FOOD: &str = "19RGO251loIUZTMFfOham9uVX69r7tUnb";
pub const STAND_UP: &str = "1tcgeh4MCjzQ57PVwCpaQSkU8LdpxeAMP";

/// Embeddable URL for a hosted image. The thumbnail endpoint is used
/// because it serves a plain image at 1200px width.
pub fn image_url(id: &str) -> String {
    format!("https://drive.google.com/thumbnail?id={id}&sz=w1200")
}
