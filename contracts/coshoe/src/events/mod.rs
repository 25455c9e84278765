mod builder;

pub(crate) mod nep171;

mod shoe;

pub(crate) use shoe::*;

pub(crate) const STANDARD: &str = "coshoe";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const SHOE: &str = "SHOE_UPDATE";
