//! Command line prefixes shared by the parsers

use crate::logic::tokenizer::Prefix;

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_NRIC: Prefix = Prefix::new("nr/");
pub const PREFIX_TYPE: Prefix = Prefix::new("ty/");
pub const PREFIX_PROCEDURE: Prefix = Prefix::new("pr/");
pub const PREFIX_DATE_TIME: Prefix = Prefix::new("dt/");
pub const PREFIX_DOCTOR: Prefix = Prefix::new("dr/");
