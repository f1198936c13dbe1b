//! Character metadata for Glyphtone.
//!
//! Parses `UnicodeData.txt` into a JSON dataset, serves lookups from it, and
//! falls back to range heuristics when the dataset is absent. Metadata only
//! enriches labels; it never changes conversion output.

pub mod block;
mod error;
pub mod fallback;
pub mod parse;
mod record;
pub mod store;

pub use block::{UNKNOWN_BLOCK, block_name};
pub use error::UcdError;
pub use parse::parse_unicode_data;
pub use record::{BlockMember, CharacterRecord};
pub use store::{CharacterLookup, CharacterService, Dataset};
